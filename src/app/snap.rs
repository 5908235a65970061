//! Snap-Regeln für Pfad-Endpunkte und die daraus gespiegelte Marker-Nachbarschaft.
//!
//! Beim Zeichnen eines Pfads wird dessen Start- bzw. Endpunkt auf den
//! Endpunkt eines benachbarten, bereits definierten Pfads gezwungen, damit
//! die Route eines Lochs lückenlos bleibt. Sonderfälle gibt es an Loch 1
//! und am letzten Loch: der Start der Ziellinie snappt auf das Ende des
//! Golf-Pfads des vorletzten Lochs, das Ende des letzten Golf-Pfads auf den
//! Start der Ziellinie.
//!
//! Dieselbe Nachbarschaft bestimmt, welche Marker an einem Pfad hängen
//! ([`path_markers`]) und welche Pfad-Endpunkte an einem Marker hängen
//! ([`marker_endpoints`]). Der Start der Ziellinie hängt daher an beiden
//! Flaggen: an der des letzten und an der des vorletzten Lochs.

use crate::core::{FeatureType, GeoPoint, MapperError, MarkerRole, Tee};

/// Ende eines Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathEnd {
    /// Erster Punkt
    First,
    /// Letzter Punkt
    Last,
}

impl PathEnd {
    /// Punkt an diesem Ende.
    pub fn of<T: Copy>(self, points: &[T]) -> Option<T> {
        match self {
            PathEnd::First => points.first().copied(),
            PathEnd::Last => points.last().copied(),
        }
    }

    /// Mutabler Punkt an diesem Ende.
    pub fn of_mut<T>(self, points: &mut [T]) -> Option<&mut T> {
        match self {
            PathEnd::First => points.first_mut(),
            PathEnd::Last => points.last_mut(),
        }
    }
}

/// Pfad-Endpunkt, der an einem Marker hängt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointRef {
    /// Loch des Pfads
    pub hole: u32,
    /// Pfad-Typ
    pub feature_type: FeatureType,
    /// Betroffenes Ende
    pub end: PathEnd,
}

/// Marker-Platz `(hole, role)`, der an einem Pfad-Ende hängt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSlot {
    /// Loch des Markers
    pub hole: u32,
    /// Rolle
    pub role: MarkerRole,
    /// Pfad-Ende an der Marker-Position
    pub end: PathEnd,
}

fn endpoint(tee: &Tee, hole: u32, feature_type: FeatureType, end: PathEnd) -> Option<GeoPoint> {
    end.of(tee.path(hole, feature_type)?)
}

/// Erzwungener Startpunkt für einen neu gezeichneten Pfad.
pub fn snap_start_vertex(
    tee: &Tee,
    hole: u32,
    feature_type: FeatureType,
) -> Result<Option<GeoPoint>, MapperError> {
    let snapped = match feature_type.require_path()? {
        FeatureType::GolfPath if hole == 1 => {
            endpoint(tee, 1, FeatureType::StartPath, PathEnd::Last)
        }
        FeatureType::GolfPath => endpoint(tee, hole, FeatureType::TransitionPath, PathEnd::Last),
        FeatureType::TransitionPath if hole > 1 => {
            endpoint(tee, hole - 1, FeatureType::GolfPath, PathEnd::Last)
        }
        FeatureType::FinishPath => tee
            .hole_count()
            .checked_sub(1)
            .and_then(|prev| endpoint(tee, prev, FeatureType::GolfPath, PathEnd::Last)),
        _ => None,
    };
    Ok(snapped)
}

/// Erzwungener Endpunkt für einen neu gezeichneten Pfad.
pub fn snap_end_vertex(
    tee: &Tee,
    hole: u32,
    feature_type: FeatureType,
) -> Result<Option<GeoPoint>, MapperError> {
    let last = tee.hole_count();
    let snapped = match feature_type.require_path()? {
        FeatureType::GolfPath => {
            let finish = if hole == last {
                endpoint(tee, hole, FeatureType::FinishPath, PathEnd::First)
            } else {
                None
            };
            finish.or_else(|| endpoint(tee, hole + 1, FeatureType::TransitionPath, PathEnd::First))
        }
        FeatureType::TransitionPath if hole < last => {
            endpoint(tee, hole, FeatureType::GolfPath, PathEnd::First)
        }
        FeatureType::StartPath => endpoint(tee, 1, FeatureType::GolfPath, PathEnd::First),
        _ => None,
    };
    Ok(snapped)
}

/// Marker, die ein Pfad beim Anlegen an seinen Enden erzeugt.
pub fn path_markers(
    hole_count: u32,
    hole: u32,
    feature_type: FeatureType,
) -> Result<Vec<MarkerSlot>, MapperError> {
    let slot = |hole, role, end| MarkerSlot { hole, role, end };
    let slots = match feature_type.require_path()? {
        FeatureType::GolfPath => vec![
            slot(hole, MarkerRole::Tee, PathEnd::First),
            slot(hole, MarkerRole::Flag, PathEnd::Last),
        ],
        FeatureType::TransitionPath if hole > 1 => vec![
            slot(hole - 1, MarkerRole::Flag, PathEnd::First),
            slot(hole, MarkerRole::Tee, PathEnd::Last),
        ],
        // Loch 1 hat keinen Übergang
        FeatureType::TransitionPath => Vec::new(),
        FeatureType::StartPath => vec![
            slot(1, MarkerRole::Start, PathEnd::First),
            slot(1, MarkerRole::Tee, PathEnd::Last),
        ],
        _ => vec![slot(hole_count, MarkerRole::Finish, PathEnd::Last)],
    };
    Ok(slots)
}

/// Pfad-Endpunkte, die an der Position eines Markers liegen.
///
/// Ein Marker wird gebraucht, solange mindestens einer dieser Pfade
/// definiert ist. Beim Verschieben des Markers werden genau diese Enden
/// nachgezogen.
pub fn marker_endpoints(hole_count: u32, hole: u32, role: MarkerRole) -> Vec<EndpointRef> {
    let ep = |hole, feature_type, end| EndpointRef {
        hole,
        feature_type,
        end,
    };
    match role {
        MarkerRole::Tee => {
            let incoming = if hole == 1 {
                ep(1, FeatureType::StartPath, PathEnd::Last)
            } else {
                ep(hole, FeatureType::TransitionPath, PathEnd::Last)
            };
            vec![incoming, ep(hole, FeatureType::GolfPath, PathEnd::First)]
        }
        MarkerRole::Flag => {
            let mut refs = vec![ep(hole, FeatureType::GolfPath, PathEnd::Last)];
            if hole < hole_count {
                refs.push(ep(hole + 1, FeatureType::TransitionPath, PathEnd::First));
            } else {
                refs.push(ep(hole, FeatureType::FinishPath, PathEnd::First));
            }
            if hole_count > 1 && hole + 1 == hole_count {
                refs.push(ep(hole_count, FeatureType::FinishPath, PathEnd::First));
            }
            refs
        }
        MarkerRole::Start => vec![ep(1, FeatureType::StartPath, PathEnd::First)],
        MarkerRole::Finish => vec![ep(hole_count, FeatureType::FinishPath, PathEnd::Last)],
    }
}
