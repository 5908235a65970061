//! Feature-Typen, Marker-Rollen und deterministische Feature-IDs.

use super::error::MapperError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suffix, das aus einer Feature-ID die ID des Label-Layers macht.
pub const LABEL_ID_SUFFIX: &str = "-label";

/// Maximale Lochanzahl, für die die zweistellige ID-Kodierung eindeutig bleibt.
pub const MAX_HOLES: u32 = 99;

/// Rolle eines gezeichneten Features an einem Loch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureType {
    /// Startlinie → Tee von Loch 1 (nur Loch 1)
    StartPath,
    /// Flagge des Vorlochs → Tee dieses Lochs (Loch ≥ 2)
    TransitionPath,
    /// Tee → Flagge innerhalb eines Lochs
    GolfPath,
    /// Flagge des letzten Lochs → Ziellinie (nur letztes Loch)
    FinishPath,
    /// Abschlagfläche (Polygon)
    Teebox,
    /// Grün (Polygon)
    Green,
}

impl FeatureType {
    /// Alle Typen in der Slot-Reihenfolge für den Erstaufbau eines Tees.
    pub const SLOT_ORDER: [FeatureType; 6] = [
        FeatureType::StartPath,
        FeatureType::TransitionPath,
        FeatureType::GolfPath,
        FeatureType::FinishPath,
        FeatureType::Teebox,
        FeatureType::Green,
    ];

    /// Tag für ID-Kodierung und Persistenz.
    ///
    /// Kein Tag ist Präfix eines anderen, daher ist [`FeatureKey::id`] injektiv.
    pub fn tag(self) -> &'static str {
        match self {
            FeatureType::StartPath => "startPath",
            FeatureType::TransitionPath => "transitionPath",
            FeatureType::GolfPath => "golfPath",
            FeatureType::FinishPath => "finishPath",
            FeatureType::Teebox => "teebox",
            FeatureType::Green => "green",
        }
    }

    /// `true` für Linien-Features.
    pub fn is_path(self) -> bool {
        matches!(
            self,
            FeatureType::StartPath
                | FeatureType::TransitionPath
                | FeatureType::GolfPath
                | FeatureType::FinishPath
        )
    }

    /// `true` für Polygon-Features.
    pub fn is_polygon(self) -> bool {
        !self.is_path()
    }

    /// Stellt sicher, dass es sich um einen Pfad-Typ handelt.
    pub fn require_path(self) -> Result<Self, MapperError> {
        if self.is_path() {
            Ok(self)
        } else {
            Err(MapperError::NotAPathType(self.tag().to_string()))
        }
    }

    /// Stellt sicher, dass es sich um einen Polygon-Typ handelt.
    pub fn require_polygon(self) -> Result<Self, MapperError> {
        if self.is_polygon() {
            Ok(self)
        } else {
            Err(MapperError::NotAPolygonType(self.tag().to_string()))
        }
    }

    /// Lesbarer Name für Labels und Popups.
    pub fn display_name(self) -> &'static str {
        match self {
            FeatureType::StartPath => "Start",
            FeatureType::TransitionPath => "Transition",
            FeatureType::GolfPath => "Golf",
            FeatureType::FinishPath => "Finish",
            FeatureType::Teebox => "Teebox",
            FeatureType::Green => "Green",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FeatureType {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureType::SLOT_ORDER
            .into_iter()
            .find(|ft| ft.tag() == s)
            .ok_or_else(|| MapperError::UnknownFeatureType(s.to_string()))
    }
}

/// Rolle eines Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    /// Abschlag eines Lochs
    Tee,
    /// Flagge eines Lochs
    Flag,
    /// Globale Startlinie (Loch 1)
    Start,
    /// Globale Ziellinie (letztes Loch)
    Finish,
}

impl MarkerRole {
    /// Popup-Text des Markers.
    pub fn popup_text(self, hole: u32) -> String {
        match self {
            MarkerRole::Tee => format!("Hole {hole} Tee"),
            MarkerRole::Flag => format!("Hole {hole} Flag"),
            MarkerRole::Start => "Start".to_string(),
            MarkerRole::Finish => "Finish".to_string(),
        }
    }
}

/// Strukturierter Schlüssel eines Features: (Tee, Loch, Typ).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureKey {
    /// Tee-Name
    pub tee: String,
    /// Lochnummer (1-basiert, ≤ [`MAX_HOLES`])
    pub hole: u32,
    /// Feature-Typ
    pub feature_type: FeatureType,
}

impl FeatureKey {
    /// Erstellt einen Schlüssel.
    pub fn new(tee: impl Into<String>, hole: u32, feature_type: FeatureType) -> Self {
        Self {
            tee: tee.into(),
            hole,
            feature_type,
        }
    }

    /// Deterministische Layer-/Source-ID: zweistelliges Loch + Tag + Tee-Name.
    pub fn id(&self) -> String {
        feature_id(&self.tee, self.hole, self.feature_type)
    }

    /// ID des zugehörigen Label-Layers.
    pub fn label_id(&self) -> String {
        label_id(&self.id())
    }
}

/// Deterministische Feature-ID ohne Umweg über [`FeatureKey`].
pub fn feature_id(tee: &str, hole: u32, feature_type: FeatureType) -> String {
    format!("{:02}{}{}", hole, feature_type.tag(), tee)
}

/// Label-ID zu einer Feature-ID.
pub fn label_id(feature_id: &str) -> String {
    format!("{feature_id}{LABEL_ID_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_feature_id_is_padded_and_stable() {
        let key = FeatureKey::new("Blue", 3, FeatureType::GolfPath);
        assert_eq!(key.id(), "03golfPathBlue");
        assert_eq!(key.id(), FeatureKey::new("Blue", 3, FeatureType::GolfPath).id());
        assert_eq!(key.label_id(), "03golfPathBlue-label");
    }

    #[test]
    fn test_feature_ids_are_unique_within_tee() {
        let mut ids = HashSet::new();
        for hole in 1..=MAX_HOLES {
            for ft in FeatureType::SLOT_ORDER {
                assert!(ids.insert(feature_id("White", hole, ft)));
            }
        }
        // Tee-Namen, die mit Ziffern beginnen, kollidieren nicht mit anderen Löchern
        assert_ne!(
            feature_id("1", 1, FeatureType::Green),
            feature_id("", 11, FeatureType::Green)
        );
    }

    #[test]
    fn test_unknown_feature_type_fails_fast() {
        assert_eq!(
            "bunker".parse::<FeatureType>(),
            Err(MapperError::UnknownFeatureType("bunker".to_string()))
        );
        assert_eq!("golfPath".parse::<FeatureType>(), Ok(FeatureType::GolfPath));
    }

    #[test]
    fn test_require_path_rejects_polygons() {
        assert!(FeatureType::Teebox.require_path().is_err());
        assert!(FeatureType::FinishPath.require_path().is_ok());
        assert!(FeatureType::GolfPath.require_polygon().is_err());
    }
}
