//! Freigabe der Anlege-Buttons in der Loch-Tabelle.
//!
//! Pro Tee gibt es genau eine nächste Einfügestelle: der erste noch
//! undefinierte Slot der Route golf(1), transition(2), golf(2), …,
//! transition(N), golf(N), start(1), finish(N) bzw. der Polygone teebox(1),
//! green(1), …, teebox(N), green(N). Start- und Ziellinie gehören nur zur
//! Route, solange ihr Schalter an ist.

use crate::app::AppState;
use crate::core::{FeatureType, MapperError, Tee};

fn route_sequence(hole_count: u32) -> impl Iterator<Item = (u32, FeatureType)> {
    (1..=hole_count).flat_map(|hole| {
        let transition = (hole > 1).then_some((hole, FeatureType::TransitionPath));
        transition
            .into_iter()
            .chain(std::iter::once((hole, FeatureType::GolfPath)))
    })
}

/// Route inklusive der eingeschalteten Start- und Ziellinie.
fn path_sequence(state: &AppState, hole_count: u32) -> impl Iterator<Item = (u32, FeatureType)> {
    let start = state
        .sf_visibility
        .allows(FeatureType::StartPath)
        .then_some((1, FeatureType::StartPath));
    let finish = state
        .sf_visibility
        .allows(FeatureType::FinishPath)
        .then_some((hole_count, FeatureType::FinishPath));
    route_sequence(hole_count).chain(start).chain(finish)
}

fn polygon_sequence(hole_count: u32) -> impl Iterator<Item = (u32, FeatureType)> {
    (1..=hole_count)
        .flat_map(|hole| [(hole, FeatureType::Teebox), (hole, FeatureType::Green)])
}

fn next_undefined(
    tee: &Tee,
    mut sequence: impl Iterator<Item = (u32, FeatureType)>,
) -> Option<(u32, FeatureType)> {
    sequence.find(|&(hole, ft)| !tee.is_defined(hole, ft))
}

/// `true` wenn `(hole, path_type)` die nächste Einfügestelle für Pfade ist.
///
/// Start- und Ziellinie folgen auf den letzten Golf-Pfad, jeweils nur an
/// ihrem Loch (1 bzw. N).
pub fn enable_path_creation(
    state: &AppState,
    hole: u32,
    path_type: FeatureType,
) -> Result<bool, MapperError> {
    path_type.require_path()?;
    let tee = state.active_tee()?;
    Ok(next_undefined(tee, path_sequence(state, tee.hole_count())) == Some((hole, path_type)))
}

/// `true` wenn `(hole, poly_type)` die nächste Einfügestelle für Polygone ist.
pub fn enable_poly_creation(
    state: &AppState,
    hole: u32,
    poly_type: FeatureType,
) -> Result<bool, MapperError> {
    poly_type.require_polygon()?;
    let tee = state.active_tee()?;
    Ok(next_undefined(tee, polygon_sequence(tee.hole_count())) == Some((hole, poly_type)))
}

/// `true` wenn Start- bzw. Ziellinie angelegt werden kann.
///
/// Voraussetzung: Slot noch leer, Schalter an und der angrenzende
/// Golf-Pfad (Loch 1 bzw. letztes Loch) existiert.
pub fn enable_start_finish_creation(
    state: &AppState,
    path_type: FeatureType,
) -> Result<bool, MapperError> {
    let tee = state.active_tee()?;
    let hole = match path_type {
        FeatureType::StartPath => 1,
        FeatureType::FinishPath => tee.hole_count(),
        other => return Err(MapperError::NotAStartFinishType(other.tag().to_string())),
    };
    Ok(!tee.is_defined(hole, path_type)
        && state.sf_visibility.allows(path_type)
        && tee.is_defined(hole, FeatureType::GolfPath))
}

/// Nächste Einfügestelle der Route (für UI-Hinweise).
pub fn next_path_slot(state: &AppState) -> Result<Option<(u32, FeatureType)>, MapperError> {
    let tee = state.active_tee()?;
    Ok(next_undefined(tee, path_sequence(state, tee.hole_count())))
}
