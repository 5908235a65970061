//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::FeatureType;
use crate::map::{MapHandle, ScreenPoint};

/// Selektiert das Feature unter dem Klickpunkt (oder hebt die Selektion auf).
pub fn select_at(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    point: ScreenPoint,
) -> anyhow::Result<()> {
    use_cases::selection::select_feature_at(state, map, point)
}

/// Selektiert ein Feature über die Tabelle.
pub fn select(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    hole: u32,
    feature_type: FeatureType,
    explicit_id: Option<String>,
) -> anyhow::Result<()> {
    use_cases::selection::select_feature(state, map, hole, feature_type, explicit_id)
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState, map: &mut dyn MapHandle) -> anyhow::Result<()> {
    use_cases::selection::clear_selection(state, map)
}
