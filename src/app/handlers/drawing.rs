//! Handler für den Zeichen-Lebenszyklus (Define → Commit/Cancel).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::FeatureType;
use crate::map::{DrawTool, MapHandle};

/// Wechselt in den Zeichenmodus für ein Feature.
pub fn begin_define(
    state: &mut AppState,
    draw: &mut dyn DrawTool,
    hole: u32,
    feature_type: FeatureType,
) -> anyhow::Result<()> {
    use_cases::define::begin_define_feature(state, draw, hole, feature_type)
}

/// Übernimmt die gezeichnete Geometrie.
pub fn commit(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    draw: &mut dyn DrawTool,
) -> anyhow::Result<()> {
    use_cases::define::commit_drawn_feature(state, map, draw)
}

/// Verwirft die laufende Zeichnung.
pub fn cancel(state: &mut AppState, draw: &mut dyn DrawTool) {
    use_cases::define::cancel_draw(state, draw);
}
