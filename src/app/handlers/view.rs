//! Handler für Anzeige-Operationen (Tee-Wechsel, Schalter, Popups).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::FeatureType;
use crate::map::{MapHandle, MarkerId};

/// Zeigt ein Tee an.
pub fn display_tee(state: &mut AppState, map: &mut dyn MapHandle, tee: &str) -> anyhow::Result<()> {
    use_cases::render::display_features_for_tee(state, map, tee)
}

/// Blendet Start- bzw. Ziellinie ein/aus.
pub fn set_start_finish_visibility(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    feature_type: FeatureType,
    show: bool,
) -> anyhow::Result<()> {
    use_cases::render::set_start_finish_visibility(state, map, feature_type, show)
}

/// Öffnet/schließt ein Marker-Popup.
pub fn set_marker_popup(map: &mut dyn MapHandle, marker: MarkerId, open: bool) {
    use_cases::markers::set_marker_popup(map, marker, open);
}
