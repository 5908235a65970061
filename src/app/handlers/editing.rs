//! Handler für Lösch-, Drag- und Resampling-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::LngLat;
use crate::map::{MapHandle, MarkerId};

/// Löscht das selektierte Feature.
pub fn delete_selected(state: &mut AppState, map: &mut dyn MapHandle) -> anyhow::Result<()> {
    use_cases::delete::delete_selected_feature(state, map)
}

/// Zieht die Pfade an einem losgelassenen Marker nach.
pub fn move_marker_endpoint(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    marker: MarkerId,
    position: LngLat,
) -> anyhow::Result<()> {
    use_cases::drag::move_marker_endpoint(state, map, marker, position)?;
    Ok(())
}

/// Tastet alle Pfade eines Tees neu ab.
pub fn resample_tee(state: &mut AppState, map: &dyn MapHandle, tee: &str) -> anyhow::Result<()> {
    use_cases::resample::resample_tee(state, map, tee)?;
    Ok(())
}
