//! Use-Case: selektiertes Feature löschen.

use super::{markers, render};
use crate::app::AppState;
use crate::core::HoleFeatureUpdate;
use crate::map::MapHandle;

/// Löscht das selektierte Feature von Karte, Registry und Kurs.
///
/// Marker an den Enden eines gelöschten Pfads werden entfernt, sobald kein
/// benachbarter Pfad sie mehr braucht. Ohne Selektion passiert nichts.
pub fn delete_selected_feature(
    state: &mut AppState,
    map: &mut dyn MapHandle,
) -> anyhow::Result<()> {
    let Some(id) = state.selection.selected_feature.take() else {
        log::debug!("Löschen ohne Selektion ignoriert");
        return Ok(());
    };
    let Some(key) = state.registry.feature_key(&id).cloned() else {
        log::warn!("Selektiertes Feature {} ist nicht registriert", id);
        return Ok(());
    };

    render::remove_feature(state, map, &key.tee, &id)?;
    state.course.commit(HoleFeatureUpdate::cleared(
        key.tee.as_str(),
        key.hole,
        key.feature_type,
    ))?;
    if key.feature_type.is_path() {
        markers::remove_orphaned_markers(state, map, &key.tee, key.hole, key.feature_type)?;
    }

    log::info!(
        "{} an Loch {} (Tee '{}') gelöscht",
        key.feature_type,
        key.hole,
        key.tee
    );
    Ok(())
}
