//! Use-Cases für die Feature-Selektion.

use crate::app::AppState;
use crate::core::{feature_id, FeatureType};
use crate::map::{MapHandle, PaintProperty, ScreenPoint};

/// Setzt die Hervorhebung eines Features (Linienbreite bzw. Deckkraft).
fn apply_emphasis(
    state: &AppState,
    map: &mut dyn MapHandle,
    id: &str,
    selected: bool,
) -> anyhow::Result<()> {
    let Some(key) = state.registry.feature_key(id) else {
        log::debug!("Hervorhebung: {} nicht registriert", id);
        return Ok(());
    };
    if !map.has_layer(id) {
        return Ok(());
    }
    let value = state.options.emphasis(key.feature_type, selected);
    let property = if key.feature_type.is_path() {
        PaintProperty::LineWidth(value)
    } else {
        PaintProperty::FillOpacity(value)
    };
    map.set_paint_property(id, property)
}

/// Selektiert ein Feature per ID. Die vorherige Selektion wird zurückgesetzt.
pub fn select_feature_id(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    id: &str,
) -> anyhow::Result<()> {
    if state.selected_feature() == Some(id) {
        return Ok(());
    }
    if let Some(prev) = state.selection.selected_feature.take() {
        apply_emphasis(state, map, &prev, false)?;
    }
    apply_emphasis(state, map, id, true)?;
    state.selection.selected_feature = Some(id.to_string());
    log::info!("Feature {} selektiert", id);
    Ok(())
}

/// Selektiert ein Feature des angezeigten Tees per Loch und Typ.
pub fn select_feature(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    hole: u32,
    feature_type: FeatureType,
    explicit_id: Option<String>,
) -> anyhow::Result<()> {
    let id = match explicit_id {
        Some(id) => id,
        None => feature_id(state.displayed_tee()?, hole, feature_type),
    };
    select_feature_id(state, map, &id)
}

/// Selektiert das oberste Feature des angezeigten Tees unter einem Klickpunkt.
///
/// Ein Klick ins Leere hebt die Selektion auf.
pub fn select_feature_at(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    point: ScreenPoint,
) -> anyhow::Result<()> {
    let Some(tee) = state.displayed_tee.as_deref() else {
        return clear_selection(state, map);
    };
    let entry = state.registry.tee(tee)?;
    let layers: Vec<String> = entry
        .path_ids
        .iter()
        .chain(entry.poly_ids.iter())
        .cloned()
        .collect();

    match map.query_rendered_features(point, &layers).into_iter().next() {
        Some(id) => select_feature_id(state, map, &id),
        None => clear_selection(state, map),
    }
}

/// Hebt die Selektion auf und stellt die normale Darstellung wieder her.
pub fn clear_selection(state: &mut AppState, map: &mut dyn MapHandle) -> anyhow::Result<()> {
    if let Some(prev) = state.selection.selected_feature.take() {
        apply_emphasis(state, map, &prev, false)?;
        log::debug!("Selektion von {} aufgehoben", prev);
    }
    Ok(())
}
