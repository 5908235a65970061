//! Use-Cases für die Darstellung von Features auf der Karte.
//!
//! Ein Feature wird als GeoJSON-Source plus Layer mit der Feature-ID als
//! Namen angelegt. Pfade bekommen zusätzlich einen Label-Layer auf derselben
//! Source. Ersetzen eines vorhandenen Features passiert innerhalb eines
//! `&mut`-Aufrufs: erst alte Layer entfernen, dann neu anlegen.

use super::markers;
use crate::app::feature_registry::IdKind;
use crate::app::AppState;
use crate::core::{label_id, FeatureCoords, FeatureKey, FeatureType, MapperError, MarkerRole};
use crate::map::{
    line_string_source, polygon_source, LayerDef, LayerKind, MapHandle, Visibility,
};
use crate::shared::geo_math::{feet_to_yards, path_length_feet};

/// Label-Text eines Pfads: Loch, Typ und Länge in Yards.
pub fn path_label_text(hole: u32, feature_type: FeatureType, coords: &FeatureCoords) -> String {
    let yards = match coords {
        FeatureCoords::Path(points) => feet_to_yards(path_length_feet(points)),
        FeatureCoords::Polygon(_) => 0.0,
    };
    format!("{} {} ({:.0} yd)", hole, feature_type.display_name(), yards)
}

/// `true` wenn ein Feature des Tees aktuell sichtbar sein soll.
fn should_show(state: &AppState, tee: &str, feature_type: FeatureType) -> bool {
    state.displayed_tee.as_deref() == Some(tee) && state.sf_visibility.allows(feature_type)
}

/// Entfernt Label, Layer und Source einer Feature-ID von der Karte (falls vorhanden).
pub fn remove_feature_layers(map: &mut dyn MapHandle, id: &str) -> anyhow::Result<()> {
    let label = label_id(id);
    if map.has_layer(&label) {
        map.remove_layer(&label)?;
    }
    if map.has_layer(id) {
        map.remove_layer(id)?;
    }
    if map.has_source(id) {
        map.remove_source(id)?;
    }
    Ok(())
}

/// Zeichnet ein Feature und registriert seine IDs.
///
/// Leere Koordinaten sind ein No-op. Ein vorhandenes Feature mit derselben
/// ID wird ersetzt. Mit `create_markers` legt ein Pfad die an seinen Enden
/// hängenden Marker an (bzw. verschiebt vorhandene).
pub fn add_feature(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    tee: &str,
    hole: u32,
    coords: &FeatureCoords,
    feature_type: FeatureType,
    create_markers: bool,
) -> anyhow::Result<()> {
    if coords.is_empty() {
        log::debug!("Loch {} {}: keine Koordinaten, nichts zu zeichnen", hole, feature_type);
        return Ok(());
    }
    // Fehlender Registry-Eintrag ist eine Protokollverletzung
    state.registry.tee(tee)?;

    let key = FeatureKey::new(tee, hole, feature_type);
    let id = key.id();
    remove_feature_layers(map, &id)?;

    let selected = state.selected_feature() == Some(id.as_str());
    let visibility = Visibility::from_visible(should_show(state, tee, feature_type));
    let color = state.options.colors.for_type(feature_type).to_string();
    let emphasis = state.options.emphasis(feature_type, selected);
    let lng_lats = coords.lng_lats();

    if feature_type.is_path() {
        map.add_source(&id, line_string_source(&lng_lats))?;
        map.add_layer(LayerDef {
            id: id.clone(),
            source: id.clone(),
            kind: LayerKind::Line {
                color,
                width: emphasis,
            },
            visibility,
        })?;
        let label = key.label_id();
        map.add_layer(LayerDef {
            id: label.clone(),
            source: id.clone(),
            kind: LayerKind::Label {
                text: path_label_text(hole, feature_type, coords),
            },
            visibility,
        })?;
        state.registry.register(tee, IdKind::Path, &id)?;
        state.registry.register(tee, IdKind::Label, &label)?;
    } else {
        map.add_source(&id, polygon_source(&lng_lats))?;
        map.add_layer(LayerDef {
            id: id.clone(),
            source: id.clone(),
            kind: LayerKind::Fill {
                color,
                opacity: emphasis,
            },
            visibility,
        })?;
        state.registry.register(tee, IdKind::Poly, &id)?;
    }
    state.registry.bind_feature(&id, key);
    log::debug!("Feature {} gezeichnet ({} Punkte)", id, coords.len());

    if create_markers && feature_type.is_path() {
        markers::ensure_path_markers(state, map, tee, hole, feature_type, &lng_lats)?;
    }
    Ok(())
}

/// Entfernt ein Feature von der Karte und aus der Registry.
pub fn remove_feature(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    tee: &str,
    id: &str,
) -> anyhow::Result<()> {
    remove_feature_layers(map, id)?;
    state.registry.unregister(tee, IdKind::Path, id)?;
    state.registry.unregister(tee, IdKind::Label, &label_id(id))?;
    state.registry.unregister(tee, IdKind::Poly, id)?;
    state.registry.unbind_feature(id);
    log::debug!("Feature {} entfernt", id);
    Ok(())
}

/// Blendet alle Elemente eines Tees ein oder aus.
///
/// Beim Einblenden bleiben Start-/Ziellinie samt Marker ausgeblendet, wenn
/// ihr Schalter aus ist.
pub fn set_tee_visibility(
    state: &AppState,
    map: &mut dyn MapHandle,
    tee: &str,
    visible: bool,
) -> anyhow::Result<()> {
    let entry = state.registry.tee(tee)?;
    for id in &entry.path_ids {
        let allowed = state
            .registry
            .feature_key(id)
            .is_none_or(|key| state.sf_visibility.allows(key.feature_type));
        let show = visible && allowed;
        if map.has_layer(id) {
            map.set_layer_visibility(id, show)?;
        }
        let label = label_id(id);
        if map.has_layer(&label) {
            map.set_layer_visibility(&label, show)?;
        }
    }
    for id in &entry.poly_ids {
        if map.has_layer(id) {
            map.set_layer_visibility(id, visible)?;
        }
    }
    for (role, marker) in entry.all_markers() {
        let allowed = match role {
            MarkerRole::Start => state.sf_visibility.start,
            MarkerRole::Finish => state.sf_visibility.finish,
            MarkerRole::Tee | MarkerRole::Flag => true,
        };
        map.set_marker_visibility(marker, visible && allowed);
    }
    Ok(())
}

/// Zeigt die Features eines Tees an.
///
/// Das vorher angezeigte Tee wird ausgeblendet (nicht entfernt). Ein bereits
/// registriertes Tee wird nur wieder eingeblendet, ein neues wird aus den
/// Kursdaten in fester Slot-Reihenfolge aufgebaut.
pub fn display_features_for_tee(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    new_tee: &str,
) -> anyhow::Result<()> {
    let tee_data = state.course.course().tee(new_tee)?.clone();

    if let Some(prev) = state.displayed_tee.clone() {
        if prev != new_tee && state.registry.contains_tee(&prev) {
            set_tee_visibility(state, map, &prev, false)?;
            log::debug!("Tee '{}' ausgeblendet", prev);
        }
    }
    state.displayed_tee = Some(new_tee.to_string());

    if state.registry.contains_tee(new_tee) {
        set_tee_visibility(state, map, new_tee, true)?;
        log::info!("Tee '{}' wieder eingeblendet", new_tee);
        return Ok(());
    }

    let hole_count = tee_data.hole_count();
    state.registry.ensure_tee(new_tee, hole_count);
    let mut drawn = 0usize;
    for hole in &tee_data.holes {
        for feature_type in FeatureType::SLOT_ORDER {
            let boundary_ok = match feature_type {
                FeatureType::StartPath => hole.number == 1,
                FeatureType::TransitionPath => hole.number > 1,
                FeatureType::FinishPath => hole.number == hole_count,
                _ => true,
            };
            let Some(coords) = hole.feature_coords(feature_type) else {
                continue;
            };
            if !boundary_ok {
                log::warn!(
                    "Tee '{}', Loch {}: {} an dieser Stelle nicht erlaubt, übersprungen",
                    new_tee,
                    hole.number,
                    feature_type
                );
                continue;
            }
            add_feature(state, map, new_tee, hole.number, &coords, feature_type, true)?;
            drawn += 1;
        }
    }
    log::info!(
        "Tee '{}' aufgebaut: {} Löcher, {} Features",
        new_tee,
        hole_count,
        drawn
    );
    Ok(())
}

/// Blendet Start- oder Ziellinie samt Label und Marker ein/aus.
pub fn set_start_finish_visibility(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    feature_type: FeatureType,
    show: bool,
) -> anyhow::Result<()> {
    let role = match feature_type {
        FeatureType::StartPath => {
            state.sf_visibility.start = show;
            MarkerRole::Start
        }
        FeatureType::FinishPath => {
            state.sf_visibility.finish = show;
            MarkerRole::Finish
        }
        other => return Err(MapperError::NotAStartFinishType(other.tag().to_string()).into()),
    };

    let Some(tee) = state.displayed_tee.clone() else {
        log::debug!("{} {}: kein Tee angezeigt", feature_type, if show { "an" } else { "aus" });
        return Ok(());
    };
    let hole_count = state.course.course().tee(&tee)?.hole_count();
    let hole = if role == MarkerRole::Start { 1 } else { hole_count };
    let id = FeatureKey::new(tee.as_str(), hole, feature_type).id();

    for layer in [id.clone(), label_id(&id)] {
        if map.has_layer(&layer) {
            map.set_layer_visibility(&layer, show)?;
        }
    }
    if let Some(marker) = state.registry.marker(&tee, hole, role)? {
        map.set_marker_visibility(marker, show);
    }
    log::info!(
        "{} für Tee '{}' {}",
        feature_type.display_name(),
        tee,
        if show { "eingeblendet" } else { "ausgeblendet" }
    );
    Ok(())
}
