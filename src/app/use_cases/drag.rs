//! Use-Case: Marker losgelassen → abhängige Pfade nachziehen.

use super::render;
use crate::app::snap::marker_endpoints;
use crate::app::AppState;
use crate::core::{FeatureCoords, GeoPoint, HoleFeatureUpdate, LngLat};
use crate::map::{MapHandle, MarkerId};
use crate::shared::geo_math::resample_path;

/// Setzt alle Pfad-Enden an einem Marker auf dessen neue Position.
///
/// Jeder betroffene Pfad wird ohne Marker-Erzeugung neu gezeichnet,
/// abgetastet und committet. Fehlende Nachbarpfade werden übersprungen.
/// Gibt die Anzahl der aktualisierten Pfade zurück.
pub fn move_marker_endpoint(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    marker: MarkerId,
    position: LngLat,
) -> anyhow::Result<usize> {
    let Some(binding) = state.registry.marker_binding(marker).cloned() else {
        log::debug!("Drag-Ende für unbekannten Marker {:?} ignoriert", marker);
        return Ok(0);
    };
    map.set_marker_position(marker, position);

    let fallback = state.options.fallback_elevation_feet;
    let new_point = GeoPoint::at(position, map.terrain_elevation_feet(position, fallback));
    let hole_count = state.course.course().tee(&binding.tee)?.hole_count();

    let mut updated = 0;
    for ep in marker_endpoints(hole_count, binding.hole, binding.role) {
        let Some(path) = state
            .course
            .course()
            .tee(&binding.tee)?
            .path(ep.hole, ep.feature_type)
        else {
            continue;
        };
        let mut points = path.to_vec();
        if let Some(p) = ep.end.of_mut(&mut points) {
            *p = new_point;
        }

        let coords = FeatureCoords::Path(points.clone());
        render::add_feature(state, map, &binding.tee, ep.hole, &coords, ep.feature_type, false)?;
        let sampled = resample_path(&points, state.options.sampling_distance_feet, |c| {
            map.query_terrain_elevation_feet(c)
        });
        state.course.commit(HoleFeatureUpdate {
            tee: binding.tee.clone(),
            hole_num: ep.hole,
            feature_type: ep.feature_type,
            feature_coords: Some(coords),
            sampled_path_coords: Some(sampled),
        })?;
        updated += 1;
    }

    log::info!(
        "{} verschoben: {} Pfad(e) aktualisiert",
        binding.role.popup_text(binding.hole),
        updated
    );
    Ok(updated)
}
