//! Use-Cases für das Zeichnen neuer Features.
//!
//! Idle → Defining über [`begin_define_feature`], zurück nach Idle über
//! [`commit_drawn_feature`] oder [`cancel_draw`].

use super::render;
use crate::app::snap::{snap_end_vertex, snap_start_vertex};
use crate::app::state::InProgressFeature;
use crate::app::AppState;
use crate::core::{FeatureCoords, FeatureType, GeoPoint, HoleFeatureUpdate, LngLat};
use crate::map::{DrawMode, DrawTool, DrawnGeometry, MapHandle};
use crate::shared::geo_math::resample_path;

fn reset_draw_tool(draw: &mut dyn DrawTool) {
    draw.delete_all();
    draw.change_mode(DrawMode::SimpleSelect);
}

/// Startet das Zeichnen eines Features am angezeigten Tee.
pub fn begin_define_feature(
    state: &mut AppState,
    draw: &mut dyn DrawTool,
    hole: u32,
    feature_type: FeatureType,
) -> anyhow::Result<()> {
    let tee = state.displayed_tee()?.to_string();
    state.course.course().hole(&tee, hole)?;

    if let Some(prev) = state.drawing.take() {
        log::debug!(
            "Laufende Zeichnung ({} an Loch {}) verworfen",
            prev.feature_type,
            prev.hole
        );
        draw.delete_all();
    }

    let color = state.options.colors.for_type(feature_type).to_string();
    let mode = if feature_type.is_path() {
        DrawMode::DrawLineString { color }
    } else {
        DrawMode::DrawPolygon { color }
    };
    draw.change_mode(mode);
    state.drawing = Some(InProgressFeature { hole, feature_type });
    log::info!("Zeichne {} für Tee '{}', Loch {}", feature_type, tee, hole);
    Ok(())
}

/// Übernimmt die gezeichnete Geometrie.
///
/// Pfade werden an ihren Enden gesnappt, alle übrigen Stützpunkte erhalten
/// eine frisch abgefragte Höhe. Danach wird das Feature gezeichnet, bei
/// Pfaden abgetastet und als `UPDATE_HOLE_FEATURE` committet.
pub fn commit_drawn_feature(
    state: &mut AppState,
    map: &mut dyn MapHandle,
    draw: &mut dyn DrawTool,
) -> anyhow::Result<()> {
    let Some(InProgressFeature { hole, feature_type }) = state.drawing.take() else {
        log::debug!("Zeichnung abgeschlossen ohne laufendes Feature, ignoriert");
        reset_draw_tool(draw);
        return Ok(());
    };
    let drawn = draw.get_all().into_iter().last();
    reset_draw_tool(draw);
    let tee = state.displayed_tee()?.to_string();
    let Some(geometry) = drawn.filter(|g| !g.coords().is_empty()) else {
        log::info!("Keine Geometrie gezeichnet, {} an Loch {} verworfen", feature_type, hole);
        return Ok(());
    };

    let fallback = state.options.fallback_elevation_feet;
    let update = if feature_type.is_path() {
        let raw: Vec<LngLat> = match geometry {
            DrawnGeometry::LineString(c) | DrawnGeometry::Polygon(c) => c,
        };
        let mut points: Vec<GeoPoint> = raw
            .iter()
            .map(|&c| GeoPoint::at(c, map.terrain_elevation_feet(c, fallback)))
            .collect();

        let tee_data = state.course.course().tee(&tee)?;
        if let Some(start) = snap_start_vertex(tee_data, hole, feature_type)? {
            if let Some(first) = points.first_mut() {
                *first = start;
            }
            log::debug!("Startpunkt gesnappt auf ({:.6}, {:.6})", start.lat, start.lng);
        }
        if let Some(end) = snap_end_vertex(tee_data, hole, feature_type)? {
            if let Some(last) = points.last_mut() {
                *last = end;
            }
            log::debug!("Endpunkt gesnappt auf ({:.6}, {:.6})", end.lat, end.lng);
        }

        let coords = FeatureCoords::Path(points.clone());
        render::add_feature(state, map, &tee, hole, &coords, feature_type, true)?;

        let sampled = resample_path(&points, state.options.sampling_distance_feet, |c| {
            map.query_terrain_elevation_feet(c)
        });
        HoleFeatureUpdate {
            tee: tee.clone(),
            hole_num: hole,
            feature_type,
            feature_coords: Some(coords),
            sampled_path_coords: Some(sampled),
        }
    } else {
        let coords = FeatureCoords::Polygon(geometry.coords().to_vec());
        render::add_feature(state, map, &tee, hole, &coords, feature_type, false)?;
        HoleFeatureUpdate {
            tee: tee.clone(),
            hole_num: hole,
            feature_type,
            feature_coords: Some(coords),
            sampled_path_coords: None,
        }
    };

    state.course.commit(update)?;
    log::info!("{} an Loch {} (Tee '{}') übernommen", feature_type, hole, tee);
    Ok(())
}

/// Verwirft die laufende Zeichnung ohne Commit.
pub fn cancel_draw(state: &mut AppState, draw: &mut dyn DrawTool) {
    if let Some(prev) = state.drawing.take() {
        log::info!("Zeichnen von {} an Loch {} abgebrochen", prev.feature_type, prev.hole);
    }
    reset_draw_tool(draw);
}
