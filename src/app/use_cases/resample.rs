//! Use-Case: alle Pfade eines Tees neu abtasten.
//!
//! Wird nach einer Änderung des Abtastabstands gebraucht; die Rohpfade
//! bleiben unverändert. Ohne Terrain-Höhe werden Zwischenpunkte zwischen
//! den gespeicherten Stützpunkt-Höhen interpoliert.

use crate::app::AppState;
use crate::core::{FeatureCoords, FeatureType, HoleFeatureUpdate};
use crate::map::MapHandle;
use crate::shared::geo_math::resample_path;

/// Tastet jeden definierten Pfad des Tees neu ab und committet ihn.
///
/// Gibt die Anzahl der aktualisierten Pfade zurück.
pub fn resample_tee(
    state: &mut AppState,
    map: &dyn MapHandle,
    tee: &str,
) -> anyhow::Result<usize> {
    let distance = state.options.sampling_distance_feet;

    let mut updates = Vec::new();
    for hole in &state.course.course().tee(tee)?.holes {
        for feature_type in FeatureType::SLOT_ORDER.into_iter().filter(|ft| ft.is_path()) {
            let Some(points) = hole.path(feature_type) else {
                continue;
            };
            let sampled = resample_path(points, distance, |c| map.query_terrain_elevation_feet(c));
            updates.push(HoleFeatureUpdate {
                tee: tee.to_string(),
                hole_num: hole.number,
                feature_type,
                feature_coords: Some(FeatureCoords::Path(points.to_vec())),
                sampled_path_coords: Some(sampled),
            });
        }
    }

    let count = updates.len();
    for update in updates {
        state.course.commit(update)?;
    }
    log::info!(
        "Tee '{}': {} Pfad(e) mit {:.1} ft neu abgetastet",
        tee,
        count,
        distance
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Course, GeoPoint};
    use crate::map::HeadlessMap;

    fn state_with_golf_path() -> AppState {
        let mut state = AppState::with_course(Course::new("T").with_tee("Blue", 1));
        state
            .course
            .commit(HoleFeatureUpdate {
                tee: "Blue".to_string(),
                hole_num: 1,
                feature_type: FeatureType::GolfPath,
                feature_coords: Some(FeatureCoords::Path(vec![
                    GeoPoint::new(0.0, 0.0, 300.0),
                    GeoPoint::new(0.001, 0.0, 300.0),
                ])),
                sampled_path_coords: Some(Vec::new()),
            })
            .expect("Update gültig");
        state
    }

    #[test]
    fn test_resample_without_terrain_keeps_stored_elevations() {
        let mut state = state_with_golf_path();
        let map = HeadlessMap::with_terrain(|_| None);

        let count = resample_tee(&mut state, &map, "Blue").expect("Resampling erwartet");

        assert_eq!(count, 1);
        let hole = state.course.course().hole("Blue", 1).expect("Loch 1");
        let sampled = hole.golf_path_sampled.as_ref().expect("abgetastet");
        assert!(sampled.len() > 2);
        assert!(sampled.iter().all(|pt| (pt.elv - 300.0).abs() < 1e-9));
    }

    #[test]
    fn test_resample_uses_terrain_for_inserted_points() {
        let mut state = state_with_golf_path();
        let map = HeadlessMap::with_terrain(|_| Some(10.0));

        resample_tee(&mut state, &map, "Blue").expect("Resampling erwartet");

        let hole = state.course.course().hole("Blue", 1).expect("Loch 1");
        let sampled = hole.golf_path_sampled.as_ref().expect("abgetastet");
        let inner = &sampled[1..sampled.len() - 1];
        assert!(!inner.is_empty());
        assert!(inner.iter().all(|pt| (pt.elv - 32.80839895).abs() < 1e-9));
        assert_eq!(sampled[0].elv, 300.0);
    }
}
