//! Reine Geo-Funktionen: Zwischenpunkte, Pfad-Resampling, Einheiten.
//!
//! Layer-neutral wie die Spline-Geometrie: keine Abhängigkeit auf Karte oder
//! State. Höhen werden über eine übergebene Abfrage-Funktion ermittelt.
//!
//! Interpoliert wird planar (Lng/Lat als kartesische Koordinaten), nicht auf
//! dem Großkreis. Für die Distanzen eines Golflochs ist der Fehler
//! vernachlässigbar.

use crate::core::{GeoPoint, LngLat};
use glam::DVec2;

/// Meter pro Fuß.
pub const METERS_PER_FOOT: f64 = 0.3048;
/// Fuß pro Meter für Terrain-Höhen (Terrain liefert Meter).
pub const FEET_PER_METER_ELEVATION: f64 = 3.280839895;
/// Fuß pro Yard.
pub const FEET_PER_YARD: f64 = 3.0;
/// Meter pro Breitengrad (äquirektanguläre Näherung).
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

const LENGTH_EPSILON: f64 = 1e-12;

/// Fuß → Meter.
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

/// Meter → Fuß.
pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

/// Terrain-Höhe in Metern → Fuß.
pub fn elevation_meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER_ELEVATION
}

/// Fuß → Yards.
pub fn feet_to_yards(feet: f64) -> f64 {
    feet / FEET_PER_YARD
}

/// Yards → Fuß.
pub fn yards_to_feet(yards: f64) -> f64 {
    yards * FEET_PER_YARD
}

/// Punkt auf der Strecke `start → end` im planaren Abstand `distance` von `start`.
///
/// `distance` ist in Koordinaten-Einheiten (Grad, planar). Eine Strecke der
/// Länge 0 liefert `start`.
pub fn destination_point(start: LngLat, end: LngLat, distance: f64) -> LngLat {
    LngLat::from_planar(destination_planar(start.to_planar(), end.to_planar(), distance))
}

fn destination_planar(start: DVec2, end: DVec2, distance: f64) -> DVec2 {
    let length = start.distance(end);
    if length <= LENGTH_EPSILON {
        return start;
    }
    start + (end - start) * (distance / length)
}

/// Reale Streckenlänge zwischen zwei Koordinaten in Fuß (äquirektangulär).
pub fn distance_feet(a: LngLat, b: LngLat) -> f64 {
    let mean_lat = ((a.lat + b.lat) * 0.5).to_radians();
    let dx = (b.lng - a.lng) * METERS_PER_DEGREE_LAT * mean_lat.cos();
    let dy = (b.lat - a.lat) * METERS_PER_DEGREE_LAT;
    meters_to_feet(dx.hypot(dy))
}

/// Gesamtlänge eines Pfads in Fuß.
pub fn path_length_feet(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| distance_feet(w[0].lng_lat(), w[1].lng_lat()))
        .sum()
}

/// Tastet einen Pfad im festen realen Abstand neu ab.
///
/// Für jedes Segment werden alle `sampling_distance_feet` Zwischenpunkte
/// eingefügt, deren Höhe (Fuß) über `elevation_feet` abgefragt wird. Liefert
/// die Abfrage nichts, wird die Höhe linear zwischen den Segment-Enden
/// interpoliert. Die Original-Stützpunkte bleiben mit ihrer Höhe erhalten,
/// der letzte Punkt wird immer exakt übernommen. Segmente der Länge 0 werden
/// übersprungen, ihr gemeinsamer Endpunkt erscheint nur einmal.
pub fn resample_path(
    points: &[GeoPoint],
    sampling_distance_feet: f64,
    mut elevation_feet: impl FnMut(LngLat) -> Option<f64>,
) -> Vec<GeoPoint> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(points.len());
    result.push(first);
    let mut interpolated = 0usize;

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let segment_feet = distance_feet(a.lng_lat(), b.lng_lat());

        if segment_feet <= LENGTH_EPSILON {
            // Gemeinsamer Endpunkt nur einmal, aber mit den Daten von `b`
            if let Some(last) = result.last_mut() {
                *last = b;
            }
            continue;
        }

        if sampling_distance_feet > 0.0 {
            let planar_len = a.to_planar().distance(b.to_planar());
            let mut along = sampling_distance_feet;
            while along < segment_feet - LENGTH_EPSILON {
                let t = along / segment_feet;
                let planar = destination_planar(a.to_planar(), b.to_planar(), planar_len * t);
                let coord = LngLat::from_planar(planar);
                let elv = elevation_feet(coord).unwrap_or_else(|| {
                    interpolated += 1;
                    a.elv + (b.elv - a.elv) * t
                });
                result.push(GeoPoint::at(coord, elv));
                along += sampling_distance_feet;
            }
        }

        result.push(b);
    }

    if interpolated > 0 {
        log::warn!(
            "Resampling: {} Punkt(e) ohne Terrain-Höhe, zwischen Stützpunkten interpoliert",
            interpolated
        );
    }
    log::trace!(
        "Resampling: {} → {} Punkte (Abstand {:.1} ft)",
        points.len(),
        result.len(),
        sampling_distance_feet
    );

    result
}
