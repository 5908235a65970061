//! Geografische Punkttypen: rohe Lng/Lat-Koordinaten und Pfadpunkte mit Höhe.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Rohe geografische Koordinate (Polygon-Ecke oder Zeichen-Tool-Vertex).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
}

impl LngLat {
    /// Erstellt eine Koordinate aus Breiten- und Längengrad.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planare Sicht (x = lng, y = lat) für Interpolation.
    #[inline]
    pub fn to_planar(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    /// Gegenstück zu [`LngLat::to_planar`].
    #[inline]
    pub fn from_planar(v: DVec2) -> Self {
        Self { lat: v.y, lng: v.x }
    }

    /// GeoJSON-Position `[lng, lat]`.
    pub fn position(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// Pfadpunkt mit Geländehöhe in Fuß.
///
/// `elv` stammt immer aus einer Terrain-Abfrage zum Zeichen- bzw.
/// Bearbeitungszeitpunkt und wird nie vom Benutzer eingegeben.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lng: f64,
    /// Höhe in Fuß
    pub elv: f64,
}

impl GeoPoint {
    /// Erstellt einen Pfadpunkt.
    pub fn new(lat: f64, lng: f64, elv: f64) -> Self {
        Self { lat, lng, elv }
    }

    /// Erstellt einen Pfadpunkt aus einer Koordinate und einer Höhe (Fuß).
    pub fn at(coord: LngLat, elv: f64) -> Self {
        Self {
            lat: coord.lat,
            lng: coord.lng,
            elv,
        }
    }

    /// Koordinate ohne Höhe.
    #[inline]
    pub fn lng_lat(&self) -> LngLat {
        LngLat::new(self.lat, self.lng)
    }

    /// Planare Sicht (x = lng, y = lat).
    #[inline]
    pub fn to_planar(&self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }
}

impl From<GeoPoint> for LngLat {
    fn from(p: GeoPoint) -> Self {
        p.lng_lat()
    }
}
