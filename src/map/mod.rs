//! Schnittstellen zu den externen Kollaborateuren: Karte und Zeichen-Tool.
//!
//! Der Kern rendert nicht selbst. Er beschreibt Sources, Layer und Marker
//! über den `MapHandle`-Trait und liest gezeichnete Geometrie über den
//! `DrawTool`-Trait. Karten-Events (Klick, Marker-Drag, Hover, fertige
//! Zeichnung) erreichen den Kern als `AppIntent`s.
//!
//! `headless` liefert eine In-Memory-Implementierung beider Traits für
//! Tests und die Kommandozeile.

pub mod headless;

use crate::core::{LngLat, MarkerRole};
use crate::shared::geo_math::elevation_meters_to_feet;
use serde_json::{json, Value};

pub use headless::{HeadlessDrawTool, HeadlessMap, HeadlessMarker};

/// Bildschirmpunkt in Pixeln (Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X in Pixeln
    pub x: f64,
    /// Y in Pixeln
    pub y: f64,
}

impl ScreenPoint {
    /// Erstellt einen Bildschirmpunkt.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Vom Kartenobjekt vergebene Marker-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u64);

/// Sichtbarkeit eines Layers (Layout-Property `visibility`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Sichtbar
    Visible,
    /// Ausgeblendet (Layer bleibt erhalten)
    None,
}

impl Visibility {
    /// Aus einem Bool.
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Visibility::Visible
        } else {
            Visibility::None
        }
    }
}

/// Layout-Properties, die der Kern setzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutProperty {
    /// `visibility`
    Visibility(Visibility),
}

/// Paint-Properties, die der Kern setzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintProperty {
    /// `line-width` in Pixeln
    LineWidth(f64),
    /// `fill-opacity` (0..1)
    FillOpacity(f64),
}

/// Art eines Layers samt Stil.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    /// Linien-Layer
    Line {
        /// Linienfarbe (CSS-Hex)
        color: String,
        /// Linienbreite in Pixeln
        width: f64,
    },
    /// Flächen-Layer
    Fill {
        /// Füllfarbe (CSS-Hex)
        color: String,
        /// Deckkraft (0..1)
        opacity: f64,
    },
    /// Text-Label entlang der Linienmitte
    Label {
        /// Angezeigter Text
        text: String,
    },
}

/// Layer-Definition für `add_layer`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDef {
    /// Layer-ID
    pub id: String,
    /// ID der zugrunde liegenden Source
    pub source: String,
    /// Art und Stil
    pub kind: LayerKind,
    /// Anfangs-Sichtbarkeit
    pub visibility: Visibility,
}

/// Beschreibung eines neuen Markers.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    /// Rolle (steuert das Marker-Symbol im Host)
    pub role: MarkerRole,
    /// Position
    pub position: LngLat,
    /// Text des Hover-Popups
    pub popup_text: String,
    /// Marker per Maus verschiebbar
    pub draggable: bool,
}

/// Modus des Zeichen-Tools.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawMode {
    /// Kein Zeichnen (`simple_select`)
    #[default]
    SimpleSelect,
    /// Linie zeichnen (`draw_line_string`)
    DrawLineString {
        /// Linienfarbe während des Zeichnens
        color: String,
    },
    /// Polygon zeichnen (`draw_polygon`)
    DrawPolygon {
        /// Farbe während des Zeichnens
        color: String,
    },
}

/// Vom Zeichen-Tool gelieferte Rohgeometrie.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawnGeometry {
    /// Linienzug
    LineString(Vec<LngLat>),
    /// Polygon-Ring (offen oder geschlossen)
    Polygon(Vec<LngLat>),
}

impl DrawnGeometry {
    /// Koordinaten unabhängig vom Typ.
    pub fn coords(&self) -> &[LngLat] {
        match self {
            DrawnGeometry::LineString(c) | DrawnGeometry::Polygon(c) => c,
        }
    }
}

/// Imperatives Karten-Handle (Vektor-Layer, Terrain, Marker).
pub trait MapHandle {
    /// Fügt eine GeoJSON-Source hinzu. Doppelte IDs sind ein Fehler.
    fn add_source(&mut self, id: &str, data: Value) -> anyhow::Result<()>;
    /// Entfernt eine Source.
    fn remove_source(&mut self, id: &str) -> anyhow::Result<()>;
    /// `true` wenn die Source existiert.
    fn has_source(&self, id: &str) -> bool;
    /// Fügt einen Layer hinzu. Die Source muss existieren.
    fn add_layer(&mut self, layer: LayerDef) -> anyhow::Result<()>;
    /// Entfernt einen Layer.
    fn remove_layer(&mut self, id: &str) -> anyhow::Result<()>;
    /// `true` wenn der Layer existiert.
    fn has_layer(&self, id: &str) -> bool;
    /// Setzt eine Layout-Property.
    fn set_layout_property(&mut self, layer_id: &str, property: LayoutProperty)
        -> anyhow::Result<()>;
    /// Setzt eine Paint-Property.
    fn set_paint_property(&mut self, layer_id: &str, property: PaintProperty)
        -> anyhow::Result<()>;
    /// IDs der sichtbaren Layer aus `layers`, die am Punkt gerendert sind (oberster zuerst).
    fn query_rendered_features(&self, point: ScreenPoint, layers: &[String]) -> Vec<String>;
    /// Terrain-Höhe in Metern; `None` wenn nicht verfügbar.
    fn query_terrain_elevation(&self, at: LngLat) -> Option<f64>;

    /// Erstellt einen Marker.
    fn add_marker(&mut self, spec: MarkerSpec) -> MarkerId;
    /// Entfernt einen Marker (unbekannte IDs werden ignoriert).
    fn remove_marker(&mut self, id: MarkerId);
    /// `true` wenn der Marker auf der Karte ist.
    fn has_marker(&self, id: MarkerId) -> bool;
    /// Verschiebt einen Marker.
    fn set_marker_position(&mut self, id: MarkerId, at: LngLat);
    /// Aktuelle Marker-Position.
    fn marker_position(&self, id: MarkerId) -> Option<LngLat>;
    /// Blendet einen Marker ein/aus.
    fn set_marker_visibility(&mut self, id: MarkerId, visible: bool);
    /// Öffnet/schließt das Hover-Popup eines Markers.
    fn set_marker_popup_open(&mut self, id: MarkerId, open: bool);

    /// Terrain-Höhe in Fuß; `None` wenn nicht verfügbar.
    fn query_terrain_elevation_feet(&self, at: LngLat) -> Option<f64> {
        self.query_terrain_elevation(at).map(elevation_meters_to_feet)
    }

    /// Terrain-Höhe in Fuß; bei fehlender Abfrage `fallback_feet`.
    fn terrain_elevation_feet(&self, at: LngLat, fallback_feet: f64) -> f64 {
        match self.query_terrain_elevation_feet(at) {
            Some(feet) => feet,
            None => {
                log::warn!(
                    "Terrain-Abfrage bei ({:.6}, {:.6}) ohne Ergebnis, verwende {:.1} ft",
                    at.lat,
                    at.lng,
                    fallback_feet
                );
                fallback_feet
            }
        }
    }

    /// Setzt die Sichtbarkeit eines Layers.
    fn set_layer_visibility(&mut self, layer_id: &str, visible: bool) -> anyhow::Result<()> {
        self.set_layout_property(
            layer_id,
            LayoutProperty::Visibility(Visibility::from_visible(visible)),
        )
    }
}

/// Externes Zeichen-Tool (Linien-/Polygon-Modus, fertige Geometrie).
pub trait DrawTool {
    /// Wechselt den Modus.
    fn change_mode(&mut self, mode: DrawMode);
    /// Aktueller Modus.
    fn mode(&self) -> &DrawMode;
    /// Alle aktuell gezeichneten Geometrien.
    fn get_all(&self) -> Vec<DrawnGeometry>;
    /// Verwirft alle gezeichneten Geometrien.
    fn delete_all(&mut self);
}

/// GeoJSON-Feature mit LineString-Geometrie.
pub fn line_string_source(points: &[LngLat]) -> Value {
    let coordinates: Vec<[f64; 2]> = points.iter().map(|p| p.position()).collect();
    json!({
        "type": "Feature",
        "properties": {},
        "geometry": { "type": "LineString", "coordinates": coordinates }
    })
}

/// GeoJSON-Feature mit Polygon-Geometrie; der Ring wird bei Bedarf geschlossen.
pub fn polygon_source(ring: &[LngLat]) -> Value {
    let mut coordinates: Vec<[f64; 2]> = ring.iter().map(|p| p.position()).collect();
    if let (Some(&first), Some(&last)) = (coordinates.first(), coordinates.last()) {
        if first != last {
            coordinates.push(first);
        }
    }
    json!({
        "type": "Feature",
        "properties": {},
        "geometry": { "type": "Polygon", "coordinates": [coordinates] }
    })
}
