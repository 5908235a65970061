//! In-Memory-Karte und Zeichen-Tool ohne Rendering.
//!
//! Projektion ist die Identität: `ScreenPoint.x` = Längengrad,
//! `ScreenPoint.y` = Breitengrad. Treffer werden gegen die GeoJSON-Geometrie
//! der Sources geprüft (Linien mit Toleranz, Polygone per Punkt-in-Polygon).

use super::{
    DrawMode, DrawTool, DrawnGeometry, LayerDef, LayerKind, LayoutProperty, MapHandle, MarkerId,
    MarkerSpec, PaintProperty, ScreenPoint, Visibility,
};
use crate::core::LngLat;
use anyhow::{anyhow, bail};
use glam::DVec2;
use indexmap::IndexMap;
use serde_json::Value;

/// Standard-Treffertoleranz für Linien in Grad.
pub const DEFAULT_HIT_TOLERANCE: f64 = 1e-4;

type TerrainFn = Box<dyn Fn(LngLat) -> Option<f64>>;

/// Zustand eines Markers auf der Headless-Karte.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessMarker {
    /// Ursprüngliche Beschreibung
    pub spec: MarkerSpec,
    /// Aktuelle Position
    pub position: LngLat,
    /// Sichtbar
    pub visible: bool,
    /// Popup geöffnet
    pub popup_open: bool,
}

/// Headless-Implementierung von [`MapHandle`].
pub struct HeadlessMap {
    sources: IndexMap<String, Value>,
    layers: IndexMap<String, LayerDef>,
    markers: IndexMap<MarkerId, HeadlessMarker>,
    next_marker_id: u64,
    terrain: TerrainFn,
    hit_tolerance: f64,
}

impl Default for HeadlessMap {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessMap {
    /// Karte mit flachem Terrain auf 0 m.
    pub fn new() -> Self {
        Self::with_terrain(|_| Some(0.0))
    }

    /// Karte mit eigener Terrain-Funktion (Meter).
    pub fn with_terrain(terrain: impl Fn(LngLat) -> Option<f64> + 'static) -> Self {
        Self {
            sources: IndexMap::new(),
            layers: IndexMap::new(),
            markers: IndexMap::new(),
            next_marker_id: 1,
            terrain: Box::new(terrain),
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
        }
    }

    /// Builder: setzt die Treffertoleranz für Linien (Grad).
    pub fn with_hit_tolerance(mut self, tolerance: f64) -> Self {
        self.hit_tolerance = tolerance;
        self
    }

    /// Layer-Definition per ID.
    pub fn layer(&self, id: &str) -> Option<&LayerDef> {
        self.layers.get(id)
    }

    /// `true` wenn der Layer existiert und sichtbar ist.
    pub fn is_layer_visible(&self, id: &str) -> bool {
        self.layers
            .get(id)
            .is_some_and(|l| l.visibility == Visibility::Visible)
    }

    /// Alle Layer-IDs in Zeichenreihenfolge.
    pub fn layer_ids(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    /// Anzahl der Layer.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// GeoJSON einer Source.
    pub fn source(&self, id: &str) -> Option<&Value> {
        self.sources.get(id)
    }

    /// Koordinaten der Source-Geometrie (Linie bzw. äußerer Ring).
    pub fn source_coords(&self, id: &str) -> Option<Vec<LngLat>> {
        self.sources.get(id).map(|v| {
            geometry_positions(v)
                .into_iter()
                .map(LngLat::from_planar)
                .collect()
        })
    }

    /// Marker-Zustand per ID.
    pub fn marker(&self, id: MarkerId) -> Option<&HeadlessMarker> {
        self.markers.get(&id)
    }

    /// Alle Marker auf der Karte.
    pub fn markers(&self) -> impl Iterator<Item = (MarkerId, &HeadlessMarker)> {
        self.markers.iter().map(|(id, m)| (*id, m))
    }

    /// Anzahl der Marker.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn hit(&self, layer: &LayerDef, point: DVec2) -> bool {
        let Some(source) = self.sources.get(&layer.source) else {
            return false;
        };
        let positions = geometry_positions(source);
        match layer.kind {
            LayerKind::Line { .. } => positions
                .windows(2)
                .any(|w| distance_to_segment(point, w[0], w[1]) <= self.hit_tolerance),
            LayerKind::Fill { .. } => point_in_polygon(point, &positions),
            LayerKind::Label { .. } => false,
        }
    }
}

impl MapHandle for HeadlessMap {
    fn add_source(&mut self, id: &str, data: Value) -> anyhow::Result<()> {
        if self.sources.contains_key(id) {
            bail!("Source '{}' existiert bereits", id);
        }
        self.sources.insert(id.to_string(), data);
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> anyhow::Result<()> {
        if let Some(user) = self.layers.values().find(|l| l.source == id) {
            bail!("Source '{}' wird noch von Layer '{}' verwendet", id, user.id);
        }
        self.sources
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| anyhow!("Source '{}' existiert nicht", id))
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn add_layer(&mut self, layer: LayerDef) -> anyhow::Result<()> {
        if self.layers.contains_key(&layer.id) {
            bail!("Layer '{}' existiert bereits", layer.id);
        }
        if !self.sources.contains_key(&layer.source) {
            bail!(
                "Layer '{}' verweist auf unbekannte Source '{}'",
                layer.id,
                layer.source
            );
        }
        self.layers.insert(layer.id.clone(), layer);
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> anyhow::Result<()> {
        self.layers
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| anyhow!("Layer '{}' existiert nicht", id))
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    fn set_layout_property(
        &mut self,
        layer_id: &str,
        property: LayoutProperty,
    ) -> anyhow::Result<()> {
        let layer = self
            .layers
            .get_mut(layer_id)
            .ok_or_else(|| anyhow!("Layer '{}' existiert nicht", layer_id))?;
        match property {
            LayoutProperty::Visibility(v) => layer.visibility = v,
        }
        Ok(())
    }

    fn set_paint_property(
        &mut self,
        layer_id: &str,
        property: PaintProperty,
    ) -> anyhow::Result<()> {
        let layer = self
            .layers
            .get_mut(layer_id)
            .ok_or_else(|| anyhow!("Layer '{}' existiert nicht", layer_id))?;
        match (&mut layer.kind, property) {
            (LayerKind::Line { width, .. }, PaintProperty::LineWidth(w)) => *width = w,
            (LayerKind::Fill { opacity, .. }, PaintProperty::FillOpacity(o)) => *opacity = o,
            (_, property) => bail!(
                "Paint-Property {:?} passt nicht zu Layer '{}'",
                property,
                layer_id
            ),
        }
        Ok(())
    }

    fn query_rendered_features(&self, point: ScreenPoint, layers: &[String]) -> Vec<String> {
        let p = DVec2::new(point.x, point.y);
        self.layers
            .values()
            .rev()
            .filter(|l| l.visibility == Visibility::Visible)
            .filter(|l| layers.iter().any(|id| *id == l.id))
            .filter(|l| self.hit(l, p))
            .map(|l| l.id.clone())
            .collect()
    }

    fn query_terrain_elevation(&self, at: LngLat) -> Option<f64> {
        (self.terrain)(at)
    }

    fn add_marker(&mut self, spec: MarkerSpec) -> MarkerId {
        let id = MarkerId(self.next_marker_id);
        self.next_marker_id += 1;
        self.markers.insert(
            id,
            HeadlessMarker {
                position: spec.position,
                spec,
                visible: true,
                popup_open: false,
            },
        );
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.shift_remove(&id);
    }

    fn has_marker(&self, id: MarkerId) -> bool {
        self.markers.contains_key(&id)
    }

    fn set_marker_position(&mut self, id: MarkerId, at: LngLat) {
        if let Some(m) = self.markers.get_mut(&id) {
            m.position = at;
        }
    }

    fn marker_position(&self, id: MarkerId) -> Option<LngLat> {
        self.markers.get(&id).map(|m| m.position)
    }

    fn set_marker_visibility(&mut self, id: MarkerId, visible: bool) {
        if let Some(m) = self.markers.get_mut(&id) {
            m.visible = visible;
        }
    }

    fn set_marker_popup_open(&mut self, id: MarkerId, open: bool) {
        if let Some(m) = self.markers.get_mut(&id) {
            m.popup_open = open;
        }
    }
}

/// Headless-Zeichen-Tool: Geometrie wird per [`HeadlessDrawTool::draw`] eingespeist.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDrawTool {
    mode: DrawMode,
    drawn: Vec<DrawnGeometry>,
}

impl HeadlessDrawTool {
    /// Leeres Tool im Auswahlmodus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simuliert eine fertig gezeichnete Geometrie passend zum aktuellen Modus.
    ///
    /// Im Auswahlmodus wird nichts aufgenommen.
    pub fn draw(&mut self, coords: Vec<LngLat>) {
        match self.mode {
            DrawMode::SimpleSelect => {
                log::debug!("Zeichnen im Auswahlmodus ignoriert");
            }
            DrawMode::DrawLineString { .. } => self.drawn.push(DrawnGeometry::LineString(coords)),
            DrawMode::DrawPolygon { .. } => self.drawn.push(DrawnGeometry::Polygon(coords)),
        }
    }
}

impl DrawTool for HeadlessDrawTool {
    fn change_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }

    fn mode(&self) -> &DrawMode {
        &self.mode
    }

    fn get_all(&self) -> Vec<DrawnGeometry> {
        self.drawn.clone()
    }

    fn delete_all(&mut self) {
        self.drawn.clear();
    }
}

/// Positionen einer GeoJSON-Feature-Geometrie als (lng, lat).
fn geometry_positions(feature: &Value) -> Vec<DVec2> {
    let geometry = &feature["geometry"];
    let coords = match geometry["type"].as_str() {
        Some("LineString") => &geometry["coordinates"],
        Some("Polygon") => &geometry["coordinates"][0],
        _ => return Vec::new(),
    };
    coords
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|pos| Some(DVec2::new(pos[0].as_f64()?, pos[1].as_f64()?)))
                .collect()
        })
        .unwrap_or_default()
}

fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

fn point_in_polygon(p: DVec2, ring: &[DVec2]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}
