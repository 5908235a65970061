//! Kursdaten: Tees, Löcher und deren Pfad-/Polygon-Slots.
//!
//! Der Kurs ist die autoritative Datenhaltung; Registry und Karten-Layer
//! sind daraus abgeleitete Caches. Ein nicht definierter Slot wird als
//! leerer String `""` serialisiert.

use super::error::MapperError;
use super::feature::{FeatureType, MAX_HOLES};
use super::geo_point::{GeoPoint, LngLat};
use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Serde-Helfer: `None` ⇄ `""`, `Some(v)` ⇄ `v`.
pub(crate) mod blank_as_none {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Blank(String),
        Value(T),
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        match Raw::<T>::deserialize(deserializer)? {
            Raw::Blank(s) if s.is_empty() => Ok(None),
            Raw::Blank(s) => Err(D::Error::custom(format!(
                "unerwarteter Slot-Wert {s:?} (erwartet \"\" oder Koordinatenliste)"
            ))),
            Raw::Value(v) => Ok(Some(v)),
        }
    }
}

/// Koordinaten eines Features: Pfad mit Höhen oder Polygon-Ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureCoords {
    /// Linienzug mit Höhen (Fuß)
    Path(Vec<GeoPoint>),
    /// Geschlossener Ring ohne Höhen
    Polygon(Vec<LngLat>),
}

impl FeatureCoords {
    /// Anzahl Punkte.
    pub fn len(&self) -> usize {
        match self {
            FeatureCoords::Path(p) => p.len(),
            FeatureCoords::Polygon(p) => p.len(),
        }
    }

    /// `true` wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Alle Koordinaten ohne Höhe.
    pub fn lng_lats(&self) -> Vec<LngLat> {
        match self {
            FeatureCoords::Path(p) => p.iter().map(GeoPoint::lng_lat).collect(),
            FeatureCoords::Polygon(p) => p.clone(),
        }
    }
}

/// Payload der `UPDATE_HOLE_FEATURE`-Aktion an den Kurs-Store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleFeatureUpdate {
    /// Tee-Name
    pub tee: String,
    /// Lochnummer (1-basiert)
    pub hole_num: u32,
    /// Betroffener Slot
    pub feature_type: FeatureType,
    /// Neue Rohkoordinaten (`""` = gelöscht)
    #[serde(default, with = "blank_as_none")]
    pub feature_coords: Option<FeatureCoords>,
    /// Neu abgetasteter Pfad (`""` = gelöscht bzw. Polygon)
    #[serde(default, with = "blank_as_none")]
    pub sampled_path_coords: Option<Vec<GeoPoint>>,
}

impl HoleFeatureUpdate {
    /// Update, das einen Slot leert.
    pub fn cleared(tee: impl Into<String>, hole_num: u32, feature_type: FeatureType) -> Self {
        Self {
            tee: tee.into(),
            hole_num,
            feature_type,
            feature_coords: None,
            sampled_path_coords: None,
        }
    }

    /// `true` wenn das Update den Slot leert.
    pub fn is_cleared(&self) -> bool {
        self.feature_coords.is_none()
    }
}

/// Ein Loch mit allen Feature-Slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    /// Lochnummer (1-basiert)
    pub number: u32,
    /// Startlinie (nur Loch 1)
    #[serde(default, with = "blank_as_none")]
    pub start_path: Option<Vec<GeoPoint>>,
    /// Übergang vom Vorloch (Loch ≥ 2)
    #[serde(default, with = "blank_as_none")]
    pub transition_path: Option<Vec<GeoPoint>>,
    /// Tee → Flagge
    #[serde(default, with = "blank_as_none")]
    pub golf_path: Option<Vec<GeoPoint>>,
    /// Ziellinie (nur letztes Loch)
    #[serde(default, with = "blank_as_none")]
    pub finish_path: Option<Vec<GeoPoint>>,
    /// Abgetastete Startlinie
    #[serde(default, with = "blank_as_none")]
    pub start_path_sampled: Option<Vec<GeoPoint>>,
    /// Abgetasteter Übergang
    #[serde(default, with = "blank_as_none")]
    pub transition_path_sampled: Option<Vec<GeoPoint>>,
    /// Abgetasteter Golf-Pfad
    #[serde(default, with = "blank_as_none")]
    pub golf_path_sampled: Option<Vec<GeoPoint>>,
    /// Abgetastete Ziellinie
    #[serde(default, with = "blank_as_none")]
    pub finish_path_sampled: Option<Vec<GeoPoint>>,
    /// Abschlagfläche
    #[serde(default, with = "blank_as_none")]
    pub teebox: Option<Vec<LngLat>>,
    /// Grün
    #[serde(default, with = "blank_as_none")]
    pub green: Option<Vec<LngLat>>,
}

impl Hole {
    /// Erstellt ein leeres Loch.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Default::default()
        }
    }

    fn path_slot(&self, feature_type: FeatureType) -> Option<&Option<Vec<GeoPoint>>> {
        match feature_type {
            FeatureType::StartPath => Some(&self.start_path),
            FeatureType::TransitionPath => Some(&self.transition_path),
            FeatureType::GolfPath => Some(&self.golf_path),
            FeatureType::FinishPath => Some(&self.finish_path),
            FeatureType::Teebox | FeatureType::Green => None,
        }
    }

    fn sampled_slot(&self, feature_type: FeatureType) -> Option<&Option<Vec<GeoPoint>>> {
        match feature_type {
            FeatureType::StartPath => Some(&self.start_path_sampled),
            FeatureType::TransitionPath => Some(&self.transition_path_sampled),
            FeatureType::GolfPath => Some(&self.golf_path_sampled),
            FeatureType::FinishPath => Some(&self.finish_path_sampled),
            FeatureType::Teebox | FeatureType::Green => None,
        }
    }

    /// Definierter Pfad des Slots (leere Listen gelten als undefiniert).
    ///
    /// Für Polygon-Typen immer `None`; Aufrufer prüfen den Typ vorher.
    pub fn path(&self, feature_type: FeatureType) -> Option<&[GeoPoint]> {
        self.path_slot(feature_type)?
            .as_deref()
            .filter(|p| !p.is_empty())
    }

    /// Abgetasteter Pfad des Slots.
    pub fn sampled_path(&self, feature_type: FeatureType) -> Option<&[GeoPoint]> {
        self.sampled_slot(feature_type)?
            .as_deref()
            .filter(|p| !p.is_empty())
    }

    /// Definiertes Polygon des Slots.
    pub fn polygon(&self, feature_type: FeatureType) -> Option<&[LngLat]> {
        let slot = match feature_type {
            FeatureType::Teebox => &self.teebox,
            FeatureType::Green => &self.green,
            _ => return None,
        };
        slot.as_deref().filter(|p| !p.is_empty())
    }

    /// `true` wenn der Slot definiert ist.
    pub fn is_defined(&self, feature_type: FeatureType) -> bool {
        if feature_type.is_path() {
            self.path(feature_type).is_some()
        } else {
            self.polygon(feature_type).is_some()
        }
    }

    /// Koordinaten des Slots als [`FeatureCoords`].
    pub fn feature_coords(&self, feature_type: FeatureType) -> Option<FeatureCoords> {
        if feature_type.is_path() {
            self.path(feature_type)
                .map(|p| FeatureCoords::Path(p.to_vec()))
        } else {
            self.polygon(feature_type)
                .map(|p| FeatureCoords::Polygon(p.to_vec()))
        }
    }

    /// Setzt (oder leert) einen Slot samt abgetastetem Pfad.
    pub fn set_feature(
        &mut self,
        feature_type: FeatureType,
        coords: Option<FeatureCoords>,
        sampled: Option<Vec<GeoPoint>>,
    ) -> Result<(), MapperError> {
        match feature_type {
            FeatureType::Teebox | FeatureType::Green => {
                let ring = match coords {
                    None => None,
                    Some(FeatureCoords::Polygon(ring)) => Some(ring),
                    Some(FeatureCoords::Path(_)) => {
                        return Err(MapperError::NotAPathType(feature_type.tag().to_string()))
                    }
                };
                if feature_type == FeatureType::Teebox {
                    self.teebox = ring;
                } else {
                    self.green = ring;
                }
            }
            _ => {
                let path = match coords {
                    None => None,
                    Some(FeatureCoords::Path(path)) => Some(path),
                    Some(FeatureCoords::Polygon(_)) => {
                        return Err(MapperError::NotAPolygonType(
                            feature_type.tag().to_string(),
                        ))
                    }
                };
                let (slot, sampled_slot) = match feature_type {
                    FeatureType::StartPath => {
                        (&mut self.start_path, &mut self.start_path_sampled)
                    }
                    FeatureType::TransitionPath => {
                        (&mut self.transition_path, &mut self.transition_path_sampled)
                    }
                    FeatureType::GolfPath => (&mut self.golf_path, &mut self.golf_path_sampled),
                    _ => (&mut self.finish_path, &mut self.finish_path_sampled),
                };
                *slot = path;
                *sampled_slot = sampled;
            }
        }
        Ok(())
    }
}

/// Ein Tee (Teeset) mit geordneten Löchern 1..N.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tee {
    /// Löcher in Reihenfolge, `holes[i].number == i + 1`
    pub holes: Vec<Hole>,
}

impl Tee {
    /// Erstellt ein Tee mit `hole_count` leeren Löchern.
    pub fn with_holes(hole_count: u32) -> Self {
        Self {
            holes: (1..=hole_count).map(Hole::new).collect(),
        }
    }

    /// Anzahl der Löcher.
    pub fn hole_count(&self) -> u32 {
        self.holes.len() as u32
    }

    /// Loch per 1-basierter Nummer.
    pub fn hole(&self, number: u32) -> Option<&Hole> {
        number
            .checked_sub(1)
            .and_then(|idx| self.holes.get(idx as usize))
    }

    /// Mutables Loch per 1-basierter Nummer.
    pub fn hole_mut(&mut self, number: u32) -> Option<&mut Hole> {
        number
            .checked_sub(1)
            .and_then(|idx| self.holes.get_mut(idx as usize))
    }

    /// Definierter Pfad eines Lochs (Loch außerhalb des Bereichs → `None`).
    pub fn path(&self, hole: u32, feature_type: FeatureType) -> Option<&[GeoPoint]> {
        self.hole(hole)?.path(feature_type)
    }

    /// `true` wenn der Slot eines Lochs definiert ist.
    pub fn is_defined(&self, hole: u32, feature_type: FeatureType) -> bool {
        self.hole(hole)
            .is_some_and(|h| h.is_defined(feature_type))
    }
}

/// Kurs mit geordneten Tees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Kursname
    #[serde(default)]
    pub name: String,
    /// Tees in Einfüge-Reihenfolge
    pub tees: IndexMap<String, Tee>,
}

impl Course {
    /// Erstellt einen leeren Kurs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tees: IndexMap::new(),
        }
    }

    /// Builder: fügt ein Tee mit `hole_count` leeren Löchern hinzu.
    pub fn with_tee(mut self, tee: impl Into<String>, hole_count: u32) -> Self {
        self.tees.insert(tee.into(), Tee::with_holes(hole_count));
        self
    }

    /// Tee per Name.
    pub fn tee(&self, name: &str) -> Result<&Tee, MapperError> {
        self.tees
            .get(name)
            .ok_or_else(|| MapperError::UnknownTee(name.to_string()))
    }

    /// Mutables Tee per Name.
    pub fn tee_mut(&mut self, name: &str) -> Result<&mut Tee, MapperError> {
        self.tees
            .get_mut(name)
            .ok_or_else(|| MapperError::UnknownTee(name.to_string()))
    }

    /// Loch eines Tees mit Bereichsprüfung.
    pub fn hole(&self, tee: &str, hole: u32) -> Result<&Hole, MapperError> {
        let t = self.tee(tee)?;
        t.hole(hole).ok_or(MapperError::HoleOutOfRange {
            hole,
            hole_count: t.hole_count(),
        })
    }

    /// Prüft Lochnummerierung und Lochanzahl aller Tees.
    pub fn validate(&self) -> Result<(), MapperError> {
        for (name, tee) in &self.tees {
            if tee.holes.is_empty() || tee.hole_count() > MAX_HOLES {
                return Err(MapperError::InvalidCourse(format!(
                    "Tee '{}' hat {} Löcher (erlaubt: 1..={})",
                    name,
                    tee.holes.len(),
                    MAX_HOLES
                )));
            }
            for (idx, hole) in tee.holes.iter().enumerate() {
                if hole.number as usize != idx + 1 {
                    return Err(MapperError::InvalidCourse(format!(
                        "Tee '{}': Loch an Position {} hat Nummer {}",
                        name,
                        idx + 1,
                        hole.number
                    )));
                }
            }
        }
        Ok(())
    }

    /// Wendet ein `UPDATE_HOLE_FEATURE` auf die Kursdaten an.
    pub fn apply_update(&mut self, update: &HoleFeatureUpdate) -> Result<(), MapperError> {
        let tee = self.tee_mut(&update.tee)?;
        let hole_count = tee.hole_count();
        let hole = tee
            .hole_mut(update.hole_num)
            .ok_or(MapperError::HoleOutOfRange {
                hole: update.hole_num,
                hole_count,
            })?;
        hole.set_feature(
            update.feature_type,
            update.feature_coords.clone(),
            update.sampled_path_coords.clone(),
        )
    }

    /// Parst und validiert einen Kurs aus JSON.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let course: Course = serde_json::from_str(json).context("Kurs-JSON fehlerhaft")?;
        course.validate()?;
        Ok(course)
    }

    /// Lädt einen Kurs aus einer JSON-Datei.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Fehler beim Lesen des Kurses: {}", path.display()))?;
        let course = Self::from_json_str(&content)
            .with_context(|| format!("Fehler beim Laden des Kurses: {}", path.display()))?;
        log::info!(
            "Kurs '{}' geladen: {} Tees aus {}",
            course.name,
            course.tees.len(),
            path.display()
        );
        Ok(course)
    }

    /// Speichert den Kurs als JSON-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Fehler beim Schreiben des Kurses: {}", path.display()))?;
        log::info!("Kurs gespeichert nach: {}", path.display());
        Ok(())
    }
}
