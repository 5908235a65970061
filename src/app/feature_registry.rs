//! In-Session-Registry der gezeichneten Karten-Elemente pro Tee.
//!
//! Die Registry ist ein abgeleiteter Cache über den Kursdaten: Sie wird beim
//! ersten Anzeigen eines Tees lazy aufgebaut und nie persistiert. Sie kennt
//! alle Layer-IDs (Pfade, Labels, Polygone) und die Marker eines Tees, damit
//! Ein-/Ausblenden und Klick-Auswahl nach einem Tee-Wechsel korrekt bleiben.
//!
//! IDs werden nie zurückgeparst: Zu jeder Feature-ID hält die Registry den
//! strukturierten [`FeatureKey`], zu jeder Marker-ID das [`MarkerBinding`].

use crate::core::{FeatureKey, MapperError, MarkerRole};
use crate::map::MarkerId;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Art einer registrierten Layer-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// Linien-Layer eines Pfads
    Path,
    /// Label-Layer eines Pfads
    Label,
    /// Flächen-Layer eines Polygons
    Poly,
}

/// Tee- und Flaggen-Marker eines Lochs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoleMarkers {
    /// Abschlag
    pub tee: Option<MarkerId>,
    /// Flagge
    pub flag: Option<MarkerId>,
}

/// Rückverweis von einer Marker-ID auf ihren Platz in der Registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerBinding {
    /// Tee-Name
    pub tee: String,
    /// Loch (Start: 1, Ziel: letztes Loch)
    pub hole: u32,
    /// Rolle
    pub role: MarkerRole,
}

/// Registry-Eintrag eines Tees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeeRegistry {
    /// Name des Tees beim Anlegen
    pub orig_tee_name: String,
    /// Linien-Layer der Pfade
    pub path_ids: IndexSet<String>,
    /// Label-Layer der Pfade
    pub label_ids: IndexSet<String>,
    /// Flächen-Layer der Polygone
    pub poly_ids: IndexSet<String>,
    /// Marker pro Loch, Index = Lochnummer − 1
    pub markers: Vec<HoleMarkers>,
    /// Globaler Start-Marker
    pub start_marker: Option<MarkerId>,
    /// Globaler Ziel-Marker
    pub finish_marker: Option<MarkerId>,
}

impl TeeRegistry {
    /// Leerer Eintrag mit `hole_count` Marker-Plätzen.
    pub fn new(tee: &str, hole_count: u32) -> Self {
        Self {
            orig_tee_name: tee.to_string(),
            markers: vec![HoleMarkers::default(); hole_count as usize],
            ..Default::default()
        }
    }

    /// Anzahl der Löcher mit Marker-Plätzen.
    pub fn hole_count(&self) -> u32 {
        self.markers.len() as u32
    }

    /// Registrierte IDs einer Art.
    pub fn ids(&self, kind: IdKind) -> &IndexSet<String> {
        match kind {
            IdKind::Path => &self.path_ids,
            IdKind::Label => &self.label_ids,
            IdKind::Poly => &self.poly_ids,
        }
    }

    fn ids_mut(&mut self, kind: IdKind) -> &mut IndexSet<String> {
        match kind {
            IdKind::Path => &mut self.path_ids,
            IdKind::Label => &mut self.label_ids,
            IdKind::Poly => &mut self.poly_ids,
        }
    }

    /// Marker an `(hole, role)`. Start/Ziel ignorieren die Lochnummer.
    pub fn marker(&self, hole: u32, role: MarkerRole) -> Option<MarkerId> {
        match role {
            MarkerRole::Start => self.start_marker,
            MarkerRole::Finish => self.finish_marker,
            MarkerRole::Tee | MarkerRole::Flag => {
                let slot = self.markers.get(hole.checked_sub(1)? as usize)?;
                if role == MarkerRole::Tee {
                    slot.tee
                } else {
                    slot.flag
                }
            }
        }
    }

    fn marker_slot_mut(&mut self, hole: u32, role: MarkerRole) -> Option<&mut Option<MarkerId>> {
        match role {
            MarkerRole::Start => Some(&mut self.start_marker),
            MarkerRole::Finish => Some(&mut self.finish_marker),
            MarkerRole::Tee | MarkerRole::Flag => {
                let slot = self.markers.get_mut(hole.checked_sub(1)? as usize)?;
                Some(if role == MarkerRole::Tee {
                    &mut slot.tee
                } else {
                    &mut slot.flag
                })
            }
        }
    }

    /// Alle gesetzten Marker mit Rolle.
    pub fn all_markers(&self) -> Vec<(MarkerRole, MarkerId)> {
        let mut out: Vec<(MarkerRole, MarkerId)> = self
            .markers
            .iter()
            .flat_map(|m| {
                m.tee
                    .map(|id| (MarkerRole::Tee, id))
                    .into_iter()
                    .chain(m.flag.map(|id| (MarkerRole::Flag, id)))
            })
            .collect();
        out.extend(self.start_marker.map(|id| (MarkerRole::Start, id)));
        out.extend(self.finish_marker.map(|id| (MarkerRole::Finish, id)));
        out
    }
}

/// Registry aller angezeigten Tees samt Rückverweis-Tabellen.
#[derive(Debug, Default)]
pub struct FeatureRegistry {
    tees: IndexMap<String, TeeRegistry>,
    feature_keys: HashMap<String, FeatureKey>,
    marker_bindings: HashMap<MarkerId, MarkerBinding>,
}

impl FeatureRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt einen leeren Eintrag an, falls noch keiner existiert.
    pub fn ensure_tee(&mut self, tee: &str, hole_count: u32) -> &mut TeeRegistry {
        let entry = self
            .tees
            .entry(tee.to_string())
            .or_insert_with(|| {
                log::debug!("Registry-Eintrag für Tee '{}' angelegt", tee);
                TeeRegistry::new(tee, hole_count)
            });
        if entry.markers.len() < hole_count as usize {
            entry
                .markers
                .resize(hole_count as usize, HoleMarkers::default());
        }
        entry
    }

    /// `true` wenn für den Tee ein Eintrag existiert.
    pub fn contains_tee(&self, tee: &str) -> bool {
        self.tees.contains_key(tee)
    }

    /// Namen aller Tees mit Eintrag.
    pub fn tee_names(&self) -> impl Iterator<Item = &str> {
        self.tees.keys().map(String::as_str)
    }

    /// Eintrag eines Tees.
    pub fn tee(&self, tee: &str) -> Result<&TeeRegistry, MapperError> {
        self.tees
            .get(tee)
            .ok_or_else(|| MapperError::MissingRegistryEntry(tee.to_string()))
    }

    fn tee_mut(&mut self, tee: &str) -> Result<&mut TeeRegistry, MapperError> {
        self.tees
            .get_mut(tee)
            .ok_or_else(|| MapperError::MissingRegistryEntry(tee.to_string()))
    }

    /// Registriert eine ID (idempotent).
    pub fn register(&mut self, tee: &str, kind: IdKind, id: &str) -> Result<(), MapperError> {
        self.tee_mut(tee)?.ids_mut(kind).insert(id.to_string());
        Ok(())
    }

    /// Entfernt eine ID. Gibt `true` zurück, wenn sie registriert war.
    pub fn unregister(&mut self, tee: &str, kind: IdKind, id: &str) -> Result<bool, MapperError> {
        Ok(self.tee_mut(tee)?.ids_mut(kind).shift_remove(id))
    }

    /// `true` wenn die ID für den Tee registriert ist.
    pub fn contains(&self, tee: &str, kind: IdKind, id: &str) -> bool {
        self.tees
            .get(tee)
            .is_some_and(|entry| entry.ids(kind).contains(id))
    }

    /// Verknüpft eine Feature-ID mit ihrem Schlüssel.
    pub fn bind_feature(&mut self, id: &str, key: FeatureKey) {
        self.feature_keys.insert(id.to_string(), key);
    }

    /// Schlüssel zu einer Feature-ID.
    pub fn feature_key(&self, id: &str) -> Option<&FeatureKey> {
        self.feature_keys.get(id)
    }

    /// Löst die Verknüpfung einer Feature-ID.
    pub fn unbind_feature(&mut self, id: &str) -> Option<FeatureKey> {
        self.feature_keys.remove(id)
    }

    /// Marker an `(tee, hole, role)`.
    pub fn marker(
        &self,
        tee: &str,
        hole: u32,
        role: MarkerRole,
    ) -> Result<Option<MarkerId>, MapperError> {
        Ok(self.tee(tee)?.marker(hole, role))
    }

    /// Setzt (oder leert) den Marker an `(tee, hole, role)` und gibt den
    /// vorherigen zurück. Die Rückverweis-Tabelle bleibt konsistent.
    pub fn set_marker(
        &mut self,
        tee: &str,
        hole: u32,
        role: MarkerRole,
        marker: Option<MarkerId>,
    ) -> Result<Option<MarkerId>, MapperError> {
        let entry = self.tee_mut(tee)?;
        let hole_count = entry.hole_count();
        let slot = entry
            .marker_slot_mut(hole, role)
            .ok_or(MapperError::HoleOutOfRange { hole, hole_count })?;
        let previous = std::mem::replace(slot, marker);

        if let Some(prev) = previous {
            self.marker_bindings.remove(&prev);
        }
        if let Some(id) = marker {
            self.marker_bindings.insert(
                id,
                MarkerBinding {
                    tee: tee.to_string(),
                    hole,
                    role,
                },
            );
        }
        Ok(previous)
    }

    /// Entfernt den Marker an `(tee, hole, role)` und gibt ihn zurück.
    pub fn take_marker(
        &mut self,
        tee: &str,
        hole: u32,
        role: MarkerRole,
    ) -> Result<Option<MarkerId>, MapperError> {
        self.set_marker(tee, hole, role, None)
    }

    /// Platz eines Markers in der Registry.
    pub fn marker_binding(&self, marker: MarkerId) -> Option<&MarkerBinding> {
        self.marker_bindings.get(&marker)
    }
}
