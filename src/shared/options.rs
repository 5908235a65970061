//! Zentrale Konfiguration für den Kurs-Mapper.
//!
//! `MapperOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::FeatureType;
use serde::{Deserialize, Serialize};

// ── Resampling ─────────────────────────────────────────────────────

/// Standard-Abtastabstand für Pfade in Fuß.
pub const SAMPLING_DISTANCE_FEET: f64 = 10.0;
/// Kleinster zulässiger positiver Abtastabstand in Fuß.
pub const MIN_SAMPLING_DISTANCE_FEET: f64 = 1.0;
/// Höhe (Fuß), wenn die Terrain-Abfrage keinen Wert liefert.
pub const FALLBACK_ELEVATION_FEET: f64 = 0.0;

// ── Darstellung ────────────────────────────────────────────────────

/// Linienbreite normaler Pfade in Pixeln.
pub const LINE_WIDTH_NORMAL: f64 = 4.0;
/// Linienbreite des selektierten Pfads in Pixeln.
pub const LINE_WIDTH_SELECTED: f64 = 8.0;
/// Füll-Deckkraft normaler Polygone.
pub const FILL_OPACITY_NORMAL: f64 = 0.4;
/// Füll-Deckkraft des selektierten Polygons.
pub const FILL_OPACITY_SELECTED: f64 = 0.8;

// ── Feature-Farben ─────────────────────────────────────────────────

/// Feste Farbtabelle Feature-Typ → Farbe (CSS-Hex).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureColors {
    /// Startlinie
    pub start_path: String,
    /// Übergangspfad
    pub transition_path: String,
    /// Golf-Pfad
    pub golf_path: String,
    /// Ziellinie
    pub finish_path: String,
    /// Abschlagfläche
    pub teebox: String,
    /// Grün
    pub green: String,
}

impl Default for FeatureColors {
    fn default() -> Self {
        Self {
            start_path: "#39FF14".to_string(),
            transition_path: "#FFA500".to_string(),
            golf_path: "#FFFFFF".to_string(),
            finish_path: "#FF3131".to_string(),
            teebox: "#1E90FF".to_string(),
            green: "#32CD32".to_string(),
        }
    }
}

impl FeatureColors {
    /// Farbe für einen Feature-Typ.
    pub fn for_type(&self, feature_type: FeatureType) -> &str {
        match feature_type {
            FeatureType::StartPath => &self.start_path,
            FeatureType::TransitionPath => &self.transition_path,
            FeatureType::GolfPath => &self.golf_path,
            FeatureType::FinishPath => &self.finish_path,
            FeatureType::Teebox => &self.teebox,
            FeatureType::Green => &self.green,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Mapper-Optionen.
/// Wird als `speedgolf_course_mapper.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapperOptions {
    /// Abtastabstand für Pfade in Fuß
    pub sampling_distance_feet: f64,
    /// Ersatzhöhe (Fuß) bei fehlgeschlagener Terrain-Abfrage
    #[serde(default = "default_fallback_elevation_feet")]
    pub fallback_elevation_feet: f64,
    /// Linienbreite normaler Pfade
    pub line_width_normal: f64,
    /// Linienbreite des selektierten Pfads
    pub line_width_selected: f64,
    /// Füll-Deckkraft normaler Polygone
    #[serde(default = "default_fill_opacity_normal")]
    pub fill_opacity_normal: f64,
    /// Füll-Deckkraft des selektierten Polygons
    #[serde(default = "default_fill_opacity_selected")]
    pub fill_opacity_selected: f64,
    /// Farbtabelle
    #[serde(default)]
    pub colors: FeatureColors,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            sampling_distance_feet: SAMPLING_DISTANCE_FEET,
            fallback_elevation_feet: FALLBACK_ELEVATION_FEET,
            line_width_normal: LINE_WIDTH_NORMAL,
            line_width_selected: LINE_WIDTH_SELECTED,
            fill_opacity_normal: FILL_OPACITY_NORMAL,
            fill_opacity_selected: FILL_OPACITY_SELECTED,
            colors: FeatureColors::default(),
        }
    }
}

/// Serde-Default für `fallback_elevation_feet` (Abwärtskompatibilität).
fn default_fallback_elevation_feet() -> f64 {
    FALLBACK_ELEVATION_FEET
}

fn default_fill_opacity_normal() -> f64 {
    FILL_OPACITY_NORMAL
}

fn default_fill_opacity_selected() -> f64 {
    FILL_OPACITY_SELECTED
}

impl MapperOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Korrigiert Werte, die das Resampling entgleisen lassen würden.
    ///
    /// Ein nicht endlicher Abtastabstand wird auf den Standard gesetzt, ein
    /// positiver unter [`MIN_SAMPLING_DISTANCE_FEET`] auf das Minimum. Werte
    /// ≤ 0 bleiben erhalten (kein Resampling).
    pub fn sanitized(mut self) -> Self {
        let distance = self.sampling_distance_feet;
        if !distance.is_finite() {
            log::warn!(
                "Abtastabstand {} ungültig, verwende {} ft",
                distance,
                SAMPLING_DISTANCE_FEET
            );
            self.sampling_distance_feet = SAMPLING_DISTANCE_FEET;
        } else if distance > 0.0 && distance < MIN_SAMPLING_DISTANCE_FEET {
            log::warn!(
                "Abtastabstand {} ft zu klein, verwende {} ft",
                distance,
                MIN_SAMPLING_DISTANCE_FEET
            );
            self.sampling_distance_feet = MIN_SAMPLING_DISTANCE_FEET;
        }
        if !self.fallback_elevation_feet.is_finite() {
            log::warn!("Ersatzhöhe ungültig, verwende {} ft", FALLBACK_ELEVATION_FEET);
            self.fallback_elevation_feet = FALLBACK_ELEVATION_FEET;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("speedgolf_course_mapper"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("speedgolf_course_mapper.toml")
    }

    /// Linienbreite bzw. Deckkraft für normale oder hervorgehobene Darstellung.
    pub fn emphasis(&self, feature_type: FeatureType, selected: bool) -> f64 {
        match (feature_type.is_path(), selected) {
            (true, false) => self.line_width_normal,
            (true, true) => self.line_width_selected,
            (false, false) => self.fill_opacity_normal,
            (false, true) => self.fill_opacity_selected,
        }
    }
}
