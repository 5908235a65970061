//! Application State: zentrale Datenhaltung der Editor-Sitzung.
//!
//! Alle veränderlichen Sitzungsdaten (Registry, Selektion, laufende
//! Zeichnung, angezeigtes Tee) liegen explizit hier und werden Handlern
//! als `&mut AppState` übergeben.

use super::course_store::CourseStore;
use super::feature_registry::FeatureRegistry;
use super::CommandLog;
use crate::core::{Course, FeatureType, MapperError, Tee};
use crate::shared::MapperOptions;

/// Feature, das gerade gezeichnet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InProgressFeature {
    /// Loch (1-basiert)
    pub hole: u32,
    /// Feature-Typ
    pub feature_type: FeatureType,
}

/// Selektion: höchstens ein Feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// ID des selektierten Features
    pub selected_feature: Option<String>,
}

impl SelectionState {
    /// Erstellt eine leere Selektion.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Schalter für Start- und Ziellinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartFinishVisibility {
    /// Startlinie anzeigen
    pub start: bool,
    /// Ziellinie anzeigen
    pub finish: bool,
}

impl Default for StartFinishVisibility {
    fn default() -> Self {
        Self {
            start: true,
            finish: true,
        }
    }
}

impl StartFinishVisibility {
    /// `true` wenn Features dieses Typs angezeigt werden dürfen.
    pub fn allows(&self, feature_type: FeatureType) -> bool {
        match feature_type {
            FeatureType::StartPath => self.start,
            FeatureType::FinishPath => self.finish,
            _ => true,
        }
    }
}

/// Hauptzustand der Anwendung
#[derive(Default)]
pub struct AppState {
    /// Kursdaten und ausgelieferte Updates
    pub course: CourseStore,
    /// Registry der Karten-Elemente pro Tee
    pub registry: FeatureRegistry,
    /// Selection-State
    pub selection: SelectionState,
    /// Laufende Zeichnung (None = Idle)
    pub drawing: Option<InProgressFeature>,
    /// Aktuell angezeigtes Tee
    pub displayed_tee: Option<String>,
    /// Start-/Ziellinien-Schalter
    pub sf_visibility: StartFinishVisibility,
    /// Laufzeit-Optionen
    pub options: MapperOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen leeren App-State ohne Tees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen App-State über einem Kurs.
    pub fn with_course(course: Course) -> Self {
        Self {
            course: CourseStore::new(course),
            ..Self::default()
        }
    }

    /// Name des angezeigten Tees.
    pub fn displayed_tee(&self) -> Result<&str, MapperError> {
        self.displayed_tee.as_deref().ok_or(MapperError::NoActiveTee)
    }

    /// Daten des angezeigten Tees.
    pub fn active_tee(&self) -> Result<&Tee, MapperError> {
        let name = self.displayed_tee()?;
        self.course.course().tee(name)
    }

    /// `true` solange ein Feature gezeichnet wird.
    pub fn is_defining(&self) -> bool {
        self.drawing.is_some()
    }

    /// ID des selektierten Features.
    pub fn selected_feature(&self) -> Option<&str> {
        self.selection.selected_feature.as_deref()
    }
}
