//! Application-Layer: Controller, State, Events, Registry und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod course_store;
pub mod events;
pub mod feature_registry;
pub mod handlers;
mod intent_mapping;
pub mod snap;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Editor-Sitzung (Kurs, Registry, Selektion).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use course_store::CourseStore;
pub use events::{AppCommand, AppIntent};
pub use feature_registry::{FeatureRegistry, HoleMarkers, IdKind, MarkerBinding, TeeRegistry};
pub use state::{AppState, InProgressFeature, SelectionState, StartFinishVisibility};
