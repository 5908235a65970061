//! Speedgolf Course Mapper Library.
//! Geometrie- und Feature-Konsistenz-Kern des Kurs-Editors, als Library
//! exportiert für Host-Anwendungen und Tests.

pub mod app;
pub mod core;
pub mod map;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CourseStore, FeatureRegistry};
pub use core::{
    feature_id, Course, FeatureCoords, FeatureKey, FeatureType, GeoPoint, Hole,
    HoleFeatureUpdate, LngLat, MapperError, MarkerRole, Tee,
};
pub use map::{
    DrawMode, DrawTool, DrawnGeometry, HeadlessDrawTool, HeadlessMap, MapHandle, MarkerId,
    ScreenPoint,
};
pub use shared::{FeatureColors, MapperOptions};
