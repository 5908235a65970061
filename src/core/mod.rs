//! Core-Domänentypen: Kurs, Tees, Löcher, Geo-Punkte und Feature-Schlüssel.

pub mod course;
pub mod error;
pub mod feature;
pub mod geo_point;

pub use course::{Course, FeatureCoords, Hole, HoleFeatureUpdate, Tee};
pub use error::MapperError;
pub use feature::{
    feature_id, label_id, FeatureKey, FeatureType, MarkerRole, LABEL_ID_SUFFIX, MAX_HOLES,
};
pub use geo_point::{GeoPoint, LngLat};
