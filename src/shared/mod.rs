//! Layer-neutrale Bausteine: Geo-Mathematik und Optionen.

pub mod geo_math;
pub mod options;

pub use options::{FeatureColors, MapperOptions};
