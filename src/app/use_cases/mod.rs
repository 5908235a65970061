//! Use-Cases der Application-Layer-Orchestrierung.

pub mod creation;
pub mod define;
pub mod delete;
pub mod drag;
pub mod markers;
pub mod render;
pub mod resample;
pub mod selection;
