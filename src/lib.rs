//! Morphology development kit
//!
//! 3D point and point sequence arithmetic shared by morphology readers
//!
//! Center of gravity and spread of point clouds such as soma contours

#[macro_use]
pub mod morph_error;
pub mod morph_model;

pub use morph_error::{ErrorKind, MorphError};
pub use morph_model::*;
