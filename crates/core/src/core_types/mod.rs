//! Core types and utilities

#[cfg(feature = "nalgebra")]
pub mod interop;
pub mod vec3;

pub use vec3::{cross_product, distance, vector_mag, Vector3, ZERO_VECTOR};
