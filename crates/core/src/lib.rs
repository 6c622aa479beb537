//! 3D Game Math Core Library
//!
//! A small single-precision 3D vector primitive for game, graphics and physics
//! code: component-wise arithmetic, normalization, dot and cross products and
//! point distance.
//!
//! ## Degenerate inputs
//!
//! Nothing in this crate returns an error or panics. Division by exactly `0.0`
//! produces the zero vector and normalizing a zero-length vector leaves it
//! unchanged. Non-finite components are accepted and propagate.
//!
//! ## Features
//!
//! - `nalgebra` (default): `From` conversions to and from `nalgebra::Vector3<f32>`
//! - `legacy-cross`: bit-compatible cross product middle term for existing data

// Core types and utilities
pub mod core_types;

// Re-export core types
pub use core_types::{cross_product, distance, vector_mag, Vector3, ZERO_VECTOR};
