//! C ABI for the `game3d-math-core` vector type.
//!
//! `Vector3` is `#[repr(C)]` and crosses the boundary by value. Pure
//! operations take and return vectors by value and cannot fail. Mutating
//! operations take a pointer to the receiver and return a
//! [`Vector3ErrorCode`]; the only failure is a null pointer, reported through
//! the thread-local last-error slot ([`vec3_get_last_error`]).
//!
//! The C header `Game3DMath.h` is generated by `build.rs`.

mod error;
mod helpers;
pub mod in_place;
pub mod vector;

pub use error::{vec3_get_last_error, vec3_get_last_error_code, Vector3ErrorCode};
pub use game3d_math_core::Vector3;

/// Process-wide zero vector `(0, 0, 0)`. Never written.
#[no_mangle]
pub static VECTOR3_ZERO: Vector3 = Vector3::ZERO;
