//! Three-component `f32` vector for positions, directions and velocities.
//!
//! `Vector3` is a plain `Copy` value with public fields. Arithmetic is
//! component-wise and follows IEEE-754 throughout: NaN and infinities are
//! accepted and propagate, nothing is validated.
//!
//! # Degenerate cases
//! Two inputs have a fixed, silent policy instead of an error:
//! - Division by exactly `0.0` yields the zero vector ([`Vector3::div_scalar`]).
//!   The compound form leaves the receiver untouched ([`Vector3::div_in_place`]).
//! - Normalizing a zero-length vector is a no-op ([`Vector3::normalize`]).
//!
//! Both emit a `trace!` event so a subscriber can surface them.
//!
//! # Usage
//! ```
//! use game3d_math_core::{cross_product, distance, Vector3};
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(cross_product(&a, &b), Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(distance(&a, &a), 0.0);
//! assert_eq!(a / 0.0, Vector3::ZERO);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use tracing::trace;

/// 3D vector with single-precision components.
///
/// `Default` is the zero vector. Equality is exact IEEE comparison of all
/// three fields, so `Eq` is not implemented (NaN is never equal to itself).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// The zero vector `(0, 0, 0)`.
pub const ZERO_VECTOR: Vector3 = Vector3::ZERO;

impl Vector3 {
    /// The zero vector `(0, 0, 0)`.
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Create a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    /// Replace all three components, returning the receiver for chaining.
    #[inline]
    pub fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Components as `[x, y, z]`.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Set every component to `0.0`.
    #[inline]
    pub fn zero(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.z = 0.0;
    }

    /// Sum of squared components.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        vector_mag(self)
    }

    /// Rescale in place to unit length.
    ///
    /// Only a squared magnitude strictly greater than `0.0` is rescaled, by
    /// multiplying each component with `1 / sqrt(mag_sq)`. A zero vector stays
    /// `(0, 0, 0)`. A NaN squared magnitude fails the comparison and is also
    /// left as is.
    pub fn normalize(&mut self) {
        let mag_sq = self.magnitude_squared();
        if mag_sq > 0.0 {
            let one_over_mag = 1.0 / mag_sq.sqrt();
            self.x *= one_over_mag;
            self.y *= one_over_mag;
            self.z *= one_over_mag;
        } else {
            trace!(
                target: "game3d_math::vec3",
                vector = ?self,
                mag_sq,
                "normalize skipped, squared magnitude not positive"
            );
        }
    }

    /// Normalized copy, with the same zero-length policy as [`normalize`](Self::normalize).
    #[inline]
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(&self, other: &Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, see [`cross_product`].
    #[inline]
    #[must_use]
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        cross_product(self, other)
    }

    /// Distance between two points, see [`distance`].
    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: &Vector3) -> f32 {
        distance(self, other)
    }

    /// Component-wise scale by `k`.
    #[inline]
    #[must_use]
    pub fn scale(&self, k: f32) -> Vector3 {
        Vector3::new(self.x * k, self.y * k, self.z * k)
    }

    /// Divide by `k`.
    ///
    /// A divisor of exactly `0.0` (either sign) returns the zero vector.
    /// Otherwise the reciprocal is computed once and applied to every
    /// component.
    #[must_use]
    pub fn div_scalar(&self, k: f32) -> Vector3 {
        if k == 0.0 {
            trace!(target: "game3d_math::vec3", "division by zero, returning zero vector");
            return Vector3::ZERO;
        }
        self.scale(1.0 / k)
    }

    /// Add `other` in place, returning the receiver for chaining.
    #[inline]
    pub fn add_in_place(&mut self, other: &Vector3) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    /// Subtract `other` in place, returning the receiver for chaining.
    #[inline]
    pub fn sub_in_place(&mut self, other: &Vector3) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self
    }

    /// Scale in place, returning the receiver for chaining.
    #[inline]
    pub fn scale_in_place(&mut self, k: f32) -> &mut Self {
        self.x *= k;
        self.y *= k;
        self.z *= k;
        self
    }

    /// Divide in place by `k` and return the result value.
    ///
    /// When `k` is exactly `0.0` the receiver is **not** modified and the
    /// returned value is a fresh zero vector, so the return value and the
    /// receiver disagree in that case. Otherwise the receiver is multiplied by
    /// `1 / k` and a copy of it is returned.
    pub fn div_in_place(&mut self, k: f32) -> Vector3 {
        if k == 0.0 {
            trace!(
                target: "game3d_math::vec3",
                vector = ?self,
                "division by zero, receiver left unchanged"
            );
            return Vector3::ZERO;
        }
        let one_over_k = 1.0 / k;
        self.x *= one_over_k;
        self.y *= one_over_k;
        self.z *= one_over_k;
        *self
    }
}

/// Euclidean length of `a`.
#[inline]
#[must_use]
pub fn vector_mag(a: &Vector3) -> f32 {
    a.magnitude_squared().sqrt()
}

/// Cross product `a × b`.
///
/// Uses the right-handed textbook formula, so `x × y = z`. With the
/// `legacy-cross` feature the y component is computed as
/// `b.z * b.x - a.x * b.z` for bit compatibility with existing data.
#[must_use]
pub fn cross_product(a: &Vector3, b: &Vector3) -> Vector3 {
    #[cfg(not(feature = "legacy-cross"))]
    let y = a.z * b.x - a.x * b.z;
    #[cfg(feature = "legacy-cross")]
    let y = b.z * b.x - a.x * b.z;

    Vector3::new(a.y * b.z - a.z * b.y, y, a.x * b.y - a.y * b.x)
}

/// Distance between points `a` and `b`.
#[must_use]
pub fn distance(a: &Vector3, b: &Vector3) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Vector3::new(v[0], v[1], v[2])
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Neg for &Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        -*self
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add<&Vector3> for &Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: &Vector3) -> Vector3 {
        *self + *rhs
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub<&Vector3> for &Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: &Vector3) -> Vector3 {
        *self - *rhs
    }
}

/// Vector * scalar
impl Mul<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, k: f32) -> Vector3 {
        self.scale(k)
    }
}

/// scalar * Vector
impl Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        Vector3::new(self * v.x, self * v.y, self * v.z)
    }
}

/// Vector * Vector is the dot product
impl Mul for Vector3 {
    type Output = f32;
    #[inline]
    fn mul(self, rhs: Vector3) -> f32 {
        self.dot(&rhs)
    }
}

impl Mul<&Vector3> for &Vector3 {
    type Output = f32;
    #[inline]
    fn mul(self, rhs: &Vector3) -> f32 {
        self.dot(rhs)
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn div(self, k: f32) -> Vector3 {
        self.div_scalar(k)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        self.add_in_place(&rhs);
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        self.sub_in_place(&rhs);
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, k: f32) {
        self.scale_in_place(k);
    }
}

/// Leaves the receiver unchanged when `k` is exactly `0.0`.
impl DivAssign<f32> for Vector3 {
    #[inline]
    fn div_assign(&mut self, k: f32) {
        self.div_in_place(k);
    }
}
