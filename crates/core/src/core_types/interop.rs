//! Conversions between [`Vector3`] and `nalgebra::Vector3<f32>`.
//!
//! Enabled by the `nalgebra` feature (on by default) for engine code that
//! already stores positions as nalgebra vectors. Conversions copy the three
//! components bit-for-bit.

use super::vec3::Vector3;

impl From<nalgebra::Vector3<f32>> for Vector3 {
    #[inline]
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f32> {
    #[inline]
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<&nalgebra::Vector3<f32>> for Vector3 {
    #[inline]
    fn from(v: &nalgebra::Vector3<f32>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}
