//! By-value vector operations. None of these mutate their inputs or fail.

use game3d_math_core::{cross_product, distance, vector_mag, Vector3};

/// Construct a vector from its components.
#[no_mangle]
pub extern "C" fn vec3_new(x: f32, y: f32, z: f32) -> Vector3 {
    Vector3::new(x, y, z)
}

/// Return the zero vector `(0, 0, 0)`.
#[no_mangle]
pub extern "C" fn vec3_zero_vector() -> Vector3 {
    Vector3::ZERO
}

/// Component-wise negation.
#[no_mangle]
pub extern "C" fn vec3_neg(v: Vector3) -> Vector3 {
    -v
}

#[no_mangle]
pub extern "C" fn vec3_add(a: Vector3, b: Vector3) -> Vector3 {
    a + b
}

#[no_mangle]
pub extern "C" fn vec3_sub(a: Vector3, b: Vector3) -> Vector3 {
    a - b
}

/// Scale `v` by `k`. Scalar multiplication is symmetric so there is no
/// separate left-multiply entry point.
#[no_mangle]
pub extern "C" fn vec3_scale(v: Vector3, k: f32) -> Vector3 {
    v * k
}

/// Divide `v` by `k`. Returns the zero vector when `k` is exactly `0.0`.
#[no_mangle]
pub extern "C" fn vec3_div(v: Vector3, k: f32) -> Vector3 {
    v / k
}

#[no_mangle]
pub extern "C" fn vec3_dot(a: Vector3, b: Vector3) -> f32 {
    a.dot(&b)
}

#[no_mangle]
pub extern "C" fn vec3_cross(a: Vector3, b: Vector3) -> Vector3 {
    cross_product(&a, &b)
}

#[no_mangle]
pub extern "C" fn vec3_magnitude(v: Vector3) -> f32 {
    vector_mag(&v)
}

/// Distance between points `a` and `b`.
#[no_mangle]
pub extern "C" fn vec3_distance(a: Vector3, b: Vector3) -> f32 {
    distance(&a, &b)
}

/// Exact component-wise equality. NaN components never compare equal.
#[no_mangle]
pub extern "C" fn vec3_equals(a: Vector3, b: Vector3) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_value_matches_core() {
        let a = vec3_new(1.0, 2.0, 3.0);
        let b = vec3_new(4.0, 5.0, 6.0);

        assert_eq!(vec3_add(a, b), Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(vec3_sub(b, a), Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(vec3_neg(a), Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(vec3_scale(a, 2.0), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(vec3_div(a, 2.0), Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(vec3_dot(a, b), 32.0);
        assert_eq!(vec3_cross(a, b), cross_product(&a, &b));
        assert_eq!(vec3_magnitude(vec3_new(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(vec3_distance(a, a), 0.0);
    }

    #[test]
    fn test_div_by_zero_returns_zero_vector() {
        assert_eq!(vec3_div(vec3_new(1.0, 2.0, 3.0), 0.0), vec3_zero_vector());
    }

    #[test]
    fn test_equals() {
        let a = vec3_new(1.0, 2.0, 3.0);
        assert!(vec3_equals(a, a));
        assert!(!vec3_equals(a, vec3_new(1.0, 2.0, 3.5)));

        let nan = vec3_new(f32::NAN, 0.0, 0.0);
        assert!(!vec3_equals(nan, nan));
    }

    #[test]
    fn test_zero_static() {
        assert_eq!(crate::VECTOR3_ZERO, vec3_zero_vector());
    }
}
