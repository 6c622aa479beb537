//! In-place vector operations on a caller-owned `Vector3`.
//!
//! Every function returns `Vector3ErrorCode::Ok` on success and clears the
//! last-error slot. A null receiver or operand returns `NullPointer`, records
//! a message and leaves memory untouched.

use game3d_math_core::Vector3;

use crate::error::Vector3ErrorCode;
use crate::helpers::{read_vector, with_vector_mut};

/// Set `*v` to `(0, 0, 0)`.
///
/// # Safety
/// `v` must be null or point to a valid, writable `Vector3`.
#[no_mangle]
pub unsafe extern "C" fn vec3_zero(v: *mut Vector3) -> Vector3ErrorCode {
    unsafe { with_vector_mut(v, "v", Vector3::zero) }
}

/// Normalize `*v` to unit length. A zero-length vector is left unchanged and
/// still returns `Ok`.
///
/// # Safety
/// `v` must be null or point to a valid, writable `Vector3`.
#[no_mangle]
pub unsafe extern "C" fn vec3_normalize(v: *mut Vector3) -> Vector3ErrorCode {
    unsafe { with_vector_mut(v, "v", Vector3::normalize) }
}

/// `*v += *other`
///
/// # Safety
/// `v` must be null or point to a valid, writable `Vector3`.
/// `other` must be null or point to a valid `Vector3`.
#[no_mangle]
pub unsafe extern "C" fn vec3_add_assign(
    v: *mut Vector3,
    other: *const Vector3,
) -> Vector3ErrorCode {
    let other = match unsafe { read_vector(other, "other") } {
        Ok(other) => other,
        Err(code) => return code,
    };
    unsafe {
        with_vector_mut(v, "v", |v| {
            *v += other;
        })
    }
}

/// `*v -= *other`
///
/// # Safety
/// `v` must be null or point to a valid, writable `Vector3`.
/// `other` must be null or point to a valid `Vector3`.
#[no_mangle]
pub unsafe extern "C" fn vec3_sub_assign(
    v: *mut Vector3,
    other: *const Vector3,
) -> Vector3ErrorCode {
    let other = match unsafe { read_vector(other, "other") } {
        Ok(other) => other,
        Err(code) => return code,
    };
    unsafe {
        with_vector_mut(v, "v", |v| {
            *v -= other;
        })
    }
}

/// `*v *= k`
///
/// # Safety
/// `v` must be null or point to a valid, writable `Vector3`.
#[no_mangle]
pub unsafe extern "C" fn vec3_scale_assign(v: *mut Vector3, k: f32) -> Vector3ErrorCode {
    unsafe {
        with_vector_mut(v, "v", |v| {
            *v *= k;
        })
    }
}

/// `*v /= k`, writing the operation's result value to `out` when non-null.
///
/// When `k` is exactly `0.0`, `*v` is left unchanged and `*out` receives the
/// zero vector. Otherwise `*v` is divided and `*out` receives its new value.
/// `out` is written after `*v`, so passing `v` as `out` is allowed and the
/// result value wins.
///
/// # Safety
/// `v` must be null or point to a valid, writable `Vector3`.
/// `out` must be null or point to writable memory for one `Vector3`.
#[no_mangle]
pub unsafe extern "C" fn vec3_div_assign(
    v: *mut Vector3,
    k: f32,
    out: *mut Vector3,
) -> Vector3ErrorCode {
    let mut result = Vector3::ZERO;
    let code = unsafe {
        with_vector_mut(v, "v", |v| {
            result = v.div_in_place(k);
        })
    };
    if code == Vector3ErrorCode::Ok {
        // SAFETY: caller guarantees out is null or valid and writable
        if let Some(out) = unsafe { out.as_mut() } {
            *out = result;
        }
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{vec3_get_last_error, vec3_get_last_error_code};
    use std::ffi::CStr;
    use std::ptr;

    #[test]
    fn test_zero_and_normalize() {
        let mut v = Vector3::new(0.0, 3.0, 4.0);
        unsafe {
            assert_eq!(vec3_normalize(&mut v), Vector3ErrorCode::Ok);
        }
        assert!((v.magnitude() - 1.0).abs() < 1e-6);

        unsafe {
            assert_eq!(vec3_zero(&mut v), Vector3ErrorCode::Ok);
            assert_eq!(vec3_normalize(&mut v), Vector3ErrorCode::Ok);
        }
        assert_eq!(v, Vector3::ZERO);
    }

    #[test]
    fn test_compound_ops() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        let one = Vector3::new(1.0, 1.0, 1.0);
        unsafe {
            assert_eq!(vec3_add_assign(&mut v, &one), Vector3ErrorCode::Ok);
            assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
            assert_eq!(vec3_sub_assign(&mut v, &one), Vector3ErrorCode::Ok);
            assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
            assert_eq!(vec3_scale_assign(&mut v, 2.0), Vector3ErrorCode::Ok);
            assert_eq!(v, Vector3::new(2.0, 4.0, 6.0));
        }
    }

    #[test]
    fn test_div_assign_writes_result() {
        let mut v = Vector3::new(2.0, 4.0, 6.0);
        let mut out = Vector3::new(9.0, 9.0, 9.0);
        unsafe {
            assert_eq!(vec3_div_assign(&mut v, 2.0, &mut out), Vector3ErrorCode::Ok);
        }
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(out, v);

        // out is optional
        unsafe {
            assert_eq!(
                vec3_div_assign(&mut v, 1.0, ptr::null_mut()),
                Vector3ErrorCode::Ok
            );
        }
    }

    #[test]
    fn test_div_assign_by_zero_keeps_receiver() {
        let mut v = Vector3::new(2.0, 4.0, 6.0);
        let mut out = Vector3::new(9.0, 9.0, 9.0);
        unsafe {
            assert_eq!(vec3_div_assign(&mut v, 0.0, &mut out), Vector3ErrorCode::Ok);
        }
        assert_eq!(v, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(out, Vector3::ZERO);
    }

    #[test]
    fn test_div_assign_out_may_alias_receiver() {
        let mut v = Vector3::new(2.0, 4.0, 6.0);
        let p: *mut Vector3 = &mut v;
        unsafe {
            assert_eq!(vec3_div_assign(p, 2.0, p), Vector3ErrorCode::Ok);
            assert_eq!(*p, Vector3::new(1.0, 2.0, 3.0));

            // zero divisor leaves the receiver alone, then out takes the zero vector
            assert_eq!(vec3_div_assign(p, 0.0, p), Vector3ErrorCode::Ok);
            assert_eq!(*p, Vector3::ZERO);
        }
    }

    #[test]
    fn test_null_receiver_sets_last_error() {
        let code = unsafe { vec3_normalize(ptr::null_mut()) };
        assert_eq!(code, Vector3ErrorCode::NullPointer);
        assert_eq!(vec3_get_last_error_code(), Vector3ErrorCode::NullPointer);

        let msg = unsafe { CStr::from_ptr(vec3_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "Parameter 'v' cannot be null");

        // success clears the slot
        let mut v = Vector3::new(1.0, 0.0, 0.0);
        unsafe {
            assert_eq!(vec3_zero(&mut v), Vector3ErrorCode::Ok);
        }
        assert_eq!(vec3_get_last_error_code(), Vector3ErrorCode::Ok);
        assert!(vec3_get_last_error().is_null());
    }

    #[test]
    fn test_null_operand_leaves_receiver() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        let code = unsafe { vec3_add_assign(&mut v, ptr::null()) };
        assert_eq!(code, Vector3ErrorCode::NullPointer);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let msg = unsafe { CStr::from_ptr(vec3_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "Parameter 'other' cannot be null");
    }
}
