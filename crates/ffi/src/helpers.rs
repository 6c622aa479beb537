use crate::error::{with_last_error_mut, DefaultVector3Error, Vector3Error, Vector3ErrorCode};
use game3d_math_core::Vector3;
use std::ffi::CString;
use tracing::warn;

/// Set the thread-local error message and code.
/// Accepts any type implementing `Vector3Error` trait.
pub(crate) fn set_last_error(error: &impl Vector3Error) {
    warn!(target: "game3d_math::ffi", code = ?error.code(), "{}", error.msg());
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl Vector3Error) -> Vector3ErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful in-place operations.
pub(crate) fn clear_last_error() -> Vector3ErrorCode {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = Vector3ErrorCode::Ok;
    });
    Vector3ErrorCode::Ok
}

/// Run `func` on the vector behind `ptr`, recording a null-pointer error on failure.
///
/// # Safety
/// `ptr` must be null or point to a valid, writable `Vector3`.
pub(crate) unsafe fn with_vector_mut<F>(
    ptr: *mut Vector3,
    param_name: &str,
    func: F,
) -> Vector3ErrorCode
where
    F: FnOnce(&mut Vector3),
{
    // SAFETY: caller guarantees ptr is null or valid and writable
    match unsafe { ptr.as_mut() } {
        Some(v) => {
            func(v);
            clear_last_error()
        }
        None => track_error(&DefaultVector3Error::null_pointer(param_name)),
    }
}

/// Read the vector behind `ptr`, recording a null-pointer error on failure.
///
/// # Safety
/// `ptr` must be null or point to a valid `Vector3`.
pub(crate) unsafe fn read_vector(
    ptr: *const Vector3,
    param_name: &str,
) -> Result<Vector3, Vector3ErrorCode> {
    // SAFETY: caller guarantees ptr is null or valid for reads
    match unsafe { ptr.as_ref() } {
        Some(v) => Ok(*v),
        None => Err(track_error(&DefaultVector3Error::null_pointer(param_name))),
    }
}
