use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
///
/// # Example
/// ```rust,ignore
/// let err = DefaultVector3Error::null_pointer("out");
/// assert_eq!(err.code(), Vector3ErrorCode::NullPointer);
/// assert_eq!(err.msg(), "Parameter 'out' cannot be null");
/// ```
pub(crate) trait Vector3Error {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> Vector3ErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `Vector3Error` for the FFI failure cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVector3Error {
    code: Vector3ErrorCode,
    msg: String,
}

impl DefaultVector3Error {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"v"`, `"other"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: Vector3ErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl Vector3Error for DefaultVector3Error {
    fn code(&self) -> Vector3ErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by the in-place vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
///
/// Degenerate math inputs (zero divisor, zero-length normalize) are not
/// errors and return `Ok`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vector3ErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    static LAST_ERROR: RefCell<(Option<CString>, Vector3ErrorCode)> =
        const { RefCell::new((None, Vector3ErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, Vector3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, Vector3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last in-place call failed.
/// - `null` if the last in-place call on this thread succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next in-place vector call on this
/// thread. **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// if (vec3_normalize(ptr) != Ok) {
///     const char* error = vec3_get_last_error();
///     if (error) {
///         printf("normalize failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn vec3_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| {
        cstring
            .as_ref()
            .map_or(ptr::null(), |cs| cs.as_ptr())
    })
}

/// Retrieve the most recent FFI error code for this thread.
#[no_mangle]
pub extern "C" fn vec3_get_last_error_code() -> Vector3ErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_pointer_message() {
        let err = DefaultVector3Error::null_pointer("other");
        assert_eq!(err.code(), Vector3ErrorCode::NullPointer);
        assert_eq!(err.msg(), "Parameter 'other' cannot be null");
    }

    #[test]
    fn test_fresh_thread_has_no_error() {
        std::thread::spawn(|| {
            assert!(vec3_get_last_error().is_null());
            assert_eq!(vec3_get_last_error_code(), Vector3ErrorCode::Ok);
        })
        .join()
        .unwrap();
    }
}
