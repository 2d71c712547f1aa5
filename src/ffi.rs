//! C FFI bindings for mobile platforms.
//!
//! Mobile hosts load this crate as a native library and call in through the
//! C ABI; they bring their own dispatch threads, so these entry points are
//! synchronous.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::adapter::{BridgeAdapter, Sha256Adapter};

/// Compute the SHA-256 digest of a NUL-terminated UTF-8 string.
/// - input: NUL-terminated string, or null (hashed as the empty string)
/// - returns: newly allocated NUL-terminated lowercase hex string, or null
///   if the input is not valid UTF-8 or the provider failed
///
/// The caller must release the returned string with `bridge_string_free`.
#[no_mangle]
pub extern "C" fn bridge_sha256_hex(input: *const c_char) -> *mut c_char {
    let text = if input.is_null() {
        ""
    } else {
        match unsafe { CStr::from_ptr(input) }.to_str() {
            Ok(text) => text,
            Err(_) => return ptr::null_mut(),
        }
    };

    match Sha256Adapter::new().call(Some(text)) {
        // Hex output never contains an interior NUL.
        Ok(hex) => CString::new(hex)
            .map(CString::into_raw)
            .unwrap_or(ptr::null_mut()),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a string returned by `bridge_sha256_hex`.
#[no_mangle]
pub extern "C" fn bridge_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let out = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        bridge_string_free(ptr);
        out
    }

    #[test]
    fn test_known_vector() {
        let input = CString::new("test").unwrap();
        let out = take_string(bridge_sha256_hex(input.as_ptr()));
        assert_eq!(
            out,
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_null_input_hashes_empty_string() {
        let out = take_string(bridge_sha256_hex(ptr::null()));
        assert_eq!(
            out,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_free_accepts_null() {
        bridge_string_free(ptr::null_mut());
    }
}
