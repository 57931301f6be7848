//! C ABI entry points.

use std::ffi::{CStr, CString};

use libc::{c_char, c_int};

use crate::ffi::SearchRequest;
use crate::models::Catalog;
use crate::search::best_listings;

/// Success.
pub const USTOWAGE_OK: c_int = 0;
/// A null pointer was passed.
pub const USTOWAGE_ERR_NULL_PTR: c_int = -1;
/// The request was not valid JSON (or not valid UTF-8).
pub const USTOWAGE_ERR_INVALID_JSON: c_int = -2;
/// The request parsed but failed input validation.
pub const USTOWAGE_ERR_INVALID_INPUT: c_int = -3;

/// Runs a storage search for a JSON request.
///
/// On success writes a newly allocated JSON result string to `result_json`
/// and returns [`USTOWAGE_OK`]. The caller owns the string and must
/// release it with [`ustowage_free_string`].
///
/// # Safety
///
/// `request_json` must be a valid NUL-terminated C string and
/// `result_json` a valid pointer to writable storage for one pointer.
#[no_mangle]
pub unsafe extern "C" fn ustowage_search(
    request_json: *const c_char,
    result_json: *mut *mut c_char,
) -> c_int {
    if request_json.is_null() || result_json.is_null() {
        return USTOWAGE_ERR_NULL_PTR;
    }

    let text = match CStr::from_ptr(request_json).to_str() {
        Ok(text) => text,
        Err(_) => return USTOWAGE_ERR_INVALID_JSON,
    };
    let request: SearchRequest = match serde_json::from_str(text) {
        Ok(request) => request,
        Err(_) => return USTOWAGE_ERR_INVALID_JSON,
    };

    let catalog = Catalog::from_listings(request.listings);
    let results = match best_listings(&catalog, &request.vehicles) {
        Ok(results) => results,
        Err(_) => return USTOWAGE_ERR_INVALID_INPUT,
    };

    let json = match serde_json::to_string(&results) {
        Ok(json) => json,
        Err(_) => return USTOWAGE_ERR_INVALID_INPUT,
    };
    match CString::new(json) {
        Ok(cstring) => {
            *result_json = cstring.into_raw();
            USTOWAGE_OK
        }
        Err(_) => USTOWAGE_ERR_INVALID_INPUT,
    }
}

/// Frees a string returned by [`ustowage_search`].
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned through
/// `result_json` and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn ustowage_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
