// Callers must pass pointers obtained from this library (or valid C strings).
// Per-function requirements are in the doc comments.
#![allow(clippy::missing_safety_doc)]

// raiz-ffi: C-compatible FFI layer for PortugueseStemmer.
//
// Memory management rules:
// - Opaque `PortugueseStemmer` pointer: created by `raiz_new`, freed by `raiz_free`.
// - Returned strings: caller must free with `raiz_free_str`.
// - `raiz_version` returns a static string: do NOT free it.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::sync::LazyLock;

use raiz_pt::PortugueseStemmer;
use raiz_pt::corpus;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a stemmer with default options.
///
/// Never returns NULL. Free with `raiz_free`.
#[unsafe(no_mangle)]
pub extern "C" fn raiz_new() -> *mut PortugueseStemmer {
    Box::into_raw(Box::new(PortugueseStemmer::new()))
}

/// Free a stemmer created by `raiz_new`. NULL is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn raiz_free(handle: *mut PortugueseStemmer) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Stemming ────────────────────────────────────────────────────

/// Stem a word.
///
/// Returns a heap-allocated C string that the caller must free with
/// `raiz_free_str`. Returns NULL if `handle` or `word` is NULL, or if
/// `word` is not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn raiz_stem(
    handle: *const PortugueseStemmer,
    word: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    str_to_c(&handle.stem(word))
}

/// Set whether words are lowercased before stemming (0 = off, non-zero = on).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn raiz_set_lowercase(handle: *mut PortugueseStemmer, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_lowercase(value != 0);
    }
}

// ── Corpus validation ───────────────────────────────────────────

/// Check the stemmer against a `word stem` corpus file.
///
/// Returns the number of mismatching words, or -1 on failure. On failure,
/// if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `raiz_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn raiz_check_corpus(
    handle: *const PortugueseStemmer,
    path: *const c_char,
    error_out: *mut *mut c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return -1;
    };
    let Some(path) = cstr_to_str(path) else {
        set_error(error_out, "path is null or not UTF-8");
        return -1;
    };

    match corpus::load(path) {
        Ok(entries) => {
            let report = corpus::verify(handle, &entries);
            c_int::try_from(report.mismatches.len()).unwrap_or(c_int::MAX)
        }
        Err(e) => {
            set_error(error_out, &e.to_string());
            -1
        }
    }
}

// ── Version / memory ────────────────────────────────────────────

/// Get the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
#[unsafe(no_mangle)]
pub extern "C" fn raiz_version() -> *const c_char {
    static VERSION: LazyLock<CString> =
        LazyLock::new(|| CString::new(raiz_pt::version()).unwrap_or_default());
    VERSION.as_ptr()
}

/// Free a string returned by this library. NULL is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn raiz_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Helpers ─────────────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).map_or(ptr::null_mut(), CString::into_raw)
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}
