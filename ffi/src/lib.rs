/*
 * lib.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Mimewords, a decoder for MIME encoded-words and Quoted-Printable.
 *
 * Mimewords is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Mimewords is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Mimewords.  If not, see <http://www.gnu.org/licenses/>.
 */

//! C FFI for mimewords core. Decodes RFC 2047 encoded-words and Quoted-Printable.
//! Returned strings are newly allocated (free with mimewords_free_string); returned byte buffers
//! are freed with mimewords_free_bytes. All string parameters are UTF-8 NUL-terminated.
//! On failure functions return NULL and mimewords_last_error describes why.

use libc::{c_char, c_int, size_t};
use std::ffi::{CStr, CString};
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};

use mimewords_core::{CharsetFailurePolicy, DecodeError, DecodeOptions, Decoded, Decoder};

/// Unknown charsets fail the call (default).
pub const MIMEWORDS_CHARSET_FAILURE_PROPAGATE: c_int = 0;
/// Unknown charsets leave the encoded-word undecoded.
pub const MIMEWORDS_CHARSET_FAILURE_KEEP_ORIGINAL: c_int = 1;

/// When true, encoded-words with unknown charsets are kept as-is instead of failing.
static KEEP_ORIGINAL: AtomicBool = AtomicBool::new(false);
/// When true, raw header bytes are read as UTF-8 with ISO-8859-1 fallback.
static SMTP_UTF8: AtomicBool = AtomicBool::new(true);

thread_local! {
    static LAST_ERROR: std::cell::RefCell<Option<CString>> = std::cell::RefCell::new(None);
}

fn set_last_error(msg: &str) {
    let msg = CString::new(msg).unwrap_or_else(|_| CString::from(c"(error)"));
    LAST_ERROR.with(|e| *e.borrow_mut() = Some(msg));
}

fn clear_last_error() {
    LAST_ERROR.with(|e| *e.borrow_mut() = None);
}

fn decoder() -> Decoder {
    let policy = if KEEP_ORIGINAL.load(Ordering::SeqCst) {
        CharsetFailurePolicy::KeepOriginal
    } else {
        CharsetFailurePolicy::Propagate
    };
    Decoder::new().with_options(
        DecodeOptions::new()
            .charset_failure(policy)
            .smtp_utf8(SMTP_UTF8.load(Ordering::SeqCst)),
    )
}

unsafe fn ptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Hand a decode result to C: allocated string on success, NULL plus last error otherwise.
fn string_result(result: Result<String, DecodeError>) -> *mut c_char {
    match result {
        Ok(s) => match CString::new(s) {
            Ok(c) => {
                clear_last_error();
                c.into_raw()
            }
            Err(_) => {
                set_last_error("decoded text contains a NUL character");
                ptr::null_mut()
            }
        },
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Version string (static, do not free).
#[no_mangle]
pub extern "C" fn mimewords_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Last error message from a failed call on this thread. Valid until next FFI call. Do not free.
#[no_mangle]
pub extern "C" fn mimewords_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Free a string returned by a mimewords_decode_* function. No-op if ptr is NULL.
#[no_mangle]
pub unsafe extern "C" fn mimewords_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = CString::from_raw(ptr);
    }
}

/// Free a buffer returned by mimewords_decode_quoted_printable_bytes. len must be the length
/// reported by that call. No-op if ptr is NULL.
#[no_mangle]
pub unsafe extern "C" fn mimewords_free_bytes(ptr: *mut u8, len: size_t) {
    if !ptr.is_null() {
        let _ = Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, len));
    }
}

/// Set the unknown-charset policy: MIMEWORDS_CHARSET_FAILURE_PROPAGATE or
/// MIMEWORDS_CHARSET_FAILURE_KEEP_ORIGINAL. Applies to all threads.
#[no_mangle]
pub extern "C" fn mimewords_set_charset_failure_policy(policy: c_int) {
    KEEP_ORIGINAL.store(policy == MIMEWORDS_CHARSET_FAILURE_KEEP_ORIGINAL, Ordering::SeqCst);
}

/// Set whether raw header bytes are tried as UTF-8 first (1) or always read as ISO-8859-1 (0).
#[no_mangle]
pub extern "C" fn mimewords_set_smtp_utf8(smtp_utf8: c_int) {
    SMTP_UTF8.store(smtp_utf8 != 0, Ordering::SeqCst);
}

/// 1 if input is a single syntactically valid encoded-word, 0 otherwise (including NULL).
#[no_mangle]
pub unsafe extern "C" fn mimewords_is_mime_word(input: *const c_char) -> c_int {
    clear_last_error();
    match ptr_to_str(input) {
        Some(s) if mimewords_core::is_mime_word(s) => 1,
        _ => 0,
    }
}

/// Decode one encoded-word; other input is returned unchanged. Caller frees with
/// mimewords_free_string. NULL on error.
#[no_mangle]
pub unsafe extern "C" fn mimewords_decode_mime_word(input: *const c_char) -> *mut c_char {
    let Some(s) = ptr_to_str(input) else {
        set_last_error("input is null or not valid UTF-8");
        return ptr::null_mut();
    };
    string_result(decoder().decode_mime_word(s))
}

/// Decode all encoded-words in a header value. Caller frees with mimewords_free_string.
/// NULL on error.
#[no_mangle]
pub unsafe extern "C" fn mimewords_decode_mime_words(input: *const c_char) -> *mut c_char {
    let Some(s) = ptr_to_str(input) else {
        set_last_error("input is null or not valid UTF-8");
        return ptr::null_mut();
    };
    string_result(decoder().decode_mime_words(s))
}

/// Decode a raw header value of len bytes (not NUL-terminated) including encoded-words.
/// Caller frees with mimewords_free_string. NULL on error.
#[no_mangle]
pub unsafe extern "C" fn mimewords_decode_header_value(data: *const u8, len: size_t) -> *mut c_char {
    if data.is_null() {
        set_last_error("data is null");
        return ptr::null_mut();
    }
    let raw = std::slice::from_raw_parts(data, len);
    string_result(decoder().decode_header_value(raw))
}

/// Decode Quoted-Printable text and interpret it in charset (e.g. "utf-8"). Caller frees with
/// mimewords_free_string. NULL on error, including an unknown charset.
#[no_mangle]
pub unsafe extern "C" fn mimewords_decode_quoted_printable(
    input: *const c_char,
    charset: *const c_char,
) -> *mut c_char {
    let (Some(s), Some(cs)) = (ptr_to_str(input), ptr_to_str(charset)) else {
        set_last_error("input or charset is null or not valid UTF-8");
        return ptr::null_mut();
    };
    let result = decoder()
        .decode_quoted_printable(s, Some(cs))
        .map(|d| match d {
            Decoded::Text(t) => t,
            Decoded::Bytes(b) => String::from_utf8_lossy(&b).into_owned(),
        });
    string_result(result)
}

/// Decode Quoted-Printable text to raw bytes. The length is written to out_len. Caller frees
/// with mimewords_free_bytes(ptr, *out_len). NULL on error.
#[no_mangle]
pub unsafe extern "C" fn mimewords_decode_quoted_printable_bytes(
    input: *const c_char,
    out_len: *mut size_t,
) -> *mut u8 {
    if out_len.is_null() {
        set_last_error("out_len is null");
        return ptr::null_mut();
    }
    let Some(s) = ptr_to_str(input) else {
        set_last_error("input is null or not valid UTF-8");
        return ptr::null_mut();
    };
    let bytes = mimewords_core::decode_quoted_printable(s).into_boxed_slice();
    *out_len = bytes.len();
    clear_last_error();
    Box::into_raw(bytes) as *mut u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { mimewords_free_string(ptr) };
        s
    }

    fn last_error() -> String {
        let ptr = mimewords_last_error();
        assert!(!ptr.is_null());
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }

    #[test]
    fn version() {
        let v = unsafe { CStr::from_ptr(mimewords_version()) };
        assert_eq!(v.to_str().unwrap(), "0.1.0");
    }

    #[test]
    fn is_mime_word() {
        unsafe {
            assert_eq!(mimewords_is_mime_word(c"=?UTF-8?Q?a?=".as_ptr()), 1);
            assert_eq!(mimewords_is_mime_word(c"plain".as_ptr()), 0);
            assert_eq!(mimewords_is_mime_word(ptr::null()), 0);
        }
    }

    #[test]
    fn is_mime_word_clears_stale_error() {
        let out = unsafe { mimewords_decode_mime_word(ptr::null()) };
        assert!(out.is_null());
        assert!(!mimewords_last_error().is_null());
        assert_eq!(unsafe { mimewords_is_mime_word(c"=?UTF-8?Q?a?=".as_ptr()) }, 1);
        assert!(mimewords_last_error().is_null());
    }

    #[test]
    fn decode_words() {
        let input = CString::new("=?ISO-8859-1?Q?a?=\r\n =?ISO-8859-1?Q?b?= c").unwrap();
        let out = unsafe { mimewords_decode_mime_words(input.as_ptr()) };
        assert_eq!(take_string(out), "ab c");
        assert!(mimewords_last_error().is_null());
    }

    #[test]
    fn decode_word_unknown_charset_sets_error() {
        let out = unsafe { mimewords_decode_mime_word(c"=?x-bogus?Q?a?=".as_ptr()) };
        assert!(out.is_null());
        assert_eq!(last_error(), "unknown charset: \"x-bogus\"");
    }

    #[test]
    fn decode_word_null_input() {
        let out = unsafe { mimewords_decode_mime_word(ptr::null()) };
        assert!(out.is_null());
        assert_eq!(last_error(), "input is null or not valid UTF-8");
    }

    #[test]
    fn decoded_nul_is_an_error() {
        // "AA==" is a single zero byte.
        let out = unsafe { mimewords_decode_mime_word(c"=?utf-8?B?AA==?=".as_ptr()) };
        assert!(out.is_null());
        assert_eq!(last_error(), "decoded text contains a NUL character");
    }

    #[test]
    fn quoted_printable_text_and_bytes() {
        let out = unsafe {
            mimewords_decode_quoted_printable(c"p=C3=A9dagogue=\n".as_ptr(), c"utf-8".as_ptr())
        };
        assert_eq!(take_string(out), "p\u{E9}dagogue");

        let mut len: size_t = 0;
        let buf = unsafe { mimewords_decode_quoted_printable_bytes(c"=DE=AD".as_ptr(), &mut len) };
        assert!(!buf.is_null());
        assert_eq!(len, 2);
        assert_eq!(unsafe { std::slice::from_raw_parts(buf, len) }, &[0xde_u8, 0xad]);
        unsafe { mimewords_free_bytes(buf, len) };
    }

    #[test]
    fn quoted_printable_bytes_empty_input() {
        let mut len: size_t = 99;
        let buf = unsafe { mimewords_decode_quoted_printable_bytes(c"".as_ptr(), &mut len) };
        assert!(!buf.is_null());
        assert_eq!(len, 0);
        unsafe { mimewords_free_bytes(buf, len) };
    }

    #[test]
    fn header_value_from_bytes() {
        let raw = b"=?utf-8?B?SGk=?= caf\xE9";
        let out = unsafe { mimewords_decode_header_value(raw.as_ptr(), raw.len()) };
        assert_eq!(take_string(out), "Hi caf\u{E9}");
    }

    #[test]
    fn free_null_is_noop() {
        unsafe {
            mimewords_free_string(ptr::null_mut());
            mimewords_free_bytes(ptr::null_mut(), 0);
        }
    }
}
