/*
 * charset.rs
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

//! Charset-to-text decoding. The decoder is injectable through [`TextDecoder`]; the default
//! resolves labels with encoding_rs (WHATWG Encoding Standard labels, case-insensitive).

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::error::DecodeError;

/// Turns a complete byte sequence into text for a named charset.
///
/// Implementations must fail with [`DecodeError::UnknownCharset`] for labels they do not know
/// rather than substituting another charset. Closures of the same shape implement this trait.
pub trait TextDecoder {
    fn decode(&self, bytes: &[u8], charset: &str) -> Result<String, DecodeError>;
}

impl<F> TextDecoder for F
where
    F: Fn(&[u8], &str) -> Result<String, DecodeError>,
{
    fn decode(&self, bytes: &[u8], charset: &str) -> Result<String, DecodeError> {
        self(bytes, charset)
    }
}

/// Default text decoder backed by encoding_rs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingRsDecoder;

impl EncodingRsDecoder {
    /// Resolve a charset label. Labels mapping to the replacement encoding count as unknown.
    pub fn encoding_for(charset: &str) -> Result<&'static Encoding, DecodeError> {
        Encoding::for_label_no_replacement(charset.as_bytes())
            .ok_or_else(|| DecodeError::unknown_charset(charset))
    }
}

impl TextDecoder for EncodingRsDecoder {
    fn decode(&self, bytes: &[u8], charset: &str) -> Result<String, DecodeError> {
        let encoding = Self::encoding_for(charset)?;
        let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
        if had_errors {
            log::trace!(
                "malformed {} sequence replaced with U+FFFD ({} bytes)",
                encoding.name(),
                bytes.len()
            );
        }
        Ok(text.into_owned())
    }
}

/// Convert raw header value bytes to a string. When smtp_utf8, try UTF-8 first and fall back to
/// ISO-8859-1 if the bytes are not valid UTF-8. Does not apply RFC 2047.
pub fn bytes_to_string(bytes: &[u8], smtp_utf8: bool) -> Cow<'_, str> {
    if smtp_utf8 {
        if let Ok(s) = std::str::from_utf8(bytes) {
            return Cow::Borrowed(s);
        }
    }
    encoding_rs::mem::decode_latin1(bytes)
}

/// Octet view of text: U+0000..=U+00FF become the byte of the same value, anything above is
/// written as its UTF-8 encoding.
pub fn octets(s: &str) -> Cow<'_, [u8]> {
    if s.is_ascii() {
        return Cow::Borrowed(s.as_bytes());
    }
    let mut out = Vec::with_capacity(s.len());
    for c in s.chars() {
        match u8::try_from(c) {
            Ok(b) => out.push(b),
            Err(_) => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    Cow::Owned(out)
}
