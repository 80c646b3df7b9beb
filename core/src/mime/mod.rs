/*
 * mod.rs
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

//! MIME text decoding: RFC 2047 encoded-words in header values and RFC 2045
//! Quoted-Printable content.
//!
//! The free functions use a default [`Decoder`] (encoding_rs, [`DecodeOptions::default`]).
//! Build a [`Decoder`] to inject another text decoder or change the options.
//!
//! [`DecodeOptions::default`]: crate::config::DecodeOptions

pub mod base64;
mod decoder;
pub mod quoted_printable;
pub mod rfc2047;

pub use decoder::{Decoded, Decoder};
pub use rfc2047::{is_encoded_word, EncodedWord, WordEncoding};

use crate::charset::{octets, EncodingRsDecoder, TextDecoder};
use crate::error::DecodeError;

/// Decode body Quoted-Printable to raw bytes.
pub fn decode_quoted_printable(input: &str) -> Vec<u8> {
    quoted_printable::decode(&octets(input), false)
}

/// Decode body Quoted-Printable and interpret the bytes in `charset`.
pub fn decode_quoted_printable_to_string(input: &str, charset: &str) -> Result<String, DecodeError> {
    EncodingRsDecoder.decode(&decode_quoted_printable(input), charset)
}

/// Decode exactly one encoded-word, or return the input unchanged if it is not one.
pub fn decode_mime_word(input: &str) -> Result<String, DecodeError> {
    Decoder::new().decode_mime_word(input)
}

/// Decode all encoded-words in a header value, dropping folding whitespace between them.
pub fn decode_mime_words(input: &str) -> Result<String, DecodeError> {
    Decoder::new().decode_mime_words(input)
}

/// Decode a raw header value (UTF-8 with ISO-8859-1 fallback) including its encoded-words.
pub fn decode_header_value(raw: &[u8]) -> Result<String, DecodeError> {
    Decoder::new().decode_header_value(raw)
}

/// True if the input is a single syntactically valid encoded-word.
pub fn is_mime_word(input: &str) -> bool {
    is_encoded_word(input)
}
