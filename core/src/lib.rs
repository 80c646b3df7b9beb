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

//! Decoding of RFC 2047 encoded-words and RFC 2045 Quoted-Printable, for turning wire-format
//! header values such as `Subject` or `From` into readable text.
//!
//! ```
//! use mimewords_core::decode_mime_words;
//!
//! let subject = decode_mime_words("=?ISO-8859-1?Q?Andr=E9?= Pirard").unwrap();
//! assert_eq!(subject, "André Pirard");
//! ```

pub mod charset;
pub mod config;
pub mod error;
pub mod mime;

pub use charset::{EncodingRsDecoder, TextDecoder};
pub use config::{CharsetFailurePolicy, DecodeOptions};
pub use error::DecodeError;
pub use mime::{
    decode_header_value, decode_mime_word, decode_mime_words, decode_quoted_printable,
    decode_quoted_printable_to_string, is_mime_word, Decoded, Decoder, EncodedWord, WordEncoding,
};
