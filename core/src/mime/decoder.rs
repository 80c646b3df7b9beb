/*
 * decoder.rs
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

//! Decoder front end: holds the injected text decoder and options, and exposes the
//! Quoted-Printable, single-word, multi-word and raw header operations.

use crate::charset::{bytes_to_string, octets, EncodingRsDecoder, TextDecoder};
use crate::config::DecodeOptions;
use crate::error::DecodeError;
use crate::mime::quoted_printable;
use crate::mime::rfc2047;

/// Result of Quoted-Printable decoding: text when a charset was given, raw bytes otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Text(String),
    Bytes(Vec<u8>),
}

impl Decoded {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Decoded::Text(s) => Some(s),
            Decoded::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Decoded::Text(s) => s.as_bytes(),
            Decoded::Bytes(b) => b,
        }
    }

    /// Raw bytes, or the UTF-8 encoding of the text.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Decoded::Text(s) => s.into_bytes(),
            Decoded::Bytes(b) => b,
        }
    }
}

/// Encoded-word and Quoted-Printable decoder. Stateless between calls; share one across
/// threads if the text decoder is `Sync`.
#[derive(Debug, Clone, Default)]
pub struct Decoder<D = EncodingRsDecoder> {
    text: D,
    options: DecodeOptions,
}

impl Decoder {
    /// Decoder using encoding_rs and default options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: TextDecoder> Decoder<D> {
    /// Decoder using the given charset-to-text implementation.
    pub fn with_text_decoder(text: D) -> Self {
        Self {
            text,
            options: DecodeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn text_decoder(&self) -> &D {
        &self.text
    }

    /// Body Quoted-Printable (underscore is literal). With a charset the bytes are decoded to
    /// text; an unknown charset is always an error here.
    pub fn decode_quoted_printable(
        &self,
        input: &str,
        charset: Option<&str>,
    ) -> Result<Decoded, DecodeError> {
        let bytes = quoted_printable::decode(&octets(input), false);
        match charset {
            Some(charset) => self.text.decode(&bytes, charset).map(Decoded::Text),
            None => Ok(Decoded::Bytes(bytes)),
        }
    }

    /// Decode one encoded-word. Input that is not exactly one encoded-word is returned as-is.
    pub fn decode_mime_word(&self, token: &str) -> Result<String, DecodeError> {
        rfc2047::decode_encoded_word(token, &self.text, &self.options)
    }

    /// Decode every encoded-word in a header value.
    pub fn decode_mime_words(&self, input: &str) -> Result<String, DecodeError> {
        rfc2047::decode_encoded_words(input, &self.text, &self.options)
    }

    /// Decode a header value from raw bytes: bytes to text per `smtp_utf8`, then encoded-words.
    pub fn decode_header_value(&self, raw: &[u8]) -> Result<String, DecodeError> {
        let value = bytes_to_string(raw, self.options.smtp_utf8);
        self.decode_mime_words(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CharsetFailurePolicy;

    #[test]
    fn quoted_printable_bytes_without_charset() {
        let d = Decoder::new();
        assert_eq!(
            d.decode_quoted_printable("=DE=AD=BE=EF", None).unwrap(),
            Decoded::Bytes(vec![0xde, 0xad, 0xbe, 0xef])
        );
    }

    #[test]
    fn quoted_printable_unknown_charset_ignores_policy() {
        let d = Decoder::new()
            .with_options(DecodeOptions::new().charset_failure(CharsetFailurePolicy::KeepOriginal));
        assert!(d.decode_quoted_printable("abc", Some("x-unknown")).is_err());
    }

    #[test]
    fn options_and_text_decoder_accessors() {
        let opts = DecodeOptions::new().smtp_utf8(false);
        let d = Decoder::new().with_options(opts);
        assert_eq!(d.options(), &opts);
        assert_eq!(d.text_decoder().decode(b"ok", "utf-8").unwrap(), "ok");
    }

    #[test]
    fn decoded_accessors() {
        let t = Decoded::Text("é".to_string());
        assert_eq!(t.as_text(), Some("é"));
        assert_eq!(t.as_bytes(), "é".as_bytes());
        let b = Decoded::Bytes(vec![1, 2]);
        assert_eq!(b.as_text(), None);
        assert_eq!(b.into_bytes(), vec![1, 2]);
    }

    #[test]
    fn header_value_from_raw_bytes() {
        let d = Decoder::new();
        assert_eq!(
            d.decode_header_value(b"Re: =?ISO-8859-1?Q?Andr=E9?=  \xC3\xA9t\xC3\xA9").unwrap(),
            "Re: André été"
        );
        assert_eq!(d.decode_header_value(b"caf\xE9").unwrap(), "café");
        assert_eq!(
            d.decode_header_value("Re: \u{FFFD} ok".as_bytes()).unwrap(),
            "Re: \u{FFFD} ok"
        );

        let latin1 = Decoder::new().with_options(DecodeOptions::new().smtp_utf8(false));
        assert_eq!(latin1.decode_header_value("é".as_bytes()).unwrap(), "Ã©");
    }

    #[test]
    fn injected_text_decoder() {
        let calls = std::cell::Cell::new(0);
        let d = Decoder::with_text_decoder(|bytes: &[u8], charset: &str| -> Result<String, DecodeError> {
            calls.set(calls.get() + 1);
            if charset == "x-rot13" {
                Ok(bytes
                    .iter()
                    .map(|&b| match b {
                        b'a'..=b'z' => (((b - b'a') + 13) % 26 + b'a') as char,
                        _ => b as char,
                    })
                    .collect())
            } else {
                Err(DecodeError::unknown_charset(charset))
            }
        });
        assert_eq!(d.decode_mime_word("=?X-ROT13?Q?uryyb?=").unwrap(), "hello");
        assert_eq!(calls.get(), 1);
    }
}
