/*
 * rfc2047.rs
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

//! RFC 2047 encoded-word decoding (e.g. =?charset?q?text?=).
//! Used for header values; adjacent encoded-words are joined without the folding whitespace
//! between them (RFC 2047 section 6.2).

use crate::charset::{octets, TextDecoder};
use crate::config::DecodeOptions;
use crate::error::DecodeError;
use crate::mime::base64;
use crate::mime::quoted_printable;

/// Encoding method of an encoded-word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordEncoding {
    /// "B": Base64.
    Base64,
    /// "Q": Quoted-Printable variant with `_` for space.
    Q,
}

impl WordEncoding {
    fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("b") {
            Some(WordEncoding::Base64)
        } else if s.eq_ignore_ascii_case("q") {
            Some(WordEncoding::Q)
        } else {
            None
        }
    }
}

/// Fields of a syntactically valid encoded-word, borrowed from the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedWord<'a> {
    /// Charset label without the RFC 2231 language suffix.
    pub charset: &'a str,
    /// Language tag after `*` in the charset field, if any.
    pub language: Option<&'a str>,
    pub encoding: WordEncoding,
    pub payload: &'a str,
}

impl<'a> EncodedWord<'a> {
    /// Recognize `=?charset?method?payload?=`. The token must be one whitespace-free atom
    /// with exactly five `?`-separated fields.
    pub fn parse(token: &'a str) -> Option<Self> {
        if !token.starts_with("=?") || !token.ends_with("?=") {
            return None;
        }
        if token.chars().any(char::is_whitespace) {
            return None;
        }
        let mut fields = token.split('?');
        let (_, charset_field, method, payload, _) = (
            fields.next()?,
            fields.next()?,
            fields.next()?,
            fields.next()?,
            fields.next()?,
        );
        if fields.next().is_some() {
            return None;
        }
        let encoding = WordEncoding::parse(method)?;
        let (charset, language) = match charset_field.split_once('*') {
            Some((charset, language)) => (charset, Some(language)),
            None => (charset_field, None),
        };
        Some(EncodedWord {
            charset,
            language,
            encoding,
            payload,
        })
    }

    /// Payload bytes before charset decoding. None if a Base64 payload is malformed or empty.
    pub fn payload_bytes(&self) -> Option<Vec<u8>> {
        match self.encoding {
            WordEncoding::Base64 => base64::decode(self.payload),
            WordEncoding::Q => Some(quoted_printable::decode(&octets(self.payload), true)),
        }
    }

    /// Decode to text with `text`. Returns Ok(None) when the payload cannot be decoded
    /// (bad Base64) and the token should be kept as-is.
    pub fn decode_with<D: TextDecoder + ?Sized>(
        &self,
        text: &D,
    ) -> Result<Option<String>, DecodeError> {
        let Some(bytes) = self.payload_bytes() else {
            return Ok(None);
        };
        let charset = self.charset.to_ascii_lowercase();
        text.decode(&bytes, &charset).map(Some)
    }
}

/// True if the token is a syntactically valid encoded-word.
pub fn is_encoded_word(token: &str) -> bool {
    EncodedWord::parse(token).is_some()
}

/// Decode exactly one encoded-word; anything that is not one is returned unchanged.
pub fn decode_encoded_word<D: TextDecoder + ?Sized>(
    token: &str,
    text: &D,
    options: &DecodeOptions,
) -> Result<String, DecodeError> {
    match EncodedWord::parse(token) {
        Some(word) => decode_parsed(token, &word, text, options),
        None => Ok(token.to_string()),
    }
}

fn decode_parsed<D: TextDecoder + ?Sized>(
    token: &str,
    word: &EncodedWord<'_>,
    text: &D,
    options: &DecodeOptions,
) -> Result<String, DecodeError> {
    match word.decode_with(text) {
        Ok(Some(decoded)) => Ok(decoded),
        Ok(None) => Ok(token.to_string()),
        Err(e) if options.keeps_original_on_charset_failure() => {
            log::debug!("keeping encoded-word {}: {}", token, e);
            Ok(token.to_string())
        }
        Err(e) => Err(e),
    }
}

/// Expand RFC 2047 encoded-words in a header value. Whitespace runs collapse to one space,
/// except between two encoded-words where they are dropped. The result is trimmed.
pub fn decode_encoded_words<D: TextDecoder + ?Sized>(
    s: &str,
    text: &D,
    options: &DecodeOptions,
) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(s.len());
    let mut prev_was_word = false;
    for atom in s.split_whitespace() {
        match EncodedWord::parse(atom) {
            Some(word) => {
                let decoded = decode_parsed(atom, &word, text, options)?;
                if !prev_was_word && !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&decoded);
                prev_was_word = true;
            }
            None => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(atom);
                prev_was_word = false;
            }
        }
    }
    Ok(out.trim().to_string())
}
