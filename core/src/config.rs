/*
 * config.rs
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

//! Decoder options: charset failure policy and raw header byte interpretation.

/// What to do with an encoded-word whose charset the text decoder does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharsetFailurePolicy {
    /// Return [`DecodeError::UnknownCharset`](crate::DecodeError::UnknownCharset) to the caller.
    /// One bad word fails the whole header value.
    #[default]
    Propagate,
    /// Leave the offending word as-is and keep decoding the rest, like malformed Base64.
    KeepOriginal,
}

/// Options for [`Decoder`](crate::mime::Decoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub charset_failure: CharsetFailurePolicy,
    /// When true, raw header bytes are read as UTF-8 first with an ISO-8859-1 fallback;
    /// when false they are always read as ISO-8859-1.
    pub smtp_utf8: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            charset_failure: CharsetFailurePolicy::Propagate,
            smtp_utf8: true,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charset_failure(mut self, policy: CharsetFailurePolicy) -> Self {
        self.charset_failure = policy;
        self
    }

    pub fn smtp_utf8(mut self, smtp_utf8: bool) -> Self {
        self.smtp_utf8 = smtp_utf8;
        self
    }

    /// True if unknown charsets leave the word undecoded instead of failing.
    pub fn keeps_original_on_charset_failure(&self) -> bool {
        self.charset_failure == CharsetFailurePolicy::KeepOriginal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = DecodeOptions::default();
        assert_eq!(opts.charset_failure, CharsetFailurePolicy::Propagate);
        assert!(opts.smtp_utf8);
        assert!(!opts.keeps_original_on_charset_failure());
    }

    #[test]
    fn builder_setters() {
        let opts = DecodeOptions::new()
            .charset_failure(CharsetFailurePolicy::KeepOriginal)
            .smtp_utf8(false);
        assert!(opts.keeps_original_on_charset_failure());
        assert!(!opts.smtp_utf8);
    }
}
