/*
 * error.rs
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

//! Decoding errors.

use thiserror::Error;

/// Errors from encoded-word or Quoted-Printable decoding.
///
/// Malformed escapes, malformed Base64 and tokens that are not encoded-words are not errors:
/// those fall back to literal output. Only a charset the text decoder cannot handle fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The charset label is not known to the text decoder.
    #[error("unknown charset: {0:?}")]
    UnknownCharset(String),
}

impl DecodeError {
    pub fn unknown_charset(label: impl Into<String>) -> Self {
        Self::UnknownCharset(label.into())
    }

    /// The charset label this error refers to.
    pub fn charset(&self) -> &str {
        match self {
            DecodeError::UnknownCharset(label) => label,
        }
    }
}
