/*
 * base64.rs
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

//! Base64 decoding of "B" encoded-word payloads (RFC 2047 section 4.1).

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::{DecodePaddingMode, GeneralPurpose};
use base64::Engine as _;

/// Standard alphabet; padding optional, stray trailing bits tolerated.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a Base64 payload. Returns None if it is malformed or decodes to nothing.
pub fn decode(payload: &str) -> Option<Vec<u8>> {
    match LENIENT.decode(payload) {
        Ok(bytes) if !bytes.is_empty() => Some(bytes),
        Ok(_) => None,
        Err(e) => {
            log::debug!("malformed base64 payload {:?}: {}", payload, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_and_unpadded() {
        assert_eq!(decode("SGVsbG8="), Some(b"Hello".to_vec()));
        assert_eq!(decode("SGVsbG8"), Some(b"Hello".to_vec()));
    }

    #[test]
    fn empty_is_none() {
        assert_eq!(decode(""), None);
    }

    #[test]
    fn malformed_is_none() {
        assert_eq!(decode("SGV$bG8="), None);
        assert_eq!(decode("S"), None);
    }
}
