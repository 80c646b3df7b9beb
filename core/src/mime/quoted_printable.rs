/*
 * quoted_printable.rs
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

//! Quoted-Printable decoder for Content-Transfer-Encoding (RFC 2045) and the Q encoding of
//! RFC 2047 encoded-words. Produces bytes only; charset interpretation happens afterwards on the
//! whole sequence.

const HEX_DECODE: [i8; 256] = {
    let mut t = [-1i8; 256];
    let mut i = 0u8;
    while i < 10 {
        t[(b'0' + i) as usize] = i as i8;
        i = i.wrapping_add(1);
    }
    let mut i = 0u8;
    while i < 6 {
        t[(b'A' + i) as usize] = (10 + i) as i8;
        t[(b'a' + i) as usize] = (10 + i) as i8;
        i = i.wrapping_add(1);
    }
    t
};

/// Remove CRs and join soft line breaks. A line ending in `=` continues on the next line with
/// nothing inserted; other lines are terminated with LF, and one trailing LF is then dropped.
pub fn unfold_soft_breaks(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    for line in src.split(|&b| b == b'\n') {
        let start = out.len();
        out.extend(line.iter().copied().filter(|&b| b != b'\r'));
        if out.len() > start && out.last() == Some(&b'=') {
            out.pop();
        } else {
            out.push(b'\n');
        }
    }
    if out.last() == Some(&b'\n') {
        out.pop();
    }
    out
}

/// Value of `=XX` if both bytes are hex digits. `00` is rejected: `=00` is kept literally.
/// A hex prefix alone (`=4g`) is not read as a byte, unlike lenient prefix parsing.
#[inline]
fn escaped_byte(hex: &[u8]) -> Option<u8> {
    let (&hi, &lo) = (hex.first()?, hex.get(1)?);
    let (v1, v2) = (HEX_DECODE[hi as usize], HEX_DECODE[lo as usize]);
    if v1 < 0 || v2 < 0 {
        return None;
    }
    match ((v1 as u8) << 4) | v2 as u8 {
        0 => None,
        v => Some(v),
    }
}

/// Decode quoted-printable `src` into bytes. Handles =XX and soft line breaks (=CRLF, =LF).
/// With `q_encoding`, `_` is a space (RFC 2047 section 4.2). Malformed escapes, including a
/// lone `=` and `=00`, are emitted as a literal `=`.
pub fn decode(src: &[u8], q_encoding: bool) -> Vec<u8> {
    let src = unfold_soft_breaks(src);
    let mut dst = Vec::with_capacity(src.len());
    let mut pos = 0;
    while pos < src.len() {
        let b = src[pos];
        match b {
            b'=' => match escaped_byte(&src[pos + 1..]) {
                Some(v) => {
                    dst.push(v);
                    pos += 3;
                }
                None => {
                    dst.push(b);
                    pos += 1;
                }
            },
            b'_' if q_encoding => {
                dst.push(b' ');
                pos += 1;
            }
            _ => {
                dst.push(b);
                pos += 1;
            }
        }
    }
    dst
}
