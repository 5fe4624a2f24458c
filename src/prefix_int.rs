// Copyright (C) 2025, The hpackr authors.
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are
// met:
//
//     * Redistributions of source code must retain the above copyright notice,
//       this list of conditions and the following disclaimer.
//
//     * Redistributions in binary form must reproduce the above copyright
//       notice, this list of conditions and the following disclaimer in the
//       documentation and/or other materials provided with the distribution.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
// IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
// THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
// PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR
// CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
// EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO,
// PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR
// PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF
// LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING
// NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS
// SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! RFC 7541 §5.1 prefixed integers.
//!
//! Every HPACK field starts with an integer packed into the low `prefix`
//! bits of a byte whose high bits carry the representation's flags. Values
//! that don't fit the prefix continue in base-128 bytes with the high bit
//! marking continuation.

use super::Error;
use super::Result;

/// Appends `v` to `out` using a `prefix`-bit integer, OR-ing the fixed flag
/// bits `first` into the first byte.
pub fn encode(mut v: u64, first: u8, prefix: usize, out: &mut Vec<u8>) {
    let mask = 2u64.pow(prefix as u32) - 1;

    // Encode I on N bits.
    if v < mask {
        out.push(first | v as u8);
        return;
    }

    // Encode (2^N - 1) on N bits.
    out.push(first | mask as u8);

    v -= mask;

    while v >= 128 {
        // Encode (I % 128 + 128) on 8 bits.
        out.push((v % 128 + 128) as u8);

        v >>= 7;
    }

    // Encode I on 8 bits.
    out.push(v as u8);
}

/// Reads a `prefix`-bit integer from `b`, ignoring the flag bits of the
/// first byte.
pub fn decode(b: &mut octets::Octets, prefix: usize) -> Result<u64> {
    let mask = 2u64.pow(prefix as u32) - 1;

    let mut val = u64::from(b.get_u8()?);
    val &= mask;

    if val < mask {
        return Ok(val);
    }

    let mut shift = 0;

    while b.cap() > 0 {
        let byte = b.get_u8()?;

        let inc = u64::from(byte & 0x7f)
            .checked_shl(shift)
            .ok_or(Error::BufferTooShort)?;

        val = val.checked_add(inc).ok_or(Error::BufferTooShort)?;

        shift += 7;

        if byte & 0x80 == 0 {
            return Ok(val);
        }
    }

    Err(Error::BufferTooShort)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn encode_in_prefix() {
        let mut encoded = Vec::new();

        encode(10, 0, 5, &mut encoded);

        assert_eq!(encoded, [0b01010]);
    }

    #[test]
    fn encode_with_continuation() {
        let mut encoded = Vec::new();

        encode(1337, 0, 5, &mut encoded);

        assert_eq!(encoded, [0b11111, 0b10011010, 0b00001010]);
    }

    #[test]
    fn encode_full_byte_prefix() {
        let mut encoded = Vec::new();

        encode(42, 0, 8, &mut encoded);

        assert_eq!(encoded, [0b101010]);
    }

    #[test]
    fn encode_keeps_flag_bits() {
        let mut encoded = Vec::new();

        encode(31, 0b0010_0000, 5, &mut encoded);

        assert_eq!(encoded, [0b0011_1111, 0]);
    }

    #[test]
    fn decode_in_prefix() {
        let encoded = [0b01010, 0x02];
        let mut b = octets::Octets::with_slice(&encoded);

        assert_eq!(decode(&mut b, 5), Ok(10));
        assert_eq!(b.off(), 1);
    }

    #[test]
    fn decode_with_continuation() {
        let encoded = [0b11111, 0b10011010, 0b00001010];
        let mut b = octets::Octets::with_slice(&encoded);

        assert_eq!(decode(&mut b, 5), Ok(1337));
    }

    #[test]
    fn decode_ignores_flag_bits() {
        let encoded = [0b1110_1010];
        let mut b = octets::Octets::with_slice(&encoded);

        assert_eq!(decode(&mut b, 5), Ok(10));
    }

    #[test]
    fn decode_empty_input() {
        let mut b = octets::Octets::with_slice(&[]);

        assert_eq!(decode(&mut b, 7), Err(Error::BufferTooShort));
    }

    #[test]
    fn decode_missing_continuation() {
        let encoded = [0b11111, 0b10011010];
        let mut b = octets::Octets::with_slice(&encoded);

        assert_eq!(decode(&mut b, 5), Err(Error::BufferTooShort));
    }

    #[test]
    fn decode_overflow() {
        let mut encoded = vec![0xff];
        encoded.extend(std::iter::repeat(0x80).take(10));
        encoded.push(0x01);

        let mut b = octets::Octets::with_slice(&encoded);

        assert_eq!(decode(&mut b, 7), Err(Error::BufferTooShort));
    }

    #[rstest]
    fn round_trip(#[values(1, 2, 3, 4, 5, 6, 7, 8)] prefix: usize) {
        let values = [
            0,
            1,
            2,
            14,
            15,
            16,
            126,
            127,
            128,
            254,
            255,
            256,
            1337,
            65_535,
            1 << 20,
            u64::from(u32::MAX),
        ];

        for v in values {
            let mut encoded = Vec::new();
            encode(v, 0, prefix, &mut encoded);

            let mut b = octets::Octets::with_slice(&encoded);

            assert_eq!(decode(&mut b, prefix), Ok(v));
            assert_eq!(b.cap(), 0);
        }
    }
}
