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

//! RFC 7541 §5.2 Huffman string coding.
//!
//! String literals may be compressed with the fixed canonical Huffman code
//! of RFC 7541 Appendix B. Codes are 5 to 30 bits long and are packed
//! MSB-first; the final byte is padded with the most significant bits of the
//! EOS symbol (all ones), and a padding strictly longer than 7 bits is a
//! decoding error.

use super::Error;
use super::Result;

use self::table::DECODE_TABLE;
use self::table::ENCODE_TABLE;

/// Decodes a complete Huffman-coded string.
pub fn decode(b: &mut octets::Octets) -> Result<Vec<u8>> {
    // Max compression ratio is >= 0.5
    let mut out = Vec::with_capacity(b.cap() << 1);

    let mut decoder = Decoder::new();

    while b.cap() > 0 {
        let byte = b.get_u8()?;

        if let Some(b) = decoder.decode4(byte >> 4)? {
            out.push(b);
        }

        if let Some(b) = decoder.decode4(byte & 0xf)? {
            out.push(b);
        }
    }

    if !decoder.is_final() {
        return Err(Error::InvalidHuffmanEncoding);
    }

    Ok(out)
}

/// Appends the Huffman coding of `src` to `out`.
pub fn encode(src: &[u8], out: &mut Vec<u8>) {
    let mut bits: u64 = 0;
    let mut bits_left = 40;

    for &b in src {
        let (nbits, code) = ENCODE_TABLE[b as usize];

        bits |= code << (bits_left - nbits);
        bits_left -= nbits;

        while bits_left <= 32 {
            out.push((bits >> 32) as u8);

            bits <<= 8;
            bits_left += 8;
        }
    }

    if bits_left != 40 {
        // This writes the EOS token
        bits |= (1 << bits_left) - 1;

        out.push((bits >> 32) as u8);
    }
}

/// Returns the exact number of bytes `encode()` would produce for `src`.
pub fn encode_output_length(src: &[u8]) -> usize {
    let bits: usize = src
        .iter()
        .map(|&b| {
            let (nbits, _) = ENCODE_TABLE[b as usize];
            nbits
        })
        .sum();

    let mut len = bits / 8;

    if bits & 7 != 0 {
        len += 1;
    }

    len
}

struct Decoder {
    state: usize,
    maybe_eos: bool,
}

impl Decoder {
    fn new() -> Decoder {
        Decoder {
            state: 0,
            maybe_eos: false,
        }
    }

    // Decodes 4 bits
    fn decode4(&mut self, input: u8) -> Result<Option<u8>> {
        const MAYBE_EOS: u8 = 1;
        const DECODED: u8 = 2;
        const ERROR: u8 = 4;

        // (next-state, byte, flags)
        let (next, byte, flags) = DECODE_TABLE[self.state][input as usize];

        if flags & ERROR == ERROR {
            // The input doesn't match any code, or an EOS was encountered
            return Err(Error::InvalidHuffmanEncoding);
        }

        let ret = if flags & DECODED == DECODED {
            Some(byte)
        } else {
            None
        };

        self.state = next as usize;
        self.maybe_eos = flags & MAYBE_EOS == MAYBE_EOS;

        Ok(ret)
    }

    fn is_final(&self) -> bool {
        self.state == 0 || self.maybe_eos
    }
}

mod table;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(encoded: &[u8]) -> Result<Vec<u8>> {
        let mut b = octets::Octets::with_slice(encoded);
        decode(&mut b)
    }

    #[test]
    fn encode_wire_vectors() {
        // RFC 7541 Appendix C.4 and C.6 string literals.
        let vectors: &[(&[u8], &[u8])] = &[
            (b"www.example.com", &[
                0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90,
                0xf4, 0xff,
            ]),
            (b"no-cache", &[0xa8, 0xeb, 0x10, 0x64, 0x9c, 0xbf]),
            (b"custom-key", &[0x25, 0xa8, 0x49, 0xe9, 0x5b, 0xa9, 0x7d, 0x7f]),
            (b"302", &[0x64, 0x02]),
            (b"private", &[0xae, 0xc3, 0x77, 0x1a, 0x4b]),
            (b"gzip", &[0x9b, 0xd9, 0xab]),
        ];

        for (plain, wire) in vectors {
            let mut encoded = Vec::new();
            encode(plain, &mut encoded);

            assert_eq!(&encoded, wire);
            assert_eq!(encode_output_length(plain), wire.len());

            assert_eq!(decode_all(wire), Ok(plain.to_vec()));
        }
    }

    #[test]
    fn round_trip_all_bytes() {
        for b in 0..=255u8 {
            let src = [b, b, b];

            let mut encoded = Vec::new();
            encode(&src, &mut encoded);

            assert_eq!(encode_output_length(&src), encoded.len());
            assert_eq!(decode_all(&encoded), Ok(src.to_vec()));
        }
    }

    #[test]
    fn round_trip_empty() {
        let mut encoded = Vec::new();
        encode(b"", &mut encoded);

        assert!(encoded.is_empty());
        assert_eq!(decode_all(&encoded), Ok(Vec::new()));
    }

    #[test]
    fn decode_rejects_long_padding() {
        // A full byte of ones after a complete symbol is a padding longer
        // than 7 bits.
        let mut encoded = Vec::new();
        encode(b"0", &mut encoded);
        encoded.push(0xff);

        assert_eq!(decode_all(&encoded), Err(Error::InvalidHuffmanEncoding));
    }

    #[test]
    fn decode_rejects_eos() {
        // The 30-bit EOS symbol must never appear in the input itself.
        let encoded = [0xff, 0xff, 0xff, 0xff];

        assert_eq!(decode_all(&encoded), Err(Error::InvalidHuffmanEncoding));
    }

    #[test]
    fn decode_rejects_zero_padding() {
        // '1' is the 5-bit code 00001; the trailing bits must be ones.
        let encoded = [0b0000_1000];

        assert_eq!(decode_all(&encoded), Err(Error::InvalidHuffmanEncoding));
    }

    #[test]
    fn decode_rejects_truncated_code() {
        // First byte of the coding of "#" (a 12-bit code), then nothing.
        let encoded = [0xff];

        assert_eq!(decode_all(&encoded), Err(Error::InvalidHuffmanEncoding));
    }

    #[test]
    fn decode_accepts_ones_padding() {
        // '1' is 00001, padded with three ones.
        let encoded = [0b0000_1111];

        assert_eq!(decode_all(&encoded), Ok(b"1".to_vec()));
    }
}
