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

use super::huffman;
use super::prefix_int;
use super::table::HeaderTable;

use super::Error;
use super::Header;
use super::Indexing;
use super::Result;

use super::INDEXED;
use super::LITERAL_NEVER_INDEXED;
use super::LITERAL_WITH_INDEXING;
use super::SIZE_UPDATE;

/// The string literal Huffman flag; strings always use a 7-bit prefix.
const HUFFMAN: u8 = 0b1000_0000;

/// Where the encoder is relative to a header block.
///
/// Table resizes are only legal between blocks; they are buffered in
/// `Resized` and drained into at most two size update fields when the next
/// block opens (RFC 7541 §4.2).
#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Idle,

    /// `smallest` is the lowest size requested since the last block; the
    /// latest request is whatever the table's allowed length already is.
    Resized { smallest: Option<usize> },

    Encoding,
}

/// An HPACK encoder.
pub struct Encoder {
    table: HeaderTable,
    state: State,
    huffman: bool,
    block: Vec<u8>,
}

impl Encoder {
    /// Creates a new HPACK encoder whose dynamic table is bounded by the
    /// negotiated `max_table_size`. Huffman string coding is on by default.
    pub fn new(max_table_size: usize) -> Encoder {
        Encoder {
            table: HeaderTable::new(max_table_size),
            state: State::Idle,
            huffman: true,
            block: Vec::new(),
        }
    }

    /// Enables or disables Huffman coding of string literals.
    pub fn set_huffman(&mut self, enabled: bool) {
        self.huffman = enabled;
    }

    /// The negotiated table size cap.
    pub fn max_table_size(&self) -> usize {
        self.table.maximum_length()
    }

    /// Requests a new dynamic table size, to be signaled at the start of the
    /// next header block.
    ///
    /// Evictions take effect immediately; consecutive requests collapse into
    /// at most two signaled updates (the smallest and the latest).
    pub fn resize(&mut self, n: usize) -> Result<()> {
        if self.state == State::Encoding {
            return Err(Error::ResizeDuringHeaderBlock);
        }

        if n > self.table.maximum_length() {
            return Err(Error::InvalidDynamicTableSize);
        }

        let smallest = match self.state {
            State::Resized {
                smallest: Some(smallest),
            } => smallest.min(n),

            _ => n,
        };

        trace!("Resize size={n} smallest={smallest}");

        self.table.set_allowed_length(n);
        self.state = State::Resized {
            smallest: Some(smallest),
        };

        Ok(())
    }

    /// Opens a header block, emitting any pending size updates first.
    pub fn begin_block(&mut self) -> Result<()> {
        if self.state == State::Encoding {
            return Err(Error::HeaderBlockAlreadyOpen);
        }

        if let State::Resized { smallest } = self.state {
            let latest = self.table.allowed_length();

            if let Some(smallest) = smallest {
                if smallest < latest {
                    trace!("SizeUpdate size={smallest}");

                    prefix_int::encode(
                        smallest as u64,
                        SIZE_UPDATE,
                        5,
                        &mut self.block,
                    );
                }
            }

            trace!("SizeUpdate size={latest}");

            prefix_int::encode(latest as u64, SIZE_UPDATE, 5, &mut self.block);
        }

        self.state = State::Encoding;

        Ok(())
    }

    /// Appends one header field to the open block.
    pub fn append(&mut self, h: &Header) -> Result<()> {
        if self.state != State::Encoding {
            return Err(Error::HeaderBlockNotOpen);
        }

        if h.name().is_empty() {
            return Err(Error::EmptyHeaderName);
        }

        match h.indexing() {
            Indexing::Indexable => self.append_indexable(h),

            Indexing::NonIndexable => self.append_literal(h, 0),

            Indexing::NeverIndexed =>
                self.append_literal(h, LITERAL_NEVER_INDEXED),
        }

        Ok(())
    }

    /// Closes the block and returns its bytes.
    pub fn end_block(&mut self) -> Result<Vec<u8>> {
        if self.state != State::Encoding {
            return Err(Error::HeaderBlockNotOpen);
        }

        self.state = State::Idle;

        Ok(std::mem::take(&mut self.block))
    }

    /// Encodes a full header list as one block.
    pub fn encode(&mut self, headers: &[Header]) -> Result<Vec<u8>> {
        self.begin_block()?;

        for h in headers {
            self.append(h)?;
        }

        self.end_block()
    }

    fn append_indexable(&mut self, h: &Header) {
        match self.table.find_match(h.name(), Some(h.value())) {
            Some((index, true)) => {
                trace!("Indexed index={index}");

                prefix_int::encode(index, INDEXED, 7, &mut self.block);
            },

            Some((index, false)) => {
                trace!(
                    "LiteralWithIndexing name_index={index} value={:?}",
                    h.value()
                );

                prefix_int::encode(
                    index,
                    LITERAL_WITH_INDEXING,
                    6,
                    &mut self.block,
                );
                encode_string(h.value(), self.huffman, &mut self.block);

                self.table.insert(h.name(), h.value());
            },

            None => {
                trace!(
                    "LiteralWithIndexing name={:?} value={:?}",
                    h.name(),
                    h.value()
                );

                prefix_int::encode(
                    0,
                    LITERAL_WITH_INDEXING,
                    6,
                    &mut self.block,
                );
                encode_string(h.name(), self.huffman, &mut self.block);
                encode_string(h.value(), self.huffman, &mut self.block);

                self.table.insert(h.name(), h.value());
            },
        }
    }

    /// Emits a non-indexed literal (`first` selects the plain or the
    /// never-indexed form). The name half may still reference a table
    /// entry; the value never does and nothing is inserted.
    fn append_literal(&mut self, h: &Header, first: u8) {
        match self.table.find_match(h.name(), None) {
            Some((index, _)) => {
                trace!(
                    "Literal first={first:#x} name_index={index} value={:?}",
                    h.value()
                );

                prefix_int::encode(index, first, 4, &mut self.block);
            },

            None => {
                trace!(
                    "Literal first={first:#x} name={:?} value={:?}",
                    h.name(),
                    h.value()
                );

                prefix_int::encode(0, first, 4, &mut self.block);
                encode_string(h.name(), self.huffman, &mut self.block);
            },
        }

        encode_string(h.value(), self.huffman, &mut self.block);
    }
}

fn encode_string(s: &str, use_huffman: bool, out: &mut Vec<u8>) {
    let raw = s.as_bytes();

    if use_huffman {
        let len = huffman::encode_output_length(raw);

        // Huffman coding can inflate some strings; emit those as raw bytes.
        if len < raw.len() {
            prefix_int::encode(len as u64, HUFFMAN, 7, out);
            huffman::encode(raw, out);

            return;
        }
    }

    prefix_int::encode(raw.len() as u64, 0, 7, out);
    out.extend_from_slice(raw);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hdr(name: &str, value: &str) -> Header {
        Header::new(name, value)
    }

    #[test]
    fn indexed_static_field() {
        let mut encoder = Encoder::new(4096);

        let block = encoder.encode(&[hdr(":method", "GET")]).unwrap();

        assert_eq!(block, [0x82]);
    }

    #[test]
    fn request_sequence() {
        // Mirrors RFC 7541 C.3 byte for byte.
        let mut encoder = Encoder::new(4096);
        encoder.set_huffman(false);

        let block = encoder
            .encode(&[
                hdr(":method", "GET"),
                hdr(":scheme", "http"),
                hdr(":path", "/"),
                hdr(":authority", "www.example.com"),
            ])
            .unwrap();

        assert_eq!(block, [
            0x82, 0x86, 0x84, 0x41, 0x0f, 0x77, 0x77, 0x77, 0x2e, 0x65, 0x78,
            0x61, 0x6d, 0x70, 0x6c, 0x65, 0x2e, 0x63, 0x6f, 0x6d,
        ]);
        assert_eq!(encoder.table.length(), 57);

        let block = encoder
            .encode(&[
                hdr(":method", "GET"),
                hdr(":scheme", "http"),
                hdr(":path", "/"),
                hdr(":authority", "www.example.com"),
                hdr("cache-control", "no-cache"),
            ])
            .unwrap();

        assert_eq!(block, [
            0x82, 0x86, 0x84, 0xbe, 0x58, 0x08, 0x6e, 0x6f, 0x2d, 0x63, 0x61,
            0x63, 0x68, 0x65,
        ]);
        assert_eq!(encoder.table.length(), 110);

        let block = encoder
            .encode(&[
                hdr(":method", "GET"),
                hdr(":scheme", "https"),
                hdr(":path", "/index.html"),
                hdr(":authority", "www.example.com"),
                hdr("custom-key", "custom-value"),
            ])
            .unwrap();

        assert_eq!(block, [
            0x82, 0x87, 0x85, 0xbf, 0x40, 0x0a, 0x63, 0x75, 0x73, 0x74, 0x6f,
            0x6d, 0x2d, 0x6b, 0x65, 0x79, 0x0c, 0x63, 0x75, 0x73, 0x74, 0x6f,
            0x6d, 0x2d, 0x76, 0x61, 0x6c, 0x75, 0x65,
        ]);
        assert_eq!(encoder.table.length(), 164);
        assert_eq!(encoder.table.entry_count(), 3);
    }

    #[test]
    fn request_sequence_huffman() {
        // Mirrors RFC 7541 C.4.1 byte for byte.
        let mut encoder = Encoder::new(4096);

        let block = encoder
            .encode(&[
                hdr(":method", "GET"),
                hdr(":scheme", "http"),
                hdr(":path", "/"),
                hdr(":authority", "www.example.com"),
            ])
            .unwrap();

        assert_eq!(block, [
            0x82, 0x86, 0x84, 0x41, 0x8c, 0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a,
            0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff,
        ]);
        assert_eq!(encoder.table.length(), 57);
    }

    #[test]
    fn never_indexed_is_stateless() {
        let mut encoder = Encoder::new(4096);

        let h = Header::with_indexing(
            "custom-name",
            "custom-value",
            Indexing::NonIndexable,
        );

        let first = encoder.encode(std::slice::from_ref(&h)).unwrap();
        let second = encoder.encode(std::slice::from_ref(&h)).unwrap();

        // Nothing was inserted, so the second block can't reuse an entry.
        assert_eq!(first, second);
        assert_eq!(encoder.table.entry_count(), 0);
        assert_eq!(first[0] & 0xf0, 0);
    }

    #[test]
    fn never_indexed_uses_name_index() {
        let mut encoder = Encoder::new(4096);

        let block = encoder
            .encode(&[Header::with_indexing(
                "authorization",
                "Basic d2FsZG8=",
                Indexing::NeverIndexed,
            )])
            .unwrap();

        // "authorization" is static entry 23: 0001 prefix with index 23
        // overflows the 4-bit prefix into a continuation byte.
        assert_eq!(block[0], 0x1f);
        assert_eq!(block[1], 23 - 15);
        assert_eq!(encoder.table.entry_count(), 0);
    }

    #[test]
    fn append_outside_block() {
        let mut encoder = Encoder::new(4096);

        assert_eq!(
            encoder.append(&hdr(":method", "GET")),
            Err(Error::HeaderBlockNotOpen)
        );
    }

    #[test]
    fn end_outside_block() {
        let mut encoder = Encoder::new(4096);

        assert_eq!(encoder.end_block(), Err(Error::HeaderBlockNotOpen));
    }

    #[test]
    fn double_begin() {
        let mut encoder = Encoder::new(4096);

        encoder.begin_block().unwrap();

        assert_eq!(encoder.begin_block(), Err(Error::HeaderBlockAlreadyOpen));
    }

    #[test]
    fn resize_during_block() {
        let mut encoder = Encoder::new(4096);

        encoder.begin_block().unwrap();

        assert_eq!(encoder.resize(100), Err(Error::ResizeDuringHeaderBlock));
    }

    #[test]
    fn resize_above_maximum() {
        let mut encoder = Encoder::new(4096);

        assert_eq!(encoder.resize(8192), Err(Error::InvalidDynamicTableSize));
    }

    #[test]
    fn empty_name() {
        let mut encoder = Encoder::new(4096);

        encoder.begin_block().unwrap();

        assert_eq!(
            encoder.append(&hdr("", "value")),
            Err(Error::EmptyHeaderName)
        );
    }

    #[test]
    fn single_resize_emits_one_update() {
        let mut encoder = Encoder::new(4096);

        encoder.resize(100).unwrap();

        let block = encoder.encode(&[]).unwrap();

        assert_eq!(block, [0x3f, 0x45]);
    }

    #[test]
    fn resizes_collapse_to_two_updates() {
        let mut encoder = Encoder::new(4096);

        encoder.resize(300).unwrap();
        encoder.resize(100).unwrap();
        encoder.resize(200).unwrap();

        let block = encoder.encode(&[]).unwrap();

        // Smallest (100) then latest (200); the intermediate 300 is dropped.
        let mut expected = Vec::new();
        prefix_int::encode(100, SIZE_UPDATE, 5, &mut expected);
        prefix_int::encode(200, SIZE_UPDATE, 5, &mut expected);

        assert_eq!(block, expected);
    }

    #[test]
    fn grow_after_shrink_emits_both() {
        let mut encoder = Encoder::new(4096);

        encoder.resize(100).unwrap();
        encoder.resize(300).unwrap();

        let block = encoder.encode(&[]).unwrap();

        let mut expected = Vec::new();
        prefix_int::encode(100, SIZE_UPDATE, 5, &mut expected);
        prefix_int::encode(300, SIZE_UPDATE, 5, &mut expected);

        assert_eq!(block, expected);
    }

    #[test]
    fn resize_state_clears_after_block() {
        let mut encoder = Encoder::new(4096);

        encoder.resize(100).unwrap();

        let block = encoder.encode(&[]).unwrap();
        assert!(!block.is_empty());

        // The next block carries no further updates.
        assert_eq!(encoder.encode(&[]).unwrap(), []);
    }

    #[test]
    fn resize_to_zero_drops_entries() {
        let mut encoder = Encoder::new(4096);

        encoder
            .encode(&[hdr("custom-key", "custom-value")])
            .unwrap();
        assert_eq!(encoder.table.entry_count(), 1);

        encoder.resize(0).unwrap();

        assert_eq!(encoder.table.entry_count(), 0);
        assert_eq!(encoder.table.length(), 0);
    }

    #[test]
    fn huffman_inflating_string_stays_raw() {
        let mut encoder = Encoder::new(4096);

        // A control character's code is 13+ bits, so Huffman inflates it.
        let block = encoder
            .encode(&[Header::with_indexing(
                "x-raw",
                "\u{1}\u{1}",
                Indexing::NonIndexable,
            )])
            .unwrap();

        // The value string starts after the literal name: flag bit clear,
        // length 2, verbatim bytes.
        let value = &block[block.len() - 3..];
        assert_eq!(value, [0x02, 0x01, 0x01]);
    }
}
