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

#[derive(Clone, Copy, Debug, PartialEq)]
enum Representation {
    Indexed,
    LiteralWithIndexing,
    SizeUpdate,
    LiteralNeverIndexed,
    LiteralWithoutIndexing,
}

impl Representation {
    pub fn from_byte(b: u8) -> Representation {
        if b & INDEXED == INDEXED {
            return Representation::Indexed;
        }

        if b & LITERAL_WITH_INDEXING == LITERAL_WITH_INDEXING {
            return Representation::LiteralWithIndexing;
        }

        if b & SIZE_UPDATE == SIZE_UPDATE {
            return Representation::SizeUpdate;
        }

        if b & LITERAL_NEVER_INDEXED == LITERAL_NEVER_INDEXED {
            return Representation::LiteralNeverIndexed;
        }

        Representation::LiteralWithoutIndexing
    }
}

/// An HPACK decoder.
pub struct Decoder {
    table: HeaderTable,
}

impl Decoder {
    /// Creates a new HPACK decoder whose dynamic table is bounded by the
    /// negotiated `max_table_size`.
    pub fn new(max_table_size: usize) -> Decoder {
        Decoder {
            table: HeaderTable::new(max_table_size),
        }
    }

    /// Lowers or raises the negotiated table size cap, e.g. after a
    /// SETTINGS_HEADER_TABLE_SIZE change.
    pub fn set_max_table_size(&mut self, n: usize) {
        self.table.set_maximum_length(n);
    }

    /// The negotiated table size cap.
    pub fn max_table_size(&self) -> usize {
        self.table.maximum_length()
    }

    /// Decodes one complete header block into an ordered header list.
    ///
    /// `max_list_size` bounds the decoded list using the RFC 7541 §4.1
    /// entry sizes (name plus value plus 32 bytes each). Any error leaves
    /// the dynamic table in an undefined state and must be treated as fatal
    /// to the connection.
    pub fn decode(
        &mut self, buf: &[u8], max_list_size: u64,
    ) -> Result<Vec<Header>> {
        let mut b = octets::Octets::with_slice(buf);

        let mut out: Vec<Header> = Vec::new();

        let mut left = max_list_size;

        while b.cap() > 0 {
            let first = b.peek_u8()?;

            let hdr = match Representation::from_byte(first) {
                Representation::Indexed => {
                    let index = prefix_int::decode(&mut b, 7)?;

                    trace!("Indexed index={index}");

                    let (name, value) = self.table.lookup(index)?;

                    Header::new(name, value)
                },

                Representation::LiteralWithIndexing => {
                    let name_index = prefix_int::decode(&mut b, 6)?;
                    let name = self.read_name(name_index, &mut b)?;
                    let value = read_string(&mut b)?;

                    trace!(
                        "LiteralWithIndexing name={name:?} value={value:?}"
                    );

                    self.table.insert(&name, &value);

                    Header::new(name, value)
                },

                Representation::SizeUpdate => {
                    let size = prefix_int::decode(&mut b, 5)?;

                    trace!("SizeUpdate size={size}");

                    if !out.is_empty() {
                        return Err(Error::IllegalDynamicTableSizeChange);
                    }

                    if size > self.table.maximum_length() as u64 {
                        return Err(Error::InvalidDynamicTableSize);
                    }

                    self.table.set_allowed_length(size as usize);

                    continue;
                },

                Representation::LiteralNeverIndexed => {
                    let name_index = prefix_int::decode(&mut b, 4)?;
                    let name = self.read_name(name_index, &mut b)?;
                    let value = read_string(&mut b)?;

                    trace!(
                        "LiteralNeverIndexed name={name:?} value={value:?}"
                    );

                    Header::with_indexing(name, value, Indexing::NeverIndexed)
                },

                Representation::LiteralWithoutIndexing => {
                    let name_index = prefix_int::decode(&mut b, 4)?;
                    let name = self.read_name(name_index, &mut b)?;
                    let value = read_string(&mut b)?;

                    trace!(
                        "LiteralWithoutIndexing name={name:?} value={value:?}"
                    );

                    Header::with_indexing(name, value, Indexing::NonIndexable)
                },
            };

            left = left
                .checked_sub(hdr.hpack_size() as u64)
                .ok_or(Error::HeaderListTooLarge)?;

            out.push(hdr);
        }

        Ok(out)
    }

    /// Reads a literal field's name: an inline string when the index is
    /// zero, otherwise the name half of the indexed entry.
    fn read_name(
        &self, name_index: u64, b: &mut octets::Octets,
    ) -> Result<String> {
        if name_index == 0 {
            let name = read_string(b)?;

            if name.is_empty() {
                return Err(Error::EmptyHeaderName);
            }

            return Ok(name);
        }

        self.table.lookup_name(name_index).map(str::to_string)
    }
}

fn read_string(b: &mut octets::Octets) -> Result<String> {
    let first = b.peek_u8()?;

    let huffman = first & HUFFMAN == HUFFMAN;

    let len = prefix_int::decode(b, 7)? as usize;

    if len > b.cap() {
        return Err(Error::StringTooLong);
    }

    let mut raw = b.get_bytes(len)?;

    let bytes = if huffman {
        huffman::decode(&mut raw)?
    } else {
        raw.to_vec()
    };

    String::from_utf8(bytes).map_err(|_| Error::InvalidHeaderValue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hdr(name: &str, value: &str) -> Header {
        Header::new(name, value)
    }

    #[test]
    fn indexed_static_field() {
        let mut decoder = Decoder::new(4096);

        let headers = decoder.decode(&[0x82], u64::MAX).unwrap();

        assert_eq!(headers, vec![hdr(":method", "GET")]);
    }

    #[test]
    fn zero_index() {
        let mut decoder = Decoder::new(4096);

        assert_eq!(
            decoder.decode(&[0x80], u64::MAX),
            Err(Error::ZeroHeaderIndex)
        );
    }

    #[test]
    fn index_out_of_range() {
        let mut decoder = Decoder::new(4096);

        assert_eq!(
            decoder.decode(&[0xbe], u64::MAX),
            Err(Error::InvalidHeaderIndex { index: 62, max: 61 })
        );
    }

    #[test]
    fn literal_with_indexing() {
        // RFC 7541 C.2.1.
        let block = [
            0x40, 0x0a, 0x63, 0x75, 0x73, 0x74, 0x6f, 0x6d, 0x2d, 0x6b, 0x65,
            0x79, 0x0d, 0x63, 0x75, 0x73, 0x74, 0x6f, 0x6d, 0x2d, 0x68, 0x65,
            0x61, 0x64, 0x65, 0x72,
        ];

        let mut decoder = Decoder::new(4096);

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers, vec![hdr("custom-key", "custom-header")]);
        assert_eq!(decoder.table.length(), 55);
        assert_eq!(decoder.table.entry_count(), 1);
    }

    #[test]
    fn literal_without_indexing() {
        // RFC 7541 C.2.2.
        let block = [
            0x04, 0x0c, 0x2f, 0x73, 0x61, 0x6d, 0x70, 0x6c, 0x65, 0x2f, 0x70,
            0x61, 0x74, 0x68,
        ];

        let mut decoder = Decoder::new(4096);

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers, vec![Header::with_indexing(
            ":path",
            "/sample/path",
            Indexing::NonIndexable
        )]);
        assert_eq!(decoder.table.entry_count(), 0);
    }

    #[test]
    fn literal_never_indexed() {
        // RFC 7541 C.2.3.
        let block = [
            0x10, 0x08, 0x70, 0x61, 0x73, 0x73, 0x77, 0x6f, 0x72, 0x64, 0x06,
            0x73, 0x65, 0x63, 0x72, 0x65, 0x74,
        ];

        let mut decoder = Decoder::new(4096);

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers, vec![Header::with_indexing(
            "password",
            "secret",
            Indexing::NeverIndexed
        )]);
        assert_eq!(decoder.table.entry_count(), 0);
    }

    #[test]
    fn request_sequence() {
        // RFC 7541 C.3: three requests on one connection.
        let mut decoder = Decoder::new(4096);

        let block = [
            0x82, 0x86, 0x84, 0x41, 0x0f, 0x77, 0x77, 0x77, 0x2e, 0x65, 0x78,
            0x61, 0x6d, 0x70, 0x6c, 0x65, 0x2e, 0x63, 0x6f, 0x6d,
        ];

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers, vec![
            hdr(":method", "GET"),
            hdr(":scheme", "http"),
            hdr(":path", "/"),
            hdr(":authority", "www.example.com"),
        ]);
        assert_eq!(decoder.table.length(), 57);

        let block = [
            0x82, 0x86, 0x84, 0xbe, 0x58, 0x08, 0x6e, 0x6f, 0x2d, 0x63, 0x61,
            0x63, 0x68, 0x65,
        ];

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers, vec![
            hdr(":method", "GET"),
            hdr(":scheme", "http"),
            hdr(":path", "/"),
            hdr(":authority", "www.example.com"),
            hdr("cache-control", "no-cache"),
        ]);
        assert_eq!(decoder.table.length(), 110);

        let block = [
            0x82, 0x87, 0x85, 0xbf, 0x40, 0x0a, 0x63, 0x75, 0x73, 0x74, 0x6f,
            0x6d, 0x2d, 0x6b, 0x65, 0x79, 0x0c, 0x63, 0x75, 0x73, 0x74, 0x6f,
            0x6d, 0x2d, 0x76, 0x61, 0x6c, 0x75, 0x65,
        ];

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers, vec![
            hdr(":method", "GET"),
            hdr(":scheme", "https"),
            hdr(":path", "/index.html"),
            hdr(":authority", "www.example.com"),
            hdr("custom-key", "custom-value"),
        ]);
        assert_eq!(decoder.table.length(), 164);
        assert_eq!(decoder.table.entry_count(), 3);
    }

    #[test]
    fn request_sequence_huffman() {
        // RFC 7541 C.4: the same requests with Huffman-coded strings.
        let mut decoder = Decoder::new(4096);

        let block = [
            0x82, 0x86, 0x84, 0x41, 0x8c, 0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a,
            0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff,
        ];

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers, vec![
            hdr(":method", "GET"),
            hdr(":scheme", "http"),
            hdr(":path", "/"),
            hdr(":authority", "www.example.com"),
        ]);
        assert_eq!(decoder.table.length(), 57);

        let block = [
            0x82, 0x86, 0x84, 0xbe, 0x58, 0x86, 0xa8, 0xeb, 0x10, 0x64, 0x9c,
            0xbf,
        ];

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers[4], hdr("cache-control", "no-cache"));
        assert_eq!(decoder.table.length(), 110);

        let block = [
            0x82, 0x87, 0x85, 0xbf, 0x40, 0x88, 0x25, 0xa8, 0x49, 0xe9, 0x5b,
            0xa9, 0x7d, 0x7f, 0x89, 0x25, 0xa8, 0x49, 0xe9, 0x5b, 0xb8, 0xe8,
            0xb4, 0xbf,
        ];

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers[4], hdr("custom-key", "custom-value"));
        assert_eq!(decoder.table.length(), 164);
    }

    #[test]
    fn response_sequence_with_eviction() {
        // RFC 7541 C.5: three responses against a 256 byte table.
        let mut decoder = Decoder::new(256);

        let block = [
            0x48, 0x03, 0x33, 0x30, 0x32, 0x58, 0x07, 0x70, 0x72, 0x69, 0x76,
            0x61, 0x74, 0x65, 0x61, 0x1d, 0x4d, 0x6f, 0x6e, 0x2c, 0x20, 0x32,
            0x31, 0x20, 0x4f, 0x63, 0x74, 0x20, 0x32, 0x30, 0x31, 0x33, 0x20,
            0x32, 0x30, 0x3a, 0x31, 0x33, 0x3a, 0x32, 0x31, 0x20, 0x47, 0x4d,
            0x54, 0x6e, 0x17, 0x68, 0x74, 0x74, 0x70, 0x73, 0x3a, 0x2f, 0x2f,
            0x77, 0x77, 0x77, 0x2e, 0x65, 0x78, 0x61, 0x6d, 0x70, 0x6c, 0x65,
            0x2e, 0x63, 0x6f, 0x6d,
        ];

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers, vec![
            hdr(":status", "302"),
            hdr("cache-control", "private"),
            hdr("date", "Mon, 21 Oct 2013 20:13:21 GMT"),
            hdr("location", "https://www.example.com"),
        ]);
        assert_eq!(decoder.table.length(), 222);
        assert_eq!(decoder.table.entry_count(), 4);

        // ":status: 307" evicts ":status: 302".
        let block = [0x48, 0x03, 0x33, 0x30, 0x37, 0xc1, 0xc0, 0xbf];

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers, vec![
            hdr(":status", "307"),
            hdr("cache-control", "private"),
            hdr("date", "Mon, 21 Oct 2013 20:13:21 GMT"),
            hdr("location", "https://www.example.com"),
        ]);
        assert_eq!(decoder.table.length(), 222);
        assert_eq!(decoder.table.entry_count(), 4);

        let block = [
            0x88, 0xc1, 0x61, 0x1d, 0x4d, 0x6f, 0x6e, 0x2c, 0x20, 0x32, 0x31,
            0x20, 0x4f, 0x63, 0x74, 0x20, 0x32, 0x30, 0x31, 0x33, 0x20, 0x32,
            0x30, 0x3a, 0x31, 0x33, 0x3a, 0x32, 0x32, 0x20, 0x47, 0x4d, 0x54,
            0xc0, 0x5a, 0x04, 0x67, 0x7a, 0x69, 0x70, 0x77, 0x38, 0x66, 0x6f,
            0x6f, 0x3d, 0x41, 0x53, 0x44, 0x4a, 0x4b, 0x48, 0x51, 0x4b, 0x42,
            0x5a, 0x58, 0x4f, 0x51, 0x57, 0x45, 0x4f, 0x50, 0x49, 0x55, 0x41,
            0x58, 0x51, 0x57, 0x45, 0x4f, 0x49, 0x55, 0x3b, 0x20, 0x6d, 0x61,
            0x78, 0x2d, 0x61, 0x67, 0x65, 0x3d, 0x33, 0x36, 0x30, 0x30, 0x3b,
            0x20, 0x76, 0x65, 0x72, 0x73, 0x69, 0x6f, 0x6e, 0x3d, 0x31,
        ];

        let headers = decoder.decode(&block, u64::MAX).unwrap();

        assert_eq!(headers, vec![
            hdr(":status", "200"),
            hdr("cache-control", "private"),
            hdr("date", "Mon, 21 Oct 2013 20:13:22 GMT"),
            hdr("location", "https://www.example.com"),
            hdr("content-encoding", "gzip"),
            hdr(
                "set-cookie",
                "foo=ASDJKHQKBZXOQWEOPIUAXQWEOIU; max-age=3600; version=1"
            ),
        ]);
        assert_eq!(decoder.table.length(), 215);
        assert_eq!(decoder.table.entry_count(), 3);
    }

    #[test]
    fn size_update() {
        let mut decoder = Decoder::new(4096);

        // "001" prefix, new size 100.
        let block = [0x3f, 0x45];

        assert_eq!(decoder.decode(&block, u64::MAX), Ok(vec![]));
        assert_eq!(decoder.table.allowed_length(), 100);
    }

    #[test]
    fn size_update_after_header() {
        let mut decoder = Decoder::new(4096);

        let block = [0x82, 0x3f, 0x45];

        assert_eq!(
            decoder.decode(&block, u64::MAX),
            Err(Error::IllegalDynamicTableSizeChange)
        );
    }

    #[test]
    fn size_update_above_maximum() {
        let mut decoder = Decoder::new(100);

        // New size 1337 > 100.
        let block = [0x3f, 0x9a, 0x0a];

        assert_eq!(
            decoder.decode(&block, u64::MAX),
            Err(Error::InvalidDynamicTableSize)
        );
    }

    #[test]
    fn shrinking_maximum_evicts() {
        let mut decoder = Decoder::new(4096);

        let block = [
            0x40, 0x0a, 0x63, 0x75, 0x73, 0x74, 0x6f, 0x6d, 0x2d, 0x6b, 0x65,
            0x79, 0x0d, 0x63, 0x75, 0x73, 0x74, 0x6f, 0x6d, 0x2d, 0x68, 0x65,
            0x61, 0x64, 0x65, 0x72,
        ];

        decoder.decode(&block, u64::MAX).unwrap();
        assert_eq!(decoder.table.entry_count(), 1);

        decoder.set_max_table_size(16);

        assert_eq!(decoder.table.entry_count(), 0);
        assert_eq!(decoder.table.allowed_length(), 16);
    }

    #[test]
    fn string_longer_than_payload() {
        // Literal name declares 10 bytes but only 3 follow.
        let block = [0x40, 0x0a, 0x61, 0x62, 0x63];

        let mut decoder = Decoder::new(4096);

        assert_eq!(
            decoder.decode(&block, u64::MAX),
            Err(Error::StringTooLong)
        );
    }

    #[test]
    fn truncated_integer() {
        let block = [0xff];

        let mut decoder = Decoder::new(4096);

        assert_eq!(
            decoder.decode(&block, u64::MAX),
            Err(Error::BufferTooShort)
        );
    }

    #[test]
    fn empty_header_name() {
        let block = [0x40, 0x00, 0x03, 0x61, 0x62, 0x63];

        let mut decoder = Decoder::new(4096);

        assert_eq!(
            decoder.decode(&block, u64::MAX),
            Err(Error::EmptyHeaderName)
        );
    }

    #[test]
    fn invalid_utf8_string() {
        let block = [0x40, 0x02, 0x61, 0x62, 0x02, 0xc3, 0x28];

        let mut decoder = Decoder::new(4096);

        assert_eq!(
            decoder.decode(&block, u64::MAX),
            Err(Error::InvalidHeaderValue)
        );
    }

    #[test]
    fn invalid_huffman_string() {
        // Huffman flag set, one 0x00 byte: a truncated code with zero
        // padding.
        let block = [0x40, 0x81, 0x00];

        let mut decoder = Decoder::new(4096);

        assert_eq!(
            decoder.decode(&block, u64::MAX),
            Err(Error::InvalidHuffmanEncoding)
        );
    }

    #[test]
    fn header_list_too_large() {
        let mut decoder = Decoder::new(4096);

        // ":method: GET" accounts for 7 + 3 + 32 = 42 bytes.
        assert_eq!(decoder.decode(&[0x82], 42), Ok(vec![hdr(":method", "GET")]));

        assert_eq!(
            decoder.decode(&[0x82, 0x82], 42),
            Err(Error::HeaderListTooLarge)
        );
    }
}
