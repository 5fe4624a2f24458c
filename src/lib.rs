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

//! HPACK (RFC 7541) header compression for HTTP/2.
//!
//! [hpackr] implements the HPACK header-field compression format used by
//! HTTP/2. It provides a low level API for encoding and decoding complete
//! header blocks. The application is responsible for the surrounding frame
//! layer (HEADERS/CONTINUATION reassembly) as well as the transport.
//!
//! [hpackr]: https://github.com/hpackr/hpackr
//!
//! ## Encoding and decoding
//!
//! Each side of a connection holds one [`Encoder`] for the header blocks it
//! sends and one [`Decoder`] for the blocks it receives. Both are created
//! from the negotiated maximum dynamic table size:
//!
//! ```
//! let mut encoder = hpackr::Encoder::new(4096);
//! let mut decoder = hpackr::Decoder::new(4096);
//!
//! let headers = vec![
//!     hpackr::Header::new(":method", "GET"),
//!     hpackr::Header::new(":scheme", "https"),
//!     hpackr::Header::new(":path", "/"),
//! ];
//!
//! let block = encoder.encode(&headers)?;
//!
//! let decoded = decoder.decode(&block, 16_384)?;
//! assert_eq!(decoded, headers);
//! # Ok::<(), hpackr::Error>(())
//! ```
//!
//! The encoder can also build a block incrementally with
//! [`Encoder::begin_block()`], [`Encoder::append()`] and
//! [`Encoder::end_block()`].
//!
//! ## Sensitive headers
//!
//! Headers carrying sensitive values should be marked never-indexed so that
//! they are neither cached by either dynamic table nor rewritten by
//! intermediaries:
//!
//! ```
//! let cookie = hpackr::Header::with_indexing(
//!     "authorization",
//!     "Basic d2FsZG8=",
//!     hpackr::Indexing::NeverIndexed,
//! );
//! ```
//!
//! ## Connection state
//!
//! Encoder and decoder each own a private dynamic table that evolves with
//! every block they process, so blocks must be handled in the order they are
//! sent or received. Any [`Error`] returned by [`Decoder::decode()`] leaves
//! the table in an undefined state; the caller is expected to treat it as a
//! connection-level `COMPRESSION_ERROR` and tear the connection down.

#[macro_use]
extern crate log;

/// The first byte of an indexed header field representation.
const INDEXED: u8 = 0b1000_0000;

/// The first byte of a literal with incremental indexing.
const LITERAL_WITH_INDEXING: u8 = 0b0100_0000;

/// The first byte of a dynamic table size update.
const SIZE_UPDATE: u8 = 0b0010_0000;

/// The first byte of a literal that must never be indexed.
const LITERAL_NEVER_INDEXED: u8 = 0b0001_0000;

/// A specialized [`Result`] type for hpackr operations.
///
/// This type is used throughout hpackr's public API for any operation that
/// can produce an error.
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
pub type Result<T> = std::result::Result<T, Error>;

/// An HPACK error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The provided buffer ended in the middle of a field.
    BufferTooShort,

    /// A string literal declared a length past the end of the payload.
    StringTooLong,

    /// A header index fell outside the static and dynamic tables.
    InvalidHeaderIndex {
        /// The index that was requested.
        index: u64,

        /// The largest index currently addressable.
        max: u64,
    },

    /// An indexed header field used the reserved index zero.
    ZeroHeaderIndex,

    /// A dynamic table size update appeared after a header field of the same
    /// block.
    IllegalDynamicTableSizeChange,

    /// A requested dynamic table size exceeded the negotiated maximum.
    InvalidDynamicTableSize,

    /// A literal header field carried an empty name.
    EmptyHeaderName,

    /// The header block's Huffman encoding is invalid.
    InvalidHuffmanEncoding,

    /// A decoded header name or value is not valid UTF-8.
    InvalidHeaderValue,

    /// The decoded header list exceeded the size limit.
    HeaderListTooLarge,

    /// The encoder was asked to append a header without an open block.
    HeaderBlockNotOpen,

    /// The encoder was asked to open a block while one is already open.
    HeaderBlockAlreadyOpen,

    /// The encoder was asked to resize its table while a block is open.
    ResizeDuringHeaderBlock,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl std::convert::From<octets::BufferTooShortError> for Error {
    fn from(_err: octets::BufferTooShortError) -> Self {
        Error::BufferTooShort
    }
}

/// How a header field interacts with the dynamic tables and intermediaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indexing {
    /// The field may be added to the dynamic table and may be rewritten by
    /// intermediaries.
    #[default]
    Indexable,

    /// The field must not be added to the dynamic table but may still be
    /// rewritten by intermediaries.
    NonIndexable,

    /// The field must not be added to the dynamic table and must be forwarded
    /// verbatim by intermediaries.
    NeverIndexed,
}

/// An owned name-value pair representing a single header field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    name: String,
    value: String,
    indexing: Indexing,
}

impl Header {
    /// Creates a new header with the default [`Indexing::Indexable`]
    /// directive.
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Header {
            name: name.into(),
            value: value.into(),
            indexing: Indexing::default(),
        }
    }

    /// Creates a new header with an explicit indexing directive.
    pub fn with_indexing<N, V>(name: N, value: V, indexing: Indexing) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Header {
            name: name.into(),
            value: value.into(),
            indexing,
        }
    }

    /// Returns the header's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the header's value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the header's indexing directive.
    pub fn indexing(&self) -> Indexing {
        self.indexing
    }

    /// The size this header contributes to a table or list, per RFC 7541
    /// §4.1: name length plus value length plus a fixed 32 byte overhead.
    fn hpack_size(&self) -> usize {
        self.name.len() + self.value.len() + 32
    }
}

pub use crate::decoder::Decoder;
pub use crate::encoder::Encoder;
pub use crate::table::HeaderTable;

mod decoder;
mod encoder;
mod huffman;
mod prefix_int;
mod static_table;
mod table;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let _ = env_logger::builder().is_test(true).try_init();

        let headers = vec![
            Header::new(":method", "GET"),
            Header::new(":scheme", "https"),
            Header::new(":path", "/index.html"),
            Header::new(":authority", "www.example.com"),
            Header::new("user-agent", "hpackr/0.1"),
            Header::new("cookie", "a=b; c=d"),
            Header::with_indexing("x-trace", "1234", Indexing::NonIndexable),
            Header::with_indexing(
                "authorization",
                "Basic d2FsZG8=",
                Indexing::NeverIndexed,
            ),
        ];

        let mut enc = Encoder::new(4096);
        let mut dec = Decoder::new(4096);

        for _ in 0..3 {
            let block = enc.encode(&headers).unwrap();
            assert_eq!(dec.decode(&block, u64::MAX).unwrap(), headers);
        }
    }

    #[test]
    fn round_trip_without_huffman() {
        let headers = vec![
            Header::new(":status", "200"),
            Header::new("content-type", "text/html; charset=utf-8"),
            Header::new("x-emoji", "préférences ⚙"),
        ];

        let mut enc = Encoder::new(4096);
        enc.set_huffman(false);

        let mut dec = Decoder::new(4096);

        let block = enc.encode(&headers).unwrap();
        assert_eq!(dec.decode(&block, u64::MAX).unwrap(), headers);
    }

    #[test]
    fn round_trip_with_tiny_table() {
        let headers = vec![
            Header::new(":method", "PUT"),
            Header::new("x-first", "one value"),
            Header::new("x-second", "another value"),
            Header::new("x-first", "one value"),
        ];

        // Too small for any entry, so every block is fully literal.
        let mut enc = Encoder::new(16);
        let mut dec = Decoder::new(16);

        for _ in 0..2 {
            let block = enc.encode(&headers).unwrap();
            assert_eq!(dec.decode(&block, u64::MAX).unwrap(), headers);
        }
    }

    #[test]
    fn round_trip_with_resize() {
        let headers = vec![
            Header::new(":method", "GET"),
            Header::new("x-custom", "some value"),
        ];

        let mut enc = Encoder::new(4096);
        let mut dec = Decoder::new(4096);

        let block = enc.encode(&headers).unwrap();
        assert_eq!(dec.decode(&block, u64::MAX).unwrap(), headers);

        enc.resize(64).unwrap();
        enc.resize(1024).unwrap();

        let block = enc.encode(&headers).unwrap();
        assert_eq!(dec.decode(&block, u64::MAX).unwrap(), headers);
    }
}
