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

//! The HPACK indexing table.
//!
//! HPACK addresses the RFC 7541 Appendix A static table and the
//! per-direction dynamic table through one 1-based index space: indices
//! 1 to 61 are static, 62 onwards address dynamic entries from newest to
//! oldest. [`HeaderTable`] keeps the off-by-one arithmetic of that space in
//! one place.

use std::collections::VecDeque;

use super::static_table::STATIC_TABLE;
use super::Error;
use super::Result;

/// The fixed per-entry overhead of RFC 7541 §4.1.
const ENTRY_OVERHEAD: usize = 32;

/// The combined static and dynamic HPACK table of one connection direction.
///
/// Deliberately not `Clone`: the encode side and the decode side of a
/// connection evolve independent tables, and sharing one between them
/// breaks the protocol.
pub struct HeaderTable {
    /// Dynamic entries, newest first.
    entries: VecDeque<(String, String)>,

    /// Sum of the sizes of all dynamic entries.
    length: usize,

    /// Current dynamic table size limit, `<= maximum_length`.
    allowed_length: usize,

    /// Hard cap negotiated at the protocol layer.
    maximum_length: usize,
}

impl HeaderTable {
    /// Creates a table whose dynamic part is bounded by `maximum_length`
    /// bytes.
    pub fn new(maximum_length: usize) -> HeaderTable {
        HeaderTable {
            entries: VecDeque::new(),
            length: 0,
            allowed_length: maximum_length,
            maximum_length,
        }
    }

    /// Resolves a 1-based index across the static and dynamic tables.
    pub fn lookup(&self, index: u64) -> Result<(&str, &str)> {
        if index == 0 {
            return Err(Error::ZeroHeaderIndex);
        }

        if index <= STATIC_TABLE.len() as u64 {
            let (name, value) = STATIC_TABLE[index as usize - 1];
            return Ok((name, value));
        }

        self.entries
            .get(index as usize - STATIC_TABLE.len() - 1)
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .ok_or(Error::InvalidHeaderIndex {
                index,
                max: (STATIC_TABLE.len() + self.entries.len()) as u64,
            })
    }

    /// Resolves the name half of a 1-based index.
    pub fn lookup_name(&self, index: u64) -> Result<&str> {
        self.lookup(index).map(|(name, _)| name)
    }

    /// Finds the best index for a header.
    ///
    /// With a value, a full static match wins, then a full dynamic match,
    /// then the earliest name-only match in either table (static preferred).
    /// Without a value only names are compared. The flag reports whether the
    /// value matched too.
    pub fn find_match(
        &self, name: &str, value: Option<&str>,
    ) -> Option<(u64, bool)> {
        let mut name_only = None;

        for (i, (n, v)) in STATIC_TABLE.iter().enumerate() {
            if *n != name {
                continue;
            }

            match value {
                Some(value) if *v == value =>
                    return Some((i as u64 + 1, true)),

                Some(_) => {
                    if name_only.is_none() {
                        name_only = Some(i as u64 + 1);
                    }
                },

                None => return Some((i as u64 + 1, false)),
            }
        }

        for (i, (n, v)) in self.entries.iter().enumerate() {
            if n != name {
                continue;
            }

            let index = (STATIC_TABLE.len() + i) as u64 + 1;

            match value {
                Some(value) if v == value => return Some((index, true)),

                Some(_) => {
                    if name_only.is_none() {
                        name_only = Some(index);
                    }
                },

                None => return Some((index, false)),
            }
        }

        name_only.map(|index| (index, false))
    }

    /// Adds an entry at the head of the dynamic table, evicting from the
    /// tail until it fits.
    ///
    /// An entry larger than the allowed length empties the table and is
    /// itself dropped; per RFC 7541 §4.4 that is not an error.
    pub fn insert(&mut self, name: &str, value: &str) {
        let size = name.len() + value.len() + ENTRY_OVERHEAD;

        while self.length + size > self.allowed_length &&
            !self.entries.is_empty()
        {
            self.evict_one();
        }

        if self.length + size <= self.allowed_length {
            self.length += size;
            self.entries.push_front((name.to_string(), value.to_string()));
        }
    }

    /// Lowers or raises the dynamic table size limit, evicting as needed.
    ///
    /// The caller is responsible for checking `n` against
    /// [`maximum_length()`](HeaderTable::maximum_length) first.
    pub fn set_allowed_length(&mut self, n: usize) {
        while self.length > n {
            self.evict_one();
        }

        self.allowed_length = n;
    }

    /// Updates the protocol-level cap, clamping the allowed length with it.
    pub fn set_maximum_length(&mut self, n: usize) {
        self.maximum_length = n;

        if self.allowed_length > n {
            self.set_allowed_length(n);
        }
    }

    /// Sum of the sizes of all dynamic entries.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The current dynamic table size limit.
    pub fn allowed_length(&self) -> usize {
        self.allowed_length
    }

    /// The protocol-level cap on the dynamic table size.
    pub fn maximum_length(&self) -> usize {
        self.maximum_length
    }

    /// The number of dynamic entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn evict_one(&mut self) {
        if let Some((name, value)) = self.entries.pop_back() {
            self.length -= name.len() + value.len() + ENTRY_OVERHEAD;

            trace!("Evict name={name:?} value={value:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_static() {
        let table = HeaderTable::new(4096);

        assert_eq!(table.lookup(1), Ok((":authority", "")));
        assert_eq!(table.lookup(2), Ok((":method", "GET")));
        assert_eq!(table.lookup(61), Ok(("www-authenticate", "")));
    }

    #[test]
    fn lookup_zero() {
        let table = HeaderTable::new(4096);

        assert_eq!(table.lookup(0), Err(Error::ZeroHeaderIndex));
    }

    #[test]
    fn lookup_out_of_range() {
        let mut table = HeaderTable::new(4096);

        assert_eq!(
            table.lookup(62),
            Err(Error::InvalidHeaderIndex { index: 62, max: 61 })
        );

        table.insert("x-custom", "value");

        assert_eq!(table.lookup(62), Ok(("x-custom", "value")));
        assert_eq!(
            table.lookup(63),
            Err(Error::InvalidHeaderIndex { index: 63, max: 62 })
        );
    }

    #[test]
    fn newest_entry_is_62() {
        let mut table = HeaderTable::new(4096);

        table.insert("x-first", "1");
        table.insert("x-second", "2");

        assert_eq!(table.lookup(62), Ok(("x-second", "2")));
        assert_eq!(table.lookup(63), Ok(("x-first", "1")));

        table.insert("x-third", "3");

        // Previously indexed entries shift by exactly one.
        assert_eq!(table.lookup(62), Ok(("x-third", "3")));
        assert_eq!(table.lookup(63), Ok(("x-second", "2")));
        assert_eq!(table.lookup(64), Ok(("x-first", "1")));
    }

    #[test]
    fn insert_accounts_overhead() {
        let mut table = HeaderTable::new(4096);

        table.insert("a", "b");

        assert_eq!(table.length(), 34);
        assert_eq!(table.entry_count(), 1);
    }

    #[test]
    fn oversized_entry_empties_table() {
        let mut table = HeaderTable::new(100);

        table.insert("x-first", "1");
        assert_eq!(table.entry_count(), 1);

        let big = "v".repeat(200);
        table.insert("x-big", &big);

        assert_eq!(table.entry_count(), 0);
        assert_eq!(table.length(), 0);
    }

    #[test]
    fn zero_allowed_length_stays_empty() {
        let mut table = HeaderTable::new(4096);

        table.set_allowed_length(0);
        table.insert("a", "b");

        assert_eq!(table.entry_count(), 0);
        assert_eq!(table.length(), 0);
    }

    #[test]
    fn eviction_is_fifo() {
        // Each ("x-NN", "v") entry is 4 + 1 + 32 = 37 bytes.
        let mut table = HeaderTable::new(37 * 3);

        table.insert("x-01", "v");
        table.insert("x-02", "v");
        table.insert("x-03", "v");
        assert_eq!(table.entry_count(), 3);

        table.insert("x-04", "v");

        assert_eq!(table.entry_count(), 3);
        assert_eq!(table.lookup(62), Ok(("x-04", "v")));
        assert_eq!(table.lookup(64), Ok(("x-02", "v")));
    }

    #[test]
    fn shrink_evicts_to_fit() {
        let mut table = HeaderTable::new(4096);

        table.insert("x-first", "1");
        table.insert("x-second", "2");

        // Only ("x-second", "2"), 41 bytes with overhead, fits.
        table.set_allowed_length(41);

        assert_eq!(table.entry_count(), 1);
        assert_eq!(table.lookup(62), Ok(("x-second", "2")));
        assert!(table.length() <= table.allowed_length());
        assert!(table.allowed_length() <= table.maximum_length());
    }

    #[test]
    fn shrink_maximum_clamps_allowed() {
        let mut table = HeaderTable::new(4096);

        table.insert("x-first", "1");
        table.set_maximum_length(16);

        assert_eq!(table.allowed_length(), 16);
        assert_eq!(table.entry_count(), 0);
    }

    #[test]
    fn find_full_static_match() {
        let table = HeaderTable::new(4096);

        assert_eq!(table.find_match(":method", Some("GET")), Some((2, true)));
        assert_eq!(table.find_match(":method", Some("POST")), Some((3, true)));
    }

    #[test]
    fn find_name_only_static_match() {
        let table = HeaderTable::new(4096);

        assert_eq!(table.find_match(":method", Some("PATCH")), Some((2, false)));
        assert_eq!(table.find_match("cookie", Some("a=b")), Some((32, false)));
        assert_eq!(table.find_match("cookie", None), Some((32, false)));
    }

    #[test]
    fn find_full_dynamic_match() {
        let mut table = HeaderTable::new(4096);

        table.insert("x-custom", "value");

        assert_eq!(table.find_match("x-custom", Some("value")), Some((62, true)));
        assert_eq!(table.find_match("x-custom", Some("other")), Some((62, false)));
        assert_eq!(table.find_match("x-custom", None), Some((62, false)));
    }

    #[test]
    fn dynamic_full_match_beats_static_name_match() {
        let mut table = HeaderTable::new(4096);

        table.insert("cookie", "a=b");

        assert_eq!(table.find_match("cookie", Some("a=b")), Some((62, true)));

        // A static name-only match is still preferred over a dynamic one.
        assert_eq!(table.find_match("cookie", Some("c=d")), Some((32, false)));
    }

    #[test]
    fn find_no_match() {
        let table = HeaderTable::new(4096);

        assert_eq!(table.find_match("x-unknown", Some("value")), None);
        assert_eq!(table.find_match("x-unknown", None), None);
    }
}
