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

// RFC 7541 Appendix B Huffman code tables, machine generated.
//
// ENCODE_TABLE maps a byte to its (bit length, code) pair.
//
// DECODE_TABLE is a nibble-at-a-time state machine over the
// canonical code: DECODE_TABLE[state][nibble] yields
// (next state, decoded byte, flags), with flags MAYBE_EOS = 1,
// DECODED = 2 and ERROR = 4.

pub const ENCODE_TABLE: [(usize, u64); 256] = [
    (13, 0x1ff8),
    (23, 0x7fffd8),
    (28, 0xfffffe2),
    (28, 0xfffffe3),
    (28, 0xfffffe4),
    (28, 0xfffffe5),
    (28, 0xfffffe6),
    (28, 0xfffffe7),
    (28, 0xfffffe8),
    (24, 0xffffea),
    (30, 0x3ffffffc),
    (28, 0xfffffe9),
    (28, 0xfffffea),
    (30, 0x3ffffffd),
    (28, 0xfffffeb),
    (28, 0xfffffec),
    (28, 0xfffffed),
    (28, 0xfffffee),
    (28, 0xfffffef),
    (28, 0xffffff0),
    (28, 0xffffff1),
    (28, 0xffffff2),
    (30, 0x3ffffffe),
    (28, 0xffffff3),
    (28, 0xffffff4),
    (28, 0xffffff5),
    (28, 0xffffff6),
    (28, 0xffffff7),
    (28, 0xffffff8),
    (28, 0xffffff9),
    (28, 0xffffffa),
    (28, 0xffffffb),
    (6, 0x14),
    (10, 0x3f8),
    (10, 0x3f9),
    (12, 0xffa),
    (13, 0x1ff9),
    (6, 0x15),
    (8, 0xf8),
    (11, 0x7fa),
    (10, 0x3fa),
    (10, 0x3fb),
    (8, 0xf9),
    (11, 0x7fb),
    (8, 0xfa),
    (6, 0x16),
    (6, 0x17),
    (6, 0x18),
    (5, 0x0),
    (5, 0x1),
    (5, 0x2),
    (6, 0x19),
    (6, 0x1a),
    (6, 0x1b),
    (6, 0x1c),
    (6, 0x1d),
    (6, 0x1e),
    (6, 0x1f),
    (7, 0x5c),
    (8, 0xfb),
    (15, 0x7ffc),
    (6, 0x20),
    (12, 0xffb),
    (10, 0x3fc),
    (13, 0x1ffa),
    (6, 0x21),
    (7, 0x5d),
    (7, 0x5e),
    (7, 0x5f),
    (7, 0x60),
    (7, 0x61),
    (7, 0x62),
    (7, 0x63),
    (7, 0x64),
    (7, 0x65),
    (7, 0x66),
    (7, 0x67),
    (7, 0x68),
    (7, 0x69),
    (7, 0x6a),
    (7, 0x6b),
    (7, 0x6c),
    (7, 0x6d),
    (7, 0x6e),
    (7, 0x6f),
    (7, 0x70),
    (7, 0x71),
    (7, 0x72),
    (8, 0xfc),
    (7, 0x73),
    (8, 0xfd),
    (13, 0x1ffb),
    (19, 0x7fff0),
    (13, 0x1ffc),
    (14, 0x3ffc),
    (6, 0x22),
    (15, 0x7ffd),
    (5, 0x3),
    (6, 0x23),
    (5, 0x4),
    (6, 0x24),
    (5, 0x5),
    (6, 0x25),
    (6, 0x26),
    (6, 0x27),
    (5, 0x6),
    (7, 0x74),
    (7, 0x75),
    (6, 0x28),
    (6, 0x29),
    (6, 0x2a),
    (5, 0x7),
    (6, 0x2b),
    (7, 0x76),
    (6, 0x2c),
    (5, 0x8),
    (5, 0x9),
    (6, 0x2d),
    (7, 0x77),
    (7, 0x78),
    (7, 0x79),
    (7, 0x7a),
    (7, 0x7b),
    (15, 0x7ffe),
    (11, 0x7fc),
    (14, 0x3ffd),
    (13, 0x1ffd),
    (28, 0xffffffc),
    (20, 0xfffe6),
    (22, 0x3fffd2),
    (20, 0xfffe7),
    (20, 0xfffe8),
    (22, 0x3fffd3),
    (22, 0x3fffd4),
    (22, 0x3fffd5),
    (23, 0x7fffd9),
    (22, 0x3fffd6),
    (23, 0x7fffda),
    (23, 0x7fffdb),
    (23, 0x7fffdc),
    (23, 0x7fffdd),
    (23, 0x7fffde),
    (24, 0xffffeb),
    (23, 0x7fffdf),
    (24, 0xffffec),
    (24, 0xffffed),
    (22, 0x3fffd7),
    (23, 0x7fffe0),
    (24, 0xffffee),
    (23, 0x7fffe1),
    (23, 0x7fffe2),
    (23, 0x7fffe3),
    (23, 0x7fffe4),
    (21, 0x1fffdc),
    (22, 0x3fffd8),
    (23, 0x7fffe5),
    (22, 0x3fffd9),
    (23, 0x7fffe6),
    (23, 0x7fffe7),
    (24, 0xffffef),
    (22, 0x3fffda),
    (21, 0x1fffdd),
    (20, 0xfffe9),
    (22, 0x3fffdb),
    (22, 0x3fffdc),
    (23, 0x7fffe8),
    (23, 0x7fffe9),
    (21, 0x1fffde),
    (23, 0x7fffea),
    (22, 0x3fffdd),
    (22, 0x3fffde),
    (24, 0xfffff0),
    (21, 0x1fffdf),
    (22, 0x3fffdf),
    (23, 0x7fffeb),
    (23, 0x7fffec),
    (21, 0x1fffe0),
    (21, 0x1fffe1),
    (22, 0x3fffe0),
    (21, 0x1fffe2),
    (23, 0x7fffed),
    (22, 0x3fffe1),
    (23, 0x7fffee),
    (23, 0x7fffef),
    (20, 0xfffea),
    (22, 0x3fffe2),
    (22, 0x3fffe3),
    (22, 0x3fffe4),
    (23, 0x7ffff0),
    (22, 0x3fffe5),
    (22, 0x3fffe6),
    (23, 0x7ffff1),
    (26, 0x3ffffe0),
    (26, 0x3ffffe1),
    (20, 0xfffeb),
    (19, 0x7fff1),
    (22, 0x3fffe7),
    (23, 0x7ffff2),
    (22, 0x3fffe8),
    (25, 0x1ffffec),
    (26, 0x3ffffe2),
    (26, 0x3ffffe3),
    (26, 0x3ffffe4),
    (27, 0x7ffffde),
    (27, 0x7ffffdf),
    (26, 0x3ffffe5),
    (24, 0xfffff1),
    (25, 0x1ffffed),
    (19, 0x7fff2),
    (21, 0x1fffe3),
    (26, 0x3ffffe6),
    (27, 0x7ffffe0),
    (27, 0x7ffffe1),
    (26, 0x3ffffe7),
    (27, 0x7ffffe2),
    (24, 0xfffff2),
    (21, 0x1fffe4),
    (21, 0x1fffe5),
    (26, 0x3ffffe8),
    (26, 0x3ffffe9),
    (28, 0xffffffd),
    (27, 0x7ffffe3),
    (27, 0x7ffffe4),
    (27, 0x7ffffe5),
    (20, 0xfffec),
    (24, 0xfffff3),
    (20, 0xfffed),
    (21, 0x1fffe6),
    (22, 0x3fffe9),
    (21, 0x1fffe7),
    (21, 0x1fffe8),
    (23, 0x7ffff3),
    (22, 0x3fffea),
    (22, 0x3fffeb),
    (25, 0x1ffffee),
    (25, 0x1ffffef),
    (24, 0xfffff4),
    (24, 0xfffff5),
    (26, 0x3ffffea),
    (23, 0x7ffff4),
    (26, 0x3ffffeb),
    (27, 0x7ffffe6),
    (26, 0x3ffffec),
    (26, 0x3ffffed),
    (27, 0x7ffffe7),
    (27, 0x7ffffe8),
    (27, 0x7ffffe9),
    (27, 0x7ffffea),
    (27, 0x7ffffeb),
    (28, 0xffffffe),
    (27, 0x7ffffec),
    (27, 0x7ffffed),
    (27, 0x7ffffee),
    (27, 0x7ffffef),
    (27, 0x7fffff0),
    (26, 0x3ffffee),
];

pub const DECODE_TABLE: [[(u8, u8, u8); 16]; 256] = [
    [
        (15, 0, 0), (16, 0, 0), (17, 0, 0), (18, 0, 0), (19, 0, 0), (20, 0, 0),
        (21, 0, 0), (22, 0, 0), (23, 0, 0), (24, 0, 0), (25, 0, 0), (26, 0, 0),
        (27, 0, 0), (28, 0, 0), (29, 0, 0), (30, 0, 1),
    ],
    [
        (0, 48, 2), (0, 49, 2), (0, 50, 2), (0, 97, 2), (0, 99, 2),
        (0, 101, 2), (0, 105, 2), (0, 111, 2), (0, 115, 2), (0, 116, 2),
        (31, 0, 0), (32, 0, 0), (33, 0, 0), (34, 0, 0), (35, 0, 0), (36, 0, 0),
    ],
    [
        (37, 0, 0), (38, 0, 0), (39, 0, 0), (40, 0, 0), (41, 0, 0), (42, 0, 0),
        (43, 0, 0), (44, 0, 0), (45, 0, 0), (46, 0, 0), (47, 0, 0), (48, 0, 0),
        (49, 0, 0), (50, 0, 0), (51, 0, 0), (52, 0, 1),
    ],
    [
        (1, 48, 2), (2, 48, 3), (1, 49, 2), (2, 49, 3), (1, 50, 2), (2, 50, 3),
        (1, 97, 2), (2, 97, 3), (1, 99, 2), (2, 99, 3), (1, 101, 2),
        (2, 101, 3), (1, 105, 2), (2, 105, 3), (1, 111, 2), (2, 111, 3),
    ],
    [
        (1, 115, 2), (2, 115, 3), (1, 116, 2), (2, 116, 3), (0, 32, 2),
        (0, 37, 2), (0, 45, 2), (0, 46, 2), (0, 47, 2), (0, 51, 2), (0, 52, 2),
        (0, 53, 2), (0, 54, 2), (0, 55, 2), (0, 56, 2), (0, 57, 2),
    ],
    [
        (0, 61, 2), (0, 65, 2), (0, 95, 2), (0, 98, 2), (0, 100, 2),
        (0, 102, 2), (0, 103, 2), (0, 104, 2), (0, 108, 2), (0, 109, 2),
        (0, 110, 2), (0, 112, 2), (0, 114, 2), (0, 117, 2), (53, 0, 0),
        (54, 0, 0),
    ],
    [
        (55, 0, 0), (56, 0, 0), (57, 0, 0), (58, 0, 0), (59, 0, 0), (60, 0, 0),
        (61, 0, 0), (62, 0, 0), (63, 0, 0), (64, 0, 0), (65, 0, 0), (66, 0, 0),
        (67, 0, 0), (68, 0, 0), (69, 0, 0), (70, 0, 1),
    ],
    [
        (3, 48, 2), (4, 48, 2), (5, 48, 2), (6, 48, 3), (3, 49, 2), (4, 49, 2),
        (5, 49, 2), (6, 49, 3), (3, 50, 2), (4, 50, 2), (5, 50, 2), (6, 50, 3),
        (3, 97, 2), (4, 97, 2), (5, 97, 2), (6, 97, 3),
    ],
    [
        (3, 99, 2), (4, 99, 2), (5, 99, 2), (6, 99, 3), (3, 101, 2),
        (4, 101, 2), (5, 101, 2), (6, 101, 3), (3, 105, 2), (4, 105, 2),
        (5, 105, 2), (6, 105, 3), (3, 111, 2), (4, 111, 2), (5, 111, 2),
        (6, 111, 3),
    ],
    [
        (3, 115, 2), (4, 115, 2), (5, 115, 2), (6, 115, 3), (3, 116, 2),
        (4, 116, 2), (5, 116, 2), (6, 116, 3), (1, 32, 2), (2, 32, 3),
        (1, 37, 2), (2, 37, 3), (1, 45, 2), (2, 45, 3), (1, 46, 2), (2, 46, 3),
    ],
    [
        (1, 47, 2), (2, 47, 3), (1, 51, 2), (2, 51, 3), (1, 52, 2), (2, 52, 3),
        (1, 53, 2), (2, 53, 3), (1, 54, 2), (2, 54, 3), (1, 55, 2), (2, 55, 3),
        (1, 56, 2), (2, 56, 3), (1, 57, 2), (2, 57, 3),
    ],
    [
        (1, 61, 2), (2, 61, 3), (1, 65, 2), (2, 65, 3), (1, 95, 2), (2, 95, 3),
        (1, 98, 2), (2, 98, 3), (1, 100, 2), (2, 100, 3), (1, 102, 2),
        (2, 102, 3), (1, 103, 2), (2, 103, 3), (1, 104, 2), (2, 104, 3),
    ],
    [
        (1, 108, 2), (2, 108, 3), (1, 109, 2), (2, 109, 3), (1, 110, 2),
        (2, 110, 3), (1, 112, 2), (2, 112, 3), (1, 114, 2), (2, 114, 3),
        (1, 117, 2), (2, 117, 3), (0, 58, 2), (0, 66, 2), (0, 67, 2),
        (0, 68, 2),
    ],
    [
        (0, 69, 2), (0, 70, 2), (0, 71, 2), (0, 72, 2), (0, 73, 2), (0, 74, 2),
        (0, 75, 2), (0, 76, 2), (0, 77, 2), (0, 78, 2), (0, 79, 2), (0, 80, 2),
        (0, 81, 2), (0, 82, 2), (0, 83, 2), (0, 84, 2),
    ],
    [
        (0, 85, 2), (0, 86, 2), (0, 87, 2), (0, 89, 2), (0, 106, 2),
        (0, 107, 2), (0, 113, 2), (0, 118, 2), (0, 119, 2), (0, 120, 2),
        (0, 121, 2), (0, 122, 2), (71, 0, 0), (72, 0, 0), (73, 0, 0),
        (74, 0, 1),
    ],
    [
        (7, 48, 2), (8, 48, 2), (9, 48, 2), (10, 48, 2), (11, 48, 2),
        (12, 48, 2), (13, 48, 2), (14, 48, 3), (7, 49, 2), (8, 49, 2),
        (9, 49, 2), (10, 49, 2), (11, 49, 2), (12, 49, 2), (13, 49, 2),
        (14, 49, 3),
    ],
    [
        (7, 50, 2), (8, 50, 2), (9, 50, 2), (10, 50, 2), (11, 50, 2),
        (12, 50, 2), (13, 50, 2), (14, 50, 3), (7, 97, 2), (8, 97, 2),
        (9, 97, 2), (10, 97, 2), (11, 97, 2), (12, 97, 2), (13, 97, 2),
        (14, 97, 3),
    ],
    [
        (7, 99, 2), (8, 99, 2), (9, 99, 2), (10, 99, 2), (11, 99, 2),
        (12, 99, 2), (13, 99, 2), (14, 99, 3), (7, 101, 2), (8, 101, 2),
        (9, 101, 2), (10, 101, 2), (11, 101, 2), (12, 101, 2), (13, 101, 2),
        (14, 101, 3),
    ],
    [
        (7, 105, 2), (8, 105, 2), (9, 105, 2), (10, 105, 2), (11, 105, 2),
        (12, 105, 2), (13, 105, 2), (14, 105, 3), (7, 111, 2), (8, 111, 2),
        (9, 111, 2), (10, 111, 2), (11, 111, 2), (12, 111, 2), (13, 111, 2),
        (14, 111, 3),
    ],
    [
        (7, 115, 2), (8, 115, 2), (9, 115, 2), (10, 115, 2), (11, 115, 2),
        (12, 115, 2), (13, 115, 2), (14, 115, 3), (7, 116, 2), (8, 116, 2),
        (9, 116, 2), (10, 116, 2), (11, 116, 2), (12, 116, 2), (13, 116, 2),
        (14, 116, 3),
    ],
    [
        (3, 32, 2), (4, 32, 2), (5, 32, 2), (6, 32, 3), (3, 37, 2), (4, 37, 2),
        (5, 37, 2), (6, 37, 3), (3, 45, 2), (4, 45, 2), (5, 45, 2), (6, 45, 3),
        (3, 46, 2), (4, 46, 2), (5, 46, 2), (6, 46, 3),
    ],
    [
        (3, 47, 2), (4, 47, 2), (5, 47, 2), (6, 47, 3), (3, 51, 2), (4, 51, 2),
        (5, 51, 2), (6, 51, 3), (3, 52, 2), (4, 52, 2), (5, 52, 2), (6, 52, 3),
        (3, 53, 2), (4, 53, 2), (5, 53, 2), (6, 53, 3),
    ],
    [
        (3, 54, 2), (4, 54, 2), (5, 54, 2), (6, 54, 3), (3, 55, 2), (4, 55, 2),
        (5, 55, 2), (6, 55, 3), (3, 56, 2), (4, 56, 2), (5, 56, 2), (6, 56, 3),
        (3, 57, 2), (4, 57, 2), (5, 57, 2), (6, 57, 3),
    ],
    [
        (3, 61, 2), (4, 61, 2), (5, 61, 2), (6, 61, 3), (3, 65, 2), (4, 65, 2),
        (5, 65, 2), (6, 65, 3), (3, 95, 2), (4, 95, 2), (5, 95, 2), (6, 95, 3),
        (3, 98, 2), (4, 98, 2), (5, 98, 2), (6, 98, 3),
    ],
    [
        (3, 100, 2), (4, 100, 2), (5, 100, 2), (6, 100, 3), (3, 102, 2),
        (4, 102, 2), (5, 102, 2), (6, 102, 3), (3, 103, 2), (4, 103, 2),
        (5, 103, 2), (6, 103, 3), (3, 104, 2), (4, 104, 2), (5, 104, 2),
        (6, 104, 3),
    ],
    [
        (3, 108, 2), (4, 108, 2), (5, 108, 2), (6, 108, 3), (3, 109, 2),
        (4, 109, 2), (5, 109, 2), (6, 109, 3), (3, 110, 2), (4, 110, 2),
        (5, 110, 2), (6, 110, 3), (3, 112, 2), (4, 112, 2), (5, 112, 2),
        (6, 112, 3),
    ],
    [
        (3, 114, 2), (4, 114, 2), (5, 114, 2), (6, 114, 3), (3, 117, 2),
        (4, 117, 2), (5, 117, 2), (6, 117, 3), (1, 58, 2), (2, 58, 3),
        (1, 66, 2), (2, 66, 3), (1, 67, 2), (2, 67, 3), (1, 68, 2), (2, 68, 3),
    ],
    [
        (1, 69, 2), (2, 69, 3), (1, 70, 2), (2, 70, 3), (1, 71, 2), (2, 71, 3),
        (1, 72, 2), (2, 72, 3), (1, 73, 2), (2, 73, 3), (1, 74, 2), (2, 74, 3),
        (1, 75, 2), (2, 75, 3), (1, 76, 2), (2, 76, 3),
    ],
    [
        (1, 77, 2), (2, 77, 3), (1, 78, 2), (2, 78, 3), (1, 79, 2), (2, 79, 3),
        (1, 80, 2), (2, 80, 3), (1, 81, 2), (2, 81, 3), (1, 82, 2), (2, 82, 3),
        (1, 83, 2), (2, 83, 3), (1, 84, 2), (2, 84, 3),
    ],
    [
        (1, 85, 2), (2, 85, 3), (1, 86, 2), (2, 86, 3), (1, 87, 2), (2, 87, 3),
        (1, 89, 2), (2, 89, 3), (1, 106, 2), (2, 106, 3), (1, 107, 2),
        (2, 107, 3), (1, 113, 2), (2, 113, 3), (1, 118, 2), (2, 118, 3),
    ],
    [
        (1, 119, 2), (2, 119, 3), (1, 120, 2), (2, 120, 3), (1, 121, 2),
        (2, 121, 3), (1, 122, 2), (2, 122, 3), (0, 38, 2), (0, 42, 2),
        (0, 44, 2), (0, 59, 2), (0, 88, 2), (0, 90, 2), (75, 0, 0), (76, 0, 0),
    ],
    [
        (7, 32, 2), (8, 32, 2), (9, 32, 2), (10, 32, 2), (11, 32, 2),
        (12, 32, 2), (13, 32, 2), (14, 32, 3), (7, 37, 2), (8, 37, 2),
        (9, 37, 2), (10, 37, 2), (11, 37, 2), (12, 37, 2), (13, 37, 2),
        (14, 37, 3),
    ],
    [
        (7, 45, 2), (8, 45, 2), (9, 45, 2), (10, 45, 2), (11, 45, 2),
        (12, 45, 2), (13, 45, 2), (14, 45, 3), (7, 46, 2), (8, 46, 2),
        (9, 46, 2), (10, 46, 2), (11, 46, 2), (12, 46, 2), (13, 46, 2),
        (14, 46, 3),
    ],
    [
        (7, 47, 2), (8, 47, 2), (9, 47, 2), (10, 47, 2), (11, 47, 2),
        (12, 47, 2), (13, 47, 2), (14, 47, 3), (7, 51, 2), (8, 51, 2),
        (9, 51, 2), (10, 51, 2), (11, 51, 2), (12, 51, 2), (13, 51, 2),
        (14, 51, 3),
    ],
    [
        (7, 52, 2), (8, 52, 2), (9, 52, 2), (10, 52, 2), (11, 52, 2),
        (12, 52, 2), (13, 52, 2), (14, 52, 3), (7, 53, 2), (8, 53, 2),
        (9, 53, 2), (10, 53, 2), (11, 53, 2), (12, 53, 2), (13, 53, 2),
        (14, 53, 3),
    ],
    [
        (7, 54, 2), (8, 54, 2), (9, 54, 2), (10, 54, 2), (11, 54, 2),
        (12, 54, 2), (13, 54, 2), (14, 54, 3), (7, 55, 2), (8, 55, 2),
        (9, 55, 2), (10, 55, 2), (11, 55, 2), (12, 55, 2), (13, 55, 2),
        (14, 55, 3),
    ],
    [
        (7, 56, 2), (8, 56, 2), (9, 56, 2), (10, 56, 2), (11, 56, 2),
        (12, 56, 2), (13, 56, 2), (14, 56, 3), (7, 57, 2), (8, 57, 2),
        (9, 57, 2), (10, 57, 2), (11, 57, 2), (12, 57, 2), (13, 57, 2),
        (14, 57, 3),
    ],
    [
        (7, 61, 2), (8, 61, 2), (9, 61, 2), (10, 61, 2), (11, 61, 2),
        (12, 61, 2), (13, 61, 2), (14, 61, 3), (7, 65, 2), (8, 65, 2),
        (9, 65, 2), (10, 65, 2), (11, 65, 2), (12, 65, 2), (13, 65, 2),
        (14, 65, 3),
    ],
    [
        (7, 95, 2), (8, 95, 2), (9, 95, 2), (10, 95, 2), (11, 95, 2),
        (12, 95, 2), (13, 95, 2), (14, 95, 3), (7, 98, 2), (8, 98, 2),
        (9, 98, 2), (10, 98, 2), (11, 98, 2), (12, 98, 2), (13, 98, 2),
        (14, 98, 3),
    ],
    [
        (7, 100, 2), (8, 100, 2), (9, 100, 2), (10, 100, 2), (11, 100, 2),
        (12, 100, 2), (13, 100, 2), (14, 100, 3), (7, 102, 2), (8, 102, 2),
        (9, 102, 2), (10, 102, 2), (11, 102, 2), (12, 102, 2), (13, 102, 2),
        (14, 102, 3),
    ],
    [
        (7, 103, 2), (8, 103, 2), (9, 103, 2), (10, 103, 2), (11, 103, 2),
        (12, 103, 2), (13, 103, 2), (14, 103, 3), (7, 104, 2), (8, 104, 2),
        (9, 104, 2), (10, 104, 2), (11, 104, 2), (12, 104, 2), (13, 104, 2),
        (14, 104, 3),
    ],
    [
        (7, 108, 2), (8, 108, 2), (9, 108, 2), (10, 108, 2), (11, 108, 2),
        (12, 108, 2), (13, 108, 2), (14, 108, 3), (7, 109, 2), (8, 109, 2),
        (9, 109, 2), (10, 109, 2), (11, 109, 2), (12, 109, 2), (13, 109, 2),
        (14, 109, 3),
    ],
    [
        (7, 110, 2), (8, 110, 2), (9, 110, 2), (10, 110, 2), (11, 110, 2),
        (12, 110, 2), (13, 110, 2), (14, 110, 3), (7, 112, 2), (8, 112, 2),
        (9, 112, 2), (10, 112, 2), (11, 112, 2), (12, 112, 2), (13, 112, 2),
        (14, 112, 3),
    ],
    [
        (7, 114, 2), (8, 114, 2), (9, 114, 2), (10, 114, 2), (11, 114, 2),
        (12, 114, 2), (13, 114, 2), (14, 114, 3), (7, 117, 2), (8, 117, 2),
        (9, 117, 2), (10, 117, 2), (11, 117, 2), (12, 117, 2), (13, 117, 2),
        (14, 117, 3),
    ],
    [
        (3, 58, 2), (4, 58, 2), (5, 58, 2), (6, 58, 3), (3, 66, 2), (4, 66, 2),
        (5, 66, 2), (6, 66, 3), (3, 67, 2), (4, 67, 2), (5, 67, 2), (6, 67, 3),
        (3, 68, 2), (4, 68, 2), (5, 68, 2), (6, 68, 3),
    ],
    [
        (3, 69, 2), (4, 69, 2), (5, 69, 2), (6, 69, 3), (3, 70, 2), (4, 70, 2),
        (5, 70, 2), (6, 70, 3), (3, 71, 2), (4, 71, 2), (5, 71, 2), (6, 71, 3),
        (3, 72, 2), (4, 72, 2), (5, 72, 2), (6, 72, 3),
    ],
    [
        (3, 73, 2), (4, 73, 2), (5, 73, 2), (6, 73, 3), (3, 74, 2), (4, 74, 2),
        (5, 74, 2), (6, 74, 3), (3, 75, 2), (4, 75, 2), (5, 75, 2), (6, 75, 3),
        (3, 76, 2), (4, 76, 2), (5, 76, 2), (6, 76, 3),
    ],
    [
        (3, 77, 2), (4, 77, 2), (5, 77, 2), (6, 77, 3), (3, 78, 2), (4, 78, 2),
        (5, 78, 2), (6, 78, 3), (3, 79, 2), (4, 79, 2), (5, 79, 2), (6, 79, 3),
        (3, 80, 2), (4, 80, 2), (5, 80, 2), (6, 80, 3),
    ],
    [
        (3, 81, 2), (4, 81, 2), (5, 81, 2), (6, 81, 3), (3, 82, 2), (4, 82, 2),
        (5, 82, 2), (6, 82, 3), (3, 83, 2), (4, 83, 2), (5, 83, 2), (6, 83, 3),
        (3, 84, 2), (4, 84, 2), (5, 84, 2), (6, 84, 3),
    ],
    [
        (3, 85, 2), (4, 85, 2), (5, 85, 2), (6, 85, 3), (3, 86, 2), (4, 86, 2),
        (5, 86, 2), (6, 86, 3), (3, 87, 2), (4, 87, 2), (5, 87, 2), (6, 87, 3),
        (3, 89, 2), (4, 89, 2), (5, 89, 2), (6, 89, 3),
    ],
    [
        (3, 106, 2), (4, 106, 2), (5, 106, 2), (6, 106, 3), (3, 107, 2),
        (4, 107, 2), (5, 107, 2), (6, 107, 3), (3, 113, 2), (4, 113, 2),
        (5, 113, 2), (6, 113, 3), (3, 118, 2), (4, 118, 2), (5, 118, 2),
        (6, 118, 3),
    ],
    [
        (3, 119, 2), (4, 119, 2), (5, 119, 2), (6, 119, 3), (3, 120, 2),
        (4, 120, 2), (5, 120, 2), (6, 120, 3), (3, 121, 2), (4, 121, 2),
        (5, 121, 2), (6, 121, 3), (3, 122, 2), (4, 122, 2), (5, 122, 2),
        (6, 122, 3),
    ],
    [
        (1, 38, 2), (2, 38, 3), (1, 42, 2), (2, 42, 3), (1, 44, 2), (2, 44, 3),
        (1, 59, 2), (2, 59, 3), (1, 88, 2), (2, 88, 3), (1, 90, 2), (2, 90, 3),
        (77, 0, 0), (78, 0, 0), (79, 0, 0), (80, 0, 0),
    ],
    [
        (7, 58, 2), (8, 58, 2), (9, 58, 2), (10, 58, 2), (11, 58, 2),
        (12, 58, 2), (13, 58, 2), (14, 58, 3), (7, 66, 2), (8, 66, 2),
        (9, 66, 2), (10, 66, 2), (11, 66, 2), (12, 66, 2), (13, 66, 2),
        (14, 66, 3),
    ],
    [
        (7, 67, 2), (8, 67, 2), (9, 67, 2), (10, 67, 2), (11, 67, 2),
        (12, 67, 2), (13, 67, 2), (14, 67, 3), (7, 68, 2), (8, 68, 2),
        (9, 68, 2), (10, 68, 2), (11, 68, 2), (12, 68, 2), (13, 68, 2),
        (14, 68, 3),
    ],
    [
        (7, 69, 2), (8, 69, 2), (9, 69, 2), (10, 69, 2), (11, 69, 2),
        (12, 69, 2), (13, 69, 2), (14, 69, 3), (7, 70, 2), (8, 70, 2),
        (9, 70, 2), (10, 70, 2), (11, 70, 2), (12, 70, 2), (13, 70, 2),
        (14, 70, 3),
    ],
    [
        (7, 71, 2), (8, 71, 2), (9, 71, 2), (10, 71, 2), (11, 71, 2),
        (12, 71, 2), (13, 71, 2), (14, 71, 3), (7, 72, 2), (8, 72, 2),
        (9, 72, 2), (10, 72, 2), (11, 72, 2), (12, 72, 2), (13, 72, 2),
        (14, 72, 3),
    ],
    [
        (7, 73, 2), (8, 73, 2), (9, 73, 2), (10, 73, 2), (11, 73, 2),
        (12, 73, 2), (13, 73, 2), (14, 73, 3), (7, 74, 2), (8, 74, 2),
        (9, 74, 2), (10, 74, 2), (11, 74, 2), (12, 74, 2), (13, 74, 2),
        (14, 74, 3),
    ],
    [
        (7, 75, 2), (8, 75, 2), (9, 75, 2), (10, 75, 2), (11, 75, 2),
        (12, 75, 2), (13, 75, 2), (14, 75, 3), (7, 76, 2), (8, 76, 2),
        (9, 76, 2), (10, 76, 2), (11, 76, 2), (12, 76, 2), (13, 76, 2),
        (14, 76, 3),
    ],
    [
        (7, 77, 2), (8, 77, 2), (9, 77, 2), (10, 77, 2), (11, 77, 2),
        (12, 77, 2), (13, 77, 2), (14, 77, 3), (7, 78, 2), (8, 78, 2),
        (9, 78, 2), (10, 78, 2), (11, 78, 2), (12, 78, 2), (13, 78, 2),
        (14, 78, 3),
    ],
    [
        (7, 79, 2), (8, 79, 2), (9, 79, 2), (10, 79, 2), (11, 79, 2),
        (12, 79, 2), (13, 79, 2), (14, 79, 3), (7, 80, 2), (8, 80, 2),
        (9, 80, 2), (10, 80, 2), (11, 80, 2), (12, 80, 2), (13, 80, 2),
        (14, 80, 3),
    ],
    [
        (7, 81, 2), (8, 81, 2), (9, 81, 2), (10, 81, 2), (11, 81, 2),
        (12, 81, 2), (13, 81, 2), (14, 81, 3), (7, 82, 2), (8, 82, 2),
        (9, 82, 2), (10, 82, 2), (11, 82, 2), (12, 82, 2), (13, 82, 2),
        (14, 82, 3),
    ],
    [
        (7, 83, 2), (8, 83, 2), (9, 83, 2), (10, 83, 2), (11, 83, 2),
        (12, 83, 2), (13, 83, 2), (14, 83, 3), (7, 84, 2), (8, 84, 2),
        (9, 84, 2), (10, 84, 2), (11, 84, 2), (12, 84, 2), (13, 84, 2),
        (14, 84, 3),
    ],
    [
        (7, 85, 2), (8, 85, 2), (9, 85, 2), (10, 85, 2), (11, 85, 2),
        (12, 85, 2), (13, 85, 2), (14, 85, 3), (7, 86, 2), (8, 86, 2),
        (9, 86, 2), (10, 86, 2), (11, 86, 2), (12, 86, 2), (13, 86, 2),
        (14, 86, 3),
    ],
    [
        (7, 87, 2), (8, 87, 2), (9, 87, 2), (10, 87, 2), (11, 87, 2),
        (12, 87, 2), (13, 87, 2), (14, 87, 3), (7, 89, 2), (8, 89, 2),
        (9, 89, 2), (10, 89, 2), (11, 89, 2), (12, 89, 2), (13, 89, 2),
        (14, 89, 3),
    ],
    [
        (7, 106, 2), (8, 106, 2), (9, 106, 2), (10, 106, 2), (11, 106, 2),
        (12, 106, 2), (13, 106, 2), (14, 106, 3), (7, 107, 2), (8, 107, 2),
        (9, 107, 2), (10, 107, 2), (11, 107, 2), (12, 107, 2), (13, 107, 2),
        (14, 107, 3),
    ],
    [
        (7, 113, 2), (8, 113, 2), (9, 113, 2), (10, 113, 2), (11, 113, 2),
        (12, 113, 2), (13, 113, 2), (14, 113, 3), (7, 118, 2), (8, 118, 2),
        (9, 118, 2), (10, 118, 2), (11, 118, 2), (12, 118, 2), (13, 118, 2),
        (14, 118, 3),
    ],
    [
        (7, 119, 2), (8, 119, 2), (9, 119, 2), (10, 119, 2), (11, 119, 2),
        (12, 119, 2), (13, 119, 2), (14, 119, 3), (7, 120, 2), (8, 120, 2),
        (9, 120, 2), (10, 120, 2), (11, 120, 2), (12, 120, 2), (13, 120, 2),
        (14, 120, 3),
    ],
    [
        (7, 121, 2), (8, 121, 2), (9, 121, 2), (10, 121, 2), (11, 121, 2),
        (12, 121, 2), (13, 121, 2), (14, 121, 3), (7, 122, 2), (8, 122, 2),
        (9, 122, 2), (10, 122, 2), (11, 122, 2), (12, 122, 2), (13, 122, 2),
        (14, 122, 3),
    ],
    [
        (3, 38, 2), (4, 38, 2), (5, 38, 2), (6, 38, 3), (3, 42, 2), (4, 42, 2),
        (5, 42, 2), (6, 42, 3), (3, 44, 2), (4, 44, 2), (5, 44, 2), (6, 44, 3),
        (3, 59, 2), (4, 59, 2), (5, 59, 2), (6, 59, 3),
    ],
    [
        (3, 88, 2), (4, 88, 2), (5, 88, 2), (6, 88, 3), (3, 90, 2), (4, 90, 2),
        (5, 90, 2), (6, 90, 3), (0, 33, 2), (0, 34, 2), (0, 40, 2), (0, 41, 2),
        (0, 63, 2), (81, 0, 0), (82, 0, 0), (83, 0, 0),
    ],
    [
        (7, 38, 2), (8, 38, 2), (9, 38, 2), (10, 38, 2), (11, 38, 2),
        (12, 38, 2), (13, 38, 2), (14, 38, 3), (7, 42, 2), (8, 42, 2),
        (9, 42, 2), (10, 42, 2), (11, 42, 2), (12, 42, 2), (13, 42, 2),
        (14, 42, 3),
    ],
    [
        (7, 44, 2), (8, 44, 2), (9, 44, 2), (10, 44, 2), (11, 44, 2),
        (12, 44, 2), (13, 44, 2), (14, 44, 3), (7, 59, 2), (8, 59, 2),
        (9, 59, 2), (10, 59, 2), (11, 59, 2), (12, 59, 2), (13, 59, 2),
        (14, 59, 3),
    ],
    [
        (7, 88, 2), (8, 88, 2), (9, 88, 2), (10, 88, 2), (11, 88, 2),
        (12, 88, 2), (13, 88, 2), (14, 88, 3), (7, 90, 2), (8, 90, 2),
        (9, 90, 2), (10, 90, 2), (11, 90, 2), (12, 90, 2), (13, 90, 2),
        (14, 90, 3),
    ],
    [
        (1, 33, 2), (2, 33, 3), (1, 34, 2), (2, 34, 3), (1, 40, 2), (2, 40, 3),
        (1, 41, 2), (2, 41, 3), (1, 63, 2), (2, 63, 3), (0, 39, 2), (0, 43, 2),
        (0, 124, 2), (84, 0, 0), (85, 0, 0), (86, 0, 0),
    ],
    [
        (3, 33, 2), (4, 33, 2), (5, 33, 2), (6, 33, 3), (3, 34, 2), (4, 34, 2),
        (5, 34, 2), (6, 34, 3), (3, 40, 2), (4, 40, 2), (5, 40, 2), (6, 40, 3),
        (3, 41, 2), (4, 41, 2), (5, 41, 2), (6, 41, 3),
    ],
    [
        (3, 63, 2), (4, 63, 2), (5, 63, 2), (6, 63, 3), (1, 39, 2), (2, 39, 3),
        (1, 43, 2), (2, 43, 3), (1, 124, 2), (2, 124, 3), (0, 35, 2),
        (0, 62, 2), (87, 0, 0), (88, 0, 0), (89, 0, 0), (90, 0, 0),
    ],
    [
        (7, 33, 2), (8, 33, 2), (9, 33, 2), (10, 33, 2), (11, 33, 2),
        (12, 33, 2), (13, 33, 2), (14, 33, 3), (7, 34, 2), (8, 34, 2),
        (9, 34, 2), (10, 34, 2), (11, 34, 2), (12, 34, 2), (13, 34, 2),
        (14, 34, 3),
    ],
    [
        (7, 40, 2), (8, 40, 2), (9, 40, 2), (10, 40, 2), (11, 40, 2),
        (12, 40, 2), (13, 40, 2), (14, 40, 3), (7, 41, 2), (8, 41, 2),
        (9, 41, 2), (10, 41, 2), (11, 41, 2), (12, 41, 2), (13, 41, 2),
        (14, 41, 3),
    ],
    [
        (7, 63, 2), (8, 63, 2), (9, 63, 2), (10, 63, 2), (11, 63, 2),
        (12, 63, 2), (13, 63, 2), (14, 63, 3), (3, 39, 2), (4, 39, 2),
        (5, 39, 2), (6, 39, 3), (3, 43, 2), (4, 43, 2), (5, 43, 2), (6, 43, 3),
    ],
    [
        (3, 124, 2), (4, 124, 2), (5, 124, 2), (6, 124, 3), (1, 35, 2),
        (2, 35, 3), (1, 62, 2), (2, 62, 3), (0, 0, 2), (0, 36, 2), (0, 64, 2),
        (0, 91, 2), (0, 93, 2), (0, 126, 2), (91, 0, 0), (92, 0, 0),
    ],
    [
        (7, 39, 2), (8, 39, 2), (9, 39, 2), (10, 39, 2), (11, 39, 2),
        (12, 39, 2), (13, 39, 2), (14, 39, 3), (7, 43, 2), (8, 43, 2),
        (9, 43, 2), (10, 43, 2), (11, 43, 2), (12, 43, 2), (13, 43, 2),
        (14, 43, 3),
    ],
    [
        (7, 124, 2), (8, 124, 2), (9, 124, 2), (10, 124, 2), (11, 124, 2),
        (12, 124, 2), (13, 124, 2), (14, 124, 3), (3, 35, 2), (4, 35, 2),
        (5, 35, 2), (6, 35, 3), (3, 62, 2), (4, 62, 2), (5, 62, 2), (6, 62, 3),
    ],
    [
        (1, 0, 2), (2, 0, 3), (1, 36, 2), (2, 36, 3), (1, 64, 2), (2, 64, 3),
        (1, 91, 2), (2, 91, 3), (1, 93, 2), (2, 93, 3), (1, 126, 2),
        (2, 126, 3), (0, 94, 2), (0, 125, 2), (93, 0, 0), (94, 0, 0),
    ],
    [
        (7, 35, 2), (8, 35, 2), (9, 35, 2), (10, 35, 2), (11, 35, 2),
        (12, 35, 2), (13, 35, 2), (14, 35, 3), (7, 62, 2), (8, 62, 2),
        (9, 62, 2), (10, 62, 2), (11, 62, 2), (12, 62, 2), (13, 62, 2),
        (14, 62, 3),
    ],
    [
        (3, 0, 2), (4, 0, 2), (5, 0, 2), (6, 0, 3), (3, 36, 2), (4, 36, 2),
        (5, 36, 2), (6, 36, 3), (3, 64, 2), (4, 64, 2), (5, 64, 2), (6, 64, 3),
        (3, 91, 2), (4, 91, 2), (5, 91, 2), (6, 91, 3),
    ],
    [
        (3, 93, 2), (4, 93, 2), (5, 93, 2), (6, 93, 3), (3, 126, 2),
        (4, 126, 2), (5, 126, 2), (6, 126, 3), (1, 94, 2), (2, 94, 3),
        (1, 125, 2), (2, 125, 3), (0, 60, 2), (0, 96, 2), (0, 123, 2),
        (95, 0, 0),
    ],
    [
        (7, 0, 2), (8, 0, 2), (9, 0, 2), (10, 0, 2), (11, 0, 2), (12, 0, 2),
        (13, 0, 2), (14, 0, 3), (7, 36, 2), (8, 36, 2), (9, 36, 2),
        (10, 36, 2), (11, 36, 2), (12, 36, 2), (13, 36, 2), (14, 36, 3),
    ],
    [
        (7, 64, 2), (8, 64, 2), (9, 64, 2), (10, 64, 2), (11, 64, 2),
        (12, 64, 2), (13, 64, 2), (14, 64, 3), (7, 91, 2), (8, 91, 2),
        (9, 91, 2), (10, 91, 2), (11, 91, 2), (12, 91, 2), (13, 91, 2),
        (14, 91, 3),
    ],
    [
        (7, 93, 2), (8, 93, 2), (9, 93, 2), (10, 93, 2), (11, 93, 2),
        (12, 93, 2), (13, 93, 2), (14, 93, 3), (7, 126, 2), (8, 126, 2),
        (9, 126, 2), (10, 126, 2), (11, 126, 2), (12, 126, 2), (13, 126, 2),
        (14, 126, 3),
    ],
    [
        (3, 94, 2), (4, 94, 2), (5, 94, 2), (6, 94, 3), (3, 125, 2),
        (4, 125, 2), (5, 125, 2), (6, 125, 3), (1, 60, 2), (2, 60, 3),
        (1, 96, 2), (2, 96, 3), (1, 123, 2), (2, 123, 3), (96, 0, 0),
        (97, 0, 0),
    ],
    [
        (7, 94, 2), (8, 94, 2), (9, 94, 2), (10, 94, 2), (11, 94, 2),
        (12, 94, 2), (13, 94, 2), (14, 94, 3), (7, 125, 2), (8, 125, 2),
        (9, 125, 2), (10, 125, 2), (11, 125, 2), (12, 125, 2), (13, 125, 2),
        (14, 125, 3),
    ],
    [
        (3, 60, 2), (4, 60, 2), (5, 60, 2), (6, 60, 3), (3, 96, 2), (4, 96, 2),
        (5, 96, 2), (6, 96, 3), (3, 123, 2), (4, 123, 2), (5, 123, 2),
        (6, 123, 3), (98, 0, 0), (99, 0, 0), (100, 0, 0), (101, 0, 0),
    ],
    [
        (7, 60, 2), (8, 60, 2), (9, 60, 2), (10, 60, 2), (11, 60, 2),
        (12, 60, 2), (13, 60, 2), (14, 60, 3), (7, 96, 2), (8, 96, 2),
        (9, 96, 2), (10, 96, 2), (11, 96, 2), (12, 96, 2), (13, 96, 2),
        (14, 96, 3),
    ],
    [
        (7, 123, 2), (8, 123, 2), (9, 123, 2), (10, 123, 2), (11, 123, 2),
        (12, 123, 2), (13, 123, 2), (14, 123, 3), (102, 0, 0), (103, 0, 0),
        (104, 0, 0), (105, 0, 0), (106, 0, 0), (107, 0, 0), (108, 0, 0),
        (109, 0, 0),
    ],
    [
        (0, 92, 2), (0, 195, 2), (0, 208, 2), (110, 0, 0), (111, 0, 0),
        (112, 0, 0), (113, 0, 0), (114, 0, 0), (115, 0, 0), (116, 0, 0),
        (117, 0, 0), (118, 0, 0), (119, 0, 0), (120, 0, 0), (121, 0, 0),
        (122, 0, 0),
    ],
    [
        (1, 92, 2), (2, 92, 3), (1, 195, 2), (2, 195, 3), (1, 208, 2),
        (2, 208, 3), (0, 128, 2), (0, 130, 2), (0, 131, 2), (0, 162, 2),
        (0, 184, 2), (0, 194, 2), (0, 224, 2), (0, 226, 2), (123, 0, 0),
        (124, 0, 0),
    ],
    [
        (125, 0, 0), (126, 0, 0), (127, 0, 0), (128, 0, 0), (129, 0, 0),
        (130, 0, 0), (131, 0, 0), (132, 0, 0), (133, 0, 0), (134, 0, 0),
        (135, 0, 0), (136, 0, 0), (137, 0, 0), (138, 0, 0), (139, 0, 0),
        (140, 0, 0),
    ],
    [
        (3, 92, 2), (4, 92, 2), (5, 92, 2), (6, 92, 3), (3, 195, 2),
        (4, 195, 2), (5, 195, 2), (6, 195, 3), (3, 208, 2), (4, 208, 2),
        (5, 208, 2), (6, 208, 3), (1, 128, 2), (2, 128, 3), (1, 130, 2),
        (2, 130, 3),
    ],
    [
        (1, 131, 2), (2, 131, 3), (1, 162, 2), (2, 162, 3), (1, 184, 2),
        (2, 184, 3), (1, 194, 2), (2, 194, 3), (1, 224, 2), (2, 224, 3),
        (1, 226, 2), (2, 226, 3), (0, 153, 2), (0, 161, 2), (0, 167, 2),
        (0, 172, 2),
    ],
    [
        (0, 176, 2), (0, 177, 2), (0, 179, 2), (0, 209, 2), (0, 216, 2),
        (0, 217, 2), (0, 227, 2), (0, 229, 2), (0, 230, 2), (141, 0, 0),
        (142, 0, 0), (143, 0, 0), (144, 0, 0), (145, 0, 0), (146, 0, 0),
        (147, 0, 0),
    ],
    [
        (148, 0, 0), (149, 0, 0), (150, 0, 0), (151, 0, 0), (152, 0, 0),
        (153, 0, 0), (154, 0, 0), (155, 0, 0), (156, 0, 0), (157, 0, 0),
        (158, 0, 0), (159, 0, 0), (160, 0, 0), (161, 0, 0), (162, 0, 0),
        (163, 0, 0),
    ],
    [
        (7, 92, 2), (8, 92, 2), (9, 92, 2), (10, 92, 2), (11, 92, 2),
        (12, 92, 2), (13, 92, 2), (14, 92, 3), (7, 195, 2), (8, 195, 2),
        (9, 195, 2), (10, 195, 2), (11, 195, 2), (12, 195, 2), (13, 195, 2),
        (14, 195, 3),
    ],
    [
        (7, 208, 2), (8, 208, 2), (9, 208, 2), (10, 208, 2), (11, 208, 2),
        (12, 208, 2), (13, 208, 2), (14, 208, 3), (3, 128, 2), (4, 128, 2),
        (5, 128, 2), (6, 128, 3), (3, 130, 2), (4, 130, 2), (5, 130, 2),
        (6, 130, 3),
    ],
    [
        (3, 131, 2), (4, 131, 2), (5, 131, 2), (6, 131, 3), (3, 162, 2),
        (4, 162, 2), (5, 162, 2), (6, 162, 3), (3, 184, 2), (4, 184, 2),
        (5, 184, 2), (6, 184, 3), (3, 194, 2), (4, 194, 2), (5, 194, 2),
        (6, 194, 3),
    ],
    [
        (3, 224, 2), (4, 224, 2), (5, 224, 2), (6, 224, 3), (3, 226, 2),
        (4, 226, 2), (5, 226, 2), (6, 226, 3), (1, 153, 2), (2, 153, 3),
        (1, 161, 2), (2, 161, 3), (1, 167, 2), (2, 167, 3), (1, 172, 2),
        (2, 172, 3),
    ],
    [
        (1, 176, 2), (2, 176, 3), (1, 177, 2), (2, 177, 3), (1, 179, 2),
        (2, 179, 3), (1, 209, 2), (2, 209, 3), (1, 216, 2), (2, 216, 3),
        (1, 217, 2), (2, 217, 3), (1, 227, 2), (2, 227, 3), (1, 229, 2),
        (2, 229, 3),
    ],
    [
        (1, 230, 2), (2, 230, 3), (0, 129, 2), (0, 132, 2), (0, 133, 2),
        (0, 134, 2), (0, 136, 2), (0, 146, 2), (0, 154, 2), (0, 156, 2),
        (0, 160, 2), (0, 163, 2), (0, 164, 2), (0, 169, 2), (0, 170, 2),
        (0, 173, 2),
    ],
    [
        (0, 178, 2), (0, 181, 2), (0, 185, 2), (0, 186, 2), (0, 187, 2),
        (0, 189, 2), (0, 190, 2), (0, 196, 2), (0, 198, 2), (0, 228, 2),
        (0, 232, 2), (0, 233, 2), (164, 0, 0), (165, 0, 0), (166, 0, 0),
        (167, 0, 0),
    ],
    [
        (168, 0, 0), (169, 0, 0), (170, 0, 0), (171, 0, 0), (172, 0, 0),
        (173, 0, 0), (174, 0, 0), (175, 0, 0), (176, 0, 0), (177, 0, 0),
        (178, 0, 0), (179, 0, 0), (180, 0, 0), (181, 0, 0), (182, 0, 0),
        (183, 0, 0),
    ],
    [
        (7, 128, 2), (8, 128, 2), (9, 128, 2), (10, 128, 2), (11, 128, 2),
        (12, 128, 2), (13, 128, 2), (14, 128, 3), (7, 130, 2), (8, 130, 2),
        (9, 130, 2), (10, 130, 2), (11, 130, 2), (12, 130, 2), (13, 130, 2),
        (14, 130, 3),
    ],
    [
        (7, 131, 2), (8, 131, 2), (9, 131, 2), (10, 131, 2), (11, 131, 2),
        (12, 131, 2), (13, 131, 2), (14, 131, 3), (7, 162, 2), (8, 162, 2),
        (9, 162, 2), (10, 162, 2), (11, 162, 2), (12, 162, 2), (13, 162, 2),
        (14, 162, 3),
    ],
    [
        (7, 184, 2), (8, 184, 2), (9, 184, 2), (10, 184, 2), (11, 184, 2),
        (12, 184, 2), (13, 184, 2), (14, 184, 3), (7, 194, 2), (8, 194, 2),
        (9, 194, 2), (10, 194, 2), (11, 194, 2), (12, 194, 2), (13, 194, 2),
        (14, 194, 3),
    ],
    [
        (7, 224, 2), (8, 224, 2), (9, 224, 2), (10, 224, 2), (11, 224, 2),
        (12, 224, 2), (13, 224, 2), (14, 224, 3), (7, 226, 2), (8, 226, 2),
        (9, 226, 2), (10, 226, 2), (11, 226, 2), (12, 226, 2), (13, 226, 2),
        (14, 226, 3),
    ],
    [
        (3, 153, 2), (4, 153, 2), (5, 153, 2), (6, 153, 3), (3, 161, 2),
        (4, 161, 2), (5, 161, 2), (6, 161, 3), (3, 167, 2), (4, 167, 2),
        (5, 167, 2), (6, 167, 3), (3, 172, 2), (4, 172, 2), (5, 172, 2),
        (6, 172, 3),
    ],
    [
        (3, 176, 2), (4, 176, 2), (5, 176, 2), (6, 176, 3), (3, 177, 2),
        (4, 177, 2), (5, 177, 2), (6, 177, 3), (3, 179, 2), (4, 179, 2),
        (5, 179, 2), (6, 179, 3), (3, 209, 2), (4, 209, 2), (5, 209, 2),
        (6, 209, 3),
    ],
    [
        (3, 216, 2), (4, 216, 2), (5, 216, 2), (6, 216, 3), (3, 217, 2),
        (4, 217, 2), (5, 217, 2), (6, 217, 3), (3, 227, 2), (4, 227, 2),
        (5, 227, 2), (6, 227, 3), (3, 229, 2), (4, 229, 2), (5, 229, 2),
        (6, 229, 3),
    ],
    [
        (3, 230, 2), (4, 230, 2), (5, 230, 2), (6, 230, 3), (1, 129, 2),
        (2, 129, 3), (1, 132, 2), (2, 132, 3), (1, 133, 2), (2, 133, 3),
        (1, 134, 2), (2, 134, 3), (1, 136, 2), (2, 136, 3), (1, 146, 2),
        (2, 146, 3),
    ],
    [
        (1, 154, 2), (2, 154, 3), (1, 156, 2), (2, 156, 3), (1, 160, 2),
        (2, 160, 3), (1, 163, 2), (2, 163, 3), (1, 164, 2), (2, 164, 3),
        (1, 169, 2), (2, 169, 3), (1, 170, 2), (2, 170, 3), (1, 173, 2),
        (2, 173, 3),
    ],
    [
        (1, 178, 2), (2, 178, 3), (1, 181, 2), (2, 181, 3), (1, 185, 2),
        (2, 185, 3), (1, 186, 2), (2, 186, 3), (1, 187, 2), (2, 187, 3),
        (1, 189, 2), (2, 189, 3), (1, 190, 2), (2, 190, 3), (1, 196, 2),
        (2, 196, 3),
    ],
    [
        (1, 198, 2), (2, 198, 3), (1, 228, 2), (2, 228, 3), (1, 232, 2),
        (2, 232, 3), (1, 233, 2), (2, 233, 3), (0, 1, 2), (0, 135, 2),
        (0, 137, 2), (0, 138, 2), (0, 139, 2), (0, 140, 2), (0, 141, 2),
        (0, 143, 2),
    ],
    [
        (0, 147, 2), (0, 149, 2), (0, 150, 2), (0, 151, 2), (0, 152, 2),
        (0, 155, 2), (0, 157, 2), (0, 158, 2), (0, 165, 2), (0, 166, 2),
        (0, 168, 2), (0, 174, 2), (0, 175, 2), (0, 180, 2), (0, 182, 2),
        (0, 183, 2),
    ],
    [
        (0, 188, 2), (0, 191, 2), (0, 197, 2), (0, 231, 2), (0, 239, 2),
        (184, 0, 0), (185, 0, 0), (186, 0, 0), (187, 0, 0), (188, 0, 0),
        (189, 0, 0), (190, 0, 0), (191, 0, 0), (192, 0, 0), (193, 0, 0),
        (194, 0, 0),
    ],
    [
        (7, 153, 2), (8, 153, 2), (9, 153, 2), (10, 153, 2), (11, 153, 2),
        (12, 153, 2), (13, 153, 2), (14, 153, 3), (7, 161, 2), (8, 161, 2),
        (9, 161, 2), (10, 161, 2), (11, 161, 2), (12, 161, 2), (13, 161, 2),
        (14, 161, 3),
    ],
    [
        (7, 167, 2), (8, 167, 2), (9, 167, 2), (10, 167, 2), (11, 167, 2),
        (12, 167, 2), (13, 167, 2), (14, 167, 3), (7, 172, 2), (8, 172, 2),
        (9, 172, 2), (10, 172, 2), (11, 172, 2), (12, 172, 2), (13, 172, 2),
        (14, 172, 3),
    ],
    [
        (7, 176, 2), (8, 176, 2), (9, 176, 2), (10, 176, 2), (11, 176, 2),
        (12, 176, 2), (13, 176, 2), (14, 176, 3), (7, 177, 2), (8, 177, 2),
        (9, 177, 2), (10, 177, 2), (11, 177, 2), (12, 177, 2), (13, 177, 2),
        (14, 177, 3),
    ],
    [
        (7, 179, 2), (8, 179, 2), (9, 179, 2), (10, 179, 2), (11, 179, 2),
        (12, 179, 2), (13, 179, 2), (14, 179, 3), (7, 209, 2), (8, 209, 2),
        (9, 209, 2), (10, 209, 2), (11, 209, 2), (12, 209, 2), (13, 209, 2),
        (14, 209, 3),
    ],
    [
        (7, 216, 2), (8, 216, 2), (9, 216, 2), (10, 216, 2), (11, 216, 2),
        (12, 216, 2), (13, 216, 2), (14, 216, 3), (7, 217, 2), (8, 217, 2),
        (9, 217, 2), (10, 217, 2), (11, 217, 2), (12, 217, 2), (13, 217, 2),
        (14, 217, 3),
    ],
    [
        (7, 227, 2), (8, 227, 2), (9, 227, 2), (10, 227, 2), (11, 227, 2),
        (12, 227, 2), (13, 227, 2), (14, 227, 3), (7, 229, 2), (8, 229, 2),
        (9, 229, 2), (10, 229, 2), (11, 229, 2), (12, 229, 2), (13, 229, 2),
        (14, 229, 3),
    ],
    [
        (7, 230, 2), (8, 230, 2), (9, 230, 2), (10, 230, 2), (11, 230, 2),
        (12, 230, 2), (13, 230, 2), (14, 230, 3), (3, 129, 2), (4, 129, 2),
        (5, 129, 2), (6, 129, 3), (3, 132, 2), (4, 132, 2), (5, 132, 2),
        (6, 132, 3),
    ],
    [
        (3, 133, 2), (4, 133, 2), (5, 133, 2), (6, 133, 3), (3, 134, 2),
        (4, 134, 2), (5, 134, 2), (6, 134, 3), (3, 136, 2), (4, 136, 2),
        (5, 136, 2), (6, 136, 3), (3, 146, 2), (4, 146, 2), (5, 146, 2),
        (6, 146, 3),
    ],
    [
        (3, 154, 2), (4, 154, 2), (5, 154, 2), (6, 154, 3), (3, 156, 2),
        (4, 156, 2), (5, 156, 2), (6, 156, 3), (3, 160, 2), (4, 160, 2),
        (5, 160, 2), (6, 160, 3), (3, 163, 2), (4, 163, 2), (5, 163, 2),
        (6, 163, 3),
    ],
    [
        (3, 164, 2), (4, 164, 2), (5, 164, 2), (6, 164, 3), (3, 169, 2),
        (4, 169, 2), (5, 169, 2), (6, 169, 3), (3, 170, 2), (4, 170, 2),
        (5, 170, 2), (6, 170, 3), (3, 173, 2), (4, 173, 2), (5, 173, 2),
        (6, 173, 3),
    ],
    [
        (3, 178, 2), (4, 178, 2), (5, 178, 2), (6, 178, 3), (3, 181, 2),
        (4, 181, 2), (5, 181, 2), (6, 181, 3), (3, 185, 2), (4, 185, 2),
        (5, 185, 2), (6, 185, 3), (3, 186, 2), (4, 186, 2), (5, 186, 2),
        (6, 186, 3),
    ],
    [
        (3, 187, 2), (4, 187, 2), (5, 187, 2), (6, 187, 3), (3, 189, 2),
        (4, 189, 2), (5, 189, 2), (6, 189, 3), (3, 190, 2), (4, 190, 2),
        (5, 190, 2), (6, 190, 3), (3, 196, 2), (4, 196, 2), (5, 196, 2),
        (6, 196, 3),
    ],
    [
        (3, 198, 2), (4, 198, 2), (5, 198, 2), (6, 198, 3), (3, 228, 2),
        (4, 228, 2), (5, 228, 2), (6, 228, 3), (3, 232, 2), (4, 232, 2),
        (5, 232, 2), (6, 232, 3), (3, 233, 2), (4, 233, 2), (5, 233, 2),
        (6, 233, 3),
    ],
    [
        (1, 1, 2), (2, 1, 3), (1, 135, 2), (2, 135, 3), (1, 137, 2),
        (2, 137, 3), (1, 138, 2), (2, 138, 3), (1, 139, 2), (2, 139, 3),
        (1, 140, 2), (2, 140, 3), (1, 141, 2), (2, 141, 3), (1, 143, 2),
        (2, 143, 3),
    ],
    [
        (1, 147, 2), (2, 147, 3), (1, 149, 2), (2, 149, 3), (1, 150, 2),
        (2, 150, 3), (1, 151, 2), (2, 151, 3), (1, 152, 2), (2, 152, 3),
        (1, 155, 2), (2, 155, 3), (1, 157, 2), (2, 157, 3), (1, 158, 2),
        (2, 158, 3),
    ],
    [
        (1, 165, 2), (2, 165, 3), (1, 166, 2), (2, 166, 3), (1, 168, 2),
        (2, 168, 3), (1, 174, 2), (2, 174, 3), (1, 175, 2), (2, 175, 3),
        (1, 180, 2), (2, 180, 3), (1, 182, 2), (2, 182, 3), (1, 183, 2),
        (2, 183, 3),
    ],
    [
        (1, 188, 2), (2, 188, 3), (1, 191, 2), (2, 191, 3), (1, 197, 2),
        (2, 197, 3), (1, 231, 2), (2, 231, 3), (1, 239, 2), (2, 239, 3),
        (0, 9, 2), (0, 142, 2), (0, 144, 2), (0, 145, 2), (0, 148, 2),
        (0, 159, 2),
    ],
    [
        (0, 171, 2), (0, 206, 2), (0, 215, 2), (0, 225, 2), (0, 236, 2),
        (0, 237, 2), (195, 0, 0), (196, 0, 0), (197, 0, 0), (198, 0, 0),
        (199, 0, 0), (200, 0, 0), (201, 0, 0), (202, 0, 0), (203, 0, 0),
        (204, 0, 0),
    ],
    [
        (7, 129, 2), (8, 129, 2), (9, 129, 2), (10, 129, 2), (11, 129, 2),
        (12, 129, 2), (13, 129, 2), (14, 129, 3), (7, 132, 2), (8, 132, 2),
        (9, 132, 2), (10, 132, 2), (11, 132, 2), (12, 132, 2), (13, 132, 2),
        (14, 132, 3),
    ],
    [
        (7, 133, 2), (8, 133, 2), (9, 133, 2), (10, 133, 2), (11, 133, 2),
        (12, 133, 2), (13, 133, 2), (14, 133, 3), (7, 134, 2), (8, 134, 2),
        (9, 134, 2), (10, 134, 2), (11, 134, 2), (12, 134, 2), (13, 134, 2),
        (14, 134, 3),
    ],
    [
        (7, 136, 2), (8, 136, 2), (9, 136, 2), (10, 136, 2), (11, 136, 2),
        (12, 136, 2), (13, 136, 2), (14, 136, 3), (7, 146, 2), (8, 146, 2),
        (9, 146, 2), (10, 146, 2), (11, 146, 2), (12, 146, 2), (13, 146, 2),
        (14, 146, 3),
    ],
    [
        (7, 154, 2), (8, 154, 2), (9, 154, 2), (10, 154, 2), (11, 154, 2),
        (12, 154, 2), (13, 154, 2), (14, 154, 3), (7, 156, 2), (8, 156, 2),
        (9, 156, 2), (10, 156, 2), (11, 156, 2), (12, 156, 2), (13, 156, 2),
        (14, 156, 3),
    ],
    [
        (7, 160, 2), (8, 160, 2), (9, 160, 2), (10, 160, 2), (11, 160, 2),
        (12, 160, 2), (13, 160, 2), (14, 160, 3), (7, 163, 2), (8, 163, 2),
        (9, 163, 2), (10, 163, 2), (11, 163, 2), (12, 163, 2), (13, 163, 2),
        (14, 163, 3),
    ],
    [
        (7, 164, 2), (8, 164, 2), (9, 164, 2), (10, 164, 2), (11, 164, 2),
        (12, 164, 2), (13, 164, 2), (14, 164, 3), (7, 169, 2), (8, 169, 2),
        (9, 169, 2), (10, 169, 2), (11, 169, 2), (12, 169, 2), (13, 169, 2),
        (14, 169, 3),
    ],
    [
        (7, 170, 2), (8, 170, 2), (9, 170, 2), (10, 170, 2), (11, 170, 2),
        (12, 170, 2), (13, 170, 2), (14, 170, 3), (7, 173, 2), (8, 173, 2),
        (9, 173, 2), (10, 173, 2), (11, 173, 2), (12, 173, 2), (13, 173, 2),
        (14, 173, 3),
    ],
    [
        (7, 178, 2), (8, 178, 2), (9, 178, 2), (10, 178, 2), (11, 178, 2),
        (12, 178, 2), (13, 178, 2), (14, 178, 3), (7, 181, 2), (8, 181, 2),
        (9, 181, 2), (10, 181, 2), (11, 181, 2), (12, 181, 2), (13, 181, 2),
        (14, 181, 3),
    ],
    [
        (7, 185, 2), (8, 185, 2), (9, 185, 2), (10, 185, 2), (11, 185, 2),
        (12, 185, 2), (13, 185, 2), (14, 185, 3), (7, 186, 2), (8, 186, 2),
        (9, 186, 2), (10, 186, 2), (11, 186, 2), (12, 186, 2), (13, 186, 2),
        (14, 186, 3),
    ],
    [
        (7, 187, 2), (8, 187, 2), (9, 187, 2), (10, 187, 2), (11, 187, 2),
        (12, 187, 2), (13, 187, 2), (14, 187, 3), (7, 189, 2), (8, 189, 2),
        (9, 189, 2), (10, 189, 2), (11, 189, 2), (12, 189, 2), (13, 189, 2),
        (14, 189, 3),
    ],
    [
        (7, 190, 2), (8, 190, 2), (9, 190, 2), (10, 190, 2), (11, 190, 2),
        (12, 190, 2), (13, 190, 2), (14, 190, 3), (7, 196, 2), (8, 196, 2),
        (9, 196, 2), (10, 196, 2), (11, 196, 2), (12, 196, 2), (13, 196, 2),
        (14, 196, 3),
    ],
    [
        (7, 198, 2), (8, 198, 2), (9, 198, 2), (10, 198, 2), (11, 198, 2),
        (12, 198, 2), (13, 198, 2), (14, 198, 3), (7, 228, 2), (8, 228, 2),
        (9, 228, 2), (10, 228, 2), (11, 228, 2), (12, 228, 2), (13, 228, 2),
        (14, 228, 3),
    ],
    [
        (7, 232, 2), (8, 232, 2), (9, 232, 2), (10, 232, 2), (11, 232, 2),
        (12, 232, 2), (13, 232, 2), (14, 232, 3), (7, 233, 2), (8, 233, 2),
        (9, 233, 2), (10, 233, 2), (11, 233, 2), (12, 233, 2), (13, 233, 2),
        (14, 233, 3),
    ],
    [
        (3, 1, 2), (4, 1, 2), (5, 1, 2), (6, 1, 3), (3, 135, 2), (4, 135, 2),
        (5, 135, 2), (6, 135, 3), (3, 137, 2), (4, 137, 2), (5, 137, 2),
        (6, 137, 3), (3, 138, 2), (4, 138, 2), (5, 138, 2), (6, 138, 3),
    ],
    [
        (3, 139, 2), (4, 139, 2), (5, 139, 2), (6, 139, 3), (3, 140, 2),
        (4, 140, 2), (5, 140, 2), (6, 140, 3), (3, 141, 2), (4, 141, 2),
        (5, 141, 2), (6, 141, 3), (3, 143, 2), (4, 143, 2), (5, 143, 2),
        (6, 143, 3),
    ],
    [
        (3, 147, 2), (4, 147, 2), (5, 147, 2), (6, 147, 3), (3, 149, 2),
        (4, 149, 2), (5, 149, 2), (6, 149, 3), (3, 150, 2), (4, 150, 2),
        (5, 150, 2), (6, 150, 3), (3, 151, 2), (4, 151, 2), (5, 151, 2),
        (6, 151, 3),
    ],
    [
        (3, 152, 2), (4, 152, 2), (5, 152, 2), (6, 152, 3), (3, 155, 2),
        (4, 155, 2), (5, 155, 2), (6, 155, 3), (3, 157, 2), (4, 157, 2),
        (5, 157, 2), (6, 157, 3), (3, 158, 2), (4, 158, 2), (5, 158, 2),
        (6, 158, 3),
    ],
    [
        (3, 165, 2), (4, 165, 2), (5, 165, 2), (6, 165, 3), (3, 166, 2),
        (4, 166, 2), (5, 166, 2), (6, 166, 3), (3, 168, 2), (4, 168, 2),
        (5, 168, 2), (6, 168, 3), (3, 174, 2), (4, 174, 2), (5, 174, 2),
        (6, 174, 3),
    ],
    [
        (3, 175, 2), (4, 175, 2), (5, 175, 2), (6, 175, 3), (3, 180, 2),
        (4, 180, 2), (5, 180, 2), (6, 180, 3), (3, 182, 2), (4, 182, 2),
        (5, 182, 2), (6, 182, 3), (3, 183, 2), (4, 183, 2), (5, 183, 2),
        (6, 183, 3),
    ],
    [
        (3, 188, 2), (4, 188, 2), (5, 188, 2), (6, 188, 3), (3, 191, 2),
        (4, 191, 2), (5, 191, 2), (6, 191, 3), (3, 197, 2), (4, 197, 2),
        (5, 197, 2), (6, 197, 3), (3, 231, 2), (4, 231, 2), (5, 231, 2),
        (6, 231, 3),
    ],
    [
        (3, 239, 2), (4, 239, 2), (5, 239, 2), (6, 239, 3), (1, 9, 2),
        (2, 9, 3), (1, 142, 2), (2, 142, 3), (1, 144, 2), (2, 144, 3),
        (1, 145, 2), (2, 145, 3), (1, 148, 2), (2, 148, 3), (1, 159, 2),
        (2, 159, 3),
    ],
    [
        (1, 171, 2), (2, 171, 3), (1, 206, 2), (2, 206, 3), (1, 215, 2),
        (2, 215, 3), (1, 225, 2), (2, 225, 3), (1, 236, 2), (2, 236, 3),
        (1, 237, 2), (2, 237, 3), (0, 199, 2), (0, 207, 2), (0, 234, 2),
        (0, 235, 2),
    ],
    [
        (205, 0, 0), (206, 0, 0), (207, 0, 0), (208, 0, 0), (209, 0, 0),
        (210, 0, 0), (211, 0, 0), (212, 0, 0), (213, 0, 0), (214, 0, 0),
        (215, 0, 0), (216, 0, 0), (217, 0, 0), (218, 0, 0), (219, 0, 0),
        (220, 0, 0),
    ],
    [
        (7, 1, 2), (8, 1, 2), (9, 1, 2), (10, 1, 2), (11, 1, 2), (12, 1, 2),
        (13, 1, 2), (14, 1, 3), (7, 135, 2), (8, 135, 2), (9, 135, 2),
        (10, 135, 2), (11, 135, 2), (12, 135, 2), (13, 135, 2), (14, 135, 3),
    ],
    [
        (7, 137, 2), (8, 137, 2), (9, 137, 2), (10, 137, 2), (11, 137, 2),
        (12, 137, 2), (13, 137, 2), (14, 137, 3), (7, 138, 2), (8, 138, 2),
        (9, 138, 2), (10, 138, 2), (11, 138, 2), (12, 138, 2), (13, 138, 2),
        (14, 138, 3),
    ],
    [
        (7, 139, 2), (8, 139, 2), (9, 139, 2), (10, 139, 2), (11, 139, 2),
        (12, 139, 2), (13, 139, 2), (14, 139, 3), (7, 140, 2), (8, 140, 2),
        (9, 140, 2), (10, 140, 2), (11, 140, 2), (12, 140, 2), (13, 140, 2),
        (14, 140, 3),
    ],
    [
        (7, 141, 2), (8, 141, 2), (9, 141, 2), (10, 141, 2), (11, 141, 2),
        (12, 141, 2), (13, 141, 2), (14, 141, 3), (7, 143, 2), (8, 143, 2),
        (9, 143, 2), (10, 143, 2), (11, 143, 2), (12, 143, 2), (13, 143, 2),
        (14, 143, 3),
    ],
    [
        (7, 147, 2), (8, 147, 2), (9, 147, 2), (10, 147, 2), (11, 147, 2),
        (12, 147, 2), (13, 147, 2), (14, 147, 3), (7, 149, 2), (8, 149, 2),
        (9, 149, 2), (10, 149, 2), (11, 149, 2), (12, 149, 2), (13, 149, 2),
        (14, 149, 3),
    ],
    [
        (7, 150, 2), (8, 150, 2), (9, 150, 2), (10, 150, 2), (11, 150, 2),
        (12, 150, 2), (13, 150, 2), (14, 150, 3), (7, 151, 2), (8, 151, 2),
        (9, 151, 2), (10, 151, 2), (11, 151, 2), (12, 151, 2), (13, 151, 2),
        (14, 151, 3),
    ],
    [
        (7, 152, 2), (8, 152, 2), (9, 152, 2), (10, 152, 2), (11, 152, 2),
        (12, 152, 2), (13, 152, 2), (14, 152, 3), (7, 155, 2), (8, 155, 2),
        (9, 155, 2), (10, 155, 2), (11, 155, 2), (12, 155, 2), (13, 155, 2),
        (14, 155, 3),
    ],
    [
        (7, 157, 2), (8, 157, 2), (9, 157, 2), (10, 157, 2), (11, 157, 2),
        (12, 157, 2), (13, 157, 2), (14, 157, 3), (7, 158, 2), (8, 158, 2),
        (9, 158, 2), (10, 158, 2), (11, 158, 2), (12, 158, 2), (13, 158, 2),
        (14, 158, 3),
    ],
    [
        (7, 165, 2), (8, 165, 2), (9, 165, 2), (10, 165, 2), (11, 165, 2),
        (12, 165, 2), (13, 165, 2), (14, 165, 3), (7, 166, 2), (8, 166, 2),
        (9, 166, 2), (10, 166, 2), (11, 166, 2), (12, 166, 2), (13, 166, 2),
        (14, 166, 3),
    ],
    [
        (7, 168, 2), (8, 168, 2), (9, 168, 2), (10, 168, 2), (11, 168, 2),
        (12, 168, 2), (13, 168, 2), (14, 168, 3), (7, 174, 2), (8, 174, 2),
        (9, 174, 2), (10, 174, 2), (11, 174, 2), (12, 174, 2), (13, 174, 2),
        (14, 174, 3),
    ],
    [
        (7, 175, 2), (8, 175, 2), (9, 175, 2), (10, 175, 2), (11, 175, 2),
        (12, 175, 2), (13, 175, 2), (14, 175, 3), (7, 180, 2), (8, 180, 2),
        (9, 180, 2), (10, 180, 2), (11, 180, 2), (12, 180, 2), (13, 180, 2),
        (14, 180, 3),
    ],
    [
        (7, 182, 2), (8, 182, 2), (9, 182, 2), (10, 182, 2), (11, 182, 2),
        (12, 182, 2), (13, 182, 2), (14, 182, 3), (7, 183, 2), (8, 183, 2),
        (9, 183, 2), (10, 183, 2), (11, 183, 2), (12, 183, 2), (13, 183, 2),
        (14, 183, 3),
    ],
    [
        (7, 188, 2), (8, 188, 2), (9, 188, 2), (10, 188, 2), (11, 188, 2),
        (12, 188, 2), (13, 188, 2), (14, 188, 3), (7, 191, 2), (8, 191, 2),
        (9, 191, 2), (10, 191, 2), (11, 191, 2), (12, 191, 2), (13, 191, 2),
        (14, 191, 3),
    ],
    [
        (7, 197, 2), (8, 197, 2), (9, 197, 2), (10, 197, 2), (11, 197, 2),
        (12, 197, 2), (13, 197, 2), (14, 197, 3), (7, 231, 2), (8, 231, 2),
        (9, 231, 2), (10, 231, 2), (11, 231, 2), (12, 231, 2), (13, 231, 2),
        (14, 231, 3),
    ],
    [
        (7, 239, 2), (8, 239, 2), (9, 239, 2), (10, 239, 2), (11, 239, 2),
        (12, 239, 2), (13, 239, 2), (14, 239, 3), (3, 9, 2), (4, 9, 2),
        (5, 9, 2), (6, 9, 3), (3, 142, 2), (4, 142, 2), (5, 142, 2),
        (6, 142, 3),
    ],
    [
        (3, 144, 2), (4, 144, 2), (5, 144, 2), (6, 144, 3), (3, 145, 2),
        (4, 145, 2), (5, 145, 2), (6, 145, 3), (3, 148, 2), (4, 148, 2),
        (5, 148, 2), (6, 148, 3), (3, 159, 2), (4, 159, 2), (5, 159, 2),
        (6, 159, 3),
    ],
    [
        (3, 171, 2), (4, 171, 2), (5, 171, 2), (6, 171, 3), (3, 206, 2),
        (4, 206, 2), (5, 206, 2), (6, 206, 3), (3, 215, 2), (4, 215, 2),
        (5, 215, 2), (6, 215, 3), (3, 225, 2), (4, 225, 2), (5, 225, 2),
        (6, 225, 3),
    ],
    [
        (3, 236, 2), (4, 236, 2), (5, 236, 2), (6, 236, 3), (3, 237, 2),
        (4, 237, 2), (5, 237, 2), (6, 237, 3), (1, 199, 2), (2, 199, 3),
        (1, 207, 2), (2, 207, 3), (1, 234, 2), (2, 234, 3), (1, 235, 2),
        (2, 235, 3),
    ],
    [
        (0, 192, 2), (0, 193, 2), (0, 200, 2), (0, 201, 2), (0, 202, 2),
        (0, 205, 2), (0, 210, 2), (0, 213, 2), (0, 218, 2), (0, 219, 2),
        (0, 238, 2), (0, 240, 2), (0, 242, 2), (0, 243, 2), (0, 255, 2),
        (221, 0, 0),
    ],
    [
        (222, 0, 0), (223, 0, 0), (224, 0, 0), (225, 0, 0), (226, 0, 0),
        (227, 0, 0), (228, 0, 0), (229, 0, 0), (230, 0, 0), (231, 0, 0),
        (232, 0, 0), (233, 0, 0), (234, 0, 0), (235, 0, 0), (236, 0, 0),
        (237, 0, 0),
    ],
    [
        (7, 9, 2), (8, 9, 2), (9, 9, 2), (10, 9, 2), (11, 9, 2), (12, 9, 2),
        (13, 9, 2), (14, 9, 3), (7, 142, 2), (8, 142, 2), (9, 142, 2),
        (10, 142, 2), (11, 142, 2), (12, 142, 2), (13, 142, 2), (14, 142, 3),
    ],
    [
        (7, 144, 2), (8, 144, 2), (9, 144, 2), (10, 144, 2), (11, 144, 2),
        (12, 144, 2), (13, 144, 2), (14, 144, 3), (7, 145, 2), (8, 145, 2),
        (9, 145, 2), (10, 145, 2), (11, 145, 2), (12, 145, 2), (13, 145, 2),
        (14, 145, 3),
    ],
    [
        (7, 148, 2), (8, 148, 2), (9, 148, 2), (10, 148, 2), (11, 148, 2),
        (12, 148, 2), (13, 148, 2), (14, 148, 3), (7, 159, 2), (8, 159, 2),
        (9, 159, 2), (10, 159, 2), (11, 159, 2), (12, 159, 2), (13, 159, 2),
        (14, 159, 3),
    ],
    [
        (7, 171, 2), (8, 171, 2), (9, 171, 2), (10, 171, 2), (11, 171, 2),
        (12, 171, 2), (13, 171, 2), (14, 171, 3), (7, 206, 2), (8, 206, 2),
        (9, 206, 2), (10, 206, 2), (11, 206, 2), (12, 206, 2), (13, 206, 2),
        (14, 206, 3),
    ],
    [
        (7, 215, 2), (8, 215, 2), (9, 215, 2), (10, 215, 2), (11, 215, 2),
        (12, 215, 2), (13, 215, 2), (14, 215, 3), (7, 225, 2), (8, 225, 2),
        (9, 225, 2), (10, 225, 2), (11, 225, 2), (12, 225, 2), (13, 225, 2),
        (14, 225, 3),
    ],
    [
        (7, 236, 2), (8, 236, 2), (9, 236, 2), (10, 236, 2), (11, 236, 2),
        (12, 236, 2), (13, 236, 2), (14, 236, 3), (7, 237, 2), (8, 237, 2),
        (9, 237, 2), (10, 237, 2), (11, 237, 2), (12, 237, 2), (13, 237, 2),
        (14, 237, 3),
    ],
    [
        (3, 199, 2), (4, 199, 2), (5, 199, 2), (6, 199, 3), (3, 207, 2),
        (4, 207, 2), (5, 207, 2), (6, 207, 3), (3, 234, 2), (4, 234, 2),
        (5, 234, 2), (6, 234, 3), (3, 235, 2), (4, 235, 2), (5, 235, 2),
        (6, 235, 3),
    ],
    [
        (1, 192, 2), (2, 192, 3), (1, 193, 2), (2, 193, 3), (1, 200, 2),
        (2, 200, 3), (1, 201, 2), (2, 201, 3), (1, 202, 2), (2, 202, 3),
        (1, 205, 2), (2, 205, 3), (1, 210, 2), (2, 210, 3), (1, 213, 2),
        (2, 213, 3),
    ],
    [
        (1, 218, 2), (2, 218, 3), (1, 219, 2), (2, 219, 3), (1, 238, 2),
        (2, 238, 3), (1, 240, 2), (2, 240, 3), (1, 242, 2), (2, 242, 3),
        (1, 243, 2), (2, 243, 3), (1, 255, 2), (2, 255, 3), (0, 203, 2),
        (0, 204, 2),
    ],
    [
        (0, 211, 2), (0, 212, 2), (0, 214, 2), (0, 221, 2), (0, 222, 2),
        (0, 223, 2), (0, 241, 2), (0, 244, 2), (0, 245, 2), (0, 246, 2),
        (0, 247, 2), (0, 248, 2), (0, 250, 2), (0, 251, 2), (0, 252, 2),
        (0, 253, 2),
    ],
    [
        (0, 254, 2), (238, 0, 0), (239, 0, 0), (240, 0, 0), (241, 0, 0),
        (242, 0, 0), (243, 0, 0), (244, 0, 0), (245, 0, 0), (246, 0, 0),
        (247, 0, 0), (248, 0, 0), (249, 0, 0), (250, 0, 0), (251, 0, 0),
        (252, 0, 0),
    ],
    [
        (7, 199, 2), (8, 199, 2), (9, 199, 2), (10, 199, 2), (11, 199, 2),
        (12, 199, 2), (13, 199, 2), (14, 199, 3), (7, 207, 2), (8, 207, 2),
        (9, 207, 2), (10, 207, 2), (11, 207, 2), (12, 207, 2), (13, 207, 2),
        (14, 207, 3),
    ],
    [
        (7, 234, 2), (8, 234, 2), (9, 234, 2), (10, 234, 2), (11, 234, 2),
        (12, 234, 2), (13, 234, 2), (14, 234, 3), (7, 235, 2), (8, 235, 2),
        (9, 235, 2), (10, 235, 2), (11, 235, 2), (12, 235, 2), (13, 235, 2),
        (14, 235, 3),
    ],
    [
        (3, 192, 2), (4, 192, 2), (5, 192, 2), (6, 192, 3), (3, 193, 2),
        (4, 193, 2), (5, 193, 2), (6, 193, 3), (3, 200, 2), (4, 200, 2),
        (5, 200, 2), (6, 200, 3), (3, 201, 2), (4, 201, 2), (5, 201, 2),
        (6, 201, 3),
    ],
    [
        (3, 202, 2), (4, 202, 2), (5, 202, 2), (6, 202, 3), (3, 205, 2),
        (4, 205, 2), (5, 205, 2), (6, 205, 3), (3, 210, 2), (4, 210, 2),
        (5, 210, 2), (6, 210, 3), (3, 213, 2), (4, 213, 2), (5, 213, 2),
        (6, 213, 3),
    ],
    [
        (3, 218, 2), (4, 218, 2), (5, 218, 2), (6, 218, 3), (3, 219, 2),
        (4, 219, 2), (5, 219, 2), (6, 219, 3), (3, 238, 2), (4, 238, 2),
        (5, 238, 2), (6, 238, 3), (3, 240, 2), (4, 240, 2), (5, 240, 2),
        (6, 240, 3),
    ],
    [
        (3, 242, 2), (4, 242, 2), (5, 242, 2), (6, 242, 3), (3, 243, 2),
        (4, 243, 2), (5, 243, 2), (6, 243, 3), (3, 255, 2), (4, 255, 2),
        (5, 255, 2), (6, 255, 3), (1, 203, 2), (2, 203, 3), (1, 204, 2),
        (2, 204, 3),
    ],
    [
        (1, 211, 2), (2, 211, 3), (1, 212, 2), (2, 212, 3), (1, 214, 2),
        (2, 214, 3), (1, 221, 2), (2, 221, 3), (1, 222, 2), (2, 222, 3),
        (1, 223, 2), (2, 223, 3), (1, 241, 2), (2, 241, 3), (1, 244, 2),
        (2, 244, 3),
    ],
    [
        (1, 245, 2), (2, 245, 3), (1, 246, 2), (2, 246, 3), (1, 247, 2),
        (2, 247, 3), (1, 248, 2), (2, 248, 3), (1, 250, 2), (2, 250, 3),
        (1, 251, 2), (2, 251, 3), (1, 252, 2), (2, 252, 3), (1, 253, 2),
        (2, 253, 3),
    ],
    [
        (1, 254, 2), (2, 254, 3), (0, 2, 2), (0, 3, 2), (0, 4, 2), (0, 5, 2),
        (0, 6, 2), (0, 7, 2), (0, 8, 2), (0, 11, 2), (0, 12, 2), (0, 14, 2),
        (0, 15, 2), (0, 16, 2), (0, 17, 2), (0, 18, 2),
    ],
    [
        (0, 19, 2), (0, 20, 2), (0, 21, 2), (0, 23, 2), (0, 24, 2), (0, 25, 2),
        (0, 26, 2), (0, 27, 2), (0, 28, 2), (0, 29, 2), (0, 30, 2), (0, 31, 2),
        (0, 127, 2), (0, 220, 2), (0, 249, 2), (253, 0, 0),
    ],
    [
        (7, 192, 2), (8, 192, 2), (9, 192, 2), (10, 192, 2), (11, 192, 2),
        (12, 192, 2), (13, 192, 2), (14, 192, 3), (7, 193, 2), (8, 193, 2),
        (9, 193, 2), (10, 193, 2), (11, 193, 2), (12, 193, 2), (13, 193, 2),
        (14, 193, 3),
    ],
    [
        (7, 200, 2), (8, 200, 2), (9, 200, 2), (10, 200, 2), (11, 200, 2),
        (12, 200, 2), (13, 200, 2), (14, 200, 3), (7, 201, 2), (8, 201, 2),
        (9, 201, 2), (10, 201, 2), (11, 201, 2), (12, 201, 2), (13, 201, 2),
        (14, 201, 3),
    ],
    [
        (7, 202, 2), (8, 202, 2), (9, 202, 2), (10, 202, 2), (11, 202, 2),
        (12, 202, 2), (13, 202, 2), (14, 202, 3), (7, 205, 2), (8, 205, 2),
        (9, 205, 2), (10, 205, 2), (11, 205, 2), (12, 205, 2), (13, 205, 2),
        (14, 205, 3),
    ],
    [
        (7, 210, 2), (8, 210, 2), (9, 210, 2), (10, 210, 2), (11, 210, 2),
        (12, 210, 2), (13, 210, 2), (14, 210, 3), (7, 213, 2), (8, 213, 2),
        (9, 213, 2), (10, 213, 2), (11, 213, 2), (12, 213, 2), (13, 213, 2),
        (14, 213, 3),
    ],
    [
        (7, 218, 2), (8, 218, 2), (9, 218, 2), (10, 218, 2), (11, 218, 2),
        (12, 218, 2), (13, 218, 2), (14, 218, 3), (7, 219, 2), (8, 219, 2),
        (9, 219, 2), (10, 219, 2), (11, 219, 2), (12, 219, 2), (13, 219, 2),
        (14, 219, 3),
    ],
    [
        (7, 238, 2), (8, 238, 2), (9, 238, 2), (10, 238, 2), (11, 238, 2),
        (12, 238, 2), (13, 238, 2), (14, 238, 3), (7, 240, 2), (8, 240, 2),
        (9, 240, 2), (10, 240, 2), (11, 240, 2), (12, 240, 2), (13, 240, 2),
        (14, 240, 3),
    ],
    [
        (7, 242, 2), (8, 242, 2), (9, 242, 2), (10, 242, 2), (11, 242, 2),
        (12, 242, 2), (13, 242, 2), (14, 242, 3), (7, 243, 2), (8, 243, 2),
        (9, 243, 2), (10, 243, 2), (11, 243, 2), (12, 243, 2), (13, 243, 2),
        (14, 243, 3),
    ],
    [
        (7, 255, 2), (8, 255, 2), (9, 255, 2), (10, 255, 2), (11, 255, 2),
        (12, 255, 2), (13, 255, 2), (14, 255, 3), (3, 203, 2), (4, 203, 2),
        (5, 203, 2), (6, 203, 3), (3, 204, 2), (4, 204, 2), (5, 204, 2),
        (6, 204, 3),
    ],
    [
        (3, 211, 2), (4, 211, 2), (5, 211, 2), (6, 211, 3), (3, 212, 2),
        (4, 212, 2), (5, 212, 2), (6, 212, 3), (3, 214, 2), (4, 214, 2),
        (5, 214, 2), (6, 214, 3), (3, 221, 2), (4, 221, 2), (5, 221, 2),
        (6, 221, 3),
    ],
    [
        (3, 222, 2), (4, 222, 2), (5, 222, 2), (6, 222, 3), (3, 223, 2),
        (4, 223, 2), (5, 223, 2), (6, 223, 3), (3, 241, 2), (4, 241, 2),
        (5, 241, 2), (6, 241, 3), (3, 244, 2), (4, 244, 2), (5, 244, 2),
        (6, 244, 3),
    ],
    [
        (3, 245, 2), (4, 245, 2), (5, 245, 2), (6, 245, 3), (3, 246, 2),
        (4, 246, 2), (5, 246, 2), (6, 246, 3), (3, 247, 2), (4, 247, 2),
        (5, 247, 2), (6, 247, 3), (3, 248, 2), (4, 248, 2), (5, 248, 2),
        (6, 248, 3),
    ],
    [
        (3, 250, 2), (4, 250, 2), (5, 250, 2), (6, 250, 3), (3, 251, 2),
        (4, 251, 2), (5, 251, 2), (6, 251, 3), (3, 252, 2), (4, 252, 2),
        (5, 252, 2), (6, 252, 3), (3, 253, 2), (4, 253, 2), (5, 253, 2),
        (6, 253, 3),
    ],
    [
        (3, 254, 2), (4, 254, 2), (5, 254, 2), (6, 254, 3), (1, 2, 2),
        (2, 2, 3), (1, 3, 2), (2, 3, 3), (1, 4, 2), (2, 4, 3), (1, 5, 2),
        (2, 5, 3), (1, 6, 2), (2, 6, 3), (1, 7, 2), (2, 7, 3),
    ],
    [
        (1, 8, 2), (2, 8, 3), (1, 11, 2), (2, 11, 3), (1, 12, 2), (2, 12, 3),
        (1, 14, 2), (2, 14, 3), (1, 15, 2), (2, 15, 3), (1, 16, 2), (2, 16, 3),
        (1, 17, 2), (2, 17, 3), (1, 18, 2), (2, 18, 3),
    ],
    [
        (1, 19, 2), (2, 19, 3), (1, 20, 2), (2, 20, 3), (1, 21, 2), (2, 21, 3),
        (1, 23, 2), (2, 23, 3), (1, 24, 2), (2, 24, 3), (1, 25, 2), (2, 25, 3),
        (1, 26, 2), (2, 26, 3), (1, 27, 2), (2, 27, 3),
    ],
    [
        (1, 28, 2), (2, 28, 3), (1, 29, 2), (2, 29, 3), (1, 30, 2), (2, 30, 3),
        (1, 31, 2), (2, 31, 3), (1, 127, 2), (2, 127, 3), (1, 220, 2),
        (2, 220, 3), (1, 249, 2), (2, 249, 3), (254, 0, 0), (255, 0, 0),
    ],
    [
        (7, 203, 2), (8, 203, 2), (9, 203, 2), (10, 203, 2), (11, 203, 2),
        (12, 203, 2), (13, 203, 2), (14, 203, 3), (7, 204, 2), (8, 204, 2),
        (9, 204, 2), (10, 204, 2), (11, 204, 2), (12, 204, 2), (13, 204, 2),
        (14, 204, 3),
    ],
    [
        (7, 211, 2), (8, 211, 2), (9, 211, 2), (10, 211, 2), (11, 211, 2),
        (12, 211, 2), (13, 211, 2), (14, 211, 3), (7, 212, 2), (8, 212, 2),
        (9, 212, 2), (10, 212, 2), (11, 212, 2), (12, 212, 2), (13, 212, 2),
        (14, 212, 3),
    ],
    [
        (7, 214, 2), (8, 214, 2), (9, 214, 2), (10, 214, 2), (11, 214, 2),
        (12, 214, 2), (13, 214, 2), (14, 214, 3), (7, 221, 2), (8, 221, 2),
        (9, 221, 2), (10, 221, 2), (11, 221, 2), (12, 221, 2), (13, 221, 2),
        (14, 221, 3),
    ],
    [
        (7, 222, 2), (8, 222, 2), (9, 222, 2), (10, 222, 2), (11, 222, 2),
        (12, 222, 2), (13, 222, 2), (14, 222, 3), (7, 223, 2), (8, 223, 2),
        (9, 223, 2), (10, 223, 2), (11, 223, 2), (12, 223, 2), (13, 223, 2),
        (14, 223, 3),
    ],
    [
        (7, 241, 2), (8, 241, 2), (9, 241, 2), (10, 241, 2), (11, 241, 2),
        (12, 241, 2), (13, 241, 2), (14, 241, 3), (7, 244, 2), (8, 244, 2),
        (9, 244, 2), (10, 244, 2), (11, 244, 2), (12, 244, 2), (13, 244, 2),
        (14, 244, 3),
    ],
    [
        (7, 245, 2), (8, 245, 2), (9, 245, 2), (10, 245, 2), (11, 245, 2),
        (12, 245, 2), (13, 245, 2), (14, 245, 3), (7, 246, 2), (8, 246, 2),
        (9, 246, 2), (10, 246, 2), (11, 246, 2), (12, 246, 2), (13, 246, 2),
        (14, 246, 3),
    ],
    [
        (7, 247, 2), (8, 247, 2), (9, 247, 2), (10, 247, 2), (11, 247, 2),
        (12, 247, 2), (13, 247, 2), (14, 247, 3), (7, 248, 2), (8, 248, 2),
        (9, 248, 2), (10, 248, 2), (11, 248, 2), (12, 248, 2), (13, 248, 2),
        (14, 248, 3),
    ],
    [
        (7, 250, 2), (8, 250, 2), (9, 250, 2), (10, 250, 2), (11, 250, 2),
        (12, 250, 2), (13, 250, 2), (14, 250, 3), (7, 251, 2), (8, 251, 2),
        (9, 251, 2), (10, 251, 2), (11, 251, 2), (12, 251, 2), (13, 251, 2),
        (14, 251, 3),
    ],
    [
        (7, 252, 2), (8, 252, 2), (9, 252, 2), (10, 252, 2), (11, 252, 2),
        (12, 252, 2), (13, 252, 2), (14, 252, 3), (7, 253, 2), (8, 253, 2),
        (9, 253, 2), (10, 253, 2), (11, 253, 2), (12, 253, 2), (13, 253, 2),
        (14, 253, 3),
    ],
    [
        (7, 254, 2), (8, 254, 2), (9, 254, 2), (10, 254, 2), (11, 254, 2),
        (12, 254, 2), (13, 254, 2), (14, 254, 3), (3, 2, 2), (4, 2, 2),
        (5, 2, 2), (6, 2, 3), (3, 3, 2), (4, 3, 2), (5, 3, 2), (6, 3, 3),
    ],
    [
        (3, 4, 2), (4, 4, 2), (5, 4, 2), (6, 4, 3), (3, 5, 2), (4, 5, 2),
        (5, 5, 2), (6, 5, 3), (3, 6, 2), (4, 6, 2), (5, 6, 2), (6, 6, 3),
        (3, 7, 2), (4, 7, 2), (5, 7, 2), (6, 7, 3),
    ],
    [
        (3, 8, 2), (4, 8, 2), (5, 8, 2), (6, 8, 3), (3, 11, 2), (4, 11, 2),
        (5, 11, 2), (6, 11, 3), (3, 12, 2), (4, 12, 2), (5, 12, 2), (6, 12, 3),
        (3, 14, 2), (4, 14, 2), (5, 14, 2), (6, 14, 3),
    ],
    [
        (3, 15, 2), (4, 15, 2), (5, 15, 2), (6, 15, 3), (3, 16, 2), (4, 16, 2),
        (5, 16, 2), (6, 16, 3), (3, 17, 2), (4, 17, 2), (5, 17, 2), (6, 17, 3),
        (3, 18, 2), (4, 18, 2), (5, 18, 2), (6, 18, 3),
    ],
    [
        (3, 19, 2), (4, 19, 2), (5, 19, 2), (6, 19, 3), (3, 20, 2), (4, 20, 2),
        (5, 20, 2), (6, 20, 3), (3, 21, 2), (4, 21, 2), (5, 21, 2), (6, 21, 3),
        (3, 23, 2), (4, 23, 2), (5, 23, 2), (6, 23, 3),
    ],
    [
        (3, 24, 2), (4, 24, 2), (5, 24, 2), (6, 24, 3), (3, 25, 2), (4, 25, 2),
        (5, 25, 2), (6, 25, 3), (3, 26, 2), (4, 26, 2), (5, 26, 2), (6, 26, 3),
        (3, 27, 2), (4, 27, 2), (5, 27, 2), (6, 27, 3),
    ],
    [
        (3, 28, 2), (4, 28, 2), (5, 28, 2), (6, 28, 3), (3, 29, 2), (4, 29, 2),
        (5, 29, 2), (6, 29, 3), (3, 30, 2), (4, 30, 2), (5, 30, 2), (6, 30, 3),
        (3, 31, 2), (4, 31, 2), (5, 31, 2), (6, 31, 3),
    ],
    [
        (3, 127, 2), (4, 127, 2), (5, 127, 2), (6, 127, 3), (3, 220, 2),
        (4, 220, 2), (5, 220, 2), (6, 220, 3), (3, 249, 2), (4, 249, 2),
        (5, 249, 2), (6, 249, 3), (0, 10, 2), (0, 13, 2), (0, 22, 2),
        (0, 0, 4),
    ],
    [
        (7, 2, 2), (8, 2, 2), (9, 2, 2), (10, 2, 2), (11, 2, 2), (12, 2, 2),
        (13, 2, 2), (14, 2, 3), (7, 3, 2), (8, 3, 2), (9, 3, 2), (10, 3, 2),
        (11, 3, 2), (12, 3, 2), (13, 3, 2), (14, 3, 3),
    ],
    [
        (7, 4, 2), (8, 4, 2), (9, 4, 2), (10, 4, 2), (11, 4, 2), (12, 4, 2),
        (13, 4, 2), (14, 4, 3), (7, 5, 2), (8, 5, 2), (9, 5, 2), (10, 5, 2),
        (11, 5, 2), (12, 5, 2), (13, 5, 2), (14, 5, 3),
    ],
    [
        (7, 6, 2), (8, 6, 2), (9, 6, 2), (10, 6, 2), (11, 6, 2), (12, 6, 2),
        (13, 6, 2), (14, 6, 3), (7, 7, 2), (8, 7, 2), (9, 7, 2), (10, 7, 2),
        (11, 7, 2), (12, 7, 2), (13, 7, 2), (14, 7, 3),
    ],
    [
        (7, 8, 2), (8, 8, 2), (9, 8, 2), (10, 8, 2), (11, 8, 2), (12, 8, 2),
        (13, 8, 2), (14, 8, 3), (7, 11, 2), (8, 11, 2), (9, 11, 2),
        (10, 11, 2), (11, 11, 2), (12, 11, 2), (13, 11, 2), (14, 11, 3),
    ],
    [
        (7, 12, 2), (8, 12, 2), (9, 12, 2), (10, 12, 2), (11, 12, 2),
        (12, 12, 2), (13, 12, 2), (14, 12, 3), (7, 14, 2), (8, 14, 2),
        (9, 14, 2), (10, 14, 2), (11, 14, 2), (12, 14, 2), (13, 14, 2),
        (14, 14, 3),
    ],
    [
        (7, 15, 2), (8, 15, 2), (9, 15, 2), (10, 15, 2), (11, 15, 2),
        (12, 15, 2), (13, 15, 2), (14, 15, 3), (7, 16, 2), (8, 16, 2),
        (9, 16, 2), (10, 16, 2), (11, 16, 2), (12, 16, 2), (13, 16, 2),
        (14, 16, 3),
    ],
    [
        (7, 17, 2), (8, 17, 2), (9, 17, 2), (10, 17, 2), (11, 17, 2),
        (12, 17, 2), (13, 17, 2), (14, 17, 3), (7, 18, 2), (8, 18, 2),
        (9, 18, 2), (10, 18, 2), (11, 18, 2), (12, 18, 2), (13, 18, 2),
        (14, 18, 3),
    ],
    [
        (7, 19, 2), (8, 19, 2), (9, 19, 2), (10, 19, 2), (11, 19, 2),
        (12, 19, 2), (13, 19, 2), (14, 19, 3), (7, 20, 2), (8, 20, 2),
        (9, 20, 2), (10, 20, 2), (11, 20, 2), (12, 20, 2), (13, 20, 2),
        (14, 20, 3),
    ],
    [
        (7, 21, 2), (8, 21, 2), (9, 21, 2), (10, 21, 2), (11, 21, 2),
        (12, 21, 2), (13, 21, 2), (14, 21, 3), (7, 23, 2), (8, 23, 2),
        (9, 23, 2), (10, 23, 2), (11, 23, 2), (12, 23, 2), (13, 23, 2),
        (14, 23, 3),
    ],
    [
        (7, 24, 2), (8, 24, 2), (9, 24, 2), (10, 24, 2), (11, 24, 2),
        (12, 24, 2), (13, 24, 2), (14, 24, 3), (7, 25, 2), (8, 25, 2),
        (9, 25, 2), (10, 25, 2), (11, 25, 2), (12, 25, 2), (13, 25, 2),
        (14, 25, 3),
    ],
    [
        (7, 26, 2), (8, 26, 2), (9, 26, 2), (10, 26, 2), (11, 26, 2),
        (12, 26, 2), (13, 26, 2), (14, 26, 3), (7, 27, 2), (8, 27, 2),
        (9, 27, 2), (10, 27, 2), (11, 27, 2), (12, 27, 2), (13, 27, 2),
        (14, 27, 3),
    ],
    [
        (7, 28, 2), (8, 28, 2), (9, 28, 2), (10, 28, 2), (11, 28, 2),
        (12, 28, 2), (13, 28, 2), (14, 28, 3), (7, 29, 2), (8, 29, 2),
        (9, 29, 2), (10, 29, 2), (11, 29, 2), (12, 29, 2), (13, 29, 2),
        (14, 29, 3),
    ],
    [
        (7, 30, 2), (8, 30, 2), (9, 30, 2), (10, 30, 2), (11, 30, 2),
        (12, 30, 2), (13, 30, 2), (14, 30, 3), (7, 31, 2), (8, 31, 2),
        (9, 31, 2), (10, 31, 2), (11, 31, 2), (12, 31, 2), (13, 31, 2),
        (14, 31, 3),
    ],
    [
        (7, 127, 2), (8, 127, 2), (9, 127, 2), (10, 127, 2), (11, 127, 2),
        (12, 127, 2), (13, 127, 2), (14, 127, 3), (7, 220, 2), (8, 220, 2),
        (9, 220, 2), (10, 220, 2), (11, 220, 2), (12, 220, 2), (13, 220, 2),
        (14, 220, 3),
    ],
    [
        (7, 249, 2), (8, 249, 2), (9, 249, 2), (10, 249, 2), (11, 249, 2),
        (12, 249, 2), (13, 249, 2), (14, 249, 3), (1, 10, 2), (2, 10, 3),
        (1, 13, 2), (2, 13, 3), (1, 22, 2), (2, 22, 3), (0, 0, 4), (0, 0, 4),
    ],
    [
        (3, 10, 2), (4, 10, 2), (5, 10, 2), (6, 10, 3), (3, 13, 2), (4, 13, 2),
        (5, 13, 2), (6, 13, 3), (3, 22, 2), (4, 22, 2), (5, 22, 2), (6, 22, 3),
        (0, 0, 4), (0, 0, 4), (0, 0, 4), (0, 0, 4),
    ],
    [
        (7, 10, 2), (8, 10, 2), (9, 10, 2), (10, 10, 2), (11, 10, 2),
        (12, 10, 2), (13, 10, 2), (14, 10, 3), (7, 13, 2), (8, 13, 2),
        (9, 13, 2), (10, 13, 2), (11, 13, 2), (12, 13, 2), (13, 13, 2),
        (14, 13, 3),
    ],
    [
        (7, 22, 2), (8, 22, 2), (9, 22, 2), (10, 22, 2), (11, 22, 2),
        (12, 22, 2), (13, 22, 2), (14, 22, 3), (0, 0, 4), (0, 0, 4), (0, 0, 4),
        (0, 0, 4), (0, 0, 4), (0, 0, 4), (0, 0, 4), (0, 0, 4),
    ],
];
