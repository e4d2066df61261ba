//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! CP437 to EBCDIC glyph mapping.
//!
//! Every CP437 codepoint falls into one of three classes:
//!
//! - **Literal**: printable ASCII that the assembler can carry in a character constant.
//! - **Graphic**: box drawing, shading, accented Latin and the few ASCII punctuation marks that
//!   do not survive the assembler's translation. These are stored already encoded, either as a
//!   single EBCDIC byte or as a Graphic Escape (`0x08`) followed by the APL/text graphic code.
//! - **Unsupported**: everything else.

use crate::consts::GRAPHIC_ESCAPE as GE;
use crate::result::{ArtError, ArtResult};

/// Classification of a CP437 codepoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    /// Printable ASCII emitted in a character constant.
    Literal,
    /// Pre-encoded EBCDIC emitted in a hexadecimal constant.
    Graphic,
}

#[derive(Copy, Clone, Debug)]
enum Entry {
    Unsupported,
    Literal,
    Graphic(&'static [u8]),
}

/// Immutable lookup from CP437 codepoint to its 3270 encoding.
#[derive(Debug)]
pub struct GlyphTable {
    entries: [Entry; 256],
}

static GLYPH_TABLE: GlyphTable = GlyphTable {
    entries: build_entries(),
};

static IDENTITY: [u8; 256] = build_identity();

impl GlyphTable {
    /// The process wide glyph table.
    pub fn global() -> &'static GlyphTable {
        &GLYPH_TABLE
    }

    /// Classify a codepoint, or `None` if it has no rendering.
    pub fn classify(&self, byte: u8) -> Option<GlyphClass> {
        match self.entries[byte as usize] {
            Entry::Unsupported => None,
            Entry::Literal => Some(GlyphClass::Literal),
            Entry::Graphic(_) => Some(GlyphClass::Graphic),
        }
    }

    /// Returns `true` if the codepoint belongs to the graphic range.
    pub fn is_graphic(&self, byte: u8) -> bool {
        matches!(self.entries[byte as usize], Entry::Graphic(_))
    }

    /// Encode a codepoint.
    ///
    /// Literal codepoints are returned unchanged as ASCII. Graphic codepoints are returned as
    /// their EBCDIC encoding.
    pub fn encode(&self, byte: u8) -> ArtResult<&'static [u8]> {
        match self.entries[byte as usize] {
            Entry::Unsupported => Err(ArtError::UnsupportedGlyph { byte }),
            Entry::Literal => Ok(std::slice::from_ref(&IDENTITY[byte as usize])),
            Entry::Graphic(bytes) => Ok(bytes),
        }
    }
}

const fn build_entries() -> [Entry; 256] {
    let mut entries = [Entry::Unsupported; 256];
    let mut byte = 0x20;
    while byte <= 0x7E {
        entries[byte] = Entry::Literal;
        byte += 1;
    }
    let mut i = 0;
    while i < GRAPHIC_GLYPHS.len() {
        let (codepoint, bytes) = GRAPHIC_GLYPHS[i];
        entries[codepoint as usize] = Entry::Graphic(bytes);
        i += 1;
    }
    entries
}

const fn build_identity() -> [u8; 256] {
    let mut identity = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        identity[i] = i as u8;
        i += 1;
    }
    identity
}

#[rustfmt::skip]
const GRAPHIC_GLYPHS: &[(u8, &[u8])] = &[
    // Control pictures
    (0x01, &[GE, 0xA3]), (0x02, &[GE, 0xA3]), (0x03, &[GE, 0xBA]), (0x04, &[GE, 0x70]),
    (0x05, &[GE, 0xDD]), (0x06, &[GE, 0xDD]), (0x0E, &[GE, 0xDF]), (0x0F, &[0x5C]),
    (0x10, &[GE, 0x8F]), (0x11, &[GE, 0x9F]), (0x12, &[GE, 0x8F]), (0x14, &[0x6B]),
    (0x15, &[0xB5]),     (0x18, &[GE, 0x8A]), (0x19, &[GE, 0x8B]), (0x1D, &[GE, 0x8A]),
    (0x1E, &[GE, 0xBA]), (0x1F, &[GE, 0xBB]),
    // Punctuation lost in character constants
    (b'&', &[0x50]), (b'\'', &[0x7D]), (b'<', &[0x4C]), (b'>', &[0x6E]),
    (b'[', &[0x4A]), (b']', &[0x5A]),  (b'`', &[0x79]), (b'{', &[0xC0]),
    (b'}', &[0xD0]), (b'~', &[0xA1]),
    // Accented Latin and currency
    (0x80, &[0x68]), (0x81, &[0xDC]), (0x82, &[0x51]), (0x83, &[0x42]),
    (0x84, &[0x43]), (0x85, &[0x44]), (0x86, &[0x47]), (0x87, &[0x48]),
    (0x88, &[0x52]), (0x89, &[0x53]), (0x8A, &[0x54]), (0x8B, &[0x57]),
    (0x8C, &[0x56]), (0x8D, &[0x58]), (0x8E, &[0x63]), (0x8F, &[0x67]),
    (0x90, &[0x71]), (0x91, &[0x9C]), (0x92, &[0x9E]), (0x93, &[0xCB]),
    (0x94, &[0xCC]), (0x95, &[0xCD]), (0x96, &[0xDB]), (0x97, &[0xDD]),
    (0x98, &[0xDF]), (0x99, &[0xEC]), (0x9A, &[0xFC]), (0x9B, &[0xB0]),
    (0x9C, &[0xB1]), (0x9D, &[0xB2]), (0x9E, &[0x9D]), (0x9F, &[0x86]),
    (0xA0, &[0x45]), (0xA1, &[0x55]), (0xA2, &[0xCE]), (0xA3, &[0xDE]),
    (0xA4, &[0x49]), (0xA5, &[0x69]), (0xA6, &[0x9A]), (0xA7, &[0x9B]),
    (0xA8, &[0xAB]), (0xA9, &[0xBA]), (0xAA, &[0xBA]), (0xAB, &[0xB8]),
    (0xAC, &[0xB7]), (0xAD, &[0xAA]), (0xAE, &[0x8A]), (0xAF, &[0x8B]),
    // Shading and box drawing
    (0xB0, &[GE, 0x95]), (0xB1, &[GE, 0x95]), (0xB2, &[GE, 0x95]), (0xB3, &[GE, 0x85]),
    (0xB4, &[GE, 0xD6]), (0xB5, &[GE, 0xD7]), (0xB6, &[GE, 0xD5]), (0xB7, &[GE, 0xD5]),
    (0xB8, &[GE, 0xD5]), (0xB9, &[GE, 0xD6]), (0xBA, &[GE, 0x85]), (0xBB, &[GE, 0xD5]),
    (0xBC, &[GE, 0xD4]), (0xBD, &[GE, 0xD4]), (0xBE, &[GE, 0xD4]), (0xBF, &[GE, 0xD5]),
    (0xC0, &[GE, 0xC4]), (0xC1, &[GE, 0xC7]), (0xC2, &[GE, 0xD7]), (0xC3, &[GE, 0xC6]),
    (0xC4, &[GE, 0xA2]), (0xC5, &[GE, 0xD3]), (0xC6, &[GE, 0xC7]), (0xC7, &[GE, 0xC6]),
    (0xC8, &[GE, 0xC4]), (0xC9, &[GE, 0xC5]), (0xCA, &[GE, 0xC7]), (0xCB, &[GE, 0xD7]),
    (0xCC, &[GE, 0xC6]), (0xCD, &[GE, 0xA2]), (0xCE, &[GE, 0xD3]), (0xCF, &[GE, 0xC8]),
    (0xD0, &[GE, 0xC7]), (0xD1, &[GE, 0xD8]), (0xD2, &[GE, 0xD7]), (0xD3, &[GE, 0xC4]),
    (0xD4, &[GE, 0xC4]), (0xD5, &[GE, 0xC5]), (0xD6, &[GE, 0xC5]), (0xD7, &[GE, 0xD3]),
    (0xD8, &[GE, 0xD3]), (0xD9, &[GE, 0xD4]), (0xDA, &[GE, 0xC5]), (0xDB, &[GE, 0x95]),
    (0xDC, &[GE, 0x94]), (0xDD, &[GE, 0x91]), (0xDE, &[GE, 0x92]), (0xDF, &[GE, 0x93]),
    // Greek and mathematical symbols
    (0xE0, &[GE, 0xB0]), (0xE1, &[0x59]),     (0xE2, &[GE, 0xC5]), (0xE3, &[GE, 0xB0]),
    (0xE4, &[GE, 0xB1]), (0xE5, &[GE, 0x9D]), (0xE6, &[0xA0]),     (0xE7, &[0x99]),
    (0xE8, &[GE, 0xEF]), (0xEA, &[GE, 0xED]), (0xEB, &[GE, 0x9D]), (0xEC, &[GE, 0xB4]),
    (0xED, &[GE, 0xEF]), (0xEE, &[GE, 0xB2]), (0xEF, &[GE, 0xAA]), (0xF0, &[GE, 0xE0]),
    (0xF1, &[0x8F]),     (0xF2, &[GE, 0xAE]), (0xF3, &[GE, 0x8C]), (0xF4, &[GE, 0x8D]),
    (0xF5, &[GE, 0x8E]), (0xF6, &[0xE1]),     (0xF7, &[GE, 0xCA]), (0xF8, &[0x90]),
    (0xF9, &[GE, 0xA3]), (0xFA, &[0xB3]),     (0xFB, &[0x40]),     (0xFC, &[0x9A]),
    (0xFD, &[0xEA]),     (0xFE, &[GE, 0xC3]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_passthrough() {
        let table = GlyphTable::global();
        assert_eq!(table.encode(b'A').unwrap(), b"A");
        assert_eq!(table.encode(b' ').unwrap(), b" ");
        assert_eq!(table.classify(b'z'), Some(GlyphClass::Literal));
        assert!(!table.is_graphic(b'0'));
    }

    #[test]
    fn test_remapped_punctuation_is_graphic() {
        let table = GlyphTable::global();
        for byte in b"&'<>[]`{}~" {
            assert_eq!(table.classify(*byte), Some(GlyphClass::Graphic), "{:?}", *byte as char);
        }
        assert_eq!(table.encode(b'[').unwrap(), &[0x4A]);
        assert_eq!(table.encode(b'\'').unwrap(), &[0x7D]);
    }

    #[test]
    fn test_box_drawing_uses_graphic_escape() {
        let table = GlyphTable::global();
        assert_eq!(table.encode(0xC4).unwrap(), &[0x08, 0xA2]);
        assert_eq!(table.encode(0xDB).unwrap(), &[0x08, 0x95]);
        assert_eq!(table.encode(0xB3).unwrap(), &[0x08, 0x85]);
    }

    #[test]
    fn test_graphic_range_coverage() {
        let table = GlyphTable::global();
        for byte in 0x80..=0xFEu8 {
            if byte == 0xE9 {
                continue;
            }
            assert!(table.is_graphic(byte), "0x{byte:02X}");
        }
        for byte in [0x01, 0x06, 0x0E, 0x12, 0x14, 0x15, 0x18, 0x19, 0x1D, 0x1F] {
            assert!(table.is_graphic(byte), "0x{byte:02X}");
        }
    }

    #[test]
    fn test_unsupported_glyphs() {
        let table = GlyphTable::global();
        for byte in [0x00, 0x07, 0x13, 0x1A, 0x7F, 0xE9, 0xFF] {
            assert_eq!(table.classify(byte), None);
            assert_eq!(table.encode(byte), Err(ArtError::UnsupportedGlyph { byte }));
        }
    }

    #[test]
    fn test_encode_is_pure() {
        let table = GlyphTable::global();
        for byte in 0..=255u8 {
            assert_eq!(table.encode(byte), table.encode(byte));
        }
    }

    #[test]
    fn test_no_lone_graphic_escape() {
        let table = GlyphTable::global();
        for byte in 0..=255u8 {
            if let Ok(bytes) = table.encode(byte) {
                assert!(!bytes.is_empty());
                if bytes[0] == GE {
                    assert_eq!(bytes.len(), 2, "0x{byte:02X}");
                }
            }
        }
    }
}
