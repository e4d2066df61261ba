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

//! Screen geometry, control bytes and 3270 data stream constants.

/// Number of rows on a 3270 Model 2 screen.
pub const SCREEN_ROWS: u8 = 24;

/// Number of columns on a 3270 Model 2 screen.
pub const SCREEN_COLS: u8 = 80;

/// Number of addressable cells in the screen buffer.
pub const SCREEN_CELLS: u16 = SCREEN_ROWS as u16 * SCREEN_COLS as u16;

/// Maximum length of an escape sequence's parameter bytes.
///
/// ANSI art escapes are rarely longer than a dozen bytes. A sequence that grows past this limit
/// is abandoned and the parser returns to normal text processing.
pub const MAX_SEQUENCE_LENGTH: usize = 256;

/// Shortest run of identical symbols that is emitted in the count-tagged form.
pub const COMPRESS_THRESHOLD: usize = 5;

/// Escape sequence introducer.
pub const ESC: u8 = 0x1B;

/// Line feed.
pub const LF: u8 = 0x0A;

/// Carriage return.
pub const CR: u8 = 0x0D;

/// CSI introducer following ESC.
pub const CSI: u8 = b'[';

/// Substituted into the literal stream for bytes with no 3270 rendering.
pub const FILLER: u8 = b' ';

/// EBCDIC space, substituted into the graphic stream.
pub const EBCDIC_SPACE: u8 = 0x40;

/// Graphic Escape: the following byte selects a glyph from the APL/text graphic set.
pub const GRAPHIC_ESCAPE: u8 = 0x08;

/// 3270 orders
pub mod order {
    /// SBA - Set Buffer Address
    pub const SET_BUFFER_ADDRESS: u8 = 0x11;
    /// IC - Insert Cursor
    pub const INSERT_CURSOR: u8 = 0x13;
    /// SF - Start Field
    pub const START_FIELD: u8 = 0x1D;
    /// SA - Set Attribute
    pub const SET_ATTRIBUTE: u8 = 0x28;
    /// SFE - Start Field Extended
    pub const START_FIELD_EXTENDED: u8 = 0x29;
}

/// Attribute types carried by the SA order.
pub mod attribute {
    /// Resets every extended and color attribute to its default.
    pub const ALL: u8 = 0x00;
    /// Extended highlighting
    pub const HIGHLIGHT: u8 = 0x41;
    /// Foreground color
    pub const FOREGROUND: u8 = 0x42;
    /// Background color
    pub const BACKGROUND: u8 = 0x45;
}

/// Extended highlighting values.
pub mod highlight {
    /// Default
    pub const DEFAULT: u8 = 0x00;
    /// Blink
    pub const BLINK: u8 = 0xF1;
    /// Reverse Video
    pub const REVERSE: u8 = 0xF2;
    /// Underscore
    pub const UNDERSCORE: u8 = 0xF4;
    /// Intensify
    pub const INTENSIFY: u8 = 0xF8;
}

/// 12-bit buffer address code table.
///
/// Each six bit half of a linear buffer address indexes this table. The values are the EBCDIC
/// graphics the 3270 uses so that an address never collides with an order byte.
pub(crate) const BUFFER_ADDRESS_CODES: [u8; 64] = [
    0x40, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0x4A, 0x4B, 0x4C, 0x4D, 0x4E, 0x4F,
    0x50, 0xD1, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0x5A, 0x5B, 0x5C, 0x5D, 0x5E, 0x5F,
    0x60, 0x61, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0x6A, 0x6B, 0x6C, 0x6D, 0x6E, 0x6F,
    0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0x7A, 0x7B, 0x7C, 0x7D, 0x7E, 0x7F,
];
