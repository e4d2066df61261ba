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

//! Cursor tracking on the 24x80 screen buffer.

use crate::consts::{BUFFER_ADDRESS_CODES, SCREEN_COLS, SCREEN_ROWS};

/// A cell on the screen buffer. Rows and columns are 1-indexed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Top left cell.
    pub const HOME: Position = Position { row: 1, col: 1 };

    /// Create a position, clamping both coordinates into the screen. Zero is treated as 1.
    pub fn new(row: u16, col: u16) -> Position {
        Position {
            row: row.clamp(1, SCREEN_ROWS as u16) as u8,
            col: col.clamp(1, SCREEN_COLS as u16) as u8,
        }
    }

    /// Row, 1..=24
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column, 1..=80
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Zero based buffer offset, 0..1920
    pub fn linear(&self) -> u16 {
        (self.row as u16 - 1) * SCREEN_COLS as u16 + (self.col as u16 - 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::HOME
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Direction of a relative cursor movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Positive deltas move down.
    Row,
    /// Positive deltas move right.
    Column,
}

/// Current write position.
///
/// Movement never fails. Rows wrap around the bottom and top of the screen. Columns are
/// linearised against the screen width so leaving one edge carries into the adjacent row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    position: Position,
}

impl Cursor {
    /// Cursor at (1,1).
    pub fn new() -> Cursor {
        Cursor::default()
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Move by `delta` rows or columns.
    pub fn move_relative(&mut self, axis: Axis, delta: i32) -> Position {
        match axis {
            Axis::Row => {
                self.position.row = wrap_row(self.position.row, delta);
            }
            Axis::Column => {
                let cols = SCREEN_COLS as i32;
                let n = self.position.col as i32 - 1 + delta;
                self.position.row = wrap_row(self.position.row, n.div_euclid(cols));
                self.position.col = (n.rem_euclid(cols) + 1) as u8;
            }
        }
        self.position
    }

    /// Move by `lines` rows and return to column 1.
    pub fn move_to_line_start_relative(&mut self, lines: i32) -> Position {
        self.position.row = wrap_row(self.position.row, lines);
        self.position.col = 1;
        self.position
    }

    /// Set the column, leaving the row unchanged.
    pub fn set_column(&mut self, col: u16) -> Position {
        self.position = Position::new(self.position.row as u16, col);
        self.position
    }

    /// Set both coordinates.
    pub fn set_absolute(&mut self, row: u16, col: u16) -> Position {
        self.position = Position::new(row, col);
        self.position
    }

    /// Advance one cell after a glyph is written.
    pub fn advance(&mut self) -> Position {
        self.move_relative(Axis::Column, 1)
    }

    /// Move to the start of the next row.
    pub fn line_feed(&mut self) -> Position {
        self.move_to_line_start_relative(1)
    }
}

fn wrap_row(row: u8, delta: i32) -> u8 {
    ((row as i32 - 1 + delta).rem_euclid(SCREEN_ROWS as i32) + 1) as u8
}

/// Encode a position as the two byte 12-bit 3270 buffer address.
pub fn encode_address(position: Position) -> [u8; 2] {
    let n = position.linear();
    [
        BUFFER_ADDRESS_CODES[(n >> 6) as usize],
        BUFFER_ADDRESS_CODES[(n & 0x3F) as usize],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn cursor_at(row: u16, col: u16) -> Cursor {
        let mut cursor = Cursor::new();
        cursor.set_absolute(row, col);
        cursor
    }

    // ============================================================================
    // Position Tests
    // ============================================================================

    #[test]
    fn test_position_clamps() {
        assert_eq!(Position::new(0, 0), Position::HOME);
        let pos = Position::new(99, 200);
        assert_eq!((pos.row(), pos.col()), (24, 80));
        assert_eq!(pos.linear(), 1919);
        assert_eq!(pos.to_string(), "(24,80)");
    }

    // ============================================================================
    // Movement Tests
    // ============================================================================

    #[test]
    fn test_right_from_last_column_wraps_to_next_row() {
        let mut cursor = cursor_at(3, 80);
        assert_eq!(cursor.move_relative(Axis::Column, 1), Position::new(4, 1));
    }

    #[test]
    fn test_left_from_first_column_wraps_to_previous_row() {
        let mut cursor = cursor_at(3, 1);
        assert_eq!(cursor.move_relative(Axis::Column, -1), Position::new(2, 80));
    }

    #[test]
    fn test_last_cell_wraps_home() {
        let mut cursor = cursor_at(24, 80);
        assert_eq!(cursor.advance(), Position::HOME);
        assert_eq!(cursor.move_relative(Axis::Column, -1), Position::new(24, 80));
    }

    #[test]
    fn test_row_wraps() {
        let mut cursor = cursor_at(24, 10);
        assert_eq!(cursor.move_relative(Axis::Row, 1), Position::new(1, 10));
        assert_eq!(cursor.move_relative(Axis::Row, -2), Position::new(23, 10));
        assert_eq!(cursor.move_relative(Axis::Row, 48), Position::new(23, 10));
    }

    #[test]
    fn test_long_column_move_carries_rows() {
        let mut cursor = cursor_at(1, 1);
        assert_eq!(cursor.move_relative(Axis::Column, 160), Position::new(3, 1));
    }

    #[test]
    fn test_line_start_relative() {
        let mut cursor = cursor_at(5, 40);
        assert_eq!(cursor.move_to_line_start_relative(2), Position::new(7, 1));
        assert_eq!(cursor.move_to_line_start_relative(-3), Position::new(4, 1));
        assert_eq!(cursor.line_feed(), Position::new(5, 1));
    }

    #[test]
    fn test_set_column_keeps_row() {
        let mut cursor = cursor_at(6, 6);
        assert_eq!(cursor.set_column(0), Position::new(6, 1));
        assert_eq!(cursor.set_column(120), Position::new(6, 80));
    }

    // ============================================================================
    // Address Tests
    // ============================================================================

    #[test]
    fn test_encode_address_known_values() {
        assert_eq!(encode_address(Position::HOME), [0x40, 0x40]);
        assert_eq!(encode_address(Position::new(1, 2)), [0x40, 0xC1]);
        assert_eq!(encode_address(Position::new(2, 1)), [0xC1, 0x50]);
        assert_eq!(encode_address(Position::new(24, 80)), [0x5D, 0x7F]);
    }

    #[test]
    fn test_encode_address_injective() {
        let mut seen = HashSet::new();
        for row in 1..=24 {
            for col in 1..=80 {
                assert!(seen.insert(encode_address(Position::new(row, col))));
            }
        }
        assert_eq!(seen.len(), 1920);
    }

    proptest! {
        #[test]
        fn prop_movement_stays_on_screen(
            row in 0u16..40,
            col in 0u16..120,
            moves in proptest::collection::vec((any::<bool>(), -3000i32..3000), 0..50),
        ) {
            let mut cursor = cursor_at(row, col);
            for (vertical, delta) in moves {
                let axis = if vertical { Axis::Row } else { Axis::Column };
                let pos = cursor.move_relative(axis, delta);
                prop_assert!((1..=24).contains(&pos.row()));
                prop_assert!((1..=80).contains(&pos.col()));
            }
        }

        #[test]
        fn prop_column_moves_are_linear(start in 0u16..1920, delta in -5000i32..5000) {
            let mut cursor = cursor_at(start / 80 + 1, start % 80 + 1);
            let pos = cursor.move_relative(Axis::Column, delta);
            let expected = (start as i32 + delta).rem_euclid(1920);
            prop_assert_eq!(pos.linear() as i32, expected);
        }
    }
}
