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

//! Escape sequence terminators and their decoded commands.

use crate::result::{ArtError, ArtResult};

/// The closed set of terminator bytes that end an escape sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EscapeTerminator {
    /// CUU - Cursor Up
    /// ESC[#A - moves cursor up # lines
    CursorUp,
    /// CUD - Cursor Down
    /// ESC[#B - moves cursor down # lines
    CursorDown,
    /// CUF - Cursor Forward
    /// ESC[#C - moves cursor right # columns
    CursorForward,
    /// CUB - Cursor Back
    /// ESC[#D - moves cursor left # columns
    CursorBack,
    /// CNL - Cursor Next Line
    /// ESC[#E - moves cursor to the beginning of the line # lines down
    CursorNextLine,
    /// CPL - Cursor Previous Line
    /// ESC[#F - moves cursor to the beginning of the line # lines up
    CursorPreviousLine,
    /// CHA - Cursor Horizontal Absolute
    /// ESC[#G - moves cursor to column #
    CursorHorizontalAbsolute,
    /// CPR - Cursor Position Report
    /// ESC[{line};{column}R - interpreted as a cursor position
    CursorPositionReport,
    /// CUP - Cursor Position
    /// ESC[{line};{column}H - moves cursor to line #, column #
    CursorPosition,
    /// SCP - Save Cursor Position
    /// ESC[s
    SaveCursorPosition,
    /// RCP - Restore Cursor Position
    /// ESC[u
    RestoreCursorPosition,
    /// ED - Erase in Display
    /// ESC[#J
    EraseInDisplay,
    /// EL - Erase in Line
    /// ESC[#K
    EraseInLine,
    /// SGR - Select Graphic Rendition
    /// ESC[#;#m
    SelectGraphicRendition,
    /// SM - Set Mode
    /// ESC[=#h
    SetMode,
}

impl EscapeTerminator {
    /// Look up a terminator byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(EscapeTerminator::CursorUp),
            b'B' => Some(EscapeTerminator::CursorDown),
            b'C' => Some(EscapeTerminator::CursorForward),
            b'D' => Some(EscapeTerminator::CursorBack),
            b'E' => Some(EscapeTerminator::CursorNextLine),
            b'F' => Some(EscapeTerminator::CursorPreviousLine),
            b'G' => Some(EscapeTerminator::CursorHorizontalAbsolute),
            b'R' => Some(EscapeTerminator::CursorPositionReport),
            b'H' => Some(EscapeTerminator::CursorPosition),
            b's' => Some(EscapeTerminator::SaveCursorPosition),
            b'u' => Some(EscapeTerminator::RestoreCursorPosition),
            b'J' => Some(EscapeTerminator::EraseInDisplay),
            b'K' => Some(EscapeTerminator::EraseInLine),
            b'm' => Some(EscapeTerminator::SelectGraphicRendition),
            b'h' => Some(EscapeTerminator::SetMode),
            _ => None,
        }
    }

    /// Convert terminator to byte representation
    pub fn to_byte(&self) -> u8 {
        match self {
            EscapeTerminator::CursorUp => b'A',
            EscapeTerminator::CursorDown => b'B',
            EscapeTerminator::CursorForward => b'C',
            EscapeTerminator::CursorBack => b'D',
            EscapeTerminator::CursorNextLine => b'E',
            EscapeTerminator::CursorPreviousLine => b'F',
            EscapeTerminator::CursorHorizontalAbsolute => b'G',
            EscapeTerminator::CursorPositionReport => b'R',
            EscapeTerminator::CursorPosition => b'H',
            EscapeTerminator::SaveCursorPosition => b's',
            EscapeTerminator::RestoreCursorPosition => b'u',
            EscapeTerminator::EraseInDisplay => b'J',
            EscapeTerminator::EraseInLine => b'K',
            EscapeTerminator::SelectGraphicRendition => b'm',
            EscapeTerminator::SetMode => b'h',
        }
    }

    /// Short description used in logs.
    pub fn description(&self) -> &'static str {
        match self {
            EscapeTerminator::CursorUp => "move cursor up",
            EscapeTerminator::CursorDown => "move cursor down",
            EscapeTerminator::CursorForward => "move cursor right",
            EscapeTerminator::CursorBack => "move cursor left",
            EscapeTerminator::CursorNextLine => "move cursor to start of line below",
            EscapeTerminator::CursorPreviousLine => "move cursor to start of line above",
            EscapeTerminator::CursorHorizontalAbsolute => "move cursor to column",
            EscapeTerminator::CursorPositionReport => "report cursor position",
            EscapeTerminator::CursorPosition => "move cursor to line and column",
            EscapeTerminator::SaveCursorPosition => "save cursor position",
            EscapeTerminator::RestoreCursorPosition => "restore cursor position",
            EscapeTerminator::EraseInDisplay => "clear screen",
            EscapeTerminator::EraseInLine => "clear line",
            EscapeTerminator::SelectGraphicRendition => "set styles and colors",
            EscapeTerminator::SetMode => "set screen mode",
        }
    }
}

impl std::fmt::Display for EscapeTerminator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_byte() as char)
    }
}

/// A decoded escape sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EscapeCommand {
    /// ESC[#A
    CursorUp(u16),
    /// ESC[#B
    CursorDown(u16),
    /// ESC[#C
    CursorForward(u16),
    /// ESC[#D
    CursorBack(u16),
    /// ESC[#E
    CursorNextLine(u16),
    /// ESC[#F
    CursorPreviousLine(u16),
    /// ESC[#G
    CursorHorizontalAbsolute(u16),
    /// ESC[{line};{column}H or ESC[{line};{column}R
    CursorPosition {
        /// Cursor Row
        row: u16,
        /// Cursor Column
        col: u16,
    },
    /// ESC[#;#m
    SelectGraphicRendition(Vec<u16>),
    /// Recognised but has no effect on the screen buffer.
    Ignored(EscapeTerminator),
}

impl EscapeCommand {
    /// Decode the parameter bytes of an escape sequence, excluding the CSI introducer.
    pub fn parse(terminator: EscapeTerminator, params: &[u8]) -> ArtResult<Self> {
        let malformed = |reason: &str| {
            let mut sequence = params.to_vec();
            sequence.push(terminator.to_byte());
            ArtError::malformed(&sequence, reason)
        };
        let count = || -> ArtResult<u16> {
            if params.is_empty() {
                return Ok(1);
            }
            parse_number(params).ok_or_else(|| malformed("expected a single integer count"))
        };

        let command = match terminator {
            EscapeTerminator::CursorUp => EscapeCommand::CursorUp(count()?),
            EscapeTerminator::CursorDown => EscapeCommand::CursorDown(count()?),
            EscapeTerminator::CursorForward => EscapeCommand::CursorForward(count()?),
            EscapeTerminator::CursorBack => EscapeCommand::CursorBack(count()?),
            EscapeTerminator::CursorNextLine => EscapeCommand::CursorNextLine(count()?),
            EscapeTerminator::CursorPreviousLine => EscapeCommand::CursorPreviousLine(count()?),
            EscapeTerminator::CursorHorizontalAbsolute => {
                EscapeCommand::CursorHorizontalAbsolute(count()?)
            }
            EscapeTerminator::CursorPosition | EscapeTerminator::CursorPositionReport => {
                let parts: Vec<&[u8]> = params.split(|b| *b == b';').collect();
                if parts.len() > 2 {
                    return Err(malformed("expected at most two integer parameters"));
                }
                let mut coords = [1u16; 2];
                for (coord, part) in coords.iter_mut().zip(&parts) {
                    if !part.is_empty() {
                        *coord = parse_number(part)
                            .ok_or_else(|| malformed("expected integer line and column"))?;
                    }
                }
                EscapeCommand::CursorPosition {
                    row: coords[0],
                    col: coords[1],
                }
            }
            EscapeTerminator::SelectGraphicRendition => {
                let codes = params
                    .split(|b| *b == b';')
                    .map(|part| if part.is_empty() { Some(0) } else { parse_number(part) })
                    .collect::<Option<Vec<u16>>>()
                    .ok_or_else(|| malformed("expected integer attribute codes"))?;
                EscapeCommand::SelectGraphicRendition(codes)
            }
            EscapeTerminator::SaveCursorPosition
            | EscapeTerminator::RestoreCursorPosition
            | EscapeTerminator::EraseInDisplay
            | EscapeTerminator::EraseInLine
            | EscapeTerminator::SetMode => EscapeCommand::Ignored(terminator),
        };
        Ok(command)
    }
}

fn parse_number(digits: &[u8]) -> Option<u16> {
    if digits.is_empty() {
        return None;
    }
    digits.iter().try_fold(0u16, |acc, b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add((b - b'0') as u16)
    })
}
