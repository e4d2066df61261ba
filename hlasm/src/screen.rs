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

use crate::config::Target;
use std::fmt::Write;
use tn3270art_artcodec::consts::{GRAPHIC_ESCAPE, order};
use tn3270art_artcodec::{Axis, Cursor, InstructionRecord, Position, encode_address};
use tracing::trace;

/// Widest operand written on a single `DC` statement.
pub const MAX_OPERAND_LENGTH: usize = 46;

const STATEMENT_INDENT: &str = "         ";

/// Writes instruction records as assembler `DC` statements.
///
/// The writer follows the cursor through the records so attribute changes can be labeled with
/// the cell they apply to.
#[derive(Debug)]
pub struct ScreenWriter {
    target: Target,
    cursor: Cursor,
    body: String,
}

impl ScreenWriter {
    /// Create an empty writer for `target`.
    ///
    /// TSO programs open with a field attribute at (1,1), so their first cell is (1,2).
    pub fn new(target: Target) -> Self {
        let mut cursor = Cursor::new();
        if matches!(target, Target::TsoTk4 | Target::TsoZos) {
            cursor.set_absolute(1, 2);
        }
        Self {
            target,
            cursor,
            body: String::new(),
        }
    }

    /// Cell the next record applies to.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Append the statements for `record`.
    pub fn write(&mut self, record: &InstructionRecord) {
        match record {
            InstructionRecord::SetPosition { row, col } => {
                let position = self.cursor.set_absolute(*row as u16, *col as u16);
                self.set_buffer_address(position);
            }
            InstructionRecord::TextLiteral {
                bytes,
                repeat_count,
            } => self.text(bytes, *repeat_count),
            InstructionRecord::GraphicLiteral {
                bytes,
                repeat_count,
            } => self.graphic(bytes, *repeat_count),
            InstructionRecord::AttributeChange { bytes, description } => {
                let _ = writeln!(self.body, "* {} {}", self.cursor.position(), description);
                let _ = writeln!(self.body, "{STATEMENT_INDENT}DC    X'{}'", hex(bytes));
            }
        }
        self.cursor.move_relative(Axis::Column, record.cells() as i32);
    }

    /// Append every record in order.
    pub fn write_all<'a>(&mut self, records: impl IntoIterator<Item = &'a InstructionRecord>) {
        for record in records {
            self.write(record);
        }
    }

    /// The written statements without trailing whitespace.
    pub fn finish(self) -> String {
        let mut body = self.body;
        body.truncate(body.trim_end().len());
        body
    }

    fn set_buffer_address(&mut self, position: Position) {
        trace!(%position, "SBA");
        if self.target.uses_sba_macro() {
            let _ = writeln!(self.body, "{STATEMENT_INDENT}$SBA  {position}");
        } else {
            let address = encode_address(position);
            let _ = writeln!(
                self.body,
                "{STATEMENT_INDENT}DC    X'{:02X}{}'    SBA{position}",
                order::SET_BUFFER_ADDRESS,
                hex(&address)
            );
        }
    }

    fn text(&mut self, bytes: &[u8], repeat_count: Option<usize>) {
        for chunk in bytes.chunks(MAX_OPERAND_LENGTH) {
            let operand = quote(chunk);
            match repeat_count {
                Some(count) => {
                    let _ = writeln!(self.body, "{STATEMENT_INDENT}DC    {count}C'{operand}'");
                }
                None => {
                    let _ = writeln!(self.body, "{STATEMENT_INDENT}DC    C'{operand}'");
                }
            }
        }
    }

    fn graphic(&mut self, bytes: &[u8], repeat_count: Option<usize>) {
        let mut buffer = String::new();
        for glyph in glyphs(bytes) {
            buffer.push_str(&hex(glyph));
            if buffer.len() > MAX_OPERAND_LENGTH {
                self.hex_constant(&buffer, repeat_count);
                buffer.clear();
            }
        }
        if !buffer.is_empty() {
            self.hex_constant(&buffer, repeat_count);
        }
    }

    fn hex_constant(&mut self, operand: &str, repeat_count: Option<usize>) {
        match repeat_count {
            Some(count) => {
                let _ = writeln!(self.body, "{STATEMENT_INDENT}DC    {count}X'{operand}'");
            }
            None => {
                let _ = writeln!(self.body, "{STATEMENT_INDENT}DC    X'{operand}'");
            }
        }
    }
}

/// Upper case hex of `bytes`.
pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
        let _ = write!(out, "{byte:02X}");
        out
    })
}

/// Character constant operand with `'` and `&` doubled.
fn quote(chunk: &[u8]) -> String {
    let mut out = String::with_capacity(chunk.len());
    for &byte in chunk {
        let ch = byte as char;
        if ch == '\'' || ch == '&' {
            out.push(ch);
        }
        out.push(ch);
    }
    out
}

/// Split EBCDIC graphic bytes into glyphs, keeping each Graphic Escape with its code.
fn glyphs(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut rest = bytes;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let width = if rest[0] == GRAPHIC_ESCAPE && rest.len() > 1 {
            2
        } else {
            1
        };
        let (glyph, tail) = rest.split_at(width);
        rest = tail;
        Some(glyph)
    })
}
