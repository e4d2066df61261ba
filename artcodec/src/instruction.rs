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

use crate::color::AttributeChange;
use crate::cursor::Position;
use bytes::Bytes;

/// A single screen buffer instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstructionRecord {
    /// Subsequent output starts at this cell.
    SetPosition {
        /// Row, 1..=24
        row: u8,
        /// Column, 1..=80
        col: u8,
    },
    /// ASCII text for a character constant.
    TextLiteral {
        /// Text bytes
        bytes: Bytes,
        /// Set when the bytes are a single symbol repeated this many times
        repeat_count: Option<usize>,
    },
    /// EBCDIC bytes for a hexadecimal constant.
    GraphicLiteral {
        /// Encoded glyphs
        bytes: Bytes,
        /// Set when the bytes are a single glyph repeated this many times
        repeat_count: Option<usize>,
    },
    /// Set Attribute order.
    AttributeChange {
        /// Encoded SA order
        bytes: Bytes,
        /// Human readable description
        description: String,
    },
}

impl InstructionRecord {
    /// Position record for `position`.
    pub fn set_position(position: Position) -> Self {
        InstructionRecord::SetPosition {
            row: position.row(),
            col: position.col(),
        }
    }

    /// Number of screen cells the record writes.
    pub fn cells(&self) -> usize {
        match self {
            InstructionRecord::TextLiteral {
                bytes,
                repeat_count,
            } => bytes.len() * repeat_count.unwrap_or(1),
            InstructionRecord::GraphicLiteral {
                bytes,
                repeat_count,
            } => {
                let glyphs = bytes.iter().filter(|b| **b != crate::consts::GRAPHIC_ESCAPE).count();
                glyphs * repeat_count.unwrap_or(1)
            }
            InstructionRecord::SetPosition { .. } | InstructionRecord::AttributeChange { .. } => 0,
        }
    }
}

impl From<AttributeChange> for InstructionRecord {
    fn from(change: AttributeChange) -> Self {
        InstructionRecord::AttributeChange {
            bytes: change.bytes,
            description: change.description,
        }
    }
}

/// Ordered output of a conversion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructionStream {
    records: Vec<InstructionRecord>,
}

impl InstructionStream {
    /// Empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    ///
    /// A [`InstructionRecord::SetPosition`] identical to the last record is dropped. Returns
    /// `true` if the record was appended.
    pub fn push(&mut self, record: InstructionRecord) -> bool {
        if matches!(record, InstructionRecord::SetPosition { .. })
            && self.records.last() == Some(&record)
        {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Records in output order.
    pub fn records(&self) -> &[InstructionRecord] {
        &self.records
    }

    /// Iterate the records in output order.
    pub fn iter(&self) -> std::slice::Iter<'_, InstructionRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were produced.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the stream, yielding its records.
    pub fn into_records(self) -> Vec<InstructionRecord> {
        self.records
    }
}

impl IntoIterator for InstructionStream {
    type Item = InstructionRecord;
    type IntoIter = std::vec::IntoIter<InstructionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a InstructionStream {
    type Item = &'a InstructionRecord;
    type IntoIter = std::slice::Iter<'a, InstructionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
