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

//! The 128 byte SAUCE trailer and its optional comment block.
//!
//! ```text
//! ... art ... 0x1A  [ "COMNT" 64 * n ]  "SAUCE" "00" title[35] author[20] group[20] date[8]
//!                                         file_size:u32 data_type file_type tinfo1..4:u16
//!                                         comments flags tinfos[22]
//! ```
//!
//! All integers are little endian. Character fields are space padded CP437.

use crate::result::{SauceError, SauceResult};
use byteorder::{LittleEndian, WriteBytesExt};
use bytes::{Buf, BufMut};
use chrono::NaiveDate;
use std::io::Write;
use tracing::{debug, trace};

/// Length of the SAUCE record.
pub const RECORD_LENGTH: usize = 128;

/// Length of a single comment line.
pub const COMMENT_LINE_LENGTH: usize = 64;

/// End of file marker that precedes the metadata.
pub const EOF_MARKER: u8 = 0x1A;

const SAUCE_ID: &[u8; 5] = b"SAUCE";
const COMMENT_ID: &[u8; 5] = b"COMNT";
const VERSION: &[u8; 2] = b"00";
const DATE_FORMAT: &str = "%Y%m%d";

/// Metadata attached to the end of an ANSI art file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SauceRecord {
    /// Title of the piece
    pub title: String,
    /// Artist handle
    pub author: String,
    /// Group or company
    pub group: String,
    /// Creation date as stored, `CCYYMMDD`
    pub date: String,
    /// Size of the art without the metadata
    pub file_size: u32,
    /// Data type, 1 is character art
    pub data_type: u8,
    /// File type, 1 is ANSi for character art
    pub file_type: u8,
    /// Type dependent numeric information
    pub tinfo: [u16; 4],
    /// Comment line count as stored in the record
    pub comment_lines: u8,
    /// Type dependent flags
    pub flags: u8,
    /// Type dependent string, usually a font name
    pub tinfos: String,
    /// Comment lines, when the comment block was present
    pub comments: Vec<String>,
}

impl SauceRecord {
    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the group
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the creation date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date.format(DATE_FORMAT).to_string();
        self
    }

    /// Append a comment line
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self.comment_lines = self.comments.len().min(u8::MAX as usize) as u8;
        self
    }

    /// The creation date, if it is a valid `CCYYMMDD` date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Returns `true` if none of the descriptive fields are set.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.author.is_empty()
            && self.group.is_empty()
            && self.date.is_empty()
    }

    /// Decode a 128 byte record. The comment block is not read.
    pub fn decode<T: Buf>(src: &mut T) -> SauceResult<SauceRecord> {
        if src.remaining() < RECORD_LENGTH {
            return Err(SauceError::InsufficientData {
                required: RECORD_LENGTH,
                available: src.remaining(),
            });
        }
        let mut id = [0u8; 5];
        src.copy_to_slice(&mut id);
        if &id != SAUCE_ID {
            return Err(SauceError::BadSignature);
        }
        let mut version = [0u8; 2];
        src.copy_to_slice(&mut version);
        if &version != VERSION {
            return Err(SauceError::UnsupportedVersion {
                version: String::from_utf8_lossy(&version).into_owned(),
            });
        }
        Ok(SauceRecord {
            title: read_text(src, 35),
            author: read_text(src, 20),
            group: read_text(src, 20),
            date: read_text(src, 8),
            file_size: src.get_u32_le(),
            data_type: src.get_u8(),
            file_type: src.get_u8(),
            tinfo: [
                src.get_u16_le(),
                src.get_u16_le(),
                src.get_u16_le(),
                src.get_u16_le(),
            ],
            comment_lines: src.get_u8(),
            flags: src.get_u8(),
            tinfos: read_text(src, 22),
            comments: Vec::new(),
        })
    }

    /// Encode the 128 byte record into a buffer.
    pub fn encode<T: BufMut>(&self, dst: &mut T) -> SauceResult<usize> {
        Ok(self.write(&mut dst.writer())?)
    }

    /// Write the 128 byte record.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<usize> {
        writer.write_all(SAUCE_ID)?;
        writer.write_all(VERSION)?;
        write_text(writer, &self.title, 35, b' ')?;
        write_text(writer, &self.author, 20, b' ')?;
        write_text(writer, &self.group, 20, b' ')?;
        write_text(writer, &self.date, 8, b' ')?;
        writer.write_u32::<LittleEndian>(self.file_size)?;
        writer.write_u8(self.data_type)?;
        writer.write_u8(self.file_type)?;
        for value in self.tinfo {
            writer.write_u16::<LittleEndian>(value)?;
        }
        writer.write_u8(self.comment_lines)?;
        writer.write_u8(self.flags)?;
        write_text(writer, &self.tinfos, 22, 0)?;
        Ok(RECORD_LENGTH)
    }

    /// Write the complete trailer: end of file marker, comment block and record.
    pub fn write_trailer<W: Write>(&self, writer: &mut W) -> std::io::Result<usize> {
        let mut written = 1;
        writer.write_u8(EOF_MARKER)?;
        if !self.comments.is_empty() {
            writer.write_all(COMMENT_ID)?;
            written += COMMENT_ID.len();
            for comment in &self.comments {
                write_text(writer, comment, COMMENT_LINE_LENGTH, b' ')?;
                written += COMMENT_LINE_LENGTH;
            }
        }
        written += self.write(writer)?;
        Ok(written)
    }

    /// Locate and decode the record at the end of a file.
    ///
    /// Returns `None` if the file carries no valid record.
    pub fn find(data: &[u8]) -> Option<SauceRecord> {
        let start = data.len().checked_sub(RECORD_LENGTH)?;
        let mut tail = &data[start..];
        let mut record = match SauceRecord::decode(&mut tail) {
            Ok(record) => record,
            Err(error) => {
                trace!("no SAUCE record: {}", error);
                return None;
            }
        };
        if let Some(block) = comment_block(data, start, record.comment_lines) {
            record.comments = block.chunks(COMMENT_LINE_LENGTH).map(decode_text).collect();
        }
        debug!(
            title = %record.title,
            author = %record.author,
            group = %record.group,
            date = %record.date,
            "found SAUCE record"
        );
        Some(record)
    }
}

/// The art without its end of file marker, comment block and SAUCE record.
///
/// Files without a record are returned unchanged.
pub fn strip(data: &[u8]) -> &[u8] {
    let Some(record) = SauceRecord::find(data) else {
        return data;
    };
    let mut end = data.len() - RECORD_LENGTH;
    if let Some(block) = comment_block(data, end, record.comment_lines) {
        end -= COMMENT_ID.len() + block.len();
    }
    let art = &data[..end];
    art.strip_suffix(&[EOF_MARKER]).unwrap_or(art)
}

/// The art up to the first end of file marker.
///
/// Anything after the marker is metadata or editor padding, with or without a SAUCE record.
pub fn content(data: &[u8]) -> &[u8] {
    match data.iter().position(|b| *b == EOF_MARKER) {
        Some(end) => &data[..end],
        None => data,
    }
}

fn comment_block(data: &[u8], record_start: usize, lines: u8) -> Option<&[u8]> {
    if lines == 0 {
        return None;
    }
    let len = COMMENT_ID.len() + COMMENT_LINE_LENGTH * lines as usize;
    let start = record_start.checked_sub(len)?;
    data[start..record_start].strip_prefix(COMMENT_ID)
}

fn read_text<T: Buf>(src: &mut T, len: usize) -> String {
    let bytes = src.copy_to_bytes(len);
    decode_text(&bytes)
}

// NULs are dropped and anything outside printable ASCII becomes '?'. These fields end up in JCL
// comment cards, which only carry the invariant EBCDIC character set, and one '?' per byte keeps
// the column count of the original field.
fn decode_text(bytes: &[u8]) -> String {
    let text: String = bytes
        .iter()
        .filter(|b| **b != 0)
        .map(|b| {
            if b.is_ascii() && !b.is_ascii_control() {
                *b as char
            } else {
                '?'
            }
        })
        .collect();
    text.trim_end().to_string()
}

fn write_text<W: Write>(writer: &mut W, text: &str, len: usize, pad: u8) -> std::io::Result<()> {
    let mut field = vec![pad; len];
    for (slot, c) in field.iter_mut().zip(text.chars()) {
        *slot = if c.is_ascii() { c as u8 } else { b'?' };
    }
    writer.write_all(&field)
}
