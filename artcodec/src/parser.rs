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

//! The escape interpreter.
//!
//! [`EscapeParser`] walks an artifact one byte at a time. Literal and graphic glyphs accumulate
//! in a pending buffer that is flushed through the [`RunCompressor`] whenever the glyph class
//! changes, a line ends, or an escape sequence begins. Escape sequences drive the [`Cursor`] and
//! [`ColorState`]. Every recoverable problem is logged and kept as a [`Diagnostic`].

use crate::color::ColorState;
use crate::compress::RunCompressor;
use crate::config::ArtConfig;
use crate::consts::{CR, CSI, EBCDIC_SPACE, ESC, FILLER, LF, MAX_SEQUENCE_LENGTH};
use crate::cursor::{Axis, Cursor, Position};
use crate::escape::{EscapeCommand, EscapeTerminator};
use crate::glyph::{GlyphClass, GlyphTable};
use crate::instruction::{InstructionRecord, InstructionStream};
use crate::result::ArtError;
use bytes::{Bytes, BytesMut};
use tracing::{debug, instrument, trace, warn};

/// Internal state machine states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Glyphs, line feeds and escape introducers.
    Normal,
    /// Accumulating escape parameters until a terminator arrives.
    InEscape,
}

/// Interpreter state threaded through every step of a conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserState {
    /// Where the next glyph lands
    pub cursor: Cursor,
    /// Remembered attributes
    pub color: ColorState,
}

/// A recovered condition and where it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Offset of the offending byte, or of the escape introducer
    pub offset: usize,
    /// Cursor position when the condition was raised
    pub position: Position,
    /// What went wrong
    pub error: ArtError,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "offset {} {}: {}", self.offset, self.position, self.error)
    }
}

/// Result of converting one artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Screen buffer instructions in output order
    pub instructions: InstructionStream,
    /// Conditions recovered from during the conversion
    pub diagnostics: Vec<Diagnostic>,
}

/// Byte at a time ANSI art interpreter.
pub struct EscapeParser {
    config: ArtConfig,
    compressor: RunCompressor,
    state: ParserState,
    mode: State,
    /// Escape parameter bytes, without the CSI introducer.
    params: Vec<u8>,
    escape_start: usize,
    /// Pending glyphs. CP437 codepoints in graphic mode, ASCII otherwise.
    pending: Vec<u8>,
    graphic: bool,
    offset: usize,
    output: InstructionStream,
    diagnostics: Vec<Diagnostic>,
}

impl EscapeParser {
    /// Create a parser with the cursor at (1,1) and default attributes.
    pub fn new(config: ArtConfig) -> Self {
        Self {
            compressor: RunCompressor::new(config.compress_threshold),
            state: ParserState {
                cursor: Cursor::new(),
                color: ColorState::new(config.color_mode),
            },
            config,
            mode: State::Normal,
            params: Vec::new(),
            escape_start: 0,
            pending: Vec::new(),
            graphic: false,
            offset: 0,
            output: InstructionStream::new(),
            diagnostics: Vec::new(),
        }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &ArtConfig {
        &self.config
    }

    /// Current cursor and color state.
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Process the next byte of the artifact.
    pub fn next(&mut self, byte: u8) {
        match (self.mode, byte) {
            (_, LF) => {
                self.flush();
                let position = self.state.cursor.line_feed();
                self.output.push(InstructionRecord::set_position(position));
            }
            (_, CR) => {}
            (State::Normal, ESC) => {
                self.flush();
                self.begin_escape();
            }
            (State::Normal, _) => self.process_glyph(byte),
            (State::InEscape, _) => self.process_escape(byte),
        }
        self.offset += 1;
    }

    /// Process a slice of the artifact.
    pub fn feed(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.next(*byte);
        }
    }

    /// Flush pending glyphs and return the finished conversion.
    ///
    /// An escape sequence still open at end of input is discarded.
    pub fn finish(mut self) -> Conversion {
        if self.mode == State::InEscape {
            let error = ArtError::malformed(&self.params, "unterminated at end of input");
            self.record(error, self.escape_start);
            self.mode = State::Normal;
        }
        self.flush();
        Conversion {
            instructions: self.output,
            diagnostics: self.diagnostics,
        }
    }

    fn process_glyph(&mut self, byte: u8) {
        let (graphic, symbol) = match GlyphTable::global().classify(byte) {
            Some(GlyphClass::Graphic) => (true, byte),
            Some(GlyphClass::Literal) => (false, byte),
            None => {
                self.record(ArtError::UnsupportedGlyph { byte }, self.offset);
                (false, FILLER)
            }
        };
        if graphic != self.graphic {
            self.flush();
            self.graphic = graphic;
        }
        self.pending.push(symbol);
        self.state.cursor.advance();
    }

    fn begin_escape(&mut self) {
        self.mode = State::InEscape;
        self.params.clear();
        self.escape_start = self.offset;
    }

    fn process_escape(&mut self, byte: u8) {
        if byte == ESC {
            let error = ArtError::malformed(&self.params, "interrupted by another escape");
            self.record(error, self.escape_start);
            self.begin_escape();
            return;
        }
        if let Some(terminator) = EscapeTerminator::from_byte(byte) {
            self.mode = State::Normal;
            let params = std::mem::take(&mut self.params);
            self.dispatch(terminator, &params);
            return;
        }
        if byte == CSI && self.offset == self.escape_start + 1 {
            return;
        }
        self.params.push(byte);
        if self.params.len() > MAX_SEQUENCE_LENGTH {
            let error = ArtError::malformed(
                &self.params[..16],
                format!("longer than {MAX_SEQUENCE_LENGTH} bytes"),
            );
            self.record(error, self.escape_start);
            self.params.clear();
            self.mode = State::Normal;
        }
    }

    fn dispatch(&mut self, terminator: EscapeTerminator, params: &[u8]) {
        let command = match EscapeCommand::parse(terminator, params) {
            Ok(command) => command,
            Err(error) => {
                self.record(error, self.escape_start);
                return;
            }
        };
        debug!(
            position = %self.state.cursor.position(),
            params = %String::from_utf8_lossy(params),
            "{} ({})",
            terminator,
            terminator.description()
        );
        let cursor = &mut self.state.cursor;
        let moved = match command {
            EscapeCommand::CursorUp(n) => cursor.move_relative(Axis::Row, -(n as i32)),
            EscapeCommand::CursorDown(n) => cursor.move_relative(Axis::Row, n as i32),
            EscapeCommand::CursorForward(n) => cursor.move_relative(Axis::Column, n as i32),
            EscapeCommand::CursorBack(n) => cursor.move_relative(Axis::Column, -(n as i32)),
            EscapeCommand::CursorNextLine(n) => cursor.move_to_line_start_relative(n as i32),
            EscapeCommand::CursorPreviousLine(n) => cursor.move_to_line_start_relative(-(n as i32)),
            EscapeCommand::CursorHorizontalAbsolute(n) => cursor.set_column(n),
            EscapeCommand::CursorPosition { row, col } => cursor.set_absolute(row, col),
            EscapeCommand::SelectGraphicRendition(codes) => {
                self.select_graphic_rendition(&codes);
                return;
            }
            EscapeCommand::Ignored(terminator) => {
                debug!("ignoring {}", terminator.description());
                return;
            }
        };
        self.output.push(InstructionRecord::set_position(moved));
    }

    fn select_graphic_rendition(&mut self, codes: &[u16]) {
        match self.state.color.apply(codes) {
            Ok(rendition) => {
                for change in rendition.changes {
                    debug!(sa = ?change.bytes, "{}", change.description);
                    self.output.push(change.into());
                }
                for code in rendition.unrendered {
                    let mode = self.config.color_mode;
                    self.record(ArtError::AttributeNotRendered { code, mode }, self.escape_start);
                }
            }
            Err(error) => self.record(error, self.escape_start),
        }
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let symbols = std::mem::take(&mut self.pending);
        trace!(
            graphic = self.graphic,
            len = symbols.len(),
            "flushing {:?}",
            String::from_utf8_lossy(&symbols)
        );
        let table = GlyphTable::global();
        for run in self.compressor.compress(&symbols) {
            let repeat_count = run.is_compressed().then_some(run.count);
            let record = if self.graphic {
                let mut bytes = BytesMut::with_capacity(run.content.len() * 2);
                for symbol in &run.content {
                    bytes.extend_from_slice(table.encode(*symbol).unwrap_or(&[EBCDIC_SPACE]));
                }
                InstructionRecord::GraphicLiteral {
                    bytes: bytes.freeze(),
                    repeat_count,
                }
            } else {
                InstructionRecord::TextLiteral {
                    bytes: Bytes::from(run.content),
                    repeat_count,
                }
            };
            self.output.push(record);
        }
    }

    fn record(&mut self, error: ArtError, offset: usize) {
        let position = self.state.cursor.position();
        warn!(offset, position = %position, "{}", error);
        self.diagnostics.push(Diagnostic {
            offset,
            position,
            error,
        });
    }
}

/// Convert a complete artifact.
#[instrument(skip_all, fields(len = input.len(), mode = %config.color_mode))]
pub fn convert(input: &[u8], config: &ArtConfig) -> Conversion {
    let mut parser = EscapeParser::new(config.clone());
    parser.feed(input);
    let conversion = parser.finish();
    debug!(
        records = conversion.instructions.len(),
        diagnostics = conversion.diagnostics.len(),
        "conversion complete"
    );
    conversion
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorMode;
    use tracing_test::traced_test;

    fn text(s: &str, repeat_count: Option<usize>) -> InstructionRecord {
        InstructionRecord::TextLiteral {
            bytes: Bytes::copy_from_slice(s.as_bytes()),
            repeat_count,
        }
    }

    fn graphic(bytes: &[u8], repeat_count: Option<usize>) -> InstructionRecord {
        InstructionRecord::GraphicLiteral {
            bytes: Bytes::copy_from_slice(bytes),
            repeat_count,
        }
    }

    fn pos(row: u8, col: u8) -> InstructionRecord {
        InstructionRecord::SetPosition { row, col }
    }

    fn records(input: &[u8]) -> Vec<InstructionRecord> {
        convert(input, &ArtConfig::default())
            .instructions
            .into_records()
    }

    // ============================================================================
    // Text Tests
    // ============================================================================

    #[test]
    fn test_plain_text() {
        assert_eq!(records(b"Hello"), vec![text("Hello", None)]);
    }

    #[test]
    fn test_carriage_return_ignored() {
        assert_eq!(records(b"ab\r\ncd"), vec![text("ab", None), pos(2, 1), text("cd", None)]);
    }

    #[test]
    fn test_mode_switches_flush() {
        let out = records(b"ab\xC4\xC4c");
        assert_eq!(
            out,
            vec![
                text("ab", None),
                graphic(&[0x08, 0xA2, 0x08, 0xA2], None),
                text("c", None),
            ]
        );
    }

    #[test]
    fn test_graphic_run_compresses() {
        let out = records(b"\xDB\xDB\xDB\xDB\xDB\xDB");
        assert_eq!(out, vec![graphic(&[0x08, 0x95], Some(6))]);
    }

    #[test]
    fn test_cursor_advances_per_glyph() {
        let mut parser = EscapeParser::new(ArtConfig::default());
        parser.feed(b"ab\xB0");
        assert_eq!(parser.state().cursor.position(), Position::new(1, 4));
    }

    // ============================================================================
    // Escape Tests
    // ============================================================================

    #[test]
    fn test_position_escape_emits_set_position() {
        assert_eq!(records(b"\x1b[5;10HX"), vec![pos(5, 10), text("X", None)]);
    }

    #[test]
    fn test_relative_moves() {
        let out = records(b"\x1b[3B\x1b[2C\x1b[A\x1b[D");
        assert_eq!(out, vec![pos(4, 1), pos(4, 3), pos(3, 3), pos(3, 2)]);
    }

    #[test]
    fn test_line_moves_reset_column() {
        let out = records(b"abc\x1b[2Ex\x1b[1Fy\x1b[40G");
        assert_eq!(
            out,
            vec![
                text("abc", None),
                pos(3, 1),
                text("x", None),
                pos(2, 1),
                text("y", None),
                pos(2, 40),
            ]
        );
    }

    #[test]
    fn test_duplicate_positions_suppressed() {
        let out = records(b"\x1b[2;1H\n\x1b[3;1H");
        assert_eq!(out, vec![pos(2, 1), pos(3, 1)]);
    }

    #[test]
    fn test_ignored_escapes_emit_nothing() {
        let out = records(b"\x1b[2J\x1b[s\x1b[u\x1b[K\x1b[?7hX");
        assert_eq!(out, vec![text("X", None)]);
    }

    #[test]
    fn test_escape_flushes_pending_text() {
        let out = records(b"ab\x1b[31mcd");
        assert_eq!(
            out,
            vec![
                text("ab", None),
                InstructionRecord::AttributeChange {
                    bytes: Bytes::from_static(&[0x28, 0x42, 0xF2]),
                    description: "(FG) Red".to_string(),
                },
                text("cd", None),
            ]
        );
    }

    #[test]
    fn test_dangling_escape_discarded() {
        let conversion = convert(b"ab\x1b[3", &ArtConfig::default());
        assert_eq!(conversion.instructions.into_records(), vec![text("ab", None)]);
        assert_eq!(conversion.diagnostics.len(), 1);
        assert_eq!(conversion.diagnostics[0].offset, 2);
    }

    #[test]
    fn test_overlong_escape_abandoned() {
        let mut input = b"\x1b[".to_vec();
        input.extend(std::iter::repeat_n(b'1', MAX_SEQUENCE_LENGTH + 1));
        input.extend_from_slice(b"Z");
        let conversion = convert(&input, &ArtConfig::default());
        assert!(matches!(
            conversion.diagnostics[0].error,
            ArtError::MalformedEscape { .. }
        ));
        assert_eq!(conversion.instructions.into_records(), vec![text("Z", None)]);
    }

    #[test]
    fn test_nested_escape_restarts() {
        let conversion = convert(b"\x1b[12\x1b[2;2H", &ArtConfig::default());
        assert_eq!(conversion.instructions.into_records(), vec![pos(2, 2)]);
        assert_eq!(conversion.diagnostics.len(), 1);
    }

    // ============================================================================
    // Recovery Tests
    // ============================================================================

    #[test]
    #[traced_test]
    fn test_unsupported_glyph_substitutes_filler() {
        let conversion = convert(b"a\x1Ab", &ArtConfig::default());
        assert_eq!(conversion.instructions.into_records(), vec![text("a b", None)]);
        assert_eq!(
            conversion.diagnostics,
            vec![Diagnostic {
                offset: 1,
                position: Position::new(1, 2),
                error: ArtError::UnsupportedGlyph { byte: 0x1A },
            }]
        );
        assert!(logs_contain("Unsupported glyph 0x1A"));
    }

    #[test]
    #[traced_test]
    fn test_malformed_escape_is_skipped() {
        let conversion = convert(b"\x1b[a;bHX", &ArtConfig::default());
        assert_eq!(conversion.instructions.into_records(), vec![text("X", None)]);
        assert!(matches!(
            conversion.diagnostics[0].error,
            ArtError::MalformedEscape { .. }
        ));
        assert!(logs_contain("Malformed escape sequence"));
    }

    #[test]
    fn test_unsupported_attribute_skips_whole_escape() {
        let conversion = convert(b"\x1b[31;38mX", &ArtConfig::default());
        assert_eq!(conversion.instructions.into_records(), vec![text("X", None)]);
        assert_eq!(
            conversion.diagnostics[0].error,
            ArtError::UnsupportedAttribute { code: 38 }
        );
    }

    #[test]
    #[traced_test]
    fn test_extended_blink_is_reported() {
        let conversion = convert(b"\x1b[5mX", &ArtConfig::extended());
        assert_eq!(conversion.instructions.into_records(), vec![text("X", None)]);
        assert_eq!(
            conversion.diagnostics[0].error,
            ArtError::AttributeNotRendered {
                code: 5,
                mode: ColorMode::Extended
            }
        );
        assert!(logs_contain("not rendered in extended mode"));
    }
}
