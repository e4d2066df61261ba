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

//! Interprets CP437 ANSI art into an ordered stream of IBM 3270 screen buffer instructions.
//!
//! The entry point is [`convert`], which runs an [`EscapeParser`] over a complete artifact and
//! returns a [`Conversion`]: the [`InstructionStream`] plus every condition that was recovered
//! from along the way.
//!
//! ```
//! use tn3270art_artcodec::{ArtConfig, InstructionRecord, convert};
//!
//! let conversion = convert(b"AAAAA\n", &ArtConfig::default());
//! assert_eq!(
//!     conversion.instructions.records()[1],
//!     InstructionRecord::SetPosition { row: 2, col: 1 }
//! );
//! ```

mod color;
mod compress;
mod config;
pub mod consts;
mod cursor;
mod escape;
mod glyph;
mod instruction;
mod parser;
mod result;

pub use self::color::{AttributeChange, ColorId, ColorState, Layer, Rendition};
pub use self::compress::{Run, RunCompressor};
pub use self::config::{ArtConfig, ColorMode};
pub use self::cursor::{Axis, Cursor, Position, encode_address};
pub use self::escape::{EscapeCommand, EscapeTerminator};
pub use self::glyph::{GlyphClass, GlyphTable};
pub use self::instruction::{InstructionRecord, InstructionStream};
pub use self::parser::{Conversion, Diagnostic, EscapeParser, ParserState, convert};
pub use self::result::{ArtError, ArtResult};
