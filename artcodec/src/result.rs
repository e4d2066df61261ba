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

//! Error types for the artcodec crate.
//!
//! None of these are fatal to a conversion. The parser records each one as a
//! [`Diagnostic`](crate::Diagnostic) and carries on with the next byte.

use crate::config::ColorMode;
use thiserror::Error;

/// Result type alias for operations that may fail with an [`ArtError`].
pub type ArtResult<T> = Result<T, ArtError>;

/// Conditions raised while interpreting an artifact.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArtError {
    /// The byte has neither a literal nor a graphic rendering.
    ///
    /// The parser substitutes a filler cell and continues.
    #[error("Unsupported glyph 0x{byte:02X}")]
    UnsupportedGlyph {
        /// The CP437 codepoint that could not be encoded
        byte: u8,
    },

    /// The SGR parameter is not modelled by the selected color mode.
    ///
    /// The parser skips the whole escape sequence that carried it.
    #[error("Unsupported attribute code {code}")]
    UnsupportedAttribute {
        /// The SGR parameter value
        code: u16,
    },

    /// The SGR parameter is understood but has no attribute byte in the selected color mode.
    #[error("Attribute code {code} is not rendered in {mode} mode")]
    AttributeNotRendered {
        /// The SGR parameter value
        code: u16,
        /// The color mode in effect
        mode: ColorMode,
    },

    /// The escape sequence parameters could not be interpreted.
    ///
    /// The parser skips the escape sequence.
    #[error("Malformed escape sequence '{sequence}': {reason}")]
    MalformedEscape {
        /// The parameter bytes and terminator, lossily decoded
        sequence: String,
        /// Description of what's wrong with the sequence
        reason: String,
    },
}

impl ArtError {
    /// Check if the condition caused an escape sequence to be skipped entirely.
    pub fn skips_escape(&self) -> bool {
        matches!(
            self,
            ArtError::UnsupportedAttribute { .. } | ArtError::MalformedEscape { .. }
        )
    }

    pub(crate) fn malformed(sequence: &[u8], reason: impl Into<String>) -> Self {
        ArtError::MalformedEscape {
            sequence: String::from_utf8_lossy(sequence).into_owned(),
            reason: reason.into(),
        }
    }
}
