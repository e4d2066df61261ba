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

//! Renderer configuration.
//!
//! ```
//! use tn3270art_hlasm::{FieldColor, InputField, RenderConfig, Target};
//!
//! let config = RenderConfig::new(Target::Netsol)
//!     .with_job_name("logo")
//!     .with_member("netlogo")
//!     .with_input_field(InputField::default().with_color(FieldColor::Turquoise));
//! assert!(config.validate().is_ok());
//! ```

use crate::result::{RenderError, RenderResult};
use tn3270art_artcodec::consts::{SCREEN_COLS, SCREEN_ROWS};

const MAX_NAME_LENGTH: usize = 8;
const MAX_DATASET_LENGTH: usize = 44;

/// The system and program the job builds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// TSO program assembled on TK4- MVS 3.8j
    TsoTk4,
    /// TSO program assembled on z/OS
    TsoZos,
    /// TK4- VTAM NETSOL logon screen
    Netsol,
    /// z/OS VTAM USS table logon screen
    UssTable,
}

impl Target {
    /// Whether buffer addresses are set with the TK4- `$SBA` macro rather than hex constants.
    pub fn uses_sba_macro(&self) -> bool {
        matches!(self, Target::TsoTk4 | Target::Netsol)
    }

    /// Whether the screen ends in an unprotected input field.
    pub fn has_input_field(&self) -> bool {
        matches!(self, Target::Netsol | Target::UssTable)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::TsoTk4 => write!(f, "TSO (TK4-)"),
            Target::TsoZos => write!(f, "TSO (z/OS)"),
            Target::Netsol => write!(f, "TK4- NETSOL (VTAM)"),
            Target::UssTable => write!(f, "z/OS USSTable (VTAM)"),
        }
    }
}

/// Base 3270 colors available to the input field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldColor {
    /// Neutral white
    White,
    /// Red
    #[default]
    Red,
    /// Green
    Green,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Pink
    Pink,
    /// Turquoise
    Turquoise,
}

impl FieldColor {
    /// Every color, in the order listed in help text.
    pub const ALL: [FieldColor; 7] = [
        FieldColor::White,
        FieldColor::Red,
        FieldColor::Green,
        FieldColor::Yellow,
        FieldColor::Blue,
        FieldColor::Pink,
        FieldColor::Turquoise,
    ];

    /// The 3270 color attribute value.
    pub fn code(&self) -> u8 {
        match self {
            FieldColor::White => 0xF7,
            FieldColor::Red => 0xF2,
            FieldColor::Green => 0xF4,
            FieldColor::Yellow => 0xF6,
            FieldColor::Blue => 0xF1,
            FieldColor::Pink => 0xF3,
            FieldColor::Turquoise => 0xF5,
        }
    }

    /// Name as written on the command line and in listing comments.
    pub fn name(&self) -> &'static str {
        match self {
            FieldColor::White => "WHITE",
            FieldColor::Red => "RED",
            FieldColor::Green => "GREEN",
            FieldColor::Yellow => "YELLOW",
            FieldColor::Blue => "BLUE",
            FieldColor::Pink => "PINK",
            FieldColor::Turquoise => "TURQ",
        }
    }
}

impl std::fmt::Display for FieldColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for FieldColor {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RenderError::UnknownColor {
                value: s.to_string(),
            })
    }
}

/// The unprotected field that receives the cursor on logon screens.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputField {
    /// Row, 1..=24
    pub row: u16,
    /// Column, 1..=80
    pub col: u16,
    /// Field length in cells
    pub length: u16,
    /// Field color
    pub color: FieldColor,
}

impl InputField {
    /// Set the field position
    pub fn with_position(mut self, row: u16, col: u16) -> Self {
        self.row = row;
        self.col = col;
        self
    }

    /// Set the field length
    pub fn with_length(mut self, length: u16) -> Self {
        self.length = length;
        self
    }

    /// Set the field color
    pub fn with_color(mut self, color: FieldColor) -> Self {
        self.color = color;
        self
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self {
            row: 23,
            col: 20,
            length: 20,
            color: FieldColor::Red,
        }
    }
}

/// Job naming and target selection.
///
/// Names are upper cased as they are set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// What the job builds
    pub target: Target,
    /// Job card name
    pub job_name: String,
    /// Load module or copy book member name
    pub member: String,
    /// Target partitioned dataset
    pub dataset: String,
    /// Cursor input field for logon screens
    pub input_field: InputField,
}

impl RenderConfig {
    /// Default naming for `target`.
    pub fn new(target: Target) -> Self {
        Self {
            target,
            job_name: "AWESOME".to_string(),
            member: "ANSIART".to_string(),
            dataset: "ANSI.ART".to_string(),
            input_field: InputField::default(),
        }
    }

    /// Set the job card name
    pub fn with_job_name(mut self, job_name: impl AsRef<str>) -> Self {
        self.job_name = job_name.as_ref().to_ascii_uppercase();
        self
    }

    /// Set the member name
    pub fn with_member(mut self, member: impl AsRef<str>) -> Self {
        self.member = member.as_ref().to_ascii_uppercase();
        self
    }

    /// Set the dataset name
    pub fn with_dataset(mut self, dataset: impl AsRef<str>) -> Self {
        self.dataset = dataset.as_ref().to_ascii_uppercase();
        self
    }

    /// Set the input field
    pub fn with_input_field(mut self, input_field: InputField) -> Self {
        self.input_field = input_field;
        self
    }

    /// Check names and the input field against z/OS and screen limits.
    pub fn validate(&self) -> RenderResult<()> {
        if self.job_name.is_empty() || self.job_name.len() > MAX_NAME_LENGTH {
            return Err(RenderError::invalid(
                "job name",
                &self.job_name,
                format!("must be 1 to {MAX_NAME_LENGTH} characters"),
            ));
        }
        if self.member.is_empty() || self.member.len() > MAX_NAME_LENGTH {
            return Err(RenderError::invalid(
                "member",
                &self.member,
                format!("must be 1 to {MAX_NAME_LENGTH} characters"),
            ));
        }
        if self.dataset.is_empty() || self.dataset.len() > MAX_DATASET_LENGTH {
            return Err(RenderError::invalid(
                "dataset",
                &self.dataset,
                format!("must be 1 to {MAX_DATASET_LENGTH} characters"),
            ));
        }
        let field = &self.input_field;
        if !(1..=SCREEN_ROWS as u16).contains(&field.row) {
            return Err(RenderError::invalid(
                "row",
                field.row,
                format!("screen height is {SCREEN_ROWS}"),
            ));
        }
        if !(1..=SCREEN_COLS as u16).contains(&field.col) {
            return Err(RenderError::invalid(
                "column",
                field.col,
                format!("screen width is {SCREEN_COLS}"),
            ));
        }
        Ok(())
    }
}
