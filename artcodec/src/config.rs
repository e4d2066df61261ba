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

use crate::consts::COMPRESS_THRESHOLD;

/// Conversion settings for a single artifact.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArtConfig {
    /// SGR color interpretation
    pub color_mode: ColorMode,
    /// Shortest run emitted in the count-tagged form
    pub compress_threshold: usize,
}

impl ArtConfig {
    /// Base 3270 colors, one attribute byte sequence per SGR parameter.
    pub fn basic() -> ArtConfig {
        ArtConfig {
            color_mode: ColorMode::Basic,
            compress_threshold: COMPRESS_THRESHOLD,
        }
    }

    /// x3270 extended palette with persistent bold and dim.
    pub fn extended() -> ArtConfig {
        ArtConfig {
            color_mode: ColorMode::Extended,
            compress_threshold: COMPRESS_THRESHOLD,
        }
    }

    /// Set the color mode
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    /// Set the compression threshold. Values below 2 are raised to 2.
    pub fn with_compress_threshold(mut self, threshold: usize) -> Self {
        self.compress_threshold = threshold.max(2);
        self
    }
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self::basic()
    }
}

/// How SGR parameters are mapped onto 3270 Set Attribute orders.
///
/// - **Basic**: the eight base 3270 colors. Bold, dim and blink map onto extended highlighting.
/// - **Extended**: the sixteen x3270 colors. Bold and dim switch the remembered foreground
///   between its normal and intense variants rather than emitting a highlight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Base 3270 colors.
    #[default]
    Basic,
    /// x3270 extended colors.
    Extended,
}

impl ColorMode {
    /// Returns `true` if this is [`ColorMode::Extended`].
    pub fn is_extended(&self) -> bool {
        matches!(self, ColorMode::Extended)
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Basic => write!(f, "basic"),
            ColorMode::Extended => write!(f, "extended"),
        }
    }
}
