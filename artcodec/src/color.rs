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

//! SGR interpretation into 3270 Set Attribute orders.

use crate::config::ColorMode;
use crate::consts::{attribute, highlight, order};
use crate::result::{ArtError, ArtResult};
use bytes::Bytes;

/// Named colors across both palettes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorId {
    /// Black
    Black,
    /// Red
    Red,
    /// Green
    Green,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Magenta
    Magenta,
    /// Cyan
    Cyan,
    /// White
    White,
    /// Orange (extended)
    Orange,
    /// Deep Blue (extended)
    DeepBlue,
    /// Purple (extended)
    Purple,
    /// Turquoise (extended)
    Turquoise,
    /// Grey (extended)
    Grey,
    /// Light Green (extended)
    LightGreen,
    /// Light Turquoise (extended)
    LightTurquoise,
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorId::Black => "Black",
            ColorId::Red => "Red",
            ColorId::Green => "Green",
            ColorId::Yellow => "Yellow",
            ColorId::Blue => "Blue",
            ColorId::Magenta => "Magenta",
            ColorId::Cyan => "Cyan",
            ColorId::White => "White",
            ColorId::Orange => "Orange",
            ColorId::DeepBlue => "Deep Blue",
            ColorId::Purple => "Purple",
            ColorId::Turquoise => "Turquoise",
            ColorId::Grey => "Grey",
            ColorId::LightGreen => "Light Green",
            ColorId::LightTurquoise => "Light Turquoise",
        };
        write!(f, "{name}")
    }
}

/// Which color a SGR parameter addresses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layer {
    /// SGR 30-37
    Foreground,
    /// SGR 40-47
    Background,
}

impl Layer {
    fn attribute(&self) -> u8 {
        match self {
            Layer::Foreground => attribute::FOREGROUND,
            Layer::Background => attribute::BACKGROUND,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Layer::Foreground => "(FG)",
            Layer::Background => "(BG)",
        }
    }
}

type Palette = [(u8, ColorId); 8];

// Indexed by SGR code minus 30 (or 40).
const BASIC: Palette = [
    (0xF0, ColorId::Black),
    (0xF2, ColorId::Red),
    (0xF4, ColorId::Green),
    (0xF6, ColorId::Yellow),
    (0xF1, ColorId::Blue),
    (0xF3, ColorId::Magenta),
    (0xF5, ColorId::Cyan),
    (0xF7, ColorId::White),
];

const NON_INTENSE_FG: Palette = [
    (0xF0, ColorId::Black),
    (0xF2, ColorId::Red),
    (0xF4, ColorId::Green),
    (0xFA, ColorId::Orange),
    (0xF9, ColorId::DeepBlue),
    (0xFB, ColorId::Purple),
    (0xF5, ColorId::Turquoise),
    (0xFE, ColorId::White),
];

const NON_INTENSE_BG: Palette = [
    (0xF8, ColorId::Black),
    (0xF2, ColorId::Red),
    (0xF4, ColorId::Green),
    (0xFA, ColorId::Orange),
    (0xF9, ColorId::DeepBlue),
    (0xFB, ColorId::Purple),
    (0xF5, ColorId::Turquoise),
    (0xF7, ColorId::White),
];

const INTENSE: Palette = [
    (0xFE, ColorId::Grey),
    (0xF2, ColorId::Red),
    (0xFC, ColorId::LightGreen),
    (0xF6, ColorId::Yellow),
    (0xF1, ColorId::Blue),
    (0xF3, ColorId::Magenta),
    (0xFD, ColorId::LightTurquoise),
    (0xF7, ColorId::White),
];

/// A Set Attribute order plus a label for listings and logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeChange {
    /// Encoded SA order
    pub bytes: Bytes,
    /// Human readable description
    pub description: String,
}

impl AttributeChange {
    fn new(attribute: u8, value: u8, description: impl Into<String>) -> AttributeChange {
        AttributeChange {
            bytes: Bytes::copy_from_slice(&[order::SET_ATTRIBUTE, attribute, value]),
            description: description.into(),
        }
    }

    fn reset(description: &str) -> AttributeChange {
        Self::new(attribute::ALL, highlight::DEFAULT, description)
    }

    fn highlight(value: u8, description: &str) -> AttributeChange {
        Self::new(attribute::HIGHLIGHT, value, description)
    }

    fn color(layer: Layer, (value, color): (u8, ColorId)) -> AttributeChange {
        Self::new(layer.attribute(), value, format!("{} {}", layer.label(), color))
    }
}

/// Output of a single SGR escape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendition {
    /// Attribute orders in parameter order
    pub changes: Vec<AttributeChange>,
    /// Recognised parameters that produce no attribute byte
    pub unrendered: Vec<u16>,
}

/// Persistent color state across SGR escapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorState {
    foreground: ColorId,
    bold: bool,
    extended: bool,
}

impl ColorState {
    /// Fresh state with a white foreground.
    pub fn new(mode: ColorMode) -> ColorState {
        ColorState {
            foreground: ColorId::White,
            bold: false,
            extended: mode.is_extended(),
        }
    }

    /// The remembered foreground color.
    pub fn foreground(&self) -> ColorId {
        self.foreground
    }

    /// Whether bold is in effect. Always `false` in basic mode.
    pub fn is_bold(&self) -> bool {
        self.bold
    }

    /// The color mode fixed at construction.
    pub fn mode(&self) -> ColorMode {
        if self.extended {
            ColorMode::Extended
        } else {
            ColorMode::Basic
        }
    }

    /// Interpret the parameters of one SGR escape.
    ///
    /// An empty parameter list is treated as a single `0`. If any parameter is unsupported the
    /// state is left untouched and no attribute orders are produced.
    pub fn apply(&mut self, params: &[u16]) -> ArtResult<Rendition> {
        let params = if params.is_empty() { &[0][..] } else { params };
        let sole = params.len() == 1;
        let mut next = *self;
        let mut rendition = Rendition::default();
        for &code in params {
            if next.extended {
                next.apply_extended(code, sole, &mut rendition)?;
            } else {
                rendition.changes.push(basic(code)?);
            }
        }
        *self = next;
        Ok(rendition)
    }

    fn apply_extended(&mut self, code: u16, sole: bool, rendition: &mut Rendition) -> ArtResult<()> {
        match code {
            0 => {
                self.bold = false;
                self.foreground = ColorId::White;
                rendition.changes.push(AttributeChange::reset("Normal Display"));
                rendition
                    .changes
                    .push(AttributeChange::color(Layer::Foreground, NON_INTENSE_FG[7]));
            }
            1 => {
                if sole {
                    if let Some(i) = palette_index(&NON_INTENSE_FG, self.foreground) {
                        rendition
                            .changes
                            .push(AttributeChange::color(Layer::Foreground, INTENSE[i]));
                        self.foreground = INTENSE[i].1;
                    }
                }
                self.bold = true;
            }
            2 => {
                if sole {
                    if let Some(i) = palette_index(&INTENSE, self.foreground) {
                        rendition
                            .changes
                            .push(AttributeChange::color(Layer::Foreground, NON_INTENSE_FG[i]));
                        self.foreground = NON_INTENSE_FG[i].1;
                    }
                }
                self.bold = false;
            }
            4 => rendition
                .changes
                .push(AttributeChange::highlight(highlight::UNDERSCORE, "Underline")),
            5 => rendition.unrendered.push(code),
            7 => rendition
                .changes
                .push(AttributeChange::highlight(highlight::REVERSE, "Reverse Video")),
            30..=37 => {
                let palette = if self.bold { &INTENSE } else { &NON_INTENSE_FG };
                let entry = palette[(code - 30) as usize];
                rendition
                    .changes
                    .push(AttributeChange::color(Layer::Foreground, entry));
                self.foreground = entry.1;
            }
            40..=47 => {
                let palette = if self.bold { &INTENSE } else { &NON_INTENSE_BG };
                let entry = palette[(code - 40) as usize];
                rendition
                    .changes
                    .push(AttributeChange::color(Layer::Background, entry));
            }
            _ => return Err(ArtError::UnsupportedAttribute { code }),
        }
        Ok(())
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(ColorMode::Basic)
    }
}

fn basic(code: u16) -> ArtResult<AttributeChange> {
    let change = match code {
        0 => AttributeChange::reset("Normal Display"),
        1 => AttributeChange::highlight(highlight::INTENSIFY, "Bold/Intense"),
        2 => AttributeChange::reset("Dim"),
        4 => AttributeChange::highlight(highlight::UNDERSCORE, "Underline"),
        5 => AttributeChange::highlight(highlight::BLINK, "Blink"),
        7 => AttributeChange::highlight(highlight::REVERSE, "Reverse Video"),
        30..=37 => AttributeChange::color(Layer::Foreground, BASIC[(code - 30) as usize]),
        40..=47 => AttributeChange::color(Layer::Background, BASIC[(code - 40) as usize]),
        _ => return Err(ArtError::UnsupportedAttribute { code }),
    };
    Ok(change)
}

fn palette_index(palette: &Palette, color: ColorId) -> Option<usize> {
    palette.iter().position(|(_, c)| *c == color)
}
