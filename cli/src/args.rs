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

use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use tn3270art_artcodec::{ArtConfig, ColorMode};
use tn3270art_hlasm::{FieldColor, InputField, RenderConfig, Target};

const LONG_ABOUT: &str = r#"Converts CP437 ANSI art into IBM 3270 screen buffer orders and writes
the HLASM and JCL that assemble it into a TSO program, the TK4- NETSOL logon
screen or a z/OS USS table.

EXAMPLES:
    # TSO program for TK4-, printed to stdout
    ansi2ebcdic --tso --tk4 logo.ans

    # USS table with a turquoise input field, saved to a file
    ansi2ebcdic --usstable --color turq --file uss.jcl logo.ans"#;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "ansi2ebcdic")]
#[command(author, version)]
#[command(about = "ANSi art to EBCDiC")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = "Check out https://16colo.rs for some great art")]
#[command(group(ArgGroup::new("action").required(true).args(["tso", "netsol", "usstable"])))]
#[command(group(ArgGroup::new("system").args(["tk4", "zos"])))]
pub struct Args {
    /// Print lots of debugging statements
    #[arg(short, long)]
    pub debug: bool,

    /// Save HLASM/JCL to a file instead of STDOUT
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Member name of the assembled art that will be placed in --dataset
    #[arg(long, default_value = "ANSIART")]
    pub member: String,

    /// Location where the assembled art member will be stored, must be a PDS
    #[arg(long, default_value = "ANSI.ART")]
    pub dataset: String,

    /// The name of the job on the jobcard (//jobname)
    #[arg(long, default_value = "AWESOME")]
    pub jobname: String,

    /// Generates the required JCL and HLASM to create your program on TK4 TSO
    #[arg(long)]
    pub tk4: bool,

    /// Generates the required JCL and HLASM to create your program on z/OS TSO
    #[arg(long)]
    pub zos: bool,

    /// Cursor location for user input row
    #[arg(long = "ROW", default_value_t = 23)]
    pub row: u16,

    /// Cursor location for user input column
    #[arg(long = "COL", default_value_t = 20)]
    pub col: u16,

    /// Cursor input field size
    #[arg(long, default_value_t = 20)]
    pub input: u16,

    /// Cursor input field color: WHITE, RED, GREEN, YELLOW, BLUE, PINK or TURQ
    #[arg(long, default_value = "RED")]
    pub color: FieldColor,

    /// Use extended graphic colors (Black Deep blue Orange Purple Pale green Pale turquoise Grey)
    /// like those supported by x3270
    #[arg(long)]
    pub extended: bool,

    /// Creates a TSO program you can use with "call"
    #[arg(long, requires = "system")]
    pub tso: bool,

    /// Creates the JCL required to replace the TK4 VTAM screen
    #[arg(long)]
    pub netsol: bool,

    /// Creates the JCL to make a USSTABLE
    #[arg(long)]
    pub usstable: bool,

    /// Your ANSI art file you wish to convert
    #[arg(value_name = "ANSI_FILE")]
    pub ansi_file: PathBuf,
}

impl Args {
    /// Output target selected by the action and system flags.
    pub fn target(&self) -> Target {
        if self.tso {
            if self.tk4 { Target::TsoTk4 } else { Target::TsoZos }
        } else if self.netsol {
            Target::Netsol
        } else {
            Target::UssTable
        }
    }

    /// Interpreter configuration for the selected color mode.
    pub fn art_config(&self) -> ArtConfig {
        let mode = if self.extended {
            ColorMode::Extended
        } else {
            ColorMode::Basic
        };
        ArtConfig::default().with_color_mode(mode)
    }

    /// Job rendering configuration. Validation happens in `Renderer::new`.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.target())
            .with_job_name(&self.jobname)
            .with_member(&self.member)
            .with_dataset(&self.dataset)
            .with_input_field(
                InputField::default()
                    .with_position(self.row, self.col)
                    .with_length(self.input)
                    .with_color(self.color),
            )
    }
}
