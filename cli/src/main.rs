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

//! `ansi2ebcdic`: converts an ANSI art file into the JCL and HLASM that display it on a 3270.

mod args;
mod telemetry;

use crate::args::Args;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tn3270art_artcodec::convert;
use tn3270art_hlasm::{JobContext, RenderConfig, RenderError, Renderer};
use tn3270art_sauce::{SauceRecord, content};
use tracing::{debug, info};

/// Exit codes based on BSD sysexits.h
mod exit_codes {
    pub const USAGE: u8 = 64; // EX_USAGE: command line usage error
    pub const NOINPUT: u8 = 66; // EX_NOINPUT: cannot open input
    pub const CANTCREAT: u8 = 73; // EX_CANTCREAT: can't create output
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Render(_) => exit_codes::USAGE,
            CliError::Read { .. } => exit_codes::NOINPUT,
            CliError::Write { .. } => exit_codes::CANTCREAT,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    telemetry::init_tracing(if args.debug { "debug" } else { "warn" });

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let renderer = Renderer::new(args.render_config())?;

    let data = std::fs::read(&args.ansi_file).map_err(|source| CliError::Read {
        path: args.ansi_file.clone(),
        source,
    })?;
    let sauce = SauceRecord::find(&data);
    let art = content(&data);
    debug!(bytes = art.len(), sauce = sauce.is_some(), "read artifact");

    print_summary(args, renderer.config(), sauce.as_ref());

    let conversion = convert(art, &args.art_config());
    if !conversion.diagnostics.is_empty() {
        eprintln!(
            "[!] {} escape or glyph problems were skipped, run with --debug for details",
            conversion.diagnostics.len()
        );
    }

    let file_name = args
        .ansi_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let context = JobContext::new(file_name)
        .with_sauce(sauce)
        .with_command_line(std::env::args().skip(1));
    let job = renderer.render(&conversion.instructions, &context);
    info!(records = conversion.instructions.len(), "rendered job");

    match &args.file {
        Some(path) => {
            eprintln!("[+] Saving JCL + HLASM to {}", path.display());
            std::fs::write(path, job).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
        }
        None => {
            eprintln!("[+] Printing JCL + HLASM");
            println!("{job}");
        }
    }
    Ok(())
}

fn print_summary(args: &Args, config: &RenderConfig, sauce: Option<&SauceRecord>) {
    eprintln!("[+] ANSi to EBCDiC Starting");
    eprintln!("[+] Arguments:\n");
    eprintln!("    ANSi File:\t{}", args.ansi_file.display());
    if args.extended {
        eprintln!("    Extended:\t\tTrue");
    }
    eprintln!("    Type:\t\t{}", config.target);
    eprintln!("    Jobname:\t{}", config.job_name);
    eprintln!("    Dataset:\t{}", config.dataset);
    eprintln!("    Member:\t\t{}", config.member);
    if config.target.has_input_field() {
        let field = &config.input_field;
        eprintln!("    Cursor: (IC)\n\tLocation:\t{},{}", field.row, field.col);
        eprintln!("\tInput length:\t{}", field.length);
        eprintln!("\tInput Color:\t{}", field.color);
    }
    eprintln!("\n[+] ANSi File Info:\n");
    match sauce {
        Some(sauce) => {
            eprintln!("    Original Title:\t{}", sauce.title);
            eprintln!("    Original Author:\t{}", sauce.author);
            eprintln!("    Original Group:\t{}", sauce.group);
            eprintln!("    Original Date:\t{}", sauce.date);
        }
        None => eprintln!("    No ANSi file information available"),
    }
    eprintln!();
}
