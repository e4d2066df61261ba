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

use crate::config::{RenderConfig, Target};
use crate::context::JobContext;
use crate::result::RenderResult;
use crate::screen::ScreenWriter;
use crate::template::{self, TSO_PROGRAM};
use tn3270art_artcodec::InstructionStream;
use tracing::{debug, instrument};

const DATE_FORMAT: &str = "%d-%m-%Y";

/// Turns an instruction stream into a submittable job.
#[derive(Clone, Debug)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer, rejecting names and fields the target cannot accept.
    pub fn new(config: RenderConfig) -> RenderResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Screen statements only, without job or program wrapping.
    pub fn render_screen(&self, stream: &InstructionStream) -> String {
        let mut writer = ScreenWriter::new(self.config.target);
        writer.write_all(stream);
        writer.finish()
    }

    /// The complete job for `stream`.
    #[instrument(skip_all, fields(job = %self.config.target, records = stream.len()))]
    pub fn render(&self, stream: &InstructionStream, context: &JobContext) -> String {
        let config = &self.config;
        let screen = self.render_screen(stream);
        let program = match config.target {
            Target::TsoTk4 | Target::TsoZos => {
                template::fill(TSO_PROGRAM, &[("screen", screen.as_str())])
            }
            Target::Netsol | Target::UssTable => String::new(),
        };
        let cursor = template::input_field(config.target, &config.input_field);
        let job_name = format!("{:<8}", config.job_name);
        let member_padded = format!("{:<8}", config.member);
        let date = context.date.format(DATE_FORMAT).to_string();
        let art_info = template::art_info(context);
        let command_args = template::command_args(&context.command_line);
        debug!(screen_lines = screen.lines().count(), "filling job template");

        template::fill(
            template::job_template(config.target),
            &[
                ("job_name", job_name.as_str()),
                ("member", config.member.as_str()),
                ("member_padded", member_padded.as_str()),
                ("dataset", config.dataset.as_str()),
                ("date", date.as_str()),
                ("art_info", art_info.as_str()),
                ("command_args", command_args.as_str()),
                ("program", program.as_str()),
                ("screen", screen.as_str()),
                ("cursor", cursor.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::RenderError;
    use chrono::NaiveDate;
    use tn3270art_artcodec::{ArtConfig, convert};

    fn context() -> JobContext {
        JobContext::new("logo.ans")
            .with_date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
            .with_command_line(["--tso", "--zos", "logo.ans"])
    }

    #[test]
    fn test_new_validates() {
        let config = RenderConfig::new(Target::TsoZos).with_member("MUCHTOOLONG");
        assert!(matches!(
            Renderer::new(config),
            Err(RenderError::InvalidParameter { name: "member", .. })
        ));
    }

    #[test]
    fn test_render_screen() {
        let conversion = convert(b"AAAAA\n\x1b[31mX", &ArtConfig::default());
        let renderer = Renderer::new(RenderConfig::new(Target::TsoTk4)).unwrap();
        assert_eq!(
            renderer.render_screen(&conversion.instructions),
            "         DC    5C'A'\n         $SBA  (2,1)\n* (2,1) (FG) Red\n         DC    X'2842F2'\n         DC    C'X'"
        );
    }

    #[test]
    fn test_render_tso_zos_job() {
        let conversion = convert(b"HI", &ArtConfig::default());
        let renderer = Renderer::new(
            RenderConfig::new(Target::TsoZos)
                .with_job_name("build")
                .with_dataset("user.art")
                .with_member("hi"),
        )
        .unwrap();
        let job = renderer.render(&conversion.instructions, &context());
        assert!(job.starts_with("//BUILD      JOB (ASSY)"));
        assert!(job.contains("//* Date: 09-03-2024"));
        assert!(job.contains("//* CALL 'USER.ART(HI)'"));
        assert!(job.contains("//* Command Line Args: --tso --zos logo.ans \n//*\n"));
        assert!(job.contains("         DC    X'1DF8'     SF (PROT,HIGH INTENSITY)\n         DC    C'HI'\nSTREAMLN EQU   *-STREAM"));
        assert!(!job.contains('{'));
    }

    #[test]
    fn test_render_netsol_job() {
        let conversion = convert(b"\x1b[2;1HWELCOME", &ArtConfig::default());
        let renderer = Renderer::new(RenderConfig::new(Target::Netsol)).unwrap();
        let job = renderer.render(&conversion.instructions, &context());
        assert!(job.starts_with("//AWESOME  JOB  (SETUP),"));
        assert!(job.contains("./ ADD NAME=ANSIART\n"));
        assert!(job.contains("         COPY ANSIART "));
        assert!(job.contains("TK4MTIME DC    CL8' '\n         $SBA  (2,1)\n         DC    C'WELCOME'\n* Insert Cursor"));
        assert!(job.contains("TK4MINP  DC    CL20' '"));
        assert!(!job.contains("{cursor}"));
    }

    #[test]
    fn test_render_usstable_job() {
        let conversion = convert(b"X", &ArtConfig::extended());
        let renderer = Renderer::new(RenderConfig::new(Target::UssTable)).unwrap();
        let job = renderer.render(&conversion.instructions, &context());
        assert!(job.contains("         DC    X'C3'       WCC\n         DC    C'X'\n* Insert Cursor"));
        assert!(job.contains("//L.SYSLMOD DD DSN=ANSI.ART,DISP=SHR"));
        assert!(job.contains("X'13'                   INSERT CURSOR"));
    }
}
