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

//! Job templates and the comment and field blocks substituted into them.
//!
//! Templates use `{name}` placeholders. Filling is a single pass so substituted text is never
//! rescanned, and unknown placeholders are left as written.

use crate::config::{InputField, Target};
use crate::context::JobContext;
use crate::screen::hex;
use std::fmt::Write;
use tn3270art_artcodec::consts::{attribute, highlight, order};
use tn3270art_artcodec::{Position, encode_address};

pub(crate) const TSO_PROGRAM: &str = include_str!("../templates/tso_program.asm");
pub(crate) const TSO_TK4_JOB: &str = include_str!("../templates/tso_tk4.jcl");
pub(crate) const TSO_ZOS_JOB: &str = include_str!("../templates/tso_zos.jcl");
pub(crate) const NETSOL_JOB: &str = include_str!("../templates/netsol.jcl");
pub(crate) const USSTABLE_JOB: &str = include_str!("../templates/usstable.jcl");

/// Comment lines wrap before this column.
const COMMENT_WIDTH: usize = 72;
const ARGS_LEAD: &str = "//* Command Line Args: ";
const ARGS_CONTINUATION: &str = "//*                    ";

/// Field attribute type for SFE.
const FIELD_ATTRIBUTE: u8 = 0xC0;
const UNPROTECTED_HIGH: u8 = 0xC8;
const PROTECTED_HIGH: u8 = 0xF8;

/// The job template for `target`.
pub fn job_template(target: Target) -> &'static str {
    match target {
        Target::TsoTk4 => TSO_TK4_JOB,
        Target::TsoZos => TSO_ZOS_JOB,
        Target::Netsol => NETSOL_JOB,
        Target::UssTable => USSTABLE_JOB,
    }
}

/// Replace every `{key}` in `template` with its value from `values`.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// The SAUCE comment block, or a bare comment line when the file had no trailer.
pub fn art_info(context: &JobContext) -> String {
    let Some(sauce) = &context.sauce else {
        return "//*".to_string();
    };
    let mut block = format!("//*\n//* Original ANSi File:   {}\n", context.file_name);
    let fields = [
        ("Original ANSi Title:  ", &sauce.title),
        ("Original ANSi Artist: ", &sauce.author),
        ("Original ANSi Group:  ", &sauce.group),
        ("Original ANSi Date:   ", &sauce.date),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            let _ = writeln!(block, "//* {label}{value}");
        }
    }
    block.push_str("//*");
    block
}

/// The command line as comment lines no wider than the comment width.
pub fn command_args(args: &[String]) -> String {
    let mut block = String::new();
    let mut line = String::from(ARGS_LEAD);
    for arg in args {
        if line.len() + arg.len() >= COMMENT_WIDTH {
            block.push_str(&line);
            block.push('\n');
            line = format!("{ARGS_CONTINUATION}{arg} ");
        } else {
            line.push_str(arg);
            line.push(' ');
        }
    }
    block.push_str(&line);
    block.push_str("\n//*");
    block
}

/// Statements placing the unprotected input field and the insert cursor.
///
/// Empty for targets without an input field.
pub fn input_field(target: Target, field: &InputField) -> String {
    let position = Position::new(field.row, field.col);
    let reset = hex(&[order::SET_ATTRIBUTE, attribute::ALL, highlight::DEFAULT]);
    let protect = hex(&[order::START_FIELD, PROTECTED_HIGH]);
    let mut block = String::from("* Insert Cursor and unprotected field\n");
    match target {
        Target::Netsol => {
            let color = hex(&[order::SET_ATTRIBUTE, attribute::FOREGROUND, field.color.code()]);
            let _ = writeln!(block, "         $SBA  {position}");
            let _ = writeln!(block, "         DC    X'{color}'  SA COLOR {}", field.color);
            let _ = writeln!(block, "         $SF   (UNPROT,HI)");
            let _ = writeln!(block, "         $IC");
            let _ = writeln!(block, "TK4MINP  DC    CL{}' '", field.length);
        }
        Target::UssTable => {
            let address = hex(&encode_address(position));
            let field_start = hex(&[
                order::START_FIELD_EXTENDED,
                0x02,
                FIELD_ATTRIBUTE,
                UNPROTECTED_HIGH,
                attribute::FOREGROUND,
                field.color.code(),
            ]);
            let _ = writeln!(
                block,
                "         DC    X'{:02X}{address}'         SBA{position}",
                order::SET_BUFFER_ADDRESS
            );
            let _ = writeln!(
                block,
                "         DC    X'{field_start}'         SFE, UNPROTECTED, {}",
                field.color
            );
            let _ = writeln!(
                block,
                "         DC    X'{:02X}'                   INSERT CURSOR",
                order::INSERT_CURSOR
            );
            let _ = writeln!(block, "         DC    {}C' '", field.length);
        }
        Target::TsoTk4 | Target::TsoZos => return String::new(),
    }
    let _ = writeln!(block, "         DC    X'{reset}'");
    let _ = write!(block, "         DC    X'{protect}'     SF (PROT,HIGH INTENSITY)");
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldColor;
    use tn3270art_sauce::SauceRecord;

    #[test]
    fn test_fill() {
        assert_eq!(fill("//{a} JOB {b}", &[("a", "X"), ("b", "Y")]), "//X JOB Y");
        assert_eq!(fill("{missing} {a}", &[("a", "1")]), "{missing} 1");
        assert_eq!(fill("{a}", &[("a", "{a}")]), "{a}");
        assert_eq!(fill("open { only", &[]), "open { only");
    }

    #[test]
    fn test_templates_have_placeholders() {
        for target in [Target::TsoTk4, Target::TsoZos, Target::Netsol, Target::UssTable] {
            let template = job_template(target);
            assert!(template.contains("{job_name}"));
            assert!(template.contains("{art_info}"));
            assert!(template.contains("{command_args}"));
        }
        assert!(TSO_PROGRAM.contains("{screen}"));
        assert!(NETSOL_JOB.contains("{cursor}"));
        assert!(USSTABLE_JOB.contains("{cursor}"));
    }

    #[test]
    fn test_art_info_without_sauce() {
        assert_eq!(art_info(&JobContext::new("logo.ans")), "//*");
    }

    #[test]
    fn test_art_info_with_sauce() {
        let sauce = SauceRecord::default().with_title("Logo").with_author("Artist");
        let context = JobContext::new("logo.ans").with_sauce(Some(sauce));
        assert_eq!(
            art_info(&context),
            "//*\n//* Original ANSi File:   logo.ans\n//* Original ANSi Title:  Logo\n\
             //* Original ANSi Artist: Artist\n//*"
        );
    }

    #[test]
    fn test_command_args_short() {
        let args = vec!["--tso".to_string(), "--zos".to_string(), "art.ans".to_string()];
        assert_eq!(
            command_args(&args),
            "//* Command Line Args: --tso --zos art.ans \n//*"
        );
    }

    #[test]
    fn test_command_args_wrap() {
        let args: Vec<String> = (0..12).map(|i| format!("--option{i}")).collect();
        let block = command_args(&args);
        let lines: Vec<&str> = block.lines().collect();
        assert!(lines.len() > 2);
        assert!(lines[0].starts_with(ARGS_LEAD));
        assert!(lines[1].starts_with(ARGS_CONTINUATION));
        assert_eq!(*lines.last().unwrap(), "//*");
        for line in &lines {
            assert!(line.len() <= COMMENT_WIDTH + 10);
        }
        for arg in &args {
            assert!(block.contains(arg.as_str()));
        }
    }

    #[test]
    fn test_input_field_netsol() {
        let field = InputField::default().with_color(FieldColor::Pink);
        assert_eq!(
            input_field(Target::Netsol, &field),
            "* Insert Cursor and unprotected field\n\
             \x20        $SBA  (23,20)\n\
             \x20        DC    X'2842F3'  SA COLOR PINK\n\
             \x20        $SF   (UNPROT,HI)\n\
             \x20        $IC\n\
             TK4MINP  DC    CL20' '\n\
             \x20        DC    X'280000'\n\
             \x20        DC    X'1DF8'     SF (PROT,HIGH INTENSITY)"
        );
    }

    #[test]
    fn test_input_field_usstable() {
        let field = InputField::default().with_position(1, 2).with_length(8);
        let block = input_field(Target::UssTable, &field);
        assert!(block.contains("         DC    X'1140C1'         SBA(1,2)"));
        assert!(block.contains("X'2902C0C842F2'         SFE, UNPROTECTED, RED"));
        assert!(block.contains("         DC    X'13'                   INSERT CURSOR"));
        assert!(block.contains("         DC    8C' '"));
    }

    #[test]
    fn test_input_field_tso_is_empty() {
        assert!(input_field(Target::TsoZos, &InputField::default()).is_empty());
    }
}
