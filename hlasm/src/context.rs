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

use chrono::NaiveDate;
use tn3270art_sauce::SauceRecord;

/// Facts about the artifact and invocation that are written into the job's comment header.
#[derive(Clone, Debug, PartialEq)]
pub struct JobContext {
    /// Base name of the converted file
    pub file_name: String,
    /// SAUCE trailer, when the file had one
    pub sauce: Option<SauceRecord>,
    /// Build date printed on the job
    pub date: NaiveDate,
    /// Arguments the job was generated with
    pub command_line: Vec<String>,
}

impl JobContext {
    /// Context for `file_name` dated today.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            sauce: None,
            date: chrono::Local::now().date_naive(),
            command_line: Vec::new(),
        }
    }

    /// Attach the SAUCE record found in the art file, if any.
    pub fn with_sauce(mut self, sauce: Option<SauceRecord>) -> Self {
        self.sauce = sauce;
        self
    }

    /// Override the date stamped into the job header.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Arguments echoed into the job's comment block.
    pub fn with_command_line<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command_line = args.into_iter().map(Into::into).collect();
        self
    }
}
