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

//! # Tn3270art SAUCE
//!
//! Reads and writes the SAUCE (Standard Architecture for Universal Comment Extensions) trailer
//! that ANSI art editors append to the files they save.
//!
//! A file without a trailer is not an error: [`SauceRecord::find`] returns `None` and
//! [`strip`] returns the input unchanged. [`content`] cuts at the first end of file marker,
//! which also drops the bare marker many editors write without any record.
//!
//! ```rust
//! use tn3270art_sauce::{SauceRecord, content, strip};
//!
//! let mut file = b"\x1b[31mHi".to_vec();
//! SauceRecord::default()
//!     .with_title("Greeting")
//!     .write_trailer(&mut file)
//!     .unwrap();
//!
//! assert_eq!(SauceRecord::find(&file).unwrap().title, "Greeting");
//! assert_eq!(strip(&file), b"\x1b[31mHi");
//! assert_eq!(content(b"\x1b[31mHi\x1a"), b"\x1b[31mHi");
//! ```

mod record;
mod result;

pub use self::record::{
    COMMENT_LINE_LENGTH, EOF_MARKER, RECORD_LENGTH, SauceRecord, content, strip,
};
pub use self::result::{SauceError, SauceResult};
