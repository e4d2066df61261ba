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

//! # Tn3270art HLASM
//!
//! Renders a 3270 [`InstructionStream`](tn3270art_artcodec::InstructionStream) as High Level
//! Assembler `DC` statements and wraps them in the JCL that assembles and installs the screen:
//!
//! * a TSO program shown with `CALL`, for TK4- or z/OS,
//! * the TK4- VTAM NETSOL logon screen,
//! * a z/OS VTAM USS table.
//!
//! ```
//! use tn3270art_artcodec::{ArtConfig, convert};
//! use tn3270art_hlasm::{JobContext, RenderConfig, Renderer, Target};
//!
//! let conversion = convert(b"\x1b[32mHELLO", &ArtConfig::default());
//! let renderer = Renderer::new(RenderConfig::new(Target::TsoZos)).unwrap();
//! let job = renderer.render(&conversion.instructions, &JobContext::new("hello.ans"));
//! assert!(job.contains("DC    C'HELLO'"));
//! ```

mod config;
mod context;
mod render;
mod result;
mod screen;
pub mod template;

pub use self::config::{FieldColor, InputField, RenderConfig, Target};
pub use self::context::JobContext;
pub use self::render::Renderer;
pub use self::result::{RenderError, RenderResult};
pub use self::screen::{MAX_OPERAND_LENGTH, ScreenWriter};
