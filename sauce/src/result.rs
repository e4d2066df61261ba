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

use thiserror::Error;

/// Result type alias for SAUCE operations.
pub type SauceResult<T> = Result<T, SauceError>;

/// Errors raised while decoding or encoding a SAUCE record.
#[derive(Debug, Error)]
pub enum SauceError {
    /// Fewer bytes were available than the record needs.
    #[error("Insufficient data: required {required} bytes, available {available}")]
    InsufficientData {
        /// Bytes needed
        required: usize,
        /// Bytes available
        available: usize,
    },

    /// The record does not start with the `SAUCE` identifier.
    #[error("Missing SAUCE signature")]
    BadSignature,

    /// The record version is not `00`.
    #[error("Unsupported SAUCE version '{version}'")]
    UnsupportedVersion {
        /// Version field as found
        version: String,
    },

    /// Writing the record failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SauceError::InsufficientData {
            required: 128,
            available: 12,
        };
        assert_eq!(err.to_string(), "Insufficient data: required 128 bytes, available 12");
        assert_eq!(SauceError::BadSignature.to_string(), "Missing SAUCE signature");
        let err = SauceError::UnsupportedVersion {
            version: "01".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported SAUCE version '01'");
    }

    #[test]
    fn test_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::WriteZero, "full");
        let err: SauceError = io.into();
        assert!(matches!(err, SauceError::Io(_)));
    }
}
