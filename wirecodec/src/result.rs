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


//! Error types for the wirecodec crate.
//!
//! Decoding never performs I/O, so the only failures are structural: a read
//! that runs past the end of the packet, or a response header that does not
//! match the one the protocol expects.

/// Result type alias for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a response packet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A cursor read ran past the end of the packet.
    ///
    /// The response was shorter than the read required. The cursor is left
    /// where it was before the failed read.
    #[error("Truncated packet at offset {position}: {kind}")]
    TruncatedPacket {
        /// Cursor offset at which the read was attempted
        position: usize,
        /// What the read was looking for
        kind: TruncationKind,
    },

    /// The response header did not match the expected header token.
    #[error("Packet header mismatch. Received: {received:?}. Expected: {expected:?}.")]
    InvalidPacket {
        /// Header token read from the packet
        received: String,
        /// Header token the protocol requires
        expected: String,
    },
}

/// Specific kinds of truncation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TruncationKind {
    /// A fixed-length read needed more bytes than were left.
    InsufficientData {
        /// Number of bytes required
        required: usize,
        /// Number of bytes available
        available: usize,
    },

    /// A delimited read reached the end of the packet without finding its
    /// delimiter.
    MissingDelimiter {
        /// The delimiter that was searched for
        delimiter: Vec<u8>,
    },
}

impl DecodeError {
    /// Check if the error is a truncated packet
    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeError::TruncatedPacket { .. })
    }

    /// Check if the error is a header mismatch
    pub fn is_invalid_packet(&self) -> bool {
        matches!(self, DecodeError::InvalidPacket { .. })
    }
}

impl std::fmt::Display for TruncationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TruncationKind::InsufficientData {
                required,
                available,
            } => {
                write!(
                    f,
                    "insufficient data (required: {}, available: {})",
                    required, available
                )
            }
            TruncationKind::MissingDelimiter { delimiter } => {
                write!(f, "delimiter {:02X?} not found", delimiter)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_packet_display_names_both_headers() {
        let err = DecodeError::InvalidPacket {
            received: "wrongResponse\n".to_string(),
            expected: "infoResponse\n".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("wrongResponse"));
        assert!(message.contains("infoResponse"));
        assert!(err.is_invalid_packet());
        assert!(!err.is_truncated());
    }

    #[test]
    fn test_truncated_display() {
        let err = DecodeError::TruncatedPacket {
            position: 3,
            kind: TruncationKind::InsufficientData {
                required: 8,
                available: 2,
            },
        };
        assert_eq!(
            err.to_string(),
            "Truncated packet at offset 3: insufficient data (required: 8, available: 2)"
        );

        let err = DecodeError::TruncatedPacket {
            position: 0,
            kind: TruncationKind::MissingDelimiter {
                delimiter: vec![b'\\'],
            },
        };
        assert_eq!(
            err.to_string(),
            "Truncated packet at offset 0: delimiter [5C] not found"
        );
        assert!(err.is_truncated());
    }
}
