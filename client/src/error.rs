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


//! Client error types

use gamequery_wirecodec::DecodeError;
use std::time::Duration;
use thiserror::Error;

/// Client result type
pub type Result<T> = std::result::Result<T, QueryError>;

/// Query error type
///
/// Every variant is terminal for the query that produced it. The client never
/// retries on its own.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Socket failure while resolving, binding, sending or receiving
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),

    /// No reply arrived before the deadline
    #[error("No reply within {0:?}")]
    Timeout(Duration),

    /// The reply could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The protocol variant does not offer the requested query
    #[error("{protocol} does not support the {query} query")]
    Unsupported {
        /// Protocol name
        protocol: &'static str,
        /// Query that was requested
        query: &'static str,
    },
}

impl QueryError {
    /// Check if the error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, QueryError::Timeout(_))
    }

    /// Check if the error came from the socket layer
    pub fn is_transport_error(&self) -> bool {
        matches!(self, QueryError::Transport(_))
    }

    /// Check if the reply was received but could not be decoded
    pub fn is_decode_error(&self) -> bool {
        matches!(self, QueryError::Decode(_))
    }

    /// Check if the reply header did not match the expected header
    pub fn is_invalid_packet(&self) -> bool {
        matches!(self, QueryError::Decode(err) if err.is_invalid_packet())
    }

    /// Check if the reply ended before a read completed
    pub fn is_truncated(&self) -> bool {
        matches!(self, QueryError::Decode(err) if err.is_truncated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamequery_wirecodec::TruncationKind;

    #[test]
    fn test_error_classification() {
        assert!(QueryError::Timeout(Duration::from_secs(5)).is_timeout());
        assert!(
            QueryError::from(std::io::Error::from(std::io::ErrorKind::ConnectionRefused))
                .is_transport_error()
        );

        let invalid = QueryError::from(DecodeError::InvalidPacket {
            received: "x".into(),
            expected: "y".into(),
        });
        assert!(invalid.is_decode_error());
        assert!(invalid.is_invalid_packet());
        assert!(!invalid.is_truncated());

        let truncated = QueryError::from(DecodeError::TruncatedPacket {
            position: 0,
            kind: TruncationKind::InsufficientData {
                required: 4,
                available: 0,
            },
        });
        assert!(truncated.is_truncated());
        assert!(!truncated.is_timeout());
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::Timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "No reply within 250ms");

        let err = QueryError::Unsupported {
            protocol: "Quake2",
            query: "info",
        };
        assert_eq!(err.to_string(), "Quake2 does not support the info query");
    }
}
