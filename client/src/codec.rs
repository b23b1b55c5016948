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


//! Request framing and response header validation

use crate::{Result, Transport};
use bytes::{BufMut, Bytes, BytesMut};
use gamequery_wirecodec::{Cursor, DecodeError, DecodeResult, OUT_OF_BAND_PREFIX};
use tracing::{debug, instrument, trace};

/// Terminates every request datagram.
const REQUEST_TERMINATOR: u8 = 0x00;

/// Build a request datagram.
///
/// The layout is the out-of-band prefix, the header token, the optional
/// suffix, and a terminating NUL byte.
pub fn encode_request(header: &[u8], suffix: Option<&[u8]>) -> Bytes {
    let suffix = suffix.unwrap_or_default();
    let mut buffer = BytesMut::with_capacity(
        OUT_OF_BAND_PREFIX.len() + header.len() + suffix.len() + 1,
    );
    buffer.put_slice(&OUT_OF_BAND_PREFIX);
    buffer.put_slice(header);
    buffer.put_slice(suffix);
    buffer.put_u8(REQUEST_TERMINATOR);
    buffer.freeze()
}

/// Frames requests and performs a single request/reply exchange.
///
/// The codec holds no per-query state. Each call to [`PacketCodec::query`]
/// goes from sending the request, to awaiting the reply, to returning it.
#[derive(Debug, Clone)]
pub struct PacketCodec<T> {
    transport: T,
}

impl<T: Transport> PacketCodec<T> {
    /// Create a codec over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and return the reply.
    ///
    /// The out-of-band prefix is removed from the reply when present; the
    /// remaining bytes are returned untouched.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Timeout`](crate::QueryError::Timeout) or
    /// [`QueryError::Transport`](crate::QueryError::Transport) as reported by
    /// the transport.
    #[instrument(skip_all, fields(request = %String::from_utf8_lossy(header)))]
    pub async fn query(&self, header: &[u8], suffix: Option<&[u8]>) -> Result<Vec<u8>> {
        let request = encode_request(header, suffix);
        trace!(len = request.len(), "Sending request");

        let mut reply = self.transport.connect_and_send(&request).await?;
        debug!(len = reply.len(), "Reply received");

        if reply.starts_with(&OUT_OF_BAND_PREFIX) {
            reply.drain(..OUT_OF_BAND_PREFIX.len());
        }
        Ok(reply)
    }
}

/// Read the response header token and compare it with `expected`.
///
/// The token runs up to the first `delimiter`. A packet with no delimiter at
/// all is treated as a header-only packet, so a mismatch is still reported
/// as [`DecodeError::InvalidPacket`] rather than as truncation.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidPacket`] carrying both the received and the
/// expected header when they differ. The comparison is exact and
/// case-sensitive.
pub fn validate_header(cursor: &mut Cursor<'_>, delimiter: u8, expected: &str) -> DecodeResult<()> {
    let received = match cursor.read_delimited(&[delimiter]) {
        Ok(token) => token,
        Err(_) => {
            let rest = cursor.read_fixed(cursor.remaining_len())?;
            String::from_utf8_lossy(rest).into_owned()
        }
    };

    if received != expected {
        debug!(received = ?received, expected = ?expected, "Header mismatch");
        return Err(DecodeError::InvalidPacket {
            received,
            expected: expected.to_string(),
        });
    }
    trace!(header = ?received, "Header validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tracing_test::traced_test;

    struct RecordingTransport {
        reply: Vec<u8>,
        sent: Mutex<Vec<Vec<u8>>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn connect_and_send(&self, payload: &[u8]) -> Result<Vec<u8>> {
            self.sent.lock().unwrap().push(payload.to_vec());
            Ok(self.reply.clone())
        }
    }

    struct SilentTransport;

    #[async_trait]
    impl Transport for SilentTransport {
        async fn connect_and_send(&self, _payload: &[u8]) -> Result<Vec<u8>> {
            Err(QueryError::Timeout(std::time::Duration::from_secs(1)))
        }
    }

    #[test]
    fn test_encode_request() {
        let request = encode_request(b"getstatus", None);
        assert_eq!(&request[..], b"\xFF\xFF\xFF\xFFgetstatus\x00");

        let request =
            encode_request(b"getinfo", Some(b" challenge".as_slice()));
        assert_eq!(&request[..], b"\xFF\xFF\xFF\xFFgetinfo challenge\x00");
    }

    #[tokio::test]
    async fn test_query_strips_out_of_band_prefix() {
        let codec = PacketCodec::new(RecordingTransport {
            reply: b"\xFF\xFF\xFF\xFFprint\n\\a\\b".to_vec(),
            sent: Mutex::new(Vec::new()),
        });

        let reply = codec.query(b"status", None).await.unwrap();
        assert_eq!(reply, b"print\n\\a\\b");

        let sent = codec.transport().sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], b"\xFF\xFF\xFF\xFFstatus\x00");
    }

    #[tokio::test]
    async fn test_query_keeps_unprefixed_reply() {
        let codec = PacketCodec::new(RecordingTransport {
            reply: b"infoResponse\n\\a\\b".to_vec(),
            sent: Mutex::new(Vec::new()),
        });
        let reply = codec.query(b"getinfo", None).await.unwrap();
        assert_eq!(reply, b"infoResponse\n\\a\\b");
    }

    #[tokio::test]
    async fn test_query_propagates_timeout() {
        let codec = PacketCodec::new(SilentTransport);
        let err = codec.query(b"getstatus", None).await.unwrap_err();
        assert!(err.is_timeout());
    }

    #[test]
    fn test_validate_header_accepts_exact_match() {
        let mut cursor = Cursor::new(b"statusResponse\n\\sv_hostname\\x");
        validate_header(&mut cursor, b'\\', "statusResponse\n").unwrap();
        assert_eq!(cursor.remaining(), b"sv_hostname\\x");
    }

    #[test]
    fn test_validate_header_is_case_sensitive() {
        let mut cursor = Cursor::new(b"StatusResponse\n\\");
        let err = validate_header(&mut cursor, b'\\', "statusResponse\n").unwrap_err();
        assert!(err.is_invalid_packet());
    }

    #[test]
    #[traced_test]
    fn test_validate_header_mismatch_names_both() {
        let mut cursor = Cursor::new(b"wrongResponse\n\\hostname\\x");
        let err = validate_header(&mut cursor, b'\\', "infoResponse\n").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidPacket {
                received: "wrongResponse\n".to_string(),
                expected: "infoResponse\n".to_string(),
            }
        );
        assert!(logs_contain("Header mismatch"));
    }

    #[test]
    fn test_validate_header_without_delimiter() {
        let mut cursor = Cursor::new(b"garbage");
        let err = validate_header(&mut cursor, b'\\', "n").unwrap_err();
        assert!(err.is_invalid_packet());

        let mut cursor = Cursor::new(b"infoResponse\n");
        validate_header(&mut cursor, b'\\', "infoResponse\n").unwrap();
        assert!(cursor.is_end());
    }
}
