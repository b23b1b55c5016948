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


//! Sequential read-only view over a response packet.

use crate::result::{DecodeError, DecodeResult, TruncationKind};

/// A forward-only cursor over a response packet.
///
/// The cursor borrows the packet and tracks an offset into it. Every read
/// either consumes bytes and advances the offset, or fails and leaves the
/// offset untouched. The offset never moves backwards and never passes the
/// end of the buffer.
///
/// # Example
///
/// ```
/// use gamequery_wirecodec::Cursor;
///
/// let mut cursor = Cursor::new(b"print\n\\maxclients\\8");
/// assert_eq!(cursor.read_delimited(b"\\").unwrap(), "print\n");
/// assert_eq!(cursor.remaining(), b"maxclients\\8");
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Current offset into the packet.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of unread bytes.
    pub fn remaining_len(&self) -> usize {
        self.buffer.len() - self.position
    }

    /// Returns `true` once every byte has been consumed.
    pub fn is_end(&self) -> bool {
        self.position >= self.buffer.len()
    }

    /// Returns all unread bytes without advancing.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buffer[self.position..]
    }

    /// Returns `true` if the unread bytes begin with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Consumes exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TruncatedPacket`] if fewer than `n` bytes
    /// remain. Nothing is consumed in that case.
    pub fn read_fixed(&mut self, n: usize) -> DecodeResult<&'a [u8]> {
        let available = self.remaining_len();
        if n > available {
            return Err(DecodeError::TruncatedPacket {
                position: self.position,
                kind: TruncationKind::InsufficientData {
                    required: n,
                    available,
                },
            });
        }
        let start = self.position;
        self.position += n;
        Ok(&self.buffer[start..self.position])
    }

    /// Consumes bytes up to the next occurrence of `delimiter`, then skips
    /// the delimiter itself.
    ///
    /// The consumed span (without the delimiter) is returned as text; invalid
    /// UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TruncatedPacket`] if the delimiter does not
    /// occur before the end of the packet.
    pub fn read_delimited(&mut self, delimiter: &[u8]) -> DecodeResult<String> {
        let rest = self.remaining();
        let Some(index) = find(rest, delimiter) else {
            return Err(DecodeError::TruncatedPacket {
                position: self.position,
                kind: TruncationKind::MissingDelimiter {
                    delimiter: delimiter.to_vec(),
                },
            });
        };
        let text = String::from_utf8_lossy(&rest[..index]).into_owned();
        self.position += index + delimiter.len();
        Ok(text)
    }

    /// Consumes bytes up to the first byte found in `delimiters`, or to the
    /// end of the packet if none occurs.
    ///
    /// Returns the consumed text and the delimiter byte that stopped the
    /// read, which is `None` when the end of the packet was reached. The
    /// delimiter byte is consumed as well.
    pub fn read_until_any(&mut self, delimiters: &[u8]) -> (String, Option<u8>) {
        let rest = self.remaining();
        match rest.iter().position(|byte| delimiters.contains(byte)) {
            Some(index) => {
                self.position += index + 1;
                (
                    String::from_utf8_lossy(&rest[..index]).into_owned(),
                    Some(rest[index]),
                )
            }
            None => {
                self.position = self.buffer.len();
                (String::from_utf8_lossy(rest).into_owned(), None)
            }
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
