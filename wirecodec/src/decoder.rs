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


//! Info block and player list decoding.
//!
//! A status payload (everything after the response header) is laid out as
//!
//! ```text
//! key\value\key\value ... \n
//! <player line>\n
//! <player line>\n
//! ```
//!
//! The info block ends at the first record delimiter, or at the end of the
//! packet for info-only responses. Each player line is a whitespace separated
//! list of fields, where a field may be a double-quoted string containing
//! spaces.
//!
//! Real servers emit a fair amount of malformed data here. Quirks such as an
//! unpaired trailing info key or a short player line are reported through
//! `tracing` and decoding carries on.

use crate::cursor::Cursor;
use crate::protocol::{ColumnKind, Protocol};
use crate::types::{FieldValue, InfoMap, PlayerRecord, StatusResult};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{trace, warn};

static PLAYER_FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:\\"|[^"])*?"|\S+"#).expect("player field pattern is valid")
});

/// Decodes the info block at the cursor.
///
/// Stops after the record delimiter that closes the block, leaving the cursor
/// at the first player line, or at the end of the packet.
pub fn decode_info(cursor: &mut Cursor<'_>, protocol: &Protocol) -> InfoMap {
    let mut info = InfoMap::new();
    let delimiters = [protocol.field_delimiter, protocol.record_delimiter];

    while !cursor.is_end() {
        let (key, stop) = cursor.read_until_any(&delimiters);
        if stop != Some(protocol.field_delimiter) {
            if !key.is_empty() {
                warn!(
                    protocol = protocol.name,
                    key = %key,
                    "Dropping unpaired trailing info key"
                );
            }
            break;
        }

        let (value, stop) = cursor.read_until_any(&delimiters);
        trace!(key = %key, value = %value, "Info field");
        info.insert(key, value.trim().to_string());
        if stop != Some(protocol.field_delimiter) {
            break;
        }
    }

    info
}

/// Decodes an info block followed by the player list.
///
/// An empty payload yields an empty info map and an empty player list.
pub fn decode_status(cursor: &mut Cursor<'_>, protocol: &Protocol) -> StatusResult {
    let info = decode_info(cursor, protocol);
    let mut players = Vec::new();

    while !cursor.is_end() {
        let (line, _) = cursor.read_until_any(std::slice::from_ref(&protocol.record_delimiter));
        let fields = split_player_fields(&line);
        if fields.is_empty() {
            continue;
        }
        players.push(decode_player(&fields, protocol));
    }

    StatusResult { info, players }
}

/// Splits a player line into fields, removing the quotes around quoted
/// fields.
pub fn split_player_fields(line: &str) -> Vec<&str> {
    PLAYER_FIELD_PATTERN
        .find_iter(line)
        .map(|field| unquote(field.as_str()))
        .collect()
}

fn unquote(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

/// Maps positional fields onto the protocol's player columns.
///
/// Fields past the end of the column layout are ignored; columns past the
/// end of the fields are left out of the record.
pub fn decode_player(fields: &[&str], protocol: &Protocol) -> PlayerRecord {
    if fields.len() < protocol.player_columns.len() {
        trace!(
            protocol = protocol.name,
            fields = fields.len(),
            columns = protocol.player_columns.len(),
            "Partial player line"
        );
    }

    let mut record = PlayerRecord::new();
    for (column, field) in protocol.player_columns.iter().zip(fields) {
        let value = match column.kind {
            ColumnKind::Text => FieldValue::Text(field.to_string()),
            ColumnKind::Integer => match field.parse::<i64>() {
                Ok(number) => FieldValue::Integer(number),
                Err(_) => {
                    warn!(
                        protocol = protocol.name,
                        column = column.name,
                        field = %field,
                        "Non-numeric value in integer column, keeping as text"
                    );
                    FieldValue::Text(field.to_string())
                }
            },
        };
        record.insert(column.name, value);
    }
    record
}
