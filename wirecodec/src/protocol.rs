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


//! Per-variant protocol descriptors.
//!
//! Every member of the Quake status protocol family shares one request and
//! decode algorithm. What differs between them is data: the request and
//! response header tokens, the delimiters, the layout of a player line and
//! which fields carry display text. A [`Protocol`] bundles that data so the
//! codec and decoder can stay variant-agnostic.

/// Out-of-band marker that prefixes every request and most responses.
pub const OUT_OF_BAND_PREFIX: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

/// How a player column is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Signed decimal integer (score, ping, ...)
    Integer,
    /// Free text, surrounding double quotes removed
    Text,
}

/// One positional column of a player line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerColumn {
    /// Column name used as the key in a [`PlayerRecord`](crate::PlayerRecord)
    pub name: &'static str,
    /// How the raw field is decoded
    pub kind: ColumnKind,
}

impl PlayerColumn {
    const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Integer,
        }
    }

    const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Text,
        }
    }
}

/// Info-only query offered by some variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoQuery {
    /// Request header token
    pub request: &'static [u8],
    /// Suffix appended after the request header
    pub suffix: Option<&'static [u8]>,
    /// Expected response header token
    pub response_header: &'static str,
    /// Info keys holding display text
    pub display_keys: &'static [&'static str],
}

/// Descriptor for one member of the status protocol family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Protocol {
    /// Human readable protocol name
    pub name: &'static str,
    /// Separates info keys and values, and terminates the response header
    pub field_delimiter: u8,
    /// Separates the info block and each player line
    pub record_delimiter: u8,
    /// Status request header token
    pub status_request: &'static [u8],
    /// Expected status response header token
    pub status_response_header: &'static str,
    /// Info keys of a status response holding display text
    pub status_display_keys: &'static [&'static str],
    /// Positional layout of a player line
    pub player_columns: &'static [PlayerColumn],
    /// Player columns holding display text
    pub player_display_columns: &'static [&'static str],
    /// Info-only query, if the variant has one
    pub info_query: Option<InfoQuery>,
}

impl Protocol {
    /// Quake 1 (QuakeWorld) status protocol.
    pub const QUAKE1: Protocol = Protocol {
        name: "Quake1",
        field_delimiter: b'\\',
        record_delimiter: b'\n',
        status_request: b"status",
        status_response_header: "n",
        status_display_keys: &[],
        player_columns: &[
            PlayerColumn::integer("id"),
            PlayerColumn::integer("score"),
            PlayerColumn::integer("time"),
            PlayerColumn::integer("ping"),
            PlayerColumn::text("name"),
            PlayerColumn::text("skin"),
            PlayerColumn::integer("color1"),
            PlayerColumn::integer("color2"),
        ],
        player_display_columns: &[],
        info_query: None,
    };

    /// Quake 2 status protocol.
    pub const QUAKE2: Protocol = Protocol {
        name: "Quake2",
        field_delimiter: b'\\',
        record_delimiter: b'\n',
        status_request: b"status",
        status_response_header: "print\n",
        status_display_keys: &[],
        player_columns: &[
            PlayerColumn::integer("frags"),
            PlayerColumn::integer("ping"),
            PlayerColumn::text("name"),
            PlayerColumn::text("address"),
        ],
        player_display_columns: &[],
        info_query: None,
    };

    /// Quake 3 status protocol, also spoken by most id Tech 3 derivatives.
    pub const QUAKE3: Protocol = Protocol {
        name: "Quake3",
        field_delimiter: b'\\',
        record_delimiter: b'\n',
        status_request: b"getstatus",
        status_response_header: "statusResponse\n",
        status_display_keys: &["sv_hostname"],
        player_columns: &[
            PlayerColumn::integer("frags"),
            PlayerColumn::integer("ping"),
            PlayerColumn::text("name"),
        ],
        player_display_columns: &["name"],
        info_query: Some(InfoQuery {
            request: b"getinfo",
            suffix: Some(b" gamequery".as_slice()),
            response_header: "infoResponse\n",
            display_keys: &["hostname"],
        }),
    };

    /// Returns the column at position `index` of a player line.
    pub fn column(&self, index: usize) -> Option<&PlayerColumn> {
        self.player_columns.get(index)
    }

    /// Returns `true` if the variant answers info-only queries.
    pub fn supports_info(&self) -> bool {
        self.info_query.is_some()
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
