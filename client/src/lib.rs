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


//! # Game Query Client
//!
//! Async client for the Quake status query protocol family. A query is one
//! request datagram and one reply datagram; the reply is validated against
//! the protocol's header token and decoded with `gamequery-wirecodec`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gamequery_client::{Protocol, QueryClient, QueryConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = QueryConfig::new("85.10.197.106", 27960)
//!         .with_timeout(Duration::from_secs(5));
//!     let client = QueryClient::new(config, Protocol::QUAKE3);
//!
//!     let info = client.get_info(true).await?;
//!     println!("{:?}", info.get("hostname"));
//!
//!     let status = client.get_status(true).await?;
//!     for player in &status.players {
//!         println!("{:?} {:?}", player.text("name"), player.integer("ping"));
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod codec;
mod config;
mod error;
mod transport;

pub use client::QueryClient;
pub use codec::{PacketCodec, encode_request, validate_header};
pub use config::{MAX_DATAGRAM_SIZE, QueryConfig};
pub use error::{QueryError, Result};
pub use transport::{Transport, UdpTransport};

// Re-export decoded types from gamequery_wirecodec
pub use gamequery_wirecodec::{
    ColumnKind, Cursor, DecodeError, DecodeResult, FieldValue, InfoMap, InfoQuery, PlayerColumn,
    PlayerRecord, Protocol, StatusResult, TruncationKind, strip_colors,
};
