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


//! # Game Query Wire Codec
//!
//! Decoding for the Quake status protocol family (Quake 1, Quake 2, Quake 3
//! and their derivatives). This crate performs no I/O: it takes the bytes of
//! a single response datagram and turns them into an [`InfoMap`] or a
//! [`StatusResult`].
//!
//! - [`Cursor`] - forward-only reader over a response packet
//! - [`Protocol`] - per-variant headers, delimiters and player layout
//! - [`decode_info`] / [`decode_status`] - payload decoding
//! - [`strip_colors`] - removes `^` color escapes from display strings

mod cursor;
mod decoder;
pub mod protocol;
mod result;
mod sanitize;
mod types;

pub use self::cursor::Cursor;
pub use self::decoder::{decode_info, decode_player, decode_status, split_player_fields};
pub use self::protocol::{ColumnKind, InfoQuery, OUT_OF_BAND_PREFIX, PlayerColumn, Protocol};
pub use self::result::{DecodeError, DecodeResult, TruncationKind};
pub use self::sanitize::{COLOR_MARKER, strip_colors, strip_info_colors, strip_player_colors};
pub use self::types::{FieldValue, InfoMap, PlayerRecord, StatusResult};
