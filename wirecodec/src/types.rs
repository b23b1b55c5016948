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


//! Decoded response types.

use indexmap::IndexMap;
use std::fmt;

/// Server info key/value pairs in wire order.
///
/// A key seen twice keeps its first position and takes the last value.
pub type InfoMap = IndexMap<String, String>;

/// Value of one player column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Column decoded as an integer
    Integer(i64),
    /// Column kept as text
    Text(String),
}

impl FieldValue {
    /// Returns the integer value, if this is an integer column.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }

    /// Returns the text value, if this is a text column.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Integer(_) => None,
            FieldValue::Text(value) => Some(value),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// One player line.
///
/// Columns are keyed by the protocol's column names. A line that carried
/// fewer fields than the protocol's layout produces a partial record: the
/// missing columns are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    fields: IndexMap<&'static str, FieldValue>,
}

impl PlayerRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column, replacing any previous value.
    pub fn insert(&mut self, column: &'static str, value: impl Into<FieldValue>) {
        self.fields.insert(column, value.into());
    }

    /// Returns a column's value.
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }

    /// Returns a mutable reference to a column's value.
    pub fn get_mut(&mut self, column: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(column)
    }

    /// Returns a column's value if it is an integer.
    pub fn integer(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(FieldValue::as_integer)
    }

    /// Returns a column's value if it is text.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(FieldValue::as_text)
    }

    /// Returns `true` if the column is present.
    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Number of columns present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no columns are present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates columns in line order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value))
    }
}

/// Result of a full status query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusResult {
    /// Server info block
    pub info: InfoMap,
    /// Players in the order the server listed them
    pub players: Vec<PlayerRecord>,
}
