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


use crate::types::{FieldValue, InfoMap, PlayerRecord};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Marker that opens a color escape.
pub const COLOR_MARKER: char = '^';

static COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\^(X.{6}|.)").expect("color pattern is valid"));

/// Removes color escape sequences from a display string.
///
/// A color escape is the `^` marker followed by either a single character
/// (`^1`, `^7`, ...) or an extended color of `X` plus six characters
/// (`^Xff8000`). All other text, including non-ASCII characters, is kept.
///
/// # Performance
///
/// Strings without a `^` are returned borrowed without running the
/// pattern. Otherwise a new `String` is allocated only if something matched.
///
/// # Examples
///
/// ```
/// use gamequery_wirecodec::strip_colors;
///
/// assert_eq!(strip_colors("^1Red^7Server"), "RedServer");
/// assert_eq!(strip_colors("^Xff8000Orange"), "Orange");
/// assert_eq!(strip_colors("plain"), "plain");
/// ```
pub fn strip_colors(text: &str) -> Cow<'_, str> {
    if !text.contains(COLOR_MARKER) {
        return Cow::Borrowed(text);
    }
    COLOR_PATTERN.replace_all(text, "")
}

/// Strips colors from the named info fields, leaving every other field as is.
pub fn strip_info_colors(info: &mut InfoMap, keys: &[&str]) {
    for key in keys {
        if let Some(value) = info.get_mut(*key) {
            if value.contains(COLOR_MARKER) {
                *value = strip_colors(value).into_owned();
            }
        }
    }
}

/// Strips colors from the named text columns of each player.
///
/// Integer columns are never touched.
pub fn strip_player_colors(players: &mut [PlayerRecord], columns: &[&str]) {
    for player in players {
        for column in columns {
            if let Some(FieldValue::Text(value)) = player.get_mut(column) {
                if value.contains(COLOR_MARKER) {
                    *value = strip_colors(value).into_owned();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_single_character_codes() {
        assert_eq!(strip_colors("^1Red^7Server"), "RedServer");
        assert_eq!(strip_colors("^^Caret"), "Caret");
        assert_eq!(strip_colors("trailing^"), "trailing^");
    }

    #[test]
    fn test_strip_extended_color() {
        assert_eq!(strip_colors("^X00ff00Green^7!"), "Green!");
        // Too short for the extended form, falls back to a single character
        assert_eq!(strip_colors("^Xab"), "ab");
    }

    #[test]
    fn test_strip_keeps_multibyte_text() {
        assert_eq!(strip_colors("^3Ünïcødé ^5サーバー"), "Ünïcødé サーバー");
        assert_eq!(strip_colors("^é"), "");
    }

    #[test]
    fn test_no_markers_is_borrowed() {
        let result = strip_colors("Plain Server");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Plain Server");
    }

    #[test]
    fn test_strip_info_colors_only_touches_named_keys() {
        let mut info = InfoMap::new();
        info.insert("sv_hostname".into(), "^1Red".into());
        info.insert("motd".into(), "^2Keep".into());

        strip_info_colors(&mut info, &["sv_hostname", "missing"]);

        assert_eq!(info["sv_hostname"], "Red");
        assert_eq!(info["motd"], "^2Keep");
    }

    #[test]
    fn test_strip_player_colors_ignores_integer_columns() {
        let mut player = PlayerRecord::new();
        player.insert("frags", 3_i64);
        player.insert("name", "^4Blue");
        let mut players = vec![player];

        strip_player_colors(&mut players, &["name", "frags"]);

        assert_eq!(players[0].text("name"), Some("Blue"));
        assert_eq!(players[0].integer("frags"), Some(3));
    }
}
