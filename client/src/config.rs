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


//! Client configuration

use std::time::Duration;

/// Largest payload a single UDP datagram can carry.
pub const MAX_DATAGRAM_SIZE: usize = 65_507;

/// Query client configuration
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Server hostname or IP address
    pub host: String,

    /// Server query port
    pub port: u16,

    /// How long to wait for the reply datagram
    pub timeout: Duration,

    /// Strip color escapes from display fields by default
    pub strip_color: bool,

    /// Receive buffer size; longer datagrams are truncated by the OS
    pub buffer_size: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 27960,
            timeout: Duration::from_secs(5),
            strip_color: true,
            buffer_size: MAX_DATAGRAM_SIZE,
        }
    }
}

impl QueryConfig {
    /// Create a new configuration with the given host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Set the reply timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable color stripping by default
    pub fn with_strip_color(mut self, enabled: bool) -> Self {
        self.strip_color = enabled;
        self
    }

    /// Set the receive buffer size
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Get the server address as a string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
