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


//! UDP transport

use crate::{QueryConfig, QueryError, Result};
use async_trait::async_trait;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{UdpSocket, lookup_host};
use tokio::time::timeout;
use tracing::{debug, trace};

/// Sends one request datagram and returns the one reply datagram.
///
/// Implementations own the deadline: a reply that does not arrive in time
/// must surface as [`QueryError::Timeout`], and socket failures as
/// [`QueryError::Transport`]. Nothing is retried.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `payload` and wait for a single reply.
    async fn connect_and_send(&self, payload: &[u8]) -> Result<Vec<u8>>;
}

/// [`Transport`] over a fresh tokio [`UdpSocket`] per exchange.
#[derive(Debug, Clone)]
pub struct UdpTransport {
    address: String,
    timeout: Duration,
    buffer_size: usize,
}

impl UdpTransport {
    /// Create a transport for the configured server.
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            address: config.address(),
            timeout: config.timeout,
            buffer_size: config.buffer_size,
        }
    }

    /// Server address this transport sends to.
    pub fn address(&self) -> &str {
        &self.address
    }

    async fn exchange(&self, payload: &[u8]) -> io::Result<Vec<u8>> {
        let remote = lookup_host(self.address.as_str()).await?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("{} did not resolve to any address", self.address),
            )
        })?;
        let local: SocketAddr = match remote {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };

        let socket = UdpSocket::bind(local).await?;
        socket.connect(remote).await?;
        trace!(%remote, len = payload.len(), "Sending datagram");
        socket.send(payload).await?;

        let mut buffer = vec![0u8; self.buffer_size];
        let len = socket.recv(&mut buffer).await?;
        buffer.truncate(len);
        debug!(%remote, len, "Received datagram");
        Ok(buffer)
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn connect_and_send(&self, payload: &[u8]) -> Result<Vec<u8>> {
        match timeout(self.timeout, self.exchange(payload)).await {
            Ok(reply) => Ok(reply?),
            Err(_) => {
                debug!(address = %self.address, timeout = ?self.timeout, "Timed out waiting for reply");
                Err(QueryError::Timeout(self.timeout))
            }
        }
    }
}
