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


//! Query client

use crate::codec::{PacketCodec, validate_header};
use crate::{QueryConfig, QueryError, Result, Transport, UdpTransport};
use gamequery_wirecodec::{
    Cursor, InfoMap, Protocol, StatusResult, decode_info, decode_status, strip_info_colors,
    strip_player_colors,
};
use tracing::{debug, instrument};

/// Queries one game server over one protocol variant.
///
/// Each query is an independent exchange; the client keeps no state between
/// calls. Run queries concurrently by creating one client per task.
#[derive(Debug, Clone)]
pub struct QueryClient<T = UdpTransport> {
    config: QueryConfig,
    protocol: Protocol,
    codec: PacketCodec<T>,
}

impl QueryClient<UdpTransport> {
    /// Create a client that talks UDP to the configured server.
    pub fn new(config: QueryConfig, protocol: Protocol) -> Self {
        let transport = UdpTransport::new(&config);
        Self::with_transport(config, protocol, transport)
    }
}

impl<T: Transport> QueryClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(config: QueryConfig, protocol: Protocol, transport: T) -> Self {
        Self {
            config,
            protocol,
            codec: PacketCodec::new(transport),
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// The protocol variant this client speaks.
    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    /// Fetch the server info block.
    ///
    /// When `strip_color` is set, color escapes are removed from the
    /// protocol's display keys (the hostname). Other values are returned
    /// exactly as received.
    ///
    /// # Errors
    ///
    /// - [`QueryError::Unsupported`] if the protocol has no info query
    /// - [`QueryError::Timeout`] / [`QueryError::Transport`] from the exchange
    /// - [`QueryError::Decode`] if the reply header does not match
    #[instrument(skip(self), fields(protocol = self.protocol.name, address = %self.config.address()))]
    pub async fn get_info(&self, strip_color: bool) -> Result<InfoMap> {
        let query = self.protocol.info_query.ok_or(QueryError::Unsupported {
            protocol: self.protocol.name,
            query: "info",
        })?;

        let reply = self.codec.query(query.request, query.suffix).await?;
        let mut cursor = Cursor::new(&reply);
        validate_header(&mut cursor, self.protocol.field_delimiter, query.response_header)?;

        let mut info = decode_info(&mut cursor, &self.protocol);
        if strip_color {
            strip_info_colors(&mut info, query.display_keys);
        }
        debug!(fields = info.len(), "Info decoded");
        Ok(info)
    }

    /// Fetch the server info block and player list.
    ///
    /// When `strip_color` is set, color escapes are removed from the
    /// protocol's display keys and from each player's display columns.
    ///
    /// # Errors
    ///
    /// - [`QueryError::Timeout`] / [`QueryError::Transport`] from the exchange
    /// - [`QueryError::Decode`] if the reply header does not match
    #[instrument(skip(self), fields(protocol = self.protocol.name, address = %self.config.address()))]
    pub async fn get_status(&self, strip_color: bool) -> Result<StatusResult> {
        let reply = self.codec.query(self.protocol.status_request, None).await?;
        let mut cursor = Cursor::new(&reply);
        validate_header(
            &mut cursor,
            self.protocol.field_delimiter,
            self.protocol.status_response_header,
        )?;

        let mut status = decode_status(&mut cursor, &self.protocol);
        if strip_color {
            strip_info_colors(&mut status.info, self.protocol.status_display_keys);
            strip_player_colors(&mut status.players, self.protocol.player_display_columns);
        }
        debug!(
            fields = status.info.len(),
            players = status.players.len(),
            "Status decoded"
        );
        Ok(status)
    }

    /// [`get_info`](Self::get_info) using the configured `strip_color`.
    pub async fn info(&self) -> Result<InfoMap> {
        self.get_info(self.config.strip_color).await
    }

    /// [`get_status`](Self::get_status) using the configured `strip_color`.
    pub async fn status(&self) -> Result<StatusResult> {
        self.get_status(self.config.strip_color).await
    }
}
