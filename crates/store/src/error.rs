// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors surfaced by the schedule store and the option directories.
///
/// Transport details are flattened to strings so the error stays `Clone`
/// and comparable; the engine only needs the message to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store rejected the request. Carries the server-provided
    /// message when the error body included one.
    #[error("schedule store rejected the request ({status}): {message}")]
    Rejected {
        /// The HTTP status code.
        status: u16,
        /// The server-provided message, or the status reason phrase.
        message: String,
    },
    /// The request never completed (connection, DNS, timeout).
    #[error("transport failure reaching the schedule store: {0}")]
    Transport(String),
    /// The response arrived but could not be decoded.
    #[error("failed to decode schedule store response: {0}")]
    Decode(String),
    /// The addressed schedule record does not exist.
    #[error("schedule record {0} not found")]
    RecordNotFound(i64),
}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}
