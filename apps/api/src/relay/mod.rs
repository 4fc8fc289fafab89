//! Streaming Relay — bridges a pull-based token source into the byte stream
//! behind a chunked HTTP response.
//!
//! State machine:
//!
//! ```text
//! Idle ──pull──▶ Emitting ──pull──▶ Emitting ... ──▶ Closed
//!                                             └──▶ Errored
//! ```
//!
//! Each `pull` calls `TokenSource::next` exactly once. Nothing is read ahead of
//! demand, so backpressure comes from the consumer. A relay dropped or closed
//! before reaching a terminal state cancels its source.

pub mod response;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

pub use response::streaming_response;

pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("upstream token source failed: {0}")]
    Upstream(#[source] SourceError),
}

// ────────────────────────────────────────────────────────────────────────────
// Upstream units
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StreamToken {
    #[serde(default)]
    pub text: Option<String>,
}

/// One unit from the token source: a partial token, or on the final unit the
/// full generated text (text-generation-inference event shape).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextStreamChunk {
    #[serde(default)]
    pub token: Option<StreamToken>,
    #[serde(default)]
    pub generated_text: Option<String>,
}

impl TextStreamChunk {
    pub fn token(text: &str) -> Self {
        Self {
            token: Some(StreamToken {
                text: Some(text.to_string()),
            }),
            generated_text: None,
        }
    }

    pub fn generated(text: &str) -> Self {
        Self {
            token: None,
            generated_text: Some(text.to_string()),
        }
    }

    /// Partial token text if non-empty, else the generated text, else "".
    pub fn into_text(self) -> String {
        self.token
            .and_then(|t| t.text)
            .filter(|t| !t.is_empty())
            .or(self.generated_text)
            .unwrap_or_default()
    }
}

/// Capability interface over the upstream producer.
///
/// `Ok(None)` signals completion. `cancel` has no default: every source must
/// say how it releases its upstream resource.
#[async_trait]
pub trait TokenSource: Send {
    async fn next(&mut self) -> Result<Option<TextStreamChunk>, SourceError>;

    fn cancel(&mut self);
}

// ────────────────────────────────────────────────────────────────────────────
// Relay state machine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Idle,
    Emitting,
    Closed,
    Errored,
}

impl RelayState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RelayState::Closed | RelayState::Errored)
    }
}

/// Result of a single pull.
#[derive(Debug, PartialEq)]
pub enum Pull {
    Chunk(Bytes),
    /// The source produced a unit with no text. Not terminal.
    Empty,
    Closed,
}

pub struct StreamRelay {
    source: Box<dyn TokenSource>,
    state: RelayState,
    emitted_bytes: usize,
}

impl StreamRelay {
    pub fn new(source: Box<dyn TokenSource>) -> Self {
        Self {
            source,
            state: RelayState::Idle,
            emitted_bytes: 0,
        }
    }

    pub fn state(&self) -> RelayState {
        self.state
    }

    pub async fn pull(&mut self) -> Result<Pull, RelayError> {
        if self.state.is_terminal() {
            return Ok(Pull::Closed);
        }

        match self.source.next().await {
            Ok(None) => {
                self.state = RelayState::Closed;
                debug!("Relay closed after {} bytes", self.emitted_bytes);
                Ok(Pull::Closed)
            }
            Ok(Some(chunk)) => {
                self.state = RelayState::Emitting;
                let text = chunk.into_text();
                if text.is_empty() {
                    return Ok(Pull::Empty);
                }
                self.emitted_bytes += text.len();
                Ok(Pull::Chunk(Bytes::from(text)))
            }
            Err(e) => {
                self.state = RelayState::Errored;
                warn!("Relay errored after {} bytes: {e}", self.emitted_bytes);
                Err(RelayError::Upstream(e))
            }
        }
    }

    /// Consumer-side close. Cancels the source unless the relay already finished.
    pub fn close(&mut self) {
        if !self.state.is_terminal() {
            self.source.cancel();
            self.state = RelayState::Closed;
            debug!("Relay closed by consumer after {} bytes", self.emitted_bytes);
        }
    }

    /// Adapts the relay into a byte stream for `Body::from_stream`.
    /// Empty pulls are absorbed while the consumer is still waiting for data.
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes, RelayError>> + Send + 'static {
        futures::stream::unfold(self, |mut relay| async move {
            loop {
                match relay.pull().await {
                    Ok(Pull::Chunk(bytes)) => return Some((Ok(bytes), relay)),
                    Ok(Pull::Empty) => continue,
                    Ok(Pull::Closed) => return None,
                    Err(e) => return Some((Err(e), relay)),
                }
            }
        })
    }
}

impl Drop for StreamRelay {
    fn drop(&mut self) {
        if !self.state.is_terminal() {
            debug!("Relay dropped before completion, cancelling token source");
            self.source.cancel();
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// StaticTokenSource
// ────────────────────────────────────────────────────────────────────────────

/// Yields one fixed text, then completes. Streams the rule-based reply.
pub struct StaticTokenSource {
    text: Option<String>,
}

impl StaticTokenSource {
    pub fn new(text: String) -> Self {
        Self { text: Some(text) }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn next(&mut self) -> Result<Option<TextStreamChunk>, SourceError> {
        Ok(self.text.take().map(|text| TextStreamChunk {
            token: None,
            generated_text: Some(text),
        }))
    }

    fn cancel(&mut self) {
        self.text = None;
    }
}
