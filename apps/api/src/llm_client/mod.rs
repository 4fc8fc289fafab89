/// LLM Client — the single point of entry for generative-model calls.
///
/// ARCHITECTURAL RULE: handlers never talk to the inference API directly.
/// They hold an `Arc<dyn TextGenerator>` and this module provides the
/// Hugging Face text-generation-inference implementation.
///
/// No retries: a failed call is reported to the handler as-is.
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::chat::prompts::SYSTEM_PROMPT;
use crate::relay::{SourceError, StreamToken, TextStreamChunk, TokenSource};

pub mod prompts;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Whole-request timeout for non-streaming calls. Streams are bounded by the client instead.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Text generation backend. Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the complete generated text.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Starts a generation and returns its token source without reading it.
    async fn generate_stream(&self, prompt: &str) -> Result<Box<dyn TokenSource>, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct GenerateParameters {
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// The hosted API returns a list; a bare TGI server returns a single object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    Many(Vec<GeneratedText>),
    One(GeneratedText),
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

/// One SSE `data:` payload. Errors can arrive in-band after a 200.
#[derive(Debug, Deserialize)]
struct StreamEvent {
    #[serde(default)]
    token: Option<StreamToken>,
    #[serde(default)]
    generated_text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// HfClient
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct HfClient {
    client: Client,
    api_url: String,
    api_token: String,
    max_new_tokens: u32,
}

impl HfClient {
    pub fn new(api_url: String, api_token: String, max_new_tokens: u32) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?,
            api_url,
            api_token,
            max_new_tokens,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn send(&self, prompt: &str, stream: bool) -> Result<reqwest::Response, LlmError> {
        let inputs = prompts::instruct(SYSTEM_PROMPT, prompt);
        let body = GenerateRequest {
            inputs: &inputs,
            parameters: GenerateParameters {
                max_new_tokens: self.max_new_tokens,
                return_full_text: false,
            },
            stream,
        };

        let mut request = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(&body);
        if !stream {
            request = request.timeout(REQUEST_TIMEOUT);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl TextGenerator for HfClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.send(prompt, false).await?;
        let parsed: GenerateResponse = response.json().await?;

        let text = match parsed {
            GenerateResponse::Many(items) => items.into_iter().next().map(|g| g.generated_text),
            GenerateResponse::One(item) => Some(item.generated_text),
        }
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(LlmError::EmptyContent)?;

        debug!("LLM call succeeded: {} chars generated", text.len());
        Ok(text)
    }

    async fn generate_stream(&self, prompt: &str) -> Result<Box<dyn TokenSource>, LlmError> {
        let response = self.send(prompt, true).await?;
        debug!("LLM stream opened");
        Ok(Box::new(HfTokenStream::new(response.bytes_stream().boxed())))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HfTokenStream — SSE body as a TokenSource
// ────────────────────────────────────────────────────────────────────────────

/// Reads `data:` events from a streaming response body, one event per `next`.
/// Dropping the body closes the upstream connection, which is how `cancel`
/// releases the generation.
pub struct HfTokenStream {
    body: Option<BoxStream<'static, Result<Bytes, reqwest::Error>>>,
    buffer: Vec<u8>,
}

impl HfTokenStream {
    pub fn new(body: BoxStream<'static, Result<Bytes, reqwest::Error>>) -> Self {
        Self {
            body: Some(body),
            buffer: Vec::new(),
        }
    }

    /// Takes one complete line, or whatever is left once the body has ended.
    fn take_line(&mut self) -> Option<String> {
        if let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            return Some(String::from_utf8_lossy(&line).into_owned());
        }
        if self.body.is_none() && !self.buffer.is_empty() {
            let rest = std::mem::take(&mut self.buffer);
            return Some(String::from_utf8_lossy(&rest).into_owned());
        }
        None
    }
}

fn parse_event_line(line: &str) -> Result<Option<TextStreamChunk>, LlmError> {
    let Some(payload) = line.trim().strip_prefix("data:") else {
        return Ok(None); // blank separators, comments, `event:` lines
    };
    let payload = payload.trim();
    if payload.is_empty() {
        return Ok(None);
    }

    let event: StreamEvent = serde_json::from_str(payload)?;
    if let Some(error) = event.error {
        return Err(LlmError::Stream(error));
    }

    Ok(Some(TextStreamChunk {
        token: event.token,
        generated_text: event.generated_text,
    }))
}

#[async_trait]
impl TokenSource for HfTokenStream {
    async fn next(&mut self) -> Result<Option<TextStreamChunk>, SourceError> {
        loop {
            if let Some(line) = self.take_line() {
                match parse_event_line(&line)? {
                    Some(chunk) => return Ok(Some(chunk)),
                    None => continue,
                }
            }

            let Some(body) = self.body.as_mut() else {
                return Ok(None);
            };

            let next = body.next().await;
            match next {
                Some(Ok(bytes)) => self.buffer.extend_from_slice(&bytes),
                Some(Err(e)) => {
                    self.body = None;
                    self.buffer.clear();
                    return Err(LlmError::Http(e).into());
                }
                None => self.body = None,
            }
        }
    }

    fn cancel(&mut self) {
        if self.body.take().is_some() {
            debug!("LLM stream cancelled, upstream connection dropped");
        }
        self.buffer.clear();
    }
}
