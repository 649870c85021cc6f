//! # Savings tips
//!
//! Turns the category totals into a one-line spending summary, sends it to a
//! chat-completion endpoint as a single user message and returns the reply.
//! The HTTP call goes through [`ChatTransport`] so the browser can use
//! `gloo::net` and tests can use a fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::aggregates::CategoryTotals;
use crate::config::TipsConfig;
use crate::error::TipsError;

/// Summary sent when there is no spending to describe
pub const EMPTY_SUMMARY: &str = "No expenses recorded yet.";

/// Returned when the provider answers without any text
pub const NO_TIPS: &str = "No tips returned.";

/// Shown to the user instead of a raw error
pub const TIPS_UNAVAILABLE: &str = "Could not fetch savings tips right now. Please try again later.";

/// `Groceries: 300, Transport: 400`
pub fn spending_summary(totals: &CategoryTotals) -> String {
    if totals.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }
    totals
        .iter()
        .map(|(category, total)| format!("{}: {}", category, total.normalize()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn build_prompt(summary: &str) -> String {
    format!(
        "You are a friendly, practical budgeting assistant.\n\
         Summarize this spending breakdown and suggest 3 practical, polite, and culturally sensitive \
         ways to save money for a family in a low-bandwidth context.\n\
         Spending: {}\n\
         Output as short bullet points.",
        summary
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ReplyMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplyMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Trimmed content of the first choice, or [`NO_TIPS`] if there is none
    pub fn reply_text(&self) -> String {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_TIPS)
            .to_string()
    }
}

/// Status and body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One JSON POST. Implementations report connection failures as
/// [`TipsError::Network`] and return any HTTP status as an [`HttpReply`].
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn post_json(&self, url: &str, bearer: Option<&str>, body: String) -> Result<HttpReply, TipsError>;
}

pub struct TipRequester<T> {
    transport: T,
    config: TipsConfig,
}

impl<T: ChatTransport> TipRequester<T> {
    pub fn new(transport: T, config: TipsConfig) -> Self {
        Self { transport, config }
    }

    pub fn build_request(&self, totals: &CategoryTotals) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(build_prompt(&spending_summary(totals)))],
            max_tokens: self.config.max_tokens,
        }
    }

    /// Ask for tips on the current totals. One request, no retry, no cache.
    pub async fn request_tips(&self, totals: &CategoryTotals) -> Result<String, TipsError> {
        let bearer = self.config.bearer_token()?;
        let request = self.build_request(totals);
        let body = serde_json::to_string(&request).map_err(|e| TipsError::Encode(e.to_string()))?;

        debug!(endpoint = %self.config.endpoint, categories = totals.len(), "requesting savings tips");
        let reply = self.transport.post_json(&self.config.endpoint, bearer, body).await?;

        if !reply.is_success() {
            warn!(status = reply.status, "tips provider returned an error");
            return Err(TipsError::Provider { status: reply.status, body: reply.body });
        }

        let response: ChatCompletionResponse =
            serde_json::from_str(&reply.body).map_err(|e| TipsError::Decode(e.to_string()))?;
        Ok(response.reply_text())
    }
}

/// Text for the tips panel: the reply, or [`TIPS_UNAVAILABLE`] on any error
pub fn tips_message(result: &Result<String, TipsError>) -> String {
    match result {
        Ok(text) => text.clone(),
        Err(e) => {
            warn!(error = %e, "savings tips unavailable");
            TIPS_UNAVAILABLE.to_string()
        }
    }
}

/// Issued by [`RequestGate::begin`]; only the newest ticket is current
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Cancel-and-replace bookkeeping for in-flight tip requests.
///
/// Starting a request or cancelling invalidates every earlier ticket, so a
/// late reply from a superseded request is dropped instead of overwriting
/// the newer result. A request started with [`RequestGate::begin_abortable`]
/// also has its abort hook run when it is superseded or cancelled.
#[derive(Default)]
pub struct RequestGate {
    generation: u64,
    abort: Option<Box<dyn FnOnce()>>,
}

impl RequestGate {
    pub fn begin(&mut self) -> RequestTicket {
        self.abort_pending();
        self.generation += 1;
        RequestTicket(self.generation)
    }

    /// Like [`begin`](Self::begin), and `abort` stops the underlying request
    pub fn begin_abortable(&mut self, abort: impl FnOnce() + 'static) -> RequestTicket {
        let ticket = self.begin();
        self.abort = Some(Box::new(abort));
        ticket
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// The request behind `ticket` is done and no longer needs aborting
    pub fn finish(&mut self, ticket: RequestTicket) {
        if self.is_current(ticket) {
            self.abort = None;
        }
    }

    pub fn cancel(&mut self) {
        self.abort_pending();
        self.generation += 1;
    }

    fn abort_pending(&mut self) {
        if let Some(abort) = self.abort.take() {
            debug!(generation = self.generation, "aborting superseded tips request");
            abort();
        }
    }
}

impl fmt::Debug for RequestGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestGate")
            .field("generation", &self.generation)
            .field("abortable", &self.abort.is_some())
            .finish()
    }
}
