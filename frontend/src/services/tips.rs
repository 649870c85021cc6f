use async_trait::async_trait;
use gloo::net::http::Request;
use shared::{ChatTransport, HttpReply, TipsError};
use web_sys::AbortSignal;

/// Sends chat-completion requests with the browser fetch API
#[derive(Clone, Default)]
pub struct GlooTransport {
    signal: Option<AbortSignal>,
}

impl GlooTransport {
    /// Requests sent through this transport stop when `signal` fires
    pub fn with_abort_signal(signal: AbortSignal) -> Self {
        Self { signal: Some(signal) }
    }
}

#[async_trait(?Send)]
impl ChatTransport for GlooTransport {
    async fn post_json(&self, url: &str, bearer: Option<&str>, body: String) -> Result<HttpReply, TipsError> {
        let mut builder = Request::post(url)
            .header("Content-Type", "application/json")
            .abort_signal(self.signal.as_ref());
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let request = builder
            .body(body)
            .map_err(|e| TipsError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| TipsError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(HttpReply { status, body })
    }
}
