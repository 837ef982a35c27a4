use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::time::sleep;

use crate::error::{Error, Result};

/// Client for the generative-text endpoint behind the Sangini advisory
/// screens. Sends a fixed system prompt plus the user's free-text query
/// and returns the generated text.

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Retries after the first attempt, for 429 and 5xx only.
const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 1000;

/// System prompt for the symptom analyzer.
pub const SYMPTOM_ANALYZER_PROMPT: &str = "You are a health assistant in a period tracking app. A user is describing their symptoms. Provide a brief, supportive, and informative general overview of what *could* be related to these symptoms (e.g., 'This can sometimes be related to hormonal changes...'). **CRITICAL:** Do NOT provide a diagnosis. Your primary goal is to validate their concern and strongly urge them to see a doctor. Keep the response to 2-3 short paragraphs.";

/// System prompt for general pregnancy questions.
pub const PREGNANCY_QUERY_PROMPT: &str = "You are a helpful assistant for a pregnant user in a health app. The user is asking a non-urgent, general question about pregnancy. Provide a supportive, informative, and clear answer. **CRITICAL:** Always end your response with a clear disclaimer that this is general information, not medical advice, and they must consult their doctor or midwife for any personal health concerns.";

/// Disclaimer the presentation layer must append to every displayed
/// response. The client itself never adds it.
pub const MEDICAL_DISCLAIMER: &str = "This is NOT a medical diagnosis. Please consult a doctor or healthcare professional for any health concerns.";

pub struct InsightClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl InsightClient {
    pub fn new(http: Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: GEMINI_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }

    /// Ask the endpoint for advisory text.
    ///
    /// 429 and 5xx responses are retried up to 3 times with exponential
    /// backoff (1s, 2s, 4s). Any other failure, including a success body
    /// with no extractable text, is returned immediately as a typed error;
    /// the caller decides how to render it.
    pub async fn ask(&self, system_prompt: &str, user_query: &str) -> Result<String> {
        let payload = json!({
            "systemInstruction": { "parts": [{ "text": system_prompt }] },
            "contents": [{ "parts": [{ "text": user_query }] }],
        });

        let mut retries_left = MAX_RETRIES;
        let mut delay = Duration::from_millis(INITIAL_BACKOFF_MS);
        loop {
            let response = self
                .http
                .post(self.endpoint())
                .json(&payload)
                .send()
                .await
                .map_err(Error::InsightTransport)?;

            let status = response.status();
            if status.is_success() {
                let body: Value = response.json().await.map_err(Error::InsightTransport)?;
                return extract_text(&body).ok_or(Error::InsightShape);
            }

            if is_retryable(status) && retries_left > 0 {
                log::warn!(
                    "advisory endpoint returned {}, retrying in {}ms",
                    status,
                    delay.as_millis()
                );
                sleep(delay).await;
                delay *= 2;
                retries_left -= 1;
                continue;
            }

            let body = response.text().await.unwrap_or_default();
            return Err(Error::InsightStatus { status, body });
        }
    }
}

/// Transient statuses worth retrying: rate limiting and server errors.
pub fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Pull the generated text out of a success body.
pub fn extract_text(body: &Value) -> Option<String> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
}
