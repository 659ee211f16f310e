/// LLM Client — the single point of entry for all Groq API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All LLM interactions MUST go through this module.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "llama-3.3-70b-versatile";
const MAX_TOKENS: u32 = 3000;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GroqError {
    error: GroqErrorBody,
}

#[derive(Debug, Deserialize)]
struct GroqErrorBody {
    message: String,
}

/// The single LLM client used by all services.
/// Wraps the Groq chat-completions API with retry logic and JSON recovery.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a call to the Groq API and returns the completion text.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(GROQ_API_URL)
                .bearer_auth(&self.api_key)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse error message
                let message = serde_json::from_str::<GroqError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let chat_response: ChatResponse = response.json().await?;

            if let Some(usage) = &chat_response.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            return chat_response
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .filter(|text| !text.trim().is_empty())
                .ok_or(LlmError::EmptyContent);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Convenience method that calls the LLM and deserializes the response as
    /// JSON, salvaging the object from code fences, surrounding prose, and
    /// stray control characters first. The prompt must instruct the model to
    /// return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(&self, prompt: &str) -> Result<T, LlmError> {
        let text = self.call(prompt).await?;
        let json = extract_json(&text).ok_or(LlmError::EmptyContent)?;
        serde_json::from_str(&json).map_err(LlmError::Parse)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| stripped.trim_start())
    } else {
        text
    }
}

/// Pulls the outermost `{ ... }` object out of LLM output and scrubs control
/// characters that break deserialization. Newlines become spaces so string
/// literals survive. Returns `None` when no object is present.
fn extract_json(text: &str) -> Option<String> {
    let text = strip_json_fences(text);
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    let mut cleaned = String::with_capacity(end - start + 1);
    for c in text[start..=end].chars() {
        match c {
            '\n' => cleaned.push(' '),
            c if c.is_control() => {}
            c => cleaned.push(c),
        }
    }
    Some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_json_ignores_surrounding_prose() {
        let input = "Here is the analysis:\n{\"matched\": [\"Rust\"]}\nHope it helps!";
        assert_eq!(
            extract_json(input).as_deref(),
            Some("{\"matched\": [\"Rust\"]}")
        );
    }

    #[test]
    fn test_extract_json_scrubs_control_characters() {
        let input = "{\"a\":\n\"b\u{1}c\"}";
        assert_eq!(extract_json(input).as_deref(), Some("{\"a\": \"bc\"}"));
    }

    #[test]
    fn test_extract_json_none_without_object() {
        assert_eq!(extract_json("no json here"), None);
        assert_eq!(extract_json("} reversed {"), None);
    }
}
