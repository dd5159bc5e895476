use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::client::{GeneratedCommand, LLMClient, LLMError};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 1000;

/// The model must answer with exactly one POSIX command wrapped in a
/// triple-backtick fence; everything else downstream assumes that shape.
const SYSTEM_PROMPT: &str = r#"You are a shell command generator. Your task is to convert natural language requests into a single, executable POSIX shell command.

CRITICAL RULES:
1. Return ONLY the shell command wrapped in triple backticks - no explanations before or after.
2. Output must be exactly ONE line inside the backticks.
3. The command must be valid for POSIX-compliant shells (bash, zsh, sh).
4. Never include destructive commands like: rm -rf /, dd to raw devices, mkfs, shutdown, reboot, format commands, or fork bombs.
5. Use standard Unix tools and common utilities.
6. Include pipes, redirections, and sub-shells only when necessary.
7. If the request is unclear or unsafe, return a safe alternative or refuse.

Examples of correct output:

User: "kill 8000 and 8001 port"
Assistant:
```
kill $(lsof -t -i :8000) $(lsof -t -i :8001)
```

User: "find all log files modified in last 24 hours and show their size"
Assistant:
```
find . -name "*.log" -type f -mtime -1 -exec ls -lh {} \; | awk '{print $5, $9}'
```

Examples of INCORRECT output (never do this):
- ls -la
- Here's the command: ```ls -la```
- You can use this command:
  ```bash
  ls -la
  ```

Remember: Always wrap the command in triple backticks with nothing else before or after."#;

const RETRY_REMINDER: &str = "IMPORTANT: Return ONLY the command wrapped in triple backticks (```command here```) with no explanation and no extra text. Just the command in backticks.";

#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    system: &'static str,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

pub struct AnthropicClient {
    api_key: String,
    model: String,
    http_client: Client,
}

impl AnthropicClient {
    pub fn new(api_key: String, model: String) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            model,
            http_client,
        }
    }

    async fn call_api(&self, prompt: &str) -> Result<String, LLMError> {
        let request_body = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: 1024,
            system: SYSTEM_PROMPT,
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let mut attempt = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            attempt += 1;

            let response = self
                .http_client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await?;

            let status = response.status();

            if status.is_success() {
                let api_response: AnthropicResponse = response.json().await?;
                return match api_response.content.first() {
                    Some(content) => Ok(content.text.clone()),
                    None => Err(LLMError::InvalidResponse(
                        "no content in response".to_string(),
                    )),
                };
            } else if status.as_u16() == 429 {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);

                if attempt >= MAX_RETRIES {
                    return Err(LLMError::RateLimitExceeded(retry_after));
                }

                let wait_ms = retry_after.saturating_mul(1000).max(backoff_ms);
                tracing::debug!(wait_ms, attempt, "rate limited, retrying");
                tokio::time::sleep(Duration::from_millis(wait_ms)).await;
                backoff_ms *= 2;
            } else {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                return Err(LLMError::ApiError(format!(
                    "API returned status {status}: {error_text}"
                )));
            }
        }
    }

    /// Pull the command out of a fenced reply.
    ///
    /// Strips one surrounding backtick fence (with an optional language
    /// tag) and keeps the inner text as-is, newlines included, so the
    /// validator still sees multi-line replies for what they are.
    /// Returns `None` when the reply carries no fence.
    fn extract_fenced(response: &str) -> Option<String> {
        let trimmed = response.trim();
        let after_open = trimmed.find("```")? + 3;
        let rest = &trimmed[after_open..];
        let close = rest.find("```")?;
        let mut inner = &rest[..close];

        if let Some(newline) = inner.find('\n') {
            let tag = inner[..newline].trim();
            if !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric()) {
                inner = &inner[newline + 1..];
            }
        }

        Some(inner.trim().to_string())
    }
}

#[async_trait]
impl LLMClient for AnthropicClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedCommand, LLMError> {
        let response = self.call_api(prompt).await?;
        if let Some(command) = Self::extract_fenced(&response) {
            return Ok(GeneratedCommand { command });
        }

        // The model ignored the fencing contract; remind it once.
        tracing::debug!("response carried no code fence, retrying with reminder");
        let retry_prompt = format!("{prompt}\n\n{RETRY_REMINDER}");
        let response = self.call_api(&retry_prompt).await?;
        let command =
            Self::extract_fenced(&response).unwrap_or_else(|| response.trim().to_string());
        Ok(GeneratedCommand { command })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_fence() {
        let response = "```\nls -la\n```";
        assert_eq!(
            AnthropicClient::extract_fenced(response),
            Some("ls -la".to_string())
        );
    }

    #[test]
    fn test_extract_single_line_fence() {
        let response = "```ls -la```";
        assert_eq!(
            AnthropicClient::extract_fenced(response),
            Some("ls -la".to_string())
        );
    }

    #[test]
    fn test_extract_language_tagged_fence() {
        let response = "```bash\ngit log --oneline -5\n```";
        assert_eq!(
            AnthropicClient::extract_fenced(response),
            Some("git log --oneline -5".to_string())
        );
    }

    #[test]
    fn test_extract_preserves_inner_newlines() {
        // Multi-line replies must reach the validator intact so the
        // multiple-lines rejection can fire.
        let response = "```\nls -la\npwd\n```";
        assert_eq!(
            AnthropicClient::extract_fenced(response),
            Some("ls -la\npwd".to_string())
        );
    }

    #[test]
    fn test_extract_ignores_surrounding_prose() {
        let response = "Here you go:\n```\ndf -h\n```\nHope that helps!";
        assert_eq!(
            AnthropicClient::extract_fenced(response),
            Some("df -h".to_string())
        );
    }

    #[test]
    fn test_extract_without_fence() {
        assert_eq!(AnthropicClient::extract_fenced("ls -la"), None);
        assert_eq!(AnthropicClient::extract_fenced(""), None);
    }

    #[test]
    fn test_extract_unclosed_fence() {
        assert_eq!(AnthropicClient::extract_fenced("```\nls -la"), None);
    }

    #[test]
    fn test_first_word_is_not_mistaken_for_language_tag() {
        // A single-word command on the fence line is the command, not a
        // tag, when nothing follows it.
        let response = "```uptime```";
        assert_eq!(
            AnthropicClient::extract_fenced(response),
            Some("uptime".to_string())
        );
    }
}
