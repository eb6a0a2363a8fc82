//! Optional external text-generation call.
//!
//! The call is best-effort by design: any failure (missing credential, HTTP
//! transport error, API error response, unparseable body, no usable code in
//! the reply, timeout) resolves to an [`Unavailable`] reason that the
//! orchestrator treats as "use the templated text instead". Nothing in this
//! module is ever surfaced to the user as an error.
//!
//! The request is an OpenAI-style chat completion sent with a blocking HTTP
//! client whose hard timeout comes from config, so a generation never stalls
//! the interface past the configured bound.

use crate::config::Config;
use crate::template::Template;
use log::{debug, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Why the external call produced no usable code.
///
/// All variants are equivalent to the caller: fall back to the template.
/// The distinctions exist so the fallback is an explicit, testable branch
/// and so debug logs say what actually happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// The credential environment variable is unset or empty.
    MissingCredential(String),
    /// Transport-level failure (connect, TLS, DNS).
    Http(String),
    /// The API answered with a non-success status (quota, auth, bad request).
    Api(String),
    /// The response body did not parse as a chat completion.
    Parse(String),
    /// The response parsed but contained no usable blueprint code.
    NoContent,
    /// The request exceeded the configured timeout.
    Timeout,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::MissingCredential(var) => {
                write!(f, "credential environment variable {} is not set", var)
            }
            Unavailable::Http(msg) => write!(f, "transport error: {}", msg),
            Unavailable::Api(msg) => write!(f, "API error: {}", msg),
            Unavailable::Parse(msg) => write!(f, "unparseable response: {}", msg),
            Unavailable::NoContent => write!(f, "response contained no blueprint code"),
            Unavailable::Timeout => write!(f, "request timed out"),
        }
    }
}

// ===== Wire types =====

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Client for the external generation API.
pub struct LlmClient {
    http: reqwest::blocking::Client,
    model: String,
    api_base: String,
    api_key_env: String,
    max_tokens: usize,
    temperature: f32,
}

impl LlmClient {
    /// Build a client from config. The credential is resolved per call, not
    /// here, so a key exported mid-session is picked up.
    pub fn from_config(config: &Config) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            // Builder only fails on TLS backend misconfiguration; the default
            // backend is always available.
            .expect("failed to construct HTTP client");

        Self {
            http,
            model: config.model.clone(),
            api_base: config.api_base.clone(),
            api_key_env: config.api_key_env.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Ask the external model for blueprint code.
    ///
    /// Returns the extracted code on success, or the reason the call could
    /// not be used. Never panics, never blocks past the configured timeout.
    pub fn generate(&self, prompt: &str) -> Result<String, Unavailable> {
        let api_key = match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => key,
            _ => {
                debug!("no credential in {}; using template output", self.api_key_env);
                return Err(Unavailable::MissingCredential(self.api_key_env.clone()));
            }
        };

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!("sending generation request for model {}", self.model);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("generation request timed out");
                    Unavailable::Timeout
                } else {
                    warn!("generation transport error: {}", e);
                    Unavailable::Http(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            if e.is_timeout() {
                Unavailable::Timeout
            } else {
                Unavailable::Http(e.to_string())
            }
        })?;

        if !status.is_success() {
            warn!("generation API returned {}", status);
            return Err(Unavailable::Api(format!("{}: {}", status, body)));
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| Unavailable::Parse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(Unavailable::NoContent)?;

        extract_blueprint_code(&content).ok_or(Unavailable::NoContent)
    }
}

/// Build the generation prompt from a template's intent.
pub fn build_prompt(template: &Template) -> String {
    format!(
        "You are a code generator for Scrypto, the Radix smart contract language.\n\
         \n\
         Rules:\n\
         - Produce one complete, self-contained blueprint.\n\
         - Include every import the code needs.\n\
         - Include a basic test module.\n\
         - Reply with Rust/Scrypto code only, no commentary.\n\
         \n\
         Request: write {}.",
        template.intent
    )
}

/// Pull blueprint code out of a model reply.
///
/// Tries fenced code blocks first (```rust, then any fence), then falls back
/// to the whole reply. Whatever is found must look like Scrypto, i.e. share
/// at least one marker with the generated blueprints, or it is rejected.
pub fn extract_blueprint_code(reply: &str) -> Option<String> {
    // Fence patterns, most specific first.
    let fences = [
        r"(?s)```rust\n(.*?)```",
        r"(?s)```scrypto\n(.*?)```",
        r"(?s)```\n(.*?)```",
    ];

    for pattern in fences {
        // Static patterns; compilation cannot fail.
        let regex = Regex::new(pattern).expect("invalid fence pattern");
        if let Some(captures) = regex.captures(reply) {
            let code = captures[1].trim();
            if looks_like_blueprint(code) {
                return Some(code.to_string());
            }
        }
    }

    let trimmed = reply.trim();
    if looks_like_blueprint(trimmed) {
        return Some(trimmed.to_string());
    }

    None
}

/// Cheap textual sniff for Scrypto-shaped code.
fn looks_like_blueprint(text: &str) -> bool {
    const MARKERS: [&str; 5] = [
        "use scrypto::prelude",
        "#[blueprint]",
        "ComponentAddress",
        "Vault",
        "Bucket",
    ];

    !text.is_empty() && MARKERS.iter().any(|marker| text.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{Template, TemplateId};
    use serial_test::serial;

    #[test]
    fn prompt_interpolates_template_intent() {
        let template = Template::get(TemplateId::TokenFaucet);
        let prompt = build_prompt(template);
        assert!(prompt.contains(template.intent));
        assert!(prompt.contains("Scrypto"));
    }

    #[test]
    fn extracts_rust_fenced_block() {
        let reply = "Here you go:\n```rust\nuse scrypto::prelude::*;\nfn x() {}\n```\nEnjoy!";
        let code = extract_blueprint_code(reply).unwrap();
        assert!(code.starts_with("use scrypto::prelude::*;"));
        assert!(!code.contains("```"));
        assert!(!code.contains("Enjoy"));
    }

    #[test]
    fn extracts_plain_fenced_block() {
        let reply = "```\n#[blueprint]\nmod demo {}\n```";
        let code = extract_blueprint_code(reply).unwrap();
        assert!(code.starts_with("#[blueprint]"));
    }

    #[test]
    fn accepts_bare_reply_that_looks_like_scrypto() {
        let reply = "use scrypto::prelude::*;\n\n#[blueprint]\nmod demo {}\n";
        let code = extract_blueprint_code(reply).unwrap();
        assert_eq!(code, reply.trim());
    }

    #[test]
    fn rejects_prose() {
        assert_eq!(
            extract_blueprint_code("Sorry, I can't help with that."),
            None
        );
    }

    #[test]
    fn rejects_fenced_non_scrypto_code() {
        let reply = "```rust\nfn main() { println!(\"hi\"); }\n```";
        assert_eq!(extract_blueprint_code(reply), None);
    }

    #[test]
    fn rejects_empty_reply() {
        assert_eq!(extract_blueprint_code(""), None);
        assert_eq!(extract_blueprint_code("```rust\n```"), None);
    }

    #[test]
    #[serial]
    fn missing_credential_is_a_fallback_reason() {
        let mut config = Config::default();
        config.api_key_env = "SCRYFORGE_TEST_UNSET_KEY".to_string();
        unsafe { std::env::remove_var("SCRYFORGE_TEST_UNSET_KEY") };

        let client = LlmClient::from_config(&config);
        let result = client.generate("prompt");
        assert_eq!(
            result,
            Err(Unavailable::MissingCredential(
                "SCRYFORGE_TEST_UNSET_KEY".to_string()
            ))
        );
    }

    #[test]
    #[serial]
    fn empty_credential_counts_as_missing() {
        let mut config = Config::default();
        config.api_key_env = "SCRYFORGE_TEST_EMPTY_KEY".to_string();
        unsafe { std::env::set_var("SCRYFORGE_TEST_EMPTY_KEY", "") };

        let client = LlmClient::from_config(&config);
        assert!(matches!(
            client.generate("prompt"),
            Err(Unavailable::MissingCredential(_))
        ));

        unsafe { std::env::remove_var("SCRYFORGE_TEST_EMPTY_KEY") };
    }

    #[test]
    fn unavailable_display_is_descriptive() {
        let reason = Unavailable::MissingCredential("OPENAI_API_KEY".to_string());
        assert!(reason.to_string().contains("OPENAI_API_KEY"));
        assert_eq!(Unavailable::Timeout.to_string(), "request timed out");
    }
}
