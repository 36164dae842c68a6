use regex::Regex;
use std::fmt;

/// Redacts credentials from text before it is logged.
///
/// Telegram request URLs embed the bot token (`/bot<token>/sendMessage`),
/// so transport errors that echo the URL would leak it.
#[derive(Clone)]
pub struct SecretScrubber {
    bot_token_pattern: Regex,
    token_pattern: Regex,
    bearer_pattern: Regex,
}

impl SecretScrubber {
    /// Create a new scrubber
    pub fn new() -> Self {
        Self {
            // Telegram bot tokens: <bot id>:<35-char secret>
            bot_token_pattern: Regex::new(r"\d{5,}:[A-Za-z0-9_-]{30,}")
                .expect("bot token pattern is valid"),
            // Match generic tokens
            token_pattern: Regex::new(
                r#"["']?(?:api_key|apikey|token|secret)["']?\s*[:=]\s*["']?([a-zA-Z0-9-_\.]{20,})["']?"#,
            )
            .expect("token pattern is valid"),
            // Match Bearer tokens in Authorization headers
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9-_\.]+")
                .expect("bearer pattern is valid"),
        }
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let mut scrubbed = self
            .bot_token_pattern
            .replace_all(message, "[BOT_TOKEN_REDACTED]")
            .to_string();
        scrubbed = self
            .bearer_pattern
            .replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]")
            .to_string();
        scrubbed = self
            .token_pattern
            .replace_all(&scrubbed, |caps: &regex::Captures| {
                // Keep the field name, drop the value
                let full_match = &caps[0];
                if let Some(colon_pos) = full_match.find(':') {
                    format!("{}:[REDACTED]", &full_match[..colon_pos])
                } else if let Some(eq_pos) = full_match.find('=') {
                    format!("{}=[REDACTED]", &full_match[..eq_pos])
                } else {
                    "[REDACTED]".to_string()
                }
            })
            .to_string();
        scrubbed
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
