use serde::Deserialize;
use std::env;

/// Default system prompt for the open-house assistant.
const DEFAULT_SYSTEM_PROMPT: &str = "You are an assistant helping visitors learn about \
     Saint Francis Xavier School. Base your answers on information from https://sfxschool.ca.";

/// Full server configuration, assembled from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Where to listen
    pub server: ServerConfig,
    /// Hosted AI settings
    pub openai: OpenAiConfig,
    /// Kiosk behavior
    pub kiosk: KioskConfig,
}

/// Bind address for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`, default 127.0.0.1)
    pub host: String,
    /// TCP port (`PORT`, default 3000)
    pub port: u16,
}

/// Credentials and model names for the hosted OpenAI calls.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// API key (`OPENAI_API_KEY`, required)
    pub api_key: String,
    /// API base URL (`OPENAI_API_BASE`)
    pub api_base: String,
    /// Model for chat completions (`CHAT_MODEL`)
    pub chat_model: String,
    /// Model for snapshot interpretation (`VISION_MODEL`)
    pub vision_model: String,
    /// Model for text-to-speech (`SPEECH_MODEL`)
    pub speech_model: String,
    /// Text-to-speech voice name (`SPEECH_VOICE`)
    pub voice: String,
}

/// Kiosk-specific settings.
#[derive(Debug, Clone, Deserialize)]
pub struct KioskConfig {
    /// System prompt prepended to every chat completion (`SYSTEM_PROMPT`)
    pub system_prompt: String,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first.
    ///
    /// Only `OPENAI_API_KEY` is required; everything else has a default.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
            },
            openai: OpenAiConfig {
                api_key: env::var("OPENAI_API_KEY")?,
                api_base: env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
                vision_model: env::var("VISION_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
                speech_model: env::var("SPEECH_MODEL").unwrap_or_else(|_| "tts-1".to_string()),
                voice: env::var("SPEECH_VOICE").unwrap_or_else(|_| "alloy".to_string()),
            },
            kiosk: KioskConfig {
                system_prompt: env::var("SYSTEM_PROMPT")
                    .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_system_prompt_names_the_school() {
        assert!(DEFAULT_SYSTEM_PROMPT.contains("Saint Francis Xavier"));
        assert!(DEFAULT_SYSTEM_PROMPT.contains("sfxschool.ca"));
    }
}
