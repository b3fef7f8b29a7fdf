//! Assistant client abstractions and provider management.

use crate::types::Result;
use crate::utils::config::OpenAiConfig;
use async_trait::async_trait;

/// Client for the three hosted calls the kiosk makes.
///
/// All providers implement this trait, allowing the API layer (and the
/// integration tests) to swap providers without touching handler code.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Single-shot chat completion over (role, content) pairs.
    ///
    /// The caller supplies the full prompt: system message, prior turns, and
    /// the new user message, in order.
    async fn chat(&self, messages: &[(String, String)]) -> Result<String>;

    /// Describe a JPEG snapshot given a mode-specific prompt.
    async fn describe_image(&self, prompt: &str, image: &[u8]) -> Result<String>;

    /// Synthesize speech for the given text, returning MP3 bytes.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;

    /// The chat model name/identifier.
    fn model_name(&self) -> &str;
}

/// Provider enum for runtime selection.
///
/// The kiosk talks to one hosted provider today; the enum keeps the seam where
/// a second provider would slot in.
#[derive(Debug, Clone)]
pub enum Provider {
    /// OpenAI API provider (including compatible endpoints via `api_base`)
    OpenAi {
        /// API key
        api_key: String,
        /// API base URL
        api_base: String,
        /// Chat-completion model
        chat_model: String,
        /// Vision model
        vision_model: String,
        /// Text-to-speech model
        speech_model: String,
        /// Text-to-speech voice
        voice: String,
    },
}

impl Provider {
    /// Build a provider from the environment configuration.
    pub fn from_config(config: &OpenAiConfig) -> Self {
        Provider::OpenAi {
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            chat_model: config.chat_model.clone(),
            vision_model: config.vision_model.clone(),
            speech_model: config.speech_model.clone(),
            voice: config.voice.clone(),
        }
    }

    /// Create a client instance for this provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured voice or speech model is not one the
    /// provider supports.
    pub fn create_client(&self) -> Result<Box<dyn AssistantClient>> {
        match self {
            Provider::OpenAi {
                api_key,
                api_base,
                chat_model,
                vision_model,
                speech_model,
                voice,
            } => Ok(Box::new(super::openai::OpenAiClient::new(
                api_key.clone(),
                api_base.clone(),
                chat_model.clone(),
                vision_model.clone(),
                speech_model,
                voice,
            )?)),
        }
    }

    /// Get a human-readable name for this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAi { .. } => "OpenAI",
        }
    }
}

/// Client creation seam used by the API layer.
///
/// Handlers go through this trait rather than constructing clients, so the
/// integration tests can substitute a mock assistant.
#[async_trait]
pub trait AssistantFactory: Send + Sync {
    /// Create a client for the default provider.
    async fn create(&self) -> Result<Box<dyn AssistantClient>>;
}

/// Configuration-based client factory.
pub struct ProviderFactory {
    default_provider: Provider,
}

impl ProviderFactory {
    /// Create a new factory with the specified default provider.
    pub fn new(default_provider: Provider) -> Self {
        Self { default_provider }
    }

    /// Get a reference to the default provider.
    pub fn default_provider(&self) -> &Provider {
        &self.default_provider
    }
}

#[async_trait]
impl AssistantFactory for ProviderFactory {
    async fn create(&self) -> Result<Box<dyn AssistantClient>> {
        self.default_provider.create_client()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider() -> Provider {
        Provider::OpenAi {
            api_key: "test-key".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4o".to_string(),
            vision_model: "gpt-4o".to_string(),
            speech_model: "tts-1".to_string(),
            voice: "alloy".to_string(),
        }
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(test_provider().name(), "OpenAI");
    }

    #[test]
    fn test_create_client_with_known_voice() {
        let client = test_provider().create_client();
        assert!(client.is_ok());
    }

    #[test]
    fn test_create_client_rejects_unknown_voice() {
        let provider = Provider::OpenAi {
            api_key: "test-key".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4o".to_string(),
            vision_model: "gpt-4o".to_string(),
            speech_model: "tts-1".to_string(),
            voice: "megaphone".to_string(),
        };

        let result = provider.create_client();
        let err = match result {
            Ok(_) => panic!("Expected error"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("megaphone"));
    }

    #[tokio::test]
    async fn test_factory_default_provider() {
        let factory = ProviderFactory::new(test_provider());
        assert_eq!(factory.default_provider().name(), "OpenAI");
        assert!(factory.create().await.is_ok());
    }
}
