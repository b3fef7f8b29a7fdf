//! Unit tests for the hosted AI client abstractions.

use signbot::llm::{AssistantFactory, Provider, ProviderFactory};
use signbot::utils::config::OpenAiConfig;

fn test_openai_config() -> OpenAiConfig {
    OpenAiConfig {
        api_key: "test-key".to_string(),
        api_base: "https://api.openai.com/v1".to_string(),
        chat_model: "gpt-4o".to_string(),
        vision_model: "gpt-4o".to_string(),
        speech_model: "tts-1".to_string(),
        voice: "nova".to_string(),
    }
}

#[test]
fn provider_from_config_carries_all_fields() {
    let provider = Provider::from_config(&test_openai_config());

    let Provider::OpenAi {
        api_key,
        api_base,
        chat_model,
        vision_model,
        speech_model,
        voice,
    } = provider;

    assert_eq!(api_key, "test-key");
    assert_eq!(api_base, "https://api.openai.com/v1");
    assert_eq!(chat_model, "gpt-4o");
    assert_eq!(vision_model, "gpt-4o");
    assert_eq!(speech_model, "tts-1");
    assert_eq!(voice, "nova");
}

#[test]
fn provider_name() {
    let provider = Provider::from_config(&test_openai_config());
    assert_eq!(provider.name(), "OpenAI");
}

#[tokio::test]
async fn factory_creates_a_client_for_valid_config() {
    let factory = ProviderFactory::new(Provider::from_config(&test_openai_config()));

    let client = factory.create().await.unwrap();
    assert_eq!(client.model_name(), "gpt-4o");
}

#[tokio::test]
async fn factory_rejects_unknown_voice() {
    let mut config = test_openai_config();
    config.voice = "foghorn".to_string();
    let factory = ProviderFactory::new(Provider::from_config(&config));

    let result = factory.create().await;
    let err = match result {
        Ok(_) => panic!("Expected error"),
        Err(e) => e.to_string(),
    };
    assert!(err.contains("foghorn"));
}
