use crate::llm::client::AssistantClient;
use crate::types::{AppError, Result};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::audio::{CreateSpeechRequestArgs, SpeechModel, Voice},
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestMessageContentPartImageArgs,
        ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContentPart, CreateChatCompletionRequestArgs,
        ImageDetail, ImageUrlArgs,
    },
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};

/// Assistant client backed by the hosted OpenAI APIs.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    chat_model: String,
    vision_model: String,
    speech_model: SpeechModel,
    voice: Voice,
}

impl OpenAiClient {
    /// Build a client; fails when the voice name is not a known OpenAI voice.
    pub fn new(
        api_key: String,
        api_base: String,
        chat_model: String,
        vision_model: String,
        speech_model: &str,
        voice: &str,
    ) -> Result<Self> {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        Ok(Self {
            client: Client::with_config(config),
            chat_model,
            vision_model,
            speech_model: parse_speech_model(speech_model),
            voice: parse_voice(voice)?,
        })
    }
}

#[async_trait]
impl AssistantClient for OpenAiClient {
    async fn chat(&self, messages: &[(String, String)]) -> Result<String> {
        let chat_messages: Vec<ChatCompletionRequestMessage> = messages
            .iter()
            .map(|(role, content)| match role.as_str() {
                "system" => Ok(ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(content.clone()),
                )),
                "assistant" => Ok(ChatCompletionRequestMessage::Assistant(
                    ChatCompletionRequestAssistantMessageArgs::default()
                        .content(content.clone())
                        .build()
                        .map_err(|e| AppError::Chat(format!("Failed to build request: {}", e)))?,
                )),
                _ => Ok(ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(content.clone()),
                )),
            })
            .collect::<Result<_>>()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.chat_model)
            .messages(chat_messages)
            .build()
            .map_err(|e| AppError::Chat(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::Chat(format!("OpenAI API error: {}", e)))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AppError::Chat("No response from OpenAI".to_string()))
    }

    async fn describe_image(&self, prompt: &str, image: &[u8]) -> Result<String> {
        // The snapshot travels inline as a data URL, the same single-call shape
        // the vision-capable chat endpoint expects.
        let encoded = general_purpose::STANDARD.encode(image);
        let data_url = format!("data:image/jpeg;base64,{}", encoded);

        let parts: Vec<ChatCompletionRequestUserMessageContentPart> = vec![
            ChatCompletionRequestMessageContentPartTextArgs::default()
                .text(prompt)
                .build()
                .map_err(|e| AppError::Vision(format!("Failed to build request: {}", e)))?
                .into(),
            ChatCompletionRequestMessageContentPartImageArgs::default()
                .image_url(
                    ImageUrlArgs::default()
                        .url(data_url)
                        .detail(ImageDetail::Auto)
                        .build()
                        .map_err(|e| AppError::Vision(format!("Failed to build request: {}", e)))?,
                )
                .build()
                .map_err(|e| AppError::Vision(format!("Failed to build request: {}", e)))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.vision_model)
            .messages(vec![ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(parts)
                    .build()
                    .map_err(|e| AppError::Vision(format!("Failed to build request: {}", e)))?,
            )])
            .build()
            .map_err(|e| AppError::Vision(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::Vision(format!("OpenAI API error: {}", e)))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .map(|content| content.trim().to_string())
            .ok_or_else(|| AppError::Vision("No response from OpenAI".to_string()))
    }

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        let request = CreateSpeechRequestArgs::default()
            .input(text)
            .model(self.speech_model.clone())
            .voice(self.voice.clone())
            .build()
            .map_err(|e| AppError::Speech(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .audio()
            .speech()
            .create(request)
            .await
            .map_err(|e| AppError::Speech(format!("OpenAI API error: {}", e)))?;

        Ok(response.bytes.to_vec())
    }

    fn model_name(&self) -> &str {
        &self.chat_model
    }
}

fn parse_speech_model(model: &str) -> SpeechModel {
    match model {
        "tts-1" => SpeechModel::Tts1,
        "tts-1-hd" => SpeechModel::Tts1Hd,
        other => SpeechModel::Other(other.to_string()),
    }
}

fn parse_voice(voice: &str) -> Result<Voice> {
    match voice.to_lowercase().as_str() {
        "alloy" => Ok(Voice::Alloy),
        "echo" => Ok(Voice::Echo),
        "fable" => Ok(Voice::Fable),
        "onyx" => Ok(Voice::Onyx),
        "nova" => Ok(Voice::Nova),
        "shimmer" => Ok(Voice::Shimmer),
        other => Err(AppError::Config(format!(
            "Unknown speech voice '{}'. Supported: alloy, echo, fable, onyx, nova, shimmer",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_voices_parse() {
        assert!(matches!(parse_voice("alloy"), Ok(Voice::Alloy)));
        assert!(matches!(parse_voice("Nova"), Ok(Voice::Nova)));
    }

    #[test]
    fn unknown_voice_is_a_config_error() {
        let err = match parse_voice("robot") {
            Ok(_) => panic!("Expected error"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("robot"));
    }

    #[test]
    fn speech_model_falls_back_to_other() {
        assert!(matches!(parse_speech_model("tts-1"), SpeechModel::Tts1));
        assert!(matches!(parse_speech_model("tts-1-hd"), SpeechModel::Tts1Hd));
        assert!(matches!(
            parse_speech_model("gpt-4o-mini-tts"),
            SpeechModel::Other(_)
        ));
    }
}
