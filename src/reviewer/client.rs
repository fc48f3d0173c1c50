use crate::{config::LlmConfig, Error, Result};
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a senior code reviewer. Review the submitted \
    code for correctness, readability, performance, and security issues. Point out concrete \
    problems with suggested fixes, and keep the review focused on the code that was provided.";

/// The external collaborator that turns a code snippet into a review.
///
/// Injected into the HTTP handler so tests can substitute a double.
#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn review(&self, code: &str) -> Result<String>;
}

pub struct OpenAiReviewer {
    client: Client<OpenAIConfig>,
    model: String,
    system_prompt: String,
    request_timeout: Duration,
}

impl OpenAiReviewer {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
            system_prompt: config
                .system_prompt
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

#[async_trait]
impl ReviewService for OpenAiReviewer {
    async fn review(&self, code: &str) -> Result<String> {
        debug!("Requesting review for {} bytes of code", code.len());

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(ChatCompletionRequestSystemMessageContent::Text(
                    self.system_prompt.clone(),
                ))
                .build()
                .map_err(|e| Error::llm(format!("Failed to build system message: {}", e)))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(ChatCompletionRequestUserMessageContent::Text(
                    code.to_string(),
                ))
                .build()
                .map_err(|e| Error::llm(format!("Failed to build user message: {}", e)))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()?;

        let response = tokio::time::timeout(self.request_timeout, self.client.chat().create(request))
            .await
            .map_err(|_| {
                Error::llm(format!(
                    "Review request timed out after {}s",
                    self.request_timeout.as_secs()
                ))
            })??;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| Error::llm("Completion response contained no review text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> LlmConfig {
        LlmConfig {
            provider: "openai".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gpt-4".to_string(),
            system_prompt: None,
            request_timeout_secs: 60,
        }
    }

    #[test]
    fn test_reviewer_creation() {
        let reviewer = OpenAiReviewer::new(create_test_config());

        assert_eq!(reviewer.model, "gpt-4");
        assert_eq!(reviewer.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(reviewer.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_reviewer_with_custom_prompt() {
        let mut config = create_test_config();
        config.system_prompt = Some("Only check for SQL injection.".to_string());
        config.request_timeout_secs = 5;

        let reviewer = OpenAiReviewer::new(config);

        assert_eq!(reviewer.system_prompt, "Only check for SQL injection.");
        assert_eq!(reviewer.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_reviewer_with_empty_base_url_uses_default() {
        let mut config = create_test_config();
        config.base_url = String::new();

        // Construction must not panic when falling back to the default API base
        let reviewer = OpenAiReviewer::new(config);
        assert_eq!(reviewer.model, "gpt-4");
    }
}
