//! Summary generation via the completion collaborator

use crate::error::Result;
use crate::prompts;
use finsight_llm::{CompletionProvider, CompletionRequest, Message};
use std::sync::Arc;
use tracing::debug;

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_MAX_TOKENS: usize = 1024;

/// Options for summary generation
#[derive(Debug, Clone)]
pub struct SummarizerOptions {
    /// Model identifier sent to the provider
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: usize,

    /// Sampling temperature
    pub temperature: Option<f32>,

    /// Upper bound on document characters sent in one prompt
    ///
    /// `None` preserves the baseline behavior: the entire document goes out
    /// as one prompt regardless of size. `Some(n)` truncates at `n` chars.
    pub max_document_chars: Option<usize>,
}

impl Default for SummarizerOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
            max_document_chars: None,
        }
    }
}

impl SummarizerOptions {
    /// Defaults with the model overridable via `OPENAI_MODEL`
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            options.model = model;
        }
        options
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the document size cap
    pub fn with_max_document_chars(mut self, max: Option<usize>) -> Self {
        self.max_document_chars = max;
        self
    }
}

/// Generates a narrative summary from a formatted statement document
///
/// Issues exactly one completion request per call: a fixed system
/// instruction plus one user message embedding the document. No chunking,
/// no streaming, no retries.
pub struct SummaryGenerator {
    provider: Arc<dyn CompletionProvider>,
    options: SummarizerOptions,
}

impl SummaryGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>, options: SummarizerOptions) -> Self {
        Self { provider, options }
    }

    /// Options currently in effect
    pub fn options(&self) -> &SummarizerOptions {
        &self.options
    }

    /// Apply the document-size policy
    fn clip<'a>(&self, document: &'a str) -> std::borrow::Cow<'a, str> {
        match self.options.max_document_chars {
            Some(max) if document.chars().count() > max => {
                document.chars().take(max).collect::<String>().into()
            }
            _ => document.into(),
        }
    }

    /// Summarize a formatted statement document
    pub async fn summarize(&self, document: &str) -> Result<String> {
        let document = self.clip(document);
        let user_message = prompts::analyze_statements_prompt(&document)?;

        debug!(
            model = %self.options.model,
            document_chars = document.chars().count(),
            "Requesting financial summary"
        );

        let mut request = CompletionRequest::builder(&self.options.model)
            .system(prompts::SYSTEM_PROMPT)
            .add_message(Message::user(user_message))
            .max_tokens(self.options.max_tokens);
        if let Some(temperature) = self.options.temperature {
            request = request.temperature(temperature);
        }

        let response = self.provider.complete(request.build()).await?;
        Ok(response.message.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use finsight_llm::{
        CompletionResponse, LlmError, Role, StopReason, TokenUsage,
    };
    use mockall::mock;
    use mockall::predicate::function;

    mock! {
        Provider {}

        #[async_trait]
        impl CompletionProvider for Provider {
            async fn complete(
                &self,
                request: CompletionRequest,
            ) -> finsight_llm::Result<CompletionResponse>;
            fn name(&self) -> &'static str;
        }
    }

    fn canned_response(text: &str) -> CompletionResponse {
        CompletionResponse {
            message: Message {
                role: Role::Assistant,
                content: text.to_string(),
            },
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 5,
            },
        }
    }

    #[tokio::test]
    async fn test_exactly_one_request_with_document_verbatim() {
        let document = "For the period ending 2023-12-31, the company reported the following:\nrevenue: 1\n\nFor the period ending 2022-12-31, the company reported the following:\nrevenue: 2";

        let mut provider = MockProvider::new();
        let expected = document.to_string();
        provider
            .expect_complete()
            .with(function(move |req: &CompletionRequest| {
                req.system.as_deref() == Some(prompts::SYSTEM_PROMPT)
                    && req.messages.len() == 1
                    && req.messages[0].content.contains(&expected)
            }))
            .times(1)
            .returning(|_| Ok(canned_response("Revenue declined.")));

        let generator = SummaryGenerator::new(Arc::new(provider), SummarizerOptions::default());
        let summary = generator.summarize(document).await.unwrap();
        assert_eq!(summary, "Revenue declined.");
    }

    #[tokio::test]
    async fn test_model_from_options() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .with(function(|req: &CompletionRequest| req.model == "gpt-4o"))
            .times(1)
            .returning(|_| Ok(canned_response("ok")));

        let options = SummarizerOptions::default().with_model("gpt-4o");
        let generator = SummaryGenerator::new(Arc::new(provider), options);
        generator.summarize("doc").await.unwrap();
    }

    #[tokio::test]
    async fn test_document_cap_truncates() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .with(function(|req: &CompletionRequest| {
                let body = &req.messages[0].content;
                body.contains("aaaaa") && !body.contains("aaaaaa")
            }))
            .times(1)
            .returning(|_| Ok(canned_response("ok")));

        let options = SummarizerOptions::default().with_max_document_chars(Some(5));
        let generator = SummaryGenerator::new(Arc::new(provider), options);
        generator.summarize(&"a".repeat(100)).await.unwrap();
    }

    #[tokio::test]
    async fn test_no_cap_sends_everything() {
        let document = "x".repeat(50_000);
        let expected = document.clone();

        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .with(function(move |req: &CompletionRequest| {
                req.messages[0].content.contains(&expected)
            }))
            .times(1)
            .returning(|_| Ok(canned_response("ok")));

        let generator = SummaryGenerator::new(Arc::new(provider), SummarizerOptions::default());
        generator.summarize(&document).await.unwrap();
    }

    #[tokio::test]
    async fn test_collaborator_failure_surfaces_as_error() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .times(1)
            .returning(|_| Err(LlmError::RateLimitExceeded("quota".to_string())));

        let generator = SummaryGenerator::new(Arc::new(provider), SummarizerOptions::default());
        let result = generator.summarize("doc").await;
        assert!(matches!(result, Err(crate::AnalystError::Llm(_))));
    }
}
