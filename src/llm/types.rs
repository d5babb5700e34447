use async_openai::types::CreateChatCompletionResponse;

/// Outcome of one text-generation call. `text` is `None` when the service
/// answered without producing any usable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: Option<String>,
}

impl From<CreateChatCompletionResponse> for Completion {
    fn from(response: CreateChatCompletionResponse) -> Self {
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty());

        Self { text }
    }
}
