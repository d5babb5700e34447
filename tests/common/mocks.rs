use async_trait::async_trait;
use quegen::{
    Error, Result,
    llm::{Completion, TextGenerator},
};
use std::sync::{Arc, Mutex};

type ScriptedOutcome = std::result::Result<Completion, String>;

/// Mock text generator for testing. Outcomes are scripted per call, in
/// order, so the context-expansion call and the question-generation call can
/// succeed or fail independently. Every submitted prompt is recorded.
#[derive(Debug)]
pub struct MockTextGenerator {
    pub outcomes: Arc<Mutex<Vec<ScriptedOutcome>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_completion(self, text: &str) -> Self {
        self.outcomes.lock().unwrap().push(Ok(Completion {
            text: Some(text.to_string()),
        }));
        self
    }

    pub fn with_empty_completion(self) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push(Ok(Completion { text: None }));
        self
    }

    pub fn with_failure(self, error: &str) -> Self {
        self.outcomes.lock().unwrap().push(Err(error.to_string()));
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Handle onto the recorded prompts that stays usable after the mock is
    /// boxed into a generator.
    pub fn prompts_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<Completion> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(Error::llm("No more mock outcomes available"));
        }

        outcomes.remove(0).map_err(Error::llm)
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}
