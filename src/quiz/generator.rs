use super::prompt::{Difficulty, QuestionType, build_prompt};
use crate::{config::GenerationConfig, llm::TextGenerator};
use tracing::{debug, error, info, warn};

pub const EMPTY_RESULT_FALLBACK: &str = "No questions generated. Please try again.";
pub const GENERATION_FAILURE: &str = "Failed to generate questions. Please try again.";

/// One user submission. Created fresh per request and discarded after the
/// response is rendered.
#[derive(Debug, Clone)]
pub struct QuizRequest {
    pub text: String,
    pub num_questions: u8,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
}

/// Display text plus transient user-visible notifications. Service faults
/// never escape the generator; they end up here as alerts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub text: String,
    pub alerts: Vec<String>,
}

pub struct QuestionGenerator {
    client: Box<dyn TextGenerator>,
    context_word_threshold: usize,
}

impl QuestionGenerator {
    pub fn new(client: Box<dyn TextGenerator>, generation: GenerationConfig) -> Self {
        Self {
            client,
            context_word_threshold: generation.context_word_threshold,
        }
    }

    /// Expands a bare topic into a descriptive paragraph. On a service fault
    /// the original topic comes back unchanged, with an alert, so question
    /// generation can proceed as if no expansion happened.
    pub async fn expand_context(&self, topic: &str) -> Generated {
        let prompt = format!("Provide a brief, informative paragraph about {topic}.");

        match self.client.generate(&prompt).await {
            Ok(completion) => Generated {
                text: completion.text.unwrap_or_else(|| {
                    format!("{topic} is a broad topic. Please specify further.")
                }),
                alerts: Vec::new(),
            },
            Err(e) => {
                warn!("Context expansion failed: {}", e);
                Generated {
                    text: topic.to_string(),
                    alerts: vec![format!("Error fetching context: {e}")],
                }
            }
        }
    }

    pub async fn generate_questions(&self, request: &QuizRequest) -> Generated {
        info!(
            "Generating {} {} questions at {} difficulty",
            request.num_questions, request.question_type, request.difficulty
        );

        let mut alerts = Vec::new();

        // Inputs below the threshold are bare topics, not self-contained
        // passages; elaborate them first.
        let text = if word_count(&request.text) < self.context_word_threshold {
            debug!("Input below {} words, expanding", self.context_word_threshold);
            let expanded = self.expand_context(&request.text).await;
            alerts.extend(expanded.alerts);
            expanded.text
        } else {
            request.text.clone()
        };

        let prompt = build_prompt(
            &text,
            request.num_questions,
            request.difficulty,
            request.question_type,
        );

        match self.client.generate(&prompt).await {
            Ok(completion) => Generated {
                text: completion
                    .text
                    .unwrap_or_else(|| EMPTY_RESULT_FALLBACK.to_string()),
                alerts,
            },
            Err(e) => {
                error!("Question generation failed: {}", e);
                alerts.push(format!("Error generating questions: {e}"));
                Generated {
                    text: GENERATION_FAILURE.to_string(),
                    alerts,
                }
            }
        }
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
