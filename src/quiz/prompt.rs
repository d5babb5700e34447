use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", label)
    }
}

/// The closed set of question shapes the form offers. Each variant carries
/// its format template, so every type has one by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "Multiple Choice")]
    MultipleChoice,
    #[serde(rename = "True/False")]
    TrueFalse,
    #[serde(rename = "Fill-in-the-Blank")]
    FillInBlank,
    #[serde(rename = "Short Answer")]
    ShortAnswer,
}

const MULTIPLE_CHOICE_TEMPLATE: &str = "
- MCQ: {question}
  A) {option1}
  B) {option2}
  C) {option3}
  D) {option4}
  Answer: {answer}
";

const TRUE_FALSE_TEMPLATE: &str = "
- True/False: {question}
  Answer: {answer}
";

const FILL_IN_BLANK_TEMPLATE: &str = "
- Fill-in-the-blank: {question}
  Answer: {answer}
";

const SHORT_ANSWER_TEMPLATE: &str = "
- Short Answer: {question}
  Answer: {answer}
";

impl QuestionType {
    /// Human-readable description of the expected shape of each
    /// question/answer pair. Embedded in the prompt as guidance for the
    /// model; the response is never validated against it.
    pub fn format_template(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => MULTIPLE_CHOICE_TEMPLATE,
            QuestionType::TrueFalse => TRUE_FALSE_TEMPLATE,
            QuestionType::FillInBlank => FILL_IN_BLANK_TEMPLATE,
            QuestionType::ShortAnswer => SHORT_ANSWER_TEMPLATE,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::TrueFalse => "True/False",
            QuestionType::FillInBlank => "Fill-in-the-Blank",
            QuestionType::ShortAnswer => "Short Answer",
        };
        write!(f, "{}", label)
    }
}

/// Renders the instruction prompt for one generation request.
pub fn build_prompt(
    text: &str,
    num_questions: u8,
    difficulty: Difficulty,
    question_type: QuestionType,
) -> String {
    format!(
        "Generate {num_questions} {question_type} questions at {difficulty} difficulty from this text:\n\n{text}\n\nFormat each question as:\n{template}",
        template = question_type.format_template().trim(),
    )
}
