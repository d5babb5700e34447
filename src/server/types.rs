use crate::quiz::{Difficulty, QuestionType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
    #[serde(default = "default_num_questions")]
    pub num_questions: u8,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
}

fn default_num_questions() -> u8 {
    5
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub questions: String,
    pub alerts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
