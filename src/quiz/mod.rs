mod generator;
mod prompt;

pub use generator::{
    EMPTY_RESULT_FALLBACK, GENERATION_FAILURE, Generated, QuestionGenerator, QuizRequest,
};
pub use prompt::{Difficulty, QuestionType, build_prompt};
