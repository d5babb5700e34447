use super::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::quiz::{QuestionGenerator, QuizRequest};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<QuestionGenerator>,
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Input text must not be empty".to_string(),
            }),
        ));
    }

    info!(
        "Received generation request: {} {} questions at {} difficulty",
        request.num_questions, request.question_type, request.difficulty
    );

    let quiz_request = QuizRequest {
        text: request.text,
        // Same bounds the form's stepper enforces.
        num_questions: request.num_questions.clamp(1, 20),
        difficulty: request.difficulty,
        question_type: request.question_type,
    };

    let generated = state.generator.generate_questions(&quiz_request).await;

    Ok(Json(GenerateResponse {
        questions: generated.text,
        alerts: generated.alerts,
    }))
}
