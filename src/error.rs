use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::model::PredictError;

/// Input rejections surfaced to the user as a warning.
/// None of these mutate any session state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Please enter a tweet before submitting!")]
    EmptyTweet,
    #[error("Guess must be a number between {min} and {max}")]
    GuessOutOfRange { min: u32, max: u32 },
    #[error("Cell index must be between 0 and 8")]
    CellOutOfRange,
    #[error("Guess a single letter (a-z)")]
    NotALetter,
    #[error("You already guessed '{0}'")]
    AlreadyGuessed(char),
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "warning": self.to_string() })),
        )
            .into_response()
    }
}

/// Everything that can stop a tweet submission.
/// Rejections are the user's fault; model errors are fatal for the
/// current submission and map to a 500.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error(transparent)]
    Model(#[from] PredictError),
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        match self {
            SubmissionError::Rejected(rejection) => rejection.into_response(),
            SubmissionError::Model(e) => {
                tracing::error!("Sentiment model failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
