use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    chart, classifier,
    error::{Rejection, SubmissionError},
    model::Predictor,
    models::{SentimentLabel, Tally},
    utils::text,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SubmitTweet {
    pub tweet: String,
}

/// Outcome of one tweet submission. A label outside the three known
/// categories comes back as `unexpected` — shown to the user with a
/// warning style, deliberately not counted in the tally.
#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SubmitResponse {
    Classified {
        label: SentimentLabel,
        prediction_seconds: f64,
        tally: Tally,
    },
    Unexpected {
        label: String,
        prediction_seconds: f64,
        tally: Tally,
    },
}

/// Submit a tweet for classification and update the session tally
pub async fn submit_tweet(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitTweet>,
) -> Result<Json<SubmitResponse>, SubmissionError> {
    let mut session = state.session.lock().await;
    let response = handle_submission(&state.model, &mut session.tally, &payload.tweet)?;
    Ok(Json(response))
}

/// Current chart figure for the session tally, recomputed per request
pub async fn chart_spec(State(state): State<Arc<AppState>>) -> Json<Value> {
    let session = state.session.lock().await;
    Json(chart::pie_spec(&session.tally))
}

/// The full submission flow: reject empty input before the model is
/// ever invoked, normalize, classify, then tally known labels only.
fn handle_submission(
    model: &dyn Predictor,
    tally: &mut Tally,
    raw: &str,
) -> Result<SubmitResponse, SubmissionError> {
    if raw.trim().is_empty() {
        return Err(Rejection::EmptyTweet.into());
    }

    let cleaned = text::normalize(raw);
    let classification = classifier::classify(model, &cleaned)?;
    let prediction_seconds = classification.elapsed.as_secs_f64();

    match SentimentLabel::from_model_output(&classification.raw_label) {
        Some(label) => {
            tally.record(label);
            tracing::info!(
                "Classified tweet as {} in {:.3}s ({} submissions tallied)",
                label,
                prediction_seconds,
                tally.total()
            );
            Ok(SubmitResponse::Classified {
                label,
                prediction_seconds,
                tally: tally.clone(),
            })
        }
        None => {
            tracing::warn!(
                "Unexpected sentiment label from model: {:?}",
                classification.raw_label
            );
            Ok(SubmitResponse::Unexpected {
                label: classification.raw_label,
                prediction_seconds,
                tally: tally.clone(),
            })
        }
    }
}
