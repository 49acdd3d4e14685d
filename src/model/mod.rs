use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

/// Errors raised by a prediction call. No retry is attempted anywhere;
/// whatever happens here is fatal for the submission that triggered it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PredictError {
    #[error("empty input batch")]
    EmptyBatch,
    #[error("model returned no label for the input")]
    MissingOutput,
    #[error("no model artifact loaded")]
    Untrained,
}

/// Anything that can turn a batch of texts into sentiment label strings.
/// The contract mirrors the serialized artifact: a list containing one
/// string goes in, a list containing one label string comes out.
pub trait Predictor: Send + Sync {
    fn predict(&self, inputs: &[String]) -> Result<Vec<String>, PredictError>;
}

/// On-disk shape of the pre-trained artifact: per-term weights plus the
/// decision thresholds fitted during training. Training itself lives
/// outside this codebase; callers only ever see `predict`.
#[derive(Debug, Clone, Deserialize)]
struct Artifact {
    #[allow(dead_code)]
    version: u32,
    weights: HashMap<String, f64>,
    positive_threshold: f64,
    negative_threshold: f64,
}

pub struct SentimentModel {
    artifact: Option<Artifact>,
}

impl SentimentModel {
    /// Load the serialized model artifact from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let artifact: Artifact = serde_json::from_str(&content)?;

        tracing::info!("Loaded sentiment model ({} terms)", artifact.weights.len());

        Ok(Self {
            artifact: Some(artifact),
        })
    }

    /// Create a model with no artifact behind it. Every predict call
    /// fails until a real artifact is loaded; the server can still boot
    /// and serve the page.
    pub fn untrained() -> Self {
        Self { artifact: None }
    }

    fn score_one(&self, text: &str) -> Result<String, PredictError> {
        let artifact = self.artifact.as_ref().ok_or(PredictError::Untrained)?;

        let score: f64 = text
            .split_whitespace()
            .filter_map(|token| artifact.weights.get(token))
            .sum();

        let label = if score >= artifact.positive_threshold {
            "positive"
        } else if score <= artifact.negative_threshold {
            "negative"
        } else {
            "neutral"
        };

        Ok(label.to_string())
    }
}

impl Predictor for SentimentModel {
    fn predict(&self, inputs: &[String]) -> Result<Vec<String>, PredictError> {
        if inputs.is_empty() {
            return Err(PredictError::EmptyBatch);
        }

        inputs.iter().map(|text| self.score_one(text)).collect()
    }
}
