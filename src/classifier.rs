use std::time::{Duration, Instant};

use crate::model::{PredictError, Predictor};

/// Raw model output for one text plus the measured wall-clock latency
/// of the predict call.
#[derive(Debug, Clone)]
pub struct Classification {
    pub raw_label: String,
    pub elapsed: Duration,
}

/// Invoke the model on a single normalized text and time the call.
/// No retry and no timeout; model failures propagate to the caller.
pub fn classify(model: &dyn Predictor, text: &str) -> Result<Classification, PredictError> {
    let start = Instant::now();
    let labels = model.predict(&[text.to_string()])?;
    let elapsed = start.elapsed();

    let raw_label = labels.into_iter().next().ok_or(PredictError::MissingOutput)?;

    Ok(Classification { raw_label, elapsed })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLabel(&'static str);

    impl Predictor for FixedLabel {
        fn predict(&self, inputs: &[String]) -> Result<Vec<String>, PredictError> {
            if inputs.is_empty() {
                return Err(PredictError::EmptyBatch);
            }
            Ok(vec![self.0.to_string(); inputs.len()])
        }
    }

    struct AlwaysFails;

    impl Predictor for AlwaysFails {
        fn predict(&self, _inputs: &[String]) -> Result<Vec<String>, PredictError> {
            Err(PredictError::Untrained)
        }
    }

    #[test]
    fn test_classify_returns_label_and_duration() {
        let classification = classify(&FixedLabel("positive"), "nice day").unwrap();
        assert_eq!(classification.raw_label, "positive");
        // Elapsed is whatever the clock says, but it is always measured
        assert!(classification.elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_classify_propagates_model_failure() {
        let err = classify(&AlwaysFails, "nice day").unwrap_err();
        assert_eq!(err, PredictError::Untrained);
    }
}
