use serde_json::Value;

use super::domain::AssessmentResult;
use super::engine::AssessmentEngine;
use super::intake::{validate_report, ValidationErrors};
use super::random::{RandomSource, ThreadRandomSource};

/// Service composing intake validation and the scoring engine.
pub struct AssessmentService<S = ThreadRandomSource> {
    engine: AssessmentEngine<S>,
}

impl<S: RandomSource> AssessmentService<S> {
    pub fn new(engine: AssessmentEngine<S>) -> Self {
        Self { engine }
    }

    /// Validate a raw report body and assess it. The engine never sees an invalid report.
    pub fn assess(&self, payload: &Value) -> Result<AssessmentResult, AssessmentServiceError> {
        let report = validate_report(payload)?;
        Ok(self.engine.assess(&report))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}
