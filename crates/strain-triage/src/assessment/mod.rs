//! Pain-episode triage: intake validation, component scoring, edge-case overrides, risk
//! classification, the randomized indices and the narrative that goes back to the reporter.
//!
//! Data flows one way per request: raw body → [`validate_report`] → [`AssessmentEngine`] →
//! [`AssessmentResult`]. Nothing is retained between requests.

pub mod domain;
mod engine;
pub mod indices;
pub mod intake;
pub mod narrative;
pub mod random;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentResult, ChoiceCatalog, InjuryReport, OnsetTiming, PainLocation, PainType, RiskLevel,
};
pub use engine::AssessmentEngine;
pub use intake::{validate_report, ValidationErrors};
pub use random::{source_for_seed, RandomSource, SeededRandomSource, ThreadRandomSource};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
