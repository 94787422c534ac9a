//! Heuristic triage for exercise-related pain self-reports.
//!
//! The [`assessment`] module holds the scoring engine together with the intake validator and
//! HTTP router that sit in front of it. Configuration, telemetry and error plumbing live in
//! their own modules so the API binary can compose them.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
