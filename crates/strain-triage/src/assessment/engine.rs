use tracing::debug;

use super::domain::{AssessmentResult, InjuryReport};
use super::indices::{catastrophizing_index, google_spiral_probability};
use super::narrative::{likely_issue, monitor_for, recommendations};
use super::random::{RandomSource, ThreadRandomSource};
use super::scoring::{classify, round_score, ComponentScores};

/// Stateless evaluator turning a validated report into an assessment.
///
/// The engine owns only its random source, so a single instance can serve concurrent requests.
pub struct AssessmentEngine<S = ThreadRandomSource> {
    random: S,
}

impl<S: RandomSource> AssessmentEngine<S> {
    pub fn new(random: S) -> Self {
        Self { random }
    }

    pub fn assess(&self, report: &InjuryReport) -> AssessmentResult {
        let scores = ComponentScores::compute(report);
        let structural_risk = scores.structural_risk;

        let catastrophizing = catastrophizing_index(&self.random, report, structural_risk);
        let risk_level = classify(structural_risk);

        let issue = likely_issue(risk_level, &scores, catastrophizing);
        let recommendations = recommendations(risk_level);
        let monitor_for = monitor_for(risk_level, report.previous_injury);
        let google_spiral =
            google_spiral_probability(&self.random, catastrophizing, structural_risk);

        debug!(
            %risk_level,
            structural_risk,
            doms_probability = scores.doms_probability,
            strain_score = scores.strain_score,
            catastrophizing,
            pain_location = report.pain_location.label(),
            "assessed injury report"
        );

        AssessmentResult {
            risk_level,
            structural_risk: round_score(structural_risk),
            doms_probability: round_score(scores.doms_probability),
            strain_score: round_score(scores.strain_score),
            catastrophizing_index: catastrophizing,
            likely_issue: issue.to_string(),
            recommendations,
            monitor_for,
            google_spiral_probability: google_spiral,
        }
    }
}
