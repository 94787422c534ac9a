//! Additive component scores, edge-case overrides and the risk classifier.
//!
//! Every calculator starts at zero, adds or subtracts fixed contributions for the flags that
//! are set, and clamps into `0..=100`. Scores stay `f64` until the engine rounds them for output.

use super::domain::{InjuryReport, OnsetTiming, PainType, RiskLevel};

pub const RED_THRESHOLD: f64 = 70.0;
pub const YELLOW_THRESHOLD: f64 = 40.0;

const SEVERE_PAIN: u8 = 8;
const TRIVIAL_PAIN: u8 = 3;
const MODERATE_PAIN: u8 = 6;
const TRIVIAL_PAIN_CEILING: f64 = 39.0;
const PREVIOUS_INJURY_ESCALATION: f64 = 10.0;

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Heuristic likelihood of genuine tissue or joint damage.
pub fn structural_injury_risk(report: &InjuryReport) -> f64 {
    let mut score = 0.0;
    if report.pain_scale >= SEVERE_PAIN {
        score += 25.0;
    }
    if report.radiates {
        score += 30.0;
    }
    if report.swelling {
        score += 25.0;
    }
    if report.sharp_during_lift {
        score += 20.0;
    }
    if !report.light_load_possible {
        score += 20.0;
    }
    if report.previous_injury {
        score += 10.0;
    }
    if report.improved_after_warmup {
        score -= 15.0;
    }
    clamp_score(score)
}

/// Likelihood that the report describes ordinary delayed onset muscle soreness.
pub fn doms_probability(report: &InjuryReport) -> f64 {
    let mut score = 0.0;
    if report.onset_timing == OnsetTiming::NextDay {
        score += 30.0;
    }
    if report.improved_after_warmup {
        score += 20.0;
    }
    if report.pain_type == PainType::DullAche {
        score += 20.0;
    }
    if !report.swelling {
        score += 10.0;
    }
    if report.pain_scale <= MODERATE_PAIN {
        score += 10.0;
    }
    clamp_score(score)
}

pub fn muscle_strain_score(report: &InjuryReport) -> f64 {
    let mut score = 0.0;
    if report.sharp_during_lift {
        score += 20.0;
    }
    if report.pain_type == PainType::Localized {
        score += 20.0;
    }
    if (5..=7).contains(&report.pain_scale) {
        score += 20.0;
    }
    if !report.radiates {
        score += 10.0;
    }
    if report.light_load_possible {
        score += 10.0;
    }
    clamp_score(score)
}

/// Applies the override rules to a base structural risk, strictly in order.
///
/// 1. radiating pain with swelling at 8+ floors the risk at the RED threshold;
/// 2. pain at 3 or below caps it just under YELLOW, undoing rule 1 if both fire;
/// 3. a previous injury escalates any YELLOW-or-worse result by ten points.
pub fn apply_edge_cases(report: &InjuryReport, structural_risk: f64) -> f64 {
    let mut risk = structural_risk;

    if report.radiates && report.swelling && report.pain_scale >= SEVERE_PAIN {
        risk = risk.max(RED_THRESHOLD);
    }

    if report.pain_scale <= TRIVIAL_PAIN {
        risk = risk.min(TRIVIAL_PAIN_CEILING);
    }

    if report.previous_injury && risk >= YELLOW_THRESHOLD {
        risk = clamp_score(risk + PREVIOUS_INJURY_ESCALATION);
    }

    risk
}

pub fn classify(structural_risk: f64) -> RiskLevel {
    if structural_risk >= RED_THRESHOLD {
        RiskLevel::Red
    } else if structural_risk >= YELLOW_THRESHOLD {
        RiskLevel::Yellow
    } else {
        RiskLevel::Green
    }
}

/// Rounds a clamped score for output, ties to even.
pub(crate) fn round_score(value: f64) -> u8 {
    clamp_score(value).round_ties_even() as u8
}

/// The three independent component scores, with structural risk already adjusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub structural_risk: f64,
    pub doms_probability: f64,
    pub strain_score: f64,
}

impl ComponentScores {
    pub fn compute(report: &InjuryReport) -> Self {
        let base_structural = structural_injury_risk(report);
        Self {
            structural_risk: apply_edge_cases(report, base_structural),
            doms_probability: doms_probability(report),
            strain_score: muscle_strain_score(report),
        }
    }
}
