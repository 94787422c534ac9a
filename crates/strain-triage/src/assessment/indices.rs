//! The two intentionally randomized outputs. Each draws from one of two disjoint ranges; a
//! deterministic predicate over the report and scores picks the range.

use std::ops::RangeInclusive;

use super::domain::InjuryReport;
use super::random::RandomSource;
use super::scoring::YELLOW_THRESHOLD;

pub const CATASTROPHIZING_HIGH: RangeInclusive<u8> = 70..=90;
pub const CATASTROPHIZING_LOW: RangeInclusive<u8> = 20..=40;
pub const SPIRAL_HIGH: RangeInclusive<u8> = 85..=95;
pub const SPIRAL_LOW: RangeInclusive<u8> = 30..=50;

const MODERATE_PAIN: u8 = 6;
const SPIRAL_TRIGGER: u8 = 70;

fn draw<S: RandomSource + ?Sized>(source: &S, range: RangeInclusive<u8>) -> u8 {
    let (low, high) = (*range.start(), *range.end());
    source.uniform_inclusive(low, high).clamp(low, high)
}

/// True when the report looks benign yet the reporter is likely worrying about it.
pub fn looks_benign(report: &InjuryReport, structural_risk: f64) -> bool {
    structural_risk < YELLOW_THRESHOLD
        && report.pain_scale <= MODERATE_PAIN
        && !report.swelling
        && !report.radiates
        && report.improved_after_warmup
}

pub fn catastrophizing_index<S: RandomSource + ?Sized>(
    source: &S,
    report: &InjuryReport,
    structural_risk: f64,
) -> u8 {
    if looks_benign(report, structural_risk) {
        draw(source, CATASTROPHIZING_HIGH)
    } else {
        draw(source, CATASTROPHIZING_LOW)
    }
}

/// Odds the reporter is about to search their symptoms online. The comparison against the
/// catastrophizing index is strict, so a draw of exactly 70 takes the low range.
pub fn google_spiral_probability<S: RandomSource + ?Sized>(
    source: &S,
    catastrophizing_index: u8,
    structural_risk: f64,
) -> u8 {
    if catastrophizing_index > SPIRAL_TRIGGER && structural_risk < YELLOW_THRESHOLD {
        draw(source, SPIRAL_HIGH)
    } else {
        draw(source, SPIRAL_LOW)
    }
}
