use super::domain::RiskLevel;
use super::scoring::ComponentScores;

pub const STRUCTURAL_CONCERN: &str = "Possible structural concern — get it checked.";
pub const LIKELY_STRAIN: &str = "Likely muscle strain. Ease off and reassess.";
pub const MODERATE_CONCERN: &str = "Moderate concern. Avoid heavy loading and reassess in 48h.";
pub const PROBABLY_FINE: &str = "Likely normal soreness. You are probably fine.";
pub const CLASSIC_DOMS: &str =
    "Delayed onset muscle soreness. This looks like classic post-workout soreness.";
pub const MILD_STRAIN: &str = "Mild strain possible. Light movement and mobility are fine.";
pub const NORMAL_SORENESS: &str = "Likely normal soreness. Light activity and mobility are okay.";

pub const REINJURY_WATCH: &str = "Re-injury or pain in same spot";

const GREEN_RECOMMENDATIONS: [&str; 3] = [
    "Train a different muscle group today.",
    "Light cardio is fine.",
    "Include mobility work.",
];
const YELLOW_RECOMMENDATIONS: [&str; 3] = [
    "Avoid heavy compound lifts on this area.",
    "No max effort for 48 hours.",
    "Reassess in 48 hours.",
];
const RED_RECOMMENDATIONS: [&str; 3] = [
    "Stop loading this area.",
    "Consider seeing a physio if it persists.",
    "Avoid aggressive stretching.",
];

const GREEN_MONITOR: &[&str] = &["Pain getting worse", "New swelling", "Radiating pain"];
const YELLOW_MONITOR: &[&str] = &["Increasing swelling", "Radiating pain", "Loss of strength"];
const RED_MONITOR: &[&str] = &[
    "Increasing swelling",
    "Radiating pain",
    "Loss of strength",
    "Numbness or tingling",
];

/// First matching rule wins; the risk level outranks every score-based rule.
pub fn likely_issue(
    risk_level: RiskLevel,
    scores: &ComponentScores,
    catastrophizing_index: u8,
) -> &'static str {
    match risk_level {
        RiskLevel::Red => STRUCTURAL_CONCERN,
        RiskLevel::Yellow if scores.strain_score >= 50.0 => LIKELY_STRAIN,
        RiskLevel::Yellow => MODERATE_CONCERN,
        RiskLevel::Green if catastrophizing_index >= 70 => PROBABLY_FINE,
        RiskLevel::Green if scores.doms_probability >= 60.0 => CLASSIC_DOMS,
        RiskLevel::Green if scores.strain_score >= 40.0 => MILD_STRAIN,
        RiskLevel::Green => NORMAL_SORENESS,
    }
}

pub fn recommendations(risk_level: RiskLevel) -> Vec<String> {
    let items = match risk_level {
        RiskLevel::Green => GREEN_RECOMMENDATIONS,
        RiskLevel::Yellow => YELLOW_RECOMMENDATIONS,
        RiskLevel::Red => RED_RECOMMENDATIONS,
    };
    items.iter().map(|item| item.to_string()).collect()
}

/// Base watch list for the level, with the re-injury item appended for repeat injuries.
pub fn monitor_for(risk_level: RiskLevel, previous_injury: bool) -> Vec<String> {
    let base = match risk_level {
        RiskLevel::Green => GREEN_MONITOR,
        RiskLevel::Yellow => YELLOW_MONITOR,
        RiskLevel::Red => RED_MONITOR,
    };

    let mut monitor: Vec<String> = base.iter().map(|item| item.to_string()).collect();
    if previous_injury {
        monitor.push(REINJURY_WATCH.to_string());
    }
    monitor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(doms: f64, strain: f64) -> ComponentScores {
        ComponentScores {
            structural_risk: 0.0,
            doms_probability: doms,
            strain_score: strain,
        }
    }

    #[test]
    fn red_wins_over_every_score() {
        assert_eq!(
            likely_issue(RiskLevel::Red, &scores(100.0, 100.0), 90),
            STRUCTURAL_CONCERN
        );
    }

    #[test]
    fn yellow_splits_on_strain() {
        assert_eq!(likely_issue(RiskLevel::Yellow, &scores(0.0, 50.0), 20), LIKELY_STRAIN);
        assert_eq!(likely_issue(RiskLevel::Yellow, &scores(90.0, 49.0), 90), MODERATE_CONCERN);
    }

    #[test]
    fn green_rules_apply_in_order() {
        assert_eq!(likely_issue(RiskLevel::Green, &scores(90.0, 90.0), 70), PROBABLY_FINE);
        assert_eq!(likely_issue(RiskLevel::Green, &scores(60.0, 90.0), 69), CLASSIC_DOMS);
        assert_eq!(likely_issue(RiskLevel::Green, &scores(59.0, 40.0), 20), MILD_STRAIN);
        assert_eq!(likely_issue(RiskLevel::Green, &scores(59.0, 39.0), 20), NORMAL_SORENESS);
    }

    #[test]
    fn recommendations_are_fixed_per_level() {
        assert_eq!(recommendations(RiskLevel::Green)[0], "Train a different muscle group today.");
        assert_eq!(recommendations(RiskLevel::Yellow)[2], "Reassess in 48 hours.");
        assert_eq!(recommendations(RiskLevel::Red)[1], "Consider seeing a physio if it persists.");
        for level in [RiskLevel::Green, RiskLevel::Yellow, RiskLevel::Red] {
            assert_eq!(recommendations(level).len(), 3);
        }
    }

    #[test]
    fn monitor_list_appends_reinjury_last() {
        assert_eq!(monitor_for(RiskLevel::Green, false).len(), 3);
        assert_eq!(monitor_for(RiskLevel::Yellow, false).len(), 3);
        assert_eq!(monitor_for(RiskLevel::Red, false).len(), 4);

        let red = monitor_for(RiskLevel::Red, true);
        assert_eq!(red.len(), 5);
        assert_eq!(red.last().map(String::as_str), Some(REINJURY_WATCH));
        assert_eq!(red[3], "Numbness or tingling");

        let green = monitor_for(RiskLevel::Green, true);
        assert_eq!(green, vec!["Pain getting worse", "New swelling", "Radiating pain", REINJURY_WATCH]);
    }
}
