use std::fmt;

use serde::{Deserialize, Serialize};

/// Body region the reporter points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PainLocation {
    Shoulder,
    Elbow,
    Wrist,
    #[serde(rename = "Upper back")]
    UpperBack,
    #[serde(rename = "Lower back")]
    LowerBack,
    Hip,
    Knee,
    Ankle,
    Neck,
    Chest,
    Other,
}

impl PainLocation {
    pub const ALL: [PainLocation; 11] = [
        PainLocation::Shoulder,
        PainLocation::Elbow,
        PainLocation::Wrist,
        PainLocation::UpperBack,
        PainLocation::LowerBack,
        PainLocation::Hip,
        PainLocation::Knee,
        PainLocation::Ankle,
        PainLocation::Neck,
        PainLocation::Chest,
        PainLocation::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PainLocation::Shoulder => "Shoulder",
            PainLocation::Elbow => "Elbow",
            PainLocation::Wrist => "Wrist",
            PainLocation::UpperBack => "Upper back",
            PainLocation::LowerBack => "Lower back",
            PainLocation::Hip => "Hip",
            PainLocation::Knee => "Knee",
            PainLocation::Ankle => "Ankle",
            PainLocation::Neck => "Neck",
            PainLocation::Chest => "Chest",
            PainLocation::Other => "Other",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|location| location.label() == value)
    }
}

/// How the pain feels to the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PainType {
    #[serde(rename = "Dull ache")]
    DullAche,
    Sharp,
    Burning,
    Localized,
    Throbbing,
    Other,
}

impl PainType {
    pub const ALL: [PainType; 6] = [
        PainType::DullAche,
        PainType::Sharp,
        PainType::Burning,
        PainType::Localized,
        PainType::Throbbing,
        PainType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PainType::DullAche => "Dull ache",
            PainType::Sharp => "Sharp",
            PainType::Burning => "Burning",
            PainType::Localized => "Localized",
            PainType::Throbbing => "Throbbing",
            PainType::Other => "Other",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == value)
    }
}

/// When the pain first showed up relative to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnsetTiming {
    #[serde(rename = "During lift")]
    DuringLift,
    #[serde(rename = "Hours after workout")]
    HoursAfterWorkout,
    #[serde(rename = "Next day")]
    NextDay,
}

impl OnsetTiming {
    pub const ALL: [OnsetTiming; 3] = [
        OnsetTiming::DuringLift,
        OnsetTiming::HoursAfterWorkout,
        OnsetTiming::NextDay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OnsetTiming::DuringLift => "During lift",
            OnsetTiming::HoursAfterWorkout => "Hours after workout",
            OnsetTiming::NextDay => "Next day",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|timing| timing.label() == value)
    }
}

/// Validated self-report for a single pain episode.
///
/// Instances are produced by the intake validator; every field is present and in range, with
/// `pain_scale` in `1..=10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryReport {
    pub pain_location: PainLocation,
    pub pain_type: PainType,
    pub pain_scale: u8,
    pub radiates: bool,
    pub improved_after_warmup: bool,
    pub sharp_during_lift: bool,
    pub swelling: bool,
    pub previous_injury: bool,
    pub onset_timing: OnsetTiming,
    pub light_load_possible: bool,
}

/// Three-level triage category derived from the adjusted structural risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Green,
    Yellow,
    Red,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Green => "GREEN",
            RiskLevel::Yellow => "YELLOW",
            RiskLevel::Red => "RED",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured verdict returned for one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub risk_level: RiskLevel,
    pub structural_risk: u8,
    pub doms_probability: u8,
    pub strain_score: u8,
    pub catastrophizing_index: u8,
    pub likely_issue: String,
    pub recommendations: Vec<String>,
    pub monitor_for: Vec<String>,
    pub google_spiral_probability: u8,
}

/// Allowed values for the enumerated report fields, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceCatalog {
    pub pain_locations: Vec<&'static str>,
    pub pain_types: Vec<&'static str>,
    pub onset_timing: Vec<&'static str>,
}

impl ChoiceCatalog {
    pub fn current() -> Self {
        Self {
            pain_locations: PainLocation::ALL.iter().map(PainLocation::label).collect(),
            pain_types: PainType::ALL.iter().map(PainType::label).collect(),
            onset_timing: OnsetTiming::ALL.iter().map(OnsetTiming::label).collect(),
        }
    }
}
