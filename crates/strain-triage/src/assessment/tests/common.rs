use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{InjuryReport, OnsetTiming, PainLocation, PainType};
use crate::assessment::random::{RandomSource, ThreadRandomSource};
use crate::assessment::{assessment_router, AssessmentEngine, AssessmentService};

/// Next-day dull ache that eased after warming up.
pub(super) fn report() -> InjuryReport {
    InjuryReport {
        pain_location: PainLocation::Knee,
        pain_type: PainType::DullAche,
        pain_scale: 5,
        radiates: false,
        improved_after_warmup: true,
        sharp_during_lift: false,
        swelling: false,
        previous_injury: false,
        onset_timing: OnsetTiming::NextDay,
        light_load_possible: true,
    }
}

/// Radiating, swollen pain at 9 that started mid-lift.
pub(super) fn severe_report() -> InjuryReport {
    InjuryReport {
        pain_location: PainLocation::LowerBack,
        pain_type: PainType::Sharp,
        pain_scale: 9,
        radiates: true,
        improved_after_warmup: false,
        sharp_during_lift: false,
        swelling: true,
        previous_injury: false,
        onset_timing: OnsetTiming::DuringLift,
        light_load_possible: true,
    }
}

pub(super) fn payload(report: &InjuryReport) -> Value {
    serde_json::to_value(report).expect("report serializes")
}

/// Replays scripted draws and records the ranges the engine asked for.
#[derive(Default)]
pub(super) struct ScriptedRandom {
    values: Mutex<VecDeque<u8>>,
    requests: Mutex<Vec<(u8, u8)>>,
}

impl ScriptedRandom {
    pub(super) fn new(values: &[u8]) -> Self {
        Self {
            values: Mutex::new(values.iter().copied().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn requests(&self) -> Vec<(u8, u8)> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_inclusive(&self, low: u8, high: u8) -> u8 {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push((low, high));
        self.values
            .lock()
            .expect("values mutex poisoned")
            .pop_front()
            .unwrap_or(low)
    }
}

pub(super) fn scripted_engine(values: &[u8]) -> AssessmentEngine<Arc<ScriptedRandom>> {
    AssessmentEngine::new(Arc::new(ScriptedRandom::new(values)))
}

pub(super) fn router() -> axum::Router {
    let engine = AssessmentEngine::new(ThreadRandomSource);
    assessment_router(Arc::new(AssessmentService::new(engine)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
