use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use strain_triage::assessment::{source_for_seed, AssessmentEngine, RandomSource};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type RuntimeEngine = AssessmentEngine<Box<dyn RandomSource>>;

/// Engine backed by a seeded generator when `seed` is set, the thread generator otherwise.
pub(crate) fn build_engine(seed: Option<u64>) -> RuntimeEngine {
    AssessmentEngine::new(source_for_seed(seed))
}
