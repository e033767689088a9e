pub mod flux_scenarios;
pub mod mono_scenarios;

use crate::adapters::ScenarioRecorder;
use crate::core::{Person, Scenario, ScenarioContext, ScenarioReport};
use crate::utils::error::{RequireValue, Result};
use chrono::{DateTime, Utc};

pub use flux_scenarios::{
    FluxDelayNoOutputScenario, FluxDelayScenario, FluxFilterDelayScenario, FluxFilterScenario,
    FluxScenario,
};
pub use mono_scenarios::{MonoScenario, MonoTransformFilterScenario, MonoTransformScenario};

/// Catalogue order; also the order `run_all` uses.
pub const SCENARIO_NAMES: [&str; 8] = [
    "mono",
    "mono-transform",
    "mono-transform-filter",
    "flux",
    "flux-filter",
    "flux-delay-no-output",
    "flux-delay",
    "flux-filter-delay",
];

pub fn catalogue() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(MonoScenario),
        Box::new(MonoTransformScenario),
        Box::new(MonoTransformFilterScenario),
        Box::new(FluxScenario),
        Box::new(FluxFilterScenario),
        Box::new(FluxDelayNoOutputScenario),
        Box::new(FluxDelayScenario),
        Box::new(FluxFilterDelayScenario),
    ]
}

/// Tracks one scenario run from start to report.
pub(crate) struct ScenarioRun {
    recorder: ScenarioRecorder,
    started_at: DateTime<Utc>,
}

impl ScenarioRun {
    pub(crate) fn start(scenario: &'static str, ctx: &ScenarioContext) -> Self {
        Self {
            recorder: ScenarioRecorder::new(scenario, ctx.sink.clone()),
            started_at: Utc::now(),
        }
    }

    pub(crate) fn recorder(&self) -> ScenarioRecorder {
        self.recorder.clone()
    }

    pub(crate) fn finish(
        self,
        waited_for_completion: bool,
        expected_failure: Option<String>,
    ) -> ScenarioReport {
        ScenarioReport {
            scenario: self.recorder.scenario().to_string(),
            greetings: self.recorder.snapshot(),
            waited_for_completion,
            expected_failure,
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}

pub(crate) fn first_person(ctx: &ScenarioContext) -> Result<Person> {
    ctx.people.first().cloned().require("first fixture")
}
