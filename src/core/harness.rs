use crate::app::scenarios::catalogue;
use crate::core::{Scenario, ScenarioContext, ScenarioReport};
use crate::utils::error::{ReactiveError, Result};

pub struct HarnessEngine {
    scenarios: Vec<Box<dyn Scenario>>,
    context: ScenarioContext,
}

impl HarnessEngine {
    pub fn new(context: ScenarioContext) -> Self {
        Self::with_scenarios(context, catalogue())
    }

    pub fn with_scenarios(context: ScenarioContext, scenarios: Vec<Box<dyn Scenario>>) -> Self {
        Self { scenarios, context }
    }

    pub fn scenario_names(&self) -> Vec<&'static str> {
        self.scenarios.iter().map(|s| s.name()).collect()
    }

    pub fn find(&self, name: &str) -> Result<&dyn Scenario> {
        self.scenarios
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
            .ok_or_else(|| ReactiveError::UnknownScenario {
                name: name.to_string(),
            })
    }

    pub async fn run_all(&self) -> Result<Vec<ScenarioReport>> {
        let selected: Vec<&dyn Scenario> = self.scenarios.iter().map(|s| s.as_ref()).collect();
        self.run_scenarios(selected).await
    }

    /// Runs the named scenarios in the given order. Unknown names fail before anything runs.
    pub async fn run_selected(&self, names: &[String]) -> Result<Vec<ScenarioReport>> {
        let selected = names
            .iter()
            .map(|name| self.find(name))
            .collect::<Result<Vec<_>>>()?;
        self.run_scenarios(selected).await
    }

    async fn run_scenarios(&self, selected: Vec<&dyn Scenario>) -> Result<Vec<ScenarioReport>> {
        tracing::info!("🚀 Running {} scenarios", selected.len());

        let mut reports = Vec::with_capacity(selected.len());
        for scenario in selected {
            tracing::info!("▶️  {} - {}", scenario.name(), scenario.description());

            let report = scenario.run(&self.context).await?;

            if let Some(failure) = &report.expected_failure {
                tracing::info!("⚠️  {} failed as expected: {}", report.scenario, failure);
            }
            tracing::info!(
                "✅ {} finished: {} greetings observed, waited for completion: {}",
                report.scenario,
                report.greetings.len(),
                report.waited_for_completion
            );

            reports.push(report);
        }

        Ok(reports)
    }
}
