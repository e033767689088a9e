use crate::domain::model::{Person, ScenarioReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Destination for the greeting line written per emitted element.
pub trait GreetingSink: Send + Sync {
    fn emit(&self, scenario: &str, greeting: &str);
}

/// Inputs shared by all scenarios of one harness run.
#[derive(Clone)]
pub struct ScenarioContext {
    pub people: Vec<Person>,
    pub delay: Duration,
    pub first_name: String,
    pub last_name_fragment: String,
    pub missing_first_name: String,
    pub sink: Arc<dyn GreetingSink>,
}

#[async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    async fn run(&self, ctx: &ScenarioContext) -> Result<ScenarioReport>;
}
