use crate::app::scenarios::{first_person, ScenarioRun};
use crate::core::mono::Mono;
use crate::core::{PersonCommand, SayMyName, Scenario, ScenarioContext, ScenarioReport};
use crate::utils::error::{ReactiveError, RequireValue, Result};
use async_trait::async_trait;

pub struct MonoScenario;

#[async_trait]
impl Scenario for MonoScenario {
    fn name(&self) -> &'static str {
        "mono"
    }

    fn description(&self) -> &'static str {
        "single value, blocking read"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<ScenarioReport> {
        let run = ScenarioRun::start(self.name(), ctx);

        let person = Mono::just(first_person(ctx)?).block().require("mono")?;
        run.recorder().record(person.say_my_name());

        Ok(run.finish(false, None))
    }
}

pub struct MonoTransformScenario;

#[async_trait]
impl Scenario for MonoTransformScenario {
    fn name(&self) -> &'static str {
        "mono-transform"
    }

    fn description(&self) -> &'static str {
        "single value mapped to a command, blocking read"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<ScenarioReport> {
        let run = ScenarioRun::start(self.name(), ctx);

        let command = Mono::just(first_person(ctx)?)
            .map(PersonCommand::from)
            .block()
            .require("mono-transform")?;
        run.recorder().record(command.say_my_name());

        Ok(run.finish(false, None))
    }
}

/// Filters the single value away, then forces access to it.
///
/// The forced access failing with [`ReactiveError::MissingValue`] is the
/// outcome this scenario demonstrates; resolving a value is an error.
pub struct MonoTransformFilterScenario;

#[async_trait]
impl Scenario for MonoTransformFilterScenario {
    fn name(&self) -> &'static str {
        "mono-transform-filter"
    }

    fn description(&self) -> &'static str {
        "single value filtered away, forced read fails"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<ScenarioReport> {
        let run = ScenarioRun::start(self.name(), ctx);
        let missing = ctx.missing_first_name.clone();

        let resolved = Mono::just(first_person(ctx)?)
            .map(PersonCommand::from)
            .filter(move |command| command.first_name() == missing)
            .block();

        match resolved.require("filtered person command") {
            Ok(command) => Err(ReactiveError::UnexpectedValue {
                greeting: command.say_my_name(),
            }),
            Err(err @ ReactiveError::MissingValue { .. }) => {
                tracing::debug!("Forced read of an empty single value failed: {}", err);
                Ok(run.finish(false, Some(err.to_string())))
            }
            Err(err) => Err(err),
        }
    }
}
