use crate::app::scenarios::ScenarioRun;
use crate::core::completion::completion_signal;
use crate::core::flux::Flux;
use crate::core::{SayMyName, Scenario, ScenarioContext, ScenarioReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct FluxScenario;

#[async_trait]
impl Scenario for FluxScenario {
    fn name(&self) -> &'static str {
        "flux"
    }

    fn description(&self) -> &'static str {
        "all fixtures, subscribe and forget"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<ScenarioReport> {
        let run = ScenarioRun::start(self.name(), ctx);
        let recorder = run.recorder();

        let _subscription =
            Flux::just(ctx.people.clone()).subscribe(move |p| recorder.record(p.say_my_name()));

        Ok(run.finish(false, None))
    }
}

pub struct FluxFilterScenario;

#[async_trait]
impl Scenario for FluxFilterScenario {
    fn name(&self) -> &'static str {
        "flux-filter"
    }

    fn description(&self) -> &'static str {
        "fixtures filtered by first name, subscribe and forget"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<ScenarioReport> {
        let run = ScenarioRun::start(self.name(), ctx);
        let recorder = run.recorder();
        let first_name = ctx.first_name.clone();

        let _subscription = Flux::just(ctx.people.clone())
            .filter(move |p| p.first_name() == first_name)
            .subscribe(move |p| recorder.record(p.say_my_name()));

        Ok(run.finish(false, None))
    }
}

/// Subscribes to a delayed flux and returns straight away.
///
/// The report is taken before the first delay elapses, so it holds no
/// greetings; the abandoned subscription keeps emitting into the sink later.
pub struct FluxDelayNoOutputScenario;

#[async_trait]
impl Scenario for FluxDelayNoOutputScenario {
    fn name(&self) -> &'static str {
        "flux-delay-no-output"
    }

    fn description(&self) -> &'static str {
        "delayed fixtures, returns before any emission"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<ScenarioReport> {
        let run = ScenarioRun::start(self.name(), ctx);
        let recorder = run.recorder();

        let _subscription = Flux::just(ctx.people.clone())
            .delay_elements(ctx.delay)
            .subscribe(move |p| recorder.record(p.say_my_name()));

        Ok(run.finish(false, None))
    }
}

pub struct FluxDelayScenario;

#[async_trait]
impl Scenario for FluxDelayScenario {
    fn name(&self) -> &'static str {
        "flux-delay"
    }

    fn description(&self) -> &'static str {
        "delayed fixtures, waits for completion"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<ScenarioReport> {
        let run = ScenarioRun::start(self.name(), ctx);
        let recorder = run.recorder();
        let (trigger, latch) = completion_signal();

        let _subscription = Flux::just(ctx.people.clone())
            .delay_elements(ctx.delay)
            .do_on_complete(move || trigger.fire())
            .subscribe(move |p| recorder.record(p.say_my_name()));

        latch.wait().await?;
        Ok(run.finish(true, None))
    }
}

pub struct FluxFilterDelayScenario;

#[async_trait]
impl Scenario for FluxFilterDelayScenario {
    fn name(&self) -> &'static str {
        "flux-filter-delay"
    }

    fn description(&self) -> &'static str {
        "delayed fixtures filtered by last name, waits for completion"
    }

    async fn run(&self, ctx: &ScenarioContext) -> Result<ScenarioReport> {
        let run = ScenarioRun::start(self.name(), ctx);
        let recorder = run.recorder();
        let fragment = ctx.last_name_fragment.clone();
        let (trigger, latch) = completion_signal();

        let _subscription = Flux::just(ctx.people.clone())
            .delay_elements(ctx.delay)
            .filter(move |p| p.last_name().contains(fragment.as_str()))
            .do_on_complete(move || trigger.fire())
            .subscribe(move |p| recorder.record(p.say_my_name()));

        latch.wait().await?;
        Ok(run.finish(true, None))
    }
}
