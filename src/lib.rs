pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{MemorySink, TracingSink};
pub use config::HarnessConfig;
pub use crate::core::{
    completion::completion_signal,
    flux::{Disposable, Flux},
    harness::HarnessEngine,
    mono::Mono,
};
pub use domain::model::{Person, PersonCommand, SayMyName, ScenarioReport};
pub use utils::error::{ReactiveError, RequireValue, Result};
