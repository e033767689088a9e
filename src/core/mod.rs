pub mod completion;
pub mod flux;
pub mod harness;
pub mod mono;

pub use crate::domain::model::{Person, PersonCommand, SayMyName, ScenarioReport};
pub use crate::domain::ports::{GreetingSink, Scenario, ScenarioContext};
pub use crate::utils::error::Result;
