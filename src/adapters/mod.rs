// Adapters layer: concrete greeting sinks.

pub mod sink;

pub use sink::{MemorySink, ScenarioRecorder, TracingSink};
