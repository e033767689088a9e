use crate::core::GreetingSink;
use std::sync::{Arc, Mutex};

/// Writes one log line per greeting.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl GreetingSink for TracingSink {
    fn emit(&self, scenario: &str, greeting: &str) {
        tracing::info!(scenario = scenario, "{}", greeting);
    }
}

/// Keeps every greeting in memory, tagged with its scenario.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(String, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn greetings_for(&self, scenario: &str) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(name, _)| name == scenario)
            .map(|(_, greeting)| greeting)
            .collect()
    }
}

impl GreetingSink for MemorySink {
    fn emit(&self, scenario: &str, greeting: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((scenario.to_string(), greeting.to_string()));
        }
    }
}

/// Per-run tee: forwards to the shared sink and keeps the run's own greetings.
#[derive(Clone)]
pub struct ScenarioRecorder {
    scenario: &'static str,
    downstream: Arc<dyn GreetingSink>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl ScenarioRecorder {
    pub fn new(scenario: &'static str, downstream: Arc<dyn GreetingSink>) -> Self {
        Self {
            scenario,
            downstream,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn scenario(&self) -> &'static str {
        self.scenario
    }

    pub fn record(&self, greeting: String) {
        self.downstream.emit(self.scenario, &greeting);
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(greeting);
        }
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_tees_into_downstream() {
        let memory = Arc::new(MemorySink::new());
        let recorder = ScenarioRecorder::new("flux", memory.clone());

        recorder.record("My name is Harry Kane".to_string());
        recorder.clone().record("My name is Sam Kane".to_string());

        assert_eq!(
            recorder.snapshot(),
            vec!["My name is Harry Kane", "My name is Sam Kane"]
        );
        assert_eq!(memory.greetings_for("flux").len(), 2);
        assert!(memory.greetings_for("mono").is_empty());
    }

    #[test]
    fn test_memory_sink_keeps_scenario_tags() {
        let memory = MemorySink::new();
        memory.emit("mono", "My name is Harry Kane");
        memory.emit("flux", "My name is Lesly Peacock");

        assert_eq!(
            memory.entries(),
            vec![
                ("mono".to_string(), "My name is Harry Kane".to_string()),
                ("flux".to_string(), "My name is Lesly Peacock".to_string()),
            ]
        );
    }
}
