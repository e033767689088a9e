use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub trait SayMyName {
    fn say_my_name(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl SayMyName for Person {
    fn say_my_name(&self) -> String {
        format!("My name is {} {}", self.first_name, self.last_name)
    }
}

/// Same identity as a [`Person`], recast after a `map` step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonCommand {
    first_name: String,
    last_name: String,
}

impl PersonCommand {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl SayMyName for PersonCommand {
    fn say_my_name(&self) -> String {
        format!("My name is {} {}", self.first_name, self.last_name)
    }
}

impl From<Person> for PersonCommand {
    fn from(person: Person) -> Self {
        Self {
            first_name: person.first_name,
            last_name: person.last_name,
        }
    }
}

impl From<&Person> for PersonCommand {
    fn from(person: &Person) -> Self {
        Self {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    /// Greetings observed by the time the scenario returned, in emission order.
    pub greetings: Vec<String>,
    pub waited_for_completion: bool,
    pub expected_failure: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ScenarioReport {
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
