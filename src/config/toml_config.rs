use crate::app::scenarios::SCENARIO_NAMES;
use crate::core::{GreetingSink, Person, ScenarioContext};
use crate::domain::fixtures::default_people;
use crate::utils::error::{ReactiveError, Result};
use crate::utils::validation::{
    validate_known_names, validate_non_empty_list, validate_non_empty_string, validate_range,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_DELAY_MS: u64 = 1000;
const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    #[serde(default)]
    pub harness: HarnessSection,
    #[serde(default)]
    pub filters: FilterSection,
    #[serde(default = "default_people")]
    pub fixtures: Vec<Person>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessSection {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    pub scenarios: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSection {
    #[serde(default = "default_first_name")]
    pub first_name: String,
    #[serde(default = "default_last_name_fragment")]
    pub last_name_fragment: String,
    #[serde(default = "default_missing_first_name")]
    pub missing_first_name: String,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_first_name() -> String {
    "Harry".to_string()
}

fn default_last_name_fragment() -> String {
    "K".to_string()
}

fn default_missing_first_name() -> String {
    "foo".to_string()
}

impl Default for HarnessSection {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            scenarios: None,
        }
    }
}

impl Default for FilterSection {
    fn default() -> Self {
        Self {
            first_name: default_first_name(),
            last_name_fragment: default_last_name_fragment(),
            missing_first_name: default_missing_first_name(),
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            harness: HarnessSection::default(),
            filters: FilterSection::default(),
            fixtures: default_people(),
        }
    }
}

impl HarnessConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReactiveError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReactiveError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FIRST_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReactiveError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        // 延遲為零時延遲情境會同步發出，失去示範意義
        validate_range("harness.delay_ms", self.harness.delay_ms, 1, MAX_DELAY_MS)?;

        if let Some(scenarios) = &self.harness.scenarios {
            validate_known_names("harness.scenarios", scenarios, &SCENARIO_NAMES)?;
        }

        validate_non_empty_list("fixtures", &self.fixtures)?;
        validate_non_empty_string("filters.first_name", &self.filters.first_name)?;
        validate_non_empty_string("filters.last_name_fragment", &self.filters.last_name_fragment)?;

        let missing = self.filters.missing_first_name.as_str();
        if self.fixtures.iter().any(|p| p.first_name() == missing) {
            return Err(ReactiveError::InvalidConfigValueError {
                field: "filters.missing_first_name".to_string(),
                value: missing.to_string(),
                reason: "Must not match the first name of any fixture".to_string(),
            });
        }

        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.harness.delay_ms)
    }

    /// Configured scenarios, or the whole catalogue when none are listed.
    pub fn selected_scenarios(&self) -> Vec<String> {
        match &self.harness.scenarios {
            Some(scenarios) if !scenarios.is_empty() => scenarios.clone(),
            _ => SCENARIO_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn into_context(self, sink: Arc<dyn GreetingSink>) -> ScenarioContext {
        let delay = self.delay();
        ScenarioContext {
            people: self.fixtures,
            delay,
            first_name: self.filters.first_name,
            last_name_fragment: self.filters.last_name_fragment,
            missing_first_name: self.filters.missing_first_name,
            sink,
        }
    }
}

impl Validate for HarnessConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
