use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReactiveError {
    #[error("Value is absent: {context}")]
    MissingValue { context: String },

    #[error("Expected an absent value but resolved: {greeting}")]
    UnexpectedValue { greeting: String },

    #[error("Completion signal dropped before the stream completed")]
    CompletionDropped,

    #[error("Subscriber task failed: {0}")]
    SubscriberFailed(#[from] tokio::task::JoinError),

    #[error("Unknown scenario: {name}")]
    UnknownScenario { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReactiveError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReactiveError::UnknownScenario { name } => {
                format!("'{}' is not a known scenario", name)
            }
            ReactiveError::ConfigError { .. } | ReactiveError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            ReactiveError::CompletionDropped | ReactiveError::SubscriberFailed(_) => {
                format!("A subscription ended abnormally: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReactiveError::UnknownScenario { .. } => "Run with --list to see available scenarios",
            ReactiveError::ConfigError { .. } | ReactiveError::InvalidConfigValueError { .. } => {
                "Check the TOML configuration file and command line overrides"
            }
            ReactiveError::IoError(_) => "Make sure the configuration file exists and is readable",
            ReactiveError::MissingValue { .. } | ReactiveError::UnexpectedValue { .. } => {
                "Check the filter arguments against the configured fixtures"
            }
            _ => "Re-run with --verbose for more details",
        }
    }
}

/// 強制取得可能不存在的值
pub trait RequireValue<T> {
    fn require(self, context: &str) -> Result<T>;
}

impl<T> RequireValue<T> for Option<T> {
    fn require(self, context: &str) -> Result<T> {
        self.ok_or_else(|| ReactiveError::MissingValue {
            context: context.to_string(),
        })
    }
}

pub type Result<T> = std::result::Result<T, ReactiveError>;
