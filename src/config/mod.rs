pub mod toml_config;

pub use toml_config::HarnessConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "reactive-examples")]
#[command(about = "Runs the single-value and multi-value pipeline scenarios")]
pub struct CliConfig {
    /// Scenarios to run, comma separated (default: all, or the config file's list)
    #[arg(long, value_delimiter = ',')]
    pub scenario: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the per-element delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// List available scenarios and exit
    #[arg(long)]
    pub list: bool,

    /// Print scenario reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file (if any) and applies command line overrides.
    pub fn resolve(&self) -> Result<HarnessConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                HarnessConfig::from_file(path)?
            }
            None => HarnessConfig::default(),
        };

        if let Some(delay_ms) = self.delay_ms {
            tracing::info!("🔧 Delay overridden to: {}ms", delay_ms);
            config.harness.delay_ms = delay_ms;
        }

        if !self.scenario.is_empty() {
            config.harness.scenarios = Some(self.scenario.clone());
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_cli_overrides() {
        let cli = CliConfig::parse_from([
            "reactive-examples",
            "--scenario",
            "flux,flux-delay",
            "--delay-ms",
            "20",
        ]);

        let config = cli.resolve().unwrap();
        assert_eq!(config.harness.delay_ms, 20);
        assert_eq!(config.selected_scenarios(), vec!["flux", "flux-delay"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = CliConfig::parse_from(["reactive-examples"]);
        assert!(!cli.list);
        assert!(!cli.json);

        let config = cli.resolve().unwrap();
        assert_eq!(config.harness.delay_ms, toml_config::DEFAULT_DELAY_MS);
        assert_eq!(config.selected_scenarios().len(), 8);
    }

    #[test]
    fn test_cli_missing_config_file() {
        let cli = CliConfig::parse_from(["reactive-examples", "--config", "/nonexistent/harness.toml"]);
        assert!(cli.resolve().is_err());
    }
}
