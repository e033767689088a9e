use anyhow::Context;
use clap::Parser;
use reactive_examples::app::scenarios::catalogue;
use reactive_examples::core::Scenario;
use reactive_examples::utils::{logger, validation::Validate};
use reactive_examples::{CliConfig, HarnessEngine, TracingSink};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.list {
        for scenario in catalogue() {
            println!("{:<24} {}", scenario.name(), scenario.description());
        }
        return Ok(());
    }

    tracing::info!("Starting reactive-examples harness");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let names = config.selected_scenarios();
    let engine = HarnessEngine::new(config.into_context(Arc::new(TracingSink)));

    match engine.run_selected(&names).await {
        Ok(reports) => {
            if cli.json {
                let rendered =
                    serde_json::to_string_pretty(&reports).context("Failed to render reports")?;
                println!("{}", rendered);
            } else {
                for report in &reports {
                    println!(
                        "{:<24} {} greetings in {}ms{}",
                        report.scenario,
                        report.greetings.len(),
                        report.elapsed().num_milliseconds(),
                        report
                            .expected_failure
                            .as_ref()
                            .map(|f| format!(" (expected failure: {})", f))
                            .unwrap_or_default()
                    );
                }
                println!("✅ {} scenarios completed", reports.len());
            }
        }
        Err(e) => {
            tracing::error!("❌ Harness run failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    }

    Ok(())
}
