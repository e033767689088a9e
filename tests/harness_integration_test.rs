use anyhow::Result;
use reactive_examples::app::scenarios::SCENARIO_NAMES;
use reactive_examples::utils::validation::Validate;
use reactive_examples::{HarnessConfig, HarnessEngine, MemorySink, ReactiveError, ScenarioReport};
use std::sync::Arc;
use tempfile::TempDir;

fn report_named<'a>(reports: &'a [ScenarioReport], name: &str) -> &'a ScenarioReport {
    reports.iter().find(|r| r.scenario == name).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_run_all_in_catalogue_order() -> Result<()> {
    let memory = Arc::new(MemorySink::new());
    let engine = HarnessEngine::new(HarnessConfig::default().into_context(memory.clone()));

    assert_eq!(engine.scenario_names(), SCENARIO_NAMES);

    let reports = engine.run_all().await?;
    let names: Vec<&str> = reports.iter().map(|r| r.scenario.as_str()).collect();
    assert_eq!(names, SCENARIO_NAMES);

    let by_name = |name: &str| report_named(&reports, name);

    assert_eq!(by_name("mono").greetings, vec!["My name is Harry Kane"]);
    assert_eq!(by_name("mono-transform").greetings, vec!["My name is Harry Kane"]);
    assert!(by_name("mono-transform-filter").expected_failure.is_some());
    assert_eq!(by_name("flux").greetings.len(), 4);
    assert_eq!(by_name("flux-filter").greetings, vec!["My name is Harry Kane"]);
    assert!(by_name("flux-delay-no-output").greetings.is_empty());
    assert_eq!(by_name("flux-delay").greetings.len(), 4);
    assert_eq!(
        by_name("flux-filter-delay").greetings,
        vec!["My name is Harry Kane", "My name is Sam Kane"]
    );
    Ok(())
}

#[tokio::test]
async fn test_unknown_scenario_runs_nothing() {
    let memory = Arc::new(MemorySink::new());
    let engine = HarnessEngine::new(HarnessConfig::default().into_context(memory.clone()));

    let names = vec!["mono".to_string(), "monad".to_string()];
    let err = engine.run_selected(&names).await.unwrap_err();

    assert!(matches!(err, ReactiveError::UnknownScenario { ref name } if name == "monad"));
    assert!(memory.entries().is_empty());
}

#[tokio::test]
async fn test_config_file_drives_selection() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("harness.toml");

    let config_content = r#"
[harness]
delay_ms = 2
scenarios = ["flux-filter-delay", "mono"]

[filters]
last_name_fragment = "Pea"

[[fixtures]]
first_name = "Lesly"
last_name = "Peacock"

[[fixtures]]
first_name = "Sam"
last_name = "Kane"

[[fixtures]]
first_name = "Ashley"
last_name = "Peacock"
"#;
    tokio::fs::write(&config_path, config_content).await?;

    let config = HarnessConfig::from_file(&config_path)?;
    config.validate()?;

    let memory = Arc::new(MemorySink::new());
    let names = config.selected_scenarios();
    let engine = HarnessEngine::new(config.into_context(memory.clone()));
    let reports = engine.run_selected(&names).await?;

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].scenario, "flux-filter-delay");
    assert_eq!(
        reports[0].greetings,
        vec!["My name is Lesly Peacock", "My name is Ashley Peacock"]
    );
    assert_eq!(reports[1].greetings, vec!["My name is Lesly Peacock"]);
    Ok(())
}

#[tokio::test]
async fn test_reports_serialize_to_json() -> Result<()> {
    let memory = Arc::new(MemorySink::new());
    let engine = HarnessEngine::new(HarnessConfig::default().into_context(memory));

    let reports = engine
        .run_selected(&["mono-transform-filter".to_string()])
        .await?;
    let json = serde_json::to_value(&reports)?;

    assert_eq!(json[0]["scenario"], "mono-transform-filter");
    assert!(json[0]["expected_failure"].as_str().unwrap().contains("absent"));
    assert!(json[0]["started_at"].is_string());
    Ok(())
}
