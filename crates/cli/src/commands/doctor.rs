//! `studyweave doctor` — Diagnose configuration and provider health.

use studyweave_config::AppConfig;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 Studyweave Doctor — System Diagnostics");
    println!("========================================\n");

    let mut issues = 0;

    println!("  ✅ Rust binary running");

    // Check config
    let config_path = AppConfig::config_dir().join("config.toml");
    let config = if config_path.exists() {
        match AppConfig::load() {
            Ok(config) => {
                println!("  ✅ Config file valid");
                Some(config)
            }
            Err(e) => {
                println!("  ❌ Config file invalid: {e}");
                issues += 1;
                None
            }
        }
    } else {
        println!("  ℹ️  No config file at {} — using defaults", config_path.display());
        AppConfig::load().ok()
    };

    if let Some(config) = config {
        // Check API key
        if config.has_api_key() {
            println!("  ✅ API key configured");
        } else {
            println!("  ⚠️  No API key — set STUDYWEAVE_API_KEY or add api_key to config.toml");
            issues += 1;
        }

        // Check provider reachability
        match studyweave_providers::build_from_config(&config) {
            Ok(generator) => match generator.health_check().await {
                Ok(true) => println!("  ✅ Provider '{}' reachable", generator.name()),
                Ok(false) | Err(_) => {
                    println!("  ⚠️  Provider '{}' not reachable", generator.name());
                    issues += 1;
                }
            },
            Err(e) => {
                println!("  ❌ Provider setup failed: {e}");
                issues += 1;
            }
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
