use anyhow::Context;
use clap::Parser;
use plantwise_model_tools::config::toml_config::TomlConfig;
use plantwise_model_tools::utils::error::ErrorSeverity;
use plantwise_model_tools::utils::{logger, validation::Validate};
use plantwise_model_tools::{CopyConfig, CopyPipeline, ModelEngine};

fn main() -> anyhow::Result<()> {
    let mut config = CopyConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting copy-model");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path.display());
        let toml_config = TomlConfig::from_file(&path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?;
        toml_config.apply_to_copy(&mut config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let destination_hint = config.assets_dir.join(&config.target_name);
    let pipeline = CopyPipeline::new(config.settings());
    let engine = ModelEngine::new(pipeline);

    match engine.run() {
        Ok(report) => {
            tracing::info!("✅ Model staged: {}", report.destination.display());
            println!("\n✅ The Flutter app will pick up the model automatically!");
        }
        Err(e) => {
            tracing::error!(
                "❌ Copy failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            eprintln!("📝 Next steps:");
            eprintln!("   1. Convert the trained model (.pt) to TensorFlow Lite (.tflite)");
            eprintln!("   2. Place the .tflite file at: {}", destination_hint.display());
            eprintln!("   3. The Flutter app will pick up the real model automatically!");

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
