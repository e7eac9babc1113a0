use anyhow::Context;
use clap::Parser;
use plantwise_model_tools::config::toml_config::TomlConfig;
use plantwise_model_tools::utils::error::ErrorSeverity;
use plantwise_model_tools::utils::{logger, validation::Validate};
use plantwise_model_tools::{ConvertConfig, ConvertPipeline, ModelEngine, UltralyticsExporter};

fn main() -> anyhow::Result<()> {
    let mut config = ConvertConfig::parse();

    logger::init_cli_logger(config.verbose);

    println!("YOLOv8 to ONNX Conversion");
    println!("{}", "=".repeat(40));

    tracing::info!("Starting convert-model");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path.display());
        let toml_config = TomlConfig::from_file(&path)
            .with_context(|| format!("failed to load config file '{}'", path.display()))?;
        toml_config.apply_to_convert(&mut config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let exporter = UltralyticsExporter::new();
    let pipeline = ConvertPipeline::new(exporter, config.settings());
    let engine = ModelEngine::new(pipeline);

    match engine.run() {
        Ok(report) => {
            tracing::info!("✅ Conversion completed: {}", report.destination.display());
            println!("\n✅ Conversion completed successfully!");
            println!("\nNext steps:");
            println!("1. Update the Flutter app to use the ONNX runtime");
            println!("2. Test the model with real plant images");
            println!("3. Verify disease detection accuracy");
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

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
