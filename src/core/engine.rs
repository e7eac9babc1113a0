use crate::domain::model::StageReport;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Runs a model pipeline stage by stage with console progress.
pub struct ModelEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ModelEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<StageReport> {
        println!("🔍 Looking for model files...");
        let input = self.pipeline.locate()?;
        println!("✅ Found model: {}", input.display());

        let artifact = self.pipeline.produce(&input)?;
        tracing::debug!("Produced artifact: {}", artifact.display());

        let report = self.pipeline.stage(&artifact)?;
        println!(
            "✅ Model staged at: {}",
            report.destination.display()
        );
        println!("Model size: {:.2} MB", report.size_mb());

        Ok(report)
    }
}
