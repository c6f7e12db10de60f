use crate::adapters::{LocalDirectory, ProcessRenderer};
use crate::config::RenderSettings;
use crate::core::plan;
use crate::core::{ConfigProvider, EntrySource, RenderReport, RenderStatus, Renderer};
use crate::utils::error::Result;
use std::path::Path;

pub struct BatchRenderer<S: EntrySource, R: Renderer, C: ConfigProvider> {
    source: S,
    renderer: R,
    config: C,
}

impl<S: EntrySource, R: Renderer, C: ConfigProvider> BatchRenderer<S, R, C> {
    pub fn new(source: S, renderer: R, config: C) -> Self {
        Self {
            source,
            renderer,
            config,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Renders every `.dot` entry of the configured directory, one at a time.
    ///
    /// Only a failed listing is an error. Each renderer result is recorded in
    /// the report and the run moves on to the next entry.
    pub async fn render_all(&self) -> Result<RenderReport> {
        let directory = Path::new(self.config.directory());
        let format = self.config.format();
        let dry_run = self.config.dry_run();

        let entries = self.source.list_entries(directory).await?;
        let mut report = RenderReport::new(directory);

        for job in plan::plan_jobs(directory, &entries, format) {
            let status = if dry_run {
                tracing::info!(
                    "[dry-run] {} -> {}",
                    job.input.display(),
                    job.output.display()
                );
                RenderStatus::Skipped
            } else {
                self.renderer.render(&job).await
            };

            match &status {
                RenderStatus::Failed { code } => tracing::warn!(
                    "Renderer failed for {} (exit code: {:?})",
                    job.input.display(),
                    code
                ),
                RenderStatus::SpawnFailed { reason } => tracing::warn!(
                    "Could not launch renderer for {}: {}",
                    job.input.display(),
                    reason
                ),
                RenderStatus::Succeeded => {
                    tracing::debug!("Rendered {}", job.output.display())
                }
                RenderStatus::Skipped => {}
            }

            report.record(job, status);
        }

        Ok(report)
    }
}

/// Renders `directory` with the local filesystem and the default `dot -Tps`
/// renderer.
pub async fn render_directory(directory: impl Into<String>) -> Result<RenderReport> {
    let config = RenderSettings::new(directory);
    let batch = BatchRenderer::new(LocalDirectory::new(), ProcessRenderer::default(), config);
    batch.render_all().await
}
