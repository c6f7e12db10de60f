use crate::core::batch::BatchRenderer;
use crate::core::{ConfigProvider, EntrySource, RenderReport, Renderer};
use crate::utils::error::{RenderError, Result};

pub struct RenderEngine<S: EntrySource, R: Renderer, C: ConfigProvider> {
    batch: BatchRenderer<S, R, C>,
    fail_on_error: bool,
}

impl<S: EntrySource, R: Renderer, C: ConfigProvider> RenderEngine<S, R, C> {
    pub fn new(batch: BatchRenderer<S, R, C>) -> Self {
        Self {
            batch,
            fail_on_error: false,
        }
    }

    /// Turn per-file renderer failures into a `RenderFailures` error.
    pub fn with_fail_on_error(mut self, fail_on_error: bool) -> Self {
        self.fail_on_error = fail_on_error;
        self
    }

    pub async fn run(&self) -> Result<RenderReport> {
        let config = self.batch.config();
        tracing::info!("Starting render run");
        tracing::info!(
            "Scanning {} (renderer: {}, format: {})",
            config.directory(),
            self.batch.renderer().name(),
            config.format()
        );

        let report = self.batch.render_all().await?;

        tracing::info!(
            "Render run finished: {} attempted, {} succeeded, {} failed",
            report.attempted(),
            report.succeeded(),
            report.failed()
        );

        if self.fail_on_error && !report.is_clean() {
            return Err(RenderError::RenderFailures {
                failed: report.failed(),
                attempted: report.attempted(),
            });
        }

        Ok(report)
    }
}

/// Process exit status for a finished run. Renderer failures only count when
/// they were turned into an error by `with_fail_on_error`.
pub fn exit_status(result: &Result<RenderReport>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    }
}
