use crate::domain::model::{RenderJob, RenderStatus};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;

/// Lists the immediate entries of a directory, in the order the
/// filesystem returns them.
pub trait EntrySource: Send + Sync {
    fn list_entries(
        &self,
        directory: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<OsString>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn directory(&self) -> &str;
    fn format(&self) -> &str;
    fn dry_run(&self) -> bool;
}

/// Runs the external renderer for one job, in the job's format. Failures
/// are reported through the returned status, never as an error.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Program name, for logging.
    fn name(&self) -> &str;

    async fn render(&self, job: &RenderJob) -> RenderStatus;
}
