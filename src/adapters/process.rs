use crate::core::plan::DEFAULT_RENDERER;
use crate::domain::model::{RenderJob, RenderStatus};
use crate::domain::ports::Renderer;
use async_trait::async_trait;
use std::ffi::OsString;
use tokio::process::Command;

/// Launches the external renderer as `<program> -T<format> <input> -o <output>`,
/// with the format taken from the job.
///
/// Arguments are passed as a list, never through a shell, so paths with
/// spaces or shell metacharacters reach the renderer unchanged.
#[derive(Debug, Clone)]
pub struct ProcessRenderer {
    program: String,
}

impl ProcessRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn args(job: &RenderJob) -> Vec<OsString> {
        vec![
            OsString::from(format!("-T{}", job.format)),
            job.input.clone().into_os_string(),
            OsString::from("-o"),
            job.output.clone().into_os_string(),
        ]
    }
}

impl Default for ProcessRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RENDERER)
    }
}

#[async_trait]
impl Renderer for ProcessRenderer {
    fn name(&self) -> &str {
        &self.program
    }

    async fn render(&self, job: &RenderJob) -> RenderStatus {
        tracing::debug!(
            "Running {} -T{} {} -o {}",
            self.program,
            job.format,
            job.input.display(),
            job.output.display()
        );

        match Command::new(&self.program)
            .args(Self::args(job))
            .status()
            .await
        {
            Ok(status) if status.success() => RenderStatus::Succeeded,
            Ok(status) => RenderStatus::Failed {
                code: status.code(),
            },
            Err(e) => RenderStatus::SpawnFailed {
                reason: format!("{}: {}", self.program, e),
            },
        }
    }
}
