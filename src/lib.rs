pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalDirectory, ProcessRenderer};
pub use config::RenderSettings;
pub use crate::core::{
    batch::{render_directory, BatchRenderer},
    engine::RenderEngine,
};
pub use domain::model::{RenderJob, RenderOutcome, RenderReport, RenderStatus};
pub use utils::error::{RenderError, Result};
