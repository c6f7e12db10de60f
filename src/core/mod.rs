pub mod batch;
pub mod engine;
pub mod plan;

pub use crate::domain::model::{RenderJob, RenderOutcome, RenderReport, RenderStatus};
pub use crate::domain::ports::{ConfigProvider, EntrySource, Renderer};
pub use crate::utils::error::Result;
