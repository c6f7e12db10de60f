use crate::core::plan::{DEFAULT_DIRECTORY, DEFAULT_FORMAT, DEFAULT_RENDERER};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// Fully resolved settings for one render run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub directory: String,
    pub renderer: String,
    pub format: String,
    pub dry_run: bool,
    pub fail_on_error: bool,
}

impl RenderSettings {
    /// Default renderer and format for `directory`.
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            directory: DEFAULT_DIRECTORY.to_string(),
            renderer: DEFAULT_RENDERER.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            dry_run: false,
            fail_on_error: false,
        }
    }
}

impl ConfigProvider for RenderSettings {
    fn directory(&self) -> &str {
        &self.directory
    }

    fn format(&self) -> &str {
        &self.format
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for RenderSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("directory", &self.directory)?;
        validation::validate_non_empty_string("renderer", &self.renderer)?;
        validation::validate_format("format", &self.format)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();

        assert_eq!(settings.directory(), "graphs/");
        assert_eq!(settings.renderer, "dot");
        assert_eq!(settings.format(), "ps");
        assert!(!settings.dry_run());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_new_overrides_directory_only() {
        let settings = RenderSettings::new("/tmp/chains");

        assert_eq!(settings.directory, "/tmp/chains");
        assert_eq!(settings.renderer, "dot");
    }

    #[test]
    fn test_validation_rejects_empty_directory() {
        assert!(RenderSettings::new("").validate().is_err());
    }
}
