pub mod settings;
pub mod toml_config;

pub use settings::RenderSettings;

#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "dot-batch")]
#[command(about = "Render every .dot file in a directory with Graphviz")]
pub struct CliConfig {
    /// Directory to scan for .dot files [default: graphs/]
    pub directory: Option<String>,

    /// Path to a TOML config file with a [render] table
    #[arg(short, long)]
    pub config: Option<String>,

    /// Renderer executable [default: dot]
    #[arg(long)]
    pub renderer: Option<String>,

    /// Output format, passed as -T<format> and used as the output suffix [default: ps]
    #[arg(long)]
    pub format: Option<String>,

    /// Show what would be rendered without running the renderer
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with status 2 if any render fails
    #[arg(long)]
    pub fail_on_error: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Defaults, then the config file, then command line flags.
    pub fn resolve(&self) -> Result<RenderSettings> {
        let mut settings = RenderSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from: {}", path);
            toml_config::TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(directory) = &self.directory {
            settings.directory = directory.clone();
        }
        if let Some(renderer) = &self.renderer {
            settings.renderer = renderer.clone();
        }
        if let Some(format) = &self.format {
            settings.format = format.clone();
        }
        settings.dry_run = self.dry_run;
        settings.fail_on_error |= self.fail_on_error;

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_arguments_uses_default_directory() {
        let cli = CliConfig::try_parse_from(["dot-batch"]).unwrap();
        let settings = cli.resolve().unwrap();

        assert_eq!(settings, RenderSettings::default());
    }

    #[test]
    fn test_positional_directory() {
        let cli = CliConfig::try_parse_from(["dot-batch", "chains/"]).unwrap();
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.directory, "chains/");
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[render]\ndirectory = \"from-file\"\nformat = \"svg\"\nfail_on_error = true\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap();

        let cli =
            CliConfig::try_parse_from(["dot-batch", "from-cli", "--config", path]).unwrap();
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.directory, "from-cli");
        assert_eq!(settings.format, "svg");
        assert!(settings.fail_on_error);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let cli = CliConfig::try_parse_from(["dot-batch", "--format", "ps -o /etc/x"]).unwrap();
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli =
            CliConfig::try_parse_from(["dot-batch", "--config", "/nonexistent/dot-batch.toml"])
                .unwrap();
        assert!(cli.resolve().is_err());
    }
}
