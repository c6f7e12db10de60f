use crate::config::settings::RenderSettings;
use crate::utils::error::{RenderError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub render: RenderTable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderTable {
    pub directory: Option<String>,
    pub renderer: Option<String>,
    pub format: Option<String>,
    pub fail_on_error: Option<bool>,
}

impl TomlConfig {
    /// Loads the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| RenderError::ConfigError {
                message: format!(
                    "cannot read config file '{}': {}",
                    path.as_ref().display(),
                    e
                ),
            })?;
        Self::from_toml_str(&content)
    }

    /// Parses the config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RenderError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Overwrites the settings with every value present in the file.
    pub fn apply_to(&self, settings: &mut RenderSettings) {
        let render = &self.render;
        if let Some(directory) = &render.directory {
            settings.directory = directory.clone();
        }
        if let Some(renderer) = &render.renderer {
            settings.renderer = renderer.clone();
        }
        if let Some(format) = &render.format {
            settings.format = format.clone();
        }
        if let Some(fail_on_error) = render.fail_on_error {
            settings.fail_on_error = fail_on_error;
        }
    }
}
