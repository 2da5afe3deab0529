/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use setlist_client::ClientConfig;
use setlist_editor::EditorConfig;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "setlist.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_client")]
    pub client: ClientConfig,

    #[serde(default)]
    pub editor: EditorConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Environment variables use the `SETLIST_` prefix and `__` between
    /// nested keys, e.g. `SETLIST_CLIENT__URL` or
    /// `SETLIST_EDITOR__HISTORY_CAPACITY`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SETLIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.client.url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CliError::Config(format!(
                "Server URL must start with http:// or https:// (got '{}')",
                self.client.url
            )));
        }

        if self.editor.history_capacity == 0 {
            return Err(CliError::Config(
                "History capacity must be at least 1 (set SETLIST_EDITOR__HISTORY_CAPACITY)"
                    .to_string(),
            ));
        }

        if self.client.timeout_secs == 0 {
            return Err(CliError::Config("Request timeout must be positive".to_string()));
        }

        Ok(())
    }
}

fn default_client() -> ClientConfig {
    ClientConfig::new("http://localhost:4000")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            client: default_client(),
            editor: EditorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.editor.history_capacity, 100);
        assert_eq!(config.client.graphql_path, "/api/graphql");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[client]
url = "https://setlist.example.com"
timeout_secs = 5

[editor]
history_capacity = 20
default_title = "New song"
"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.client.url, "https://setlist.example.com");
        assert_eq!(config.client.timeout_secs, 5);
        assert_eq!(config.editor.history_capacity, 20);
        assert_eq!(config.editor.default_title, "New song");
        assert_eq!(config.editor.default_artist, "?");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/setlist.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.client.url = "localhost:4000".into();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.editor.history_capacity = 0;
        assert!(config.validate().is_err());
    }
}
