use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::Level;

pub const DEFAULT_SERVER_BIND_POINT: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5003;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub server_bind_point: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    pub fn new() -> Self {
        Configuration {
            server_bind_point: DEFAULT_SERVER_BIND_POINT.into(),
            port: DEFAULT_PORT,
            log_level: "INFO".into(),
            log_format: LogFormat::default(),
        }
    }

    /// Reads the config file named by `CONFIG_DIRECTORY` and `CONFIG_FILE_NAME` when both are set,
    /// then applies `SERVER_BIND_POINT`, `PORT` and `LOG_LEVEL` from the environment.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match (
            std::env::var("CONFIG_DIRECTORY"),
            std::env::var("CONFIG_FILE_NAME"),
        ) {
            (Ok(directory), Ok(file_name)) => {
                Self::load_from_config_file(Path::new(&directory), &file_name)?
            }
            _ => Self::new(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn load_from_config_file(config_directory: &Path, file_name: &str) -> anyhow::Result<Self> {
        if !config_directory.exists() {
            std::fs::create_dir_all(config_directory)?;
        }

        let configuration_path = config_directory.join(file_name);
        if !configuration_path.exists() {
            let new_config = Configuration::new();
            let serialized = toml::to_string_pretty(&new_config)?;
            std::fs::write(configuration_path, serialized)?;
            Ok(new_config)
        } else {
            let raw_config = std::fs::read_to_string(&configuration_path)?;
            let deserialized: Configuration = toml::from_str(&raw_config).with_context(|| {
                format!("Failed to parse {}", configuration_path.display())
            })?;
            Ok(deserialized)
        }
    }

    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(server_bind_point) = lookup("SERVER_BIND_POINT") {
            self.server_bind_point = server_bind_point;
        }

        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got `{port}`"))?;
        }

        if let Some(log_level) = lookup("LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_bind_point, self.port)
    }

    pub fn tracing_level(&self) -> Level {
        match self.log_level.to_uppercase().as_str() {
            "TRACE" => Level::TRACE,
            "INFO" => Level::INFO,
            "WARN" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => Level::DEBUG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_listen_on_all_interfaces() {
        let config = Configuration::new();
        assert_eq!(config.bind_address(), "0.0.0.0:5003");
        assert_eq!(config.tracing_level(), Level::INFO);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn missing_file_is_created_with_defaults() -> anyhow::Result<()> {
        let directory = tempfile::tempdir()?;
        let config_directory = directory.path().join("nested");

        let config = Configuration::load_from_config_file(&config_directory, "config.toml")?;
        assert_eq!(config, Configuration::new());

        let written = std::fs::read_to_string(config_directory.join("config.toml"))?;
        assert_eq!(toml::from_str::<Configuration>(&written)?, Configuration::new());
        Ok(())
    }

    #[test]
    fn existing_file_is_read() -> anyhow::Result<()> {
        let directory = tempfile::tempdir()?;
        std::fs::write(
            directory.path().join("config.toml"),
            "port = 8080\nlog_format = \"json\"\n",
        )?;

        let config = Configuration::load_from_config_file(directory.path(), "config.toml")?;
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.server_bind_point, "0.0.0.0");
        Ok(())
    }

    #[test]
    fn invalid_file_is_an_error() -> anyhow::Result<()> {
        let directory = tempfile::tempdir()?;
        std::fs::write(directory.path().join("config.toml"), "port = \"abc\"\n")?;

        assert!(Configuration::load_from_config_file(directory.path(), "config.toml").is_err());
        Ok(())
    }

    #[test]
    fn environment_overrides_file_values() -> anyhow::Result<()> {
        let env = HashMap::from([
            ("SERVER_BIND_POINT", "127.0.0.1"),
            ("PORT", "9000"),
            ("LOG_LEVEL", "warn"),
        ]);

        let mut config = Configuration::new();
        config.apply_overrides(|key| env.get(key).map(ToString::to_string))?;

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.tracing_level(), Level::WARN);
        Ok(())
    }

    #[test]
    fn invalid_port_override_is_an_error() {
        let mut config = Configuration::new();
        let result = config.apply_overrides(|key| (key == "PORT").then(|| "http".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_log_level_falls_back_to_debug() {
        let config = Configuration {
            log_level: "VERBOSE".into(),
            ..Configuration::new()
        };
        assert_eq!(config.tracing_level(), Level::DEBUG);
    }
}
