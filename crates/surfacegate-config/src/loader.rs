//! Configuration loader.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
        });

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.surfacegate`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.flags.is_empty());
    }

    #[test]
    fn test_load_flags_and_preferences() {
        let content = r#"
            [preferences]
            locale = "en-US"

            [flags.dc-cv-gmail-implicit-default-viewership]
            metadata = '{"enLocaleEnabled": true}'
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.preferences["locale"], "en-US");
        let flag = &config.flags["dc-cv-gmail-implicit-default-viewership"];
        assert!(flag.enabled);
        assert_eq!(flag.metadata.as_deref(), Some(r#"{"enLocaleEnabled": true}"#));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[storage]").unwrap();
        writeln!(file, "path = \"/tmp/sg-state.json\"").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.storage.path, "/tmp/sg-state.json");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/surfacegate.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("flags = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("SURFACEGATE_TEST_LOCALE", "fr-FR");
        }
        let content = "[preferences]\nlocale = \"${SURFACEGATE_TEST_LOCALE}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.preferences["locale"], "fr-FR");
        unsafe {
            std::env::remove_var("SURFACEGATE_TEST_LOCALE");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_SURFACEGATE_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/state.json");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/state.json"));
    }

    #[test]
    fn test_expand_path_no_tilde() {
        assert_eq!(ConfigLoader::expand_path("/var/lib/sg"), "/var/lib/sg");
    }
}
