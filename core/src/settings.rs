use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::repository::DEFAULT_ENDPOINT;

const CONFIG_FILE_NAME: &str = "planfact.toml";
const APP_DIR_NAME: &str = ".planfact";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub strict_months: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
            strict_months: false,
            log_file: None,
        }
    }
}

// Every key is optional in the file.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    strict_months: Option<bool>,
    log_file: Option<PathBuf>,
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Log file for the TUI, `~/.planfact/planfact.log` unless configured.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| app_dir().map(|dir| dir.join("planfact.log")))
    }

    fn apply_file(&mut self, file: FileSettings) {
        if let Some(v) = file.endpoint {
            self.endpoint = v;
        }
        if let Some(v) = file.timeout_secs {
            self.timeout_secs = v;
        }
        if let Some(v) = file.strict_months {
            self.strict_months = v;
        }
        if let Some(v) = file.log_file {
            self.log_file = Some(v);
        }
    }

    fn apply_env<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("PLANFACT_ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(v) = var("PLANFACT_TIMEOUT_SECS") {
            self.timeout_secs = v
                .parse()
                .with_context(|| format!("PLANFACT_TIMEOUT_SECS is not a number: {v}"))?;
        }
        if let Some(v) = var("PLANFACT_STRICT_MONTHS") {
            self.strict_months = matches!(v.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(v) = var("PLANFACT_LOG_FILE") {
            self.log_file = Some(PathBuf::from(v));
        }
        Ok(())
    }
}

/// Defaults, then the first config file found, then `PLANFACT_*` env vars.
///
/// An explicit path must exist; the implicit locations are optional.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();

    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_paths().into_iter().find(|p| p.exists()),
    };

    if let Some(path) = path {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let file: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("invalid config {}", path.display()))?;
        settings.apply_file(file);
    }

    settings.apply_env(|key| std::env::var(key).ok())?;
    Ok(settings)
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = app_dir() {
        paths.push(dir.join("config.toml"));
    }
    paths
}

fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = \"http://localhost:9000/api.json\"").unwrap();
        writeln!(file, "strict_months = true").unwrap();

        let settings = load_settings(Some(file.path())).unwrap();

        assert_eq!(settings.endpoint, "http://localhost:9000/api.json");
        assert!(settings.strict_months);
        assert_eq!(settings.timeout_secs, 10);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = \"ten\"").unwrap();
        assert!(load_settings(Some(file.path())).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("PLANFACT_TIMEOUT_SECS", "3"),
            ("PLANFACT_STRICT_MONTHS", "yes"),
            ("PLANFACT_LOG_FILE", "/tmp/pf.log"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings
            .apply_env(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(settings.timeout(), Duration::from_secs(3));
        assert!(settings.strict_months);
        assert_eq!(settings.log_path(), Some(PathBuf::from("/tmp/pf.log")));
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_bad_timeout_is_an_error() {
        let mut settings = Settings::default();
        let result =
            settings.apply_env(|k| (k == "PLANFACT_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
