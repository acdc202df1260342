use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default = "default_source_path")]
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { path: default_source_path() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Sort applied to the loaded orders before any query
    pub default_sort_field: Option<String>,
    #[serde(default = "default_sort_direction")]
    pub default_sort_direction: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_sort_field: None,
            default_sort_direction: default_sort_direction(),
        }
    }
}

fn default_source_path() -> PathBuf {
    PathBuf::from("orders.json")
}

fn default_sort_direction() -> String {
    "ascending".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layered load: `default`, then `{RUN_MODE}`, then `local` from `dir`,
    /// then `ORDERDESK_*` environment variables (`__` separates nested keys).
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let layer = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&layer("default")).required(false))
            .add_source(config::File::with_name(&layer(&run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&layer("local")).required(false))
            .add_source(
                config::Environment::with_prefix("ORDERDESK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path()).unwrap();

        assert_eq!(config.display.default_sort_field, None);
        assert_eq!(config.display.default_sort_direction, "ascending");
    }

    #[test]
    fn test_local_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[source]\npath = \"data/orders.json\"\n\n[display]\ndefault_sort_field = \"total\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("local.toml"),
            "[display]\ndefault_sort_direction = \"descending\"\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();

        assert_eq!(config.source.path, PathBuf::from("data/orders.json"));
        assert_eq!(config.display.default_sort_field.as_deref(), Some("total"));
        assert_eq!(config.display.default_sort_direction, "descending");
    }
}
