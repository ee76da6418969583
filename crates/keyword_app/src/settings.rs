use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use keyword_client::ApiSettings;
use keyword_logging::{kw_debug, kw_info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::CliArgs;

const SETTINGS_FILENAME: &str = "keyword_app.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
}

/// On-disk shape of the settings file. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct SettingsFile {
    base_url: String,
    search_path: String,
    subscribe_path: String,
    connect_timeout_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self::from(&ApiSettings::default())
    }
}

impl From<&ApiSettings> for SettingsFile {
    fn from(settings: &ApiSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            search_path: settings.search_path.clone(),
            subscribe_path: settings.subscribe_path.clone(),
            connect_timeout_ms: settings.connect_timeout.map(duration_millis),
            request_timeout_ms: settings.request_timeout.map(duration_millis),
        }
    }
}

impl From<SettingsFile> for ApiSettings {
    fn from(file: SettingsFile) -> Self {
        Self {
            base_url: file.base_url,
            search_path: file.search_path,
            subscribe_path: file.subscribe_path,
            connect_timeout: file.connect_timeout_ms.map(Duration::from_millis),
            request_timeout: file.request_timeout_ms.map(Duration::from_millis),
        }
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Settings file first, then command-line overrides.
pub(crate) fn resolve(cli: &CliArgs) -> Result<ApiSettings, SettingsError> {
    let mut settings = match &cli.config {
        Some(path) => load(path)?,
        None => load_if_present(Path::new(SETTINGS_FILENAME))?,
    };
    if let Some(base_url) = &cli.base_url {
        settings.base_url = base_url.clone();
    }
    Ok(settings)
}

/// Reads a settings file that must exist.
pub(crate) fn load(path: &Path) -> Result<ApiSettings, SettingsError> {
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: SettingsFile = ron::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    kw_info!("Loaded settings from {:?}", path);
    Ok(file.into())
}

/// Like [`load`], but a missing file yields the defaults.
pub(crate) fn load_if_present(path: &Path) -> Result<ApiSettings, SettingsError> {
    match load(path) {
        Err(SettingsError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            kw_debug!("No settings file at {:?}; using defaults", path);
            Ok(ApiSettings::default())
        }
        other => other,
    }
}

pub(crate) fn to_ron(settings: &ApiSettings) -> Result<String, SettingsError> {
    let pretty = ron::ser::PrettyConfig::new();
    Ok(ron::ser::to_string_pretty(
        &SettingsFile::from(settings),
        pretty,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use crate::logging::LogDestination;

    fn cli(config: Option<PathBuf>, base_url: Option<&str>) -> CliArgs {
        CliArgs {
            config,
            base_url: base_url.map(str::to_owned),
            log: LogDestination::File,
            print_config: false,
        }
    }

    #[test]
    fn missing_optional_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = load_if_present(&temp.path().join(SETTINGS_FILENAME)).unwrap();
        assert_eq!(settings, ApiSettings::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.ron");
        let err = resolve(&cli(Some(path), None)).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.ron");
        fs::write(
            &path,
            r#"(base_url: "http://backend.test:9000", request_timeout_ms: Some(1500))"#,
        )
        .unwrap();

        let settings = load(&path).unwrap();
        assert_eq!(settings.base_url, "http://backend.test:9000");
        assert_eq!(settings.search_path, "/api/search");
        assert_eq!(settings.subscribe_path, "/api/subscribe");
        assert_eq!(settings.connect_timeout, None);
        assert_eq!(settings.request_timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.ron");
        fs::write(&path, "(base_url: 42").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn command_line_base_url_wins() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.ron");
        fs::write(&path, r#"(base_url: "http://from-file.test")"#).unwrap();

        let settings = resolve(&cli(Some(path), Some("http://from-cli.test"))).unwrap();
        assert_eq!(settings.base_url, "http://from-cli.test");
    }

    #[test]
    fn printed_settings_load_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.ron");
        let settings = ApiSettings {
            connect_timeout: Some(Duration::from_secs(2)),
            ..ApiSettings::default()
        };
        fs::write(&path, to_ron(&settings).unwrap()).unwrap();

        assert_eq!(load(&path).unwrap(), settings);
    }
}
