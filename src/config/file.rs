//! Settings file support.
//!
//! Properties can be written down in a TOML file located at
//! `~/.config/detect-config/application.toml` (or the platform-specific
//! equivalent). Nested tables flatten into dotted keys, so both of these
//! spell `detect.tools`:
//!
//! ```toml
//! detect.tools = "DOCKER,DETECTOR"
//!
//! [detect]
//! tools = ["DOCKER", "DETECTOR"]
//! ```
//!
//! A key that is also the prefix of another key, such as `detect.tools` next
//! to `detect.tools.excluded`, cannot be both a value and a table. Quote the
//! longer one inside its table: `"tools.excluded" = "POLARIS"`.
//!
//! Scalars are taken by their TOML text (`true`, `120`, ...) and arrays of
//! scalars are joined with `,`, which is exactly what array and list
//! properties split on.

use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::debug;

use crate::error::SourceError;
use crate::parse::list::DELIMITER;

use super::source::MapPropertySource;

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Returns the path where the settings file is expected.
///
/// The file is located at `<config_dir>/detect-config/application.toml`,
/// where `<config_dir>` is the platform-specific configuration directory
/// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
///
/// # Returns
///
/// `Some(PathBuf)` with the file path, or `None` if the config directory
/// cannot be determined.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("detect-config").join("application.toml"))
}

/// Load settings from the default file location.
///
/// A missing file (or an undeterminable config directory) gives an empty
/// source.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid TOML.
pub fn load_default() -> Result<MapPropertySource, SourceError> {
    match config_path() {
        Some(path) if path.exists() => load(&path),
        _ => {
            debug!("no settings file at the default location");
            Ok(MapPropertySource::new("default settings file"))
        }
    }
}

/// Load settings from an explicitly named file.
///
/// # Errors
///
/// Returns an error if the file cannot be read (including when it does not
/// exist) or is not valid TOML.
pub fn load(path: &Path) -> Result<MapPropertySource, SourceError> {
    let path = expand_tilde(path);

    let content = std::fs::read_to_string(&path).map_err(|source| SourceError::Read {
        path: path.clone(),
        source,
    })?;

    let source = parse(&path.display().to_string(), &content).map_err(|source| SourceError::Toml {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), values = source.len(), "loaded settings file");
    Ok(source)
}

/// Parse TOML text into a flattened source called `name`.
///
/// # Errors
///
/// Returns the TOML error if the text is malformed.
pub fn parse(name: &str, content: &str) -> Result<MapPropertySource, toml::de::Error> {
    let table: Table = toml::from_str(content)?;

    let mut source = MapPropertySource::new(name);
    flatten("", &table, &mut source);
    Ok(source)
}

fn flatten(prefix: &str, table: &Table, source: &mut MapPropertySource) {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };

        match value {
            Value::Table(nested) => flatten(&key, nested, source),
            Value::Array(items) => {
                let joined = items
                    .iter()
                    .map(scalar_text)
                    .collect::<Vec<_>>()
                    .join(&DELIMITER.to_string());
                source.insert(&key, joined);
            }
            other => {
                source.insert(&key, scalar_text(other));
            }
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
