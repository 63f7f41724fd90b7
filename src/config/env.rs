//! Environment variables as a settings source.
//!
//! `DETECT_SOURCE_PATH=/src` supplies `detect.source.path`. Only variables
//! that map onto a registered key are kept, so unrelated variables such as
//! `PATH` or `HOME` never show up as unknown keys.
//!
//! The variables are handed in by the caller; nothing here reads the process
//! environment.

use std::ffi::OsString;

use tracing::trace;

use crate::property::PropertyKey;
use crate::registry::Registry;

use super::source::MapPropertySource;

/// Name reported for values that came from the environment.
pub const ENVIRONMENT: &str = "environment";

/// Build a source from `(name, value)` variable pairs.
pub fn from_vars<I>(vars: I, registry: &Registry<'_>) -> MapPropertySource
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut source = MapPropertySource::new(ENVIRONMENT);

    for (name, value) in vars {
        let key = PropertyKey::from_env_var(&name);
        if registry.contains_key(key.as_str()) {
            trace!(variable = %name, key = %key, "picked up environment variable");
            source.insert(key.as_str(), value);
        }
    }

    source
}

/// Build a source from raw OS variable pairs, as `std::env::vars_os` yields them.
///
/// Pairs whose name or value is not valid UTF-8 are skipped; no property key
/// can be spelled that way.
pub fn from_vars_os<I>(vars: I, registry: &Registry<'_>) -> MapPropertySource
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let utf8 = vars
        .into_iter()
        .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
            (Ok(name), Ok(value)) => Some((name, value)),
            (name, _) => {
                trace!(variable = ?name, "skipped environment variable that is not valid UTF-8");
                None
            }
        });

    from_vars(utf8, registry)
}
