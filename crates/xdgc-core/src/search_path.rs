//! Preference-ordered search-path variables (`XDG_DATA_DIRS`, `XDG_CONFIG_DIRS`).
//!
//! Values are handed back whole. Splitting them on [`SEARCH_PATH_SEPARATOR`]
//! is up to the caller.

use crate::env::Environment;
use crate::error::XdgError;
use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

/// Default for `XDG_DATA_DIRS`.
pub const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";

/// Default for `XDG_CONFIG_DIRS`.
pub const DEFAULT_CONFIG_DIRS: &str = "/etc/xdg";

/// Delimiter between entries of a search path on this host.
pub const SEARCH_PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// A search-path variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchPath {
    DataDirs,
    ConfigDirs,
}

impl SearchPath {
    pub const ALL: [Self; 2] = [Self::DataDirs, Self::ConfigDirs];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DataDirs => "data",
            Self::ConfigDirs => "config",
        }
    }

    #[must_use]
    pub const fn var(self) -> &'static str {
        match self {
            Self::DataDirs => "XDG_DATA_DIRS",
            Self::ConfigDirs => "XDG_CONFIG_DIRS",
        }
    }

    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::DataDirs => DEFAULT_DATA_DIRS,
            Self::ConfigDirs => DEFAULT_CONFIG_DIRS,
        }
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchPath {
    type Err = XdgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "data" | "data-dirs" => Ok(Self::DataDirs),
            "config" | "config-dirs" => Ok(Self::ConfigDirs),
            _ => Self::ALL
                .into_iter()
                .find(|k| k.var() == s)
                .ok_or_else(|| XdgError::UnknownSearchPath(s.to_string())),
        }
    }
}

/// The search-path variable if set and non-empty, else its default.
#[must_use]
pub fn search_path(kind: SearchPath, env: impl Environment) -> OsString {
    env.non_empty(kind.var())
        .unwrap_or_else(|| OsString::from(kind.default_value()))
}
