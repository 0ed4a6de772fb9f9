//! Accessors over the real process environment.
//!
//! Each call reads the environment afresh and returns a newly owned value.
//! Use [`crate::BaseDirs::global`] for a cached view instead.

use crate::category::DirectoryCategory;
use crate::env::ProcessEnv;
use crate::error::XdgError;
use crate::resolve::resolve;
use crate::search_path::{SearchPath, search_path};
use std::ffi::OsString;
use std::path::PathBuf;

/// Get the data directory (~/.local/share)
/// Can be overridden with `XDG_DATA_HOME` environment variable
///
/// # Errors
/// [`XdgError::MissingHome`] if neither `XDG_DATA_HOME` nor `HOME` is set.
pub fn data_home() -> Result<PathBuf, XdgError> {
    resolve(DirectoryCategory::DataHome, ProcessEnv)
}

/// Get the config directory (~/.config)
/// Can be overridden with `XDG_CONFIG_HOME` environment variable
///
/// # Errors
/// [`XdgError::MissingHome`] if neither `XDG_CONFIG_HOME` nor `HOME` is set.
pub fn config_home() -> Result<PathBuf, XdgError> {
    resolve(DirectoryCategory::ConfigHome, ProcessEnv)
}

/// Get the state directory (~/.local/state)
/// Can be overridden with `XDG_STATE_HOME` environment variable
///
/// # Errors
/// [`XdgError::MissingHome`] if neither `XDG_STATE_HOME` nor `HOME` is set.
pub fn state_home() -> Result<PathBuf, XdgError> {
    resolve(DirectoryCategory::StateHome, ProcessEnv)
}

/// Get the cache directory (~/.cache)
/// Can be overridden with `XDG_CACHE_HOME` environment variable
///
/// # Errors
/// [`XdgError::MissingHome`] if neither `XDG_CACHE_HOME` nor `HOME` is set.
pub fn cache_home() -> Result<PathBuf, XdgError> {
    resolve(DirectoryCategory::CacheHome, ProcessEnv)
}

/// Get the executables directory (~/.local/bin)
/// Can be overridden with `XDG_BIN_HOME` environment variable
///
/// # Errors
/// [`XdgError::MissingHome`] if neither `XDG_BIN_HOME` nor `HOME` is set.
pub fn bin_home() -> Result<PathBuf, XdgError> {
    resolve(DirectoryCategory::BinHome, ProcessEnv)
}

/// Get the runtime directory from `XDG_RUNTIME_DIR`
///
/// # Errors
/// [`XdgError::UnsupportedCategory`] if `XDG_RUNTIME_DIR` is not set.
pub fn runtime_dir() -> Result<PathBuf, XdgError> {
    resolve(DirectoryCategory::RuntimeDir, ProcessEnv)
}

/// `XDG_DATA_DIRS`, unsplit
#[must_use]
pub fn data_dirs() -> OsString {
    search_path(SearchPath::DataDirs, ProcessEnv)
}

/// `XDG_CONFIG_DIRS`, unsplit
#[must_use]
pub fn config_dirs() -> OsString {
    search_path(SearchPath::ConfigDirs, ProcessEnv)
}
