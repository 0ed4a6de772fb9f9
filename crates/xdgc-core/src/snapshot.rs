//! Every base directory resolved at once.

use crate::category::DirectoryCategory;
use crate::env::{Environment, ProcessEnv};
use crate::error::XdgError;
use crate::resolve::Resolver;
use crate::search_path::SearchPath;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Resolved base directories and search paths for one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirs {
    dirs: [Result<PathBuf, XdgError>; 6],
    data_dirs: OsString,
    config_dirs: OsString,
}

impl BaseDirs {
    pub(crate) const fn new(
        dirs: [Result<PathBuf, XdgError>; 6],
        data_dirs: OsString,
        config_dirs: OsString,
    ) -> Self {
        Self {
            dirs,
            data_dirs,
            config_dirs,
        }
    }

    /// Resolve everything against `env`.
    #[must_use]
    pub fn from_env(env: impl Environment) -> Self {
        Resolver::new(env).snapshot()
    }

    /// Snapshot of the process environment, taken on first call.
    ///
    /// Later changes to the environment are not observed.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<BaseDirs> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::from_env(ProcessEnv))
    }

    /// # Errors
    /// The error recorded when `category` was resolved.
    pub fn get(&self, category: DirectoryCategory) -> Result<&Path, &XdgError> {
        self.dirs[category.index()].as_deref()
    }

    /// Categories paired with their results, in table order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (DirectoryCategory, Result<&Path, &XdgError>)> {
        DirectoryCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    #[must_use]
    pub fn search_path(&self, kind: SearchPath) -> &OsStr {
        match kind {
            SearchPath::DataDirs => &self.data_dirs,
            SearchPath::ConfigDirs => &self.config_dirs,
        }
    }
}
