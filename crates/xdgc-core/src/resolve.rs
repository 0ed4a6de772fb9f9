//! Resolution of a directory category against an environment.

use crate::category::DirectoryCategory;
use crate::env::Environment;
use crate::error::XdgError;
use crate::search_path::{self, SearchPath};
use crate::snapshot::BaseDirs;
use std::ffi::OsString;
use std::path::PathBuf;

/// What to do when a `$HOME`-relative default is needed but `HOME` is unset or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFallback {
    /// Fail with [`XdgError::MissingHome`].
    #[default]
    Fail,
    /// Ask the operating system for the current user's home directory.
    Platform,
}

/// Where a resolved path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The override variable was set.
    Override { var: &'static str },
    /// `$HOME` joined with the suffix.
    HomeDefault { suffix: &'static str },
    /// The OS-reported home directory joined with the suffix.
    PlatformHome { suffix: &'static str },
}

/// A resolved path together with its [`Source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub category: DirectoryCategory,
    pub path: PathBuf,
    pub source: Source,
}

/// Resolves categories against a fixed [`Environment`].
#[derive(Debug, Clone, Default)]
pub struct Resolver<E> {
    env: E,
    home_fallback: HomeFallback,
}

impl<E: Environment> Resolver<E> {
    #[must_use]
    pub const fn new(env: E) -> Self {
        Self {
            env,
            home_fallback: HomeFallback::Fail,
        }
    }

    #[must_use]
    pub fn with_home_fallback(mut self, home_fallback: HomeFallback) -> Self {
        self.home_fallback = home_fallback;
        self
    }

    #[must_use]
    pub const fn home_fallback(&self) -> HomeFallback {
        self.home_fallback
    }

    #[must_use]
    pub const fn env(&self) -> &E {
        &self.env
    }

    /// Resolve `category` to a path.
    ///
    /// # Errors
    /// - [`XdgError::MissingHome`] if the override and `HOME` are both unset
    /// - [`XdgError::UnsupportedCategory`] if the override is unset and the
    ///   category has no default
    pub fn resolve(&self, category: DirectoryCategory) -> Result<PathBuf, XdgError> {
        self.resolve_traced(category).map(|r| r.path)
    }

    /// Like [`Self::resolve`], but also reports which rule produced the path.
    ///
    /// # Errors
    /// Same as [`Self::resolve`].
    pub fn resolve_traced(&self, category: DirectoryCategory) -> Result<Resolution, XdgError> {
        let rule = category.rule();

        // Taken verbatim: no trimming, no trailing-slash normalization.
        if let Some(value) = self.env.non_empty(rule.override_var) {
            return Ok(Resolution {
                category,
                path: PathBuf::from(value),
                source: Source::Override {
                    var: rule.override_var,
                },
            });
        }

        let Some(suffix) = rule.suffix else {
            return Err(XdgError::UnsupportedCategory { category });
        };

        if let Some(home) = self.env.non_empty("HOME") {
            return Ok(Resolution {
                category,
                path: PathBuf::from(home).join(suffix),
                source: Source::HomeDefault { suffix },
            });
        }

        match self.home_fallback {
            HomeFallback::Fail => Err(XdgError::MissingHome { category }),
            HomeFallback::Platform => platform_home()
                .map(|home| Resolution {
                    category,
                    path: home.join(suffix),
                    source: Source::PlatformHome { suffix },
                })
                .ok_or(XdgError::MissingHome { category }),
        }
    }

    /// Raw value of a search-path variable, or its default.
    #[must_use]
    pub fn search_path(&self, kind: SearchPath) -> OsString {
        search_path::search_path(kind, &self.env)
    }

    /// Resolve every category and search path at once.
    #[must_use]
    pub fn snapshot(&self) -> BaseDirs {
        BaseDirs::new(
            DirectoryCategory::ALL.map(|c| self.resolve(c)),
            self.search_path(SearchPath::DataDirs),
            self.search_path(SearchPath::ConfigDirs),
        )
    }
}

/// Resolve `category` against `env`, failing if `HOME` is needed but unset.
///
/// # Errors
/// See [`Resolver::resolve`].
pub fn resolve(category: DirectoryCategory, env: impl Environment) -> Result<PathBuf, XdgError> {
    Resolver::new(env).resolve(category)
}

fn platform_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}
