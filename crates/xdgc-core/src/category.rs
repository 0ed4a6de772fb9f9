//! Directory categories and the rule table that maps them to variables.

use crate::error::XdgError;
use std::fmt;
use std::str::FromStr;

/// A per-user base directory defined by the XDG Base Directory Specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryCategory {
    DataHome,
    ConfigHome,
    StateHome,
    CacheHome,
    /// Not part of the standard, but widely used for `~/.local/bin`.
    BinHome,
    /// Sockets, named pipes and similar. Has no default location.
    RuntimeDir,
}

impl DirectoryCategory {
    /// Every category, in table order.
    pub const ALL: [Self; 6] = [
        Self::DataHome,
        Self::ConfigHome,
        Self::StateHome,
        Self::CacheHome,
        Self::BinHome,
        Self::RuntimeDir,
    ];

    /// Stable kebab-case name (`data-home`, `runtime-dir`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DataHome => "data-home",
            Self::ConfigHome => "config-home",
            Self::StateHome => "state-home",
            Self::CacheHome => "cache-home",
            Self::BinHome => "bin-home",
            Self::RuntimeDir => "runtime-dir",
        }
    }

    /// Position in [`Self::ALL`] and [`RULES`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The rule governing this category.
    #[must_use]
    pub fn rule(self) -> &'static ResolutionRule {
        &RULES[self.index()]
    }

    /// Name of the environment variable that overrides this category.
    #[must_use]
    pub fn override_var(self) -> &'static str {
        self.rule().override_var
    }
}

impl fmt::Display for DirectoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DirectoryCategory {
    type Err = XdgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s) || c.override_var() == s)
            .ok_or_else(|| XdgError::UnknownCategory(s.to_string()))
    }
}

/// How a single category is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionRule {
    pub category: DirectoryCategory,
    pub override_var: &'static str,
    /// Path appended to `$HOME` when the override is unset.
    pub suffix: Option<&'static str>,
}

/// The resolution table, indexed in [`DirectoryCategory::ALL`] order.
pub static RULES: [ResolutionRule; 6] = [
    ResolutionRule {
        category: DirectoryCategory::DataHome,
        override_var: "XDG_DATA_HOME",
        suffix: Some(".local/share"),
    },
    ResolutionRule {
        category: DirectoryCategory::ConfigHome,
        override_var: "XDG_CONFIG_HOME",
        suffix: Some(".config"),
    },
    ResolutionRule {
        category: DirectoryCategory::StateHome,
        override_var: "XDG_STATE_HOME",
        suffix: Some(".local/state"),
    },
    ResolutionRule {
        category: DirectoryCategory::CacheHome,
        override_var: "XDG_CACHE_HOME",
        suffix: Some(".cache"),
    },
    ResolutionRule {
        category: DirectoryCategory::BinHome,
        override_var: "XDG_BIN_HOME",
        suffix: Some(".local/bin"),
    },
    ResolutionRule {
        category: DirectoryCategory::RuntimeDir,
        override_var: "XDG_RUNTIME_DIR",
        suffix: None,
    },
];
