//! Error types for base directory resolution.

use crate::category::DirectoryCategory;
use thiserror::Error;

/// Errors that can occur while resolving a base directory.
///
/// Every variant reflects missing configuration in the environment, so
/// retrying with the same environment yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XdgError {
    #[error(
        "cannot resolve {category}: {} is not set and HOME is not set",
        .category.override_var()
    )]
    MissingHome { category: DirectoryCategory },
    #[error(
        "cannot resolve {category}: {} is not set and it has no default",
        .category.override_var()
    )]
    UnsupportedCategory { category: DirectoryCategory },
    #[error("unknown directory category '{0}'")]
    UnknownCategory(String),
    #[error("unknown search path '{0}' (expected 'data' or 'config')")]
    UnknownSearchPath(String),
}
