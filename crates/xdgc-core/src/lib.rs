//! Resolution of XDG base directories.
//!
//! This crate maps each base directory category to a path:
//! - the override variable (`XDG_DATA_HOME`, ...) when set and non-empty
//! - `$HOME` joined with the category's suffix otherwise
//! - an error when neither applies (no path is ever guessed)
//!
//! Paths are computed, never checked or created.

pub mod category;
pub mod env;
pub mod error;
pub mod paths;
pub mod resolve;
pub mod search_path;
pub mod snapshot;

pub use category::{DirectoryCategory, RULES, ResolutionRule};
pub use env::{Environment, MapEnv, ProcessEnv};
pub use error::XdgError;
pub use paths::{
    bin_home, cache_home, config_dirs, config_home, data_dirs, data_home, runtime_dir, state_home,
};
pub use resolve::{HomeFallback, Resolution, Resolver, Source, resolve};
pub use search_path::{
    DEFAULT_CONFIG_DIRS, DEFAULT_DATA_DIRS, SEARCH_PATH_SEPARATOR, SearchPath, search_path,
};
pub use snapshot::BaseDirs;
