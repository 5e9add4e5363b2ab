//! Configuration loading
//!
//! Reads [`classgrid_domain::Config`] from `CLASSGRID_*` environment
//! variables or from a JSON/TOML file.

pub mod loader;

pub use loader::{
    load, load_from_env, load_from_file, probe_config_paths, ENV_API_BASE_URL, ENV_API_TIMEOUT_MS,
    ENV_API_TOKEN, ENV_LOG_LEVEL, ENV_ROLE,
};
