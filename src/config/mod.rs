//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SHAPES_*)
//! 3. Explicit `--config` file, or `./shapes.toml`
//! 4. User config (~/.config/shapes/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, load_layered, load_with_warnings, with_env_overrides, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{Config, OutputConfig, OutputFormat, Verbosity};
