//! Configuration module for localx-assets
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LOCALX_*)
//! 3. Project config (./localx-assets.toml or --config)
//! 4. User config (<config dir>/localx-assets/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, load_with_warnings, user_config_path, with_env_overrides, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{
    ColorMode, Config, IconsConfig, OutputConfig, TemplatesConfig, DEFAULT_FONT_CANDIDATES,
};
