//! Configuration file loading for regform
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `REGFORM_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./regform.toml` or `./.regform.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/regform/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAttachmentConfig, FileConfig, FileFormConfig, FileOutputConfig,
    FileWebhookConfig,
};
pub use loader::ConfigLoader;
