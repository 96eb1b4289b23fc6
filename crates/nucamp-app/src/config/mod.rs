//! Configuration file parsing for nucamp
//!
//! Settings live in `config.toml` inside the config directory
//! (`~/.config/nucamp/` unless overridden on the command line).

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, init_config_dir, load_settings};
pub use types::*;
