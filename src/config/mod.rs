//! Config module.
//! Provides configuration types, the config file location, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, path_has_symlink_ancestor};
pub use types::{AuthMode, Config, LogLevel};
pub use validate::validate_and_normalize;
pub use xml::{load_config_from_xml, parse_config_xml, FileConfig};

/// Default for every prefix: the filesystem root.
pub const PREFIX_DEFAULT: &str = "/";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LABELMV_CONFIG";
