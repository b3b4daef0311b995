//! Configuration file parsing and validation

pub mod mojicount_toml;

pub use mojicount_toml::{
    CONFIG_FILE_NAME, ColorOption, Config, MojicountMeta, OutputConfig, OutputFormat,
};
