//! Common error types for songbook

use thiserror::Error;

/// Common result type for songbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the songbook crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON snapshot could not be read or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML snapshot could not be read or written
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// XML snapshot could not be read
    #[error("XML parse error: {0}")]
    XmlDe(#[from] quick_xml::DeError),

    /// XML snapshot could not be written
    #[error("XML write error: {0}")]
    XmlSer(#[from] quick_xml::SeError),

    /// TOML document could not be parsed
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML document could not be serialized
    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid value supplied outside the interactive prompts (CLI flags, config)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The interactive input stream reached end-of-file
    #[error("Input stream closed")]
    InputClosed,
}
