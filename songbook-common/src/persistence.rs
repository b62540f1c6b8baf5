//! Collection persistence
//!
//! The store only depends on [`Persistence`]: load a complete replacement
//! collection, or save one. [`FileSerializer`] implements it for any serde
//! record type in JSON, YAML, TOML or XML.
//!
//! Files hold a snapshot document with a single `records` array. Writes go to
//! a sibling temp file first and are renamed over the target, so a failed save
//! never leaves a half-written file behind.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

use crate::{Error, Result};

/// Load/save contract for one record kind
pub trait Persistence<T> {
    /// Complete collection, or an error; never a partial result
    fn load(&self) -> Result<Vec<T>>;

    fn save(&self, records: &[T]) -> Result<()>;
}

/// On-disk encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Yaml,
    Toml,
    Xml,
}

impl Format {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
            Format::Xml => "xml",
        }
    }

    /// Format implied by a path's extension, if recognised
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            "xml" => Ok(Format::Xml),
            other => Err(Error::InvalidInput(format!(
                "unsupported format '{}' (expected json, yaml, toml or xml)",
                other
            ))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Root document; in XML each record is a `<records>` element under `<snapshot>`
#[derive(Serialize, Deserialize)]
#[serde(rename = "snapshot")]
struct Snapshot<T> {
    #[serde(default = "Vec::new")]
    records: Vec<T>,
}

/// File-backed [`Persistence`] in one of the supported formats
#[derive(Debug, Clone)]
pub struct FileSerializer {
    path: PathBuf,
    format: Format,
}

impl FileSerializer {
    pub fn new(path: impl Into<PathBuf>, format: Format) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Format taken from the extension, JSON when it is not recognised
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = Format::from_path(&path).unwrap_or_default();
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }

    fn encode<T: Serialize>(&self, records: &[T]) -> Result<String> {
        let snapshot = Snapshot {
            records: records.iter().collect::<Vec<_>>(),
        };
        Ok(match self.format {
            Format::Json => serde_json::to_string_pretty(&snapshot)?,
            Format::Yaml => serde_yaml::to_string(&snapshot)?,
            Format::Toml => toml::to_string_pretty(&snapshot)?,
            Format::Xml => quick_xml::se::to_string(&snapshot)?,
        })
    }

    fn decode<T: DeserializeOwned>(&self, content: &str) -> Result<Vec<T>> {
        let snapshot: Snapshot<T> = match self.format {
            Format::Json => serde_json::from_str(content)?,
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Toml => toml::from_str(content)?,
            Format::Xml => quick_xml::de::from_str(content)?,
        };
        Ok(snapshot.records)
    }
}

impl<T> Persistence<T> for FileSerializer
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>> {
        debug!(path = %self.path.display(), format = %self.format, "Loading records");
        let content = fs::read_to_string(&self.path)?;
        let records = self.decode(&content)?;
        info!(path = %self.path.display(), count = records.len(), "Records loaded");
        Ok(records)
    }

    fn save(&self, records: &[T]) -> Result<()> {
        let content = self.encode(records)?;
        write_atomic(&self.path, &content)?;
        info!(path = %self.path.display(), count = records.len(), "Records saved");
        Ok(())
    }
}

/// Write `content` to `path` via a temp file + rename
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    if let Err(e) = fs::write(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}
