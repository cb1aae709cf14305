//! Reading and writing settings files.
//!
//! The format is picked from the file extension. Anything `serde` can
//! describe can be stored; the engine's own settings type lives next to the
//! engine and only relies on [`FileStore`] for I/O.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, ParseError, SerDeError};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(Error::UnsupportedFormat(
                other.map(str::to_owned).unwrap_or_else(|| path.display().to_string()),
            )),
        }
    }

    /// Parse `src` in this format. `name` labels the source in diagnostics.
    pub fn parse<T: DeserializeOwned>(self, name: &str, src: String) -> Result<T, Error> {
        match self {
            Self::Json => match serde_json::from_str(&src) {
                Ok(value) => Ok(value),
                Err(err) => Err(ParseError::json(err, name, src).into()),
            },
            Self::Toml => match toml::from_str(&src) {
                Ok(value) => Ok(value),
                Err(err) => Err(ParseError::toml(err, name, src).into()),
            },
        }
    }

    /// Render `value` in this format.
    pub fn render<T: Serialize>(self, value: &T) -> Result<String, Error> {
        match self {
            Self::Json => serde_json::to_string_pretty(value).map_err(|e| SerDeError::Json(e).into()),
            Self::Toml => toml::to_string_pretty(value).map_err(|e| SerDeError::Toml(e).into()),
        }
    }
}

/// The trait for loading settings data.
pub trait Loader {
    fn load<T: DeserializeOwned>(&self) -> Result<T, Error>;
}

/// The trait for saving settings data.
pub trait Saver {
    fn save<T: Serialize>(&self, value: &T) -> Result<(), Error>;
}

/// An implementation of [`Loader`] and [`Saver`] that reads and writes a file.
///
/// Data is serialized and deserialized according to the file extension;
/// `.json` and `.toml` are supported.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a new [`FileStore`] with the given path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Loader for FileStore {
    fn load<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let format = ConfigFormat::from_path(&self.path)?;
        let src = std::fs::read_to_string(&self.path)?;
        tracing::debug!(path = %self.path.display(), ?format, "loading settings file");
        format.parse(&self.path.display().to_string(), src)
    }
}

impl Saver for FileStore {
    fn save<T: Serialize>(&self, value: &T) -> Result<(), Error> {
        let format = ConfigFormat::from_path(&self.path)?;
        let rendered = format.render(value)?;
        std::fs::write(&self.path, rendered)?;
        tracing::debug!(path = %self.path.display(), ?format, "saved settings file");
        Ok(())
    }
}
