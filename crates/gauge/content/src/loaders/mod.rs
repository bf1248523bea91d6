//! Content loaders for reading gauge inputs from files.

pub mod encounter;
pub mod settings;

pub use encounter::EncounterLoader;
pub use settings::SettingsLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Serialization format of a document, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Ron,
    Toml,
    Json,
}

impl DataFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("ron") => Ok(Self::Ron),
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(anyhow::anyhow!(
                "Unsupported document format for {} (expected .ron, .toml or .json)",
                path.display()
            )),
        }
    }

    /// Parses `content` in this format.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> LoadResult<T> {
        match self {
            Self::Ron => {
                ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse RON: {}", e))
            }
            Self::Toml => {
                toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))
            }
            Self::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse JSON: {}", e)),
        }
    }
}

/// Reads and deserializes any document whose format follows its extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let format = DataFormat::from_path(path)?;
    let content = read_file(path)?;
    format
        .parse(&content)
        .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
}
