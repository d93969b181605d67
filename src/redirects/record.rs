use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedirectRecord {
    pub path: String,
    pub url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid YAML redirect document: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON redirect document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Document syntax a redirect list is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectFormat {
    #[default]
    Yaml,
    Json,
}

impl RedirectFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    /// Decodes a list of `path`/`url` records, keeping document order.
    ///
    /// An empty (or whitespace-only) document holds no records.
    pub fn decode(self, document: &[u8]) -> Result<Vec<RedirectRecord>, DecodeError> {
        if document.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let records = match self {
            Self::Yaml => serde_yaml::from_slice(document)?,
            Self::Json => serde_json::from_slice(document)?,
        };
        Ok(records)
    }
}
