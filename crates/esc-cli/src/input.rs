//! # Tensor Input
//!
//! Loads a stiffness tensor from disk. The format follows the extension:
//! `.json` and `.yaml`/`.yml` hold a nested 6×6 array, anything else is the
//! plain-text form (six whitespace or comma separated numbers per line, `#`
//! comments allowed).

use std::path::Path;

use anyhow::{Context, Result};

use esc_core::StiffnessTensor;

/// On-disk encodings of a tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorFormat {
    Json,
    Yaml,
    Text,
}

impl TensorFormat {
    /// Detect from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Text,
        }
    }
}

/// Parse `content` as `format`.
pub fn parse_tensor(content: &str, format: TensorFormat) -> Result<StiffnessTensor> {
    let tensor = match format {
        TensorFormat::Json => serde_json::from_str(content)?,
        TensorFormat::Yaml => serde_yaml::from_str(content)?,
        TensorFormat::Text => content.parse()?,
    };
    Ok(tensor)
}

/// Read and parse the tensor at `path`.
pub fn load_tensor(path: &Path) -> Result<StiffnessTensor> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tensor: {}", path.display()))?;
    let format = TensorFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "loading tensor");
    parse_tensor(&content, format)
        .with_context(|| format!("failed to parse tensor: {}", path.display()))
}
