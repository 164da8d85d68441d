//! Rendering of enumeration results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::network::NetworkResource;

/// How enumeration results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One line per resource.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Renders resources in the given format.
///
/// Text output has one line per resource and nothing for an empty list;
/// JSON output is always a valid array.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(
    resources: &[NetworkResource],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(resources.iter().map(|r| format!("{r}\n")).collect()),
        OutputFormat::Json => serde_json::to_string_pretty(resources),
    }
}
