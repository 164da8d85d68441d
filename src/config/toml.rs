//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Enumeration request configuration
    #[serde(default)]
    pub enumerate: EnumerateSection,

    /// Result filter configuration
    #[serde(default)]
    pub filter: FilterSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Enumeration request section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumerateSection {
    /// Scope: "connected", "global", "context", "remembered" or "recent"
    pub scope: Option<String>,

    /// Resource type: "any", "disk" or "print"
    pub resource_type: Option<String>,

    /// Scratch buffer size in bytes
    pub buffer_size: Option<usize>,

    /// Keep asking the provider until it reports no more records
    #[serde(default)]
    pub drain: bool,
}

/// Result filter section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// Regex patterns over remote names to include
    #[serde(default)]
    pub include: Vec<String>,

    /// Regex patterns over remote names to exclude
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Display types to list (empty = all)
    #[serde(default)]
    pub display_types: Vec<String>,
}

/// Output section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "text" or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# netres configuration file

[enumerate]
# Scope to enumerate (default: "global")
# Accepted values: "connected", "global", "context", "remembered", "recent"
scope = "global"

# Resource type to enumerate (default: "any")
# Accepted values: "any", "disk", "print"
resource_type = "any"

# Scratch buffer size in bytes (default: 16384)
# A buffer too small for a single record makes the enumeration fail.
# buffer_size = 16384

# Keep asking the provider until it reports no more records
# drain = false

[filter]
# Regex patterns over the remote name of resources to include (empty = all)
# Note: CLI patterns REPLACE these entirely (not merged)
# include = ["^\\\\\\\\FILESERVER"]

# Regex patterns over the remote name of resources to exclude
# exclude = ["\\$$"]

# Display types to list (empty = all)
# Accepted values: "network", "domain", "server", "share", "directory", "generic",
# "file", "group", "root", "shareadmin", "tree", "ndscontainer"
# display_types = ["server", "share"]

[output]
# Output format (default: "text")
# Accepted values: "text", "json"
# format = "text"
"#
    .to_string()
}
