//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::network::filter::{DisplayTypeFilter, FilterChain, NameRegexFilter};
use crate::network::{DisplayType, EnumerateOptions, ResourceScope, ResourceType};
use crate::output::OutputFormat;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Enumeration request
    pub options: EnumerateOptions,

    /// Result filter
    pub filter: FilterChain,

    /// Output format
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ scope: {}, type: {}, buffer_size: {}, drain: {}, format: {}, \
             filters: {} }}",
            self.options.scope,
            self.options.resource_type,
            self.options.buffer_size,
            self.options.drain,
            self.format,
            self.filter.len(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Scope, resource type, display type or format strings are unknown
    /// - The buffer size is out of range
    /// - Regex patterns are invalid
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let scope = Self::resolve_scope(cli, toml)?;
        let resource_type = Self::resolve_resource_type(cli, toml)?;
        let buffer_size = Self::resolve_buffer_size(cli, toml)?;

        // Merge drain (CLI wins if true)
        let drain = cli.drain || toml.is_some_and(|t| t.enumerate.drain);

        let filter = Self::build_filter(cli, toml)?;
        let format = Self::resolve_format(cli, toml)?;

        Ok(Self {
            options: EnumerateOptions::new()
                .with_scope(scope)
                .with_resource_type(resource_type)
                .with_buffer_size(buffer_size)
                .with_drain(drain),
            filter,
            format,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_scope(cli: &Cli, toml: Option<&TomlConfig>) -> Result<ResourceScope, ConfigError> {
        // CLI takes precedence
        if let Some(scope) = cli.scope {
            return Ok(scope.into());
        }

        // Fall back to TOML, then default
        toml.and_then(|t| t.enumerate.scope.as_deref())
            .map_or(Ok(defaults::SCOPE), parse_scope)
    }

    fn resolve_resource_type(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<ResourceType, ConfigError> {
        if let Some(resource_type) = cli.resource_type {
            return Ok(resource_type.into());
        }

        toml.and_then(|t| t.enumerate.resource_type.as_deref())
            .map_or(Ok(defaults::RESOURCE_TYPE), parse_resource_type)
    }

    fn resolve_buffer_size(cli: &Cli, toml: Option<&TomlConfig>) -> Result<usize, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let value = cli
            .buffer_size
            .or_else(|| toml.and_then(|t| t.enumerate.buffer_size))
            .unwrap_or(defaults::BUFFER_SIZE);

        if value < defaults::MIN_BUFFER_SIZE {
            return Err(ConfigError::InvalidBufferSize {
                value,
                reason: format!("must be at least {} bytes", defaults::MIN_BUFFER_SIZE),
            });
        }

        if value > defaults::MAX_BUFFER_SIZE {
            return Err(ConfigError::InvalidBufferSize {
                value,
                reason: format!("must be at most {} bytes", defaults::MAX_BUFFER_SIZE),
            });
        }

        Ok(value)
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        toml.and_then(|t| t.output.format.as_deref())
            .map_or(Ok(defaults::FORMAT), parse_format)
    }

    fn build_filter(cli: &Cli, toml: Option<&TomlConfig>) -> Result<FilterChain, ConfigError> {
        let mut chain = FilterChain::new();

        // CLI patterns replace TOML patterns (each list independently)
        let includes = if cli.include_names.is_empty() {
            toml.map_or(&[][..], |t| t.filter.include.as_slice())
        } else {
            cli.include_names.as_slice()
        };

        let excludes = if cli.exclude_names.is_empty() {
            toml.map_or(&[][..], |t| t.filter.exclude.as_slice())
        } else {
            cli.exclude_names.as_slice()
        };

        for pattern in includes {
            chain = chain.include(name_filter(pattern)?);
        }

        for pattern in excludes {
            chain = chain.exclude(name_filter(pattern)?);
        }

        let display_types: Vec<DisplayType> = if cli.display_types.is_empty() {
            toml.map_or(Ok(Vec::new()), |t| {
                t.filter
                    .display_types
                    .iter()
                    .map(|s| parse_display_type(s))
                    .collect()
            })?
        } else {
            cli.display_types.iter().map(|&d| d.into()).collect()
        };

        // A display type list narrows the result independently of name includes
        if !display_types.is_empty() {
            chain = chain.require(DisplayTypeFilter::new(display_types));
        }

        Ok(chain)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn name_filter(pattern: &str) -> Result<NameRegexFilter, ConfigError> {
    NameRegexFilter::new(pattern).map_err(|e| ConfigError::InvalidRegex {
        pattern: pattern.to_string(),
        source: e,
    })
}

fn parse_scope(s: &str) -> Result<ResourceScope, ConfigError> {
    match s.to_lowercase().as_str() {
        "connected" => Ok(ResourceScope::Connected),
        "global" | "globalnet" | "global_network" => Ok(ResourceScope::GlobalNetwork),
        "context" => Ok(ResourceScope::Context),
        "remembered" => Ok(ResourceScope::Remembered),
        "recent" => Ok(ResourceScope::Recent),
        _ => Err(ConfigError::InvalidScope {
            value: s.to_string(),
        }),
    }
}

fn parse_resource_type(s: &str) -> Result<ResourceType, ConfigError> {
    match s.to_lowercase().as_str() {
        "any" | "all" => Ok(ResourceType::Any),
        "disk" => Ok(ResourceType::Disk),
        "print" | "printer" => Ok(ResourceType::Print),
        _ => Err(ConfigError::InvalidResourceType {
            value: s.to_string(),
        }),
    }
}

fn parse_display_type(s: &str) -> Result<DisplayType, ConfigError> {
    match s.to_lowercase().as_str() {
        "network" => Ok(DisplayType::Network),
        "domain" => Ok(DisplayType::Domain),
        "server" => Ok(DisplayType::Server),
        "share" => Ok(DisplayType::Share),
        "directory" => Ok(DisplayType::Directory),
        "generic" => Ok(DisplayType::Generic),
        "file" => Ok(DisplayType::File),
        "group" => Ok(DisplayType::Group),
        "root" => Ok(DisplayType::Root),
        "shareadmin" => Ok(DisplayType::ShareAdmin),
        "tree" => Ok(DisplayType::Tree),
        "ndscontainer" => Ok(DisplayType::NdsContainer),
        _ => Err(ConfigError::InvalidDisplayType {
            value: s.to_string(),
        }),
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
