//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::network::{DisplayType, ResourceScope, ResourceType};
use crate::output::OutputFormat;

/// netres: list network resources visible to this host
///
/// Enumerates shares, servers, domains and printers through the OS
/// network provider and prints them.
#[derive(Debug, Parser)]
#[command(name = "netres")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enumeration scope
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,

    /// Resource type to enumerate
    #[arg(long = "type", value_enum)]
    pub resource_type: Option<ResourceTypeArg>,

    /// Scratch buffer size in bytes
    #[arg(long = "buffer-size", value_name = "BYTES")]
    pub buffer_size: Option<usize>,

    /// Keep asking the provider until it reports no more records
    #[arg(long)]
    pub drain: bool,

    /// Regex over the remote name of resources to include (can be specified multiple times)
    #[arg(long = "include-name", value_name = "PATTERN")]
    pub include_names: Vec<String>,

    /// Regex over the remote name of resources to exclude (can be specified multiple times)
    #[arg(long = "exclude-name", value_name = "PATTERN")]
    pub exclude_names: Vec<String>,

    /// Only list resources of these display types (comma-separated)
    #[arg(long = "display-type", value_enum, value_delimiter = ',')]
    pub display_types: Vec<DisplayTypeArg>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for netres
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "netres.toml")]
        output: PathBuf,
    },
}

/// Enumeration scope argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Currently connected resources
    Connected,
    /// All resources on the network
    Global,
    /// Resources in the current network context
    Context,
    /// Remembered (persistent) connections
    Remembered,
    /// Recently used resources
    Recent,
}

impl From<ScopeArg> for ResourceScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Connected => Self::Connected,
            ScopeArg::Global => Self::GlobalNetwork,
            ScopeArg::Context => Self::Context,
            ScopeArg::Remembered => Self::Remembered,
            ScopeArg::Recent => Self::Recent,
        }
    }
}

/// Resource type argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceTypeArg {
    /// All resource types
    Any,
    /// Disk (file share) resources
    Disk,
    /// Print resources
    Print,
}

impl From<ResourceTypeArg> for ResourceType {
    fn from(arg: ResourceTypeArg) -> Self {
        match arg {
            ResourceTypeArg::Any => Self::Any,
            ResourceTypeArg::Disk => Self::Disk,
            ResourceTypeArg::Print => Self::Print,
        }
    }
}

/// Display type argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DisplayTypeArg {
    /// Network providers
    Network,
    /// Domains and workgroups
    Domain,
    /// Servers
    Server,
    /// Share points
    Share,
    /// Directories
    Directory,
    /// Provider-defined display
    Generic,
    /// Files
    File,
    /// Groups of servers
    Group,
    /// Network root
    Root,
    /// Administrative shares
    #[value(name = "shareadmin")]
    ShareAdmin,
    /// `NetWare` trees
    Tree,
    /// `NetWare` Directory Service containers
    #[value(name = "ndscontainer")]
    NdsContainer,
}

impl From<DisplayTypeArg> for DisplayType {
    fn from(arg: DisplayTypeArg) -> Self {
        match arg {
            DisplayTypeArg::Network => Self::Network,
            DisplayTypeArg::Domain => Self::Domain,
            DisplayTypeArg::Server => Self::Server,
            DisplayTypeArg::Share => Self::Share,
            DisplayTypeArg::Directory => Self::Directory,
            DisplayTypeArg::Generic => Self::Generic,
            DisplayTypeArg::File => Self::File,
            DisplayTypeArg::Group => Self::Group,
            DisplayTypeArg::Root => Self::Root,
            DisplayTypeArg::ShareAdmin => Self::ShareAdmin,
            DisplayTypeArg::Tree => Self::Tree,
            DisplayTypeArg::NdsContainer => Self::NdsContainer,
        }
    }
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One line per resource
    Text,
    /// A JSON array
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
