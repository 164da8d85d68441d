//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use crate::network::{DEFAULT_BUFFER_SIZE, ResourceScope, ResourceType};
use crate::output::OutputFormat;

/// Default enumeration scope.
pub const SCOPE: ResourceScope = ResourceScope::GlobalNetwork;

/// Default resource type.
pub const RESOURCE_TYPE: ResourceType = ResourceType::Any;

/// Default scratch buffer size in bytes.
pub const BUFFER_SIZE: usize = DEFAULT_BUFFER_SIZE;

/// Smallest accepted scratch buffer size in bytes.
pub const MIN_BUFFER_SIZE: usize = 1024;

/// Largest accepted scratch buffer size in bytes.
pub const MAX_BUFFER_SIZE: usize = 16 * 1024 * 1024;

/// Default output format.
pub const FORMAT: OutputFormat = OutputFormat::Text;
