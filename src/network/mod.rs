//! Network layer for enumerating and representing network resources.
//!
//! This module provides types and traits for:
//! - Representing network resources ([`NetworkResource`])
//! - Resource classification ([`ResourceType`], [`DisplayType`], [`ResourceUsage`], [`ResourceScope`])
//! - The OS enumeration service seam ([`NetworkProvider`])
//! - Enumerating resources ([`enumerate_with`], [`enumerate_network_resources`])
//! - Filtering results ([`filter`])
//! - Platform-specific implementations ([`platform`])

mod enumerate;
pub mod filter;
pub mod platform;
mod provider;
mod resource;


pub use enumerate::{
    DEFAULT_BUFFER_SIZE, EnumerateError, EnumerateOptions, enumerate_network_resources,
    enumerate_network_resources_or_empty, enumerate_or_empty, enumerate_with,
};
pub use provider::{Batch, NetworkProvider, ProviderError, ScratchBuffer};
pub use resource::{
    DisplayType, NetworkResource, RawResource, ResourceScope, ResourceType, ResourceUsage,
};
