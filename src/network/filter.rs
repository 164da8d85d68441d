//! Resource filtering for selective listing.
//!
//! This module provides traits and types for filtering enumerated network
//! resources based on various criteria (remote name patterns, display type).
//!
//! # Design
//!
//! - **Pure Matchers**: [`DisplayTypeFilter`] and [`NameRegexFilter`] only answer
//!   "does this resource match?" without include/exclude semantics.
//! - **Filter Chain**: [`FilterChain`] combines matchers with include/exclude semantics:
//!   - Exclude filters: AND logic (must pass ALL excludes)
//!   - Required filters: AND logic (must match ALL requirements)
//!   - Include filters: OR logic (pass ANY include, empty = match all)

use std::collections::HashSet;

use regex::Regex;

use super::{DisplayType, NetworkResource};

/// Trait for filtering network resources.
///
/// # Thread Safety
///
/// Filters must be `Send + Sync` so a chain can be shared between threads.
pub trait ResourceFilter: Send + Sync {
    /// Returns `true` if the resource matches this filter.
    fn matches(&self, resource: &NetworkResource) -> bool;
}

// ============================================================================
// DisplayTypeFilter - Pure matcher by display type
// ============================================================================

/// Filters resources by their display type.
///
/// # Examples
///
/// ```
/// use netres::network::filter::{DisplayTypeFilter, ResourceFilter};
/// use netres::network::{DisplayType, NetworkResource, ResourceScope, ResourceType, ResourceUsage};
///
/// let filter = DisplayTypeFilter::new([DisplayType::Server, DisplayType::Share]);
///
/// let server = NetworkResource::new(
///     ResourceType::Any,
///     DisplayType::Server,
///     ResourceUsage::Container,
///     ResourceScope::GlobalNetwork,
/// );
/// let domain = NetworkResource::new(
///     ResourceType::Any,
///     DisplayType::Domain,
///     ResourceUsage::Container,
///     ResourceScope::GlobalNetwork,
/// );
///
/// assert!(filter.matches(&server));
/// assert!(!filter.matches(&domain));
/// ```
#[derive(Debug, Clone)]
pub struct DisplayTypeFilter {
    display_types: HashSet<DisplayType>,
}

impl DisplayTypeFilter {
    /// Creates a filter matching any of the specified display types.
    #[must_use]
    pub fn new(display_types: impl IntoIterator<Item = DisplayType>) -> Self {
        Self {
            display_types: display_types.into_iter().collect(),
        }
    }

    /// Returns true if no display types are configured (matches nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.display_types.is_empty()
    }

    /// Returns the number of display types in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.display_types.len()
    }
}

impl ResourceFilter for DisplayTypeFilter {
    fn matches(&self, resource: &NetworkResource) -> bool {
        self.display_types.contains(&resource.display_type())
    }
}

// ============================================================================
// NameRegexFilter - Pure matcher by remote name
// ============================================================================

/// Filters resources by a regex over their remote name.
///
/// Resources without a remote name never match.
///
/// # Examples
///
/// ```
/// use netres::network::filter::{NameRegexFilter, ResourceFilter};
/// use netres::network::NetworkResource;
///
/// let filter = NameRegexFilter::new(r"(?i)^\\\\fileserver").unwrap();
///
/// let share = NetworkResource::default().with_remote_name(r"\\FILESERVER\public");
/// let printer = NetworkResource::default().with_remote_name(r"\\printsrv\laser");
///
/// assert!(filter.matches(&share));
/// assert!(!filter.matches(&printer));
/// ```
#[derive(Debug)]
pub struct NameRegexFilter {
    pattern: Regex,
}

impl NameRegexFilter {
    /// Creates a name filter with the given regex pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns a reference to the regex pattern.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Regex is not a const type
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl ResourceFilter for NameRegexFilter {
    fn matches(&self, resource: &NetworkResource) -> bool {
        resource
            .remote_name()
            .is_some_and(|name| self.pattern.is_match(name))
    }
}

// ============================================================================
// FilterChain - Include OR / Exclude AND semantics
// ============================================================================

/// Filter chain with include/exclude semantics.
///
/// Evaluation order:
/// 1. **Exclude filters (AND)**: Any match → reject. A resource must pass ALL excludes.
/// 2. **Required filters (AND)**: Any miss → reject.
/// 3. **Include filters (OR)**: Any match → accept. Empty includes = match all.
///
/// # Examples
///
/// ```
/// use netres::network::filter::{DisplayTypeFilter, FilterChain, NameRegexFilter, ResourceFilter};
/// use netres::network::{DisplayType, NetworkResource, ResourceScope, ResourceType, ResourceUsage};
///
/// let chain = FilterChain::new()
///     .exclude(NameRegexFilter::new(r"\$$").unwrap())
///     .include(DisplayTypeFilter::new([DisplayType::Share]));
///
/// let share = NetworkResource::new(
///     ResourceType::Disk,
///     DisplayType::Share,
///     ResourceUsage::Connectable,
///     ResourceScope::GlobalNetwork,
/// );
///
/// assert!(chain.matches(&share.clone().with_remote_name(r"\\srv\data")));
/// assert!(!chain.matches(&share.with_remote_name(r"\\srv\ADMIN$")));
/// ```
#[derive(Default)]
pub struct FilterChain {
    includes: Vec<Box<dyn ResourceFilter>>,
    excludes: Vec<Box<dyn ResourceFilter>>,
    requires: Vec<Box<dyn ResourceFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain (matches all resources).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an include filter (OR semantics).
    #[must_use]
    pub fn include<F: ResourceFilter + 'static>(mut self, filter: F) -> Self {
        self.includes.push(Box::new(filter));
        self
    }

    /// Adds an exclude filter (any match rejects).
    #[must_use]
    pub fn exclude<F: ResourceFilter + 'static>(mut self, filter: F) -> Self {
        self.excludes.push(Box::new(filter));
        self
    }

    /// Adds a required filter (must match, regardless of include filters).
    #[must_use]
    pub fn require<F: ResourceFilter + 'static>(mut self, filter: F) -> Self {
        self.requires.push(Box::new(filter));
        self
    }

    /// Returns the number of include filters.
    #[must_use]
    pub fn include_count(&self) -> usize {
        self.includes.len()
    }

    /// Returns the number of exclude filters.
    #[must_use]
    pub fn exclude_count(&self) -> usize {
        self.excludes.len()
    }

    /// Returns the number of required filters.
    #[must_use]
    pub fn require_count(&self) -> usize {
        self.requires.len()
    }

    /// Returns the total number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.includes.len() + self.excludes.len() + self.requires.len()
    }

    /// Returns true if no filters are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty() && self.requires.is_empty()
    }

    /// Keeps the matching resources, preserving their order.
    #[must_use]
    pub fn apply(&self, resources: Vec<NetworkResource>) -> Vec<NetworkResource> {
        if self.is_empty() {
            return resources;
        }
        resources.into_iter().filter(|r| self.matches(r)).collect()
    }
}

impl ResourceFilter for FilterChain {
    fn matches(&self, resource: &NetworkResource) -> bool {
        // 1. Any exclude match → reject
        if self.excludes.iter().any(|f| f.matches(resource)) {
            return false;
        }

        // 2. Any missed requirement → reject
        if !self.requires.iter().all(|f| f.matches(resource)) {
            return false;
        }

        // 3. No includes = all pass; otherwise any include match → accept
        self.includes.is_empty() || self.includes.iter().any(|f| f.matches(resource))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("include_count", &self.includes.len())
            .field("exclude_count", &self.excludes.len())
            .field("require_count", &self.requires.len())
            .finish()
    }
}

// Blanket implementation: any &T where T: ResourceFilter also implements ResourceFilter
impl<T: ResourceFilter + ?Sized> ResourceFilter for &T {
    fn matches(&self, resource: &NetworkResource) -> bool {
        (*self).matches(resource)
    }
}
