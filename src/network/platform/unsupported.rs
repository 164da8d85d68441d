//! Fallback provider for platforms without Windows networking.

use crate::network::{
    Batch, NetworkProvider, ProviderError, ResourceScope, ResourceType, ScratchBuffer,
};

/// Provider for platforms that have no network resource enumeration service.
///
/// Every enumeration fails to open with [`ProviderError::Unsupported`].
#[derive(Debug, Clone, Default)]
pub struct UnsupportedProvider {
    _private: (),
}

impl UnsupportedProvider {
    /// Creates a new unsupported provider.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl NetworkProvider for UnsupportedProvider {
    type Handle = std::convert::Infallible;

    fn open_enum(
        &self,
        scope: ResourceScope,
        resource_type: ResourceType,
    ) -> Result<Self::Handle, ProviderError> {
        tracing::debug!(%scope, %resource_type, "Network resource enumeration is unavailable");
        Err(ProviderError::Unsupported)
    }

    fn enum_resources(
        &self,
        handle: &mut Self::Handle,
        _buffer: &mut ScratchBuffer,
    ) -> Result<Batch, ProviderError> {
        match *handle {}
    }

    fn close_enum(&self, handle: Self::Handle) -> Result<(), ProviderError> {
        match handle {}
    }
}
