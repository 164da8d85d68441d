//! Network resource enumeration over a [`NetworkProvider`].

use thiserror::Error;

use super::platform::PlatformProvider;
use super::{
    Batch, NetworkProvider, NetworkResource, ProviderError, ResourceScope, ResourceType,
    ScratchBuffer,
};

/// Default scratch buffer size in bytes.
pub const DEFAULT_BUFFER_SIZE: usize = 16 * 1024;

/// Error type for a whole enumeration.
///
/// Separates "the OS could not be asked" from "the OS answered with nothing",
/// which is `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum EnumerateError {
    /// The enumeration context could not be opened.
    #[error("Failed to open network resource enumeration: {source}")]
    Open {
        /// Underlying provider error
        #[source]
        source: ProviderError,
    },

    /// The enumeration call failed after the context was opened.
    #[error("Failed to enumerate network resources: {source}")]
    Enumerate {
        /// Underlying provider error
        #[source]
        source: ProviderError,
    },

    /// The scratch buffer cannot hold a single record.
    #[error("Scratch buffer of {provided} bytes is too small; provider needs {required} bytes")]
    BufferTooSmall {
        /// Size of the buffer that was offered
        provided: usize,
        /// Size the provider asked for
        required: usize,
    },
}

/// Parameters of one enumeration.
///
/// The defaults ask for every resource type in the global network scope,
/// with a single call against a 16 KiB buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerateOptions {
    /// Scope to enumerate.
    pub scope: ResourceScope,
    /// Resource types to enumerate.
    pub resource_type: ResourceType,
    /// Scratch buffer size in bytes.
    pub buffer_size: usize,
    /// Keep calling the provider until it reports no more records.
    pub drain: bool,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self {
            scope: ResourceScope::GlobalNetwork,
            resource_type: ResourceType::Any,
            buffer_size: DEFAULT_BUFFER_SIZE,
            drain: false,
        }
    }
}

impl EnumerateOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scope.
    #[must_use]
    pub const fn with_scope(mut self, scope: ResourceScope) -> Self {
        self.scope = scope;
        self
    }

    /// Sets the resource type.
    #[must_use]
    pub const fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = resource_type;
        self
    }

    /// Sets the scratch buffer size in bytes.
    #[must_use]
    pub const fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Enables or disables draining.
    #[must_use]
    pub const fn with_drain(mut self, drain: bool) -> Self {
        self.drain = drain;
        self
    }
}

/// An open enumeration context, closed when dropped.
struct Session<'a, P: NetworkProvider + ?Sized> {
    provider: &'a P,
    handle: Option<P::Handle>,
}

impl<P: NetworkProvider + ?Sized> Session<'_, P> {
    fn next_batch(&mut self, buffer: &mut ScratchBuffer) -> Result<Batch, ProviderError> {
        match self.handle.as_mut() {
            Some(handle) => self.provider.enum_resources(handle, buffer),
            None => Ok(Batch::Exhausted),
        }
    }
}

impl<P: NetworkProvider + ?Sized> Drop for Session<'_, P> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            match self.provider.close_enum(handle) {
                Ok(()) => tracing::debug!("Closed network resource enumeration"),
                Err(e) => tracing::warn!("Failed to close network resource enumeration: {e}"),
            }
        }
    }
}

/// Enumerates network resources through `provider`.
///
/// Opens an enumeration context, asks for records against a scratch buffer of
/// `options.buffer_size` bytes (once, or until exhausted when
/// `options.drain` is set), and returns them in provider order. The context
/// is closed and the buffer released on every path.
///
/// # Errors
///
/// - [`EnumerateError::Open`] if the context cannot be opened
/// - [`EnumerateError::BufferTooSmall`] if the buffer cannot hold one record
/// - [`EnumerateError::Enumerate`] if an enumeration call fails
///
/// No partial results are returned on error, and the call is never retried
/// with a larger buffer.
pub fn enumerate_with<P: NetworkProvider + ?Sized>(
    provider: &P,
    options: &EnumerateOptions,
) -> Result<Vec<NetworkResource>, EnumerateError> {
    let handle = provider
        .open_enum(options.scope, options.resource_type)
        .map_err(|source| EnumerateError::Open { source })?;

    tracing::debug!(
        scope = %options.scope,
        resource_type = %options.resource_type,
        buffer_size = options.buffer_size,
        "Opened network resource enumeration"
    );

    let mut session = Session {
        provider,
        handle: Some(handle),
    };
    // Declared after the session so it is released before the context closes.
    let mut buffer = ScratchBuffer::new(options.buffer_size);
    let mut resources = Vec::new();

    loop {
        match session.next_batch(&mut buffer) {
            Ok(Batch::Records(batch)) => {
                tracing::debug!(count = batch.len(), "Received network resource batch");
                let exhausted = batch.is_empty();
                resources.extend(batch);
                if exhausted || !options.drain {
                    break;
                }
            }
            Ok(Batch::Exhausted) => break,
            Err(ProviderError::MoreData { required }) => {
                return Err(EnumerateError::BufferTooSmall {
                    provided: buffer.len(),
                    required,
                });
            }
            Err(source) => return Err(EnumerateError::Enumerate { source }),
        }
    }

    Ok(resources)
}

/// Enumerates network resources, treating every failure as "nothing found".
///
/// Failures are logged at `warn` level and produce an empty sequence.
#[must_use]
pub fn enumerate_or_empty<P: NetworkProvider + ?Sized>(
    provider: &P,
    options: &EnumerateOptions,
) -> Vec<NetworkResource> {
    enumerate_with(provider, options).unwrap_or_else(|e| {
        tracing::warn!("{e}");
        Vec::new()
    })
}

/// Enumerates every network resource in the global network scope.
///
/// Uses the platform provider with [`EnumerateOptions::default`].
///
/// # Errors
///
/// See [`enumerate_with`]. On platforms without network resource
/// enumeration this returns [`EnumerateError::Open`] with
/// [`ProviderError::Unsupported`].
///
/// # Example
///
/// ```no_run
/// let resources = netres::network::enumerate_network_resources()?;
/// for resource in &resources {
///     println!("{resource}");
/// }
/// # Ok::<(), netres::network::EnumerateError>(())
/// ```
pub fn enumerate_network_resources() -> Result<Vec<NetworkResource>, EnumerateError> {
    enumerate_with(&PlatformProvider::default(), &EnumerateOptions::default())
}

/// Like [`enumerate_network_resources`], but returns an empty sequence on failure.
#[must_use]
pub fn enumerate_network_resources_or_empty() -> Vec<NetworkResource> {
    enumerate_or_empty(&PlatformProvider::default(), &EnumerateOptions::default())
}
