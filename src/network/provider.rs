//! Network provider trait, scratch buffer and provider error types.

use std::ffi::c_void;

use thiserror::Error;

use super::{NetworkResource, ResourceScope, ResourceType};

/// Error type for a single call into the OS network provider.
///
/// Describes what went wrong without dictating recovery strategy.
/// [`super::enumerate_with`] decides which enumeration stage it belongs to.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// No network is present, or the workstation service is not running.
    #[error("No network is available")]
    NoNetwork,

    /// Permission denied to access the network namespace.
    #[error("Permission denied: {context}")]
    PermissionDenied {
        /// Additional context about what permission was denied.
        context: String,
    },

    /// The scratch buffer cannot hold even one record.
    #[error("Buffer too small: provider needs {required} bytes")]
    MoreData {
        /// Buffer size in bytes reported by the provider.
        required: usize,
    },

    /// Network resource enumeration is not available on this platform.
    #[error("Network resource enumeration is not supported on this platform")]
    Unsupported,

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Result of one enumeration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Batch {
    /// Records copied out of the scratch buffer, in OS order.
    Records(Vec<NetworkResource>),
    /// The provider has no more records for this enumeration context.
    Exhausted,
}

/// Zero-initialized memory handed to the provider to receive raw records.
///
/// Backed by `u64` words so the records the OS writes into it (which
/// contain pointers) are suitably aligned. Released on drop.
#[derive(Debug)]
pub struct ScratchBuffer {
    words: Vec<u64>,
    len: usize,
}

impl ScratchBuffer {
    /// Allocates a buffer of `len` bytes.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(size_of::<u64>())],
            len,
        }
    }

    /// Returns the usable size in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer has no usable bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Zeroes the buffer before it is reused.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Pointer to the start of the buffer.
    #[must_use]
    pub fn as_ptr(&self) -> *const c_void {
        self.words.as_ptr().cast()
    }

    /// Mutable pointer to the start of the buffer.
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut c_void {
        self.words.as_mut_ptr().cast()
    }
}

/// Trait for the OS network resource enumeration service.
///
/// # Design
///
/// - The three calls mirror the OS contract: open a context, fill a buffer,
///   close the context
/// - Enables dependency injection for testing with fault-injecting doubles
/// - Platform-specific implementations provided in [`super::platform`]
///
/// # Example
///
/// ```
/// use netres::network::{
///     Batch, NetworkProvider, NetworkResource, ProviderError, ResourceScope, ResourceType,
///     ScratchBuffer,
/// };
///
/// struct EmptyNetwork;
///
/// impl NetworkProvider for EmptyNetwork {
///     type Handle = ();
///
///     fn open_enum(&self, _: ResourceScope, _: ResourceType) -> Result<(), ProviderError> {
///         Ok(())
///     }
///
///     fn enum_resources(&self, _: &mut (), _: &mut ScratchBuffer) -> Result<Batch, ProviderError> {
///         Ok(Batch::Exhausted)
///     }
///
///     fn close_enum(&self, _: ()) -> Result<(), ProviderError> {
///         Ok(())
///     }
/// }
/// ```
pub trait NetworkProvider: Send + Sync {
    /// The open enumeration context.
    type Handle;

    /// Opens an enumeration context over the network namespace.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the OS refuses to open the context.
    fn open_enum(
        &self,
        scope: ResourceScope,
        resource_type: ResourceType,
    ) -> Result<Self::Handle, ProviderError>;

    /// Asks for as many records as fit into `buffer` and copies them out.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MoreData`] when `buffer` cannot hold a single
    /// record, or another variant when the call fails.
    ///
    /// # Implementation Notes
    ///
    /// - Returned records must own their data; `buffer` is reused or dropped
    ///   right after the call
    fn enum_resources(
        &self,
        handle: &mut Self::Handle,
        buffer: &mut ScratchBuffer,
    ) -> Result<Batch, ProviderError>;

    /// Closes an enumeration context.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the OS reports a failure closing the handle.
    fn close_enum(&self, handle: Self::Handle) -> Result<(), ProviderError>;
}
