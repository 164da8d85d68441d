//! Platform-specific network provider implementations.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of the [`NetworkProvider`](super::NetworkProvider) trait.
//!
//! # Platform Support
//!
//! - **Windows**: Uses `WNetOpenEnumW` / `WNetEnumResourceW` / `WNetCloseEnum`
//!   from `mpr.dll` via the `windows` crate.
//! - **Other platforms**: [`UnsupportedProvider`] fails every open with
//!   [`ProviderError::Unsupported`](super::ProviderError::Unsupported).

#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
mod unsupported;

#[cfg(windows)]
pub use windows::WindowsProvider;

#[cfg(not(windows))]
pub use unsupported::UnsupportedProvider;

// Re-export platform-specific provider as PlatformProvider for convenience
#[cfg(windows)]
pub use windows::WindowsProvider as PlatformProvider;

#[cfg(not(windows))]
pub use unsupported::UnsupportedProvider as PlatformProvider;
