//! Windows-specific network resource enumeration using `WNetEnumResourceW`.

use crate::network::{
    Batch, NetworkProvider, NetworkResource, ProviderError, RawResource, ResourceScope,
    ResourceType, ScratchBuffer,
};
use windows::Win32::Foundation::{
    ERROR_ACCESS_DENIED, ERROR_EXTENDED_ERROR, ERROR_MORE_DATA, ERROR_NO_MORE_ITEMS,
    ERROR_NO_NETWORK, HANDLE, NO_ERROR, WIN32_ERROR,
};
use windows::Win32::NetworkManagement::WNet::{
    NET_RESOURCE_SCOPE, NET_RESOURCE_TYPE, NETRESOURCEW, WNET_OPEN_ENUM_USAGE, WNetCloseEnum,
    WNetEnumResourceW, WNetGetLastErrorW, WNetOpenEnumW,
};
use windows::core::PWSTR;

/// Request as many records as fit into the buffer.
const ALL_RECORDS: u32 = 0xFFFF_FFFF;

/// Size of the buffers receiving a provider's extended error text.
const EXTENDED_ERROR_LEN: usize = 256;

/// An open `WNetOpenEnumW` handle.
#[derive(Debug)]
pub struct EnumHandle(HANDLE);

/// Windows implementation of [`NetworkProvider`] using the `WNet` functions.
///
/// # Example
///
/// ```no_run
/// use netres::network::{EnumerateOptions, enumerate_with, platform::WindowsProvider};
///
/// let provider = WindowsProvider::new();
/// let resources = enumerate_with(&provider, &EnumerateOptions::default())
///     .expect("Failed to enumerate network resources");
///
/// for resource in resources {
///     println!("{resource}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsProvider {
    // Currently no configuration needed, but struct allows future extension
    _private: (),
}

impl WindowsProvider {
    /// Creates a new Windows network provider.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl NetworkProvider for WindowsProvider {
    type Handle = EnumHandle;

    fn open_enum(
        &self,
        scope: ResourceScope,
        resource_type: ResourceType,
    ) -> Result<EnumHandle, ProviderError> {
        let mut handle = HANDLE::default();

        // SAFETY: No container is passed, so the API only writes `handle`.
        // Usage 0 asks for every resource regardless of usage.
        let result = unsafe {
            WNetOpenEnumW(
                NET_RESOURCE_SCOPE(scope.as_raw()),
                NET_RESOURCE_TYPE(resource_type.as_raw()),
                WNET_OPEN_ENUM_USAGE(0),
                None,
                &raw mut handle,
            )
        };

        check(result, "opening network enumeration")?;
        Ok(EnumHandle(handle))
    }

    fn enum_resources(
        &self,
        handle: &mut EnumHandle,
        buffer: &mut ScratchBuffer,
    ) -> Result<Batch, ProviderError> {
        buffer.clear();

        let mut count = ALL_RECORDS;
        let mut size = u32::try_from(buffer.len()).map_err(|_| ProviderError::Platform {
            message: format!("buffer of {} bytes exceeds the API limit", buffer.len()),
        })?;

        // SAFETY: `buffer` is valid for `size` bytes and 8-byte aligned; the API
        // writes at most `size` bytes and updates `count` and `size`.
        let result = unsafe {
            WNetEnumResourceW(handle.0, &raw mut count, buffer.as_mut_ptr(), &raw mut size)
        };

        if result == ERROR_NO_MORE_ITEMS {
            return Ok(Batch::Exhausted);
        }
        if result == ERROR_MORE_DATA {
            return Err(ProviderError::MoreData {
                required: size as usize,
            });
        }
        check(result, "enumerating network resources")?;

        Ok(Batch::Records(copy_records(buffer, count as usize)))
    }

    fn close_enum(&self, handle: EnumHandle) -> Result<(), ProviderError> {
        // SAFETY: The handle came from a successful WNetOpenEnumW and is closed once.
        let result = unsafe { WNetCloseEnum(handle.0) };
        check(result, "closing network enumeration")
    }
}

/// Copies `count` `NETRESOURCEW` records out of the buffer into owned values.
#[allow(clippy::cast_ptr_alignment)]
fn copy_records(buffer: &ScratchBuffer, count: usize) -> Vec<NetworkResource> {
    // SAFETY: WNetEnumResourceW succeeded, so the buffer starts with `count`
    // NETRESOURCEW records. The buffer is u64-aligned, which satisfies the
    // record's alignment. Their strings point into the same buffer, which
    // outlives this borrow.
    let records =
        unsafe { std::slice::from_raw_parts(buffer.as_ptr().cast::<NETRESOURCEW>(), count) };

    records
        .iter()
        .map(|record| {
            // SAFETY: Each string pointer is null or a null-terminated string in `buffer`.
            let raw = unsafe { raw_view(record) };
            NetworkResource::from_raw(&raw)
        })
        .collect()
}

/// Borrows the fields of one `NETRESOURCEW` record.
///
/// # Safety
///
/// Every non-null string pointer must reference a valid null-terminated
/// UTF-16 string that lives at least as long as `record`.
unsafe fn raw_view(record: &NETRESOURCEW) -> RawResource<'_> {
    unsafe {
        RawResource {
            scope: record.dwScope.0,
            resource_type: record.dwType.0,
            display_type: record.dwDisplayType,
            usage: record.dwUsage,
            local_name: wide(&record.lpLocalName),
            remote_name: wide(&record.lpRemoteName),
            comment: wide(&record.lpComment),
            provider: wide(&record.lpProvider),
        }
    }
}

/// Returns the string without its terminator, or `None` for a null pointer.
unsafe fn wide(text: &PWSTR) -> Option<&[u16]> {
    if text.is_null() {
        None
    } else {
        // SAFETY: Caller guarantees a valid null-terminated string.
        Some(unsafe { text.as_wide() })
    }
}

/// Maps a `WNet` return code to a [`ProviderError`].
fn check(result: WIN32_ERROR, context: &str) -> Result<(), ProviderError> {
    match result {
        NO_ERROR => Ok(()),
        ERROR_NO_NETWORK => Err(ProviderError::NoNetwork),
        ERROR_ACCESS_DENIED => Err(ProviderError::PermissionDenied {
            context: context.to_string(),
        }),
        ERROR_EXTENDED_ERROR => Err(extended_error(context)),
        other => Err(windows::core::Error::from(other).into()),
    }
}

/// Reads the provider-specific error reported with `ERROR_EXTENDED_ERROR`.
/// Only reachable when a third-party network provider fails.
fn extended_error(context: &str) -> ProviderError {
    let mut code = 0u32;
    let mut description = [0u16; EXTENDED_ERROR_LEN];
    let mut provider = [0u16; EXTENDED_ERROR_LEN];

    // SAFETY: Both buffers are valid for their full length.
    let result = unsafe { WNetGetLastErrorW(&raw mut code, &mut description, &mut provider) };

    if result != NO_ERROR {
        return ProviderError::Platform {
            message: format!("{context}: provider reported an extended error"),
        };
    }

    ProviderError::Platform {
        message: format!(
            "{context}: {} error {code}: {}",
            until_nul(&provider),
            until_nul(&description)
        ),
    }
}

fn until_nul(text: &[u16]) -> String {
    let end = text.iter().position(|&c| c == 0).unwrap_or(text.len());
    String::from_utf16_lossy(&text[..end])
}
