//! Core types for network resource representation.

use std::fmt;

use serde::{Deserialize, Serialize};

// Numeric values from the Windows SDK `WinNetWk.h`. Kept here so the
// classification types are usable (and testable) on every platform.
const RESOURCETYPE_ANY: u32 = 0x0000_0000;
const RESOURCETYPE_DISK: u32 = 0x0000_0001;
const RESOURCETYPE_PRINT: u32 = 0x0000_0002;

const RESOURCEDISPLAYTYPE_GENERIC: u32 = 0x0000_0000;
const RESOURCEDISPLAYTYPE_DOMAIN: u32 = 0x0000_0001;
const RESOURCEDISPLAYTYPE_SERVER: u32 = 0x0000_0002;
const RESOURCEDISPLAYTYPE_SHARE: u32 = 0x0000_0003;
const RESOURCEDISPLAYTYPE_FILE: u32 = 0x0000_0004;
const RESOURCEDISPLAYTYPE_GROUP: u32 = 0x0000_0005;
const RESOURCEDISPLAYTYPE_NETWORK: u32 = 0x0000_0006;
const RESOURCEDISPLAYTYPE_ROOT: u32 = 0x0000_0007;
const RESOURCEDISPLAYTYPE_SHAREADMIN: u32 = 0x0000_0008;
const RESOURCEDISPLAYTYPE_DIRECTORY: u32 = 0x0000_0009;
const RESOURCEDISPLAYTYPE_TREE: u32 = 0x0000_000A;
const RESOURCEDISPLAYTYPE_NDSCONTAINER: u32 = 0x0000_000B;

const RESOURCEUSAGE_CONNECTABLE: u32 = 0x0000_0001;
const RESOURCEUSAGE_CONTAINER: u32 = 0x0000_0002;

const RESOURCE_CONNECTED: u32 = 0x0000_0001;
const RESOURCE_GLOBALNET: u32 = 0x0000_0002;
const RESOURCE_REMEMBERED: u32 = 0x0000_0003;
const RESOURCE_RECENT: u32 = 0x0000_0004;
const RESOURCE_CONTEXT: u32 = 0x0000_0005;

/// Resource type of a network resource (`dwType`).
///
/// The OS uses `0` for "any", so [`ResourceType::Invalid`] is never produced
/// by [`ResourceType::from_raw`]; it is only the value of an unset record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// Not set.
    #[default]
    Invalid,
    /// Disk (file share) resource.
    Disk,
    /// Print resource.
    Print,
    /// Any resource type; also used as an enumeration request.
    Any,
    /// A value the OS reported that has no named variant, preserved verbatim.
    Unrecognized(u32),
}

impl ResourceType {
    /// Parses a raw `RESOURCETYPE_*` value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            RESOURCETYPE_ANY => Self::Any,
            RESOURCETYPE_DISK => Self::Disk,
            RESOURCETYPE_PRINT => Self::Print,
            other => Self::Unrecognized(other),
        }
    }

    /// Returns the raw `RESOURCETYPE_*` value.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        match self {
            Self::Invalid | Self::Any => RESOURCETYPE_ANY,
            Self::Disk => RESOURCETYPE_DISK,
            Self::Print => RESOURCETYPE_PRINT,
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::Disk => write!(f, "disk"),
            Self::Print => write!(f, "print"),
            Self::Any => write!(f, "any"),
            Self::Unrecognized(raw) => write!(f, "type({raw:#x})"),
        }
    }
}

/// How a network resource should be displayed (`dwDisplayType`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayType {
    /// Not set.
    #[default]
    Invalid,
    /// A network provider, e.g. "Microsoft Windows Network".
    Network,
    /// A domain or workgroup.
    Domain,
    /// A server.
    Server,
    /// A share point.
    Share,
    /// A directory.
    Directory,
    /// Display style is left to the provider.
    Generic,
    /// A file.
    File,
    /// A group of servers.
    Group,
    /// The root of the network namespace.
    Root,
    /// An administrative share.
    ShareAdmin,
    /// A NetWare tree.
    Tree,
    /// A NetWare Directory Service container.
    NdsContainer,
    /// A value the OS reported that has no named variant, preserved verbatim.
    Unrecognized(u32),
}

impl DisplayType {
    /// Parses a raw `RESOURCEDISPLAYTYPE_*` value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            RESOURCEDISPLAYTYPE_GENERIC => Self::Generic,
            RESOURCEDISPLAYTYPE_DOMAIN => Self::Domain,
            RESOURCEDISPLAYTYPE_SERVER => Self::Server,
            RESOURCEDISPLAYTYPE_SHARE => Self::Share,
            RESOURCEDISPLAYTYPE_FILE => Self::File,
            RESOURCEDISPLAYTYPE_GROUP => Self::Group,
            RESOURCEDISPLAYTYPE_NETWORK => Self::Network,
            RESOURCEDISPLAYTYPE_ROOT => Self::Root,
            RESOURCEDISPLAYTYPE_SHAREADMIN => Self::ShareAdmin,
            RESOURCEDISPLAYTYPE_DIRECTORY => Self::Directory,
            RESOURCEDISPLAYTYPE_TREE => Self::Tree,
            RESOURCEDISPLAYTYPE_NDSCONTAINER => Self::NdsContainer,
            other => Self::Unrecognized(other),
        }
    }

    /// Returns the raw `RESOURCEDISPLAYTYPE_*` value.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        match self {
            Self::Invalid | Self::Generic => RESOURCEDISPLAYTYPE_GENERIC,
            Self::Network => RESOURCEDISPLAYTYPE_NETWORK,
            Self::Domain => RESOURCEDISPLAYTYPE_DOMAIN,
            Self::Server => RESOURCEDISPLAYTYPE_SERVER,
            Self::Share => RESOURCEDISPLAYTYPE_SHARE,
            Self::Directory => RESOURCEDISPLAYTYPE_DIRECTORY,
            Self::File => RESOURCEDISPLAYTYPE_FILE,
            Self::Group => RESOURCEDISPLAYTYPE_GROUP,
            Self::Root => RESOURCEDISPLAYTYPE_ROOT,
            Self::ShareAdmin => RESOURCEDISPLAYTYPE_SHAREADMIN,
            Self::Tree => RESOURCEDISPLAYTYPE_TREE,
            Self::NdsContainer => RESOURCEDISPLAYTYPE_NDSCONTAINER,
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Invalid => "invalid",
            Self::Network => "network",
            Self::Domain => "domain",
            Self::Server => "server",
            Self::Share => "share",
            Self::Directory => "directory",
            Self::Generic => "generic",
            Self::File => "file",
            Self::Group => "group",
            Self::Root => "root",
            Self::ShareAdmin => "shareadmin",
            Self::Tree => "tree",
            Self::NdsContainer => "ndscontainer",
            Self::Unrecognized(raw) => return write!(f, "display({raw:#x})"),
        };
        f.write_str(name)
    }
}

/// Usage of a network resource (`dwUsage`).
///
/// The OS defines this as a bit set; it is treated as a scalar here, so a
/// combination such as connectable + container is [`ResourceUsage::Unrecognized`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceUsage {
    /// Not set, or no usage bits reported.
    #[default]
    Invalid,
    /// The resource can be connected to.
    Connectable,
    /// The resource contains other resources and can be enumerated.
    Container,
    /// A value the OS reported that has no named variant, preserved verbatim.
    Unrecognized(u32),
}

impl ResourceUsage {
    /// Parses a raw `RESOURCEUSAGE_*` value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Invalid,
            RESOURCEUSAGE_CONNECTABLE => Self::Connectable,
            RESOURCEUSAGE_CONTAINER => Self::Container,
            other => Self::Unrecognized(other),
        }
    }

    /// Returns the raw `RESOURCEUSAGE_*` value.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        match self {
            Self::Invalid => 0,
            Self::Connectable => RESOURCEUSAGE_CONNECTABLE,
            Self::Container => RESOURCEUSAGE_CONTAINER,
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for ResourceUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::Connectable => write!(f, "connectable"),
            Self::Container => write!(f, "container"),
            Self::Unrecognized(raw) => write!(f, "usage({raw:#x})"),
        }
    }
}

/// Scope of a network resource (`dwScope`), also the scope of an enumeration request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceScope {
    /// Not set.
    #[default]
    Invalid,
    /// Currently connected resources.
    Connected,
    /// All resources on the network.
    GlobalNetwork,
    /// Remembered (persistent) connections.
    Remembered,
    /// Recently used resources.
    Recent,
    /// Resources associated with the user's current network context.
    Context,
    /// A value the OS reported that has no named variant, preserved verbatim.
    Unrecognized(u32),
}

impl ResourceScope {
    /// Parses a raw `RESOURCE_*` scope value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Invalid,
            RESOURCE_CONNECTED => Self::Connected,
            RESOURCE_GLOBALNET => Self::GlobalNetwork,
            RESOURCE_REMEMBERED => Self::Remembered,
            RESOURCE_RECENT => Self::Recent,
            RESOURCE_CONTEXT => Self::Context,
            other => Self::Unrecognized(other),
        }
    }

    /// Returns the raw `RESOURCE_*` scope value.
    #[must_use]
    pub const fn as_raw(self) -> u32 {
        match self {
            Self::Invalid => 0,
            Self::Connected => RESOURCE_CONNECTED,
            Self::GlobalNetwork => RESOURCE_GLOBALNET,
            Self::Remembered => RESOURCE_REMEMBERED,
            Self::Recent => RESOURCE_RECENT,
            Self::Context => RESOURCE_CONTEXT,
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for ResourceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::Connected => write!(f, "connected"),
            Self::GlobalNetwork => write!(f, "global"),
            Self::Remembered => write!(f, "remembered"),
            Self::Recent => write!(f, "recent"),
            Self::Context => write!(f, "context"),
            Self::Unrecognized(raw) => write!(f, "scope({raw:#x})"),
        }
    }
}

/// A borrowed view of one record written by the OS into a scratch buffer.
///
/// Strings are UTF-16 code units without the terminating null. `None` means
/// the OS left the pointer null; `Some(&[])` is a present but empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawResource<'a> {
    /// Raw `dwScope`.
    pub scope: u32,
    /// Raw `dwType`.
    pub resource_type: u32,
    /// Raw `dwDisplayType`.
    pub display_type: u32,
    /// Raw `dwUsage`.
    pub usage: u32,
    /// `lpLocalName`.
    pub local_name: Option<&'a [u16]>,
    /// `lpRemoteName`.
    pub remote_name: Option<&'a [u16]>,
    /// `lpComment`.
    pub comment: Option<&'a [u16]>,
    /// `lpProvider`.
    pub provider: Option<&'a [u16]>,
}

/// One network resource visible to this host.
///
/// Every text field is owned independently; cloning copies each of them.
///
/// # Equality
///
/// Two records are equal if all classification fields and all text fields
/// (including presence) are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkResource {
    resource_type: ResourceType,
    display_type: DisplayType,
    usage: ResourceUsage,
    scope: ResourceScope,
    local_name: Option<String>,
    remote_name: Option<String>,
    provider: Option<String>,
    comment: Option<String>,
}

impl NetworkResource {
    /// Creates a record with the given classification and no names.
    #[must_use]
    pub const fn new(
        resource_type: ResourceType,
        display_type: DisplayType,
        usage: ResourceUsage,
        scope: ResourceScope,
    ) -> Self {
        Self {
            resource_type,
            display_type,
            usage,
            scope,
            local_name: None,
            remote_name: None,
            provider: None,
            comment: None,
        }
    }

    /// Copies an OS record into an owned value.
    #[must_use]
    pub fn from_raw(raw: &RawResource<'_>) -> Self {
        Self {
            resource_type: ResourceType::from_raw(raw.resource_type),
            display_type: DisplayType::from_raw(raw.display_type),
            usage: ResourceUsage::from_raw(raw.usage),
            scope: ResourceScope::from_raw(raw.scope),
            local_name: raw.local_name.map(String::from_utf16_lossy),
            remote_name: raw.remote_name.map(String::from_utf16_lossy),
            provider: raw.provider.map(String::from_utf16_lossy),
            comment: raw.comment.map(String::from_utf16_lossy),
        }
    }

    /// Sets the local name (e.g. `Z:`).
    #[must_use]
    pub fn with_local_name(mut self, name: impl Into<String>) -> Self {
        self.local_name = Some(name.into());
        self
    }

    /// Sets the remote name (e.g. `\\server\share`).
    #[must_use]
    pub fn with_remote_name(mut self, name: impl Into<String>) -> Self {
        self.remote_name = Some(name.into());
        self
    }

    /// Sets the provider name.
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns the resource type.
    #[must_use]
    pub const fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Returns the display type.
    #[must_use]
    pub const fn display_type(&self) -> DisplayType {
        self.display_type
    }

    /// Returns the usage.
    #[must_use]
    pub const fn usage(&self) -> ResourceUsage {
        self.usage
    }

    /// Returns the scope.
    #[must_use]
    pub const fn scope(&self) -> ResourceScope {
        self.scope
    }

    /// Returns the local name, if the OS reported one.
    #[must_use]
    pub fn local_name(&self) -> Option<&str> {
        self.local_name.as_deref()
    }

    /// Returns the remote name, if the OS reported one.
    #[must_use]
    pub fn remote_name(&self) -> Option<&str> {
        self.remote_name.as_deref()
    }

    /// Returns the provider name, if the OS reported one.
    #[must_use]
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Returns the comment, if the OS reported one.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns true if this resource can be enumerated further.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self.usage, ResourceUsage::Container)
    }

    /// Returns true if no text field is present.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.local_name.is_none()
            && self.remote_name.is_none()
            && self.provider.is_none()
            && self.comment.is_none()
    }
}

impl fmt::Display for NetworkResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}/{}/{}/{}]",
            self.remote_name.as_deref().unwrap_or("<unnamed>"),
            self.display_type,
            self.resource_type,
            self.usage,
            self.scope,
        )?;
        if let Some(ref local) = self.local_name {
            write!(f, " local={local}")?;
        }
        if let Some(ref provider) = self.provider {
            write!(f, " provider={provider:?}")?;
        }
        if let Some(ref comment) = self.comment {
            write!(f, " comment={comment:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    mod classification {
        use super::*;

        #[test]
        fn resource_type_parses_known_values() {
            assert_eq!(ResourceType::from_raw(0), ResourceType::Any);
            assert_eq!(ResourceType::from_raw(1), ResourceType::Disk);
            assert_eq!(ResourceType::from_raw(2), ResourceType::Print);
        }

        #[test]
        fn resource_type_unknown_preserves_value() {
            let kind = ResourceType::from_raw(0xFFFF_FFFF);
            assert_eq!(kind, ResourceType::Unrecognized(0xFFFF_FFFF));
            assert_eq!(kind.as_raw(), 0xFFFF_FFFF);
        }

        #[test]
        fn display_type_parses_all_named_values() {
            for raw in 0..=0xB {
                let parsed = DisplayType::from_raw(raw);
                assert!(
                    !matches!(parsed, DisplayType::Unrecognized(_)),
                    "{raw} should be named"
                );
                assert_eq!(parsed.as_raw(), raw);
            }
        }

        #[test]
        fn display_type_unknown_preserves_value() {
            assert_eq!(DisplayType::from_raw(0x42), DisplayType::Unrecognized(0x42));
        }

        #[test]
        fn usage_zero_is_invalid() {
            assert_eq!(ResourceUsage::from_raw(0), ResourceUsage::Invalid);
        }

        #[test]
        fn usage_combined_bits_are_unrecognized() {
            let usage = ResourceUsage::from_raw(0x3);
            assert_eq!(usage, ResourceUsage::Unrecognized(0x3));
            assert_eq!(usage.as_raw(), 0x3);
        }

        #[test]
        fn scope_round_trips_named_values() {
            for scope in [
                ResourceScope::Connected,
                ResourceScope::GlobalNetwork,
                ResourceScope::Remembered,
                ResourceScope::Recent,
                ResourceScope::Context,
            ] {
                assert_eq!(ResourceScope::from_raw(scope.as_raw()), scope);
            }
        }

        #[test]
        fn defaults_are_invalid() {
            assert_eq!(ResourceType::default(), ResourceType::Invalid);
            assert_eq!(DisplayType::default(), DisplayType::Invalid);
            assert_eq!(ResourceUsage::default(), ResourceUsage::Invalid);
            assert_eq!(ResourceScope::default(), ResourceScope::Invalid);
        }

        #[test]
        fn display_formats_correctly() {
            assert_eq!(ResourceType::Disk.to_string(), "disk");
            assert_eq!(DisplayType::Server.to_string(), "server");
            assert_eq!(ResourceUsage::Container.to_string(), "container");
            assert_eq!(ResourceScope::GlobalNetwork.to_string(), "global");
            assert_eq!(ResourceType::Unrecognized(8).to_string(), "type(0x8)");
        }
    }

    mod from_raw {
        use super::*;

        #[test]
        fn all_strings_present() {
            let (local, remote, provider, comment) =
                (wide("Z:"), wide(r"\\srv\data"), wide("Microsoft Windows Network"), wide("team"));
            let raw = RawResource {
                scope: 2,
                resource_type: 1,
                display_type: 3,
                usage: 1,
                local_name: Some(&local),
                remote_name: Some(&remote),
                comment: Some(&comment),
                provider: Some(&provider),
            };

            let resource = NetworkResource::from_raw(&raw);

            assert_eq!(resource.local_name(), Some("Z:"));
            assert_eq!(resource.remote_name(), Some(r"\\srv\data"));
            assert_eq!(resource.provider(), Some("Microsoft Windows Network"));
            assert_eq!(resource.comment(), Some("team"));
            assert_eq!(resource.scope(), ResourceScope::GlobalNetwork);
            assert_eq!(resource.resource_type(), ResourceType::Disk);
            assert_eq!(resource.display_type(), DisplayType::Share);
            assert_eq!(resource.usage(), ResourceUsage::Connectable);
        }

        #[test]
        fn no_strings_present() {
            let raw = RawResource {
                resource_type: 2,
                ..RawResource::default()
            };

            let resource = NetworkResource::from_raw(&raw);

            assert!(resource.is_anonymous());
            assert_eq!(resource.resource_type(), ResourceType::Print);
        }

        #[test]
        fn comment_keeps_its_own_length() {
            // A short provider next to a long comment must not truncate the comment.
            let (provider, comment) = (wide("P"), wide("a much longer comment"));
            let raw = RawResource {
                provider: Some(&provider),
                comment: Some(&comment),
                ..RawResource::default()
            };

            let resource = NetworkResource::from_raw(&raw);

            assert_eq!(resource.provider(), Some("P"));
            assert_eq!(resource.comment(), Some("a much longer comment"));
            assert_eq!(resource.local_name(), None);
            assert_eq!(resource.remote_name(), None);
        }

        #[test]
        fn only_later_fields_present() {
            let comment = wide("only comment");
            let raw = RawResource {
                comment: Some(&comment),
                ..RawResource::default()
            };

            let resource = NetworkResource::from_raw(&raw);

            assert_eq!(resource.comment(), Some("only comment"));
            assert!(resource.local_name().is_none());
            assert!(resource.remote_name().is_none());
            assert!(resource.provider().is_none());
        }

        #[test]
        fn empty_string_is_distinct_from_absent() {
            let empty: Vec<u16> = Vec::new();
            let raw = RawResource {
                local_name: Some(&empty),
                ..RawResource::default()
            };

            let resource = NetworkResource::from_raw(&raw);

            assert_eq!(resource.local_name(), Some(""));
            assert_eq!(resource.remote_name(), None);
        }

        #[test]
        fn non_ascii_names_survive() {
            let remote = wide(r"\\сервер\共有");
            let raw = RawResource {
                remote_name: Some(&remote),
                ..RawResource::default()
            };

            assert_eq!(
                NetworkResource::from_raw(&raw).remote_name(),
                Some(r"\\сервер\共有")
            );
        }

        #[test]
        fn unpaired_surrogate_is_replaced() {
            let broken = [u16::from(b'a'), 0xD800, u16::from(b'b')];
            let raw = RawResource {
                remote_name: Some(&broken),
                ..RawResource::default()
            };

            assert_eq!(
                NetworkResource::from_raw(&raw).remote_name(),
                Some("a\u{FFFD}b")
            );
        }
    }

    mod ownership {
        use super::*;

        fn make_resource() -> NetworkResource {
            NetworkResource::new(
                ResourceType::Disk,
                DisplayType::Share,
                ResourceUsage::Connectable,
                ResourceScope::GlobalNetwork,
            )
            .with_local_name("Z:")
            .with_remote_name(r"\\srv\data")
            .with_provider("Microsoft Windows Network")
            .with_comment("team share")
        }

        #[test]
        fn clone_is_equal() {
            let original = make_resource();
            let copy = original.clone();

            assert_eq!(copy, original);
        }

        #[test]
        fn clone_does_not_share_storage() {
            let original = make_resource();
            let copy = original.clone();

            assert_ne!(
                original.remote_name().map(str::as_ptr),
                copy.remote_name().map(str::as_ptr)
            );
        }

        #[test]
        fn clone_outlives_original() {
            let copy = {
                let original = make_resource();
                original.clone()
            };

            assert_eq!(copy.comment(), Some("team share"));
            assert_eq!(copy.local_name(), Some("Z:"));
        }

        #[test]
        fn mutating_clone_leaves_original_untouched() {
            let original = make_resource();
            let changed = original.clone().with_comment("changed");

            assert_eq!(original.comment(), Some("team share"));
            assert_eq!(changed.comment(), Some("changed"));
        }

        #[test]
        fn drop_of_anonymous_record_is_fine() {
            let resource = NetworkResource::default();
            assert!(resource.is_anonymous());
            let copy = resource.clone();
            drop(resource);
            assert!(copy.is_anonymous());
        }
    }

    mod display {
        use super::*;

        #[test]
        fn includes_names_and_classification() {
            let resource = NetworkResource::new(
                ResourceType::Disk,
                DisplayType::Share,
                ResourceUsage::Connectable,
                ResourceScope::GlobalNetwork,
            )
            .with_remote_name(r"\\srv\data")
            .with_local_name("Z:");

            let text = resource.to_string();

            assert!(text.starts_with(r"\\srv\data [share/disk/connectable/global]"));
            assert!(text.contains("local=Z:"));
            assert!(!text.contains("comment="));
        }

        #[test]
        fn unnamed_placeholder() {
            assert!(NetworkResource::default().to_string().starts_with("<unnamed>"));
        }
    }

    #[test]
    fn is_container_checks_usage() {
        let container = NetworkResource::new(
            ResourceType::Any,
            DisplayType::Domain,
            ResourceUsage::Container,
            ResourceScope::GlobalNetwork,
        );
        assert!(container.is_container());
        assert!(!NetworkResource::default().is_container());
    }

    #[test]
    fn serializes_to_json() {
        let resource = NetworkResource::default().with_remote_name(r"\\srv");
        let json = serde_json::to_value(&resource).unwrap();

        assert_eq!(json["remote_name"], r"\\srv");
        assert!(json["comment"].is_null());
    }
}
