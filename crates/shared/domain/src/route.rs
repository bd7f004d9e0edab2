//! Route descriptors and permission tags.

use crate::constants::ROOT;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Access tag checked by the authorization layer before a route is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    #[must_use]
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Permission {
    fn from(tag: &'static str) -> Self {
        Self::from_static(tag)
    }
}

impl From<String> for Permission {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

impl AsRef<str> for Permission {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A navigable link plus the permission required to open it.
///
/// `permission: None` means the route is unrestricted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub link: Cow<'static, str>,
    #[serde(default)]
    pub permission: Option<Permission>,
}

impl RouteDescriptor {
    /// Descriptor for an unrestricted route.
    #[must_use]
    pub fn public(link: impl Into<Cow<'static, str>>) -> Self {
        Self { link: link.into(), permission: None }
    }

    /// Descriptor for a route gated behind `permission`.
    #[must_use]
    pub fn restricted(link: impl Into<Cow<'static, str>>, permission: impl Into<Permission>) -> Self {
        Self { link: link.into(), permission: Some(permission.into()) }
    }

    /// Whether the link is non-empty and composed from [`ROOT`].
    #[must_use]
    pub fn is_rooted(&self) -> bool {
        !self.link.is_empty() && self.link.starts_with(ROOT)
    }

    #[must_use]
    pub const fn is_restricted(&self) -> bool {
        self.permission.is_some()
    }
}
