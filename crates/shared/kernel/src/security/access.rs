use atlas_domain::route::Permission;
use fxhash::FxHashSet;
use std::borrow::Cow;

#[atlas_derive::atlas_error]
pub enum AccessError {
    #[error("Access denied{}: {message}", format_context(.context))]
    Denied { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Decides whether the current session holds a permission tag.
pub trait AccessPolicy {
    fn permits(&self, permission: &Permission) -> bool;
}

/// No session: only unrestricted routes are reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl AccessPolicy for Anonymous {
    fn permits(&self, _permission: &Permission) -> bool {
        false
    }
}

/// Explicit set of granted permission tags.
#[derive(Debug, Clone, Default)]
pub struct Grants(FxHashSet<Permission>);

impl Grants {
    #[must_use]
    pub fn with(mut self, permission: impl Into<Permission>) -> Self {
        self.0.insert(permission.into());
        self
    }
}

impl<P: Into<Permission>> FromIterator<P> for Grants {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl AccessPolicy for Grants {
    fn permits(&self, permission: &Permission) -> bool {
        self.0.contains(permission)
    }
}

/// Gatekeeper consulted before a matched route is rendered.
#[derive(Debug)]
pub struct RouteGuard;

impl RouteGuard {
    /// Unrestricted routes always pass; restricted ones need the policy's approval.
    ///
    /// # Errors
    /// Returns [`AccessError::Denied`] when `policy` does not permit `required`.
    pub fn check(required: Option<&Permission>, policy: &impl AccessPolicy) -> Result<(), AccessError> {
        match required {
            Some(permission) if !policy.permits(permission) => Err(AccessError::Denied {
                message: format!("missing permission '{permission}'").into(),
                context: None,
            }),
            _ => Ok(()),
        }
    }
}
