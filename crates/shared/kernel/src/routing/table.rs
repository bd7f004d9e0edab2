use super::error::RoutingError;
use super::pattern;
use crate::security::access::{AccessPolicy, RouteGuard};
use atlas_domain::constants::WILDCARD;
use atlas_domain::route::{Permission, RouteDescriptor};
use private::Sealed;
use std::borrow::Cow;
use tracing::{debug, warn};

/// A path pattern bound to whatever the router renders for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBinding<R> {
    path: Cow<'static, str>,
    permission: Option<Permission>,
    renderable: R,
}

impl<R> RouteBinding<R> {
    fn explicit(descriptor: RouteDescriptor, renderable: R) -> Self {
        Self { path: descriptor.link, permission: descriptor.permission, renderable }
    }

    const fn wildcard(renderable: R) -> Self {
        Self { path: Cow::Borrowed(WILDCARD), permission: None, renderable }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn permission(&self) -> Option<&Permission> {
        self.permission.as_ref()
    }

    #[must_use]
    pub const fn renderable(&self) -> &R {
        &self.renderable
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.path == WILDCARD
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        pattern::matches(&self.path, path)
    }
}

/// Ordered bindings followed by exactly one wildcard fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<R> {
    explicit: Vec<RouteBinding<R>>,
    fallback: RouteBinding<R>,
}

impl<R> RouteTable<R> {
    #[must_use = "The builder must be given a fallback and built before it can be used."]
    pub const fn builder() -> RouteTableBuilder<R> {
        RouteTableBuilder { entries: Vec::new(), fallback: NoFallback }
    }

    /// Binds each `(target, renderable)` in order, then the wildcard to `fallback`.
    ///
    /// # Errors
    /// See [`RouteTableBuilder::build`].
    pub fn from_entries<D, I>(entries: I, fallback: R) -> Result<RouteLayout<R>, RoutingError>
    where
        D: Into<RouteDescriptor>,
        I: IntoIterator<Item = (D, R)>,
    {
        entries
            .into_iter()
            .fold(Self::builder(), |builder, (target, renderable)| builder.route(target, renderable))
            .fallback(fallback)
            .build()
    }

    /// All bindings in match-priority order, wildcard last.
    pub fn bindings(&self) -> impl Iterator<Item = &RouteBinding<R>> {
        self.explicit.iter().chain(std::iter::once(&self.fallback))
    }

    /// Bindings declared by the caller, without the wildcard.
    #[must_use]
    pub fn explicit(&self) -> &[RouteBinding<R>] {
        &self.explicit
    }

    #[must_use]
    pub const fn fallback(&self) -> &RouteBinding<R> {
        &self.fallback
    }

    /// First binding matching `path`; the wildcard when none does.
    #[must_use]
    pub fn resolve(&self, path: &str) -> &RouteBinding<R> {
        self.explicit.iter().find(|b| b.matches(path)).unwrap_or(&self.fallback)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.explicit.len() + 1
    }
}

/// The single shell node every binding renders inside.
///
/// The layout contributes nothing itself: it renders only the child matched for the current path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLayout<R> {
    routes: RouteTable<R>,
}

impl<R> RouteLayout<R> {
    #[must_use]
    pub const fn routes(&self) -> &RouteTable<R> {
        &self.routes
    }

    /// Renderable of the child matched for `path`.
    #[must_use]
    pub fn outlet(&self, path: &str) -> &R {
        self.routes.resolve(path).renderable()
    }

    /// Like [`Self::outlet`], but renders the fallback when `policy` rejects the matched route.
    pub fn outlet_for(&self, path: &str, policy: &impl AccessPolicy) -> &R {
        let binding = self.routes.resolve(path);
        match RouteGuard::check(binding.permission(), policy) {
            Ok(()) => binding.renderable(),
            Err(err) => {
                warn!(path, pattern = binding.path(), "{err}");
                self.routes.fallback().renderable()
            }
        }
    }
}

#[derive(Debug)]
pub struct NoFallback;
#[derive(Debug)]
pub struct WithFallback<R>(R);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoFallback {}
impl<R> Sealed for WithFallback<R> {}

/// Collects bindings in registration order. `build` only exists once a fallback is set.
#[derive(Debug)]
pub struct RouteTableBuilder<R, F: Sealed = NoFallback> {
    entries: Vec<(RouteDescriptor, R)>,
    fallback: F,
}

impl<R, F: Sealed> RouteTableBuilder<R, F> {
    /// Appends a binding. Accepts a [`RouteKey`](super::RouteKey) or a descriptor.
    #[must_use = "The builder must be given a fallback and built before it can be used."]
    pub fn route(mut self, target: impl Into<RouteDescriptor>, renderable: R) -> Self {
        self.entries.push((target.into(), renderable));
        self
    }
}

impl<R> RouteTableBuilder<R, NoFallback> {
    /// Renderable for every path no explicit binding matches.
    pub fn fallback(self, renderable: R) -> RouteTableBuilder<R, WithFallback<R>> {
        RouteTableBuilder { entries: self.entries, fallback: WithFallback(renderable) }
    }
}

impl<R> RouteTableBuilder<R, WithFallback<R>> {
    /// Validates every link and appends the wildcard binding.
    ///
    /// # Errors
    /// Returns [`RoutingError::InvalidLink`] if a descriptor link is empty or not rooted at `/`.
    pub fn build(self) -> Result<RouteLayout<R>, RoutingError> {
        let WithFallback(fallback) = self.fallback;
        let mut explicit = Vec::with_capacity(self.entries.len());

        for (position, (descriptor, renderable)) in self.entries.into_iter().enumerate() {
            if !descriptor.is_rooted() {
                return Err(RoutingError::InvalidLink {
                    message: format!("'{}' must start with '/'", descriptor.link).into(),
                    context: Some(format!("Binding #{position}").into()),
                });
            }
            explicit.push(RouteBinding::explicit(descriptor, renderable));
        }

        debug!(bindings = explicit.len() + 1, "Route table built");
        Ok(RouteLayout {
            routes: RouteTable { explicit, fallback: RouteBinding::wildcard(fallback) },
        })
    }
}
