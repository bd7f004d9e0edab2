use super::error::RoutingError;
use super::path_keys;
use atlas_domain::route::RouteDescriptor;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

/// Zero-argument accessor producing a route's descriptor.
pub type Accessor = fn() -> RouteDescriptor;

/// Every routable key in the client, named `<category>.<name>`.
///
/// Adding a route means adding a variant here and an accessor in [`path_keys`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum RouteKey {
    #[strum(serialize = "home.root")]
    #[serde(rename = "home.root")]
    HomeRoot,
}

impl RouteKey {
    #[must_use]
    pub fn accessor(self) -> Accessor {
        match self {
            Self::HomeRoot => path_keys::home::root,
        }
    }

    /// Descriptor for this key. Pure: repeated calls return equal values.
    #[must_use]
    pub fn resolve(self) -> RouteDescriptor {
        (self.accessor())()
    }

    /// Dotted name, e.g. `home.root`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl From<RouteKey> for RouteDescriptor {
    fn from(key: RouteKey) -> Self {
        key.resolve()
    }
}

/// Read-only mapping from route name to accessor, built once per process.
#[derive(Debug)]
pub struct Registry {
    accessors: FxHashMap<&'static str, Accessor>,
    order: Vec<RouteKey>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    fn new() -> Self {
        let order: Vec<_> = RouteKey::iter().collect();
        let accessors: FxHashMap<_, _> = order.iter().map(|k| (k.name(), k.accessor())).collect();
        debug!(routes = accessors.len(), "Route registry initialized");
        Self { accessors, order }
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn resolve(&self, key: RouteKey) -> RouteDescriptor {
        key.resolve()
    }

    /// Resolves a dotted route name that arrived at runtime (config, deep link).
    ///
    /// # Errors
    /// Returns [`RoutingError::UnknownKey`] if no route carries `name`.
    pub fn lookup(&self, name: &str) -> Result<RouteDescriptor, RoutingError> {
        self.accessors.get(name).map(|accessor| accessor()).ok_or_else(|| {
            RoutingError::UnknownKey {
                message: format!("'{name}'").into(),
                context: Some("Registry lookup".into()),
            }
        })
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = RouteKey> + '_ {
        self.order.iter().copied()
    }
}
