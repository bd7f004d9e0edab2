pub use crate::routing::{
    RouteBinding, RouteKey, RouteLayout, RouteTable, RoutingError, path_keys, registry,
};
pub use crate::security::access::{AccessError, AccessPolicy, Anonymous, Grants, RouteGuard};
pub use atlas_domain::route::{Permission, RouteDescriptor};
