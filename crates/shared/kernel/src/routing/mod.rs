//! Route registry and router configuration.
//!
//! [`path_keys`] holds the accessors every navigation target is built from,
//! [`RouteKey`] is the closed set of routable keys, and [`RouteTable`] projects
//! keys onto renderables for the router.

mod error;
mod key;
pub mod path_keys;
mod pattern;
mod table;

pub use error::{RoutingError, RoutingErrorExt};
pub use key::{Accessor, Registry, RouteKey, registry};
pub use table::{
    NoFallback, RouteBinding, RouteLayout, RouteTable, RouteTableBuilder, WithFallback,
};
