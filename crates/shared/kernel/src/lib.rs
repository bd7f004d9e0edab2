//! Kernel utilities shared by the Atlas client.
//!
//! ## Route keys
//! Navigation targets are referenced through the registry instead of literal paths:
//! ```rust
//! use atlas_kernel::routing::{RouteKey, path_keys};
//!
//! assert_eq!(path_keys::home::root().link, "/");
//! assert_eq!(RouteKey::HomeRoot.resolve(), path_keys::home::root());
//! assert_eq!(path_keys::page404(), "/404/");
//! ```
//!
//! ## Route table
//! ```rust
//! use atlas_kernel::routing::{RouteKey, RouteTable};
//!
//! let layout = RouteTable::builder().route(RouteKey::HomeRoot, "home").fallback("404").build().unwrap();
//! assert_eq!(*layout.outlet("/"), "home");
//! assert_eq!(*layout.outlet("/missing"), "404");
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use atlas_kernel::config::load_config;
//! let cfg: atlas_kernel::domain::config::ClientConfig = load_config(Some("client.toml")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod prelude;
pub mod routing;
pub mod security;

pub use atlas_domain as domain;
