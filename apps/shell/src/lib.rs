//! # Atlas shell
//!
//! Single-page client: mounts the root component, provides the router and
//! renders pages out of the route table built from the registry.

#[cfg(not(target_arch = "wasm32"))]
pub mod bootstrap;
pub mod launch;
pub mod pages;
pub mod routes;

pub use launch::ShellApp;
