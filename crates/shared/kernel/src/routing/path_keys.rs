//! Accessors for every navigation target in the client.
//!
//! All links are composed from [`ROOT`]; never spell a path literal outside this module.

use atlas_domain::constants::PAGE_404_SEGMENT;
use atlas_domain::route::RouteDescriptor;

pub use atlas_domain::constants::ROOT;

pub mod home {
    use super::{ROOT, RouteDescriptor};

    /// Landing page. Unrestricted.
    #[must_use]
    pub fn root() -> RouteDescriptor {
        RouteDescriptor::public(ROOT)
    }
}

/// Target for redirects to the not-found page.
///
/// Returns a bare link rather than a descriptor: the page is never permission-gated.
#[must_use]
pub fn page404() -> String {
    [ROOT, PAGE_404_SEGMENT].concat()
}
