use crate::pages::{Home, Page404};
use atlas_kernel::prelude::*;
use dioxus::prelude::*;
use std::sync::Arc;

/// Pages the route table can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    NotFound,
}

/// Builds the client's route layout from the registry.
///
/// # Errors
/// Returns [`RoutingError::InvalidLink`] if a registered link is malformed.
pub fn build() -> Result<RouteLayout<Page>, RoutingError> {
    RouteTable::from_entries([(RouteKey::HomeRoot, Page::Home)], Page::NotFound)
}

/// Router-facing routes. Matching is left to the route table: both variants
/// hand the current path to [`Dispatch`].
#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/:..segments")]
        Dispatch { segments: Vec<String> },
}

/// Rebuilds the path the router split into `segments`.
fn request_path(segments: &[String]) -> String {
    format!("{}{}", path_keys::ROOT, segments.join("/"))
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Shared layout; renders only the matched child.
#[component]
fn Shell() -> Element {
    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn Root() -> Element {
    rsx! {
        Dispatch { segments: Vec::new() }
    }
}

#[component]
fn Dispatch(segments: Vec<String>) -> Element {
    let layout = use_context::<Arc<RouteLayout<Page>>>();

    match layout.outlet_for(&request_path(&segments), &Anonymous) {
        Page::Home => rsx! { Home {} },
        Page::NotFound => rsx! { Page404 {} },
    }
}
