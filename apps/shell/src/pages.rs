use atlas_kernel::routing::path_keys;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "home",
            h1 { "Atlas" }
            p { "Your trips, photos and the people in them." }
        }
    }
}

#[component]
pub fn Page404() -> Element {
    let home = path_keys::home::root();

    rsx! {
        section { class: "page-404",
            h1 { "Page not found" }
            Link { to: home.link.into_owned(), "Back to home" }
        }
    }
}
