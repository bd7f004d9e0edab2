use atlas_domain::route::{Permission, RouteDescriptor};
use serde_json::json;

#[test]
fn descriptor_constructors_set_permission() {
    let open = RouteDescriptor::public("/");
    assert!(!open.is_restricted());
    assert!(open.is_rooted());

    let gated = RouteDescriptor::restricted("/travel/", "travel.read");
    assert_eq!(gated.permission, Some(Permission::from_static("travel.read")));
}

#[test]
fn descriptor_rooting_rejects_empty_and_relative_links() {
    assert!(!RouteDescriptor::public("").is_rooted());
    assert!(!RouteDescriptor::public("home").is_rooted());
}

#[test]
fn descriptor_deserializes_with_missing_permission() {
    let d: RouteDescriptor = serde_json::from_value(json!({ "link": "/photos/" })).expect("descriptor");
    assert_eq!(d, RouteDescriptor::public("/photos/"));

    let d: RouteDescriptor =
        serde_json::from_value(json!({ "link": "/people/", "permission": "people.read" }))
            .expect("descriptor");
    assert_eq!(d.permission.as_ref().map(Permission::as_str), Some("people.read"));
}

#[test]
fn permission_serializes_as_plain_string() {
    let value = serde_json::to_value(Permission::from("admin".to_owned())).expect("serialize");
    assert_eq!(value, json!("admin"));
}
