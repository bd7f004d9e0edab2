use atlas_kernel::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Photos,
    PhotoDetail,
    Admin,
    NotFound,
}

fn paths<R>(table: &RouteTable<R>) -> Vec<&str> {
    table.bindings().map(RouteBinding::path).collect()
}

#[test]
fn home_and_fallback_example() -> Result<(), RoutingError> {
    let layout = RouteTable::builder().route(RouteKey::HomeRoot, Page::Home).fallback(Page::NotFound).build()?;

    let bindings: Vec<_> =
        layout.routes().bindings().map(|b| (b.path(), *b.renderable())).collect();
    assert_eq!(bindings, vec![("/", Page::Home), ("*", Page::NotFound)]);
    Ok(())
}

#[test]
fn bindings_keep_registration_order() -> Result<(), RoutingError> {
    let layout = RouteTable::from_entries(
        [
            (RouteDescriptor::public("/photos/"), Page::Photos),
            (path_keys::home::root(), Page::Home),
        ],
        Page::NotFound,
    )?;

    assert_eq!(paths(layout.routes()), vec!["/photos/", "/", "*"]);
    Ok(())
}

#[test]
fn first_match_wins() -> Result<(), RoutingError> {
    let layout = RouteTable::builder()
        .route(RouteDescriptor::public("/photos/:id"), Page::PhotoDetail)
        .route(RouteDescriptor::public("/photos/42"), Page::Photos)
        .fallback(Page::NotFound)
        .build()?;

    assert_eq!(*layout.outlet("/photos/42"), Page::PhotoDetail);
    Ok(())
}

#[test]
fn unmatched_paths_fall_through_to_wildcard() -> Result<(), RoutingError> {
    let layout = RouteTable::builder()
        .route(RouteKey::HomeRoot, Page::Home)
        .route(RouteDescriptor::public("/photos/"), Page::Photos)
        .fallback(Page::NotFound)
        .build()?;

    assert_eq!(*layout.outlet("/"), Page::Home);
    assert_eq!(*layout.outlet("/photos"), Page::Photos);
    assert_eq!(*layout.outlet("/people/7"), Page::NotFound);
    assert_eq!(*layout.outlet(&path_keys::page404()), Page::NotFound);
    assert!(layout.routes().resolve("/nowhere").is_wildcard());
    Ok(())
}

#[test]
fn bindings_carry_descriptor_permission() -> Result<(), RoutingError> {
    let layout = RouteTable::builder()
        .route(RouteKey::HomeRoot, Page::Home)
        .route(RouteDescriptor::restricted("/admin/", "admin"), Page::Admin)
        .fallback(Page::NotFound)
        .build()?;

    let permissions: Vec<_> = layout.routes().bindings().map(RouteBinding::permission).collect();
    assert_eq!(permissions, vec![None, Some(&Permission::from("admin")), None]);
    Ok(())
}

#[test]
fn denied_routes_render_fallback() -> Result<(), RoutingError> {
    let layout = RouteTable::builder()
        .route(RouteKey::HomeRoot, Page::Home)
        .route(RouteDescriptor::restricted("/admin/", "admin"), Page::Admin)
        .fallback(Page::NotFound)
        .build()?;

    assert_eq!(*layout.outlet_for("/admin", &Anonymous), Page::NotFound);
    assert_eq!(*layout.outlet_for("/", &Anonymous), Page::Home);

    let admin = Grants::default().with("admin");
    assert_eq!(*layout.outlet_for("/admin", &admin), Page::Admin);
    Ok(())
}

proptest! {
    #[test]
    fn wildcard_is_last_and_unique(segments in proptest::collection::vec("[a-z]{1,8}", 0..12)) {
        let entries = segments.iter().enumerate().map(|(i, s)| (RouteDescriptor::public(format!("/{s}/")), i));
        let layout = RouteTable::from_entries(entries, usize::MAX).expect("rooted links build");
        let routes = layout.routes();

        prop_assert_eq!(routes.len(), segments.len() + 1);
        prop_assert_eq!(routes.bindings().filter(|b| b.is_wildcard()).count(), 1);
        prop_assert!(routes.bindings().last().is_some_and(RouteBinding::is_wildcard));
        prop_assert_eq!(*routes.fallback().renderable(), usize::MAX);
    }

    #[test]
    fn explicit_order_matches_input(segments in proptest::collection::vec("[a-z]{1,8}", 0..12)) {
        let entries = segments.iter().enumerate().map(|(i, s)| (RouteDescriptor::public(format!("/{s}/")), i));
        let layout = RouteTable::from_entries(entries, usize::MAX).expect("rooted links build");

        let order: Vec<usize> = layout.routes().explicit().iter().map(|b| *b.renderable()).collect();
        prop_assert_eq!(order, (0..segments.len()).collect::<Vec<_>>());
    }
}
