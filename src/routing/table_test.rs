use super::*;

fn minimal_entries() -> Vec<RouteEntry> {
    vec![RouteEntry::redirect(ROOT_PATH, "/home"), RouteEntry::view("/home", ViewId::Comercial)]
}

// =============================================================
// Standard table
// =============================================================

#[test]
fn standard_table_passes_validation() {
    let table = RouteTable::standard("");
    assert_eq!(table.validate(), Ok(()));
}

#[test]
fn standard_root_resolves_to_comercial() {
    let table = RouteTable::standard("");
    let entry = table.resolve(ROOT_PATH).unwrap();
    assert_eq!(entry.path, COMERCIAL_PATH);
    assert_eq!(entry.view_id(), Some(ViewId::Comercial));
}

#[test]
fn standard_root_is_a_redirect_without_view() {
    let table = RouteTable::standard("");
    let root = table.lookup(ROOT_PATH).unwrap();
    assert_eq!(root.view_id(), None);
    assert_eq!(root.target, RouteTarget::Redirect(COMERCIAL_PATH.to_owned()));
}

#[test]
fn standard_admin_routes_require_auth() {
    let table = RouteTable::standard("");
    for path in [ADMIN_PATH, ADMIN_MANAGEMENT_PATH] {
        let entry = table.lookup(path).unwrap();
        assert!(entry.requires_auth, "{path} should require auth");
        assert_eq!(entry.role, Some(Role::Admin));
    }
    let comercial = table.lookup(COMERCIAL_PATH).unwrap();
    assert!(comercial.requires_auth);
    assert_eq!(comercial.role, Some(Role::Comercial));
}

#[test]
fn standard_entry_routes_are_public() {
    let table = RouteTable::standard("");
    assert!(!table.lookup(LOGIN_PATH).unwrap().requires_auth);
    assert!(!table.lookup(REGISTER_PATH).unwrap().requires_auth);
}

#[test]
fn base_path_is_kept_verbatim() {
    let table = RouteTable::standard("/app");
    assert_eq!(table.base_path(), "/app");
    assert!(table.lookup("/app/login").is_none());
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn lookup_is_exact_match() {
    let table = RouteTable::standard("");
    assert!(table.lookup("/admin/").is_none());
    assert!(table.lookup("/ADMIN").is_none());
    assert!(table.lookup("/admin/gestion/extra").is_none());
}

#[test]
fn resolve_unknown_path_is_not_found() {
    let table = RouteTable::standard("");
    assert_eq!(table.resolve("/nope").unwrap_err(), RouteTableError::NotFound("/nope".to_owned()));
}

// =============================================================
// Construction invariants
// =============================================================

#[test]
fn new_accepts_minimal_table() {
    let table = RouteTable::new("", minimal_entries()).unwrap();
    assert_eq!(table.entries().count(), 2);
}

#[test]
fn new_rejects_duplicate_paths() {
    let mut entries = minimal_entries();
    entries.push(RouteEntry::view("/home", ViewId::Admin));
    assert_eq!(RouteTable::new("", entries).unwrap_err(), RouteTableError::DuplicatePath("/home".to_owned()));
}

#[test]
fn new_rejects_missing_root() {
    let entries = vec![RouteEntry::view("/home", ViewId::Comercial)];
    assert_eq!(RouteTable::new("", entries).unwrap_err(), RouteTableError::MissingRoot);
}

#[test]
fn new_rejects_root_with_view() {
    let entries = vec![RouteEntry::view(ROOT_PATH, ViewId::Comercial)];
    assert_eq!(RouteTable::new("", entries).unwrap_err(), RouteTableError::RootNotRedirect);
}

#[test]
fn new_rejects_dangling_redirect() {
    let entries = vec![RouteEntry::redirect(ROOT_PATH, "/missing")];
    assert_eq!(
        RouteTable::new("", entries).unwrap_err(),
        RouteTableError::DanglingRedirect { from: ROOT_PATH.to_owned(), to: "/missing".to_owned() }
    );
}

#[test]
fn new_rejects_redirect_cycle() {
    let entries = vec![RouteEntry::redirect(ROOT_PATH, "/a"), RouteEntry::redirect("/a", ROOT_PATH)];
    assert!(matches!(RouteTable::new("", entries).unwrap_err(), RouteTableError::RedirectCycle(_)));
}

#[test]
fn resolve_follows_multi_hop_redirects() {
    let entries = vec![
        RouteEntry::redirect(ROOT_PATH, "/a"),
        RouteEntry::redirect("/a", "/b"),
        RouteEntry::view("/b", ViewId::Admin),
    ];
    let table = RouteTable::new("", entries).unwrap();
    assert_eq!(table.resolve(ROOT_PATH).unwrap().view_id(), Some(ViewId::Admin));
}
