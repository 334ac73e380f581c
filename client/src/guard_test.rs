use super::*;
use crate::net::http::AUTHORIZATION;
use crate::state::session::{MemoryTokenStore, SharedTokenStore};
use std::sync::Arc;

fn guard_with(token: Option<&str>) -> NavigationGuard<MemoryTokenStore> {
    let store = token.map_or_else(MemoryTokenStore::new, MemoryTokenStore::with_token);
    NavigationGuard::new(store, RouteTable::full())
}

// =============================================================
// decide — decision table
// =============================================================

#[test]
fn unauthenticated_non_login_routes_redirect_to_login() {
    for to in [Some(RouteName::Home), None] {
        assert_eq!(decide(to, false), GuardDecision::Redirect(RouteName::LoginPanel), "to = {to:?}");
    }
}

#[test]
fn authenticated_login_redirects_home() {
    assert_eq!(decide(Some(RouteName::LoginPanel), true), GuardDecision::Redirect(RouteName::Home));
}

#[test]
fn unauthenticated_login_is_allowed() {
    assert_eq!(decide(Some(RouteName::LoginPanel), false), GuardDecision::Allow);
}

#[test]
fn authenticated_non_login_routes_are_allowed() {
    for to in [Some(RouteName::Home), None] {
        assert_eq!(decide(to, true), GuardDecision::Allow, "to = {to:?}");
    }
}

#[test]
fn destination_resolves_allow_and_redirect() {
    assert_eq!(GuardDecision::Allow.destination(Some(RouteName::Home)), Some(RouteName::Home));
    assert_eq!(
        GuardDecision::Redirect(RouteName::LoginPanel).destination(Some(RouteName::Home)),
        Some(RouteName::LoginPanel)
    );
    assert_eq!(GuardDecision::Allow.destination(None), None);
}

// =============================================================
// NavigationGuard
// =============================================================

#[test]
fn no_token_home_redirects_to_login_panel() {
    let guard = guard_with(None);
    let decision = guard.check(Some(RouteName::Home), None);
    assert_eq!(decision.destination(Some(RouteName::Home)), Some(RouteName::LoginPanel));
}

#[test]
fn token_login_panel_redirects_home_and_installs_bearer() {
    let store = MemoryTokenStore::with_token("abc123");
    let http = HttpClient::default();
    assert!(initialize(&store, &http));

    let guard = NavigationGuard::new(store, RouteTable::full());
    let decision = guard.check(Some(RouteName::LoginPanel), Some(RouteName::Home));
    assert_eq!(decision, GuardDecision::Redirect(RouteName::Home));
    assert_eq!(http.default_header(AUTHORIZATION).as_deref(), Some("Bearer abc123"));
}

#[test]
fn check_ignores_from_route() {
    let guard = guard_with(None);
    for from in [None, Some(RouteName::Home), Some(RouteName::LoginPanel)] {
        assert_eq!(guard.check(Some(RouteName::Home), from), GuardDecision::Redirect(RouteName::LoginPanel));
    }
}

#[test]
fn check_is_idempotent_without_token_change() {
    for token in [None, Some("abc123")] {
        let guard = guard_with(token);
        for to in [Some(RouteName::Home), Some(RouteName::LoginPanel), None] {
            assert_eq!(guard.check(to, None), guard.check(to, None));
        }
    }
}

#[test]
fn check_reads_token_fresh_each_time() {
    let store = MemoryTokenStore::new();
    let guard = NavigationGuard::new(store.clone(), RouteTable::full());
    assert_eq!(guard.check(Some(RouteName::Home), None), GuardDecision::Redirect(RouteName::LoginPanel));

    store.set("abc123");
    assert_eq!(guard.check(Some(RouteName::Home), None), GuardDecision::Allow);

    store.clear();
    assert_eq!(guard.check(Some(RouteName::Home), None), GuardDecision::Redirect(RouteName::LoginPanel));
}

#[test]
fn empty_token_counts_as_absent() {
    let guard = guard_with(Some(""));
    assert_eq!(guard.check(Some(RouteName::Home), None), GuardDecision::Redirect(RouteName::LoginPanel));
    assert_eq!(guard.check(Some(RouteName::LoginPanel), None), GuardDecision::Allow);
}

#[test]
fn player_only_table_never_redirects() {
    let guard = NavigationGuard::new(MemoryTokenStore::new(), RouteTable::player_only());
    assert_eq!(guard.check(Some(RouteName::Home), None), GuardDecision::Allow);
    assert_eq!(guard.check_path("/anything", None), GuardDecision::Allow);
}

#[test]
fn check_path_resolves_registered_routes() {
    let guard = guard_with(Some("abc123"));
    assert_eq!(guard.check_path("/login-panel/", None), GuardDecision::Redirect(RouteName::Home));
    assert_eq!(guard.check_path("/", None), GuardDecision::Allow);
    assert_eq!(guard.check_path("/missing", None), GuardDecision::Allow);

    let guard = guard_with(None);
    assert_eq!(guard.check_path("/missing", None), GuardDecision::Redirect(RouteName::LoginPanel));
    assert_eq!(guard.check_path("/login-panel", None), GuardDecision::Allow);
}

#[test]
fn guard_accepts_shared_store() {
    let shared: SharedTokenStore = Arc::new(MemoryTokenStore::with_token("abc123"));
    let guard = NavigationGuard::new(shared, RouteTable::full());
    assert_eq!(guard.check(Some(RouteName::LoginPanel), None), GuardDecision::Redirect(RouteName::Home));
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_token_leaves_headers_untouched() {
    let http = HttpClient::default();
    assert!(!initialize(&MemoryTokenStore::new(), &http));
    assert!(http.default_headers().is_empty());
}

#[test]
fn initialize_with_empty_token_installs_nothing() {
    let http = HttpClient::default();
    assert!(!initialize(&MemoryTokenStore::with_token(""), &http));
    assert_eq!(http.default_header(AUTHORIZATION), None);
}
