//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route transition is checked against the session token before the
//! target view renders:
//!
//! | requested route   | token   | outcome                    |
//! |-------------------|---------|----------------------------|
//! | not `login-panel` | absent  | redirect to `login-panel`  |
//! | `login-panel`     | present | redirect to `home`         |
//! | anything else     |         | allow                      |
//!
//! [`decide`] is the pure decision. [`NavigationGuard`] binds it to a token
//! store and route table, and [`initialize`] performs the one-time startup
//! side effect of installing the bearer header. Route views go through the
//! guard in `components::route_guard`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::http::HttpClient;
use crate::routes::{RouteName, RouteTable};
use crate::state::session::TokenStore;

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(RouteName),
}

impl GuardDecision {
    /// Effective destination for a request to `to`. `None` means an
    /// unregistered path was allowed through to the router's fallback.
    #[must_use]
    pub fn destination(self, to: Option<RouteName>) -> Option<RouteName> {
        match self {
            Self::Allow => to,
            Self::Redirect(target) => Some(target),
        }
    }
}

/// Decide where a navigation to `to` should land.
///
/// `to` is `None` for paths outside the route table; those are treated like
/// any other non-login destination.
#[must_use]
pub fn decide(to: Option<RouteName>, authenticated: bool) -> GuardDecision {
    let to_login = to == Some(RouteName::LoginPanel);
    if !to_login && !authenticated {
        return GuardDecision::Redirect(RouteName::LoginPanel);
    }
    if to_login && authenticated {
        return GuardDecision::Redirect(RouteName::Home);
    }
    GuardDecision::Allow
}

/// Guard bound to a token source. The token is re-read on every check.
#[derive(Clone, Debug)]
pub struct NavigationGuard<S> {
    store: S,
    table: RouteTable,
}

impl<S: TokenStore> NavigationGuard<S> {
    pub fn new(store: S, table: RouteTable) -> Self {
        Self { store, table }
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Evaluate a transition. The prior route does not influence the outcome.
    #[must_use]
    pub fn check(&self, to: Option<RouteName>, _from: Option<RouteName>) -> GuardDecision {
        if !self.table.guard_enabled() {
            return GuardDecision::Allow;
        }
        decide(to, self.store.is_authenticated())
    }

    /// Evaluate a transition given the requested URL path.
    #[must_use]
    pub fn check_path(&self, path: &str, from: Option<RouteName>) -> GuardDecision {
        self.check(self.table.resolve_path(path), from)
    }
}

/// Router startup: install the stored token as the shared client's bearer
/// header. Returns whether a token was found.
pub fn initialize(store: &dyn TokenStore, http: &HttpClient) -> bool {
    match store.get() {
        Some(token) => {
            http.install_bearer_token(&token);
            true
        }
        None => false,
    }
}
