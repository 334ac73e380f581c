//! Route names, paths, and the registered route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard reasons about route *names*; the router and browser work with
//! *paths*. This module is the single mapping between the two.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PANEL_PATH: &str = "/login-panel";

/// A named, path-addressable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    /// Video player landing page.
    Home,
    /// Login form.
    LoginPanel,
}

impl RouteName {
    pub const ALL: [RouteName; 2] = [RouteName::Home, RouteName::LoginPanel];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::LoginPanel => "login-panel",
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::LoginPanel => LOGIN_PANEL_PATH,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.name() == name)
    }

    /// Match a URL path against the known routes, ignoring a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { HOME_PATH } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of routes this build registers.
///
/// The full table carries both views. The player-only table drops the login
/// panel, which also switches the navigation guard off.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteName>,
}

impl RouteTable {
    #[must_use]
    pub fn full() -> Self {
        Self { routes: RouteName::ALL.to_vec() }
    }

    #[must_use]
    pub fn player_only() -> Self {
        Self { routes: vec![RouteName::Home] }
    }

    #[must_use]
    pub fn contains(&self, route: RouteName) -> bool {
        self.routes.contains(&route)
    }

    /// Resolve a path to a route registered in this table.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> Option<RouteName> {
        RouteName::from_path(path).filter(|route| self.contains(*route))
    }

    /// The guard only has somewhere to send visitors when the login panel exists.
    #[must_use]
    pub fn guard_enabled(&self) -> bool {
        self.contains(RouteName::LoginPanel)
    }

    pub fn iter(&self) -> impl Iterator<Item = RouteName> + '_ {
        self.routes.iter().copied()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::full()
    }
}
