//! Build-time client configuration.
//!
//! Values come from environment variables captured by `option_env!` when the
//! WASM bundle and SSR binary are compiled:
//!
//! - `PLAYGATE_API_BASE`: API origin for the login endpoint (default: same origin)
//! - `PLAYGATE_VIDEO_SRC`: video source for the player page
//! - `PLAYGATE_REQUIRE_LOGIN`: `false` registers only the player route

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::routes::RouteTable;

pub const DEFAULT_VIDEO_SRC: &str = "/media/intro.mp4";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub video_src: String,
    pub require_login: bool,
}

impl ClientConfig {
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PLAYGATE_API_BASE"),
            option_env!("PLAYGATE_VIDEO_SRC"),
            option_env!("PLAYGATE_REQUIRE_LOGIN"),
        )
    }

    #[must_use]
    pub fn from_values(api_base: Option<&str>, video_src: Option<&str>, require_login: Option<&str>) -> Self {
        Self {
            api_base_url: api_base.map(|raw| raw.trim().trim_end_matches('/').to_owned()).unwrap_or_default(),
            video_src: video_src
                .map(str::trim)
                .filter(|src| !src.is_empty())
                .unwrap_or(DEFAULT_VIDEO_SRC)
                .to_owned(),
            require_login: require_login.and_then(parse_flag).unwrap_or(true),
        }
    }

    #[must_use]
    pub fn route_table(&self) -> RouteTable {
        if self.require_login { RouteTable::full() } else { RouteTable::player_only() }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

/// Parse a boolean switch. Unrecognized values yield `None`.
#[must_use]
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
