//! Video player landing page (`home`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached only with a session token when the guard is active. Logging out
//! clears the token and the bearer header, then hands control back to the
//! login panel.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::video_player::VideoPlayer;
use crate::config::ClientConfig;
use crate::net::http::HttpClient;
use crate::routes::{RouteName, RouteTable};
use crate::state::session::{SharedTokenStore, TokenStore};

/// Drop the session: forget the token and stop sending it.
pub fn end_session(store: &dyn TokenStore, http: &HttpClient) {
    store.clear();
    http.clear_authorization();
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let store = expect_context::<SharedTokenStore>();
    let http = expect_context::<HttpClient>();
    let table = expect_context::<RouteTable>();
    let navigate = use_navigate();

    let show_logout = table.contains(RouteName::LoginPanel);
    let on_logout = move |_| {
        end_session(&*store, &http);
        #[cfg(feature = "hydrate")]
        log::info!("session ended");
        navigate(RouteName::LoginPanel.path(), NavigateOptions::default());
    };

    view! {
        <main class="home-page">
            <header class="home-page__header">
                <h1>"Playgate"</h1>
                {show_logout
                    .then(|| {
                        view! {
                            <button class="logout-button" type="button" on:click=on_logout>
                                "Log out"
                            </button>
                        }
                    })}
            </header>
            <VideoPlayer src=config.video_src.clone()/>
        </main>
    }
}
