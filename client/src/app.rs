//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::either::Either;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::GuardedRoute;
use crate::config::ClientConfig;
use crate::guard;
use crate::net::http::HttpClient;
use crate::pages::{home::HomePage, login_panel::LoginPanelPage};
use crate::routes::RouteName;
use crate::state::session::{LocalStorageTokenStore, SharedTokenStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn not_found() -> impl IntoView {
    "Page not found."
}

/// Root application component for the browser: local-storage token store and
/// build-time configuration.
#[component]
pub fn App() -> impl IntoView {
    let store: SharedTokenStore = Arc::new(LocalStorageTokenStore);
    view! { <PlaygateApp store=store config=ClientConfig::from_build_env()/> }
}

/// Application body with its collaborators injected.
///
/// Builds the shared HTTP client (unless one is supplied) and route table,
/// installs any stored token as the bearer header, and provides store, client
/// and table as context. Every route view goes through the navigation guard.
#[component]
pub fn PlaygateApp(
    store: SharedTokenStore,
    config: ClientConfig,
    #[prop(optional)] http: Option<HttpClient>,
) -> impl IntoView {
    provide_meta_context();

    let table = config.route_table();
    let http = http.unwrap_or_else(|| HttpClient::new(config.api_base_url.clone()));

    let restored = guard::initialize(&*store, &http);
    #[cfg(feature = "hydrate")]
    log::debug!("stored session token present: {restored}");
    #[cfg(not(feature = "hydrate"))]
    let _ = restored;

    let login_registered = table.contains(RouteName::LoginPanel);

    provide_context(config);
    provide_context(table);
    provide_context(store);
    provide_context(http);

    view! {
        <Stylesheet id="leptos" href="/pkg/playgate.css"/>
        <Title text="Playgate"/>

        <Router>
            <Routes fallback=|| view! { <GuardedRoute>{not_found()}</GuardedRoute> }>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <GuardedRoute route=RouteName::Home><HomePage/></GuardedRoute> }
                />
                <Route
                    path=StaticSegment("login-panel")
                    view=move || {
                        if login_registered {
                            Either::Left(view! { <GuardedRoute route=RouteName::LoginPanel><LoginPanelPage/></GuardedRoute> })
                        } else {
                            Either::Right(view! { <GuardedRoute>{not_found()}</GuardedRoute> })
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
