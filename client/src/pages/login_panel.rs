//! Login panel (`login-panel`) with username + password sign-in.

#[cfg(test)]
#[path = "login_panel_test.rs"]
mod login_panel_test;

use leptos::prelude::*;

use crate::net::http::HttpClient;
use crate::state::session::{SharedTokenStore, TokenStore};

const MISSING_CREDENTIALS: &str = "Enter both username and password.";

/// Trim the username and require both fields. Passwords are kept verbatim.
fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Persist a freshly issued token and start sending it.
pub fn begin_session(store: &dyn TokenStore, http: &HttpClient, token: &str) {
    store.set(token);
    http.install_bearer_token(token);
}

#[component]
pub fn LoginPanelPage() -> impl IntoView {
    let store = expect_context::<SharedTokenStore>();
    let http = expect_context::<HttpClient>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let http = http.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&http, &username_value, &password_value).await {
                    Ok(token) => {
                        begin_session(&*store, &http, &token);
                        log::info!("signed in as {username_value}");
                        password.set(String::new());
                        info.set(String::new());
                        busy.set(false);
                        navigate(
                            crate::routes::RouteName::Home.path(),
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(e) => {
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, &http, username_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Playgate"</h1>
                <p class="login-card__subtitle">"Sign in to watch"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
