//! Router hookup for the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route view is wrapped in [`GuardedRoute`], so the guard decides
//! before the page for the requested route is built. A redirect renders a
//! marker plus `<Redirect/>` (history replace), never the rejected page.
//!
//! While the token cannot be read (server rendering against browser storage,
//! or the first hydrate pass that has to match it) the slot renders a neutral
//! placeholder.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::guard::{GuardDecision, NavigationGuard};
use crate::routes::{RouteName, RouteTable};
use crate::state::session::{SharedTokenStore, TokenStore};

/// What a guarded route slot shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardedView {
    /// Token not readable yet.
    Pending,
    /// Render the requested page.
    Page,
    Redirect(RouteName),
}

/// Pick the view for a request to `route`.
///
/// With the guard disabled the page renders without consulting the token.
pub fn resolve_view<S: TokenStore>(guard: &NavigationGuard<S>, route: Option<RouteName>, token_readable: bool) -> GuardedView {
    if !guard.table().guard_enabled() {
        return GuardedView::Page;
    }
    if !token_readable {
        return GuardedView::Pending;
    }
    match guard.check(route, None) {
        GuardDecision::Allow => GuardedView::Page,
        GuardDecision::Redirect(target) => GuardedView::Redirect(target),
    }
}

/// Guard redirects replace the rejected history entry.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Render `children` only if the guard allows navigation to `route`.
/// `route` is `None` for the router's not-found fallback.
#[component]
pub fn GuardedRoute(#[prop(optional)] route: Option<RouteName>, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SharedTokenStore>();
    let table = expect_context::<RouteTable>();

    // Hydration must reproduce the server's placeholder before deciding.
    let ready = RwSignal::new(!cfg!(feature = "hydrate") && store.is_available());
    #[cfg(feature = "hydrate")]
    Effect::new(move || ready.set(true));

    let guard = NavigationGuard::new(store, table);
    move || match resolve_view(&guard, route, ready.get()) {
        GuardedView::Pending => EitherOf3::A(view! { <div class="route-pending" aria-busy="true"></div> }),
        GuardedView::Page => EitherOf3::B(children()),
        GuardedView::Redirect(target) => {
            #[cfg(feature = "hydrate")]
            log::info!("navigation guard: {} -> {target}", route.map_or("unmatched", RouteName::name));
            EitherOf3::C(view! {
                <div class="route-redirect" data-redirect=target.path()></div>
                <Redirect path=target.path() options=redirect_options()/>
            })
        }
    }
}
