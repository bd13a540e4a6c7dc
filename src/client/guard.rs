//! Route access policy.
//!
//! Decides, for the route being rendered and the current session, whether the
//! page is shown or the router is sent elsewhere. Redirects replace the
//! current history entry.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{router::Route, store::AuthStore};

#[derive(Debug, Clone, PartialEq)]
pub enum Access {
    Allow,
    Redirect(Route),
}

pub fn resolve_access(route: &Route, authenticated: bool) -> Access {
    // The status page must stay reachable whatever the session looks like
    if matches!(route, Route::Health {}) {
        return Access::Allow;
    }

    if route.requires_auth() && !authenticated {
        return Access::Redirect(Route::Login {});
    }

    if authenticated && route.is_auth_page() {
        return Access::Redirect(Route::Home {});
    }

    Access::Allow
}

#[component]
pub fn AccessGuard() -> Element {
    let route = use_route::<Route>();
    let auth = use_context::<Signal<AuthStore>>();

    let authenticated = auth.read().is_authenticated();

    match resolve_access(&route, authenticated) {
        Access::Allow => rsx!(Outlet::<Route> {}),
        Access::Redirect(target) => {
            tracing::debug!(from = %route, to = %target, "Redirecting");

            navigator().replace(target);

            rsx!()
        }
    }
}
