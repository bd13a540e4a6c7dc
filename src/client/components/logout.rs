use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRightFromBracket;
use dioxus_free_icons::Icon;

use crate::client::store::AuthStore;

/// Logout control, rendered only while a session token is stored.
///
/// Clicking it clears the session and reloads the application at the login
/// page.
#[component]
pub fn LogoutButton() -> Element {
    let auth = use_context::<Signal<AuthStore>>();

    let has_session = auth.read().has_session();

    rsx!(
        if has_session {
            button {
                id: "logout",
                class: "btn btn-outline",
                onclick: move |_| on_logout(auth),
                Icon {
                    width: 18,
                    height: 18,
                    icon: FaRightFromBracket
                }
                "Logout"
            }
        }
    )
}

/// Click handler of the logout control.
pub fn on_logout(mut auth: Signal<AuthStore>) {
    auth.write().logout();
}
