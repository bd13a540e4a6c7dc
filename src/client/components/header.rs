use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaHeartPulse;
use dioxus_free_icons::Icon;

use crate::client::{components::LogoutButton, router::Route};

#[component]
pub fn Header() -> Element {
    rsx!(
        header {
            class: "header",
            nav {
                class: "header-nav",
                Link {
                    to: Route::Home {},
                    class: "btn",
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaHeartPulse
                    }
                    "Health Records"
                }
            }
            div {
                class: "header-actions",
                LogoutButton {}
            }
        }
    )
}
