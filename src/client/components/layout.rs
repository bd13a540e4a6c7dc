use dioxus::prelude::*;

use crate::client::{components::Header, router::Route};

/// Application shell: the header above whichever page the router matched.
#[component]
pub fn Layout() -> Element {
    rsx!(
        Header {}
        main { class: "content",
            Outlet::<Route> {}
        }
    )
}
