use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { title: "Not Found",
            p { "Nothing lives at /{path}" }
            Link { to: Route::Home {}, class: "btn", "Back to home" }
        }
    )
}
