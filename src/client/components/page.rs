use dioxus::document::Title;
use dioxus::prelude::*;

#[component]
pub fn Page(title: &'static str, class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        Title { "{title} | Health Records" }
        section {
            class: "page {class}",
            h1 { "{title}" }
            {children}
        }
    )
}
