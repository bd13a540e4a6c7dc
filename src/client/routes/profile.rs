use dioxus::prelude::*;

use crate::{
    client::{components::Page, store::AuthStore},
    model::user::UserDto,
};

const NOT_RECORDED: &str = "Not recorded";

#[component]
pub fn Profile() -> Element {
    let auth = use_context::<Signal<AuthStore>>();

    let user = auth.read().state.user.clone();

    rsx!(
        Page { title: "Profile",
            if let Some(user) = user {
                ProfileDetails { user }
            } else {
                div { class: "skeleton h-32 w-96" }
            }
        }
    )
}

#[component]
pub fn ProfileDetails(user: UserDto) -> Element {
    let birth_date = user
        .birth_date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NOT_RECORDED.to_string());

    rsx!(
        dl { class: "grid gap-2 max-w-128",
            dt { "Name" }
            dd { {user.display_name()} }
            dt { "Username" }
            dd { "{user.username}" }
            dt { "Email" }
            dd { "{user.email}" }
            dt { "Phone" }
            dd { {user.phone().unwrap_or(NOT_RECORDED)} }
            dt { "Blood type" }
            dd { {user.blood_type().unwrap_or(NOT_RECORDED)} }
            dt { "Birth date" }
            dd { "{birth_date}" }
            dt { "Emergency contact" }
            dd { {user.emergency_contact().unwrap_or(NOT_RECORDED)} }
        }
    )
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::{ProfileDetails, NOT_RECORDED};
    use crate::model::user::UserDto;

    fn render(user: UserDto) -> String {
        let mut dom =
            VirtualDom::new_with_props(|user: UserDto| rsx!(ProfileDetails { user }), user);
        dom.rebuild_in_place();

        dioxus_ssr::render(&dom)
    }

    /// Tests the profile of a user who left the optional fields blank.
    ///
    /// Verifies that a null phone and an empty blood type are both shown as
    /// not recorded rather than as empty cells.
    ///
    /// Expected: every optional field reads "Not recorded"
    #[test]
    fn blank_fields_not_recorded() {
        let user: UserDto = serde_json::from_str(
            r#"{
                "id": 3,
                "username": "carol",
                "email": "carol@example.com",
                "phone": null,
                "birth_date": null,
                "blood_type": "",
                "emergency_contact": ""
            }"#,
        )
        .unwrap();

        let html = render(user);

        assert_eq!(html.matches(NOT_RECORDED).count(), 4);
        assert!(html.contains("carol@example.com"));
    }

    /// Tests the profile of a user with every field filled in.
    ///
    /// Expected: recorded values shown, no placeholder
    #[test]
    fn shows_recorded_fields() {
        let user: UserDto = serde_json::from_str(
            r#"{
                "id": 4,
                "username": "dave",
                "email": "dave@example.com",
                "first_name": "Dave",
                "last_name": "Lin",
                "phone": "13800138000",
                "birth_date": "1988-02-29",
                "blood_type": "AB",
                "emergency_contact": "Ann-Mother-13900139000"
            }"#,
        )
        .unwrap();

        let html = render(user);

        assert!(html.contains("Dave Lin"));
        assert!(html.contains("13800138000"));
        assert!(html.contains("1988-02-29"));
        assert!(!html.contains(NOT_RECORDED));
    }
}
