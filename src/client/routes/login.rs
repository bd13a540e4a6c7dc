use dioxus::prelude::*;

use crate::{
    client::{api::HttpApi, components::Page, router::Route, store::AuthStore},
    model::auth::LoginDto,
};

#[component]
pub fn Login() -> Element {
    let mut auth = use_context::<Signal<AuthStore>>();
    let api = use_context::<HttpApi>();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let api = api.clone();
        let credentials = LoginDto {
            username: username(),
            password: password(),
        };

        spawn(async move {
            auth.write().state.loading = true;

            let mut store = auth.peek().clone();
            let result = store.login(&api, &credentials).await;
            auth.set(store);

            if result.is_ok() {
                navigator().replace(Route::Home {});
            }
        });
    };

    let state = auth.read().state.clone();

    rsx!(
        Page { title: "Login",
            form {
                class: "flex flex-col gap-2 max-w-96",
                onsubmit,
                input {
                    r#type: "text",
                    name: "username",
                    placeholder: "Username",
                    required: true,
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value())
                }
                input {
                    r#type: "password",
                    name: "password",
                    placeholder: "Password",
                    required: true,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value())
                }
                if let Some(error) = state.error.clone() {
                    p { class: "form-error", "{error}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: state.loading,
                    if state.loading { "Logging in..." } else { "Login" }
                }
            }
            p {
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    )
}
