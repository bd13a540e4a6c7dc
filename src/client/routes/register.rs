use dioxus::prelude::*;

use crate::{
    client::{api::HttpApi, components::Page, router::Route, store::AuthStore},
    model::auth::RegisterDto,
};

#[component]
pub fn Register() -> Element {
    let mut auth = use_context::<Signal<AuthStore>>();
    let api = use_context::<HttpApi>();

    let mut form = use_signal(RegisterDto::default);
    let mut mismatch = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let data = form();
        if data.password != data.password_confirm {
            mismatch.set(true);
            return;
        }
        mismatch.set(false);

        let api = api.clone();
        spawn(async move {
            auth.write().state.loading = true;

            let mut store = auth.peek().clone();
            let result = store.register(&api, &data).await;
            auth.set(store);

            if result.is_ok() {
                navigator().push(Route::Login {});
            }
        });
    };

    let state = auth.read().state.clone();
    let error = if mismatch() {
        Some("Passwords do not match".to_string())
    } else {
        state.error.clone()
    };

    rsx!(
        Page { title: "Register",
            form {
                class: "flex flex-col gap-2 max-w-96",
                onsubmit,
                input {
                    r#type: "text",
                    placeholder: "Username",
                    required: true,
                    value: form.read().username.clone(),
                    oninput: move |evt| form.write().username = evt.value()
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: form.read().email.clone(),
                    oninput: move |evt| form.write().email = evt.value()
                }
                input {
                    r#type: "tel",
                    placeholder: "Phone (optional)",
                    value: form.read().phone.clone(),
                    oninput: move |evt| form.write().phone = evt.value()
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: form.read().password.clone(),
                    oninput: move |evt| form.write().password = evt.value()
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    required: true,
                    value: form.read().password_confirm.clone(),
                    oninput: move |evt| form.write().password_confirm = evt.value()
                }
                if let Some(error) = error {
                    p { class: "form-error", "{error}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: state.loading,
                    "Create account"
                }
            }
            p {
                "Already registered? "
                Link { to: Route::Login {}, "Login" }
            }
        }
    )
}
