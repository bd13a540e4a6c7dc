use std::rc::Rc;

use dioxus::document::{Meta, Stylesheet};
use dioxus::prelude::*;

use crate::client::{
    api::HttpApi,
    config::ClientConfig,
    navigation::PageNavigator,
    router::Route,
    store::{AuthStore, RecordsState, SessionStorage},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(target_arch = "wasm32")]
fn browser_session() -> (Rc<dyn SessionStorage>, Rc<dyn PageNavigator>) {
    use dioxus_logger::tracing;

    use crate::client::{
        navigation::BrowserNavigator,
        store::{LocalSessionStorage, MemorySessionStorage},
    };

    let storage: Rc<dyn SessionStorage> = match LocalSessionStorage::new() {
        Some(storage) => Rc::new(storage),
        None => {
            tracing::warn!("Local storage unavailable, session will not survive a reload");
            Rc::new(MemorySessionStorage::new())
        }
    };

    (storage, Rc::new(BrowserNavigator))
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_session() -> (Rc<dyn SessionStorage>, Rc<dyn PageNavigator>) {
    use crate::client::{navigation::RecordingNavigator, store::MemorySessionStorage};

    (
        Rc::new(MemorySessionStorage::new()),
        Rc::new(RecordingNavigator::new()),
    )
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| ClientConfig::from_env().unwrap_or_default());
    let api = use_context_provider(|| HttpApi::new(config));
    let mut auth = use_context_provider(|| {
        let (storage, navigator) = browser_session();
        Signal::new(AuthStore::from_storage(storage, navigator))
    });
    use_context_provider(|| Signal::new(RecordsState::default()));

    // Confirm a restored session is still accepted by the API
    use_future(move || {
        let api = api.clone();
        async move {
            if !auth.peek().is_authenticated() {
                return;
            }

            // A failed load has already logged out, possibly after a token refresh
            let mut store = auth.peek().clone();
            let _ = store.load_user(&api).await;
            auth.set(store);
        }
    });

    rsx!(
        Stylesheet { href: MAIN_CSS }
        Meta {
            name: "description",
            content: "Personal health records: medical history, medications, vaccinations and physical exams."
        }
        Router::<Route> {}
    )
}
