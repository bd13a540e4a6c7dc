//! Pages listing each kind of health record.

pub mod medical;
pub mod medication;
pub mod physical_exam;
pub mod vaccination;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTrash;
use dioxus_free_icons::Icon;

use crate::client::{
    api::HttpApi,
    store::{AuthStore, RecordsState, StoredRecord},
};

pub use medical::MedicalRecords;
pub use medication::Medications;
pub use physical_exam::PhysicalExams;
pub use vaccination::Vaccinations;

/// Load the records of kind `T` when the page mounts.
pub fn use_records<T: StoredRecord>() -> Signal<RecordsState> {
    let mut auth = use_context::<Signal<AuthStore>>();
    let mut records = use_context::<Signal<RecordsState>>();
    let api = use_context::<HttpApi>();

    use_future(move || {
        let api = api.clone();
        async move {
            records.write().loading = true;

            let mut store = auth.peek().clone();
            let mut state = records.peek().clone();
            let _ = state.fetch::<T, _>(&mut store, &api).await;

            auth.set(store);
            records.set(state);
        }
    });

    records
}

/// Delete a record in the background, keeping both stores in step.
pub fn delete_record<T: StoredRecord>(
    mut auth: Signal<AuthStore>,
    mut records: Signal<RecordsState>,
    api: HttpApi,
    id: i32,
) {
    spawn(async move {
        let mut store = auth.peek().clone();
        let mut state = records.peek().clone();
        let _ = state.delete::<T, _>(&mut store, &api, id).await;

        auth.set(store);
        records.set(state);
    });
}

/// Loading, error and empty states shared by the record tables.
#[component]
pub fn RecordsStatus(
    loading: bool,
    #[props(!optional)] error: Option<String>,
    empty: bool,
) -> Element {
    rsx!(
        if let Some(error) = error {
            p { class: "form-error", "{error}" }
        }
        if loading && empty {
            div { class: "skeleton h-32 w-full" }
        } else if empty {
            p { class: "empty", "No records yet." }
        }
    )
}

#[component]
pub fn DeleteButton(onclick: EventHandler<MouseEvent>) -> Element {
    rsx!(
        button {
            class: "btn btn-outline btn-sm",
            title: "Delete",
            onclick: move |evt| onclick.call(evt),
            Icon {
                width: 14,
                height: 14,
                icon: FaTrash
            }
        }
    )
}
