use dioxus::prelude::*;

use crate::{
    client::{
        api::HttpApi,
        components::Page,
        routes::records::{delete_record, use_records, DeleteButton, RecordsStatus},
        store::AuthStore,
    },
    model::records::{RecordKind, VaccinationRecordDto},
};

#[component]
pub fn Vaccinations() -> Element {
    let auth = use_context::<Signal<AuthStore>>();
    let api = use_context::<HttpApi>();
    let records = use_records::<VaccinationRecordDto>();

    let state = records.read();

    rsx!(
        Page { title: RecordKind::Vaccination.title(),
            RecordsStatus {
                loading: state.loading,
                error: state.error.clone(),
                empty: state.vaccination.is_empty()
            }
            if !state.vaccination.is_empty() {
                table { class: "records",
                    thead {
                        tr {
                            th { "Vaccine" }
                            th { "Dose" }
                            th { "Date" }
                            th { "Next due" }
                            th { "Institution" }
                            th { "Batch" }
                            th {}
                        }
                    }
                    tbody {
                        for record in state.vaccination.iter().cloned() {
                            tr { key: "{record.id}",
                                td { {record.vaccine_name().to_string()} }
                                td { "{record.dose_number}" }
                                td { "{record.vaccination_date}" }
                                td {
                                    {record.next_due_date.map(|date| date.to_string()).unwrap_or_else(|| "-".to_string())}
                                }
                                td { "{record.institution}" }
                                td { "{record.batch_number}" }
                                td {
                                    DeleteButton {
                                        onclick: {
                                            let api = api.clone();
                                            move |_| delete_record::<VaccinationRecordDto>(auth, records, api.clone(), record.id)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
