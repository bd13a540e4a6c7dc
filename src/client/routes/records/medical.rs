use dioxus::prelude::*;

use crate::{
    client::{
        api::HttpApi,
        components::Page,
        routes::records::{delete_record, use_records, DeleteButton, RecordsStatus},
        store::AuthStore,
    },
    model::records::{MedicalRecordDto, RecordKind},
};

#[component]
pub fn MedicalRecords() -> Element {
    let auth = use_context::<Signal<AuthStore>>();
    let api = use_context::<HttpApi>();
    let records = use_records::<MedicalRecordDto>();

    let state = records.read();

    rsx!(
        Page { title: RecordKind::Medical.title(),
            RecordsStatus {
                loading: state.loading,
                error: state.error.clone(),
                empty: state.medical.is_empty()
            }
            if !state.medical.is_empty() {
                table { class: "records",
                    thead {
                        tr {
                            th { "Visit date" }
                            th { "Hospital" }
                            th { "Department" }
                            th { "Doctor" }
                            th { "Diagnosis" }
                            th { "Follow-up" }
                            th { "Cost" }
                            th {}
                        }
                    }
                    tbody {
                        for record in state.medical.iter().cloned() {
                            tr { key: "{record.id}",
                                td { "{record.visit_date}" }
                                td { "{record.hospital}" }
                                td { {record.department_display.clone().unwrap_or(record.department.clone())} }
                                td { "{record.doctor}" }
                                td { "{record.diagnosis}" }
                                td {
                                    {record.follow_up_date.map(|date| date.to_string()).unwrap_or_else(|| "-".to_string())}
                                }
                                td { {format!("{:.2}", record.cost)} }
                                td {
                                    DeleteButton {
                                        onclick: {
                                            let api = api.clone();
                                            move |_| delete_record::<MedicalRecordDto>(auth, records, api.clone(), record.id)
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
