use dioxus::prelude::*;

use crate::{
    client::{
        api::HttpApi,
        components::Page,
        routes::records::{delete_record, use_records, DeleteButton, RecordsStatus},
        store::AuthStore,
    },
    model::records::{MedicationRecordDto, RecordKind},
};

fn reminder(record: &MedicationRecordDto) -> String {
    match (record.reminder_enabled, record.reminder_time) {
        (true, Some(time)) => time.format("%H:%M").to_string(),
        _ => "Off".to_string(),
    }
}

#[component]
pub fn Medications() -> Element {
    let auth = use_context::<Signal<AuthStore>>();
    let api = use_context::<HttpApi>();
    let records = use_records::<MedicationRecordDto>();

    let state = records.read();

    rsx!(
        Page { title: RecordKind::Medication.title(),
            RecordsStatus {
                loading: state.loading,
                error: state.error.clone(),
                empty: state.medication.is_empty()
            }
            if !state.medication.is_empty() {
                table { class: "records",
                    thead {
                        tr {
                            th { "Drug" }
                            th { "Dosage" }
                            th { "Frequency" }
                            th { "From" }
                            th { "Until" }
                            th { "Days left" }
                            th { "Reminder" }
                            th {}
                        }
                    }
                    tbody {
                        for record in state.medication.iter().cloned() {
                            tr { key: "{record.id}",
                                td { "{record.drug_name}" }
                                td { "{record.dosage}" }
                                td { {record.frequency.label()} }
                                td { "{record.start_date}" }
                                td {
                                    {record.end_date.map(|date| date.to_string()).unwrap_or_else(|| "Ongoing".to_string())}
                                }
                                td {
                                    {record.remaining_days.map(|days| days.to_string()).unwrap_or_else(|| "-".to_string())}
                                }
                                td { {reminder(&record)} }
                                td {
                                    DeleteButton {
                                        onclick: {
                                            let api = api.clone();
                                            move |_| delete_record::<MedicationRecordDto>(auth, records, api.clone(), record.id)
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
