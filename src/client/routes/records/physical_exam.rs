use dioxus::prelude::*;

use crate::{
    client::{
        api::HttpApi,
        components::Page,
        routes::records::{delete_record, use_records, DeleteButton, RecordsStatus},
        store::AuthStore,
    },
    model::records::{PhysicalExamDto, RecordKind},
};

fn measurement(value: Option<f64>) -> String {
    value
        .map(|value| format!("{:.1}", value))
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn PhysicalExams() -> Element {
    let auth = use_context::<Signal<AuthStore>>();
    let api = use_context::<HttpApi>();
    let records = use_records::<PhysicalExamDto>();

    let state = records.read();

    rsx!(
        Page { title: RecordKind::PhysicalExam.title(),
            RecordsStatus {
                loading: state.loading,
                error: state.error.clone(),
                empty: state.physical_exams.is_empty()
            }
            if !state.physical_exams.is_empty() {
                table { class: "records",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Height (cm)" }
                            th { "Weight (kg)" }
                            th { "BMI" }
                            th { "Blood pressure" }
                            th { "Heart rate" }
                            th { "Glucose (mmol/L)" }
                            th { "Cholesterol (mmol/L)" }
                            th { "Report" }
                            th {}
                        }
                    }
                    tbody {
                        for exam in state.physical_exams.iter().cloned() {
                            tr { key: "{exam.id}",
                                td { "{exam.exam_date}" }
                                td { {measurement(Some(exam.height))} }
                                td { {measurement(Some(exam.weight))} }
                                td { {measurement(exam.bmi)} }
                                td { "{exam.blood_pressure}" }
                                td { "{exam.heart_rate}" }
                                td { {measurement(exam.blood_glucose)} }
                                td { {measurement(exam.cholesterol)} }
                                td {
                                    if let Some(url) = exam.report_url.clone() {
                                        a { href: "{url}", target: "_blank", "PDF" }
                                    } else {
                                        "-"
                                    }
                                }
                                td {
                                    DeleteButton {
                                        onclick: {
                                            let api = api.clone();
                                            move |_| delete_record::<PhysicalExamDto>(auth, records, api.clone(), exam.id)
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
