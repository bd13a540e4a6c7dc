use dioxus::prelude::*;

use crate::{
    client::{components::Page, router::Route, store::AuthStore},
    model::records::RecordKind,
};

const RECORD_PAGES: [(Route, RecordKind); 4] = [
    (Route::MedicalRecords {}, RecordKind::Medical),
    (Route::Medications {}, RecordKind::Medication),
    (Route::Vaccinations {}, RecordKind::Vaccination),
    (Route::PhysicalExams {}, RecordKind::PhysicalExam),
];

#[component]
pub fn Home() -> Element {
    let auth = use_context::<Signal<AuthStore>>();

    let greeting = match &auth.read().state.user {
        Some(user) => format!("Welcome back, {}", user.display_name()),
        None => "Welcome back".to_string(),
    };

    rsx!(
        Page { title: "Home",
            p { class: "text-lg",
                "{greeting}"
            }
            p {
                "Keep track of your medical history, medications, vaccinations and physical exams in one place."
            }
            ul { class: "record-links",
                for (route, kind) in RECORD_PAGES {
                    li { key: "{kind.title()}",
                        Link {
                            to: route,
                            class: "btn btn-primary",
                            {kind.title()}
                        }
                    }
                }
            }
            ul { class: "flex gap-2",
                li {
                    Link {
                        to: Route::Profile {},
                        class: "btn",
                        "View profile"
                    }
                }
                li {
                    Link {
                        to: Route::Health {},
                        class: "btn",
                        "Service status"
                    }
                }
            }
        }
    )
}
