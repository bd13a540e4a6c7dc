use dioxus::prelude::*;

use crate::client::{
    components::Layout,
    guard::AccessGuard,
    routes::{
        records::{MedicalRecords, Medications, PhysicalExams, Vaccinations},
        Health, Home, Login, NotFound, Profile, Register,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]

        #[layout(AccessGuard)]

        #[route("/")]
        Home {},

        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},

        #[route("/profile")]
        Profile {},

        #[route("/medical-records")]
        MedicalRecords {},

        #[route("/medication-records")]
        Medications {},

        #[route("/vaccination-records")]
        Vaccinations {},

        #[route("/physical-exams")]
        PhysicalExams {},

        #[route("/health")]
        Health {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Whether the page is only reachable with a session.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Home {}
                | Self::Profile {}
                | Self::MedicalRecords {}
                | Self::Medications {}
                | Self::Vaccinations {}
                | Self::PhysicalExams {}
        )
    }

    /// Pages an authenticated user is sent away from.
    pub fn is_auth_page(&self) -> bool {
        matches!(self, Self::Login {} | Self::Register {})
    }
}
