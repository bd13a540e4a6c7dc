use dioxus::prelude::*;

use crate::client::{
    api::{HealthStatus, HttpApi},
    components::Page,
    config::ClientConfig,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service status page, reachable without a session.
///
/// Calls the API's `health/` endpoint on every visit.
#[component]
pub fn Health() -> Element {
    let config = use_context::<ClientConfig>();
    let api = use_context::<HttpApi>();

    let status = use_resource(move || {
        let api = api.clone();
        async move { api.health().await }
    });

    rsx!(
        Page { title: "Status",
            p { "Frontend: ok (version {VERSION})" }
            p { "API: {config.api_url}" }
            HealthReport { status: status.cloned() }
        }
    )
}

/// Result of the API health check, or a placeholder while it runs.
#[component]
pub fn HealthReport(#[props(!optional)] status: Option<HealthStatus>) -> Element {
    match status {
        None => rsx!(
            p { class: "status status-pending", "Checking API..." }
        ),
        Some(HealthStatus::Healthy(message)) => rsx!(
            p { class: "status status-healthy", "API: healthy" }
            if !message.is_empty() {
                p { "{message}" }
            }
        ),
        Some(HealthStatus::Unhealthy(reason)) => rsx!(
            p { class: "status status-unhealthy", "API: unhealthy" }
            p { class: "form-error", "{reason}" }
        ),
    }
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::HealthReport;
    use crate::client::api::HealthStatus;

    fn render(status: Option<HealthStatus>) -> String {
        let mut dom = VirtualDom::new_with_props(
            |status: Option<HealthStatus>| rsx!(HealthReport { status }),
            status,
        );
        dom.rebuild_in_place();

        dioxus_ssr::render(&dom)
    }

    /// Tests the report while the check is in flight.
    ///
    /// Expected: pending message
    #[test]
    fn renders_pending() {
        assert!(render(None).contains("Checking API"));
    }

    /// Tests the report for a healthy API.
    ///
    /// Expected: healthy marker and the API's message
    #[test]
    fn renders_healthy() {
        let html = render(Some(HealthStatus::Healthy("Service is running".to_string())));

        assert!(html.contains("status-healthy"));
        assert!(html.contains("Service is running"));
    }

    /// Tests the report for an unreachable API.
    ///
    /// Expected: unhealthy marker and the reason
    #[test]
    fn renders_unhealthy() {
        let html = render(Some(HealthStatus::Unhealthy("API is unreachable".to_string())));

        assert!(html.contains("status-unhealthy"));
        assert!(html.contains("API is unreachable"));
        assert!(!html.contains("status-healthy"));
    }
}
