//! Full-page navigation.
//!
//! Logging out must reload the application from the login page instead of
//! performing an in-app route transition, so that no in-memory state from the
//! previous session survives. The router cannot express that, so the browser's
//! location is set directly.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus_logger::tracing;

pub const LOGIN_PATH: &str = "/login";

pub trait PageNavigator {
    /// Load `href` as a new document.
    fn navigate(&self, href: &str);
}

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl PageNavigator for BrowserNavigator {
    fn navigate(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(href, "No browser window available for navigation");
            return;
        };

        if let Err(err) = window.location().set_href(href) {
            tracing::error!(href, ?err, "Failed to navigate");
        }
    }
}

/// Records requested navigations instead of performing them.
///
/// Clones share the same history.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }
}

impl PageNavigator for RecordingNavigator {
    fn navigate(&self, href: &str) {
        self.visited.borrow_mut().push(href.to_string());
    }
}
