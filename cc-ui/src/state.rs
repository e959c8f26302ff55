//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the one `ClockModel` the page owns in a signal. It is
//! provided with `use_context_provider` and retrieved by components with
//! `use_context::<AppState>()`. Every change goes through `dispatch`, and
//! components render from the `ClockView` it exposes.

use cc_core::{Action, ClockModel, ClockView, DEFAULT_CATASTROPHE};
use chrono::Utc;
use dioxus::prelude::*;

/// Shared application state for the countdown page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The page model; written only by `dispatch`
    pub model: Signal<ClockModel>,
}

impl AppState {
    /// Create a new AppState selecting the default catastrophe on load.
    pub fn new() -> Self {
        Self::with_default(DEFAULT_CATASTROPHE)
    }

    pub fn with_default(default_name: &str) -> Self {
        Self {
            model: Signal::new(ClockModel::new(default_name)),
        }
    }

    /// Apply `action` at the current time and log what it reports.
    pub fn dispatch(&mut self, action: Action) {
        let diagnostics = self.model.write().apply(action, Utc::now());
        for diagnostic in &diagnostics {
            diagnostic.log();
        }
    }

    /// Current projection of the model. Subscribes the calling component.
    pub fn view(&self) -> ClockView {
        self.model.read().view()
    }
}
