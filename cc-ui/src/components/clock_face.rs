//! The `DDDD:HH:MM:SS` display.

use crate::state::AppState;
use dioxus::prelude::*;

/// Renders the remaining duration. Re-renders on every tick.
#[component]
pub fn ClockFace() -> Element {
    let state = use_context::<AppState>();
    let view = state.view();
    let color = if view.frozen { "#999" } else { "#C62828" };

    rsx! {
        div {
            id: "clock-view-el",
            class: "clock",
            style: "font-family: monospace; font-size: 64px; text-align: center; color: {color};",
            "{view.clock}"
        }
    }
}
