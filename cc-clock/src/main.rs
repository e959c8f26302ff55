//! Countdown to the next catastrophe.
//!
//! Shows how long is left until a catastrophe arrives, with its description,
//! an expandable "find out more" region, and a chooser to switch between
//! catastrophes.
//!
//! Data flow:
//! 1. On mount, the listing at `/api/catastrophes/` is fetched once.
//! 2. The record named "California dries up" is selected and the remaining
//!    duration is derived from its arrival date.
//! 3. A one-second timer ticks the duration down; every component renders
//!    from the model's `ClockView`.
//! 4. Clicking a chooser entry re-targets the clock at that record.

use cc_ui::components::{Chooser, ClockFace, ClockHeader, Description, FindOutMore};
use cc_ui::source::{self, CATASTROPHES_URL};
use cc_ui::state::AppState;
use cc_ui::ticker;
use dioxus::prelude::*;

/// DOM element the app mounts into.
const ROOT_ID: &str = "container-el";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Fetch the listing once on mount
    use_future(move || async move {
        log::info!("Fetching catastrophes from {}", CATASTROPHES_URL);
        source::load(state, CATASTROPHES_URL).await;
    });

    // Tick for the life of the page, whether or not the fetch has landed
    use_future(move || ticker::run(state));

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ClockHeader {
                title: "Catastrophe Clock".to_string(),
                subtitle: "Days, hours, minutes and seconds until it happens".to_string(),
            }

            ClockFace {}
            Description {}
            FindOutMore {}
            Chooser {}
        }
    }
}
