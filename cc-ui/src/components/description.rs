//! Brief description of the selected catastrophe.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn Description() -> Element {
    let state = use_context::<AppState>();
    let description = state.view().description;

    rsx! {
        div {
            id: "desc-el",
            style: "margin: 12px 0; text-align: center;",
            p {
                class: "brief-desc",
                "{description}"
            }
        }
    }
}
