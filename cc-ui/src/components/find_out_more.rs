//! Expandable "find out more" region.

use crate::state::AppState;
use cc_core::Action;
use dioxus::prelude::*;

/// A link toggling a region that shows the record's more-info markup.
/// The markup is inserted as-is.
#[component]
pub fn FindOutMore() -> Element {
    let mut state = use_context::<AppState>();
    let view = state.view();
    let markup = view.more_info.unwrap_or_default();

    let on_toggle = move |evt: Event<MouseData>| {
        evt.prevent_default();
        state.dispatch(Action::ToggleMoreInfo);
    };

    rsx! {
        div {
            id: "more-info-el",
            style: "margin: 8px 0; text-align: center;",
            a {
                class: "find-more-a",
                href: "#",
                onclick: on_toggle,
                "{view.find_more_label}"
            }
            div {
                class: "find-out-more",
                style: "margin-top: 8px;",
                dangerous_inner_html: "{markup}",
            }
        }
    }
}
