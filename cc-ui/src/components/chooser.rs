//! Dropdown for choosing which catastrophe drives the clock.

use crate::state::AppState;
use cc_core::{Action, RecordId};
use dioxus::prelude::*;

/// Catastrophe chooser.
/// The list is rebuilt from the model's catalog on every render.
#[component]
pub fn Chooser() -> Element {
    let state = use_context::<AppState>();
    let view = state.view();

    rsx! {
        div {
            id: "chooser-el",
            class: "dropdown",
            style: "margin: 8px 0; text-align: center;",
            span {
                class: "dropdown-toggle",
                style: "font-weight: bold; margin-right: 8px;",
                "{view.chooser_label}"
            }
            ul {
                class: "dropdown-menu",
                style: "list-style: none; padding: 0;",
                for entry in view.chooser {
                    ChooserItem {
                        key: "{entry.id}",
                        id: entry.id,
                        name: entry.name,
                        selected: entry.selected,
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ChooserItemProps {
    id: RecordId,
    name: String,
    selected: bool,
}

/// One entry; clicking it selects the record with this id.
#[component]
fn ChooserItem(props: ChooserItemProps) -> Element {
    let mut state = use_context::<AppState>();
    let id = props.id;
    let weight = if props.selected { "bold" } else { "normal" };

    let on_click = move |evt: Event<MouseData>| {
        evt.prevent_default();
        state.dispatch(Action::Select(id));
    };

    rsx! {
        li {
            class: "dropdown-item",
            a {
                href: "#",
                "data-id": "{props.id}",
                style: "font-weight: {weight};",
                onclick: on_click,
                "{props.name}"
            }
        }
    }
}
