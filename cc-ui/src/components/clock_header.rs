//! Page header with title and a one-line explanation.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ClockHeaderProps {
    /// Page title
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header above the clock.
#[component]
pub fn ClockHeader(props: ClockHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 28px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 14px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
