//! Shared Dioxus components and browser plumbing for the catastrophe clock.
//!
//! This crate provides:
//! - `state`: `AppState`, the context-provided handle to the clock model
//! - `source`: the listing fetch, via the browser's `fetch`
//! - `ticker`: the one-second timer driving the countdown
//! - `components`: RSX components for each region of the page

pub mod components;
pub mod source;
pub mod state;
pub mod ticker;
