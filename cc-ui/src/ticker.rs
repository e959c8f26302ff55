//! The countdown's one-second timer.

use crate::state::AppState;
use cc_core::Action;
use gloo_timers::future::TimeoutFuture;

/// Interval between ticks.
pub const TICK_MILLIS: u32 = 1_000;

/// Tick the clock once a second for the life of the page.
pub async fn run(mut state: AppState) {
    loop {
        TimeoutFuture::new(TICK_MILLIS).await;
        state.dispatch(Action::Tick);
    }
}
