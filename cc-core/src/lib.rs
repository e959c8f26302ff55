//! Core types for the catastrophe clock.
//!
//! - `catastrophe`: fetched records, the listing envelope, arrival parsing
//! - `catalog`: a loaded record set with transient ids
//! - `countdown`: the remaining-duration engine and its text rendering
//! - `selector`: which record drives the clock
//! - `clock`: the application model the page renders from
//! - `source`: native listing client (feature `api`)

pub mod catalog;
pub mod catastrophe;
pub mod clock;
pub mod countdown;
pub mod error;
pub mod selector;
#[cfg(feature = "api")]
pub mod source;

pub use catalog::{Catalog, RecordId};
pub use catastrophe::CatastropheRecord;
pub use clock::{Action, ClockModel, ClockView, Diagnostic};
pub use countdown::RemainingDuration;
pub use error::{CatastropheError, SourceError};
pub use selector::Selection;

/// Record selected on first load when present.
pub const DEFAULT_CATASTROPHE: &str = "California dries up";
