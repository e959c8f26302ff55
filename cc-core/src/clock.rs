//! Application model for the countdown page.
//!
//! `ClockModel` is the single root the page owns. Inputs arrive as
//! [`Action`]s, each returning the [`Diagnostic`]s the caller should log, and
//! the page renders from the immutable [`ClockView`] returned by
//! [`ClockModel::view`].

use crate::catalog::{Catalog, RecordId};
use crate::catastrophe::CatastropheRecord;
use crate::countdown::RemainingDuration;
use crate::error::CatastropheError;
use crate::selector::Selection;
use chrono::{DateTime, Utc};
use log::Level;
use thiserror::Error;

/// Link text while the more-info region is closed.
pub const FIND_MORE_PROMPT: &str = "Click here to find out more.";
/// Link text while the more-info region is open.
pub const CLOSE_PROMPT: &str = "Click here to close this description.";
/// Shown in the open region when the record has no more-info markup.
pub const NO_MORE_INFO: &str = "None available at the moment.";
/// Description shown when the listing loaded but nothing is selected.
pub const NO_SELECTION: &str = "No catastrophe selected.";
/// Chooser button text when nothing is selected.
pub const CHOOSER_PROMPT: &str = "Choose a catastrophe";

/// Everything that can happen to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchSucceeded(Vec<CatastropheRecord>),
    FetchFailed(String),
    Select(RecordId),
    Tick,
    ToggleMoreInfo,
}

/// Operator-facing messages produced while applying actions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    #[error("Couldn't retrieve catastrophes: {reason}")]
    FetchFailed { reason: String },

    #[error("no catastrophe named {name:?} in the listing; nothing selected")]
    DefaultMissing { name: String },

    #[error("no catastrophe with id {0} in the listing")]
    UnknownRecord(RecordId),

    #[error("clock frozen: {0}")]
    Frozen(CatastropheError),
}

impl Diagnostic {
    pub fn level(&self) -> Level {
        match self {
            Diagnostic::FetchFailed { .. } => Level::Error,
            _ => Level::Warn,
        }
    }

    /// Write this diagnostic to the `log` facade.
    pub fn log(&self) {
        log::log!(self.level(), "{}", self);
    }
}

/// One row of the chooser list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserEntry {
    pub id: RecordId,
    pub name: String,
    pub selected: bool,
}

/// Everything the page draws, computed in one pass from the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockView {
    /// `DDDD:HH:MM:SS`
    pub clock: String,
    pub description: String,
    pub find_more_label: &'static str,
    /// Markup for the more-info region; `None` clears it
    pub more_info: Option<String>,
    pub chooser_label: String,
    pub chooser: Vec<ChooserEntry>,
    pub frozen: bool,
}

/// The countdown page's state.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockModel {
    default_name: String,
    catalog: Catalog,
    selection: Selection,
    duration: RemainingDuration,
    frozen: bool,
    more_info_open: bool,
    loaded: bool,
}

impl ClockModel {
    /// A model showing the placeholder duration, selecting `default_name`
    /// once a listing arrives.
    pub fn new(default_name: impl Into<String>) -> Self {
        Self {
            default_name: default_name.into(),
            catalog: Catalog::default(),
            selection: Selection::None,
            duration: RemainingDuration::PLACEHOLDER,
            frozen: false,
            more_info_open: false,
            loaded: false,
        }
    }

    pub fn apply(&mut self, action: Action, now: DateTime<Utc>) -> Vec<Diagnostic> {
        match action {
            Action::FetchSucceeded(records) => self.load(records, now),
            Action::FetchFailed(reason) => vec![self.fetch_failed(reason)],
            Action::Select(id) => self.select(id, now),
            Action::Tick => {
                self.tick();
                Vec::new()
            }
            Action::ToggleMoreInfo => {
                self.toggle_more_info();
                Vec::new()
            }
        }
    }

    /// Install a fetched listing and select the default record.
    pub fn load(&mut self, records: Vec<CatastropheRecord>, now: DateTime<Utc>) -> Vec<Diagnostic> {
        self.catalog = Catalog::from_records(records);
        self.selection = Selection::initial(&self.catalog, &self.default_name);
        self.loaded = true;
        let mut diagnostics = Vec::new();
        if self.selection == Selection::None {
            diagnostics.push(Diagnostic::DefaultMissing {
                name: self.default_name.clone(),
            });
        }
        diagnostics.extend(self.retarget(now));
        diagnostics
    }

    /// The listing could not be fetched. Nothing on the page changes.
    pub fn fetch_failed(&mut self, reason: impl Into<String>) -> Diagnostic {
        Diagnostic::FetchFailed {
            reason: reason.into(),
        }
    }

    /// Point the clock at another record of the current listing.
    pub fn select(&mut self, id: RecordId, now: DateTime<Utc>) -> Vec<Diagnostic> {
        if self.catalog.get(id).is_none() {
            return vec![Diagnostic::UnknownRecord(id)];
        }
        self.selection = Selection::Selected(id);
        self.retarget(now)
    }

    /// Advance the clock by one second unless it is frozen.
    pub fn tick(&mut self) {
        if !self.frozen {
            self.duration = self.duration.step();
        }
    }

    pub fn toggle_more_info(&mut self) {
        self.more_info_open = !self.more_info_open;
    }

    fn retarget(&mut self, now: DateTime<Utc>) -> Vec<Diagnostic> {
        let Some(record) = self.selection.record(&self.catalog) else {
            self.frozen = false;
            return Vec::new();
        };
        match record.arrival() {
            Ok(arrival) => {
                self.duration = RemainingDuration::derive(arrival, now);
                self.frozen = false;
                Vec::new()
            }
            Err(e) => {
                self.frozen = true;
                vec![Diagnostic::Frozen(e)]
            }
        }
    }

    pub fn duration(&self) -> RemainingDuration {
        self.duration
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> Option<&CatastropheRecord> {
        self.selection.record(&self.catalog)
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn more_info_open(&self) -> bool {
        self.more_info_open
    }

    pub fn view(&self) -> ClockView {
        let selected = self.selected();

        let description = match selected {
            Some(record) => record.description.clone(),
            None if self.loaded => NO_SELECTION.to_string(),
            None => String::new(),
        };

        let (find_more_label, more_info) = if self.more_info_open {
            let markup = selected
                .map(|record| record.more_info.as_str())
                .filter(|markup| !markup.trim().is_empty())
                .unwrap_or(NO_MORE_INFO);
            (CLOSE_PROMPT, Some(markup.to_string()))
        } else {
            (FIND_MORE_PROMPT, None)
        };

        let chooser = self
            .catalog
            .iter()
            .map(|(id, record)| ChooserEntry {
                id,
                name: record.name.clone(),
                selected: self.selection.is_selected(id),
            })
            .collect();

        ClockView {
            clock: self.duration.render(),
            description,
            find_more_label,
            more_info,
            chooser_label: selected
                .map(|record| record.name.clone())
                .unwrap_or_else(|| CHOOSER_PROMPT.to_string()),
            chooser,
            frozen: self.frozen,
        }
    }
}
