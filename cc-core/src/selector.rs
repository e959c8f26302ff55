//! Which fetched record drives the clock.

use crate::catalog::{Catalog, RecordId};
use crate::catastrophe::CatastropheRecord;

/// Selection state of the chooser.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(RecordId),
}

impl Selection {
    /// Initial selection for a freshly loaded catalog: the record named
    /// `default_name`, or nothing.
    pub fn initial(catalog: &Catalog, default_name: &str) -> Self {
        catalog
            .find_by_name(default_name)
            .map_or(Selection::None, Selection::Selected)
    }

    pub fn id(&self) -> Option<RecordId> {
        match self {
            Selection::None => None,
            Selection::Selected(id) => Some(*id),
        }
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.id() == Some(id)
    }

    /// The selected record, if it is still part of `catalog`.
    pub fn record<'a>(&self, catalog: &'a Catalog) -> Option<&'a CatastropheRecord> {
        self.id().and_then(|id| catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let names = ["Miami sinks", "California dries up", "Sun goes out"];
        Catalog::from_records(
            names
                .iter()
                .map(|name| CatastropheRecord {
                    name: name.to_string(),
                    arrival_date: None,
                    description: String::new(),
                    more_info: String::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_initial_selects_default_name() {
        let selection = Selection::initial(&catalog(), "California dries up");
        assert_eq!(selection, Selection::Selected(RecordId(2)));
        assert!(selection.is_selected(RecordId(2)));
        assert!(!selection.is_selected(RecordId(1)));
    }

    #[test]
    fn test_initial_without_match_selects_nothing() {
        let catalog = catalog();
        let selection = Selection::initial(&catalog, "Asteroid");
        assert_eq!(selection, Selection::None);
        assert_eq!(selection.record(&catalog), None);
    }

    #[test]
    fn test_record_lookup() {
        let catalog = catalog();
        let selection = Selection::Selected(RecordId(3));
        assert_eq!(
            selection.record(&catalog).map(|r| r.name.as_str()),
            Some("Sun goes out")
        );
    }
}
