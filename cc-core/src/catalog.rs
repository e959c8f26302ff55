//! A fetched record set with per-load transient ids.

use crate::catastrophe::CatastropheRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transient id handed out when a listing is loaded, rendered as `c<N>`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// The records of one listing, in fetch order. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<(RecordId, CatastropheRecord)>,
}

impl Catalog {
    /// Assign ids `c1`, `c2`, ... in listing order.
    pub fn from_records(records: Vec<CatastropheRecord>) -> Self {
        let entries = records
            .into_iter()
            .zip(1..)
            .map(|(record, n)| (RecordId(n), record))
            .collect();
        Self { entries }
    }

    pub fn get(&self, id: RecordId) -> Option<&CatastropheRecord> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, record)| record)
    }

    /// First record with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<RecordId> {
        self.entries
            .iter()
            .find(|(_, record)| record.name == name)
            .map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &CatastropheRecord)> {
        self.entries.iter().map(|(id, record)| (*id, record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> CatastropheRecord {
        CatastropheRecord {
            name: name.to_string(),
            arrival_date: None,
            description: String::new(),
            more_info: String::new(),
        }
    }

    #[test]
    fn test_ids_follow_listing_order() {
        let catalog = Catalog::from_records(vec![named("A"), named("B"), named("C")]);
        let ids: Vec<String> = catalog.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert_eq!(catalog.get(RecordId(2)).map(|r| r.name.as_str()), Some("B"));
        assert_eq!(catalog.get(RecordId(4)), None);
    }

    #[test]
    fn test_find_by_name() {
        let catalog = Catalog::from_records(vec![named("Miami sinks"), named("California dries up")]);
        assert_eq!(catalog.find_by_name("California dries up"), Some(RecordId(2)));
        assert_eq!(catalog.find_by_name("california dries up"), None);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_records(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.find_by_name("anything"), None);
    }
}
