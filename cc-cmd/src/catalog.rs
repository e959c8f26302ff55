//! The catalog file: the listing endpoint's JSON, kept on disk.

use anyhow::Context;
use cc_core::catastrophe::{format_arrival, parse_listing, Envelope};
use cc_core::CatastropheRecord;
use chrono::{DateTime, Utc};
use log::info;
use std::path::{Path, PathBuf};

/// Catastrophe records backed by a JSON envelope file.
#[derive(Debug)]
pub struct CatalogFile {
    path: PathBuf,
    records: Vec<CatastropheRecord>,
}

impl CatalogFile {
    /// Read `path`; a missing file is an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let body = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_listing(&body).with_context(|| format!("parsing {}", path.display()))?
        } else {
            info!("{} not found, starting an empty catalog", path.display());
            Vec::new()
        };
        Ok(Self { path, records })
    }

    /// Write the catalog back as a pretty-printed envelope.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(&Envelope::new(self.records.clone()))?;
        std::fs::write(&self.path, body)
            .with_context(|| format!("writing {}", self.path.display()))?;
        info!("Wrote {} catastrophes to {}", self.records.len(), self.path.display());
        Ok(())
    }

    pub fn records(&self) -> &[CatastropheRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CatastropheRecord> {
        self.records
    }

    pub fn find(&self, name: &str) -> Option<&CatastropheRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Get-or-create `name` and set its arrival. Returns true when created.
    pub fn upsert_arrival(&mut self, name: &str, arrival: DateTime<Utc>) -> bool {
        match self.records.iter_mut().find(|r| r.name == name) {
            Some(record) => {
                record.arrival_date = Some(format_arrival(&arrival));
                false
            }
            None => {
                info!("Creating new catastrophe {:?}", name);
                self.records.push(CatastropheRecord::new(name, arrival));
                true
            }
        }
    }

    /// Insert `record`, replacing any record with the same name. Returns
    /// true when it was new.
    pub fn put(&mut self, record: CatastropheRecord) -> bool {
        match self.records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => {
                *existing = record;
                false
            }
            None => {
                self.records.push(record);
                true
            }
        }
    }
}
