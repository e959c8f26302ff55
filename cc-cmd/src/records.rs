use crate::catalog::CatalogFile;
use cc_core::catastrophe::{format_arrival, parse_arrival};
use cc_core::{CatastropheRecord, RemainingDuration};
use chrono::{DateTime, Utc};
use log::info;

/// Build a record, rejecting arrival dates that would freeze the clock.
pub fn build_record(
    name: &str,
    arrival_date: &str,
    description: &str,
    more_info: &str,
) -> anyhow::Result<CatastropheRecord> {
    if name.trim().is_empty() {
        anyhow::bail!("catastrophe name must not be empty");
    }
    let arrival = parse_arrival(arrival_date)
        .ok_or_else(|| anyhow::anyhow!("invalid arrival date {:?}", arrival_date))?;
    Ok(CatastropheRecord {
        name: name.to_string(),
        arrival_date: Some(format_arrival(&arrival)),
        description: description.to_string(),
        more_info: more_info.to_string(),
    })
}

pub fn run_add(
    catalog_path: &str,
    name: &str,
    arrival_date: &str,
    description: &str,
    more_info: &str,
) -> anyhow::Result<()> {
    let record = build_record(name, arrival_date, description, more_info)?;
    let mut catalog = CatalogFile::load(catalog_path)?;
    if catalog.put(record) {
        info!("Added {:?}", name);
    } else {
        info!("Replaced {:?}", name);
    }
    catalog.save()
}

/// One listing row: name, arrival, and the clock as it reads at `now`.
pub fn describe(record: &CatastropheRecord, now: DateTime<Utc>) -> String {
    let arrival = record.arrival_date.as_deref().unwrap_or("-");
    let clock = match record.arrival() {
        Ok(arrival) => RemainingDuration::derive(arrival, now).render(),
        Err(e) => format!("({})", e),
    };
    format!("{:<28} {:<22} {}", record.name, arrival, clock)
}

pub fn run_list(catalog_path: &str) -> anyhow::Result<()> {
    let catalog = CatalogFile::load(catalog_path)?;
    let now = Utc::now();
    for record in catalog.records() {
        println!("{}", describe(record, now));
    }
    Ok(())
}
