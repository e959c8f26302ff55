use crate::catalog::CatalogFile;
use crate::CALIFORNIA_DRIES_UP;
use anyhow::Context;
use cc_forecast::stations::Station;
use cc_forecast::storage::{total_storage, zero_date};
use chrono::{Local, NaiveDate, NaiveTime};
use log::{info, warn};
use std::collections::HashMap;
use std::time::Duration;

/// Pause between per-station requests to avoid overloading CDEC.
const REQUEST_DELAY_MILLIS: u64 = 500;

pub async fn run_dry_up(
    catalog_path: &str,
    start_date: &str,
    stations_csv: Option<&str>,
) -> anyhow::Result<()> {
    info!("Fetching reservoir levels & updating catastrophe catalog...");
    let start_date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .with_context(|| format!("invalid start date {:?}", start_date))?;
    let end_date = Local::now().date_naive();

    let stations = match stations_csv {
        Some(path) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path))?;
            Station::parse_station_csv(&body)?
        }
        None => Station::get_station_vector()?,
    };
    info!("Querying {} stations from {} to {}", stations.len(), start_date, end_date);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;

    let mut storage = HashMap::new();
    for station in &stations {
        match station
            .get_daily_storage(&client, &start_date, &end_date)
            .await
        {
            Some(samples) => {
                info!("{}: {} observations", station.station_id, samples.len());
                storage.insert(station.station_id.clone(), samples);
            }
            None => warn!(
                "Unable to get storage data for {} ({})",
                station.station_id, station.dam
            ),
        }
        tokio::time::sleep(Duration::from_millis(REQUEST_DELAY_MILLIS)).await;
    }
    if storage.is_empty() {
        anyhow::bail!("no station returned storage data");
    }

    let totals = total_storage(&storage);
    let zero = zero_date(&totals)?;
    info!("Based on current rates the reservoirs will dry up on: {}", zero);

    let mut catalog = CatalogFile::load(catalog_path)?;
    catalog.upsert_arrival(CALIFORNIA_DRIES_UP, zero.and_time(NaiveTime::MIN).and_utc());
    catalog.save()
}
