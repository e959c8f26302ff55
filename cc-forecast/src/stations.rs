use crate::error::Result;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

#[cfg(feature = "api")]
use crate::storage::{parse_storage_csv, StorageSample};
#[cfg(feature = "api")]
use chrono::NaiveDate;
#[cfg(feature = "api")]
use log::{info, warn};
#[cfg(feature = "api")]
use reqwest::{Client, StatusCode};
#[cfg(feature = "api")]
use std::time::Duration;

/// Embedded CSV of the reservoirs summed into statewide storage.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/reservoirs.csv");

#[cfg(feature = "api")]
const YEAR_FORMAT: &str = "%Y-%m-%d";

/// CDEC sensor number for reservoir storage in acre-feet.
pub const STORAGE_SENSOR: u32 = 15;

/// A reservoir reporting storage to CDEC.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Station {
    pub station_id: String,
    pub dam: String,
}

impl Station {
    /// Fetch daily storage for this station, retrying with exponential
    /// backoff. Returns `None` when every attempt fails or the station has
    /// no usable values in the window.
    #[cfg(feature = "api")]
    pub async fn get_daily_storage(
        &self,
        client: &Client,
        start_date: &NaiveDate,
        end_date: &NaiveDate,
    ) -> Option<Vec<StorageSample>> {
        let max_tries = 3;
        let mut sleep_millis: u64 = 1000;
        let url = format!(
            "http://cdec.water.ca.gov/dynamicapp/req/CSVDataServlet?Stations={}&SensorNums={}&dur_code=D&Start={}&End={}",
            self.station_id,
            STORAGE_SENSOR,
            start_date.format(YEAR_FORMAT),
            end_date.format(YEAR_FORMAT)
        );

        for attempt in 1..=max_tries {
            match client.get(&url).send().await {
                Ok(response) if response.status() != StatusCode::OK => {
                    warn!(
                        "Attempt {}/{}: Bad response status for {}: {}",
                        attempt,
                        max_tries,
                        self.dam,
                        response.status()
                    );
                }
                Ok(response) => match response.text().await {
                    Ok(body) => {
                        return match parse_storage_csv(&body) {
                            Ok(samples) => Some(samples),
                            Err(e) => {
                                warn!(
                                    "Unable to get storage data for {} ({}): {}",
                                    self.dam, self.station_id, e
                                );
                                None
                            }
                        };
                    }
                    Err(e) => {
                        warn!(
                            "Attempt {}/{}: Failed to read response body for {}: {}",
                            attempt, max_tries, self.dam, e
                        );
                    }
                },
                Err(e) => {
                    warn!(
                        "Attempt {}/{}: Request failed for {}: {}",
                        attempt, max_tries, self.dam, e
                    );
                }
            }

            if attempt < max_tries {
                info!(
                    "Sleeping for {} milliseconds before retry for {}",
                    sleep_millis, self.dam
                );
                tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
                sleep_millis *= 2;
            }
        }

        warn!("All attempts failed for {}", self.dam);
        None
    }

    /// Stations from the embedded list.
    pub fn get_station_vector() -> Result<Vec<Station>> {
        Station::parse_station_csv(CSV_OBJECT)
    }

    /// Parse a CSV string of station metadata.
    ///
    /// Expected CSV columns: station_id, dam, lake, stream, capacity, fill_year.
    /// Only the first two are read.
    pub fn parse_station_csv(csv_object: &str) -> Result<Vec<Station>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        let mut station_list = Vec::new();
        for row in rdr.records() {
            let rho = row?;
            let field = |i: usize| rho.get(i).unwrap_or_default().trim().to_string();
            let station_id = field(0);
            if station_id.is_empty() {
                continue;
            }
            station_list.push(Station {
                station_id,
                dam: field(1),
            });
        }
        Ok(station_list)
    }
}
