//! Global mean sea level series and the "Miami sinks" estimate.

use crate::error::{ForecastError, Result};
use crate::regression::LinearFit;
use chrono::{Datelike, Duration, NaiveDate};
use log::debug;

#[cfg(feature = "api")]
use reqwest::{Client, StatusCode};

/// NASA satellite altimetry GMSL data file.
pub const GMSL_URL: &str =
    "http://climate.nasa.gov/system/internal_resources/details/original/121_Global_Sea_Level_Data_File.txt";

/// Average elevation of Miami above sea level, in millimetres.
pub const MIAMI_ELEVATION_MM: f64 = 1828.0;

/// Marker present on every header line of the GMSL file.
const HEADER_MARKER: &str = "HDR";

/// Whitespace column holding the decimal year.
const YEAR_COLUMN: usize = 2;
/// Whitespace column holding smoothed GMSL (GIA applied, seasonal signal removed), mm.
const GMSL_COLUMN: usize = 11;

/// One altimetry cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeaLevelSample {
    /// Decimal calendar year, e.g. `1993.0115571`
    pub year: f64,
    pub gmsl_mm: f64,
}

/// Parse the GMSL text file.
///
/// Everything before the first header line is preamble; header lines are
/// skipped; data lines that do not carry both columns are skipped.
pub fn parse_gmsl(text: &str) -> Result<Vec<SeaLevelSample>> {
    let mut header_seen = false;
    let mut samples = Vec::new();
    for line in text.lines() {
        if line.contains(HEADER_MARKER) {
            header_seen = true;
            continue;
        }
        if !header_seen {
            continue;
        }
        let columns: Vec<&str> = line.split_whitespace().collect();
        let parsed = columns
            .get(YEAR_COLUMN)
            .and_then(|s| s.parse::<f64>().ok())
            .zip(columns.get(GMSL_COLUMN).and_then(|s| s.parse::<f64>().ok()));
        match parsed {
            Some((year, gmsl_mm)) => samples.push(SeaLevelSample { year, gmsl_mm }),
            None => debug!("couldn't parse {:?}", line),
        }
    }
    if samples.is_empty() {
        return Err(ForecastError::NoUsableData(
            "no sea level rows after header".to_string(),
        ));
    }
    Ok(samples)
}

/// Sea level (mm) against decimal year.
pub fn fit_trend(samples: &[SeaLevelSample]) -> Result<LinearFit> {
    let years: Vec<f64> = samples.iter().map(|s| s.year).collect();
    let levels: Vec<f64> = samples.iter().map(|s| s.gmsl_mm).collect();
    LinearFit::fit(&years, &levels)
}

/// Date the trend reaches `elevation_mm`.
pub fn submersion_date(fit: &LinearFit, elevation_mm: f64) -> Result<NaiveDate> {
    if fit.slope <= 0.0 {
        return Err(ForecastError::Degenerate("sea level is not rising"));
    }
    let decimal_year = fit.solve(elevation_mm)?;
    debug!("decimal year submerged is {}", decimal_year);
    decimal_year_to_date(decimal_year)
}

/// Rough alternative: today plus `elevation / rate` years of 365 days.
pub fn alternate_submersion_date(
    fit: &LinearFit,
    elevation_mm: f64,
    today: NaiveDate,
) -> Result<NaiveDate> {
    if fit.slope <= 0.0 {
        return Err(ForecastError::Degenerate("sea level is not rising"));
    }
    let days = 365.0 * elevation_mm / fit.slope;
    Duration::try_days(days.floor() as i64)
        .and_then(|offset| today.checked_add_signed(offset))
        .ok_or(ForecastError::DateOutOfRange(days))
}

/// Convert `2020.5` to the day half-way through 2020.
pub fn decimal_year_to_date(decimal_year: f64) -> Result<NaiveDate> {
    let whole = decimal_year.floor();
    if !whole.is_finite() || whole < i32::MIN as f64 || whole > i32::MAX as f64 {
        return Err(ForecastError::DateOutOfRange(decimal_year));
    }
    let year = whole as i32;
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or(ForecastError::DateOutOfRange(decimal_year))?;
    let next = NaiveDate::from_ymd_opt(year + 1, 1, 1)
        .ok_or(ForecastError::DateOutOfRange(decimal_year))?;
    let days_in_year = (next - start).num_days() as f64;
    let offset = ((decimal_year - whole) * days_in_year).floor() as i64;
    let date = start + Duration::days(offset);
    debug_assert_eq!(date.year(), year);
    Ok(date)
}

/// Download the GMSL text file.
#[cfg(feature = "api")]
pub async fn fetch_gmsl(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    if response.status() != StatusCode::OK {
        return Err(ForecastError::HttpStatus {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    Ok(response.text().await?)
}
