//! Reservoir storage series and the "dries up" estimate.

use crate::error::{ForecastError, Result};
use crate::regression::LinearFit;
use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, StringRecord};
use std::collections::{BTreeMap, HashMap};

/// Date format used for CDEC CSV responses: "YYYYMMDD HHMM"
pub const DATE_FORMAT: &str = "%Y%m%d %H%M";

/// Expected number of columns in a CDEC CSV row.
pub const CSV_ROW_LENGTH: usize = 9;

/// One day's storage at one station, in acre-feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StorageSample {
    pub date: NaiveDate,
    pub level_af: i64,
}

impl TryFrom<&StringRecord> for StorageSample {
    type Error = ();

    /// Rows with a status code (`BRT`, `ART`) or a dash instead of a number
    /// carry no storage and are rejected.
    fn try_from(record: &StringRecord) -> std::result::Result<Self, Self::Error> {
        if record.len() != CSV_ROW_LENGTH {
            return Err(());
        }
        let date = record
            .get(5)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
            .ok_or(())?;
        let level_af = record
            .get(6)
            .and_then(|s| s.trim().parse::<i64>().ok())
            .ok_or(())?;
        Ok(StorageSample { date, level_af })
    }
}

/// Parse a CDEC `CSVDataServlet` storage response.
///
/// Header: `STATION_ID,DURATION,SENSOR_NUMBER,SENSOR_TYPE,DATE TIME,OBS DATE,VALUE,DATA_FLAG,UNITS`
pub fn parse_storage_csv(body: &str) -> Result<Vec<StorageSample>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());
    let mut samples = Vec::new();
    for record in rdr.records() {
        if let Ok(sample) = StorageSample::try_from(&record?) {
            samples.push(sample);
        }
    }
    if samples.is_empty() {
        return Err(ForecastError::NoUsableData(
            "no numeric storage values in response".to_string(),
        ));
    }
    samples.sort();
    Ok(samples)
}

/// Statewide storage per date: the sum of the values stations reported on
/// that date. A station that skipped a date contributes nothing to it.
pub fn total_storage(stations: &HashMap<String, Vec<StorageSample>>) -> BTreeMap<NaiveDate, i64> {
    let mut totals = BTreeMap::new();
    for sample in stations.values().flatten() {
        *totals.entry(sample.date).or_insert(0) += sample.level_af;
    }
    totals
}

/// Date the storage trend reaches zero.
///
/// Storage is regressed on the day ordinal; the trend must be falling.
pub fn zero_date(totals: &BTreeMap<NaiveDate, i64>) -> Result<NaiveDate> {
    let xs: Vec<f64> = totals
        .keys()
        .map(|d| d.num_days_from_ce() as f64)
        .collect();
    let ys: Vec<f64> = totals.values().map(|v| *v as f64).collect();
    let fit = LinearFit::fit(&xs, &ys)?;
    if fit.slope >= 0.0 {
        return Err(ForecastError::RateNotNegative(fit.slope));
    }
    let zero_ordinal = fit.solve(0.0)?.trunc();
    if zero_ordinal < i32::MIN as f64 || zero_ordinal > i32::MAX as f64 {
        return Err(ForecastError::DateOutOfRange(zero_ordinal));
    }
    NaiveDate::from_num_days_from_ce_opt(zero_ordinal as i32)
        .ok_or(ForecastError::DateOutOfRange(zero_ordinal))
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://cdec.water.ca.gov/dynamicapp/req/CSVDataServlet?Stations=VIL&SensorNums=15&dur_code=D&Start=2022-02-15&End=2022-02-20
    const STR_RESULT: &str = r#"STATION_ID,DURATION,SENSOR_NUMBER,SENSOR_TYPE,DATE TIME,OBS DATE,VALUE,DATA_FLAG,UNITS
VIL,D,15,STORAGE,20220215 0000,20220215 0000,9593, ,AF
VIL,D,15,STORAGE,20220216 0000,20220216 0000,---, ,AF
VIL,D,15,STORAGE,20220217 0000,20220217 0000,9589, ,AF
VIL,D,15,STORAGE,20220218 0000,20220218 0000,BRT, ,AF
VIL,D,15,STORAGE,20220219 0000,20220219 0000,9585, ,AF
VIL,D,15,STORAGE,20220220 0000,20220220 0000,9581, ,AF
"#;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 2, d).unwrap()
    }

    #[test]
    fn test_parse_storage_csv_skips_non_numeric() {
        let samples = parse_storage_csv(STR_RESULT).unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(
            samples[0],
            StorageSample {
                date: day(15),
                level_af: 9593
            }
        );
        assert_eq!(samples[3].date, day(20));
    }

    #[test]
    fn test_parse_storage_csv_without_values() {
        let body = "STATION_ID,DURATION,SENSOR_NUMBER,SENSOR_TYPE,DATE TIME,OBS DATE,VALUE,DATA_FLAG,UNITS\n\
                    VIL,D,15,STORAGE,20220215 0000,20220215 0000,---, ,AF\n";
        assert!(matches!(
            parse_storage_csv(body),
            Err(ForecastError::NoUsableData(_))
        ));
    }

    #[test]
    fn test_total_storage_sums_reported_values() {
        let mut stations = HashMap::new();
        stations.insert(
            "AAA".to_string(),
            vec![
                StorageSample { date: day(1), level_af: 100 },
                StorageSample { date: day(2), level_af: 90 },
                StorageSample { date: day(3), level_af: 80 },
            ],
        );
        stations.insert(
            "BBB".to_string(),
            vec![
                StorageSample { date: day(2), level_af: 1000 },
            ],
        );
        let totals = total_storage(&stations);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals.get(&day(1)), Some(&100));
        assert_eq!(totals.get(&day(2)), Some(&1090));
        // BBB did not report on day 3, so only AAA counts
        assert_eq!(totals.get(&day(3)), Some(&80));
    }

    #[test]
    fn test_zero_date_from_falling_trend() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let totals: BTreeMap<NaiveDate, i64> = (0..10)
            .map(|i| (start + chrono::Duration::days(i), 1005 - 10 * i))
            .collect();
        let expected = start + chrono::Duration::days(100);
        assert_eq!(zero_date(&totals).unwrap(), expected);
    }

    #[test]
    fn test_zero_date_rejects_rising_trend() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let totals: BTreeMap<NaiveDate, i64> = (0..10)
            .map(|i| (start + chrono::Duration::days(i), 1000 + 10 * i))
            .collect();
        assert!(matches!(
            zero_date(&totals),
            Err(ForecastError::RateNotNegative(_))
        ));
    }
}
