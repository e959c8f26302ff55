use crate::error::{CatastropheError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Naive date-time layouts accepted for `arrival_date`, read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Date-only layout accepted for `arrival_date`, read as midnight UTC.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A catastrophe as served by the listing endpoint.
///
/// `arrival_date` is kept as the raw string so that one bad record does not
/// fail the whole listing; it is parsed when the clock is derived from it.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CatastropheRecord {
    pub name: String,
    #[serde(default)]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Markup, rendered without escaping
    #[serde(default)]
    pub more_info: String,
}

/// Paginated listing body, `{"count": .., "next": .., "previous": .., "results": [..]}`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<CatastropheRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
    Envelope(Envelope),
    Bare(Vec<CatastropheRecord>),
}

impl CatastropheRecord {
    pub fn new(name: impl Into<String>, arrival_date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            arrival_date: Some(format_arrival(&arrival_date)),
            description: String::new(),
            more_info: String::new(),
        }
    }

    /// The instant this catastrophe arrives.
    pub fn arrival(&self) -> Result<DateTime<Utc>> {
        match self.arrival_date.as_deref().map(str::trim) {
            None | Some("") => Err(CatastropheError::MissingArrival {
                name: self.name.clone(),
            }),
            Some(value) => parse_arrival(value).ok_or_else(|| CatastropheError::InvalidArrival {
                name: self.name.clone(),
                value: value.to_string(),
            }),
        }
    }
}

impl Envelope {
    pub fn new(results: Vec<CatastropheRecord>) -> Self {
        Self {
            count: results.len(),
            next: None,
            previous: None,
            results,
        }
    }
}

/// Parse an ISO-8601 arrival date.
///
/// Accepts RFC 3339, a naive date-time (UTC) or a bare date (midnight UTC).
pub fn parse_arrival(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format an arrival instant the way the listing endpoint serves it.
pub fn format_arrival(arrival: &DateTime<Utc>) -> String {
    arrival.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Parse a listing body, unwrapping the `results` envelope when present.
pub fn parse_listing(body: &str) -> Result<Vec<CatastropheRecord>> {
    match serde_json::from_str::<Listing>(body) {
        Ok(Listing::Envelope(envelope)) => Ok(envelope.results),
        Ok(Listing::Bare(records)) => Ok(records),
        Err(e) => Err(CatastropheError::ListingParse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(arrival_date: Option<&str>) -> CatastropheRecord {
        CatastropheRecord {
            name: "Miami sinks".to_string(),
            arrival_date: arrival_date.map(str::to_string),
            description: String::new(),
            more_info: String::new(),
        }
    }

    #[test]
    fn test_parse_listing_envelope() {
        let body = r#"{
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"url": "http://localhost/api/catastrophes/1/", "name": "California dries up",
                 "arrival_date": "2029-06-01T00:00:00Z", "description": "No water.",
                 "more_info": "<p>Reservoirs</p>"},
                {"name": "Miami sinks", "arrival_date": "2101-03-15T00:00:00Z",
                 "description": "Wet.", "more_info": ""}
            ]
        }"#;
        let records = parse_listing(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "California dries up");
        assert_eq!(records[0].more_info, "<p>Reservoirs</p>");
        assert_eq!(records[1].description, "Wet.");
    }

    #[test]
    fn test_parse_listing_bare_array() {
        let body = r#"[{"name": "Heat death", "arrival_date": "2100-01-01"}]"#;
        let records = parse_listing(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "");
        assert_eq!(records[0].more_info, "");
    }

    #[test]
    fn test_parse_listing_rejects_other_shapes() {
        assert!(matches!(
            parse_listing(r#"{"detail": "Not found."}"#),
            Err(CatastropheError::ListingParse(_))
        ));
        assert!(parse_listing("<html>").is_err());
    }

    #[test]
    fn test_arrival_formats() {
        let expected = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(record(Some("2030-01-02T03:04:05Z")).arrival(), Ok(expected));
        assert_eq!(record(Some("2030-01-02T05:04:05+02:00")).arrival(), Ok(expected));
        assert_eq!(record(Some("2030-01-02T03:04:05")).arrival(), Ok(expected));
        assert_eq!(record(Some("2030-01-02 03:04:05")).arrival(), Ok(expected));
        assert_eq!(
            record(Some("2030-01-02")).arrival(),
            Ok(Utc.with_ymd_and_hms(2030, 1, 2, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_arrival_missing_or_invalid() {
        assert_eq!(
            record(None).arrival(),
            Err(CatastropheError::MissingArrival {
                name: "Miami sinks".to_string()
            })
        );
        assert!(matches!(
            record(Some("  ")).arrival(),
            Err(CatastropheError::MissingArrival { .. })
        ));
        assert_eq!(
            record(Some("soon")).arrival(),
            Err(CatastropheError::InvalidArrival {
                name: "Miami sinks".to_string(),
                value: "soon".to_string()
            })
        );
    }

    #[test]
    fn test_envelope_counts_results() {
        let arrival = Utc.with_ymd_and_hms(2029, 6, 1, 0, 0, 0).unwrap();
        let envelope = Envelope::new(vec![CatastropheRecord::new("California dries up", arrival)]);
        assert_eq!(envelope.count, 1);
        let json = serde_json::to_string(&envelope).unwrap();
        let records = parse_listing(&json).unwrap();
        assert_eq!(records[0].arrival_date.as_deref(), Some("2029-06-01T00:00:00Z"));
    }
}
