//! Native client for the catastrophe listing endpoint.

use crate::catastrophe::{parse_listing, CatastropheRecord};
use crate::error::SourceError;
use log::info;
use reqwest::{Client, StatusCode};

/// Fetch and parse the listing at `url`, envelope or bare list.
///
/// One attempt only; the caller decides what a failure means.
pub async fn fetch_all(client: &Client, url: &str) -> Result<Vec<CatastropheRecord>, SourceError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| SourceError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if response.status() != StatusCode::OK {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    let body = response.text().await.map_err(|e| SourceError::Request {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let records = parse_listing(&body)?;
    info!("Fetched {} catastrophes from {}", records.len(), url);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unusable_url_is_a_request_error() {
        let client = Client::new();
        let result = fetch_all(&client, "not a url").await;
        assert!(matches!(result, Err(SourceError::Request { .. })));
    }
}
