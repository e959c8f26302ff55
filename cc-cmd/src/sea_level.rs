use crate::catalog::CatalogFile;
use crate::MIAMI_SINKS;
use cc_forecast::sea_level::{
    alternate_submersion_date, fetch_gmsl, fit_trend, parse_gmsl, submersion_date,
};
use chrono::{Local, NaiveTime};
use log::info;
use std::time::Duration;

pub async fn run_sea_level(catalog_path: &str, url: &str, elevation_mm: f64) -> anyhow::Result<()> {
    info!("Fetching sea level & updating catastrophe catalog...");
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;
    let text = fetch_gmsl(&client, url).await?;
    let samples = parse_gmsl(&text)?;
    info!("{} sea level samples", samples.len());

    let fit = fit_trend(&samples)?;
    info!("Sea level rising {:.3} mm/year", fit.slope);

    let date = submersion_date(&fit, elevation_mm)?;
    info!("Miami will be submerged on: {}", date);
    let alternate = alternate_submersion_date(&fit, elevation_mm, Local::now().date_naive())?;
    info!("Alternate date for submersion is: {}", alternate);

    let mut catalog = CatalogFile::load(catalog_path)?;
    catalog.upsert_arrival(MIAMI_SINKS, date.and_time(NaiveTime::MIN).and_utc());
    catalog.save()
}
