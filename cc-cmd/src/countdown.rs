use crate::catalog::CatalogFile;
use cc_core::{Action, CatastropheRecord, ClockModel, ClockView};
use chrono::Utc;
use log::info;
use std::io::Write;
use std::time::Duration;

/// Where the terminal clock reads its listing from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Catalog(String),
    Url(String),
}

async fn fetch(source: &Source) -> anyhow::Result<Vec<CatastropheRecord>> {
    match source {
        Source::Catalog(path) => Ok(CatalogFile::load(path)?.into_records()),
        Source::Url(url) => {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()?;
            Ok(cc_core::source::fetch_all(&client, url).await?)
        }
    }
}

fn apply(model: &mut ClockModel, action: Action) {
    for diagnostic in model.apply(action, Utc::now()) {
        diagnostic.log();
    }
}

fn heading(view: &ClockView) -> String {
    if view.description.is_empty() {
        view.chooser_label.clone()
    } else {
        format!("{}: {}", view.chooser_label, view.description)
    }
}

/// Print the clock once a second until `ticks` run out, or forever.
pub async fn run_countdown(source: Source, name: &str, ticks: Option<u64>) -> anyhow::Result<()> {
    let mut model = ClockModel::new(name);
    match fetch(&source).await {
        Ok(records) => apply(&mut model, Action::FetchSucceeded(records)),
        Err(e) => apply(&mut model, Action::FetchFailed(format!("{:#}", e))),
    }
    info!("{}", heading(&model.view()));

    let mut interval = tokio::time::interval(Duration::from_millis(1000));
    interval.tick().await;
    let mut stdout = std::io::stdout();
    let mut elapsed = 0;
    loop {
        write!(stdout, "\r{}", model.view().clock)?;
        stdout.flush()?;
        if ticks.is_some_and(|limit| elapsed >= limit) {
            break;
        }
        interval.tick().await;
        apply(&mut model, Action::Tick);
        elapsed += 1;
    }
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("cc-cmd-countdown-{}-{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    #[tokio::test]
    async fn test_missing_catalog_counts_down_placeholder() {
        let result = run_countdown(Source::Catalog(scratch("none.json")), "Nothing", Some(0)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_from_catalog_file() {
        let path = scratch("fetch.json");
        std::fs::write(
            &path,
            r#"[{"name": "Miami sinks", "arrival_date": "2473-05-02T00:00:00Z"}]"#,
        )
        .unwrap();
        let records = fetch(&Source::Catalog(path.clone())).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Miami sinks");
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_heading() {
        let mut model = ClockModel::new("Miami sinks");
        let mut record = CatastropheRecord::new("Miami sinks", Utc::now());
        record.description = "Wet.".to_string();
        model.apply(Action::FetchSucceeded(vec![record]), Utc::now());
        assert_eq!(heading(&model.view()), "Miami sinks: Wet.");
    }

    #[test]
    fn test_heading_without_description() {
        let mut model = ClockModel::new("Miami sinks");
        let record = CatastropheRecord::new("Miami sinks", Utc::now());
        model.apply(Action::FetchSucceeded(vec![record]), Utc::now());
        assert_eq!(heading(&model.view()), "Miami sinks");
    }
}
