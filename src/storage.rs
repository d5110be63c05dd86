//! Reading download history and writing chart documents.
//!
//! Two input layouts are accepted:
//! - JSON: the nested `{ package: { version: { bucket: count } } }` object
//! - CSV: long format with a `package,version,week,count` header

use crate::chart::{ChartConfig, ChartDocument};
use crate::models::HistoricalDataset;
use anyhow::{Context, Result, bail};
use log::{debug, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Infer from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Some(InputFormat::Json),
            Some("csv") => Some(InputFormat::Csv),
            _ => None,
        }
    }
}

/// Load a dataset, using `format` when given and the extension otherwise.
pub fn load_dataset<P: AsRef<Path>>(path: P, format: Option<InputFormat>) -> Result<HistoricalDataset> {
    let path = path.as_ref();
    match format.or_else(|| InputFormat::from_path(path)) {
        Some(InputFormat::Json) => load_json(path),
        Some(InputFormat::Csv) => load_csv(path),
        None => bail!(
            "cannot infer input format of {} (use a .json or .csv extension)",
            path.display()
        ),
    }
}

/// Load the nested JSON layout. Object order is kept at every level.
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<HistoricalDataset> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let dataset: HistoricalDataset = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing {}", path.display()))?;
    debug!("loaded {} package(s) from {}", dataset.len(), path.display());
    Ok(dataset)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    package: String,
    version: String,
    week: String,
    count: u64,
}

/// Load the long CSV layout.
///
/// Packages, versions and buckets are ordered by first appearance. A repeated
/// (package, version, week) row replaces the earlier count in place. Rows with
/// an empty package, version or week are skipped.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<HistoricalDataset> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut dataset = HistoricalDataset::new();
    for (idx, rec) in rdr.deserialize::<CsvRow>().enumerate() {
        // header is line 1
        let line = idx + 2;
        let row = rec.with_context(|| format!("{}: line {}", path.display(), line))?;
        if row.package.is_empty() || row.version.is_empty() || row.week.is_empty() {
            warn!("{}: skipping line {} with an empty key", path.display(), line);
            continue;
        }
        dataset
            .entry(row.package)
            .or_default()
            .entry(row.version)
            .or_default()
            .insert(row.week, row.count);
    }
    debug!("loaded {} package(s) from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Load display options; fields missing from the file keep their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ChartConfig> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(f)).with_context(|| format!("parsing {}", path.display()))
}

/// Save a chart document as pretty JSON.
pub fn save_chart_json<P: AsRef<Path>>(doc: &ChartDocument<'_>, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let s = serde_json::to_string_pretty(doc)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
