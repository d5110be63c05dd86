use crate::assign::{ColorAssigner, DrawSource};
use crate::models::{HistoricalDataset, Point, Series, series_count};
use log::debug;

/// Legend label for a (package, version) pair, e.g. `"ember-source @ 5.x"`.
pub fn series_label(package: &str, version: &str) -> String {
    format!("{package} @ {version}.x")
}

/// Flatten the dataset into one series per (package, version), in input order.
///
/// Points follow the time series' own order. Missing buckets are simply absent;
/// the shared label axis lines the series up.
pub fn build_series<D: DrawSource>(
    dataset: &HistoricalDataset,
    assigner: &mut ColorAssigner<'_, D>,
) -> Vec<Series> {
    let mut out = Vec::with_capacity(series_count(dataset));
    for (package, versions) in dataset {
        for (version, buckets) in versions {
            let color = assigner.color_for(package, version);
            let points = buckets
                .iter()
                .map(|(week, count)| Point::new(week.as_str(), *count))
                .collect();
            out.push(Series {
                label: series_label(package, version),
                color,
                points,
            });
        }
    }
    debug!(
        "built {} series from {} package(s)",
        out.len(),
        dataset.len()
    );
    out
}
