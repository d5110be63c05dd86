use pkgtrend::assign::{ColorAssigner, FixedDraws};
use pkgtrend::models::{HistoricalDataset, Point, series_count};
use pkgtrend::{Palette, build_series, chart_data, collect_labels};
use std::collections::BTreeSet;

fn dataset(json: &str) -> HistoricalDataset {
    serde_json::from_str(json).unwrap()
}

fn mixed() -> HistoricalDataset {
    dataset(
        r#"{
            "ember-source": {
                "5": { "2023-W10": 40, "2023-W08": 12, "2023-W09": 30 },
                "4": { "2023-W08": 900, "2023-W09": 850 }
            },
            "ember-data": {
                "5": { "2023-W11": 3 },
                "3": {}
            },
            "@glimmer/component": {
                "1": { "2022-W52": 1, "2023-W08": 2 }
            }
        }"#,
    )
}

#[test]
fn labels_are_strictly_ascending_union_of_buckets() {
    let ds = mixed();
    let labels = collect_labels(&ds);

    assert!(labels.windows(2).all(|w| w[0] < w[1]));

    let union: BTreeSet<String> = ds
        .values()
        .flat_map(|v| v.values())
        .flat_map(|t| t.keys().cloned())
        .collect();
    let got: BTreeSet<String> = labels.iter().cloned().collect();
    assert_eq!(got, union);
    assert_eq!(labels.len(), union.len());
    assert_eq!(labels.first().map(String::as_str), Some("2022-W52"));
}

#[test]
fn one_series_per_pair_in_input_order() {
    let ds = mixed();
    let palette = Palette::default();
    let mut assigner = ColorAssigner::new(&ds, &palette, FixedDraws::new([0.5]));
    let series = build_series(&ds, &mut assigner);

    assert_eq!(series.len(), series_count(&ds));
    assert_eq!(series.len(), 5);
    let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "ember-source @ 5.x",
            "ember-source @ 4.x",
            "ember-data @ 5.x",
            "ember-data @ 3.x",
            "@glimmer/component @ 1.x",
        ]
    );
}

#[test]
fn points_preserve_every_entry_in_series_order() {
    let ds = mixed();
    let chart = chart_data(&ds, &Palette::default(), FixedDraws::new([0.1, 0.9]));

    let mut idx = 0;
    for versions in ds.values() {
        for buckets in versions.values() {
            let expected: Vec<Point> = buckets
                .iter()
                .map(|(w, c)| Point::new(w.as_str(), *c))
                .collect();
            assert_eq!(chart.datasets[idx].points, expected);
            idx += 1;
        }
    }
    // not re-sorted: W10 stays ahead of W08
    assert_eq!(chart.datasets[0].points[0], Point::new("2023-W10", 40));
}

#[test]
fn single_package_scenario() {
    let ds = dataset(r#"{ "pkg-a": { "1": { "2023-W01": 5, "2023-W02": 7 } } }"#);
    let palette = Palette::default();
    let chart = chart_data(&ds, &palette, FixedDraws::new([0.9, 0.9]));

    assert_eq!(chart.labels, ["2023-W01", "2023-W02"]);
    assert_eq!(chart.datasets.len(), 1);
    let s = &chart.datasets[0];
    assert_eq!(s.label, "pkg-a @ 1.x");
    assert_eq!(
        s.points,
        [Point::new("2023-W01", 5), Point::new("2023-W02", 7)]
    );
    assert_eq!(s.color, palette.pick(0));
    assert_eq!(s.color.to_string(), "rgb(68, 114, 196)");
}

#[test]
fn empty_dataset_yields_nothing_and_draws_nothing() {
    let ds = HistoricalDataset::new();
    let palette = Palette::default();
    let mut draws = FixedDraws::new([0.3]);
    let mut assigner = ColorAssigner::new(&ds, &palette, &mut draws);

    assert!(collect_labels(&ds).is_empty());
    assert!(build_series(&ds, &mut assigner).is_empty());
    assert_eq!(assigner.assigned(), 0);
    assert_eq!(draws.taken(), 0);

    let chart = chart_data(&ds, &palette, FixedDraws::default());
    assert!(chart.is_empty());
    assert!(chart.labels.is_empty());
}
