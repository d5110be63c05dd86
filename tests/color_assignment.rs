use pkgtrend::assign::{ColorAssigner, ColorMode, FixedDraws, RngDraws};
use pkgtrend::color::{Color, OFFICE10};
use pkgtrend::models::HistoricalDataset;
use pkgtrend::{Palette, chart_data};

fn dataset(json: &str) -> HistoricalDataset {
    serde_json::from_str(json).unwrap()
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

#[test]
fn single_package_walks_the_palette_by_version_index() {
    let ds = dataset(r#"{ "solo": { "1": {}, "2": {}, "3": {} } }"#);
    let palette = Palette::default();
    let mut draws = FixedDraws::new([0.2, 0.8]);
    let mut a = ColorAssigner::new(&ds, &palette, &mut draws);

    assert_eq!(a.mode(), ColorMode::SinglePackage);
    assert_eq!(a.color_for("solo", "1"), OFFICE10[0]);
    assert_eq!(a.color_for("solo", "3"), OFFICE10[2]);
    assert_eq!(a.color_for("solo", "2"), OFFICE10[1]);
    // asking again gives the same answer
    assert_eq!(a.color_for("solo", "3"), OFFICE10[2]);
    assert_eq!(a.assigned(), 4);
    assert_eq!(draws.taken(), 0);
}

#[test]
fn single_package_wraps_past_palette_end() {
    let ds = dataset(r#"{ "solo": { "a": {}, "b": {}, "c": {} } }"#);
    let palette = Palette::parse_list("#FF0000,#00FF00").unwrap();
    let chart = chart_data(&ds, &palette, FixedDraws::default());
    let colors: Vec<Color> = chart.datasets.iter().map(|s| s.color).collect();
    assert_eq!(
        colors,
        [
            Color::rgb(255, 0, 0),
            Color::rgb(0, 255, 0),
            Color::rgb(255, 0, 0)
        ]
    );
}

#[test]
fn single_package_is_deterministic_across_renders() {
    let ds = dataset(
        r#"{ "solo": { "1": { "w1": 1 }, "2": { "w1": 2 }, "3": { "w2": 3 } } }"#,
    );
    let palette = Palette::default();
    let first = chart_data(&ds, &palette, RngDraws::thread());
    let second = chart_data(&ds, &palette, RngDraws::thread());
    assert_eq!(first, second);
}

#[test]
fn unknown_names_fall_back_to_first_palette_entry() {
    let ds = dataset(r#"{ "solo": { "1": {} } }"#);
    let palette = Palette::default();
    let mut a = ColorAssigner::new(&ds, &palette, FixedDraws::default());
    assert_eq!(a.color_for("other", "9"), OFFICE10[0]);
    assert_eq!(a.color_for("solo", "9"), OFFICE10[0]);
}

#[test]
fn multi_package_jitters_around_the_package_hue() {
    let ds = dataset(
        r#"{
            "blue-pkg": { "1": { "w": 1 }, "2": { "w": 2 } },
            "orange-pkg": { "1": { "w": 3 } }
        }"#,
    );
    let palette = Palette::default();

    for seed in 0..50 {
        let chart = chart_data(&ds, &palette, RngDraws::seeded(seed));
        let hues: Vec<f64> = chart.datasets.iter().map(|s| s.color.hue()).collect();
        assert!(hue_distance(hues[0], OFFICE10[0].hue()) < 4.0, "seed {seed}: {hues:?}");
        assert!(hue_distance(hues[1], OFFICE10[0].hue()) < 4.0, "seed {seed}: {hues:?}");
        assert!(hue_distance(hues[2], OFFICE10[1].hue()) < 4.0, "seed {seed}: {hues:?}");
    }
}

#[test]
fn multi_package_applies_the_drawn_steps() {
    let ds = dataset(r#"{ "a": { "1": {} }, "b": { "1": {}, "2": {} } }"#);
    let palette = Palette::default();
    // pairs of draws per series: (0.0, 0.0), (0.62, 0.22), (0.99, 0.5)
    let mut draws = FixedDraws::new([0.0, 0.0, 0.62, 0.22, 0.99, 0.5]);
    let mut a = ColorAssigner::new(&ds, &palette, &mut draws);

    assert_eq!(a.mode(), ColorMode::MultiPackage);
    assert_eq!(
        a.color_for("a", "1"),
        OFFICE10[0].saturate(0.1).lighten(0.1)
    );
    assert_eq!(
        a.color_for("b", "1"),
        OFFICE10[1].desaturate(0.4).lighten(0.2)
    );
    assert_eq!(
        a.color_for("b", "2"),
        OFFICE10[1].desaturate(0.5).darken(0.3)
    );
    assert_eq!(draws.taken(), 6);
}

#[test]
fn multi_package_shades_vary_between_renders() {
    let ds = dataset(r#"{ "a": { "1": {} }, "b": { "1": {} } }"#);
    let palette = Palette::default();
    let shades: std::collections::HashSet<Color> = (0..40)
        .map(|seed| chart_data(&ds, &palette, RngDraws::seeded(seed)).datasets[0].color)
        .collect();
    assert!(shades.len() > 1);
}

#[test]
fn package_index_wraps_in_multi_mode() {
    let ds = dataset(r#"{ "a": { "1": {} }, "b": { "1": {} }, "c": { "1": {} } }"#);
    let palette = Palette::parse_list("#4472C4,#ED7D31").unwrap();
    let chart = chart_data(&ds, &palette, FixedDraws::new([0.0, 0.0]));
    assert_eq!(chart.datasets[2].color, chart.datasets[0].color);
}
