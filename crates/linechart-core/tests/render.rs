// File: crates/linechart-core/tests/render.rs
// Purpose: End-to-end rendering through the public API, including failure
// atomicity and pixel-level sanity checks on the exported PNG.

use linechart_core::{ChartConfig, ChartError, ChartSpec, LineChart};

fn spec_with(series: Vec<Vec<(f64, f64)>>) -> ChartSpec {
    ChartSpec { width: 600, height: 400, series, ..ChartSpec::default() }
}

#[test]
fn render_smoke_png() {
    let spec = ChartSpec {
        title: "Smoke".to_string(),
        x_label: "X".to_string(),
        y_label: "Y".to_string(),
        ..spec_with(vec![vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)]])
    };
    let chart = LineChart::new(ChartConfig::from_spec(spec));

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn degenerate_x_range_fails_before_writing() {
    // every point shares x = 5, so the x transform would divide by zero
    let chart = LineChart::new(ChartConfig::from_spec(spec_with(vec![vec![
        (5.0, 0.0),
        (5.0, 1.0),
        (5.0, 2.0),
    ]])));
    let out = std::path::PathBuf::from("target/test_out/degenerate.png");
    let _ = std::fs::remove_file(&out);

    let err = chart.render_to_png(&out).unwrap_err();
    assert!(matches!(&err, ChartError::DegenerateRange { .. }), "got {err}");
    assert!(!out.exists(), "failed render must not leave a file behind");
}

#[test]
fn no_data_and_no_bounds_is_degenerate() {
    let chart = LineChart::new(ChartConfig::from_spec(spec_with(Vec::new())));
    let err = chart.render_to_png_bytes().unwrap_err();
    assert!(matches!(err, ChartError::DegenerateRange { .. }));
}

#[test]
fn empty_series_with_explicit_bounds_still_renders() {
    let spec = ChartSpec {
        x_bounds: Some((0.0, 10.0)),
        y_bounds: Some((0.0, 5.0)),
        title: "Empty".to_string(),
        ..spec_with(Vec::new())
    };
    let bytes = LineChart::new(ChartConfig::from_spec(spec))
        .render_to_png_bytes()
        .expect("frame/axes/title render without data");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn first_series_is_stroked_red() {
    let chart = LineChart::new(ChartConfig::from_spec(spec_with(vec![vec![
        (0.0, 0.0),
        (10.0, 10.0),
    ]])));
    let bytes = chart.render_to_png_bytes().expect("render bytes");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    let red_pixels = img
        .pixels()
        .filter(|p| p.0[0] > 200 && p.0[1] < 80 && p.0[2] < 80)
        .count();
    assert!(red_pixels > 10, "expected a red polyline, found {red_pixels} red pixels");
}

#[test]
fn gridlines_render_inside_plot_area() {
    let spec = ChartSpec {
        x_gridlines: vec![2.5, 5.0, 7.5],
        y_gridlines: vec![2.5, 5.0, 7.5],
        ..spec_with(vec![vec![(0.0, 0.0), (10.0, 10.0)]])
    };
    let bytes = LineChart::new(ChartConfig::from_spec(spec))
        .render_to_png_bytes()
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
