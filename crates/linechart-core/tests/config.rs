// File: crates/linechart-core/tests/config.rs
// Purpose: Validate derived configuration: bounds, default tick synthesis,
// formatters, and palette handling.

use linechart_core::config::{format_plain, format_sig3};
use linechart_core::{ChartConfig, ChartSpec};

fn spec_with(series: Vec<Vec<(f64, f64)>>) -> ChartSpec {
    ChartSpec { series, ..ChartSpec::default() }
}

#[test]
fn bounds_are_tight_bounding_box_across_series() {
    let config = ChartConfig::from_spec(spec_with(vec![
        vec![(1.0, 5.0), (4.0, -2.0)],
        vec![(-3.0, 0.5), (9.0, 7.0)],
    ]));
    assert_eq!(config.x_min, -3.0);
    assert_eq!(config.x_max, 9.0);
    assert_eq!(config.y_min, -2.0);
    assert_eq!(config.y_max, 7.0);
}

#[test]
fn explicit_bounds_override_derived() {
    let mut spec = spec_with(vec![vec![(1.0, 1.0), (2.0, 2.0)]]);
    spec.x_bounds = Some((0.0, 100.0));
    let config = ChartConfig::from_spec(spec);
    assert_eq!(config.x_min, 0.0);
    assert_eq!(config.x_max, 100.0);
    // y still derived
    assert_eq!(config.y_min, 1.0);
    assert_eq!(config.y_max, 2.0);
}

#[test]
fn default_ticks_are_synthesized_evenly() {
    let config = ChartConfig::from_spec(spec_with(vec![vec![(0.0, 0.0), (10.0, 20.0)]]));

    assert_eq!(config.left.ticks.len(), 5);
    assert_eq!(config.bottom.ticks.len(), 6);

    for (i, tick) in config.left.ticks.iter().enumerate() {
        assert!((tick.location - i as f64 * 5.0).abs() < 1e-9);
        assert_eq!(tick.rotation, 0.0);
    }
    for (i, tick) in config.bottom.ticks.iter().enumerate() {
        assert!((tick.location - i as f64 * 2.0).abs() < 1e-9);
        assert!((tick.rotation - 17f64.to_radians()).abs() < 1e-12);
    }

    // paddings the tick sets bring with them
    assert_eq!(config.left.post_tick_label_padding, 5.0);
    assert_eq!(config.bottom.post_label_padding, 10.0);
    assert_eq!(config.bottom.post_tick_label_padding, 5.0);
}

#[test]
fn tick_labels_use_injected_formatters() {
    fn two_decimals(v: f64) -> String {
        format!("{v:.2}")
    }
    let mut spec = spec_with(vec![vec![(0.0, 0.0), (1.0, 1.0)]]);
    spec.format_x = two_decimals;
    spec.format_y = two_decimals;
    let config = ChartConfig::from_spec(spec);
    assert_eq!(config.bottom.ticks[0].label, "0.00");
    assert_eq!(config.bottom.ticks[5].label, "1.00");
    assert_eq!(config.left.ticks[2].label, "0.50");
}

#[test]
fn default_formatters() {
    assert_eq!(format_plain(2.5), "2.5");
    assert_eq!(format_plain(-10.0), "-10");
    assert_eq!(format_sig3(0.0), "0");
    assert_eq!(format_sig3(2.5), "2.5");
    assert_eq!(format_sig3(0.12345), "0.123");
    assert_eq!(format_sig3(1234.0), "1234");
}

#[test]
fn empty_spec_leaves_bounds_unset_and_no_ticks() {
    let config = ChartConfig::from_spec(ChartSpec::default());
    assert!(config.x_min > config.x_max);
    assert!(config.y_min > config.y_max);
    assert!(config.left.ticks.is_empty());
    assert!(config.bottom.ticks.is_empty());
}

#[test]
fn labels_land_on_their_borders() {
    let spec = ChartSpec {
        title: "Title".to_string(),
        x_label: "Time".to_string(),
        y_label: "Value".to_string(),
        ..spec_with(vec![vec![(0.0, 0.0), (1.0, 1.0)]])
    };
    let config = ChartConfig::from_spec(spec);
    assert_eq!(config.title, "Title");
    assert_eq!(config.bottom.label, "Time");
    assert_eq!(config.left.label, "Value");
    assert!(config.top.label.is_empty());
    assert!(config.right.label.is_empty());
}
