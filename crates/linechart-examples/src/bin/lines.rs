// File: crates/linechart-examples/src/bin/lines.rs
// Summary: Minimal example that renders a titled two-series line chart to PNG.

use anyhow::Result;
use linechart_core::{ChartConfig, ChartSpec, LineChart};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let wave: Vec<(f64, f64)> = (0..=40)
        .map(|i| {
            let x = i as f64 * 0.25;
            (x, x.sin() + x * 0.1)
        })
        .collect();
    let trend: Vec<(f64, f64)> = (0..=40).map(|i| (i as f64 * 0.25, i as f64 * 0.04)).collect();

    let config = ChartConfig::from_spec(ChartSpec {
        width: 800,
        height: 500,
        title: "Example lines".to_string(),
        x_label: "Time".to_string(),
        y_label: "Value".to_string(),
        series: vec![wave, trend],
        ..ChartSpec::default()
    });

    let out = std::path::PathBuf::from("target/out/example_lines.png");
    LineChart::new(config).render_to_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
