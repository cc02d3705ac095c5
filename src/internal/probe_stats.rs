#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::print_stdout)]

use plotters::prelude::*;
use probemap::{Linear, MapConfig, OpenMap, Probe, Quadratic};
use rand::Rng;
use std::error::Error;

// Prime, so the table is used at exactly this size
const TABLE_SIZE: usize = 4_999;
// Load factors from 0.1 to 0.95 in this many steps
const NUM_LOAD_FACTORS: usize = 10;

const METHODS: [&str; 2] = ["Linear Probing", "Quadratic Probing"];

/// Probe statistics for one fill of one table
#[derive(Debug, Clone, Copy)]
struct Sample {
    average: f64,
    worst: usize,
    capacity: usize,
}

// Fill a table up to `load_factor` and probe every inserted key once
fn measure<P: Probe>(keys: &[u64], load_factor: f64) -> Result<Sample, probemap::Error> {
    // a load factor of 1.0 keeps the table at TABLE_SIZE unless a probe walk is exhausted
    let config = MapConfig::new().initial_capacity(TABLE_SIZE).load_factor(1.0);
    let mut map: OpenMap<u64, u64, P> = OpenMap::with_config(config)?;

    let n_keys = (TABLE_SIZE as f64 * load_factor) as usize;
    let inserted = keys.get(..n_keys).unwrap_or(keys);

    for &key in inserted {
        map.put(key, key);
    }

    let probes: Vec<usize> = inserted.iter().map(|key| map.probe_count(key)).collect();
    let average = probes.iter().sum::<usize>() as f64 / probes.len().max(1) as f64;
    let worst = probes.iter().copied().max().unwrap_or(0);

    Ok(Sample { average, worst, capacity: map.capacity() })
}

fn labelled(data: Vec<Vec<(f64, f64)>>) -> Vec<(&'static str, Vec<(f64, f64)>)> {
    METHODS.iter().copied().zip(data).collect()
}

fn draw_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    series: &[(&str, Vec<(f64, f64)>)],
) -> Result<(), Box<dyn Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
    ];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|&(_, y)| y))
        .fold(1.0, f64::max) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0.0..1.0, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor")
        .y_desc(y_desc)
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for ((label, points), color) in series.iter().zip(colors.iter().cycle()) {
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(points.iter().copied(), line_style))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            points.iter().map(|&point| Circle::new(point, marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    println!("Table size: {TABLE_SIZE}");
    println!("Load factors: {load_factors:?}");

    // Generate random keys once so both methods see the same input
    let mut rng = rand::rng();
    let keys: Vec<u64> = (0..TABLE_SIZE).map(|_| rng.random()).collect();

    let mut averages: Vec<Vec<(f64, f64)>> = vec![Vec::new(); METHODS.len()];
    let mut worsts: Vec<Vec<(f64, f64)>> = vec![Vec::new(); METHODS.len()];

    for &load_factor in &load_factors {
        println!("Testing at load factor {load_factor:.2}");

        let samples =
            [measure::<Linear>(&keys, load_factor)?, measure::<Quadratic>(&keys, load_factor)?];

        for (((method, sample), average), worst) in
            METHODS.iter().zip(samples).zip(&mut averages).zip(&mut worsts)
        {
            average.push((load_factor, sample.average));
            worst.push((load_factor, sample.worst as f64));

            println!(
                "  {method}: Avg probes = {:.2}, Worst = {}, Final capacity = {}",
                sample.average, sample.worst, sample.capacity
            );
        }
    }

    draw_chart(
        "average_probes.png",
        "Average Probes per Lookup",
        "Average Probes",
        &labelled(averages),
    )?;
    draw_chart(
        "worst_case_probes.png",
        "Worst-Case Probes per Lookup",
        "Worst-Case Probes",
        &labelled(worsts),
    )?;

    println!("Generated plot images: average_probes.png, worst_case_probes.png");

    Ok(())
}
