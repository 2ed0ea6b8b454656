// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot demos for `dicp_geometry`.
//!
//! Builds the DICP and parallel coordinate geometry for a small embedded dataset and
//! writes each plot as an SVG file.

mod svg;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use dicp_geometry::{
    ClassColorTable, Dataset, DicpPlotSpec, PcpPlotSpec, PlotConfig, PlotInput,
};

/// Which plots to write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlotKind {
    /// Detail-in-Context Parallel plot only.
    Dicp,
    /// Parallel coordinate plot only.
    Pcp,
    /// Both plots.
    Both,
}

/// Draw DICP and parallel coordinate plots of a small iris sample.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Plots to render.
    #[arg(long, value_enum, default_value_t = PlotKind::Both)]
    plot: PlotKind,
    /// Directory to write SVG files into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Canvas width and height in pixels.
    #[arg(long, default_value_t = 600.0)]
    size: f64,
    /// Half-width of the plot region in clip space.
    #[arg(long, default_value_t = dicp_geometry::DEFAULT_EXTENT)]
    extent: f64,
}

/// Sepal length, sepal width, petal length, petal width; grouped by species.
const IRIS: [[f64; 4]; 12] = [
    [5.1, 3.5, 1.4, 0.2],
    [4.9, 3.0, 1.4, 0.2],
    [4.7, 3.2, 1.3, 0.2],
    [5.0, 3.6, 1.4, 0.2],
    [7.0, 3.2, 4.7, 1.4],
    [6.4, 3.2, 4.5, 1.5],
    [6.9, 3.1, 4.9, 1.5],
    [5.5, 2.3, 4.0, 1.3],
    [6.3, 3.3, 6.0, 2.5],
    [5.8, 2.7, 5.1, 1.9],
    [7.1, 3.0, 5.9, 2.1],
    [6.5, 3.0, 5.8, 2.2],
];
const IRIS_LABELS: [usize; 12] = [0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2];
const IRIS_COLUMNS: [&str; 4] = ["sepal_length", "sepal_width", "petal_length", "petal_width"];

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let columns = IRIS_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    let dataset = Dataset::from_rows(columns, IRIS)?;
    let input = PlotInput::with_labels(&dataset, 3, &IRIS_LABELS)?;
    let config = PlotConfig::new().with_extent(args.extent);
    let colors = ClassColorTable::categorical();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create {}", args.out_dir.display()))?;

    if matches!(args.plot, PlotKind::Dicp | PlotKind::Both) {
        let spec = DicpPlotSpec::new(colors.clone()).with_config(config);
        let mut scene = svg::SvgScene::new(args.size);
        scene.push_geometry(&spec.axes_geometry()?, 1.5);
        scene.push_geometry(&spec.class_geometry(&input)?, 1.0);
        scene.push_labels(&spec.labels(), 14.0);
        write_svg(&args.out_dir.join("dicp.svg"), &scene)?;
    }

    if matches!(args.plot, PlotKind::Pcp | PlotKind::Both) {
        let spec = PcpPlotSpec::new(colors).with_config(config);
        let mut scene = svg::SvgScene::new(args.size);
        scene.push_geometry(&spec.axes_geometry(input.feature_count)?, 1.5);
        scene.push_geometry(&spec.class_geometry(&input)?, 1.0);
        scene.push_labels(&spec.labels(input.feature_count), 14.0);
        write_svg(&args.out_dir.join("pcp.svg"), &scene)?;
    }

    Ok(())
}

fn write_svg(path: &std::path::Path, scene: &svg::SvgScene) -> anyhow::Result<()> {
    std::fs::write(path, scene.to_svg_string())
        .with_context(|| format!("write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
