// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use peniko::color::palette::css;

use crate::{ClassColorTable, Dataset, DicpPlotSpec, PcpPlotSpec, PlotConfig, PlotInput};

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| alloc::format!("x{i}")).collect()
}

fn two_class_table() -> ClassColorTable {
    ClassColorTable::new(vec![css::RED, css::BLUE])
}

#[test]
fn pcp_three_samples_two_classes() {
    let d = Dataset::from_rows(
        names(4),
        [[0.0, 0.0, 0.0, 0.0], [10.0, 10.0, 10.0, 10.0], [5.0, 5.0, 5.0, 5.0]],
    )
    .unwrap();
    let g = PcpPlotSpec::new(two_class_table())
        .class_geometry(&PlotInput::new(&d, 2, 4, 3, &[2, 1]))
        .unwrap();

    assert_eq!(g.vertices.len(), 12);
    let ys: Vec<f32> = g.vertices.iter().map(|v| v[1]).collect();
    assert!(ys[..4].iter().all(|&y| y == -0.8), "{ys:?}");
    assert!(ys[4..8].iter().all(|&y| y == 0.8), "{ys:?}");
    assert!(ys[8..].iter().all(|&y| y == 0.0), "{ys:?}");

    assert_eq!(g.colors.len(), 12);
    assert!(g.colors[..8].iter().all(|c| *c == [1.0, 0.0, 0.0]));
    assert!(g.colors[8..].iter().all(|c| *c == [0.0, 0.0, 1.0]));

    let (vertices, colors, offsets, counts) = g.into_parts();
    assert_eq!(vertices.len(), colors.len());
    assert_eq!(offsets, vec![0, 4, 8]);
    assert_eq!(counts, vec![4, 4, 4]);
}

#[test]
fn labelled_rows_match_counted_rows() {
    let d = Dataset::from_rows(
        names(4),
        [[1.0, 2.0, 3.0, 4.0], [2.0, 1.0, 0.0, 1.0], [9.0, 9.0, 1.0, 0.0]],
    )
    .unwrap();
    let spec = DicpPlotSpec::new(two_class_table());
    let counted = spec
        .class_geometry(&PlotInput::new(&d, 2, 4, 3, &[2, 1]))
        .unwrap();
    let labelled = spec
        .class_geometry(&PlotInput::with_labels(&d, 2, &[0, 0, 1]).unwrap())
        .unwrap();
    assert_eq!(counted, labelled);
}

#[test]
fn custom_extent_reaches_both_plot_variants() {
    let d = Dataset::from_rows(names(2), [[0.0, 1.0], [2.0, 3.0]]).unwrap();
    let config = PlotConfig::new().with_extent(1.0).with_axis_color(css::GRAY);
    let input = PlotInput::new(&d, 1, 2, 2, &[2]);

    let pcp = PcpPlotSpec::new(two_class_table()).with_config(config);
    let g = pcp.class_geometry(&input).unwrap();
    assert_eq!(g.vertices[0], [-1.0, -1.0, 0.0]);
    assert_eq!(g.vertices[3], [1.0, 1.0, 0.0]);
    let axes = pcp.axes_geometry(2).unwrap();
    assert_eq!(axes.colors[0], crate::rgb(css::GRAY));

    let dicp = DicpPlotSpec::new(two_class_table()).with_config(config);
    assert_eq!(dicp.axes_geometry().unwrap().vertices[1], [-1.0, 1.0]);
}
