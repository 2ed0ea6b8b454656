// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallel coordinate plot (PCP) geometry.
//!
//! Each feature owns a fixed vertical axis; each sample is a polyline that visits
//! every axis in feature order at the height of its globally normalized value.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::axes;
use crate::batch::Batches;
use crate::color::tile_class_colors;
use crate::config::PlotConfig;
use crate::dataset::PlotInput;
use crate::error::{GeometryError, ShapeError};
use crate::geometry::{Geometry, Primitive, to_f32};
use crate::labels::PlotLabels;
use crate::palette::{ClassColorTable, rgb};
use crate::scale::{linspace, normalize_in_place};

/// Title shown above a PCP plot.
pub const PCP_TITLE: &str = "Parallel Coordinate Plot";

/// Builds PCP data and axis geometry.
#[derive(Clone, Debug)]
pub struct PcpPlotSpec {
    /// Class colors, indexed by class.
    pub colors: ClassColorTable,
    /// Plot region and guide styling.
    pub config: PlotConfig,
}

impl PcpPlotSpec {
    /// Creates a builder with the default plot region.
    pub fn new(colors: ClassColorTable) -> Self {
        Self {
            colors,
            config: PlotConfig::default(),
        }
    }

    /// Sets the plot configuration.
    pub fn with_config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    /// Horizontal position of each feature axis, evenly spaced across the region.
    pub fn axis_x_positions(&self, feature_count: usize) -> Vec<f64> {
        let (lo, hi) = self.config.range();
        linspace(lo, hi, feature_count)
    }

    /// Generates one polyline per sample, with `z = 0`.
    ///
    /// Emits exactly `sample_count` batches of `feature_count` vertices.
    pub fn class_geometry(&self, input: &PlotInput<'_>) -> Result<Geometry<3>, GeometryError> {
        self.config.validate()?;
        input.validate(&self.colors)?;
        let f = input.feature_count;
        let batches = Batches::uniform(input.sample_count, f)?;

        let mut ys = input.dataset.arena().clone().into_values();
        normalize_in_place(&mut ys, self.config.range());
        let xs: Vec<f32> = self
            .axis_x_positions(f)
            .into_iter()
            .map(to_f32)
            .collect();

        let xs = xs.as_slice();
        let vertices: Vec<[f32; 3]> = ys
            .chunks_exact(f)
            .flat_map(move |row| row.iter().zip(xs).map(|(&y, &x)| [x, to_f32(y), 0.0]))
            .collect();
        let colors = tile_class_colors(&self.colors, &input.classes, f)?;

        log::debug!(
            "PCP geometry: {} samples, {} axes, {} classes",
            input.sample_count,
            f,
            input.class_count
        );
        Ok(Geometry {
            vertices,
            colors,
            batches,
            primitive: Primitive::LineStrip,
        })
    }

    /// One vertical guide per feature axis, spanning the plot region.
    pub fn axes_geometry(&self, feature_count: usize) -> Result<Geometry<3>, GeometryError> {
        self.config.validate()?;
        if feature_count == 0 {
            return Err(ShapeError::NonPositive {
                name: "feature_count",
            }
            .into());
        }
        let xs = self.axis_x_positions(feature_count);
        let segments = axes::parallel_axes(&xs, self.config.region());
        axes::segments_geometry(&segments, rgb(self.config.axis_color), embed_3d)
    }

    /// Title plus `X1..Xn` markers at the foot of each axis.
    pub fn labels(&self, feature_count: usize) -> PlotLabels {
        let xs = self.axis_x_positions(feature_count);
        PlotLabels::titled(PCP_TITLE).with_axis_markers(&xs, -self.config.extent)
    }
}

fn embed_3d(p: Point) -> [f32; 3] {
    [to_f32(p.x), to_f32(p.y), 0.0]
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;
    use crate::dataset::Dataset;

    fn spec() -> PcpPlotSpec {
        PcpPlotSpec::new(ClassColorTable::new(vec![css::RED, css::BLUE]))
    }

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| alloc::format!("x{i}")).collect()
    }

    #[test]
    fn x_positions_are_shared_and_increasing() {
        let d = Dataset::from_rows(names(3), [[3.0, 1.0, 2.0], [0.0, 5.0, 4.0]]).unwrap();
        let g = spec()
            .class_geometry(&PlotInput::new(&d, 2, 3, 2, &[1, 1]))
            .unwrap();
        let row0 = g.polyline(0).unwrap();
        let row1 = g.polyline(1).unwrap();
        for (a, b) in row0.iter().zip(row1) {
            assert_eq!(a[0], b[0]);
            assert_eq!(a[2], 0.0);
        }
        assert!(row0.windows(2).all(|w| w[0][0] < w[1][0]), "{row0:?}");
        assert_eq!(row0[0][0], -0.8);
        assert_eq!(row0[2][0], 0.8);
    }

    #[test]
    fn exactly_one_batch_per_sample() {
        let d = Dataset::from_rows(names(5), [[1.0; 5], [2.0; 5], [3.0; 5]]).unwrap();
        let g = spec()
            .class_geometry(&PlotInput::new(&d, 1, 5, 3, &[3]))
            .unwrap();
        assert_eq!(g.batches.len(), 3);
        assert_eq!(g.batches.offsets(), &[0, 5, 10]);
        assert_eq!(g.batches.total_vertices(), g.vertex_count());
    }

    #[test]
    fn constant_dataset_lies_on_the_midline() {
        let d = Dataset::from_rows(names(2), [[7.0, 7.0], [7.0, 7.0]]).unwrap();
        let g = spec()
            .class_geometry(&PlotInput::new(&d, 1, 2, 2, &[2]))
            .unwrap();
        assert!(g.vertices.iter().all(|v| v[1] == 0.0), "{:?}", g.vertices);
    }

    #[test]
    fn axes_drop_the_leading_point() {
        let g = spec().axes_geometry(3).unwrap();
        assert_eq!(
            g.vertices,
            vec![
                [-0.8, -0.8, 0.0],
                [-0.8, 0.8, 0.0],
                [0.0, -0.8, 0.0],
                [0.0, 0.8, 0.0],
                [0.8, -0.8, 0.0],
                [0.8, 0.8, 0.0],
            ]
        );
        assert_eq!(g.colors.len(), 6);
        assert_eq!(g.batches.offsets(), &[0, 2, 4]);
        assert_eq!(g.primitive, Primitive::Lines);
        assert!(spec().axes_geometry(0).is_err());
    }

    #[test]
    fn pooled_minimum_stays_at_the_low_end() {
        let d = Dataset::from_rows(names(2), [[0.0, 1.0], [2.0, 3.0]]).unwrap();
        let input = PlotInput::new(&d, 1, 2, 2, &[2]);
        assert_eq!(
            spec().class_geometry(&input).unwrap().vertices[0],
            [-0.8, -0.8, 0.0]
        );
        for extent in [-0.8, 0.0, f64::NAN] {
            let s = spec().with_config(PlotConfig::new().with_extent(extent));
            assert_eq!(
                s.class_geometry(&input),
                Err(ShapeError::InvalidExtent.into()),
                "extent {extent}"
            );
            assert!(s.axes_geometry(2).is_err(), "extent {extent}");
        }
    }

    #[test]
    fn markers_sit_under_each_axis() {
        let labels = spec().labels(2);
        assert_eq!(labels.title, PCP_TITLE);
        assert_eq!(labels.markers.len(), 2);
        assert_eq!(labels.markers[1].text, "X2");
        assert_eq!(labels.markers[1].anchor, Point::new(0.8, -0.8));
    }
}
