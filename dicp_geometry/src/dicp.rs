// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detail-in-Context Parallel (DICP) plot geometry.
//!
//! Features are accumulated along two interleaved chains (even and odd columns),
//! normalized over the whole table, and then read back in consecutive pairs as
//! `(x, y)` points. Each sample becomes one polyline of `feature_count / 2`
//! vertices.

extern crate alloc;

use kurbo::Point;

use crate::axes;
use crate::batch::Batches;
use crate::color::tile_class_colors;
use crate::config::PlotConfig;
use crate::dataset::{PlotInput, ValueArena};
use crate::error::{GeometryError, ShapeError};
use crate::geometry::{Geometry, Primitive, to_f32};
use crate::labels::PlotLabels;
use crate::palette::{ClassColorTable, rgb};
use crate::scale::normalize_in_place;

/// Title shown above a DICP plot.
pub const DICP_TITLE: &str = "Detail-in-Context Parallel Plot";

/// Builds DICP data and frame geometry.
#[derive(Clone, Debug)]
pub struct DicpPlotSpec {
    /// Class colors, indexed by class.
    pub colors: ClassColorTable,
    /// Plot region and guide styling.
    pub config: PlotConfig,
}

impl DicpPlotSpec {
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

    /// Generates one polyline per sample.
    ///
    /// Fails if the input or extent is invalid, if `feature_count < 2`, or if
    /// `feature_count` is odd.
    pub fn class_geometry(&self, input: &PlotInput<'_>) -> Result<Geometry<2>, GeometryError> {
        self.config.validate()?;
        input.validate(&self.colors)?;
        let f = input.feature_count;
        if f < 2 {
            return Err(ShapeError::TooFewFeatures { feature_count: f }.into());
        }
        if f % 2 != 0 {
            return Err(GeometryError::Parity { feature_count: f });
        }
        let per_sample = f / 2;
        let batches = Batches::uniform(input.sample_count, per_sample)?;

        let mut arena = cumulative(input.dataset.arena().clone());
        normalize_in_place(arena.values_mut(), self.config.range());

        let vertices: alloc::vec::Vec<[f32; 2]> = arena
            .values()
            .chunks_exact(2)
            .map(|xy| [to_f32(xy[0]), to_f32(xy[1])])
            .collect();
        let colors = tile_class_colors(&self.colors, &input.classes, per_sample)?;

        log::debug!(
            "DICP geometry: {} samples, {} vertices per sample, {} classes",
            input.sample_count,
            per_sample,
            input.class_count
        );
        Ok(Geometry {
            vertices,
            colors,
            batches,
            primitive: Primitive::LineStrip,
        })
    }

    /// The left and bottom edges of the plot region.
    pub fn axes_geometry(&self) -> Result<Geometry<2>, GeometryError> {
        self.config.validate()?;
        let segments = axes::frame(self.config.region());
        let color = rgb(self.config.axis_color);
        axes::segments_geometry(&segments, color, embed_2d)
    }

    /// Title for the plot; DICP has no per-axis markers.
    pub fn labels(&self) -> PlotLabels {
        PlotLabels::titled(DICP_TITLE)
    }
}

/// Adds column `i - 2` into column `i` for every `i >= 2`, left to right.
///
/// Even and odd columns form independent running sums; columns 0 and 1 are unchanged.
pub fn cumulative(mut arena: ValueArena) -> ValueArena {
    for i in 2..arena.row_len() {
        let dst = arena.column(i);
        let src = arena.column(i - 2);
        arena.accumulate(dst, src);
    }
    arena
}

fn embed_2d(p: Point) -> [f32; 2] {
    [to_f32(p.x), to_f32(p.y)]
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use peniko::color::palette::css;

    use super::*;
    use crate::dataset::Dataset;

    fn dataset(rows: &[&[f64]]) -> Dataset {
        let names: Vec<String> = (0..rows[0].len()).map(|i| alloc::format!("x{i}")).collect();
        Dataset::from_rows(names, rows.iter().copied()).unwrap()
    }

    fn spec() -> DicpPlotSpec {
        DicpPlotSpec::new(ClassColorTable::new(vec![css::RED, css::BLUE]))
    }

    #[test]
    fn cumulative_transform_chains_even_and_odd_columns() {
        let d = dataset(&[&[1.0, 2.0, 3.0, 4.0], &[1.0, 1.0, 1.0, 1.0]]);
        let arena = cumulative(d.arena().clone());
        assert_eq!(arena.row(0), &[1.0, 2.0, 4.0, 6.0]);
        assert_eq!(arena.row(1), &[1.0, 1.0, 2.0, 2.0]);

        let d = dataset(&[&[1.0, 0.0, 1.0, 0.0, 1.0, 0.0]]);
        assert_eq!(cumulative(d.arena().clone()).row(0), &[1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn samples_become_point_pairs() {
        let d = dataset(&[&[0.0, 0.0, 1.0, 1.0], &[2.0, 2.0, 2.0, 2.0]]);
        let g = spec()
            .class_geometry(&PlotInput::new(&d, 2, 4, 2, &[1, 1]))
            .unwrap();

        // Transformed: [0,0,1,1] and [2,2,4,4]; pooled domain [0, 4].
        assert_eq!(
            g.vertices,
            vec![[-0.8, -0.8], [-0.4, -0.4], [0.0, 0.0], [0.8, 0.8]]
        );
        assert_eq!(g.batches.offsets(), &[0, 2]);
        assert_eq!(g.batches.counts(), &[2, 2]);
        assert_eq!(g.colors.len(), g.vertices.len());
        assert_eq!(g.polyline_colors(1).unwrap(), &[[0.0, 0.0, 1.0]; 2]);
        assert_eq!(g.primitive, Primitive::LineStrip);
    }

    #[test]
    fn odd_and_single_feature_counts_are_rejected() {
        let d = dataset(&[&[0.0, 1.0, 2.0]]);
        let err = spec()
            .class_geometry(&PlotInput::new(&d, 1, 3, 1, &[1]))
            .unwrap_err();
        assert_eq!(err, GeometryError::Parity { feature_count: 3 });

        let d = dataset(&[&[0.0]]);
        let err = spec()
            .class_geometry(&PlotInput::new(&d, 1, 1, 1, &[1]))
            .unwrap_err();
        assert_eq!(err, ShapeError::TooFewFeatures { feature_count: 1 }.into());
    }

    #[test]
    fn inconsistent_class_counts_fail() {
        let d = dataset(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let err = spec()
            .class_geometry(&PlotInput::new(&d, 2, 2, 2, &[1, 2]))
            .unwrap_err();
        assert!(matches!(err, GeometryError::Consistency(_)), "{err:?}");
    }

    #[test]
    fn flipped_extent_is_rejected_before_building() {
        let d = dataset(&[&[0.0, 1.0], &[2.0, 3.0]]);
        let flipped = spec().with_config(PlotConfig::new().with_extent(-0.8));
        assert_eq!(
            flipped.class_geometry(&PlotInput::new(&d, 1, 2, 2, &[2])),
            Err(ShapeError::InvalidExtent.into())
        );
        assert_eq!(
            flipped.axes_geometry(),
            Err(ShapeError::InvalidExtent.into())
        );
    }

    #[test]
    fn frame_matches_the_plot_region() {
        let g = spec().axes_geometry().unwrap();
        assert_eq!(
            g.vertices,
            vec![[-0.8, -0.8], [-0.8, 0.8], [-0.8, -0.8], [0.8, -0.8]]
        );
        assert_eq!(g.colors, vec![[0.0; 3]; 4]);
        assert_eq!(g.batches.offsets(), &[0, 2]);
        assert_eq!(g.batches.counts(), &[2, 2]);
        assert!(spec().labels().markers.is_empty());
    }
}
