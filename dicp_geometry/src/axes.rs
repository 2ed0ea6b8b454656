// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis and frame segments.
//!
//! Guides are a handful of straight two-point segments (Vega calls these "rules"),
//! drawn in one uniform color with one batch per segment.

extern crate alloc;

use kurbo::{Line, Point, Rect};
use smallvec::SmallVec;

use crate::batch::Batches;
use crate::color::uniform_colors;
use crate::error::GeometryError;
use crate::geometry::{Geometry, Primitive};
use crate::palette::Rgb;

/// Segment storage sized for the DICP frame and typical feature counts.
pub(crate) type Segments = SmallVec<[Line; 8]>;

/// A vertical segment at `x` spanning `y0..y1`.
pub(crate) fn vertical(x: f64, y0: f64, y1: f64) -> Line {
    Line::new((x, y0), (x, y1))
}

/// A horizontal segment at `y` spanning `x0..x1`.
pub(crate) fn horizontal(y: f64, x0: f64, x1: f64) -> Line {
    Line::new((x0, y), (x1, y))
}

/// Left and bottom edges of `region`, both starting at its bottom-left corner.
pub(crate) fn frame(region: Rect) -> Segments {
    let mut out = Segments::new();
    out.push(vertical(region.x0, region.y0, region.y1));
    out.push(horizontal(region.y0, region.x0, region.x1));
    out
}

/// One vertical guide per x position, bottom to top across `region`.
pub(crate) fn parallel_axes(xs: &[f64], region: Rect) -> Segments {
    xs.iter()
        .map(|&x| vertical(x, region.y0, region.y1))
        .collect()
}

/// Flattens segments into a two-vertices-per-batch geometry.
pub(crate) fn segments_geometry<const D: usize>(
    segments: &[Line],
    color: Rgb,
    embed: impl Fn(Point) -> [f32; D],
) -> Result<Geometry<D>, GeometryError> {
    let batches = Batches::uniform(segments.len(), 2)?;
    let vertices = segments
        .iter()
        .flat_map(|l| [embed(l.p0), embed(l.p1)])
        .collect();
    Ok(Geometry {
        vertices,
        colors: uniform_colors(color, segments.len() * 2),
        batches,
        primitive: Primitive::Lines,
    })
}
