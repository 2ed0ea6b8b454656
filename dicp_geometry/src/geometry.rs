// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The buffers handed to a renderer.

extern crate alloc;

use alloc::vec::Vec;

use crate::batch::Batches;
use crate::palette::Rgb;

/// How a renderer should assemble the vertices of one batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Each batch is one connected polyline (`GL_LINE_STRIP`).
    LineStrip,
    /// Each vertex pair of a batch is an independent segment (`GL_LINES`).
    Lines,
}

/// A vertex buffer, a parallel color buffer, and the batches that slice them.
///
/// `D` is the number of components per vertex: 2 for DICP, 3 for PCP.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry<const D: usize> {
    /// Vertices, grouped contiguously by polyline.
    pub vertices: Vec<[f32; D]>,
    /// One color per vertex.
    pub colors: Vec<Rgb>,
    /// One `(offset, count)` pair per polyline.
    pub batches: Batches,
    /// Primitive assembly for every batch.
    pub primitive: Primitive,
}

impl<const D: usize> Geometry<D> {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The vertices of polyline `i`, if it exists.
    pub fn polyline(&self, i: usize) -> Option<&[[f32; D]]> {
        let range = self.batches.ranges().nth(i)?;
        self.vertices.get(range)
    }

    /// The colors of polyline `i`, if it exists.
    pub fn polyline_colors(&self, i: usize) -> Option<&[Rgb]> {
        let range = self.batches.ranges().nth(i)?;
        self.colors.get(range)
    }

    /// Vertex buffer as raw bytes, ready for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Color buffer as raw bytes, ready for upload.
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Consumes the geometry, returning `(vertices, colors, offsets, counts)`.
    pub fn into_parts(self) -> (Vec<[f32; D]>, Vec<Rgb>, Vec<u32>, Vec<u32>) {
        let (offsets, counts) = self.batches.into_parts();
        (self.vertices, self.colors, offsets, counts)
    }
}

/// Narrows a plot-space coordinate to the vertex component type.
#[allow(
    clippy::cast_possible_truncation,
    reason = "plot coordinates lie in a small fixed range"
)]
pub(crate) fn to_f32(v: f64) -> f32 {
    v as f32
}
