// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-draw batch descriptors.
//!
//! A [`Batches`] value describes every polyline of one collection as an
//! `(offset, count)` slice of a flat vertex buffer, so a renderer can issue a single
//! multi-draw call (for example `glMultiDrawArrays`) per collection.

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Range;

use crate::error::{GeometryError, ShapeError};

/// Parallel start offsets and vertex counts, one pair per polyline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batches {
    offsets: Vec<u32>,
    counts: Vec<u32>,
}

impl Batches {
    /// `units` back-to-back polylines of `per_unit` vertices each.
    ///
    /// Offsets are `0, per_unit, 2 * per_unit, ...`; the last batch ends at
    /// `units * per_unit`, which must fit in a `u32`.
    pub fn uniform(units: usize, per_unit: usize) -> Result<Self, GeometryError> {
        let total = units
            .checked_mul(per_unit)
            .filter(|&t| u32::try_from(t).is_ok())
            .ok_or(ShapeError::TooManyVertices {
                vertices: units.saturating_mul(per_unit),
            })?;
        let step = u32::try_from(per_unit).map_err(|_| ShapeError::TooManyVertices {
            vertices: total,
        })?;
        let mut offsets = Vec::with_capacity(units);
        let mut at = 0_u32;
        for _ in 0..units {
            offsets.push(at);
            at += step;
        }
        Ok(Self {
            offsets,
            counts: alloc::vec![step; units],
        })
    }

    /// Start offset of each polyline.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Vertex count of each polyline.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Number of polylines.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns `true` if there are no polylines.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Total vertices covered by all batches.
    pub fn total_vertices(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Vertex index range of each polyline.
    pub fn ranges(&self) -> impl ExactSizeIterator<Item = Range<usize>> + '_ {
        self.offsets
            .iter()
            .zip(&self.counts)
            .map(|(&o, &c)| o as usize..(o + c) as usize)
    }

    /// Consumes the batches, returning `(offsets, counts)`.
    pub fn into_parts(self) -> (Vec<u32>, Vec<u32>) {
        (self.offsets, self.counts)
    }
}
