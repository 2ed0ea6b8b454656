// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot-space configuration shared by both plot variants.

use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;

use crate::error::ShapeError;

/// Half-width of the default square plot region.
pub const DEFAULT_EXTENT: f64 = 0.8;

/// Plot region and guide styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotConfig {
    /// Data is normalized into `[-extent, extent]` on both axes.
    pub extent: f64,
    /// Color of axis and frame segments.
    pub axis_color: Color,
}

impl PlotConfig {
    /// The default configuration: a `[-0.8, 0.8]` square with black guides.
    pub fn new() -> Self {
        Self {
            extent: DEFAULT_EXTENT,
            axis_color: css::BLACK,
        }
    }

    /// Sets the half-width of the plot region.
    ///
    /// Builders reject an extent that is not finite and positive.
    pub fn with_extent(mut self, extent: f64) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the guide color.
    pub fn with_axis_color(mut self, color: Color) -> Self {
        self.axis_color = color;
        self
    }

    /// Checks that the extent describes a non-empty region.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.extent.is_finite() && self.extent > 0.0 {
            Ok(())
        } else {
            Err(ShapeError::InvalidExtent)
        }
    }

    /// The normalization target range, `(-extent, extent)`.
    pub fn range(&self) -> (f64, f64) {
        (-self.extent, self.extent)
    }

    /// The plot region, with y increasing upward as in clip space.
    pub fn region(&self) -> Rect {
        Rect::new(-self.extent, -self.extent, self.extent, self.extent)
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new()
    }
}
