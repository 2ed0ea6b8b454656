// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Title and axis marker placement.
//!
//! Only strings and anchor points are produced here; shaping and drawing the text is
//! left to the renderer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

/// A label attached to one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisMarker {
    /// Label text, e.g. `"X1"`.
    pub text: String,
    /// Anchor in plot space: the foot of the axis. Renderers center the text
    /// horizontally and hang it below this point.
    pub anchor: Point,
}

/// Text placement for one plot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotLabels {
    /// Plot title.
    pub title: String,
    /// Per-axis markers, in axis order.
    pub markers: Vec<AxisMarker>,
}

impl PlotLabels {
    /// Labels with a title and no markers.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            markers: Vec::new(),
        }
    }

    /// Adds `X1..Xn` markers at the foot of each axis.
    pub fn with_axis_markers(mut self, xs: &[f64], foot_y: f64) -> Self {
        self.markers = xs
            .iter()
            .enumerate()
            .map(|(i, &x)| AxisMarker {
                text: alloc::format!("X{}", i + 1),
                anchor: Point::new(x, foot_y),
            })
            .collect();
        self
    }
}
