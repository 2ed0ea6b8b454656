// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry for Detail-in-Context Parallel (DICP) and parallel coordinate plots.
//!
//! This crate turns a numeric table, grouped into class blocks, into the buffers a
//! line renderer consumes:
//! - a **vertex buffer** with one polyline per sample,
//! - a parallel **color buffer** tiled from a caller-supplied class color table, and
//! - **batch descriptors** (`offset`, `count`) so each collection can be drawn with a
//!   single multi-draw call.
//!
//! All values are normalized together (one pooled min/max) into a square plot region,
//! `[-0.8, 0.8]` by default. Axis and frame guides are produced in the same space.
//!
//! Windowing, GPU buffer management, and text rendering are out of scope.

#![no_std]

extern crate alloc;

mod axes;
mod batch;
mod color;
mod config;
mod dataset;
mod dicp;
mod error;
mod geometry;
mod labels;
mod palette;
mod pcp;
mod scale;
#[cfg(test)]
mod scenario_tests;

pub use batch::Batches;
pub use color::{tile_class_colors, uniform_colors};
pub use config::{DEFAULT_EXTENT, PlotConfig};
pub use dataset::{ClassBlock, ClassBlocks, Dataset, PlotInput, StridedView, ValueArena};
pub use dicp::{DICP_TITLE, DicpPlotSpec, cumulative};
pub use error::{ConsistencyError, GeometryError, ShapeError};
pub use geometry::{Geometry, Primitive};
pub use labels::{AxisMarker, PlotLabels};
pub use palette::{ClassColorTable, Rgb, rgb};
pub use pcp::{PCP_TITLE, PcpPlotSpec};
pub use scale::{GlobalMinMax, ScaleLinear, linspace, normalize_in_place};
