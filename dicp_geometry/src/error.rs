// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by geometry construction.
//!
//! Every check runs at the boundary, before any output buffer is allocated, so a
//! failed build never hands back a partially filled vertex or color buffer.

use thiserror::Error;

/// Dimension problems: counts that are zero or disagree with the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The dataset has no rows or no columns.
    #[error("dataset is empty")]
    EmptyDataset,
    /// A declared count is zero.
    #[error("`{name}` must be positive")]
    NonPositive {
        /// Which count was zero.
        name: &'static str,
    },
    /// A row does not have the same number of values as the first row.
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        /// Offending row index.
        row: usize,
        /// Expected number of values.
        expected: usize,
        /// Number of values found.
        found: usize,
    },
    /// A column does not have the same number of values as the first column.
    #[error("column {column} has {found} values, expected {expected}")]
    RaggedColumn {
        /// Offending column index.
        column: usize,
        /// Expected number of values.
        expected: usize,
        /// Number of values found.
        found: usize,
    },
    /// The number of column names differs from the number of value columns.
    #[error("{names} column names for {columns} value columns")]
    ColumnNames {
        /// Number of names supplied.
        names: usize,
        /// Number of value columns.
        columns: usize,
    },
    /// A declared count disagrees with the dataset.
    #[error("declared {name} = {declared}, but the dataset has {actual}")]
    Mismatch {
        /// Which count disagreed (`feature_count` or `sample_count`).
        name: &'static str,
        /// The declared value.
        declared: usize,
        /// The value measured on the dataset.
        actual: usize,
    },
    /// DICP pairs features into points and needs at least one pair.
    #[error("DICP needs at least 2 features, got {feature_count}")]
    TooFewFeatures {
        /// The declared feature count.
        feature_count: usize,
    },
    /// The plot extent is zero, negative, or not finite.
    #[error("plot extent must be finite and positive")]
    InvalidExtent,
    /// A vertex offset does not fit the `u32` range used by draw calls.
    #[error("{vertices} vertices exceed the draw offset range")]
    TooManyVertices {
        /// The total vertex count requested.
        vertices: usize,
    },
}

/// Disagreements between the class layout, the dataset, and the color table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    /// Per-class counts do not add up to the sample count.
    #[error("class counts sum to {sum}, expected sample_count = {sample_count}")]
    ClassCountSum {
        /// Sum of `count_per_class`.
        sum: usize,
        /// Declared sample count.
        sample_count: usize,
    },
    /// The per-class count list does not have one entry per class.
    #[error("{found} class counts for class_count = {class_count}")]
    ClassCountLen {
        /// Length of `count_per_class`.
        found: usize,
        /// Declared class count.
        class_count: usize,
    },
    /// A class block references a class outside `0..class_count`.
    #[error("class {class} is out of range for class_count = {class_count}")]
    ClassOutOfRange {
        /// The offending class index.
        class: usize,
        /// Declared class count.
        class_count: usize,
    },
    /// The rows of one class are not contiguous.
    #[error("class {class} reappears at row {row} after its block ended")]
    SplitClassBlock {
        /// The class whose block was split.
        class: usize,
        /// First row of the second run.
        row: usize,
    },
    /// The color table cannot color every class.
    #[error("color table has {colors} entries for class_count = {class_count}")]
    ColorTableTooSmall {
        /// Entries in the supplied table.
        colors: usize,
        /// Declared class count.
        class_count: usize,
    },
}

/// Errors returned when building plot geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Dimensions are zero or inconsistent with the dataset.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// Class layout or color table disagrees with the dataset.
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
    /// DICP was asked to pair an odd number of features.
    #[error("DICP needs an even feature_count, got {feature_count}")]
    Parity {
        /// The declared feature count.
        feature_count: usize,
    },
    /// A dataset cell is NaN or infinite.
    #[error("value at row {row}, column {column} is not finite")]
    NonFinite {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        column: usize,
    },
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err = GeometryError::from(ConsistencyError::ClassCountSum {
            sum: 4,
            sample_count: 3,
        });
        assert_eq!(
            err.to_string(),
            "class counts sum to 4, expected sample_count = 3"
        );
        assert!(matches!(err, GeometryError::Consistency(_)), "{err:?}");
    }
}
