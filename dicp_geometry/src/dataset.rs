// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned numeric dataset, class blocks, and the validated plot input.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::error::{ConsistencyError, GeometryError, ShapeError};
use crate::palette::ClassColorTable;

/// A view of every `stride`-th value of an arena, starting at `offset`.
///
/// Columns of a row-major table are strided views with `stride == column_count`;
/// rows are views with `stride == 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StridedView {
    /// Index of the first element.
    pub offset: usize,
    /// Distance between consecutive elements.
    pub stride: usize,
    /// Number of elements.
    pub len: usize,
}

impl StridedView {
    /// Arena indices covered by this view, in order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + use<> {
        let Self {
            offset,
            stride,
            len,
        } = *self;
        (0..len).map(move |i| offset + i * stride)
    }
}

/// Flat row-major storage for a numeric table.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueArena {
    values: Vec<f64>,
    row_len: usize,
}

impl ValueArena {
    /// Wraps row-major `values` with `row_len` values per row.
    pub(crate) fn new(values: Vec<f64>, row_len: usize) -> Self {
        debug_assert!(
            row_len > 0 && values.len() % row_len == 0,
            "arena of {} values cannot hold rows of {row_len}",
            values.len()
        );
        Self { values, row_len }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.values.len() / self.row_len
    }

    /// Number of values per row.
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// All values, row-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// All values, row-major, mutably.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// The values of one row.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.row_len;
        &self.values[start..start + self.row_len]
    }

    /// Iterates rows in order.
    pub fn rows(&self) -> core::slice::ChunksExact<'_, f64> {
        self.values.chunks_exact(self.row_len)
    }

    /// A strided view over one column.
    pub fn column(&self, col: usize) -> StridedView {
        StridedView {
            offset: col,
            stride: self.row_len,
            len: self.row_count(),
        }
    }

    /// Adds `src` element-wise into `dst`, in place.
    ///
    /// Both views must have the same length.
    pub fn accumulate(&mut self, dst: StridedView, src: StridedView) {
        debug_assert_eq!(dst.len, src.len, "accumulated views differ in length");
        for (d, s) in dst.indices().zip(src.indices()) {
            self.values[d] += self.values[s];
        }
    }

    /// Consumes the arena, returning the row-major values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// A numeric table: named feature columns over sample rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    arena: ValueArena,
}

impl Dataset {
    /// Builds a dataset from rows of values.
    ///
    /// Every row must have one value per column name.
    pub fn from_rows<R>(
        columns: Vec<String>,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, GeometryError>
    where
        R: AsRef<[f64]>,
    {
        let row_len = columns.len();
        if row_len == 0 {
            return Err(ShapeError::EmptyDataset.into());
        }
        let mut values = Vec::new();
        for (row, r) in rows.into_iter().enumerate() {
            let r = r.as_ref();
            if r.len() != row_len {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: row_len,
                    found: r.len(),
                }
                .into());
            }
            values.extend_from_slice(r);
        }
        if values.is_empty() {
            return Err(ShapeError::EmptyDataset.into());
        }
        Ok(Self {
            columns,
            arena: ValueArena::new(values, row_len),
        })
    }

    /// Builds a dataset from columns of values.
    ///
    /// Every column must have the same length, and there must be one name per column.
    pub fn from_columns(columns: Vec<String>, data: &[Vec<f64>]) -> Result<Self, GeometryError> {
        if columns.len() != data.len() {
            return Err(ShapeError::ColumnNames {
                names: columns.len(),
                columns: data.len(),
            }
            .into());
        }
        let Some(first) = data.first() else {
            return Err(ShapeError::EmptyDataset.into());
        };
        let n = first.len();
        if let Some((column, bad)) = data.iter().enumerate().find(|(_, c)| c.len() != n) {
            return Err(ShapeError::RaggedColumn {
                column,
                expected: n,
                found: bad.len(),
            }
            .into());
        }
        if n == 0 {
            return Err(ShapeError::EmptyDataset.into());
        }
        let mut values = Vec::with_capacity(n * data.len());
        for row in 0..n {
            values.extend(data.iter().map(|c| c[row]));
        }
        Ok(Self {
            columns,
            arena: ValueArena::new(values, data.len()),
        })
    }

    /// Column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of feature columns.
    pub fn feature_count(&self) -> usize {
        self.arena.row_len()
    }

    /// Number of sample rows.
    pub fn sample_count(&self) -> usize {
        self.arena.row_count()
    }

    /// The underlying row-major values.
    pub fn arena(&self) -> &ValueArena {
        &self.arena
    }

    fn check_finite(&self) -> Result<(), GeometryError> {
        let row_len = self.arena.row_len();
        match self.arena.values().iter().position(|v| !v.is_finite()) {
            Some(i) => Err(GeometryError::NonFinite {
                row: i / row_len,
                column: i % row_len,
            }),
            None => Ok(()),
        }
    }
}

/// A contiguous run of samples sharing one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassBlock {
    /// Class index into the color table.
    pub class: usize,
    /// Number of samples in the run.
    pub len: usize,
}

/// The class layout of a dataset, as ordered contiguous blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassBlocks {
    blocks: Vec<ClassBlock>,
}

impl ClassBlocks {
    /// Blocks from per-class sample counts: class `i` owns the `i`-th run.
    ///
    /// Rows are assumed to be sorted by class in the same order as `counts`; nothing
    /// here can detect rows that are not. [`PlotInput::with_labels`] rebuilds the
    /// blocks from per-row labels and rejects split classes instead.
    pub fn from_counts(counts: &[usize]) -> Self {
        Self {
            blocks: counts
                .iter()
                .enumerate()
                .map(|(class, &len)| ClassBlock { class, len })
                .collect(),
        }
    }

    /// Blocks recomputed from an explicit class label per row.
    ///
    /// Fails if a label is out of range or if a class's rows are not contiguous.
    pub fn from_labels(labels: &[usize], class_count: usize) -> Result<Self, ConsistencyError> {
        let mut blocks: Vec<ClassBlock> = Vec::new();
        let mut closed: HashSet<usize> = HashSet::new();
        for (row, &class) in labels.iter().enumerate() {
            if class >= class_count {
                return Err(ConsistencyError::ClassOutOfRange { class, class_count });
            }
            if let Some(last) = blocks.last_mut()
                && last.class == class
            {
                last.len += 1;
                continue;
            }
            if let Some(prev) = blocks.last() {
                closed.insert(prev.class);
            }
            if closed.contains(&class) {
                return Err(ConsistencyError::SplitClassBlock { class, row });
            }
            blocks.push(ClassBlock { class, len: 1 });
        }
        Ok(Self { blocks })
    }

    /// The blocks, in row order.
    pub fn blocks(&self) -> &[ClassBlock] {
        &self.blocks
    }

    /// Total number of samples covered.
    pub fn sample_count(&self) -> usize {
        self.blocks.iter().map(|b| b.len).sum()
    }

    /// The class of a sample, found by walking cumulative block boundaries.
    pub fn class_of(&self, sample: usize) -> Option<usize> {
        let mut end = 0;
        for b in &self.blocks {
            end += b.len;
            if sample < end {
                return Some(b.class);
            }
        }
        None
    }
}

/// A dataset together with its declared dimensions and class layout.
///
/// Construction does not validate; builders call [`PlotInput::validate`] before
/// allocating any output.
#[derive(Clone, Debug)]
pub struct PlotInput<'a> {
    /// The source table.
    pub dataset: &'a Dataset,
    /// Number of classes.
    pub class_count: usize,
    /// Number of feature columns.
    pub feature_count: usize,
    /// Number of sample rows.
    pub sample_count: usize,
    /// Class layout over the rows.
    pub classes: ClassBlocks,
    /// Length of `count_per_class`, when the layout came from counts.
    count_len: Option<usize>,
}

impl<'a> PlotInput<'a> {
    /// Input described by per-class sample counts (`count_per_class`).
    pub fn new(
        dataset: &'a Dataset,
        class_count: usize,
        feature_count: usize,
        sample_count: usize,
        count_per_class: &[usize],
    ) -> Self {
        Self {
            dataset,
            class_count,
            feature_count,
            sample_count,
            classes: ClassBlocks::from_counts(count_per_class),
            count_len: Some(count_per_class.len()),
        }
    }

    /// Input described by one class label per row.
    ///
    /// Counts are taken from the dataset; class blocks are recomputed from `labels`.
    pub fn with_labels(
        dataset: &'a Dataset,
        class_count: usize,
        labels: &[usize],
    ) -> Result<Self, GeometryError> {
        let classes = ClassBlocks::from_labels(labels, class_count)?;
        Ok(Self {
            dataset,
            class_count,
            feature_count: dataset.feature_count(),
            sample_count: dataset.sample_count(),
            classes,
            count_len: None,
        })
    }

    /// Checks every shape and consistency precondition against `colors`.
    pub fn validate(&self, colors: &ClassColorTable) -> Result<(), GeometryError> {
        for (name, v) in [
            ("class_count", self.class_count),
            ("feature_count", self.feature_count),
            ("sample_count", self.sample_count),
        ] {
            if v == 0 {
                return Err(ShapeError::NonPositive { name }.into());
            }
        }
        if self.feature_count != self.dataset.feature_count() {
            return Err(ShapeError::Mismatch {
                name: "feature_count",
                declared: self.feature_count,
                actual: self.dataset.feature_count(),
            }
            .into());
        }
        if self.sample_count != self.dataset.sample_count() {
            return Err(ShapeError::Mismatch {
                name: "sample_count",
                declared: self.sample_count,
                actual: self.dataset.sample_count(),
            }
            .into());
        }
        if let Some(found) = self.count_len
            && found != self.class_count
        {
            return Err(ConsistencyError::ClassCountLen {
                found,
                class_count: self.class_count,
            }
            .into());
        }
        for b in self.classes.blocks() {
            if b.class >= self.class_count {
                return Err(ConsistencyError::ClassOutOfRange {
                    class: b.class,
                    class_count: self.class_count,
                }
                .into());
            }
        }
        let sum = self.classes.sample_count();
        if sum != self.sample_count {
            return Err(ConsistencyError::ClassCountSum {
                sum,
                sample_count: self.sample_count,
            }
            .into());
        }
        if colors.len() < self.class_count {
            return Err(ConsistencyError::ColorTableTooSmall {
                colors: colors.len(),
                class_count: self.class_count,
            }
            .into());
        }
        self.dataset.check_finite()
    }
}
