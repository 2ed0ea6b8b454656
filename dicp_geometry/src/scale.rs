// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scales and global min-max normalization.
//!
//! Normalization is pooled: every cell of the table contributes to a single
//! `(min, max)` domain, which is then mapped linearly onto the plot range. Columns
//! are never scaled independently.

extern crate alloc;

use alloc::vec::Vec;

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps every value to the midpoint of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0 + (r1 - r0) * 0.5;
        }
        if x == d1 {
            return r1;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain.
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

/// Pooled `(min, max)` of a set of values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobalMinMax {
    /// Smallest value seen.
    pub min: f64,
    /// Largest value seen.
    pub max: f64,
}

impl GlobalMinMax {
    /// Computes the pooled domain of `values`.
    ///
    /// Returns `None` for an empty slice. Callers are expected to have rejected
    /// non-finite values already.
    pub fn of(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        let mut out = Self {
            min: first,
            max: first,
        };
        for &v in rest {
            out.min = out.min.min(v);
            out.max = out.max.max(v);
        }
        Some(out)
    }

    /// Returns `true` when every value is identical.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// A scale from this domain onto `range`.
    pub fn scale_to(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new((self.min, self.max), range)
    }
}

/// Rescales `values` so the pooled minimum lands on `range.0` and the pooled
/// maximum on `range.1`.
///
/// Returns the domain that was used, or `None` if `values` is empty.
pub fn normalize_in_place(values: &mut [f64], range: (f64, f64)) -> Option<GlobalMinMax> {
    let domain = GlobalMinMax::of(values)?;
    log::trace!(
        "normalizing {} values from [{}, {}] onto [{}, {}]",
        values.len(),
        domain.min,
        domain.max,
        range.0,
        range.1
    );
    let scale = domain.scale_to(range);
    for v in values.iter_mut() {
        *v = scale.map(*v);
    }
    Some(domain)
}

/// `n` evenly spaced values from `start` to `stop`, both ends included.
///
/// `n == 1` yields `[start]`; `n == 0` yields an empty vector.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => alloc::vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}
