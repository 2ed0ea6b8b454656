// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-vertex color buffers.

extern crate alloc;

use alloc::vec::Vec;

use crate::dataset::ClassBlocks;
use crate::error::{ConsistencyError, GeometryError};
use crate::palette::{ClassColorTable, Rgb};

/// Expands class colors into a buffer parallel to the vertex buffer.
///
/// Each block contributes `block.len * multiplier` copies of its class color, in block
/// order, where `multiplier` is the number of vertices emitted per sample.
pub fn tile_class_colors(
    table: &ClassColorTable,
    blocks: &ClassBlocks,
    multiplier: usize,
) -> Result<Vec<Rgb>, GeometryError> {
    let mut palette = Vec::with_capacity(blocks.blocks().len());
    for b in blocks.blocks() {
        let Some(c) = table.rgb(b.class) else {
            return Err(ConsistencyError::ColorTableTooSmall {
                colors: table.len(),
                class_count: b.class + 1,
            }
            .into());
        };
        palette.push(c);
    }

    let mut out = Vec::with_capacity(blocks.sample_count() * multiplier);
    for (b, c) in blocks.blocks().iter().zip(palette) {
        out.extend(core::iter::repeat_n(c, b.len * multiplier));
    }
    Ok(out)
}

/// A buffer of `len` copies of one color.
pub fn uniform_colors(color: Rgb, len: usize) -> Vec<Rgb> {
    alloc::vec![color; len]
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn blocks_are_tiled_in_order_with_the_multiplier() {
        let table = ClassColorTable::new(alloc::vec![css::BLACK, css::WHITE]);
        let colors = tile_class_colors(&table, &ClassBlocks::from_counts(&[2, 1]), 3).unwrap();
        assert_eq!(colors.len(), 9);
        assert!(colors[..6].iter().all(|c| *c == [0.0; 3]), "{colors:?}");
        assert!(colors[6..].iter().all(|c| *c == [1.0; 3]), "{colors:?}");
    }

    #[test]
    fn label_order_drives_color_order() {
        let table = ClassColorTable::new(alloc::vec![css::BLACK, css::WHITE]);
        let blocks = ClassBlocks::from_labels(&[1, 0], 2).unwrap();
        let colors = tile_class_colors(&table, &blocks, 1).unwrap();
        assert_eq!(colors, alloc::vec![[1.0; 3], [0.0; 3]]);
    }

    #[test]
    fn missing_class_color_fails_before_allocating() {
        let table = ClassColorTable::new(alloc::vec![css::BLACK]);
        let err = tile_class_colors(&table, &ClassBlocks::from_counts(&[1, 1]), 2).unwrap_err();
        assert!(
            matches!(
                err,
                GeometryError::Consistency(ConsistencyError::ColorTableTooSmall { .. })
            ),
            "{err:?}"
        );
    }
}
