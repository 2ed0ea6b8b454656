// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-owned class color lookup.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

/// An RGB triple with components in `[0, 1]`, laid out for a vertex color attribute.
pub type Rgb = [f32; 3];

/// Ordered mapping from class index to color.
///
/// The table is passed into every build call; there is no process-wide palette.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassColorTable {
    colors: Vec<Color>,
}

impl ClassColorTable {
    /// Wraps an ordered list of class colors.
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// A fixed ten-entry categorical table.
    pub fn categorical() -> Self {
        Self::new(alloc::vec![
            css::CRIMSON,
            css::ROYAL_BLUE,
            css::FOREST_GREEN,
            css::DARK_ORANGE,
            css::DARK_VIOLET,
            css::DARK_CYAN,
            css::SADDLE_BROWN,
            css::DEEP_PINK,
            css::OLIVE,
            css::SLATE_GRAY,
        ])
    }

    /// Number of classes this table can color.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color of `class`, if the table has one.
    pub fn color(&self, class: usize) -> Option<Color> {
        self.colors.get(class).copied()
    }

    /// The RGB triple of `class`, if the table has one. Alpha is dropped.
    pub fn rgb(&self, class: usize) -> Option<Rgb> {
        self.color(class).map(rgb)
    }
}

impl Default for ClassColorTable {
    fn default() -> Self {
        Self::categorical()
    }
}

/// Drops alpha from a color.
pub fn rgb(color: Color) -> Rgb {
    let [r, g, b, _] = color.components;
    [r, g, b]
}
