// Copyright 2025 the DICP Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `dicp_demo`.
//!
//! This is a software stand-in for a multi-draw renderer: every batch of a
//! [`Geometry`] becomes one `<polyline>` (line strips) or a run of `<line>`s
//! (segment lists).

use std::fmt::Write as _;

use dicp_geometry::{Geometry, PlotLabels, Primitive, Rgb};
use kurbo::{Affine, Point, Rect};

#[derive(Debug)]
pub(crate) struct SvgScene {
    size: f64,
    to_view: Affine,
    layers: Vec<String>,
}

impl SvgScene {
    /// A square canvas of `size` pixels mapping plot space `[-1, 1]²` onto it, y up.
    pub(crate) fn new(size: f64) -> Self {
        let half = size * 0.5;
        let to_view = Affine::translate((half, half)) * Affine::scale_non_uniform(half, -half);
        Self {
            size,
            to_view,
            layers: Vec::new(),
        }
    }

    fn view(&self, x: f32, y: f32) -> Point {
        self.to_view * Point::new(f64::from(x), f64::from(y))
    }

    pub(crate) fn push_geometry<const D: usize>(&mut self, g: &Geometry<D>, stroke_width: f64) {
        let mut out = String::new();
        for i in 0..g.batches.len() {
            let (Some(vertices), Some(colors)) = (g.polyline(i), g.polyline_colors(i)) else {
                continue;
            };
            match g.primitive {
                Primitive::LineStrip => {
                    let Some(&first) = colors.first() else {
                        continue;
                    };
                    out.push_str(r#"<polyline fill="none" points=""#);
                    for v in vertices {
                        let p = self.view(v[0], v[1]);
                        let _ = write!(out, "{:.2},{:.2} ", p.x, p.y);
                    }
                    let _ = writeln!(
                        out,
                        r#"" stroke="{}" stroke-width="{stroke_width}"/>"#,
                        hex(first)
                    );
                }
                Primitive::Lines => {
                    for (pair, color) in vertices.chunks_exact(2).zip(colors.chunks_exact(2)) {
                        let a = self.view(pair[0][0], pair[0][1]);
                        let b = self.view(pair[1][0], pair[1][1]);
                        let _ = writeln!(
                            out,
                            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                            a.x,
                            a.y,
                            b.x,
                            b.y,
                            hex(color[0])
                        );
                    }
                }
            }
        }
        self.layers.push(out);
    }

    pub(crate) fn push_labels(&mut self, labels: &PlotLabels, font_size: f64) {
        let mut out = String::new();
        let title_y = font_size * 2.0;
        let _ = writeln!(
            out,
            r#"<text x="{:.2}" y="{title_y:.2}" font-size="{font_size}" text-anchor="middle">{}</text>"#,
            self.size * 0.5,
            escape_xml(&labels.title)
        );
        for m in &labels.markers {
            let p = self.to_view * m.anchor;
            let _ = writeln!(
                out,
                r#"<text x="{:.2}" y="{:.2}" font-size="{font_size}" text-anchor="middle" dominant-baseline="hanging">{}</text>"#,
                p.x,
                p.y + font_size * 0.5,
                escape_xml(&m.text)
            );
        }
        self.layers.push(out);
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = Rect::new(0.0, 0.0, self.size, self.size);
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = writeln!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );
        out.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
        out.push('\n');
        for layer in &self.layers {
            out.push_str(layer);
        }
        out.push_str("</svg>\n");
        out
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "components are clamped to [0, 255] before the cast"
)]
fn hex(c: Rgb) -> String {
    let [r, g, b] = c.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use dicp_geometry::{ClassColorTable, PcpPlotSpec};

    use super::*;

    #[test]
    fn plot_corners_land_on_canvas_corners() {
        let scene = SvgScene::new(200.0);
        assert_eq!(scene.view(-1.0, 1.0), Point::new(0.0, 0.0));
        assert_eq!(scene.view(1.0, -1.0), Point::new(200.0, 200.0));
    }

    #[test]
    fn axes_become_one_line_element_each() {
        let axes = PcpPlotSpec::new(ClassColorTable::categorical())
            .axes_geometry(3)
            .unwrap();
        let mut scene = SvgScene::new(100.0);
        scene.push_geometry(&axes, 1.0);
        let svg = scene.to_svg_string();
        assert_eq!(svg.matches("<line ").count(), 3);
        assert!(svg.contains(r##"stroke="#000000""##), "{svg}");
    }
}
