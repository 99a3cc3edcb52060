// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `bandbar_demo`.

use std::collections::HashMap;

use bandbar_core::{MarkDiff, MarkId, MarkPayload, TextAnchor, TextBaseline};
use kurbo::Rect;
use peniko::Brush;

#[derive(Debug)]
struct SvgMark {
    z_index: i32,
    class: Option<&'static str>,
    payload: MarkPayload,
}

/// Mirrors a mounted scene from its diff stream.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    marks: HashMap<MarkId, SvgMark>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter {
                    id,
                    z_index,
                    class,
                    new,
                    ..
                } => {
                    self.marks.insert(
                        *id,
                        SvgMark {
                            z_index: *z_index,
                            class: *class,
                            payload: (**new).clone(),
                        },
                    );
                }
                MarkDiff::Exit { id, .. } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.marks.len()
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        let mut sorted: Vec<(&MarkId, &SvgMark)> = self.marks.iter().collect();
        sorted.sort_by_key(|(id, m)| (m.z_index, id.0));

        for (_id, mark) in sorted {
            match &mark.payload {
                MarkPayload::Rect(r) => {
                    out.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        r.rect.x0,
                        r.rect.y0,
                        r.rect.width(),
                        r.rect.height(),
                    ));
                    write_class_attr(&mut out, mark.class);
                    write_paint_attr(&mut out, "fill", &r.fill);
                    out.push_str("/>\n");
                }
                MarkPayload::Text(t) => {
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}""#,
                        t.pos.x, t.pos.y, t.font_size
                    ));
                    // Alphabetic is the SVG default; labels rely on `dy` instead.
                    match t.baseline {
                        TextBaseline::Alphabetic => {}
                        TextBaseline::Middle => out.push_str(r#" dominant-baseline="middle""#),
                        TextBaseline::Hanging => out.push_str(r#" dominant-baseline="hanging""#),
                        TextBaseline::Ideographic => {
                            out.push_str(r#" dominant-baseline="ideographic""#);
                        }
                    }
                    if t.dy_em != 0.0 {
                        out.push_str(&format!(r#" dy="{}em""#, t.dy_em));
                    }
                    out.push_str(match t.anchor {
                        TextAnchor::Start => "",
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_class_attr(&mut out, mark.class);
                    write_paint_attr(&mut out, "fill", &t.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
                MarkPayload::Path(p) => {
                    let d = p.path.to_svg();
                    out.push_str(&format!(r#"<path d="{d}""#));
                    write_class_attr(&mut out, mark.class);
                    write_paint_attr(&mut out, "fill", &p.fill);
                    if p.stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", &p.stroke);
                        out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
                    }
                    out.push_str("/>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_class_attr(out: &mut String, class: Option<&str>) {
    if let Some(class) = class {
        out.push_str(&format!(r#" class="{}""#, escape_xml(class)));
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
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
