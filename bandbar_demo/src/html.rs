// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML report for `bandbar_demo`: one section per captured chart state.

use bandbar_charts::DisplayState;
use bandbar_core::OverlayElement;

use crate::svg::escape_xml;

/// One captured frame of the chart.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) state: DisplayState,
    pub(crate) svg: String,
    /// Overlay elements alive when the frame was captured.
    pub(crate) overlay: Vec<OverlayElement>,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
    out.push_str(STYLE);
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_xml(title)));
    for section in sections {
        render_section(&mut out, section);
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn render_section(out: &mut String, section: &HtmlSection) {
    out.push_str("<section>\n");
    out.push_str(&format!("<h2>{}</h2>\n", escape_xml(&section.title)));
    out.push_str(&format!("<p>{}</p>\n", escape_xml(&section.description)));

    let state = &section.state;
    out.push_str("<div class=\"controls\">\n");
    out.push_str(&format!(
        "<label>Color <input type=\"text\" value=\"{}\"></label>\n",
        escape_xml(&state.color)
    ));
    out.push_str(&format!(
        "<label>Min <input type=\"number\" value=\"{}\"></label>\n",
        number_value(state.min_range)
    ));
    out.push_str(&format!(
        "<label>Max <input type=\"number\" value=\"{}\"></label>\n",
        number_value(state.max_range)
    ));
    out.push_str("</div>\n");

    // Overlay coordinates are page-space; the frame stands in for the page.
    out.push_str("<div class=\"frame\">\n");
    out.push_str(&section.svg);
    for el in &section.overlay {
        out.push_str(&format!(
            "<div class=\"{}\" style=\"left: {}px; top: {}px; opacity: {:.3};\">{}</div>\n",
            escape_xml(el.class),
            el.pos.x,
            el.pos.y,
            el.opacity,
            escape_xml(&el.text)
        ));
    }
    out.push_str("</div>\n</section>\n");
}

fn number_value(v: f64) -> String {
    if v.is_nan() {
        String::new()
    } else {
        format!("{v}")
    }
}

const STYLE: &str = r#"<style>
body { font-family: sans-serif; margin: 24px; }
section { margin-bottom: 32px; }
.controls label { margin-right: 12px; }
.frame { position: relative; width: 500px; }
.tooltip {
  position: absolute;
  text-align: center;
  padding: 4px 6px;
  font: 12px sans-serif;
  background: lightsteelblue;
  border-radius: 6px;
  pointer-events: none;
  white-space: nowrap;
}
</style>
"#;

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;

    #[test]
    fn overlay_elements_become_positioned_divs() {
        let mut overlay = bandbar_core::Overlay::new();
        let id = overlay.append("tooltip");
        if let Some(el) = overlay.get_mut(id) {
            el.set_text("A & B");
            el.set_position(Point::new(105.0, 72.0));
            el.set_opacity(0.9);
        }
        let section = HtmlSection {
            title: "Hover".to_string(),
            description: "tooltip".to_string(),
            state: DisplayState::default(),
            svg: "<svg></svg>".to_string(),
            overlay: overlay.iter().cloned().collect(),
        };
        let html = render_report("demo", &[section]);
        assert!(html.contains(
            r#"<div class="tooltip" style="left: 105px; top: 72px; opacity: 0.900;">A &amp; B</div>"#
        ));
        assert!(html.contains(r#"value="gray""#));
    }

    #[test]
    fn nan_bounds_render_as_blank_inputs() {
        let mut state = DisplayState::default();
        state.set_max_range_input("x");
        let section = HtmlSection {
            title: String::new(),
            description: String::new(),
            state,
            svg: String::new(),
            overlay: Vec::new(),
        };
        let html = render_report("demo", &[section]);
        assert!(html.contains(r#"<label>Max <input type="number" value=""></label>"#));
    }
}
