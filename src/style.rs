use svg::node::element::path::Data;
use svg::node::element::{Path, Text};
use svg::node::Text as nodeText;

/// Visual options for axis rendering.
///
/// The padding constants default to the values the layout and renderer
/// were designed around, but callers may override any of them.
#[derive(Clone, Debug)]
pub struct AxesStyle {
    pub axes_stroke: String,
    pub axes_weight: f64,
    pub grid_weight: f64,
    pub tick_fill: String,
    pub tick_font_size: f64,
    pub label_font_size: f64,
    pub font_family: String,
    /// Gap between the x baseline and the top of an x tick label.
    pub tick_padding_top: f64,
    /// Gap between a y tick label and the y baseline.
    pub tick_padding_right: f64,
    /// Outer padding reserved on every side of the plot.
    pub plot_padding: f64,
}

impl Default for AxesStyle {
    fn default() -> AxesStyle {
        AxesStyle {
            axes_stroke: "black".to_string(),
            axes_weight: 2.0,
            grid_weight: 1.0,
            tick_fill: "black".to_string(),
            tick_font_size: 12.0,
            label_font_size: 14.0,
            font_family: "Roboto, Open sans, sans-serif".to_string(),
            tick_padding_top: 8.0,
            tick_padding_right: 8.0,
            plot_padding: 20.0,
        }
    }
}

pub fn path_open(path_data: Data, color: &str, weight: f64) -> Path {
    Path::new()
        .set("stroke", color)
        .set("fill", "none")
        .set("stroke-width", weight)
        .set("d", path_data)
}

pub fn text_label(
    content: &str,
    x: f64,
    y: f64,
    anchor: &str,
    baseline: &str,
    font_size: f64,
    style: &AxesStyle,
) -> Text {
    Text::new()
        .set("font-family", style.font_family.clone())
        .set("font-size", font_size)
        .set("text-anchor", anchor)
        .set("dominant-baseline", baseline)
        .set("stroke", "none")
        .set("fill", style.tick_fill.clone())
        .set("transform", format!("translate({}, {})", x, y))
        .add(nodeText::new(content))
}

/// A text label rotated about its own anchor point. The rotation lives on
/// the element's transform, so it cannot leak into sibling nodes.
pub fn text_label_rotated(
    content: &str,
    x: f64,
    y: f64,
    angle: f64,
    anchor: &str,
    baseline: &str,
    font_size: f64,
    style: &AxesStyle,
) -> Text {
    Text::new()
        .set("font-family", style.font_family.clone())
        .set("font-size", font_size)
        .set("text-anchor", anchor)
        .set("dominant-baseline", baseline)
        .set("stroke", "none")
        .set("fill", style.tick_fill.clone())
        .set(
            "transform",
            format!("translate({}, {}) rotate({})", x, y, angle),
        )
        .add(nodeText::new(content))
}
