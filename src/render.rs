use std::path::PathBuf;
use std::str::FromStr;

use svg::node::element::path::Data;
use svg::node::element::{Group, Line, Rectangle};
use svg::Document;
use usvg::{fontdb, TreeParsing, TreeTextToPath};

use crate::env::PlotEnv;
use crate::error::Error;
use crate::style::{path_open, text_label, text_label_rotated, AxesStyle};

/// A raster drawing surface.
///
/// Construction with a zero dimension yields the unavailable state, on
/// which rendering and saving degrade to no-ops. A missing surface is a
/// host-lifecycle condition, not a data error, so none of these methods
/// fail because of it.
#[derive(Clone, Debug)]
pub struct Surface {
    pixmap: Option<tiny_skia::Pixmap>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Surface {
        Surface {
            pixmap: tiny_skia::Pixmap::new(width, height),
        }
    }

    pub fn is_available(&self) -> bool {
        self.pixmap.is_some()
    }

    pub fn width(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, |pixmap| pixmap.width())
    }

    pub fn height(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, |pixmap| pixmap.height())
    }

    /// Raw RGBA pixel bytes, or `None` when unavailable.
    pub fn data(&self) -> Option<&[u8]> {
        self.pixmap.as_ref().map(|pixmap| pixmap.data())
    }

    pub fn clear(&mut self) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(tiny_skia::Color::TRANSPARENT);
        }
    }

    pub fn save_png(&self, output: &str) -> Result<(), Error> {
        match self.pixmap.as_ref() {
            Some(pixmap) => pixmap
                .save_png(output)
                .map_err(|err| Error::WriterError(err.to_string())),
            None => Ok(()),
        }
    }
}

fn axis_line(x1: f64, y1: f64, x2: f64, y2: f64, style: &AxesStyle) -> Line {
    Line::new()
        .set("fill", "none")
        .set("stroke", style.axes_stroke.clone())
        .set("stroke-width", style.axes_weight)
        .set("stroke-linecap", "round")
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
}

/// Assemble the axes decoration for an environment as an SVG group.
///
/// Baselines sit on the margin edges; each tick carries a full-length
/// gridline and a label. Tick label alignment follows the axis: centered
/// below the x baseline, right-aligned and vertically centered beside the
/// y baseline. The y axis title is rotated 90° counter-clockwise via its
/// own element transform.
pub fn axes_group(env: &PlotEnv, style: &AxesStyle) -> Group {
    let x_axis_y = env.height - env.margins.bottom;
    let right_edge = env.width - env.margins.right;
    let mut group = Group::new();

    group = group.add(axis_line(
        env.margins.left,
        x_axis_y,
        right_edge,
        x_axis_y,
        style,
    ));
    group = group.add(axis_line(
        env.margins.left,
        x_axis_y,
        env.margins.left,
        env.margins.top,
        style,
    ));

    for (tick, label) in env.x_ticks.iter().zip(env.x_tick_labels.iter()) {
        let x = env.x_scale.scale(*tick) + env.margins.left;
        let gridline = Data::new()
            .move_to((x, x_axis_y))
            .line_to((x, env.margins.top));
        group = group.add(path_open(gridline, &style.axes_stroke, style.grid_weight));
        group = group.add(text_label(
            label,
            x,
            x_axis_y + style.tick_padding_top,
            "middle",
            "hanging",
            style.tick_font_size,
            style,
        ));
    }

    for (tick, label) in env.y_ticks.iter().zip(env.y_tick_labels.iter()) {
        let y = env.y_scale.scale(*tick) + env.margins.top;
        let gridline = Data::new()
            .move_to((env.margins.left, y))
            .line_to((right_edge, y));
        group = group.add(path_open(gridline, &style.axes_stroke, style.grid_weight));
        group = group.add(text_label(
            label,
            env.margins.left - style.tick_padding_right,
            y,
            "end",
            "middle",
            style.tick_font_size,
            style,
        ));
    }

    if let Some(x_label) = &env.x_label {
        group = group.add(text_label(
            x_label,
            env.margins.left + env.inner_width / 2.0,
            env.height - style.plot_padding,
            "middle",
            "auto",
            style.label_font_size,
            style,
        ));
    }

    if let Some(y_label) = &env.y_label {
        group = group.add(text_label_rotated(
            y_label,
            style.plot_padding,
            env.margins.top + env.inner_height / 2.0,
            -90.0,
            "middle",
            "hanging",
            style.label_font_size,
            style,
        ));
    }

    group
}

/// Wrap the axes group in a standalone document with a white background.
pub fn axes_document(env: &PlotEnv, style: &AxesStyle) -> Document {
    Document::new()
        .set("viewBox", (0.0, 0.0, env.width, env.height))
        .set("width", env.width)
        .set("height", env.height)
        .add(
            Rectangle::new()
                .set("fill", "#ffffff")
                .set("stroke", "none")
                .set("width", env.width)
                .set("height", env.height),
        )
        .add(axes_group(env, style))
}

/// Redraw the axes for `env` onto `surface` from scratch.
///
/// The surface is cleared on entry and every invocation is a full
/// redraw, so repeated calls with the same env produce identical pixels.
/// An unavailable surface or an unrasterizable document (zero-sized
/// canvas) makes this a no-op.
pub fn render_axes(surface: &mut Surface, env: &PlotEnv, style: &AxesStyle) {
    surface.clear();
    let pixmap = match surface.pixmap.as_mut() {
        Some(pixmap) => pixmap,
        None => return,
    };

    let document = axes_document(env, style);
    let mut buf = Vec::new();
    if svg::write(&mut buf, &document).is_err() {
        return;
    }
    let opt = usvg::Options::default();
    let mut tree = match usvg::Tree::from_data(buf.as_slice(), &opt) {
        Ok(tree) => tree,
        Err(_) => return,
    };
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    tree.convert_text(&fontdb);

    let _ = resvg::render(
        &tree,
        resvg::FitTo::Size(pixmap.width(), pixmap.height()),
        tiny_skia::Transform::default(),
        pixmap.as_mut(),
    );
}

pub fn save_svg(document: &Document, output: &str) -> Result<(), Error> {
    svg::save(output, document)?;
    Ok(())
}

pub fn save_png(env: &PlotEnv, style: &AxesStyle, output: &str) -> Result<(), Error> {
    let mut surface = Surface::new(env.width as u32, env.height as u32);
    render_axes(&mut surface, env, style);
    surface.save_png(output)
}

pub enum Suffix {
    PNG,
    SVG,
}

impl FromStr for Suffix {
    type Err = ();
    fn from_str(input: &str) -> Result<Suffix, Self::Err> {
        match input {
            "png" => Ok(Suffix::PNG),
            "svg" => Ok(Suffix::SVG),
            _ => Err(()),
        }
    }
}

/// Save the rendered axes to `output`, dispatching on its extension.
pub fn save_by_suffix(env: &PlotEnv, style: &AxesStyle, output: &str) -> Result<(), Error> {
    let suffix_str = PathBuf::from(output)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_string();
    match Suffix::from_str(&suffix_str) {
        Ok(Suffix::PNG) => save_png(env, style, output),
        Ok(Suffix::SVG) => save_svg(&axes_document(env, style), output),
        Err(_) => Err(Error::InvalidImageSuffix(suffix_str)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ChartOptions;
    use crate::layout::CharWidthMeasure;

    fn small_env() -> PlotEnv {
        let options = ChartOptions {
            width: 120.0,
            height: 90.0,
            x_domain: [0.0, 10.0],
            y_domain: [0.0, 5.0],
            x_tick_count: 2,
            y_tick_count: 2,
            x_label: Some("x".to_string()),
            y_label: Some("y".to_string()),
        };
        PlotEnv::new(&options, &AxesStyle::default(), &CharWidthMeasure::default()).unwrap()
    }

    #[test]
    fn test_render_is_idempotent() {
        let env = small_env();
        let style = AxesStyle::default();
        let mut surface = Surface::new(120, 90);
        render_axes(&mut surface, &env, &style);
        let first = surface.data().unwrap().to_vec();
        render_axes(&mut surface, &env, &style);
        let second = surface.data().unwrap().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_fresh_surfaces_match() {
        let env = small_env();
        let style = AxesStyle::default();
        let mut a = Surface::new(120, 90);
        let mut b = Surface::new(120, 90);
        render_axes(&mut a, &env, &style);
        render_axes(&mut b, &env, &style);
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_render_draws_something() {
        let env = small_env();
        let style = AxesStyle::default();
        let mut surface = Surface::new(120, 90);
        render_axes(&mut surface, &env, &style);
        let blank = vec![0u8; surface.data().unwrap().len()];
        assert_ne!(surface.data().unwrap(), blank.as_slice());
    }

    #[test]
    fn test_unavailable_surface_is_noop() {
        let env = small_env();
        let style = AxesStyle::default();
        let mut surface = Surface::new(0, 0);
        assert!(!surface.is_available());
        render_axes(&mut surface, &env, &style);
        assert_eq!(surface.data(), None);
        assert!(surface.save_png("unused.png").is_ok());
    }

    #[test]
    fn test_axes_document_is_deterministic() {
        let env = small_env();
        let style = AxesStyle::default();
        let first = axes_document(&env, &style).to_string();
        let second = axes_document(&env, &style).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_save_rejects_unknown_suffix() {
        let env = small_env();
        let style = AxesStyle::default();
        let result = save_by_suffix(&env, &style, "chart.gif");
        assert!(matches!(result, Err(Error::InvalidImageSuffix(_))));
    }
}
