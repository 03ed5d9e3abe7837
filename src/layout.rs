use crate::style::AxesStyle;

/// Width measurement for rendered text, supplied by the host surface.
///
/// Layout only needs widths, so the capability is a single method; a
/// rasterizer-backed implementation can be injected where precise glyph
/// metrics matter.
pub trait TextMeasure {
    /// Width in pixels of `text` rendered at `font_size`.
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// Approximate measurer assuming an average glyph width that is a fixed
/// fraction of the font size.
#[derive(Clone, Copy, Debug)]
pub struct CharWidthMeasure {
    pub factor: f64,
}

impl Default for CharWidthMeasure {
    fn default() -> CharWidthMeasure {
        CharWidthMeasure { factor: 0.7 }
    }
}

impl TextMeasure for CharWidthMeasure {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * self.factor
    }
}

/// Pixel space reserved around the inner plot rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Computed plot geometry: margins plus the inner rectangle they leave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub margins: Margins,
    pub inner_width: f64,
    pub inner_height: f64,
}

/// Compute margins and the inner plotting rectangle for a canvas.
///
/// The left margin fits the widest y tick label plus tick padding, the
/// bottom margin fits one line of tick labels, and each axis title adds a
/// band of label-font height. When the canvas is too small for the
/// margins they are scaled down so the inner rectangle floors at zero
/// rather than going negative.
pub fn compute_layout(
    width: f64,
    height: f64,
    has_x_label: bool,
    has_y_label: bool,
    y_tick_labels: &[String],
    style: &AxesStyle,
    measure: &dyn TextMeasure,
) -> Layout {
    let width = width.max(0.0);
    let height = height.max(0.0);

    let widest_y_label = y_tick_labels
        .iter()
        .map(|label| measure.text_width(label, style.tick_font_size))
        .fold(0.0, f64::max);

    let x_label_band = if has_x_label {
        style.label_font_size
    } else {
        0.0
    };
    let y_label_band = if has_y_label {
        style.label_font_size
    } else {
        0.0
    };

    let top = style.plot_padding;
    let right = style.plot_padding;
    let bottom =
        style.plot_padding + x_label_band + style.tick_font_size + style.tick_padding_top;
    let left = style.plot_padding + y_label_band + widest_y_label + style.tick_padding_right;

    let (left, right) = clamp_pair(left, right, width);
    let (top, bottom) = clamp_pair(top, bottom, height);

    Layout {
        margins: Margins {
            top,
            right,
            bottom,
            left,
        },
        inner_width: (width - left - right).max(0.0),
        inner_height: (height - top - bottom).max(0.0),
    }
}

// Scale a pair of opposing margins down so their sum never exceeds the
// available extent.
fn clamp_pair(a: f64, b: f64, extent: f64) -> (f64, f64) {
    let total = a + b;
    if total > extent && total > 0.0 {
        let scale = extent / total;
        (a * scale, b * scale)
    } else {
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_layout_reserves_space_for_widest_label() {
        let style = AxesStyle::default();
        let measure = CharWidthMeasure::default();
        let narrow = compute_layout(900.0, 600.0, false, false, &labels(&["1"]), &style, &measure);
        let wide = compute_layout(
            900.0,
            600.0,
            false,
            false,
            &labels(&["1", "100000"]),
            &style,
            &measure,
        );
        assert!(wide.margins.left > narrow.margins.left);
        assert!(wide.inner_width < narrow.inner_width);
    }

    #[test]
    fn test_layout_axis_titles_add_bands() {
        let style = AxesStyle::default();
        let measure = CharWidthMeasure::default();
        let bare = compute_layout(900.0, 600.0, false, false, &labels(&["10"]), &style, &measure);
        let titled = compute_layout(900.0, 600.0, true, true, &labels(&["10"]), &style, &measure);
        assert!(
            (titled.margins.bottom - bare.margins.bottom - style.label_font_size).abs() < 1e-9
        );
        assert!((titled.margins.left - bare.margins.left - style.label_font_size).abs() < 1e-9);
    }

    #[test]
    fn test_layout_never_goes_negative() {
        let style = AxesStyle::default();
        let measure = CharWidthMeasure::default();
        for (width, height) in [(0.0, 0.0), (10.0, 10.0), (30.0, 500.0), (2000.0, 1.0)] {
            let layout = compute_layout(
                width,
                height,
                true,
                true,
                &labels(&["100000"]),
                &style,
                &measure,
            );
            assert!(layout.inner_width >= 0.0);
            assert!(layout.inner_height >= 0.0);
            assert!(layout.margins.left + layout.margins.right <= width + 1e-9);
            assert!(layout.margins.top + layout.margins.bottom <= height + 1e-9);
        }
    }

    #[test]
    fn test_char_width_measure_scales_with_length() {
        let measure = CharWidthMeasure::default();
        assert!((measure.text_width("ab", 10.0) - 14.0).abs() < 1e-9);
        assert!(measure.text_width("abc", 10.0) > measure.text_width("ab", 10.0));
    }
}
