use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::layout::{compute_layout, Margins, TextMeasure};
use crate::scale::LinearScale;
use crate::style::AxesStyle;
use crate::ticks::{generate_ticks, tick_labels};

fn default_tick_count() -> usize {
    10
}

/// Chart description consumed by [`PlotEnv::new`], loadable from JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Data interval for the x axis.
    pub x_domain: [f64; 2],
    /// Data interval for the y axis.
    pub y_domain: [f64; 2],
    #[serde(default = "default_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_tick_count")]
    pub y_tick_count: usize,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> ChartOptions {
        ChartOptions {
            width: 900.0,
            height: 600.0,
            x_domain: [0.0, 1.0],
            y_domain: [0.0, 1.0],
            x_tick_count: default_tick_count(),
            y_tick_count: default_tick_count(),
            x_label: None,
            y_label: None,
        }
    }
}

/// Immutable snapshot of everything a redraw needs.
///
/// Built once per relevant change by the caller and handed to the
/// renderer whole; nothing in it is mutated after construction. The
/// scales map into the inner rectangle, with the y scale inverted so
/// increasing data values move up the canvas.
#[derive(Clone, Debug)]
pub struct PlotEnv {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub inner_width: f64,
    pub inner_height: f64,
    pub x_domain: [f64; 2],
    pub y_domain: [f64; 2],
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub x_tick_labels: Vec<String>,
    pub y_tick_labels: Vec<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
}

impl PlotEnv {
    /// Run the layout pipeline: ticks, then margins, then scales.
    ///
    /// Degenerate or non-finite domain bounds surface as
    /// `Error::InvalidDomain` from scale construction; callers with flat
    /// data must widen the domain before building an env.
    pub fn new(
        options: &ChartOptions,
        style: &AxesStyle,
        measure: &dyn TextMeasure,
    ) -> Result<PlotEnv, Error> {
        let x_ticks = generate_ticks(options.x_domain[0], options.x_domain[1], options.x_tick_count);
        let y_ticks = generate_ticks(options.y_domain[0], options.y_domain[1], options.y_tick_count);
        let x_tick_labels = tick_labels(&x_ticks);
        let y_tick_labels = tick_labels(&y_ticks);

        let layout = compute_layout(
            options.width,
            options.height,
            options.x_label.is_some(),
            options.y_label.is_some(),
            &y_tick_labels,
            style,
            measure,
        );

        let x_scale = LinearScale::new(options.x_domain, [0.0, layout.inner_width])?;
        let y_scale = LinearScale::new(options.y_domain, [layout.inner_height, 0.0])?;

        Ok(PlotEnv {
            width: options.width,
            height: options.height,
            margins: layout.margins,
            inner_width: layout.inner_width,
            inner_height: layout.inner_height,
            x_domain: options.x_domain,
            y_domain: options.y_domain,
            x_ticks,
            y_ticks,
            x_tick_labels,
            y_tick_labels,
            x_label: options.x_label.clone(),
            y_label: options.y_label.clone(),
            x_scale,
            y_scale,
        })
    }
}
