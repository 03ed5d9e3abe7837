//! `minard` is a small 2D chart axes engine: linear scale mapping, "nice"
//! tick generation, margin layout and an axis renderer that composes SVG
//! and rasterizes it onto a pixel surface.

/// The minard Command Line Interface.
pub mod cli;

/// Plot environment snapshots consumed by the renderer.
pub mod env;

/// Error types.
pub mod error;

/// Margins, inner-rectangle layout and text measurement.
pub mod layout;

/// Axis rendering to SVG documents and raster surfaces.
pub mod render;

/// Command dispatch for the `minard` binary.
pub mod run;

/// Continuous scales mapping data values to pixel offsets.
pub mod scale;

/// Axes styling options and SVG helpers.
pub mod style;

/// Nice tick generation and labelling.
pub mod ticks;

/// Utility functions.
pub mod utils;
