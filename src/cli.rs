use std::path::PathBuf;

use clap::{Parser, Subcommand};

fn tick_count_parser(s: &str) -> Result<usize, String> {
    let val = match s.parse::<usize>() {
        Ok(v) => v,
        Err(e) => return Err(format!("{:?}", e)),
    };
    if val == 0 {
        return Err("tick count must be at least 1".to_string());
    }
    if val > 1000 {
        return Err("tick count must be at most 1000".to_string());
    }
    Ok(val)
}

/// Top level arguments to `minard`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[clap(subcommand)]
    pub cmd: SubCommand,
}

/// `minard` subcommands
#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Render an axes-only chart to SVG or PNG.
    /// Called as `minard axes`
    Axes(AxesOptions),
    /// Print nice tick values for a domain.
    /// Called as `minard ticks`
    Ticks(TicksOptions),
}

/// Options to pass to `minard axes`
#[derive(Parser, Debug)]
pub struct AxesOptions {
    /// Path to a JSON chart spec (overrides the other chart flags)
    #[arg(long, short = 's', value_name = "JSON")]
    pub spec: Option<PathBuf>,
    /// Canvas width in pixels
    #[arg(long, short = 'w', default_value_t = 900.0)]
    pub width: f64,
    /// Canvas height in pixels
    #[arg(long, short = 'H', default_value_t = 600.0)]
    pub height: f64,
    /// Domain interval for the x axis
    #[arg(long = "x-domain", num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true, default_values_t = [0.0, 1.0])]
    pub x_domain: Vec<f64>,
    /// Domain interval for the y axis
    #[arg(long = "y-domain", num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true, default_values_t = [0.0, 1.0])]
    pub y_domain: Vec<f64>,
    /// Target tick count for the x axis
    #[arg(long = "x-ticks", default_value_t = 10, value_parser = tick_count_parser)]
    pub x_tick_count: usize,
    /// Target tick count for the y axis
    #[arg(long = "y-ticks", default_value_t = 10, value_parser = tick_count_parser)]
    pub y_tick_count: usize,
    /// Title for the x axis
    #[arg(long = "x-label")]
    pub x_label: Option<String>,
    /// Title for the y axis
    #[arg(long = "y-label")]
    pub y_label: Option<String>,
    /// Output filename
    #[arg(long, short = 'o', default_value_t = String::from("axes.svg"))]
    pub output: String,
}

/// Options to pass to `minard ticks`
#[derive(Parser, Debug)]
pub struct TicksOptions {
    /// Domain interval to generate ticks for
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true, required = true)]
    pub domain: Vec<f64>,
    /// Target tick count
    #[arg(long, short = 'c', default_value_t = 10, value_parser = tick_count_parser)]
    pub count: usize,
}

pub fn parse() -> Arguments {
    Arguments::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_axes_args() {
        let args = Arguments::parse_from([
            "minard", "axes", "--x-domain", "0", "100", "--y-domain", "-5", "5", "-o",
            "chart.png",
        ]);
        match args.cmd {
            SubCommand::Axes(options) => {
                assert_eq!(options.x_domain, vec![0.0, 100.0]);
                assert_eq!(options.y_domain, vec![-5.0, 5.0]);
                assert_eq!(options.output, "chart.png");
                assert_eq!(options.x_tick_count, 10);
            }
            _ => panic!("expected axes subcommand"),
        }
    }

    #[test]
    fn test_tick_count_must_be_positive() {
        assert!(tick_count_parser("0").is_err());
        assert!(tick_count_parser("10").is_ok());
        assert!(tick_count_parser("1001").is_err());
    }
}
