use std::fs::File;
use std::io::BufReader;

use crate::cli;
use crate::env::{ChartOptions, PlotEnv};
use crate::error::Error;
use crate::layout::CharWidthMeasure;
use crate::render::save_by_suffix;
use crate::style::AxesStyle;
use crate::ticks::{generate_ticks, tick_labels};

fn domain_pair(values: &[f64], axis: &str) -> Result<[f64; 2], Error> {
    let pair = [values[0], values[1]];
    if !pair[0].is_finite() || !pair[1].is_finite() || pair[0] >= pair[1] {
        return Err(Error::InvalidDomain(format!(
            "{} domain must be finite with min < max, got [{}, {}]",
            axis, pair[0], pair[1]
        )));
    }
    Ok(pair)
}

fn chart_options(options: &cli::AxesOptions) -> Result<ChartOptions, Error> {
    if let Some(spec) = &options.spec {
        let reader = BufReader::new(File::open(spec)?);
        let chart: ChartOptions = serde_json::from_reader(reader)?;
        return Ok(chart);
    }
    Ok(ChartOptions {
        width: options.width,
        height: options.height,
        x_domain: domain_pair(&options.x_domain, "x")?,
        y_domain: domain_pair(&options.y_domain, "y")?,
        x_tick_count: options.x_tick_count,
        y_tick_count: options.y_tick_count,
        x_label: options.x_label.clone(),
        y_label: options.y_label.clone(),
    })
}

pub fn axes(options: &cli::AxesOptions) -> Result<(), anyhow::Error> {
    let chart = chart_options(options)?;
    let style = AxesStyle::default();
    let measure = CharWidthMeasure::default();
    let env = PlotEnv::new(&chart, &style, &measure)?;
    save_by_suffix(&env, &style, &options.output)?;
    Ok(())
}

pub fn ticks(options: &cli::TicksOptions) -> Result<(), anyhow::Error> {
    let domain = domain_pair(&options.domain, "tick")?;
    let values = generate_ticks(domain[0], domain[1], options.count);
    let labels = tick_labels(&values);
    for (value, label) in values.iter().zip(labels.iter()) {
        println!("{}\t{}", value, label);
    }
    Ok(())
}

pub fn cmd(args: cli::Arguments) -> Result<(), anyhow::Error> {
    match args.cmd {
        cli::SubCommand::Axes(options) => axes(&options),
        cli::SubCommand::Ticks(options) => ticks(&options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_pair_validation() {
        assert!(domain_pair(&[0.0, 100.0], "x").is_ok());
        assert!(domain_pair(&[5.0, 5.0], "x").is_err());
        assert!(domain_pair(&[10.0, 0.0], "x").is_err());
        assert!(domain_pair(&[f64::NAN, 1.0], "x").is_err());
    }
}
