use rust_decimal::prelude::*;

/// Format a value with an SI magnitude suffix, e.g. `1500.0` -> `"1.5k"`.
///
/// `digits` is the number of significant figures to retain.
pub fn format_si(value: f64, digits: u32) -> String {
    fn set_suffix(thousands: i8) -> String {
        const POSITIVE: [&str; 9] = ["", "k", "M", "G", "T", "P", "E", "Z", "Y"];
        const NEGATIVE: [&str; 9] = ["", "m", "µ", "p", "n", "f", "a", "z", "y"];
        let suffix = if thousands < 0 && thousands >= -9 {
            NEGATIVE[(thousands * -1) as usize]
        } else if thousands >= 0 && thousands <= 9 {
            POSITIVE[thousands as usize]
        } else {
            ""
        };
        suffix.to_string()
    }

    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10() as i8;
    let thousands = magnitude / 3;
    let prefix = if thousands < 0 {
        value * 10u32.pow(3 * thousands.unsigned_abs() as u32) as f64
    } else {
        value / 10u32.pow(3 * thousands as u32) as f64
    };
    let d = match Decimal::from_f64_retain(prefix) {
        Some(d) => d,
        None => return format!("{}", value),
    };
    let rounded = d
        .round_sf_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
        .unwrap_or(d)
        .normalize()
        .to_string();

    let suffix = set_suffix(thousands);
    format!("{}{}", rounded, suffix)
}
