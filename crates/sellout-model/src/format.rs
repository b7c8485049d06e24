//! Numeric display formatting for sell-out values.

/// Renders `value` with a fixed number of decimals and a comma decimal
/// separator, the convention of the retail reports this engine feeds.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format_decimal_with(value, decimals, ',')
}

/// Separator-parametrized variant of [`format_decimal`] for other locales.
pub fn format_decimal_with(value: f64, decimals: usize, separator: char) -> String {
    let rendered = format!("{value:.decimals$}");
    if separator == '.' {
        rendered
    } else {
        rendered.replace('.', &String::from(separator))
    }
}
