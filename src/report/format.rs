//! Dollar and count formatting for summary cards, tables and chart axes

/// Group an integer with comma thousands separators: `1234567` -> `1,234,567`
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole number with separators, as shown for customer counts
pub fn format_number(value: f64) -> String {
    group_thousands(value.round() as i64)
}

/// Whole dollars with separators: `61800.4` -> `$61,800`
pub fn format_currency(value: f64) -> String {
    format!("${}", format_number(value))
}

/// Compact dollars for summary cards: `$1.23M`, `$5.2K`, `$950`
pub fn format_currency_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format_currency(value)
    }
}

/// Dollar axis ticks: `$1.2M`, `$62K`, `$950`
pub fn format_axis_currency(value: f64) -> String {
    format!("${}", format_axis_number(value))
}

/// Count axis ticks: `1.2M`, `62K`, `950`
pub fn format_axis_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        value.to_string()
    }
}
