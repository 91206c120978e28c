//! Currency and percentage formatting for the presentation layer.

/// Formats an amount with thousands separators, zero decimal places, and
/// the configured currency suffix, e.g. `12,346 MAD`.
pub fn amount(value: f64, currency: &str) -> String {
    format!("{} {}", group_thousands(value), currency)
}

/// Formats a 0..=1 share as a percentage with one decimal, e.g. `66.7%`.
pub fn percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
