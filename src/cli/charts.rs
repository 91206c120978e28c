//! Minimal text charts for the dashboard and reports pages.

/// Horizontal bar chart, one labeled row per entry, bars scaled to the
/// largest value. Returns an empty string when there is nothing to plot.
pub fn bar_chart(entries: &[(String, f64)], width: usize) -> String {
    let max = entries.iter().map(|(_, value)| *value).fold(0.0_f64, f64::max);
    if entries.is_empty() || max <= 0.0 {
        return String::new();
    }
    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|(label, value)| {
            let scaled = ((value / max) * width as f64).round() as usize;
            let bar_len = if *value > 0.0 { scaled.max(1) } else { 0 };
            format!("{:<w$}  {}", label, "█".repeat(bar_len), w = label_width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
