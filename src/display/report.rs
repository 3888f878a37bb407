//! Formatting helpers shared by the terminal renderers

/// Format a chart percentage with one decimal place, e.g. `85.7%`
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Horizontal bar scaled against `max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Heading followed by an underline of the same width
pub fn section_heading(title: &str) -> String {
    format!("{}\n{}\n", title, separator(title.chars().count()))
}

/// Format a separator line
fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters, ending in `...` when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(85.714), "85.7%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(100.0), "100.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(bar.chars().count(), 10);
        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
    }

    #[test]
    fn test_section_heading() {
        assert_eq!(section_heading("Expense"), "Expense\n───────\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Entertainment", 8), "Enter...");
        assert_eq!(truncate("Food", 8), "Food");
        assert_eq!(truncate("₹₹₹₹₹", 4), "₹...");
    }
}
