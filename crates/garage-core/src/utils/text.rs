use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncate text to `max_width` terminal columns, ending in "..." when cut
///
/// # Examples
/// ```
/// use garage_core::utils::text::truncate_text;
/// assert_eq!(truncate_text("Fren pedalı sert", 10), "Fren pe...");
/// ```
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    if max_width <= ELLIPSIS.len() {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ELLIPSIS.len();
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}

/// Section heading with an underline of matching width
pub fn heading(title: &str) -> String {
    format!("{}\n{}", title, "=".repeat(title.width()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Hello", 10), "Hello");
        assert_eq!(truncate_text("Hello World!", 8), "Hello...");
        assert_eq!(truncate_text("", 5), "");
        assert_eq!(truncate_text("Hello", 2), "..");
    }

    #[test]
    fn test_truncate_counts_columns_not_bytes() {
        // Turkish letters are multi-byte but one column wide
        assert_eq!(truncate_text("Ayşe Kaya", 9), "Ayşe Kaya");
        assert_eq!(truncate_text("Ateşleme Sistemi", 8), "Ateşl...");
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading("Müşteri"), "Müşteri\n=======");
    }
}
