use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Catalog names and categories are mostly
/// full-width Japanese, so this is byte-length / char-count agnostic.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…`
/// if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Pad a string with trailing spaces to exactly `cells` terminal cells,
/// truncating first if it is too wide.
pub fn pad_to_width(s: &str, cells: usize) -> String {
    let truncated = truncate_to_width(s, cells);
    let w = display_width(&truncated);
    format!("{}{}", truncated, " ".repeat(cells.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_full_width() {
        assert_eq!(display_width("調剤"), 4);
        assert_eq!(display_width("09:00"), 5);
    }

    #[test]
    fn test_truncate_full_width() {
        assert_eq!(truncate_to_width("処方入力", 8), "処方入力");
        assert_eq!(truncate_to_width("処方入力", 6), "処方\u{2026}");
        // A full-width char that would straddle the budget is dropped
        assert_eq!(truncate_to_width("処方入力", 5), "処方\u{2026}");
        assert_eq!(truncate_to_width("処方入力", 0), "");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("監査", 6), "監査  ");
        assert_eq!(display_width(&pad_to_width("レセプト請求", 8)), 8);
    }
}
