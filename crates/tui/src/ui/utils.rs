//! UI utilities shared by the components: layout math, hit testing and
//! label fitting.

use ratatui::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns a `width` x `height` rectangle anchored to the top-right corner of
/// `area`, shifted down by `top_offset` rows and clamped to fit.
pub fn anchored_top_right(area: Rect, width: u16, height: u16, top_offset: u16) -> Rect {
    let width = width.min(area.width);
    let y = area.y.saturating_add(top_offset).min(area.bottom());
    let height = height.min(area.bottom().saturating_sub(y));
    Rect::new(area.right().saturating_sub(width), y, width, height)
}

/// Whether the terminal cell at `column`/`row` lies inside `area`.
pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

/// Truncates `text` to at most `max_width` display columns, appending an
/// ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let limit = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("Dashboard", 20), "Dashboard");
        assert_eq!(truncate_to_width("Dashboard", 5), "Dash…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn anchored_rect_stays_inside_area() {
        let area = Rect::new(10, 0, 30, 10);
        let rect = anchored_top_right(area, 50, 4, 8);
        assert_eq!(rect, Rect::new(10, 8, 30, 2));
        assert!(rect_contains(rect, 10, 8));
        assert!(!rect_contains(rect, 40, 8));
    }
}
