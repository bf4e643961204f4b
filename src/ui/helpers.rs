//! Layout and text helpers shared by the views.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` display columns, ending in "..." when
/// cut. Wide characters count as two columns.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Scroll offset that keeps rows `[start, end)` inside a viewport of
/// `height` rows, moving as little as possible from `current`.
pub fn scroll_to_show(current: u16, start: u16, end: u16, height: u16) -> u16 {
    if height == 0 {
        return current;
    }
    if start < current {
        start
    } else if end > current + height {
        // Tall blocks pin their top instead of their bottom.
        end.saturating_sub(height).min(start)
    } else {
        current
    }
}
