use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of the given size centered in `area`, clamped to fit
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    Rect {
        x: area.x + (area.width - popup_width) / 2,
        y: area.y + (area.height - popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

/// Rect directly below `anchor`, aligned to its left edge
///
/// Never wider than the anchor and never past the bottom of `bounds`.
pub fn popup_below_anchor(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let room_below = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(anchor.width),
        height: height.min(room_below),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
