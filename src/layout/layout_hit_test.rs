use ratatui::layout::{Position, Rect};

use super::layout_regions::{LayoutRegions, Region};

// Overlays first: the dropdown is drawn on top of the page
const HIT_ORDER: [Region; 5] = [
    Region::SuggestionPopup,
    Region::SearchInput,
    Region::Header,
    Region::Footer,
    Region::Page,
];

/// Region under a screen position, if any
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);
    HIT_ORDER
        .into_iter()
        .find(|region| {
            regions
                .area(*region)
                .is_some_and(|area| area.contains(position))
        })
}

/// Row offset inside a bordered popup, or None on the border
pub fn suggestion_row_at(popup: Rect, column: u16, row: u16) -> Option<usize> {
    let inner_left = popup.x + 1;
    let inner_right = popup.right().saturating_sub(1);
    let inner_top = popup.y + 1;
    let inner_bottom = popup.bottom().saturating_sub(1);

    if column < inner_left || column >= inner_right || row < inner_top || row >= inner_bottom {
        return None;
    }
    Some((row - inner_top) as usize)
}
