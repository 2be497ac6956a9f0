//! Tests for layout_hit_test

use super::*;
use ratatui::layout::Rect;

fn screen() -> LayoutRegions {
    LayoutRegions {
        header: Some(Rect::new(0, 0, 80, 2)),
        search_input: Some(Rect::new(0, 2, 80, 3)),
        suggestion_popup: Some(Rect::new(0, 5, 80, 6)),
        page: Some(Rect::new(0, 5, 80, 17)),
        footer: Some(Rect::new(0, 22, 80, 2)),
    }
}

#[test]
fn test_each_region_is_hit() {
    let regions = screen();
    assert_eq!(region_at(&regions, 10, 0), Some(Region::Header));
    assert_eq!(region_at(&regions, 10, 3), Some(Region::SearchInput));
    assert_eq!(region_at(&regions, 10, 23), Some(Region::Footer));
    assert_eq!(region_at(&regions, 10, 15), Some(Region::Page));
}

#[test]
fn test_popup_wins_over_page() {
    let regions = screen();
    assert_eq!(region_at(&regions, 10, 7), Some(Region::SuggestionPopup));
}

#[test]
fn test_page_is_hit_once_popup_is_gone() {
    let mut regions = screen();
    regions.suggestion_popup = None;
    assert_eq!(region_at(&regions, 10, 7), Some(Region::Page));
}

#[test]
fn test_outside_every_region() {
    let regions = screen();
    assert_eq!(region_at(&regions, 100, 3), None);
    assert_eq!(region_at(&LayoutRegions::new(), 0, 0), None);
}

#[test]
fn test_suggestion_row_at_maps_inner_rows() {
    let popup = Rect::new(0, 5, 80, 6);
    assert_eq!(suggestion_row_at(popup, 10, 6), Some(0));
    assert_eq!(suggestion_row_at(popup, 10, 9), Some(3));
}

#[test]
fn test_suggestion_row_at_ignores_border() {
    let popup = Rect::new(0, 5, 80, 6);
    assert_eq!(suggestion_row_at(popup, 10, 5), None);
    assert_eq!(suggestion_row_at(popup, 10, 10), None);
    assert_eq!(suggestion_row_at(popup, 0, 7), None);
    assert_eq!(suggestion_row_at(popup, 79, 7), None);
}
