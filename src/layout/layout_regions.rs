use ratatui::layout::Rect;

/// Clickable parts of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    SearchInput,
    SuggestionPopup,
    Page,
    Footer,
}

/// Where each region was drawn on the last frame
///
/// A region that was not drawn is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub header: Option<Rect>,
    pub search_input: Option<Rect>,
    pub suggestion_popup: Option<Rect>,
    pub page: Option<Rect>,
    pub footer: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything; called at the start of each frame
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn area(&self, region: Region) -> Option<Rect> {
        match region {
            Region::Header => self.header,
            Region::SearchInput => self.search_input,
            Region::SuggestionPopup => self.suggestion_popup,
            Region::Page => self.page,
            Region::Footer => self.footer,
        }
    }
}
