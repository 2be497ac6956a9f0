//! Screen regions of the last frame
//!
//! Rendering records where the header, search box, dropdown, page and
//! footer landed; mouse handling asks [`region_at`] which of them is under
//! the pointer and [`suggestion_row_at`] which dropdown row.

mod layout_hit_test;
mod layout_regions;

pub use layout_hit_test::{region_at, suggestion_row_at};
pub use layout_regions::{LayoutRegions, Region};


#[cfg(test)]
#[path = "layout/layout_hit_test_tests.rs"]
mod layout_hit_test_tests;
