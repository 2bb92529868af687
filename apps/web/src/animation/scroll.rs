//! In-page anchor smooth scrolling.

pub const HEADER_OFFSET: f64 = 80.0;

/// Whether an anchor's click should be taken over: the href is an in-page
/// fragment other than a bare `#`, and it resolved to an element.
pub fn handles_anchor(href: &str, target_found: bool) -> bool {
    href.starts_with('#') && href != "#" && target_found
}

/// Document scroll position that puts the target just below the fixed header.
pub fn scroll_top(target_viewport_top: f64, page_y_offset: f64) -> f64 {
    target_viewport_top + page_y_offset - HEADER_OFFSET
}
