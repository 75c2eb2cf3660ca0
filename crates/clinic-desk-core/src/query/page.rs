//! Fixed-size pagination over filtered collections.

/// Page size for every entity listing.
pub const PAGE_SIZE: usize = 10;

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The records on this page (at most [`PAGE_SIZE`])
    pub items: Vec<T>,
    /// The effective 1-based page number after clamping
    pub page: usize,
    /// ceil(len / PAGE_SIZE); 0 for an empty collection
    pub total_pages: usize,
}

/// Clamp a requested 1-based page into the valid range.
///
/// An empty collection (zero pages) clamps to page 1 so the view always
/// has a well-defined position.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        1
    } else {
        page.clamp(1, total_pages)
    }
}

/// Take the requested page of a filtered collection.
///
/// The page number is re-clamped against the current length, so a caller
/// holding page 3 of a list that shrank to two pages lands on page 2.
pub fn paginate<T: Clone>(list: &[T], page: usize) -> Page<T> {
    let total_pages = list.len().div_ceil(PAGE_SIZE);
    let page = clamp_page(page, total_pages);
    let start = (page - 1) * PAGE_SIZE;
    let items = list
        .iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();
    Page {
        items,
        page,
        total_pages,
    }
}
