//! Two-stage random selection of a background photo.
//!
//! The image API is paginated. Selection first draws a page index, then draws
//! a photo index whose range depends on whether the drawn page is the last
//! (possibly partial) page. The index is applied to the page that was
//! actually fetched; the drawn page is never requested.
//!
//! The page draw comes from `[0, total_pages)` and is floored at 1, so the
//! last page is only drawn when there is a single page.

use rand::Rng;

/// Source of uniformly distributed indices.
///
/// Isolated behind a trait so tests can script the draws.
#[cfg_attr(test, mockall::automock)]
pub trait IndexPicker: Send + Sync {
    /// Returns an index in `[0, upper)`. Callers guarantee `upper > 0`.
    fn pick_below(&self, upper: u64) -> u64;
}

/// [`IndexPicker`] backed by the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick_below(&self, upper: u64) -> u64 {
        let mut rng = rand::rng();
        rng.random_range(0..upper)
    }
}

/// Result of a photo selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoPick {
    /// The page drawn in the first stage (1-based).
    pub page: u64,
    /// Index into the fetched results.
    pub index: usize,
}

/// Picks a photo index for a fetched search page.
///
/// # Arguments
///
/// - `total` - total number of matching photos on the server
/// - `total_pages` - number of pages at `per_page` photos each
/// - `per_page` - page size the search was issued with
/// - `fetched` - number of results actually present in the fetched page
///
/// Returns `None` when there is nothing to pick from. Otherwise the returned
/// index always satisfies `index < fetched`.
pub fn select_photo(
    total: u64,
    total_pages: u64,
    per_page: u64,
    fetched: usize,
    picker: &dyn IndexPicker,
) -> Option<PhotoPick> {
    if total == 0 || total_pages == 0 || per_page == 0 || fetched == 0 {
        return None;
    }

    let page = picker.pick_below(total_pages).max(1);

    // `total_pages` is upstream data; an absurd value must not overflow.
    let last_page_count = per_page
        .checked_mul(total_pages - 1)
        .map_or(0, |before_last| total.saturating_sub(before_last));

    let upper = if page == total_pages {
        last_page_count
    } else {
        per_page
    };

    // Totals and the fetched page can disagree; the fetched page is authoritative.
    let upper = match upper.min(fetched as u64) {
        0 => fetched as u64,
        n => n,
    };

    let index = picker.pick_below(upper) as usize;

    Some(PhotoPick { page, index })
}
