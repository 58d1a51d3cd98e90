//! Client-side pagination arithmetic for the all-posts listing.

/// Total page count for `len` items. An empty list still renders one
/// (empty) page so the controls have something to anchor to.
pub fn page_count(len: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    if len == 0 {
        1
    } else {
        let numerator = len.saturating_add(per_page - 1);
        usize::max(numerator / per_page, 1)
    }
}

/// Clamps a 1-based page index into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// The items visible on a 1-based page. Out-of-range pages clamp rather
/// than panic.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if items.is_empty() {
        return items;
    }
    let per_page = per_page.max(1);
    let safe_page = clamp_page(page, page_count(items.len(), per_page));
    let start = per_page.saturating_mul(safe_page - 1);
    let end = usize::min(start + per_page, items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::{clamp_page, page_count, page_slice};

    #[test]
    fn thirteen_items_at_six_per_page_make_three_pages() {
        assert_eq!(page_count(13, 6), 3);
        let items: Vec<usize> = (0..13).collect();
        assert_eq!(page_slice(&items, 1, 6).len(), 6);
        assert_eq!(page_slice(&items, 2, 6).len(), 6);
        assert_eq!(page_slice(&items, 3, 6).len(), 1);
        assert_eq!(page_slice(&items, 3, 6)[0], 12);
    }

    #[test]
    fn exact_fit_has_no_trailing_page() {
        assert_eq!(page_count(12, 6), 2);
    }

    #[test]
    fn empty_list_is_one_empty_page() {
        assert_eq!(page_count(0, 6), 1);
        let items: Vec<usize> = Vec::new();
        assert!(page_slice(&items, 1, 6).is_empty());
    }

    #[test]
    fn clamp_page_holds_both_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(3, 3), 3);
        assert_eq!(clamp_page(9, 3), 3);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let items: Vec<usize> = (0..13).collect();
        assert_eq!(page_slice(&items, 99, 6), page_slice(&items, 3, 6));
    }

    #[test]
    fn zero_per_page_is_treated_as_one() {
        let items: Vec<usize> = (0..3).collect();
        assert_eq!(page_count(3, 0), 3);
        assert_eq!(page_slice(&items, 2, 0), &[1]);
    }
}
