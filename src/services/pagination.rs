pub const QUESTIONS_PER_PAGE: usize = 10;

/// Reads a 1-based page number. Absent or non-numeric input means page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(1)
}

/// Returns the `page`-th window of `page_size` items. Pages past the end,
/// and pages below 1, are empty rather than an error.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    if page < 1 || page_size == 0 {
        return &[];
    }

    let offset = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(page_size);
    let start = offset.min(items.len());
    let end = offset.saturating_add(page_size).min(items.len());

    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_len(total: usize, page: i64) -> usize {
        let skipped = QUESTIONS_PER_PAGE * (page as usize - 1);
        QUESTIONS_PER_PAGE.min(total.saturating_sub(skipped))
    }

    #[test]
    fn test_page_sizes_match_formula() {
        for total in [0usize, 1, 9, 10, 11, 19, 20, 35] {
            let items: Vec<usize> = (0..total).collect();
            for page in 1..=5 {
                assert_eq!(
                    paginate(&items, page, QUESTIONS_PER_PAGE).len(),
                    expected_len(total, page),
                    "total {} page {}",
                    total,
                    page
                );
            }
        }
    }

    #[test]
    fn test_second_page_starts_at_offset() {
        let items: Vec<i32> = (1..=19).collect();
        let page = paginate(&items, 2, QUESTIONS_PER_PAGE);
        assert_eq!(page.first(), Some(&11));
        assert_eq!(page.last(), Some(&19));
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<i32> = (1..=19).collect();
        assert!(paginate(&items, 3, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, 1000, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, i64::MAX, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, 0, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, -1, QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("2")), 2);
        assert_eq!(parse_page(Some(" 4 ")), 4);
        assert_eq!(parse_page(Some("two")), 1);
        assert_eq!(parse_page(Some("")), 1);
    }
}
