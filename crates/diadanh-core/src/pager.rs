// crates/diadanh-core/src/pager.rs
use crate::error::{GazetteerError, Result};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// `max(1, ceil(len / page_size))`. A zero page size counts as one page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Returns the 1-based `page_number` of `results`.
///
/// Does not clamp: a page past the end is an empty slice. Keeping the page
/// number in range is the caller's job.
pub fn page<T>(results: &[T], page_number: usize, page_size: usize) -> Result<&[T]> {
    if page_number == 0 {
        return Err(GazetteerError::InvalidArgument("page numbers start at 1".into()));
    }
    if page_size == 0 {
        return Err(GazetteerError::InvalidArgument("page size must be positive".into()));
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= results.len() {
        return Ok(&[]);
    }
    let end = start.saturating_add(page_size).min(results.len());
    Ok(&results[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn first_page_is_bounded() {
        let r: Vec<u32> = (0..25).collect();
        assert_eq!(page(&r, 1, 10).unwrap(), &r[..10]);
        assert_eq!(page(&r, 3, 10).unwrap(), &r[20..]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let r: Vec<u32> = (0..5).collect();
        assert!(page(&r, 2, 10).unwrap().is_empty());
        assert!(page(&r, usize::MAX, 10).unwrap().is_empty());
        assert!(page::<u32>(&[], 1, 10).unwrap().is_empty());
    }

    #[test]
    fn pages_reassemble_the_input() {
        for len in [0usize, 1, 9, 10, 11, 37] {
            let r: Vec<usize> = (0..len).collect();
            let pages = total_pages(r.len(), 10);
            let joined: Vec<usize> = (1..=pages)
                .flat_map(|p| page(&r, p, 10).unwrap().iter().copied())
                .collect();
            assert_eq!(joined, r);
        }
    }

    #[test]
    fn zero_arguments_are_rejected() {
        let r = [1, 2, 3];
        assert!(matches!(page(&r, 0, 10), Err(GazetteerError::InvalidArgument(_))));
        assert!(matches!(page(&r, 1, 0), Err(GazetteerError::InvalidArgument(_))));
    }
}
