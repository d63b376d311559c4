//! Unordered pair enumeration
//!
//! Visits `(items[i], items[j])` for every `i < j`, with `i` ascending and
//! then `j` ascending. Quadratic; entity counts in the mini-games are in the
//! tens, so there is no spatial index here.

/// Number of unordered pairs in `n` items
#[inline]
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Call `visit` once for every unordered pair of `items`
pub fn for_each_pair<T, F>(items: &[T], mut visit: F)
where
    F: FnMut(&T, &T),
{
    for_each_pair_indexed(items, |_, _, a, b| visit(a, b));
}

/// Like `for_each_pair`, also passing the pair's indices `(i, j)`
pub fn for_each_pair_indexed<T, F>(items: &[T], mut visit: F)
where
    F: FnMut(usize, usize, &T, &T),
{
    for (i, a) in items.iter().enumerate() {
        for (j, b) in items.iter().enumerate().skip(i + 1) {
            visit(i, j, a, b);
        }
    }
}

/// First pair in scan order for which `pred` holds
///
/// Stops scanning as soon as a match is found.
pub fn find_pair<T, F>(items: &[T], mut pred: F) -> Option<(usize, usize)>
where
    F: FnMut(&T, &T) -> bool,
{
    for (i, a) in items.iter().enumerate() {
        for (j, b) in items.iter().enumerate().skip(i + 1) {
            if pred(a, b) {
                return Some((i, j));
            }
        }
    }
    None
}
