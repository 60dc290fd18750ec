//! Unordered pairs of a sequence, in a canonical order.
//!
//! Each item is paired with every later item, by index.
//! Pairs are ordered first by the index of the first item, then by the index of the second.
//!
//! ```rust
//! # use otter_cnf::generic::pairs::combination;
//! let pairs = combination(&[1, 2, 3, 4]).collect::<Vec<_>>();
//!
//! assert_eq!(pairs, vec![(&1, &2), (&1, &3), (&1, &4), (&2, &3), (&2, &4), (&3, &4)]);
//! ```
//!
//! The order is relied on when writing pairwise constraints, as it fixes the order of clauses in a written formula.

/// An iterator over all unordered pairs of `items`, in canonical order.
pub fn combination<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items
        .iter()
        .enumerate()
        .flat_map(move |(index, a)| items[index + 1..].iter().map(move |b| (a, b)))
}

/// The number of unordered pairs of `n` items.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
