//! Partition primitives.
//!
//! The two distribution mechanics the strategies are built from. Both
//! operate on plain values and know nothing about people or genders:
//!
//! - [`slice_sizes`]: size plan for a contiguous-slice partition
//! - [`round_robin_drain`]: cyclic one-at-a-time assignment

/// Size plan for a contiguous-slice partition of `n` items into `k` groups.
///
/// The first `n % k` groups get `n / k + 1` items, the rest `n / k`, so
/// sizes differ by at most 1 and the larger groups sit at the low indices.
/// Sizes sum to `n`; `k > n` yields trailing zero-size groups.
///
/// # Panics
/// Panics if `k == 0`.
pub fn slice_sizes(n: usize, k: usize) -> Vec<usize> {
    assert!(k > 0, "group count must be at least 1");
    let base = n / k;
    let rem = n % k;
    (0..k).map(|i| base + usize::from(i < rem)).collect()
}

/// Drains `source` into `groups` round-robin.
///
/// Repeatedly removes the **last** element of `source` and appends it to
/// the group at the cursor, advancing the cursor `(cursor + 1) % k`. The
/// cursor starts at group 0 on every call, so consecutive drains over the
/// same groups each begin at the low index rather than continuing where
/// the previous pass stopped.
///
/// After one drain, group item counts differ by at most 1, with the
/// surplus at the low indices.
///
/// # Panics
/// Panics if `groups` is empty.
pub fn round_robin_drain<T>(source: &mut Vec<T>, groups: &mut [Vec<T>]) {
    assert!(!groups.is_empty(), "group count must be at least 1");
    let mut cursor = 0;
    while let Some(item) = source.pop() {
        groups[cursor].push(item);
        cursor = (cursor + 1) % groups.len();
    }
}
