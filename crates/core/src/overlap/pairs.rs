//! Unordered pair enumeration over fund identifiers.

/// Enumerates all C(n,2) unordered pairs of `ids`.
///
/// Pairs come out in combinatorial order of the input: `(ids[i], ids[j])`
/// for every `i < j`, outer index ascending, inner index ascending. Fewer
/// than two ids yields an empty vector. The caller guarantees ids are
/// distinct; duplicates simply produce duplicate pairs.
pub fn fund_pairs<T: Clone>(ids: &[T]) -> Vec<(T, T)> {
    let n = ids.len();
    let mut pairs = Vec::with_capacity(n.saturating_sub(1) * n / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((ids[i].clone(), ids[j].clone()));
        }
    }
    pairs
}
