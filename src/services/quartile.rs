/// Assign each value to one of `k` rank buckets (quartiles for `k = 4`).
///
/// Values are ranked over the whole input; equal values share the lowest
/// rank of their group, so ties never split across a boundary and a larger
/// value never lands in a lower bucket. Bucket `i` holds ranks whose
/// percentile falls in `(i/k, (i+1)/k]`.
///
/// Non-finite values are left out of the ranking and land in bucket 0.
/// Inputs with fewer than two distinct values put everything in bucket 0.
pub fn quantile_buckets(values: &[f64], k: usize) -> Vec<usize> {
    let mut out = vec![0; values.len()];
    if k <= 1 {
        return out;
    }

    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    finite.sort_by(f64::total_cmp);
    match (finite.first(), finite.last()) {
        (Some(lo), Some(hi)) if lo < hi => {}
        _ => return out,
    }
    let n = finite.len();

    for (slot, &value) in out.iter_mut().zip(values) {
        if !value.is_finite() {
            continue;
        }
        // Count of strictly smaller values = zero-based rank shared by ties.
        let rank = finite.partition_point(|&v| v < value);
        // ceil((rank + 1) * k / n) - 1
        let bucket = ((rank + 1) * k).div_ceil(n) - 1;
        *slot = bucket.min(k - 1);
    }

    out
}
