use crate::types::SeriesStats;

/// Summarize one frequency column: min, max, mean, sample standard deviation.
///
/// Non-finite values are skipped. Returns `None` when nothing finite remains,
/// so callers render "no data" instead of a fabricated summary. The standard
/// deviation uses the n−1 denominator and is zero for a single sample.
#[must_use]
pub fn summarize(values: impl IntoIterator<Item = f64>) -> Option<SeriesStats> {
    let vals: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    if vals.is_empty() {
        return None;
    }

    let count = vals.len();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in &vals {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = count as f64;
    let mean = sum / n;

    let std_dev = if count < 2 {
        0.0
    } else {
        let ss: f64 = vals.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (n - 1.0)).sqrt()
    };

    Some(SeriesStats {
        min,
        max,
        mean,
        std_dev,
        count,
    })
}
