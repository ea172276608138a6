use crate::types::{AlignedPoint, Band, BandThresholds, Bounds, GridfreqError};

/// Compute axis bounds and violation bands for a set of frequency values.
///
/// The axis spans the observed min/max padded by `thresholds.padding_hz`.
/// The low band covers `[axis_min, min(low_hz, axis_max)]` and the high band
/// `[max(high_hz, axis_min), axis_max]`; when every value lies strictly
/// between the thresholds both rectangles degenerate to zero height, which is
/// valid output (`Band::is_degenerate`), not an error.
///
/// Non-finite values are ignored while scanning. An empty input, or one with
/// no finite values, has no defined bounds and fails fast rather than
/// defaulting to an arbitrary range.
///
/// # Errors
/// Returns `EmptySeries` when no finite value is present.
///
/// ```
/// use gridfreq_core::{BandThresholds, compute_bounds};
///
/// let b = compute_bounds([49.90, 50.10], &BandThresholds::default()).unwrap();
/// assert!((b.axis_min - 49.85).abs() < 1e-12);
/// assert!((b.axis_max - 50.15).abs() < 1e-12);
/// assert!(!b.low_band.is_degenerate());
/// assert!(!b.high_band.is_degenerate());
/// ```
pub fn compute_bounds(
    values: impl IntoIterator<Item = f64>,
    thresholds: &BandThresholds,
) -> Result<Bounds, GridfreqError> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;

    for v in values {
        if v.is_finite() {
            seen = true;
            min = min.min(v);
            max = max.max(v);
        }
    }

    if !seen {
        return Err(GridfreqError::empty("tolerance banding input"));
    }

    let axis_min = min - thresholds.padding_hz;
    let axis_max = max + thresholds.padding_hz;

    Ok(Bounds {
        axis_min,
        axis_max,
        low_band: Band {
            y0: axis_min,
            y1: thresholds.low_hz.min(axis_max),
        },
        high_band: Band {
            y0: thresholds.high_hz.max(axis_min),
            y1: axis_max,
        },
    })
}

/// Bounds over both columns of an aligned series.
///
/// The axis must accommodate whichever source strays further, so the scan
/// covers reference and other values together.
///
/// # Errors
/// Returns `EmptySeries` when the series is empty or holds no finite value.
pub fn bounds_for_aligned(
    points: &[AlignedPoint],
    thresholds: &BandThresholds,
) -> Result<Bounds, GridfreqError> {
    compute_bounds(
        points
            .iter()
            .flat_map(|p| [p.reference_hz, p.other_hz]),
        thresholds,
    )
}
