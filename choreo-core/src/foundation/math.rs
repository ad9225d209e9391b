/// Clamp to `[0, 1]`, mapping NaN to 0.
#[inline]
pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Unclamped linear remap of `v` from `[in_min, in_max]` onto `[out_min, out_max]`.
#[inline]
pub(crate) fn map_range(in_min: f64, in_max: f64, out_min: f64, out_max: f64, v: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + ((v - in_min) / span) * (out_max - out_min)
}

#[inline]
pub(crate) fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
