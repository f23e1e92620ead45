//! Degree arithmetic on the ecliptic circle.
//!
//! Every longitude that leaves this crate goes through [`normalize_degrees`],
//! so the `[0, 360)` invariant lives in one place.

/// Normalize an angle in degrees to `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `360.0`;
/// that case is folded back to `0.0`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Signed difference `to - from`, wrapped to `(-180, 180]`.
pub fn signed_delta(from: f64, to: f64) -> f64 {
    let diff = normalize_degrees(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Unsigned angular separation between two longitudes, in `[0, 180]`.
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = normalize_degrees(lon1 - lon2);
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Length of the arc travelled going forward (increasing longitude)
/// from `from` to `to`, in `[0, 360)`.
pub fn forward_arc(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from)
}
