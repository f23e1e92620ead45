use crate::angle::normalize_degrees;
use crate::error::ChartError;

use super::types::ChartAngles;

/// Beyond this latitude the ascendant is numerically meaningless.
pub const MAX_ANGLE_LATITUDE: f64 = 89.9;

/// Ascendant, midheaven and their opposites from local sidereal time,
/// true obliquity and geographic latitude (all degrees).
pub fn compute_angles(
    local_sidereal_time: f64,
    obliquity: f64,
    latitude: f64,
) -> Result<ChartAngles, ChartError> {
    if !latitude.is_finite() || latitude.abs() > MAX_ANGLE_LATITUDE {
        return Err(ChartError::PolarLatitude { latitude });
    }
    Ok(angles_at(local_sidereal_time, obliquity, latitude))
}

/// Same as [`compute_angles`] with the latitude clamped to
/// `±MAX_ANGLE_LATITUDE`, for callers that fall back instead of failing.
pub fn compute_angles_clamped(local_sidereal_time: f64, obliquity: f64, latitude: f64) -> ChartAngles {
    let clamped = latitude.clamp(-MAX_ANGLE_LATITUDE, MAX_ANGLE_LATITUDE);
    angles_at(local_sidereal_time, obliquity, clamped)
}

fn angles_at(local_sidereal_time: f64, obliquity: f64, latitude: f64) -> ChartAngles {
    let (sin_lst, cos_lst) = local_sidereal_time.to_radians().sin_cos();
    let (sin_eps, cos_eps) = obliquity.to_radians().sin_cos();
    let tan_phi = latitude.to_radians().tan();

    let midheaven = normalize_degrees(sin_lst.atan2(cos_lst * cos_eps).to_degrees());
    // Eastern intersection of ecliptic and horizon
    let ascendant = normalize_degrees(
        cos_lst
            .atan2(-(sin_lst * cos_eps + tan_phi * sin_eps))
            .to_degrees(),
    );

    ChartAngles {
        ascendant,
        midheaven,
        descendant: normalize_degrees(ascendant + 180.0),
        ic: normalize_degrees(midheaven + 180.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{angular_separation, forward_arc};

    const OBLIQUITY: f64 = 23.4393;

    #[test]
    fn test_equator_at_zero_sidereal_time() {
        let angles = compute_angles(0.0, OBLIQUITY, 0.0).unwrap();
        assert!((angles.ascendant - 90.0).abs() < 1e-9);
        assert!(angles.midheaven.abs() < 1e-9);
        assert!((angles.descendant - 270.0).abs() < 1e-9);
        assert!((angles.ic - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_midheaven_at_quadrant_points() {
        let angles = compute_angles(90.0, OBLIQUITY, 40.0).unwrap();
        assert!((angles.midheaven - 90.0).abs() < 1e-9);
        let angles = compute_angles(270.0, OBLIQUITY, -40.0).unwrap();
        assert!((angles.midheaven - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_ascendant_is_east_of_midheaven() {
        for &latitude in &[-60.0, -40.0, 0.0, 40.0, 60.0] {
            for step in 0..72 {
                let lst = step as f64 * 5.0;
                let angles = compute_angles(lst, OBLIQUITY, latitude).unwrap();
                let arc = forward_arc(angles.midheaven, angles.ascendant);
                assert!(arc > 0.0 && arc < 180.0, "lat {} lst {} arc {}", latitude, lst, arc);
                assert!((angular_separation(angles.ascendant, angles.descendant) - 180.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_polar_latitude_rejected() {
        assert!(matches!(
            compute_angles(10.0, OBLIQUITY, 89.95),
            Err(ChartError::PolarLatitude { .. })
        ));
        assert!(compute_angles(10.0, OBLIQUITY, -89.9).is_ok());
        let clamped = compute_angles_clamped(10.0, OBLIQUITY, 90.0);
        assert_eq!(clamped, compute_angles(10.0, OBLIQUITY, 89.9).unwrap());
    }
}
