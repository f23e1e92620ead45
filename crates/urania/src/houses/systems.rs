use crate::angle::{forward_arc, normalize_degrees};
use crate::error::ChartError;

use super::types::{HouseCusps, HouseSystem, POLAR_CIRCLE_LATITUDE};

/// Compute the twelve cusps for a house system from the ascendant and
/// midheaven (degrees).
///
/// Latitude-dependent systems are rejected at or beyond the polar circle with
/// [`ChartError::PolarLatitude`]; the caller decides whether to fall back.
pub fn compute_house_cusps(
    system: HouseSystem,
    ascendant: f64,
    midheaven: f64,
    latitude: f64,
) -> Result<HouseCusps, ChartError> {
    if system.latitude_dependent() && latitude.abs() >= POLAR_CIRCLE_LATITUDE {
        return Err(ChartError::PolarLatitude { latitude });
    }

    let cusps = match system {
        HouseSystem::Equal => equal_cusps(ascendant),
        HouseSystem::Placidus | HouseSystem::Koch => trisected_cusps(ascendant, midheaven),
    };

    Ok(HouseCusps { system, cusps })
}

/// Cusp n = ascendant + (n - 1) * 30.
pub fn equal_cusps(ascendant: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_degrees(ascendant + 30.0 * i as f64);
    }
    cusps
}

/// Angles on cusps 1, 4, 7 and 10; each quadrant's forward arc split in three.
///
/// An ecliptic approximation of the semi-arc systems, exact at the angles.
fn trisected_cusps(ascendant: f64, midheaven: f64) -> [f64; 12] {
    let descendant = normalize_degrees(ascendant + 180.0);
    let ic = normalize_degrees(midheaven + 180.0);
    let angles = [ascendant, ic, descendant, midheaven];

    let mut cusps = [0.0; 12];
    for (quadrant, &start) in angles.iter().enumerate() {
        let end = angles[(quadrant + 1) % 4];
        let step = forward_arc(start, end) / 3.0;
        let base = quadrant * 3;
        cusps[base] = normalize_degrees(start);
        cusps[base + 1] = normalize_degrees(start + step);
        cusps[base + 2] = normalize_degrees(start + 2.0 * step);
    }
    cusps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::houses::angles::compute_angles;

    const OBLIQUITY: f64 = 23.4393;

    fn wraps(cusps: &[f64; 12]) -> usize {
        (0..12).filter(|&i| cusps[(i + 1) % 12] < cusps[i]).count()
    }

    #[test]
    fn test_equal_houses() {
        let cusps = compute_house_cusps(HouseSystem::Equal, 350.0, 260.0, 10.0)
            .unwrap()
            .cusps;
        assert_eq!(cusps[0], 350.0);
        assert!((cusps[1] - 20.0).abs() < 1e-9);
        assert!((cusps[11] - 320.0).abs() < 1e-9);
    }

    #[test]
    fn test_angles_sit_on_quadrant_cusps() {
        let houses = compute_house_cusps(HouseSystem::Placidus, 100.0, 10.0, 45.0).unwrap();
        assert_eq!(houses.cusp(1), Some(100.0));
        assert_eq!(houses.cusp(4), Some(190.0));
        assert_eq!(houses.cusp(7), Some(280.0));
        assert_eq!(houses.cusp(10), Some(10.0));
        assert!((houses.cusp(2).unwrap() - 130.0).abs() < 1e-9);
        assert!((houses.cusp(12).unwrap() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_cusps_monotone_with_single_wrap() {
        for system in HouseSystem::ALL {
            for &latitude in &[0.0, 40.0, -40.0, 60.0, -60.0] {
                for step in 0..48 {
                    let lst = step as f64 * 7.5;
                    let angles = compute_angles(lst, OBLIQUITY, latitude).unwrap();
                    let cusps =
                        compute_house_cusps(system, angles.ascendant, angles.midheaven, latitude)
                            .unwrap()
                            .cusps;
                    assert!(cusps.iter().all(|c| (0.0..360.0).contains(c)));
                    let total: f64 = (0..12).map(|i| forward_arc(cusps[i], cusps[(i + 1) % 12])).sum();
                    assert!((total - 360.0).abs() < 1e-6, "{} {} {}", system, latitude, lst);
                    assert_eq!(wraps(&cusps), 1, "{} {} {}: {:?}", system, latitude, lst, cusps);
                }
            }
        }
    }

    #[test]
    fn test_polar_circle() {
        assert!(matches!(
            compute_house_cusps(HouseSystem::Placidus, 0.0, 270.0, 70.0),
            Err(ChartError::PolarLatitude { .. })
        ));
        assert!(compute_house_cusps(HouseSystem::Koch, 0.0, 270.0, -66.6).is_err());
        assert!(compute_house_cusps(HouseSystem::Placidus, 0.0, 270.0, 66.5).is_ok());
        assert!(compute_house_cusps(HouseSystem::Equal, 0.0, 270.0, 80.0).is_ok());
    }
}
