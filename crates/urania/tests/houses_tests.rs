use urania::angle::{forward_arc, normalize_degrees};
use urania::houses::{
    compute_angles, compute_angles_clamped, compute_house_cusps, equal_cusps, HouseSystem,
    POLAR_CIRCLE_LATITUDE,
};
use urania::ChartError;

const OBLIQUITY: f64 = 23.44;

#[test]
fn test_angles_at_equator_and_zero_sidereal_time() {
    let angles = compute_angles(0.0, OBLIQUITY, 0.0).unwrap();
    assert!(angles.midheaven.abs() < 1e-9, "{}", angles.midheaven);
    assert!((angles.ascendant - 90.0).abs() < 1e-9, "{}", angles.ascendant);
    assert!((angles.descendant - 270.0).abs() < 1e-9);
    assert!((angles.ic - 180.0).abs() < 1e-9);
}

#[test]
fn test_ascendant_rises_ahead_of_midheaven() {
    for lat_step in -12..=12 {
        let latitude = lat_step as f64 * 5.0;
        for lst_step in 0..36 {
            let lst = lst_step as f64 * 10.0;
            let angles = compute_angles(lst, OBLIQUITY, latitude).unwrap();
            let arc = forward_arc(angles.midheaven, angles.ascendant);
            assert!(
                arc > 0.0 && arc < 180.0,
                "lat {} lst {}: mc {} asc {}",
                latitude,
                lst,
                angles.midheaven,
                angles.ascendant
            );
            assert!((normalize_degrees(angles.ascendant + 180.0) - angles.descendant).abs() < 1e-9);
        }
    }
}

#[test]
fn test_quadrant_cusps_sit_on_the_angles() {
    for system in [HouseSystem::Placidus, HouseSystem::Koch] {
        for lst_step in 0..24 {
            let lst = lst_step as f64 * 15.0;
            let angles = compute_angles(lst, OBLIQUITY, 40.0).unwrap();
            let houses =
                compute_house_cusps(system, angles.ascendant, angles.midheaven, 40.0).unwrap();

            assert_eq!(houses.system, system);
            assert!((houses.cusps[0] - angles.ascendant).abs() < 1e-9);
            assert!((houses.cusps[3] - angles.ic).abs() < 1e-9);
            assert!((houses.cusps[6] - angles.descendant).abs() < 1e-9);
            assert!((houses.cusps[9] - angles.midheaven).abs() < 1e-9);

            let total: f64 = (0..12)
                .map(|i| forward_arc(houses.cusps[i], houses.cusps[(i + 1) % 12]))
                .sum();
            assert!((total - 360.0).abs() < 1e-6, "lst {}: {}", lst, total);
        }
    }
}

#[test]
fn test_cusps_wrap_exactly_once() {
    for system in HouseSystem::ALL {
        for latitude in [0.0, 40.0, -40.0, 60.0, -60.0] {
            for lst_step in 0..72 {
                let lst = lst_step as f64 * 5.0;
                let angles = compute_angles(lst, OBLIQUITY, latitude).unwrap();
                let houses =
                    compute_house_cusps(system, angles.ascendant, angles.midheaven, latitude)
                        .unwrap();
                let wraps = (0..12)
                    .filter(|&i| houses.cusps[(i + 1) % 12] < houses.cusps[i])
                    .count();
                assert_eq!(wraps, 1, "{} lat {} lst {}: {:?}", system, latitude, lst, houses.cusps);
            }
        }
    }
}

#[test]
fn test_equal_houses() {
    let cusps = equal_cusps(350.0);
    assert_eq!(cusps[0], 350.0);
    assert!((cusps[1] - 20.0).abs() < 1e-9);
    assert!((cusps[6] - 170.0).abs() < 1e-9);

    let houses = compute_house_cusps(HouseSystem::Equal, 350.0, 260.0, 80.0).unwrap();
    assert_eq!(houses.cusps, cusps);
    assert_eq!(houses.cusp(2), Some(cusps[1]));
    assert_eq!(houses.cusp(13), None);
}

#[test]
fn test_polar_latitudes() {
    let angles = compute_angles(45.0, OBLIQUITY, 70.0).unwrap();
    assert_eq!(
        compute_house_cusps(HouseSystem::Placidus, angles.ascendant, angles.midheaven, 70.0),
        Err(ChartError::PolarLatitude { latitude: 70.0 })
    );
    assert!(compute_house_cusps(HouseSystem::Koch, angles.ascendant, angles.midheaven, -70.0).is_err());
    assert!(compute_house_cusps(HouseSystem::Equal, angles.ascendant, angles.midheaven, 70.0).is_ok());

    let below = POLAR_CIRCLE_LATITUDE - 0.1;
    assert!(compute_house_cusps(HouseSystem::Placidus, angles.ascendant, angles.midheaven, below).is_ok());
}

#[test]
fn test_angles_near_the_pole() {
    assert_eq!(
        compute_angles(10.0, OBLIQUITY, 89.95),
        Err(ChartError::PolarLatitude { latitude: 89.95 })
    );

    let clamped = compute_angles_clamped(10.0, OBLIQUITY, 89.95);
    let at_limit = compute_angles(10.0, OBLIQUITY, 89.9).unwrap();
    assert_eq!(clamped, at_limit);
}

#[test]
fn test_house_system_names() {
    assert_eq!("KOCH".parse::<HouseSystem>().unwrap(), HouseSystem::Koch);
    assert_eq!(HouseSystem::resolve("campanus"), (HouseSystem::Placidus, true));
    assert!(!HouseSystem::Equal.latitude_dependent());
    assert_eq!(HouseSystem::default(), HouseSystem::Placidus);
}
