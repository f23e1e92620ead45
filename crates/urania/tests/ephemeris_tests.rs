use urania::angle::{angular_separation, normalize_degrees};
use urania::ephemeris::{
    Body, EclipticPosition, EphemerisChain, EphemerisSource, KeplerianEphemeris,
    MeanMotionEphemeris,
};
use urania::time::{Instant, J2000_JD};
use urania::ChartError;

struct Offline;

impl EphemerisSource for Offline {
    fn name(&self) -> &str {
        "offline"
    }

    fn position(&self, body: Body, _julian_day: f64) -> Result<EclipticPosition, ChartError> {
        Err(ChartError::UnknownBody {
            body: body.id().to_string(),
        })
    }
}

fn sample_days() -> impl Iterator<Item = f64> {
    // Roughly every 37 days across two centuries
    (0..2000).map(|i| 2415020.5 + i as f64 * 36.6)
}

#[test]
fn test_longitudes_stay_normalized() {
    let ephemeris = KeplerianEphemeris::new();
    for jd in sample_days() {
        for body in Body::ALL {
            let position = ephemeris.position(body, jd).unwrap();
            assert!(
                (0.0..360.0).contains(&position.longitude),
                "{} at JD {}: {}",
                body,
                jd,
                position.longitude
            );
            assert!(position.latitude.abs() < 20.0, "{} at JD {}", body, jd);
            assert!(!position.low_precision, "{} at JD {}", body, jd);
        }
    }
}

#[test]
fn test_sun_at_j2000() {
    let sun = KeplerianEphemeris::new().position(Body::Sun, J2000_JD).unwrap();
    assert!((sun.longitude - 280.37).abs() < 0.05, "{}", sun.longitude);
    assert!((sun.distance - 0.9833).abs() < 0.001, "{}", sun.distance);
}

#[test]
fn test_sun_distance_bounds() {
    let ephemeris = KeplerianEphemeris::new();
    for jd in sample_days() {
        let sun = ephemeris.position(Body::Sun, jd).unwrap();
        assert!(sun.distance > 0.982 && sun.distance < 1.018, "JD {}: {}", jd, sun.distance);
    }
}

#[test]
fn test_inner_planets_stay_near_sun() {
    let ephemeris = KeplerianEphemeris::new();
    for jd in sample_days() {
        let sun = ephemeris.position(Body::Sun, jd).unwrap().longitude;
        let mercury = ephemeris.position(Body::Mercury, jd).unwrap().longitude;
        let venus = ephemeris.position(Body::Venus, jd).unwrap().longitude;
        assert!(angular_separation(sun, mercury) < 28.5, "JD {}", jd);
        assert!(angular_separation(sun, venus) < 48.0, "JD {}", jd);
    }
}

#[test]
fn test_nodes_are_opposed() {
    let ephemeris = KeplerianEphemeris::new();
    for jd in sample_days().step_by(10) {
        let north = ephemeris.position(Body::NorthNode, jd).unwrap();
        let south = ephemeris.position(Body::SouthNode, jd).unwrap();
        assert!((normalize_degrees(north.longitude + 180.0) - south.longitude).abs() < 1e-9);
        assert_eq!(north.distance, 0.0);
        assert_eq!(north.latitude, 0.0);
    }
}

#[test]
fn test_mean_motion_tracks_keplerian_sun() {
    let precise = KeplerianEphemeris::new();
    let coarse = MeanMotionEphemeris::new();
    for jd in sample_days().step_by(7) {
        let a = precise.position(Body::Sun, jd).unwrap().longitude;
        let b = coarse.position(Body::Sun, jd).unwrap().longitude;
        assert!(angular_separation(a, b) < 0.1, "JD {}: {} vs {}", jd, a, b);
    }
}

#[test]
fn test_chain_speeds() {
    let chain = EphemerisChain::new(vec![Box::new(KeplerianEphemeris::new())]);
    let jd = Instant::from_calendar(2010, 3, 20, 0, 0, 0, 0)
        .unwrap()
        .julian_day();

    let sun = chain.resolve(Body::Sun, jd).unwrap();
    let speed = sun.speed.unwrap();
    assert!(speed > 0.95 && speed < 1.03, "{}", speed);

    let moon = chain.resolve(Body::Moon, jd).unwrap();
    let speed = moon.speed.unwrap();
    assert!(speed > 11.5 && speed < 15.5, "{}", speed);

    let node = chain.resolve(Body::NorthNode, jd).unwrap();
    assert!(node.speed.unwrap() < 0.0);
}

#[test]
fn test_chain_falls_through_to_next_source() {
    let chain = EphemerisChain::new(vec![
        Box::new(Offline),
        Box::new(KeplerianEphemeris::new()),
    ]);
    let resolved = chain.resolve(Body::Mars, J2000_JD).unwrap();
    assert!(resolved.is_fallback());
    assert_eq!(resolved.source_index, 1);

    let direct = KeplerianEphemeris::new().position(Body::Mars, J2000_JD).unwrap();
    assert_eq!(resolved.position, direct);
}

#[test]
fn test_chain_reports_last_error() {
    let chain = EphemerisChain::new(vec![Box::new(Offline)]);
    assert_eq!(
        chain.resolve(Body::Venus, J2000_JD),
        Err(ChartError::UnknownBody {
            body: "venus".to_string()
        })
    );

    let empty = EphemerisChain::new(Vec::new());
    assert_eq!(
        empty.position(Body::Venus, J2000_JD),
        Err(ChartError::NoEphemerisSource)
    );
}
