use std::f64::consts::{PI, TAU};

/// Residual tolerance on `E - e sin E - M`, in radians.
pub const KEPLER_TOLERANCE: f64 = 1e-8;
/// Newton iteration cap.
pub const KEPLER_MAX_ITERATIONS: u32 = 20;

/// Whether a numeric result met its convergence target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Nominal,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly in radians, on the same turn as the input mean anomaly
    pub eccentric_anomaly: f64,
    pub iterations: u32,
    pub precision: Precision,
}

impl KeplerSolution {
    pub fn is_low_precision(&self) -> bool {
        self.precision == Precision::Low
    }
}

/// Solve Kepler's equation `M = E - e sin E` for the eccentric anomaly.
///
/// Newton-Raphson from `E0 = M`, safeguarded by the bracket `[M - e, M + e]`:
/// a step that leaves the bracket becomes a bisection step. Inputs outside the
/// elliptic domain (`e < 0`, `e >= 1`, non-finite) return `E = M` tagged
/// [`Precision::Low`].
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> KeplerSolution {
    let unsolvable = KeplerSolution {
        eccentric_anomaly: mean_anomaly,
        iterations: 0,
        precision: Precision::Low,
    };
    if !mean_anomaly.is_finite() || !eccentricity.is_finite() {
        return unsolvable;
    }
    if !(0.0..1.0).contains(&eccentricity) {
        return unsolvable;
    }

    // Work on (-π, π] and put the turns back at the end.
    let turns = ((mean_anomaly + PI) / TAU).ceil() - 1.0;
    let m = mean_anomaly - turns * TAU;

    let (mut lo, mut hi) = (m - eccentricity, m + eccentricity);
    let mut e_anom = m;
    let mut precision = Precision::Low;
    let mut iterations = 0;

    while iterations < KEPLER_MAX_ITERATIONS {
        let residual = e_anom - eccentricity * e_anom.sin() - m;
        if residual.abs() < KEPLER_TOLERANCE {
            precision = Precision::Nominal;
            break;
        }
        if residual > 0.0 {
            hi = e_anom;
        } else {
            lo = e_anom;
        }

        let derivative = 1.0 - eccentricity * e_anom.cos();
        if derivative.abs() < KEPLER_TOLERANCE {
            break;
        }

        let mut next = e_anom - residual / derivative;
        if next <= lo || next >= hi {
            next = 0.5 * (lo + hi);
        }
        e_anom = next;
        iterations += 1;
    }

    if precision == Precision::Low && iterations == KEPLER_MAX_ITERATIONS {
        let residual = e_anom - eccentricity * e_anom.sin() - m;
        if residual.abs() < KEPLER_TOLERANCE {
            precision = Precision::Nominal;
        }
    }

    KeplerSolution {
        eccentric_anomaly: e_anom + turns * TAU,
        iterations,
        precision,
    }
}

/// True anomaly (radians) from the eccentric anomaly.
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin()).atan2((1.0 - eccentricity).sqrt() * half.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(solution: &KeplerSolution, m: f64, e: f64) -> f64 {
        let big_e = solution.eccentric_anomaly;
        (big_e - e * big_e.sin() - m).abs()
    }

    #[test]
    fn test_circular_orbit_is_identity() {
        let solution = solve_kepler(1.234, 0.0);
        assert_eq!(solution.eccentric_anomaly, 1.234);
        assert_eq!(solution.precision, Precision::Nominal);
    }

    #[test]
    fn test_residual_grid() {
        let eccentricities = [0.0, 0.0167, 0.1, 0.2056, 0.5, 0.9, 0.99];
        for &e in &eccentricities {
            let mut m = -3.0 * TAU;
            while m <= 3.0 * TAU {
                let solution = solve_kepler(m, e);
                assert!(
                    residual(&solution, m, e) < 1e-6,
                    "M={} e={} E={}",
                    m,
                    e,
                    solution.eccentric_anomaly
                );
                assert!(!solution.is_low_precision(), "M={} e={}", m, e);
                m += 0.173;
            }
        }
    }

    #[test]
    fn test_known_value() {
        // Meeus example 30.a: e = 0.100, M = 5 degrees -> E = 5.554589 degrees
        let solution = solve_kepler(5f64.to_radians(), 0.1);
        assert!((solution.eccentric_anomaly.to_degrees() - 5.554589).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_inputs_flag_low_precision() {
        for &(m, e) in &[(1.0, 1.0), (1.0, 1.5), (1.0, -0.1), (f64::NAN, 0.3), (1.0, f64::NAN)] {
            let solution = solve_kepler(m, e);
            assert!(solution.is_low_precision());
            assert_eq!(solution.iterations, 0);
        }
        assert_eq!(solve_kepler(2.0, 1.2).eccentric_anomaly, 2.0);
    }

    #[test]
    fn test_true_anomaly_at_apsides() {
        assert!(true_anomaly(0.0, 0.3).abs() < 1e-12);
        assert!((true_anomaly(PI, 0.3).abs() - PI).abs() < 1e-12);
    }
}
