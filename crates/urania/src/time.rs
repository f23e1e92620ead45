//! Calendar time to Julian Day conversion.
//!
//! The polynomial models used elsewhere in the crate are only trusted inside
//! [`MIN_YEAR`]..=[`MAX_YEAR`], so every [`Instant`] is range-checked on
//! construction.

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike, Utc};
use serde::Serialize;

use crate::error::ChartError;

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00:00 TT, treated as UTC here).
pub const J2000_JD: f64 = 2451545.0;
/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36525.0;
/// Julian Day of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2440587.5;

pub const MIN_YEAR: i32 = 1800;
pub const MAX_YEAR: i32 = 2200;

/// A UTC instant with its derived Julian Day values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Instant {
    datetime: DateTime<Utc>,
    julian_day: f64,
    centuries_since_j2000: f64,
}

impl Instant {
    /// Build an instant from local calendar fields and a fixed UTC offset in minutes
    /// (east of Greenwich positive).
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        utc_offset_minutes: i32,
    ) -> Result<Self, ChartError> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ChartError::InvalidDateTime {
                message: format!("UTC offset of {} minutes is out of range", utc_offset_minutes),
            })?;

        let local = offset
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .ok_or_else(|| ChartError::InvalidDateTime {
                message: format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02} is not a valid calendar time",
                    year, month, day, hour, minute, second
                ),
            })?;

        Self::from_utc(local.with_timezone(&Utc))
    }

    /// Build an instant from a UTC datetime.
    pub fn from_utc(datetime: DateTime<Utc>) -> Result<Self, ChartError> {
        check_year(datetime.year())?;

        let seconds = datetime.second() as f64 + datetime.nanosecond() as f64 / 1e9;
        let hour_decimal = datetime.hour() as f64 + datetime.minute() as f64 / 60.0 + seconds / 3600.0;
        let day_fraction = datetime.day() as f64 + hour_decimal / 24.0;
        let julian_day = julian_day_from_calendar(datetime.year(), datetime.month(), day_fraction);

        Ok(Self {
            datetime,
            julian_day,
            centuries_since_j2000: centuries_since_j2000(julian_day),
        })
    }

    /// Build an instant from a Julian Day (UTC).
    pub fn from_julian_day(julian_day: f64) -> Result<Self, ChartError> {
        if !julian_day.is_finite() {
            return Err(ChartError::InvalidDateTime {
                message: format!("Julian Day {} is not finite", julian_day),
            });
        }

        let unix_seconds = (julian_day - UNIX_EPOCH_JD) * 86400.0;
        let whole = unix_seconds.floor();
        let nanos = (((unix_seconds - whole) * 1e9).round() as u32).min(999_999_999);
        let datetime = DateTime::<Utc>::from_timestamp(whole as i64, nanos).ok_or_else(|| {
            ChartError::InvalidDateTime {
                message: format!("Julian Day {} cannot be represented as a date", julian_day),
            }
        })?;
        check_year(datetime.year())?;

        Ok(Self {
            datetime,
            julian_day,
            centuries_since_j2000: centuries_since_j2000(julian_day),
        })
    }

    /// The instant shifted by a (possibly fractional, possibly negative) number of days.
    pub fn offset_days(&self, days: f64) -> Result<Self, ChartError> {
        Self::from_julian_day(self.julian_day + days)
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.datetime
    }

    pub fn julian_day(&self) -> f64 {
        self.julian_day
    }

    pub fn centuries_since_j2000(&self) -> f64 {
        self.centuries_since_j2000
    }
}

fn check_year(year: i32) -> Result<(), ChartError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ChartError::OutOfRangeInput {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    Ok(())
}

/// Gregorian calendar date to Julian Day.
///
/// `day` carries the time of day as a fraction. January and February count
/// as months 13 and 14 of the previous year.
pub fn julian_day_from_calendar(year: i32, month: u32, day: f64) -> f64 {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(julian_day: f64) -> f64 {
    (julian_day - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000_epoch() {
        let instant = Instant::from_calendar(2000, 1, 1, 12, 0, 0, 0).unwrap();
        assert_eq!(instant.julian_day(), J2000_JD);
        assert_eq!(instant.centuries_since_j2000(), 0.0);
    }

    #[test]
    fn test_known_julian_days() {
        // Meeus, Astronomical Algorithms, example 7.a: 1957 October 4.81
        assert!((julian_day_from_calendar(1957, 10, 4.81) - 2436116.31).abs() < 1e-6);
        // 1987 January 27.0, exercises the Jan/Feb shift
        assert!((julian_day_from_calendar(1987, 1, 27.0) - 2446822.5).abs() < 1e-9);
    }

    #[test]
    fn test_utc_offset_is_applied() {
        // 14:30 at UTC-5 is 19:30 UTC
        let local = Instant::from_calendar(1990, 6, 15, 14, 30, 0, -300).unwrap();
        let utc = Instant::from_calendar(1990, 6, 15, 19, 30, 0, 0).unwrap();
        assert_eq!(local.julian_day(), utc.julian_day());
        assert_eq!(local.datetime(), utc.datetime());
    }

    #[test]
    fn test_year_window() {
        assert!(Instant::from_calendar(1800, 1, 1, 0, 0, 0, 0).is_ok());
        assert!(Instant::from_calendar(2200, 12, 31, 23, 59, 59, 0).is_ok());
        assert!(matches!(
            Instant::from_calendar(1799, 12, 31, 0, 0, 0, 0),
            Err(ChartError::OutOfRangeInput { year: 1799, .. })
        ));
        assert!(matches!(
            Instant::from_calendar(2201, 1, 1, 0, 0, 0, 0),
            Err(ChartError::OutOfRangeInput { year: 2201, .. })
        ));
    }

    #[test]
    fn test_invalid_calendar_fields() {
        assert!(matches!(
            Instant::from_calendar(2001, 2, 30, 0, 0, 0, 0),
            Err(ChartError::InvalidDateTime { .. })
        ));
        assert!(matches!(
            Instant::from_calendar(2001, 1, 1, 0, 0, 0, 24 * 60),
            Err(ChartError::InvalidDateTime { .. })
        ));
    }

    #[test]
    fn test_julian_day_round_trip_through_datetime() {
        let instant = Instant::from_julian_day(2448058.1041666665).unwrap();
        let again = Instant::from_utc(instant.datetime()).unwrap();
        assert!((again.julian_day() - instant.julian_day()).abs() < 1e-8);
    }

    #[test]
    fn test_offset_days() {
        let instant = Instant::from_calendar(2000, 1, 1, 12, 0, 0, 0).unwrap();
        let next = instant.offset_days(1.5).unwrap();
        assert_eq!(next.julian_day(), J2000_JD + 1.5);
        assert_eq!(next.datetime().day(), 3);
        assert_eq!(next.datetime().hour(), 0);
    }
}
