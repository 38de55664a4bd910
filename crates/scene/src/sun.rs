//! Decorative sun position.
//!
//! Single-term approximation of the subsolar point (see "Position of the Sun"
//! on Wikipedia): declination follows a cosine anchored at the June solstice and
//! longitude follows UTC time of day. Ignores the equation of time.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use foundation::math::{Coordinate, Vec3};

/// Earth's axial tilt in degrees.
pub const AXIAL_TILT_DEG: f64 = 23.44;
/// Days per tropical year used by the approximation.
pub const YEAR_DAYS: f64 = 365.26;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Subsolar point at `now`.
pub fn sun_coordinate(now: DateTime<Utc>) -> Coordinate {
    let days = days_since_june_solstice(now);
    let latitude = AXIAL_TILT_DEG * (std::f64::consts::TAU * days / YEAR_DAYS).cos();
    let hours = now.hour() as f64 + now.minute() as f64 / 60.0;
    let longitude = 180.0 - 15.0 * hours;
    Coordinate::new(latitude, longitude)
}

/// Light position at `now`, on a sphere of `radius` around the origin.
pub fn sun_position(now: DateTime<Utc>, radius: f64) -> Vec3 {
    sun_coordinate(now).place(radius)
}

/// Days since June 21st 00:00 UTC of the same year (negative before it).
fn days_since_june_solstice(now: DateTime<Utc>) -> f64 {
    NaiveDate::from_ymd_opt(now.year(), 6, 21)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|solstice| (now - solstice.and_utc()).num_milliseconds() as f64 / MS_PER_DAY)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::{AXIAL_TILT_DEG, sun_coordinate, sun_position};
    use chrono::{TimeZone, Utc};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn june_solstice_noon_is_over_tropic_of_cancer() {
        let now = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let c = sun_coordinate(now);
        assert_close(c.latitude, AXIAL_TILT_DEG, 1e-3);
        assert_close(c.longitude, 0.0, 1e-12);
    }

    #[test]
    fn december_is_over_tropic_of_capricorn() {
        let now = Utc.with_ymd_and_hms(2024, 12, 21, 0, 0, 0).unwrap();
        let c = sun_coordinate(now);
        assert_close(c.latitude, -AXIAL_TILT_DEG, 1e-2);
        assert_close(c.longitude, 180.0, 1e-12);
    }

    #[test]
    fn longitude_follows_utc_time_of_day() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap();
        assert_close(sun_coordinate(now).longitude, -97.5, 1e-12);
    }

    #[test]
    fn position_lies_on_orbit() {
        let now = Utc.with_ymd_and_hms(2025, 9, 1, 7, 15, 0).unwrap();
        assert_close(sun_position(now, 2.0).length(), 2.0, 1e-12);
    }
}
