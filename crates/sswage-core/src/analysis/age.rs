/// File age conversion: how long ago, in years, each file was modified.
use std::time::SystemTime;

/// Seconds in a Julian year (365.25 days), the year unit used for ages.
pub const SECONDS_PER_YEAR: f64 = 365.25 * 86_400.0;

/// Elapsed years between `modified` and `now`.
///
/// A timestamp in the future yields a negative age rather than being
/// clamped, so such files fall outside the histogram range.
pub fn age_in_years(now: SystemTime, modified: SystemTime) -> f64 {
    match now.duration_since(modified) {
        Ok(elapsed) => elapsed.as_secs_f64() / SECONDS_PER_YEAR,
        Err(ahead) => -ahead.duration().as_secs_f64() / SECONDS_PER_YEAR,
    }
}

/// Age samples, in years, for every timestamp relative to a single `now`.
pub fn age_samples(now: SystemTime, modified: &[SystemTime]) -> Vec<f64> {
    modified.iter().map(|&m| age_in_years(now, m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn years(n: f64) -> Duration {
        Duration::from_secs_f64(n * SECONDS_PER_YEAR)
    }

    #[test]
    fn same_instant_is_zero_years() {
        let now = SystemTime::now();
        assert_eq!(age_in_years(now, now), 0.0);
    }

    #[test]
    fn ten_years_ago_is_ten() {
        let now = SystemTime::now();
        let age = age_in_years(now, now - years(10.0));
        assert!((age - 10.0).abs() < 1e-6, "got {age}");
    }

    #[test]
    fn half_year_is_half() {
        let now = SystemTime::UNIX_EPOCH + years(30.0);
        let age = age_in_years(now, now - Duration::from_secs(182 * 86_400 + 15 * 3_600));
        assert!((age - 0.5).abs() < 1e-3, "got {age}");
    }

    #[test]
    fn future_timestamp_is_negative() {
        let now = SystemTime::now();
        let age = age_in_years(now, now + years(1.0));
        assert!((age + 1.0).abs() < 1e-6, "got {age}");
    }

    #[test]
    fn samples_share_one_now() {
        let now = SystemTime::now();
        let stamps = [now, now - years(2.0), now - years(4.5)];
        let samples = age_samples(now, &stamps);
        assert_eq!(samples.len(), 3);
        assert!(samples[0].abs() < 1e-9);
        assert!((samples[1] - 2.0).abs() < 1e-6);
        assert!((samples[2] - 4.5).abs() < 1e-6);
    }
}
