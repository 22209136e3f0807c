/// Milliseconds in one hour.
pub const MS_PER_HOUR: f64 = 3_600_000.0;

/// Convert a millisecond duration to hours, rounded to one decimal place.
pub fn ms_to_hours(ms: f64) -> f64 {
    (ms / MS_PER_HOUR * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_and_half_hours() {
        assert_eq!(ms_to_hours(5_400_000.0), 1.5);
        assert_eq!(ms_to_hours(3_600_000.0), 1.0);
        assert_eq!(ms_to_hours(0.0), 0.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        // 3,661,000 ms is 1.0169 hours
        assert_eq!(ms_to_hours(3_661_000.0), 1.0);
        assert_eq!(ms_to_hours(9_000_000.0), 2.5);
    }

    #[test]
    fn negative_durations_round_the_same_way() {
        assert_eq!(ms_to_hours(-5_400_000.0), -1.5);
    }
}
