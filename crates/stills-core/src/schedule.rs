use crate::config::ReloadBounds;
use std::time::{Duration, Instant};

/// Moment the next auto-reload should fire.
pub fn next_deadline(now: Instant, interval_secs: u32) -> Instant {
    now + Duration::from_secs(u64::from(interval_secs))
}

pub fn is_due(now: Instant, deadline: Instant) -> bool {
    now >= deadline
}

/// Parse the raw interval text from the UI.
///
/// Anything that is not an in-range integer falls back to the default
/// interval, not to the nearest bound. Returns the adopted value and
/// whether the input was accepted as-is.
pub fn validate_delta(raw: &str, bounds: &ReloadBounds) -> (u32, bool) {
    match raw.trim().parse::<u32>() {
        Ok(secs) if (bounds.min..=bounds.max).contains(&secs) => (secs, true),
        _ => (bounds.default, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ReloadBounds {
        ReloadBounds {
            min: 45,
            default: 45,
            max: 300,
        }
    }

    #[test]
    fn accepts_in_range_interval() {
        assert_eq!(validate_delta("100", &bounds()), (100, true));
        assert_eq!(validate_delta("45", &bounds()), (45, true));
        assert_eq!(validate_delta("300", &bounds()), (300, true));
        assert_eq!(validate_delta(" 60 ", &bounds()), (60, true));
    }

    #[test]
    fn out_of_range_falls_back_to_default_not_nearest_bound() {
        assert_eq!(validate_delta("10", &bounds()), (45, false));
        assert_eq!(validate_delta("301", &bounds()), (45, false));
    }

    #[test]
    fn unparsable_input_falls_back_to_default() {
        assert_eq!(validate_delta("abc", &bounds()), (45, false));
        assert_eq!(validate_delta("", &bounds()), (45, false));
        assert_eq!(validate_delta("-5", &bounds()), (45, false));
        assert_eq!(validate_delta("6.5", &bounds()), (45, false));
    }

    #[test]
    fn fresh_deadline_is_not_due() {
        let now = Instant::now();
        let deadline = next_deadline(now, 45);
        assert!(!is_due(now, deadline));
    }

    #[test]
    fn deadline_is_due_once_time_passes_it() {
        let now = Instant::now();
        let deadline = next_deadline(now, 45);

        let just_before = deadline - Duration::from_millis(1);
        assert!(!is_due(just_before, deadline));
        assert!(is_due(deadline, deadline));
        assert!(is_due(deadline + Duration::from_secs(1), deadline));
    }
}
