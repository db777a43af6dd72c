//! Resend cooldown: a persisted absolute deadline plus countdown math.
//!
//! The deadline survives page reloads within the session, so a reload
//! mid-countdown resumes with the remaining wait instead of resetting.

use crate::config::AuthConfig;
use crate::storage;

/// Seconds left until `deadline_ms`, rounded up; 0 once elapsed
pub fn remaining_secs(now_ms: f64, deadline_ms: f64) -> u32 {
    if deadline_ms <= now_ms {
        return 0;
    }
    ((deadline_ms - now_ms) / 1000.0).ceil() as u32
}

/// `MM:SS` rendering of a second count
pub fn format_mmss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Persist a fresh full-length cooldown and return its deadline
pub fn start(now_ms: f64) -> f64 {
    let deadline = now_ms + f64::from(AuthConfig::RESEND_COOLDOWN_SECS) * 1000.0;
    storage::save(AuthConfig::RESEND_UNTIL_KEY, &deadline);
    deadline
}

/// Deadline surviving from a previous page load, if still in the future
pub fn active_deadline(now_ms: f64) -> Option<f64> {
    let deadline: f64 = storage::load(AuthConfig::RESEND_UNTIL_KEY, 0.0);
    (deadline > now_ms).then_some(deadline)
}

/// Drop the persisted deadline
pub fn clear() {
    storage::remove(AuthConfig::RESEND_UNTIL_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cooldown_counts_down_from_45() {
        let now = 1_000_000.0;
        let deadline = now + f64::from(AuthConfig::RESEND_COOLDOWN_SECS) * 1000.0;
        assert_eq!(remaining_secs(now, deadline), 45);
        assert_eq!(remaining_secs(now + 1_000.0, deadline), 44);
        assert_eq!(remaining_secs(now + 44_999.0, deadline), 1);
        assert_eq!(remaining_secs(now + 45_000.0, deadline), 0);
    }

    #[test]
    fn elapsed_deadline_reads_zero() {
        assert_eq!(remaining_secs(2_000.0, 1_000.0), 0);
        assert_eq!(remaining_secs(1_000.0, 1_000.0), 0);
    }

    #[test]
    fn sub_second_remainder_rounds_up() {
        assert_eq!(remaining_secs(0.0, 100.0), 1);
        assert_eq!(remaining_secs(0.0, 1_001.0), 2);
    }

    #[test]
    fn mmss_formatting() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(45), "00:45");
        assert_eq!(format_mmss(60), "01:00");
        assert_eq!(format_mmss(125), "02:05");
    }
}
