//! Countdown timing: remaining-seconds math, TIME parsing, MM:SS formatting.

use std::time::Instant;

/// Where the countdown is in its life. `Running` flips to `Expired` when
/// elapsed time passes the total; interrupt tears the loop down instead of
/// becoming a resident state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Expired,
}

/// The only mutable countdown state: the total and the start instant.
/// Remaining time is derived from the clock every frame, never stored.
pub struct Countdown {
    pub total_seconds: u64,
    started: Instant,
}

impl Countdown {
    pub fn start(total_seconds: u64) -> Self {
        Countdown {
            total_seconds,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// Seconds shown on the display: `ceil(total - elapsed)`, clamped at 0.
/// The ceiling keeps the last second on screen for its full duration
/// instead of flashing 00:00 early; 0 is reached only once elapsed has
/// caught up with the total.
pub fn remaining_at(total_seconds: u64, elapsed: f64) -> u64 {
    (total_seconds as f64 - elapsed).ceil().max(0.0) as u64
}

/// Strictly past expiry. Drives the bell and the state flip.
pub fn expired_at(total_seconds: u64, elapsed: f64) -> bool {
    elapsed > total_seconds as f64
}

pub fn state_at(total_seconds: u64, elapsed: f64) -> TimerState {
    if expired_at(total_seconds, elapsed) {
        TimerState::Expired
    } else {
        TimerState::Running
    }
}

/// Formats seconds as MM:SS. Minutes are unbounded; both fields are
/// zero-padded to two digits.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Parses the TIME argument: "MM:SS", or plain "SS" when minutes are zero.
pub fn parse_time(input: &str) -> Result<u64, String> {
    let parts: Vec<&str> = input.split(':').collect();

    let (minutes, seconds) = match parts.as_slice() {
        [seconds] => (0, parse_field(seconds)?),
        [minutes, seconds] => (parse_field(minutes)?, parse_field(seconds)?),
        _ => return Err("Time must be MM:SS or SS".to_string()),
    };

    match minutes.checked_mul(60).and_then(|m| m.checked_add(seconds)) {
        Some(total) if total >= 1 => Ok(total as u64),
        _ => Err("Time must be greater than 0".to_string()),
    }
}

fn parse_field(field: &str) -> Result<i64, String> {
    field
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number in time: {}", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_seconds() {
        assert_eq!(parse_time("5"), Ok(5));
        assert_eq!(parse_time("90"), Ok(90));
    }

    #[test]
    fn parse_accepts_minutes_and_seconds() {
        assert_eq!(parse_time("2:30"), Ok(150));
        assert_eq!(parse_time("0:45"), Ok(45));
        assert_eq!(parse_time("2:70"), Ok(190));
    }

    #[test]
    fn parse_tolerates_whitespace_around_fields() {
        assert_eq!(parse_time(" 5 "), Ok(5));
        assert_eq!(parse_time("1 : 30"), Ok(90));
    }

    #[test]
    fn parse_rejects_non_positive_totals() {
        assert!(parse_time("0").is_err());
        assert!(parse_time("0:00").is_err());
        assert!(parse_time("-5").is_err());
        assert!(parse_time("1:-70").is_err());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(parse_time("abc").is_err());
        assert!(parse_time("").is_err());
        assert!(parse_time(":30").is_err());
        assert!(parse_time("1:2:3").is_err());
    }

    #[test]
    fn format_zero_pads_both_fields() {
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(5), "00:05");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(3599), "59:59");
    }

    #[test]
    fn format_leaves_minutes_unbounded() {
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn remaining_shows_full_total_at_start() {
        assert_eq!(remaining_at(65, 0.0), 65);
        assert_eq!(format_time(remaining_at(65, 0.0)), "01:05");
    }

    #[test]
    fn remaining_keeps_last_second_visible() {
        assert_eq!(remaining_at(65, 64.5), 1);
        assert_eq!(format_time(remaining_at(65, 64.5)), "00:01");
        assert_eq!(remaining_at(5, 4.2), 1);
    }

    #[test]
    fn remaining_clamps_at_zero_past_expiry() {
        assert_eq!(remaining_at(5, 5.0), 0);
        assert_eq!(remaining_at(5, 5.2), 0);
        assert_eq!(remaining_at(5, 500.0), 0);
    }

    #[test]
    fn expiry_is_strictly_past_the_total() {
        assert!(!expired_at(5, 4.9));
        assert!(!expired_at(5, 5.0));
        assert!(expired_at(5, 5.2));
    }

    #[test]
    fn state_flips_only_after_expiry() {
        assert_eq!(state_at(5, 0.0), TimerState::Running);
        assert_eq!(state_at(65, 64.5), TimerState::Running);
        assert_eq!(state_at(5, 5.2), TimerState::Expired);
    }

    #[test]
    fn countdown_derives_remaining_from_the_clock() {
        let countdown = Countdown::start(120);
        let remaining = remaining_at(countdown.total_seconds, countdown.elapsed());
        assert!(remaining == 120 || remaining == 119);
    }
}
