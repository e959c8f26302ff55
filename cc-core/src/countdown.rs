//! Remaining-duration engine.
//!
//! A [`RemainingDuration`] is derived once from an arrival instant, then
//! advanced one second at a time with [`RemainingDuration::step`], which is a
//! raw [`tick`](RemainingDuration::tick) followed by a single
//! [`normalize`](RemainingDuration::normalize) pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * 60;
const SECS_PER_DAY: i64 = 60 * 60 * 24;

/// Pad widths for the `DDDD:HH:MM:SS` rendering.
const DAYS_WIDTH: usize = 4;
const UNIT_WIDTH: usize = 2;

/// Days, hours, minutes and seconds left until an arrival.
///
/// After normalization hours are in `0..24` and minutes/seconds in `0..60`;
/// days are unbounded and go negative once the arrival has passed.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
pub struct RemainingDuration {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl RemainingDuration {
    /// Shown until a fetched record replaces it.
    pub const PLACEHOLDER: Self = Self::new(0, 6, 6, 6);

    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Time left from `now` until `arrival`, truncated to whole seconds
    /// towards negative infinity.
    ///
    /// Every division is floored, so a past arrival yields negative days with
    /// in-range hours, minutes and seconds.
    pub fn derive(arrival: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff_ms = (arrival - now).num_milliseconds();
        Self::from_secs(diff_ms.div_euclid(1000))
    }

    /// Split a signed number of seconds into floored components.
    pub fn from_secs(total: i64) -> Self {
        Self {
            days: total.div_euclid(SECS_PER_DAY),
            hours: total.div_euclid(SECS_PER_HOUR).rem_euclid(24),
            minutes: total.div_euclid(SECS_PER_MINUTE).rem_euclid(60),
            seconds: total.rem_euclid(60),
        }
    }

    pub fn total_secs(&self) -> i64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }

    /// Take one second off. Only `seconds` changes; it may become -1.
    pub fn tick(self) -> Self {
        Self {
            seconds: self.seconds - 1,
            ..self
        }
    }

    /// One fixed borrow pass, seconds then minutes then hours.
    ///
    /// Each unit is checked once; a borrow is never re-examined.
    pub fn normalize(self) -> Self {
        let mut next = self;
        if next.seconds < 0 {
            next.minutes -= 1;
            next.seconds = 59;
        }
        if next.minutes < 0 {
            next.hours -= 1;
            next.minutes = 59;
        }
        if next.hours < 0 {
            next.days -= 1;
            next.hours = 23;
        }
        next
    }

    /// The once-a-second transition.
    pub fn step(self) -> Self {
        self.tick().normalize()
    }

    pub fn is_normalized(&self) -> bool {
        (0..24).contains(&self.hours)
            && (0..60).contains(&self.minutes)
            && (0..60).contains(&self.seconds)
    }

    /// `DDDD:HH:MM:SS`, see [`pad`].
    pub fn render(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            pad(self.days, DAYS_WIDTH),
            pad(self.hours, UNIT_WIDTH),
            pad(self.minutes, UNIT_WIDTH),
            pad(self.seconds, UNIT_WIDTH)
        )
    }
}

impl fmt::Display for RemainingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Left-pad the decimal form of `value` with '0' up to `width` characters.
///
/// Wider values are returned as-is. A minus sign counts toward the width, so
/// `pad(-1, 4)` is `"00-1"`.
pub fn pad(value: i64, width: usize) -> String {
    let text = value.to_string();
    if text.len() < width {
        format!("{}{}", "0".repeat(width - text.len()), text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 28, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_render_pads_each_unit() {
        assert_eq!(RemainingDuration::new(7, 3, 45, 9).render(), "0007:03:45:09");
        assert_eq!(RemainingDuration::PLACEHOLDER.render(), "0000:06:06:06");
    }

    #[test]
    fn test_render_leaves_wide_values_unpadded() {
        assert_eq!(RemainingDuration::new(12345, 0, 0, 0).render(), "12345:00:00:00");
    }

    #[test]
    fn test_render_negative_sign_takes_a_slot() {
        assert_eq!(pad(-1, 4), "00-1");
        assert_eq!(pad(-1, 2), "-1");
        assert_eq!(pad(-123, 2), "-123");
        assert_eq!(RemainingDuration::new(-3, 23, 59, 59).to_string(), "00-3:23:59:59");
    }

    #[test]
    fn test_tick_only_touches_seconds() {
        let ticked = RemainingDuration::new(2, 0, 0, 0).tick();
        assert_eq!(ticked, RemainingDuration::new(2, 0, 0, -1));
    }

    #[test]
    fn test_borrow_chain_through_every_unit() {
        let next = RemainingDuration::new(1, 0, 0, 0).tick().normalize();
        assert_eq!(next, RemainingDuration::new(0, 23, 59, 59));
    }

    #[test]
    fn test_borrow_stops_at_first_non_negative_unit() {
        let next = RemainingDuration::new(0, 5, 3, 0).step();
        assert_eq!(next, RemainingDuration::new(0, 5, 2, 59));
        let next = RemainingDuration::new(0, 5, 0, 0).step();
        assert_eq!(next, RemainingDuration::new(0, 4, 59, 59));
    }

    #[test]
    fn test_zero_counts_into_negative_days() {
        let next = RemainingDuration::ZERO.step();
        assert_eq!(next, RemainingDuration::new(-1, 23, 59, 59));
        assert_eq!(next.total_secs(), -1);
    }

    #[test]
    fn test_normalize_is_idempotent_when_in_range() {
        for days in [-2, 0, 1, 9999] {
            for hours in [0, 11, 23] {
                for minutes in [0, 30, 59] {
                    for seconds in [0, 1, 59] {
                        let d = RemainingDuration::new(days, hours, minutes, seconds);
                        assert!(d.is_normalized());
                        assert_eq!(d.normalize(), d);
                        assert_eq!(d.normalize().normalize(), d.normalize());
                    }
                }
            }
        }
    }

    #[test]
    fn test_derive_future_arrival() {
        let arrival = now()
            + Duration::days(3)
            + Duration::hours(4)
            + Duration::minutes(5)
            + Duration::seconds(6)
            + Duration::milliseconds(999);
        assert_eq!(
            RemainingDuration::derive(arrival, now()),
            RemainingDuration::new(3, 4, 5, 6)
        );
    }

    #[test]
    fn test_derive_past_arrival_is_floored() {
        let arrival = now() - Duration::seconds(90);
        let derived = RemainingDuration::derive(arrival, now());
        assert_eq!(derived, RemainingDuration::new(-1, 23, 58, 30));
        assert!(derived.is_normalized());
        assert_eq!(derived.total_secs(), -90);

        let just_past = now() - Duration::milliseconds(1);
        assert_eq!(
            RemainingDuration::derive(just_past, now()),
            RemainingDuration::new(-1, 23, 59, 59)
        );
    }

    #[test]
    fn test_stepping_reaches_zero_at_the_boundary() {
        for offset_ms in [1_000, 59_500, 3_725_000, 90_061_250, 172_805_000] {
            let arrival = now() + Duration::milliseconds(offset_ms);
            let mut duration = RemainingDuration::derive(arrival, now());
            for _ in 0..offset_ms / 1000 {
                assert_ne!(duration, RemainingDuration::ZERO);
                duration = duration.step();
                assert!(duration.is_normalized());
            }
            assert_eq!(duration, RemainingDuration::ZERO);
        }
    }

    #[test]
    fn test_step_matches_total_seconds() {
        let mut duration = RemainingDuration::from_secs(200_000);
        for expected in (199_000..200_000).rev() {
            duration = duration.step();
            assert_eq!(duration.total_secs(), expected);
        }
    }
}
