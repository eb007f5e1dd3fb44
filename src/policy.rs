//! Interval/ease transition policy. The constants are product-tunable; the
//! defaults follow the standard SM-2 values (2.5 starting ease, 1.3 floor).

use crate::grade::Grade;

pub(crate) const EASE_START: f32 = 2.5;
pub(crate) const EASE_MIN: f32 = 1.3;
pub(crate) const INTERVAL_START: u32 = 1;
/// Upper bound on any scheduled interval, a century out. Keeps a long run of
/// positive grades from growing the interval past the calendar's range.
pub(crate) const INTERVAL_MAX: u32 = 36_500;

const HARD_INTERVAL_FACTOR: f32 = 1.2;
const EASY_INTERVAL_BONUS: f32 = 1.3;
const AGAIN_EASE_STEP: f32 = 0.2;
const HARD_EASE_STEP: f32 = 0.15;
const EASY_EASE_STEP: f32 = 0.15;

/// Computes the post-review `(interval_days, ease)` for one grade. Intervals
/// round up to whole days and stay within `1..=INTERVAL_MAX`, so a graded
/// item is never immediately due again and never scheduled off the calendar.
pub(crate) fn next_step(interval_days: u32, ease: f32, grade: Grade) -> (u32, f32) {
    match grade {
        Grade::Again => (INTERVAL_START, floor_ease(ease - AGAIN_EASE_STEP)),
        Grade::Hard => (
            ceil_days(interval_days as f32 * HARD_INTERVAL_FACTOR),
            floor_ease(ease - HARD_EASE_STEP),
        ),
        Grade::Good => (ceil_days(interval_days as f32 * ease), ease),
        Grade::Easy => (
            ceil_days(interval_days as f32 * ease * EASY_INTERVAL_BONUS),
            ease + EASY_EASE_STEP,
        ),
    }
}

fn ceil_days(days: f32) -> u32 {
    (days.ceil() as u32).clamp(1, INTERVAL_MAX)
}

fn floor_ease(ease: f32) -> f32 {
    ease.max(EASE_MIN)
}
