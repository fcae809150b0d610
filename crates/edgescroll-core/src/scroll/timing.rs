//! Range and time calculations for the scroll ramps

use std::time::Instant;

use crate::config::AutoScrollConfig;

/// Position of `current` within `[start_of_range, end_of_range]` as a fraction
///
/// Not clamped: values outside the range map outside [0, 1].
/// A zero-width range yields 0 rather than a non-finite value.
#[inline]
pub fn percentage(start_of_range: f64, end_of_range: f64, current: f64) -> f64 {
    let range = end_of_range - start_of_range;
    if range == 0.0 {
        return 0.0;
    }
    (current - start_of_range) / range
}

/// Scale a proposed scroll down early in a drag
///
/// * before `accelerate_at`: the minimum scroll
/// * between `accelerate_at` and `stop_dampening_at`: eased ramp, rounded up
/// * from `stop_dampening_at` on: `proposed_scroll` unchanged
pub fn dampen_by_time(
    proposed_scroll: f64,
    drag_start: Instant,
    now: Instant,
    config: &AutoScrollConfig,
) -> f64 {
    let elapsed = now.saturating_duration_since(drag_start);

    if elapsed >= config.stop_dampening_at() {
        return proposed_scroll;
    }

    if elapsed < config.accelerate_at() {
        return config.min_scroll;
    }

    let t = percentage(
        config.accelerate_at_ms as f64,
        config.stop_dampening_at_ms as f64,
        elapsed.as_micros() as f64 / 1000.0,
    );
    let scroll = proposed_scroll * config.ease.apply(t);

    scroll.ceil().max(config.min_scroll)
}
