//! Edge distance thresholds and the distance-to-velocity curve

use crate::config::AutoScrollConfig;
use crate::geometry::{Axis, Rect};

use super::timing::percentage;

/// Distances from an edge, in pixels, that bound the scrolling zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceThresholds {
    /// Scrolling starts once the pointer is this close to the edge
    pub start_scrolling_from: f64,
    /// Scrolling is at full speed once the pointer is this close to the edge
    pub max_scroll_value_at: f64,
}

/// Thresholds for `rect` along `axis`
///
/// Derived from the rectangle's current size; layout can change mid-drag so
/// the result must not outlive the frame it was computed for.
pub fn distance_thresholds(rect: &Rect, axis: Axis, config: &AutoScrollConfig) -> DistanceThresholds {
    let size = rect.size(axis);
    DistanceThresholds {
        start_scrolling_from: size * config.start_scrolling_from,
        max_scroll_value_at: size * config.max_scroll_at_percentage,
    }
}

/// Whole pixels to scroll for a pointer `distance_to_edge` away from an edge
///
/// 0 outside the scrolling zone, `max_pixel_scroll` at or beyond the
/// full-speed threshold, linear from `min_scroll` to `max_pixel_scroll` in
/// between. Never increases as the distance grows.
pub fn value_from_distance(
    distance_to_edge: f64,
    thresholds: &DistanceThresholds,
    config: &AutoScrollConfig,
) -> f64 {
    if distance_to_edge > thresholds.start_scrolling_from {
        return 0.0;
    }

    if distance_to_edge <= thresholds.max_scroll_value_at {
        return config.max_pixel_scroll;
    }

    if distance_to_edge == thresholds.start_scrolling_from {
        return config.min_scroll;
    }

    let from_max = percentage(
        thresholds.max_scroll_value_at,
        thresholds.start_scrolling_from,
        distance_to_edge,
    );
    let towards_max = 1.0 - from_max;
    let scroll = config.min_scroll + (config.max_pixel_scroll - config.min_scroll) * towards_max;

    scroll.ceil().clamp(config.min_scroll, config.max_pixel_scroll)
}
