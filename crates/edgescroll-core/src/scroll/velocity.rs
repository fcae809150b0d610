//! Per-axis velocity and the combined scroll vector for one region

use std::time::Instant;

use crate::config::AutoScrollConfig;
use crate::geometry::{Axis, Edge, Position, Rect};

use super::thresholds::{distance_thresholds, value_from_distance};
use super::timing::dampen_by_time;

/// Inputs shared by every resolution within one frame
#[derive(Debug, Clone, Copy)]
pub struct ScrollRequestContext<'a> {
    pub drag_start: Instant,
    pub now: Instant,
    pub should_use_time_dampening: bool,
    pub config: &'a AutoScrollConfig,
}

/// Pointer distance to each edge of a region; negative once past the edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceToEdges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl DistanceToEdges {
    pub fn between(container: &Rect, center: Position) -> Self {
        Self {
            top: center.y - container.top,
            right: container.right - center.x,
            bottom: container.bottom - center.y,
            left: center.x - container.left,
        }
    }

    #[inline]
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }
}

fn value_for_distance(
    distance_to_edge: f64,
    container: &Rect,
    axis: Axis,
    ctx: &ScrollRequestContext<'_>,
) -> f64 {
    let thresholds = distance_thresholds(container, axis, ctx.config);
    let scroll = value_from_distance(distance_to_edge, &thresholds, ctx.config);

    if scroll == 0.0 {
        return 0.0;
    }

    // hosts only get whole pixels, even from fractional speed limits
    if !ctx.should_use_time_dampening {
        return scroll.ceil();
    }

    dampen_by_time(scroll, ctx.drag_start, ctx.now, ctx.config)
        .max(ctx.config.min_scroll)
        .ceil()
}

/// Signed scroll along `axis`: positive towards the end edge, negative towards the start edge
pub fn axis_velocity(
    container: &Rect,
    distances: &DistanceToEdges,
    axis: Axis,
    ctx: &ScrollRequestContext<'_>,
) -> f64 {
    let to_end = distances.get(axis.end);
    let to_start = distances.get(axis.start);

    if to_end < to_start {
        value_for_distance(to_end, container, axis, ctx)
    } else {
        -value_for_distance(to_start, container, axis, ctx)
    }
}

/// Scroll vector for a pointer at `center` over `container`, or `None` when neither axis moves
pub fn resolve_scroll(
    container: &Rect,
    center: Position,
    ctx: &ScrollRequestContext<'_>,
) -> Option<Position> {
    let distances = DistanceToEdges::between(container, center);

    let scroll = Position::new(
        axis_velocity(container, &distances, Axis::HORIZONTAL, ctx),
        axis_velocity(container, &distances, Axis::VERTICAL, ctx),
    )
    .clean_negative_zero();

    if scroll.is_origin() {
        None
    } else {
        Some(scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn container() -> Rect {
        Rect::new(0.0, 100.0, 100.0, 0.0)
    }

    fn ctx(config: &AutoScrollConfig, dampen: bool, elapsed_ms: u64) -> ScrollRequestContext<'_> {
        let start = Instant::now();
        ScrollRequestContext {
            drag_start: start,
            now: start + Duration::from_millis(elapsed_ms),
            should_use_time_dampening: dampen,
            config,
        }
    }

    #[test]
    fn test_near_bottom_edge_scrolls_down_at_max() {
        let config = AutoScrollConfig::default();
        let scroll = resolve_scroll(&container(), Position::new(50.0, 95.0), &ctx(&config, false, 0));
        let scroll = scroll.unwrap();
        assert_eq!(scroll, Position::new(0.0, 28.0));
        assert!(scroll.x.is_sign_positive());
    }

    #[test]
    fn test_center_does_not_scroll() {
        let config = AutoScrollConfig::default();
        assert_eq!(resolve_scroll(&container(), Position::new(50.0, 50.0), &ctx(&config, false, 0)), None);
    }

    #[test]
    fn test_near_start_edges_scroll_negative() {
        let config = AutoScrollConfig::default();
        let scroll = resolve_scroll(&container(), Position::new(2.0, 3.0), &ctx(&config, false, 0));
        assert_eq!(scroll, Some(Position::new(-28.0, -28.0)));
    }

    #[test]
    fn test_corner_scrolls_both_axes() {
        let config = AutoScrollConfig::default();
        let scroll = resolve_scroll(&container(), Position::new(85.0, 99.0), &ctx(&config, false, 0));
        assert_eq!(scroll, Some(Position::new(15.0, 28.0)));
    }

    #[test]
    fn test_dampening_slows_early_scroll() {
        let config = AutoScrollConfig::default();
        let early = resolve_scroll(&container(), Position::new(50.0, 95.0), &ctx(&config, true, 0));
        assert_eq!(early, Some(Position::new(0.0, 1.0)));

        let late = resolve_scroll(&container(), Position::new(50.0, 95.0), &ctx(&config, true, 5000));
        assert_eq!(late, Some(Position::new(0.0, 28.0)));
    }

    #[test]
    fn test_zero_velocity_skips_dampening() {
        let config = AutoScrollConfig::default();
        let distances = DistanceToEdges::between(&container(), Position::new(50.0, 50.0));
        let value = axis_velocity(&container(), &distances, Axis::VERTICAL, &ctx(&config, true, 0));
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_fractional_speed_limits_yield_whole_pixels() {
        let config = AutoScrollConfig {
            max_pixel_scroll: 28.5,
            min_scroll: 1.5,
            ..Default::default()
        };

        let full = resolve_scroll(&container(), Position::new(50.0, 95.0), &ctx(&config, false, 0));
        assert_eq!(full, Some(Position::new(0.0, 29.0)));

        let early = resolve_scroll(&container(), Position::new(50.0, 95.0), &ctx(&config, true, 0));
        assert_eq!(early, Some(Position::new(0.0, 2.0)));
    }

    #[test]
    fn test_dampened_value_never_below_minimum() {
        let config = AutoScrollConfig::default();
        // exactly at accelerate_at the eased ramp is zero
        let distances = DistanceToEdges::between(&container(), Position::new(50.0, 98.0));
        let value = axis_velocity(&container(), &distances, Axis::VERTICAL, &ctx(&config, true, 360));
        assert_eq!(value, 1.0);
    }
}
