//! Scroll offsets and bounds checks

use crate::geometry::{Axis, Position};

/// How far a target has scrolled and how far it may scroll
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDetails {
    pub current: Position,
    /// `scroll size - client size` per axis; zero or less means not scrollable
    pub max: Position,
}

impl ScrollDetails {
    pub fn new(current: Position, max: Position) -> Self {
        Self { current, max }
    }

    /// Room left, in whole pixels, when moving along `axis` in the direction of `sign`
    fn room(&self, axis: Axis, sign: f64) -> f64 {
        let current = self.current.along(axis);
        // content may have shrunk below the current offset
        let max = self.max.along(axis).max(current).max(0.0);

        if sign > 0.0 {
            (max - current).floor()
        } else {
            current.max(0.0).floor()
        }
    }

    /// Whether the target can move at least one pixel in the direction of `delta` on `axis`
    pub fn can_scroll_on(&self, axis: Axis, delta: f64) -> bool {
        delta != 0.0 && self.room(axis, delta.signum()) >= 1.0
    }

    /// Whether the target can move on at least one axis
    pub fn can_scroll(&self, delta: Position) -> bool {
        self.can_scroll_on(Axis::VERTICAL, delta.y) || self.can_scroll_on(Axis::HORIZONTAL, delta.x)
    }
}

/// Trim `delta` to what the target can actually absorb
///
/// Axes that cannot move are zeroed, the rest are clamped so that
/// `current + delta` stays inside `[0, max]`. `None` when no axis can move.
pub fn clamp_to_bounds(delta: Position, details: &ScrollDetails) -> Option<Position> {
    let clamp_axis = |axis: Axis| -> f64 {
        let value = delta.along(axis);
        if !details.can_scroll_on(axis, value) {
            return 0.0;
        }
        let room = details.room(axis, value.signum());
        value.signum() * value.abs().min(room)
    };

    let clamped = Position::new(clamp_axis(Axis::HORIZONTAL), clamp_axis(Axis::VERTICAL));

    if clamped.is_origin() {
        None
    } else {
        Some(clamped.clean_negative_zero())
    }
}
