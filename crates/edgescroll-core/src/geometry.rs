//! Geometry primitives: points, axis descriptors and rectangles
//!
//! All coordinates are client-space pixels, `y` growing downwards.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A scalar pair used for pointer coordinates, scroll deltas and scroll offsets
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Component along an axis
    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis.direction {
            Direction::Vertical => self.y,
            Direction::Horizontal => self.x,
        }
    }

    /// Replace `-0.0` with `0.0` on both components
    #[inline]
    pub fn clean_negative_zero(self) -> Self {
        // -0.0 + 0.0 == +0.0
        Self::new(self.x + 0.0, self.y + 0.0)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Vertical,
    Horizontal,
}

/// One side of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Axis descriptor: which edges bound it and which dimension measures it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Axis {
    pub direction: Direction,
    /// Edge with the smaller coordinate
    pub start: Edge,
    /// Edge with the larger coordinate
    pub end: Edge,
}

impl Axis {
    pub const VERTICAL: Axis = Axis {
        direction: Direction::Vertical,
        start: Edge::Top,
        end: Edge::Bottom,
    };

    pub const HORIZONTAL: Axis = Axis {
        direction: Direction::Horizontal,
        start: Edge::Left,
        end: Edge::Right,
    };
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Rect {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(y, x + width, y + height, x)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Size along an axis
    #[inline]
    pub fn size(&self, axis: Axis) -> f64 {
        match axis.direction {
            Direction::Vertical => self.height(),
            Direction::Horizontal => self.width(),
        }
    }

    #[inline]
    pub fn edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    pub fn offset(&self, by: Position) -> Self {
        Self::new(
            self.top + by.y,
            self.right + by.x,
            self.bottom + by.y,
            self.left + by.x,
        )
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let clipped = Rect::new(
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
            self.left.max(other.left),
        );
        if clipped.width() < 0.0 || clipped.height() < 0.0 {
            None
        } else {
            Some(clipped)
        }
    }
}
