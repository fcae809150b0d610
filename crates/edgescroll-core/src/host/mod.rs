//! Contract between the auto-scroller and the environment it scrolls
//!
//! Measurement and scroll mutation live outside the engine. A host answers
//! "what is under the pointer and how far can it scroll" and performs the
//! scroll the engine decides on.

mod sim;

pub use sim::{ContainerId, ScrollMutation, SimContainer, SimViewport, SimulatedHost};

use std::fmt::Debug;

use crate::geometry::{Position, Rect};
use crate::scroll::ScrollDetails;
use crate::target::ScrollRegion;

pub trait ScrollHost {
    /// Handle to a nested scrollable element
    type Element: Clone + Debug;

    /// Closest scrollable element under a client-space point
    fn scrollable_under_point(&self, point: Position) -> Option<Self::Element>;

    /// Client-space bounding box of an element
    fn element_rect(&self, element: &Self::Element) -> Rect;

    fn element_scroll(&self, element: &Self::Element) -> Position;

    /// Largest scroll offsets the element accepts
    fn element_max_scroll(&self, element: &Self::Element) -> Position;

    fn viewport_rect(&self) -> Rect;

    fn window_scroll(&self) -> Position;

    fn max_window_scroll(&self) -> Position;

    fn scroll_element_by(&mut self, element: &Self::Element, delta: Position);

    fn scroll_window_by(&mut self, delta: Position);

    /// Measurements of an element as a scroll region
    fn element_region(&self, element: &Self::Element) -> ScrollRegion {
        ScrollRegion {
            container: self.element_rect(element),
            scroll: ScrollDetails::new(self.element_scroll(element), self.element_max_scroll(element)),
        }
    }

    /// Measurements of the window as a scroll region
    fn viewport_region(&self) -> ScrollRegion {
        ScrollRegion {
            container: self.viewport_rect(),
            scroll: ScrollDetails::new(self.window_scroll(), self.max_window_scroll()),
        }
    }
}
