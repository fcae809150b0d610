//! Scroll targets: the nested container under the pointer, or the window

use std::fmt;

use crate::geometry::{Position, Rect};
use crate::host::ScrollHost;
use crate::scroll::{clamp_to_bounds, resolve_scroll, ScrollDetails, ScrollRequestContext};

/// A region that can be scrolled, measured for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRegion {
    pub container: Rect,
    pub scroll: ScrollDetails,
}

/// A nested scrollable element
pub type Scrollable = ScrollRegion;

/// The window
pub type Viewport = ScrollRegion;

impl ScrollRegion {
    /// Delta this region should scroll by for a pointer at `pointer`
    ///
    /// `None` when the pointer is outside every scrolling zone or the region
    /// is already at its bound in the proposed direction.
    pub fn resolve(&self, pointer: Position, ctx: &ScrollRequestContext<'_>) -> Option<Position> {
        let proposed = resolve_scroll(&self.container, pointer, ctx)?;
        clamp_to_bounds(proposed, &self.scroll)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollTarget {
    Container,
    Window,
}

impl fmt::Display for ScrollTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollTarget::Container => f.write_str("container"),
            ScrollTarget::Window => f.write_str("window"),
        }
    }
}

/// A resolved scroll, ready to hand to the host
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollRequest<E> {
    Element { element: E, delta: Position },
    Window { delta: Position },
}

impl<E> ScrollRequest<E> {
    pub fn delta(&self) -> Position {
        match self {
            ScrollRequest::Element { delta, .. } | ScrollRequest::Window { delta } => *delta,
        }
    }

    pub fn target(&self) -> ScrollTarget {
        match self {
            ScrollRequest::Element { .. } => ScrollTarget::Container,
            ScrollRequest::Window { .. } => ScrollTarget::Window,
        }
    }

    pub fn apply<H>(self, host: &mut H)
    where
        H: ScrollHost<Element = E>,
    {
        match self {
            ScrollRequest::Element { element, delta } => host.scroll_element_by(&element, delta),
            ScrollRequest::Window { delta } => host.scroll_window_by(delta),
        }
    }
}

impl ScrollTarget {
    /// What this target wants to scroll by for a pointer at `pointer`, if anything
    pub fn resolve<H: ScrollHost>(
        &self,
        host: &H,
        pointer: Position,
        ctx: &ScrollRequestContext<'_>,
    ) -> Option<ScrollRequest<H::Element>> {
        match self {
            ScrollTarget::Container => {
                let element = host.scrollable_under_point(pointer)?;
                let delta = host.element_region(&element).resolve(pointer, ctx)?;
                Some(ScrollRequest::Element { element, delta })
            }
            ScrollTarget::Window => {
                let delta = host.viewport_region().resolve(pointer, ctx)?;
                Some(ScrollRequest::Window { delta })
            }
        }
    }
}
