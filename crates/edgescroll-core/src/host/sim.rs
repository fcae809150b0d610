//! In-memory host used by the CLI and by tests
//!
//! Containers are laid out in document space and move with the window
//! scroll; they are not affected by each other's scroll offsets.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::ScrollHost;
use crate::geometry::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ContainerId(pub usize);

/// The window: client size, document size and scroll offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimViewport {
    pub width: f64,
    pub height: f64,
    pub content_width: f64,
    pub content_height: f64,
    #[serde(default)]
    pub scroll_x: f64,
    #[serde(default)]
    pub scroll_y: f64,
}

impl SimViewport {
    pub fn new(width: f64, height: f64, content_width: f64, content_height: f64) -> Self {
        Self {
            width,
            height,
            content_width,
            content_height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    fn max_scroll(&self) -> Position {
        Position::new(
            (self.content_width - self.width).max(0.0),
            (self.content_height - self.height).max(0.0),
        )
    }
}

/// A nested scroll container positioned in document space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimContainer {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub content_width: f64,
    pub content_height: f64,
    #[serde(default)]
    pub scroll_x: f64,
    #[serde(default)]
    pub scroll_y: f64,
}

impl SimContainer {
    pub fn new(name: impl Into<String>, bounds: Rect, content_width: f64, content_height: f64) -> Self {
        Self {
            name: name.into(),
            x: bounds.left,
            y: bounds.top,
            width: bounds.width(),
            height: bounds.height(),
            content_width,
            content_height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    fn document_rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }

    fn max_scroll(&self) -> Position {
        Position::new(
            (self.content_width - self.width).max(0.0),
            (self.content_height - self.height).max(0.0),
        )
    }

    fn overflows(&self) -> bool {
        let max = self.max_scroll();
        max.x > 0.0 || max.y > 0.0
    }
}

/// A scroll the host performed, as requested and after clamping
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum ScrollMutation {
    Window {
        requested: Position,
        applied: Position,
    },
    Element {
        id: ContainerId,
        requested: Position,
        applied: Position,
    },
}

impl ScrollMutation {
    pub fn applied(&self) -> Position {
        match self {
            ScrollMutation::Window { applied, .. } | ScrollMutation::Element { applied, .. } => *applied,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedHost {
    viewport: SimViewport,
    containers: Vec<SimContainer>,
    mutations: Vec<ScrollMutation>,
}

/// Move `offset` by `delta` within `[0, max]`, returning the new offset and the movement
fn clamp_scroll(offset: Position, delta: Position, max: Position) -> (Position, Position) {
    let next = Position::new(
        (offset.x + delta.x).clamp(0.0, max.x.max(offset.x)),
        (offset.y + delta.y).clamp(0.0, max.y.max(offset.y)),
    );
    (next, next - offset)
}

impl SimulatedHost {
    pub fn new(viewport: SimViewport, containers: Vec<SimContainer>) -> Self {
        Self {
            viewport,
            containers,
            mutations: Vec::new(),
        }
    }

    pub fn viewport(&self) -> &SimViewport {
        &self.viewport
    }

    pub fn containers(&self) -> &[SimContainer] {
        &self.containers
    }

    pub fn container(&self, id: ContainerId) -> Option<&SimContainer> {
        self.containers.get(id.0)
    }

    pub fn container_id(&self, name: &str) -> Option<ContainerId> {
        self.containers
            .iter()
            .position(|c| c.name == name)
            .map(ContainerId)
    }

    /// Every scroll performed so far, oldest first
    pub fn mutations(&self) -> &[ScrollMutation] {
        &self.mutations
    }

    /// Remove and return the recorded scrolls
    pub fn take_mutations(&mut self) -> Vec<ScrollMutation> {
        std::mem::take(&mut self.mutations)
    }

    fn viewport_client_rect(&self) -> Rect {
        Rect::from_xywh(0.0, 0.0, self.viewport.width, self.viewport.height)
    }

    fn client_rect(&self, container: &SimContainer) -> Rect {
        container
            .document_rect()
            .offset(Position::ORIGIN - self.window_scroll())
    }
}

impl ScrollHost for SimulatedHost {
    type Element = ContainerId;

    fn scrollable_under_point(&self, point: Position) -> Option<ContainerId> {
        let viewport = self.viewport_client_rect();

        // innermost = smallest visible overflowing container containing the point
        self.containers
            .iter()
            .enumerate()
            .filter(|(_, c)| c.overflows())
            .filter_map(|(index, c)| {
                let visible = self.client_rect(c).intersection(&viewport)?;
                visible
                    .contains(point)
                    .then(|| (index, visible.width() * visible.height()))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| ContainerId(index))
    }

    fn element_rect(&self, element: &ContainerId) -> Rect {
        self.container(*element)
            .map(|c| self.client_rect(c))
            .unwrap_or_default()
    }

    fn element_scroll(&self, element: &ContainerId) -> Position {
        self.container(*element)
            .map(|c| Position::new(c.scroll_x, c.scroll_y))
            .unwrap_or_default()
    }

    fn element_max_scroll(&self, element: &ContainerId) -> Position {
        self.container(*element)
            .map(SimContainer::max_scroll)
            .unwrap_or_default()
    }

    fn viewport_rect(&self) -> Rect {
        self.viewport_client_rect()
    }

    fn window_scroll(&self) -> Position {
        Position::new(self.viewport.scroll_x, self.viewport.scroll_y)
    }

    fn max_window_scroll(&self) -> Position {
        self.viewport.max_scroll()
    }

    fn scroll_element_by(&mut self, element: &ContainerId, delta: Position) {
        let Some(container) = self.containers.get_mut(element.0) else {
            trace!(id = element.0, "Scroll requested for unknown container");
            return;
        };

        let current = Position::new(container.scroll_x, container.scroll_y);
        let (next, applied) = clamp_scroll(current, delta, container.max_scroll());
        container.scroll_x = next.x;
        container.scroll_y = next.y;

        self.mutations.push(ScrollMutation::Element {
            id: *element,
            requested: delta,
            applied,
        });
    }

    fn scroll_window_by(&mut self, delta: Position) {
        let current = self.window_scroll();
        let (next, applied) = clamp_scroll(current, delta, self.viewport.max_scroll());
        self.viewport.scroll_x = next.x;
        self.viewport.scroll_y = next.y;

        self.mutations.push(ScrollMutation::Window {
            requested: delta,
            applied,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> SimulatedHost {
        SimulatedHost::new(
            SimViewport::new(800.0, 600.0, 800.0, 2000.0),
            vec![
                SimContainer::new("board", Rect::from_xywh(0.0, 100.0, 600.0, 400.0), 2000.0, 400.0),
                SimContainer::new("column", Rect::from_xywh(20.0, 120.0, 200.0, 300.0), 200.0, 900.0),
                SimContainer::new("static", Rect::from_xywh(600.0, 0.0, 200.0, 200.0), 200.0, 200.0),
            ],
        )
    }

    #[test]
    fn test_innermost_container_wins() {
        let host = host();
        assert_eq!(host.scrollable_under_point(Position::new(50.0, 200.0)), Some(ContainerId(1)));
        assert_eq!(host.scrollable_under_point(Position::new(400.0, 200.0)), Some(ContainerId(0)));
    }

    #[test]
    fn test_non_overflowing_container_is_skipped() {
        let host = host();
        assert_eq!(host.scrollable_under_point(Position::new(700.0, 50.0)), None);
    }

    #[test]
    fn test_rects_follow_window_scroll() {
        let mut host = host();
        host.scroll_window_by(Position::new(0.0, 50.0));
        let id = host.container_id("board").unwrap();
        assert_eq!(host.element_rect(&id), Rect::from_xywh(0.0, 50.0, 600.0, 400.0));
    }

    #[test]
    fn test_scroll_is_clamped_and_logged() {
        let mut host = host();
        let id = host.container_id("column").unwrap();
        host.scroll_element_by(&id, Position::new(0.0, 650.0));

        assert_eq!(host.element_scroll(&id), Position::new(0.0, 600.0));
        assert_eq!(host.element_max_scroll(&id), Position::new(0.0, 600.0));
        assert_eq!(host.mutations().len(), 1);
        assert_eq!(host.mutations()[0].applied(), Position::new(0.0, 600.0));
    }

    #[test]
    fn test_window_max_scroll() {
        let host = host();
        assert_eq!(host.max_window_scroll(), Position::new(0.0, 1400.0));
        assert_eq!(host.viewport_rect(), Rect::new(0.0, 800.0, 600.0, 0.0));
    }
}
