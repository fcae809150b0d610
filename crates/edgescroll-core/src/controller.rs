//! Auto-scroll controller: the per-drag session and its frame loop
//!
//! Lifecycle:
//!
//! 1) [`AutoScroller::start`] opens a session and scrolls once right away if
//!    the pointer already sits in a scrolling zone.
//! 2) [`AutoScroller::update_input`] follows the pointer.
//! 3) Each delivered frame ([`AutoScroller::on_frame`]) scrolls at most one
//!    target and requests the next frame.
//! 4) [`AutoScroller::stop`] cancels the pending frame and drops the session.
//!
//! Calls outside an active session are no-ops.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::behavior::ScrollBehavior;
use crate::config::AutoScrollConfig;
use crate::geometry::Position;
use crate::host::ScrollHost;
use crate::scheduler::{Clock, FrameHandle, FrameQueue, FrameScheduler, SystemClock};
use crate::scroll::ScrollRequestContext;
use crate::target::ScrollTarget;

/// Latest pointer coordinates, client space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerInput {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerInput {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.client_x, self.client_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StartOptions {
    pub input: PointerInput,
    /// Falls back to the configured default behavior
    pub behavior: Option<ScrollBehavior>,
}

impl StartOptions {
    pub fn new(input: PointerInput) -> Self {
        Self {
            input,
            behavior: None,
        }
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = Some(behavior);
        self
    }
}

/// State of one drag, owned by the controller
#[derive(Debug, Clone)]
struct Session {
    drag_start: Instant,
    latest_input: PointerInput,
    frame: Option<FrameHandle>,
    /// False until the session performs its first scroll
    should_use_time_dampening: bool,
    behavior: ScrollBehavior,
}

/// Drives edge auto-scrolling for one drag at a time
pub struct AutoScroller<H, S = FrameQueue, C = SystemClock>
where
    H: ScrollHost,
    S: FrameScheduler,
    C: Clock,
{
    host: H,
    scheduler: S,
    clock: C,
    config: AutoScrollConfig,
    session: Option<Session>,
}

impl<H: ScrollHost> AutoScroller<H> {
    /// Controller on a [`FrameQueue`] and the system clock
    pub fn with_host(host: H, config: AutoScrollConfig) -> Self {
        Self::new(host, FrameQueue::new(), SystemClock, config)
    }
}

impl<H, S, C> AutoScroller<H, S, C>
where
    H: ScrollHost,
    S: FrameScheduler,
    C: Clock,
{
    pub fn new(host: H, scheduler: S, clock: C, config: AutoScrollConfig) -> Self {
        Self {
            host,
            scheduler,
            clock,
            config,
            session: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    /// Applies from the next resolution on, including to a running session
    pub fn set_config(&mut self, config: AutoScrollConfig) {
        self.config = config;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Behavior of the running session
    pub fn behavior(&self) -> Option<ScrollBehavior> {
        self.session.as_ref().map(|s| s.behavior)
    }

    /// Whether the running session dampens by drag time
    pub fn is_time_dampened(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.should_use_time_dampening)
    }

    /// Frame the running session is waiting for
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.session.as_ref().and_then(|s| s.frame)
    }

    /// Open a session, replacing any running one
    ///
    /// The first scroll attempt runs synchronously here. A drag that starts
    /// inside a scrolling zone therefore scrolls once before a following
    /// [`stop`](Self::stop) can run; `stop` only prevents later frames.
    pub fn start(&mut self, options: StartOptions) {
        if self.session.is_some() {
            debug!("Auto-scroll session replaced by a new start");
            self.stop();
        }

        let behavior = options.behavior.unwrap_or(self.config.default_behavior);
        self.session = Some(Session {
            drag_start: self.clock.now(),
            latest_input: options.input,
            frame: None,
            should_use_time_dampening: false,
            behavior,
        });

        debug!(
            %behavior,
            x = options.input.client_x,
            y = options.input.client_y,
            "Auto-scroll session started"
        );

        self.try_scroll();
        self.schedule_next();
    }

    /// Follow the pointer; keeps the drag start time and dampening state
    pub fn update_input(&mut self, input: PointerInput) {
        match self.session.as_mut() {
            Some(session) => session.latest_input = input,
            None => trace!("Pointer update without an auto-scroll session ignored"),
        }
    }

    /// Cancel the pending frame and end the session; idempotent
    pub fn stop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        if let Some(frame) = session.frame {
            self.scheduler.cancel(frame);
        }

        debug!(
            elapsed_ms = self.clock.now().saturating_duration_since(session.drag_start).as_millis() as u64,
            "Auto-scroll session stopped"
        );
    }

    /// Deliver a scheduled frame
    ///
    /// Runs one scroll attempt and requests the next frame. Frames that do
    /// not belong to the running session are ignored. Returns whether the
    /// frame was accepted.
    pub fn on_frame(&mut self, handle: FrameHandle) -> bool {
        let accepted = match self.session.as_mut() {
            Some(session) if session.frame == Some(handle) => {
                session.frame = None;
                true
            }
            _ => false,
        };

        if !accepted {
            trace!(frame = handle.id(), "Stale frame ignored");
            return false;
        }

        self.try_scroll();
        self.schedule_next();
        true
    }

    fn schedule_next(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.frame = Some(self.scheduler.schedule());
        }
    }

    /// Resolve and perform at most one scroll; returns the target that moved
    fn try_scroll(&mut self) -> Option<ScrollTarget> {
        let session = self.session.as_ref()?;

        if self.config.disabled {
            trace!("Auto-scroll disabled, frame skipped");
            return None;
        }

        let ctx = ScrollRequestContext {
            drag_start: session.drag_start,
            now: self.clock.now(),
            should_use_time_dampening: session.should_use_time_dampening,
            config: &self.config,
        };
        let pointer = session.latest_input.position();

        let request = session
            .behavior
            .targets()
            .iter()
            .find_map(|target| target.resolve(&self.host, pointer, &ctx));

        let Some(request) = request else {
            trace!(x = pointer.x, y = pointer.y, "No scroll target for pointer");
            return None;
        };

        let target = request.target();
        let delta = request.delta();
        debug!(
            %target,
            dx = delta.x,
            dy = delta.y,
            dampened = session.should_use_time_dampening,
            "Auto-scrolling"
        );

        request.apply(&mut self.host);

        if let Some(session) = self.session.as_mut() {
            session.should_use_time_dampening = true;
        }

        Some(target)
    }
}

impl<H, C> AutoScroller<H, FrameQueue, C>
where
    H: ScrollHost,
    C: Clock,
{
    /// Deliver every frame currently due on the queue; returns how many ran
    pub fn run_pending_frames(&mut self) -> usize {
        let due = self.scheduler.drain_due();
        due.into_iter()
            .filter(|handle| self.on_frame(*handle))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::host::{ContainerId, ScrollMutation, SimContainer, SimViewport, SimulatedHost};
    use crate::scheduler::ManualClock;
    use std::time::Duration;

    type TestScroller = AutoScroller<SimulatedHost, FrameQueue, ManualClock>;

    /// 1000x1000 window over a 3000px tall document, with a 200x400 list
    fn host() -> SimulatedHost {
        SimulatedHost::new(
            SimViewport::new(1000.0, 1000.0, 1000.0, 3000.0),
            vec![SimContainer::new(
                "list",
                Rect::from_xywh(100.0, 100.0, 200.0, 400.0),
                200.0,
                1200.0,
            )],
        )
    }

    fn scroller(host: SimulatedHost) -> (TestScroller, ManualClock) {
        let clock = ManualClock::new();
        let scroller = AutoScroller::new(host, FrameQueue::new(), clock.clone(), AutoScrollConfig::default());
        (scroller, clock)
    }

    /// Near the bottom of the viewport, outside the list
    const WINDOW_EDGE: PointerInput = PointerInput {
        client_x: 600.0,
        client_y: 995.0,
    };

    /// Near the bottom of the list, far from viewport edges
    const LIST_EDGE: PointerInput = PointerInput {
        client_x: 200.0,
        client_y: 495.0,
    };

    const CENTER: PointerInput = PointerInput {
        client_x: 500.0,
        client_y: 500.0,
    };

    fn applied(mutations: &[ScrollMutation]) -> Vec<Position> {
        mutations.iter().map(ScrollMutation::applied).collect()
    }

    #[test]
    fn test_start_scrolls_immediately_without_dampening() {
        let (mut scroller, _clock) = scroller(host());
        assert!(!scroller.is_time_dampened());

        scroller.start(StartOptions::new(WINDOW_EDGE));

        assert_eq!(applied(scroller.host().mutations()), vec![Position::new(0.0, 28.0)]);
        assert!(scroller.is_time_dampened());
        assert!(scroller.pending_frame().is_some());
    }

    #[test]
    fn test_frames_after_first_scroll_are_dampened() {
        let (mut scroller, clock) = scroller(host());
        scroller.start(StartOptions::new(WINDOW_EDGE));

        clock.advance(Duration::from_millis(16));
        assert_eq!(scroller.run_pending_frames(), 1);
        clock.advance(Duration::from_millis(2000));
        assert_eq!(scroller.run_pending_frames(), 1);

        assert_eq!(
            applied(scroller.host().mutations()),
            vec![
                Position::new(0.0, 28.0),
                Position::new(0.0, 1.0),
                Position::new(0.0, 28.0),
            ]
        );
    }

    #[test]
    fn test_first_scroll_later_in_session_is_undampened() {
        let (mut scroller, clock) = scroller(host());
        scroller.start(StartOptions::new(CENTER));
        assert!(scroller.host().mutations().is_empty());
        assert!(!scroller.is_time_dampened());

        clock.advance(Duration::from_millis(16));
        scroller.update_input(WINDOW_EDGE);
        scroller.run_pending_frames();
        clock.advance(Duration::from_millis(16));
        scroller.run_pending_frames();

        assert_eq!(
            applied(scroller.host().mutations()),
            vec![Position::new(0.0, 28.0), Position::new(0.0, 1.0)]
        );
    }

    #[test]
    fn test_update_input_keeps_acceleration() {
        let (mut scroller, clock) = scroller(host());
        scroller.start(StartOptions::new(WINDOW_EDGE));

        clock.advance(Duration::from_millis(780));
        scroller.update_input(PointerInput::new(400.0, 996.0));
        scroller.run_pending_frames();

        // halfway through the ramp: 28 * 0.5² = 7
        assert_eq!(scroller.host().mutations().last().map(ScrollMutation::applied), Some(Position::new(0.0, 7.0)));
    }

    #[test]
    fn test_start_then_stop_leaves_no_frame() {
        let (mut scroller, _clock) = scroller(host());
        scroller.start(StartOptions::new(CENTER));
        scroller.update_input(WINDOW_EDGE);
        scroller.stop();

        assert_eq!(scroller.scheduler().pending(), 0);
        assert_eq!(scroller.run_pending_frames(), 0);
        assert!(scroller.host().mutations().is_empty());
    }

    #[test]
    fn test_start_at_edge_then_stop_scrolls_once() {
        let (mut scroller, clock) = scroller(host());
        scroller.start(StartOptions::new(WINDOW_EDGE));
        scroller.stop();

        clock.advance(Duration::from_millis(16));
        assert_eq!(scroller.run_pending_frames(), 0);
        assert_eq!(applied(scroller.host().mutations()), vec![Position::new(0.0, 28.0)]);
    }

    #[test]
    fn test_stop_cancels_queued_frame() {
        let (mut scroller, _clock) = scroller(host());
        scroller.start(StartOptions::new(WINDOW_EDGE));
        let frame = scroller.pending_frame().unwrap();
        scroller.stop();

        assert!(!scroller.on_frame(frame));
        assert_eq!(scroller.host().mutations().len(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut scroller, _clock) = scroller(host());
        scroller.stop();
        scroller.start(StartOptions::new(CENTER));
        scroller.stop();
        scroller.stop();
        assert!(!scroller.is_active());
    }

    #[test]
    fn test_update_after_stop_does_not_resurrect() {
        let (mut scroller, _clock) = scroller(host());
        scroller.start(StartOptions::new(CENTER));
        scroller.stop();

        scroller.update_input(WINDOW_EDGE);
        assert!(!scroller.is_active());
        assert_eq!(scroller.run_pending_frames(), 0);
        assert!(scroller.host().mutations().is_empty());
    }

    #[test]
    fn test_update_without_session_is_noop() {
        let (mut scroller, _clock) = scroller(host());
        scroller.update_input(WINDOW_EDGE);
        assert!(!scroller.is_active());
        assert_eq!(scroller.scheduler().pending(), 0);
    }

    #[test]
    fn test_restart_replaces_loop() {
        let (mut scroller, clock) = scroller(host());
        scroller.start(StartOptions::new(CENTER));
        let first = scroller.pending_frame().unwrap();
        scroller.start(StartOptions::new(CENTER));
        scroller.start(StartOptions::new(CENTER));

        assert_eq!(scroller.scheduler().pending(), 1);
        assert!(!scroller.on_frame(first));

        for _ in 0..5 {
            clock.advance(Duration::from_millis(16));
            assert_eq!(scroller.run_pending_frames(), 1);
            assert_eq!(scroller.scheduler().pending(), 1);
        }
    }

    #[test]
    fn test_restart_resets_dampening() {
        let (mut scroller, _clock) = scroller(host());
        scroller.start(StartOptions::new(WINDOW_EDGE));
        assert!(scroller.is_time_dampened());
        scroller.start(StartOptions::new(CENTER));
        assert!(!scroller.is_time_dampened());
    }

    #[test]
    fn test_window_then_container_falls_back_when_window_is_at_max() {
        // window scrolled to its max; the list's bottom edge lines up with the viewport's
        let viewport = SimViewport {
            scroll_y: 2000.0,
            ..SimViewport::new(1000.0, 1000.0, 1000.0, 3000.0)
        };
        let list = SimContainer::new("list", Rect::from_xywh(100.0, 2600.0, 200.0, 400.0), 200.0, 1200.0);
        let (mut scroller, _clock) = scroller(SimulatedHost::new(viewport, vec![list]));

        scroller.start(
            StartOptions::new(PointerInput::new(200.0, 995.0)).with_behavior(ScrollBehavior::WindowThenContainer),
        );

        assert_eq!(
            scroller.host().mutations(),
            &[ScrollMutation::Element {
                id: ContainerId(0),
                requested: Position::new(0.0, 28.0),
                applied: Position::new(0.0, 28.0),
            }]
        );
    }

    #[test]
    fn test_container_then_window_prefers_container() {
        let (mut scroller, _clock) = scroller(host());
        scroller.start(StartOptions::new(LIST_EDGE).with_behavior(ScrollBehavior::ContainerThenWindow));

        assert!(matches!(
            scroller.host().mutations(),
            [ScrollMutation::Element { id: ContainerId(0), .. }]
        ));
    }

    #[test]
    fn test_window_only_ignores_container() {
        let (mut scroller, _clock) = scroller(host());
        scroller.start(StartOptions::new(LIST_EDGE).with_behavior(ScrollBehavior::WindowOnly));
        assert!(scroller.host().mutations().is_empty());
    }

    #[test]
    fn test_container_only_ignores_window() {
        let (mut scroller, _clock) = scroller(host());
        scroller.start(StartOptions::new(WINDOW_EDGE).with_behavior(ScrollBehavior::ContainerOnly));
        assert!(scroller.host().mutations().is_empty());
    }

    #[test]
    fn test_no_target_frame_keeps_looping() {
        let (mut scroller, clock) = scroller(host());
        scroller.start(StartOptions::new(CENTER));
        for _ in 0..3 {
            clock.advance(Duration::from_millis(16));
            assert_eq!(scroller.run_pending_frames(), 1);
        }
        assert!(scroller.is_active());
        assert!(scroller.host().mutations().is_empty());
    }

    #[test]
    fn test_disabled_config_skips_scrolling() {
        let (mut scroller, _clock) = scroller(host());
        scroller.set_config(AutoScrollConfig {
            disabled: true,
            ..Default::default()
        });
        scroller.start(StartOptions::new(WINDOW_EDGE));
        scroller.run_pending_frames();

        assert!(scroller.is_active());
        assert!(scroller.host().mutations().is_empty());
    }

    #[test]
    fn test_default_behavior_from_config() {
        let (mut scroller, _clock) = scroller(host());
        scroller.set_config(AutoScrollConfig {
            default_behavior: ScrollBehavior::ContainerOnly,
            ..Default::default()
        });
        scroller.start(StartOptions::new(CENTER));
        assert_eq!(scroller.behavior(), Some(ScrollBehavior::ContainerOnly));
    }
}
