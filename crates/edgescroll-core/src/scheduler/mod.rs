//! Frame scheduling and time sources for the auto-scroll loop
//!
//! The controller never sleeps or spawns: it asks a [`FrameScheduler`] for a
//! frame and is handed that frame back through `AutoScroller::on_frame`.
//! [`FrameQueue`] can be stepped by hand; [`FrameDriver`] pumps it on a
//! tokio interval.

mod clock;
mod driver;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::FrameDriver;

use std::collections::VecDeque;

/// Cancellation token for one scheduled frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

pub trait FrameScheduler {
    /// Request one frame
    fn schedule(&mut self) -> FrameHandle;

    /// Withdraw a frame; unknown or already delivered handles are ignored
    fn cancel(&mut self, handle: FrameHandle);
}

/// Deterministic scheduler: frames are due until drained
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: VecDeque<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames waiting to be delivered
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Take every frame due now, oldest first
    ///
    /// Frames scheduled while the drained ones are delivered wait for the
    /// next drain.
    pub fn drain_due(&mut self) -> Vec<FrameHandle> {
        self.pending.drain(..).collect()
    }
}

impl FrameScheduler for FrameQueue {
    fn schedule(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push_back(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.pending.retain(|pending| *pending != handle);
    }
}
