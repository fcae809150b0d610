use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use super::{Clock, FrameQueue};
use crate::config::FrameConfig;
use crate::controller::AutoScroller;
use crate::host::ScrollHost;

/// Pumps a [`FrameQueue`]-backed controller at a fixed frame rate
#[derive(Debug, Clone, Copy)]
pub struct FrameDriver {
    tick: Duration,
}

impl FrameDriver {
    pub fn new(config: &FrameConfig) -> Self {
        Self {
            tick: config.tick_duration(),
        }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Run frames until `shutdown` turns true or `on_tick` returns false
    ///
    /// `on_tick` runs before the due frames of each tick, which is where a
    /// caller feeds pointer input. Returns the number of completed ticks.
    pub async fn run<H, C, F>(
        &self,
        scroller: &mut AutoScroller<H, FrameQueue, C>,
        mut shutdown: watch::Receiver<bool>,
        mut on_tick: F,
    ) -> u64
    where
        H: ScrollHost,
        C: Clock,
        F: FnMut(&mut AutoScroller<H, FrameQueue, C>) -> bool,
    {
        info!("Frame driver started: tick={}ms", self.tick.as_millis());

        let mut interval = tokio::time::interval(self.tick);
        let mut ticks = 0u64;

        loop {
            tokio::select! {
                biased;

                // Handle shutdown signal
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!("Frame driver received shutdown signal");
                        break;
                    }
                }

                _ = interval.tick() => {
                    if !on_tick(scroller) {
                        debug!("Frame driver finished after {} ticks", ticks);
                        break;
                    }
                    let delivered = scroller.run_pending_frames();
                    ticks += 1;
                    if delivered == 0 && !scroller.is_active() {
                        debug!("No auto-scroll session, tick {} idle", ticks);
                    }
                }
            }
        }

        info!("Frame driver stopped");
        ticks
    }
}
