pub mod behavior;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod host;
pub mod scenario;
pub mod scheduler;
pub mod scroll;
pub mod target;

pub use behavior::ScrollBehavior;
pub use config::{AppConfig, AutoScrollConfig, EasingType, FrameConfig};
pub use controller::{AutoScroller, PointerInput, StartOptions};
pub use error::{Error, Result};
pub use geometry::{Axis, Position, Rect};
pub use host::{ScrollHost, SimulatedHost};
pub use scheduler::{Clock, FrameDriver, FrameHandle, FrameQueue, FrameScheduler, ManualClock, SystemClock};
