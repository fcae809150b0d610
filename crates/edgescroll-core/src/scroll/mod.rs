//! Edge auto-scroll math
//!
//! Pure functions that turn a pointer position inside a scrollable region
//! into an integer scroll delta for one frame.
//!
//! ## Atoms
//! - `easing` - Ease-in curves for the distance and time ramps
//! - `timing` - Range percentage and time dampening
//! - `thresholds` - Edge distance thresholds and the distance-to-velocity curve
//! - `bounds` - Scroll offsets and the "can this target still move" check
//!
//! ## Molecules
//! - `velocity` - Per-axis velocity and the combined scroll vector
//!
//! # Usage
//!
//! ```ignore
//! use edgescroll_core::scroll::{resolve_scroll, ScrollRequestContext};
//!
//! let ctx = ScrollRequestContext {
//!     drag_start: start,
//!     now: Instant::now(),
//!     should_use_time_dampening: true,
//!     config: &config,
//! };
//! if let Some(delta) = resolve_scroll(&container_rect, pointer, &ctx) {
//!     // apply delta
//! }
//! ```

pub mod bounds;
pub mod easing;
pub mod thresholds;
pub mod timing;

pub mod velocity;

pub use bounds::{clamp_to_bounds, ScrollDetails};
pub use thresholds::{distance_thresholds, value_from_distance, DistanceThresholds};
pub use timing::{dampen_by_time, percentage};
pub use velocity::{axis_velocity, resolve_scroll, DistanceToEdges, ScrollRequestContext};
