use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use edgescroll_core::geometry::{Axis, Rect};
use edgescroll_core::scroll::{dampen_by_time, distance_thresholds, value_from_distance};
use edgescroll_core::AppConfig;

pub fn run(config: &AppConfig, size: f64, elapsed_ms: Option<u64>, step: f64) -> Result<()> {
    if !size.is_finite() || size <= 0.0 {
        bail!("Region size must be positive, got {}", size);
    }
    if !step.is_finite() || step <= 0.0 {
        bail!("Step must be positive, got {}", step);
    }

    let autoscroll = &config.autoscroll;
    let region = Rect::from_xywh(0.0, 0.0, size, size);
    let thresholds = distance_thresholds(&region, Axis::VERTICAL, autoscroll);

    println!(
        "Region {}px: scrolling starts at {:.1}px, full speed at {:.1}px ({}px/frame)",
        size, thresholds.start_scrolling_from, thresholds.max_scroll_value_at, autoscroll.max_pixel_scroll
    );
    if let Some(ms) = elapsed_ms {
        println!("Dampened as if the drag started {}ms ago", ms);
    }
    println!();
    println!("{:>10}  {:>8}", "distance", "px/frame");

    let drag_start = Instant::now();
    let now = drag_start + Duration::from_millis(elapsed_ms.unwrap_or_default());

    let mut distance = 0.0;
    while distance <= thresholds.start_scrolling_from + step {
        let mut value = value_from_distance(distance, &thresholds, autoscroll);
        if elapsed_ms.is_some() && value > 0.0 {
            value = dampen_by_time(value, drag_start, now, autoscroll).max(autoscroll.min_scroll);
        }
        println!("{:>10.1}  {:>8}", distance, value);
        distance += step;
    }

    Ok(())
}
