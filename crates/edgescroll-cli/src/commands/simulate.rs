use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{info, warn};

use edgescroll_core::host::{ScrollMutation, SimulatedHost};
use edgescroll_core::scenario::Scenario;
use edgescroll_core::{
    AppConfig, AutoScroller, Clock, FrameDriver, FrameQueue, ManualClock, PointerInput,
    ScrollBehavior, ScrollHost, StartOptions, SystemClock,
};

pub struct Options {
    pub behavior: Option<ScrollBehavior>,
    pub json: bool,
    pub realtime: bool,
}

/// What happened during one frame
#[derive(Debug, Serialize)]
struct FrameReport {
    frame: u64,
    elapsed_ms: u64,
    pointer: PointerInput,
    mutations: Vec<ScrollMutation>,
}

pub async fn run(config: &AppConfig, path: &Path, options: Options) -> Result<()> {
    let scenario = Scenario::load(path)
        .with_context(|| format!("Failed to load scenario {}", path.display()))?;

    let behavior = options
        .behavior
        .or(scenario.behavior)
        .unwrap_or(config.autoscroll.default_behavior);

    info!(
        "Simulating {} frames with behavior {} ({} containers)",
        scenario.total_frames(),
        behavior,
        scenario.containers.len()
    );

    let host = if options.realtime {
        run_realtime(config, &scenario, behavior, options.json).await?
    } else {
        run_stepped(config, &scenario, behavior, options.json)?
    };

    if !options.json {
        print_summary(&host);
    }

    Ok(())
}

/// Step frames by hand on a clock advancing one frame per step
fn run_stepped(
    config: &AppConfig,
    scenario: &Scenario,
    behavior: ScrollBehavior,
    json: bool,
) -> Result<SimulatedHost> {
    let tick = config.frames.tick_duration();
    let clock = ManualClock::new();
    let drag_start = clock.now();
    let mut scroller = AutoScroller::new(
        scenario.build_host(),
        FrameQueue::new(),
        clock.clone(),
        config.autoscroll.clone(),
    );

    let start_input = scenario.start_input();
    scroller.start(StartOptions::new(start_input).with_behavior(behavior));
    report(&mut scroller, 0, drag_start, start_input, json)?;

    for (index, input) in scenario.frame_inputs().enumerate() {
        clock.advance(tick);
        scroller.update_input(input);
        scroller.run_pending_frames();
        report(&mut scroller, index as u64 + 1, drag_start, input, json)?;
    }

    scroller.stop();
    Ok(scroller.host().clone())
}

/// Run frames on the tokio frame driver against the system clock
async fn run_realtime(
    config: &AppConfig,
    scenario: &Scenario,
    behavior: ScrollBehavior,
    json: bool,
) -> Result<SimulatedHost> {
    let mut scroller = AutoScroller::new(
        scenario.build_host(),
        FrameQueue::new(),
        SystemClock,
        config.autoscroll.clone(),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, stopping simulation");
            let _ = shutdown_tx.send(true);
        }
    });

    let drag_start = Instant::now();
    let start_input = scenario.start_input();
    scroller.start(StartOptions::new(start_input).with_behavior(behavior));
    report(&mut scroller, 0, drag_start, start_input, json)?;

    let mut inputs = scenario.frame_inputs();
    let mut last_input = start_input;
    let mut frame = 0u64;
    let mut failure = None;

    let driver = FrameDriver::new(&config.frames);
    driver
        .run(&mut scroller, shutdown_rx, |s| {
            // scrolls performed by the previous tick
            if frame > 0 {
                if let Err(e) = report(s, frame, drag_start, last_input, json) {
                    failure = Some(e);
                    return false;
                }
            }
            match inputs.next() {
                Some(input) => {
                    frame += 1;
                    last_input = input;
                    s.update_input(input);
                    true
                }
                None => false,
            }
        })
        .await;

    if let Some(e) = failure {
        return Err(e);
    }

    scroller.stop();
    if frame < scenario.total_frames() {
        warn!("Simulation stopped after {} of {} frames", frame, scenario.total_frames());
    }

    Ok(scroller.host().clone())
}

fn report<C: Clock>(
    scroller: &mut AutoScroller<SimulatedHost, FrameQueue, C>,
    frame: u64,
    drag_start: Instant,
    pointer: PointerInput,
    json: bool,
) -> Result<()> {
    let elapsed_ms = scroller
        .clock()
        .now()
        .saturating_duration_since(drag_start)
        .as_millis() as u64;
    let mutations = scroller.host_mut().take_mutations();

    if json {
        let report = FrameReport {
            frame,
            elapsed_ms,
            pointer,
            mutations,
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    let action = if mutations.is_empty() {
        "-".to_string()
    } else {
        mutations
            .iter()
            .map(|m| describe(scroller.host(), m))
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!(
        "frame {:>4} {:>6}ms  pointer ({:>6.1}, {:>6.1})  {}",
        frame, elapsed_ms, pointer.client_x, pointer.client_y, action
    );

    Ok(())
}

fn describe(host: &SimulatedHost, mutation: &ScrollMutation) -> String {
    let applied = mutation.applied();
    let target = match mutation {
        ScrollMutation::Window { .. } => "window".to_string(),
        ScrollMutation::Element { id, .. } => host
            .container(*id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("container #{}", id.0)),
    };
    format!("{} dx={:+} dy={:+}", target, applied.x, applied.y)
}

fn print_summary(host: &SimulatedHost) {
    let window = host.window_scroll();
    println!();
    println!("Final offsets:");
    println!("  window: ({}, {})", window.x, window.y);
    for container in host.containers() {
        println!(
            "  {}: ({}, {})",
            container.name, container.scroll_x, container.scroll_y
        );
    }
}
