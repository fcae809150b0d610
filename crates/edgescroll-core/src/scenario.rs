//! Scripted drags against a [`SimulatedHost`]
//!
//! A scenario is a TOML (or JSON) file describing the window, the nested containers
//! and a pointer path:
//!
//! ```toml
//! behavior = "container-then-window"
//!
//! [viewport]
//! width = 1280
//! height = 800
//! content_width = 1280
//! content_height = 4000
//!
//! [[containers]]
//! name = "backlog"
//! x = 40
//! y = 120
//! width = 300
//! height = 600
//! content_width = 300
//! content_height = 2400
//!
//! [[pointer]]
//! x = 190
//! y = 700
//! frames = 90
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::behavior::ScrollBehavior;
use crate::controller::PointerInput;
use crate::host::{SimContainer, SimViewport, SimulatedHost};

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Hold the pointer at `(x, y)` for `frames` frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerStep {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_frames() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub behavior: Option<ScrollBehavior>,
    pub viewport: SimViewport,
    #[serde(default)]
    pub containers: Vec<SimContainer>,
    pub pointer: Vec<PointerStep>,
}

impl Scenario {
    /// Load a `.json` or TOML scenario file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    pub fn from_json(content: &str) -> crate::Result<Self> {
        let scenario: Self = serde_json::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let scenario: Self =
            toml::from_str(content).map_err(|e| crate::Error::Scenario(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> crate::Result<()> {
        if self.pointer.is_empty() {
            return Err(crate::Error::Scenario(
                "pointer path needs at least one step".to_string(),
            ));
        }

        let v = &self.viewport;
        if !is_positive(v.width) || !is_positive(v.height) {
            return Err(crate::Error::Scenario(format!(
                "viewport must have a positive size, got {}x{}",
                v.width, v.height
            )));
        }
        if ![v.content_width, v.content_height, v.scroll_x, v.scroll_y]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(crate::Error::Scenario(
                "viewport content size and scroll must be finite".to_string(),
            ));
        }

        for c in &self.containers {
            if !is_positive(c.width) || !is_positive(c.height) {
                return Err(crate::Error::Scenario(format!(
                    "container '{}' must have a positive size",
                    c.name
                )));
            }
            let rest = [c.x, c.y, c.content_width, c.content_height, c.scroll_x, c.scroll_y];
            if !rest.iter().all(|value| value.is_finite()) {
                return Err(crate::Error::Scenario(format!(
                    "container '{}' has a non-finite position, content size or scroll",
                    c.name
                )));
            }
        }

        if let Some(step) = self
            .pointer
            .iter()
            .find(|step| !step.x.is_finite() || !step.y.is_finite())
        {
            return Err(crate::Error::Scenario(format!(
                "pointer step ({}, {}) is not a finite position",
                step.x, step.y
            )));
        }

        Ok(())
    }

    /// Where the drag starts
    pub fn start_input(&self) -> PointerInput {
        self.pointer
            .first()
            .map(|step| PointerInput::new(step.x, step.y))
            .unwrap_or_default()
    }

    pub fn total_frames(&self) -> u64 {
        self.pointer.iter().map(|step| step.frames as u64).sum()
    }

    /// Pointer position for every frame, in order
    pub fn frame_inputs(&self) -> impl Iterator<Item = PointerInput> + '_ {
        self.pointer.iter().flat_map(|step| {
            std::iter::repeat(PointerInput::new(step.x, step.y)).take(step.frames as usize)
        })
    }

    pub fn build_host(&self) -> SimulatedHost {
        SimulatedHost::new(self.viewport.clone(), self.containers.clone())
    }
}
