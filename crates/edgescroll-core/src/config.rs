use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::behavior::ScrollBehavior;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub autoscroll: AutoScrollConfig,
    #[serde(default)]
    pub frames: FrameConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to the time-dampening ramp
///
/// All curves are ease-in: slow at the start of the ramp, full value at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// f(t) = t
    Linear,
    /// f(t) = t²
    #[default]
    Quadratic,
    /// f(t) = t³
    Cubic,
    /// f(t) = t⁵
    Quintic,
}

/// Tuning of the edge auto-scroller
///
/// The defaults are empirically tuned; pixel-exact behavior depends on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoScrollConfig {
    /// Fraction of a region's size, measured from an edge, where scrolling begins
    #[serde(default = "default_start_scrolling_from")]
    pub start_scrolling_from: f64,
    /// Fraction of a region's size, measured from an edge, where scrolling is fastest
    #[serde(default = "default_max_scroll_at_percentage")]
    pub max_scroll_at_percentage: f64,
    /// Maximum scroll per frame in pixels
    #[serde(default = "default_max_pixel_scroll")]
    pub max_pixel_scroll: f64,
    /// Smallest non-zero scroll per frame in pixels
    #[serde(default = "default_min_scroll")]
    pub min_scroll: f64,
    /// Drag time (ms) before which scrolling stays at `min_scroll`
    #[serde(default = "default_accelerate_at_ms")]
    pub accelerate_at_ms: u64,
    /// Drag time (ms) after which dampening no longer applies
    #[serde(default = "default_stop_dampening_at_ms")]
    pub stop_dampening_at_ms: u64,
    /// Curve of the time-dampening ramp
    #[serde(default)]
    pub ease: EasingType,
    /// Behavior used when `start` does not name one
    #[serde(default)]
    pub default_behavior: ScrollBehavior,
    /// Turn every frame into a no-op while keeping the lifecycle running
    #[serde(default)]
    pub disabled: bool,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            start_scrolling_from: default_start_scrolling_from(),
            max_scroll_at_percentage: default_max_scroll_at_percentage(),
            max_pixel_scroll: default_max_pixel_scroll(),
            min_scroll: default_min_scroll(),
            accelerate_at_ms: default_accelerate_at_ms(),
            stop_dampening_at_ms: default_stop_dampening_at_ms(),
            ease: EasingType::default(),
            default_behavior: ScrollBehavior::default(),
            disabled: false,
        }
    }
}

impl AutoScrollConfig {
    #[inline]
    pub fn accelerate_at(&self) -> Duration {
        Duration::from_millis(self.accelerate_at_ms)
    }

    #[inline]
    pub fn stop_dampening_at(&self) -> Duration {
        Duration::from_millis(self.stop_dampening_at_ms)
    }

    /// Reject combinations that would make the velocity curves meaningless
    pub fn validate(&self) -> crate::Result<()> {
        let fractions = [
            ("start_scrolling_from", self.start_scrolling_from),
            ("max_scroll_at_percentage", self.max_scroll_at_percentage),
        ];
        for (name, value) in fractions {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(crate::Error::Config(format!(
                    "{} must be within (0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.max_scroll_at_percentage >= self.start_scrolling_from {
            return Err(crate::Error::Config(format!(
                "max_scroll_at_percentage ({}) must be smaller than start_scrolling_from ({})",
                self.max_scroll_at_percentage, self.start_scrolling_from
            )));
        }

        let speeds = [
            ("min_scroll", self.min_scroll),
            ("max_pixel_scroll", self.max_pixel_scroll),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value.fract() != 0.0 {
                return Err(crate::Error::Config(format!(
                    "{} must be a whole number of pixels, got {}",
                    name, value
                )));
            }
        }

        if self.min_scroll < 1.0 {
            return Err(crate::Error::Config(format!(
                "min_scroll must be at least 1px, got {}",
                self.min_scroll
            )));
        }

        if self.max_pixel_scroll < self.min_scroll {
            return Err(crate::Error::Config(format!(
                "max_pixel_scroll ({}) must be at least min_scroll ({})",
                self.max_pixel_scroll, self.min_scroll
            )));
        }

        if self.accelerate_at_ms >= self.stop_dampening_at_ms {
            return Err(crate::Error::Config(format!(
                "accelerate_at_ms ({}) must be smaller than stop_dampening_at_ms ({})",
                self.accelerate_at_ms, self.stop_dampening_at_ms
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Frames per second of the frame driver (0 = ~60fps)
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { fps: default_fps() }
    }
}

impl FrameConfig {
    /// Fastest rate with a whole-millisecond tick
    pub const MAX_FPS: u32 = 1000;

    /// Time between frames, never shorter than 1ms
    #[inline]
    pub fn tick_duration(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis((1000 / self.fps as u64).max(1))
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.fps > Self::MAX_FPS {
            return Err(crate::Error::Config(format!(
                "fps must be at most {}, got {}",
                Self::MAX_FPS,
                self.fps
            )));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_start_scrolling_from() -> f64 {
    0.25
}

fn default_max_scroll_at_percentage() -> f64 {
    0.05
}

fn default_max_pixel_scroll() -> f64 {
    28.0
}

fn default_min_scroll() -> f64 {
    1.0
}

fn default_accelerate_at_ms() -> u64 {
    360
}

fn default_stop_dampening_at_ms() -> u64 {
    1200
}

fn default_fps() -> u32 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.autoscroll.validate()?;
        config.frames.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/edgescroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("edgescroll")
            .join("config.toml")
    }
}
