use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::target::ScrollTarget;

/// Priority order in which scroll targets are tried each frame
///
/// At most one target scrolls per frame: the first one that resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollBehavior {
    /// Try the window; if it cannot scroll, try the container
    #[default]
    WindowThenContainer,
    /// Try the container; if it cannot scroll, try the window
    ContainerThenWindow,
    WindowOnly,
    ContainerOnly,
}

impl ScrollBehavior {
    pub const ALL: [ScrollBehavior; 4] = [
        ScrollBehavior::WindowThenContainer,
        ScrollBehavior::ContainerThenWindow,
        ScrollBehavior::WindowOnly,
        ScrollBehavior::ContainerOnly,
    ];

    /// Targets to consult, in order
    pub fn targets(&self) -> &'static [ScrollTarget] {
        match self {
            ScrollBehavior::WindowThenContainer => &[ScrollTarget::Window, ScrollTarget::Container],
            ScrollBehavior::ContainerThenWindow => &[ScrollTarget::Container, ScrollTarget::Window],
            ScrollBehavior::WindowOnly => &[ScrollTarget::Window],
            ScrollBehavior::ContainerOnly => &[ScrollTarget::Container],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::WindowThenContainer => "window-then-container",
            ScrollBehavior::ContainerThenWindow => "container-then-window",
            ScrollBehavior::WindowOnly => "window-only",
            ScrollBehavior::ContainerOnly => "container-only",
        }
    }
}

impl fmt::Display for ScrollBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScrollBehavior {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScrollBehavior::ALL
            .into_iter()
            .find(|behavior| behavior.as_str() == s)
            .ok_or_else(|| {
                crate::Error::Config(format!(
                    "unknown scroll behavior '{}', expected one of: window-then-container, container-then-window, window-only, container-only",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_order() {
        assert_eq!(
            ScrollBehavior::WindowThenContainer.targets(),
            &[ScrollTarget::Window, ScrollTarget::Container]
        );
        assert_eq!(
            ScrollBehavior::ContainerThenWindow.targets(),
            &[ScrollTarget::Container, ScrollTarget::Window]
        );
        assert_eq!(ScrollBehavior::WindowOnly.targets(), &[ScrollTarget::Window]);
        assert_eq!(ScrollBehavior::ContainerOnly.targets(), &[ScrollTarget::Container]);
    }

    #[test]
    fn test_parse_and_display() {
        for behavior in ScrollBehavior::ALL {
            assert_eq!(behavior.to_string().parse::<ScrollBehavior>().unwrap(), behavior);
        }
        assert!("window-first".parse::<ScrollBehavior>().is_err());
    }

    #[test]
    fn test_default_prefers_window() {
        assert_eq!(ScrollBehavior::default(), ScrollBehavior::WindowThenContainer);
    }
}
