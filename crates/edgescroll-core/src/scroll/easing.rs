//! Ease-in curves mapping [0, 1] to [0, 1]

use crate::config::EasingType;

impl EasingType {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value, clamped to [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::Quadratic => t * t,
            EasingType::Cubic => t * t * t,
            EasingType::Quintic => t * t * t * t * t,
        }
    }
}
