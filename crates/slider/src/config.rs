use serde::{Deserialize, Serialize};

/// Viewports at or below this width use the mobile preset.
pub const MOBILE_MAX_WIDTH: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Circle radius in pixels.
    pub radius: f64,
    /// Scroll units per pixel of pointer movement; negative so dragging left advances.
    pub drag_sensitivity: f64,
    /// Velocity multiplier applied every frame after release.
    pub friction: f64,
    /// Fraction of the remaining distance to the nearest card covered per frame.
    pub snap_strength: f64,
    /// Angular distance between neighbouring cards, in radians.
    pub spacing: f64,
}

impl SliderConfig {
    pub const FRICTION: f64 = 0.94;
    pub const SNAP_STRENGTH: f64 = 0.08;

    pub fn desktop() -> Self {
        Self {
            radius: 700.0,
            drag_sensitivity: -0.003,
            friction: Self::FRICTION,
            snap_strength: Self::SNAP_STRENGTH,
            spacing: 0.28,
        }
    }

    pub fn mobile() -> Self {
        Self {
            radius: 350.0,
            drag_sensitivity: -0.006,
            friction: Self::FRICTION,
            snap_strength: Self::SNAP_STRENGTH,
            spacing: 0.35,
        }
    }

    pub fn for_viewport(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH { Self::mobile() } else { Self::desktop() }
    }
}

impl Default for SliderConfig {
    fn default() -> Self { Self::desktop() }
}
