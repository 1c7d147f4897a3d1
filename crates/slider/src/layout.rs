use std::f64::consts::PI;

use serde::Serialize;

use crate::config::SliderConfig;

/// Distance from the centre (radians) under which a card counts as active.
pub const ACTIVE_ANGLE: f64 = 0.4;
const MIN_SCALE: f64 = 0.3;
const BASE_SCALE: f64 = 0.666;

/// Where one card sits for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardTransform {
    /// Horizontal offset in pixels; positive is right of centre.
    pub x: f64,
    /// Depth in pixels; the front of the circle is `+radius`.
    pub z: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i64,
    pub active: bool,
}

/// Project `card_count` cards onto the circle for scroll position `scroll`.
///
/// Card offsets wrap around the circle, so the card just before the centred one
/// appears on the left rather than at the far end of the ring.
pub fn project(config: &SliderConfig, scroll: f64, card_count: usize) -> Vec<CardTransform> {
    let total = card_count as f64 * config.spacing;
    if card_count == 0 || total <= 0.0 {
        return Vec::new();
    }
    (0..card_count)
        .map(|i| {
            let diff = (i as f64 * config.spacing - scroll * config.spacing).rem_euclid(total);
            let wrapped = if diff > total / 2.0 { diff - total } else { diff };
            let angle = PI - wrapped;
            let x = angle.sin() * config.radius;
            let z = -angle.cos() * config.radius;
            let distance = (angle - PI).abs();
            let scale = (1.0 - (distance / (PI * 0.4)) * 0.8).max(MIN_SCALE) * BASE_SCALE;
            let opacity = (1.0 - distance / (PI * 0.35)).max(0.0);
            CardTransform {
                x,
                z,
                scale,
                opacity,
                z_index: (z + 10_000.0).round() as i64,
                active: distance < ACTIVE_ANGLE,
            }
        })
        .collect()
}
