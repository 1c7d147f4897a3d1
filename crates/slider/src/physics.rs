use tracing::trace;

use crate::config::SliderConfig;
use crate::layout::{self, CardTransform};

/// Below this speed a released slider starts easing onto a card.
pub const SNAP_VELOCITY: f64 = 0.005;
/// Distance to the target at which the ease is finished off exactly.
pub const SNAP_EPSILON: f64 = 0.001;

/// Scroll state of the curved services slider.
///
/// `scroll` is measured in cards: `2.0` means the third card is centred.
#[derive(Debug, Clone)]
pub struct CurvedSlider {
    config: SliderConfig,
    scroll: f64,
    velocity: f64,
    dragging: bool,
    animating: bool,
    last_x: f64,
}

impl CurvedSlider {
    pub fn new(config: SliderConfig) -> Self {
        Self { config, scroll: 0.0, velocity: 0.0, dragging: false, animating: true, last_x: 0.0 }
    }

    pub fn config(&self) -> &SliderConfig { &self.config }
    pub fn scroll(&self) -> f64 { self.scroll }
    pub fn velocity(&self) -> f64 { self.velocity }
    pub fn is_dragging(&self) -> bool { self.dragging }
    pub fn is_animating(&self) -> bool { self.animating }

    /// Pointer or touch pressed at `x`.
    pub fn start_drag(&mut self, x: f64) {
        self.dragging = true;
        self.velocity = 0.0;
        self.last_x = x;
        self.animating = true;
    }

    /// Pointer moved to `x`. Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, x: f64) {
        if !self.dragging {
            return;
        }
        self.velocity = (x - self.last_x) * self.config.drag_sensitivity;
        self.scroll += self.velocity;
        self.last_x = x;
    }

    /// Pointer released; the last drag velocity carries on as momentum.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Advance one frame. Returns whether another frame should be scheduled.
    pub fn step(&mut self) -> bool {
        if !self.animating {
            return self.dragging;
        }
        if !self.dragging {
            self.scroll += self.velocity;
            self.velocity *= self.config.friction;
            if self.velocity.abs() < SNAP_VELOCITY {
                let target = self.scroll.round();
                self.scroll += (target - self.scroll) * self.config.snap_strength;
                if (target - self.scroll).abs() < SNAP_EPSILON {
                    self.scroll = target;
                    self.velocity = 0.0;
                    self.animating = false;
                    trace!(card = target, "slider settled");
                }
            }
        }
        self.animating || self.dragging
    }

    /// Run frames until the slider settles, up to `max_frames`.
    /// Returns the number of frames taken, or `None` if still moving.
    pub fn settle(&mut self, max_frames: usize) -> Option<usize> {
        for frame in 1..=max_frames {
            if !self.step() {
                return Some(frame);
            }
        }
        None
    }

    /// Index of the card nearest the centre, for `card_count` cards.
    pub fn centred_card(&self, card_count: usize) -> Option<usize> {
        if card_count == 0 {
            return None;
        }
        let n = card_count as f64;
        Some(self.scroll.round().rem_euclid(n) as usize)
    }

    pub fn layout(&self, card_count: usize) -> Vec<CardTransform> {
        layout::project(&self.config, self.scroll, card_count)
    }
}

impl Default for CurvedSlider {
    fn default() -> Self { Self::new(SliderConfig::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_moves_against_pointer() {
        let mut s = CurvedSlider::default();
        s.start_drag(400.0);
        s.drag_to(300.0);
        // 向左拖 100px，灵敏度 -0.003 → 前进 0.3 张卡片
        assert!((s.scroll() - 0.3).abs() < 1e-12);
        assert!((s.velocity() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut s = CurvedSlider::default();
        s.drag_to(1000.0);
        assert_eq!(s.scroll(), 0.0);
    }

    #[test]
    fn release_coasts_then_snaps_to_whole_card() {
        let mut s = CurvedSlider::default();
        s.start_drag(0.0);
        s.drag_to(-100.0);
        s.end_drag();
        let frames = s.settle(10_000).expect("settles");
        assert!(frames > 1);
        assert_eq!(s.scroll().fract(), 0.0);
        assert_eq!(s.velocity(), 0.0);
        assert!(!s.is_animating());
        // momentum carries it past where the drag stopped
        assert!(s.scroll() > 0.3);
    }

    #[test]
    fn frames_stop_once_settled_and_restart_on_drag() {
        let mut s = CurvedSlider::default();
        assert_eq!(s.settle(10), Some(1));
        assert!(!s.step());
        s.start_drag(10.0);
        assert!(s.step());
        assert!(s.is_dragging());
    }

    #[test]
    fn dragging_frame_does_not_apply_friction() {
        let mut s = CurvedSlider::default();
        s.start_drag(0.0);
        s.drag_to(-50.0);
        let (pos, vel) = (s.scroll(), s.velocity());
        assert!(s.step());
        assert_eq!(s.scroll(), pos);
        assert_eq!(s.velocity(), vel);
    }

    #[test]
    fn partial_scroll_eases_back_to_nearest() {
        let mut s = CurvedSlider::default();
        s.start_drag(0.0);
        s.drag_to(-100.0); // 0.3
        s.velocity = 0.0;
        s.end_drag();
        s.settle(10_000).expect("settles");
        assert_eq!(s.scroll(), 0.0);
    }

    #[test]
    fn centred_card_wraps_both_ways() {
        let mut s = CurvedSlider::default();
        s.scroll = -1.0;
        assert_eq!(s.centred_card(8), Some(7));
        s.scroll = 9.0;
        assert_eq!(s.centred_card(8), Some(1));
        assert_eq!(s.centred_card(0), None);
    }
}
