//! Motion model behind the services carousel and the stats counters.
//!
//! The carousel places cards on a circle seen edge-on: dragging spins the
//! circle, a released spin decays with friction, and once slow enough it eases
//! onto the nearest whole card. Everything here is frame-driven and free of
//! timers, so a renderer calls [`CurvedSlider::step`] once per frame and reads
//! [`CurvedSlider::layout`].

pub mod config;
pub mod physics;
pub mod layout;
pub mod counter;

pub use config::SliderConfig;
pub use counter::CounterAnimation;
pub use layout::CardTransform;
pub use physics::CurvedSlider;
