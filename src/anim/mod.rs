//! Time-based animation: easing curves, interpolation, and the animator.

pub mod animator;
pub mod clock;
pub mod easing;
pub mod lerp;

pub use animator::{AnimConfig, Animator, DEFAULT_DURATION, DEFAULT_FPS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::Easing;
pub use lerp::{lerp_float, lerp_hex, lerp_int};
