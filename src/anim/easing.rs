//! Easing curves: total maps from linear progress `[0,1]` to eased progress.
//!
//! Every curve clamps its input first, so `ease(t <= 0) == 0` and
//! `ease(t >= 1) == 1` hold for all of them. `OutBack` overshoots above 1
//! inside the interval; the others are weakly monotonic.

use serde::{Deserialize, Serialize};

const BACK_C1: f64 = 1.70158;
const BACK_C3: f64 = BACK_C1 + 1.0;

/// Named easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Fast start, slow finish.
    #[default]
    OutCubic,
    /// Slow start and finish.
    InOutQuad,
    /// Gentler fast start.
    OutQuad,
    /// Overshoots the target slightly before settling.
    OutBack,
}

impl Easing {
    pub const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::OutCubic,
        Easing::InOutQuad,
        Easing::OutQuad,
        Easing::OutBack,
    ];

    /// Apply the curve to `t`, clamped to `[0,1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::OutBack => {
                let u = t - 1.0;
                1.0 + BACK_C3 * u * u * u + BACK_C1 * u * u
            }
        }
    }

    /// Whether the curve never decreases over `[0,1]`.
    pub fn is_monotonic(self) -> bool {
        !matches!(self, Easing::OutBack)
    }
}
