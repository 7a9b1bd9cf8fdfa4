//! Eased progress over wall-clock time.
//!
//! An [`Animator`] never schedules anything itself. The owner calls
//! [`Animator::advance`] whenever a tick message arrives and asks for the
//! next tick with [`Animator::tick`]. Progress grows by the real time
//! elapsed between steps, so late or dropped ticks do not stretch the
//! animation: it still completes in about `duration`.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::trace;

use super::clock::{Clock, SystemClock};
use super::easing::Easing;
use crate::message::Cmd;

/// Fallback duration when a config asks for zero.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Fallback frame rate when a config asks for zero.
pub const DEFAULT_FPS: u32 = 30;

/// Animator settings. Zero fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimConfig {
    /// Total time for progress to go from 0 to 1.
    pub duration: Duration,
    /// Frames per second; sets the tick interval.
    pub fps: u32,
    /// Curve applied by [`Animator::value`]. `None` means out-cubic.
    pub easing: Option<Easing>,
}

impl AnimConfig {
    pub fn new(duration: Duration, fps: u32, easing: Easing) -> Self {
        AnimConfig {
            duration,
            fps,
            easing: Some(easing),
        }
    }
}

/// Stateful progress tracker over `[0,1]`.
#[derive(Clone)]
pub struct Animator {
    duration: Duration,
    fps: u32,
    easing: Easing,
    progress: f64,
    started: bool,
    last_step: Option<Instant>,
    generation: u64,
    clock: Arc<dyn Clock>,
}

impl Animator {
    /// Create an idle animator (progress 0, not started) on the system clock.
    pub fn new(config: AnimConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an idle animator reading time from `clock`.
    pub fn with_clock(config: AnimConfig, clock: Arc<dyn Clock>) -> Self {
        let duration = if config.duration.is_zero() {
            DEFAULT_DURATION
        } else {
            config.duration
        };
        let fps = if config.fps == 0 { DEFAULT_FPS } else { config.fps };

        Animator {
            duration,
            fps,
            easing: config.easing.unwrap_or_default(),
            progress: 0.0,
            started: false,
            last_step: None,
            generation: 0,
            clock,
        }
    }

    /// Reset progress to 0 and start running from now.
    pub fn restart(&mut self) {
        self.progress = 0.0;
        self.started = true;
        self.last_step = Some(self.clock.now());
        self.generation += 1;
        trace!(
            generation = self.generation,
            duration_ms = self.duration.as_millis() as u64,
            "animator restarted"
        );
    }

    /// Snap to the end and stop.
    pub fn jump_to_end(&mut self) {
        self.progress = 1.0;
        self.started = false;
    }

    pub fn running(&self) -> bool {
        self.started && self.progress < 1.0
    }

    /// Eased progress.
    pub fn value(&self) -> f64 {
        self.easing.apply(self.progress)
    }

    /// Raw linear progress.
    pub fn linear_value(&self) -> f64 {
        self.progress
    }

    /// Step progress by the time elapsed since the previous step.
    ///
    /// No-op unless running. The first step after construction, before
    /// any timestamp exists, counts as one frame interval.
    pub fn advance(&mut self) {
        if !self.started || self.progress >= 1.0 {
            return;
        }

        let now = self.clock.now();
        let dt = match self.last_step {
            Some(last) => now.saturating_duration_since(last),
            None => self.frame_interval(),
        };
        self.last_step = Some(now);

        self.progress += dt.as_secs_f64() / self.duration.as_secs_f64();
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.started = false;
            trace!(generation = self.generation, "animator finished");
        }
    }

    /// Command asking the runtime for a tick message one frame from now.
    pub fn tick(&self) -> Cmd {
        Cmd::Tick(self.frame_interval())
    }

    /// `1s / fps`.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Number of restarts so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Debug for Animator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("duration", &self.duration)
            .field("fps", &self.fps)
            .field("easing", &self.easing)
            .field("progress", &self.progress)
            .field("started", &self.started)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
