//! A text row whose background fades toward a highlight color.
//!
//! There is no alpha channel in a terminal, so opacity is simulated by
//! interpolating between the known base background and the highlight.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::anim::{AnimConfig, Animator, Clock, Easing, SystemClock, lerp_hex};
use crate::message::{Cmd, Msg};
use crate::style::Style;
use crate::theme::Theme;

use super::Widget;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightRowProps {
    pub text: String,
    pub base_bg: String,
    pub hi_color: String,
    /// Target opacity in `[0,1]`.
    pub opacity: f64,
    /// `None` uses the theme's normal motion.
    pub duration: Option<Duration>,
    /// Tick rate; 0 means the default.
    pub fps: u32,
}

#[derive(Debug, Clone)]
pub struct HighlightRow {
    text: String,
    base_bg: String,
    hi_color: String,
    opacity: f64,
    theme: Arc<Theme>,
    anim: Animator,
}

impl HighlightRow {
    pub fn new(props: HighlightRowProps, theme: Arc<Theme>) -> Self {
        Self::with_clock(props, theme, Arc::new(SystemClock))
    }

    pub fn with_clock(props: HighlightRowProps, theme: Arc<Theme>, clock: Arc<dyn Clock>) -> Self {
        let duration = props.duration.unwrap_or(theme.tokens.motion.normal);
        let config = AnimConfig::new(duration, props.fps, Easing::OutCubic);
        HighlightRow {
            text: props.text,
            base_bg: props.base_bg,
            hi_color: props.hi_color,
            opacity: props.opacity.clamp(0.0, 1.0),
            theme,
            anim: Animator::with_clock(config, clock),
        }
    }

    /// Retarget the opacity and replay the fade.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
        debug!(opacity = self.opacity, "highlight opacity target set");
        self.anim.restart();
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn animator(&self) -> &Animator {
        &self.anim
    }

    /// Background at the current animation value, as lowercase hex.
    pub fn background(&self) -> String {
        let alpha = self.anim.value() * self.opacity;
        lerp_hex(&self.base_bg, &self.hi_color, alpha)
    }

    pub fn current_style(&self) -> Style {
        Style::new()
            .fg_hex(&self.theme.tokens.colors.text)
            .bg_hex(&self.background())
            .pad(0, 1)
    }
}

impl Widget for HighlightRow {
    fn init(&self) -> Option<Cmd> {
        Some(self.anim.tick())
    }

    fn update(mut self, msg: &Msg) -> (Self, Option<Cmd>) {
        let cmd = match msg {
            Msg::Tick(_) => {
                self.anim.advance();
                Some(self.anim.tick())
            }
            Msg::Key(_) => None,
        };
        (self, cmd)
    }

    fn view(&self) -> String {
        self.current_style().render(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::ManualClock;
    use crate::color::normalize_hex;
    use crate::style::strip_ansi;
    use std::time::Instant;

    const BASE: &str = "#111317";
    const HI: &str = "#F59E0B";

    fn row(opacity: f64, clock: &ManualClock) -> HighlightRow {
        HighlightRow::with_clock(
            HighlightRowProps {
                text: "hover me".into(),
                base_bg: BASE.into(),
                hi_color: HI.into(),
                opacity,
                duration: Some(Duration::from_millis(100)),
                fps: 0,
            },
            Theme::shared_default(),
            Arc::new(clock.clone()),
        )
    }

    fn run_to_end(mut w: HighlightRow, clock: &ManualClock) -> HighlightRow {
        while w.animator().running() {
            clock.advance(Duration::from_millis(25));
            w = w.update(&Msg::Tick(Instant::now())).0;
        }
        w
    }

    #[test]
    fn zero_opacity_keeps_base_background() {
        let clock = ManualClock::new();
        let mut w = row(0.0, &clock);
        assert_eq!(w.background(), normalize_hex(BASE));

        w.set_opacity(0.0);
        for _ in 0..6 {
            clock.advance(Duration::from_millis(20));
            w = w.update(&Msg::Tick(Instant::now())).0;
            assert_eq!(w.background(), normalize_hex(BASE));
        }
    }

    #[test]
    fn full_opacity_settles_on_highlight() {
        let clock = ManualClock::new();
        let mut w = row(0.0, &clock);
        w.set_opacity(1.0);
        let w = run_to_end(w, &clock);
        assert_eq!(w.background(), normalize_hex(HI));
    }

    #[test]
    fn partial_opacity_stops_between() {
        let clock = ManualClock::new();
        let mut w = row(0.0, &clock);
        w.set_opacity(0.6);
        let w = run_to_end(w, &clock);
        assert_eq!(w.background(), lerp_hex(BASE, HI, 0.6));
    }

    #[test]
    fn set_opacity_restarts_and_clamps() {
        let clock = ManualClock::new();
        let mut w = row(0.0, &clock);
        w.set_opacity(1.7);
        assert_eq!(w.opacity(), 1.0);
        assert!(w.animator().running());
        assert_eq!(w.animator().generation(), 1);
    }

    #[test]
    fn every_tick_requests_the_next_one() {
        let clock = ManualClock::new();
        let (w, cmd) = row(0.5, &clock).update(&Msg::Tick(Instant::now()));
        assert!(!w.animator().running());
        assert!(matches!(cmd, Some(Cmd::Tick(_))));

        let mut w = w;
        w.set_opacity(0.5);
        clock.advance(Duration::from_millis(10));
        let (w, cmd) = w.update(&Msg::Tick(Instant::now()));
        assert!(matches!(cmd, Some(Cmd::Tick(_))));

        let w = run_to_end(w, &clock);
        let (_, cmd) = w.update(&Msg::Tick(Instant::now()));
        assert!(matches!(cmd, Some(Cmd::Tick(_))));
    }

    #[test]
    fn view_pads_text() {
        let clock = ManualClock::new();
        assert_eq!(strip_ansi(&row(0.0, &clock).view()), " hover me ");
    }
}
