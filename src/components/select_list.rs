//! Vertical list with an animated selection highlight.
//!
//! Moving the selection restarts the animator; while it runs, the
//! selected row grows its padding from 1 to 4 cells and fades from the
//! surface colors to the primary colors.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::anim::{AnimConfig, Animator, Clock, Easing, SystemClock, lerp_hex, lerp_int};
use crate::message::{Cmd, Msg};
use crate::style::Style;
use crate::theme::Theme;

use super::Widget;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectListProps {
    pub items: Vec<String>,
    pub selected: usize,
    /// Highlight transition time. `None` uses the theme's normal motion.
    pub duration: Option<Duration>,
    /// Tick rate; 0 means the default.
    pub fps: u32,
}

#[derive(Debug, Clone)]
pub struct SelectList {
    items: Vec<String>,
    selected: usize,
    theme: Arc<Theme>,
    anim: Animator,
}

impl SelectList {
    pub fn new(props: SelectListProps, theme: Arc<Theme>) -> Self {
        Self::with_clock(props, theme, Arc::new(SystemClock))
    }

    pub fn with_clock(props: SelectListProps, theme: Arc<Theme>, clock: Arc<dyn Clock>) -> Self {
        let duration = props.duration.unwrap_or(theme.tokens.motion.normal);
        let config = AnimConfig::new(duration, props.fps, Easing::OutCubic);
        let anim = Animator::with_clock(config, clock);
        let selected = props.selected.min(props.items.len().saturating_sub(1));
        SelectList {
            items: props.items,
            selected,
            theme,
            anim,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    pub fn animator(&self) -> &Animator {
        &self.anim
    }

    /// Style for row `index` at the current animation value.
    pub fn row_style(&self, index: usize) -> Style {
        if index != self.selected {
            return self.theme.styles.item;
        }
        let t = self.anim.value();
        let c = &self.theme.tokens.colors;
        let pad = u16::try_from(lerp_int(1, 4, t)).unwrap_or(1);
        Style::new()
            .pad(0, pad)
            .bg_hex(&lerp_hex(&c.surface, &c.primary, t))
            .fg_hex(&lerp_hex(&c.text, &c.primary_fg, t))
            .bold(true)
    }

    fn move_to(&mut self, index: usize) -> Option<Cmd> {
        debug!(from = self.selected, to = index, "selection moved");
        self.selected = index;
        self.anim.restart();
        Some(self.anim.tick())
    }
}

impl Widget for SelectList {
    fn init(&self) -> Option<Cmd> {
        Some(self.anim.tick())
    }

    fn update(mut self, msg: &Msg) -> (Self, Option<Cmd>) {
        let cmd = match msg {
            Msg::Key(key) if key.is_any(&["up", "k"]) => {
                if self.selected > 0 {
                    self.move_to(self.selected - 1)
                } else {
                    None
                }
            }
            Msg::Key(key) if key.is_any(&["down", "j"]) => {
                if self.selected + 1 < self.items.len() {
                    self.move_to(self.selected + 1)
                } else {
                    None
                }
            }
            Msg::Key(_) => None,
            Msg::Tick(_) => {
                self.anim.advance();
                Some(self.anim.tick())
            }
        };
        (self, cmd)
    }

    fn view(&self) -> String {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| self.row_style(i).render(item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::ManualClock;
    use crate::color::hex_color;
    use crate::style::{Edges, strip_ansi};
    use std::time::Instant;

    fn list(items: &[&str], clock: &ManualClock) -> SelectList {
        SelectList::with_clock(
            SelectListProps {
                items: items.iter().map(|s| s.to_string()).collect(),
                selected: 0,
                duration: Some(Duration::from_millis(100)),
                fps: 0,
            },
            Theme::shared_default(),
            Arc::new(clock.clone()),
        )
    }

    fn send(w: SelectList, keys: &[&str]) -> SelectList {
        keys.iter().fold(w, |w, k| w.update(&Msg::key(k)).0)
    }

    #[test]
    fn keystrokes_clamp_and_count_restarts() {
        let clock = ManualClock::new();
        let w = send(list(&["A", "B", "C"], &clock), &["down", "down", "down", "up"]);
        assert_eq!(w.selected(), 1);
        assert_eq!(w.animator().generation(), 3);
    }

    #[test]
    fn vim_keys_move_too() {
        let clock = ManualClock::new();
        let w = send(list(&["A", "B", "C"], &clock), &["j", "j", "k"]);
        assert_eq!(w.selected_item(), Some("B"));
    }

    #[test]
    fn selection_stays_in_bounds() {
        let clock = ManualClock::new();
        let keys = ["up", "down", "down", "down", "down", "up", "up", "up", "up", "down"];
        let mut w = list(&["A", "B", "C"], &clock);
        for k in keys {
            w = w.update(&Msg::key(k)).0;
            assert!(w.selected() < w.items().len());
        }
    }

    #[test]
    fn clamped_move_returns_no_command() {
        let clock = ManualClock::new();
        let (w, cmd) = list(&["A", "B"], &clock).update(&Msg::key("up"));
        assert_eq!(cmd, None);
        assert_eq!(w.animator().generation(), 0);
    }

    #[test]
    fn move_requests_a_tick() {
        let clock = ManualClock::new();
        let (_, cmd) = list(&["A", "B"], &clock).update(&Msg::key("down"));
        assert!(matches!(cmd, Some(Cmd::Tick(_))));
    }

    #[test]
    fn empty_list_ignores_keys_and_renders_nothing() {
        let clock = ManualClock::new();
        let w = send(list(&[], &clock), &["down", "up", "j"]);
        assert_eq!(w.selected(), 0);
        assert_eq!(w.animator().generation(), 0);
        assert_eq!(w.view(), "");
    }

    #[test]
    fn out_of_range_initial_selection_is_clamped() {
        let w = SelectList::new(
            SelectListProps {
                items: vec!["A".into(), "B".into()],
                selected: 9,
                duration: None,
                fps: 60,
            },
            Theme::shared_default(),
        );
        assert_eq!(w.selected(), 1);
        assert_eq!(w.animator().duration(), Duration::from_millis(180));
        assert_eq!(w.animator().fps(), 60);
    }

    #[test]
    fn ticks_drive_highlight_to_primary() {
        let clock = ManualClock::new();
        let theme = Theme::default();
        let (mut w, _) = list(&["A", "B"], &clock).update(&Msg::key("down"));

        let start = w.row_style(1);
        assert_eq!(start.get_padding(), Edges::symmetric(0, 1));
        assert_eq!(start.get_bg(), Some(hex_color(&theme.tokens.colors.surface)));

        for _ in 0..20 {
            clock.advance(Duration::from_millis(10));
            let (next, cmd) = w.update(&Msg::Tick(Instant::now()));
            w = next;
            assert!(matches!(cmd, Some(Cmd::Tick(_))));
        }
        assert!(!w.animator().running());

        let end = w.row_style(1);
        assert_eq!(end.get_padding(), Edges::symmetric(0, 4));
        assert_eq!(end.get_bg(), Some(hex_color(&theme.tokens.colors.primary)));
        assert_eq!(end.get_fg(), Some(hex_color(&theme.tokens.colors.primary_fg)));
        assert!(end.is_bold());
    }

    #[test]
    fn every_tick_requests_the_next_one() {
        let clock = ManualClock::new();
        let (w, cmd) = list(&["A", "B"], &clock).update(&Msg::Tick(Instant::now()));
        assert!(!w.animator().running());
        assert!(matches!(cmd, Some(Cmd::Tick(_))));

        let mut w = send(w, &["down"]);
        for _ in 0..12 {
            clock.advance(Duration::from_millis(10));
            let (next, cmd) = w.update(&Msg::Tick(Instant::now()));
            w = next;
            assert!(matches!(cmd, Some(Cmd::Tick(_))));
        }
        assert!(!w.animator().running());
    }

    #[test]
    fn unselected_rows_use_item_style() {
        let clock = ManualClock::new();
        let w = list(&["A", "B"], &clock);
        assert_eq!(w.row_style(1), Theme::default().styles.item);
    }

    #[test]
    fn view_is_deterministic_and_line_per_item() {
        let clock = ManualClock::new();
        let a = send(list(&["A", "B", "C"], &clock), &["down"]);
        let b = send(list(&["A", "B", "C"], &clock), &["down"]);
        assert_eq!(a.view(), b.view());
        assert_eq!(strip_ansi(&a.view()).lines().count(), 3);
    }
}
