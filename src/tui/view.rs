//! Pure rendering: models to frame strings.
//!
//! Frames are plain strings with embedded ANSI styling; the runtime
//! writes them line by line.

use crate::anim::lerp_hex;
use crate::components::Widget;
use crate::style::{BorderKind, Edges, Style};

use super::state::{ListDemo, Playground};

pub const PLAYGROUND_HELP: &str =
    "(↑/↓ select • Enter press • Tab focus glow • h highlight • q quit)";
pub const LIST_HELP: &str = "↑/↓ select • q to quit";

/// Border color at the current glow value, moving toward the focus state.
pub fn glow_color(p: &Playground) -> String {
    let border = &p.theme.tokens.border;
    let t = p.glow.value();
    if p.focused {
        lerp_hex(&border.normal, &border.focused, t)
    } else {
        lerp_hex(&border.focused, &border.normal, t)
    }
}

pub fn playground(p: &Playground) -> String {
    let content = [p.button.view(), p.list.view(), p.row.view()].join("\n\n");
    let framed = Style::new()
        .border(BorderKind::Rounded)
        .border_fg_hex(&glow_color(p))
        .padding(Edges::all(1))
        .render(&content);
    let help = Style::new().fg_hex(&p.theme.tokens.colors.muted).render(PLAYGROUND_HELP);
    format!("{}\n{}", p.panel.render(&framed), help)
}

pub fn list_demo(d: &ListDemo) -> String {
    let help = Style::new().fg_hex(&d.theme.tokens.colors.muted).render(LIST_HELP);
    format!("{}\n{}", d.list.view(), help)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::ManualClock;
    use crate::color::normalize_hex;
    use crate::message::Msg;
    use crate::style::strip_ansi;
    use crate::theme::Theme;
    use crate::tui::state::{FRUITS, SAVE_LABEL};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    fn playground(clock: &ManualClock) -> Playground {
        Playground::with_clock(Theme::shared_default(), 30, Arc::new(clock.clone()))
    }

    #[test]
    fn frame_shows_every_part() {
        let clock = ManualClock::new();
        let text = strip_ansi(&playground(&clock).view());
        assert!(text.starts_with(" strawberry-tui "));
        assert!(text.contains(SAVE_LABEL));
        for fruit in FRUITS {
            assert!(text.contains(fruit), "missing {fruit}");
        }
        assert!(text.contains("Toggle highlight"));
        assert!(text.ends_with(PLAYGROUND_HELP));
    }

    #[test]
    fn glow_settles_on_focus_state() {
        let clock = ManualClock::new();
        let p = playground(&clock);
        let border = p.theme.tokens.border.clone();
        assert_eq!(glow_color(&p), normalize_hex(&border.focused));

        let (mut p, _) = p.update(&Msg::key("tab"));
        assert_eq!(glow_color(&p), normalize_hex(&border.focused));
        for _ in 0..20 {
            clock.advance(Duration::from_millis(20));
            p = p.update(&Msg::Tick(Instant::now())).0;
        }
        assert_eq!(glow_color(&p), normalize_hex(&border.normal));
    }

    #[test]
    fn view_is_pure() {
        let clock = ManualClock::new();
        let p = playground(&clock);
        assert_eq!(p.view(), p.view());
    }

    #[test]
    fn list_demo_has_help_line() {
        let clock = ManualClock::new();
        let demo = ListDemo::with_clock(Theme::shared_default(), 30, Arc::new(clock.clone()));
        let text = strip_ansi(&demo.view());
        assert_eq!(text.lines().count(), FRUITS.len() + 1);
        assert!(text.ends_with(LIST_HELP));
    }
}
