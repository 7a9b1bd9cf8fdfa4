//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It feeds messages to a
//! [`Widget`], interprets the returned [`Cmd`]s, and writes frames to
//! the terminal via crossterm.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events, and reports a
//!   read failure as its last event
//! - Tick timers: one short-lived thread per scheduled tick
//!
//! At most one tick is pending at any time; the loop absorbs further
//! tick requests until it has been delivered.

use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{ExecutableCommand, QueueableCommand};
use tracing::{debug, info, warn};

use crate::components::Widget;
use crate::error::{Error, Result};
use crate::message::{Cmd, Key, Msg};

use super::state::AppEvent;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Normalize a crossterm key event to a key name.
///
/// Returns None for releases, repeats and keys without a name.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let name = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Key::new(format!("ctrl+{}", c.to_ascii_lowercase())));
        }
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Enter => "enter",
        KeyCode::Tab => "tab",
        KeyCode::BackTab => "shift+tab",
        KeyCode::Esc => "esc",
        KeyCode::Backspace => "backspace",
        KeyCode::Char(' ') => "space",
        KeyCode::Char(c) => return Some(Key::new(c.to_string())),
        _ => return None,
    };
    Some(Key::from(name))
}

// ============================================================================
// COMMAND INTERPRETATION
// ============================================================================

/// Runtime bookkeeping for commands.
#[derive(Debug, Default)]
pub struct Runtime {
    tick_pending: bool,
    status: Option<String>,
    should_quit: bool,
}

impl Runtime {
    /// Record the effects of `cmd` and return the delay of a tick to
    /// schedule, if one is needed.
    pub fn apply(&mut self, cmd: Cmd) -> Option<Duration> {
        let mut schedule = None;
        for cmd in cmd.flatten() {
            match cmd {
                Cmd::Tick(delay) if !self.tick_pending => {
                    self.tick_pending = true;
                    schedule = Some(delay);
                }
                Cmd::Tick(_) => {}
                Cmd::Print(line) => self.status = Some(line),
                Cmd::Quit => self.should_quit = true,
                Cmd::Batch(_) => {}
            }
        }
        schedule
    }

    /// The pending tick arrived; the next request schedules a new one.
    pub fn tick_delivered(&mut self) {
        self.tick_pending = false;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?.execute(Hide)?;
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    io::stdout().execute(Show)?.execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Write a frame from the top-left corner, then the status line.
///
/// Each row clears only its own tail, and whatever is left below the
/// frame is cleared last, so the screen is never blanked between frames.
/// Raw mode does not translate `\n`, so rows end in `\r\n`.
fn draw(out: &mut impl Write, frame: &str, status: Option<&str>) -> io::Result<()> {
    out.queue(MoveTo(0, 0))?;
    for line in frame.split('\n') {
        out.queue(Print(line))?
            .queue(Clear(ClearType::UntilNewLine))?
            .queue(Print("\r\n"))?;
    }
    if let Some(status) = status {
        out.queue(Clear(ClearType::UntilNewLine))?
            .queue(Print("\r\n"))?
            .queue(Print(status))?;
    }
    out.queue(Clear(ClearType::FromCursorDown))?;
    out.flush()
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || forward_keys(event::read, &tx));
}

/// Forward key events from `read` until it fails or the receiver is gone.
///
/// A read failure is sent as [`AppEvent::InputClosed`] so the loop can
/// stop; the loop holds a sender of its own and would otherwise wait forever.
fn forward_keys(mut read: impl FnMut() -> io::Result<Event>, tx: &mpsc::Sender<AppEvent>) {
    loop {
        match read() {
            Ok(Event::Key(key)) => {
                if tx.send(AppEvent::Key(key)).is_err() {
                    break; // receiver dropped, TUI is shutting down
                }
            }
            Ok(_) => {} // ignore mouse, resize, etc.
            Err(e) => {
                let _ = tx.send(AppEvent::InputClosed(e));
                break;
            }
        }
    }
}

/// Deliver one tick after `delay`.
fn spawn_tick(delay: Duration, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = tx.send(AppEvent::Tick(Instant::now()));
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run `widget` full-screen until it returns [`Cmd::Quit`].
pub fn run<W: Widget>(widget: W) -> Result<()> {
    install_panic_hook();
    setup_terminal()?;
    info!("tui started");

    let result = event_loop(widget);

    let restored = restore_terminal();
    info!("tui stopped");
    first_error(result, restored)
}

/// The loop's own error wins over a failure to restore the terminal.
fn first_error(result: Result<()>, restored: io::Result<()>) -> Result<()> {
    result.and(restored.map_err(Error::from))
}

/// Turn a channel event into a widget message.
///
/// `Ok(None)` means the event carries nothing for the widget.
fn to_message(event: AppEvent, runtime: &mut Runtime) -> Result<Option<Msg>> {
    match event {
        AppEvent::Key(key) => Ok(map_key(key).map(|key| {
            debug!(key = %key, "key");
            Msg::Key(key)
        })),
        AppEvent::Tick(at) => {
            runtime.tick_delivered();
            Ok(Some(Msg::Tick(at)))
        }
        AppEvent::InputClosed(e) => {
            warn!(error = %e, "terminal input closed");
            Err(Error::Io(e))
        }
    }
}

fn event_loop<W: Widget>(mut widget: W) -> Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());

    let mut runtime = Runtime::default();
    let mut stdout = io::stdout();

    if let Some(delay) = widget.init().and_then(|cmd| runtime.apply(cmd)) {
        spawn_tick(delay, tx.clone());
    }

    loop {
        draw(&mut stdout, &widget.view(), runtime.status())?;

        if runtime.should_quit() {
            break;
        }

        // Block on next event from any producer
        let Ok(event) = rx.recv() else {
            break;
        };

        let Some(msg) = to_message(event, &mut runtime)? else {
            continue;
        };

        let (next, cmd) = widget.update(&msg);
        widget = next;
        if let Some(delay) = cmd.and_then(|cmd| runtime.apply(cmd)) {
            spawn_tick(delay, tx.clone());
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
