//! Player — the terminal render host.
//!
//! Drives a `Quiz` from a crossterm event loop: a fixed-period clock feeds
//! `tick`, keys and mouse clicks are turned into `Message`s, and every pass
//! draws the rendered scene onto the terminal.

pub mod canvas;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::{cursor, execute, queue, style, terminal};
use tracing::{debug, info};

use crate::quiz::{CHARACTER, Growth, MOVIE, QUOTE, Quiz, grow_line};
use crate::quiz::config::{KeyBindings, matches_binding};
use crate::types::{Message, Timestamp};
use canvas::{Emphasis, Placed};

/// Rows reserved above the canvas for the menu bar.
const CANVAS_OFFSET: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Player {
    quiz: Quiz,
    started: Instant,
    placed: Vec<Placed>,
}

impl Player {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            started: Instant::now(),
            placed: Vec::new(),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// Sets up the terminal, enters the event loop, and restores the terminal
    /// on exit (even on error).
    pub fn play(&mut self) -> Result<()> {
        let (term_w, term_h) = terminal::size()?;
        let (need_w, need_h) = required_size(&self.quiz);
        if term_w < need_w || term_h < need_h {
            bail!("Terminal too small: need {need_w}x{need_h}, have {term_w}x{term_h}");
        }

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;
        info!("player started");

        let result = self.run_loop(&mut stdout);

        // Always restore terminal state.
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        info!("player stopped");

        result
    }

    fn now(&self) -> Timestamp {
        self.started.elapsed().as_millis() as Timestamp
    }

    // -----------------------------------------------------------------------
    // Event loop
    // -----------------------------------------------------------------------

    fn run_loop(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        let period = Duration::from_millis(self.quiz.config().tick_ms.max(1));
        let mut next_tick = Instant::now() + period;
        self.draw(stdout)?;

        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if event::poll(timeout)? && self.handle_event(event::read()?) == Flow::Quit {
                break;
            }
            if Instant::now() >= next_tick {
                let now = self.now();
                self.quiz.tick(now);
                next_tick += period;
            }
            self.draw(stdout)?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let bindings = &self.quiz.config().key_bindings;
                if key.code == KeyCode::Esc || matches_binding(&bindings.quit, &key) {
                    return Flow::Quit;
                }
                if let Some(message) = key_message(bindings, &key) {
                    let now = self.now();
                    self.quiz.dispatch(message, now);
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let Some(row) = row.checked_sub(CANVAS_OFFSET) else {
                    return Flow::Continue;
                };
                if let Some(message) = canvas::hit_test(&self.placed, column, row) {
                    debug!(column, row, ?message, "click");
                    let now = self.now();
                    self.quiz.dispatch(message, now);
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    // -----------------------------------------------------------------------
    // Terminal output
    // -----------------------------------------------------------------------

    fn draw(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        let now = self.now();
        self.placed = canvas::place_all(&self.quiz.scene().render(now));

        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        self.render_menubar(stdout)?;

        let (term_w, term_h) = terminal::size()?;
        for placed in &self.placed {
            let y = placed.y.saturating_add(CANVAS_OFFSET);
            if y >= term_h || placed.x >= term_w {
                continue;
            }
            let room = usize::from(term_w - placed.x);
            let visible: String = placed.content.chars().take(room).collect();
            queue!(
                stdout,
                cursor::MoveTo(placed.x, y),
                style::PrintStyledContent(style::StyledContent::new(
                    content_style(placed.emphasis),
                    visible
                )),
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn render_menubar(&self, stdout: &mut io::Stdout) -> Result<()> {
        let keys = &self.quiz.config().key_bindings;
        let items = [
            format!("[{}] hint", keys.hint),
            format!("[{}] answer", keys.answer),
            format!("[{}] next", keys.next),
            format!("[{}][Esc] quit", keys.quit),
            "[click] any line or button".to_string(),
        ];

        queue!(stdout, cursor::MoveTo(0, 0), style::Print(" "))?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                queue!(stdout, style::Print("  "))?;
            }
            print_menu_item(stdout, item)?;
        }
        Ok(())
    }
}

/// Terminal size needed to show the quiz with every line fully grown,
/// menu bar included.
pub fn required_size(quiz: &Quiz) -> (u16, u16) {
    let growth = Growth::from(quiz.config());
    let revealed = [CHARACTER, MOVIE, QUOTE]
        .into_iter()
        .fold(quiz.scene().clone(), |scene, name| {
            grow_line(scene, name, "", 0, growth)
        })
        .update(growth.duration);
    let (w, h) = canvas::extent(&canvas::place_all(&revealed.render(growth.duration)));
    (w, h.saturating_add(CANVAS_OFFSET))
}

/// The message a key press asks for, if any.
pub fn key_message(bindings: &KeyBindings, key: &KeyEvent) -> Option<Message> {
    if matches_binding(&bindings.hint, key) {
        Some(Message::RevealHint)
    } else if matches_binding(&bindings.answer, key) {
        Some(Message::RevealAnswer)
    } else if matches_binding(&bindings.next, key) {
        Some(Message::NextQuote)
    } else {
        None
    }
}

fn content_style(emphasis: Emphasis) -> style::ContentStyle {
    let mut cs = style::ContentStyle::default();
    match emphasis {
        Emphasis::Bold => cs.attributes.set(style::Attribute::Bold),
        Emphasis::Dim => cs.attributes.set(style::Attribute::Dim),
        Emphasis::Normal => {}
    }
    cs
}

/// Print a menu item string, bolding any text inside `[...]` brackets.
/// Text outside brackets is printed dim.
fn print_menu_item(stdout: &mut io::Stdout, item: &str) -> Result<()> {
    let mut rest = item;
    while !rest.is_empty() {
        let Some(open) = rest.find('[') else {
            queue!(
                stdout,
                style::SetAttribute(style::Attribute::Dim),
                style::Print(rest),
                style::SetAttribute(style::Attribute::Reset),
            )?;
            break;
        };
        if open > 0 {
            queue!(
                stdout,
                style::SetAttribute(style::Attribute::Dim),
                style::Print(&rest[..open]),
                style::SetAttribute(style::Attribute::Reset),
            )?;
        }
        rest = &rest[open..];
        let Some(close) = rest.find(']') else {
            queue!(stdout, style::Print(rest))?;
            break;
        };
        queue!(
            stdout,
            style::SetAttribute(style::Attribute::Bold),
            style::Print(&rest[..=close]),
            style::SetAttribute(style::Attribute::Reset),
        )?;
        rest = &rest[close + 1..];
    }
    Ok(())
}
