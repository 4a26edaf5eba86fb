use crate::Cell;
use crate::input::Command;
use crate::render::{Anchor, Canvas, Paint};
use crate::snake::Direction;
use std::{io::{Stdout, Write, stdout}, time::Duration};
use std::sync::{Arc, atomic::{AtomicBool, Ordering}, mpsc::Sender};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll, read};
use crossterm::style::{Attribute, Color};
use tracing::{debug, error, warn};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Option<Color>,
    pub bold: bool,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph { ch: ' ', color: None, bold: false };

    fn for_paint(paint: Paint) -> Self {
        match paint {
            Paint::WallHorizontal => Glyph { ch: '_', color: Some(Color::White), bold: false },
            Paint::WallVertical => Glyph { ch: '|', color: Some(Color::White), bold: false },
            Paint::Snake => Glyph { ch: 'O', color: Some(Color::Green), bold: true },
            Paint::Food => Glyph { ch: 'x', color: Some(Color::Red), bold: true },
        }
    }

    fn text(ch: char) -> Self {
        Glyph { ch, color: Some(Color::Yellow), bold: false }
    }
}

/// In-memory character grid: the playing field plus one status row below
/// it. [`TermManager::present`] copies it to the real terminal.
#[derive(Clone, Debug)]
pub struct Screen {
    width: u16,
    grid_height: u16,
    cells: Vec<Glyph>,
}

impl Screen {
    pub fn new(width: u16, grid_height: u16) -> Self {
        let cells = vec![Glyph::BLANK; width as usize * (grid_height as usize + 1)];
        Screen { width, grid_height, cells }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Rows including the status row.
    pub fn height(&self) -> u16 {
        self.grid_height + 1
    }

    pub fn glyph_at(&self, x: u16, y: u16) -> Option<Glyph> {
        self.index(x as i32, y as i32).map(|i| self.cells[i])
    }

    /// One row as plain text, for logging and tests.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width).filter_map(|x| self.glyph_at(x, y)).map(|g| g.ch).collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height() as i32 {
            return None;
        }
        Some(self.width as usize * y as usize + x as usize)
    }

    fn put(&mut self, x: i32, y: i32, glyph: Glyph) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = glyph;
        }
    }

    fn anchor_origin(&self, anchor: Anchor, len: usize) -> (i32, i32) {
        match anchor {
            Anchor::Status => (2, self.grid_height as i32),
            Anchor::Centered => (
                (self.width as i32 / 2 - len as i32 / 2).max(0),
                self.grid_height as i32 / 2,
            ),
        }
    }
}

impl Canvas for Screen {
    fn clear(&mut self) {
        self.cells.fill(Glyph::BLANK);
    }

    fn fill(&mut self, cell: Cell, paint: Paint) {
        self.put(cell.0, cell.1, Glyph::for_paint(paint));
    }

    fn text(&mut self, anchor: Anchor, text: &str) {
        let (x, y) = self.anchor_origin(anchor, text.chars().count());
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, Glyph::text(ch));
        }
    }
}

pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), active: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        self.active = true;
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).context("failed to hide cursor")?;
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("failed to clear terminal")?;
        Ok(())
    }

    /// Puts the terminal back the way we found it. Failures are only logged,
    /// there is nothing better to do with them on the way out.
    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Err(err) = terminal::disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(self.stdout, cursor::Show, cursor::EnableBlinking) {
            error!(?err, "failed to show cursor");
        }
        if let Err(err) = execute!(self.stdout, LeaveAlternateScreen) {
            error!(?err, "failed to leave alternate screen");
        }
    }

    /// Copies the whole screen buffer to the terminal and flushes.
    pub fn present(&mut self, screen: &Screen) -> Result<()> {
        for y in 0..screen.height() {
            queue!(self.stdout, cursor::MoveTo(0, y))?;

            let mut current: Option<(Option<Color>, bool)> = None;
            for x in 0..screen.width() {
                let glyph = screen.glyph_at(x, y).unwrap_or(Glyph::BLANK);
                let look = (glyph.color, glyph.bold);

                if current != Some(look) {
                    queue!(self.stdout, style::SetAttribute(Attribute::Reset), style::ResetColor)?;
                    if let Some(color) = glyph.color {
                        queue!(self.stdout, style::SetForegroundColor(color))?;
                    }
                    if glyph.bold {
                        queue!(self.stdout, style::SetAttribute(Attribute::Bold))?;
                    }
                    current = Some(look);
                }

                queue!(self.stdout, style::Print(glyph.ch))?;
            }
        }

        queue!(self.stdout, style::SetAttribute(Attribute::Reset), style::ResetColor)?;
        self.stdout.flush().context("failed to flush terminal")?;
        Ok(())
    }
}

impl Default for TermManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Warns when the terminal cannot show the whole grid. The game still runs,
/// the overflow is just clipped by the terminal.
pub fn check_size(width: u16, height: u16) -> Result<()> {
    let (cols, rows) = terminal::size().context("failed to read terminal size")?;
    if cols < width || rows < height {
        warn!(cols, rows, width, height, "terminal is smaller than the playing field");
    }
    Ok(())
}

pub fn command_for(ev: &KeyEvent) -> Option<Command> {
    if ev.kind == KeyEventKind::Release {
        return None;
    }

    match ev.code {
        KeyCode::Up => Some(Command::Steer(Direction::Up)),
        KeyCode::Down => Some(Command::Steer(Direction::Down)),
        KeyCode::Left => Some(Command::Steer(Direction::Left)),
        KeyCode::Right => Some(Command::Steer(Direction::Right)),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if ev.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        _ => None,
    }
}

/// Reads key events on a separate thread and forwards the ones that mean
/// something to the game. The thread stops once `stop` is set, the receiver
/// goes away, or reading from the terminal fails.
pub fn spawn_input(tx: Sender<Command>, stop: Arc<AtomicBool>, poll_every: Duration) -> Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input".into())
        .spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                match poll(poll_every) {
                    Ok(false) => continue,
                    Ok(true) => {},
                    Err(err) => {
                        error!(?err, "failed to poll terminal events");
                        break;
                    },
                }

                let ev = match read() {
                    Ok(Event::Key(ev)) => ev,
                    Ok(_) => continue,
                    Err(err) => {
                        error!(?err, "failed to read terminal event");
                        break;
                    },
                };

                if let Some(command) = command_for(&ev) {
                    debug!(?command, "key");
                    if tx.send(command).is_err() {
                        break;
                    }
                }
            }
        })
        .context("failed to spawn input thread")
}
