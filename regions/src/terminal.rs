use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use log::debug;

use crate::buffer::Buffer;
use crate::color::Rgb;
use crate::error::Result;

/// Raw-mode terminal that repaints only the cells that changed.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        crossterm::execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        debug!("terminal {width}x{height}");
        let mut previous = Buffer::new(width, height);
        previous.invalidate();

        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Wait for input. `None` blocks until an event arrives; otherwise an
    /// empty list means the timeout elapsed.
    pub fn poll(&self, timeout: Option<Duration>) -> Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        match timeout {
            Some(timeout) => {
                if !event::poll(timeout)? {
                    return Ok(events);
                }
                events.push(event::read()?);
            }
            None => events.push(event::read()?),
        }

        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }

        Ok(events)
    }

    /// Let `paint` fill a fresh frame, then write the difference to the screen.
    pub fn draw<R>(&mut self, paint: impl FnOnce(&mut Buffer) -> R) -> Result<R> {
        let (width, height) = terminal::size()?;
        if width != self.current.width() || height != self.current.height() {
            debug!("terminal resized to {width}x{height}");
            self.current = Buffer::new(width, height);
            self.previous = Buffer::new(width, height);
            self.previous.invalidate();
        }

        let result = paint(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(result)
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last: Option<(u16, u16)> = None;
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;
        let mut bold = false;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }

            if last != Some((x, y)) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }
            if fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(ct_color(cell.fg)))?;
                fg = Some(cell.fg);
            }
            if bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(ct_color(cell.bg)))?;
                bg = Some(cell.bg);
            }
            if cell.bold != bold {
                let attribute = if cell.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                queue!(self.stdout, SetAttribute(attribute))?;
                bold = cell.bold;
            }

            queue!(self.stdout, Print(cell.char))?;
            let advance = unicode_width::UnicodeWidthChar::width(cell.char)
                .unwrap_or(1)
                .max(1) as u16;
            last = Some((x.saturating_add(advance), y));
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

fn ct_color(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = crossterm::execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
