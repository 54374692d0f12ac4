//! Terminal screen - session setup and form painting.
//!
//! [`Screen`] owns the terminal for the lifetime of the program: it
//! enters raw mode and the alternate screen on construction and restores
//! both on drop, so a panic or early return cannot leave the shell in raw
//! mode. Painting batches everything through crossterm's `queue!` and
//! flushes once per repaint.
//!
//! For tests (and output capture) a screen can wrap any writer via
//! [`Screen::with_writer`]; such screens never touch terminal modes.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{MoveTo, Show};
use crossterm::style::{Attribute, Attributes, Print, SetAttribute, SetAttributes};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use crate::error::{Error, Result};
use crate::form::Form;
use crate::types::Attr;

// =============================================================================
// Attribute mapping
// =============================================================================

/// Map crate [`Attr`] flags onto crossterm attributes.
fn to_attributes(attr: Attr) -> Attributes {
    let mut out = Attributes::default();
    if attr.contains(Attr::BOLD) {
        out.set(Attribute::Bold);
    }
    if attr.contains(Attr::DIM) {
        out.set(Attribute::Dim);
    }
    if attr.contains(Attr::ITALIC) {
        out.set(Attribute::Italic);
    }
    if attr.contains(Attr::UNDERLINE) {
        out.set(Attribute::Underlined);
    }
    if attr.contains(Attr::BLINK) {
        out.set(Attribute::SlowBlink);
    }
    if attr.contains(Attr::INVERSE) {
        out.set(Attribute::Reverse);
    }
    if attr.contains(Attr::HIDDEN) {
        out.set(Attribute::Hidden);
    }
    if attr.contains(Attr::STRIKETHROUGH) {
        out.set(Attribute::CrossedOut);
    }
    out
}

// =============================================================================
// Screen
// =============================================================================

/// Terminal session and form painter.
pub struct Screen<W: Write = Stdout> {
    out: W,
    background: Attr,
    owns_terminal: bool,
}

impl Screen<Stdout> {
    /// Take over the terminal: raw mode, alternate screen, cleared.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Clear(ClearType::All))?;
        Ok(Self {
            out,
            background: Attr::NONE,
            owns_terminal: true,
        })
    }
}

impl<W: Write> Screen<W> {
    /// Wrap an arbitrary writer without touching terminal modes.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            background: Attr::NONE,
            owns_terminal: false,
        }
    }

    /// Terminal size in cells (cols, rows).
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(crossterm::terminal::size()?)
    }

    /// Attributes applied to labels and the frame.
    pub fn set_background(&mut self, attr: Attr) {
        self.background = attr;
    }

    /// Clear the whole screen.
    pub fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        Ok(())
    }

    /// Flush queued output to the terminal.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Print a static label at a cell position (queued; flushed on the
    /// next [`flush`](Self::flush) or [`paint`](Self::paint)).
    pub fn print_label(&mut self, row: u16, col: u16, text: &str) -> Result<()> {
        queue!(
            self.out,
            MoveTo(col, row),
            SetAttributes(to_attributes(self.background)),
            Print(text),
            SetAttribute(Attribute::Reset),
        )?;
        Ok(())
    }

    /// Draw a box border around the usable area.
    pub fn draw_frame(&mut self) -> Result<()> {
        let (cols, rows) = self.size()?;
        if cols < 2 || rows < 2 {
            return Err(Error::BadArgument("terminal too small for a frame"));
        }
        let inner = (cols - 2) as usize;

        queue!(self.out, SetAttributes(to_attributes(self.background)))?;
        queue!(
            self.out,
            MoveTo(0, 0),
            Print(format!("┌{}┐", "─".repeat(inner)))
        )?;
        for row in 1..rows - 1 {
            queue!(
                self.out,
                MoveTo(0, row),
                Print("│"),
                MoveTo(cols - 1, row),
                Print("│")
            )?;
        }
        queue!(
            self.out,
            MoveTo(0, rows - 1),
            Print(format!("└{}┘", "─".repeat(inner))),
            SetAttribute(Attribute::Reset),
        )?;
        Ok(())
    }

    /// Paint a posted form and park the terminal cursor at the current
    /// field's edit position.
    ///
    /// Entered characters get the field's foreground and background
    /// attributes; unoccupied cells get the background attribute and the
    /// padding character.
    pub fn paint(&mut self, form: &Form) -> Result<()> {
        if !form.is_posted() {
            return Err(Error::NotPosted);
        }

        for field in form.fields() {
            let origin = field.origin();
            let style = field.style();
            let contents = field.contents();
            let fill = field.width() as usize - contents.chars().count();

            queue!(
                self.out,
                MoveTo(origin.col, origin.row),
                SetAttributes(to_attributes(style.foreground | style.background)),
                Print(&contents),
                SetAttributes(to_attributes(style.background)),
                Print(style.padding.to_string().repeat(fill)),
                SetAttribute(Attribute::Reset),
            )?;
        }

        // Terminal cursor marks the edit position in the current field.
        let field = form.current_field();
        let origin = field.origin();
        let cursor_col = origin.col + field.buffer().cursor() as u16;
        queue!(self.out, MoveTo(cursor_col, origin.row), Show)?;

        self.flush()
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        if self.owns_terminal {
            // Best effort: the process may be tearing down.
            let _ = execute!(self.out, SetAttribute(Attribute::Reset), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
