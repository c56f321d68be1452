//! Slide display
//!
//! The sequencer talks to the display through the narrow [`SlideDisplay`]
//! trait, so it carries no terminal dependencies and tests can substitute a
//! recording double. [`TerminalDisplay`] is the real implementation: it
//! paints whole frames on the alternate screen with ANSI escapes.

pub mod term;

use crate::deck::Deck;
use crate::Result;
use log::debug;
use std::io::{self, Write};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// What the sequencer needs from a slide display
pub trait SlideDisplay {
    /// Switch the visible slide; idempotent, replaces the current one
    fn show_slide(&mut self, index: u16) -> Result<()>;

    /// Mark a slide's narration as currently playing (visual only)
    fn highlight_narration(&mut self, index: u16);

    /// Remove the narration marker (visual only)
    fn clear_highlight(&mut self, index: u16);
}

/// Full-frame terminal renderer
pub struct TerminalDisplay {
    deck: Deck,
    cols: u16,
    rows: u16,
    current: u16,

    /// Slide whose narration marker is lit, if any
    narrating: Option<u16>,

    pub notes_visible: bool,
    pub enhance_visible: bool,

    /// Wrapped content of the enhancement panel
    enhance_lines: Vec<String>,

    /// Bottom-row status text (narration state, service notices)
    status: String,
}

impl TerminalDisplay {
    pub fn new(deck: Deck, cols: u16, rows: u16) -> Self {
        Self {
            deck,
            cols,
            rows,
            current: 1,
            narrating: None,
            notes_visible: false,
            enhance_visible: false,
            enhance_lines: Vec::new(),
            status: String::new(),
        }
    }

    /// Switch to the alternate screen and hide the cursor
    pub fn enter(&mut self) -> Result<()> {
        let mut out = io::stdout();
        out.write_all(b"\x1b[?1049h\x1b[?25l")?;
        out.flush()?;
        self.render()
    }

    /// Restore the normal screen and cursor
    pub fn leave(&mut self) -> Result<()> {
        let mut out = io::stdout();
        out.write_all(b"\x1b[?25h\x1b[?1049l")?;
        out.flush()?;
        Ok(())
    }

    /// Update dimensions after SIGWINCH and repaint
    pub fn resize(&mut self, cols: u16, rows: u16) -> Result<()> {
        debug!("Display resize to {}x{}", cols, rows);
        self.cols = cols;
        self.rows = rows;
        self.render()
    }

    pub fn current_slide(&self) -> u16 {
        self.current
    }

    /// Replace the enhancement panel content and repaint
    pub fn set_enhance_lines(&mut self, text: &str) -> Result<()> {
        let width = self.body_width();
        self.enhance_lines = text
            .lines()
            .flat_map(|l| wrap(l, width))
            .collect();
        self.render()
    }

    /// Replace the status line; only the bottom row is repainted
    pub fn set_status(&mut self, status: String) -> Result<()> {
        if status == self.status {
            return Ok(());
        }
        self.status = status;
        self.render_status_row()
    }

    /// Repaint everything
    pub fn render(&self) -> Result<()> {
        let width = self.cols.max(20) as usize;
        let body_width = self.body_width();
        let mut frame = String::new();
        frame.push_str("\x1b[2J\x1b[H");

        let Some(slide) = self.deck.slide(self.current) else {
            frame.push_str("\r\n  (no slide)\r\n");
            return write_frame(&frame);
        };

        // Title, centered and bold, with the narration marker underneath
        frame.push_str("\r\n");
        frame.push_str(&format!("\x1b[1m{}\x1b[0m\r\n", center(slide.title, width)));
        if self.narrating == Some(self.current) {
            frame.push_str(&format!("{}\r\n", center("~ narrating ~", width)));
        } else {
            frame.push_str("\r\n");
        }
        frame.push_str(&format!("{}\r\n\r\n", "=".repeat(width.min(body_width + 4))));

        for bullet in slide.bullets {
            let mut first = true;
            for line in wrap(bullet, body_width.saturating_sub(4)) {
                if first {
                    frame.push_str(&format!("  * {}\r\n", line));
                    first = false;
                } else {
                    frame.push_str(&format!("    {}\r\n", line));
                }
            }
        }

        if self.notes_visible {
            frame.push_str(&format!("\r\n{}\r\n", "-".repeat(width.min(body_width + 4))));
            frame.push_str("  \x1b[1mSpeaker notes\x1b[0m\r\n");
            for line in wrap(slide.notes, body_width) {
                frame.push_str(&format!("  {}\r\n", line));
            }
        }

        if self.enhance_visible {
            frame.push_str(&format!("\r\n{}\r\n", "-".repeat(width.min(body_width + 4))));
            frame.push_str("  \x1b[1mAI enhancement\x1b[0m\r\n");
            if self.enhance_lines.is_empty() {
                frame.push_str("  (press e, g or m to request a suggestion)\r\n");
            }
            for line in &self.enhance_lines {
                frame.push_str(&format!("  {}\r\n", line));
            }
        }

        write_frame(&frame)?;
        self.render_status_row()
    }

    /// Repaint only the bottom status row
    fn render_status_row(&self) -> Result<()> {
        let width = self.cols.max(20) as usize;
        let counter = format!("{} / {}", self.current, self.deck.total_slides());
        let status = truncate(&self.status, width.saturating_sub(counter.width() + 3));
        let pad = width
            .saturating_sub(status.width())
            .saturating_sub(counter.width());

        let frame = format!(
            "\x1b[{};1H\x1b[2K\x1b[7m{}{}{}\x1b[0m",
            self.rows.max(2),
            status,
            " ".repeat(pad),
            counter
        );
        write_frame(&frame)
    }

    /// Paint the help overlay; the next keypress repaints the slide
    pub fn show_help(&self) -> Result<()> {
        let width = self.cols.max(20) as usize;
        let mut frame = String::new();
        frame.push_str("\x1b[2J\x1b[H\r\n");
        frame.push_str(&format!("\x1b[1m{}\x1b[0m\r\n\r\n", center("Keyboard shortcuts", width)));
        for (keys, what) in HELP_LINES {
            frame.push_str(&format!("  {:<18} {}\r\n", keys, what));
        }
        frame.push_str("\r\n  Press any key to return to the presentation.\r\n");
        write_frame(&frame)
    }

    fn body_width(&self) -> usize {
        (self.cols.max(20) as usize - 4).min(76)
    }
}

impl SlideDisplay for TerminalDisplay {
    fn show_slide(&mut self, index: u16) -> Result<()> {
        if self.deck.slide(index).is_none() {
            debug!("show_slide({}) out of range, ignoring", index);
            return Ok(());
        }
        self.current = index;
        self.render()
    }

    fn highlight_narration(&mut self, index: u16) {
        self.narrating = Some(index);
        if let Err(e) = self.render() {
            debug!("Render after highlight failed: {}", e);
        }
    }

    fn clear_highlight(&mut self, _index: u16) {
        self.narrating = None;
        if let Err(e) = self.render() {
            debug!("Render after highlight clear failed: {}", e);
        }
    }
}

const HELP_LINES: &[(&str, &str)] = &[
    ("Right, Down, Space", "next slide"),
    ("Left, Up", "previous slide"),
    ("Home / End", "first / last slide"),
    ("n", "play, pause or resume narration"),
    ("p", "play the full presentation"),
    ("s, Esc", "stop narration"),
    ("o", "toggle speaker notes"),
    ("a", "toggle the AI enhancement panel"),
    ("e", "enhance the current slide's content"),
    ("g", "generate strategic insights"),
    ("m", "improve the slide's narrative"),
    ("c", "copy speaker notes to the clipboard"),
    ("r", "redraw the screen"),
    ("?", "this help"),
    ("q, Ctrl-C", "quit"),
];

fn write_frame(frame: &str) -> Result<()> {
    let mut out = io::stdout();
    out.write_all(frame.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Center text within the given display width
fn center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let pad = (width - text_width) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Clip text to a display width
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + 1 > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

/// Greedy word wrap by display width
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(8);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line = word.to_string();
        } else if line.width() + 1 + word.width() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Format a duration as m:ss for the progress clock
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap("hello world", 40), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_on_width() {
        let lines = wrap("alpha bravo charlie delta", 12);
        assert_eq!(lines, vec!["alpha bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap("", 20), vec![""]);
    }

    #[test]
    fn test_center_pads_left() {
        assert_eq!(center("ab", 6), "  ab");
    }

    #[test]
    fn test_truncate_clips_with_ellipsis() {
        let clipped = truncate("a long status line", 8);
        assert!(clipped.width() <= 8);
        assert!(clipped.ends_with('…'));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::from_secs(0)), "0:00");
        assert_eq!(format_clock(Duration::from_secs(75)), "1:15");
        assert_eq!(format_clock(Duration::from_secs(600)), "10:00");
    }
}
