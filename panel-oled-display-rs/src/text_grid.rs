//! Fixed-size character grid backing the text-mode display.
//!
//! [`TextGrid`] is the in-memory screen the synth mode prints into. It
//! implements [`Lcd`], holds one byte per character cell, and can be
//! compared with a previous frame to decide whether anything needs to be
//! sent to the hardware.

use panel::synth_mode::{Lcd, MidiSink, ModeHost, ModePresenter, SynthMode};

/// Byte stored in cells that have never been printed to or were cleared.
pub const BLANK: u8 = b' ';

/// Byte stored for characters the display font cannot show.
pub const REPLACEMENT: u8 = b'?';

/// A `COLS` × `ROWS` grid of ASCII character cells.
///
/// `COLS` and `ROWS` must each fit in a `u8`; [`Lcd::width()`] and
/// [`Lcd::height()`] saturate at 255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextGrid<const COLS: usize, const ROWS: usize> {
    cells: [[u8; COLS]; ROWS],
}

impl<const COLS: usize, const ROWS: usize> Default for TextGrid<COLS, ROWS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize, const ROWS: usize> TextGrid<COLS, ROWS> {
    /// A blank grid.
    pub const fn new() -> Self {
        Self {
            cells: [[BLANK; COLS]; ROWS],
        }
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells = [[BLANK; COLS]; ROWS];
    }

    /// Contents of `row` including trailing blanks, or `""` if `row` is
    /// outside the grid.
    pub fn row(&self, row: usize) -> &str {
        match self.cells.get(row) {
            // Cells only ever hold printable ASCII.
            Some(cells) => core::str::from_utf8(cells).unwrap_or(""),
            None => "",
        }
    }

    /// Contents of `row` without trailing blanks.
    pub fn row_trimmed(&self, row: usize) -> &str {
        self.row(row).trim_end_matches(BLANK as char)
    }

    /// Returns `true` if `row` holds nothing but blanks.
    pub fn row_is_blank(&self, row: usize) -> bool {
        self.row_trimmed(row).is_empty()
    }

    /// Compose the next frame for `mode`: its screen while it is the
    /// registered presenter, a blank frame otherwise.
    pub fn present<H, E>(&mut self, mode: &SynthMode<H, E>)
    where
        H: ModeHost,
        E: MidiSink,
    {
        if mode.is_active() {
            mode.draw(self);
        } else {
            self.clear();
        }
    }
}

impl<const COLS: usize, const ROWS: usize> Lcd for TextGrid<COLS, ROWS> {
    fn print(&mut self, text: &str, column: u8, row: u8, clear_line: bool) {
        let Some(cells) = self.cells.get_mut(row as usize) else {
            return;
        };
        let start = (column as usize).min(COLS);

        let mut end = start;
        for (cell, ch) in cells[start..].iter_mut().zip(text.chars()) {
            *cell = if ch.is_ascii_graphic() || ch == ' ' {
                ch as u8
            } else {
                REPLACEMENT
            };
            end += 1;
        }

        if clear_line {
            cells[end..].fill(BLANK);
        }
    }

    fn width(&self) -> u8 {
        COLS.min(u8::MAX as usize) as u8
    }

    fn height(&self) -> u8 {
        ROWS.min(u8::MAX as usize) as u8
    }
}

// ── Change detection ─────────────────────────────────────────────────────

/// Identifies which rows changed between two [`TextGrid`] frames.
///
/// Gates the flush in [`OledPanel::refresh()`](crate::OledPanel::refresh).
pub struct GridChanges<const ROWS: usize> {
    /// Per-row flag: `true` if any cell in the row differs.
    pub row_changed: [bool; ROWS],
}

impl<const ROWS: usize> GridChanges<ROWS> {
    /// Diff two frames row by row.
    pub fn detect<const COLS: usize>(
        old: &TextGrid<COLS, ROWS>,
        new: &TextGrid<COLS, ROWS>,
    ) -> Self {
        let mut row_changed = [false; ROWS];
        for (i, changed) in row_changed.iter_mut().enumerate() {
            *changed = old.cells[i] != new.cells[i];
        }
        Self { row_changed }
    }

    /// Returns `true` if any row changed.
    pub fn any_changed(&self) -> bool {
        self.row_changed.iter().any(|&c| c)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
