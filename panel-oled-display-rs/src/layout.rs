//! Display geometry and text-grid rendering.
//!
//! This module defines [`DisplayConfig`] and the [`render_text_grid`]
//! function that draws a [`TextGrid`] frame using `embedded-graphics`.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

use crate::text_grid::TextGrid;

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Configuration for the character layout and refresh task.
///
/// All layout geometry lives here — there are **no** module-level layout
/// constants.
///
/// [`DisplayConfig::default()`] maps a 20 × 4 character screen onto a
/// 128×64 SSD1306 with the 6×10 font, refreshed at 30 Hz.
pub struct DisplayConfig {
    /// Display refresh rate in Hz. Default: 30. Max: 60.
    pub update_frequency_hz: u32,

    // ── Layout geometry ──────────────────────────────────────────────
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 64.
    pub display_height: u32,
    /// Horizontal advance per character cell in pixels. Default: 6.
    pub cell_width: u32,
    /// Vertical distance between character rows in pixels. Default: 16.
    pub row_pitch: u32,
    /// Pixels from the top of the display to the first row. Default: 3.
    pub top_margin: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            update_frequency_hz: 30,
            display_width: 128,
            display_height: 64,
            cell_width: 6,
            row_pitch: 16,
            top_margin: 3,
        }
    }
}

impl DisplayConfig {
    /// Convert the configured frequency to a timer period in milliseconds.
    ///
    /// Formula: `1000 / update_frequency_hz`, with 0 Hz treated as 1 Hz.
    pub fn update_period_ms(&self) -> u64 {
        1000 / self.update_frequency_hz.max(1) as u64
    }

    /// Character columns that fit across the display.
    pub fn columns(&self) -> u32 {
        self.display_width / self.cell_width.max(1)
    }

    /// Character rows that fit down the display.
    pub fn rows(&self) -> u32 {
        self.display_height / self.row_pitch.max(1)
    }

    /// Top-left pixel of character row `row`.
    pub fn row_origin(&self, row: usize) -> Point {
        Point::new(0, self.top_margin + row as i32 * self.row_pitch as i32)
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Render a [`TextGrid`] to a display buffer using `embedded-graphics`.
///
/// Blank rows are skipped; trailing blanks are not drawn. The caller is
/// responsible for clearing the buffer first.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────┐
/// │Synth: MT-32                  │  ← top_margin
/// │Ch01 P001 Acoustic G          │  ← top_margin + row_pitch
/// │Acoustic Grand Piano          │  ← top_margin + 2 × row_pitch
/// │Enc:Prog B2:Bank B3/          │  ← top_margin + 3 × row_pitch
/// └──────────────────────────────┘
/// ```
///
/// # Example
///
/// ```no_run
/// # use panel::synth_mode::Lcd;
/// # use panel_oled_display_rs::{render_text_grid, DisplayConfig, TextGrid};
/// # fn example(display: &mut impl embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>) {
/// let mut grid: TextGrid<20, 4> = TextGrid::new();
/// grid.print("Synth: MT-32", 0, 0, true);
/// let config = DisplayConfig::default();
/// render_text_grid(display, &grid, &config).ok();
/// # }
/// ```
pub fn render_text_grid<D, const COLS: usize, const ROWS: usize>(
    display: &mut D,
    grid: &TextGrid<COLS, ROWS>,
    config: &DisplayConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

    for row in 0..ROWS {
        let text = grid.row_trimmed(row);
        if text.is_empty() {
            continue;
        }
        Text::with_baseline(text, config.row_origin(row), text_style, Baseline::Top)
            .draw(display)?;
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────
