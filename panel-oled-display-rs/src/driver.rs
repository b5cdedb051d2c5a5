//! SSD1306 panel presenting a [`TextGrid`] as a character display.
//!
//! [`OledPanel`] is the concrete [`Lcd`] the synth mode draws into. Prints
//! only touch the in-memory grid; [`OledPanel::refresh()`] renders the grid
//! and sends it over I2C when it differs from what is on the glass.

use display_interface_i2c::I2CInterface;
use embedded_hal_async::i2c::I2c;
use panel::synth_mode::{Lcd, MidiSink, ModeHost, SynthMode};
use ssd1306::{
    mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async,
};

use crate::error::PanelError;
use crate::layout::{render_text_grid, DisplayConfig};
use crate::text_grid::{GridChanges, TextGrid};

/// Concrete display type used internally by [`OledPanel`].
type Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// A `COLS` × `ROWS` character display on an SSD1306 128×64 OLED over I2C.
///
/// # Lifecycle
///
/// 1. [`OledPanel::new()`] — constructs the panel without any I2C traffic.
/// 2. [`OledPanel::init()`] — sends the SSD1306 initialisation sequence.
/// 3. Compose a frame with [`OledPanel::present()`] or print into the grid
///    through [`Lcd`].
/// 4. [`OledPanel::refresh()`] — render and flush if the grid changed.
///
/// # Example
///
/// ```no_run
/// use panel::synth_mode::Lcd;
/// use panel_oled_display_rs::{DisplayConfig, OledPanel};
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled: OledPanel<_, 20, 4> = OledPanel::new(i2c, 0x3C);
/// oled.init().await.unwrap();
/// oled.print("Synth: MT-32", 0, 0, true);
/// oled.refresh(&DisplayConfig::default()).await.unwrap();
/// # }
/// ```
pub struct OledPanel<I2C, const COLS: usize, const ROWS: usize> {
    display: Display<I2C>,
    /// Set to `true` after a successful `init()` call.
    initialized: bool,
    /// Frame being printed into.
    grid: TextGrid<COLS, ROWS>,
    /// Last frame flushed to the hardware. `None` until the first flush.
    shown: Option<TextGrid<COLS, ROWS>>,
}

impl<I2C, const COLS: usize, const ROWS: usize> OledPanel<I2C, COLS, ROWS>
where
    I2C: I2c,
{
    /// Construct an uninitialised panel with a blank grid.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
            grid: TextGrid::new(),
            shown: None,
        }
    }

    /// Initialise the SSD1306 hardware.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::InitFailed`] if the display does not respond.
    pub async fn init(&mut self) -> Result<(), PanelError> {
        self.display
            .init()
            .await
            .map_err(|_| PanelError::InitFailed)?;
        self.initialized = true;
        self.shown = None;
        Ok(())
    }

    /// Render the grid and flush it to the display if it changed since the
    /// last successful flush.
    ///
    /// Returns `Ok(true)` if a frame was sent, `Ok(false)` if nothing changed.
    /// A failed flush leaves the previous frame recorded, so the next call
    /// retries.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::NotInitialized`] before a successful
    /// [`init()`](Self::init), [`PanelError::Render`] if drawing fails, or
    /// [`PanelError::Bus`] on a bus-level failure.
    pub async fn refresh(&mut self, config: &DisplayConfig) -> Result<bool, PanelError> {
        if !self.initialized {
            return Err(PanelError::NotInitialized);
        }
        if let Some(shown) = &self.shown {
            if !GridChanges::detect(shown, &self.grid).any_changed() {
                return Ok(false);
            }
        }

        self.display.clear_buffer();
        render_text_grid(&mut self.display, &self.grid, config)
            .map_err(|_| PanelError::Render)?;
        self.display.flush().await?;

        self.shown = Some(self.grid);
        Ok(true)
    }

    /// Check whether the display has been successfully initialised.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl<I2C, const COLS: usize, const ROWS: usize> OledPanel<I2C, COLS, ROWS> {
    /// Compose the next frame for `mode`. An inactive mode blanks the
    /// frame so its last screen does not linger after the host moves on.
    ///
    /// Takes effect on the next [`refresh()`](Self::refresh).
    pub fn present<H, E>(&mut self, mode: &SynthMode<H, E>)
    where
        H: ModeHost,
        E: MidiSink,
    {
        self.grid.present(mode);
    }
}

impl<I2C, const COLS: usize, const ROWS: usize> Lcd for OledPanel<I2C, COLS, ROWS> {
    fn print(&mut self, text: &str, column: u8, row: u8, clear_line: bool) {
        self.grid.print(text, column, row, clear_line);
    }

    fn width(&self) -> u8 {
        self.grid.width()
    }

    fn height(&self) -> u8 {
        self.grid.height()
    }
}
