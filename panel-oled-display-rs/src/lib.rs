//! Character-display OLED surface for the front-panel synth mode.
//!
//! This crate provides [`TextGrid`], an in-memory character screen that
//! implements the synth mode's [`Lcd`] capability, [`OledPanel`], which
//! shows a grid on an SSD1306 (128×64) over async I2C, and
//! [`panel_refresh_task`], a periodic loop that lets an active
//! [`SynthMode`] draw itself and flushes changed frames.
//!
//! # Quick Start
//!
//! ```ignore
//! use panel_oled_display_rs::{panel_refresh_task, DisplayConfig, OledPanel};
//!
//! // In your Embassy main:
//! let oled: OledPanel<_, 20, 4> = OledPanel::new(i2c_oled, 0x3C);
//! let config = DisplayConfig::default();
//! spawner.spawn(oled_task(oled, synth_mode, config)).unwrap();
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`].
//! - **`task`** — the Embassy [`panel_refresh_task`].
//!
//! [`Lcd`]: panel::synth_mode::Lcd
//! [`SynthMode`]: panel::synth_mode::SynthMode
//! [`defmt`]: https://docs.rs/defmt

#![no_std]

#[cfg(feature = "task")]
pub mod display_task;
pub mod driver;
pub mod error;
pub mod layout;
pub mod text_grid;

// ── Re-exports for convenience ───────────────────────────────────────────

#[cfg(feature = "task")]
pub use display_task::panel_refresh_task;
pub use driver::OledPanel;
pub use error::PanelError;
pub use layout::{render_text_grid, DisplayConfig};
pub use text_grid::{GridChanges, TextGrid};
