//! Periodic panel refresh task.
//!
//! [`panel_refresh_task`] is the render half of the synth mode's presenter
//! handshake: while the shared [`SynthMode`] is active, it asks the mode to
//! draw itself into the panel's grid, blanks the grid once it is not, and
//! flushes changed frames.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::i2c::I2c;

use panel::synth_mode::{MidiSink, ModeHost, SynthMode};

use crate::driver::OledPanel;
use crate::layout::DisplayConfig;

// ── Panel refresh task ───────────────────────────────────────────────────

/// Periodic display refresh loop.
///
/// This is a regular `async fn` — **not** an Embassy `#[task]`. Callers
/// should create a thin, concrete task wrapper that calls this function,
/// since Embassy tasks cannot be generic:
///
/// ```ignore
/// #[embassy_executor::task]
/// async fn oled_task(
///     panel: OledPanel<MyConcreteI2cType, 20, 4>,
///     synth_mode: &'static Mutex<CriticalSectionRawMutex, MySynthMode>,
///     config: DisplayConfig,
/// ) {
///     panel_refresh_task(panel, synth_mode, config).await;
/// }
/// ```
///
/// # Control flow
///
/// 1. Initialise the display hardware.
/// 2. Loop at `config.update_frequency_hz`:
///    - **Step 1** — Lock `synth_mode`; draw it into the panel grid if it
///      is active, otherwise blank the grid (no I2C). Release the mutex.
///    - **Step 2** — Refresh the panel: render and flush only if the grid
///      changed (~20 ms I2C, no mutex held).
///
/// # Errors
///
/// * Initialisation failure: logs the error and **returns** (task exits).
/// * Render / flush failure: logs the error and retries on the next cycle.
#[allow(clippy::needless_pass_by_value)] // config is small and consumed
pub async fn panel_refresh_task<I2C, H, E, const COLS: usize, const ROWS: usize>(
    mut panel: OledPanel<I2C, COLS, ROWS>,
    synth_mode: &'static Mutex<CriticalSectionRawMutex, SynthMode<H, E>>,
    config: DisplayConfig,
) where
    I2C: I2c,
    H: ModeHost,
    E: MidiSink,
{
    // ── Initialisation ───────────────────────────────────────────────
    if let Err(_e) = panel.init().await {
        #[cfg(feature = "defmt")]
        defmt::error!("OLED init failed: {}", _e);
        return;
    }

    #[cfg(feature = "defmt")]
    defmt::info!("OLED initialised");

    let period = embassy_time::Duration::from_millis(config.update_period_ms());

    // ── Main loop ────────────────────────────────────────────────────
    loop {
        embassy_time::Timer::after(period).await;

        // ── Step 1: draw (mutex held briefly, no I2C) ────────────────
        {
            let mode = synth_mode.lock().await;
            panel.present(&mode);
        } // ← mutex released here, before any I2C work

        // ── Step 2: render + flush if the grid changed ───────────────
        if let Err(_e) = panel.refresh(&config).await {
            #[cfg(feature = "defmt")]
            defmt::error!("Panel refresh failed: {}", _e);
        }
    }
}
