//! Error types for the OLED panel.

use core::fmt;

use display_interface::DisplayError;

/// Errors that can occur while driving the OLED panel.
///
/// The `ssd1306` crate wraps all underlying I2C bus errors into
/// [`DisplayError`], so this enum is non-generic.
#[derive(Debug)]
pub enum PanelError {
    /// Display interface error (wraps I2C and other bus-level failures).
    Bus(DisplayError),
    /// Display hardware did not respond to initialisation.
    InitFailed,
    /// Drawing the text grid into the frame buffer failed.
    Render,
    /// [`OledPanel::refresh()`](crate::OledPanel::refresh) was called before
    /// [`OledPanel::init()`](crate::OledPanel::init) succeeded.
    NotInitialized,
}

impl From<DisplayError> for PanelError {
    fn from(e: DisplayError) -> Self {
        PanelError::Bus(e)
    }
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PanelError::Bus(e) => write!(f, "Display bus error: {:?}", e),
            PanelError::InitFailed => write!(f, "Display initialisation failed"),
            PanelError::Render => write!(f, "Render failed"),
            PanelError::NotInitialized => write!(f, "Display not initialised"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PanelError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            PanelError::Bus(_e) => defmt::write!(f, "Display bus error"),
            PanelError::InitFailed => defmt::write!(f, "Initialisation failed"),
            PanelError::Render => defmt::write!(f, "Render failed"),
            PanelError::NotInitialized => defmt::write!(f, "Not initialised"),
        }
    }
}
