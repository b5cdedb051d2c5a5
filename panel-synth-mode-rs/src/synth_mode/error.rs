use core::fmt;

/// Errors produced by the typed conversions at the edges of the synth mode.
///
/// The state machine itself never fails: out-of-range selections are
/// normalized, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SynthModeError {
    /// Engine index is out of bounds (must be < SYNTH_COUNT).
    InvalidSynthIndex,
    /// MIDI channel is out of bounds (must be < CHANNEL_COUNT).
    InvalidChannel,
    /// Program number does not fit in 7 bits (must be <= 127).
    InvalidProgram,
}

impl fmt::Display for SynthModeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SynthModeError::InvalidSynthIndex => write!(f, "Invalid synth index"),
            SynthModeError::InvalidChannel => write!(f, "Invalid MIDI channel (must be 0-15)"),
            SynthModeError::InvalidProgram => write!(f, "Invalid program number (must be 0-127)"),
        }
    }
}
