//! MIDI Program Change construction.

use super::error::SynthModeError;
use super::CHANNEL_COUNT;

/// Status nibble of a channel-voice Program Change message.
pub const PROGRAM_CHANGE_STATUS: u8 = 0xC0;

/// Highest valid MIDI program number.
pub const MAX_PROGRAM: u8 = 0x7F;

/// A validated Program Change for one MIDI channel.
///
/// Packed for delivery as a short message: status in bits 0–7, program in
/// bits 8–15, third byte unused (zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProgramChange {
    channel: u8,
    program: u8,
}

impl ProgramChange {
    /// Build a Program Change for `channel` (0–15) selecting `program` (0–127).
    ///
    /// # Errors
    /// * [`SynthModeError::InvalidChannel`] if `channel >= 16`
    /// * [`SynthModeError::InvalidProgram`] if `program > 127`
    ///
    /// # Examples
    ///
    /// ```
    /// use panel::synth_mode::ProgramChange;
    ///
    /// let pc = ProgramChange::new(3, 40).unwrap();
    /// assert_eq!(pc.status(), 0xC3);
    /// assert_eq!(pc.pack(), 0x28C3);
    /// ```
    pub fn new(channel: u8, program: u8) -> Result<Self, SynthModeError> {
        if channel >= CHANNEL_COUNT {
            return Err(SynthModeError::InvalidChannel);
        }
        if program > MAX_PROGRAM {
            return Err(SynthModeError::InvalidProgram);
        }
        Ok(Self { channel, program })
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    pub fn program(&self) -> u8 {
        self.program
    }

    /// Status byte: `0xC0 | channel`.
    pub fn status(&self) -> u8 {
        PROGRAM_CHANGE_STATUS | self.channel
    }

    /// Pack into the `u32` short-message form engines accept.
    pub fn pack(&self) -> u32 {
        (self.program as u32) << 8 | self.status() as u32
    }
}

impl From<ProgramChange> for u32 {
    fn from(pc: ProgramChange) -> Self {
        pc.pack()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_status_and_program() {
        let pc = ProgramChange::new(0, 0).unwrap();
        assert_eq!(pc.pack(), 0x0000_00C0);

        let pc = ProgramChange::new(15, 127).unwrap();
        assert_eq!(pc.status(), 0xCF);
        assert_eq!(u32::from(pc), 0x0000_7FCF);
    }

    #[test]
    fn third_byte_is_zero() {
        let pc = ProgramChange::new(9, 100).unwrap();
        assert_eq!(pc.pack() >> 16, 0);
    }

    #[test]
    fn rejects_channel_out_of_range() {
        assert_eq!(ProgramChange::new(16, 0), Err(SynthModeError::InvalidChannel));
        assert_eq!(ProgramChange::new(255, 0), Err(SynthModeError::InvalidChannel));
    }

    #[test]
    fn rejects_program_out_of_range() {
        assert_eq!(ProgramChange::new(0, 128), Err(SynthModeError::InvalidProgram));
    }
}
