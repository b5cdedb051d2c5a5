use super::error::SynthModeError;
use super::SYNTH_COUNT;

/// The synthesizer engines the front panel can drive.
///
/// Used directly as an index into the per-engine state table, so the
/// discriminants must stay dense and start at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SynthKind {
    /// Roland MT-32 emulation.
    #[default]
    Mt32 = 0,
    /// SoundFont (General MIDI) player.
    SoundFont = 1,
}

impl SynthKind {
    /// Every engine kind, in index order.
    pub const ALL: [SynthKind; SYNTH_COUNT] = [SynthKind::Mt32, SynthKind::SoundFont];

    /// Position of this kind in the per-engine state table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index()`](Self::index).
    ///
    /// Returns [`SynthModeError::InvalidSynthIndex`] if `index >= SYNTH_COUNT`.
    pub fn from_index(index: usize) -> Result<Self, SynthModeError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(SynthModeError::InvalidSynthIndex)
    }

    /// Name shown in the display header.
    pub const fn name(self) -> &'static str {
        match self {
            SynthKind::Mt32 => "MT-32",
            SynthKind::SoundFont => "SoundFont",
        }
    }
}

impl TryFrom<usize> for SynthKind {
    type Error = SynthModeError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}
