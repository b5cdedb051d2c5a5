use super::capability::{MidiSink, ModeHost};
use super::instrument::{Instrument, InstrumentCollection, GENERAL_MIDI};
use super::midi::ProgramChange;
use super::synth_kind::SynthKind;
use super::{CHANNEL_COUNT, SYNTH_COUNT, SYNTH_UNAVAILABLE_MESSAGE};

/// Per-engine slice of the selection table.
#[derive(Debug, Clone, Copy)]
struct SynthState {
    /// Registered instruments. Empty means "no instruments available".
    collection: InstrumentCollection,
    /// Selected position in `collection`, one per MIDI channel.
    channel_instrument_index: [usize; CHANNEL_COUNT as usize],
}

impl SynthState {
    const EMPTY: Self = Self {
        collection: &[],
        channel_instrument_index: [0; CHANNEL_COUNT as usize],
    };
}

/// Instrument selection state machine for the synth mode screen.
///
/// Generic over the UI host `H` and the engine handle `E`; neither is
/// owned in the sense of lifecycle. Typical handles are `&RefCell<T>` or
/// `&mut T` (see [`capability`](super::capability)).
///
/// # Lifecycle
///
/// 1. [`SynthMode::new()`] — inactive, empty table, no host.
/// 2. [`SynthMode::initialize()`] — store the host and register the
///    General MIDI list for every engine kind.
/// 3. [`SynthMode::set_current_synth()`] — whenever the system switches
///    engine or an engine appears/disappears.
/// 4. [`SynthMode::activate()`] / [`SynthMode::deactivate()`] — show or
///    hide the mode. While active, [`handle_encoder()`](Self::handle_encoder)
///    and [`adjust_channel()`](Self::adjust_channel) drive the selection.
///
/// # Example
///
/// ```
/// use core::cell::RefCell;
/// use panel::synth_mode::{MidiSink, ModeHost, SynthKind, SynthMode};
///
/// struct Engine(Option<u32>);
/// impl MidiSink for Engine {
///     fn handle_midi_short_message(&mut self, message: u32) {
///         self.0 = Some(message);
///     }
/// }
///
/// struct Host;
/// impl ModeHost for Host {
///     fn set_mode_presenter(&mut self) {}
///     fn clear_mode_presenter(&mut self) {}
///     fn show_system_message(&mut self, _message: &str) {}
/// }
///
/// let engine = RefCell::new(Engine(None));
/// let mut mode = SynthMode::new();
/// mode.initialize(Host);
/// mode.set_current_synth(SynthKind::SoundFont, Some(&engine));
/// mode.activate();
///
/// // Turn the encoder one step back from "Acoustic Grand Piano".
/// assert!(mode.handle_encoder(-1));
/// assert_eq!(mode.current_instrument().unwrap().name, "Gunshot");
/// assert_eq!(engine.borrow().0, Some(0x7FC0));
/// ```
pub struct SynthMode<H, E> {
    host: Option<H>,
    /// Handle to the current engine. Doubles as the active engine handle
    /// while `active` is set; the two only diverge when inactive.
    current_synth: Option<E>,
    current_synth_type: SynthKind,
    active_synth_type: SynthKind,
    active: bool,
    current_channel: u8,
    synth_states: [SynthState; SYNTH_COUNT],
}

impl<H, E> Default for SynthMode<H, E>
where
    H: ModeHost,
    E: MidiSink,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<H, E> SynthMode<H, E>
where
    H: ModeHost,
    E: MidiSink,
{
    /// Create an inactive synth mode with no host and no instruments.
    pub const fn new() -> Self {
        Self {
            host: None,
            current_synth: None,
            current_synth_type: SynthKind::Mt32,
            active_synth_type: SynthKind::Mt32,
            active: false,
            current_channel: 0,
            synth_states: [SynthState::EMPTY; SYNTH_COUNT],
        }
    }

    /// Attach the UI host and register [`GENERAL_MIDI`] for every engine kind.
    pub fn initialize(&mut self, host: H) {
        self.host = Some(host);
        for kind in SynthKind::ALL {
            self.register_instrument_collection(kind, &GENERAL_MIDI);
        }
    }

    // ── Engine switching and activation ──────────────────────────────

    /// Record the engine the rest of the system has switched to.
    ///
    /// `synth` is `None` while that engine is not ready. If the mode is
    /// active, a `None` forces it closed; otherwise the new engine becomes
    /// the active one and immediately receives the current channel's
    /// instrument for its kind. The outgoing engine is not notified.
    pub fn set_current_synth(&mut self, kind: SynthKind, synth: Option<E>) {
        self.current_synth_type = kind;
        self.current_synth = synth;

        self.ensure_instrument_index_valid(kind, self.current_channel);

        if self.active {
            if self.current_synth.is_none() {
                #[cfg(feature = "defmt")]
                defmt::warn!("Synth mode closed: {} unavailable", kind);

                self.active = false;
                if let Some(host) = self.host.as_mut() {
                    host.clear_mode_presenter();
                }
                return;
            }

            self.active_synth_type = kind;
            self.apply_instrument();
        } else if self.synth_states[kind.index()].collection.is_empty() {
            self.synth_states[kind.index()].channel_instrument_index =
                [0; CHANNEL_COUNT as usize];
        }
    }

    /// Show the synth mode.
    ///
    /// No-op if already active or [`initialize()`](Self::initialize) has not
    /// been called. With no current engine, the host shows
    /// [`SYNTH_UNAVAILABLE_MESSAGE`] and the mode stays inactive. Otherwise
    /// the mode registers as presenter and re-sends the selected instrument
    /// so the engine matches what is about to be displayed.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        let Some(host) = self.host.as_mut() else {
            return;
        };
        if self.current_synth.is_none() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Synth mode not opened: no engine");

            host.show_system_message(SYNTH_UNAVAILABLE_MESSAGE);
            return;
        }

        self.active = true;
        self.active_synth_type = self.current_synth_type;
        self.ensure_instrument_index_valid(self.active_synth_type, self.current_channel);
        if let Some(host) = self.host.as_mut() {
            host.set_mode_presenter();
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Synth mode opened: {}, channel {}",
            self.active_synth_type,
            self.current_channel + 1
        );

        self.apply_instrument();
    }

    /// Hide the synth mode. No-op if already inactive.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }

        self.active = false;
        if let Some(host) = self.host.as_mut() {
            host.clear_mode_presenter();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Step the current channel's instrument by `delta`, wrapping around the
    /// active engine's collection.
    ///
    /// Returns `false` (not handled) if the mode is inactive or `delta` is
    /// zero. With no instruments the input is still consumed. A Program
    /// Change is sent only if the selected index actually changed.
    pub fn handle_encoder(&mut self, delta: i8) -> bool {
        if !self.active || delta == 0 {
            return false;
        }

        let state = &mut self.synth_states[self.active_synth_type.index()];
        let count = state.collection.len();
        if count == 0 {
            return true;
        }

        let current_index = &mut state.channel_instrument_index[self.current_channel as usize];
        let step = (delta as isize).rem_euclid(count as isize) as usize;
        let new_index = (*current_index + step) % count;
        if new_index == *current_index {
            return true;
        }

        *current_index = new_index;
        self.apply_instrument();
        true
    }

    /// Move to another MIDI channel, wrapping modulo 16.
    ///
    /// No-op if inactive, `delta` is zero, or the channel does not change.
    /// Otherwise the new channel's stored instrument is re-sent, since the
    /// engine's program for that channel is owned by this selection table.
    pub fn adjust_channel(&mut self, delta: i32) {
        if !self.active || delta == 0 {
            return;
        }

        let step = delta.rem_euclid(CHANNEL_COUNT as i32) as u8;
        let new_channel = (self.current_channel + step) % CHANNEL_COUNT;
        if new_channel == self.current_channel {
            return;
        }

        self.current_channel = new_channel;
        self.ensure_instrument_index_valid(self.active_synth_type, self.current_channel);
        self.apply_instrument();
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Engine kind this mode last sent messages to.
    pub fn active_synth_type(&self) -> SynthKind {
        self.active_synth_type
    }

    /// Engine kind the rest of the system has selected.
    pub fn current_synth_type(&self) -> SynthKind {
        self.current_synth_type
    }

    /// Current MIDI channel, 0-based.
    pub fn current_channel(&self) -> u8 {
        self.current_channel
    }

    /// Instrument currently selected on the current channel of the active
    /// engine kind.
    pub fn current_instrument(&self) -> Option<&'static Instrument> {
        self.instrument(self.active_synth_type, self.current_channel)
    }

    // ── Instrument registry ──────────────────────────────────────────

    /// Associate `collection` with `kind`, replacing any previous one.
    ///
    /// Stored selections that no longer fit (or any selection, if the
    /// collection is empty) are reset to 0.
    pub fn register_instrument_collection(
        &mut self,
        kind: SynthKind,
        collection: InstrumentCollection,
    ) {
        let state = &mut self.synth_states[kind.index()];
        state.collection = collection;

        for (_channel, index) in state.channel_instrument_index.iter_mut().enumerate() {
            if *index != 0 && *index >= collection.len() {
                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "{} channel {}: index {} reset (collection size {})",
                    kind,
                    _channel + 1,
                    *index,
                    collection.len()
                );
                *index = 0;
            }
        }
    }

    /// The collection registered for `kind`, or `None` if there is none or
    /// it is empty.
    pub fn collection(&self, kind: SynthKind) -> Option<InstrumentCollection> {
        let collection = self.synth_states[kind.index()].collection;
        if collection.is_empty() {
            None
        } else {
            Some(collection)
        }
    }

    /// Stored selection index for (`kind`, `channel`).
    ///
    /// `channel` is reduced modulo 16.
    pub fn instrument_index(&self, kind: SynthKind, channel: u8) -> usize {
        self.synth_states[kind.index()].channel_instrument_index
            [(channel % CHANNEL_COUNT) as usize]
    }

    /// Instrument selected for (`kind`, `channel`), or `None` when `kind`
    /// has no instruments.
    pub fn instrument(&self, kind: SynthKind, channel: u8) -> Option<&'static Instrument> {
        let collection = self.collection(kind)?;
        let index = self.instrument_index(kind, channel);
        collection.get(index % collection.len())
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn ensure_instrument_index_valid(&mut self, kind: SynthKind, channel: u8) {
        let state = &mut self.synth_states[kind.index()];
        let index = &mut state.channel_instrument_index[(channel % CHANNEL_COUNT) as usize];
        if *index >= state.collection.len() {
            *index = 0;
        }
    }

    /// Send the current channel's instrument to the active engine.
    fn apply_instrument(&mut self) {
        if !self.active {
            return;
        }
        let Some(instrument) = self.instrument(self.active_synth_type, self.current_channel)
        else {
            return;
        };
        let channel = self.current_channel;
        let Some(synth) = self.current_synth.as_mut() else {
            return;
        };

        match ProgramChange::new(channel, instrument.program) {
            Ok(program_change) => {
                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "Program change: channel {}, program {} ({})",
                    channel + 1,
                    instrument.program + 1,
                    instrument.name
                );
                synth.handle_midi_short_message(program_change.pack());
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Instrument '{}' not sent: {}", instrument.name, _e);
            }
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
