//! Per-channel instrument selection for the front-panel synth mode.
//!
//! This module provides [`SynthMode`], the state machine behind the synth
//! mode screen. It remembers, for every engine kind and every MIDI channel,
//! which instrument is selected, and sends a Program Change to the active
//! engine whenever the selection it is showing changes.
//!
//! # Architecture
//!
//! The selection table is a fixed-size array indexed by engine kind, then
//! by channel:
//!
//! ```text
//!              ch1  ch2  ch3  ...  ch16
//! MT-32      [  0,   5,   0,  ...,   0 ]  → GENERAL_MIDI
//! SoundFont  [ 40,   0,  12,  ...,   0 ]  → GENERAL_MIDI
//! ```
//!
//! Every stored index is either `0` or a valid position in the collection
//! currently registered for that engine kind. Registering a shorter (or
//! empty) collection resets the indices that no longer fit.
//!
//! # Current vs. active engine
//!
//! The *current* engine is whatever the rest of the system has selected.
//! The *active* engine is the one receiving this mode's Program Changes,
//! and only exists while the mode is shown ([`SynthMode::activate()`] until
//! [`SynthMode::deactivate()`], or until the current engine goes away).
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. Display lines are built in `heapless` strings and the
//! engine and host are borrowed through the traits in [`capability`].

pub mod capability;
mod error;
mod instrument;
mod midi;
mod mode;
mod presentation;
mod synth_kind;

pub use capability::{Lcd, MidiSink, ModeHost, ModePresenter};
pub use error::SynthModeError;
pub use instrument::{Instrument, InstrumentCollection, GENERAL_MIDI};
pub use midi::{ProgramChange, MAX_PROGRAM, PROGRAM_CHANGE_STATUS};
pub use mode::SynthMode;
pub use synth_kind::SynthKind;

/// Number of MIDI channels tracked per engine.
pub const CHANNEL_COUNT: u8 = 16;

/// Number of engine kinds (entries in [`SynthKind::ALL`]).
pub const SYNTH_COUNT: usize = 2;

/// Minimum display width, in characters, for the long help line.
pub const WIDE_HELP_MIN_WIDTH: u8 = 20;

/// Message shown when the mode is opened with no engine available.
pub const SYNTH_UNAVAILABLE_MESSAGE: &str = "Synth unavailable";
