//! Front-panel "synth mode" for an embedded MIDI instrument.
//!
//! The [`synth_mode`] module tracks which instrument program is selected on
//! each of the 16 MIDI channels, independently for every synthesizer engine,
//! and sends a MIDI Program Change to the active engine whenever the user
//! turns the encoder or steps the channel.
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`] on embedded targets.
//!
//! [`defmt`]: https://docs.rs/defmt

#![no_std]

pub mod synth_mode;
