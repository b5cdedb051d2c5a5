//! Capabilities the synth mode consumes from, and exposes to, its host.
//!
//! None of these are owned by the synth mode. The engine handle and the
//! host are lent in by whoever owns their lifecycle; forwarding impls for
//! `&mut T` and `&RefCell<T>` let a caller keep using the engine or host
//! while the synth mode holds a handle to it.

use core::cell::RefCell;

/// A text-mode character display.
pub trait Lcd {
    /// Print `text` starting at (`column`, `row`).
    ///
    /// Text beyond the right edge is clipped. With `clear_line` set, the
    /// rest of the row after the text is blanked.
    fn print(&mut self, text: &str, column: u8, row: u8, clear_line: bool);

    /// Width in character cells.
    fn width(&self) -> u8;

    /// Height in character rows.
    fn height(&self) -> u8;
}

/// The UI host that decides which mode is currently drawn.
pub trait ModeHost {
    /// Make the caller the current mode presenter.
    fn set_mode_presenter(&mut self);

    /// Stop presenting the caller; the host falls back to its default screen.
    fn clear_mode_presenter(&mut self);

    /// Flash a short system message to the user.
    fn show_system_message(&mut self, message: &str);
}

/// Handle to a synthesizer engine that accepts MIDI short messages.
pub trait MidiSink {
    /// Deliver a packed MIDI channel-voice short message
    /// (status in bits 0–7, data bytes in bits 8–15 and 16–23).
    fn handle_midi_short_message(&mut self, message: u32);
}

/// Something the host can ask to render its current state.
pub trait ModePresenter {
    fn draw(&self, lcd: &mut dyn Lcd);
}

// ── Forwarding impls ─────────────────────────────────────────────────────

impl<T: MidiSink + ?Sized> MidiSink for &mut T {
    fn handle_midi_short_message(&mut self, message: u32) {
        (**self).handle_midi_short_message(message);
    }
}

impl<T: MidiSink + ?Sized> MidiSink for &RefCell<T> {
    fn handle_midi_short_message(&mut self, message: u32) {
        self.borrow_mut().handle_midi_short_message(message);
    }
}

impl<T: ModeHost + ?Sized> ModeHost for &mut T {
    fn set_mode_presenter(&mut self) {
        (**self).set_mode_presenter();
    }

    fn clear_mode_presenter(&mut self) {
        (**self).clear_mode_presenter();
    }

    fn show_system_message(&mut self, message: &str) {
        (**self).show_system_message(message);
    }
}

impl<T: ModeHost + ?Sized> ModeHost for &RefCell<T> {
    fn set_mode_presenter(&mut self) {
        self.borrow_mut().set_mode_presenter();
    }

    fn clear_mode_presenter(&mut self) {
        self.borrow_mut().clear_mode_presenter();
    }

    fn show_system_message(&mut self, message: &str) {
        self.borrow_mut().show_system_message(message);
    }
}

impl<T: Lcd + ?Sized> Lcd for &mut T {
    fn print(&mut self, text: &str, column: u8, row: u8, clear_line: bool) {
        (**self).print(text, column, row, clear_line);
    }

    fn width(&self) -> u8 {
        (**self).width()
    }

    fn height(&self) -> u8 {
        (**self).height()
    }
}
