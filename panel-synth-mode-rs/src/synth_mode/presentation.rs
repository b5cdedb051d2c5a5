//! Text layout for the synth mode screen.
//!
//! ```text
//! ┌────────────────────┐
//! │Synth: SoundFont    │  header
//! │Ch01 P001 Acoustic G│  channel, program, name as far as it fits
//! │Acoustic Grand Piano│  full name
//! │Enc:Prog B2:Bank B3/│  help (short form below WIDE_HELP_MIN_WIDTH)
//! └────────────────────┘
//! ```

use core::fmt::Write;

use heapless::String;

use super::capability::{Lcd, MidiSink, ModeHost, ModePresenter};
use super::mode::SynthMode;
use super::WIDE_HELP_MIN_WIDTH;

/// Longest row any [`Lcd`] can show.
const ROW_CAPACITY: usize = u8::MAX as usize;

const NO_INSTRUMENTS: &str = "No instruments available";
const HELP_LONG: &str = "Enc:Prog B2:Bank B3/4:Ch Press:Swap";
const HELP_SHORT: &str = "EncP B2Bk B34Ch PrSwp";

/// First `max_chars` characters of `text`.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Append as much of `text` as `line` has room for, stopping at a
/// character boundary.
fn append_fitting<const N: usize>(line: &mut String<N>, text: &str) {
    for ch in text.chars() {
        if line.push(ch).is_err() {
            break;
        }
    }
}

impl<H, E> ModePresenter for SynthMode<H, E>
where
    H: ModeHost,
    E: MidiSink,
{
    /// Render the active engine, channel and instrument.
    ///
    /// Rows that do not exist on `lcd` are skipped. Channel and program
    /// numbers are shown 1-based.
    fn draw(&self, lcd: &mut dyn Lcd) {
        let instrument = self.current_instrument();

        // "Synth: " plus the longest engine name.
        let mut header: String<32> = String::new();
        let written = write!(header, "Synth: {}", self.active_synth_type().name());
        debug_assert!(written.is_ok());

        // At most "Ch16 P256".
        let mut channel_line: String<16> = String::new();
        let (written, name) = match instrument {
            Some(instrument) => (
                write!(
                    channel_line,
                    "Ch{:02} P{:03}",
                    self.current_channel() + 1,
                    instrument.program as u16 + 1
                ),
                instrument.name,
            ),
            None => (
                write!(channel_line, "Ch{:02}", self.current_channel() + 1),
                NO_INSTRUMENTS,
            ),
        };
        debug_assert!(written.is_ok());

        let width = lcd.width() as usize;
        let mut row_line: String<ROW_CAPACITY> = String::new();
        append_fitting(&mut row_line, &channel_line);
        if width > channel_line.len() + 1 {
            let available = width - channel_line.len() - 1;
            append_fitting(&mut row_line, " ");
            append_fitting(&mut row_line, truncate_chars(name, available));
        }

        let help = if lcd.width() >= WIDE_HELP_MIN_WIDTH {
            HELP_LONG
        } else {
            HELP_SHORT
        };

        let height = lcd.height();
        if height >= 1 {
            lcd.print(&header, 0, 0, true);
        }
        if height >= 2 {
            lcd.print(&row_line, 0, 1, true);
        }
        if height >= 3 {
            lcd.print(name, 0, 2, true);
        }
        if height >= 4 {
            lcd.print(help, 0, 3, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth_mode::{Instrument, SynthKind};
    use core::cell::RefCell;

    // ── Test doubles ─────────────────────────────────────────────────

    /// Records the last text printed to each row.
    struct FakeLcd {
        width: u8,
        height: u8,
        rows: [String<ROW_CAPACITY>; 4],
        prints: usize,
    }

    impl FakeLcd {
        fn new(width: u8, height: u8) -> Self {
            Self {
                width,
                height,
                rows: Default::default(),
                prints: 0,
            }
        }

        fn row(&self, row: usize) -> &str {
            &self.rows[row]
        }
    }

    impl Lcd for FakeLcd {
        fn print(&mut self, text: &str, column: u8, row: u8, clear_line: bool) {
            assert_eq!(column, 0);
            assert!(clear_line);
            self.rows[row as usize].clear();
            self.rows[row as usize].push_str(text).unwrap();
            self.prints += 1;
        }

        fn width(&self) -> u8 {
            self.width
        }

        fn height(&self) -> u8 {
            self.height
        }
    }

    struct NullHost;

    impl ModeHost for NullHost {
        fn set_mode_presenter(&mut self) {}
        fn clear_mode_presenter(&mut self) {}
        fn show_system_message(&mut self, _message: &str) {}
    }

    struct NullEngine;

    impl MidiSink for NullEngine {
        fn handle_midi_short_message(&mut self, _message: u32) {}
    }

    type Engine = RefCell<NullEngine>;

    fn active_mode(engine: &Engine, kind: SynthKind) -> SynthMode<NullHost, &Engine> {
        let mut mode = SynthMode::new();
        mode.initialize(NullHost);
        mode.set_current_synth(kind, Some(engine));
        mode.activate();
        mode
    }

    // ── Layout ───────────────────────────────────────────────────────

    #[test]
    fn draws_four_lines_on_20x4() {
        let engine = RefCell::new(NullEngine);
        let mode = active_mode(&engine, SynthKind::SoundFont);
        let mut lcd = FakeLcd::new(20, 4);

        mode.draw(&mut lcd);

        assert_eq!(lcd.row(0), "Synth: SoundFont");
        assert_eq!(lcd.row(1), "Ch01 P001 Acoustic G");
        assert_eq!(lcd.row(2), "Acoustic Grand Piano");
        assert_eq!(lcd.row(3), HELP_LONG);
    }

    #[test]
    fn numbers_are_one_based_and_padded() {
        let engine = RefCell::new(NullEngine);
        let mut mode = active_mode(&engine, SynthKind::Mt32);
        mode.adjust_channel(-1);
        mode.handle_encoder(-1);
        let mut lcd = FakeLcd::new(20, 4);

        mode.draw(&mut lcd);

        assert_eq!(lcd.row(0), "Synth: MT-32");
        assert_eq!(lcd.row(1), "Ch16 P128 Gunshot");
    }

    #[test]
    fn narrow_display_uses_short_help() {
        let engine = RefCell::new(NullEngine);
        let mode = active_mode(&engine, SynthKind::Mt32);
        let mut lcd = FakeLcd::new(16, 4);

        mode.draw(&mut lcd);

        assert_eq!(lcd.row(1), "Ch01 P001 Acoust");
        assert_eq!(lcd.row(3), HELP_SHORT);
    }

    #[test]
    fn name_omitted_when_prefix_fills_width() {
        let engine = RefCell::new(NullEngine);
        let mode = active_mode(&engine, SynthKind::Mt32);
        // "Ch01 P001" is 9 characters; 10 leaves no room after the space.
        let mut lcd = FakeLcd::new(10, 4);

        mode.draw(&mut lcd);

        assert_eq!(lcd.row(1), "Ch01 P001");
    }

    #[test]
    fn wide_display_shows_whole_name() {
        let engine = RefCell::new(NullEngine);
        let mode = active_mode(&engine, SynthKind::Mt32);
        let mut lcd = FakeLcd::new(40, 4);

        mode.draw(&mut lcd);

        assert_eq!(lcd.row(1), "Ch01 P001 Acoustic Grand Piano");
    }

    #[test]
    fn placeholder_without_instruments() {
        let engine = RefCell::new(NullEngine);
        let mut mode = active_mode(&engine, SynthKind::Mt32);
        mode.register_instrument_collection(SynthKind::Mt32, &[]);
        let mut lcd = FakeLcd::new(20, 4);

        mode.draw(&mut lcd);

        assert_eq!(lcd.row(1), "Ch01 No instruments ");
        assert_eq!(lcd.row(2), NO_INSTRUMENTS);
    }

    #[test]
    fn short_display_skips_missing_rows() {
        let engine = RefCell::new(NullEngine);
        let mode = active_mode(&engine, SynthKind::Mt32);
        let mut lcd = FakeLcd::new(20, 2);

        mode.draw(&mut lcd);

        assert_eq!(lcd.prints, 2);
        assert_eq!(lcd.row(2), "");
        assert_eq!(lcd.row(3), "");
    }

    #[test]
    fn program_shown_from_instrument_not_index() {
        static OFFSET: [Instrument; 1] = [Instrument::new("Choir", 52)];
        let engine = RefCell::new(NullEngine);
        let mut mode = active_mode(&engine, SynthKind::SoundFont);
        mode.register_instrument_collection(SynthKind::SoundFont, &OFFSET);
        let mut lcd = FakeLcd::new(20, 4);

        mode.draw(&mut lcd);

        assert_eq!(lcd.row(1), "Ch01 P053 Choir");
    }

    #[test]
    fn long_name_fills_wide_display() {
        static LONG: [Instrument; 1] = [Instrument::new(
            "Orchestral Strings Ensemble with Slow Attack and Long Release",
            48,
        )];
        let engine = RefCell::new(NullEngine);
        let mut mode = active_mode(&engine, SynthKind::SoundFont);
        mode.register_instrument_collection(SynthKind::SoundFont, &LONG);
        let mut lcd = FakeLcd::new(80, 4);

        mode.draw(&mut lcd);

        assert_eq!(
            lcd.row(1),
            "Ch01 P049 Orchestral Strings Ensemble with Slow Attack and Long Release"
        );
        assert_eq!(lcd.row(2), LONG[0].name);
    }

    #[test]
    fn name_cut_at_widest_display() {
        const PART: &str = "Harpsichord Celesta Glockenspiel Vibraphone Marimba ";
        static HUGE: [Instrument; 1] = [Instrument::new(
            concat!(
                "Harpsichord Celesta Glockenspiel Vibraphone Marimba ",
                "Harpsichord Celesta Glockenspiel Vibraphone Marimba ",
                "Harpsichord Celesta Glockenspiel Vibraphone Marimba ",
                "Harpsichord Celesta Glockenspiel Vibraphone Marimba ",
                "Harpsichord Celesta Glockenspiel Vibraphone Marimba ",
                "Harpsichord Celesta Glockenspiel Vibraphone Marimba ",
            ),
            0,
        )];
        let engine = RefCell::new(NullEngine);
        let mut mode = active_mode(&engine, SynthKind::Mt32);
        mode.register_instrument_collection(SynthKind::Mt32, &HUGE);
        let mut lcd = FakeLcd::new(u8::MAX, 2);

        mode.draw(&mut lcd);

        let row = lcd.row(1);
        assert_eq!(row.len(), u8::MAX as usize);
        assert!(row.starts_with("Ch01 P001 Harpsichord"));
        assert!(row[10..].starts_with(PART));
    }

    #[test]
    fn append_fitting_stops_at_capacity() {
        let mut line: String<6> = String::new();
        append_fitting(&mut line, "Ch01");
        append_fitting(&mut line, " Piano");
        assert_eq!(line, "Ch01 P");

        let mut line: String<5> = String::new();
        append_fitting(&mut line, "Caf\u{00e9}s");
        assert_eq!(line, "Caf\u{00e9}");
    }

    #[test]
    fn truncate_chars_bounds() {
        assert_eq!(truncate_chars("Piano", 0), "");
        assert_eq!(truncate_chars("Piano", 3), "Pia");
        assert_eq!(truncate_chars("Piano", 5), "Piano");
        assert_eq!(truncate_chars("Piano", 50), "Piano");
    }
}
