/// An immutable (name, program) pair.
///
/// `program` is the 7-bit MIDI program number (0–127) sent in the Program
/// Change message when this instrument is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instrument {
    /// Display name.
    pub name: &'static str,
    /// MIDI program number, 0-based.
    pub program: u8,
}

impl Instrument {
    pub const fn new(name: &'static str, program: u8) -> Self {
        Self { name, program }
    }
}

/// An ordered instrument list registered for one or more engine kinds.
///
/// Collections are compiled-in tables; the synth mode borrows them and
/// never copies or owns them.
pub type InstrumentCollection = &'static [Instrument];

/// General MIDI level 1 melodic program table.
pub static GENERAL_MIDI: [Instrument; 128] = [
    Instrument::new("Acoustic Grand Piano", 0),
    Instrument::new("Bright Acoustic Piano", 1),
    Instrument::new("Electric Grand Piano", 2),
    Instrument::new("Honky-tonk Piano", 3),
    Instrument::new("Electric Piano 1", 4),
    Instrument::new("Electric Piano 2", 5),
    Instrument::new("Harpsichord", 6),
    Instrument::new("Clavinet", 7),
    Instrument::new("Celesta", 8),
    Instrument::new("Glockenspiel", 9),
    Instrument::new("Music Box", 10),
    Instrument::new("Vibraphone", 11),
    Instrument::new("Marimba", 12),
    Instrument::new("Xylophone", 13),
    Instrument::new("Tubular Bells", 14),
    Instrument::new("Dulcimer", 15),
    Instrument::new("Drawbar Organ", 16),
    Instrument::new("Percussive Organ", 17),
    Instrument::new("Rock Organ", 18),
    Instrument::new("Church Organ", 19),
    Instrument::new("Reed Organ", 20),
    Instrument::new("Accordion", 21),
    Instrument::new("Harmonica", 22),
    Instrument::new("Tango Accordion", 23),
    Instrument::new("Acoustic Guitar (nylon)", 24),
    Instrument::new("Acoustic Guitar (steel)", 25),
    Instrument::new("Electric Guitar (jazz)", 26),
    Instrument::new("Electric Guitar (clean)", 27),
    Instrument::new("Electric Guitar (muted)", 28),
    Instrument::new("Overdriven Guitar", 29),
    Instrument::new("Distortion Guitar", 30),
    Instrument::new("Guitar Harmonics", 31),
    Instrument::new("Acoustic Bass", 32),
    Instrument::new("Electric Bass (finger)", 33),
    Instrument::new("Electric Bass (pick)", 34),
    Instrument::new("Fretless Bass", 35),
    Instrument::new("Slap Bass 1", 36),
    Instrument::new("Slap Bass 2", 37),
    Instrument::new("Synth Bass 1", 38),
    Instrument::new("Synth Bass 2", 39),
    Instrument::new("Violin", 40),
    Instrument::new("Viola", 41),
    Instrument::new("Cello", 42),
    Instrument::new("Contrabass", 43),
    Instrument::new("Tremolo Strings", 44),
    Instrument::new("Pizzicato Strings", 45),
    Instrument::new("Orchestral Harp", 46),
    Instrument::new("Timpani", 47),
    Instrument::new("String Ensemble 1", 48),
    Instrument::new("String Ensemble 2", 49),
    Instrument::new("SynthStrings 1", 50),
    Instrument::new("SynthStrings 2", 51),
    Instrument::new("Choir Aahs", 52),
    Instrument::new("Voice Oohs", 53),
    Instrument::new("Synth Voice", 54),
    Instrument::new("Orchestra Hit", 55),
    Instrument::new("Trumpet", 56),
    Instrument::new("Trombone", 57),
    Instrument::new("Tuba", 58),
    Instrument::new("Muted Trumpet", 59),
    Instrument::new("French Horn", 60),
    Instrument::new("Brass Section", 61),
    Instrument::new("SynthBrass 1", 62),
    Instrument::new("SynthBrass 2", 63),
    Instrument::new("Soprano Sax", 64),
    Instrument::new("Alto Sax", 65),
    Instrument::new("Tenor Sax", 66),
    Instrument::new("Baritone Sax", 67),
    Instrument::new("Oboe", 68),
    Instrument::new("English Horn", 69),
    Instrument::new("Bassoon", 70),
    Instrument::new("Clarinet", 71),
    Instrument::new("Piccolo", 72),
    Instrument::new("Flute", 73),
    Instrument::new("Recorder", 74),
    Instrument::new("Pan Flute", 75),
    Instrument::new("Blown Bottle", 76),
    Instrument::new("Shakuhachi", 77),
    Instrument::new("Whistle", 78),
    Instrument::new("Ocarina", 79),
    Instrument::new("Lead 1 (square)", 80),
    Instrument::new("Lead 2 (sawtooth)", 81),
    Instrument::new("Lead 3 (calliope)", 82),
    Instrument::new("Lead 4 (chiff)", 83),
    Instrument::new("Lead 5 (charang)", 84),
    Instrument::new("Lead 6 (voice)", 85),
    Instrument::new("Lead 7 (fifths)", 86),
    Instrument::new("Lead 8 (bass+lead)", 87),
    Instrument::new("Pad 1 (new age)", 88),
    Instrument::new("Pad 2 (warm)", 89),
    Instrument::new("Pad 3 (polysynth)", 90),
    Instrument::new("Pad 4 (choir)", 91),
    Instrument::new("Pad 5 (bowed)", 92),
    Instrument::new("Pad 6 (metallic)", 93),
    Instrument::new("Pad 7 (halo)", 94),
    Instrument::new("Pad 8 (sweep)", 95),
    Instrument::new("FX 1 (rain)", 96),
    Instrument::new("FX 2 (soundtrack)", 97),
    Instrument::new("FX 3 (crystal)", 98),
    Instrument::new("FX 4 (atmosphere)", 99),
    Instrument::new("FX 5 (brightness)", 100),
    Instrument::new("FX 6 (goblins)", 101),
    Instrument::new("FX 7 (echoes)", 102),
    Instrument::new("FX 8 (sci-fi)", 103),
    Instrument::new("Sitar", 104),
    Instrument::new("Banjo", 105),
    Instrument::new("Shamisen", 106),
    Instrument::new("Koto", 107),
    Instrument::new("Kalimba", 108),
    Instrument::new("Bag Pipe", 109),
    Instrument::new("Fiddle", 110),
    Instrument::new("Shanai", 111),
    Instrument::new("Tinkle Bell", 112),
    Instrument::new("Agogo", 113),
    Instrument::new("Steel Drums", 114),
    Instrument::new("Woodblock", 115),
    Instrument::new("Taiko Drum", 116),
    Instrument::new("Melodic Tom", 117),
    Instrument::new("Synth Drum", 118),
    Instrument::new("Reverse Cymbal", 119),
    Instrument::new("Guitar Fret Noise", 120),
    Instrument::new("Breath Noise", 121),
    Instrument::new("Seashore", 122),
    Instrument::new("Bird Tweet", 123),
    Instrument::new("Telephone Ring", 124),
    Instrument::new("Helicopter", 125),
    Instrument::new("Applause", 126),
    Instrument::new("Gunshot", 127),
];
