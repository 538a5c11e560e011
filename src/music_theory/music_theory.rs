use core::fmt;

/// The seventeen selectable note names: the twelve sharp-spelled pitch
/// classes plus the five distinct flat spellings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Note {
    C,
    CSharp,
    DFlat,
    D,
    DSharp,
    EFlat,
    E,
    F,
    FSharp,
    GFlat,
    G,
    GSharp,
    AFlat,
    A,
    ASharp,
    BFlat,
    B,
}

/// Chromatic positions 0..12 spelled with sharps.
pub const SHARP_SPELLING: [Note; 12] = [
    Note::C,
    Note::CSharp,
    Note::D,
    Note::DSharp,
    Note::E,
    Note::F,
    Note::FSharp,
    Note::G,
    Note::GSharp,
    Note::A,
    Note::ASharp,
    Note::B,
];

/// The same chromatic positions spelled with flats.
pub const FLAT_SPELLING: [Note; 12] = [
    Note::C,
    Note::DFlat,
    Note::D,
    Note::EFlat,
    Note::E,
    Note::F,
    Note::GFlat,
    Note::G,
    Note::AFlat,
    Note::A,
    Note::BFlat,
    Note::B,
];

/// Keys with flat signatures. Any note outside this set resolves to the
/// sharp spelling.
const FLAT_KEYS: [Note; 6] = [
    Note::F,
    Note::BFlat,
    Note::EFlat,
    Note::AFlat,
    Note::DFlat,
    Note::GFlat,
];

/// Every selectable key, in chromatic order with enharmonic pairs adjacent.
pub const ALL_KEYS: [Note; 17] = [
    Note::C,
    Note::CSharp,
    Note::DFlat,
    Note::D,
    Note::DSharp,
    Note::EFlat,
    Note::E,
    Note::F,
    Note::FSharp,
    Note::GFlat,
    Note::G,
    Note::GSharp,
    Note::AFlat,
    Note::A,
    Note::ASharp,
    Note::BFlat,
    Note::B,
];

/// Equal-tempered playback frequencies in Hz for chromatic positions 0..12,
/// single reference octave, A = 440.
const FREQUENCIES: [f32; 12] = [
    261.63, 277.18, 293.66, 311.13, 329.63, 349.23, 369.99, 392.00, 415.30, 440.00, 466.16, 493.88,
];

/// Selects the spelling table a note belongs to. Both the scale builder and
/// the chord deriver go through this single membership test.
pub fn spelling_for(note: Note) -> &'static [Note; 12] {
    if FLAT_KEYS.contains(&note) {
        &FLAT_SPELLING
    } else {
        &SHARP_SPELLING
    }
}

/// Chromatic position 0..12 of a note within its own spelling table.
pub fn chromatic_index(note: Note) -> usize {
    spelling_for(note)
        .iter()
        .position(|&candidate| candidate == note)
        .expect("note missing from its own spelling table")
}

/// Both spellings of an enharmonic pair map to the identical frequency.
pub fn frequency_of(note: Note) -> f32 {
    FREQUENCIES[chromatic_index(note)]
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::DFlat => "Db",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::EFlat => "Eb",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::GFlat => "Gb",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::AFlat => "Ab",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::BFlat => "Bb",
            Note::B => "B",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleType {
    Major,
    Minor,
}

impl ScaleType {
    pub const ALL: [ScaleType; 2] = [ScaleType::Major, ScaleType::Minor];

    /// Semitone steps between successive degrees; each sequence sums to 12.
    pub fn intervals(self) -> [usize; 7] {
        match self {
            ScaleType::Major => [2, 2, 1, 2, 2, 2, 1],
            ScaleType::Minor => [2, 1, 2, 2, 1, 2, 2],
        }
    }

    /// Diatonic chord quality at each of the seven degrees.
    pub fn qualities(self) -> [ChordQuality; 7] {
        use ChordQuality::{Diminished, Major, Minor};
        match self {
            ScaleType::Major => [Major, Minor, Minor, Major, Major, Minor, Diminished],
            ScaleType::Minor => [Minor, Diminished, Major, Minor, Minor, Major, Major],
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleType::Major => write!(f, "Major"),
            ScaleType::Minor => write!(f, "Minor"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

impl ChordQuality {
    /// Semitone adjustment applied to each scaffold note (root, third, fifth).
    fn adjustments(self) -> [i32; 3] {
        match self {
            ChordQuality::Major => [0, 0, 0],
            ChordQuality::Minor => [0, -1, 0],
            ChordQuality::Diminished => [0, -1, -1],
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordQuality::Major => write!(f, "major"),
            ChordQuality::Minor => write!(f, "minor"),
            ChordQuality::Diminished => write!(f, "diminished"),
        }
    }
}

/// Eight notes: the tonic, six further degrees, and the tonic at the octave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scale {
    pub notes: [Note; 8],
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, note) in self.notes.iter().enumerate() {
            if position > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

/// Root, third and fifth of one diatonic chord.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triad {
    pub notes: [Note; 3],
}

impl fmt::Display for Triad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.notes[0], self.notes[1], self.notes[2])
    }
}

pub fn build_scale(key: Note, scale_type: ScaleType) -> Scale {
    let spelling = spelling_for(key);
    let mut index = chromatic_index(key);

    let mut notes = [key; 8];
    for (degree, interval) in scale_type.intervals().iter().enumerate() {
        index = (index + interval) % 12;
        notes[degree + 1] = spelling[index];
    }

    Scale { notes }
}

/// Chromatic offsets of the unmodified scaffold: root, major third, perfect
/// fifth. The quality adjustments flatten this shape into minor and
/// diminished triads.
const SCAFFOLD_OFFSETS: [usize; 3] = [0, 4, 7];

pub fn build_triad(scale: &Scale, degree: usize, quality: ChordQuality) -> Triad {
    // Only the seven proper degrees are indexed; the octave note never is.
    let root = scale.notes[degree % 7];
    let root_spelling = spelling_for(root);
    let root_index = chromatic_index(root);
    let adjustments = quality.adjustments();

    let mut notes = [root; 3];
    for position in 0..3 {
        let scaffold = root_spelling[(root_index + SCAFFOLD_OFFSETS[position]) % 12];

        // Each scaffold note resolves its own spelling table before the
        // adjustment wraps it around the chromatic circle.
        let spelling = spelling_for(scaffold);
        let index = chromatic_index(scaffold) as i32 + adjustments[position];
        notes[position] = spelling[index.rem_euclid(12) as usize];
    }

    Triad { notes }
}

/// Fixed degree labels, major-scale casing in both modes.
pub const ROMAN_NUMERALS: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "vii°"];

/// One row of the rendered progression.
#[derive(Clone, Copy, Debug)]
pub struct DegreeChord {
    pub numeral: &'static str,
    pub root: Note,
    pub quality: ChordQuality,
    pub triad: Triad,
}

/// The full seven-degree progression for a key and scale type.
pub fn build_progression(key: Note, scale_type: ScaleType) -> Vec<DegreeChord> {
    let scale = build_scale(key, scale_type);
    let qualities = scale_type.qualities();

    (0..7)
        .map(|degree| DegreeChord {
            numeral: ROMAN_NUMERALS[degree],
            root: scale.notes[degree],
            quality: qualities[degree],
            triad: build_triad(&scale, degree, qualities[degree]),
        })
        .collect()
}
