use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteParseError {
    #[error("empty note name")]
    Empty,
    #[error("unknown note letter in {0:?}")]
    BadLetter(String),
    #[error("missing or invalid octave in {0:?}")]
    BadOctave(String),
    #[error("note {0:?} is outside the MIDI range")]
    OutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scale {0:?}")]
pub struct ScaleParseError(pub String);

/// A pitch identified by its MIDI note number (C4 = 60).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note {
    midi: u8,
}

impl Note {
    pub const fn from_midi(midi: u8) -> Self {
        Self { midi }
    }

    pub fn midi(self) -> u8 {
        self.midi
    }

    /// Note shifted by a number of semitones, saturating at the MIDI range.
    pub fn offset(self, semitones: i32) -> Self {
        let m = (self.midi as i32 + semitones).clamp(0, 127);
        Self { midi: m as u8 }
    }

    pub fn octave(self) -> i32 {
        self.midi as i32 / 12 - 1
    }

    pub fn frequency_hz(self) -> f32 {
        midi_to_hz(self.midi as f32)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", NOTE_NAMES[(self.midi % 12) as usize], self.octave())
    }
}

impl FromStr for Note {
    type Err = NoteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(NoteParseError::Empty)?;
        let pc: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(NoteParseError::BadLetter(s.to_string())),
        };
        let rest = chars.as_str();
        let (accidental, octave_str) = match rest.chars().next() {
            Some('#') => (1, &rest[1..]),
            Some('b') => (-1, &rest[1..]),
            _ => (0, rest),
        };
        let octave: i32 = octave_str
            .parse()
            .map_err(|_| NoteParseError::BadOctave(s.to_string()))?;
        let midi = (octave + 1) * 12 + pc + accidental;
        if !(0..=127).contains(&midi) {
            return Err(NoteParseError::OutOfRange(s.to_string()));
        }
        Ok(Self { midi: midi as u8 })
    }
}

/// Named interval patterns, each spanning one octave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Major,
    NaturalMinor,
    MajorPentatonic,
    MinorPentatonic,
    Blues,
    Chromatic,
}

impl ScaleKind {
    pub fn intervals(self) -> &'static [i32] {
        match self {
            ScaleKind::Major => &[2, 2, 1, 2, 2, 2, 1],
            ScaleKind::NaturalMinor => &[2, 1, 2, 2, 1, 2, 2],
            ScaleKind::MajorPentatonic => &[2, 2, 3, 2, 3],
            ScaleKind::MinorPentatonic => &[3, 2, 2, 3, 2],
            ScaleKind::Blues => &[3, 2, 1, 1, 3, 2],
            ScaleKind::Chromatic => &[1; 12],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "major",
            ScaleKind::NaturalMinor => "natural minor",
            ScaleKind::MajorPentatonic => "major pentatonic",
            ScaleKind::MinorPentatonic => "minor pentatonic",
            ScaleKind::Blues => "blues",
            ScaleKind::Chromatic => "chromatic",
        }
    }
}

impl FromStr for ScaleKind {
    type Err = ScaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(ScaleKind::Major),
            "natural minor" | "minor" => Ok(ScaleKind::NaturalMinor),
            "major pentatonic" => Ok(ScaleKind::MajorPentatonic),
            "minor pentatonic" => Ok(ScaleKind::MinorPentatonic),
            "blues" => Ok(ScaleKind::Blues),
            "chromatic" => Ok(ScaleKind::Chromatic),
            _ => Err(ScaleParseError(s.to_string())),
        }
    }
}

/// Root note followed by every scale step over `num_octaves` octaves,
/// ascending. Two octaves of a pentatonic scale yield 11 notes.
pub fn gen_scale(root: Note, kind: ScaleKind, num_octaves: usize) -> Vec<Note> {
    let intervals = kind.intervals();
    let mut notes = Vec::with_capacity(1 + intervals.len() * num_octaves);
    notes.push(root);
    let mut current = root;
    for _ in 0..num_octaves {
        for &step in intervals {
            current = current.offset(step);
            notes.push(current);
        }
    }
    notes
}

pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
