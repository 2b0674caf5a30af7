//! Minimal musical document the sequencer renders into.
//!
//! A `Piece` owns a set of tracks, each bound to an instrument, and converts
//! beat positions to seconds using its tempo. Notes are stored in seconds so
//! the audio side can schedule them directly.

use crate::constants::{DEFAULT_BEATS_PER_BAR, DEFAULT_BPM, DEFAULT_NOTE_VAL};
use crate::music::Note;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrackId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PieceError {
    #[error("track {0:?} does not exist")]
    UnknownTrack(TrackId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instrument {
    Bass,
    Lead,
    Drums,
}

#[derive(Clone, Copy, Debug)]
pub struct Tempo {
    pub beats_per_min: f64,
    pub beats_per_bar: u32,
    pub note_val: u32,
}

impl Default for Tempo {
    fn default() -> Self {
        Self {
            beats_per_min: DEFAULT_BPM,
            beats_per_bar: DEFAULT_BEATS_PER_BAR,
            note_val: DEFAULT_NOTE_VAL,
        }
    }
}

/// A note placed on a track. Times are in seconds from the loop start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteEvent {
    pub note: Note,
    pub start_sec: f64,
    pub duration_sec: f64,
}

#[derive(Clone, Debug)]
pub struct Track {
    pub instrument: Instrument,
    notes: Vec<NoteEvent>,
}

impl Track {
    pub fn new(instrument: Instrument) -> Self {
        Self {
            instrument,
            notes: Vec::new(),
        }
    }

    pub fn notes(&self) -> &[NoteEvent] {
        &self.notes
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    // Keeps notes ordered by start time; equal starts keep insertion order.
    fn insert(&mut self, ev: NoteEvent) {
        let idx = self.notes.partition_point(|n| n.start_sec <= ev.start_sec);
        self.notes.insert(idx, ev);
    }
}

/// A note resolved to an absolute transport time by `Piece::notes_in_window`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledNote {
    pub track: TrackId,
    pub instrument: Instrument,
    pub note: Note,
    pub time_sec: f64,
    pub duration_sec: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Piece {
    pub tempo: Tempo,
    /// Loop length in seconds; 0 disables looping.
    pub loop_time: f64,
    tracks: Vec<Track>,
}

impl Piece {
    pub fn new(tempo: Tempo) -> Self {
        Self {
            tempo,
            loop_time: 0.0,
            tracks: Vec::new(),
        }
    }

    pub fn add_track(&mut self, track: Track) -> TrackId {
        self.tracks.push(track);
        TrackId(self.tracks.len() - 1)
    }

    pub fn track(&self, id: TrackId) -> Result<&Track, PieceError> {
        self.tracks.get(id.0).ok_or(PieceError::UnknownTrack(id))
    }

    pub fn tracks(&self) -> impl Iterator<Item = (TrackId, &Track)> {
        self.tracks.iter().enumerate().map(|(i, t)| (TrackId(i), t))
    }

    pub fn clear_track(&mut self, id: TrackId) -> Result<(), PieceError> {
        self.tracks
            .get_mut(id.0)
            .ok_or(PieceError::UnknownTrack(id))?
            .clear();
        Ok(())
    }

    /// Seconds spanned by `beats` beats at the current tempo.
    pub fn beat_time(&self, beats: f64) -> f64 {
        beats * 60.0 / self.tempo.beats_per_min
    }

    /// Place a note at a beat offset with a duration given in beats.
    pub fn make_note(
        &mut self,
        id: TrackId,
        beat: f64,
        note: Note,
        duration_beats: f64,
    ) -> Result<(), PieceError> {
        let ev = NoteEvent {
            note,
            start_sec: self.beat_time(beat),
            duration_sec: self.beat_time(duration_beats),
        };
        self.tracks
            .get_mut(id.0)
            .ok_or(PieceError::UnknownTrack(id))?
            .insert(ev);
        Ok(())
    }

    pub fn note_count(&self) -> usize {
        self.tracks.iter().map(|t| t.notes.len()).sum()
    }

    /// Every note starting in `[t0, t1)` of transport time, with the loop
    /// unrolled, ordered by time.
    pub fn notes_in_window(&self, t0: f64, t1: f64) -> SmallVec<[ScheduledNote; 16]> {
        let mut out = SmallVec::new();
        if !(t1 > t0) || t0 < 0.0 {
            return out;
        }
        let (first, last) = if self.loop_time > 0.0 {
            (
                (t0 / self.loop_time).floor() as u64,
                (t1 / self.loop_time).floor() as u64,
            )
        } else {
            (0, 0)
        };
        for k in first..=last {
            let base = k as f64 * self.loop_time;
            for (id, track) in self.tracks() {
                for n in track.notes() {
                    let time_sec = base + n.start_sec;
                    if time_sec >= t0 && time_sec < t1 {
                        out.push(ScheduledNote {
                            track: id,
                            instrument: track.instrument,
                            note: n.note,
                            time_sec,
                            duration_sec: n.duration_sec,
                        });
                    }
                }
            }
        }
        out.sort_by(|a, b| a.time_sec.total_cmp(&b.time_sec));
        out
    }
}
