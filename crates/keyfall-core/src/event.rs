//! Timeline events produced by the external song parser.
//!
//! Events are immutable once handed to the engine. The engine only reads
//! them and relies on the timeline being sorted ascending by `time`.

use serde::{Deserialize, Serialize};

pub type TrackId = u32;

/// Diatonic step of a written pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    /// Position of the step within an octave, C = 0 .. B = 6.
    #[inline]
    pub fn index(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 1,
            Step::E => 2,
            Step::F => 3,
            Step::G => 4,
            Step::A => 5,
            Step::B => 6,
        }
    }
}

/// Written pitch of a note.
///
/// - `octave` uses scientific numbering (C4 is middle C)
/// - `alter` is the chromatic alteration in semitones (1 sharp, -1 flat)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitch {
    pub step: Step,
    pub octave: i8,
    #[serde(default)]
    pub alter: i8,
}

impl Pitch {
    /// Vertical staff row: one row per diatonic step, seven per octave.
    #[inline]
    pub fn staff_row(&self) -> i32 {
        self.octave as i32 * 7 + self.step.index()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub time: f64,
    pub duration: f64,
    pub midi_note: u8,
    pub track: TrackId,
    pub pitch: Pitch,
    #[serde(default)]
    pub velocity: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub time: f64,
    pub number: u32,
}

/// One entry of the song timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    Note(Note),
    Measure(Measure),
}

impl Event {
    #[inline]
    pub fn time(&self) -> f64 {
        match self {
            Event::Note(n) => n.time,
            Event::Measure(m) => m.time,
        }
    }

    /// Measures have no extent on the time axis.
    #[inline]
    pub fn duration(&self) -> f64 {
        match self {
            Event::Note(n) => n.duration,
            Event::Measure(_) => 0.0,
        }
    }

    #[inline]
    pub fn as_note(&self) -> Option<&Note> {
        match self {
            Event::Note(n) => Some(n),
            Event::Measure(_) => None,
        }
    }
}

/// Owned, time-sorted event sequence.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    items: Vec<Event>,
}

impl Timeline {
    pub fn new(items: Vec<Event>) -> Self {
        debug_assert!(
            items.windows(2).all(|w| w[0].time() <= w[1].time()),
            "timeline must be sorted by time"
        );
        Self { items }
    }

    #[inline]
    pub fn items(&self) -> &[Event] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Lowest and highest MIDI note played anywhere in the timeline.
    pub fn note_range(&self) -> Option<(u8, u8)> {
        self.items
            .iter()
            .filter_map(Event::as_note)
            .fold(None, |acc, n| match acc {
                None => Some((n.midi_note, n.midi_note)),
                Some((lo, hi)) => Some((lo.min(n.midi_note), hi.max(n.midi_note))),
            })
    }
}
