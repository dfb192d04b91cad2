use crate::error::{Result, VizError};
use crate::event::{Event, Note, TrackId};
use crate::state::GivenState;
use crate::viewport::Visualization;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Hand a track is assigned to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Left,
    Right,
    #[default]
    None,
}

/// Global hand selection from the practice UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandFilter {
    #[default]
    Both,
    Left,
    Right,
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSetting {
    pub hand: Hand,
}

pub type HandSettings = FnvHashMap<TrackId, TrackSetting>;

impl FromStr for Hand {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Hand::Left),
            "right" => Ok(Hand::Right),
            "none" => Ok(Hand::None),
            other => Err(VizError::UnknownHand(other.to_string())),
        }
    }
}

impl FromStr for HandFilter {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "both" => Ok(HandFilter::Both),
            "left" => Ok(HandFilter::Left),
            "right" => Ok(HandFilter::Right),
            "none" => Ok(HandFilter::None),
            other => Err(VizError::UnknownHand(other.to_string())),
        }
    }
}

/// Assigned hand of a track; tracks missing from the settings are unassigned.
#[inline]
pub fn hand_for_track(settings: &HandSettings, track: TrackId) -> Hand {
    settings.get(&track).map(|s| s.hand).unwrap_or_default()
}

/// Whether an event is eligible for display under the current hand filter
/// and visualization mode.
pub fn is_matching_hand(item: &Event, state: &GivenState) -> bool {
    match item {
        Event::Measure(_) => state.visualization == Visualization::FallingNotes,
        Event::Note(note) => note_matches(note, state.hand, state.hand_settings),
    }
}

#[inline]
pub(crate) fn note_matches(note: &Note, filter: HandFilter, settings: &HandSettings) -> bool {
    match (filter, hand_for_track(settings, note.track)) {
        (HandFilter::Both, _) => true,
        (HandFilter::Left, Hand::Left) => true,
        (HandFilter::Right, Hand::Right) => true,
        _ => false,
    }
}

/// Which of the two grand-staff systems a note is written on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Staff {
    Treble,
    Bass,
}

/// Left hand reads from the bass staff and right hand from the treble staff;
/// unassigned notes split at middle C.
pub fn staff_for(note: &Note, settings: &HandSettings) -> Staff {
    match hand_for_track(settings, note.track) {
        Hand::Left => Staff::Bass,
        Hand::Right => Staff::Treble,
        Hand::None if note.midi_note < 60 => Staff::Bass,
        Hand::None => Staff::Treble,
    }
}
