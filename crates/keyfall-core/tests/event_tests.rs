use keyfall_core::*;

#[test]
fn notes_and_measures_deserialize_from_tagged_json() {
    let json = r#"[
        {"type": "measure", "time": 0, "number": 1},
        {"type": "note", "time": 1.5, "duration": 0.5, "midiNote": 61, "track": 2,
         "pitch": {"step": "C", "octave": 4, "alter": 1}},
        {"type": "note", "time": 2, "duration": 1, "midiNote": 59, "track": 0,
         "velocity": 96, "pitch": {"step": "B", "octave": 3}}
    ]"#;
    let items: Vec<Event> = serde_json::from_str(json).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Event::Measure(Measure { time: 0.0, number: 1 }));

    let sharp = items[1].as_note().unwrap();
    assert_eq!(sharp.midi_note, 61);
    assert_eq!(sharp.track, 2);
    assert_eq!(sharp.velocity, 0);
    assert_eq!(sharp.pitch.alter, 1);
    assert_eq!(sharp.pitch.staff_row(), 28);

    let natural = items[2].as_note().unwrap();
    assert_eq!(natural.pitch.alter, 0);
    assert_eq!(natural.velocity, 96);
    assert_eq!(natural.pitch.staff_row(), 3 * 7 + 6);
}

#[test]
fn unknown_event_type_is_rejected() {
    let json = r#"{"type": "rest", "time": 1.0, "duration": 1.0}"#;
    assert!(serde_json::from_str::<Event>(json).is_err());
}

#[test]
fn measures_have_no_duration() {
    let m = Event::Measure(Measure { time: 3.0, number: 2 });
    assert_eq!(m.time(), 3.0);
    assert_eq!(m.duration(), 0.0);
    assert!(m.as_note().is_none());
}

#[test]
fn timeline_reports_note_range() {
    let json = r#"[
        {"type": "measure", "time": 0, "number": 1},
        {"type": "note", "time": 0, "duration": 1, "midiNote": 64, "track": 0,
         "pitch": {"step": "E", "octave": 4}},
        {"type": "note", "time": 1, "duration": 1, "midiNote": 43, "track": 1,
         "pitch": {"step": "G", "octave": 2}},
        {"type": "note", "time": 2, "duration": 1, "midiNote": 79, "track": 0,
         "pitch": {"step": "G", "octave": 5}}
    ]"#;
    let timeline = Timeline::new(serde_json::from_str(json).unwrap());
    assert_eq!(timeline.len(), 4);
    assert_eq!(timeline.note_range(), Some((43, 79)));

    let only_measures = Timeline::new(vec![Event::Measure(Measure { time: 0.0, number: 1 })]);
    assert_eq!(only_measures.note_range(), None);
    assert!(Timeline::default().is_empty());
}
