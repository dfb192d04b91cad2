// Shared fixtures for host-side tests: a call-recording surface and small
// timeline builders.

#![allow(dead_code)]

use keyfall_core::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ClearRect(f64, f64, f64, f64),
    FillRect(f64, f64, f64, f64),
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f64),
    GlobalAlpha(f64),
    Font(String),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Quad(f64, f64, f64, f64),
    ClosePath,
    Fill,
    Stroke,
    FillText(String, f64, f64),
}

#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::FillText(t, _, _) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for Recorder {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(Call::ClearRect(x, y, w, h));
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(Call::FillRect(x, y, w, h));
    }
    fn set_fill_style(&mut self, css: &str) {
        self.calls.push(Call::FillStyle(css.to_string()));
    }
    fn set_stroke_style(&mut self, css: &str) {
        self.calls.push(Call::StrokeStyle(css.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.calls.push(Call::LineWidth(width));
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.calls.push(Call::GlobalAlpha(alpha));
    }
    fn set_font(&mut self, font: &str) {
        self.calls.push(Call::Font(font.to_string()));
    }
    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::LineTo(x, y));
    }
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.calls.push(Call::Quad(cpx, cpy, x, y));
    }
    fn close_path(&mut self) {
        self.calls.push(Call::ClosePath);
    }
    fn fill(&mut self) {
        self.calls.push(Call::Fill);
    }
    fn stroke(&mut self) {
        self.calls.push(Call::Stroke);
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.calls.push(Call::FillText(text.to_string(), x, y));
    }
}

pub fn note(time: f64, duration: f64, midi: u8, track: TrackId) -> Event {
    const STEPS: [(Step, i8); 12] = [
        (Step::C, 0),
        (Step::C, 1),
        (Step::D, 0),
        (Step::D, 1),
        (Step::E, 0),
        (Step::F, 0),
        (Step::F, 1),
        (Step::G, 0),
        (Step::G, 1),
        (Step::A, 0),
        (Step::A, 1),
        (Step::B, 0),
    ];
    let (step, alter) = STEPS[(midi % 12) as usize];
    Event::Note(Note {
        time,
        duration,
        midi_note: midi,
        track,
        pitch: Pitch {
            step,
            octave: (midi / 12) as i8 - 1,
            alter,
        },
        velocity: 80,
    })
}

pub fn measure(time: f64, number: u32) -> Event {
    Event::Measure(Measure { time, number })
}

/// Track 0 is the right hand, track 1 the left hand, track 2 unassigned.
pub fn two_hands() -> HandSettings {
    let mut settings = HandSettings::default();
    settings.insert(0, TrackSetting { hand: Hand::Right });
    settings.insert(1, TrackSetting { hand: Hand::Left });
    settings.insert(2, TrackSetting { hand: Hand::None });
    settings
}

/// A steady scale: one measure every two seconds, two notes per second
/// alternating hands, `seconds` long.
pub fn scale_song(seconds: u32) -> Vec<Event> {
    let mut items = Vec::new();
    for i in 0..seconds * 2 {
        let t = i as f64 * 0.5;
        if i % 4 == 0 {
            items.push(measure(t, i / 4 + 1));
        }
        let midi = 48 + (i % 24) as u8;
        items.push(note(t, 0.4, midi, i % 2));
    }
    items
}

pub fn falling<'a>(
    time: f64,
    items: &'a [Event],
    settings: &'a HandSettings,
) -> GivenState<'a> {
    GivenState {
        time,
        visualization: Visualization::FallingNotes,
        width: 1040.0,
        height: 600.0,
        pps: 100.0,
        hand: HandFilter::Both,
        hand_settings: settings,
        show_particles: false,
        items,
    }
}

pub fn sheet<'a>(time: f64, items: &'a [Event], settings: &'a HandSettings) -> GivenState<'a> {
    GivenState {
        visualization: Visualization::Sheet,
        ..falling(time, items, settings)
    }
}
