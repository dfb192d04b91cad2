use crate::constants::FPS_SMOOTHING;
use crate::dom;
use crate::overlay::ClefIcons;
use crate::scrub::ScrubBar;
use crate::settings::VisualizerSettings;
use crate::surface::CanvasSurface;
use instant::Instant;
use keyfall_core::{GivenState, HandSettings, PianoRange, Renderer, Timeline};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Everything one canvas needs between frames.
pub struct FrameContext {
    pub renderer: Renderer,
    pub song: Timeline,
    pub hand_settings: HandSettings,
    pub settings: VisualizerSettings,

    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
    pub clefs: ClefIcons,
    pub scrub: Option<ScrubBar>,

    pub last_instant: Option<Instant>,
    pub fps: Option<f64>,
}

impl FrameContext {
    pub fn new(canvas: web::HtmlCanvasElement, surface: CanvasSurface, renderer: Renderer) -> Self {
        Self {
            renderer,
            song: Timeline::default(),
            hand_settings: HandSettings::default(),
            settings: VisualizerSettings::default(),
            canvas,
            surface,
            clefs: ClefIcons::find(),
            scrub: None,
            last_instant: None,
            fps: None,
        }
    }

    pub fn set_song(&mut self, song: Timeline) {
        if let Some(scrub) = &mut self.scrub {
            scrub.set_song(song.items());
        }
        self.song = song;
        self.renderer.reset_view();
        self.apply_keyboard_range();
    }

    pub fn set_settings(&mut self, settings: VisualizerSettings) {
        self.settings = settings;
        self.apply_keyboard_range();
    }

    fn apply_keyboard_range(&mut self) {
        let range = match (self.settings.fit_keyboard, self.song.note_range()) {
            (true, Some((low, high))) => PianoRange::for_notes(low, high),
            _ => PianoRange::default(),
        };
        if range != self.renderer.piano_range() {
            log::info!("[frame] keyboard {}..={}", range.low, range.high);
            self.renderer.set_range(range);
        }
    }

    /// Draw one frame at song time `time` (seconds).
    pub fn frame(&mut self, time: f64) {
        self.measure_frame_rate();

        let state = GivenState {
            time,
            visualization: self.settings.visualization,
            width: self.canvas.width() as f64,
            height: self.canvas.height() as f64,
            pps: self.settings.pps,
            hand: self.settings.hand,
            hand_settings: &self.hand_settings,
            show_particles: self.settings.show_particles,
            items: self.song.items(),
        };
        self.renderer.render(&state, &mut self.surface);

        self.clefs.place(
            self.settings.visualization,
            self.canvas.height(),
            dom::device_pixel_ratio(),
        );
        if let Some(scrub) = &mut self.scrub {
            scrub.update(time);
        }
    }

    fn measure_frame_rate(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_instant.replace(now) {
            let dt = (now - last).as_secs_f64();
            if dt > 0.0 {
                let fps = match self.fps {
                    Some(prev) => prev + (1.0 / dt - prev) * FPS_SMOOTHING,
                    None => 1.0 / dt,
                };
                self.fps = Some(fps);
                self.renderer.record_frame_rate(fps);
            }
        }
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until `running` is cleared.
/// Song time is read once per frame from `get_time`, the host's
/// authoritative transport clock.
pub fn start_loop(
    frame_ctx: Rc<RefCell<FrameContext>>,
    get_time: js_sys::Function,
    running: Rc<Cell<bool>>,
) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("[frame] loop stopped");
            return;
        }
        match get_time.call0(&JsValue::NULL).map(|v| v.as_f64()) {
            Ok(Some(time)) => frame_ctx.borrow_mut().frame(time),
            Ok(None) => log::error!("[frame] getTime did not return a number"),
            Err(e) => log::error!("[frame] getTime threw: {:?}", e),
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
