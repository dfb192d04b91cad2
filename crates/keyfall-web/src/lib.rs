#![cfg(target_arch = "wasm32")]
use keyfall_core::{layout, Event, HandSettings, Renderer, RendererConfig, Timeline};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod overlay;
mod scrub;
mod settings;
mod surface;

use frame::FrameContext;
use settings::VisualizerSettings;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("keyfall-web starting");
    Ok(())
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Handle the host keeps for one canvas.
#[wasm_bindgen]
pub struct Visualizer {
    ctx: Rc<RefCell<FrameContext>>,
    // run flag of the current animation loop; each start gets a fresh one
    running: RefCell<Option<Rc<Cell<bool>>>>,
}

impl Visualizer {
    fn init(canvas_id: &str) -> anyhow::Result<Visualizer> {
        let canvas: web::HtmlCanvasElement = dom::element_by_id(canvas_id)?;
        let surface = surface::CanvasSurface(dom::canvas_2d(&canvas)?);
        dom::track_canvas_size(&canvas);

        let config = RendererConfig {
            debug_overlay: dom::is_dev_host(),
            ..RendererConfig::default()
        };
        if config.overlay_enabled() {
            log::info!("[init] debug overlay on");
        }
        let ctx = FrameContext::new(canvas, surface, Renderer::new(config));
        Ok(Visualizer {
            ctx: Rc::new(RefCell::new(ctx)),
            running: RefCell::new(None),
        })
    }
}

#[wasm_bindgen]
impl Visualizer {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<Visualizer, JsValue> {
        Self::init(canvas_id).map_err(|e| {
            log::error!("init error: {:?}", e);
            js_err(e)
        })
    }

    /// Replace the timeline. `json` is an array of tagged events, sorted by
    /// time, as produced by the host's song parser.
    #[wasm_bindgen(js_name = setSong)]
    pub fn set_song(&self, json: &str) -> Result<(), JsValue> {
        let mut items: Vec<Event> = serde_json::from_str(json).map_err(js_err)?;
        if !items.windows(2).all(|w| w[0].time() <= w[1].time()) {
            log::warn!("[song] events not sorted by time; sorting");
            items.sort_by(|a, b| a.time().total_cmp(&b.time()));
        }
        log::info!("[song] {} events", items.len());
        self.ctx.borrow_mut().set_song(Timeline::new(items));
        Ok(())
    }

    /// Per-track hand assignment, e.g. `{"0": {"hand": "right"}, "1": {"hand": "left"}}`.
    #[wasm_bindgen(js_name = setHandSettings)]
    pub fn set_hand_settings(&self, json: &str) -> Result<(), JsValue> {
        let hands: HandSettings = serde_json::from_str(json).map_err(js_err)?;
        self.ctx.borrow_mut().hand_settings = hands;
        Ok(())
    }

    #[wasm_bindgen(js_name = setSettings)]
    pub fn set_settings(&self, json: &str) -> Result<(), JsValue> {
        let settings = VisualizerSettings::from_json(json).map_err(js_err)?;
        self.ctx.borrow_mut().set_settings(settings);
        Ok(())
    }

    /// Draw a single frame at `time` seconds. Hosts that run their own
    /// animation loop call this instead of `start`.
    pub fn render(&self, time: f64) {
        self.ctx.borrow_mut().frame(time);
    }

    /// Run the animation loop, reading song time from `get_time()` each frame.
    pub fn start(&self, get_time: js_sys::Function) {
        let mut current = self.running.borrow_mut();
        if current.as_ref().is_some_and(|r| r.get()) {
            log::warn!("[frame] loop already running; ignoring start");
            return;
        }
        let running = Rc::new(Cell::new(true));
        *current = Some(running.clone());
        frame::start_loop(self.ctx.clone(), get_time, running);
    }

    pub fn stop(&self) {
        if let Some(running) = self.running.borrow_mut().take() {
            running.set(false);
        }
    }

    /// Show a measure strip inside the element `container_id`.
    #[wasm_bindgen(js_name = attachScrubBar)]
    pub fn attach_scrub_bar(&self, container_id: &str, px_per_sec: Option<f64>) -> Result<(), JsValue> {
        let container: web::HtmlElement = dom::element_by_id(container_id).map_err(js_err)?;
        let px_per_sec = px_per_sec.unwrap_or(constants::SCRUB_PX_PER_SEC_DEFAULT);
        let mut scrub = scrub::ScrubBar::new(container, px_per_sec).map_err(js_err)?;
        let mut ctx = self.ctx.borrow_mut();
        scrub.set_song(ctx.song.items());
        ctx.scrub = Some(scrub);
        Ok(())
    }

    /// Layout metadata for `mode` at the current canvas size, as JSON.
    #[wasm_bindgen(js_name = overlayLayout)]
    pub fn overlay_layout(&self, mode: &str) -> Result<String, JsValue> {
        let ctx = self.ctx.borrow();
        let width = ctx.canvas.width() as f64;
        let height = ctx.canvas.height() as f64;
        let layout = layout::overlay_layout_for(mode, width, height).map_err(js_err)?;
        serde_json::to_string(&layout).map_err(js_err)
    }

    /// `[x, y, height]` of an overlay icon in canvas pixels.
    #[wasm_bindgen(js_name = iconAnchor)]
    pub fn icon_anchor(&self, icon: &str) -> Result<Vec<f64>, JsValue> {
        let icon: layout::Icon = icon.parse().map_err(js_err)?;
        let height = self.ctx.borrow().canvas.height() as f64;
        let anchor = layout::icon_anchor(icon, height);
        Ok(vec![anchor.x, anchor.y, anchor.height])
    }
}
