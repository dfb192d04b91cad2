use crate::config::RendererConfig;
use crate::draw::Surface;
use crate::lanes::{Lane, LaneCache, PianoRange};
use crate::particles::ParticleSystem;
use crate::state::{DerivedState, GivenState};
use crate::viewport::{Projection, Viewport, Visualization};
use crate::visible::ViewCursor;

mod debug;
mod falling;
mod sheet;

/// Frame renderer bound to one drawing surface.
///
/// Owns the only state that survives between frames: the lane cache, the
/// visible-range cursor and the particle pool. Two surfaces need two
/// renderers.
pub struct Renderer {
    config: RendererConfig,
    lanes: LaneCache,
    particles: ParticleSystem,
    cursor: ViewCursor,
    frame_rate: Option<f64>,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Self {
        let lanes = LaneCache::new(config.range.unwrap_or_default());
        let particles = ParticleSystem::new(config.particle_params());
        Self {
            config,
            lanes,
            particles,
            cursor: ViewCursor::new(),
            frame_rate: None,
        }
    }

    /// Forget the visible-range cursor. Call when the timeline is replaced,
    /// since a song refilled into the same buffer looks unchanged to it.
    pub fn reset_view(&mut self) {
        self.cursor.reset();
    }

    pub fn set_range(&mut self, range: PianoRange) {
        let range = range.normalized();
        self.config.range = Some(range);
        self.lanes.set_range(range);
    }

    pub fn piano_range(&self) -> PianoRange {
        self.lanes.range()
    }

    pub fn set_debug_overlay(&mut self, enabled: bool) {
        self.config.debug_overlay = enabled;
    }

    /// Frame rate measured by the host, shown in the debug overlay.
    pub fn record_frame_rate(&mut self, fps: f64) {
        self.frame_rate = Some(fps);
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// Lane layout for a canvas width, without rendering.
    pub fn lanes(&mut self, width: f64) -> &[Lane] {
        self.lanes.lanes(width)
    }

    /// Per-frame derived state, without rendering.
    pub fn derive(&mut self, state: &GivenState) -> DerivedState<'_> {
        DerivedState {
            lanes: self.lanes.lanes(state.width),
            viewport: Viewport::compute(state),
        }
    }

    /// Draw one frame: derive lanes and viewport, clear, draw the active
    /// visualization, then the optional debug overlay.
    pub fn render<S: Surface + ?Sized>(&mut self, state: &GivenState, ctx: &mut S) {
        let projection = Projection::new(state);
        let range = self.cursor.range(state.items, &projection);
        let piano = self.lanes.range();
        let derived = DerivedState {
            lanes: self.lanes.lanes(state.width),
            viewport: projection.viewport,
        };

        ctx.clear_rect(0.0, 0.0, state.width, state.height);
        match state.visualization {
            Visualization::FallingNotes => falling::draw(
                ctx,
                state,
                &derived,
                projection,
                range.clone(),
                piano,
                &mut self.particles,
            ),
            Visualization::Sheet => {
                // no lanes in sheet mode, so nothing can stay sounding
                self.particles.release_all();
                sheet::draw(ctx, state, projection, range.clone());
            }
        }

        if self.config.overlay_enabled() {
            debug::draw(ctx, state, &derived, projection, range, self.frame_rate);
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}
