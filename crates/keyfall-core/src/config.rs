use crate::constants::{PARTICLES_PER_NOTE, PARTICLE_SEED, PARTICLE_TRAVEL_PX};
use crate::lanes::PianoRange;
use crate::particles::ParticleParams;

/// Construction-time settings for a [`Renderer`](crate::render::Renderer).
///
/// - `particles_per_note`: particle quota of each sounding note
/// - `particle_travel_px`: how far a particle rises before it respawns
/// - `particle_seed`: seed for particle velocities and offsets
/// - `debug_overlay`: draw frame telemetry (ignored in release builds)
/// - `range`: keyboard range; `None` shows all 88 keys
#[derive(Clone, Debug)]
pub struct RendererConfig {
    pub particles_per_note: usize,
    pub particle_travel_px: f32,
    pub particle_seed: u64,
    pub debug_overlay: bool,
    pub range: Option<PianoRange>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            particles_per_note: PARTICLES_PER_NOTE,
            particle_travel_px: PARTICLE_TRAVEL_PX,
            particle_seed: PARTICLE_SEED,
            debug_overlay: false,
            range: None,
        }
    }
}

impl RendererConfig {
    pub fn particle_params(&self) -> ParticleParams {
        ParticleParams {
            per_note: self.particles_per_note,
            travel_px: self.particle_travel_px,
            seed: self.particle_seed,
        }
    }

    /// Whether the debug overlay is drawn: requested, and not a release build.
    #[inline]
    pub fn overlay_enabled(&self) -> bool {
        self.debug_overlay && cfg!(debug_assertions)
    }
}
