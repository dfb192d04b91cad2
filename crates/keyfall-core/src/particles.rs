//! Pooled particle effect for currently sounding notes.
//!
//! Each MIDI note that is sounding owns a small group of particles that rise
//! from the bottom of its lane. Groups are keyed by MIDI note; when a note
//! stops sounding its particles go back to a shared free list. The arena only
//! ever grows, and particles that finish their travel are reset in place, so
//! a steady state allocates nothing.

use crate::color::PARTICLE;
use crate::constants::{
    PARTICLES_PER_NOTE, PARTICLE_DX_RANGE, PARTICLE_DY_RANGE, PARTICLE_SEED, PARTICLE_SIZE_RANGE,
    PARTICLE_TRAVEL_PX,
};
use crate::draw::{circle, Surface};
use crate::lanes::Lane;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

/// One particle. `pos` is the drift from the spawn point (y measured upwards
/// from the canvas bottom) and `vel` the constant per-frame step.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub lane: usize,
    pub pos: Vec2,
    pub vel: Vec2,
    pub opacity: f32,
    pub size: f32,
    pub offset_percent: f32,
}

impl Particle {
    #[inline]
    fn respawn(&mut self) {
        self.pos = Vec2::ZERO;
        self.opacity = 1.0;
    }
}

/// Tuning for a particle system.
#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub per_note: usize,
    pub travel_px: f32,
    pub seed: u64,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            per_note: PARTICLES_PER_NOTE,
            travel_px: PARTICLE_TRAVEL_PX,
            seed: PARTICLE_SEED,
        }
    }
}

type Group = SmallVec<[usize; PARTICLES_PER_NOTE]>;

pub struct ParticleSystem {
    params: ParticleParams,
    rng: StdRng,
    particles: Vec<Particle>,
    unused: Vec<usize>,
    active: FnvHashMap<u8, Group>,
    marks: [u64; 128],
    marked: Vec<(u8, usize)>,
    frame: u64,
}

impl ParticleSystem {
    pub fn new(params: ParticleParams) -> Self {
        let rng = StdRng::seed_from_u64(params.seed);
        Self {
            params,
            rng,
            particles: Vec::new(),
            unused: Vec::new(),
            active: FnvHashMap::default(),
            marks: [0; 128],
            marked: Vec::new(),
            frame: 0,
        }
    }

    /// Start collecting the set of sounding notes for a new frame.
    pub fn begin_frame(&mut self) {
        self.frame += 1;
        self.marked.clear();
    }

    /// Record that `midi` is sounding in lane `lane` this frame. Groups are
    /// only created or grown in `end_frame`.
    pub fn mark_active(&mut self, midi: u8, lane: usize) {
        let slot = (midi & 0x7f) as usize;
        if self.marks[slot] == self.frame {
            return;
        }
        self.marks[slot] = self.frame;
        self.marked.push((midi, lane));
    }

    /// Release the groups of every note not marked since `begin_frame`, then
    /// grow each marked group by one particle until it reaches its quota.
    ///
    /// Releasing first lets a note that takes over from another reuse its
    /// particles, so the pool stays within `per_note` times the largest
    /// number of notes sounding together.
    pub fn end_frame(&mut self) {
        let Self {
            active,
            unused,
            marks,
            frame,
            ..
        } = self;
        active.retain(|midi, group| {
            if marks[(*midi & 0x7f) as usize] == *frame {
                true
            } else {
                unused.extend(group.drain(..));
                false
            }
        });

        let marked = std::mem::take(&mut self.marked);
        for &(midi, lane) in &marked {
            let group_len = self.active.get(&midi).map_or(0, |g| g.len());
            if group_len < self.params.per_note {
                let idx = self.acquire(lane);
                self.active.entry(midi).or_default().push(idx);
            }
        }
        self.marked = marked;
    }

    /// Return every particle to the pool.
    pub fn release_all(&mut self) {
        for (_, mut group) in self.active.drain() {
            self.unused.extend(group.drain(..));
        }
    }

    /// Step every active particle by its velocity.
    ///
    /// Opacity decays by the horizontal drift, so leftward particles brighten;
    /// particles past their travel distance or fully faded respawn in place.
    pub fn advance(&mut self) {
        let travel = self.params.travel_px;
        for group in self.active.values() {
            for &idx in group {
                let p = &mut self.particles[idx];
                p.pos += p.vel;
                p.opacity -= p.vel.x;
                if p.pos.y > travel || p.opacity <= 0.0 {
                    p.respawn();
                }
            }
        }
    }

    /// Draw active particles as small squares rising from the canvas bottom.
    pub fn draw<S: Surface + ?Sized>(&self, ctx: &mut S, lanes: &[Lane], height: f64) {
        if self.active.is_empty() {
            return;
        }
        ctx.set_fill_style(&PARTICLE.to_css());
        for group in self.active.values() {
            for &idx in group {
                let p = &self.particles[idx];
                let Some(lane) = lanes.get(p.lane) else {
                    continue;
                };
                let x = lane.left + lane.width * p.offset_percent as f64 + p.pos.x as f64;
                let y = height - p.pos.y as f64;
                ctx.set_global_alpha(p.opacity.clamp(0.0, 1.0) as f64);
                circle(ctx, x, y, p.size as f64);
            }
        }
        ctx.set_global_alpha(1.0);
    }

    fn acquire(&mut self, lane: usize) -> usize {
        if let Some(idx) = self.unused.pop() {
            let p = &mut self.particles[idx];
            p.lane = lane;
            p.respawn();
            return idx;
        }
        let p = Particle {
            lane,
            pos: Vec2::ZERO,
            vel: Vec2::new(
                self.rng.gen_range(PARTICLE_DX_RANGE[0]..PARTICLE_DX_RANGE[1]),
                self.rng.gen_range(PARTICLE_DY_RANGE[0]..PARTICLE_DY_RANGE[1]),
            ),
            opacity: 1.0,
            size: self
                .rng
                .gen_range(PARTICLE_SIZE_RANGE[0]..PARTICLE_SIZE_RANGE[1]),
            offset_percent: self.rng.gen::<f32>(),
        };
        self.particles.push(p);
        log::trace!("[particles] pool grew to {}", self.particles.len());
        self.particles.len() - 1
    }

    /// Total particles ever created (active plus unused).
    pub fn pool_size(&self) -> usize {
        self.particles.len()
    }

    pub fn unused_len(&self) -> usize {
        self.unused.len()
    }

    pub fn active_groups(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, midi: u8) -> bool {
        self.active.contains_key(&midi)
    }

    pub fn group(&self, midi: u8) -> impl Iterator<Item = &Particle> + '_ {
        self.active
            .get(&midi)
            .into_iter()
            .flat_map(move |g| g.iter().map(move |&i| &self.particles[i]))
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(ParticleParams::default())
    }
}
