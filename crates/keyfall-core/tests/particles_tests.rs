// Host-side tests for the pooled particle system.

mod common;

use common::{Call, Recorder};
use keyfall_core::particles::ParticleParams;
use keyfall_core::*;

fn frame(system: &mut ParticleSystem, sounding: &[(u8, usize)]) {
    system.begin_frame();
    for &(midi, lane) in sounding {
        system.mark_active(midi, lane);
    }
    system.end_frame();
    system.advance();
}

fn active_total(system: &ParticleSystem) -> usize {
    (0..128u8).map(|m| system.group(m).count()).sum()
}

#[test]
fn group_grows_by_one_per_frame_up_to_quota() {
    let mut system = ParticleSystem::default();
    for n in 1..=20 {
        frame(&mut system, &[(60, 39)]);
        assert_eq!(system.group(60).count(), n.min(12));
    }
    assert_eq!(system.pool_size(), 12);
    assert_eq!(system.unused_len(), 0);
}

#[test]
fn repeated_marks_in_one_frame_count_once() {
    let mut system = ParticleSystem::default();
    system.begin_frame();
    for _ in 0..5 {
        system.mark_active(64, 43);
    }
    system.end_frame();
    assert_eq!(system.group(64).count(), 1);
}

#[test]
fn released_particles_are_reused() {
    let mut system = ParticleSystem::default();
    for _ in 0..12 {
        frame(&mut system, &[(60, 39)]);
    }
    frame(&mut system, &[]);
    assert!(!system.is_active(60));
    assert_eq!(system.active_groups(), 0);
    assert_eq!(system.unused_len(), 12);

    for _ in 0..12 {
        frame(&mut system, &[(72, 51)]);
    }
    assert_eq!(system.pool_size(), 12);
    assert_eq!(system.unused_len(), 0);
    assert!(system.group(72).all(|p| p.lane == 51));
}

#[test]
fn pool_is_conserved_and_bounded() {
    let mut system = ParticleSystem::default();
    let mut last_pool = 0;
    for f in 0..700usize {
        // three notes sound at once; the chord shifts up a key every 7 frames
        let base = f / 7;
        let sounding: Vec<(u8, usize)> = (0..3)
            .map(|k| (60 + ((base + k) % 10) as u8, (base + k) % 10))
            .collect();
        frame(&mut system, &sounding);

        let pool = system.pool_size();
        assert!(pool >= last_pool, "pool shrank at frame {f}");
        assert_eq!(pool, system.unused_len() + active_total(&system));
        assert!(system.active_groups() <= 3);
        assert!(pool <= 3 * 12, "pool {pool} at frame {f}");
        last_pool = pool;
    }
}

#[test]
fn melody_hands_particles_from_note_to_note() {
    let mut system = ParticleSystem::default();
    for (i, midi) in [60u8, 62, 64, 65, 67, 69, 71, 72].into_iter().enumerate() {
        for _ in 0..20 {
            frame(&mut system, &[(midi, i)]);
            assert_eq!(system.active_groups(), 1);
            assert!(system.pool_size() <= 12, "pool {} for {midi}", system.pool_size());
        }
    }
    assert_eq!(system.pool_size(), 12);
    // the outgoing note's particles move to the next lane
    assert!(system.group(72).all(|p| p.lane == 7));
}

#[test]
fn release_all_empties_every_group() {
    let mut system = ParticleSystem::default();
    for _ in 0..4 {
        frame(&mut system, &[(60, 39), (64, 43)]);
    }
    system.release_all();
    assert_eq!(system.active_groups(), 0);
    assert_eq!(system.unused_len(), system.pool_size());
}

#[test]
fn first_step_moves_by_velocity_and_fades() {
    let mut system = ParticleSystem::default();
    frame(&mut system, &[(60, 39)]);
    let p = system.group(60).next().unwrap();
    assert_eq!(p.pos, p.vel);
    assert_eq!(p.opacity, 1.0 - p.vel.x);
    assert!((0.8..2.4).contains(&p.vel.y));
    assert!((-0.03..0.03).contains(&p.vel.x));
    assert!((1.5..3.0).contains(&p.size));
    assert!((0.0..1.0).contains(&p.offset_percent));
}

#[test]
fn particles_respawn_after_travel() {
    let params = ParticleParams {
        travel_px: 30.0,
        ..ParticleParams::default()
    };
    let mut system = ParticleSystem::new(params);
    for _ in 0..400 {
        frame(&mut system, &[(60, 39)]);
        for p in system.group(60) {
            assert!(p.pos.y <= 30.0);
            assert!(p.opacity > 0.0);
        }
    }
}

#[test]
fn same_seed_gives_same_particles() {
    let mut a = ParticleSystem::default();
    let mut b = ParticleSystem::default();
    for _ in 0..6 {
        frame(&mut a, &[(60, 39)]);
        frame(&mut b, &[(60, 39)]);
    }
    assert!(a.group(60).eq(b.group(60)));
}

#[test]
fn draw_emits_one_square_per_particle() {
    let lanes = compute_lanes(1040.0, PianoRange::default());
    let mut system = ParticleSystem::default();

    let mut rec = Recorder::default();
    system.draw(&mut rec, &lanes, 600.0);
    assert!(rec.calls.is_empty());

    for _ in 0..5 {
        frame(&mut system, &[(60, 39), (61, 40)]);
    }
    let mut rec = Recorder::default();
    system.draw(&mut rec, &lanes, 600.0);
    assert_eq!(rec.count(|c| matches!(c, Call::FillRect(..))), 10);
    assert_eq!(rec.calls.last(), Some(&Call::GlobalAlpha(1.0)));

    for call in &rec.calls {
        if let Call::FillRect(x, y, _, _) = call {
            assert!(*y <= 600.0 && *y > 400.0);
            assert!(*x > lanes[38].left && *x < lanes[41].left + lanes[41].width);
        }
    }
}
