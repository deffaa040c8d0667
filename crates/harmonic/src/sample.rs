//! Random drag scenarios (seeded, replayable) for cross-checks and benches.
//!
//! Model
//! - Anchors uniform in `[-extent, extent]²`; handles at a random angle and a
//!   length in `[handle_min, handle_max]` from their anchor; the drag target is
//!   drawn the same way around the dragged handle's anchor.
//! - A fraction of draws puts the paired handle straight above/below its far
//!   anchor so the vertical branch is exercised.
//! - Draws whose dragged tangent is within `asin(min_sin)` of the paired tangent
//!   are rejected; those are the ill-conditioned solves.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::bezier::Cubic;
use crate::solve::SolveCase;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub extent: f64,
    pub handle_min: f64,
    pub handle_max: f64,
    /// Probability of a vertical paired tangent.
    pub vertical_frac: f64,
    /// Minimum |sin| of the angle between dragged and paired tangents.
    pub min_sin: f64,
    pub max_attempts: usize,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            extent: 100.0,
            handle_min: 5.0,
            handle_max: 60.0,
            vertical_frac: 0.2,
            min_sin: 0.1,
            max_attempts: 64,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// One drag: a run, which handle moves, and where it moves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    pub case: SolveCase,
    pub cubic: Cubic,
    pub target: Vector2<f64>,
}

/// Draw one well-conditioned drag; `None` if every attempt was rejected.
pub fn draw_drag(cfg: &SampleCfg, tok: ReplayToken) -> Option<DragSample> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.handle_min.max(1e-6);
    let hi = cfg.handle_max.max(lo * (1.0 + 1e-9));
    let ext = cfg.extent.abs().max(1e-6);
    for _ in 0..cfg.max_attempts.max(1) {
        let mut anchor = || Vector2::new(rng.gen_range(-ext..ext), rng.gen_range(-ext..ext));
        let (a0, a3) = (anchor(), anchor());
        let mut handle = |from: Vector2<f64>| {
            let r = rng.gen_range(lo..hi);
            let th = rng.gen_range(0.0..TAU);
            from + Vector2::new(r * th.cos(), r * th.sin())
        };
        let (h1, h2, target_off) = (handle(a0), handle(a3), handle(Vector2::zeros()));
        let case = if rng.gen_bool(0.5) {
            SolveCase::P1Paired
        } else {
            SolveCase::P2Paired
        };
        let mut cubic = Cubic::new(a0, h1, h2, a3);
        if rng.gen_bool(cfg.vertical_frac.clamp(0.0, 1.0)) {
            let (far, paired) = match case {
                SolveCase::P1Paired => (cubic.p3, &mut cubic.p2),
                SolveCase::P2Paired => (cubic.p0, &mut cubic.p1),
            };
            let len = (*paired - far).norm();
            let sign = if paired.y >= far.y { 1.0 } else { -1.0 };
            *paired = far + Vector2::new(0.0, sign * len);
        }
        let target = case.anchor(&cubic) + target_off;
        let dragged_dir = target_off.normalize();
        let paired_dir = (case.paired(&cubic) - case.far_anchor(&cubic)).normalize();
        let sin = dragged_dir.x * paired_dir.y - dragged_dir.y * paired_dir.x;
        if sin.abs() >= cfg.min_sin {
            return Some(DragSample {
                case,
                cubic,
                target,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve::{initial_curvature, solve, ClosedForm, SolveCfg};

    #[test]
    fn draws_are_replayable() {
        let cfg = SampleCfg::default();
        let tok = ReplayToken { seed: 9, index: 3 };
        assert_eq!(draw_drag(&cfg, tok), draw_drag(&cfg, tok));
        let other = ReplayToken { seed: 9, index: 4 };
        assert_ne!(draw_drag(&cfg, tok), draw_drag(&cfg, other));
    }

    #[test]
    fn draws_respect_handle_lengths_and_conditioning() {
        let cfg = SampleCfg::default();
        for index in 0..100 {
            let s = draw_drag(&cfg, ReplayToken { seed: 1, index }).unwrap();
            let reach = (s.target - s.case.anchor(&s.cubic)).norm();
            assert!(reach >= cfg.handle_min - 1e-9 && reach <= cfg.handle_max + 1e-9);
            assert!((s.cubic.p1 - s.cubic.p0).norm() >= cfg.handle_min - 1e-9);
        }
    }

    #[test]
    fn vertical_fraction_one_forces_vertical_branch() {
        let cfg = SampleCfg {
            vertical_frac: 1.0,
            ..SampleCfg::default()
        };
        for index in 0..20 {
            let s = draw_drag(&cfg, ReplayToken { seed: 5, index }).unwrap();
            let (paired, far) = (s.case.paired(&s.cubic), s.case.far_anchor(&s.cubic));
            assert_eq!(paired.x, far.x);
        }
    }

    #[test]
    fn sampled_drags_solve() {
        let cfg = SampleCfg::default();
        let scfg = SolveCfg::default();
        for index in 0..50 {
            let s = draw_drag(&cfg, ReplayToken { seed: 77, index }).unwrap();
            let k0 = initial_curvature(s.case, &s.cubic).unwrap();
            let out = solve(&ClosedForm, s.case, &s.cubic, s.target, k0, &scfg).unwrap();
            let k = out.curvature(s.case.curvature_t()).unwrap();
            assert!((k - k0).abs() <= 1e-7 * (k0.abs() + 1e-6));
        }
    }
}
