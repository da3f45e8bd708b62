//! Local obstacle-avoidance steering.
//!
//! A greedy per-tick heuristic, not a planner: try the direct vector,
//! fall back to the most target-aligned of 8 fixed directions, or stall.
//! Callers must tolerate occasional stalls and brief detours; a stall is
//! the zero vector, never an error.

use crate::geometry::{Rect, Vec2};

/// Within this distance of the target, stop moving
pub const ARRIVE_RADIUS: f32 = 5.0;
/// Spacing of sample points along the direct path
const DIRECT_SAMPLE_STEP: f32 = 20.0;
/// How far ahead fallback candidates are probed
const CANDIDATE_PROBE: f32 = 50.0;
/// Side of the square probe box swept along paths
const PROBE_SIZE: f32 = 30.0;

const DIAG: f32 = std::f32::consts::FRAC_1_SQRT_2;
const CANDIDATES: [Vec2; 8] = [
    Vec2 { x: 1.0, y: 0.0 },
    Vec2 { x: -1.0, y: 0.0 },
    Vec2 { x: 0.0, y: 1.0 },
    Vec2 { x: 0.0, y: -1.0 },
    Vec2 { x: DIAG, y: DIAG },
    Vec2 { x: -DIAG, y: DIAG },
    Vec2 { x: DIAG, y: -DIAG },
    Vec2 { x: -DIAG, y: -DIAG },
];

/// Unit movement vector from `current` toward `target`, avoiding `walls`
/// within `bounds`. Zero when arrived or fully boxed in.
pub fn navigate(current: Vec2, target: Vec2, walls: &[Rect], bounds: &Rect) -> Vec2 {
    let to_target = target - current;
    let dist = to_target.length();
    if dist < ARRIVE_RADIUS {
        return Vec2::ZERO;
    }
    let direct = to_target.normalize();

    if path_clear(current, direct, dist, walls) {
        return direct;
    }

    // Direct path blocked: pick the clear candidate most aligned with the
    // target that also ends up closest to it.
    let mut best = Vec2::ZERO;
    let mut best_score = f32::NEG_INFINITY;
    for dir in CANDIDATES {
        let probe_point = current + dir * CANDIDATE_PROBE;
        if !bounds.contains_point(&probe_point) {
            continue;
        }
        let probe = Rect::centered(probe_point.x, probe_point.y, PROBE_SIZE, PROBE_SIZE);
        if walls.iter().any(|w| probe.intersects(w)) {
            continue;
        }
        let alignment = dir.dot(&direct);
        let resulting_dist = probe_point.distance(&target);
        let score = alignment * 100.0 - resulting_dist;
        if score > best_score {
            best_score = score;
            best = dir;
        }
    }
    best
}

/// Sample a probe box every `DIRECT_SAMPLE_STEP` along the segment; clear
/// only if no sample touches a wall.
fn path_clear(from: Vec2, dir: Vec2, dist: f32, walls: &[Rect]) -> bool {
    let steps = (dist / DIRECT_SAMPLE_STEP) as usize;
    for i in 1..=steps {
        let p = from + dir * (dist * i as f32 / steps as f32);
        let probe = Rect::centered(p.x, p.y, PROBE_SIZE, PROBE_SIZE);
        if walls.iter().any(|w| probe.intersects(w)) {
            return false;
        }
    }
    true
}
