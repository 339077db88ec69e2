//! Moves the live camera toward its target once per tick.

use kurbo::{Point, Vec2};

use crate::config::ZoomLimit;
use crate::target::round_point;

/// Differences below this are treated as "already there".
pub const EPSILON: f64 = 0.01;

/// Step the live zoom toward `target`.
///
/// `rate` is the blend fraction per second; the step lerps by `rate * dt`
/// (a fraction above 1 overshoots). Returns whether the live zoom changed.
pub fn step_zoom(
    live: &mut Vec2,
    target: f64,
    limit: &ZoomLimit,
    smooth: bool,
    rate: f64,
    dt: f64,
) -> bool {
    let target = limit.clamp(target);
    if (live.x - target).abs() < EPSILON {
        return false;
    }

    let goal = Vec2::new(target, target);
    let next = if smooth { live.lerp(goal, rate * dt) } else { goal };
    if next == *live {
        return false;
    }
    *live = next;
    true
}

/// Step the live position toward `target`.
///
/// Smoothed steps are rounded to whole pixels. A step too small to leave the
/// current pixel advances one pixel per axis toward the rounded target
/// instead, so the camera neither stalls short nor jumps the remainder.
/// Returns whether the live position changed.
pub fn step_position(live: &mut Point, target: Point, smooth: bool, rate: f64, dt: f64) -> bool {
    if live.distance(target) < EPSILON {
        return false;
    }

    let next = if smooth {
        let stepped = round_point(live.lerp(target, rate * dt));
        if stepped == *live {
            nudge_toward(*live, round_point(target))
        } else {
            stepped
        }
    } else {
        target
    };

    if next == *live {
        return false;
    }
    *live = next;
    true
}

/// Move at most one pixel per axis from `from` toward `goal`.
fn nudge_toward(from: Point, goal: Point) -> Point {
    let axis = |from: f64, goal: f64| {
        let delta = goal - from;
        if delta.abs() <= 1.0 {
            goal
        } else {
            from + delta.signum()
        }
    };
    Point::new(axis(from.x, goal.x), axis(from.y, goal.y))
}
