//! Target state and the accumulator that folds input commands into it.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::aggregate::InputCommand;
use crate::config::{CameraConfig, Compatibility, PanBounds, ZoomLimit};

/// Round both axes to the nearest integer, ties to even.
pub fn round_point(point: Point) -> Point {
    Point::new(point.x.round_ties_even(), point.y.round_ties_even())
}

/// Where the camera is heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetState {
    pub position: Point,
    /// Uniform on both axes.
    pub zoom: f64,
}

impl TargetState {
    pub fn new(position: Point, zoom: f64) -> Self {
        Self { position, zoom }
    }

    /// Pan by `direction * speed * slowdown * dt`, then clamp and round.
    pub fn apply_move(
        &mut self,
        direction: Vec2,
        speed: f64,
        slowdown: f64,
        dt: f64,
        bounds: &PanBounds,
    ) {
        let moved = self.position + direction * (speed * dt * slowdown);
        self.position = round_point(bounds.clamp(moved));
    }

    /// Zoom by `direction * speed * slowdown * dt`, then clamp.
    pub fn apply_zoom(
        &mut self,
        direction: f64,
        speed: f64,
        slowdown: f64,
        dt: f64,
        limit: &ZoomLimit,
    ) {
        self.zoom = limit.clamp(self.zoom + direction * speed * dt * slowdown);
    }
}

/// Anchors captured when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer at the moment the drag button went down.
    pub anchor_pointer: Point,
    /// Target position at the moment the drag button went down.
    pub anchor_target: Point,
}

impl DragSession {
    pub fn begin(target: &TargetState, pointer: Point) -> Self {
        Self {
            anchor_pointer: pointer,
            anchor_target: target.position,
        }
    }

    /// Target position for the current pointer. Dragging right pans left.
    pub fn target_for(&self, pointer: Point) -> Point {
        self.anchor_target + (self.anchor_pointer - pointer)
    }
}

/// Per-tick values the accumulator needs besides the commands.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    pub config: &'a CameraConfig,
    pub bounds: PanBounds,
    pub dt: f64,
    pub slowdown: f64,
}

/// Drag lifecycle change reported by [`accumulate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTransition {
    Started,
    Ended,
}

/// Speed multiplier for the current live zoom.
///
/// Sampled at `live_zoom / zoom_limit.max`. Returns 1 when the option is off
/// or no curve is configured.
pub fn slowdown_factor(config: &CameraConfig, live_zoom: f64) -> f64 {
    match (&config.slowdown_curve, config.slow_camera_with_zoom) {
        (Some(curve), true) => curve.sample(live_zoom / config.zoom_limit.max),
        _ => 1.0,
    }
}

/// Apply `commands` in order to `target` and the drag session.
///
/// Returns the drag transitions that happened, in order.
pub fn accumulate(
    target: &mut TargetState,
    drag: &mut Option<DragSession>,
    commands: &[InputCommand],
    ctx: &TickContext<'_>,
) -> Vec<DragTransition> {
    let mut transitions = Vec::new();

    for command in commands {
        match *command {
            InputCommand::Move { direction, speed } => {
                target.apply_move(direction, speed, ctx.slowdown, ctx.dt, &ctx.bounds);
            }
            InputCommand::Zoom { direction, speed } => {
                target.apply_zoom(
                    direction,
                    speed,
                    ctx.slowdown,
                    ctx.dt,
                    &ctx.config.zoom_limit,
                );
            }
            InputCommand::DragButton { held, pointer } => match (held, drag.is_some()) {
                (true, false) => {
                    *drag = Some(DragSession::begin(target, pointer));
                    transitions.push(DragTransition::Started);
                }
                (false, true) => {
                    *drag = None;
                    transitions.push(DragTransition::Ended);
                }
                _ => {}
            },
            InputCommand::DragFollow { pointer } => {
                if let Some(session) = drag {
                    let position = session.target_for(pointer);
                    target.position = match ctx.config.compatibility {
                        Compatibility::Legacy => position,
                        Compatibility::Strict => round_point(ctx.bounds.clamp(position)),
                    };
                }
            }
        }
    }

    transitions
}
