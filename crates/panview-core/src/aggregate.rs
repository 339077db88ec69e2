//! Turns polled input and queued wheel steps into per-tick camera commands.

use kurbo::{Point, Size, Vec2};

use crate::config::{CameraConfig, Compatibility, KeyBindings};
use crate::input::{InputState, ScrollDirection};

/// One unit of camera intent produced by the aggregator.
///
/// Commands are applied to the target state in the order they are produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    /// Pan by `direction * speed` per second.
    Move { direction: Vec2, speed: f64 },
    /// Change the zoom by `direction * speed` per second.
    Zoom { direction: f64, speed: f64 },
    /// Current state of the drag button.
    DragButton { held: bool, pointer: Point },
    /// Let an active drag session follow the pointer.
    DragFollow { pointer: Point },
}

/// Sum of the held movement keys. Opposing keys cancel.
pub fn keyboard_direction(input: &InputState, bindings: &KeyBindings) -> Vec2 {
    let mut direction = Vec2::ZERO;
    if input.is_key_down(bindings.move_up) {
        direction.y -= 1.0;
    }
    if input.is_key_down(bindings.move_down) {
        direction.y += 1.0;
    }
    if input.is_key_down(bindings.move_right) {
        direction.x += 1.0;
    }
    if input.is_key_down(bindings.move_left) {
        direction.x -= 1.0;
    }
    direction
}

/// Edge-scroll direction for a cursor inside a viewport.
///
/// Each axis is checked independently; when both edges trigger (a viewport
/// narrower than twice the range) the far edge wins.
pub fn border_direction(cursor: Point, viewport: Size, range: f64) -> Vec2 {
    let mut direction = Vec2::ZERO;
    let margin_x = viewport.width * range;
    let margin_y = viewport.height * range;

    if cursor.x < margin_x {
        direction.x = -1.0;
    }
    if cursor.y < margin_y {
        direction.y = -1.0;
    }
    if cursor.x > viewport.width - margin_x {
        direction.x = 1.0;
    }
    if cursor.y > viewport.height - margin_y {
        direction.y = 1.0;
    }
    direction
}

/// Collect this tick's commands.
///
/// `scrolls` are the wheel steps received since the previous tick; they are
/// applied first, in arrival order. Disabled modalities contribute nothing.
pub fn gather(
    input: &InputState,
    config: &CameraConfig,
    scrolls: &[ScrollDirection],
) -> Vec<InputCommand> {
    let mut commands = Vec::with_capacity(scrolls.len() + 6);

    if config.mouse_zoom {
        commands.extend(scrolls.iter().map(|scroll| InputCommand::Zoom {
            direction: scroll.zoom_direction(),
            speed: config.mouse_zoom_speed,
        }));
    }

    let bindings = &config.bindings;

    if config.keyboard_movement {
        let mut direction = keyboard_direction(input, bindings);
        if config.compatibility == Compatibility::Strict && direction.hypot2() > 1.0 {
            direction = direction.normalize();
        }
        commands.push(InputCommand::Move {
            direction,
            speed: config.keyboard_movement_speed,
        });
    }

    if config.keyboard_zoom {
        if input.is_key_down(bindings.zoom_in) {
            commands.push(InputCommand::Zoom {
                direction: -1.0,
                speed: config.keyboard_zoom_speed,
            });
        }
        if input.is_key_down(bindings.zoom_out) {
            commands.push(InputCommand::Zoom {
                direction: 1.0,
                speed: config.keyboard_zoom_speed,
            });
        }
    }

    let pointer = input.drag_pointer();

    if config.mouse_movement {
        commands.push(InputCommand::DragButton {
            held: input.is_button_down(bindings.drag_button),
            pointer,
        });
    }

    if config.border_movement {
        commands.push(InputCommand::Move {
            direction: border_direction(
                input.cursor_position,
                input.viewport_size,
                config.border_movement_range,
            ),
            speed: config.border_movement_speed,
        });
    }

    if config.mouse_movement {
        commands.push(InputCommand::DragFollow { pointer });
    }

    commands
}
