//! Input state polled by the camera controller each tick.

use std::collections::HashSet;

use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Discrete mouse wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollDirection {
    /// Wheel rolled away from the user; zooms in.
    Up,
    /// Wheel rolled toward the user; zooms out.
    Down,
}

impl ScrollDirection {
    /// Zoom direction for this step: -1 zooms in, +1 zooms out.
    pub fn zoom_direction(self) -> f64 {
        match self {
            ScrollDirection::Up => -1.0,
            ScrollDirection::Down => 1.0,
        }
    }

    /// Direction of a winit wheel delta, if it has a vertical component.
    pub fn from_delta(delta: MouseScrollDelta) -> Option<Self> {
        let y = match delta {
            MouseScrollDelta::LineDelta(_, y) => y as f64,
            MouseScrollDelta::PixelDelta(pos) => pos.y,
        };
        if y > 0.0 {
            Some(ScrollDirection::Up)
        } else if y < 0.0 {
            Some(ScrollDirection::Down)
        } else {
            None
        }
    }
}

/// Tracks the polled input state across frames.
///
/// Keys and buttons are level-triggered: the controller asks whether they are
/// held at tick time. Wheel steps are edge-triggered and are forwarded to the
/// controller as they arrive instead of being stored here.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Currently pressed keys.
    pressed_keys: HashSet<KeyCode>,
    /// Currently pressed mouse buttons.
    pressed_buttons: HashSet<MouseButton>,
    /// Raw cursor position in viewport pixels.
    pub cursor_position: Point,
    /// Pointer in the host's global (canvas) space.
    pub global_pointer: Point,
    /// Pointer relative to the camera, in the host's local space.
    pub local_pointer: Vec2,
    /// Viewport size in pixels.
    pub viewport_size: Size,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.pressed_keys.insert(key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.pressed_keys.remove(&key);
    }

    /// Check if a key is currently held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.pressed_buttons.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.pressed_buttons.remove(&button);
    }

    /// Check if a mouse button is currently held.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Release every key and button, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_buttons.clear();
    }

    /// Move the raw cursor. The pointer follows it in global space with no
    /// local offset; hosts with a distinct world space override it with
    /// [`InputState::set_pointer`].
    pub fn set_cursor(&mut self, position: Point) {
        self.cursor_position = position;
        self.global_pointer = position;
        self.local_pointer = Vec2::ZERO;
    }

    pub fn set_pointer(&mut self, global: Point, local: Vec2) {
        self.global_pointer = global;
        self.local_pointer = local;
    }

    /// Pointer used to anchor and follow drags: global plus local.
    pub fn drag_pointer(&self) -> Point {
        self.global_pointer + self.local_pointer
    }

    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport_size = size;
    }

    /// Fold a winit window event into the state.
    ///
    /// Returns the wheel step carried by the event, if any, so the host can
    /// pass it on to the controller.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<ScrollDirection> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => self.press_key(code),
                        ElementState::Released => self.release_key(code),
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.press_button(*button),
                ElementState::Released => self.release_button(*button),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.set_cursor(Point::new(position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                return ScrollDirection::from_delta(*delta);
            }
            WindowEvent::Resized(size) => {
                self.set_viewport_size(Size::new(size.width as f64, size.height as f64));
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
        None
    }
}
