//! Camera controls listing for the help output.

use panview_core::KeyBindings;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Key that toggles ignoring camera input.
pub const PAUSE_KEY: KeyCode = KeyCode::KeyP;
/// Key that closes the window.
pub const QUIT_KEY: KeyCode = KeyCode::Escape;

/// One entry in the controls list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub input: String,
    pub description: &'static str,
}

impl Control {
    fn new(input: impl Into<String>, description: &'static str) -> Self {
        Self {
            input: input.into(),
            description,
        }
    }
}

/// Display name of a key code, e.g. `KeyW` -> `W`.
pub fn key_name(key: KeyCode) -> String {
    let name = format!("{:?}", key);
    name.strip_prefix("Key")
        .or_else(|| name.strip_prefix("Digit"))
        .map(str::to_string)
        .unwrap_or(name)
}

fn button_name(button: MouseButton) -> String {
    match button {
        MouseButton::Other(n) => format!("Mouse {}", n),
        other => format!("{:?} mouse", other),
    }
}

/// Registry of the controls the host responds to.
pub struct ControlRegistry;

impl ControlRegistry {
    /// All controls for the given bindings.
    pub fn all(bindings: &KeyBindings) -> Vec<Control> {
        vec![
            Control::new(key_name(bindings.move_up), "Pan up"),
            Control::new(key_name(bindings.move_down), "Pan down"),
            Control::new(key_name(bindings.move_left), "Pan left"),
            Control::new(key_name(bindings.move_right), "Pan right"),
            Control::new(key_name(bindings.zoom_in), "Zoom in"),
            Control::new(key_name(bindings.zoom_out), "Zoom out"),
            Control::new("Wheel", "Zoom in / out"),
            Control::new(format!("{}+Drag", button_name(bindings.drag_button)), "Drag to pan"),
            Control::new("Screen edge", "Scroll toward the edge"),
            Control::new(key_name(PAUSE_KEY), "Pause / resume camera input"),
            Control::new(key_name(QUIT_KEY), "Quit"),
        ]
    }

    /// Log all controls at info level.
    pub fn log_all(bindings: &KeyBindings) {
        log::info!("=== Camera controls ===");
        for control in Self::all(bindings) {
            log::info!("  {:20} {}", control.input, control.description);
        }
    }
}
