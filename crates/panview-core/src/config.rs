//! Camera configuration, limits and validation.

use std::path::Path;

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::curve::SlowdownCurve;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Zoom limit is inverted: min {min} > max {max}")]
    InvertedZoomLimit { min: f64, max: f64 },
    #[error("Zoom limit must be positive, got {0}")]
    NonPositiveZoom(f64),
    #[error("Pan bounds are inverted on the {axis} axis: min {min} > max {max}")]
    InvertedBounds { axis: char, min: f64, max: f64 },
    #[error("Border movement range must lie in [0, 1], got {0}")]
    BorderRangeOutOfRange(f64),
    #[error("Slow camera with zoom is enabled but no slowdown curve is set")]
    MissingSlowdownCurve,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Clamp that tolerates `min > max`.
///
/// Values below `min` become `min`, otherwise values above `max` become `max`.
/// An inverted range therefore pins everything to one end instead of panicking.
pub(crate) fn clamp_loose(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Allowed range for the target zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimit {
    pub min: f64,
    pub max: f64,
}

impl ZoomLimit {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, zoom: f64) -> f64 {
        clamp_loose(zoom, self.min, self.max)
    }
}

impl Default for ZoomLimit {
    fn default() -> Self {
        Self::new(0.5, 2.0)
    }
}

/// Rectangle the target position is confined to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanBounds {
    pub min: Point,
    pub max: Point,
}

impl PanBounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Bounds spanning the origin to a world of the given size.
    ///
    /// Size components are truncated toward zero. Zero or negative sizes are
    /// accepted and produce a degenerate range.
    pub fn from_world_size(size: Vec2) -> Self {
        Self::new(Point::ZERO, Point::new(size.x.trunc(), size.y.trunc()))
    }

    /// Clamp each axis of `point` into the bounds.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            clamp_loose(point.x, self.min.x, self.max.x),
            clamp_loose(point.y, self.min.y, self.max.y),
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl Default for PanBounds {
    fn default() -> Self {
        Self::new(Point::ZERO, Point::ZERO)
    }
}

/// Keys and buttons the controller listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub zoom_in: KeyCode,
    pub zoom_out: KeyCode,
    /// Mouse button that pans the camera while held.
    pub drag_button: MouseButton,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            zoom_in: KeyCode::KeyR,
            zoom_out: KeyCode::KeyF,
            drag_button: MouseButton::Middle,
        }
    }
}

/// How faithfully to reproduce the quirks of the classic controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    /// Drag targets are neither clamped nor rounded; diagonal keyboard
    /// movement is faster than straight movement.
    #[default]
    Legacy,
    /// Drag targets are clamped and rounded like every other movement;
    /// keyboard direction is normalized to unit length.
    Strict,
}

/// Camera controller configuration.
///
/// Set once at construction. Every field has a default, so partial JSON
/// documents deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Blend rate of the live position toward the target (per second).
    pub movement_speed: f64,
    /// Blend rate of the live zoom toward the target (per second).
    pub zoom_speed: f64,
    pub mouse_zoom_speed: f64,
    pub keyboard_movement_speed: f64,
    pub keyboard_zoom_speed: f64,
    pub border_movement_speed: f64,
    /// Fraction of the viewport, per axis, that triggers edge scrolling.
    pub border_movement_range: f64,
    pub zoom_limit: ZoomLimit,
    pub initial_bounds: PanBounds,
    pub initial_position: Point,
    pub initial_zoom: f64,

    pub smooth_zoom: bool,
    pub smooth_movement: bool,
    pub keyboard_zoom: bool,
    pub mouse_zoom: bool,
    pub border_movement: bool,
    pub keyboard_movement: bool,
    pub mouse_movement: bool,

    /// Multiplier curve sampled at `zoom / zoom_limit.max`.
    pub slowdown_curve: Option<SlowdownCurve>,
    pub slow_camera_with_zoom: bool,

    pub bindings: KeyBindings,
    pub compatibility: Compatibility,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            movement_speed: 5.0,
            zoom_speed: 5.0,
            mouse_zoom_speed: 5.0,
            keyboard_movement_speed: 5.0,
            keyboard_zoom_speed: 5.0,
            border_movement_speed: 5.0,
            border_movement_range: 0.05,
            zoom_limit: ZoomLimit::default(),
            initial_bounds: PanBounds::default(),
            initial_position: Point::ZERO,
            initial_zoom: 1.0,
            smooth_zoom: true,
            smooth_movement: true,
            keyboard_zoom: true,
            mouse_zoom: true,
            border_movement: true,
            keyboard_movement: true,
            mouse_movement: true,
            slowdown_curve: None,
            slow_camera_with_zoom: false,
            bindings: KeyBindings::default(),
            compatibility: Compatibility::Legacy,
        }
    }
}

impl CameraConfig {
    /// Check the configuration for ranges that would make clamping degenerate.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> ConfigResult<()> {
        let ZoomLimit { min, max } = self.zoom_limit;
        if min > max {
            return Err(ConfigError::InvertedZoomLimit { min, max });
        }
        if min <= 0.0 {
            return Err(ConfigError::NonPositiveZoom(min));
        }

        let bounds = self.initial_bounds;
        for (axis, lo, hi) in [
            ('x', bounds.min.x, bounds.max.x),
            ('y', bounds.min.y, bounds.max.y),
        ] {
            if lo > hi {
                return Err(ConfigError::InvertedBounds { axis, min: lo, max: hi });
            }
        }

        if !(0.0..=1.0).contains(&self.border_movement_range) {
            return Err(ConfigError::BorderRangeOutOfRange(self.border_movement_range));
        }

        if self.slow_camera_with_zoom && self.slowdown_curve.is_none() {
            return Err(ConfigError::MissingSlowdownCurve);
        }

        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
