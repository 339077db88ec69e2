//! panview core library
//!
//! Platform-agnostic pan/zoom camera controller: input aggregation, target
//! accumulation, smoothing, pan bounds and change notifications.

pub mod aggregate;
pub mod bounds;
pub mod camera;
pub mod config;
pub mod controller;
pub mod curve;
pub mod events;
pub mod input;
pub mod smoothing;
pub mod target;

pub use aggregate::InputCommand;
pub use bounds::{BoundsProvider, WorldCreated, WorldNotifier};
pub use camera::CameraState;
pub use config::{
    CameraConfig, Compatibility, ConfigError, ConfigResult, KeyBindings, PanBounds, ZoomLimit,
};
pub use controller::{CameraChanges, CameraController};
pub use curve::{CurvePoint, SlowdownCurve};
pub use events::{CameraEvent, EventBus, Subscription};
pub use input::{InputState, ScrollDirection};
pub use target::{DragSession, TargetState};
