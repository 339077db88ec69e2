//! panview application
//!
//! Native window shell that drives the camera controller from winit input.

mod app;
mod controls;

pub use app::{App, AppConfig, AppError};
pub use controls::{Control, ControlRegistry};
