//! Live camera state and the view transform it produces.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// The camera as it is currently rendered.
///
/// `position` is the world point shown at the centre of the viewport.
/// `zoom` follows the "bigger shows more" convention: a zoom of 2 shows
/// twice as much world along that axis as a zoom of 1.
///
/// Only the smoothing step writes to this; input always goes through the
/// target state first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// World position at the viewport centre.
    pub position: Point,
    /// Per-axis zoom (uniform in practice).
    pub zoom: Vec2,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            zoom: Vec2::new(1.0, 1.0),
        }
    }
}

impl CameraState {
    /// Create a camera at `position` with a uniform `zoom`.
    pub fn new(position: Point, zoom: f64) -> Self {
        Self {
            position,
            zoom: Vec2::new(zoom, zoom),
        }
    }

    /// Get the affine transform for rendering into a viewport of `viewport` size.
    ///
    /// This transform converts world coordinates to screen coordinates.
    pub fn transform(&self, viewport: Size) -> Affine {
        Affine::translate(viewport.to_vec2() * 0.5)
            * Affine::scale_non_uniform(1.0 / self.zoom.x, 1.0 / self.zoom.y)
            * Affine::translate(-self.position.to_vec2())
    }

    /// Get the inverse transform for input handling.
    ///
    /// This transform converts screen coordinates to world coordinates.
    pub fn inverse_transform(&self, viewport: Size) -> Affine {
        Affine::translate(self.position.to_vec2())
            * Affine::scale_non_uniform(self.zoom.x, self.zoom.y)
            * Affine::translate(-viewport.to_vec2() * 0.5)
    }

    /// Convert a screen point to world coordinates.
    pub fn screen_to_world(&self, screen_point: Point, viewport: Size) -> Point {
        self.inverse_transform(viewport) * screen_point
    }

    /// Convert a world point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point, viewport: Size) -> Point {
        self.transform(viewport) * world_point
    }

    /// Size of the world region visible through `viewport`.
    pub fn visible_size(&self, viewport: Size) -> Size {
        Size::new(viewport.width * self.zoom.x, viewport.height * self.zoom.y)
    }
}
