//! World-size notifications that reset the camera's pan bounds.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::PanBounds;
use crate::events::{EventBus, Subscription};

/// Announced by the map once a world has been generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldCreated {
    /// World extent in world units.
    pub size: Vec2,
    pub center: Point,
    pub grid_width: u8,
    pub grid_height: u8,
}

impl WorldCreated {
    /// Pan bounds covering this world: origin to the truncated size.
    pub fn pan_bounds(&self) -> PanBounds {
        PanBounds::from_world_size(self.size)
    }
}

/// Source of world-created notifications.
pub trait BoundsProvider {
    /// Register `listener` for future worlds. Dropping the handle unregisters it.
    fn subscribe_world_created(&self, listener: Box<dyn FnMut(&WorldCreated)>) -> Subscription;
}

/// In-process [`BoundsProvider`] that the world generator announces through.
#[derive(Debug, Default)]
pub struct WorldNotifier {
    bus: EventBus<WorldCreated>,
}

impl WorldNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify every subscriber of a new world.
    pub fn announce(&self, world: WorldCreated) {
        log::debug!(
            "World created: {}x{} ({}x{} grid)",
            world.size.x,
            world.size.y,
            world.grid_width,
            world.grid_height
        );
        self.bus.emit(&world);
    }

    pub fn subscriber_count(&self) -> usize {
        self.bus.listener_count()
    }
}

impl BoundsProvider for WorldNotifier {
    fn subscribe_world_created(&self, mut listener: Box<dyn FnMut(&WorldCreated)>) -> Subscription {
        self.bus.subscribe(move |world| listener(world))
    }
}
