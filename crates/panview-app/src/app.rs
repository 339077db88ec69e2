//! Window host: feeds winit input into the camera controller each frame.

use std::path::{Path, PathBuf};
use std::time::Instant;

use kurbo::{Point, Size, Vec2};
use panview_core::{
    CameraChanges, CameraConfig, CameraController, ConfigError, InputState, Subscription,
    WorldCreated, WorldNotifier,
};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::controls::{ControlRegistry, PAUSE_KEY, QUIT_KEY};

/// Longest frame step fed to the controller, in seconds.
///
/// Lerp fractions above 1 overshoot, so stalls (window drags, debugger
/// breaks) are capped.
const MAX_FRAME_TIME: f64 = 0.25;

/// World tile size used to derive the announced grid dimensions.
const WORLD_TILE_SIZE: f64 = 64.0;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("Window creation failed: {0}")]
    Window(#[from] OsError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Size of the demo world announced at startup.
    pub world_size: Vec2,
    pub camera: CameraConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "panview".to_string(),
            width: 1280,
            height: 800,
            world_size: Vec2::new(4096.0, 4096.0),
            camera: CameraConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default configuration with the camera config read from `path`.
    pub fn with_camera_file(path: &Path) -> Result<Self, AppError> {
        log::info!("Loading camera config from {:?}", path);
        Ok(Self {
            camera: CameraConfig::load(path)?,
            ..Self::default()
        })
    }

    /// Resolve the camera config location: an explicit path wins, otherwise
    /// `<config dir>/panview/camera.json` when it exists.
    pub fn camera_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        if explicit.is_some() {
            return explicit;
        }
        #[cfg(feature = "native")]
        {
            let path = dirs::config_dir()?.join("panview").join("camera.json");
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Load from an explicit path or the platform config directory,
    /// falling back to defaults.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, AppError> {
        match Self::camera_config_path(explicit) {
            Some(path) => Self::with_camera_file(&path),
            None => {
                log::info!("No camera config found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Grid dimensions for a world of `size`, in whole tiles.
fn grid_dimensions(size: Vec2) -> (u8, u8) {
    let cells = |extent: f64| (extent / WORLD_TILE_SIZE).clamp(0.0, u8::MAX as f64) as u8;
    (cells(size.x), cells(size.y))
}

/// Feeds the controller one frame, converting the cursor to a world-scaled
/// drag pointer.
///
/// One screen pixel covers `zoom` world units. While a drag is held the
/// scale stays at the zoom the drag started with, so zooming mid-drag does
/// not move the target under a still cursor.
#[derive(Debug, Default)]
struct FrameDriver {
    drag_scale: Option<Vec2>,
}

impl FrameDriver {
    fn step(
        &mut self,
        controller: &mut CameraController,
        input: &mut InputState,
        dt: f64,
    ) -> CameraChanges {
        let scale = self
            .drag_scale
            .filter(|_| controller.is_dragging())
            .unwrap_or(controller.camera().zoom);
        let cursor = input.cursor_position;
        input.set_pointer(Point::new(cursor.x * scale.x, cursor.y * scale.y), Vec2::ZERO);

        let changes = controller.update(dt, input);
        self.drag_scale = controller.is_dragging().then_some(scale);
        changes
    }
}

/// Runtime state, created once the window exists.
struct AppState {
    window: Window,
    title: String,
    input: InputState,
    controller: CameraController,
    driver: FrameDriver,
    last_frame: Instant,
    /// Keeps the camera event log listener alive.
    _event_log: Subscription,
}

impl AppState {
    fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f64().min(MAX_FRAME_TIME);
        self.last_frame = now;

        if self.driver.step(&mut self.controller, &mut self.input, dt).any() {
            self.refresh_title();
        }
    }

    fn refresh_title(&self) {
        let camera = self.controller.camera();
        let paused = if self.controller.ignores_input() {
            " [input paused]"
        } else {
            ""
        };
        self.window.set_title(&format!(
            "{} | pos ({:.0}, {:.0}) | zoom {:.2}{}",
            self.title, camera.position.x, camera.position.y, camera.zoom.x, paused
        ));
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    world: WorldNotifier,
    /// First fatal error raised inside the event loop.
    error: Option<AppError>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            world: WorldNotifier::new(),
            error: None,
        }
    }

    /// Run the application until the window closes.
    pub fn run(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        ControlRegistry::log_all(&self.config.camera.bindings);
        event_loop.run_app(&mut self)?;
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn announce_world(&self) {
        let size = self.config.world_size;
        let (grid_width, grid_height) = grid_dimensions(size);
        self.world.announce(WorldCreated {
            size,
            center: Point::new(size.x / 2.0, size.y / 2.0),
            grid_width,
            grid_height,
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        let mut input = InputState::new();
        let size = window.inner_size();
        input.set_viewport_size(Size::new(size.width as f64, size.height as f64));
        input.set_cursor(Point::new(size.width as f64 / 2.0, size.height as f64 / 2.0));

        let mut controller = CameraController::new(self.config.camera.clone());
        controller.attach_bounds_provider(&self.world);
        let event_log = controller.subscribe(|event| log::debug!("Camera event: {:?}", event));

        self.state = Some(AppState {
            window,
            title: self.config.title.clone(),
            input,
            controller,
            driver: FrameDriver::default(),
            last_frame: Instant::now(),
            _event_log: event_log,
        });
        self.announce_world();

        if let Some(state) = &self.state {
            state.refresh_title();
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        if let Some(scroll) = state.input.process_window_event(&event) {
            state.controller.on_scroll(scroll);
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                if event.physical_key == PhysicalKey::Code(QUIT_KEY) {
                    event_loop.exit();
                } else if event.physical_key == PhysicalKey::Code(PAUSE_KEY) {
                    let ignore = !state.controller.ignores_input();
                    state.controller.set_ignore_input(ignore);
                    state.refresh_title();
                }
            }
            WindowEvent::RedrawRequested => state.tick(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}
