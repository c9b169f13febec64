//! Interactive window showing a [`FieldStore`]'s current field.
//!
//! ```ignore
//! use helix_field::{HelixConfig, Viewer};
//!
//! Viewer::new()
//!     .with_config(HelixConfig::default().with_turns(6))
//!     .with_seed(42)
//!     .run()?;
//! ```
//!
//! Controls: drag with the left mouse button to orbit, scroll to zoom,
//! `R` to redraw the field with new randomness, `Escape` to quit. With the
//! `egui` feature a settings panel edits every configuration field live.

mod camera;
#[cfg(feature = "egui")]
mod egui_integration;
mod gpu;
#[cfg(feature = "egui")]
mod panel;

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

pub use camera::OrbitCamera;

use crate::config::HelixConfig;
use crate::error::ViewerError;
use crate::store::FieldStore;
#[cfg(feature = "egui")]
use egui_integration::EguiIntegration;
use gpu::GpuState;

/// Viewer builder.
///
/// Use method chaining to configure, then call `.run()` to open the window.
pub struct Viewer {
    config: HelixConfig,
    seed: Option<u64>,
    title: String,
}

impl Viewer {
    /// Create a viewer with the default configuration.
    pub fn new() -> Self {
        Self {
            config: HelixConfig::default(),
            seed: None,
            title: "Helix".to_string(),
        }
    }

    /// Set the initial configuration.
    pub fn with_config(mut self, config: HelixConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the RNG so every run starts from the same field.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), ViewerError> {
        let store = match self.seed {
            Some(seed) => FieldStore::seeded(self.config, seed)?,
            None => FieldStore::new(self.config)?,
        };

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(store, self.title);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    store: FieldStore,
    title: String,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    #[cfg(feature = "egui")]
    egui: Option<EguiIntegration>,
    /// Store revision currently held in GPU buffers.
    uploaded_revision: u64,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    last_frame: Instant,
    error: Option<ViewerError>,
}

impl App {
    fn new(store: FieldStore, title: String) -> Self {
        let uploaded_revision = store.revision();
        Self {
            store,
            title,
            window: None,
            gpu_state: None,
            #[cfg(feature = "egui")]
            egui: None,
            uploaded_revision,
            mouse_pressed: false,
            last_mouse_pos: None,
            last_frame: Instant::now(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: ViewerError) {
        error!(error = %e, "viewer stopped");
        self.error = Some(e);
        event_loop.exit();
    }

    /// Upload the store's field if it changed since the last upload.
    fn sync_field(&mut self) {
        if self.store.revision() == self.uploaded_revision {
            return;
        }
        if let Some(gpu_state) = &mut self.gpu_state {
            gpu_state.upload_field(self.store.field());
            self.uploaded_revision = self.store.revision();
        }
    }

    fn regenerate(&mut self) {
        if let Err(e) = self.store.regenerate() {
            warn!(error = %e, "regeneration failed");
        }
    }

    #[cfg(feature = "egui")]
    fn egui_consumed(&mut self, event: &WindowEvent) -> bool {
        match (&mut self.egui, &self.window) {
            (Some(egui), Some(window)) => egui.on_window_event(window, event),
            _ => false,
        }
    }

    #[cfg(not(feature = "egui"))]
    fn egui_consumed(&mut self, _event: &WindowEvent) -> bool {
        false
    }

    /// Run the settings panel and apply whatever the user edited.
    #[cfg(feature = "egui")]
    fn run_panel(&mut self) -> Option<egui_integration::EguiFrameOutput> {
        let (egui, window) = match (&mut self.egui, &self.window) {
            (Some(egui), Some(window)) => (egui, window),
            _ => return None,
        };

        let mut edited = *self.store.config();
        let points = self.store.field().len();
        let height = self.store.field().height();
        let mut response = panel::PanelResponse::default();

        let frame = egui.run(window, |ctx| {
            response = panel::settings_panel(ctx, &mut edited, points, height);
        });

        if response.changed {
            match self.store.set_config(edited) {
                Ok(true) => {}
                Ok(false) => tracing::debug!("panel edit left the config unchanged"),
                // The store keeps the previous config, so the panel snaps back next frame.
                Err(e) => tracing::debug!(error = %e, "panel edit rejected"),
            }
        }
        if response.regenerate {
            self.regenerate();
        }
        Some(frame)
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        #[cfg(feature = "egui")]
        let ui_frame = self.run_panel();

        self.sync_field();

        let point_size = self.store.config().size;
        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };
        gpu_state.camera.update(dt);

        #[cfg(feature = "egui")]
        let result = match (&mut self.egui, ui_frame) {
            (Some(egui), Some(frame)) => {
                let result = gpu_state.render(point_size, |device, queue, encoder, view, size| {
                    egui.paint(device, queue, encoder, view, size, &frame)
                });
                egui.cleanup(&frame);
                result
            }
            _ => gpu_state.render(point_size, |_, _, _, _, _| {}),
        };
        #[cfg(not(feature = "egui"))]
        let result = gpu_state.render(point_size, |_, _, _, _, _| {});

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu_state.reconfigure()
            }
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => warn!(error = ?e, "render error"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let gpu_state = match pollster::block_on(GpuState::new(window.clone(), self.store.field())) {
            Ok(gpu_state) => gpu_state,
            Err(e) => return self.fail(event_loop, e.into()),
        };

        #[cfg(feature = "egui")]
        {
            self.egui = Some(EguiIntegration::new(
                gpu_state.device(),
                gpu_state.format(),
                &window,
            ));
        }

        info!(
            points = self.store.field().len(),
            height = self.store.field().height(),
            "viewer ready"
        );
        self.uploaded_revision = self.store.revision();
        self.gpu_state = Some(gpu_state);
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let consumed = self.egui_consumed(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } if !consumed => match code {
                KeyCode::KeyR => self.regenerate(),
                KeyCode::Escape => event_loop.exit(),
                _ => {}
            },
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed && !consumed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = position.x - last_x;
                        let dy = position.y - last_y;

                        if let Some(gpu_state) = &mut self.gpu_state {
                            gpu_state.camera.rotate(dx as f32, dy as f32);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !consumed => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.camera.zoom(scroll);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
