use std::sync::Arc;

use dash_core::config::GameConfig;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

/// Window title and inner size. The inner size is the canvas size, one
/// window pixel per canvas pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl From<&GameConfig> for WindowSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            title: config.window_title.clone(),
            width: config.canvas_width,
            height: config.canvas_height,
        }
    }
}

impl WindowSettings {
    fn attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(&self.title)
            .with_inner_size(PhysicalSize::new(self.width, self.height))
            .with_min_inner_size(PhysicalSize::new(1, 1))
    }
}

pub fn create_window(
    event_loop: &ActiveEventLoop,
    settings: &WindowSettings,
) -> Result<Arc<Window>, String> {
    let window = event_loop
        .create_window(settings.attributes())
        .map_err(|e| format!("failed to create window '{}': {e}", settings.title))?;
    log::info!(
        "Window '{}' created ({}x{})",
        settings.title,
        settings.width,
        settings.height
    );
    Ok(Arc::new(window))
}
