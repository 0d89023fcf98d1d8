//! Dash Loop -- window, input wiring and tick scheduling.
//!
//! winit drives the event loop via `ApplicationHandler`. The game itself is a
//! wall-clock polling loop (see `GameLoop`):
//!
//!   1. `about_to_wait` sleeps until the next tick is due, then requests a redraw
//!   2. `RedrawRequested` runs one update + render pass into the software canvas
//!   3. the canvas is uploaded and presented as a full-window quad
//!
//! Keyboard arrows and touches are translated into `Direction`s here, at the
//! boundary; nothing past this file sees a device key code.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use dash_core::config::GameConfig;
use dash_core::input::{Direction, InputState};
use dash_game::driver::{FrameRateDisplay, GameLoop};
use dash_game::scene::build_default_scene;
use dash_platform::window::{create_window, WindowSettings};
use dash_render::{Canvas, FramePresenter, GpuContext};

const CONFIG_PATH: &str = "assets/config/game.json";

/// Shows the latest frame-rate sample in the window title.
struct TitleFpsDisplay {
    window: Arc<Window>,
    base_title: String,
}

impl FrameRateDisplay for TitleFpsDisplay {
    fn show(&mut self, fps: f64) {
        self.window
            .set_title(&format!("{} | FPS: {fps:.2}", self.base_title));
    }
}

/// Everything that needs a live window. Built in `resumed`.
struct EngineState {
    window: Arc<Window>,
    gpu: GpuContext,
    presenter: FramePresenter,
    canvas: Canvas,
    input: InputState,
    game: GameLoop,
    fps_display: TitleFpsDisplay,
}

impl EngineState {
    fn new(window: Arc<Window>, config: &GameConfig) -> Result<Self, String> {
        let gpu = GpuContext::new(window.clone())?;
        let canvas = Canvas::new(config.canvas_width, config.canvas_height);
        let presenter = FramePresenter::new(&gpu.device, gpu.surface_format, canvas.size());
        let game = GameLoop::new(build_default_scene(config), config, Instant::now());
        let fps_display = TitleFpsDisplay {
            window: window.clone(),
            base_title: config.window_title.clone(),
        };

        Ok(Self {
            window,
            gpu,
            presenter,
            canvas,
            input: InputState::new(),
            game,
            fps_display,
        })
    }

    fn run_tick(&mut self, now: Instant) {
        self.game
            .tick(now, &self.input, &mut self.canvas, &mut self.fps_display);
        self.presenter.present(&self.gpu, &self.canvas);
    }
}

struct App {
    config: GameConfig,
    state: Option<EngineState>,
}

impl App {
    fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let settings = WindowSettings::from(&self.config);
        let state = create_window(event_loop, &settings)
            .and_then(|window| EngineState::new(window, &self.config));
        match state {
            Ok(state) => self.state = Some(state),
            Err(e) => {
                log::error!("Startup failed: {e}");
                event_loop.exit();
                return;
            }
        }
        log::info!(
            "Tick interval {}ms, canvas {}x{}",
            self.config.tick_interval_ms,
            self.config.canvas_width,
            self.config.canvas_height
        );
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = self.state.as_ref() else {
            return;
        };
        if state.game.is_due(Instant::now()) {
            state.window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(state.game.next_tick()));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    state.gpu.resize(w, h);
                    log::info!("Resized to {}x{}", w, h);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key_code) = event.physical_key else {
                    return;
                };
                if key_code == KeyCode::Escape && event.state == ElementState::Pressed {
                    log::info!("Escape pressed, exiting.");
                    event_loop.exit();
                    return;
                }
                if let Some(dir) = map_key(key_code) {
                    match event.state {
                        ElementState::Pressed => state.input.key_down(dir),
                        ElementState::Released => state.input.key_up(dir),
                    }
                }
            }

            // Native windows do no default touch scrolling, so there is
            // nothing to suppress here.
            WindowEvent::Touch(touch) => match touch.phase {
                TouchPhase::Started => state.input.touch_start(),
                TouchPhase::Ended | TouchPhase::Cancelled => state.input.touch_end(),
                TouchPhase::Moved => {}
            },

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                if state.game.is_due(now) {
                    state.run_tick(now);
                }
            }

            _ => {}
        }
    }
}

fn map_key(key_code: KeyCode) -> Option<Direction> {
    match key_code {
        KeyCode::ArrowLeft => Some(Direction::Left),
        KeyCode::ArrowRight => Some(Direction::Right),
        KeyCode::ArrowUp => Some(Direction::Up),
        KeyCode::ArrowDown => Some(Direction::Down),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Dash Loop starting...");
    let config = GameConfig::load_or_default(Path::new(CONFIG_PATH));

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
