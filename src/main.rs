use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use scene_animator::cli::Cli;
use scene_animator::core::{
    EveryNTicks, FpsMeter, FrameBudget, OffscreenCanvas, SoftwareRenderer, SteppedClock,
    SurfaceCanvas, SystemClock, Unbounded, Viewport,
};
use scene_animator::math::HashEntropy;
use scene_animator::texture::TextureLoader;
use scene_animator::{create_scene, initialize, AnimationLoop, Session};

// === Constants ===

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const FPS_UPDATE_INTERVAL: f32 = 1.0;
const PROGRESS_INTERVAL: u64 = 60;

fn entropy(cli: &Cli) -> HashEntropy {
    match cli.seed {
        Some(seed) => HashEntropy::seeded(seed),
        None => HashEntropy::new(),
    }
}

// === Headless Host ===

fn run_headless(cli: &Cli) -> Result<()> {
    let textures = TextureLoader::new(&cli.assets);
    let setup = create_scene(cli.scene, &textures);
    let mut session = initialize(
        Some(OffscreenCanvas::new()),
        Viewport::new(cli.width, cli.height),
        cli.pixel_ratio,
        setup,
    )
    .context("failed to initialize headless session")?
    .with_entropy(entropy(cli));

    let mut animation =
        AnimationLoop::new(SteppedClock::new(cli.step), FrameBudget::new(cli.frames));
    let mut progress = EveryNTicks::new(PROGRESS_INTERVAL);

    while let Some(frame) = animation.next_frame() {
        session.tick(&frame)?;
        if progress.tick() && !cli.no_ui {
            log::info!("Frame {}/{} (t={:.2}s)", frame.number + 1, cli.frames, frame.time);
        }
    }

    let path = cli.output_path(chrono::Local::now());
    let written = session
        .renderer()
        .canvas()
        .save_png(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    if written {
        log::info!("Wrote {} after {} frame(s)", path.display(), animation.frames());
    } else {
        log::warn!("No frame was rendered, nothing written");
    }

    if cli.report {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    }

    Ok(())
}

// === Windowed Host ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    session: Option<Session<SoftwareRenderer<SurfaceCanvas>>>,
    animation: Option<AnimationLoop<SystemClock, Unbounded>>,
    fps: FpsMeter,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            session: None,
            animation: None,
            fps: FpsMeter::new(FPS_UPDATE_INTERVAL),
            error: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("Scene Animator")
                        .with_inner_size(winit::dpi::LogicalSize::new(
                            INITIAL_WINDOW_WIDTH,
                            INITIAL_WINDOW_HEIGHT,
                        )),
                )
                .context("failed to create window")?,
        );

        let canvas = match SurfaceCanvas::new(window.clone()) {
            Ok(canvas) => Some(canvas),
            Err(e) => {
                log::error!("Failed to set up window surface: {}", e);
                None
            }
        };

        let scale_factor = window.scale_factor();
        let size = window.inner_size();
        let textures = TextureLoader::new(&self.cli.assets);
        let session = initialize(
            canvas,
            Viewport::from_physical(size.width, size.height, scale_factor),
            scale_factor as f32,
            create_scene(self.cli.scene, &textures),
        )?
        .with_entropy(entropy(&self.cli));

        self.window = Some(window);
        self.session = Some(session);
        self.animation = Some(AnimationLoop::new(SystemClock::new(), Unbounded));
        Ok(())
    }

    /// Resize the surface to the physical size and the session to the logical one
    fn apply_window_size(&mut self, width: u32, height: u32, scale_factor: f64) {
        if let Some(session) = &mut self.session {
            session.renderer_mut().canvas_mut().resize_surface(width, height);
            session.resize_physical(width, height, scale_factor);
        }
    }

    fn redraw(&mut self) {
        let (Some(session), Some(animation)) = (&mut self.session, &mut self.animation) else {
            return;
        };
        let Some(frame) = animation.next_frame() else {
            return;
        };

        if let Err(e) = session.tick(&frame) {
            log::error!("Render error: {}", e);
        }

        if let Some(fps) = self.fps.tick(frame.delta) {
            if !self.cli.no_ui {
                log::info!("FPS: {:.1}", fps);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.start(event_loop) {
            log::error!("Startup failed: {:#}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(window) = &self.window {
                    let scale_factor = window.scale_factor();
                    self.apply_window_size(size.width, size.height, scale_factor);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.apply_window_size(size.width, size.height, scale_factor);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.headless {
        return run_headless(&cli);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
