use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use bouncing_shadow::cli::Cli;
use bouncing_shadow::config::SceneConfig;
use bouncing_shadow::context::AppContext;
use bouncing_shadow::controls::OrbitControls;
use bouncing_shadow::core::{Clock, ForwardRenderer, FrameLoop, PointerInput, TickOutcome};
use bouncing_shadow::debug_panel::{debug_bindings, DebugPanel, PanelStats};
use bouncing_shadow::demo::DemoScene;
use bouncing_shadow::logging::init_logging;
use bouncing_shadow::resize::handle_resize;
use bouncing_shadow::scene::AlphaMap;
use bouncing_shadow::texture::AlphaMapLoader;
use bouncing_shadow::viewport::ViewportSize;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Everything that exists once the window does
struct Runtime {
    window: Arc<Window>,
    ctx: AppContext,
    renderer: ForwardRenderer,
    controls: OrbitControls,
    pointer: PointerInput,
    frame_loop: FrameLoop,
    panel: Option<DebugPanel>,
    alpha_loader: Option<AlphaMapLoader>,
    deadline: Option<Instant>,
    frame_clock: Clock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl Runtime {
    fn new(window: Arc<Window>, cli: &Cli, config: &SceneConfig) -> Result<Self> {
        let scale = window.scale_factor();
        let viewport = ViewportSize::from_physical(window.inner_size(), scale);
        let ctx = AppContext::new(DemoScene::from_config(config), &config.camera, viewport, scale);

        let renderer = pollster::block_on(ForwardRenderer::new(window.clone(), ctx.render_target()))?;

        log::info!("loading shadow alpha map from {}", config.shadow.texture.display());
        let alpha_loader = AlphaMapLoader::spawn(config.shadow.texture.clone());

        let panel = (!cli.no_ui).then(|| DebugPanel::new(&window));

        Ok(Self {
            ctx,
            renderer,
            controls: OrbitControls::new(&config.controls, Vec3::from_array(config.camera.target)),
            pointer: PointerInput::new(),
            frame_loop: FrameLoop::new(Clock::new()),
            panel,
            alpha_loader: Some(alpha_loader),
            deadline: cli.run_duration().map(|d| Instant::now() + d),
            frame_clock: Clock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
            window,
        })
    }

    fn resize(&mut self) {
        let scale = self.window.scale_factor();
        let viewport = ViewportSize::from_physical(self.window.inner_size(), scale);
        handle_resize(&mut self.ctx, &mut self.renderer, viewport, scale);
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            log::debug!("FPS: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    /// Hand the alpha map to the renderer once the loader finishes
    fn poll_alpha_map(&mut self) {
        let Some(loader) = &mut self.alpha_loader else {
            return;
        };
        let Some(result) = loader.poll() else {
            return;
        };
        let path = loader.path().display().to_string();
        self.alpha_loader = None;

        match result {
            Ok(image) => {
                self.renderer.upload_alpha_map(&image);
                self.ctx.scene.set_alpha_map_state(AlphaMap::Loaded);
                log::info!("shadow alpha map {} loaded ({}x{})", path, image.width, image.height);
            }
            Err(e) => {
                self.ctx.scene.set_alpha_map_state(AlphaMap::Unavailable);
                log::warn!("{:#}; drawing the shadow without an alpha map", e);
            }
        }
    }

    fn handle_input(&mut self, event: &WindowEvent) {
        let consumed = match &mut self.panel {
            Some(panel) => panel.on_window_event(&self.window, event),
            None => false,
        };

        // Button state is tracked even when the panel takes the event
        let gesture = self.pointer.process_event(event);
        if let (false, Some(gesture)) = (consumed, gesture) {
            let height = self.window.inner_size().height as f32;
            self.controls.apply(gesture, &self.ctx.camera, height);
        }
    }

    fn redraw(&mut self) -> TickOutcome {
        self.poll_alpha_map();

        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            self.frame_loop.stop_handle().stop();
        }

        let delta = self.frame_clock.tick();
        self.update_fps(delta);

        if let Some(panel) = &mut self.panel {
            let stats = PanelStats {
                fps: self.fps,
                frame: self.frame_loop.frame_count(),
            };
            let mut bindings = debug_bindings(&mut self.ctx.scene, self.ctx.sphere, self.ctx.plane);
            let overlay = panel.run(&self.window, &mut bindings, stats);
            self.renderer.set_overlay(overlay);
        }

        self.frame_loop
            .tick(&mut self.ctx, &mut self.controls, &mut self.renderer)
    }
}

struct App {
    cli: Cli,
    config: SceneConfig,
    runtime: Option<Runtime>,
}

impl App {
    fn new(cli: Cli, config: SceneConfig) -> Self {
        Self {
            cli,
            config,
            runtime: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.runtime.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Bouncing Shadow")
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let mut runtime = match Runtime::new(window, &self.cli, &self.config) {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        runtime.resize();
        runtime.window.request_redraw();
        self.runtime = Some(runtime);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(runtime) = &mut self.runtime else {
            return;
        };

        runtime.handle_input(&event);

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
            } => {
                runtime.frame_loop.stop_handle().stop();
                event_loop.exit();
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => runtime.resize(),
            WindowEvent::RedrawRequested => match runtime.redraw() {
                TickOutcome::Reschedule => runtime.window.request_redraw(),
                TickOutcome::Stopped => event_loop.exit(),
            },
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logging());

    let config = cli.scene_config()?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, config);

    log::info!("Bouncing Shadow - drag to orbit, right-drag to pan, wheel to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
