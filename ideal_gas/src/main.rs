//! Ideal Gas Law Visualizer
//!
//! Particles bounce inside a container whose size follows the volume slider.
//! The mole slider sets how many particles there are and the temperature
//! slider sets how fast they move. A log-scaled gauge tracks P = nRT / V.
//!
//! Controls:
//! - Sliders: temperature, moles, volume
//! - R: Reset to T = 300 K, n = 1 mol, V = 0.1 m³
//! - Space: Pause/resume particle motion
//! - T: Toggle light/dark theme

mod controls;
mod equations_ui;
mod renderer;
mod theme;

use common::{Camera2D, GraphicsContext, GraphicsError};
use controls::{draw_controls, UiAction};
use ideal_gas::{ConfigError, GasConfig, GasSimulation, InputEvent};
use renderer::{Renderer, SceneViewport};
use theme::Theme;
use thiserror::Error;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

/// Extra pixels of window background shown around the canvas
const CANVAS_MARGIN: f32 = 12.0;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Graphics(#[from] GraphicsError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    simulation: GasSimulation,
    camera: Camera2D,
    viewport: SceneViewport,
    theme: Theme,
    paused: bool,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext, simulation: GasSimulation) -> Self {
        let config = simulation.config();
        let viewport = SceneViewport {
            x: 0.0,
            y: 0.0,
            width: ctx.size.width as f32,
            height: ctx.size.height as f32,
        };
        let camera = Camera2D::for_canvas(
            config.canvas_width,
            config.canvas_height,
            CANVAS_MARGIN,
            viewport.aspect_ratio(),
        );
        let renderer = Renderer::new(&ctx, &camera, config.max_particles);

        let theme = Theme::default();
        let egui_ctx = egui::Context::default();
        egui_ctx.set_visuals(theme.visuals());
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            simulation,
            camera,
            viewport,
            theme,
            paused: false,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    /// Advance particles once, after this frame's inputs have been applied.
    fn update(&mut self, dt: f32) {
        if !self.paused {
            self.simulation.step(dt);
        }
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Input(event) => self.simulation.handle(event),
            UiAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.egui.ctx.set_visuals(self.theme.visuals());
                log::debug!("theme switched to {:?}", self.theme);
            }
            UiAction::TogglePause => {
                self.paused = !self.paused;
                log::debug!("paused: {}", self.paused);
            }
        }
    }

    /// Fit the camera to the part of the window the side panels leave free.
    fn fit_scene(&mut self, available: egui::Rect, pixels_per_point: f32) {
        let (win_w, win_h) = (self.ctx.size.width as f32, self.ctx.size.height as f32);
        let x = (available.min.x * pixels_per_point).clamp(0.0, win_w);
        let y = (available.min.y * pixels_per_point).clamp(0.0, win_h);
        // the viewport must stay inside the surface
        self.viewport = SceneViewport {
            x,
            y,
            width: (available.width() * pixels_per_point).clamp(0.0, win_w - x),
            height: (available.height() * pixels_per_point).clamp(0.0, win_h - y),
        };
        let config = self.simulation.config();
        self.camera.update_aspect_ratio(self.viewport.aspect_ratio());
        self.camera
            .fit_canvas(config.canvas_width, config.canvas_height, CANVAS_MARGIN);
    }

    fn render(&mut self, dt: f32) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Build egui UI against the last drawn state
        let frame = self.simulation.frame();
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let mut actions = Vec::new();
        let mut available = egui::Rect::NOTHING;
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            actions = draw_controls(ctx, &self.simulation, &frame, self.theme, self.paused);
            available = ctx.available_rect();
        });

        self.fit_scene(available, full_output.pixels_per_point);
        for action in actions {
            self.apply(action);
        }
        self.update(dt);

        // Draw geometry, population and positions from the same state
        let frame = self.simulation.frame();
        let palette = self.theme.palette();
        let canvas = {
            let config = self.simulation.config();
            (config.canvas_width, config.canvas_height)
        };
        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        let counts = self
            .renderer
            .update_frame(&self.ctx.queue, &frame, &palette, canvas);

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer
            .render(&mut encoder, &view, counts, self.viewport, palette.window_bg);

        let egui_commands = self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(
            egui_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::Space => self.apply(UiAction::TogglePause),
            KeyCode::KeyR => self.apply(UiAction::Input(InputEvent::Reset)),
            KeyCode::KeyT => self.apply(UiAction::ToggleTheme),
            _ => {}
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui
            .state
            .on_window_event(&self.ctx.window, event)
            .consumed
    }
}

fn run() -> Result<(), AppError> {
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        "Ideal Gas Law - PV = nRT",
        1100,
        720,
    ))?;
    let simulation = GasSimulation::new(GasConfig::default())?;

    let mut app = App::new(ctx, simulation);
    let mut last_time = std::time::Instant::now();

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, .. } => {
                let consumed = app.handle_window_event(event);

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(size) => app.resize(*size),
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key),
                                state,
                                ..
                            },
                        ..
                    } if !consumed => app.handle_key(*key, *state),
                    WindowEvent::RedrawRequested => {
                        let now = std::time::Instant::now();
                        let dt = (now - last_time).as_secs_f32().min(0.1);
                        last_time = now;

                        match app.render(dt) {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                log::error!("GPU out of memory, exiting");
                                elwt.exit();
                            }
                            Err(e) => log::warn!("render error: {:?}", e),
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                app.ctx.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}

fn main() {
    println!("Ideal Gas Law Visualizer");
    println!();
    println!("Controls:");
    println!("  Sliders - Temperature, moles, volume");
    println!("  R       - Reset to 300 K, 1 mol, 0.1 m³");
    println!("  Space   - Pause/Resume");
    println!("  T       - Toggle light/dark theme");
    println!();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
