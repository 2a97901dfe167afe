use std::time::{Duration, Instant};

use pixels::{PixelsBuilder, SurfaceTexture};
use tracing::{debug, error, info, warn};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, KeyboardInput, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::error::EngineError;
use crate::graphics::{BLACK, Renderer2d};
use crate::input::InputFrame;
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::SurfaceSize;

/// Frame rate the host ticks `update`/`draw` at.
pub const TARGET_FPS: u32 = 60;

pub struct AppConfig {
    pub title: String,
    /// Initial window size in logical units.
    pub desired_size: LogicalSize<u32>,
    pub resizable: bool,
}

/// Per-frame callbacks the host invokes: `update`, then `draw`.
pub trait Game {
    fn update(&mut self, input: &InputFrame);

    /// Draws onto a surface that has already been cleared to black.
    fn draw(&self, gfx: &mut dyn Renderer2d);

    /// Maps the window's outer size (logical units) to the surface size the game draws at.
    fn layout(&self, outer: SurfaceSize) -> SurfaceSize {
        outer
    }
}

pub fn frame_interval() -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(TARGET_FPS))
}

/// Converts a physical window size to the logical units `Game::layout` works in.
pub fn logical_outer(size: PhysicalSize<u32>, scale_factor: f64) -> SurfaceSize {
    let logical: LogicalSize<u32> = size.to_logical(scale_factor);
    SurfaceSize::new(logical.width, logical.height)
}

fn physical(size: PhysicalSize<u32>) -> SurfaceSize {
    SurfaceSize::new(size.width, size.height)
}

pub fn run_game<G: Game + 'static>(config: AppConfig, mut game: G) -> Result<(), EngineError> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(config.desired_size)
        .with_resizable(config.resizable)
        .build(&event_loop)?;

    let window_size = window.inner_size();
    let scale_factor = window.scale_factor();
    let surface = physical(window_size);
    let logical = game.layout(logical_outer(window_size, scale_factor));

    let surface_texture = SurfaceTexture::new(surface.width, surface.height, &window);
    let pixels = PixelsBuilder::new(logical.width, logical.height, surface_texture).build()?;
    let mut renderer = PixelsRenderer2d::new(pixels, surface, logical)?;
    info!(
        title = %config.title,
        width = logical.width,
        height = logical.height,
        scale_factor,
        "window ready"
    );

    let mut input = InputFrame::default();
    let frame_interval = frame_interval();
    let mut next_redraw = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(next_redraw);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Focused(false) => {
                    input.release_all();
                }
                WindowEvent::Resized(size) => {
                    resize(&mut renderer, &game, size, window.scale_factor());
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged {
                    scale_factor,
                    new_inner_size,
                } => {
                    resize(&mut renderer, &game, *new_inner_size, scale_factor);
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    input.apply(key, state);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                if now >= next_redraw {
                    window.request_redraw();
                    next_redraw = now + frame_interval;
                }
            }
            Event::RedrawRequested(_) => {
                game.update(&input);
                renderer.draw_frame(|gfx| {
                    gfx.clear(BLACK);
                    game.draw(gfx);
                });
                if let Err(err) = renderer.present() {
                    error!("present failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
                input.end_frame();
            }
            _ => {}
        }
    });
}

fn resize<G: Game>(
    renderer: &mut PixelsRenderer2d,
    game: &G,
    size: PhysicalSize<u32>,
    scale_factor: f64,
) {
    let surface = physical(size);
    let logical = game.layout(logical_outer(size, scale_factor));
    debug!(
        surface_w = surface.width,
        surface_h = surface.height,
        logical_w = logical.width,
        logical_h = logical.height,
        scale_factor,
        "resize"
    );
    if let Err(err) = renderer.resize(surface, logical) {
        warn!("resize failed: {err}");
    }
}
