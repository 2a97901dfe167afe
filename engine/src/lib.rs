pub mod app;
pub mod error;
pub mod graphics;
pub mod input;
pub mod pixels_renderer;
pub mod surface;
pub mod ui;

use app::Game;
use graphics::{BLACK, CpuRenderer, Renderer2d};
use input::InputFrame;
use surface::{RgbaBufferSurface, Surface, SurfaceSize};

/// Drives a [`Game`] without a window: each step runs `update` then `draw` into an
/// in-memory surface, exactly like the headful loop does per frame.
#[derive(Debug)]
pub struct HeadlessRunner<G: Game> {
    game: G,
    outer: SurfaceSize,
    surface: RgbaBufferSurface,
    frame: usize,
}

impl<G: Game> HeadlessRunner<G> {
    pub fn new(game: G, outer: SurfaceSize) -> Self {
        let logical = game.layout(outer);
        Self {
            game,
            outer,
            surface: RgbaBufferSurface::new(logical),
            frame: 0,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn surface(&self) -> &RgbaBufferSurface {
        &self.surface
    }

    pub fn outer_size(&self) -> SurfaceSize {
        self.outer
    }

    /// Simulates a window resize; the surface follows `Game::layout`.
    pub fn resize(&mut self, outer: SurfaceSize) {
        self.outer = outer;
        let logical = self.game.layout(outer);
        let Ok(()) = self.surface.resize(logical);
    }

    pub fn step(&mut self, input: &InputFrame) -> usize {
        self.game.update(input);

        let size = self.surface.size();
        {
            let mut gfx = CpuRenderer::new(self.surface.frame_mut(), size);
            gfx.begin_frame(size);
            gfx.clear(BLACK);
            self.game.draw(&mut gfx);
        }
        let Ok(()) = self.surface.present();

        self.frame += 1;
        self.frame
    }

    pub fn run<'a, I>(&mut self, inputs: I) -> usize
    where
        I: IntoIterator<Item = &'a InputFrame>,
    {
        let mut last_frame = self.frame();
        for input in inputs {
            last_frame = self.step(input);
        }
        last_frame
    }
}
