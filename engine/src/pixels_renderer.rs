use crate::error::EngineError;
use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::SurfaceSize;

use pixels::Pixels;

/// Headful presenter built on `pixels`.
///
/// Two sizes are tracked: the window surface in physical pixels (`outer`) and the logical frame
/// buffer the game draws into. `pixels` scales the buffer onto the surface when they differ.
pub struct PixelsRenderer2d {
    pixels: Pixels,
    outer: SurfaceSize,
    logical: SurfaceSize,
}

impl PixelsRenderer2d {
    pub fn new(
        mut pixels: Pixels,
        outer: SurfaceSize,
        logical: SurfaceSize,
    ) -> Result<Self, EngineError> {
        pixels.resize_buffer(logical.width, logical.height)?;
        Ok(Self {
            pixels,
            outer,
            logical,
        })
    }

    pub fn resize(&mut self, outer: SurfaceSize, logical: SurfaceSize) -> Result<(), EngineError> {
        // A minimized window reports 0x0; wgpu rejects zero-sized surfaces.
        if outer.is_empty() || logical.is_empty() {
            return Ok(());
        }
        if outer != self.outer {
            self.pixels.resize_surface(outer.width, outer.height)?;
            self.outer = outer;
        }
        if logical != self.logical {
            self.pixels.resize_buffer(logical.width, logical.height)?;
            self.logical = logical;
        }
        Ok(())
    }

    pub fn draw_frame<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        let mut cpu = CpuRenderer::new(self.pixels.frame_mut(), self.logical);
        cpu.begin_frame(self.logical);
        f(&mut cpu)
    }

    pub fn present(&mut self) -> Result<(), EngineError> {
        self.pixels.render()?;
        Ok(())
    }
}
