use engine::graphics::{
    BLACK, CpuRenderer, DEFAULT_TEXT_SCALE, Renderer2d, WHITE, glyph_advance_x, line_advance_y,
};
use engine::surface::SurfaceSize;
use engine::ui::Rect;

fn lit_pixels_in(frame: &[u8], width: u32, rect: Rect) -> usize {
    let mut lit = 0;
    for y in rect.y..rect.y + rect.h {
        for x in rect.x..rect.x + rect.w {
            let idx = ((y * width + x) * 4) as usize;
            if frame[idx..idx + 4] == WHITE {
                lit += 1;
            }
        }
    }
    lit
}

#[test]
fn clear_fills_every_pixel() {
    let size = SurfaceSize::new(7, 5);
    let mut frame = vec![9u8; size.rgba_len()];
    let mut gfx = CpuRenderer::new(&mut frame, size);
    gfx.clear(BLACK);
    assert!(frame.chunks_exact(4).all(|px| px == BLACK));
}

#[test]
fn fill_rect_is_clipped_to_surface() {
    let size = SurfaceSize::new(4, 4);
    let mut frame = vec![0u8; size.rgba_len()];
    let mut gfx = CpuRenderer::new(&mut frame, size);
    gfx.fill_rect(Rect::new(2, 2, 100, 100), WHITE);

    assert_eq!(lit_pixels_in(&frame, 4, Rect::new(2, 2, 2, 2)), 4);
    assert_eq!(lit_pixels_in(&frame, 4, Rect::new(0, 0, 4, 2)), 0);
}

#[test]
fn newline_moves_text_to_next_line_at_same_column() {
    let scale = DEFAULT_TEXT_SCALE;
    let width = glyph_advance_x(scale) * 4;
    let height = line_advance_y(scale) * 2;
    let size = SurfaceSize::new(width, height);
    let mut frame = vec![0u8; size.rgba_len()];

    let mut gfx = CpuRenderer::new(&mut frame, size);
    gfx.draw_text(0, 0, "1\n1", WHITE);

    let cell_w = glyph_advance_x(scale);
    let cell_h = line_advance_y(scale);
    let first = lit_pixels_in(&frame, width, Rect::new(0, 0, cell_w, cell_h));
    let second = lit_pixels_in(&frame, width, Rect::new(0, cell_h, cell_w, cell_h));
    let beside = lit_pixels_in(&frame, width, Rect::new(cell_w, 0, width - cell_w, height));

    assert!(first > 0);
    assert_eq!(first, second, "both lines draw the same glyph");
    assert_eq!(beside, 0);
}

#[test]
fn text_past_the_right_edge_is_clipped_not_wrapped() {
    let size = SurfaceSize::new(glyph_advance_x(1) * 2, line_advance_y(1) * 2);
    let mut frame = vec![0u8; size.rgba_len()];

    let mut gfx = CpuRenderer::new(&mut frame, size);
    gfx.draw_text_scaled(0, 0, "8888", WHITE, 1);

    let second_line = Rect::new(0, line_advance_y(1), size.width, line_advance_y(1));
    assert_eq!(lit_pixels_in(&frame, size.width, second_line), 0);
}

#[test]
fn volume_hint_characters_render() {
    let size = SurfaceSize::new(glyph_advance_x(1), line_advance_y(1));
    for ch in ["%", "<", ">", "^"] {
        let mut frame = vec![0u8; size.rgba_len()];
        let mut gfx = CpuRenderer::new(&mut frame, size);
        gfx.draw_text_scaled(0, 0, ch, WHITE, 1);
        assert!(
            lit_pixels_in(&frame, size.width, Rect::from_size(size.width, size.height)) > 0,
            "{ch} rendered nothing"
        );
    }
}
