//! Synthetic content painted into freshly allocated buffers.
//!
//! Two modes, selected per run:
//!
//! - [`PaintMode::Baseline`]: a fixed red→blue linear gradient across the
//!   full diagonal. Deterministic; the canonical minimal content.
//! - [`PaintMode::Randomized`]: random gradient endpoint colors plus
//!   [`SHAPE_COUNT`] randomly parameterized shapes — filled ellipses,
//!   filled rectangles, and stroked lines in equal likelihood — with random
//!   position, size, and color. Seeded from the thread-local RNG, so
//!   consumers assert structure (dimensions, strides, monotone gradients),
//!   never exact pixel values.
//!
//! Primitives take signed coordinates and rely on
//! [`PixelBuffer::put_pixel`]'s bounds handling, so randomized shapes may
//! hang off the canvas edge — decoders downstream see clipped geometry, a
//! useful corpus property in itself.

use super::buffer::{Color, PixelBuffer};
use rand::Rng;

/// Number of shapes scattered in randomized mode.
pub const SHAPE_COUNT: usize = 10;

/// What gets painted into each buffer of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Fixed two-color diagonal gradient, no shapes.
    Baseline,
    /// Random gradient colors plus [`SHAPE_COUNT`] random shapes.
    Randomized,
}

/// Paint `buffer` according to `mode`.
pub fn paint(buffer: &mut PixelBuffer, mode: PaintMode) {
    match mode {
        PaintMode::Baseline => {
            draw_linear_gradient(buffer, Color::RED, Color::BLUE);
        }
        PaintMode::Randomized => {
            let mut rng = rand::thread_rng();
            let start = random_color(&mut rng);
            let end = random_color(&mut rng);
            draw_linear_gradient(buffer, start, end);
            scatter_shapes(buffer, &mut rng, SHAPE_COUNT);
        }
    }
}

/// Linear gradient from `start` at the top-left corner to `end` at the
/// bottom-right corner, interpolated along the projection of each pixel
/// onto the full diagonal.
pub fn draw_linear_gradient(buffer: &mut PixelBuffer, start: Color, end: Color) {
    let w = buffer.width() as f32;
    let h = buffer.height() as f32;
    let denom = w * w + h * h;
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            let t = (x as f32 * w + y as f32 * h) / denom;
            buffer.put_pixel(x, y, start.lerp(end, t));
        }
    }
}

/// Fill an axis-aligned rectangle. Off-canvas portions are clipped.
pub fn fill_rect(buffer: &mut PixelBuffer, x: i64, y: i64, w: u32, h: u32, color: Color) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w as i64).min(buffer.width() as i64);
    let y1 = (y + h as i64).min(buffer.height() as i64);
    for py in y0..y1 {
        for px in x0..x1 {
            buffer.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Fill an axis-aligned ellipse centered at `(cx, cy)` with radii
/// `(rx, ry)`. Off-canvas portions are clipped.
pub fn fill_ellipse(buffer: &mut PixelBuffer, cx: i64, cy: i64, rx: u32, ry: u32, color: Color) {
    if rx == 0 || ry == 0 {
        return;
    }
    let (rx, ry) = (rx as i64, ry as i64);
    for dy in -ry..=ry {
        for dx in -rx..=rx {
            // inside test in normalized ellipse space
            let nx = dx as f64 / rx as f64;
            let ny = dy as f64 / ry as f64;
            if nx * nx + ny * ny <= 1.0 {
                let px = cx + dx;
                let py = cy + dy;
                if px >= 0 && py >= 0 {
                    buffer.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}

/// Stroke a one-pixel line from `(x0, y0)` to `(x1, y1)` (Bresenham).
pub fn stroke_line(buffer: &mut PixelBuffer, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        if x >= 0 && y >= 0 {
            buffer.put_pixel(x as u32, y as u32, color);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn random_color(rng: &mut impl Rng) -> Color {
    Color::rgba(
        rng.r#gen(),
        rng.r#gen(),
        rng.r#gen(),
        rng.gen_range(0.25..=1.0),
    )
}

fn scatter_shapes(buffer: &mut PixelBuffer, rng: &mut impl Rng, count: usize) {
    let w = buffer.width() as i64;
    let h = buffer.height() as i64;
    for _ in 0..count {
        let color = random_color(rng);
        match rng.gen_range(0..3) {
            0 => {
                let rx = rng.gen_range(1..=(w as u32 / 2).max(1));
                let ry = rng.gen_range(1..=(h as u32 / 2).max(1));
                fill_ellipse(buffer, rng.gen_range(0..w), rng.gen_range(0..h), rx, ry, color);
            }
            1 => {
                let rw = rng.gen_range(1..=(w as u32).max(1));
                let rh = rng.gen_range(1..=(h as u32).max(1));
                fill_rect(buffer, rng.gen_range(0..w), rng.gen_range(0..h), rw, rh, color);
            }
            _ => {
                stroke_line(
                    buffer,
                    rng.gen_range(0..w),
                    rng.gen_range(0..h),
                    rng.gen_range(0..w),
                    rng.gen_range(0..h),
                    color,
                );
            }
        }
    }
}
