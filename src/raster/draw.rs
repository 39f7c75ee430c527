//! Drawing primitives: clear, Bresenham lines, scanline-filled triangles

use super::{Color, BYTES_PER_PIXEL};

/// Write one pixel, silently clipping coordinates outside the buffer
#[inline]
fn put_pixel(frame: &mut [u8], width: usize, height: usize, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= width || y >= height {
        return;
    }
    let idx = (y * width + x) * BYTES_PER_PIXEL;
    frame[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_bytes());
}

/// Fill the whole buffer with one flat color
pub fn clear(frame: &mut [u8], width: usize, height: usize, color: Color) {
    let bytes = color.to_bytes();
    let len = (width * height * BYTES_PER_PIXEL).min(frame.len());
    for px in frame[..len].chunks_exact_mut(BYTES_PER_PIXEL) {
        px.copy_from_slice(&bytes);
    }
}

/// Draw a line from (x0, y0) to (x1, y1) with Bresenham's algorithm.
/// Both endpoints are drawn; pixels outside the buffer are clipped.
#[allow(clippy::too_many_arguments)]
pub fn line(
    frame: &mut [u8],
    width: usize,
    height: usize,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Color,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        put_pixel(frame, width, height, x, y, color);

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

/// Half-open horizontal span [ceil(xl), xr) at row y
#[inline]
fn span(frame: &mut [u8], width: usize, height: usize, y: i32, xl: f32, xr: f32, color: Color) {
    let start = (xl.ceil() as i32).max(0);
    let end = (xr.ceil() as i32).min(width as i32);
    for x in start..end {
        put_pixel(frame, width, height, x, y, color);
    }
}

/// Fill a triangle with a scanline sweep.
///
/// Vertices are sorted by ascending y; rows `[top.y, mid.y)` interpolate
/// between the long (top-to-bottom) edge and the first short edge, rows
/// `[mid.y, bot.y)` switch to the second short edge. Spans are half-open
/// on the right and rows half-open at the bottom, so two triangles sharing
/// an edge neither gap nor double-draw. A zero-height triangle is a no-op.
#[allow(clippy::too_many_arguments)]
pub fn triangle(
    frame: &mut [u8],
    width: usize,
    height: usize,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Color,
) {
    let mut v = [(x0, y0), (x1, y1), (x2, y2)];
    v.sort_by_key(|p| p.1);
    let [top, mid, bot] = v;

    if top.1 == bot.1 {
        return;
    }

    let m_long = (bot.0 - top.0) as f32 / (bot.1 - top.1) as f32;

    // Which side the long edge bounds is fixed for the whole triangle:
    // inside a convex triangle the short edges never cross it.
    let long_at_mid = top.0 as f32 + m_long * (mid.1 - top.1) as f32;
    let long_is_left = long_at_mid <= mid.0 as f32;

    if mid.1 > top.1 {
        let m_short = (mid.0 - top.0) as f32 / (mid.1 - top.1) as f32;
        for y in top.1..mid.1 {
            if y < 0 || y >= height as i32 {
                continue;
            }
            let dy = (y - top.1) as f32;
            let x_long = top.0 as f32 + m_long * dy;
            let x_short = top.0 as f32 + m_short * dy;
            let (xl, xr) = if long_is_left { (x_long, x_short) } else { (x_short, x_long) };
            span(frame, width, height, y, xl, xr, color);
        }
    }

    if bot.1 > mid.1 {
        let m_short = (bot.0 - mid.0) as f32 / (bot.1 - mid.1) as f32;
        for y in mid.1..bot.1 {
            if y < 0 || y >= height as i32 {
                continue;
            }
            let x_long = top.0 as f32 + m_long * (y - top.1) as f32;
            let x_short = mid.0 as f32 + m_short * (y - mid.1) as f32;
            let (xl, xr) = if long_is_left { (x_long, x_short) } else { (x_short, x_long) };
            span(frame, width, height, y, xl, xr, color);
        }
    }
}

/// Axis-aligned gridlines every `spacing` pixels, starting at the origin
pub fn grid(frame: &mut [u8], width: usize, height: usize, spacing: usize, color: Color) {
    if spacing == 0 {
        return;
    }
    for y in (0..height).step_by(spacing) {
        for x in 0..width {
            put_pixel(frame, width, height, x as i32, y as i32, color);
        }
    }
    for x in (0..width).step_by(spacing) {
        for y in 0..height {
            put_pixel(frame, width, height, x as i32, y as i32, color);
        }
    }
}
