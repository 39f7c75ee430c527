//! Software rasterizer
//!
//! Stateless drawing primitives over a caller-owned pixel buffer. The
//! buffer is contiguous row-major RGBA; width and height are passed on
//! every call and never cached. Writes outside the buffer are silently
//! clipped. Callers hand in already-projected integer screen coordinates;
//! nothing here reads camera or transform state.

mod draw;
mod types;

pub use draw::*;
pub use types::*;

/// Bytes per pixel of every buffer this module draws into (RGBA)
pub const BYTES_PER_PIXEL: usize = 4;
