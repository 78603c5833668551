//! Draw-primitive boundary between the core and whatever actually renders.
//!
//! The core emits filled rectangles, lines, text and circles in pixel
//! coordinates (one board cell is `BLOCK_PX` pixels square) and never touches
//! a pixel buffer or terminal itself.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Side length of one board cell in pixels.
pub const BLOCK_PX: i32 = 32;

/// Board index to pixel coordinate.
pub fn px(index: i8) -> i32 {
    index as i32 * BLOCK_PX
}

/// Output sink for draw-primitive requests.
pub trait RenderSink {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb);
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb);
    fn text(&mut self, x: i32, y: i32, s: &str, color: Rgb);
    fn circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_mapping() {
        assert_eq!(px(0), 0);
        assert_eq!(px(1), BLOCK_PX);
        assert_eq!(px(9), 9 * BLOCK_PX);
    }
}
