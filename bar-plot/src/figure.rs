//! Owned drawing surface, passed explicitly to every helper. There is no
//! process-wide "current figure" here.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{Error, Result};

/// An RGB canvas that plot helpers render into and the exporter reads from.
pub struct Figure {
    width: u32,
    height: u32,
    background: RGBColor,
    buf: Vec<u8>,
}

impl Figure {
    /// Create a surface filled with opaque white.
    pub fn new(dims: (u32, u32)) -> Result<Self> {
        Self::with_background(dims, WHITE)
    }

    /// Create a surface filled with the given color.
    pub fn with_background((width, height): (u32, u32), background: RGBColor) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::FigureSize(width, height));
        }
        let RGBColor(r, g, b) = background;
        let pixels = width as usize * height as usize;
        let mut buf = Vec::with_capacity(pixels * 3);
        for _ in 0..pixels {
            buf.extend_from_slice(&[r, g, b]);
        }
        Ok(Self {
            width,
            height,
            background,
            buf,
        })
    }

    /// A plotters drawing area backed by this figure's pixels.
    pub fn area(&mut self) -> DrawingArea<BitMapBackend<'_>, Shift> {
        BitMapBackend::with_buffer(&mut self.buf, (self.width, self.height)).into_drawing_area()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGB8 pixels, row-major.
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    pub(crate) fn background(&self) -> RGBColor {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_filled_with_background() {
        let fig = Figure::new((4, 2)).unwrap();
        assert_eq!(fig.buffer().len(), 4 * 2 * 3);
        assert!(fig.buffer().iter().all(|&c| c == 255));

        let fig = Figure::with_background((2, 2), RGBColor(10, 20, 30)).unwrap();
        assert_eq!(&fig.buffer()[..6], &[10, 20, 30, 10, 20, 30]);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(Figure::new((0, 10)), Err(Error::FigureSize(0, 10))));
        assert!(matches!(Figure::new((10, 0)), Err(Error::FigureSize(10, 0))));
    }
}
