//! `ImageSource` / `ImageSink` adapters for `image` crate buffers.
use super::traits::{ImageSink, ImageSource};
use crate::types::Color;
use image::{Rgb, RgbImage, RgbaImage};

impl ImageSource for RgbImage {
    #[inline]
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }
    #[inline]
    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }
    #[inline]
    fn pixel_color(&self, x: usize, y: usize) -> Color {
        self.get_pixel(x as u32, y as u32).0
    }
}

/// Alpha is dropped; the cost model only sees RGB.
impl ImageSource for RgbaImage {
    #[inline]
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }
    #[inline]
    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }
    #[inline]
    fn pixel_color(&self, x: usize, y: usize) -> Color {
        let [r, g, b, _] = self.get_pixel(x as u32, y as u32).0;
        [r, g, b]
    }
}

/// Replaces the buffer with a freshly rendered `width x height` image.
impl ImageSink for RgbImage {
    fn write(
        &mut self,
        width: usize,
        height: usize,
        color: &dyn Fn(usize, usize) -> Color,
    ) -> Result<(), String> {
        let w = u32::try_from(width).map_err(|_| format!("width {width} exceeds u32"))?;
        let h = u32::try_from(height).map_err(|_| format!("height {height} exceeds u32"))?;
        *self = RgbImage::from_fn(w, h, |x, y| Rgb(color(x as usize, y as usize)));
        Ok(())
    }
}
