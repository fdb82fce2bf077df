use super::traits::ImageSource;
use crate::types::Color;

/// Borrowed interleaved 8-bit RGB raster.
#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgb8<'a> {
    /// Tightly packed view (`stride = 3 * w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: 3 * w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Color {
        let i = y * self.stride + 3 * x;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

impl<'a> ImageSource for ImageRgb8<'a> {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn pixel_color(&self, x: usize, y: usize) -> Color {
        self.get(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strided_view_skips_row_padding() {
        // 2x2 image, rows padded to 8 bytes
        let data = [
            1, 2, 3, 4, 5, 6, 0, 0, //
            7, 8, 9, 10, 11, 12, 0, 0,
        ];
        let view = ImageRgb8 {
            w: 2,
            h: 2,
            stride: 8,
            data: &data,
        };
        assert_eq!(view.pixel_color(1, 0), [4, 5, 6]);
        assert_eq!(view.pixel_color(0, 1), [7, 8, 9]);
        assert_eq!(view.pixel_color(1, 1), [10, 11, 12]);
        assert!(view.covers(2));
        assert!(!view.covers(4));
    }
}
