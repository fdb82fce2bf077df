use crate::types::Color;

/// Read access to an RGB raster.
pub trait ImageSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Color at `(x, y)`; callers stay within `width() x height()`.
    fn pixel_color(&self, x: usize, y: usize) -> Color;

    /// Whether the `side x side` block anchored at the origin is available.
    fn covers(&self, side: usize) -> bool {
        self.width() >= side && self.height() >= side
    }
}

/// Consumer of a rendered RGB raster.
pub trait ImageSink {
    fn write(
        &mut self,
        width: usize,
        height: usize,
        color: &dyn Fn(usize, usize) -> Color,
    ) -> Result<(), String>;
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    #[inline]
    fn width(&self) -> usize {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> usize {
        (**self).height()
    }
    #[inline]
    fn pixel_color(&self, x: usize, y: usize) -> Color {
        (**self).pixel_color(x, y)
    }
}
