mod buffer;
pub mod io;
pub mod rgb8;
pub mod traits;

pub use self::rgb8::ImageRgb8;
pub use self::traits::{ImageSink, ImageSource};
