use image::{Rgb, RgbImage};

/// Uniform image of the given side length.
pub fn flat_rgb(side: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(side, side, Rgb(color))
}

/// Square image split into four uniform quadrants, listed
/// top-left, top-right, bottom-left, bottom-right.
pub fn quadrants_rgb(side: u32, colors: [[u8; 3]; 4]) -> RgbImage {
    assert!(side >= 2 && side % 2 == 0, "side must be even");
    let half = side / 2;
    RgbImage::from_fn(side, side, |x, y| {
        let idx = (x >= half) as usize + 2 * (y >= half) as usize;
        Rgb(colors[idx])
    })
}

/// Piecewise-flat image with mild per-pixel noise; reproducible for a seed.
pub fn noisy_tiles_rgb(side: u32, tile: u32, seed: u64) -> RgbImage {
    assert!(tile > 0, "tile size must be positive");
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    RgbImage::from_fn(side, side, |x, y| {
        let base = ((x / tile) * 67 + (y / tile) * 131) as u8;
        let jitter = (next() % 5) as u8;
        Rgb([base.wrapping_add(jitter), base / 2, 255 - base])
    })
}
