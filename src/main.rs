use region_segmenter::image::ImageRgb8;
use region_segmenter::{GrowOptions, Segmenter};

fn main() {
    // Demo stub: two flat halves separated by a sharp vertical edge
    let side = 64usize;
    let mut rgb = vec![0u8; side * side * 3];
    for y in 0..side {
        for x in 0..side {
            let v = if x < side / 2 { 40u8 } else { 210u8 };
            let i = 3 * (y * side + x);
            rgb[i..i + 3].copy_from_slice(&[v, v / 2, 255 - v]);
        }
    }
    let img = ImageRgb8::packed(side, side, &rgb);

    match Segmenter::new(&img, GrowOptions::new(6, 800.0)) {
        Ok(seg) => {
            let report = seg.report();
            println!(
                "segments={} merges={} passes={} latency_ms={:.3}",
                report.segments,
                report.merges,
                report.passes.len(),
                report.timing.total_ms
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
