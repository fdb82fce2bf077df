use region_segmenter::config::segment;
use region_segmenter::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use region_segmenter::overlay::overlay_segmentation;
use region_segmenter::Segmenter;
use image::RgbImage;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = segment::load_config(Path::new(&config_path))?;

    let rgb = load_rgb_image(&config.input)?;
    let segmenter = Segmenter::new(&rgb, config.grow).map_err(|e| e.to_string())?;
    let report = segmenter.report();

    let mut overlay = RgbImage::new(0, 0);
    overlay_segmentation(&rgb, &segmenter, &mut overlay, config.overlay.marker)
        .map_err(|e| e.to_string())?;
    save_rgb_image(&overlay, &config.output.overlay_image)?;

    let options = segmenter.options();
    println!(
        "Segmented {}x{} block at threshold {} (chase cap {} hops) into {} segments ({} merges, {} passes, {:.3} ms)",
        report.side,
        report.side,
        options.threshold,
        options.chase_hop_cap(),
        report.segments,
        report.merges,
        report.passes.len(),
        report.timing.total_ms
    );
    println!(
        "Saved boundary overlay to {}",
        config.output.overlay_image.display()
    );

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved run report to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: segment_demo <config.json>".to_string()
}
