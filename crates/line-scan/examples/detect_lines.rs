use line_scan::detect;
use line_scan::LineDetectorParams;

#[cfg(feature = "tracing")]
use line_scan::core::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    init_tracing(log::LevelFilter::Info, false);

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: detect_lines <image_path>");
        return Ok(());
    };

    let frame = detect::load_frame(path)?;
    // scan the strip closest to the robot
    let params = LineDetectorParams {
        scan_region_position: 1.0,
        ..LineDetectorParams::default()
    };

    let lines = detect::detect_lines(&frame, &params)?;
    if lines.is_empty() {
        println!("no lines visible");
    } else {
        println!("lines (left to right): {lines:?}");
    }

    Ok(())
}
