use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use line_scan::detect::{detect_lines_with_report, DetectError};
use line_scan::overlay::{mask_image, render_overlay};
use line_scan::source::{ImageSequence, SourceFrame};
use line_scan::{LineDetector, LineDetectorParams};
use serde::Serialize;

/// Find dark lines on a pale background in a sequence of frames.
///
/// Prints one JSON object per frame with the sorted line positions in
/// [-1, 1], left to right.
#[derive(Parser, Debug)]
#[command(name = "line-scan", version, about)]
struct Cli {
    /// Image files or directories of images, processed in order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Detector parameters as JSON; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Binarization cutoff (0-255).
    #[arg(long)]
    threshold: Option<u8>,

    /// Height of the scanned band in pixels.
    #[arg(long)]
    scan_region_height: Option<u32>,

    /// Vertical band placement, 0 = top, 1 = bottom.
    #[arg(long)]
    scan_region_position: Option<f32>,

    /// Pixels ignored at each side of the band.
    #[arg(long)]
    scan_region_width_pad: Option<u32>,

    /// Minimum contour area to count as a line.
    #[arg(long)]
    min_detection_area: Option<u32>,

    /// Mirror positions, for an upside-down camera.
    #[arg(long, overrides_with = "no_invert")]
    invert: bool,

    /// Report positions unmirrored, even if the config sets `invert`.
    #[arg(long, overrides_with = "invert")]
    no_invert: bool,

    /// Write `<stem>_overlay.png` and `<stem>_mask.png` here.
    #[arg(long)]
    overlay_dir: Option<PathBuf>,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<usize>,

    /// off, error, warn, info, debug or trace. With the `tracing` feature,
    /// `RUST_LOG` directives take precedence.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Serialize)]
struct FrameRecord<'a> {
    frame: usize,
    path: &'a Path,
    lines: &'a [f32],
}

impl Cli {
    fn params(&self) -> Result<LineDetectorParams, Box<dyn std::error::Error>> {
        let mut params = match &self.config {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => LineDetectorParams::default(),
        };
        if let Some(v) = self.threshold {
            params.threshold = v;
        }
        if let Some(v) = self.scan_region_height {
            params.scan_region_height = v;
        }
        if let Some(v) = self.scan_region_position {
            params.scan_region_position = v;
        }
        if let Some(v) = self.scan_region_width_pad {
            params.scan_region_width_pad = v;
        }
        if let Some(v) = self.min_detection_area {
            params.min_detection_area = v;
        }
        if self.invert {
            params.invert = true;
        } else if self.no_invert {
            params.invert = false;
        }
        Ok(params)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("line-scan: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let level = line_scan::core::parse_level(&cli.log_level)
        .ok_or_else(|| format!("unknown log level '{}'", cli.log_level))?;
    #[cfg(feature = "tracing")]
    line_scan::core::init_tracing(level, false);
    #[cfg(not(feature = "tracing"))]
    line_scan::core::init_with_level(level)?;

    let detector = LineDetector::new(cli.params()?)?;
    log::info!("detector params: {:?}", detector.params());

    if let Some(dir) = &cli.overlay_dir {
        fs::create_dir_all(dir)?;
    }

    let source = ImageSequence::new(&cli.inputs)?;
    let limit = cli.max_frames.unwrap_or(usize::MAX);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for frame in source.take(limit) {
        let frame = frame?;
        let report = detect_lines_with_report(&frame.image, detector.params())?;
        log::debug!(
            "frame {} ({}): {} lines",
            frame.index,
            frame.path.display(),
            report.positions.len()
        );

        let record = FrameRecord {
            frame: frame.index,
            path: &frame.path,
            lines: &report.positions,
        };
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;

        if let Some(dir) = &cli.overlay_dir {
            write_overlays(dir, &frame, &report)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_overlays(
    dir: &Path,
    frame: &SourceFrame,
    report: &line_scan::LineScanReport,
) -> Result<(), DetectError> {
    let stem = frame
        .path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("frame{:05}", frame.index));

    let overlay_path = dir.join(format!("{stem}_overlay.png"));
    render_overlay(&frame.image, report)
        .save(&overlay_path)
        .map_err(|source| DetectError::Save {
            path: overlay_path.clone(),
            source,
        })?;

    let mask_path = dir.join(format!("{stem}_mask.png"));
    mask_image(report)
        .save(&mask_path)
        .map_err(|source| DetectError::Save {
            path: mask_path.clone(),
            source,
        })?;
    Ok(())
}
