//! High-level facade crate for the `line-scan-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - (feature-gated) helpers that run the detector on `image` types, render
//!   debug overlays and read frame sequences from disk
//! - (feature `cli`) the `line-scan` command-line driver
//!
//! ## Quickstart
//!
//! ```no_run
//! use line_scan::detect;
//! use line_scan::LineDetectorParams;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frame = detect::load_frame("floor.png")?;
//! let params = LineDetectorParams {
//!     scan_region_position: 1.0,
//!     ..LineDetectorParams::default()
//! };
//!
//! let lines = detect::detect_lines(&frame, &params)?;
//! println!("lines: {lines:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `line_scan::core`: frame and grayscale image types, logger setup.
//! - `line_scan::detector`: the detection pipeline and its stages.
//! - `line_scan::detect` (feature `image`): helpers from `image::RgbImage`.
//! - `line_scan::overlay` (feature `image`): debug rendering.
//! - `line_scan::source` (feature `image`): image-file frame sequences.

pub use line_scan_core as core;
pub use line_scan_detector as detector;

pub use line_scan_core::{ChannelOrder, FrameView};
pub use line_scan_detector::{ConfigError, LineDetector, LineDetectorParams, LineScanReport};

#[cfg(feature = "image")]
pub mod detect;
#[cfg(feature = "image")]
pub mod overlay;
#[cfg(feature = "image")]
pub mod source;
