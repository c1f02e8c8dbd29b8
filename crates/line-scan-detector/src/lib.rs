//! Dark-line detection for line-following robots.
//!
//! The detector scans a horizontal band of a color frame for dark features on
//! a pale background and reports each one as a horizontal position in
//! `[-1, 1]`:
//!
//! 1. crop the band (`scan_region`),
//! 2. reduce to luma and smooth with a fixed 21x21 Gaussian,
//! 3. binarize with inverted polarity so dark pixels become foreground,
//! 4. trace every contour in the mask without hierarchy,
//! 5. keep contours whose area exceeds `min_detection_area`,
//! 6. normalize each centroid's x across the frame width and sort.
//!
//! Detection is a pure function of the frame and the parameters; there is no
//! state carried between frames.
//!
//! ```
//! use line_scan_core::{ChannelOrder, FrameView};
//! use line_scan_detector::{detect, LineDetectorParams};
//!
//! let (w, h) = (200usize, 60usize);
//! let mut pixels = vec![255u8; w * h * 3];
//! for y in 0..h {
//!     for x in 90..110 {
//!         let i = (y * w + x) * 3;
//!         pixels[i..i + 3].fill(0);
//!     }
//! }
//! let frame = FrameView::new(w, h, ChannelOrder::Rgb, &pixels).unwrap();
//! let lines = detect(&frame, &LineDetectorParams::default()).unwrap();
//! assert_eq!(lines.len(), 1);
//! assert!(lines[0].abs() < 0.02);
//! ```

mod contour;
mod detector;
mod error;
mod moments;
mod params;
mod preprocess;
mod region;

pub use contour::{find_contours, Contour, ContourKind};
pub use detector::{
    detect, detect_with_report, normalize_x, positions_from_mask, ContourReport, LineDetector,
    LineScanReport,
};
pub use error::ConfigError;
pub use moments::{Moments, MomentsError};
pub use params::LineDetectorParams;
pub use preprocess::{
    gaussian_blur, gaussian_kernel, threshold_inverted, to_luma_region, BLUR_KERNEL_SIZE,
};
pub use region::{scan_region, ScanRegion};
