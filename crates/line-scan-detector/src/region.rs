//! Scan band geometry.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, LineDetectorParams};

/// Axis-aligned band of the frame that is scanned for lines, in frame pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRegion {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl ScanRegion {
    /// Map a region-local point into frame coordinates.
    #[inline]
    pub fn to_frame(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.x as f32, y + self.y as f32)
    }
}

/// Resolve the scan band for a frame of `frame_width` x `frame_height`.
///
/// The band starts at row `floor((frame_height - band_height) * position)`
/// and loses `scan_region_width_pad` columns on either side.
pub fn scan_region(
    frame_width: usize,
    frame_height: usize,
    params: &LineDetectorParams,
) -> Result<ScanRegion, ConfigError> {
    params.validate()?;

    let height = params.scan_region_height as usize;
    if height > frame_height {
        return Err(ConfigError::RegionTallerThanFrame {
            region_height: height,
            frame_height,
        });
    }

    let pad = params.scan_region_width_pad as usize;
    if pad.saturating_mul(2) >= frame_width {
        return Err(ConfigError::PadTooWide { pad, frame_width });
    }

    let slack = frame_height - height;
    let y = ((slack as f64) * params.scan_region_position as f64).floor() as usize;

    Ok(ScanRegion {
        x: pad,
        y: y.min(slack),
        width: frame_width - 2 * pad,
        height,
    })
}
