use line_scan_core::{FrameView, GrayImage};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::contour::{find_contours, Contour, ContourKind};
use crate::preprocess::{gaussian_blur, threshold_inverted, to_luma_region};
use crate::region::{scan_region, ScanRegion};
use crate::{ConfigError, LineDetectorParams, Moments};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Per-contour outcome of one detection run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContourReport {
    pub kind: ContourKind,
    /// Boundary in region-local pixel coordinates.
    pub points: Vec<Point2<i32>>,
    pub moments: Moments,
    /// Region-local centroid; `None` when the contour encloses no area.
    pub centroid: Option<Point2<f64>>,
    /// Whether the contour passed the area filter.
    pub accepted: bool,
    /// Normalized line position, set for accepted contours only.
    pub position: Option<f32>,
}

/// Everything a detection run produced, for overlays and debugging.
#[derive(Clone, Debug)]
pub struct LineScanReport {
    pub region: ScanRegion,
    /// Binarized band; 255 marks candidate line pixels.
    pub mask: GrayImage,
    pub contours: Vec<ContourReport>,
    /// Sorted line positions, identical to what `detect` returns.
    pub positions: Vec<f32>,
}

/// Stateless dark-line detector.
///
/// Holds validated parameters only, so a single instance can be shared
/// across threads and reused for every frame.
#[derive(Clone, Debug)]
pub struct LineDetector {
    params: LineDetectorParams,
}

impl LineDetector {
    /// Create a detector, rejecting parameters that can never be valid.
    pub fn new(params: LineDetectorParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &LineDetectorParams {
        &self.params
    }

    /// Sorted positions of dark lines in `frame`.
    pub fn detect(&self, frame: &FrameView<'_>) -> Result<Vec<f32>, ConfigError> {
        detect(frame, &self.params)
    }

    /// Like [`LineDetector::detect`], keeping the mask and contour details.
    pub fn detect_with_report(&self, frame: &FrameView<'_>) -> Result<LineScanReport, ConfigError> {
        detect_with_report(frame, &self.params)
    }
}

/// Find dark lines on a pale background in the configured band of `frame`.
///
/// Returns positions in ascending order, where -1 is the left edge of the
/// frame, 0 its center and 1 its right edge (mirrored when `invert` is set).
/// An empty vector means no line was visible.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "debug",
        skip(frame, params),
        fields(width = frame.width(), height = frame.height())
    )
)]
pub fn detect(frame: &FrameView<'_>, params: &LineDetectorParams) -> Result<Vec<f32>, ConfigError> {
    let mask = binarize(frame, params)?.1;
    Ok(positions_from_mask(&mask, frame.width(), params))
}

/// Run the pipeline and return the intermediate mask and every contour.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "debug",
        skip(frame, params),
        fields(width = frame.width(), height = frame.height())
    )
)]
pub fn detect_with_report(
    frame: &FrameView<'_>,
    params: &LineDetectorParams,
) -> Result<LineScanReport, ConfigError> {
    let (region, mask) = binarize(frame, params)?;
    let contours = evaluate_contours(find_contours(&mask), frame.width(), params);
    let positions = sorted_positions(&contours);
    Ok(LineScanReport {
        region,
        mask,
        contours,
        positions,
    })
}

/// Positions of the line blobs in an already binarized band.
///
/// `frame_width` is the width of the full frame the band was cut from; it is
/// the normalization denominator even when the band is padded, and the
/// band-local centroid is used as is.
pub fn positions_from_mask(
    mask: &GrayImage,
    frame_width: usize,
    params: &LineDetectorParams,
) -> Vec<f32> {
    let contours = evaluate_contours(find_contours(mask), frame_width, params);
    sorted_positions(&contours)
}

/// Map a band-local centroid x onto [-1, 1] across the frame width.
#[inline]
pub fn normalize_x(cx: f64, frame_width: usize, invert: bool) -> f32 {
    let p = (2.0 * cx / frame_width as f64 - 1.0) as f32;
    if invert {
        -p
    } else {
        p
    }
}

fn binarize(
    frame: &FrameView<'_>,
    params: &LineDetectorParams,
) -> Result<(ScanRegion, GrayImage), ConfigError> {
    let region = scan_region(frame.width(), frame.height(), params)?;
    log::debug!(
        "scan region x={} y={} {}x{}",
        region.x,
        region.y,
        region.width,
        region.height
    );

    let gray = to_luma_region(frame, &region);
    let blurred = gaussian_blur(&gray);
    let mask = threshold_inverted(&blurred, params.threshold);
    Ok((region, mask))
}

fn evaluate_contours(
    contours: Vec<Contour>,
    frame_width: usize,
    params: &LineDetectorParams,
) -> Vec<ContourReport> {
    let min_area = params.min_detection_area as f64;
    let total = contours.len();

    let reports: Vec<ContourReport> = contours
        .into_iter()
        .map(|c| {
            let moments = c.moments();
            let centroid = moments.centroid();
            let accepted = moments.m00() > min_area;
            let position = centroid
                .filter(|_| accepted)
                .map(|p| normalize_x(p.x, frame_width, params.invert));
            log::trace!(
                "{:?} contour: {} points, m00={:.1}, accepted={}",
                c.kind,
                c.points.len(),
                moments.m00(),
                accepted
            );
            ContourReport {
                kind: c.kind,
                points: c.points,
                moments,
                centroid,
                accepted,
                position,
            }
        })
        .collect();

    log::debug!(
        "{} of {} contours above area {}",
        reports.iter().filter(|r| r.accepted).count(),
        total,
        params.min_detection_area
    );
    reports
}

fn sorted_positions(reports: &[ContourReport]) -> Vec<f32> {
    let mut out: Vec<f32> = reports.iter().filter_map(|r| r.position).collect();
    out.sort_by(f32::total_cmp);
    out
}
