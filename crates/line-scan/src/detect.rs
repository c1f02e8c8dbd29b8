use crate::core::{ChannelOrder, FrameError, FrameView};
use crate::detector::{self, ConfigError, LineDetectorParams, LineScanReport};
use std::path::{Path, PathBuf};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to load image {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("failed to write image {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },
}

/// Borrow an `image::RgbImage` as a `line-scan-core` frame.
pub fn frame_view(img: &::image::RgbImage) -> Result<FrameView<'_>, FrameError> {
    FrameView::new(
        img.width() as usize,
        img.height() as usize,
        ChannelOrder::Rgb,
        img.as_raw(),
    )
}

/// Decode an image file into an RGB frame.
pub fn load_frame(path: impl AsRef<Path>) -> Result<::image::RgbImage, DetectError> {
    let path = path.as_ref();
    let img = ::image::open(path).map_err(|source| DetectError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgb8())
}

/// Run line detection on an RGB image.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, params), fields(width = img.width(), height = img.height()))
)]
pub fn detect_lines(
    img: &::image::RgbImage,
    params: &LineDetectorParams,
) -> Result<Vec<f32>, DetectError> {
    let frame = frame_view(img)?;
    Ok(detector::detect(&frame, params)?)
}

/// Run line detection and keep the mask and contours for display.
pub fn detect_lines_with_report(
    img: &::image::RgbImage,
    params: &LineDetectorParams,
) -> Result<LineScanReport, DetectError> {
    let frame = frame_view(img)?;
    Ok(detector::detect_with_report(&frame, params)?)
}

/// Convenience overload for any decoded image; converts to RGB first.
pub fn detect_lines_dynamic(
    img: &::image::DynamicImage,
    params: &LineDetectorParams,
) -> Result<Vec<f32>, DetectError> {
    match img {
        ::image::DynamicImage::ImageRgb8(rgb) => detect_lines(rgb, params),
        other => detect_lines(&other.to_rgb8(), params),
    }
}

/// Run line detection on a raw interleaved 3-channel buffer.
pub fn detect_lines_from_rgb_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
    order: ChannelOrder,
    params: &LineDetectorParams,
) -> Result<Vec<f32>, DetectError> {
    let frame = FrameView::new(width as usize, height as usize, order, pixels)?;
    Ok(detector::detect(&frame, params)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{DynamicImage, Rgb, RgbImage};

    fn frame_with_bar(x0: u32, x1: u32) -> RgbImage {
        RgbImage::from_fn(200, 80, |x, _| {
            if (x0..x1).contains(&x) {
                Rgb([10, 10, 10])
            } else {
                Rgb([240, 240, 240])
            }
        })
    }

    #[test]
    fn rgb_image_round_trips_through_the_detector() {
        let img = frame_with_bar(120, 140);
        let lines = detect_lines(&img, &LineDetectorParams::default()).expect("detect");
        assert_eq!(lines.len(), 1);
        approx::assert_abs_diff_eq!(lines[0], 2.0 * 129.5 / 200.0 - 1.0, epsilon = 0.02);
    }

    #[test]
    fn dynamic_gray_images_are_converted() {
        let img = DynamicImage::ImageRgb8(frame_with_bar(20, 40));
        let gray = DynamicImage::ImageLuma8(img.to_luma8());
        let a = detect_lines_dynamic(&img, &LineDetectorParams::default()).expect("rgb");
        let b = detect_lines_dynamic(&gray, &LineDetectorParams::default()).expect("gray");
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        approx::assert_abs_diff_eq!(a[0], b[0], epsilon = 0.01);
    }

    #[test]
    fn raw_buffer_length_is_checked() {
        let err = detect_lines_from_rgb_u8(
            4,
            4,
            &[0u8; 10],
            ChannelOrder::Bgr,
            &LineDetectorParams::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DetectError::Frame(FrameError::BufferSize {
                expected: 48,
                got: 10
            })
        ));
    }

    #[test]
    fn config_errors_pass_through() {
        let img = frame_with_bar(0, 0);
        let params = LineDetectorParams {
            scan_region_height: 500,
            ..LineDetectorParams::default()
        };
        let err = detect_lines(&img, &params).unwrap_err();
        assert!(matches!(
            err,
            DetectError::Config(ConfigError::RegionTallerThanFrame { .. })
        ));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = load_frame("/nonexistent/frame.png").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/frame.png"));
    }
}
