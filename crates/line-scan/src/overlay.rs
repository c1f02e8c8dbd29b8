//! Debug rendering of detection results.
//!
//! Draws the scan band, every traced contour and a dot on each accepted
//! centroid on top of the source frame.

use ::image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::detector::LineScanReport;

const BAND_COLOR: Rgb<u8> = Rgb([0, 128, 255]);
const CONTOUR_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const CENTROID_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const CENTROID_RADIUS: i32 = 10;

/// Copy of `frame` with the band, contours and accepted centroids drawn on it.
pub fn render_overlay(frame: &RgbImage, report: &LineScanReport) -> RgbImage {
    let mut out = frame.clone();
    let region = report.region;

    if region.width > 0 && region.height > 0 {
        draw_hollow_rect_mut(
            &mut out,
            Rect::at(region.x as i32, region.y as i32)
                .of_size(region.width as u32, region.height as u32),
            BAND_COLOR,
        );
    }

    for contour in &report.contours {
        for p in &contour.points {
            let x = p.x as i64 + region.x as i64;
            let y = p.y as i64 + region.y as i64;
            if x >= 0 && y >= 0 && (x as u32) < out.width() && (y as u32) < out.height() {
                out.put_pixel(x as u32, y as u32, CONTOUR_COLOR);
            }
        }
    }

    for contour in report.contours.iter().filter(|c| c.accepted) {
        if let Some(c) = contour.centroid {
            let (cx, cy) = region.to_frame(c.x as f32, c.y as f32);
            draw_filled_circle_mut(
                &mut out,
                (cx.round() as i32, cy.round() as i32),
                CENTROID_RADIUS,
                CENTROID_COLOR,
            );
        }
    }

    out
}

/// The binarized band as an `image::GrayImage`.
pub fn mask_image(report: &LineScanReport) -> GrayImage {
    let mask = &report.mask;
    GrayImage::from_fn(mask.width as u32, mask.height as u32, |x, y| {
        Luma([mask.get(x as usize, y as usize)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::detect_lines_with_report;
    use crate::detector::LineDetectorParams;

    fn pale_frame_with_bar() -> RgbImage {
        RgbImage::from_fn(160, 90, |x, _| {
            if (60..80).contains(&x) {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        })
    }

    #[test]
    fn overlay_marks_the_centroid() {
        let frame = pale_frame_with_bar();
        let params = LineDetectorParams {
            scan_region_position: 1.0,
            ..LineDetectorParams::default()
        };
        let report = detect_lines_with_report(&frame, &params).expect("detect");
        assert_eq!(report.positions.len(), 1);

        let overlay = render_overlay(&frame, &report);
        assert_eq!(overlay.dimensions(), frame.dimensions());

        let c = report
            .contours
            .iter()
            .find(|c| c.accepted)
            .and_then(|c| c.centroid)
            .expect("centroid");
        let (cx, cy) = report.region.to_frame(c.x as f32, c.y as f32);
        assert_eq!(
            *overlay.get_pixel(cx.round() as u32, cy.round() as u32),
            CENTROID_COLOR
        );
        // untouched outside the band
        assert_eq!(*overlay.get_pixel(5, 5), Rgb([255, 255, 255]));
    }

    #[test]
    fn mask_image_matches_report_mask() {
        let frame = pale_frame_with_bar();
        let report =
            detect_lines_with_report(&frame, &LineDetectorParams::default()).expect("detect");
        let mask = mask_image(&report);
        assert_eq!(mask.width() as usize, report.mask.width);
        assert_eq!(mask.height() as usize, report.mask.height);
        assert_eq!(mask.as_raw(), &report.mask.data);
    }
}
