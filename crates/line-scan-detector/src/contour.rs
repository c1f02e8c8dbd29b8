//! Flat border-following contour extraction on binary masks.

use image::{GrayImage as ImageGray, ImageBuffer};
use imageproc::contours::BorderType;
use line_scan_core::GrayImage;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::Moments;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContourKind {
    /// Outer boundary of a foreground blob.
    Outer,
    /// Boundary of a background hole inside a blob.
    Hole,
}

/// One closed boundary in mask pixel coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub kind: ContourKind,
    pub points: Vec<Point2<i32>>,
}

impl Contour {
    #[inline]
    pub fn moments(&self) -> Moments {
        Moments::from_polygon(&self.points)
    }
}

/// All borders in `mask`, outer and hole alike, with no parent/child
/// grouping. Any non-zero pixel counts as foreground.
pub fn find_contours(mask: &GrayImage) -> Vec<Contour> {
    if mask.width == 0 || mask.height == 0 || mask.count_nonzero() == 0 {
        return Vec::new();
    }

    // One pixel of background all around, so blobs touching the mask edge
    // still get a closed outer border.
    let img = padded(mask);

    imageproc::contours::find_contours::<i32>(&img)
        .into_iter()
        .map(|c| Contour {
            kind: match c.border_type {
                BorderType::Outer => ContourKind::Outer,
                BorderType::Hole => ContourKind::Hole,
            },
            points: c
                .points
                .iter()
                .map(|p| Point2::new(p.x - 1, p.y - 1))
                .collect(),
        })
        .collect()
}

fn padded(mask: &GrayImage) -> ImageGray {
    let (w, h) = (mask.width as u32, mask.height as u32);
    ImageBuffer::from_fn(w + 2, h + 2, |x, y| {
        let inside = (1..=w).contains(&x) && (1..=h).contains(&y);
        let v = if inside {
            mask.get(x as usize - 1, y as usize - 1)
        } else {
            0
        };
        image::Luma([v])
    })
}
