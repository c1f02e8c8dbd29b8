//! Spatial moments of contour polygons.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MomentsError {
    #[error("zeroth moment must be finite and non-negative (got {0})")]
    InvalidArea(f64),
    #[error("first moments must be finite (m10={m10}, m01={m01})")]
    NonFinite { m10: f64, m01: f64 },
}

/// Zeroth and first spatial moments of a closed region.
///
/// `m00` is the enclosed area; `m10` and `m01` are the x- and y-weighted
/// sums, so the centroid is `(m10 / m00, m01 / m00)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    m00: f64,
    m10: f64,
    m01: f64,
}

impl Moments {
    pub fn new(m00: f64, m10: f64, m01: f64) -> Result<Self, MomentsError> {
        if !m00.is_finite() || m00 < 0.0 {
            return Err(MomentsError::InvalidArea(m00));
        }
        if !m10.is_finite() || !m01.is_finite() {
            return Err(MomentsError::NonFinite { m10, m01 });
        }
        Ok(Self { m00, m10, m01 })
    }

    /// Moments of the polygon through `points`, closed back to the first
    /// vertex.
    ///
    /// Uses Green's theorem over the edges. The result does not depend on
    /// the winding direction. Degenerate polygons (fewer than three vertices
    /// or zero area) yield all-zero moments.
    pub fn from_polygon(points: &[Point2<i32>]) -> Self {
        if points.len() < 3 {
            return Self::default();
        }

        let mut a00 = 0.0f64;
        let mut a10 = 0.0f64;
        let mut a01 = 0.0f64;

        let mut prev = points[points.len() - 1];
        for &p in points {
            let (x0, y0) = (prev.x as f64, prev.y as f64);
            let (x1, y1) = (p.x as f64, p.y as f64);
            let cross = x0 * y1 - x1 * y0;
            a00 += cross;
            a10 += cross * (x0 + x1);
            a01 += cross * (y0 + y1);
            prev = p;
        }

        if a00.abs() <= f64::EPSILON {
            return Self::default();
        }
        let sign = a00.signum();
        Self {
            m00: sign * a00 / 2.0,
            m10: sign * a10 / 6.0,
            m01: sign * a01 / 6.0,
        }
    }

    #[inline]
    pub fn m00(&self) -> f64 {
        self.m00
    }

    #[inline]
    pub fn m10(&self) -> f64 {
        self.m10
    }

    #[inline]
    pub fn m01(&self) -> f64 {
        self.m01
    }

    /// Area-weighted centroid, or `None` for an empty region.
    pub fn centroid(&self) -> Option<Point2<f64>> {
        if self.m00 > 0.0 {
            Some(Point2::new(self.m10 / self.m00, self.m01 / self.m00))
        } else {
            None
        }
    }
}
