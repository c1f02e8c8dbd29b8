use serde::{Deserialize, Serialize};

/// Order of the three interleaved color channels in a frame buffer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    #[default]
    Rgb,
    /// Blue first, as delivered by most camera capture stacks.
    Bgr,
}

/// Errors raised when wrapping a raw frame buffer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("invalid frame dimensions (width={width}, height={height})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("invalid frame buffer length (expected {expected} bytes, got {got})")]
    BufferSize { expected: usize, got: usize },
}

/// Borrowed 3-channel color frame, row-major and interleaved.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    width: usize,
    height: usize,
    order: ChannelOrder,
    data: &'a [u8], // len = w*h*3
}

impl<'a> FrameView<'a> {
    pub const CHANNELS: usize = 3;

    pub fn new(
        width: usize,
        height: usize,
        order: ChannelOrder,
        data: &'a [u8],
    ) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(Self::CHANNELS))
            .ok_or(FrameError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(FrameError::BufferSize {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            order,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Pixel at `(x, y)` as `[r, g, b]`, regardless of the buffer order.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * Self::CHANNELS;
        let px = &self.data[i..i + Self::CHANNELS];
        match self.order {
            ChannelOrder::Rgb => [px[0], px[1], px[2]],
            ChannelOrder::Bgr => [px[2], px[1], px[0]],
        }
    }
}

/// Owned single-channel 8-bit image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// All-zero image of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Number of non-zero pixels.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_rejects_wrong_buffer_length() {
        let data = vec![0u8; 4 * 3 * 3 - 1];
        let err = FrameView::new(4, 3, ChannelOrder::Rgb, &data).unwrap_err();
        assert_eq!(
            err,
            FrameError::BufferSize {
                expected: 36,
                got: 35
            }
        );
    }

    #[test]
    fn frame_rejects_zero_dimensions() {
        let err = FrameView::new(0, 3, ChannelOrder::Rgb, &[]).unwrap_err();
        assert!(matches!(err, FrameError::InvalidDimensions { .. }));
    }

    #[test]
    fn bgr_pixels_are_reported_as_rgb() {
        let data = [10u8, 20, 30, 40, 50, 60];
        let bgr = FrameView::new(2, 1, ChannelOrder::Bgr, &data).expect("frame");
        assert_eq!(bgr.rgb(0, 0), [30, 20, 10]);
        assert_eq!(bgr.rgb(1, 0), [60, 50, 40]);

        let rgb = FrameView::new(2, 1, ChannelOrder::Rgb, &data).expect("frame");
        assert_eq!(rgb.rgb(1, 0), [40, 50, 60]);
    }

    #[test]
    fn gray_from_fn_is_row_major() {
        let img = GrayImage::from_fn(3, 2, |x, y| (y * 3 + x) as u8);
        assert_eq!(img.data, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(img.get(2, 1), 5);
        assert_eq!(img.count_nonzero(), 5);
    }
}
