//! Color reduction, smoothing and binarization of the scan band.

use line_scan_core::{FrameView, GrayImage};

use crate::ScanRegion;

/// Side length of the Gaussian smoothing kernel.
pub const BLUR_KERNEL_SIZE: usize = 21;

// BT.601 luma weights in Q14 fixed point.
const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;

/// Crop `region` out of `frame` and reduce it to 8-bit luma.
pub fn to_luma_region(frame: &FrameView<'_>, region: &ScanRegion) -> GrayImage {
    GrayImage::from_fn(region.width, region.height, |x, y| {
        let [r, g, b] = frame.rgb(region.x + x, region.y + y);
        let acc = r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B;
        ((acc + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
    })
}

/// Normalized 1D Gaussian taps for an odd kernel `size`.
///
/// Sigma follows the size: `0.3 * ((size - 1) / 2 - 1) + 0.8`.
pub fn gaussian_kernel(size: usize) -> Vec<f32> {
    debug_assert!(size % 2 == 1, "kernel size must be odd");
    let radius = (size / 2) as f64;
    let sigma = 0.3 * (radius - 1.0) + 0.8;
    let denom = 2.0 * sigma * sigma;

    let taps: Vec<f64> = (0..size)
        .map(|i| {
            let x = i as f64 - radius;
            (-(x * x) / denom).exp()
        })
        .collect();
    let sum: f64 = taps.iter().sum();
    taps.into_iter().map(|t| (t / sum) as f32).collect()
}

/// Mirror an out-of-range index back into `[0, n)` without repeating the
/// edge sample (`dcb|abcd|cba`).
#[inline]
fn reflect101(i: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let last = n as isize - 1;
    let mut i = i;
    while i < 0 || i > last {
        if i < 0 {
            i = -i;
        }
        if i > last {
            i = 2 * last - i;
        }
    }
    i as usize
}

/// Separable Gaussian smoothing with a fixed `BLUR_KERNEL_SIZE` kernel.
pub fn gaussian_blur(src: &GrayImage) -> GrayImage {
    let kernel = gaussian_kernel(BLUR_KERNEL_SIZE);
    separable_blur(src, &kernel)
}

fn separable_blur(src: &GrayImage, kernel: &[f32]) -> GrayImage {
    let (w, h) = (src.width, src.height);
    if w == 0 || h == 0 {
        return src.clone();
    }
    let radius = (kernel.len() / 2) as isize;

    let mut tmp = vec![0.0f32; w * h];
    for y in 0..h {
        let row = &src.data[y * w..(y + 1) * w];
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &kv) in kernel.iter().enumerate() {
                let sx = reflect101(x as isize + k as isize - radius, w);
                acc += row[sx] as f32 * kv;
            }
            tmp[y * w + x] = acc;
        }
    }

    let mut out = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &kv) in kernel.iter().enumerate() {
                let sy = reflect101(y as isize + k as isize - radius, h);
                acc += tmp[sy * w + x] * kv;
            }
            out.data[y * w + x] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Inverted binarization: intensity below `threshold` maps to 255, the rest
/// to 0, so dark lines become foreground.
pub fn threshold_inverted(src: &GrayImage, threshold: u8) -> GrayImage {
    GrayImage {
        width: src.width,
        height: src.height,
        data: src
            .data
            .iter()
            .map(|&v| if v < threshold { 255 } else { 0 })
            .collect(),
    }
}
