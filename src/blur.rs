use image::RgbaImage;

use crate::error::{ScorecardError, ScorecardResult};

/// Separable Gaussian blur over a straight-alpha RGBA image.
///
/// Runs synchronously before the parallel pixel pass; the cover art is the
/// only input large enough to matter. Edge pixels are clamped (no wrap).
/// Radius 0 returns a copy of the input.
///
/// The passes run in premultiplied space: transparent pixels carry hidden
/// RGB that must not bleed into the fringe of opaque regions.
pub fn blur_rgba(src: &RgbaImage, radius: u32, sigma: f32) -> ScorecardResult<RgbaImage> {
    if radius == 0 {
        return Ok(src.clone());
    }
    let (width, height) = src.dimensions();
    if width == 0 || height == 0 {
        return Ok(src.clone());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;

    let mut premul = src.as_raw().clone();
    for px in premul.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
    }

    let len = premul.len();
    let mut tmp = vec![0u8; len];
    let mut out = vec![0u8; len];

    horizontal_pass(&premul, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);

    for px in out.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
        } else {
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
    }

    RgbaImage::from_raw(width, height, out)
        .ok_or_else(|| ScorecardError::validation("blur output buffer has wrong length"))
}

// Q16 fixed-point kernel normalized to sum exactly 65536 so repeated blurs
// neither gain nor lose energy.
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> ScorecardResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(ScorecardError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    let mut weights_f = Vec::with_capacity((2 * r + 1) as usize);
    let mut sum = 0.0f64;
    for i in -r..=r {
        let x = f64::from(i);
        let w = (-x * x / denom).exp();
        weights_f.push(w);
        sum += w;
    }

    let mut weights = Vec::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = (((wf / sum) * 65536.0).round() as i64).clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }
    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    (((acc + 32768) >> 16).min(255)) as u8
}
