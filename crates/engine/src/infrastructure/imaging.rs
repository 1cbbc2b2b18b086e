//! Local pixel composition for per-item export.
//!
//! Bakes the editor's flip and color filter into a fresh PNG so the exported
//! file matches the preview. Zoom and pan stay preview-only.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use merchmagic_domain::{FilterOp, ViewTransform};

#[derive(Debug, thiserror::Error)]
pub enum ImagingError {
    #[error("Failed to decode image: {0}")]
    Decode(String),
    #[error("Failed to encode image: {0}")]
    Encode(String),
}

/// Decode, apply flip and filter, and re-encode as PNG.
pub fn render_export(bytes: &[u8], view: &ViewTransform) -> Result<Vec<u8>, ImagingError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| ImagingError::Decode(e.to_string()))?;
    let mut rgba = decoded.to_rgba8();

    apply_filter_ops(&mut rgba, view.filter.ops());
    if view.flipped {
        image::imageops::flip_horizontal_in_place(&mut rgba);
    }

    encode_png(rgba)
}

fn encode_png(rgba: RgbaImage) -> Result<Vec<u8>, ImagingError> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| ImagingError::Encode(e.to_string()))?;
    Ok(buf)
}

/// Apply filter operations in order. Alpha is left untouched.
pub fn apply_filter_ops(rgba: &mut RgbaImage, ops: &[FilterOp]) {
    if ops.is_empty() {
        return;
    }
    for px in rgba.pixels_mut() {
        let mut rgb = [
            f32::from(px[0]) / 255.0,
            f32::from(px[1]) / 255.0,
            f32::from(px[2]) / 255.0,
        ];
        for op in ops {
            rgb = apply_op(*op, rgb);
        }
        for (channel, value) in px.0.iter_mut().take(3).zip(rgb) {
            *channel = (value * 255.0).round() as u8;
        }
    }
}

// Each op clamps its output to [0, 1] before the next one runs.
fn apply_op(op: FilterOp, rgb: [f32; 3]) -> [f32; 3] {
    let out = match op {
        FilterOp::Grayscale(amount) => mul(&grayscale_matrix(amount), rgb),
        FilterOp::Sepia(amount) => mul(&sepia_matrix(amount), rgb),
        FilterOp::Saturate(amount) => mul(&saturate_matrix(amount), rgb),
        FilterOp::HueRotate(degrees) => mul(&hue_rotate_matrix(degrees), rgb),
        FilterOp::Brightness(amount) => rgb.map(|c| c * amount.max(0.0)),
        FilterOp::Contrast(amount) => {
            let amount = amount.max(0.0);
            rgb.map(|c| (c - 0.5) * amount + 0.5)
        }
    };
    out.map(|c| c.clamp(0.0, 1.0))
}

type Matrix = [[f32; 3]; 3];

fn mul(m: &Matrix, rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    [
        m[0][0] * r + m[0][1] * g + m[0][2] * b,
        m[1][0] * r + m[1][1] * g + m[1][2] * b,
        m[2][0] * r + m[2][1] * g + m[2][2] * b,
    ]
}

fn grayscale_matrix(amount: f32) -> Matrix {
    let k = 1.0 - amount.clamp(0.0, 1.0);
    [
        [0.2126 + 0.7874 * k, 0.7152 - 0.7152 * k, 0.0722 - 0.0722 * k],
        [0.2126 - 0.2126 * k, 0.7152 + 0.2848 * k, 0.0722 - 0.0722 * k],
        [0.2126 - 0.2126 * k, 0.7152 - 0.7152 * k, 0.0722 + 0.9278 * k],
    ]
}

fn sepia_matrix(amount: f32) -> Matrix {
    let k = 1.0 - amount.clamp(0.0, 1.0);
    [
        [0.393 + 0.607 * k, 0.769 - 0.769 * k, 0.189 - 0.189 * k],
        [0.349 - 0.349 * k, 0.686 + 0.314 * k, 0.168 - 0.168 * k],
        [0.272 - 0.272 * k, 0.534 - 0.534 * k, 0.131 + 0.869 * k],
    ]
}

fn saturate_matrix(amount: f32) -> Matrix {
    let s = amount.max(0.0);
    [
        [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
    ]
}

fn hue_rotate_matrix(degrees: f32) -> Matrix {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ]
}
