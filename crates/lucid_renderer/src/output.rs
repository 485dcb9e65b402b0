//! Tone mapping and image file output.
//!
//! The shader produces linear, unbounded colors. Before encoding, each
//! pixel is scaled down by its brightest channel when that channel
//! exceeds 1, then clamped to [0, 1] per channel.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lucid_core::Color;
use lucid_math::Interval;
use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Divide by the max channel if it exceeds 1, then clamp to [0, 1].
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    let scaled = if max > 1.0 { color * (1.0 / max) } else { color };

    Color::new(
        Interval::UNIT.clamp(scaled.x),
        Interval::UNIT.clamp(scaled.y),
        Interval::UNIT.clamp(scaled.z),
    )
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let c = tone_map(color);
    [(255.0 * c.x) as u8, (255.0 * c.y) as u8, (255.0 * c.z) as u8]
}

impl ImageBuffer {
    /// Convert to RGB bytes, row-major, top row first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Write a binary PPM (P6): a `P6\n{width} {height}\n255\n` header, then
/// three bytes per pixel.
pub fn write_ppm<W: Write>(writer: &mut W, image: &ImageBuffer) -> OutputResult<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())?;
    Ok(())
}

/// Save an image, choosing the format from the file extension.
///
/// `.ppm` is written directly; anything else goes through the `image` crate.
pub fn save_image<P: AsRef<Path>>(path: P, buffer: &ImageBuffer) -> OutputResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let mut writer = BufWriter::new(File::create(path)?);
        write_ppm(&mut writer, buffer)?;
        writer.flush()?;
    } else {
        let rgb = image::RgbImage::from_raw(buffer.width, buffer.height, buffer.to_rgb8()).ok_or(
            OutputError::BufferSize {
                width: buffer.width,
                height: buffer.height,
            },
        )?;
        rgb.save(path)?;
    }

    log::info!("Saved {}x{} image to {:?}", buffer.width, buffer.height, path);
    Ok(())
}
