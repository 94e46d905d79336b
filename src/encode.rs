use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;

use tiny_skia::Pixmap;

use crate::{Error, Result};

/// Pixel format of the written PNGs, named after the mode strings of the
/// original stimulus tooling: `"1"` bilevel, `"L"` 8-bit grayscale, `"RGB"`
/// 8-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelMode {
    Bilevel,
    Grayscale,
    Rgb,
}

impl PixelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PixelMode::Bilevel => "1",
            PixelMode::Grayscale => "L",
            PixelMode::Rgb => "RGB",
        }
    }
}

impl FromStr for PixelMode {
    type Err = Error;

    // Mode strings are case-sensitive, as in the original imaging library.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1" => Ok(PixelMode::Bilevel),
            "L" => Ok(PixelMode::Grayscale),
            "RGB" => Ok(PixelMode::Rgb),
            other => Err(Error::UnsupportedMode(other.to_string())),
        }
    }
}

/// ITU-R 601 luma.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

// The canvas is fully opaque, so its premultiplied RGBA bytes are the plain
// channel values.
fn rgb_bytes(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect()
}

fn gray_bytes(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .data()
        .chunks_exact(4)
        .map(|px| luma(px[0], px[1], px[2]))
        .collect()
}

/// One bit per pixel, rows packed MSB-first and padded to byte boundaries,
/// luma thresholded at the midpoint.
fn bilevel_bytes(pixmap: &Pixmap) -> Vec<u8> {
    let width = pixmap.width() as usize;
    let height = pixmap.height() as usize;
    let row_bytes = width.div_ceil(8);
    let mut out = vec![0u8; row_bytes * height];
    for (y, row) in pixmap.data().chunks_exact(width * 4).enumerate() {
        for (x, px) in row.chunks_exact(4).enumerate() {
            if luma(px[0], px[1], px[2]) >= 128 {
                out[y * row_bytes + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }
    out
}

/// Encode the canvas as a PNG at `path` under the given pixel mode.
pub fn write_png(pixmap: &Pixmap, mode: PixelMode, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let file_writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(file_writer, pixmap.width(), pixmap.height());
    let data = match mode {
        PixelMode::Bilevel => {
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::One);
            bilevel_bytes(pixmap)
        }
        PixelMode::Grayscale => {
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            gray_bytes(pixmap)
        }
        PixelMode::Rgb => {
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            rgb_bytes(pixmap)
        }
    };

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&data)?;
    png_writer.finish()?;
    Ok(())
}
