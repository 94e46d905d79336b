//! Generator for hexagonal-ring stimulus images used in mERG recordings and
//! retina modeling: a center hexagon surrounded by five concentric rings,
//! each hexagon filled with a per-ring palette color or an independent
//! random black/white sample, written out as a numbered PNG sequence.

pub mod encode;
pub mod hex;

use std::fs;
use std::path::Path;

use bitvec::prelude::{BitSlice, BitVec};
use log::info;
use rand_core::RngCore;
use thiserror::Error;
use tiny_skia::{Color, FillRule, Paint, Pixmap, Transform};

pub use encode::PixelMode;
use hex::Axial;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported image mode {0:?}, expected \"1\", \"L\" or \"RGB\"")]
    UnsupportedMode(String),

    #[error("cannot allocate a {0}x{1} canvas")]
    EmptyCanvas(u32, u32),

    #[error("png encoding failed: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Rings drawn per image, the center cell included.
pub const RING_COUNT: u32 = 6;

/// Hexagons per image: 1 + 6 + 12 + 18 + 24 + 30.
pub const CELL_COUNT: usize = 91;

/// One fill color per ring, center outward: green, red, orange, yellow,
/// blue, purple.
pub const PALETTE: [(u8, u8, u8); RING_COUNT as usize] = [
    (0, 128, 0),
    (255, 0, 0),
    (255, 165, 0),
    (255, 255, 0),
    (0, 0, 255),
    (128, 0, 128),
];

const BLACK: (u8, u8, u8) = (0, 0, 0);
const WHITE: (u8, u8, u8) = (255, 255, 255);

/// How the 91 hexagons are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coloring {
    /// Every hexagon of ring `k` gets `PALETTE[k]`, on a white background.
    RingPalette,
    /// Every hexagon independently black or white, on a black background.
    #[default]
    RandomBinary,
}

/// Stimulus image generator. Owns the canvas dimensions, the hexagon
/// radius, the coloring policy and the random source; each [`render`]
/// produces one frame.
///
/// [`render`]: HexStimulus::render
pub struct HexStimulus<R: RngCore> {
    width: u32,
    height: u32,
    radius: f32,
    coloring: Coloring,
    cells: Vec<Axial>,
    rng: R,
}

impl<R: RngCore> HexStimulus<R> {
    pub fn new(width: u32, height: u32, radius: u32, coloring: Coloring, rng: R) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyCanvas(width, height));
        }
        Ok(Self {
            width,
            height,
            radius: radius as f32,
            coloring,
            cells: hex::tiling(RING_COUNT),
            rng,
        })
    }

    /// The cells of the tiling in draw order: the center hexagon first,
    /// then each ring outward.
    pub fn cells(&self) -> &[Axial] {
        &self.cells
    }

    /// Sample one black/white assignment, one bit per cell in draw order;
    /// `true` is white.
    pub fn sample_pattern(&mut self) -> BitVec {
        (0..self.cells.len())
            .map(|_| self.rng.next_u32() & 1 == 1)
            .collect()
    }

    /// Render one frame, drawing fresh randomness in random-binary mode.
    pub fn render(&mut self) -> Result<Pixmap> {
        match self.coloring {
            Coloring::RingPalette => self.render_palette(),
            Coloring::RandomBinary => {
                let pattern = self.sample_pattern();
                self.render_pattern(&pattern)
            }
        }
    }

    /// Render a frame with an explicit black/white assignment, one bit per
    /// cell in draw order.
    pub fn render_pattern(&self, pattern: &BitSlice) -> Result<Pixmap> {
        debug_assert_eq!(pattern.len(), self.cells.len());
        let mut pixmap = self.blank_canvas(Color::BLACK)?;
        for (cell, bit) in self.cells.iter().zip(pattern.iter()) {
            let fill = if *bit { WHITE } else { BLACK };
            self.fill_cell(&mut pixmap, *cell, fill);
        }
        Ok(pixmap)
    }

    fn render_palette(&self) -> Result<Pixmap> {
        let mut pixmap = self.blank_canvas(Color::WHITE)?;
        for cell in &self.cells {
            self.fill_cell(&mut pixmap, *cell, PALETTE[cell.distance() as usize]);
        }
        Ok(pixmap)
    }

    fn blank_canvas(&self, background: Color) -> Result<Pixmap> {
        let mut pixmap = Pixmap::new(self.width, self.height)
            .ok_or(Error::EmptyCanvas(self.width, self.height))?;
        pixmap.fill(background);
        Ok(pixmap)
    }

    fn fill_cell(&self, pixmap: &mut Pixmap, cell: Axial, (r, g, b): (u8, u8, u8)) {
        let (x, y) = cell.center(self.radius);
        let cx = self.width as f32 / 2.0 + x;
        let cy = self.height as f32 / 2.0 + y;

        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        // Hard edges, no stroke: adjacent hexagons tile without seams.
        paint.anti_alias = false;

        let path = hex::hexagon_path(cx, cy, self.radius);
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Render `count` frames into `dir` (created if missing) as
    /// `im<index>.png`, the index zero-padded to the digit-count of `count`.
    pub fn write_stimulus_pngs(&mut self, dir: &Path, mode: PixelMode, count: usize) -> Result<()> {
        fs::create_dir_all(dir)?;
        let pad = count.to_string().len();
        for n in 0..count {
            let pixmap = self.render()?;
            encode::write_png(&pixmap, mode, &dir.join(format!("im{n:0pad$}.png")))?;
            info!("Image {n} generated.");
        }
        Ok(())
    }
}
