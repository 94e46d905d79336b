use std::fs;
use std::path::PathBuf;

use rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use hex_stimuli::{Coloring, HexStimulus, PixelMode};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hex-stimuli-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn generator(width: u32, height: u32) -> HexStimulus<Xoshiro256Plus> {
    let rng = Xoshiro256Plus::seed_from_u64(42);
    HexStimulus::new(width, height, 8, Coloring::RandomBinary, rng).unwrap()
}

fn written_names(dir: &PathBuf) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[test]
fn batch_indices_pad_to_the_digit_count_of_count() {
    let dir = scratch_dir("two-digit");
    generator(120, 90)
        .write_stimulus_pngs(&dir, PixelMode::Rgb, 12)
        .unwrap();

    let expected: Vec<_> = (0..12).map(|n| format!("im{n:02}.png")).collect();
    assert_eq!(written_names(&dir), expected);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn single_digit_counts_use_unpadded_names() {
    let dir = scratch_dir("one-digit");
    generator(64, 64)
        .write_stimulus_pngs(&dir, PixelMode::Bilevel, 5)
        .unwrap();

    assert_eq!(
        written_names(&dir),
        ["im0.png", "im1.png", "im2.png", "im3.png", "im4.png"]
    );
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn written_pngs_decode_with_the_requested_format() {
    let cases = [
        (PixelMode::Bilevel, png::ColorType::Grayscale, png::BitDepth::One),
        (PixelMode::Grayscale, png::ColorType::Grayscale, png::BitDepth::Eight),
        (PixelMode::Rgb, png::ColorType::Rgb, png::BitDepth::Eight),
    ];
    for (mode, color_type, bit_depth) in cases {
        let dir = scratch_dir(mode.as_str());
        generator(64, 48).write_stimulus_pngs(&dir, mode, 1).unwrap();

        let decoder = png::Decoder::new(fs::File::open(dir.join("im0.png")).unwrap());
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (64, 48));
        assert_eq!(info.color_type, color_type);
        assert_eq!(info.bit_depth, bit_depth);
        fs::remove_dir_all(&dir).unwrap();
    }
}
