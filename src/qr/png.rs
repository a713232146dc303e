//! Deterministic PNG encoding.
//!
//! The test suite asserts byte-for-byte equality between two PNGs produced
//! from the same spec, so the filter strategy and compression parameters are
//! pinned rather than left to the encoder's adaptive defaults, and no
//! timestamp or text chunks are emitted.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder};
use snafu::ResultExt;

use super::{
    error::{PngEncodeSnafu, QrError},
    render::Raster,
};

pub fn encode(raster: &Raster) -> Result<Vec<u8>, QrError> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, FilterType::NoFilter);
    encoder
        .write_image(&raster.pixels, raster.width, raster.height, ColorType::Rgba8)
        .context(PngEncodeSnafu)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster() -> Raster {
        Raster {
            width: 2,
            height: 2,
            pixels: vec![
                0, 0, 0, 255, 255, 255, 255, 255, 255, 255, 255, 255, 0, 0, 0, 255,
            ],
            pixel_per_module: 1,
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = encode(&raster()).unwrap();
        let b = encode(&raster()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn output_starts_with_png_signature() {
        let bytes = encode(&raster()).unwrap();
        assert_eq!(&bytes[0..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }
}
