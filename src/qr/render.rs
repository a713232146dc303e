//! Rasterises a module matrix into an RGBA pixel buffer, with a standard
//! 4-module quiet zone around the symbol (the usual minimum border a QR
//! reader expects) so that a later `trim_width` crop has something to remove.

use super::{generate::Matrix, spec::Rgba};

pub const QUIET_ZONE_MODULES: usize = 4;

pub struct Raster {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA bytes, row-major, top-to-bottom.
    pub pixels: Vec<u8>,
    pub pixel_per_module: u32,
}

/// `size` is the client's requested total pixel width; the per-module pixel
/// size is `size / module_count` (matrix width plus quiet zone on both
/// sides), clamped to at least 1. Absent `size` renders one pixel per module.
pub fn render(matrix: &Matrix, size: Option<u32>, fg: Rgba, bg: Rgba) -> Raster {
    let grid_modules = matrix.width + 2 * QUIET_ZONE_MODULES;
    let pixel_per_module = match size {
        Some(size) => (size as usize / grid_modules.max(1)).max(1),
        None => 1,
    };

    let side = grid_modules * pixel_per_module;
    let mut pixels = vec![0u8; side * side * 4];

    for y in 0..side {
        for x in 0..side {
            let colour = module_at(matrix, x, y, pixel_per_module, fg, bg);
            let offset = (y * side + x) * 4;
            pixels[offset] = colour.r;
            pixels[offset + 1] = colour.g;
            pixels[offset + 2] = colour.b;
            pixels[offset + 3] = colour.a;
        }
    }

    Raster {
        width: side as u32,
        height: side as u32,
        pixels,
        pixel_per_module: pixel_per_module as u32,
    }
}

fn module_at(matrix: &Matrix, x: usize, y: usize, pixel_per_module: usize, fg: Rgba, bg: Rgba) -> Rgba {
    let module_x = x / pixel_per_module;
    let module_y = y / pixel_per_module;

    if module_x < QUIET_ZONE_MODULES
        || module_y < QUIET_ZONE_MODULES
        || module_x >= QUIET_ZONE_MODULES + matrix.width
        || module_y >= QUIET_ZONE_MODULES + matrix.width
    {
        return bg;
    }

    let symbol_x = module_x - QUIET_ZONE_MODULES;
    let symbol_y = module_y - QUIET_ZONE_MODULES;
    if matrix.is_dark(symbol_x, symbol_y) {
        fg
    } else {
        bg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::generate::generate;
    use qrcode::EcLevel;

    const BLACK: Rgba = Rgba { r: 0, g: 0, b: 0, a: 255 };
    const WHITE: Rgba = Rgba { r: 255, g: 255, b: 255, a: 255 };

    #[test]
    fn default_size_renders_one_pixel_per_module() {
        let matrix = generate("hello", EcLevel::M).unwrap();
        let raster = render(&matrix, None, BLACK, WHITE);
        let expected = (matrix.width + 2 * QUIET_ZONE_MODULES) as u32;
        assert_eq!(raster.width, expected);
        assert_eq!(raster.height, expected);
    }

    #[test]
    fn quiet_zone_border_uses_background_colour() {
        let matrix = generate("hello", EcLevel::M).unwrap();
        let raster = render(&matrix, None, BLACK, WHITE);
        assert_eq!(&raster.pixels[0..4], &[WHITE.r, WHITE.g, WHITE.b, WHITE.a]);
    }
}
