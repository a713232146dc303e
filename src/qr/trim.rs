//! Crops `trim_width` modules' worth of quiet-zone border from each side of
//! a rendered raster.

use super::render::Raster;

pub fn trim(raster: Raster, trim_width: u32) -> Raster {
    if trim_width == 0 {
        return raster;
    }

    let crop = (trim_width * raster.pixel_per_module)
        .min(raster.width / 2)
        .min(raster.height / 2);
    if crop == 0 {
        return raster;
    }

    let new_width = raster.width - 2 * crop;
    let new_height = raster.height - 2 * crop;
    let mut pixels = Vec::with_capacity((new_width * new_height * 4) as usize);

    for y in crop..(crop + new_height) {
        let row_start = ((y * raster.width + crop) * 4) as usize;
        let row_end = row_start + (new_width * 4) as usize;
        pixels.extend_from_slice(&raster.pixels[row_start..row_end]);
    }

    Raster {
        width: new_width,
        height: new_height,
        pixels,
        pixel_per_module: raster.pixel_per_module,
    }
}
