use image::{imageops, RgbaImage};
use itertools::Itertools;

use crate::block::sign::Sign;

use super::ImageProvider;

/// Vertical offsets of the 4 text rows on the sign plate.
const LINE_OFFSETS: [i64; 4] = [3, 13, 23, 33];

/// Horizontal advance per character cell.
const GLYPH_CELL_WIDTH: i64 = 6;

/// Edge length of a drawn glyph.
const GLYPH_SIZE: u32 = 8;

/// Scale applied to the finished plate before display.
const TOOLTIP_ZOOM: f64 = 2.0;

const TEXT_COLOR: u32 = 0xFF00_0000;

/// Composes the hover plate for a sign: each of the 4 text lines drawn as a
/// row of character glyphs on the background plate, then scaled up.
///
/// Recomputed on every call. Tooltips are displayed rarely compared to
/// block images, so there is no cache here.
pub fn sign_tooltip<P: ImageProvider + ?Sized>(provider: &P, sign: &Sign) -> RgbaImage {
    let mut plate = provider.sign_background_plate();

    for (line, y) in sign.text().iter().zip_eq(LINE_OFFSETS) {
        for (i, glyph) in provider.glyphs_for_text(line, TEXT_COLOR).iter().enumerate() {
            // glyphs are drawn into a fixed 8x8 cell whatever their source size
            let glyph = imageops::resize(
                glyph,
                GLYPH_SIZE,
                GLYPH_SIZE,
                imageops::FilterType::Nearest,
            );
            imageops::overlay(&mut plate, &glyph, i as i64 * GLYPH_CELL_WIDTH, y);
        }
    }

    provider.zoom(TOOLTIP_ZOOM, &plate)
}
