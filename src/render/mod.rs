use image::{Rgba, RgbaImage};

use crate::block::direction::Direction;

pub mod cache;
pub mod tooltip;

/// Bitmaps and transforms supplied by the editor shell. This crate only
/// consumes the provider; the shell (and the test fixtures here) implement
/// it.
pub trait ImageProvider {
    /// False while resources are not loaded yet; rendering is skipped
    /// entirely in that state.
    fn is_active(&self) -> bool;

    /// Base sprite for a block id, or `None` when no sprite exists.
    fn sprite_for_id(&self, id: u8) -> Option<RgbaImage>;

    /// Scales an image by `factor`.
    fn zoom(&self, factor: f64, image: &RgbaImage) -> RgbaImage;

    /// The blank sign plate the tooltip text is drawn onto.
    fn sign_background_plate(&self) -> RgbaImage;

    /// One glyph bitmap per character of `line`, tinted with the ARGB
    /// `color`. Empty lines yield an empty sequence.
    fn glyphs_for_text(&self, line: &str, color: u32) -> Vec<RgbaImage>;
}

const ARROW_COLOR: Rgba<u8> = Rgba([220, 30, 30, 255]);

/// Draws the orientation marker onto a sprite: a ray from the center toward
/// the compass angle of `direction`, thickened near the rim so the facing
/// still reads at small zoom. Deterministic, so cached renders are
/// reproducible.
pub fn compose_arrow(direction: Direction, img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }

    let cx = (w as f64 - 1.0) / 2.0;
    let cy = (h as f64 - 1.0) / 2.0;

    // compass index 0 is north (up, negative y), advancing clockwise
    let angle = direction.compass_index() as f64 * std::f64::consts::FRAC_PI_8;
    let (dx, dy) = (angle.sin(), -angle.cos());

    let reach = cx.min(cy);
    let steps = reach.ceil().max(1.0) as u32;

    for step in 0..=steps {
        let t = step as f64 / steps as f64 * reach;
        let x = (cx + dx * t).round() as i64;
        let y = (cy + dy * t).round() as i64;

        if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
            continue;
        }

        img.put_pixel(x as u32, y as u32, ARROW_COLOR);

        if t > reach * 0.7 {
            for (nx, ny) in [(x + 1, y), (x, y + 1)] {
                if nx >= 0 && ny >= 0 && (nx as u32) < w && (ny as u32) < h {
                    img.put_pixel(nx as u32, ny as u32, ARROW_COLOR);
                }
            }
        }
    }
}
