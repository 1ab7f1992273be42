use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use image::RgbaImage;
use tracing::debug;

use crate::block::direction::Direction;
use crate::block::sign::Sign;
use crate::block::DirectionalBlock;

use super::{compose_arrow, ImageProvider};

/// Rendered-sign memo shared by every sign instance in the schematic, one
/// per block kind. Owned by the rendering subsystem and threaded through
/// render calls instead of living in process-wide statics.
///
/// Entries are keyed by direction per placement mode and tagged with the
/// zoom they were rendered at; a zoom change drops everything wholesale, so
/// a cached bitmap is always consistent with the recorded zoom.
pub struct SignImageCache {
    state: Mutex<CacheState>,
}

#[derive(Default)]
struct CacheState {
    zoom: f64,
    wall: HashMap<Direction, Arc<RgbaImage>>,
    freestanding: HashMap<Direction, Arc<RgbaImage>>,
}

impl Default for SignImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SignImageCache {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Looks up (or renders and stores) the image of `sign` at `zoom`.
    ///
    /// Returns `None` without touching the cache while the provider is
    /// inactive, for non-positive zoom, and for blocks the provider has no
    /// sprite for. The lock spans invalidation, lookup and store, so
    /// concurrent renders of the same kind cannot interleave a clear with a
    /// stale insert.
    pub fn image<P: ImageProvider + ?Sized>(
        &self,
        provider: &P,
        sign: &Sign,
        zoom: f64,
    ) -> Option<Arc<RgbaImage>> {
        if !provider.is_active() || zoom <= 0.0 {
            return None;
        }

        let mut state = self.state.lock().unwrap();

        if state.zoom != zoom {
            debug!(
                old_zoom = state.zoom,
                new_zoom = zoom,
                "zoom changed, dropping cached sign images"
            );
            state.wall.clear();
            state.freestanding.clear();
            state.zoom = zoom;
        } else {
            let map = if sign.is_wall_sign() {
                &state.wall
            } else {
                &state.freestanding
            };

            if let Some(img) = map.get(&sign.direction()) {
                return Some(Arc::clone(img));
            }
        }

        let mut img = provider.sprite_for_id(sign.id())?;

        // the wall sprite depicts the wall the sign hangs on, not the facing
        // normal, so the marker is drawn at the opposite direction
        let rendered = if sign.is_wall_sign() {
            assert!(
                sign.direction().is_cardinal(),
                "wall sign facing {}",
                sign.direction()
            );
            sign.direction().opposite()
        } else {
            sign.direction()
        };

        compose_arrow(rendered, &mut img);

        if zoom != 1.0 {
            img = provider.zoom(zoom, &img);
        }

        debug!(
            direction = %sign.direction(),
            zoom,
            wall_sign = sign.is_wall_sign(),
            "rendered sign image"
        );

        let img = Arc::new(img);
        let map = if sign.is_wall_sign() {
            &mut state.wall
        } else {
            &mut state.freestanding
        };
        map.insert(sign.direction(), Arc::clone(&img));

        Some(img)
    }
}
