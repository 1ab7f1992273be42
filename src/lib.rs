//! Directional-block core of a Minecraft schematic editor: the data-byte to
//! orientation codec, the turn transform and the orientation/zoom keyed
//! image cache. The GUI shell, file I/O and the wider block catalog live
//! outside this crate and talk to it through [`ImageProvider`] and the
//! public block API.

pub mod block;
pub mod render;

pub use block::direction::Direction;
pub use block::sign::{Sign, SignMode};
pub use block::DirectionalBlock;
pub use render::cache::SignImageCache;
pub use render::tooltip::sign_tooltip;
pub use render::ImageProvider;
