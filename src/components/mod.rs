//! UI Components for Hero Gallery.

mod hero_grid;
mod hero_image;
mod hero_modal;
mod toolbar;

pub use hero_grid::{HeroGrid, HeroTile};
pub use hero_image::HeroImage;
pub use hero_modal::HeroModal;
pub use toolbar::Toolbar;
