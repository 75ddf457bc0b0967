mod image_state;
mod product_card;
mod size_selector;
mod status_bar;

pub use image_state::{ImageManager, LOAD_BUFFER, PreviewStatus, ProductImage};
pub use product_card::{ProductCard, ProductCardStyle};
pub use size_selector::{SizeSelector, SizeSelectorPopup, SizeSelectorState};
pub use status_bar::{StatusBar, StatusLevel};
