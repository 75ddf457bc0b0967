//! Domain entity definitions.

mod image;
mod product;
mod product_table;
mod size_filter;

pub use image::{ImageBlob, ImageCache};
pub use product::{Price, ProductRecord};
pub use product_table::ProductTable;
pub use size_filter::{SHOW_ALL_LABEL, SizeFilter};
