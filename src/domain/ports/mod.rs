mod catalog_port;
mod image_source_port;

pub use catalog_port::CatalogPort;
pub use image_source_port::ImageSourcePort;
