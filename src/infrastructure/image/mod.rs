//! Image fetching and decoding.

mod decoder;
mod http_source;

#[cfg(test)]
pub(crate) use decoder::png_bytes;
pub use decoder::{MAX_PREVIEW_WIDTH, decode_preview};
pub use http_source::HttpImageSource;
