pub mod fetch_memo;
pub mod image_pipeline;

pub use fetch_memo::{FetchMemo, MemoStats};
pub use image_pipeline::ImageFetchPipeline;
