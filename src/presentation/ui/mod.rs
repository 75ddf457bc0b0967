//! UI screens.

mod app;
mod failure_screen;
mod gallery_screen;
mod loading_screen;
mod utils;

pub use app::App;
pub use failure_screen::FailureScreen;
pub use gallery_screen::{DecodedPreviews, GalleryKeyResult, GalleryScreen, GalleryScreenState};
pub use loading_screen::{LoadingScreen, LoadingState};
