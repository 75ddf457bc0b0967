//! Preview state for product images.

use std::sync::Arc;

use ratatui::layout::Rect;
use ratatui_image::Resize;
use ratatui_image::picker::{Picker, ProtocolType};
use ratatui_image::protocol::StatefulProtocol;

/// Cards past the visible window that keep their encoded protocol.
pub const LOAD_BUFFER: usize = 3;

/// Display status of one preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewStatus {
    /// Bytes not decoded yet.
    Pending,
    /// Decoded and displayable.
    Ready,
    /// Bytes could not be turned into a picture.
    Unavailable(String),
}

/// Decoded preview for one resolved image URL.
pub struct ProductImage {
    /// Resolved URL the bytes came from.
    pub url: String,
    /// Decoded picture, kept until the preview is marked unavailable.
    pub image: Option<Arc<image::DynamicImage>>,
    /// Encoded protocol; only present for cards near the visible window.
    pub protocol: Option<StatefulProtocol>,
    pub status: PreviewStatus,
}

impl ProductImage {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self {
            url,
            image: None,
            protocol: None,
            status: PreviewStatus::Pending,
        }
    }

    /// Stores the decoded picture and drops any stale protocol.
    pub fn set_loaded(&mut self, image: Arc<image::DynamicImage>) {
        self.image = Some(image);
        self.status = PreviewStatus::Ready;
        self.protocol = None;
    }

    /// Marks the bytes as undisplayable.
    pub fn set_unavailable(&mut self, reason: impl Into<String>) {
        self.image = None;
        self.protocol = None;
        self.status = PreviewStatus::Unavailable(reason.into());
    }

    /// Returns true if a decoded picture is waiting to be shown.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.image.is_some() && self.status == PreviewStatus::Ready
    }

    /// Encodes the picture for the terminal once.
    pub fn update_protocol_if_needed(&mut self, picker: &Picker) {
        if self.protocol.is_some() {
            return;
        }

        if let Some(ref image) = self.image {
            self.protocol = Some(picker.new_resize_protocol((**image).clone()));
        }
    }

    pub fn clear_protocol(&mut self) {
        self.protocol = None;
    }

    /// Area the encoded picture occupies inside `area`.
    #[must_use]
    pub fn fitted_area(&self, area: Rect) -> Rect {
        self.protocol.as_ref().map_or(Rect::default(), |protocol| {
            let size = protocol.size_for(Resize::Fit(None), area);
            Rect::new(area.x, area.y, size.width, size.height)
        })
    }
}

impl std::fmt::Debug for ProductImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductImage")
            .field("url", &self.url)
            .field("has_image", &self.image.is_some())
            .field("has_protocol", &self.protocol.is_some())
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Owns the terminal graphics picker.
pub struct ImageManager {
    picker: Picker,
}

impl ImageManager {
    /// Queries the terminal for its graphics protocol.
    ///
    /// Must run after the terminal entered raw mode and before the event
    /// stream starts reading stdin.
    #[must_use]
    pub fn new() -> Self {
        let mut picker = Picker::from_query_stdio().unwrap_or_else(|_| Picker::halfblocks());

        let caps = picker.capabilities();
        let has_sixel = caps
            .iter()
            .any(|c| matches!(c, ratatui_image::picker::Capability::Sixel));
        let has_kitty = caps
            .iter()
            .any(|c| matches!(c, ratatui_image::picker::Capability::Kitty));

        if has_sixel && !has_kitty && picker.protocol_type() == ProtocolType::Halfblocks {
            picker.set_protocol_type(ProtocolType::Sixel);
        }

        Self { picker }
    }

    /// Picker that draws with unicode half blocks.
    #[must_use]
    pub fn halfblocks() -> Self {
        Self {
            picker: Picker::halfblocks(),
        }
    }

    /// Returns the graphics protocol in use.
    #[must_use]
    pub fn protocol_type(&self) -> ProtocolType {
        self.picker.protocol_type()
    }

    /// Encodes pictures for the visible window and drops them elsewhere.
    pub fn sync_window(
        &self,
        previews: &mut [&mut ProductImage],
        visible_start: usize,
        visible_end: usize,
    ) {
        let buffer_start = visible_start.saturating_sub(LOAD_BUFFER);
        let buffer_end = visible_end + LOAD_BUFFER;

        for (idx, preview) in previews.iter_mut().enumerate() {
            if idx < buffer_start || idx > buffer_end {
                preview.clear_protocol();
            } else if idx >= visible_start && idx <= visible_end && preview.is_ready() {
                preview.update_protocol_if_needed(&self.picker);
            }
        }
    }
}

impl Default for ImageManager {
    fn default() -> Self {
        Self::halfblocks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(url: &str) -> ProductImage {
        let mut preview = ProductImage::new(url.to_string());
        preview.set_loaded(Arc::new(image::DynamicImage::new_rgb8(16, 16)));
        preview
    }

    #[test]
    fn test_preview_starts_pending() {
        let preview = ProductImage::new("http://x/a.png".to_string());

        assert_eq!(preview.status, PreviewStatus::Pending);
        assert!(!preview.is_ready());
    }

    #[test]
    fn test_preview_loading_flow() {
        let preview = loaded("http://x/a.png");

        assert!(preview.is_ready());
        assert!(preview.protocol.is_none());
    }

    #[test]
    fn test_unavailable_preview_drops_image() {
        let mut preview = loaded("http://x/a.png");

        preview.set_unavailable("unsupported format");

        assert!(!preview.is_ready());
        assert_eq!(
            preview.status,
            PreviewStatus::Unavailable("unsupported format".to_string())
        );
    }

    #[test]
    fn test_sync_window_encodes_visible_only() {
        let manager = ImageManager::halfblocks();
        let mut previews: Vec<ProductImage> =
            (0..12).map(|i| loaded(&format!("u{i}"))).collect();
        previews[11].update_protocol_if_needed(&Picker::halfblocks());

        let mut refs: Vec<&mut ProductImage> = previews.iter_mut().collect();
        manager.sync_window(&mut refs, 0, 1);

        assert!(previews[0].protocol.is_some());
        assert!(previews[1].protocol.is_some());
        assert!(previews[2].protocol.is_none());
        assert!(previews[11].protocol.is_none());
    }

    #[test]
    fn test_halfblocks_protocol_type() {
        assert_eq!(
            ImageManager::halfblocks().protocol_type(),
            ProtocolType::Halfblocks
        );
    }
}
