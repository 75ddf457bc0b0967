//! Shared-document link rewriting.

/// Marker identifying a Google Drive sharing link.
pub const DRIVE_HOST_MARKER: &str = "drive.google.com";

/// Base of the direct-view URL produced for Drive links.
pub const DRIVE_DIRECT_VIEW_BASE: &str = "https://drive.google.com/uc?export=view&id=";

const ID_TOKEN: &str = "id=";

/// Rewrites a sharing link into a directly fetchable image URL.
///
/// Links on the Drive host have their file identifier (the text after the
/// last `id=`) placed into the direct-view template. Every other link is
/// returned unchanged. A Drive link without `id=` yields a URL that will not
/// resolve, which surfaces later as a fetch failure.
#[must_use]
pub fn normalize_link(link: &str) -> String {
    if !is_drive_link(link) {
        return link.to_string();
    }

    let file_id = link.rsplit(ID_TOKEN).next().unwrap_or(link);
    format!("{DRIVE_DIRECT_VIEW_BASE}{file_id}")
}

/// Checks if a link points at the Drive sharing host.
#[must_use]
pub fn is_drive_link(link: &str) -> bool {
    link.contains(DRIVE_HOST_MARKER)
}
