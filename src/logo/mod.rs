//! Company logo loading and terminal image protocols.
//!
//! Logos are downloaded by a background worker ([`LogoLoader`]), decoded with
//! the `image` crate and converted into a terminal protocol (Kitty,
//! iTerm2 or half blocks) chosen by the `ratatui-image` picker. Anything that
//! is not ready yet, failed, or disabled renders as a placeholder block.

mod loader;

pub use loader::{LogoLoader, LogoResult};

use std::collections::HashMap;
#[cfg(unix)]
use std::time::Duration;

use image::DynamicImage;
use ratatui_image::picker::Picker;
#[cfg(unix)]
use ratatui_image::picker::cap_parser::QueryStdioOptions;
use ratatui_image::protocol::StatefulProtocol;
use thiserror::Error;

#[cfg(unix)]
const PICKER_QUERY_TIMEOUT_MS: u64 = 250;

/// Largest logo body accepted, in bytes.
pub const MAX_LOGO_BYTES: usize = 2 * 1024 * 1024;

/// Why a logo could not be shown.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("logo request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("logo body of {0} bytes exceeds the size limit")]
    TooLarge(usize),

    #[error("logo body could not be read: {0}")]
    Read(#[from] std::io::Error),

    #[error("logo could not be decoded: {0}")]
    Decode(#[from] image::ImageError),
}

/// Create a picker for terminal image rendering.
///
/// The picker detects terminal capabilities and chooses the best protocol.
pub fn create_picker(force_half_cell: bool) -> Option<Picker> {
    if force_half_cell {
        tracing::debug!(protocol = "Halfblocks", "forced half-cell logo rendering");
        return Some(Picker::halfblocks());
    }

    // The stdio capability query can leave an orphaned reader thread on the
    // Windows console input buffer, so stick to half blocks there.
    #[cfg(not(unix))]
    {
        return Some(Picker::halfblocks());
    }

    #[cfg(unix)]
    {
        let picker = Picker::from_query_stdio_with_options(query_options()).ok()?;
        tracing::debug!(
            term = %std::env::var("TERM").unwrap_or_else(|_| "<unset>".to_string()),
            protocol = ?picker.protocol_type(),
            "terminal image protocol detected"
        );
        Some(picker)
    }
}

#[cfg(unix)]
fn query_options() -> QueryStdioOptions {
    let mut options = QueryStdioOptions::default();
    options.timeout = Duration::from_millis(PICKER_QUERY_TIMEOUT_MS);
    options
}

/// Load state of one logo URL.
pub enum LogoSlot {
    /// Requested from the loader, not back yet
    Pending,
    /// Decoded and ready to draw
    Ready(StatefulProtocol),
    /// Download or decode failed; never retried
    Failed,
}

/// Per-session logo store keyed by URL.
#[derive(Default)]
pub struct LogoCache {
    picker: Option<Picker>,
    slots: HashMap<String, LogoSlot>,
}

impl std::fmt::Debug for LogoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoCache")
            .field("enabled", &self.is_enabled())
            .field("slots", &self.slots.len())
            .finish_non_exhaustive()
    }
}

impl LogoCache {
    /// A cache that renders through `picker`; `None` disables logos.
    pub fn new(picker: Option<Picker>) -> Self {
        Self {
            picker,
            slots: HashMap::new(),
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.picker.is_some()
    }

    /// Whether `url` still needs to be requested.
    pub fn needs_request(&self, url: &str) -> bool {
        self.is_enabled() && !self.slots.contains_key(url)
    }

    pub fn mark_pending(&mut self, url: &str) {
        self.slots.insert(url.to_string(), LogoSlot::Pending);
    }

    pub fn mark_failed(&mut self, url: &str) {
        self.slots.insert(url.to_string(), LogoSlot::Failed);
    }

    /// Convert a decoded logo into a drawable protocol.
    pub fn insert_image(&mut self, url: &str, image: DynamicImage) {
        let Some(picker) = &self.picker else {
            return;
        };
        let protocol = picker.new_resize_protocol(image);
        self.slots
            .insert(url.to_string(), LogoSlot::Ready(protocol));
    }

    /// Drawable protocol for `url`, if the logo is ready.
    pub fn protocol_mut(&mut self, url: &str) -> Option<&mut StatefulProtocol> {
        match self.slots.get_mut(url) {
            Some(LogoSlot::Ready(protocol)) => Some(protocol),
            _ => None,
        }
    }

    /// Whether any download is still outstanding.
    pub fn has_pending(&self) -> bool {
        self.slots
            .values()
            .any(|slot| matches!(slot, LogoSlot::Pending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_picker_query_timeout_is_fast() {
        #[cfg(unix)]
        {
            let options = query_options();
            assert_eq!(options.timeout, Duration::from_millis(250));
        }
    }

    #[test]
    fn test_disabled_cache_never_requests() {
        let cache = LogoCache::new(None);
        assert!(!cache.is_enabled());
        assert!(!cache.needs_request("https://example.com/logo.png"));
    }

    #[test]
    fn test_each_url_is_requested_once() {
        let mut cache = LogoCache::new(Some(Picker::halfblocks()));
        let url = "https://example.com/logo.png";
        assert!(cache.needs_request(url));
        cache.mark_pending(url);
        assert!(!cache.needs_request(url));
        assert!(cache.has_pending());
        cache.mark_failed(url);
        assert!(!cache.has_pending());
        assert!(!cache.needs_request(url));
        assert!(cache.protocol_mut(url).is_none());
    }

    #[test]
    fn test_insert_image_makes_protocol_ready() {
        let mut cache = LogoCache::new(Some(Picker::halfblocks()));
        let url = "https://example.com/logo.png";
        cache.mark_pending(url);
        assert!(cache.protocol_mut(url).is_none());
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([200, 10, 10])));
        cache.insert_image(url, image);
        assert!(cache.protocol_mut(url).is_some());
    }
}
