//! Flag and coat-of-arms rendering in the terminal.
//!
//! Handles downloading, caching, and preparing the PNG artwork served by
//! the REST Countries CDN for rendering with various graphics protocols
//! (Sixel, Kitty, iTerm2) with fallback to Unicode halfblocks.

mod cache;

pub use cache::ImageCache;

use image::DynamicImage;
use ratatui_image::picker::Picker;
use std::sync::OnceLock;

/// Global picker instance (initialized once at startup)
static PICKER: OnceLock<Option<Picker>> = OnceLock::new();

/// Initialize the image picker by querying terminal capabilities.
///
/// This should be called once at startup, before entering the TUI.
/// Returns `true` if a graphics protocol is available.
pub fn init_picker() -> bool {
    let picker = PICKER.get_or_init(|| {
        // Queries the terminal for sixel/kitty/iterm2 support
        match Picker::from_query_stdio() {
            Ok(p) => {
                tracing::info!("Image support detected: {:?}", p.protocol_type());
                Some(p)
            }
            Err(e) => {
                tracing::debug!("No image protocol support: {e}");
                // Unicode halfblocks work everywhere
                Some(Picker::halfblocks())
            }
        }
    });
    picker.is_some()
}

/// Get the global picker instance.
pub fn picker() -> Option<&'static Picker> {
    PICKER.get().and_then(|p| p.as_ref())
}

/// Download a flag or coat-of-arms image and decode it.
///
/// Runs on the async worker; results flow back to the TUI loop as
/// `AsyncResult` messages.
pub async fn download_and_decode(
    client: &reqwest::Client,
    url: &str,
) -> Result<DynamicImage, Box<dyn std::error::Error + Send + Sync>> {
    tracing::debug!("Downloading image: {url}");

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()).into());
    }

    let bytes = response.bytes().await?;
    let image = image::load_from_memory(&bytes)?;

    Ok(resize_if_needed(image))
}

/// Resize image if it's too large (to save memory and rendering time).
fn resize_if_needed(image: DynamicImage) -> DynamicImage {
    const MAX_DIMENSION: u32 = 640;

    let (width, height) = (image.width(), image.height());

    if width <= MAX_DIMENSION && height <= MAX_DIMENSION {
        return image;
    }

    let ratio = f64::from(width) / f64::from(height);
    let (new_width, new_height) = if width > height {
        (MAX_DIMENSION, (f64::from(MAX_DIMENSION) / ratio) as u32)
    } else {
        ((f64::from(MAX_DIMENSION) * ratio) as u32, MAX_DIMENSION)
    };

    image.resize(new_width, new_height, image::imageops::FilterType::Triangle)
}
