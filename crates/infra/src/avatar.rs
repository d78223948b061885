//! Avatar intake: validate, downscale and inline a picked image
//!
//! The result is a `data:image/jpeg;base64,…` URL small enough to be stored
//! on the user record.

use std::io::Cursor;
use std::path::Path;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use numerolog_core::AvatarProcessor;
use numerolog_domain::constants::{
    messages, AVATAR_JPEG_QUALITY, AVATAR_MAX_DIMENSION, AVATAR_MAX_FILE_SIZE,
};
use numerolog_domain::{AvatarUpload, NumerologyError, Result};
use tracing::{debug, info, warn};

use crate::errors::into_domain;

/// [`AvatarProcessor`] backed by the `image` crate.
#[derive(Debug, Clone)]
pub struct ImageAvatarProcessor {
    max_file_size: u64,
    max_dimension: u32,
    quality: u8,
}

impl Default for ImageAvatarProcessor {
    fn default() -> Self {
        Self {
            max_file_size: AVATAR_MAX_FILE_SIZE,
            max_dimension: AVATAR_MAX_DIMENSION,
            quality: AVATAR_JPEG_QUALITY,
        }
    }
}

impl ImageAvatarProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an image from disk, guessing its media type from the extension.
    pub async fn read_upload(path: impl AsRef<Path>) -> Result<AvatarUpload> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            warn!(path = %path.display(), error = %err, "Failed to read avatar file");
            NumerologyError::Avatar(messages::AVATAR_READ_FAILED.into())
        })?;
        Ok(AvatarUpload::new(media_type_for_path(path), bytes))
    }

    fn check(&self, upload: &AvatarUpload) -> Result<()> {
        if !upload.is_image() {
            return Err(NumerologyError::Avatar(messages::AVATAR_NOT_IMAGE.into()));
        }
        if upload.size() > self.max_file_size {
            return Err(NumerologyError::Avatar(messages::AVATAR_TOO_LARGE.into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AvatarProcessor for ImageAvatarProcessor {
    async fn process(&self, upload: AvatarUpload) -> Result<String> {
        self.check(&upload)?;
        debug!(media_type = %upload.media_type, size = upload.size(), "Processing avatar");

        let max_dimension = self.max_dimension;
        let quality = self.quality;
        let data_url = tokio::task::spawn_blocking(move || {
            encode_avatar(&upload.bytes, max_dimension, quality)
        })
        .await
        .map_err(|err| NumerologyError::Internal(format!("avatar task failed: {err}")))??;

        info!(encoded_len = data_url.len(), "Avatar processed");
        Ok(data_url)
    }
}

/// Size that fits `max` on the bounding side, keeping the aspect ratio.
///
/// Landscape images are bounded by width, portrait and square ones by
/// height. Images already inside the bound are left alone.
pub fn scaled_dimensions(width: u32, height: u32, max: u32) -> (u32, u32) {
    let scale = |side: u32, long: u32| -> u32 {
        let scaled = (f64::from(side) * f64::from(max) / f64::from(long)).round();
        (scaled as u32).max(1)
    };

    if width > height {
        if width > max {
            return (max, scale(height, width));
        }
    } else if height > max {
        return (scale(width, height), max);
    }
    (width, height)
}

fn encode_avatar(bytes: &[u8], max_dimension: u32, quality: u8) -> Result<String> {
    let image = image::load_from_memory(bytes).map_err(into_domain)?;

    let (width, height) = scaled_dimensions(image.width(), image.height(), max_dimension);
    let image = if (width, height) == (image.width(), image.height()) {
        image
    } else {
        image.resize_exact(width, height, FilterType::Triangle)
    };

    let mut jpeg = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut jpeg, quality)
        .encode_image(&image.to_rgb8())
        .map_err(|_| NumerologyError::Avatar(messages::AVATAR_ENCODE_FAILED.into()))?;

    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg.into_inner())))
}

/// Media type for a picked file, `application/octet-stream` when unknown.
pub fn media_type_for_path(path: &Path) -> String {
    mime_guess::from_path(path).first_or_octet_stream().essence_str().to_string()
}
