//! Avatar upload input

/// A picked file as handed to the avatar pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    /// Declared media type, e.g. `image/png`.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { media_type: media_type.into(), bytes }
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
