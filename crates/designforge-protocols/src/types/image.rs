//! Uploaded design image.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

/// Raw image bytes plus their media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub bytes: Bytes,
    pub media_type: String,
}

impl ImageData {
    /// Wrap bytes, sniffing the media type from the magic number.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        let media_type = sniff_media_type(&bytes).to_string();
        Self { bytes, media_type }
    }

    pub fn with_media_type(bytes: impl Into<Bytes>, media_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: media_type.into(),
        }
    }

    /// Read an image file from disk.
    pub async fn load(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.to_base64())
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn sniff_media_type(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        DEFAULT_MEDIA_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sniff_png() {
        let image = ImageData::from_bytes(b"\x89PNG\r\n\x1a\nrest".to_vec());
        assert_eq!(image.media_type, "image/png");
    }

    #[test]
    fn test_sniff_gif_and_webp() {
        assert_eq!(ImageData::from_bytes(b"GIF89a...".to_vec()).media_type, "image/gif");
        assert_eq!(
            ImageData::from_bytes(b"RIFF\0\0\0\0WEBPVP8 ".to_vec()).media_type,
            "image/webp"
        );
    }

    #[test]
    fn test_unknown_defaults_to_jpeg() {
        let image = ImageData::from_bytes(vec![0xff, 0xd8, 0xff, 0xe0]);
        assert_eq!(image.media_type, "image/jpeg");
    }

    #[test]
    fn test_base64_and_data_url() {
        let image = ImageData::with_media_type(b"hi".to_vec(), "image/png");
        assert_eq!(image.to_base64(), "aGk=");
        assert_eq!(image.to_data_url(), "data:image/png;base64,aGk=");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"GIF87a-data").unwrap();

        let image = ImageData::load(file.path()).await.unwrap();
        assert_eq!(image.media_type, "image/gif");
        assert_eq!(image.bytes.len(), 11);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = ImageData::load(Path::new("/nonexistent/design.png")).await;
        assert!(result.is_err());
    }
}
