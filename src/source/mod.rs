use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use base64::Engine;

use crate::foundation::error::{StudioError, StudioResult};

/// Opaque still-image payload handed to the studio by a capture device or file picker.
///
/// The studio never decodes it; the bytes are forwarded to the path oracle as-is. Cloning is
/// cheap (the payload is shared).
#[derive(Clone)]
pub struct SourceImage {
    bytes: Arc<[u8]>,
    mime: Arc<str>,
    fingerprint: u64,
}

impl SourceImage {
    /// Wrap encoded image bytes, sniffing the MIME type from the magic bytes.
    ///
    /// Unknown formats are accepted and labelled `application/octet-stream`.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> StudioResult<Self> {
        let bytes = bytes.into();
        let mime = match image::guess_format(&bytes) {
            Ok(fmt) => fmt.to_mime_type(),
            Err(_) => "application/octet-stream",
        };
        Self::with_mime(bytes, mime)
    }

    /// Wrap encoded image bytes with an explicit MIME type.
    pub fn with_mime(bytes: impl Into<Vec<u8>>, mime: &str) -> StudioResult<Self> {
        let bytes: Vec<u8> = bytes.into();
        if bytes.is_empty() {
            return Err(StudioError::validation("image payload is empty"));
        }
        let fingerprint = xxhash_rust::xxh3::xxh3_64(&bytes);
        Ok(Self {
            bytes: Arc::from(bytes),
            mime: Arc::from(mime),
            fingerprint,
        })
    }

    /// Parse a `data:<mime>;base64,<payload>` URL, the form browsers hand out for captures.
    pub fn from_data_url(url: &str) -> StudioResult<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| StudioError::validation("data url must start with 'data:'"))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| StudioError::validation("data url is missing ','"))?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or_else(|| StudioError::validation("only base64 data urls are supported"))?;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .context("decode data url payload")?;
        Self::with_mime(bytes, mime)
    }

    /// Encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// MIME type of the payload.
    pub fn mime_type(&self) -> &str {
        &self.mime
    }

    /// Content hash of the payload.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Payload encoded as standard base64.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Payload as a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.to_base64())
    }
}

impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceImage")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .field("fingerprint", &format_args!("{:016x}", self.fingerprint))
            .finish()
    }
}

/// Producer of still images (camera capture, file picker).
pub trait ImageSource {
    /// Acquire one image. Permission refusals surface as [`StudioError::CaptureDenied`].
    fn acquire(&mut self) -> StudioResult<SourceImage>;
}

/// Image source backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileImageSource {
    path: PathBuf,
}

impl FileImageSource {
    /// Read images from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSource for FileImageSource {
    fn acquire(&mut self) -> StudioResult<SourceImage> {
        let bytes = std::fs::read(&self.path).map_err(|e| read_error(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), len = bytes.len(), "image acquired");
        SourceImage::from_bytes(bytes)
    }
}

/// Permission refusals become [`StudioError::CaptureDenied`]; anything else keeps its context.
fn read_error(path: &Path, e: std::io::Error) -> StudioError {
    match e.kind() {
        std::io::ErrorKind::PermissionDenied => {
            StudioError::capture_denied(format!("'{}': {e}", path.display()))
        }
        _ => StudioError::Other(
            anyhow::Error::new(e).context(format!("read image '{}'", path.display())),
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/image.rs"]
mod tests;
