//! Turning image references into encoded image bytes.
//!
//! Book descriptions refer to images by an opaque string: usually a
//! `data:` URL produced by the browser, or a path to a file that was
//! exported alongside the description. Remote URLs are never fetched.

use crate::ImageError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// An opaque reference to an image, e.g. a data URL or a file path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new<S: Into<String>>(reference: S) -> ImageRef {
        ImageRef(reference.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // data URLs can be megabytes long, only show the start
        const MAX: usize = 48;
        match self.0.char_indices().nth(MAX) {
            Some((cut, _)) => write!(f, "{}…", &self.0[..cut]),
            None => f.write_str(&self.0),
        }
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        ImageRef::new(value)
    }
}

/// Provides the encoded bytes for an image reference
pub trait ImageResolver {
    fn resolve(&self, image: &ImageRef) -> Result<Vec<u8>, ImageError>;
}

impl ImageResolver for HashMap<ImageRef, Vec<u8>> {
    fn resolve(&self, image: &ImageRef) -> Result<Vec<u8>, ImageError> {
        self.get(image)
            .cloned()
            .ok_or_else(|| ImageError::Unresolved(image.to_string()))
    }
}

impl<R: ImageResolver + ?Sized> ImageResolver for &R {
    fn resolve(&self, image: &ImageRef) -> Result<Vec<u8>, ImageError> {
        (**self).resolve(image)
    }
}

/// Resolves `data:` URLs in place and reads everything else from disk,
/// relative to a root directory
#[derive(Debug, Clone)]
pub struct FileResolver {
    root: PathBuf,
}

impl FileResolver {
    pub fn new<P: AsRef<Path>>(root: P) -> FileResolver {
        FileResolver {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference.strip_prefix("file://").unwrap_or(reference));
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl ImageResolver for FileResolver {
    fn resolve(&self, image: &ImageRef) -> Result<Vec<u8>, ImageError> {
        let reference = image.as_str().trim();
        if reference.starts_with("data:") {
            decode_data_url(reference)
        } else if reference.starts_with("http://") || reference.starts_with("https://") {
            Err(ImageError::Unsupported(image.to_string()))
        } else {
            Ok(std::fs::read(self.path_for(reference))?)
        }
    }
}

/// Decode the payload of a `data:[<mime>][;base64],<data>` URL. Only base64
/// payloads are supported, which is what browsers produce for images.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>, ImageError> {
    let rest = url.strip_prefix("data:").ok_or(ImageError::MalformedDataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(ImageError::MalformedDataUrl)?;
    if !header.ends_with(";base64") {
        return Err(ImageError::MalformedDataUrl);
    }

    let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(STANDARD.decode(payload)?)
}
