//! Image Domain Models

use serde::Serialize;
use std::fmt;

/// A stored image blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: i64,
    pub data: Vec<u8>,
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<id {}>", self.id)
    }
}

/// JSON view of an image; the bytes are served separately
#[derive(Debug, Serialize)]
pub struct ImageRef {
    pub id: i64,
}

impl From<&Image> for ImageRef {
    fn from(image: &Image) -> Self {
        Self { id: image.id }
    }
}
