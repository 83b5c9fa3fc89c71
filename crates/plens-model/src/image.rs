//! Rendered image payloads.

use serde::{Deserialize, Serialize};

/// Output format requested from the render engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// Raster image for canvas display (PNG).
    Raster,
    /// Vector image for export (SVG).
    Vector,
}

impl ImageFormat {
    /// Conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Raster => "png",
            Self::Vector => "svg",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raster => write!(f, "raster"),
            Self::Vector => write!(f, "vector"),
        }
    }
}

/// Byte payload produced by rendering exactly one graph description in
/// one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl RenderedImage {
    pub fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
