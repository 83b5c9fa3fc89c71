//! Render cache: the latest mined graph and its display image.

use plens_model::{GraphDescription, ImageFormat, RenderedImage};
use plens_render::RenderEngine;

use crate::error::ViewError;

/// The cached pair. Held as one value so graph and image can never be
/// observed out of step.
#[derive(Debug, Clone)]
struct CachedGraph {
    graph: GraphDescription,
    image: RenderedImage,
}

/// Holds the most recent graph description and its rendered display
/// image, and regenerates alternate export formats from the description
/// without re-mining.
#[derive(Default)]
pub struct RenderCache {
    entry: Option<CachedGraph>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the display raster for `graph` and replace the cached
    /// pair. The swap happens only after rendering succeeds, so a
    /// render failure leaves the previous pair intact.
    pub fn update(
        &mut self,
        graph: GraphDescription,
        renderer: &dyn RenderEngine,
    ) -> Result<&RenderedImage, ViewError> {
        let bytes = renderer.render(&graph, ImageFormat::Raster)?;
        let entry = self.entry.insert(CachedGraph {
            graph,
            image: RenderedImage::new(ImageFormat::Raster, bytes),
        });
        tracing::debug!("render cache updated");
        Ok(&entry.image)
    }

    /// Re-render the currently cached description in the requested
    /// format. Export bytes are generated on demand and never cached.
    pub fn export_as(
        &self,
        format: ImageFormat,
        renderer: &dyn RenderEngine,
    ) -> Result<RenderedImage, ViewError> {
        let entry = self.entry.as_ref().ok_or(ViewError::NoGraph)?;
        let bytes = renderer.render(&entry.graph, format)?;
        Ok(RenderedImage::new(format, bytes))
    }

    /// Discard the cached pair.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn graph(&self) -> Option<&GraphDescription> {
        self.entry.as_ref().map(|e| &e.graph)
    }

    pub fn image(&self) -> Option<&RenderedImage> {
        self.entry.as_ref().map(|e| &e.image)
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
