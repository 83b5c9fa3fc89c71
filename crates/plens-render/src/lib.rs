//! Rendering boundary for Process Lens.
//!
//! [`RenderEngine`] is the seam the view controller draws through;
//! [`GraphvizRenderer`] is the default backend, piping generated DOT
//! through the `dot` executable and returning image bytes in memory.

pub mod dot;
pub mod error;
pub mod graphviz;

pub use dot::dot_source;
pub use error::RenderError;
pub use graphviz::GraphvizRenderer;

use plens_model::{GraphDescription, ImageFormat};

/// The render boundary: one graph description in, image bytes out.
///
/// Rendering must be deterministic for a given `(graph, format)` pair;
/// the controller re-invokes it for on-demand exports without
/// re-mining.
pub trait RenderEngine: Send + Sync {
    fn render(&self, graph: &GraphDescription, format: ImageFormat)
    -> Result<Vec<u8>, RenderError>;
}
