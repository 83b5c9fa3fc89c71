use thiserror::Error;

/// Failures while rendering a graph description.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("render engine exited with status {status}: {stderr}")]
    Engine { status: i32, stderr: String },
    #[error("edge references missing node: {from_node} -> {to_node}")]
    DanglingEdge { from_node: String, to_node: String },
    #[error("graph description has no nodes")]
    EmptyGraph,
}
