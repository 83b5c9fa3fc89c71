use plens_ingest::IngestError;
use plens_render::RenderError;
use thiserror::Error;

/// Failures surfaced by the view controller.
///
/// `Ingest` and `Render` wrap collaborator errors and leave the last
/// good state in place; `NotLoaded` is a programming-contract violation
/// (the UI surface never offers mining before a load); `NoGraph` is an
/// export with an empty cache and a no-op.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("no event log loaded")]
    NotLoaded,
    #[error("nothing has been mined yet")]
    NoGraph,
}
