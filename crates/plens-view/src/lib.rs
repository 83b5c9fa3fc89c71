//! View controller for the Process Lens dependency-graph viewer.
//!
//! This crate owns the parameter → recompute → render → display
//! pipeline and its state machine. The UI layer (whatever toolkit it
//! is) translates widget callbacks into [`ParameterChange`] commands
//! and paints the bytes the controller hands back; nothing here depends
//! on a UI runtime.
//!
//! Ownership follows the data model: [`MiningSession`] owns the loaded
//! event log, [`RenderCache`] owns the latest mined graph and its
//! display image as one atomically replaced pair, and
//! [`ViewportController`] owns the canvas transform independently of
//! mining state. [`GraphViewController`] orchestrates the three.

pub mod cache;
pub mod controller;
pub mod error;
pub mod session;
pub mod viewport;
pub mod worker;

pub use cache::RenderCache;
pub use controller::{GraphViewController, ParameterChange, ViewState};
pub use error::ViewError;
pub use session::MiningSession;
pub use viewport::{CanvasTransform, ViewportController};
pub use worker::{MineOutcome, MineWorker};
