//! Core data model for the Process Lens dependency-graph viewer.
//!
//! This crate holds the value types shared by ingestion, mining,
//! rendering, and the view controller: the immutable [`EventLog`],
//! the [`GraphDescription`] snapshot produced by one mining call,
//! rendered image payloads, and the clamped [`ParameterState`].

pub mod event;
pub mod graph;
pub mod image;
pub mod params;

pub use event::{EventLog, Trace};
pub use graph::{ActivityNode, DependencyEdge, GraphDescription};
pub use image::{ImageFormat, RenderedImage};
pub use params::{
    DEFAULT_DEPENDENCY_THRESHOLD, DEFAULT_MIN_FREQUENCY, DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR,
    MIN_ZOOM_FACTOR, ParameterState,
};
