//! Graph view controller: the parameter → recompute → render →
//! display state machine.
//!
//! The controller receives load, parameter-change, export, and clear
//! commands from whatever front end drives it, decides whether
//! re-mining is needed, and keeps the render cache and viewport in
//! step. Zoom is the deliberate exception: it flows to the viewport
//! only and never triggers recomputation.

use std::path::Path;
use std::sync::Arc;

use plens_ingest::ColumnMapping;
use plens_mining::MiningEngine;
use plens_model::{GraphDescription, ImageFormat, ParameterState, RenderedImage};
use plens_render::RenderEngine;

use crate::cache::RenderCache;
use crate::error::ViewError;
use crate::session::MiningSession;
use crate::viewport::{CanvasTransform, ViewportController};
use crate::worker::{MineOutcome, MineWorker};

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No graph displayed (nothing loaded yet, or cleared).
    Empty,
    /// A graph is mined, rendered, and cached.
    Ready,
    /// A background mine is in flight.
    Mining,
}

/// One user-driven parameter change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterChange {
    MinFrequency(u64),
    DependencyThreshold(f64),
    Zoom(f64),
}

/// Orchestrates [`MiningSession`], [`ParameterState`], [`RenderCache`],
/// and [`ViewportController`].
pub struct GraphViewController {
    session: MiningSession,
    params: ParameterState,
    cache: RenderCache,
    viewport: ViewportController,
    renderer: Arc<dyn RenderEngine>,
    worker: Option<MineWorker>,
    state: ViewState,
}

impl GraphViewController {
    pub fn new(engine: Arc<dyn MiningEngine>, renderer: Arc<dyn RenderEngine>) -> Self {
        Self {
            session: MiningSession::new(engine),
            params: ParameterState::new(),
            cache: RenderCache::new(),
            viewport: ViewportController::new(),
            renderer,
            worker: None,
            state: ViewState::Empty,
        }
    }

    /// Dispatch parameter-driven re-mines to a background worker
    /// instead of blocking. Results are applied via [`Self::pump`].
    #[must_use]
    pub fn with_background_mining(mut self) -> Self {
        self.worker = Some(MineWorker::spawn(self.session.engine()));
        self
    }

    /// Load an event log and perform the initial mine + render.
    ///
    /// On success the parameter bounds are re-derived from the new log
    /// (a `min_frequency` carried over from a previous, larger log is
    /// re-clamped, never silently producing an empty graph) and the
    /// controller is `Ready`. On ingest failure nothing changes and the
    /// error is surfaced.
    pub fn load(
        &mut self,
        path: &Path,
        columns: &ColumnMapping,
    ) -> Result<&RenderedImage, ViewError> {
        let max_frequency = self.session.load(path, columns)?;
        // Anything the worker is still mining was computed against the
        // old log and must not overwrite the fresh graph.
        if let Some(worker) = &mut self.worker {
            worker.supersede_pending();
        }
        self.params.set_max_frequency_bound(max_frequency);
        self.remine()
    }

    /// Mine with the current parameters and refresh the cache.
    ///
    /// The initial mine after [`Self::load`] runs through here, as does
    /// re-mining after a [`Self::clear`] (the log is retained). Always
    /// synchronous: a render failure leaves the last good image cached
    /// and the state unchanged.
    pub fn remine(&mut self) -> Result<&RenderedImage, ViewError> {
        let graph = self
            .session
            .mine(self.params.dependency_threshold(), self.params.min_frequency())?;
        let image = self.cache.update(graph, self.renderer.as_ref())?;
        self.state = ViewState::Ready;
        Ok(image)
    }

    /// Apply one parameter change.
    ///
    /// Zoom updates the viewport and returns immediately; frequency and
    /// threshold changes clamp through [`ParameterState`] and trigger a
    /// re-mine — synchronously, or via the background worker when one
    /// is attached (then the new graph lands on the next [`Self::pump`]).
    pub fn apply(&mut self, change: ParameterChange) -> Result<(), ViewError> {
        match change {
            ParameterChange::Zoom(factor) => {
                self.params.set_zoom_factor(factor);
                self.viewport.set_zoom(factor);
                return Ok(());
            }
            ParameterChange::MinFrequency(value) => {
                let effective = self.params.set_min_frequency(value);
                if effective != value {
                    tracing::warn!(requested = value, effective, "min frequency clamped");
                }
            }
            ParameterChange::DependencyThreshold(value) => {
                self.params.set_dependency_threshold(value);
            }
        }

        if let Some(worker) = &mut self.worker {
            let log = self.session.log().ok_or(ViewError::NotLoaded)?;
            worker.submit(
                log,
                self.params.dependency_threshold(),
                self.params.min_frequency(),
            );
            self.state = ViewState::Mining;
            Ok(())
        } else {
            self.remine().map(|_| ())
        }
    }

    /// Apply completed background mines.
    ///
    /// Outcomes are delivered in request order; only the one matching
    /// the latest submitted request is applied, anything older was
    /// superseded and is discarded so a stale graph can never overwrite
    /// a newer one. Returns `true` when the displayed image changed.
    pub fn pump(&mut self) -> Result<bool, ViewError> {
        let Some(worker) = &self.worker else {
            return Ok(false);
        };
        let latest = worker.latest_seq();
        let stale_through = worker.superseded_through();
        let mut applied = false;
        for outcome in worker.try_outcomes() {
            if outcome.seq < latest || outcome.seq <= stale_through {
                tracing::warn!(
                    seq = outcome.seq,
                    latest,
                    stale_through,
                    "discarding superseded mine result"
                );
                continue;
            }
            self.apply_outcome(outcome)?;
            applied = true;
        }
        Ok(applied)
    }

    /// Swap a freshly mined background graph into the cache. On render
    /// failure the last good pair stays displayed and the controller
    /// returns to `Ready`, so the view is not stuck in `Mining`.
    fn apply_outcome(&mut self, outcome: MineOutcome) -> Result<(), ViewError> {
        let result = self.cache.update(outcome.graph, self.renderer.as_ref());
        self.state = ViewState::Ready;
        result.map(|_| ())
    }

    /// Re-render the cached graph in the requested format, without
    /// re-mining. Fails with [`ViewError::NoGraph`] when nothing is
    /// cached.
    pub fn export(&self, format: ImageFormat) -> Result<RenderedImage, ViewError> {
        self.cache.export_as(format, self.renderer.as_ref())
    }

    /// Drop the displayed graph and reset parameters and viewport.
    ///
    /// The loaded event log is retained, so a later [`Self::remine`] or
    /// parameter change mines again without a reload.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.params.reset();
        self.viewport.reset();
        // In-flight mines must not repopulate the cache after a clear.
        if let Some(worker) = &mut self.worker {
            worker.supersede_pending();
        }
        self.state = ViewState::Empty;
        tracing::info!("view cleared");
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn params(&self) -> &ParameterState {
        &self.params
    }

    /// Currently displayed image, if any.
    pub fn image(&self) -> Option<&RenderedImage> {
        self.cache.image()
    }

    /// Currently cached graph description, if any.
    pub fn graph(&self) -> Option<&GraphDescription> {
        self.cache.graph()
    }

    /// Transform the canvas should apply right now.
    pub fn transform(&self) -> CanvasTransform {
        self.viewport.transform()
    }

    /// Block until the background worker has answered every submitted
    /// request, applying the newest result. No-op without a worker.
    /// Used by batch front ends; interactive loops call [`Self::pump`].
    pub fn drain_worker(&mut self) -> Result<bool, ViewError> {
        let Some(worker) = &self.worker else {
            return Ok(false);
        };
        let latest = worker.latest_seq();
        let stale_through = worker.superseded_through();
        if latest == 0 || latest <= stale_through {
            // Nothing live is pending; an earlier pump may already have
            // consumed the stale outcomes, so do not block on them.
            for outcome in worker.try_outcomes() {
                tracing::warn!(
                    seq = outcome.seq,
                    stale_through,
                    "discarding superseded mine result"
                );
            }
            return Ok(false);
        }
        let outcomes = worker.wait_for(latest);
        let mut applied = false;
        for outcome in outcomes {
            if outcome.seq < latest || outcome.seq <= stale_through {
                tracing::warn!(
                    seq = outcome.seq,
                    latest,
                    stale_through,
                    "discarding superseded mine result"
                );
                continue;
            }
            self.apply_outcome(outcome)?;
            applied = true;
        }
        Ok(applied)
    }
}
