//! Live viewer parameters with clamped setters.
//!
//! [`ParameterState`] stores the three user-adjustable values and their
//! valid ranges. Setters clamp and store; nothing here triggers mining
//! or rendering — the controller decides what a change means.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_FREQUENCY: u64 = 1;
pub const DEFAULT_DEPENDENCY_THRESHOLD: f64 = 0.5;
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.0;

/// Zoom slider range 1..=200 maps linearly onto this factor range.
pub const MIN_ZOOM_FACTOR: f64 = 0.01;
pub const MAX_ZOOM_FACTOR: f64 = 2.0;

/// The three live parameters and their bounds.
///
/// `max_frequency` is derived from the loaded log via
/// [`ParameterState::set_max_frequency_bound`], never set by the user.
/// Invariant: `min_frequency <= max_frequency` at all times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterState {
    min_frequency: u64,
    max_frequency: u64,
    dependency_threshold: f64,
    zoom_factor: f64,
}

impl Default for ParameterState {
    fn default() -> Self {
        Self {
            min_frequency: DEFAULT_MIN_FREQUENCY,
            max_frequency: DEFAULT_MIN_FREQUENCY,
            dependency_threshold: DEFAULT_DEPENDENCY_THRESHOLD,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
        }
    }
}

impl ParameterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_frequency(&self) -> u64 {
        self.min_frequency
    }

    pub fn max_frequency(&self) -> u64 {
        self.max_frequency
    }

    pub fn dependency_threshold(&self) -> f64 {
        self.dependency_threshold
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Clamp and store the minimum activity frequency. Returns the
    /// effective value.
    pub fn set_min_frequency(&mut self, value: u64) -> u64 {
        self.min_frequency = value.clamp(DEFAULT_MIN_FREQUENCY, self.max_frequency);
        self.min_frequency
    }

    /// Clamp and store the dependency threshold. Returns the effective
    /// value.
    pub fn set_dependency_threshold(&mut self, value: f64) -> f64 {
        self.dependency_threshold = value.clamp(0.0, 1.0);
        self.dependency_threshold
    }

    /// Clamp and store the zoom factor. Returns the effective value.
    pub fn set_zoom_factor(&mut self, value: f64) -> f64 {
        self.zoom_factor = value.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR);
        self.zoom_factor
    }

    /// Rebound `min_frequency` to the newly loaded log's observed
    /// maximum. Called once per load; re-clamps `min_frequency` so a
    /// value carried over from a previous, larger log can never exceed
    /// the new bound.
    pub fn set_max_frequency_bound(&mut self, max: u64) {
        self.max_frequency = max.max(DEFAULT_MIN_FREQUENCY);
        if self.min_frequency > self.max_frequency {
            self.min_frequency = self.max_frequency;
        }
    }

    /// Restore defaults. The max-frequency bound is kept: it belongs to
    /// the loaded log, not to the user.
    pub fn reset(&mut self) {
        self.min_frequency = DEFAULT_MIN_FREQUENCY;
        self.dependency_threshold = DEFAULT_DEPENDENCY_THRESHOLD;
        self.zoom_factor = DEFAULT_ZOOM_FACTOR;
    }

    /// Map an integer threshold slider position (0..=100) onto the
    /// 0.00..=1.00 threshold range.
    pub fn dependency_threshold_from_slider(position: u8) -> f64 {
        f64::from(position.min(100)) / 100.0
    }

    /// Map an integer zoom slider position (1..=200) onto the
    /// 0.01..=2.00 factor range.
    pub fn zoom_from_slider(position: u8) -> f64 {
        (f64::from(position) / 100.0).clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_frequency_clamps_to_bound() {
        let mut params = ParameterState::new();
        params.set_max_frequency_bound(37);
        assert_eq!(params.set_min_frequency(40), 37);
        assert_eq!(params.set_min_frequency(0), 1);
        assert_eq!(params.set_min_frequency(12), 12);
    }

    #[test]
    fn rebound_reclamps_carried_over_value() {
        let mut params = ParameterState::new();
        params.set_max_frequency_bound(100);
        params.set_min_frequency(80);
        params.set_max_frequency_bound(37);
        assert_eq!(params.min_frequency(), 37);
    }

    #[test]
    fn threshold_and_zoom_clamp() {
        let mut params = ParameterState::new();
        assert_eq!(params.set_dependency_threshold(1.5), 1.0);
        assert_eq!(params.set_dependency_threshold(-0.1), 0.0);
        assert_eq!(params.set_zoom_factor(5.0), MAX_ZOOM_FACTOR);
        assert_eq!(params.set_zoom_factor(0.0), MIN_ZOOM_FACTOR);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_bound() {
        let mut params = ParameterState::new();
        params.set_max_frequency_bound(37);
        params.set_min_frequency(20);
        params.set_dependency_threshold(0.9);
        params.set_zoom_factor(1.8);
        params.reset();
        assert_eq!(params.min_frequency(), DEFAULT_MIN_FREQUENCY);
        assert_eq!(params.dependency_threshold(), DEFAULT_DEPENDENCY_THRESHOLD);
        assert_eq!(params.zoom_factor(), DEFAULT_ZOOM_FACTOR);
        assert_eq!(params.max_frequency(), 37);
    }

    #[test]
    fn slider_mappings_are_linear() {
        assert_eq!(ParameterState::dependency_threshold_from_slider(90), 0.9);
        assert_eq!(ParameterState::dependency_threshold_from_slider(0), 0.0);
        assert_eq!(ParameterState::zoom_from_slider(100), 1.0);
        assert_eq!(ParameterState::zoom_from_slider(1), 0.01);
        assert_eq!(ParameterState::zoom_from_slider(200), 2.0);
    }
}
