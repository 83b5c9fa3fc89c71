//! Viewport: zoom factor and canvas transform.
//!
//! Deliberately independent of mining state — panning and zooming stay
//! responsive while a large log is (re-)mining, and never invalidate
//! the render cache.

use plens_model::{DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, ParameterState};

/// 2-D transform the canvas applies to the displayed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl CanvasTransform {
    fn scaled(factor: f64, pan_x: f64, pan_y: f64) -> Self {
        Self {
            scale_x: factor,
            scale_y: factor,
            pan_x,
            pan_y,
        }
    }
}

/// Owns the zoom factor and pan offsets.
#[derive(Debug, Clone)]
pub struct ViewportController {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM_FACTOR,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl ViewportController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp and store the zoom factor; returns the transform to apply.
    pub fn set_zoom(&mut self, factor: f64) -> CanvasTransform {
        self.zoom = factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR);
        self.transform()
    }

    /// Zoom from an integer slider position (1..=200).
    pub fn set_zoom_from_slider(&mut self, position: u8) -> CanvasTransform {
        self.set_zoom(ParameterState::zoom_from_slider(position))
    }

    /// Shift the pan offset (drag-to-scroll); returns the new transform.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> CanvasTransform {
        self.pan_x += dx;
        self.pan_y += dy;
        self.transform()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn transform(&self) -> CanvasTransform {
        CanvasTransform::scaled(self.zoom, self.pan_x, self.pan_y)
    }

    /// Back to 1:1 scale and origin.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_clamps_to_slider_range() {
        let mut viewport = ViewportController::new();
        assert_eq!(viewport.set_zoom(3.0).scale_x, MAX_ZOOM_FACTOR);
        assert_eq!(viewport.set_zoom(0.001).scale_y, MIN_ZOOM_FACTOR);
        assert_eq!(viewport.set_zoom_from_slider(150).scale_x, 1.5);
    }

    #[test]
    fn pan_accumulates_and_reset_restores_defaults() {
        let mut viewport = ViewportController::new();
        viewport.set_zoom(1.5);
        viewport.pan_by(10.0, -4.0);
        let transform = viewport.pan_by(2.0, 4.0);
        assert_eq!(transform.pan_x, 12.0);
        assert_eq!(transform.pan_y, 0.0);
        viewport.reset();
        assert_eq!(viewport.transform().scale_x, DEFAULT_ZOOM_FACTOR);
        assert_eq!(viewport.transform().pan_x, 0.0);
    }
}
