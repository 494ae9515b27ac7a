//! Analyzer feed
//!
//! Pulls the raw spectrum source once per host tick (~30 Hz target), runs
//! the ballistics smoother, and publishes the render frame and spline path
//! behind a lock for the external renderer. The feed is the explicit
//! scheduler handle: ticks do nothing until `start()`, and `stop()`
//! deterministically ends the subscription.

use std::sync::Arc;

use parking_lot::RwLock;

use cq_viz::path::{spectrum_path, PathSegment};
use cq_viz::spectrum::SpectrumSmoother;

/// Raw spectrum source, polled per tick
///
/// Returns normalized magnitudes in [0, 1], already log-frequency-scaled
/// upstream. Length may vary between calls; an empty array means "no data".
pub trait SpectrumSource {
    fn poll(&mut self) -> Vec<f32>;
}

/// Latest analyzer output for the renderer
#[derive(Debug, Clone, Default)]
pub struct RenderOutput {
    /// Spatially smoothed dB values per bin
    pub frame: Vec<f32>,
    /// Spline path across the viewport
    pub path: Vec<PathSegment>,
}

/// Tick-driven spectrum pipeline with a published render frame
pub struct AnalyzerFeed {
    source: Box<dyn SpectrumSource>,
    smoother: SpectrumSmoother,
    output: Arc<RwLock<RenderOutput>>,
    running: bool,
    width: f32,
    height: f32,
}

impl AnalyzerFeed {
    pub fn new(source: Box<dyn SpectrumSource>, width: f32, height: f32) -> Self {
        Self {
            source,
            smoother: SpectrumSmoother::new(),
            output: Arc::new(RwLock::new(RenderOutput::default())),
            running: false,
            width,
            height,
        }
    }

    /// Shared handle the renderer reads each frame
    pub fn output(&self) -> Arc<RwLock<RenderOutput>> {
        self.output.clone()
    }

    pub fn start(&mut self) {
        self.running = true;
        log::debug!("analyzer feed started");
    }

    pub fn stop(&mut self) {
        self.running = false;
        log::debug!("analyzer feed stopped");
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// One host tick: poll, smooth, and republish on a gated change
    ///
    /// Does nothing while stopped. Redundant frames (within the change
    /// gate) leave the published output untouched, so the renderer sees no
    /// spurious updates.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        let raw = self.source.poll();
        if !self.smoother.ingest(&raw) {
            return;
        }

        let frame = self.smoother.render_frame();
        let path = spectrum_path(&frame, self.width, self.height);
        *self.output.write() = RenderOutput { frame, path };
    }

    /// Drop smoothing history, e.g. when the source restarts
    pub fn reset(&mut self) {
        self.smoother.reset();
        *self.output.write() = RenderOutput::default();
    }
}
