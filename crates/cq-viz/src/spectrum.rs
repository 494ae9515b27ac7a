//! Spectrum analyzer smoothing
//!
//! Takes normalized, already log-frequency-scaled magnitudes from the raw
//! spectrum source and produces a perceptually stable trace:
//! - dB conversion with a -80 dB silence floor
//! - Asymmetric ballistics (fast rise, slow decay) against the prior frame
//! - A change gate so unchanged frames don't trigger redraws
//! - Render-time spatial smoothing, coarser at the low end where log
//!   compression packs fewer bins per octave

/// Display floor (silence) in dB
pub const SPECTRUM_FLOOR_DB: f32 = -80.0;

/// Display ceiling in dB
pub const SPECTRUM_CEIL_DB: f32 = 0.0;

/// Rise coefficient per tick (fast attack)
const RISE: f32 = 0.6;

/// Decay coefficient per tick (slow release)
const DECAY: f32 = 0.15;

/// Minimum per-bin movement (dB) that counts as a visible change
const CHANGE_GATE_DB: f32 = 0.1;

/// Previous and current smoothed magnitude arrays, in dB
///
/// Lengths follow the raw source and may differ between ticks; a bin with no
/// prior value starts from the silence floor.
#[derive(Debug, Clone, Default)]
pub struct SpectrumFrame {
    pub previous: Vec<f32>,
    pub current: Vec<f32>,
}

/// Ballistics and spatial smoothing for the analyzer trace
#[derive(Debug, Clone, Default)]
pub struct SpectrumSmoother {
    frame: SpectrumFrame,
}

impl SpectrumSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn frame(&self) -> &SpectrumFrame {
        &self.frame
    }

    /// Feed one raw frame of normalized magnitudes in [0, 1]
    ///
    /// Returns true when the new frame should propagate to the renderer:
    /// the bin count changed or some bin moved more than the change gate.
    /// An empty input means "no data" and leaves the frame untouched.
    pub fn ingest(&mut self, raw: &[f32]) -> bool {
        if raw.is_empty() {
            return false;
        }

        let old = std::mem::take(&mut self.frame.current);
        let length_changed = old.len() != raw.len();
        let mut changed = length_changed;

        let mut smoothed = Vec::with_capacity(raw.len());
        for (i, &v) in raw.iter().enumerate() {
            let target = v.clamp(0.0, 1.0) * 80.0 - 80.0;
            let prev = old.get(i).copied().unwrap_or(SPECTRUM_FLOOR_DB);
            let coeff = if target > prev { RISE } else { DECAY };
            let value = prev + (target - prev) * coeff;
            if (value - prev).abs() > CHANGE_GATE_DB {
                changed = true;
            }
            smoothed.push(value);
        }

        self.frame.previous = old;
        self.frame.current = smoothed;
        changed
    }

    /// Frame to be drawn: spatially smoothed copy of the current frame
    ///
    /// Three box-blur passes with a radius that widens toward the low end,
    /// compensating for the coarser low-frequency resolution under log
    /// compression.
    pub fn render_frame(&self) -> Vec<f32> {
        let mut out = self.frame.current.clone();
        for _ in 0..3 {
            out = box_blur(&out);
        }
        out
    }

    /// Drop all history (e.g. when the source restarts)
    pub fn reset(&mut self) {
        self.frame = SpectrumFrame::default();
    }
}

/// Blur radius for a bin at position ratio `i / len`
#[inline]
fn blur_radius(ratio: f32) -> usize {
    if ratio < 0.25 {
        6
    } else if ratio < 0.5 {
        3
    } else {
        1
    }
}

fn box_blur(data: &[f32]) -> Vec<f32> {
    let len = data.len();
    let mut out = Vec::with_capacity(len);

    for i in 0..len {
        let radius = blur_radius(i as f32 / len as f32);
        let lo = i.saturating_sub(radius);
        let hi = (i + radius).min(len - 1);
        let sum: f32 = data[lo..=hi].iter().sum();
        out.push(sum / (hi - lo + 1) as f32);
    }

    out
}
