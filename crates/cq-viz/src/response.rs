//! EQ response curve
//!
//! Analytic per-shape approximations summed in dB across enabled bands.
//! This is the display curve only: additive-dB is visually accurate for
//! moderate gains but diverges from a true filter cascade at extreme
//! boosts/cuts, which is an intentional simplification for the editor.
//! The engine's audio path evaluates real filters and never reads this.

use cq_core::{EqBand, EqShape};

use crate::mapping::{gain_to_y, x_to_freq};

#[inline]
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Response of a single band at a frequency, in dB
///
/// Uses `log_ratio = log2(freq / band.freq)` so the shapes are symmetric on
/// the log-frequency axis. Enabled state is the caller's concern.
pub fn band_response(freq: f64, band: &EqBand) -> f64 {
    let log_ratio = (freq / band.freq).log2();

    match band.shape {
        EqShape::Bell => band.gain_db * (-(log_ratio * band.q).powi(2)).exp(),
        EqShape::LowShelf => band.gain_db * (1.0 - sigmoid(log_ratio * 4.0)),
        EqShape::HighShelf => band.gain_db * sigmoid(log_ratio * 4.0),
        EqShape::LowCut => {
            let ratio = freq / band.freq;
            if ratio < 1.0 {
                -30.0 * (1.0 - ratio)
            } else {
                0.0
            }
        }
        EqShape::HighCut => {
            let ratio = freq / band.freq;
            if ratio > 1.0 {
                -30.0 * (ratio - 1.0)
            } else {
                0.0
            }
        }
        EqShape::Notch => {
            let depth = 30.0 * (-(log_ratio * band.q * 2.0).powi(2)).exp();
            -depth.min(30.0)
        }
        EqShape::BandPass => (-(log_ratio * band.q).powi(2)).exp() * 12.0 - 6.0,
        EqShape::TiltShelf => band.gain_db * log_ratio.clamp(-2.0, 2.0) / 2.0,
        // Visual placeholders: flat magnitude
        EqShape::AllPass | EqShape::Brickwall => 0.0,
    }
}

/// Composite curve: one y pixel value per integer column
///
/// Each column converts to a frequency, sums `band_response` over enabled
/// bands, and maps the total dB to y, clamped to the viewport.
pub fn composite_curve(bands: &[EqBand], width: u32, height: f64) -> Vec<f32> {
    let mut ys = Vec::with_capacity(width as usize);

    for col in 0..width {
        let freq = x_to_freq(col as f64, width as f64);
        let total_db: f64 = bands
            .iter()
            .filter(|b| b.enabled)
            .map(|b| band_response(freq, b))
            .sum();
        let y = gain_to_y(total_db, height).clamp(0.0, height);
        ys.push(y as f32);
    }

    log::trace!("composite curve: {} columns, {} bands", width, bands.len());
    ys
}
