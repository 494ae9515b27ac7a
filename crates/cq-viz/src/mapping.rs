//! Pixel-space coordinate mapping
//!
//! Frequency maps logarithmically across the display width, gain linearly
//! across the height with 0 dB at mid-height. Forward functions clamp
//! out-of-domain inputs before transforming; the inverses do not clamp their
//! output, so callers driving parameter edits clamp the result themselves.

use cq_core::{MAX_FREQ_HZ, MAX_GAIN_DB, MIN_FREQ_HZ};

// log10(10) and log10(30000)
const MIN_LOG: f64 = 1.0;
const MAX_LOG: f64 = 4.477_121_254_719_662;

/// Frequency (Hz) to x pixel position
#[inline]
pub fn freq_to_x(freq: f64, width: f64) -> f64 {
    let log = freq.clamp(MIN_FREQ_HZ, MAX_FREQ_HZ).log10();
    (log - MIN_LOG) / (MAX_LOG - MIN_LOG) * width
}

/// X pixel position to frequency (Hz)
#[inline]
pub fn x_to_freq(x: f64, width: f64) -> f64 {
    10f64.powf(MIN_LOG + x / width * (MAX_LOG - MIN_LOG))
}

/// Gain (dB) to y pixel position; 0 dB is mid-height, +30 dB the top edge
#[inline]
pub fn gain_to_y(gain_db: f64, height: f64) -> f64 {
    let gain = gain_db.clamp(-MAX_GAIN_DB, MAX_GAIN_DB);
    height / 2.0 - (gain / MAX_GAIN_DB) * (height / 2.0)
}

/// Y pixel position to gain (dB)
#[inline]
pub fn y_to_gain(y: f64, height: f64) -> f64 {
    (height / 2.0 - y) / (height / 2.0) * MAX_GAIN_DB
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_freq_round_trip() {
        for &width in &[100.0, 799.0, 1920.0] {
            for &freq in &[10.0, 52.7, 440.0, 1000.0, 12_345.0, 30_000.0] {
                let back = x_to_freq(freq_to_x(freq, width), width);
                assert_relative_eq!(back, freq, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_gain_round_trip() {
        for &height in &[200.0, 431.0] {
            for &gain in &[-30.0, -12.5, 0.0, 6.0, 30.0] {
                let back = y_to_gain(gain_to_y(gain, height), height);
                assert_relative_eq!(back, gain, max_relative = 1e-9, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_forward_clamps_out_of_domain() {
        // Below 10 Hz pins to the left edge, above 30 kHz to the right
        assert_eq!(freq_to_x(1.0, 800.0), 0.0);
        assert_relative_eq!(freq_to_x(100_000.0, 800.0), 800.0, epsilon = 1e-9);

        // Gain beyond +-30 dB pins to the edges
        assert_eq!(gain_to_y(99.0, 400.0), 0.0);
        assert_eq!(gain_to_y(-99.0, 400.0), 400.0);
    }

    #[test]
    fn test_zero_db_is_mid_height() {
        assert_eq!(gain_to_y(0.0, 400.0), 200.0);
    }

    #[test]
    fn test_inverse_does_not_clamp_output() {
        // A pointer past the right edge yields an out-of-domain frequency;
        // the caller clamps, not the mapper.
        assert!(x_to_freq(900.0, 800.0) > MAX_FREQ_HZ);
        assert!(y_to_gain(-50.0, 400.0) > MAX_GAIN_DB);
    }
}
