//! Parametric EQ band model
//!
//! One `EqBand` describes a single filter band as the UI edits it. These are
//! display/edit descriptors only; the audio-rate filtering lives in the
//! external engine and is addressed through the flat parameter protocol.

use serde::{Deserialize, Serialize};

/// Maximum number of live EQ bands
pub const MAX_BANDS: usize = 64;

/// Frequency domain (Hz)
pub const MIN_FREQ_HZ: f64 = 10.0;
pub const MAX_FREQ_HZ: f64 = 30_000.0;

/// Gain domain (dB)
pub const MIN_GAIN_DB: f64 = -30.0;
pub const MAX_GAIN_DB: f64 = 30.0;

/// Q domain (canonical, used at every layer)
pub const MIN_Q: f64 = 0.1;
pub const MAX_Q: f64 = 30.0;

/// Dynamic-EQ domains
pub const MIN_DYN_THRESHOLD_DB: f64 = -60.0;
pub const MAX_DYN_THRESHOLD_DB: f64 = 0.0;
pub const MIN_DYN_RATIO: f64 = 1.0;
pub const MAX_DYN_RATIO: f64 = 20.0;
pub const MIN_DYN_ATTACK_MS: f64 = 0.1;
pub const MAX_DYN_ATTACK_MS: f64 = 500.0;
pub const MIN_DYN_RELEASE_MS: f64 = 1.0;
pub const MAX_DYN_RELEASE_MS: f64 = 5000.0;

/// Filter shape for an EQ band
///
/// The numeric code is the value written to the engine at the shape
/// parameter offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum EqShape {
    #[default]
    Bell = 0,
    LowShelf = 1,
    HighShelf = 2,
    LowCut = 3,
    HighCut = 4,
    Notch = 5,
    BandPass = 6,
    TiltShelf = 7,
    AllPass = 8,
    Brickwall = 9,
}

impl From<u8> for EqShape {
    fn from(v: u8) -> Self {
        match v {
            0 => EqShape::Bell,
            1 => EqShape::LowShelf,
            2 => EqShape::HighShelf,
            3 => EqShape::LowCut,
            4 => EqShape::HighCut,
            5 => EqShape::Notch,
            6 => EqShape::BandPass,
            7 => EqShape::TiltShelf,
            8 => EqShape::AllPass,
            9 => EqShape::Brickwall,
            _ => EqShape::Bell,
        }
    }
}

impl EqShape {
    /// Numeric code for the engine parameter array
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Stereo placement for an EQ band
///
/// Visual tag only in this core; the response curve ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum StereoPlacement {
    #[default]
    Stereo = 0,
    Left = 1,
    Right = 2,
    Mid = 3,
    Side = 4,
}

impl From<u8> for StereoPlacement {
    fn from(v: u8) -> Self {
        match v {
            0 => StereoPlacement::Stereo,
            1 => StereoPlacement::Left,
            2 => StereoPlacement::Right,
            3 => StereoPlacement::Mid,
            4 => StereoPlacement::Side,
            _ => StereoPlacement::Stereo,
        }
    }
}

/// Filter slope for cut filters (display-only in this core)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterSlope {
    Db6,
    #[default]
    Db12,
    Db18,
    Db24,
    Db36,
    Db48,
    Db72,
    Db96,
}

impl FilterSlope {
    /// Roll-off in dB per octave, for labeling
    pub fn db_per_octave(&self) -> u32 {
        match self {
            FilterSlope::Db6 => 6,
            FilterSlope::Db12 => 12,
            FilterSlope::Db18 => 18,
            FilterSlope::Db24 => 24,
            FilterSlope::Db36 => 36,
            FilterSlope::Db48 => 48,
            FilterSlope::Db72 => 72,
            FilterSlope::Db96 => 96,
        }
    }
}

/// One parametric EQ band
///
/// `slot` is the engine slot assigned at creation and never renumbered; the
/// local list position may shift as bands are removed. The dynamic-EQ fields
/// are carried as data for the engine and are not evaluated by the response
/// curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EqBand {
    pub slot: u32,
    pub freq: f64,
    pub gain_db: f64,
    pub q: f64,
    pub shape: EqShape,
    pub placement: StereoPlacement,
    pub slope: FilterSlope,
    pub enabled: bool,
    pub dynamic_enabled: bool,
    pub dynamic_threshold_db: f64,
    pub dynamic_ratio: f64,
    pub dynamic_attack_ms: f64,
    pub dynamic_release_ms: f64,
}

impl Default for EqBand {
    fn default() -> Self {
        Self {
            slot: 0,
            freq: 1000.0,
            gain_db: 0.0,
            q: 1.0,
            shape: EqShape::Bell,
            placement: StereoPlacement::Stereo,
            slope: FilterSlope::Db12,
            enabled: true,
            dynamic_enabled: false,
            dynamic_threshold_db: -20.0,
            dynamic_ratio: 2.0,
            dynamic_attack_ms: 10.0,
            dynamic_release_ms: 100.0,
        }
    }
}

impl EqBand {
    /// Create a band at a frequency with the given shape and slot
    pub fn new(slot: u32, freq: f64, shape: EqShape) -> Self {
        Self {
            slot,
            freq: freq.clamp(MIN_FREQ_HZ, MAX_FREQ_HZ),
            shape,
            ..Default::default()
        }
    }

    /// Clamp every numeric field into its domain
    ///
    /// All registry writes pass through this; out-of-range edits are pinned,
    /// never rejected.
    pub fn clamped(mut self) -> Self {
        self.freq = self.freq.clamp(MIN_FREQ_HZ, MAX_FREQ_HZ);
        self.gain_db = self.gain_db.clamp(MIN_GAIN_DB, MAX_GAIN_DB);
        self.q = self.q.clamp(MIN_Q, MAX_Q);
        self.dynamic_threshold_db = self
            .dynamic_threshold_db
            .clamp(MIN_DYN_THRESHOLD_DB, MAX_DYN_THRESHOLD_DB);
        self.dynamic_ratio = self.dynamic_ratio.clamp(MIN_DYN_RATIO, MAX_DYN_RATIO);
        self.dynamic_attack_ms = self
            .dynamic_attack_ms
            .clamp(MIN_DYN_ATTACK_MS, MAX_DYN_ATTACK_MS);
        self.dynamic_release_ms = self
            .dynamic_release_ms
            .clamp(MIN_DYN_RELEASE_MS, MAX_DYN_RELEASE_MS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_codes() {
        assert_eq!(EqShape::Bell.code(), 0);
        assert_eq!(EqShape::Brickwall.code(), 9);

        for code in 0..=9u8 {
            assert_eq!(EqShape::from(code).code(), code);
        }

        // Unknown codes fall back to Bell
        assert_eq!(EqShape::from(200), EqShape::Bell);
    }

    #[test]
    fn test_placement_codes() {
        for code in 0..=4u8 {
            assert_eq!(StereoPlacement::from(code) as u8, code);
        }
        assert_eq!(StereoPlacement::from(99), StereoPlacement::Stereo);
    }

    #[test]
    fn test_clamped_pins_all_fields() {
        let band = EqBand {
            freq: 1.0,
            gain_db: 99.0,
            q: 500.0,
            dynamic_threshold_db: 10.0,
            dynamic_ratio: 0.0,
            dynamic_attack_ms: -5.0,
            dynamic_release_ms: 1e9,
            ..Default::default()
        }
        .clamped();

        assert_eq!(band.freq, MIN_FREQ_HZ);
        assert_eq!(band.gain_db, MAX_GAIN_DB);
        assert_eq!(band.q, MAX_Q);
        assert_eq!(band.dynamic_threshold_db, MAX_DYN_THRESHOLD_DB);
        assert_eq!(band.dynamic_ratio, MIN_DYN_RATIO);
        assert_eq!(band.dynamic_attack_ms, MIN_DYN_ATTACK_MS);
        assert_eq!(band.dynamic_release_ms, MAX_DYN_RELEASE_MS);
    }

    #[test]
    fn test_new_clamps_frequency() {
        let band = EqBand::new(3, 100_000.0, EqShape::HighShelf);
        assert_eq!(band.freq, MAX_FREQ_HZ);
        assert_eq!(band.slot, 3);
        assert_eq!(band.gain_db, 0.0);
        assert_eq!(band.q, 1.0);
        assert!(band.enabled);
    }

    #[test]
    fn test_serde_round_trip() {
        let band = EqBand::new(7, 440.0, EqShape::Notch);
        let json = serde_json::to_string(&band).unwrap();
        let back: EqBand = serde_json::from_str(&json).unwrap();
        assert_eq!(back.slot, 7);
        assert_eq!(back.freq, 440.0);
        assert_eq!(back.shape, EqShape::Notch);
    }
}
