//! Flat parameter index protocol
//!
//! The external engine exposes one flat parameter array per track slot and
//! accepts only `(track_id, slot_id, flat_index, value)` writes. There is no
//! structural insert or remove, which is why band removal is a soft disable
//! at the band's slot rather than a compaction.

use serde::{Deserialize, Serialize};

use crate::band::EqBand;

/// Scalar parameters per band in the engine's flat array
pub const PARAMS_PER_BAND: u32 = 11;

/// Parameter offset within one band's stride
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum ParamOffset {
    Freq = 0,
    Gain = 1,
    Q = 2,
    Enabled = 3,
    Shape = 4,
    DynamicEnabled = 5,
    DynamicThreshold = 6,
    DynamicRatio = 7,
    DynamicAttack = 8,
    DynamicRelease = 9,
    Reserved = 10,
}

/// Flat index for one scalar parameter of one band
#[inline]
pub fn flat_index(slot: u32, offset: ParamOffset) -> u32 {
    slot * PARAMS_PER_BAND + offset as u32
}

/// One parameter write to the external engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamWrite {
    pub track_id: u32,
    pub slot_id: u32,
    pub flat_index: u32,
    pub value: f64,
}

/// Sink for engine parameter writes
///
/// Writes are fire-and-forget: no return value, no delivery guarantee, no
/// retry. `push` must be safely callable before the engine is connected
/// (implementations no-op). `is_ready` gates all mutating registry and
/// interaction calls.
pub trait ParamSink {
    fn is_ready(&self) -> bool;
    fn push(&mut self, write: ParamWrite);
}

/// Sink for a disconnected engine; never ready, drops every write
#[derive(Debug, Default)]
pub struct NullSink;

impl ParamSink for NullSink {
    fn is_ready(&self) -> bool {
        false
    }

    fn push(&mut self, _write: ParamWrite) {}
}

/// Full parameter set for one band, offsets 0..=9
///
/// Reserved (offset 10) is never written.
pub fn band_writes(track_id: u32, slot_id: u32, band: &EqBand) -> [ParamWrite; 10] {
    let write = |offset: ParamOffset, value: f64| ParamWrite {
        track_id,
        slot_id,
        flat_index: flat_index(band.slot, offset),
        value,
    };

    [
        write(ParamOffset::Freq, band.freq),
        write(ParamOffset::Gain, band.gain_db),
        write(ParamOffset::Q, band.q),
        write(ParamOffset::Enabled, if band.enabled { 1.0 } else { 0.0 }),
        write(ParamOffset::Shape, band.shape.code() as f64),
        write(
            ParamOffset::DynamicEnabled,
            if band.dynamic_enabled { 1.0 } else { 0.0 },
        ),
        write(ParamOffset::DynamicThreshold, band.dynamic_threshold_db),
        write(ParamOffset::DynamicRatio, band.dynamic_ratio),
        write(ParamOffset::DynamicAttack, band.dynamic_attack_ms),
        write(ParamOffset::DynamicRelease, band.dynamic_release_ms),
    ]
}
