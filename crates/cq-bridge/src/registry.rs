//! Band registry
//!
//! Owns the live band list and is the only writer to the external engine.
//! Edits clamp to domain rather than fail; every accepted mutation pushes
//! the affected parameters through the sink and raises the zero-argument
//! settings-changed notification. While the sink is not ready, all mutating
//! calls are no-ops.
//!
//! A band's engine slot is assigned at creation (the lowest free slot) and
//! never renumbered; removal soft-disables the slot in the engine because
//! the flat parameter protocol has no structural delete.

use cq_core::{
    band_writes, flat_index, EqBand, EqShape, ParamOffset, ParamSink, ParamWrite, MAX_BANDS,
};

/// Partial band edit; unset fields are left alone
#[derive(Debug, Clone, Default)]
pub struct BandUpdate {
    pub freq: Option<f64>,
    pub gain_db: Option<f64>,
    pub q: Option<f64>,
    pub shape: Option<EqShape>,
    pub placement: Option<cq_core::StereoPlacement>,
    pub slope: Option<cq_core::FilterSlope>,
    pub enabled: Option<bool>,
    pub dynamic_enabled: Option<bool>,
    pub dynamic_threshold_db: Option<f64>,
    pub dynamic_ratio: Option<f64>,
    pub dynamic_attack_ms: Option<f64>,
    pub dynamic_release_ms: Option<f64>,
}

impl BandUpdate {
    /// Frequency + gain edit, the drag gesture's write
    pub fn freq_gain(freq: f64, gain_db: f64) -> Self {
        Self {
            freq: Some(freq),
            gain_db: Some(gain_db),
            ..Default::default()
        }
    }

    /// Q-only edit, the wheel gesture's write
    pub fn q(q: f64) -> Self {
        Self {
            q: Some(q),
            ..Default::default()
        }
    }
}

/// Owner of the band list and the engine parameter writes
pub struct BandRegistry {
    track_id: u32,
    slot_id: u32,
    bands: Vec<EqBand>,
    selected: Option<u32>,
    sink: Box<dyn ParamSink>,
    on_settings_changed: Option<Box<dyn FnMut()>>,
}

impl BandRegistry {
    pub fn new(track_id: u32, slot_id: u32, sink: Box<dyn ParamSink>) -> Self {
        Self {
            track_id,
            slot_id,
            bands: Vec::new(),
            selected: None,
            sink,
            on_settings_changed: None,
        }
    }

    /// Host callback raised after every accepted mutation (dirty-flag etc.)
    pub fn set_on_settings_changed(&mut self, callback: Box<dyn FnMut()>) {
        self.on_settings_changed = Some(callback);
    }

    #[inline]
    pub fn bands(&self) -> &[EqBand] {
        &self.bands
    }

    #[inline]
    pub fn band(&self, slot: u32) -> Option<&EqBand> {
        self.bands.iter().find(|b| b.slot == slot)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    #[inline]
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Select a live band; unknown slots clear the selection
    pub fn select(&mut self, slot: u32) {
        self.selected = self.band(slot).map(|b| b.slot);
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.sink.is_ready()
    }

    /// Lowest engine slot not held by a live band
    ///
    /// Equals the live count while the list is dense, so slot assignment
    /// matches plain append ordering until bands are removed; a freed slot
    /// is the next one reused.
    fn free_slot(&self) -> Option<u32> {
        (0..MAX_BANDS as u32).find(|s| self.bands.iter().all(|b| b.slot != *s))
    }

    /// Create a band at a frequency; returns its engine slot
    ///
    /// Silent no-op at capacity or while the engine is not ready. The new
    /// band gets gain 0, Q 1, enabled, and becomes the selection; its
    /// initial freq/gain/Q/enabled/shape writes go to the engine.
    pub fn add_band(&mut self, freq: f64, shape: EqShape) -> Option<u32> {
        if !self.sink.is_ready() || self.bands.len() >= MAX_BANDS {
            return None;
        }

        let slot = self.free_slot()?;
        let band = EqBand::new(slot, freq, shape);

        for (offset, value) in [
            (ParamOffset::Freq, band.freq),
            (ParamOffset::Gain, band.gain_db),
            (ParamOffset::Q, band.q),
            (ParamOffset::Enabled, 1.0),
            (ParamOffset::Shape, band.shape.code() as f64),
        ] {
            self.push(slot, offset, value);
        }

        log::debug!("add band: slot {} at {:.1} Hz ({:?})", slot, band.freq, shape);
        self.bands.push(band);
        self.selected = Some(slot);
        self.notify();
        Some(slot)
    }

    /// Apply a partial edit to a live band
    ///
    /// Each supplied field is clamped to its domain, then the band's full
    /// parameter set (including dynamic-EQ fields) is re-pushed.
    pub fn update_band(&mut self, slot: u32, update: BandUpdate) {
        if !self.sink.is_ready() {
            return;
        }
        let Some(pos) = self.bands.iter().position(|b| b.slot == slot) else {
            return;
        };

        let mut band = self.bands[pos].clone();
        if let Some(freq) = update.freq {
            band.freq = freq;
        }
        if let Some(gain_db) = update.gain_db {
            band.gain_db = gain_db;
        }
        if let Some(q) = update.q {
            band.q = q;
        }
        if let Some(shape) = update.shape {
            band.shape = shape;
        }
        if let Some(placement) = update.placement {
            band.placement = placement;
        }
        if let Some(slope) = update.slope {
            band.slope = slope;
        }
        if let Some(enabled) = update.enabled {
            band.enabled = enabled;
        }
        if let Some(dynamic_enabled) = update.dynamic_enabled {
            band.dynamic_enabled = dynamic_enabled;
        }
        if let Some(v) = update.dynamic_threshold_db {
            band.dynamic_threshold_db = v;
        }
        if let Some(v) = update.dynamic_ratio {
            band.dynamic_ratio = v;
        }
        if let Some(v) = update.dynamic_attack_ms {
            band.dynamic_attack_ms = v;
        }
        if let Some(v) = update.dynamic_release_ms {
            band.dynamic_release_ms = v;
        }

        let band = band.clamped();
        for write in band_writes(self.track_id, self.slot_id, &band) {
            self.sink.push(write);
        }
        self.bands[pos] = band;
        self.notify();
    }

    /// Remove a band: soft-disable its engine slot, then drop it locally
    ///
    /// The engine keeps the slot (disabled); the local list compacts and the
    /// selection moves to the band preceding the removed one in list order.
    pub fn remove_band(&mut self, slot: u32) {
        if !self.sink.is_ready() {
            return;
        }
        let Some(pos) = self.bands.iter().position(|b| b.slot == slot) else {
            return;
        };

        self.push(slot, ParamOffset::Enabled, 0.0);
        self.bands.remove(pos);

        self.selected = if self.bands.is_empty() {
            None
        } else {
            Some(self.bands[pos.saturating_sub(1)].slot)
        };

        log::debug!("remove band: slot {} ({} live)", slot, self.bands.len());
        self.notify();
    }

    /// Disable and zero every possible engine slot, then clear locally
    ///
    /// Sweeps the full capacity regardless of how many bands are tracked,
    /// so stale engine state from earlier sessions cannot survive a reset.
    pub fn reset_all(&mut self) {
        if !self.sink.is_ready() {
            return;
        }

        for slot in 0..MAX_BANDS as u32 {
            self.push(slot, ParamOffset::Enabled, 0.0);
            self.push(slot, ParamOffset::Gain, 0.0);
        }

        self.bands.clear();
        self.selected = None;
        log::debug!("reset: all {} slots disabled", MAX_BANDS);
        self.notify();
    }

    fn push(&mut self, slot: u32, offset: ParamOffset, value: f64) {
        self.sink.push(ParamWrite {
            track_id: self.track_id,
            slot_id: self.slot_id,
            flat_index: flat_index(slot, offset),
            value,
        });
    }

    fn notify(&mut self) {
        if let Some(callback) = &mut self.on_settings_changed {
            callback();
        }
    }
}
