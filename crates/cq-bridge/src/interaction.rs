//! Interaction controller
//!
//! Gesture state machine over the band registry: hover with a create
//! preview, tap to select or create, drag to move frequency/gain, wheel to
//! adjust Q. All pointer coordinates are viewport pixels; the coordinate
//! mapper translates both ways and edit results are clamped here before
//! they reach the registry.

use cq_core::{
    CqError, CqResult, EqShape, MAX_FREQ_HZ, MAX_GAIN_DB, MAX_Q, MIN_FREQ_HZ, MIN_GAIN_DB, MIN_Q,
};
use cq_viz::mapping::{freq_to_x, gain_to_y, x_to_freq, y_to_gain};

use crate::registry::{BandRegistry, BandUpdate};

/// Hit-test radius around a band handle, in pixels
pub const HIT_THRESHOLD_PX: f64 = 15.0;

/// Q change per wheel step
const WHEEL_Q_STEP: f64 = 0.2;

/// Q change per wheel step with the fine-control modifier
const WHEEL_Q_STEP_FINE: f64 = 0.02;

/// Ephemeral gesture state; never persisted
///
/// Selection lives in the registry. The preview marks where a tap would
/// create a band and with which shape.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub hover_band: Option<u32>,
    pub dragging: Option<u32>,
    pub preview_position: Option<(f64, f64)>,
    pub preview_shape: EqShape,
}

/// Editor surface: registry + viewport + gesture state
pub struct EqEditor {
    registry: BandRegistry,
    state: InteractionState,
    width: f64,
    height: f64,
}

impl EqEditor {
    pub fn new(registry: BandRegistry, width: f64, height: f64) -> CqResult<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(CqError::InvalidViewport(format!("{width}x{height}")));
        }
        Ok(Self {
            registry,
            state: InteractionState::default(),
            width,
            height,
        })
    }

    #[inline]
    pub fn registry(&self) -> &BandRegistry {
        &self.registry
    }

    #[inline]
    pub fn registry_mut(&mut self) -> &mut BandRegistry {
        &mut self.registry
    }

    #[inline]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Resize the editing surface; non-positive dimensions are ignored
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            log::warn!("ignoring viewport resize to {width}x{height}");
            return;
        }
        self.width = width;
        self.height = height;
    }

    pub fn set_preview_shape(&mut self, shape: EqShape) {
        self.state.preview_shape = shape;
    }

    /// First enabled band (in list order) within the hit radius
    pub fn hit_test(&self, x: f64, y: f64) -> Option<u32> {
        self.registry
            .bands()
            .iter()
            .filter(|b| b.enabled)
            .find(|b| {
                let bx = freq_to_x(b.freq, self.width);
                let by = gain_to_y(b.gain_db, self.height);
                ((x - bx).powi(2) + (y - by).powi(2)).sqrt() < HIT_THRESHOLD_PX
            })
            .map(|b| b.slot)
    }

    /// Pointer move with no button held: hover or create-preview
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        match self.hit_test(x, y) {
            Some(slot) => {
                self.state.hover_band = Some(slot);
                self.state.preview_position = None;
            }
            None => {
                self.state.hover_band = None;
                self.state.preview_position = Some((x, y));
            }
        }
    }

    /// Tap: select the hit band, or create one at the tapped frequency
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        match self.hit_test(x, y) {
            Some(slot) => self.registry.select(slot),
            None => {
                let freq = x_to_freq(x, self.width).clamp(MIN_FREQ_HZ, MAX_FREQ_HZ);
                // No-op at capacity or before the engine is ready
                self.registry.add_band(freq, self.state.preview_shape);
            }
        }
    }

    /// Drag begins only on a hit; the hit band becomes the selection
    pub fn drag_start(&mut self, x: f64, y: f64) {
        if let Some(slot) = self.hit_test(x, y) {
            self.registry.select(slot);
            self.state.dragging = Some(slot);
            log::trace!("drag start: slot {}", slot);
        }
    }

    /// Drag update: pointer position drives frequency and gain
    pub fn drag_update(&mut self, x: f64, y: f64) {
        let Some(slot) = self.state.dragging else {
            return;
        };
        let freq = x_to_freq(x, self.width).clamp(MIN_FREQ_HZ, MAX_FREQ_HZ);
        let gain_db = y_to_gain(y, self.height).clamp(MIN_GAIN_DB, MAX_GAIN_DB);
        self.registry.update_band(slot, BandUpdate::freq_gain(freq, gain_db));
    }

    pub fn drag_end(&mut self) {
        self.state.dragging = None;
    }

    /// Wheel: adjust Q on the selected band, else the hovered one
    ///
    /// Positive steps ("wheel away") increase Q. No target band, no-op.
    pub fn wheel(&mut self, steps: f64, fine: bool) {
        let Some(slot) = self.registry.selected().or(self.state.hover_band) else {
            return;
        };
        let Some(band) = self.registry.band(slot) else {
            return;
        };

        let step = if fine { WHEEL_Q_STEP_FINE } else { WHEEL_Q_STEP };
        let q = (band.q + steps * step).clamp(MIN_Q, MAX_Q);
        self.registry.update_band(slot, BandUpdate::q(q));
    }

    /// Clear all bands and gesture state
    pub fn reset_all(&mut self) {
        self.registry.reset_all();
        self.state = InteractionState {
            preview_shape: self.state.preview_shape,
            ..Default::default()
        };
    }
}
