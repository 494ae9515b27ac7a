//! End-to-end editor flow: gestures through the registry to the engine
//! writes, plus the render outputs a host would pull each frame.

use std::sync::Arc;

use parking_lot::Mutex;

use cq_bridge::{AnalyzerFeed, BandRegistry, EqEditor, SpectrumSource};
use cq_core::{flat_index, ParamOffset, ParamSink, ParamWrite};
use cq_viz::composite_curve;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct RecordingSink {
    writes: Arc<Mutex<Vec<ParamWrite>>>,
}

impl ParamSink for RecordingSink {
    fn is_ready(&self) -> bool {
        true
    }

    fn push(&mut self, write: ParamWrite) {
        self.writes.lock().push(write);
    }
}

fn editor() -> (EqEditor, Arc<Mutex<Vec<ParamWrite>>>) {
    let writes = Arc::new(Mutex::new(Vec::new()));
    let sink = RecordingSink {
        writes: writes.clone(),
    };
    let registry = BandRegistry::new(2, 0, Box::new(sink));
    (EqEditor::new(registry, 800.0, 400.0).unwrap(), writes)
}

#[test]
fn test_create_drag_wheel_remove_flow() {
    init_logging();
    let (mut ed, writes) = editor();

    // Tap empty space: creates and selects a band
    ed.pointer_down(400.0, 150.0);
    assert_eq!(ed.registry().len(), 1);
    let slot = ed.registry().selected().unwrap();

    // Drag it: freq/gain follow the pointer
    ed.drag_start(400.0, 200.0);
    ed.drag_update(500.0, 120.0);
    ed.drag_end();
    let band = ed.registry().band(slot).unwrap();
    assert!(band.freq > 1000.0);
    assert!(band.gain_db > 0.0);

    // Wheel on the selection narrows or widens Q
    ed.wheel(2.0, false);
    assert!((ed.registry().band(slot).unwrap().q - 1.4).abs() < 1e-9);

    // Remove: one disable write to the band's slot, addressed to our track
    writes.lock().clear();
    ed.registry_mut().remove_band(slot);
    let recorded = writes.lock();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].track_id, 2);
    assert_eq!(recorded[0].flat_index, flat_index(slot, ParamOffset::Enabled));
    assert_eq!(recorded[0].value, 0.0);
    assert!(ed.registry().is_empty());
}

#[test]
fn test_settings_changed_marks_dirty_across_gestures() {
    init_logging();
    let (mut ed, _) = editor();

    let dirty = Arc::new(Mutex::new(0u32));
    let counter = dirty.clone();
    ed.registry_mut()
        .set_on_settings_changed(Box::new(move || *counter.lock() += 1));

    ed.pointer_down(300.0, 100.0); // create (gain 0, handle at mid-height)
    ed.drag_start(300.0, 200.0);
    ed.drag_update(320.0, 110.0); // update
    ed.drag_end();
    ed.wheel(1.0, false); // update
    ed.pointer_move(700.0, 350.0); // hover/preview only, no mutation

    assert_eq!(*dirty.lock(), 3);
}

#[test]
fn test_composite_curve_follows_registry() {
    init_logging();
    let (mut ed, _) = editor();

    let flat = composite_curve(ed.registry().bands(), 800, 400.0);
    assert!(flat.iter().all(|&y| (y - 200.0).abs() < 1e-3));

    // A boosted bell lifts the curve (smaller y) around its column
    ed.pointer_down(400.0, 150.0);
    let curve = composite_curve(ed.registry().bands(), 800, 400.0);
    let slot = ed.registry().selected().unwrap();
    ed.drag_start(400.0, 200.0);
    ed.drag_update(400.0, 100.0); // +15 dB
    ed.drag_end();
    let boosted = composite_curve(ed.registry().bands(), 800, 400.0);

    assert!(boosted[400] < curve[400]);
    assert!(ed.registry().band(slot).is_some());
}

struct DecayingSource {
    level: f32,
}

impl SpectrumSource for DecayingSource {
    fn poll(&mut self) -> Vec<f32> {
        self.level *= 0.5;
        vec![self.level; 32]
    }
}

#[test]
fn test_analyzer_feed_publishes_for_renderer() {
    init_logging();
    let mut feed = AnalyzerFeed::new(Box::new(DecayingSource { level: 1.0 }), 800.0, 200.0);
    let output = feed.output();

    feed.start();
    feed.tick();

    let first = output.read().clone();
    assert_eq!(first.frame.len(), 32);
    assert!(!first.path.is_empty());

    feed.tick();
    let second = output.read().clone();
    assert_ne!(first.frame, second.frame);

    feed.stop();
    feed.tick();
    assert_eq!(output.read().frame, second.frame);
}
