#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use media_editor::tween::TweenValue;
use serde_json::{json, Value};

/// An editor state with three identified layers and a crop box.
pub fn editor_state() -> Value {
    json!({
        "crop": {"x": 0, "y": 0, "width": 1280, "height": 720, "angle": 0},
        "layers": [
            {"id": 1, "kind": "text", "text": "hello", "scale": 1.0, "rotation": 0},
            {"id": 2, "kind": "sticker", "scale": 1.0, "rotation": 0},
            {"id": 3, "kind": "drawing", "points": [[0, 0], [10, 10]]}
        ],
        "enhance": {"brightness": 0.0, "contrast": 0.0}
    })
}

pub fn layer_ids(state: &Value) -> Vec<i64> {
    state["layers"]
        .as_array()
        .map(|layers| layers.iter().filter_map(|l| l["id"].as_i64()).collect())
        .unwrap_or_default()
}

pub type Frames = Rc<RefCell<Vec<TweenValue>>>;

/// A frame callback that records every value it is handed.
pub fn frame_recorder() -> (Frames, impl FnMut(&TweenValue) + 'static) {
    let frames: Frames = Rc::default();
    let sink = Rc::clone(&frames);
    (frames, move |v: &TweenValue| sink.borrow_mut().push(v.clone()))
}
