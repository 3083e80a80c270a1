mod common;

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use common::frame_recorder;
use media_editor::tween::{
    default_easing, CancelHandle, CubicBezier, Easing, FrameScheduler, Linear, Tween, TweenError, TweenOptions, TweenStep,
    TweenValue,
};

#[test]
fn first_and_last_frames_hit_the_endpoints() {
    let (frames, on_frame) = frame_recorder();
    let scheduler = FrameScheduler::new();
    scheduler
        .animate_value(3.0, 7.0, 250.0, on_frame, TweenOptions::default())
        .unwrap();

    let mut t = 16.0;
    while scheduler.tick(t) > 0 {
        t += 16.0;
    }

    let frames = frames.borrow();
    assert_eq!(frames.first(), Some(&TweenValue::Scalar(3.0)));
    assert_eq!(frames.last(), Some(&TweenValue::Scalar(7.0)));
    assert!(frames.windows(2).all(|w| w[0].as_scalar() <= w[1].as_scalar()));
}

#[test]
fn easings_fix_both_ends() {
    let easings: Vec<Arc<dyn Easing>> = vec![
        default_easing(),
        Arc::new(CubicBezier::simple()),
        Arc::new(Linear),
        Arc::new(CubicBezier::new(0.68, -0.55, 0.27, 1.55).unwrap()),
    ];
    for easing in easings {
        assert_eq!(easing.ease(0.0), 0.0);
        assert_eq!(easing.ease(1.0), 1.0);
    }
}

#[test]
fn vector_tween_moves_components_independently() {
    let (frames, on_frame) = frame_recorder();
    let scheduler = FrameScheduler::new();
    scheduler
        .animate_value(
            [0.0, 100.0, 50.0],
            [10.0, 0.0, 50.0],
            100.0,
            on_frame,
            TweenOptions::default().easing(Arc::new(Linear)),
        )
        .unwrap();
    for t in [0.0, 25.0, 100.0] {
        scheduler.tick(t);
    }
    assert_eq!(
        *frames.borrow(),
        vec![
            TweenValue::Vector(vec![0.0, 100.0, 50.0]),
            TweenValue::Vector(vec![2.5, 75.0, 50.0]),
            TweenValue::Vector(vec![10.0, 0.0, 50.0]),
        ]
    );
}

#[test]
fn cancel_from_inside_a_frame() {
    let completed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&completed);
    let handle_slot = Rc::new(Cell::new(None::<CancelHandle>));
    let slot = Rc::clone(&handle_slot);
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let scheduler = FrameScheduler::new();
    let handle = scheduler
        .animate_value(
            0.0,
            1.0,
            100.0,
            move |_: &TweenValue| {
                counter.set(counter.get() + 1);
                if let Some(handle) = slot.take() {
                    handle.cancel();
                }
            },
            TweenOptions::default().on_complete(move || flag.set(true)),
        )
        .unwrap();
    handle_slot.set(Some(handle.clone()));

    scheduler.tick(0.0);
    scheduler.tick(50.0);
    scheduler.tick(100.0);

    assert_eq!(calls.get(), 1);
    assert!(handle.is_canceled());
    assert!(!completed.get());
    assert!(scheduler.is_idle());
}

#[test]
fn manual_tween_polling() {
    let mut tween = Tween::new(0.0, 1.0, 40.0).unwrap().with_easing(Arc::new(Linear));
    assert_eq!(tween.advance(500.0), Some(TweenStep::Continue(TweenValue::Scalar(0.0))));
    assert_eq!(tween.advance(510.0), Some(TweenStep::Continue(TweenValue::Scalar(0.25))));
    assert_eq!(tween.advance(600.0), Some(TweenStep::Done(TweenValue::Scalar(1.0))));
    assert_eq!(tween.advance(610.0), None);
    assert!(tween.is_finished());
}

#[test]
fn invalid_tweens_are_rejected_up_front() {
    let (_, on_frame) = frame_recorder();
    let scheduler = FrameScheduler::new();
    assert_eq!(
        scheduler
            .animate_value(0.0, 1.0, f64::NAN, on_frame, TweenOptions::default())
            .unwrap_err()
            .to_string(),
        "duration must be a positive finite number of milliseconds, got NaN"
    );
    assert!(matches!(
        Tween::new([1.0, 2.0], [1.0, 2.0, 3.0], 10.0),
        Err(TweenError::ShapeMismatch { .. })
    ));
    assert!(scheduler.is_idle());
}
