//! Frame-driven tween scheduler.
//!
//! [`FrameScheduler`] stands in for the platform's "run before the next
//! repaint" primitive: the host calls [`tick`](FrameScheduler::tick) once per
//! frame with the frame timestamp and every live tween delivers one value to
//! its callback.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::easing::Easing;
use super::task::{Tween, TweenValue};
use super::TweenError;

type FrameCallback = Box<dyn FnMut(&TweenValue)>;
type CompleteCallback = Box<dyn FnOnce()>;

/// Optional knobs for [`FrameScheduler::animate_value`].
#[derive(Default)]
pub struct TweenOptions {
    pub easing: Option<Arc<dyn Easing>>,
    pub on_complete: Option<CompleteCallback>,
}

impl TweenOptions {
    pub fn easing(mut self, easing: Arc<dyn Easing>) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn on_complete(mut self, on_complete: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }
}

impl fmt::Debug for TweenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenOptions")
            .field("easing", &self.easing.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Cancels one scheduled tween.
///
/// Cancellation is observed at the start of the tween's next frame: that
/// frame does nothing and the tween is dropped. `on_complete` never runs
/// for a canceled tween.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    id: u64,
    canceled: Rc<Cell<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        if !self.canceled.replace(true) {
            debug!(id = self.id, "tween canceled");
        }
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.get()
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

struct Task {
    id: u64,
    tween: Tween,
    canceled: Rc<Cell<bool>>,
    on_frame: FrameCallback,
    on_complete: Option<CompleteCallback>,
}

impl Task {
    /// Run one frame. Returns `false` once the task should be dropped.
    fn frame(&mut self, timestamp: f64) -> bool {
        if self.canceled.get() {
            trace!(id = self.id, "dropping canceled tween");
            return false;
        }
        let Some(step) = self.tween.advance(timestamp) else {
            return false;
        };
        trace!(id = self.id, timestamp, value = ?step.value(), "tween frame");
        (self.on_frame)(step.value());
        if !step.is_done() {
            return true;
        }
        // on_frame may have canceled its own tween on the last frame.
        if !self.canceled.get() {
            if let Some(on_complete) = self.on_complete.take() {
                on_complete();
            }
            debug!(id = self.id, "tween complete");
        }
        false
    }
}

#[derive(Default)]
struct Shared {
    tasks: RefCell<Vec<Task>>,
    next_id: Cell<u64>,
}

/// Owns the running tweens and advances them once per frame.
///
/// The scheduler is a cheap shared handle: clones drive the same set of
/// tweens. Frame and completion callbacks may capture a clone and schedule
/// follow-up tweens from inside [`tick`](FrameScheduler::tick); those start
/// on the next frame.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    shared: Rc<Shared>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tween from `start` to `end` over `duration` milliseconds.
    ///
    /// `on_frame` receives the interpolated value on every frame, the last
    /// one being exactly `end`; `options.on_complete` then runs once.
    ///
    /// # Errors
    ///
    /// Fails before anything is scheduled when the shapes of `start` and
    /// `end` differ or `duration` is not a positive finite number.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use media_editor::tween::{FrameScheduler, TweenOptions, TweenValue};
    ///
    /// let seen = Rc::new(RefCell::new(Vec::new()));
    /// let sink = Rc::clone(&seen);
    /// let frames = FrameScheduler::new();
    /// frames
    ///     .animate_value(0.0, 10.0, 100.0, move |v| sink.borrow_mut().push(v.clone()), TweenOptions::default())
    ///     .unwrap();
    ///
    /// frames.tick(0.0);
    /// frames.tick(100.0);
    /// assert_eq!(*seen.borrow(), vec![TweenValue::Scalar(0.0), TweenValue::Scalar(10.0)]);
    /// assert!(frames.is_idle());
    /// ```
    pub fn animate_value(
        &self,
        start: impl Into<TweenValue>,
        end: impl Into<TweenValue>,
        duration: f64,
        on_frame: impl FnMut(&TweenValue) + 'static,
        options: TweenOptions,
    ) -> Result<CancelHandle, TweenError> {
        let mut tween = Tween::new(start, end, duration)?;
        if let Some(easing) = options.easing {
            tween = tween.with_easing(easing);
        }
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        let canceled = Rc::new(Cell::new(false));
        self.shared.tasks.borrow_mut().push(Task {
            id,
            tween,
            canceled: Rc::clone(&canceled),
            on_frame: Box::new(on_frame),
            on_complete: options.on_complete,
        });
        debug!(id, duration, "tween scheduled");
        Ok(CancelHandle { id, canceled })
    }

    /// Deliver one frame at `timestamp` to every scheduled tween. Returns
    /// how many tweens are still running afterwards, including any scheduled
    /// by callbacks during this frame.
    pub fn tick(&self, timestamp: f64) -> usize {
        // No borrow is held while callbacks run.
        let mut running = self.shared.tasks.take();
        running.retain_mut(|task| task.frame(timestamp));

        let mut tasks = self.shared.tasks.borrow_mut();
        let scheduled = std::mem::take(&mut *tasks);
        if !scheduled.is_empty() {
            trace!(count = scheduled.len(), "tweens scheduled during frame");
        }
        running.extend(scheduled);
        *tasks = running;
        tasks.len()
    }

    /// Number of tweens waiting for a frame, canceled ones included until
    /// their next frame drops them.
    pub fn pending(&self) -> usize {
        self.shared.tasks.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    /// Tick on the wall clock every `frame_interval` until no tween is left.
    /// Timestamps are milliseconds since the call. Returns the number of
    /// frames delivered.
    pub fn run_until_idle(&self, frame_interval: Duration) -> usize {
        let origin = Instant::now();
        let mut frames = 0;
        while !self.is_idle() {
            self.tick(origin.elapsed().as_secs_f64() * 1000.0);
            frames += 1;
            if !self.is_idle() {
                thread::sleep(frame_interval);
            }
        }
        frames
    }
}

impl fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("pending", &self.pending())
            .field("next_id", &self.shared.next_id.get())
            .finish()
    }
}
