use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Callback invoked with the frame timestamp in milliseconds.
pub type Tick = Rc<dyn Fn(f64)>;

/// Where frame callbacks come from. In the browser this is
/// `requestAnimationFrame`.
pub trait FrameScheduler: 'static {
    type Handle: Copy;

    /// Schedules `tick` for the next frame. `None` means no frame will come.
    fn request(&self, tick: Tick) -> Option<Self::Handle>;

    /// Withdraws a request that has not fired yet.
    fn cancel(&self, handle: Self::Handle);
}

struct LoopState<S: FrameScheduler> {
    scheduler: S,
    pending: Cell<Option<S::Handle>>,
    running: Cell<bool>,
    on_frame: RefCell<Box<dyn FnMut(f64)>>,
}

/// A self-rescheduling per-frame callback chain. Dropping the loop
/// withdraws the pending request, so nothing fires after teardown.
pub struct FrameLoop<S: FrameScheduler> {
    state: Rc<LoopState<S>>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn start(scheduler: S, on_frame: impl FnMut(f64) + 'static) -> Self {
        let state = Rc::new(LoopState {
            scheduler,
            pending: Cell::new(None),
            running: Cell::new(true),
            on_frame: RefCell::new(Box::new(on_frame)),
        });
        schedule(&state);
        Self { state }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        if let Some(handle) = self.state.pending.take() {
            self.state.scheduler.cancel(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<S: FrameScheduler>(state: &Rc<LoopState<S>>) {
    let weak: Weak<LoopState<S>> = Rc::downgrade(state);
    let tick: Tick = Rc::new(move |now| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        state.pending.set(None);
        if !state.running.get() {
            return;
        }
        (state.on_frame.borrow_mut())(now);
        if state.running.get() {
            schedule(&state);
        }
    });
    let handle = state.scheduler.request(tick);
    if handle.is_none() {
        state.running.set(false);
    }
    state.pending.set(handle);
}

/// Lets through at most `fps` frames per second. A skipped frame keeps its
/// remainder so the cadence does not drift.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameLimiter {
    interval: f64,
    last: Option<f64>,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        Self {
            interval: 1000.0 / fps.max(1) as f64,
            last: None,
        }
    }

    pub fn ready(&mut self, now: f64) -> bool {
        let Some(last) = self.last else {
            self.last = Some(now);
            return true;
        };
        let elapsed = now - last;
        if elapsed > self.interval {
            self.last = Some(now - elapsed % self.interval);
            true
        } else {
            false
        }
    }
}

/// Turns frame timestamps into `(elapsed, dt)` seconds for the frames the
/// limiter lets through. `elapsed` counts from the first of those frames and
/// `dt` from the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameClock {
    limiter: FrameLimiter,
    first: Option<f64>,
    previous: Option<f64>,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            limiter: FrameLimiter::new(fps),
            first: None,
            previous: None,
        }
    }

    pub fn tick(&mut self, now: f64) -> Option<(f32, f32)> {
        if !self.limiter.ready(now) {
            return None;
        }
        let first = *self.first.get_or_insert(now);
        let dt = self.previous.map(|p| (now - p) / 1000.0).unwrap_or(0.0);
        self.previous = Some(now);
        Some((((now - first) / 1000.0) as f32, dt as f32))
    }

    /// Forgets the previous frame, so the next one reports `dt = 0`.
    pub fn pause(&mut self) {
        self.previous = None;
    }
}

/// `requestAnimationFrame` on the given window. One JS closure is kept per
/// scheduler and forwards to whichever tick is currently pending.
pub struct RafScheduler {
    window: Window,
    slot: Rc<RefCell<Option<Tick>>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            slot: Rc::new(RefCell::new(None)),
            callback: RefCell::new(None),
        }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&self, tick: Tick) -> Option<i32> {
        *self.slot.borrow_mut() = Some(tick);
        let mut callback = self.callback.borrow_mut();
        let callback = callback.get_or_insert_with(|| {
            let slot = self.slot.clone();
            Closure::wrap(Box::new(move |now: f64| {
                let tick = slot.borrow_mut().take();
                if let Some(tick) = tick {
                    tick(now);
                }
            }) as Box<dyn FnMut(f64)>)
        });
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(err) => {
                error!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel(&self, handle: i32) {
        self.slot.borrow_mut().take();
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            error!("cancelAnimationFrame failed: {:?}", err);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Hands frames out only when the test fires them.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Rc<ManualInner>,
    }

    #[derive(Default)]
    struct ManualInner {
        next: Cell<u32>,
        queue: RefCell<Vec<(u32, Tick)>>,
        cancelled: Cell<u32>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.inner.queue.borrow().len()
        }

        pub fn cancelled(&self) -> u32 {
            self.inner.cancelled.get()
        }

        /// Fires everything queued before this call.
        pub fn fire(&self, now: f64) {
            let ticks: Vec<_> = self.inner.queue.borrow_mut().drain(..).collect();
            for (_, tick) in ticks {
                tick(now);
            }
        }
    }

    impl FrameScheduler for ManualScheduler {
        type Handle = u32;

        fn request(&self, tick: Tick) -> Option<u32> {
            let id = self.inner.next.get() + 1;
            self.inner.next.set(id);
            self.inner.queue.borrow_mut().push((id, tick));
            Some(id)
        }

        fn cancel(&self, handle: u32) {
            self.inner.queue.borrow_mut().retain(|(id, _)| *id != handle);
            self.inner.cancelled.set(self.inner.cancelled.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;

    fn counting_loop(scheduler: &ManualScheduler) -> (FrameLoop<ManualScheduler>, Rc<Cell<u32>>) {
        let frames = Rc::new(Cell::new(0));
        let counter = frames.clone();
        let frame_loop = FrameLoop::start(scheduler.clone(), move |_| counter.set(counter.get() + 1));
        (frame_loop, frames)
    }

    #[test]
    fn loop_reschedules_itself() {
        let scheduler = ManualScheduler::default();
        let (frame_loop, frames) = counting_loop(&scheduler);
        for i in 0..5 {
            assert_eq!(scheduler.pending(), 1);
            scheduler.fire(i as f64 * 16.0);
        }
        assert_eq!(frames.get(), 5);
        assert!(frame_loop.is_running());
    }

    #[test]
    fn mount_then_unmount_leaves_nothing_pending() {
        let scheduler = ManualScheduler::default();
        let (frame_loop, frames) = counting_loop(&scheduler);
        drop(frame_loop);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.cancelled(), 1);
        scheduler.fire(16.0);
        assert_eq!(frames.get(), 0);
    }

    #[test]
    fn no_frames_after_teardown_mid_run() {
        let scheduler = ManualScheduler::default();
        let (frame_loop, frames) = counting_loop(&scheduler);
        scheduler.fire(0.0);
        scheduler.fire(16.0);
        drop(frame_loop);
        scheduler.fire(32.0);
        scheduler.fire(48.0);
        assert_eq!(frames.get(), 2);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn stale_tick_is_ignored_after_drop() {
        // A tick that escaped cancellation must not call back into freed state.
        struct Leaky(Rc<RefCell<Vec<Tick>>>);
        impl FrameScheduler for Leaky {
            type Handle = ();
            fn request(&self, tick: Tick) -> Option<()> {
                self.0.borrow_mut().push(tick);
                Some(())
            }
            fn cancel(&self, _: ()) {}
        }

        let escaped = Rc::new(RefCell::new(Vec::new()));
        let frames = Rc::new(Cell::new(0));
        let counter = frames.clone();
        let frame_loop = FrameLoop::start(Leaky(escaped.clone()), move |_| counter.set(counter.get() + 1));
        drop(frame_loop);
        let ticks: Vec<_> = escaped.borrow_mut().drain(..).collect();
        for tick in ticks {
            tick(16.0);
        }
        assert_eq!(frames.get(), 0);
    }

    #[test]
    fn limiter_caps_rate_and_keeps_remainder() {
        let mut limiter = FrameLimiter::new(30);
        assert!(limiter.ready(0.0));
        assert!(!limiter.ready(16.0));
        assert!(!limiter.ready(33.0));
        assert!(limiter.ready(40.0));
        // 40 - (40 % 33.33) = 33.33, so the next slot opens after 66.67.
        assert!(!limiter.ready(66.0));
        assert!(limiter.ready(67.0));
    }

    #[test]
    fn clock_counts_only_frames_it_lets_through() {
        let mut clock = FrameClock::new(30);
        assert_eq!(clock.tick(1000.0), Some((0.0, 0.0)));
        assert_eq!(clock.tick(1016.0), None);
        let (elapsed, dt) = clock.tick(1040.0).unwrap();
        assert!((elapsed - 0.04).abs() < 1e-6);
        assert!((dt - 0.04).abs() < 1e-6);
        let (elapsed, dt) = clock.tick(1080.0).unwrap();
        assert!((elapsed - 0.08).abs() < 1e-6);
        assert!((dt - 0.04).abs() < 1e-6);
    }

    #[test]
    fn clock_resumes_with_zero_dt() {
        let mut clock = FrameClock::new(60);
        clock.tick(0.0);
        clock.tick(20.0);
        clock.pause();
        let (elapsed, dt) = clock.tick(5000.0).unwrap();
        assert!((elapsed - 5.0).abs() < 1e-6);
        assert_eq!(dt, 0.0);
    }

    #[test]
    fn limiter_survives_zero_fps() {
        let mut limiter = FrameLimiter::new(0);
        assert!(limiter.ready(0.0));
        assert!(limiter.ready(1001.0));
    }
}
