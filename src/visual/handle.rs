use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_console::Timer;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{window, Event, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::dom::{EventListener, ViewportObserver};
use crate::error::{use_error_reporter, AppError};
use crate::hooks::use_in_viewport;

use super::frame::{FrameClock, FrameLoop, FrameScheduler, RafScheduler};
use super::gl::Surface;
use super::math::to_ndc;
use super::Scene;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Built as soon as the component mounts.
    OnMount,
    /// Built the first time the container scrolls into view.
    WhenVisible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    None,
    /// Pointer moves over the container only.
    Container,
    /// Pointer moves anywhere in the window, mapped onto the container.
    Window,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationOptions {
    pub fps: u32,
    pub activation: Activation,
    pub pointer: PointerSource,
    /// Skip frames while the container is scrolled out of view.
    pub pause_off_screen: bool,
    pub enabled: bool,
}

/// Everything one mounted scene holds on to. Dropping it is the teardown
/// path: the pending frame is withdrawn first, then the observer and the
/// listeners go, then the scene releases its GPU objects.
pub struct AnimationHandle<F: FrameScheduler = RafScheduler> {
    _frame_loop: FrameLoop<F>,
    _observer: Option<ViewportObserver>,
    _listeners: Vec<EventListener>,
    scene: Rc<RefCell<dyn Scene>>,
    on_screen: Rc<Cell<bool>>,
    label: &'static str,
}

impl<F: FrameScheduler> AnimationHandle<F> {
    /// Renders `scene` on frames from `scheduler`, capped at `fps`, for as
    /// long as the handle lives. Frames are skipped while off-screen.
    pub fn drive(label: &'static str, scene: Rc<RefCell<dyn Scene>>, scheduler: F, fps: u32) -> Self {
        let on_screen = Rc::new(Cell::new(true));
        let frame_loop = {
            let scene = scene.clone();
            let on_screen = on_screen.clone();
            let mut clock = FrameClock::new(fps);
            FrameLoop::start(scheduler, move |now| {
                if !on_screen.get() {
                    clock.pause();
                    return;
                }
                if let Some((elapsed, dt)) = clock.tick(now) {
                    scene.borrow_mut().render(elapsed, dt);
                }
            })
        };

        Self {
            _frame_loop: frame_loop,
            _observer: None,
            _listeners: Vec::new(),
            scene,
            on_screen,
            label,
        }
    }

    pub fn scene(&self) -> Rc<RefCell<dyn Scene>> {
        self.scene.clone()
    }

    /// Whether the container is on screen. Rendering stops while false.
    pub fn on_screen(&self) -> Rc<Cell<bool>> {
        self.on_screen.clone()
    }
}

impl AnimationHandle {
    pub fn mount<S, B>(
        label: &'static str,
        canvas: HtmlCanvasElement,
        container: HtmlElement,
        options: AnimationOptions,
        build: B,
    ) -> Result<Self, AppError>
    where
        S: Scene + 'static,
        B: FnOnce(Surface) -> Result<S, AppError>,
    {
        let _timer = Timer::new(label);
        let window = window().ok_or(AppError::MissingElement("window"))?;

        let surface = Surface::acquire(canvas)?;
        let scene: Rc<RefCell<dyn Scene>> = Rc::new(RefCell::new(build(surface)?));
        scene.borrow_mut().resize(
            container.client_width() as f64,
            container.client_height() as f64,
        );

        let mut handle = Self::drive(label, scene, RafScheduler::new(window.clone()), options.fps);

        {
            let scene = handle.scene();
            let container = container.clone();
            handle._listeners.push(EventListener::new(&window, "resize", move |_| {
                scene.borrow_mut().resize(
                    container.client_width() as f64,
                    container.client_height() as f64,
                );
            })?);
        }

        let pointer_target: Option<EventTarget> = match options.pointer {
            PointerSource::None => None,
            PointerSource::Container => Some(container.clone().into()),
            PointerSource::Window => Some(window.clone().into()),
        };
        if let Some(target) = pointer_target {
            let scene = handle.scene();
            let container = container.clone();
            handle._listeners.push(EventListener::new(&target, "mousemove", move |event: Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    let rect = container.get_bounding_client_rect();
                    let (x, y) = to_ndc(
                        event.client_x() as f64,
                        event.client_y() as f64,
                        rect.left(),
                        rect.top(),
                        rect.width(),
                        rect.height(),
                    );
                    scene.borrow_mut().point_at(x, y);
                }
            })?);
        }

        if options.pause_off_screen {
            let on_screen = handle.on_screen();
            match ViewportObserver::watch(&container, 0.0, move |seen, _| on_screen.set(seen)) {
                Ok(observer) => handle._observer = Some(observer),
                Err(err) => warn!("{}: rendering even when off-screen: {}", label, err),
            }
        }

        debug!("{}: mounted", label);
        Ok(handle)
    }
}

impl<F: FrameScheduler> Drop for AnimationHandle<F> {
    fn drop(&mut self) {
        debug!("{}: released", self.label);
    }
}

/// Runs `build`'s scene on `canvas` for as long as the calling component is
/// mounted (and, for [`Activation::WhenVisible`], once `container` has been
/// seen). Failures other than a missing WebGL context go to the error
/// boundary.
#[hook]
pub fn use_animation<S: Scene + 'static, B: FnOnce(Surface) -> Result<S, AppError> + 'static>(
    label: &'static str,
    canvas: NodeRef,
    container: NodeRef,
    options: AnimationOptions,
    build: B,
) {
    let gated = options.enabled && options.activation == Activation::WhenVisible;
    let visible = use_in_viewport(container.clone(), gated);
    let reporter = use_error_reporter();

    let active = options.enabled
        && match options.activation {
            Activation::OnMount => true,
            Activation::WhenVisible => visible,
        };

    use_effect_with_deps(
        move |active| {
            let handle = if *active {
                let mounted = canvas
                    .cast::<HtmlCanvasElement>()
                    .ok_or(AppError::MissingElement("canvas"))
                    .and_then(|canvas| {
                        let container = container
                            .cast::<HtmlElement>()
                            .ok_or(AppError::MissingElement("container"))?;
                        AnimationHandle::<RafScheduler>::mount(label, canvas, container, options, build)
                    });
                match mounted {
                    Ok(handle) => Some(handle),
                    Err(err) => {
                        reporter.report_or_warn(err);
                        None
                    }
                }
            } else {
                None
            };
            move || drop(handle)
        },
        active,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::frame::testing::ManualScheduler;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorded {
        resizes: Vec<(f64, f64)>,
        frames: Vec<(f32, f32)>,
    }

    struct RecordingScene(Rc<RefCell<Recorded>>);

    impl Scene for RecordingScene {
        fn resize(&mut self, width: f64, height: f64) {
            self.0.borrow_mut().resizes.push((width, height));
        }

        fn render(&mut self, elapsed: f32, dt: f32) {
            self.0.borrow_mut().frames.push((elapsed, dt));
        }
    }

    fn driven(fps: u32) -> (AnimationHandle<ManualScheduler>, ManualScheduler, Rc<RefCell<Recorded>>) {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let scene: Rc<RefCell<dyn Scene>> = Rc::new(RefCell::new(RecordingScene(recorded.clone())));
        let scheduler = ManualScheduler::default();
        let handle = AnimationHandle::drive("test", scene, scheduler.clone(), fps);
        (handle, scheduler, recorded)
    }

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6
    }

    #[test]
    fn resize_reaches_the_scene_without_a_second_loop() {
        let (handle, scheduler, recorded) = driven(60);
        assert_eq!(scheduler.pending(), 1);

        handle.scene().borrow_mut().resize(800.0, 600.0);
        assert_eq!(recorded.borrow().resizes, vec![(800.0, 600.0)]);
        assert_eq!(scheduler.pending(), 1);

        scheduler.fire(0.0);
        assert_eq!(recorded.borrow().frames.len(), 1);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn dropping_the_handle_withdraws_the_frame() {
        let (handle, scheduler, recorded) = driven(60);
        drop(handle);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.cancelled(), 1);
        scheduler.fire(16.0);
        assert!(recorded.borrow().frames.is_empty());
    }

    #[test]
    fn elapsed_and_dt_follow_rendered_frames() {
        let (_handle, scheduler, recorded) = driven(30);
        for now in [1000.0, 1016.0, 1040.0] {
            scheduler.fire(now);
        }
        let frames = recorded.borrow().frames.clone();
        assert_eq!(frames.len(), 2);
        assert!(close(frames[0], (0.0, 0.0)));
        assert!(close(frames[1], (0.04, 0.04)));
    }

    #[test]
    fn off_screen_frames_are_skipped_but_the_loop_stays() {
        let (handle, scheduler, recorded) = driven(60);
        scheduler.fire(0.0);

        handle.on_screen().set(false);
        scheduler.fire(20.0);
        scheduler.fire(40.0);
        assert_eq!(recorded.borrow().frames.len(), 1);
        assert_eq!(scheduler.pending(), 1);

        handle.on_screen().set(true);
        scheduler.fire(1000.0);
        let frames = recorded.borrow().frames.clone();
        assert_eq!(frames.len(), 2);
        assert!(close(frames[1], (1.0, 0.0)));
    }
}
