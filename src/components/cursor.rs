use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config::SCENE_FPS;
use crate::dom::EventListener;
use crate::error::AppError;
use crate::visual::frame::{FrameClock, FrameLoop, RafScheduler};
use crate::visual::math::damp;

/// How quickly the ring catches up with the dot, per second.
const FOLLOW_RATE: f32 = 12.0;
/// Closer than this to the pointer, the ring snaps onto it and stops.
const SETTLE_PX: f64 = 0.1;

fn transform(x: f64, y: f64) -> String {
    format!("translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%)", x, y)
}

fn follow(current: (f64, f64), target: (f64, f64), dt: f32) -> (f64, f64) {
    (
        damp(current.0 as f32, target.0 as f32, FOLLOW_RATE, dt) as f64,
        damp(current.1 as f32, target.1 as f32, FOLLOW_RATE, dt) as f64,
    )
}

/// Where the ring goes this frame, or `None` when it already rests on the
/// pointer and there is nothing to write.
fn next_position(current: Option<(f64, f64)>, goal: (f64, f64), dt: f32) -> Option<(f64, f64)> {
    // The ring appears where the pointer first shows up.
    let Some(current) = current else {
        return Some(goal);
    };
    if current == goal {
        return None;
    }
    let next = follow(current, goal, dt);
    if (next.0 - goal.0).abs() < SETTLE_PX && (next.1 - goal.1).abs() < SETTLE_PX {
        Some(goal)
    } else {
        Some(next)
    }
}

fn place(element: &HtmlElement, (x, y): (f64, f64)) {
    if let Err(err) = element.style().set_property("transform", &transform(x, y)) {
        warn!("Could not move cursor: {:?}", err);
    }
}

struct CursorTracker {
    _frame_loop: FrameLoop<RafScheduler>,
    _listener: EventListener,
}

fn track(dot: HtmlElement, follower: HtmlElement) -> Result<CursorTracker, AppError> {
    let window = window().ok_or(AppError::MissingElement("window"))?;
    let target = Rc::new(Cell::new(None::<(f64, f64)>));

    let listener = {
        let target = target.clone();
        EventListener::new(&window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let point = (event.client_x() as f64, event.client_y() as f64);
                target.set(Some(point));
                place(&dot, point);
            }
        })?
    };

    let mut current: Option<(f64, f64)> = None;
    let mut clock = FrameClock::new(SCENE_FPS);
    let frame_loop = FrameLoop::start(RafScheduler::new(window), move |now| {
        let Some((_, dt)) = clock.tick(now) else {
            return;
        };
        let Some(goal) = target.get() else {
            return;
        };
        if let Some(next) = next_position(current, goal, dt) {
            current = Some(next);
            place(&follower, next);
        }
    });

    Ok(CursorTracker {
        _frame_loop: frame_loop,
        _listener: listener,
    })
}

/// A dot that sits on the pointer and a ring that trails behind it.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let dot = use_node_ref();
    let follower = use_node_ref();

    {
        let dot = dot.clone();
        let follower = follower.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = match (dot.cast::<HtmlElement>(), follower.cast::<HtmlElement>()) {
                    (Some(dot), Some(follower)) => match track(dot, follower) {
                        Ok(tracker) => Some(tracker),
                        Err(err) => {
                            warn!("Custom cursor disabled: {}", err);
                            None
                        }
                    },
                    _ => None,
                };
                move || drop(tracker)
            },
            (),
        );
    }

    html! {
        <>
            <div ref={dot} class="cursor-dot"></div>
            <div ref={follower} class="cursor-follower"></div>
            <style>
                {r#"
                .cursor-dot,
                .cursor-follower {
                    position: fixed;
                    top: 0;
                    left: 0;
                    border-radius: 50%;
                    pointer-events: none;
                    z-index: 50;
                    mix-blend-mode: difference;
                    transform: translate3d(-100px, -100px, 0);
                }
                .cursor-dot {
                    width: 1rem;
                    height: 1rem;
                    background: var(--primary);
                }
                .cursor-follower {
                    width: 2rem;
                    height: 2rem;
                    border: 1px solid var(--primary);
                }
                @media (hover: none) {
                    .cursor-dot,
                    .cursor-follower {
                        display: none;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_centres_on_the_point() {
        assert_eq!(
            transform(12.0, 40.0),
            "translate3d(12.0px, 40.0px, 0) translate(-50%, -50%)"
        );
    }

    #[test]
    fn follower_closes_in_without_jumping() {
        let start = (0.0, 0.0);
        let goal = (100.0, 50.0);
        let step = follow(start, goal, 1.0 / 60.0);
        assert!(step.0 > 0.0 && step.0 < 100.0);
        assert!(step.1 > 0.0 && step.1 < 50.0);

        let mut position = start;
        for _ in 0..120 {
            position = follow(position, goal, 1.0 / 60.0);
        }
        assert!((position.0 - 100.0).abs() < 0.5);
        assert!((position.1 - 50.0).abs() < 0.5);
    }

    #[test]
    fn ring_starts_on_the_pointer() {
        assert_eq!(next_position(None, (10.0, 20.0), 0.0), Some((10.0, 20.0)));
    }

    #[test]
    fn settled_ring_writes_nothing() {
        assert_eq!(next_position(Some((10.0, 20.0)), (10.0, 20.0), 1.0 / 60.0), None);
    }

    #[test]
    fn ring_snaps_once_close_enough() {
        let goal = (100.0, 50.0);
        assert_eq!(next_position(Some((99.95, 50.02)), goal, 1.0 / 60.0), Some(goal));

        let mut position = Some((0.0, 0.0));
        let mut writes = 0;
        while let Some(next) = next_position(position, goal, 1.0 / 60.0) {
            position = Some(next);
            writes += 1;
            assert!(writes < 600, "ring never settled");
        }
        assert_eq!(position, Some(goal));
    }

    #[test]
    fn no_time_no_movement() {
        assert_eq!(follow((3.0, 4.0), (50.0, 50.0), 0.0), (3.0, 4.0));
    }
}
