use gloo_console::Timer;
use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::{scroll_to_top, ViewportObserver};
use crate::error::AppError;

/// Share of the element that has to be on screen before it counts as seen.
const VISIBLE_THRESHOLD: f64 = 0.1;

fn observe_once(element: &Element, on_enter: UseStateSetter<bool>) -> Result<ViewportObserver, AppError> {
    ViewportObserver::watch(element, VISIBLE_THRESHOLD, move |on_screen, observer| {
        if on_screen {
            on_enter.set(true);
            observer.disconnect();
        }
    })
}

/// Flips to `true` the first time `node` scrolls into view and stays there.
/// Returns `false` without observing anything while `enabled` is off.
#[hook]
pub fn use_in_viewport(node: NodeRef, enabled: bool) -> bool {
    let visible = use_state_eq(|| false);
    {
        let setter = visible.setter();
        use_effect_with_deps(
            move |(node, enabled)| {
                let observer = if *enabled {
                    node.cast::<Element>().and_then(|element| {
                        match observe_once(&element, setter.clone()) {
                            Ok(observer) => Some(observer),
                            Err(err) => {
                                // No observer support, just show everything.
                                warn!("Viewport observer unavailable: {}", err);
                                setter.set(true);
                                None
                            }
                        }
                    })
                } else {
                    None
                };
                move || drop(observer)
            },
            (node, enabled),
        );
    }
    *visible
}

/// Scrolls to the top on mount and logs how long the page took to mount
/// under `label` in the console timeline.
#[hook]
pub fn use_page_mount(label: &'static str) {
    let timer = use_mut_ref(|| Some(Timer::new(label)));
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            timer.borrow_mut().take();
            || ()
        },
        (),
    );
}
