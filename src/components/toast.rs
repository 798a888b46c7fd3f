use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::prelude::*;

use crate::config::{TOAST_DISMISS_MS, TOAST_LIMIT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

pub enum ToastAction {
    Push {
        title: String,
        description: String,
        kind: ToastKind,
    },
    Dismiss(u32),
}

/// Visible toasts, newest first.
#[derive(Debug, Default, PartialEq)]
pub struct ToastStack {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        match action {
            ToastAction::Push {
                title,
                description,
                kind,
            } => {
                let mut toasts = Vec::with_capacity(TOAST_LIMIT);
                toasts.push(Toast {
                    id: self.next_id,
                    title,
                    description,
                    kind,
                });
                toasts.extend(self.toasts.iter().take(TOAST_LIMIT.saturating_sub(1)).cloned());
                Rc::new(Self {
                    next_id: self.next_id.wrapping_add(1),
                    toasts,
                })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                Rc::new(Self {
                    next_id: self.next_id,
                    toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
                })
            }
        }
    }
}

/// Raises toasts from anywhere under a [`ToastProvider`].
#[derive(Clone, PartialEq)]
pub struct Toaster {
    dispatch: Callback<ToastAction>,
}

impl Toaster {
    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastKind::Success);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastKind::Error);
    }

    fn push(&self, title: String, description: String, kind: ToastKind) {
        debug!("Toast ({:?}): {}", kind, title);
        self.dispatch.emit(ToastAction::Push {
            title,
            description,
            kind,
        });
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| Toaster {
        dispatch: Callback::from(|action: ToastAction| {
            if let ToastAction::Push { title, .. } = action {
                info!("Toast without a provider: {}", title);
            }
        }),
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_reducer(ToastStack::default);
    let toaster = {
        let dispatcher = stack.dispatcher();
        use_memo(
            move |_| Toaster {
                dispatch: Callback::from(move |action: ToastAction| dispatcher.dispatch(action)),
            },
            (),
        )
    };
    let on_dismiss = {
        let dispatcher = stack.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            <ol class="toast-viewport">
                {
                    stack.toasts().iter().map(|toast| html! {
                        <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                    }).collect::<Html>()
                }
            </ol>
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    bottom: 0;
                    right: 0;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 1rem;
                    margin: 0;
                    list-style: none;
                    max-width: 420px;
                    width: 100%;
                }
                .toast {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1rem 1.25rem;
                    border-radius: 8px;
                    border: 1px solid var(--border);
                    background: var(--card);
                    color: var(--foreground);
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.25);
                    animation: toastIn 0.3s ease-out;
                }
                .toast.error {
                    background: var(--destructive);
                    color: var(--destructive-foreground);
                    border-color: transparent;
                }
                .toast-title {
                    font-weight: 600;
                    font-size: 0.9rem;
                }
                .toast-description {
                    font-size: 0.85rem;
                    opacity: 0.9;
                    margin-top: 0.25rem;
                }
                .toast-close {
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    opacity: 0.6;
                }
                .toast-close:hover {
                    opacity: 1;
                }
                @keyframes toastIn {
                    from { transform: translateX(100%); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                // Dropping the timeout on unmount cancels it.
                let timeout = Timeout::new(TOAST_DISMISS_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let toast = &props.toast;
    html! {
        <li class={classes!("toast", (toast.kind == ToastKind::Error).then(|| "error"))} role="status">
            <div>
                <div class="toast-title">{&toast.title}</div>
                if !toast.description.is_empty() {
                    <div class="toast-description">{&toast.description}</div>
                }
            </div>
            <button class="toast-close" aria-label="Close" onclick={close}>{"✕"}</button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn push(stack: Rc<ToastStack>, title: &str) -> Rc<ToastStack> {
        stack.reduce(ToastAction::Push {
            title: title.into(),
            description: String::new(),
            kind: ToastKind::Success,
        })
    }

    fn titles(stack: &ToastStack) -> Vec<&str> {
        stack.toasts().iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn newest_toast_comes_first() {
        let stack = push(push(Rc::new(ToastStack::default()), "first"), "second");
        assert_eq!(titles(&stack), vec!["second", "first"]);
    }

    #[test]
    fn oldest_toast_falls_off_past_the_limit() {
        let mut stack = Rc::new(ToastStack::default());
        for title in ["a", "b", "c", "d"] {
            stack = push(stack, title);
        }
        assert_eq!(titles(&stack), vec!["d", "c", "b"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let stack = push(push(Rc::new(ToastStack::default()), "first"), "second");
        let first_id = stack.toasts()[1].id;
        let stack = stack.reduce(ToastAction::Dismiss(first_id));
        assert_eq!(titles(&stack), vec!["second"]);
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let stack = push(Rc::new(ToastStack::default()), "only");
        let same = stack.clone().reduce(ToastAction::Dismiss(99));
        assert!(Rc::ptr_eq(&stack, &same));
    }

    #[test]
    fn ids_are_never_reused() {
        let stack = push(Rc::new(ToastStack::default()), "a");
        let id = stack.toasts()[0].id;
        let stack = push(stack.reduce(ToastAction::Dismiss(id)), "b");
        assert_ne!(stack.toasts()[0].id, id);
    }
}
