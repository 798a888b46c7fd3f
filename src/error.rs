use std::rc::Rc;

use log::{error, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::window;
use yew::prelude::*;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("content failed to load: {0}")]
    Content(#[from] serde_json::Error),
    #[error("WebGL is not available for this surface")]
    ContextUnavailable,
    #[error("shader compilation failed: {0}")]
    Shader(String),
    #[error("shader program failed to link: {0}")]
    Link(String),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("element is not mounted: {0}")]
    MissingElement(&'static str),
}

impl AppError {
    /// Errors that only cost us decoration; the page keeps rendering.
    pub fn is_decorative(&self) -> bool {
        matches!(self, AppError::ContextUnavailable)
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Handed down through context so any descendant can hand a failure to the
/// nearest boundary.
#[derive(Clone, PartialEq)]
pub struct ErrorReporter {
    on_error: Callback<AppError>,
}

impl ErrorReporter {
    pub fn report(&self, err: AppError) {
        self.on_error.emit(err);
    }

    /// Decorative failures are logged, everything else goes to the boundary.
    pub fn report_or_warn(&self, err: AppError) {
        if err.is_decorative() {
            warn!("Skipping decoration: {}", err);
        } else {
            self.report(err);
        }
    }
}

#[hook]
pub fn use_error_reporter() -> ErrorReporter {
    use_context::<ErrorReporter>().unwrap_or_else(|| ErrorReporter {
        on_error: Callback::from(|err: AppError| {
            error!("Error reported outside of a boundary: {}", err);
        }),
    })
}

#[derive(Debug, Default, PartialEq)]
pub struct BoundaryState {
    failure: Option<String>,
}

impl BoundaryState {
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}

impl Reducible for BoundaryState {
    type Action = AppError;

    fn reduce(self: Rc<Self>, err: AppError) -> Rc<Self> {
        // First failure wins, later ones are only logged.
        error!("Uncaught error: {}", err);
        if self.failure.is_some() {
            return self;
        }
        Rc::new(Self {
            failure: Some(err.to_string()),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let state = use_reducer(BoundaryState::default);
    let reporter = {
        let dispatcher = state.dispatcher();
        use_memo(
            move |_| ErrorReporter {
                on_error: Callback::from(move |err: AppError| dispatcher.dispatch(err)),
            },
            (),
        )
    };

    if let Some(failure) = state.failure() {
        return html! { <RecoveryPanel detail={failure.to_string()} /> };
    }

    html! {
        <ContextProvider<ErrorReporter> context={(*reporter).clone()}>
            { for props.children.iter() }
        </ContextProvider<ErrorReporter>>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecoveryPanelProps {
    #[prop_or_default]
    pub detail: String,
}

#[function_component(RecoveryPanel)]
pub fn recovery_panel(props: &RecoveryPanelProps) -> Html {
    let reload = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            if let Err(err) = window.location().reload() {
                warn!("Reload failed: {:?}", err);
            }
        }
    });

    html! {
        <div class="recovery-panel">
            <div class="recovery-content">
                <h2>{"Something went wrong"}</h2>
                {
                    if cfg!(debug_assertions) && !props.detail.is_empty() {
                        html! { <pre class="recovery-detail">{&props.detail}</pre> }
                    } else {
                        html! {}
                    }
                }
                <button class="recovery-button" onclick={reload}>
                    <span class="recovery-icon">{"↻"}</span>
                    {"Reload page"}
                </button>
            </div>
            <style>
                {r#"
                .recovery-panel {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .recovery-content {
                    text-align: center;
                }
                .recovery-content h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .recovery-detail {
                    color: var(--muted-foreground);
                    font-size: 0.8rem;
                    margin-bottom: 1rem;
                    white-space: pre-wrap;
                }
                .recovery-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.6rem 1.2rem;
                    border-radius: 6px;
                    border: none;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}

const FATAL_PANEL: &str = r#"<div style="min-height:100vh;display:flex;align-items:center;justify-content:center;font-family:sans-serif">
<div style="text-align:center"><h2 style="font-size:1.5rem;margin-bottom:1rem">Something went wrong</h2>
<button onclick="window.location.reload()" style="padding:0.6rem 1.2rem;border-radius:6px;border:none;cursor:pointer">Reload page</button></div></div>"#;

/// A panic takes the whole wasm instance down with it, so the panel is
/// written straight into the document instead of through yew.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            body.set_inner_html(FATAL_PANEL);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_starts_healthy() {
        assert_eq!(BoundaryState::default().failure(), None);
    }

    #[test]
    fn reported_error_switches_to_recovery() {
        let state = Rc::new(BoundaryState::default());
        let state = state.reduce(AppError::Shader("bad token".into()));
        assert_eq!(state.failure(), Some("shader compilation failed: bad token"));
    }

    #[test]
    fn first_failure_is_kept() {
        let state = Rc::new(BoundaryState::default())
            .reduce(AppError::MissingElement("canvas"))
            .reduce(AppError::Link("varying mismatch".into()));
        assert_eq!(state.failure(), Some("element is not mounted: canvas"));
    }

    #[test]
    fn only_missing_context_is_decorative() {
        assert!(AppError::ContextUnavailable.is_decorative());
        assert!(!AppError::Shader(String::new()).is_decorative());
        assert!(!AppError::MissingElement("container").is_decorative());
    }

    #[test]
    fn content_errors_convert_from_serde() {
        let err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: AppError = err.into();
        assert!(err.to_string().starts_with("content failed to load"));
    }
}
