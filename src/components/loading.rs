use yew::prelude::*;

use crate::config::LOADER_FPS;
use crate::visual::ring::LoadingRing;
use crate::visual::{use_animation, Activation, AnimationOptions, PointerSource};

#[derive(Properties, PartialEq)]
pub struct LoadingAnimationProps {
    pub is_loading: bool,
}

/// Full-screen overlay with the spinning ring. Renders nothing once loading
/// is over, and the ring is released along with it.
#[function_component(LoadingAnimation)]
pub fn loading_animation(props: &LoadingAnimationProps) -> Html {
    let canvas = use_node_ref();
    let container = use_node_ref();

    use_animation(
        "LoadingAnimation:init",
        canvas.clone(),
        container.clone(),
        AnimationOptions {
            fps: LOADER_FPS,
            activation: Activation::OnMount,
            pointer: PointerSource::None,
            pause_off_screen: false,
            enabled: props.is_loading,
        },
        LoadingRing::new,
    );

    if !props.is_loading {
        return html! {};
    }

    html! {
        <div class="loading-overlay">
            <div ref={container} class="loading-ring">
                <canvas ref={canvas}></canvas>
            </div>
            <style>
                {r#"
                .loading-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: color-mix(in srgb, var(--background) 80%, transparent);
                    backdrop-filter: blur(4px);
                }
                .loading-ring,
                .loading-ring canvas {
                    width: 200px;
                    height: 200px;
                }
                "#}
            </style>
        </div>
    }
}

/// Shown while a routed page is suspended.
#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    html! {
        <div class="page-loader">
            <div class="page-spinner"></div>
            <style>
                {r#"
                .page-loader {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .page-spinner {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 3px solid var(--muted);
                    border-top-color: var(--primary);
                    animation: spin 0.8s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}
