use yew::prelude::*;

use crate::config::{OWNER_NAME, OWNER_ROLE, RESUME_URL, SCENE_FPS};
use crate::content::SectionId;
use crate::dom::scroll_to_section;
use crate::visual::globe::HeroGlobe;
use crate::visual::{use_animation, Activation, AnimationOptions, PointerSource};

#[function_component(Hero)]
pub fn hero() -> Html {
    let canvas = use_node_ref();
    let container = use_node_ref();

    use_animation(
        "HeroGlobe:init",
        canvas.clone(),
        container.clone(),
        AnimationOptions {
            fps: SCENE_FPS,
            activation: Activation::OnMount,
            pointer: PointerSource::Window,
            pause_off_screen: true,
            enabled: true,
        },
        HeroGlobe::new,
    );

    let get_in_touch = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Contact.anchor()));
    let to_about = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::About.anchor()));

    html! {
        <section id={SectionId::Home.anchor()} ref={container} class="hero">
            <canvas ref={canvas} class="hero-canvas" aria-hidden="true"></canvas>
            <div class="container hero-content">
                <h1 class="hero-title">{OWNER_NAME}</h1>
                <p class="hero-role">{OWNER_ROLE}</p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" onclick={get_in_touch}>
                        {"Get in Touch"}
                    </button>
                    <a class="btn btn-outline btn-lg" href={RESUME_URL} target="_blank" rel="noopener noreferrer">
                        {"Download Resume"}
                    </a>
                </div>
            </div>
            <button class="hero-scroll" onclick={to_about} aria-label="Scroll to About">
                <span class="hero-arrow">{"↓"}</span>
            </button>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: linear-gradient(to bottom, var(--background), var(--muted));
                }
                .hero-canvas {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    pointer-events: none;
                }
                .hero-content {
                    position: relative;
                    text-align: center;
                    padding: 3rem 1rem;
                    animation: heroIn 0.8s ease-out both;
                }
                .hero-title {
                    font-size: clamp(2.25rem, 6vw, 3.75rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(to right, var(--primary), color-mix(in srgb, var(--primary) 60%, transparent));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-role {
                    font-size: clamp(1.25rem, 3vw, 1.5rem);
                    color: var(--muted-foreground);
                    margin-bottom: 2rem;
                }
                .hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .hero-scroll {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: none;
                    border: none;
                    color: var(--foreground);
                    font-size: 1.5rem;
                    cursor: pointer;
                    opacity: 0;
                    animation: fadeIn 1s ease 1s forwards;
                }
                .hero-arrow {
                    display: inline-block;
                    animation: bounce 1s infinite;
                }
                @keyframes heroIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes fadeIn {
                    to { opacity: 1; }
                }
                @keyframes bounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: translateY(0); }
                }
                "#}
            </style>
        </section>
    }
}
