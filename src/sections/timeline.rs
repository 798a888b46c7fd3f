use yew::prelude::*;

use crate::components::reveal::{stagger, Direction, Reveal};
use crate::config::SCENE_FPS;
use crate::content::{SectionId, CAREER_MILESTONES};
use crate::visual::path::TimelinePath;
use crate::visual::{use_animation, Activation, AnimationOptions, PointerSource};

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let canvas = use_node_ref();
    let container = use_node_ref();

    use_animation(
        "TimelinePath:init",
        canvas.clone(),
        container.clone(),
        AnimationOptions {
            fps: SCENE_FPS,
            activation: Activation::WhenVisible,
            pointer: PointerSource::Container,
            pause_off_screen: true,
            enabled: true,
        },
        |surface| TimelinePath::new(surface, CAREER_MILESTONES.len()),
    );

    html! {
        <section id={SectionId::Timeline.anchor()} ref={container} class="section timeline">
            <canvas ref={canvas} class="section-canvas" aria-hidden="true"></canvas>
            <div class="container">
                <Reveal>
                    <h2 class="section-title">{"Career Journey"}</h2>
                    <div class="timeline-list">
                        {
                            CAREER_MILESTONES.iter().enumerate().map(|(index, milestone)| html! {
                                <Reveal
                                    key={milestone.year}
                                    direction={Direction::alternate(index)}
                                    delay_ms={stagger(index, 100)}
                                    class={classes!("timeline-row", (index % 2 == 1).then(|| "reverse"))}
                                >
                                    <div class="timeline-card">
                                        <h3 class="timeline-year">{milestone.year}</h3>
                                        <h4 class="timeline-role">{milestone.title}</h4>
                                        <p class="muted">{milestone.company}</p>
                                        <p class="timeline-description">{milestone.description}</p>
                                        <div class="badges">
                                            { for milestone.tech.iter().map(|tech| html! {
                                                <span key={*tech} class="badge">{*tech}</span>
                                            }) }
                                        </div>
                                    </div>
                                    <div class="timeline-spacer"></div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .timeline {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                }
                .timeline .container {
                    position: relative;
                    z-index: 1;
                }
                .timeline-list {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .timeline-row {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .timeline-row.reverse {
                    flex-direction: row-reverse;
                }
                .timeline-card {
                    flex: 1;
                    padding: 1.5rem;
                    border-radius: 8px;
                    background: color-mix(in srgb, var(--background) 80%, transparent);
                    backdrop-filter: blur(4px);
                    transition: background 0.3s ease;
                }
                .timeline-card:hover {
                    background: color-mix(in srgb, var(--background) 95%, transparent);
                }
                .timeline-year {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .timeline-role {
                    font-size: 1.25rem;
                    color: var(--primary);
                    margin-bottom: 0.25rem;
                }
                .timeline-description {
                    margin: 0.5rem 0 1rem;
                }
                .timeline-spacer {
                    flex: 1;
                }
                @media (max-width: 768px) {
                    .timeline-row,
                    .timeline-row.reverse {
                        flex-direction: column;
                    }
                    .timeline-spacer {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
