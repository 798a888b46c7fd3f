use yew::prelude::*;

use crate::components::reveal::{stagger, Direction, Reveal};
use crate::config::SCENE_FPS;
use crate::content::{SectionId, SKILLS};
use crate::visual::orbs::SkillOrbs;
use crate::visual::{use_animation, Activation, AnimationOptions, PointerSource};

#[function_component(Skills)]
pub fn skills() -> Html {
    let canvas = use_node_ref();
    let container = use_node_ref();

    use_animation(
        "SkillOrbs:init",
        canvas.clone(),
        container.clone(),
        AnimationOptions {
            fps: SCENE_FPS,
            activation: Activation::WhenVisible,
            pointer: PointerSource::Container,
            pause_off_screen: true,
            enabled: true,
        },
        |surface| {
            let levels: Vec<u8> = SKILLS.iter().map(|skill| skill.level).collect();
            SkillOrbs::new(surface, &levels)
        },
    );

    html! {
        <section id={SectionId::Skills.anchor()} ref={container} class="section section-muted skills">
            <canvas ref={canvas} class="section-canvas" aria-hidden="true"></canvas>
            <div class="container">
                <Reveal>
                    <h2 class="section-title">{"Skills"}</h2>
                    <div class="skills-grid">
                        {
                            SKILLS.iter().enumerate().map(|(index, skill)| html! {
                                <Reveal key={skill.name} direction={Direction::Left} delay_ms={stagger(index, 100)}>
                                    <div class="skill-header">
                                        <span class="skill-name">{skill.name}</span>
                                        <span class="muted skill-level">{format!("{}%", skill.level)}</span>
                                    </div>
                                    <div
                                        class="progress"
                                        role="progressbar"
                                        aria-valuemin="0"
                                        aria-valuemax="100"
                                        aria-valuenow={skill.level.to_string()}
                                    >
                                        <div class="progress-bar" style={format!("width: {}%", skill.level.min(100))}></div>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .skills {
                    position: relative;
                    overflow: hidden;
                }
                .skills .container {
                    position: relative;
                }
                .skills-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .skill-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 0.5rem;
                }
                .skill-name {
                    font-weight: 500;
                }
                .skill-level {
                    font-size: 0.875rem;
                }
                .progress {
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: color-mix(in srgb, var(--primary) 20%, transparent);
                    overflow: hidden;
                }
                .progress-bar {
                    height: 100%;
                    background: var(--primary);
                    transition: width 0.6s ease;
                }
                "#}
            </style>
        </section>
    }
}
