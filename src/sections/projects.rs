use log::warn;
use web_sys::{window, Event, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::{stagger, Reveal};
use crate::content::{SectionId, PROJECTS};
use crate::visual::math::scroll_progress;

/// Starting tilt in degrees; cards alternate sides.
const MAX_TILT: f64 = 15.0;

/// `rotateY` a card starts from before the section scrolls in.
pub fn tilt_start(index: usize) -> f64 {
    if index % 2 == 0 {
        -MAX_TILT
    } else {
        MAX_TILT
    }
}

fn progress_value(progress: f64) -> String {
    format!("{:.3}", progress.clamp(0.0, 1.0))
}

/// Writes the section's scroll progress as `--progress` on the section
/// itself; the cards inherit it.
fn update_progress(container: &NodeRef) {
    let Some(section) = container.cast::<HtmlElement>() else {
        return;
    };
    let viewport_height = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = section.get_bounding_client_rect();
    let progress = scroll_progress(rect.top(), rect.height(), viewport_height);
    if let Err(err) = section.style().set_property("--progress", &progress_value(progress)) {
        warn!("Could not update project tilt: {:?}", err);
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let container = use_node_ref();

    // Listeners only touch the style; scrolling never re-renders the cards.
    {
        let container = container.clone();
        use_event_with_window("scroll", move |_: Event| update_progress(&container));
    }
    {
        let container = container.clone();
        use_event_with_window("resize", move |_: Event| update_progress(&container));
    }
    {
        let container = container.clone();
        use_effect_with_deps(
            move |_| {
                update_progress(&container);
                || ()
            },
            (),
        );
    }

    html! {
        <section id={SectionId::Projects.anchor()} ref={container} class="section projects">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">{"Projects"}</h2>
                    <div class="projects-grid">
                        {
                            PROJECTS.iter().enumerate().map(|(index, project)| html! {
                                <Reveal key={project.title} delay_ms={stagger(index, 100)} class="project-frame">
                                    <div
                                        class="project-tilt"
                                        style={format!("--tilt-start: {}deg", tilt_start(index))}
                                    >
                                        <div class="card project-card">
                                            <div class="project-media">
                                                <img src={project.image} alt={project.image_alt} loading="lazy" />
                                                <div class="project-shade"></div>
                                            </div>
                                            <h3 class="project-title">{project.title}</h3>
                                            <p class="muted">{project.description}</p>
                                            <div class="badges">
                                                { for project.tags.iter().map(|tag| html! {
                                                    <span key={*tag} class="badge">{*tag}</span>
                                                }) }
                                            </div>
                                        </div>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .projects {
                    position: relative;
                }
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .project-frame {
                    perspective: 1000px;
                }
                .project-tilt {
                    transform: rotateY(calc(var(--tilt-start) * (1 - var(--progress, 0))));
                    transition: transform 0.3s ease;
                }
                .project-tilt:hover {
                    transform: rotateY(0deg) scale(1.05);
                }
                .project-card {
                    overflow: hidden;
                    padding: 0 0 1.5rem;
                }
                .project-card > :not(.project-media) {
                    padding: 0 1.5rem;
                }
                .project-media {
                    position: relative;
                    overflow: hidden;
                    margin-bottom: 1rem;
                }
                .project-media img {
                    display: block;
                    width: 100%;
                    height: 12rem;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .project-media img:hover {
                    transform: scale(1.1);
                }
                .project-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, color-mix(in srgb, var(--background) 80%, transparent), transparent);
                    pointer-events: none;
                }
                .project-title {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .project-card .muted {
                    margin-bottom: 1rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // What `.project-tilt` computes from `--tilt-start` and `--progress`.
    fn card_tilt(index: usize, progress: f64) -> f64 {
        let progress: f64 = progress_value(progress).parse().unwrap();
        tilt_start(index) * (1.0 - progress)
    }

    #[test]
    fn cards_tilt_to_alternate_sides() {
        assert_eq!(card_tilt(0, 0.0), -15.0);
        assert_eq!(card_tilt(1, 0.0), 15.0);
    }

    #[test]
    fn start_angle_matches_untouched_tilt() {
        for index in 0..4 {
            assert_eq!(tilt_start(index), card_tilt(index, 0.0));
        }
    }

    #[test]
    fn progress_is_written_clamped() {
        assert_eq!(progress_value(0.5), "0.500");
        assert_eq!(progress_value(-2.0), "0.000");
        assert_eq!(progress_value(7.0), "1.000");
    }

    #[test]
    fn tilt_flattens_with_progress() {
        assert_eq!(card_tilt(0, 0.5), -7.5);
        assert_eq!(card_tilt(3, 1.0), 0.0);
        assert_eq!(card_tilt(2, 4.0), card_tilt(2, 1.0));
    }
}
