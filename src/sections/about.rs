use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{SectionId, ABOUT_PARAGRAPHS, EDUCATION, EXPERIENCE};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={SectionId::About.anchor()} class="section">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">{"About Me"}</h2>
                    <div class="about-grid">
                        <div class="card about-card">
                            { for ABOUT_PARAGRAPHS.iter().map(|p| html! { <p>{*p}</p> }) }
                        </div>
                        <div class="about-facts">
                            <div>
                                <h3>{"Experience"}</h3>
                                { for EXPERIENCE.iter().map(|line| html! { <p class="muted">{*line}</p> }) }
                            </div>
                            <div>
                                <h3>{"Education"}</h3>
                                { for EDUCATION.iter().map(|line| html! { <p class="muted">{*line}</p> }) }
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    align-items: center;
                }
                .about-card p {
                    font-size: 1.125rem;
                    line-height: 1.7;
                }
                .about-card p + p {
                    margin-top: 1rem;
                }
                .about-facts {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .about-facts h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                "#}
            </style>
        </section>
    }
}
