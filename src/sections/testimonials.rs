use yew::prelude::*;

use crate::components::reveal::{stagger, Reveal};
use crate::content::{SectionId, TESTIMONIALS};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id={SectionId::Testimonials.anchor()} class="section">
            <div class="container">
                <Reveal>
                    <h2 class="section-title gradient-title">{"Client Testimonials"}</h2>
                    <div class="testimonials-grid">
                        {
                            TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                                <Reveal key={testimonial.name} delay_ms={stagger(index, 200)} class="card testimonial-card">
                                    <div class="testimonial-author">
                                        <img class="avatar" src={testimonial.image} alt={testimonial.name} loading="lazy" />
                                        <div>
                                            <h3>{testimonial.name}</h3>
                                            <p class="muted">{testimonial.role}</p>
                                        </div>
                                    </div>
                                    <blockquote>{format!("\"{}\"", testimonial.content)}</blockquote>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .gradient-title {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    background: linear-gradient(to right, var(--primary), color-mix(in srgb, var(--primary) 60%, transparent));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .testimonial-card {
                    border-radius: 12px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .testimonial-card:hover {
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .testimonial-author h3 {
                    font-weight: 600;
                }
                .testimonial-author .muted {
                    font-size: 0.875rem;
                }
                .avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    object-fit: cover;
                }
                "#}
            </style>
        </section>
    }
}
